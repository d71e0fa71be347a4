//! Text embedding via fastembed.
//!
//! Why this exists:
//! - Both embedding tools (argument-driven and fixed-path) need the same
//!   resolve/load/embed sequence, so it lives here once.
//! - Model identifiers arrive as strings from the command line; we resolve
//!   them against fastembed's supported-model catalog up front so an unknown
//!   identifier fails with a useful message instead of a download error.

use std::io::BufWriter;

use anyhow::{Context, Result, bail};
use fastembed::{EmbeddingModel, InitOptions, ModelInfo, TextEmbedding};
use tracing::debug;

use crate::vector::write_vector;

/// Model used when the caller doesn't name one (the fixed-path tool).
pub const DEFAULT_MODEL: &str = "nomic-ai/nomic-embed-text-v1.5";

/// Fixed input path read by the `embedding` binary.
pub const INPUT_PATH: &str = ".embedding-input.txt";

/// Fixed output path written by the `embedding` binary.
pub const OUTPUT_PATH: &str = ".embedding-output.json";

/// Resolve a model identifier against fastembed's supported-model catalog.
///
/// Matching is case-insensitive on the model code (e.g.
/// `nomic-ai/nomic-embed-text-v1.5`). Unknown identifiers produce an error
/// listing every supported code.
pub fn resolve_model(model_id: &str) -> Result<ModelInfo<EmbeddingModel>> {
    let models = TextEmbedding::list_supported_models();

    if let Some(info) = models
        .iter()
        .find(|info| info.model_code.eq_ignore_ascii_case(model_id))
    {
        return Ok(info.clone());
    }

    let supported: Vec<&str> = models.iter().map(|info| info.model_code.as_str()).collect();
    bail!(
        "unknown embedding model '{model_id}' (supported: {})",
        supported.join(", ")
    );
}

/// A loaded embedding model.
///
/// Loading is the expensive step (first use downloads the ONNX weights), so
/// callers construct once and embed as many texts as they need.
pub struct Embedder {
    model: TextEmbedding,
    info: ModelInfo<EmbeddingModel>,
}

impl Embedder {
    /// Resolve and load the named embedding model.
    pub fn load(model_id: &str) -> Result<Self> {
        let info = resolve_model(model_id)?;
        debug!(model = %info.model_code, dim = info.dim, "loading embedding model");

        let options = InitOptions::new(info.model.clone()).with_show_download_progress(false);
        let model = TextEmbedding::try_new(options)
            .with_context(|| format!("failed to load embedding model '{}'", info.model_code))?;

        Ok(Self { model, info })
    }

    /// Load the default model.
    pub fn load_default() -> Result<Self> {
        Self::load(DEFAULT_MODEL)
    }

    /// The embedding dimension of the loaded model.
    pub fn dimension(&self) -> usize {
        self.info.dim
    }

    /// The canonical model code of the loaded model.
    pub fn model_code(&self) -> &str {
        &self.info.model_code
    }

    /// Embed a single text and return its pooled, normalized vector.
    pub fn embed_one(&mut self, text: &str) -> Result<Vec<f32>> {
        let mut vectors = self
            .model
            .embed(vec![text.to_string()], None)
            .with_context(|| format!("embedding inference failed for '{}'", self.info.model_code))?;

        match vectors.pop() {
            Some(vector) => Ok(vector),
            None => bail!("embedding model returned no vector"),
        }
    }
}

/// The fixed-path flow used by the `embedding` binary.
///
/// Reads UTF-8 text from [`INPUT_PATH`], embeds it with the default model,
/// and writes the vector to [`OUTPUT_PATH`] as a JSON array of floats.
pub fn run_fixed_paths() -> Result<()> {
    let text = std::fs::read_to_string(INPUT_PATH)
        .with_context(|| format!("failed to read '{INPUT_PATH}'"))?;

    let mut embedder = Embedder::load_default()?;
    let vector = embedder.embed_one(&text)?;

    let file = std::fs::File::create(OUTPUT_PATH)
        .with_context(|| format!("failed to create '{OUTPUT_PATH}'"))?;
    write_vector(BufWriter::new(file), &vector)?;

    Ok(())
}

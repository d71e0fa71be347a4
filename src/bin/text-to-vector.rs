use std::io::{self, BufWriter};

use anyhow::Result;
use clap::Parser;

use ingest::cli::{parse_or_usage, require_non_empty};
use ingest::embedding::Embedder;
use ingest::vector::write_vector;

fn main() -> Result<()> {
    ingest::logging::init();

    let params: Params = parse_or_usage();
    let content = require_non_empty::<Params>(&params.content);
    let model = require_non_empty::<Params>(&params.model);

    let mut embedder = Embedder::load(model)?;
    let vector = embedder.embed_one(content)?;

    let stdout = io::stdout();
    let writer = BufWriter::new(stdout.lock());
    write_vector(writer, &vector)?;
    println!();

    Ok(())
}

#[derive(Parser, Debug)]
#[command(name = "text-to-vector")]
#[command(about = "Embed a text argument and print the vector as a JSON array of floats")]
struct Params {
    /// Text to embed.
    content: String,

    /// Embedding model identifier (e.g. nomic-ai/nomic-embed-text-v1.5).
    model: String,
}

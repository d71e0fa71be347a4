//! Vision-language generation via a local Ollama server.
//!
//! Why this exists:
//! - Image and video description both reduce to the same call: base64 images
//!   plus a prompt, posted to Ollama's `/api/generate` endpoint.
//! - Video inputs are handled by sampling frames with the system `ffmpeg`
//!   binary first; the model itself only ever sees still images.
//!
//! The server address comes from `OLLAMA_HOST` when set, otherwise the
//! standard local default. Requests are blocking and unbounded in time, since
//! generation on large models can take minutes.

use std::path::Path;
use std::process::Command;

use anyhow::{Context, Result, bail};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Default Ollama server address, used when `OLLAMA_HOST` is unset.
pub const DEFAULT_HOST: &str = "http://localhost:11434";

/// Frame sampling rate for video inputs (frames per second).
pub const VIDEO_FRAMES_PER_SECOND: u32 = 1;

/// Width video frames are scaled to before being sent to the model.
pub const VIDEO_FRAME_WIDTH: u32 = 224;

/// Upper bound on frames sent for a single video, to keep requests bounded.
pub const MAX_VIDEO_FRAMES: u32 = 32;

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    images: &'a [String],
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    response: String,
}

/// A blocking client for Ollama's generate endpoint.
pub struct VisionClient {
    http: reqwest::blocking::Client,
    host: String,
}

impl VisionClient {
    /// Build a client pointed at `OLLAMA_HOST` (or the local default).
    pub fn new() -> Result<Self> {
        let host = std::env::var("OLLAMA_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());

        // No request timeout: model loading plus generation can legitimately
        // take minutes on first use.
        let http = reqwest::blocking::Client::builder()
            .timeout(None)
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self { http, host })
    }

    /// Describe a single image file with the given model and prompt.
    pub fn describe_image(&self, path: &Path, model: &str, prompt: &str) -> Result<String> {
        let image = encode_image_file(path)?;
        self.generate(model, prompt, &[image])
    }

    /// Describe a video file with the given model and prompt.
    ///
    /// Frames are sampled via ffmpeg and sent as a set of still images. An
    /// input that yields no frames at all (audio-only files, corrupt data) is
    /// an explicit error rather than an empty generation.
    pub fn describe_video(&self, path: &Path, model: &str, prompt: &str) -> Result<String> {
        let frames = extract_video_frames(path)?;
        if frames.is_empty() {
            bail!(
                "no video or image frames could be extracted from '{}'",
                path.display()
            );
        }

        debug!(frames = frames.len(), "sending sampled video frames");
        self.generate(model, prompt, &frames)
    }

    /// Post a generation request and return the response text.
    pub fn generate(&self, model: &str, prompt: &str, images: &[String]) -> Result<String> {
        let url = api_url(&self.host);
        let request = GenerateRequest {
            model,
            prompt,
            images,
            stream: false,
        };

        let response = self
            .http
            .post(&url)
            .json(&request)
            .send()
            .with_context(|| format!("failed to reach ollama at {url}"))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            bail!("ollama returned {status} for model '{model}': {body}");
        }

        let parsed: GenerateResponse = response
            .json()
            .context("failed to parse ollama generate response")?;

        Ok(parsed.response)
    }
}

fn api_url(host: &str) -> String {
    format!("{}/api/generate", host.trim_end_matches('/'))
}

/// Read an image file and return it base64-encoded.
fn encode_image_file(path: &Path) -> Result<String> {
    let bytes =
        std::fs::read(path).with_context(|| format!("failed to read '{}'", path.display()))?;
    Ok(BASE64.encode(bytes))
}

/// Sample frames from a video file and return them base64-encoded.
///
/// Sampling policy mirrors the host pipeline's defaults: one frame per
/// second, scaled down to [`VIDEO_FRAME_WIDTH`], capped at
/// [`MAX_VIDEO_FRAMES`]. A still image input yields exactly one frame, so it
/// flows through the same path.
pub fn extract_video_frames(path: &Path) -> Result<Vec<String>> {
    let dir = tempfile::tempdir().context("failed to create temp dir for frames")?;
    let pattern = dir.path().join("frame-%04d.jpg");

    let status = Command::new("ffmpeg")
        .arg("-hide_banner")
        .args(["-loglevel", "error"])
        .arg("-i")
        .arg(path)
        .args([
            "-vf",
            &format!("fps={VIDEO_FRAMES_PER_SECOND},scale={VIDEO_FRAME_WIDTH}:-2"),
        ])
        .args(["-frames:v", &MAX_VIDEO_FRAMES.to_string()])
        .arg(&pattern)
        .status()
        .context("failed to run ffmpeg (is it installed and on PATH?)")?;

    if !status.success() {
        // ffmpeg exits non-zero for inputs with no video stream. The caller
        // decides whether zero frames is fatal, so only log here.
        warn!(input = %path.display(), code = ?status.code(), "ffmpeg exited non-zero");
    }

    let mut frame_paths: Vec<_> = std::fs::read_dir(dir.path())
        .context("failed to list extracted frames")?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.extension().and_then(|e| e.to_str()) == Some("jpg"))
        .collect();
    frame_paths.sort();

    let mut frames = Vec::with_capacity(frame_paths.len());
    for frame_path in frame_paths {
        frames.push(encode_image_file(&frame_path)?);
    }

    Ok(frames)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_url_handles_trailing_slash() {
        assert_eq!(
            api_url("http://localhost:11434/"),
            "http://localhost:11434/api/generate"
        );
        assert_eq!(api_url("http://host:1"), "http://host:1/api/generate");
    }

    #[test]
    fn generate_request_serializes_expected_shape() -> Result<()> {
        let images = vec!["aGVsbG8=".to_string()];
        let request = GenerateRequest {
            model: "llava",
            prompt: "describe this",
            images: &images,
            stream: false,
        };

        let json = serde_json::to_value(&request)?;
        assert_eq!(json["model"], "llava");
        assert_eq!(json["stream"], false);
        assert_eq!(json["images"][0], "aGVsbG8=");
        Ok(())
    }

    #[test]
    fn encode_image_file_is_plain_base64() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("pixel.bin");
        std::fs::write(&path, [0xFF, 0x00, 0xAB])?;

        let encoded = encode_image_file(&path)?;
        assert_eq!(BASE64.decode(&encoded)?, vec![0xFF, 0x00, 0xAB]);
        Ok(())
    }
}

use std::path::Path;

use anyhow::Result;
use clap::Parser;

use ingest::cli::{parse_or_usage, require_non_empty};
use ingest::vision::VisionClient;

fn main() -> Result<()> {
    ingest::logging::init();

    let params: Params = parse_or_usage();
    let input = require_non_empty::<Params>(&params.input_file);
    let model = require_non_empty::<Params>(&params.model);
    let prompt = require_non_empty::<Params>(&params.prompt);

    let client = VisionClient::new()?;
    let output = client.describe_video(Path::new(input), model, prompt)?;
    println!("{output}");

    Ok(())
}

#[derive(Parser, Debug)]
#[command(name = "video-to-text")]
#[command(about = "Describe a video with a vision-language model and print the text")]
struct Params {
    /// Video file to describe (frames are sampled at 1 fps).
    input_file: String,

    /// Vision-language model name (an Ollama model, e.g. llava).
    model: String,

    /// Free-text prompt sent along with the sampled frames.
    prompt: String,
}

use std::path::Path;

use anyhow::Result;
use clap::Parser;

use ingest::audio::load_mono_16k;
use ingest::cli::{parse_or_usage, require_non_empty};
use ingest::speech::{load_model, transcribe};
use ingest::transcript::render_transcript;

fn main() -> Result<()> {
    ingest::logging::init();

    let params: Params = parse_or_usage();
    let input = require_non_empty::<Params>(&params.input_file);
    let model = require_non_empty::<Params>(&params.model);

    let ctx = load_model(model)?;
    let samples = load_mono_16k(Path::new(input))?;
    let segments = transcribe(&ctx, &samples)?;

    println!("{}", render_transcript(&segments));
    Ok(())
}

#[derive(Parser, Debug)]
#[command(name = "audio-to-text")]
#[command(about = "Transcribe an audio file and print the text, one segment per line")]
struct Params {
    /// Audio file to transcribe.
    input_file: String,

    /// Path to a whisper.cpp model file.
    model: String,
}

use anyhow::{Context, Result};
use clap::Parser;

use ingest::cli::{parse_or_usage, require_non_empty};
use ingest::markdown::html_to_markdown;

fn main() -> Result<()> {
    ingest::logging::init();

    let params: Params = parse_or_usage();
    let input = require_non_empty::<Params>(&params.input_file);

    let html =
        std::fs::read_to_string(input).with_context(|| format!("failed to read '{input}'"))?;
    println!("{}", html_to_markdown(&html));

    Ok(())
}

#[derive(Parser, Debug)]
#[command(name = "html-to-markdown")]
#[command(about = "Convert an HTML file to Markdown and print it")]
struct Params {
    /// HTML file to convert.
    input_file: String,
}

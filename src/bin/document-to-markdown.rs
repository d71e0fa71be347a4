use std::path::Path;

use anyhow::Result;
use clap::Parser;

use ingest::cli::{parse_or_usage, require_non_empty};
use ingest::markdown::document_to_markdown;

fn main() -> Result<()> {
    ingest::logging::init();

    let params: Params = parse_or_usage();
    let input = require_non_empty::<Params>(&params.input_file);

    let markdown = document_to_markdown(Path::new(input))?;
    println!("{markdown}");

    Ok(())
}

#[derive(Parser, Debug)]
#[command(name = "document-to-markdown")]
#[command(about = "Convert a document (html, pdf, csv, tsv, md, txt) to Markdown and print it")]
struct Params {
    /// Document to convert.
    input_file: String,
}

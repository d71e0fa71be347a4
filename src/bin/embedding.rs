use anyhow::Result;
use clap::Parser;

use ingest::cli::parse_or_usage;
use ingest::embedding;

fn main() -> Result<()> {
    ingest::logging::init();

    // No arguments: input and output paths are fixed by contract with the
    // host process. Stray arguments are a usage error.
    let _params: Params = parse_or_usage();

    embedding::run_fixed_paths()?;
    Ok(())
}

#[derive(Parser, Debug)]
#[command(name = "embedding")]
#[command(about = "Embed the text in .embedding-input.txt and write the vector \
                   to .embedding-output.json")]
struct Params {}

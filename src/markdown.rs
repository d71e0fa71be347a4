//! Document and HTML conversion into Markdown.
//!
//! Responsibilities:
//! - HTML to Markdown (the whole job for `html-to-markdown`)
//! - extension-based dispatch for `document-to-markdown`
//!
//! The dispatch covers the source formats the host pipeline actually feeds
//! us: HTML pages, PDFs, delimited tables, and text that is already Markdown
//! or close enough to pass through.

use std::path::Path;

use anyhow::{Context, Result, bail};

/// Convert an HTML string to Markdown.
pub fn html_to_markdown(html: &str) -> String {
    html2md::parse_html(html)
}

/// Convert a document file to Markdown based on its extension.
///
/// Supported:
/// - `html`, `htm`: HTML conversion
/// - `pdf`: text extraction
/// - `csv`, `tsv`: Markdown table
/// - `md`, `markdown`, `txt`: passthrough
pub fn document_to_markdown(path: &Path) -> Result<String> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "html" | "htm" => {
            let html = read_utf8(path)?;
            Ok(html_to_markdown(&html))
        }
        "pdf" => pdf_to_markdown(path),
        "csv" => delimited_to_markdown_table(path, b','),
        "tsv" => delimited_to_markdown_table(path, b'\t'),
        "md" | "markdown" | "txt" => read_utf8(path),
        other => bail!(
            "unsupported document extension '{other}' for '{}' \
             (supported: html, htm, pdf, csv, tsv, md, markdown, txt)",
            path.display()
        ),
    }
}

fn read_utf8(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("failed to read '{}'", path.display()))
}

fn pdf_to_markdown(path: &Path) -> Result<String> {
    pdf_extract::extract_text(path)
        .with_context(|| format!("failed to extract text from '{}'", path.display()))
}

/// Render a delimited file (CSV/TSV) as a Markdown table.
///
/// The first record is treated as the header row. Rows shorter than the
/// header are padded with empty cells so the table stays rectangular.
fn delimited_to_markdown_table(path: &Path, delimiter: u8) -> Result<String> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("failed to open '{}'", path.display()))?;

    let mut rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.context("failed to parse delimited record")?;
        rows.push(record.iter().map(markdown_table_cell).collect());
    }

    Ok(render_markdown_table(&rows))
}

/// Escape a raw cell value for use inside a Markdown table.
fn markdown_table_cell(raw: &str) -> String {
    raw.replace('\n', " ").replace('|', "\\|")
}

fn render_markdown_table(rows: &[Vec<String>]) -> String {
    let Some(header) = rows.first() else {
        return String::new();
    };

    let width = header.len().max(1);
    let mut out = String::new();

    out.push_str(&render_markdown_row(header, width));
    out.push('\n');

    // Separator row required between header and body.
    out.push('|');
    for _ in 0..width {
        out.push_str(" --- |");
    }

    for row in &rows[1..] {
        out.push('\n');
        out.push_str(&render_markdown_row(row, width));
    }

    out
}

fn render_markdown_row(cells: &[String], width: usize) -> String {
    let mut out = String::from("|");
    for i in 0..width {
        let cell = cells.get(i).map(String::as_str).unwrap_or("");
        out.push(' ');
        out.push_str(cell);
        out.push_str(" |");
    }
    out
}

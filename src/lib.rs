//! `ingest` — small, focused extraction tools that turn text, audio,
//! documents, and media into plain text or embedding vectors.
//!
//! This crate provides:
//! - Text embedding via fastembed (JSON float-array output)
//! - Audio transcription via whisper.cpp
//! - Document/HTML-to-Markdown conversion
//! - Image/video description via a local Ollama server
//!
//! Each concern ships as its own feature-gated binary; every invocation is a
//! single synchronous pass with no state shared between runs. The library
//! exists so the binaries stay thin and the glue stays testable.

// Crate-wide error type.
pub mod error;

// Output serialization for embedding vectors.
pub mod vector;

// Transcript segment data structures and rendering.
pub mod transcript;

// Document and HTML conversion to Markdown.
pub mod markdown;

// Text embedding model resolution and inference.
#[cfg(feature = "embed")]
pub mod embedding;

// Audio decoding into whisper's expected sample format.
#[cfg(feature = "speech")]
pub mod audio;

// Speech recognition via whisper.cpp.
#[cfg(feature = "speech")]
pub mod speech;

// Vision-language generation via Ollama.
#[cfg(feature = "vision")]
pub mod vision;

// CLI argument handling shared by the binaries.
#[cfg(feature = "cli")]
pub mod cli;

// Logging configuration and control.
#[cfg(feature = "logging")]
pub mod logging;

pub use error::{Error, Result};

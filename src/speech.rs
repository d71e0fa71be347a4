//! Speech recognition via whisper.cpp.
//!
//! This module owns the whisper-rs glue: model loading, parameter setup, and
//! converting whisper's segments into [`crate::transcript::Segment`]s. Audio
//! decoding lives in [`crate::audio`]; output shaping lives in
//! [`crate::transcript`].

use std::os::raw::{c_char, c_void};
use std::sync::Once;

use anyhow::{Context, Result};
use tracing::debug;
use whisper_rs::{
    FullParams, SamplingStrategy, WhisperContext, WhisperContextParameters, WhisperSegment,
    WhisperState,
};

use crate::transcript::Segment;

/// A no-op log callback used to silence logs emitted by whisper.cpp.
unsafe extern "C" fn whisper_log_callback(
    _level: u32,
    _c_msg: *const c_char,
    _user_data: *mut c_void,
) {
    // Intentionally left empty.
}

/// Ensure whisper logging is configured exactly once for the lifetime of the process.
///
/// whisper.cpp logs straight to stderr and is very noisy; our binaries fully
/// control what gets printed.
pub fn init_whisper_logging() {
    static INIT: Once = Once::new();

    INIT.call_once(|| unsafe {
        whisper_rs::set_log_callback(Some(whisper_log_callback), std::ptr::null_mut());
    });
}

/// Load a whisper.cpp model from disk and return an initialized context.
pub fn load_model(model_path: &str) -> Result<WhisperContext> {
    init_whisper_logging();
    debug!(model = model_path, "loading whisper model");

    let ctx_params = WhisperContextParameters::default();
    let ctx = WhisperContext::new_with_params(model_path, ctx_params)
        .with_context(|| format!("failed to load model from path: {model_path}"))?;

    Ok(ctx)
}

/// Run a full recognition pass over mono 16 kHz samples and collect segments.
pub fn transcribe(ctx: &WhisperContext, samples: &[f32]) -> Result<Vec<Segment>> {
    let state = run_full(ctx, samples)?;

    let mut segments = Vec::new();
    for whisper_segment in state.as_iter() {
        segments.push(to_segment(whisper_segment)?);
    }

    Ok(segments)
}

fn to_segment(segment: WhisperSegment) -> Result<Segment> {
    let text = segment
        .to_str()
        .context("failed to get segment text")?
        .to_owned();

    Ok(Segment {
        // whisper timestamps are centiseconds
        start_seconds: segment.start_timestamp() as f32 / 100.0,
        end_seconds: segment.end_timestamp() as f32 / 100.0,
        text,
    })
}

fn build_full_params() -> FullParams<'static, 'static> {
    let mut params = FullParams::new(SamplingStrategy::BeamSearch {
        beam_size: 5,
        patience: 1.0,
    });

    params.set_n_threads(num_cpus::get() as i32);
    params.set_translate(false);
    params.set_language(None);
    params.set_no_context(true);
    params.set_single_segment(false);

    params.set_print_progress(false);
    params.set_print_special(false);
    params.set_print_realtime(false);
    params.set_print_timestamps(false);

    params
}

fn run_full(ctx: &WhisperContext, samples: &[f32]) -> Result<WhisperState> {
    let params = build_full_params();

    let mut state = ctx
        .create_state()
        .context("failed to create whisper state")?;

    state
        .full(params, samples)
        .context("failed to run whisper full()")?;

    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whisper_logging_init_is_idempotent() {
        init_whisper_logging();
        init_whisper_logging();
    }
}

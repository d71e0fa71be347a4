//! Audio decoding for speech recognition.
//!
//! Whisper expects mono `f32` samples at 16 kHz. This module turns an audio
//! file in any container/codec Symphonia supports into exactly that, in one
//! pass:
//!
//! 1. probe the container and pick the first decodable audio track
//! 2. decode packets into interleaved `f32` PCM
//! 3. downmix to mono (equal-weight channel average)
//! 4. resample to 16 kHz when the source rate differs
//!
//! Each tool invocation processes one file start to finish, so the whole
//! buffer lives in memory; there is no streaming path here.

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result, anyhow, bail};
use rubato::{Resampler, SincFixedIn, WindowFunction};
use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::{CODEC_TYPE_NULL, DecoderOptions};
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::{MediaSourceStream, MediaSourceStreamOptions};
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

/// The sample rate whisper.cpp expects (Hz).
pub const WHISPER_SAMPLE_RATE: u32 = 16_000;

/// Decode an audio file into mono `f32` samples at 16 kHz.
pub fn load_mono_16k(path: &Path) -> Result<Vec<f32>> {
    let file = File::open(path).with_context(|| format!("failed to open '{}'", path.display()))?;

    let mss_opts = MediaSourceStreamOptions {
        // Symphonia expects a power-of-two buffer > 32KiB for good probing behavior.
        buffer_len: 256 * 1024,
    };
    let mss = MediaSourceStream::new(Box::new(file), mss_opts);

    // The file extension improves probe accuracy for ambiguous containers.
    let mut hint = Hint::new();
    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
        hint.with_extension(ext);
    }

    let format_opts: FormatOptions = Default::default();
    let metadata_opts: MetadataOptions = Default::default();

    let probed = symphonia::default::get_probe()
        .format(&hint, mss, &format_opts, &metadata_opts)
        .map_err(|e| anyhow!(e))
        .with_context(|| format!("failed to probe '{}'", path.display()))?;

    let mut format = probed.format;

    // Track selection policy: first track that looks decodable and has a
    // known sample rate (required for the resampling decision below).
    let track = format
        .tracks()
        .iter()
        .find(|t| t.codec_params.codec != CODEC_TYPE_NULL && t.codec_params.sample_rate.is_some())
        .cloned()
        .ok_or_else(|| anyhow!("no audio track found in '{}'", path.display()))?;

    let decoder_opts: DecoderOptions = Default::default();
    let mut decoder = symphonia::default::get_codecs()
        .make(&track.codec_params, &decoder_opts)
        .map_err(|e| anyhow!(e))
        .context("failed to create decoder for audio track")?;

    let mut sample_buf: Option<SampleBuffer<f32>> = None;
    let mut mono: Vec<f32> = Vec::new();
    let mut src_rate: Option<u32> = None;

    loop {
        let packet = match format.next_packet() {
            Ok(p) => p,
            // Symphonia reports end-of-stream as an IO error.
            Err(SymphoniaError::IoError(_)) => break,
            Err(e) => return Err(anyhow!(e)).context("failed reading packet"),
        };

        if packet.track_id() != track.id {
            continue;
        }

        let decoded = match decoder.decode(&packet) {
            Ok(buf) => buf,
            // Recoverable: corrupted frame, decoding can continue.
            Err(SymphoniaError::DecodeError(_)) => continue,
            Err(SymphoniaError::IoError(_)) => break,
            Err(e) => return Err(anyhow!(e)).context("decoder failure"),
        };

        let spec = *decoded.spec();
        let channels = spec.channels.count();
        if channels == 0 {
            bail!("decoded audio had zero channels");
        }
        src_rate.get_or_insert(spec.rate);

        // Copy decoded PCM into an interleaved f32 scratch buffer.
        let buf = sample_buf
            .get_or_insert_with(|| SampleBuffer::<f32>::new(decoded.capacity() as u64, spec));
        buf.copy_interleaved_ref(decoded);

        downmix_into(&mut mono, buf.samples(), channels);
    }

    let Some(src_rate) = src_rate else {
        // Probing succeeded but no packets decoded; treat as empty audio.
        return Ok(Vec::new());
    };

    resample_to_16k(mono, src_rate)
}

/// Downmix interleaved samples into mono by averaging channels.
fn downmix_into(mono: &mut Vec<f32>, interleaved: &[f32], channels: usize) {
    if channels == 1 {
        mono.extend_from_slice(interleaved);
        return;
    }

    for frame in interleaved.chunks_exact(channels) {
        let sum: f32 = frame.iter().sum();
        mono.push(sum / channels as f32);
    }
}

/// Resample a complete mono buffer to 16 kHz.
///
/// Rubato processes fixed-size input blocks, so the tail is zero-padded up to
/// one block. The padding adds at most a few milliseconds of silence at the
/// end, which whisper ignores.
fn resample_to_16k(mut mono: Vec<f32>, src_rate: u32) -> Result<Vec<f32>> {
    if src_rate == WHISPER_SAMPLE_RATE || mono.is_empty() {
        return Ok(mono);
    }

    let in_block_frames = 2048;
    let mut resampler = SincFixedIn::<f32>::new(
        WHISPER_SAMPLE_RATE as f64 / src_rate as f64,
        2.0,
        rubato::SincInterpolationParameters {
            sinc_len: 256,
            f_cutoff: 0.95,
            interpolation: rubato::SincInterpolationType::Linear,
            oversampling_factor: 256,
            window: WindowFunction::BlackmanHarris2,
        },
        in_block_frames,
        1, // mono
    )
    .map_err(|e| anyhow!(e))
    .context("failed to init resampler")?;

    let in_max = resampler.input_frames_max();
    let rem = mono.len() % in_max;
    if rem != 0 {
        mono.resize(mono.len() + (in_max - rem), 0.0);
    }

    let mut out = Vec::with_capacity(
        (mono.len() as f64 * WHISPER_SAMPLE_RATE as f64 / src_rate as f64) as usize + in_max,
    );

    for block in mono.chunks(in_max) {
        let input = vec![block.to_vec()];
        let mut resampled = resampler
            .process(&input, None)
            .map_err(|e| anyhow!(e))
            .context("resampler process failed")?;

        if resampled.len() != 1 {
            bail!("expected mono output from resampler");
        }
        out.append(&mut resampled[0]);
    }

    Ok(out)
}

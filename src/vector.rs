use std::io::Write;

use crate::Result;

/// Streams an embedding vector to a writer as a single JSON array of floats.
///
/// Design:
/// - We write directly to a `Write` implementation so large vectors never
///   need an intermediate `String`.
/// - The encoder is stateful so we can emit a well-formed array incrementally.
///
/// Example output:
/// ```json
/// [0.0121,-0.0342,0.0077]
/// ```
pub struct VectorEncoder<W: Write> {
    /// The underlying writer we stream JSON into.
    w: W,

    /// Whether we have written the opening `[` of the JSON array.
    started: bool,

    /// Whether the next value will be the first value in the array.
    /// This lets us correctly place commas between values.
    first: bool,

    /// Whether the encoder has been closed.
    /// Once closed, no further writes are allowed.
    closed: bool,
}

impl<W: Write> VectorEncoder<W> {
    pub fn new(w: W) -> Self {
        Self {
            w,
            started: false,
            first: true,
            closed: false,
        }
    }

    /// Write the opening `[` of the JSON array if we have not already done so.
    ///
    /// We defer the opening bracket so that empty output still results in
    /// valid JSON (`[]`).
    fn start_if_needed(&mut self) -> Result<()> {
        if !self.started {
            self.w.write_all(b"[")?;
            self.started = true;
        }
        Ok(())
    }

    /// Append a single float to the JSON array.
    pub fn write_value(&mut self, value: f32) -> Result<()> {
        if self.closed {
            return Err(crate::Error::msg(
                "cannot write value: encoder is already closed",
            ));
        }

        self.start_if_needed()?;

        if !self.first {
            self.w.write_all(b",")?;
        }
        self.first = false;

        serde_json::to_writer(&mut self.w, &value)?;
        Ok(())
    }

    /// Finalize the JSON array and flush the underlying writer.
    ///
    /// This method is idempotent: calling `close()` multiple times is safe,
    /// and after closing no further values may be written.
    pub fn close(&mut self) -> Result<()> {
        if self.closed {
            return Ok(());
        }

        // Ensure we still output a valid JSON array even if no values were written.
        self.start_if_needed()?;

        self.w.write_all(b"]")?;
        self.w.flush()?;

        self.closed = true;
        Ok(())
    }
}

/// Write a full embedding vector to `w` as a JSON array of floats.
pub fn write_vector<W: Write>(w: W, vector: &[f32]) -> Result<()> {
    let mut encoder = VectorEncoder::new(w);
    for value in vector {
        encoder.write_value(*value)?;
    }
    encoder.close()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn close_without_values_emits_empty_array() -> anyhow::Result<()> {
        let mut out = Vec::new();
        let mut enc = VectorEncoder::new(&mut out);
        enc.close()?;
        assert_eq!(std::str::from_utf8(&out)?, "[]");
        Ok(())
    }

    #[test]
    fn write_vector_round_trips_through_serde() -> anyhow::Result<()> {
        let mut out = Vec::new();
        write_vector(&mut out, &[0.5, -1.25, 0.0])?;

        let parsed: Vec<f32> = serde_json::from_slice(&out)?;
        assert_eq!(parsed, vec![0.5, -1.25, 0.0]);
        Ok(())
    }

    #[test]
    fn close_is_idempotent() -> anyhow::Result<()> {
        let mut out = Vec::new();
        let mut enc = VectorEncoder::new(&mut out);
        enc.close()?;
        enc.close()?;
        assert_eq!(std::str::from_utf8(&out)?, "[]");
        Ok(())
    }

    #[test]
    fn write_after_close_errors() -> anyhow::Result<()> {
        let mut out = Vec::new();
        let mut enc = VectorEncoder::new(&mut out);
        enc.close()?;
        let err = enc.write_value(0.1).unwrap_err();
        assert!(err.to_string().contains("already closed"));
        Ok(())
    }
}

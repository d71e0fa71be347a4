use serde::Serialize;

/// A single recognized span of speech.
#[derive(Debug, Serialize, Clone)]
pub struct Segment {
    pub start_seconds: f32,
    pub end_seconds: f32,
    pub text: String,
}

/// Render segments as plain text, one segment per line.
///
/// Rules:
/// - segments whose text is empty (or whitespace only) are dropped
/// - surviving texts are trimmed, then joined with `\n`
/// - timing information is not part of the output
///
/// Whisper frequently emits segments whose text is a single leading space or
/// nothing at all (silence, music), so the filter runs on the trimmed text.
pub fn render_transcript(segments: &[Segment]) -> String {
    let lines: Vec<&str> = segments
        .iter()
        .map(|s| s.text.trim())
        .filter(|t| !t.is_empty())
        .collect();

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(start: f32, end: f32, text: &str) -> Segment {
        Segment {
            start_seconds: start,
            end_seconds: end,
            text: text.to_string(),
        }
    }

    #[test]
    fn empty_segments_are_dropped() {
        let segments = vec![
            seg(0.0, 1.0, " hello"),
            seg(1.0, 2.0, ""),
            seg(2.0, 3.0, "   "),
            seg(3.0, 4.0, "world "),
        ];

        assert_eq!(render_transcript(&segments), "hello\nworld");
    }

    #[test]
    fn no_segments_renders_empty_string() {
        assert_eq!(render_transcript(&[]), "");
    }

    #[test]
    fn line_count_never_exceeds_segment_count() {
        let segments = vec![seg(0.0, 1.0, "a"), seg(1.0, 2.0, ""), seg(2.0, 3.0, "b")];
        let rendered = render_transcript(&segments);
        assert!(rendered.lines().count() <= segments.len());
    }
}

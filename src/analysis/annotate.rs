//! Bracket-annotated rendering of scanned sequences
//!
//! Pure rendering over the positions the scanner produced; the input
//! sequence is never mutated. Stripping every `[` and `]` from the output
//! reconstructs the input exactly.

use super::types::Span;

/// Wrap each flagged single character in `[` `]`.
///
/// Characters keep their original case; positions are 0-based character
/// offsets. Used for complement anomalies.
pub fn highlight_positions(sequence: &str, positions: &[usize]) -> String {
    let mut out = String::with_capacity(sequence.len() + positions.len() * 2);
    for (i, c) in sequence.chars().enumerate() {
        if positions.contains(&i) {
            out.push('[');
            out.push(c);
            out.push(']');
        } else {
            out.push(c);
        }
    }
    out
}

/// Wrap each matched span in `[` `]`.
///
/// Spans must be ascending by start, as the pattern scan produces them.
/// Rendering is a single left-to-right pass with a cursor: the first span
/// claims its characters, and any later span starting before the cursor
/// (an overlapping match) is skipped rather than re-emitting characters.
pub fn highlight_spans(sequence: &str, spans: &[Span]) -> String {
    let chars: Vec<char> = sequence.chars().collect();
    let mut out = String::with_capacity(chars.len() + spans.len() * 2);
    let mut cursor = 0;

    for span in spans {
        if span.start < cursor {
            continue;
        }
        let end = span.end().min(chars.len());
        out.extend(&chars[cursor..span.start]);
        out.push('[');
        out.extend(&chars[span.start..end]);
        out.push(']');
        cursor = end;
    }
    out.extend(&chars[cursor..]);

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip_brackets(s: &str) -> String {
        s.chars().filter(|&c| c != '[' && c != ']').collect()
    }

    #[test]
    fn test_highlight_positions() {
        assert_eq!(highlight_positions("ATGC", &[1, 3]), "A[T]G[C]");
    }

    #[test]
    fn test_highlight_positions_empty() {
        assert_eq!(highlight_positions("ATGC", &[]), "ATGC");
    }

    #[test]
    fn test_highlight_positions_preserves_case() {
        assert_eq!(highlight_positions("atgc", &[0]), "[a]tgc");
    }

    #[test]
    fn test_highlight_spans_single() {
        let spans = vec![Span::new(2, 6)];
        assert_eq!(highlight_spans("ATGAATTCCG", &spans), "AT[GAATTC]CG");
    }

    #[test]
    fn test_highlight_spans_multiple() {
        let spans = vec![Span::new(0, 2), Span::new(4, 2)];
        assert_eq!(highlight_spans("ATCGATCG", &spans), "[AT]CG[AT]CG");
    }

    #[test]
    fn test_highlight_spans_adjacent_not_merged() {
        let spans = vec![Span::new(0, 2), Span::new(2, 2)];
        assert_eq!(highlight_spans("ATAT", &spans), "[AT][AT]");
    }

    #[test]
    fn test_highlight_spans_overlapping_first_match_wins() {
        // "AAAA" / "AA" matches at 0, 1, 2; the span at 1 overlaps the
        // first and is skipped, the span at 2 starts at the cursor
        let spans = vec![Span::new(0, 2), Span::new(1, 2), Span::new(2, 2)];
        assert_eq!(highlight_spans("AAAA", &spans), "[AA][AA]");
    }

    #[test]
    fn test_strip_roundtrip_non_overlapping() {
        let seq = "GGATCCATGAATTCAT";
        let spans = vec![Span::new(0, 6), Span::new(8, 6)];
        assert_eq!(strip_brackets(&highlight_spans(seq, &spans)), seq);
    }

    #[test]
    fn test_strip_roundtrip_overlapping() {
        // Cursor-advance rendering keeps the round trip exact even when
        // spans overlap
        let seq = "AAAAA";
        let spans = vec![
            Span::new(0, 2),
            Span::new(1, 2),
            Span::new(2, 2),
            Span::new(3, 2),
        ];
        assert_eq!(strip_brackets(&highlight_spans(seq, &spans)), seq);
    }

    #[test]
    fn test_strip_roundtrip_positions() {
        let seq = "ATGCATGC";
        assert_eq!(strip_brackets(&highlight_positions(seq, &[0, 3, 7])), seq);
    }

    #[test]
    fn test_highlight_spans_empty() {
        assert_eq!(highlight_spans("ATGC", &[]), "ATGC");
    }
}

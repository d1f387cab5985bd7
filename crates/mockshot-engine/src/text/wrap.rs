use std::iter::FusedIterator;
use std::str::Split;

use super::FontProvider;

/// Greedy word-wrap over space-separated words.
///
/// Words are accumulated onto the current line while
/// `measure(line + " " + word) <= max_width`. A word that does not fit
/// starts a new line; a word that is wider than `max_width` on its own
/// becomes a line by itself and is never split.
///
/// Only ASCII spaces break; runs of spaces collapse, and text in scripts
/// without spaces wraps as one long word.
pub fn wrap_text<F>(text: &str, max_width: f32, measure: F) -> LineSequence<'_, F>
where
    F: FnMut(&str) -> f32,
{
    LineSequence {
        words: text.split(' '),
        current: String::new(),
        max_width,
        measure,
    }
}

/// Wraps each `\n`-separated paragraph independently.
///
/// An empty paragraph yields an empty line so blank lines survive.
pub fn wrap_paragraphs<F>(text: &str, max_width: f32, mut measure: F) -> Vec<String>
where
    F: FnMut(&str) -> f32,
{
    let mut out = Vec::new();
    for paragraph in text.split('\n') {
        let before = out.len();
        out.extend(wrap_text(paragraph, max_width, &mut measure));
        if out.len() == before {
            out.push(String::new());
        }
    }
    out
}

/// Lines produced by [`wrap_text`], computed lazily in one pass.
pub struct LineSequence<'a, F> {
    words: Split<'a, char>,
    current: String,
    max_width: f32,
    measure: F,
}

impl<F> Iterator for LineSequence<'_, F>
where
    F: FnMut(&str) -> f32,
{
    type Item = String;

    fn next(&mut self) -> Option<String> {
        for word in self.words.by_ref() {
            if word.is_empty() {
                continue;
            }
            if self.current.is_empty() {
                self.current.push_str(word);
                continue;
            }

            let candidate_len = self.current.len() + 1 + word.len();
            let mut candidate = String::with_capacity(candidate_len);
            candidate.push_str(&self.current);
            candidate.push(' ');
            candidate.push_str(word);

            if (self.measure)(&candidate) <= self.max_width {
                self.current = candidate;
            } else {
                return Some(std::mem::replace(&mut self.current, word.to_string()));
            }
        }
        if self.current.is_empty() {
            None
        } else {
            Some(std::mem::take(&mut self.current))
        }
    }
}

impl<F> FusedIterator for LineSequence<'_, F> where F: FnMut(&str) -> f32 {}

/// A run of text bound to a font size, weight and wrap width.
#[derive(Debug, Clone, PartialEq)]
pub struct TextBlock {
    pub text: String,
    pub size: f32,
    pub bold: bool,
    pub max_width: f32,
    pub line_height: u32,
}

impl TextBlock {
    pub fn new(text: impl Into<String>, size: f32, max_width: f32, line_height: u32) -> Self {
        Self { text: text.into(), size, bold: false, max_width, line_height }
    }

    #[inline]
    pub fn bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    /// Wrapped lines, honoring explicit newlines.
    pub fn lines(&self, fonts: &dyn FontProvider) -> Vec<String> {
        wrap_paragraphs(&self.text, self.max_width, |s| fonts.measure(s, self.size, self.bold))
    }

    /// Total height of `line_count` lines.
    #[inline]
    pub fn height(&self, line_count: usize) -> u32 {
        line_count as u32 * self.line_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::FixedWidthMeasurer;

    fn per_char(px: f32) -> impl FnMut(&str) -> f32 {
        move |s: &str| s.chars().count() as f32 * px
    }

    fn wrap(text: &str, max: f32, px: f32) -> Vec<String> {
        wrap_text(text, max, per_char(px)).collect()
    }

    // ── greedy accumulation ───────────────────────────────────────────────

    #[test]
    fn pairs_fit_at_four_px_per_char() {
        assert_eq!(
            wrap("the quick brown fox jumps", 40.0, 4.0),
            ["the quick", "brown fox", "jumps"],
        );
    }

    #[test]
    fn seven_px_per_char_leaves_one_word_per_line() {
        // "the quick" measures 63 > 40 at this advance.
        assert_eq!(
            wrap("the quick brown fox jumps", 40.0, 7.0),
            ["the", "quick", "brown", "fox", "jumps"],
        );
    }

    #[test]
    fn overwide_word_sits_alone() {
        assert_eq!(
            wrap("a supercalifragilistic b", 20.0, 4.0),
            ["a", "supercalifragilistic", "b"],
        );
    }

    #[test]
    fn boundary_width_is_inclusive() {
        assert_eq!(wrap("ab cd", 5.0, 1.0), ["ab cd"]);
        assert_eq!(wrap("ab cd", 4.0, 1.0), ["ab", "cd"]);
    }

    // ── invariants ────────────────────────────────────────────────────────

    const SAMPLES: [&str; 8] = [
        "",
        "     ",
        "word",
        "Hello!  I'm your   AI assistant. How can I help you today? ",
        "  leading and trailing  ",
        "a supercalifragilisticexpialidocious b antidisestablishmentarianism",
        "héllo wörld ünïcode wörds",
        "日本語のテキスト mixed with latin",
    ];

    #[test]
    fn joined_lines_equal_normalized_input() {
        for text in SAMPLES {
            let normalized: Vec<&str> = text.split(' ').filter(|w| !w.is_empty()).collect();
            for max in [0.0, 1.0, 10.0, 37.0, 120.0, 1000.0] {
                for px in [1.0, 4.0, 7.0] {
                    let lines = wrap(text, max, px);
                    assert_eq!(lines.join(" "), normalized.join(" "), "{text:?} max={max} px={px}");
                    for line in &lines {
                        assert!(!line.is_empty(), "{text:?} max={max} px={px}");
                        assert_eq!(line.trim_matches(' '), line.as_str(), "{text:?} max={max} px={px}");
                    }
                }
            }
        }
    }

    #[test]
    fn lines_respect_width_unless_single_word() {
        let text = "Rust is a systems programming language focused on safety speed and \
                    concurrency with zero-cost abstractions";
        for max in [30.0, 60.0, 90.0, 200.0] {
            for line in wrap(text, max, 6.0) {
                let w = line.chars().count() as f32 * 6.0;
                assert!(w <= max || !line.contains(' '), "{line:?} exceeds {max}");
            }
        }
    }

    #[test]
    fn empty_and_blank_inputs_yield_nothing() {
        assert!(wrap("", 50.0, 5.0).is_empty());
        assert!(wrap("    ", 50.0, 5.0).is_empty());
    }

    #[test]
    fn sequence_is_fused() {
        let mut it = wrap_text("one two", 100.0, per_char(1.0));
        assert_eq!(it.next().as_deref(), Some("one two"));
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
    }

    // ── paragraphs ────────────────────────────────────────────────────────

    #[test]
    fn paragraphs_wrap_independently_and_keep_blank_lines() {
        let lines = wrap_paragraphs("hi there\n\nbye", 100.0, per_char(1.0));
        assert_eq!(lines, ["hi there", "", "bye"]);
    }

    #[test]
    fn text_block_uses_provider_metrics() {
        let fonts = FixedWidthMeasurer::new(0.25);
        let block = TextBlock::new("the quick brown fox jumps", 16.0, 40.0, 22);
        let lines = block.lines(&fonts);
        assert_eq!(lines, ["the quick", "brown fox", "jumps"]);
        assert_eq!(block.height(lines.len()), 66);
    }
}

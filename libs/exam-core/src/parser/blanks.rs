//! Blank detection: which inline markers denote a fill-in slot and which
//! are ordinary emphasis.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::family::BlankRule;
use crate::types::BlankSpan;

static EMPHASIS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.*?)\*\*").unwrap());

/// Matches prose content: ASCII letters, hiragana, katakana, CJK ideographs.
static PROSE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[A-Za-z\x{3040}-\x{309F}\x{30A0}-\x{30FF}\x{4E00}-\x{9FAF}]").unwrap()
});

static UNDERSCORE_RUN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"_{12}").unwrap());

/// Detect blank spans in question text under the given rule.
///
/// Returned spans are ordered left to right with dense ordinals starting at
/// 0. Unbalanced emphasis markers are not specially handled: unmatched
/// content stays plain text and the question ends up with fewer blanks.
pub fn detect_blanks(text: &str, rule: BlankRule) -> Vec<BlankSpan> {
    match rule {
        BlankRule::UnderscoreEmphasis => emphasis_blanks(text),
        BlankRule::TwelveUnderscores => underscore_blanks(text),
    }
}

fn emphasis_blanks(text: &str) -> Vec<BlankSpan> {
    let mut spans = Vec::new();
    for caps in EMPHASIS_RE.captures_iter(text) {
        let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        if inner.as_str().contains('_') && !PROSE_RE.is_match(inner.as_str()) {
            spans.push(BlankSpan {
                start: whole.start(),
                end: whole.end(),
                index: spans.len(),
            });
        }
    }
    spans
}

fn underscore_blanks(text: &str) -> Vec<BlankSpan> {
    UNDERSCORE_RUN_RE
        .find_iter(text)
        .enumerate()
        .map(|(index, m)| BlankSpan {
            start: m.start(),
            end: m.end(),
            index,
        })
        .collect()
}

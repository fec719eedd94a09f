//! Question extraction: fold a category chunk's lines into numbered
//! question bodies.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

static NUMBER_LABEL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+)\.\s+(.+)").unwrap());

/// A question body before blank detection and answer joining.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawQuestion {
    /// Label taken verbatim from the source; not required contiguous.
    pub number: u32,
    pub text: String,
}

/// Scan a chunk's lines in order. A `<digits>. <rest>` line finalizes the
/// accumulated question and starts a new one; any other non-empty,
/// non-heading line is folded into the current body with `join`.
///
/// Duplicate numbers both survive here; they collide later at the answer
/// join, where the last-written answer list wins for both.
pub fn extract_questions(lines: &[&str], join: &str) -> Vec<RawQuestion> {
    let mut questions = Vec::new();
    let mut current: Option<RawQuestion> = None;

    for line in lines {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        if let Some(caps) = NUMBER_LABEL_RE.captures(trimmed) {
            if let Ok(number) = caps[1].parse::<u32>() {
                if let Some(done) = current.take() {
                    questions.push(done);
                }
                current = Some(RawQuestion {
                    number,
                    text: caps[2].to_string(),
                });
                continue;
            }
        }

        if trimmed.starts_with("#### ") {
            debug!(line = trimmed, "skipping unrecognized heading in question chunk");
            continue;
        }

        if let Some(question) = current.as_mut() {
            question.text.push_str(join);
            question.text.push_str(trimmed);
        }
    }

    if let Some(done) = current.take() {
        questions.push(done);
    }
    questions
}

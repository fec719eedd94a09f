//! Scoring and question rendering helpers.
//!
//! Expected answers are always plain strings, never null; an empty string
//! means the answer key had nothing for that blank. Comparison is
//! case-insensitive, whitespace-insensitive and bracket-insensitive.

use serde::{Deserialize, Serialize};

use crate::types::{Question, QuestionResult, SessionScore, UserAnswer};

/// One segment of a question body prepared for rendering: literal text or
/// an input field standing in for a blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum QuestionPart {
    Text { content: String },
    #[serde(rename_all = "camelCase")]
    Input { blank_index: usize },
}

/// Normalize an answer for comparison: trim, lowercase, strip all
/// whitespace and the bracket characters `「」()（）`.
pub fn normalize_answer(answer: &str) -> String {
    answer
        .trim()
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '「' | '」' | '(' | ')' | '（' | '）'))
        .collect()
}

/// Score one question against the learner's submissions: one point per
/// blank whose normalized submission equals the normalized expected
/// answer. A question with no blanks scores as correct.
pub fn score_question(question: &Question, user_answers: &[UserAnswer]) -> QuestionResult {
    let mut score = 0u32;
    let mut correct_answers = Vec::with_capacity(question.blanks.len());
    let mut submitted_answers = Vec::with_capacity(question.blanks.len());

    for blank in &question.blanks {
        let submitted = user_answers
            .iter()
            .find(|answer| answer.question_id == question.id && answer.blank_id == blank.id)
            .map(|answer| answer.answer.as_str())
            .unwrap_or("");

        correct_answers.push(blank.answer.clone());
        submitted_answers.push(submitted.to_string());

        if normalize_answer(&blank.answer) == normalize_answer(submitted) {
            score += 1;
        }
    }

    let max_score = question.blanks.len() as u32;
    QuestionResult {
        question_id: question.id.clone(),
        is_correct: score == max_score,
        correct_answers,
        user_answers: submitted_answers,
        score,
        max_score,
    }
}

/// Aggregate per-question results into a session score with a rounded
/// percentage (0 when nothing was scorable).
pub fn session_score(results: &[QuestionResult]) -> SessionScore {
    let total_score: u32 = results.iter().map(|r| r.score).sum();
    let total_max_score: u32 = results.iter().map(|r| r.max_score).sum();
    let correct_questions = results.iter().filter(|r| r.is_correct).count();

    let percentage = if total_max_score > 0 {
        ((f64::from(total_score) / f64::from(total_max_score)) * 100.0).round() as u32
    } else {
        0
    };

    SessionScore {
        total_score,
        total_max_score,
        correct_questions,
        total_questions: results.len(),
        percentage,
    }
}

/// Replace each blank marker with `[1]`, `[2]`, … using the precomputed
/// spans.
pub fn format_question_text(question: &Question) -> String {
    let mut out = String::with_capacity(question.text.len());
    let mut last = 0;
    for blank in &question.blanks {
        out.push_str(&question.text[last..blank.span.start]);
        out.push_str(&format!("[{}]", blank.span.index + 1));
        last = blank.span.end;
    }
    out.push_str(&question.text[last..]);
    out
}

/// Split a question body into text and input segments for the render
/// layer, driven by the stored spans and so agnostic of the blank
/// convention that produced them.
pub fn split_for_inputs(question: &Question) -> Vec<QuestionPart> {
    let mut parts = Vec::new();
    let mut last = 0;
    for blank in &question.blanks {
        if blank.span.start > last {
            parts.push(QuestionPart::Text {
                content: question.text[last..blank.span.start].to_string(),
            });
        }
        parts.push(QuestionPart::Input {
            blank_index: blank.span.index,
        });
        last = blank.span.end;
    }
    if last < question.text.len() {
        parts.push(QuestionPart::Text {
            content: question.text[last..].to_string(),
        });
    }
    parts
}

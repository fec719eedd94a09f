//! Core types for the exam study application.
//!
//! Field names serialize in camelCase; the JSON shapes here are the contract
//! consumed by the HTTP and presentation layers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A detected fill-in span within raw question text.
///
/// `start..end` covers the enclosing markers (the `**…**` pair or the
/// underscore run), so the span can be excised and replaced by an input
/// element without further scanning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlankSpan {
    pub start: usize,
    pub end: usize,
    /// 0-based left-to-right ordinal within the question.
    pub index: usize,
}

/// One fill-in-the-blank slot belonging to a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blank {
    /// Globally unique: `{category-id}-{question-number}-{ordinal}`.
    pub id: String,
    /// Expected answer. Empty string means unknown/unanswerable, never null.
    pub answer: String,
    pub span: BlankSpan,
    /// Human-readable input label (`回答1`, `回答2`, …).
    pub placeholder: String,
}

/// A question with its raw text and detected blanks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    /// `{category-id}-{number}`.
    pub id: String,
    /// Category id this question belongs to.
    pub category: String,
    /// Numeric label taken verbatim from the source document.
    pub number: u32,
    /// Raw text with blank markers still embedded, so the presentation
    /// layer can re-render them.
    pub text: String,
    pub blanks: Vec<Blank>,
}

/// A named grouping of questions, the unit of navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    /// Display name in the source language.
    pub name: String,
    /// Translated display name. Empty when the source heading carries none.
    pub name_en: String,
    pub description: String,
    /// Always equals `questions.len()`.
    pub question_count: usize,
    pub questions: Vec<Question>,
}

impl Category {
    /// Summary view without question bodies.
    pub fn summary(&self) -> CategorySummary {
        CategorySummary {
            id: self.id.clone(),
            name: self.name.clone(),
            name_en: self.name_en.clone(),
            description: self.description.clone(),
            question_count: self.question_count,
        }
    }
}

/// Category metadata for list views, no question bodies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySummary {
    pub id: String,
    pub name: String,
    pub name_en: String,
    pub description: String,
    pub question_count: usize,
}

/// A learner-submitted answer for one blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAnswer {
    pub question_id: String,
    pub blank_id: String,
    pub answer: String,
}

/// Scoring outcome for one question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionResult {
    pub question_id: String,
    /// True iff every blank was answered correctly.
    pub is_correct: bool,
    pub correct_answers: Vec<String>,
    pub user_answers: Vec<String>,
    pub score: u32,
    pub max_score: u32,
}

/// Aggregate score over one study session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionScore {
    pub total_score: u32,
    pub total_max_score: u32,
    pub correct_questions: usize,
    pub total_questions: usize,
    /// Rounded percentage, 0 when the session has no scorable blanks.
    pub percentage: u32,
}

/// UI-facing session state for one category run-through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamSession {
    pub category_id: String,
    pub current_question_index: usize,
    pub answers: Vec<UserAnswer>,
    pub results: Vec<QuestionResult>,
    pub start_time: DateTime<Utc>,
    pub is_completed: bool,
}

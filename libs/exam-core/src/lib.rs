//! Core exam-bank library shared by the HTTP and presentation layers.
//!
//! Provides:
//! - Markdown exam-bank parser for the five study-document dialects
//! - Per-family parsing configuration (boundary markers, heading patterns,
//!   blank conventions, answer-key layouts, category ordering)
//! - Cached document store with single-flight loading
//! - Scoring and question rendering helpers
//! - Shared types (Category, Question, Blank, session records)

pub mod error;
pub mod family;
pub mod loader;
pub mod parser;
pub mod scoring;
pub mod types;

pub use error::{ExamError, Result};
pub use family::{
    AnswerConventions, AnswerRange, BlankRule, CategoryMeta, CategoryOrder, Family, FamilyConfig,
    HeadingRule,
};
pub use loader::ExamStore;
pub use parser::parse_document;
pub use scoring::{
    format_question_text, normalize_answer, score_question, session_score, split_for_inputs,
    QuestionPart,
};
pub use types::{
    Blank, BlankSpan, Category, CategorySummary, ExamSession, Question, QuestionResult,
    SessionScore, UserAnswer,
};

//! Region and category splitting.
//!
//! A document has one questions region and one answers region, separated by
//! a family-specific boundary heading. Each region splits further into
//! per-category chunks on heading lines.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, warn};

use crate::family::HeadingRule;

static NAMED_HEADING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#### (.+?) \((.+?)\)").unwrap());

static CHAPTER_HEADING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#### \*\*(第(\d+)章\s*.*?)\*\*").unwrap());

static BOLD_NAMED_HEADING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\*\*(.+?) \((.+?)\)\*\*$").unwrap());

/// A parsed category heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    /// Source-language name (for chapter headings, the full inner text).
    pub name: String,
    /// English part of the heading, empty for chapter headings.
    pub name_en: String,
    pub chapter: Option<u32>,
}

/// One category's slice of a region: the heading plus the lines below it.
#[derive(Debug)]
pub struct CategoryChunk<'a> {
    pub heading: Heading,
    pub lines: Vec<&'a str>,
}

/// Split a document into (questions region, answers region) on the first
/// line containing the boundary literal. The boundary line itself belongs
/// to the answers region. A missing boundary degrades to a questions-only
/// document with all answers unset.
pub fn split_regions<'a>(text: &'a str, boundary: &str) -> (&'a str, &'a str) {
    let mut offset = 0;
    for part in text.split_inclusive('\n') {
        if part.contains(boundary) {
            return (&text[..offset], &text[offset..]);
        }
        offset += part.len();
    }
    warn!(boundary, "section boundary not found, treating whole document as questions");
    (text, "")
}

/// Chunk a region on category heading lines. Text before the first heading
/// is discarded; heading-like lines that fail the family's pattern stay in
/// the current chunk.
pub fn split_categories(region: &str, rule: HeadingRule) -> Vec<CategoryChunk<'_>> {
    let mut chunks: Vec<CategoryChunk<'_>> = Vec::new();
    let mut discarded = 0usize;

    for line in region.lines() {
        if let Some(heading) = match_heading(line.trim(), rule) {
            chunks.push(CategoryChunk {
                heading,
                lines: Vec::new(),
            });
            continue;
        }
        match chunks.last_mut() {
            Some(chunk) => chunk.lines.push(line),
            None => {
                if !line.trim().is_empty() {
                    discarded += 1;
                }
            }
        }
    }

    if discarded > 0 {
        debug!(lines = discarded, "discarded region text before first category heading");
    }
    chunks
}

/// Match one trimmed line against a family's heading pattern.
pub fn match_heading(line: &str, rule: HeadingRule) -> Option<Heading> {
    match rule {
        HeadingRule::NamedWithEnglish => {
            let caps = NAMED_HEADING_RE.captures(line)?;
            Some(Heading {
                name: caps[1].to_string(),
                name_en: caps[2].to_string(),
                chapter: None,
            })
        }
        HeadingRule::BoldChapter => {
            let caps = CHAPTER_HEADING_RE.captures(line)?;
            let chapter = caps[2].parse::<u32>().ok()?;
            Some(Heading {
                name: caps[1].trim().to_string(),
                name_en: String::new(),
                chapter: Some(chapter),
            })
        }
        HeadingRule::BoldNamedWithEnglish => {
            let caps = BOLD_NAMED_HEADING_RE.captures(line)?;
            Some(Heading {
                name: caps[1].to_string(),
                name_en: caps[2].to_string(),
                chapter: None,
            })
        }
    }
}

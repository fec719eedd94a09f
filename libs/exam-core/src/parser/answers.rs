//! Answer extraction: map question numbers to ordered answer lists.
//!
//! Hand-authored answer keys mix several literal conventions, sometimes
//! within one document. Each line of an entry is classified by the first
//! enabled convention that matches, in priority order: bolded line, circled
//! sub-item, bolded list, delimiter-separated fallback.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::family::{AnswerConventions, AnswerRange};

static NUMBER_LABEL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+)\.\s+(.+)").unwrap());

static BOLD_SPAN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*([^*]+)\*\*").unwrap());

static CIRCLED_ITEM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[①②③④⑤⑥⑦⑧⑨⑩]\s*\*\*([^*]+)\*\*").unwrap());

/// Marks a question as intentionally answerless; contributes zero answers
/// and never reaches the delimiter fallback.
const NOT_APPLICABLE: &str = "該当なし";

const DELIMITERS: [char; 4] = ['、', '，', ',', 'と'];

/// Walk an answers chunk. A `<digits>. <rest>` line opens an entry; lines
/// until the next entry accumulate into it. Entries with no extracted
/// answers are not stored, and a later entry for the same number replaces
/// an earlier one.
pub fn extract_answers(
    lines: &[&str],
    conventions: &AnswerConventions,
) -> BTreeMap<u32, Vec<String>> {
    let mut map = BTreeMap::new();
    let mut current: Option<(u32, Vec<String>)> = None;

    for line in lines {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        if let Some(caps) = NUMBER_LABEL_RE.captures(trimmed) {
            if let Ok(number) = caps[1].parse::<u32>() {
                flush(&mut map, current.take());
                let mut answers = Vec::new();
                collect_line(&caps[2], conventions, &mut answers);
                current = Some((number, answers));
                continue;
            }
        }

        if let Some((_, answers)) = current.as_mut() {
            collect_line(trimmed, conventions, answers);
        }
    }

    flush(&mut map, current.take());
    map
}

/// Regroup a flat answer map for one chapter, for families whose answer key
/// carries no category headings of its own.
pub fn select_chapter_answers(
    flat: &BTreeMap<u32, Vec<String>>,
    ranges: &[AnswerRange],
    chapter: Option<u32>,
) -> BTreeMap<u32, Vec<String>> {
    let Some(chapter) = chapter else {
        return BTreeMap::new();
    };
    let mut out = BTreeMap::new();
    for range in ranges.iter().filter(|r| r.chapter == chapter) {
        for (&number, answers) in flat.range(range.start..=range.end) {
            out.insert(number, answers.clone());
        }
    }
    out
}

fn flush(map: &mut BTreeMap<u32, Vec<String>>, entry: Option<(u32, Vec<String>)>) {
    if let Some((number, answers)) = entry {
        if !answers.is_empty() {
            map.insert(number, answers);
        }
    }
}

fn collect_line(text: &str, conventions: &AnswerConventions, out: &mut Vec<String>) {
    let text = text.trim();
    if text.is_empty() || text.contains(NOT_APPLICABLE) {
        return;
    }

    if conventions.bold_line {
        if let Some(inner) = full_bold_line(text) {
            if !inner.is_empty() {
                out.push(inner.to_string());
            }
            return;
        }
    }

    if conventions.circled_items {
        if let Some(caps) = CIRCLED_ITEM_RE.captures(text) {
            out.push(caps[1].trim().to_string());
            return;
        }
    }

    if conventions.bold_list {
        let spans: Vec<String> = BOLD_SPAN_RE
            .captures_iter(text)
            .map(|caps| caps[1].trim().to_string())
            .collect();
        if !spans.is_empty() {
            out.extend(spans);
            return;
        }
    }

    if conventions.delimiter_fallback {
        for segment in text.split(DELIMITERS) {
            let segment = segment.trim();
            if !segment.is_empty() {
                out.push(segment.to_string());
            }
        }
    }
}

/// The entire line is exactly one `**…**` pair.
fn full_bold_line(text: &str) -> Option<&str> {
    let inner = text.strip_prefix("**")?.strip_suffix("**")?;
    if inner.contains("**") {
        return None;
    }
    Some(inner.trim())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const ALL: AnswerConventions = AnswerConventions {
        bold_line: true,
        circled_items: true,
        bold_list: true,
        delimiter_fallback: true,
    };

    #[test]
    fn bolded_line_is_one_answer() {
        let map = extract_answers(&["1. **公共財**"], &ALL);
        assert_eq!(map[&1], vec!["公共財"]);
    }

    #[test]
    fn circled_items_append_in_encounter_order() {
        let lines = vec!["2. 三原則は以下の通り", "① **公平**", "② **中立**", "③ **簡素**"];
        let map = extract_answers(&lines, &ALL);
        assert_eq!(map[&2], vec!["公平", "中立", "簡素"]);
    }

    #[test]
    fn numbered_list_of_bolded_spans_splits_left_to_right() {
        let map = extract_answers(&["3. 1. **非競合性** 2. **非排除性**"], &ALL);
        assert_eq!(map[&3], vec!["非競合性", "非排除性"]);
    }

    #[test]
    fn delimiter_fallback_splits_plain_text() {
        let map = extract_answers(&["4. ピグー税、補助金"], &ALL);
        assert_eq!(map[&4], vec!["ピグー税", "補助金"]);
    }

    #[test]
    fn conjunction_particle_is_a_delimiter() {
        let map = extract_answers(&["5. 需要と供給"], &ALL);
        assert_eq!(map[&5], vec!["需要", "供給"]);
    }

    #[test]
    fn not_applicable_yields_no_entry() {
        let map = extract_answers(&["6. 該当なし"], &ALL);
        assert!(!map.contains_key(&6));
    }

    #[test]
    fn disabled_fallback_leaves_plain_text_unextracted() {
        let no_fallback = AnswerConventions {
            delimiter_fallback: false,
            ..ALL
        };
        let map = extract_answers(&["7. 非競合性、非排除性"], &no_fallback);
        assert!(!map.contains_key(&7));
    }

    #[test]
    fn later_entry_for_same_number_wins() {
        let map = extract_answers(&["8. **最初**", "8. **後勝ち**"], &ALL);
        assert_eq!(map[&8], vec!["後勝ち"]);
    }

    #[test]
    fn continuation_bold_lines_extend_the_entry() {
        let lines = vec!["9. **一つ目**", "**二つ目**"];
        let map = extract_answers(&lines, &ALL);
        assert_eq!(map[&9], vec!["一つ目", "二つ目"]);
    }

    #[test]
    fn chapter_ranges_regroup_a_flat_map() {
        let ranges = [
            AnswerRange { start: 1, end: 12, chapter: 1 },
            AnswerRange { start: 13, end: 24, chapter: 2 },
        ];
        let mut flat = BTreeMap::new();
        flat.insert(2, vec!["a".to_string()]);
        flat.insert(13, vec!["b".to_string()]);

        let first = select_chapter_answers(&flat, &ranges, Some(1));
        assert_eq!(first.keys().copied().collect::<Vec<_>>(), vec![2]);

        let second = select_chapter_answers(&flat, &ranges, Some(2));
        assert_eq!(second[&13], vec!["b"]);

        assert!(select_chapter_answers(&flat, &ranges, None).is_empty());
    }
}

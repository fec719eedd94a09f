//! Category assembly: join extracted questions with their answers and
//! build the final category records.

use std::collections::BTreeMap;

use tracing::debug;

use crate::family::{CategoryMeta, CategoryOrder, FamilyConfig};
use crate::parser::blanks::detect_blanks;
use crate::parser::questions::RawQuestion;
use crate::parser::sections::Heading;
use crate::types::{Blank, Category, Question};

/// Unmatched names sort after every ranked entry, input order preserved.
const UNRANKED: usize = usize::MAX;

/// Join one category's questions with its answer map.
///
/// The join is positional and deliberately lenient: blank `i` receives
/// answer `i` when present, a shortfall leaves trailing blanks as empty
/// strings, and surplus answers are dropped. Documents are hand-authored
/// and imperfect; availability wins over validation here.
pub fn assemble_category(
    heading: &Heading,
    raw_questions: Vec<RawQuestion>,
    answers: &BTreeMap<u32, Vec<String>>,
    config: &FamilyConfig,
) -> Category {
    let (category_id, name_en, description) = resolve_meta(heading, config);

    let mut questions = Vec::with_capacity(raw_questions.len());
    for raw in raw_questions {
        let question = build_question(&category_id, raw, answers, config);
        if config.drop_zero_blank && question.blanks.is_empty() {
            debug!(id = %question.id, "dropping question with no detected blanks");
            continue;
        }
        questions.push(question);
    }

    Category {
        id: category_id,
        name: heading.name.clone(),
        name_en,
        description,
        question_count: questions.len(),
        questions,
    }
}

/// Order assembled categories by the family's strategy. Sorts are stable,
/// so unranked entries keep their relative input order at the tail.
pub fn order_categories(
    mut categories: Vec<(Heading, Category)>,
    config: &FamilyConfig,
) -> Vec<Category> {
    match config.order {
        CategoryOrder::RankTable => {
            categories.sort_by_key(|(heading, _)| meta_rank(heading, config.metadata));
        }
        CategoryOrder::ChapterNumber => {
            categories.sort_by_key(|(heading, _)| {
                heading.chapter.map(|n| n as usize).unwrap_or(UNRANKED)
            });
        }
        CategoryOrder::Lexicographic => {
            categories.sort_by(|(a, _), (b, _)| a.name.cmp(&b.name));
        }
    }
    categories.into_iter().map(|(_, category)| category).collect()
}

fn build_question(
    category_id: &str,
    raw: RawQuestion,
    answers: &BTreeMap<u32, Vec<String>>,
    config: &FamilyConfig,
) -> Question {
    let spans = detect_blanks(&raw.text, config.blank_rule);
    let answer_list = answers.get(&raw.number);

    if let Some(list) = answer_list {
        if list.len() != spans.len() {
            debug!(
                category = category_id,
                number = raw.number,
                blanks = spans.len(),
                answers = list.len(),
                "blank/answer count mismatch, padding or truncating"
            );
        }
    }

    let blanks = spans
        .into_iter()
        .map(|span| Blank {
            id: format!("{category_id}-{}-{}", raw.number, span.index),
            answer: answer_list
                .and_then(|list| list.get(span.index))
                .cloned()
                .unwrap_or_default(),
            placeholder: format!("回答{}", span.index + 1),
            span,
        })
        .collect();

    Question {
        id: format!("{category_id}-{}", raw.number),
        category: category_id.to_string(),
        number: raw.number,
        text: raw.text,
        blanks,
    }
}

fn resolve_meta(heading: &Heading, config: &FamilyConfig) -> (String, String, String) {
    if let Some(meta) = config
        .metadata
        .iter()
        .find(|meta| heading.name.contains(meta.name))
    {
        return (
            meta.id.to_string(),
            meta.name_en.to_string(),
            meta.description.to_string(),
        );
    }

    let id = match heading.chapter {
        Some(chapter) => format!("chapter-{chapter}"),
        None => {
            let source = if heading.name_en.is_empty() {
                heading.name.as_str()
            } else {
                heading.name_en.as_str()
            };
            let slug = slugify(source);
            if slug.is_empty() {
                heading.name.clone()
            } else {
                slug
            }
        }
    };
    (id, heading.name_en.clone(), String::new())
}

fn meta_rank(heading: &Heading, metadata: &[CategoryMeta]) -> usize {
    metadata
        .iter()
        .position(|meta| heading.name.contains(meta.name))
        .unwrap_or(UNRANKED)
}

/// Lowercase ASCII slug: alphanumeric runs joined by single dashes.
fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::family::Family;
    use pretty_assertions::assert_eq;

    fn heading(name: &str) -> Heading {
        Heading {
            name: name.to_string(),
            name_en: String::new(),
            chapter: None,
        }
    }

    fn chapter_heading(n: u32) -> Heading {
        Heading {
            name: format!("第{n}章 タイトル"),
            name_en: String::new(),
            chapter: Some(n),
        }
    }

    #[test]
    fn shortfall_pads_trailing_blanks_with_empty_strings() {
        let config = Family::PublicFinance.config();
        let mut answers = BTreeMap::new();
        answers.insert(1, vec!["一".to_string(), "二".to_string()]);
        let raw = vec![RawQuestion {
            number: 1,
            text: "**___**と**___**と**___**".to_string(),
        }];

        let category = assemble_category(&heading("公共財"), raw, &answers, config);
        let blanks = &category.questions[0].blanks;
        assert_eq!(blanks.len(), 3);
        assert_eq!(blanks[0].answer, "一");
        assert_eq!(blanks[1].answer, "二");
        assert_eq!(blanks[2].answer, "");
    }

    #[test]
    fn surplus_answers_are_dropped() {
        let config = Family::PublicFinance.config();
        let mut answers = BTreeMap::new();
        answers.insert(
            1,
            vec!["一".into(), "二".into(), "三".into(), "余り".into()],
        );
        let raw = vec![RawQuestion {
            number: 1,
            text: "**___** **___** **___**".to_string(),
        }];

        let category = assemble_category(&heading("公共財"), raw, &answers, config);
        let serialized = serde_json::to_string(&category).unwrap();
        assert!(!serialized.contains("余り"));
    }

    #[test]
    fn primary_family_keeps_zero_blank_questions() {
        let config = Family::PublicFinance.config();
        let raw = vec![RawQuestion {
            number: 1,
            text: "空欄のない問題。".to_string(),
        }];
        let category = assemble_category(&heading("公共財"), raw, &BTreeMap::new(), config);
        assert_eq!(category.question_count, 1);
        assert!(category.questions[0].blanks.is_empty());
    }

    #[test]
    fn secondary_family_drops_zero_blank_questions() {
        let config = Family::BusinessStrategy.config();
        let raw = vec![
            RawQuestion {
                number: 1,
                text: "空欄のない問題。".to_string(),
            },
            RawQuestion {
                number: 2,
                text: "____________を説明せよ。".to_string(),
            },
        ];
        let category = assemble_category(&chapter_heading(1), raw, &BTreeMap::new(), config);
        assert_eq!(category.question_count, 1);
        assert_eq!(category.questions[0].number, 2);
    }

    #[test]
    fn question_count_matches_questions_len() {
        let config = Family::PublicFinance.config();
        let raw = vec![
            RawQuestion { number: 1, text: "**___**".to_string() },
            RawQuestion { number: 2, text: "**___**".to_string() },
        ];
        let category = assemble_category(&heading("外部性"), raw, &BTreeMap::new(), config);
        assert_eq!(category.question_count, category.questions.len());
    }

    #[test]
    fn metadata_table_supplies_id_and_translation() {
        let config = Family::PublicFinance.config();
        let category = assemble_category(&heading("公共財"), vec![], &BTreeMap::new(), config);
        assert_eq!(category.id, "public-goods");
        assert_eq!(category.name_en, "Public Goods");
        assert!(!category.description.is_empty());
    }

    #[test]
    fn unmapped_chapter_heading_derives_chapter_id() {
        let config = Family::BusinessStrategy.config();
        let category =
            assemble_category(&chapter_heading(4), vec![], &BTreeMap::new(), config);
        assert_eq!(category.id, "chapter-4");
    }

    #[test]
    fn unmapped_english_heading_derives_ascii_slug() {
        let config = Family::MultinationalEnterprise.config();
        let mut h = heading("貿易理論");
        h.name_en = "Trade Theory".to_string();
        let category = assemble_category(&h, vec![], &BTreeMap::new(), config);
        assert_eq!(category.id, "trade-theory");
        assert_eq!(category.name_en, "Trade Theory");
    }

    #[test]
    fn rank_table_orders_by_metadata_position() {
        let config = Family::PublicFinance.config();
        let pairs: Vec<_> = ["社会保障", "財政学と政府", "公共財"]
            .iter()
            .map(|name| {
                let h = heading(name);
                let c = assemble_category(&h, vec![], &BTreeMap::new(), config);
                (h, c)
            })
            .collect();
        let ordered = order_categories(pairs, config);
        let ids: Vec<_> = ordered.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["public-finance", "public-goods", "social-security"]);
    }

    #[test]
    fn unranked_names_sort_last_in_input_order() {
        let config = Family::PublicFinance.config();
        let pairs: Vec<_> = ["未知B", "公共財", "未知A"]
            .iter()
            .map(|name| {
                let h = heading(name);
                let c = assemble_category(&h, vec![], &BTreeMap::new(), config);
                (h, c)
            })
            .collect();
        let ordered = order_categories(pairs, config);
        let names: Vec<_> = ordered.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["公共財", "未知B", "未知A"]);
    }

    #[test]
    fn chapter_order_is_ascending() {
        let config = Family::BusinessStrategy.config();
        let pairs: Vec<_> = [3u32, 1, 2]
            .iter()
            .map(|&n| {
                let h = chapter_heading(n);
                let c = assemble_category(&h, vec![], &BTreeMap::new(), config);
                (h, c)
            })
            .collect();
        let ordered = order_categories(pairs, config);
        let ids: Vec<_> = ordered.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["chapter-1", "chapter-2", "chapter-3"]);
    }

    #[test]
    fn lexicographic_order_compares_names() {
        let config = Family::MultinationalEnterprise.config();
        let pairs: Vec<_> = ["b", "a", "c"]
            .iter()
            .map(|name| {
                let h = heading(name);
                let c = assemble_category(&h, vec![], &BTreeMap::new(), config);
                (h, c)
            })
            .collect();
        let ordered = order_categories(pairs, config);
        let names: Vec<_> = ordered.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }
}

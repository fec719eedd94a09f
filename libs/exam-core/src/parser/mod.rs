//! Markdown exam-bank parser.
//!
//! Converts one loosely formatted study document into normalized category
//! records. The pipeline is shared across all document families; a
//! [`FamilyConfig`](crate::family::FamilyConfig) supplies the dialect:
//!
//! ```text
//! raw text -> split_regions -> split_categories -+-> extract_questions -+
//!                                                +-> extract_answers  --+-> assemble
//! ```
//!
//! Parsing never fails. Malformed input degrades to fewer extracted
//! questions, each degradation a logged branch.

pub mod answers;
pub mod assembler;
pub mod blanks;
pub mod questions;
pub mod sections;

use std::collections::BTreeMap;
use std::collections::HashMap;

use crate::family::FamilyConfig;
use crate::types::Category;

/// Parse one document into its ordered category list.
pub fn parse_document(content: &str, config: &FamilyConfig) -> Vec<Category> {
    let (questions_region, answers_region) = sections::split_regions(content, config.boundary);
    let question_chunks = sections::split_categories(questions_region, config.heading_rule);

    // Answer keys come in two layouts: per-category chunks mirroring the
    // questions region, or one flat list carved up by the family's
    // question-number ranges.
    let (per_category, flat): (HashMap<String, BTreeMap<u32, Vec<String>>>, _) =
        if config.answer_ranges.is_empty() {
            let map = sections::split_categories(answers_region, config.heading_rule)
                .into_iter()
                .map(|chunk| {
                    (
                        chunk.heading.name.clone(),
                        answers::extract_answers(&chunk.lines, &config.conventions),
                    )
                })
                .collect();
            (map, BTreeMap::new())
        } else {
            let lines: Vec<&str> = answers_region.lines().collect();
            (
                HashMap::new(),
                answers::extract_answers(&lines, &config.conventions),
            )
        };

    let mut assembled = Vec::with_capacity(question_chunks.len());
    for chunk in question_chunks {
        let category_answers = if config.answer_ranges.is_empty() {
            per_category
                .get(&chunk.heading.name)
                .cloned()
                .unwrap_or_default()
        } else {
            answers::select_chapter_answers(&flat, config.answer_ranges, chunk.heading.chapter)
        };

        let raw_questions = questions::extract_questions(&chunk.lines, config.join_separator);
        let category =
            assembler::assemble_category(&chunk.heading, raw_questions, &category_answers, config);
        assembled.push((chunk.heading, category));
    }

    assembler::order_categories(assembled, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::family::Family;
    use pretty_assertions::assert_eq;

    #[test]
    fn public_goods_answer_joins_to_its_blank() {
        let doc = "\
#### 公共財 (Public Goods)

1. Government spending is **______**.

### 回答集

#### 公共財 (Public Goods)

1. **public goods**
";
        let categories = parse_document(doc, Family::PublicFinance.config());
        assert_eq!(categories.len(), 1);
        let question = &categories[0].questions[0];
        assert_eq!(question.blanks.len(), 1);
        assert_eq!(question.blanks[0].answer, "public goods");
    }

    #[test]
    fn missing_boundary_leaves_all_answers_unset() {
        let doc = "\
#### 公共財 (Public Goods)

1. 公共財は**______**である。
";
        let categories = parse_document(doc, Family::PublicFinance.config());
        assert_eq!(categories[0].questions[0].blanks[0].answer, "");
    }

    #[test]
    fn parse_is_idempotent() {
        let doc = "\
#### 外部性 (Externalities)

1. **______**とは市場外部への影響である。
2. 対策は**______**と**______**である。

### 回答集

#### 外部性 (Externalities)

1. **外部効果**
2. 1. **ピグー税** 2. **補助金**
";
        let config = Family::PublicFinance.config();
        let first = serde_json::to_string(&parse_document(doc, config)).unwrap();
        let second = serde_json::to_string(&parse_document(doc, config)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn flat_answer_key_groups_by_chapter_ranges() {
        let doc = "\
#### **第1章 市場構造**

1. 完全競争市場では価格は____________で決まる。
2. 独占企業は____________を設定できる。

#### **第2章 参入障壁**

13. 参入障壁の例は____________である。

## 解答

1. 需給
2. 価格
13. 規模の経済
";
        let categories = parse_document(doc, Family::IndustrialOrganization.config());
        assert_eq!(categories.len(), 2);
        assert_eq!(categories[0].id, "chapter-1");
        assert_eq!(categories[0].questions[0].blanks[0].answer, "需給");
        assert_eq!(categories[0].questions[1].blanks[0].answer, "価格");
        assert_eq!(categories[1].questions[0].blanks[0].answer, "規模の経済");
    }
}

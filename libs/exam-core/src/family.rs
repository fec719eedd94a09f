//! Document families and their parsing configuration.
//!
//! Each source document follows its own hand-authored dialect: a different
//! section boundary heading, category heading shape, blank convention and
//! answer-key layout. One `FamilyConfig` value per family drives the shared
//! parsing pipeline; there is no per-family parser code.

use serde::{Deserialize, Serialize};

/// One source document's formatting dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Family {
    PublicFinance,
    BusinessStrategy,
    IndustrialOrganization,
    MultinationalEnterprise,
    HealthEconomics,
}

impl Family {
    pub const ALL: [Family; 5] = [
        Family::PublicFinance,
        Family::BusinessStrategy,
        Family::IndustrialOrganization,
        Family::MultinationalEnterprise,
        Family::HealthEconomics,
    ];

    /// Route-segment identifier for this family.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PublicFinance => "public-finance",
            Self::BusinessStrategy => "business-strategy",
            Self::IndustrialOrganization => "industrial-organization",
            Self::MultinationalEnterprise => "multinational-enterprise",
            Self::HealthEconomics => "health-economics",
        }
    }

    /// Parse from a route-segment identifier.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "public-finance" => Some(Self::PublicFinance),
            "business-strategy" => Some(Self::BusinessStrategy),
            "industrial-organization" => Some(Self::IndustrialOrganization),
            "multinational-enterprise" => Some(Self::MultinationalEnterprise),
            "health-economics" => Some(Self::HealthEconomics),
            _ => None,
        }
    }

    /// Parsing configuration for this family's source document.
    pub fn config(&self) -> &'static FamilyConfig {
        match self {
            Self::PublicFinance => &PUBLIC_FINANCE,
            Self::BusinessStrategy => &BUSINESS_STRATEGY,
            Self::IndustrialOrganization => &INDUSTRIAL_ORGANIZATION,
            Self::MultinationalEnterprise => &MULTINATIONAL_ENTERPRISE,
            Self::HealthEconomics => &HEALTH_ECONOMICS,
        }
    }
}

/// Which inline convention marks a fill-in-the-blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlankRule {
    /// A `**…**` span whose content has at least one underscore and no
    /// letter, hiragana, katakana or CJK ideograph. Emphasized vocabulary
    /// terms stay plain text.
    UnderscoreEmphasis,
    /// Any run of twelve consecutive underscores, with or without
    /// surrounding emphasis markers.
    TwelveUnderscores,
}

/// Shape of a category heading line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingRule {
    /// `#### <name> (<english>)`
    NamedWithEnglish,
    /// `#### **第<n>章 <title>**`
    BoldChapter,
    /// A standalone `**<name> (<english>)**` line.
    BoldNamedWithEnglish,
}

/// How categories from one document are ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryOrder {
    /// Position of the matching metadata entry; unmatched names sort last.
    RankTable,
    /// Ascending chapter number; headings without one sort last.
    ChapterNumber,
    /// Plain name comparison.
    Lexicographic,
}

/// Answer-line conventions enabled for a family, tried in priority order.
#[derive(Debug, Clone, Copy)]
pub struct AnswerConventions {
    /// Entire trimmed line is one `**…**` pair.
    pub bold_line: bool,
    /// `①`–`⑩` followed by a bolded span.
    pub circled_items: bool,
    /// Every bolded span in the line, left to right.
    pub bold_list: bool,
    /// Split on `、` `，` `,` `と`.
    pub delimiter_fallback: bool,
}

/// Static display metadata for a category heading.
#[derive(Debug, Clone, Copy)]
pub struct CategoryMeta {
    /// Source-language heading name the entry matches on.
    pub name: &'static str,
    pub id: &'static str,
    pub name_en: &'static str,
    pub description: &'static str,
}

/// Question-number range owned by one chapter, for documents whose answer
/// key has no category headings of its own.
#[derive(Debug, Clone, Copy)]
pub struct AnswerRange {
    pub start: u32,
    pub end: u32,
    pub chapter: u32,
}

/// Everything the shared pipeline needs to parse one document family.
#[derive(Debug, Clone, Copy)]
pub struct FamilyConfig {
    /// File name under the store root.
    pub source_file: &'static str,
    /// Literal separating the questions region from the answer key.
    pub boundary: &'static str,
    pub heading_rule: HeadingRule,
    pub blank_rule: BlankRule,
    pub conventions: AnswerConventions,
    /// Separator used when folding continuation lines into a question body.
    pub join_separator: &'static str,
    /// Drop questions with no detected blanks. The primary family keeps
    /// them; the secondary families require interactivity.
    pub drop_zero_blank: bool,
    pub order: CategoryOrder,
    pub metadata: &'static [CategoryMeta],
    /// Non-empty only for families with a flat answer key.
    pub answer_ranges: &'static [AnswerRange],
}

static PUBLIC_FINANCE: FamilyConfig = FamilyConfig {
    source_file: "exam.md",
    boundary: "### 回答集",
    heading_rule: HeadingRule::NamedWithEnglish,
    blank_rule: BlankRule::UnderscoreEmphasis,
    conventions: AnswerConventions {
        bold_line: true,
        circled_items: true,
        bold_list: true,
        delimiter_fallback: false,
    },
    join_separator: " ",
    drop_zero_blank: false,
    order: CategoryOrder::RankTable,
    metadata: &[
        CategoryMeta {
            name: "財政学と政府",
            id: "public-finance",
            name_en: "Public Finance and Government",
            description: "政府支出、課税、政府の経済活動に関する基本概念",
        },
        CategoryMeta {
            name: "市場機能と政府の役割",
            id: "market-government",
            name_en: "Market Functions and the Role of Government",
            description: "市場の失敗、外部性、公共財の理論",
        },
        CategoryMeta {
            name: "公共財",
            id: "public-goods",
            name_en: "Public Goods",
            description: "公共財の特性、効率的供給、ただ乗り問題",
        },
        CategoryMeta {
            name: "外部性",
            id: "externalities",
            name_en: "Externalities",
            description: "外部効果、ピグー税、コーズ定理",
        },
        CategoryMeta {
            name: "社会保障",
            id: "social-security",
            name_en: "Social Security",
            description: "社会保険、年金制度、所得再分配",
        },
    ],
    answer_ranges: &[],
};

static BUSINESS_STRATEGY: FamilyConfig = FamilyConfig {
    source_file: "exam2.md",
    boundary: "### 解答集",
    heading_rule: HeadingRule::BoldChapter,
    blank_rule: BlankRule::TwelveUnderscores,
    conventions: AnswerConventions {
        bold_line: true,
        circled_items: false,
        bold_list: true,
        delimiter_fallback: true,
    },
    join_separator: "\n",
    drop_zero_blank: true,
    order: CategoryOrder::ChapterNumber,
    metadata: &[],
    answer_ranges: &[],
};

static INDUSTRIAL_ORGANIZATION: FamilyConfig = FamilyConfig {
    source_file: "exam3.md",
    boundary: "## 解答",
    heading_rule: HeadingRule::BoldChapter,
    blank_rule: BlankRule::TwelveUnderscores,
    conventions: AnswerConventions {
        bold_line: true,
        circled_items: false,
        bold_list: false,
        delimiter_fallback: true,
    },
    join_separator: "\n",
    drop_zero_blank: true,
    order: CategoryOrder::ChapterNumber,
    metadata: &[],
    // The answer key is flat; chapter ownership comes from these ranges.
    answer_ranges: &[
        AnswerRange { start: 1, end: 12, chapter: 1 },
        AnswerRange { start: 13, end: 24, chapter: 2 },
        AnswerRange { start: 25, end: 36, chapter: 3 },
        AnswerRange { start: 37, end: 48, chapter: 4 },
        AnswerRange { start: 49, end: 60, chapter: 5 },
    ],
};

static MULTINATIONAL_ENTERPRISE: FamilyConfig = FamilyConfig {
    source_file: "exam4.md",
    boundary: "### 回答一覧",
    heading_rule: HeadingRule::BoldNamedWithEnglish,
    blank_rule: BlankRule::TwelveUnderscores,
    conventions: AnswerConventions {
        bold_line: true,
        circled_items: true,
        bold_list: false,
        delimiter_fallback: true,
    },
    join_separator: "\n",
    drop_zero_blank: true,
    order: CategoryOrder::Lexicographic,
    metadata: &[],
    answer_ranges: &[],
};

static HEALTH_ECONOMICS: FamilyConfig = FamilyConfig {
    source_file: "exam5.md",
    boundary: "### 解答集",
    heading_rule: HeadingRule::BoldChapter,
    blank_rule: BlankRule::TwelveUnderscores,
    conventions: AnswerConventions {
        bold_line: true,
        circled_items: true,
        bold_list: true,
        delimiter_fallback: true,
    },
    join_separator: "\n",
    drop_zero_blank: true,
    order: CategoryOrder::ChapterNumber,
    metadata: &[],
    answer_ranges: &[],
};

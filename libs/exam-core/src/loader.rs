//! Cached document loading.
//!
//! One read-through cache slot per document family, populated on first
//! request and kept for the process lifetime; source documents are static
//! at deploy time. Population is single-flight: concurrent first requests
//! coalesce onto one read-and-parse.

use std::path::{Path, PathBuf};

use tokio::sync::OnceCell;
use tracing::debug;

use crate::error::{ExamError, Result};
use crate::family::Family;
use crate::parser::parse_document;
use crate::types::{Category, CategorySummary};

/// Read-only store over a directory holding one document per family.
#[derive(Debug)]
pub struct ExamStore {
    root: PathBuf,
    slots: [OnceCell<Vec<Category>>; 5],
}

impl ExamStore {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            slots: std::array::from_fn(|_| OnceCell::new()),
        }
    }

    /// Summary view of every category in a family, no question bodies.
    pub async fn all_categories(&self, family: Family) -> Result<Vec<CategorySummary>> {
        Ok(self
            .categories(family)
            .await?
            .iter()
            .map(Category::summary)
            .collect())
    }

    /// Full category record including questions and expected answers.
    /// `None` when the id is unknown within the family.
    pub async fn category(&self, family: Family, id: &str) -> Result<Option<Category>> {
        Ok(self
            .categories(family)
            .await?
            .iter()
            .find(|category| category.id == id)
            .cloned())
    }

    /// Parsed categories for a family, loading on first access.
    ///
    /// An unreadable source propagates as [`ExamError::SourceUnavailable`]
    /// and leaves the slot unpopulated, so a later request retries.
    async fn categories(&self, family: Family) -> Result<&[Category]> {
        let config = family.config();
        let categories = self.slots[family as usize]
            .get_or_try_init(|| async {
                let path = self.root.join(config.source_file);
                debug!(family = family.as_str(), path = %path.display(), "loading exam document");
                let content = tokio::fs::read_to_string(&path)
                    .await
                    .map_err(|source| ExamError::SourceUnavailable { path, source })?;
                Ok(parse_document(&content, config))
            })
            .await?;
        Ok(categories)
    }
}

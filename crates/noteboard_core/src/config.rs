//! Board seed configuration.
//!
//! # Responsibility
//! - Describe the fixed category set a board starts with.
//! - Reject seeds that would break category uniqueness.
//!
//! # Invariants
//! - A valid config has at least one category.
//! - Category ids are non-blank and unique; names are non-blank.

use crate::model::category::{Category, CategoryId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// One category created at board initialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySeed {
    pub id: CategoryId,
    pub name: String,
}

impl CategorySeed {
    pub fn new(id: impl Into<CategoryId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Board initialization settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Categories in display order.
    pub categories: Vec<CategorySeed>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            categories: vec![
                CategorySeed::new("category1", "Category 1"),
                CategorySeed::new("category2", "Category 2"),
            ],
        }
    }
}

/// Errors from board config validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Config lists no categories.
    NoCategories,
    /// Seed at this position has a blank id.
    BlankCategoryId(usize),
    /// Seed with this id has a blank name.
    BlankCategoryName(CategoryId),
    /// Two seeds share this id.
    DuplicateCategoryId(CategoryId),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoCategories => write!(f, "board config must list at least one category"),
            Self::BlankCategoryId(position) => {
                write!(f, "category seed #{position} has a blank id")
            }
            Self::BlankCategoryName(id) => write!(f, "category `{id}` has a blank name"),
            Self::DuplicateCategoryId(id) => write!(f, "duplicate category id `{id}`"),
        }
    }
}

impl Error for ConfigError {}

impl BoardConfig {
    /// Validates seed invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.categories.is_empty() {
            return Err(ConfigError::NoCategories);
        }

        let mut seen = HashSet::new();
        for (position, seed) in self.categories.iter().enumerate() {
            if seed.id.trim().is_empty() {
                return Err(ConfigError::BlankCategoryId(position));
            }
            if seed.name.trim().is_empty() {
                return Err(ConfigError::BlankCategoryName(seed.id.clone()));
            }
            if !seen.insert(seed.id.as_str()) {
                return Err(ConfigError::DuplicateCategoryId(seed.id.clone()));
            }
        }
        Ok(())
    }

    /// Builds empty categories in seed order. Call [`validate`](Self::validate) first.
    pub(crate) fn build_categories(&self) -> Vec<Category> {
        self.categories
            .iter()
            .map(|seed| Category::new(seed.id.clone(), seed.name.clone()))
            .collect()
    }
}

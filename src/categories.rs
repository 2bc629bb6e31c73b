//! Category list handling.
//!
//! The ordered category list is the single source of truth for class
//! indices: position `i` in the list is the class index written into every
//! label file and the index of `names[i]` in the training manifest.

use crate::error::YoloPrepError;

/// Default waste categories, in class-index order.
pub const DEFAULT_CATEGORIES: [&str; 12] = [
    "battery",
    "biological",
    "brown-glass",
    "cardboard",
    "clothes",
    "green-glass",
    "metal",
    "paper",
    "plastic",
    "shoes",
    "trash",
    "white-glass",
];

/// A fixed, ordered list of class labels.
///
/// Immutable for the duration of a run. Construction rejects empty lists,
/// empty names, and duplicate names so a bad `--categories` flag fails
/// before any files are touched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryList {
    names: Vec<String>,
}

impl CategoryList {
    /// Creates a category list, validating order-sensitive invariants.
    pub fn new(names: Vec<String>) -> Result<Self, YoloPrepError> {
        if names.is_empty() {
            return Err(YoloPrepError::InvalidCategories {
                message: "category list must not be empty".to_string(),
            });
        }

        for (idx, name) in names.iter().enumerate() {
            if name.trim().is_empty() {
                return Err(YoloPrepError::InvalidCategories {
                    message: format!("category at index {} has an empty name", idx),
                });
            }

            if let Some(first) = names[..idx].iter().position(|n| n == name) {
                return Err(YoloPrepError::InvalidCategories {
                    message: format!(
                        "duplicate category '{}' (indices {} and {})",
                        name, first, idx
                    ),
                });
            }
        }

        Ok(Self { names })
    }

    /// The default waste category list.
    pub fn default_waste() -> Self {
        Self {
            names: DEFAULT_CATEGORIES.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Number of categories (`nc` in the manifest).
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Category names in class-index order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Iterate `(class_index, name)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.names.iter().enumerate().map(|(i, n)| (i, n.as_str()))
    }
}

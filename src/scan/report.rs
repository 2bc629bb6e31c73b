//! Scan report types and terminal formatting.

use serde::Serialize;
use std::fmt;

/// Per-category image counts for a source tree.
#[derive(Clone, Debug, Serialize)]
pub struct ScanReport {
    /// One entry per category, in class-index order.
    pub categories: Vec<CategoryCount>,
    /// Total images across all categories.
    pub total_images: usize,
}

/// Image count for a single category.
#[derive(Clone, Debug, Serialize)]
pub struct CategoryCount {
    /// Class index used in label files.
    pub class_index: usize,
    /// Category name.
    pub name: String,
    /// Number of images found.
    pub count: usize,
    /// Whether the category directory exists at all.
    pub directory_present: bool,
}

impl ScanReport {
    /// Categories with no usable images (empty or missing directory).
    pub fn empty_categories(&self) -> impl Iterator<Item = &CategoryCount> {
        self.categories.iter().filter(|c| c.count == 0)
    }
}

impl fmt::Display for ScanReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total images: {}", self.total_images)?;
        writeln!(f)?;
        writeln!(f, "Images per category:")?;

        for category in &self.categories {
            if category.directory_present {
                writeln!(f, "  {}: {} image(s)", category.name, category.count)?;
            } else {
                writeln!(f, "  {}: 0 image(s) (directory missing)", category.name)?;
            }
        }

        Ok(())
    }
}

//! Conversion report types and terminal formatting.

use serde::Serialize;
use std::fmt;

use crate::layout::Split;

/// Images written per split.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SplitCounts {
    pub train: usize,
    pub val: usize,
    pub test: usize,
}

impl SplitCounts {
    pub fn total(&self) -> usize {
        self.train + self.val + self.test
    }

    fn bump(&mut self, split: Split) {
        match split {
            Split::Train => self.train += 1,
            Split::Val => self.val += 1,
            Split::Test => self.test += 1,
        }
    }
}

/// Outcome for a single converted category.
#[derive(Clone, Debug, Serialize)]
pub struct CategoryOutcome {
    pub class_index: usize,
    pub name: String,
    pub written: SplitCounts,
    /// Images dropped by the per-item failure policy.
    pub skipped: usize,
}

impl CategoryOutcome {
    pub fn new(class_index: usize, name: impl Into<String>) -> Self {
        Self {
            class_index,
            name: name.into(),
            written: SplitCounts::default(),
            skipped: 0,
        }
    }

    pub fn record_written(&mut self, split: Split) {
        self.written.bump(split);
    }
}

/// Summary of a conversion run.
#[derive(Clone, Debug, Default, Serialize)]
pub struct ConvertReport {
    /// One entry per converted category, in class-index order.
    pub categories: Vec<CategoryOutcome>,
    /// Categories with no images (empty or missing directory), by name.
    pub empty_categories: Vec<String>,
    /// Images written, summed across categories.
    pub totals: SplitCounts,
    /// Images skipped, summed across categories.
    pub total_skipped: usize,
}

impl ConvertReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_category(&mut self, outcome: CategoryOutcome) {
        self.totals.train += outcome.written.train;
        self.totals.val += outcome.written.val;
        self.totals.test += outcome.written.test;
        self.total_skipped += outcome.skipped;
        self.categories.push(outcome);
    }

    pub fn record_empty(&mut self, name: &str) {
        self.empty_categories.push(name.to_string());
    }

    pub fn total_written(&self) -> usize {
        self.totals.total()
    }
}

impl fmt::Display for ConvertReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Converted {} image(s) (train {}, val {}, test {}), skipped {}",
            self.total_written(),
            self.totals.train,
            self.totals.val,
            self.totals.test,
            self.total_skipped
        )?;

        for category in &self.categories {
            write!(
                f,
                "  {}: {} image(s) (train {}, val {}, test {})",
                category.name,
                category.written.total(),
                category.written.train,
                category.written.val,
                category.written.test
            )?;
            if category.skipped > 0 {
                write!(f, ", {} skipped", category.skipped)?;
            }
            writeln!(f)?;
        }

        for name in &self.empty_categories {
            writeln!(f, "  {}: no images found", name)?;
        }

        Ok(())
    }
}

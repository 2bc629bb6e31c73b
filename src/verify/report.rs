//! Verification report types for structured output checking.

use serde::Serialize;
use std::fmt;

use crate::layout::Split;

/// The result of verifying an output dataset tree.
#[derive(Clone, Debug, Default, Serialize)]
pub struct VerifyReport {
    /// Per-split image/label counts, in split order.
    pub splits: Vec<SplitSummary>,
    /// All findings, all advisory.
    pub issues: Vec<VerifyIssue>,
}

impl VerifyReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_split(&mut self, summary: SplitSummary) {
        self.splits.push(summary);
    }

    pub fn add_issue(&mut self, issue: VerifyIssue) {
        self.issues.push(issue);
    }

    pub fn warning_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Warning)
            .count()
    }

    /// Returns true if there are no findings at all.
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

impl fmt::Display for VerifyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for summary in &self.splits {
            if summary.present {
                writeln!(
                    f,
                    "  {}: {} image(s), {} label(s)",
                    summary.split, summary.images, summary.labels
                )?;
            } else {
                writeln!(f, "  {}: missing directories", summary.split)?;
            }
        }

        if self.issues.is_empty() {
            writeln!(f, "Verification passed: no issues found")?;
        } else {
            writeln!(f, "Verification found {} warning(s):", self.warning_count())?;
            for issue in &self.issues {
                writeln!(f, "  {}", issue)?;
            }
        }

        Ok(())
    }
}

/// Image/label counts for one split.
#[derive(Clone, Debug, Serialize)]
pub struct SplitSummary {
    pub split: String,
    pub images: usize,
    pub labels: usize,
    /// False when the split's directories do not exist.
    pub present: bool,
}

/// A single verification finding.
#[derive(Clone, Debug, Serialize)]
pub struct VerifyIssue {
    pub severity: Severity,
    pub code: VerifyIssueCode,
    pub split: String,
    pub message: String,
}

impl VerifyIssue {
    pub fn warning(code: VerifyIssueCode, split: Split, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            split: split.dir_name().to_string(),
            message: message.into(),
        }
    }
}

impl fmt::Display for VerifyIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let severity = match self.severity {
            Severity::Warning => "WARN",
        };
        write!(
            f,
            "[{}] {:?} in {}: {}",
            severity, self.code, self.split, self.message
        )
    }
}

/// The severity of a verification finding.
///
/// Verification never fails a run, so only a warning level exists.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Severity {
    Warning,
}

/// A stable code identifying the type of verification finding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum VerifyIssueCode {
    /// A split's images/ or labels/ directory does not exist.
    MissingSplitDirs,
    /// A split has differing image and label file counts.
    CountMismatch,
    /// An image file has no label file with the same stem.
    ImageWithoutLabel,
    /// A label file has no image file with the same stem.
    LabelWithoutImage,
}

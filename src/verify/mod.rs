//! Output dataset verification.
//!
//! Verification is advisory: every finding is a warning in the report and
//! nothing here aborts a run. The core check is the 1:1 invariant between a
//! split's `images/` and `labels/` trees.

mod report;

pub use report::{Severity, SplitSummary, VerifyIssue, VerifyIssueCode, VerifyReport};

use std::collections::BTreeSet;

use crate::layout::{file_stem, list_image_files, list_label_files, OutputLayout, Split};

/// Check each split of an output tree for image/label consistency.
pub fn verify(layout: &OutputLayout) -> VerifyReport {
    let mut report = VerifyReport::new();

    for split in Split::ALL {
        let images_dir = layout.images_dir(split);
        let labels_dir = layout.labels_dir(split);

        if !images_dir.is_dir() || !labels_dir.is_dir() {
            report.add_issue(VerifyIssue::warning(
                VerifyIssueCode::MissingSplitDirs,
                split,
                "images/ or labels/ directory is missing".to_string(),
            ));
            report.add_split(SplitSummary {
                split: split.dir_name().to_string(),
                images: 0,
                labels: 0,
                present: false,
            });
            continue;
        }

        let images = list_image_files(&images_dir);
        let labels = list_label_files(&labels_dir);

        report.add_split(SplitSummary {
            split: split.dir_name().to_string(),
            images: images.len(),
            labels: labels.len(),
            present: true,
        });

        if images.len() != labels.len() {
            report.add_issue(VerifyIssue::warning(
                VerifyIssueCode::CountMismatch,
                split,
                format!(
                    "{} image(s) but {} label file(s)",
                    images.len(),
                    labels.len()
                ),
            ));
        }

        let image_stems: BTreeSet<String> =
            images.iter().map(|name| file_stem(name).to_string()).collect();
        let label_stems: BTreeSet<String> =
            labels.iter().map(|name| file_stem(name).to_string()).collect();

        for stem in image_stems.difference(&label_stems) {
            report.add_issue(VerifyIssue::warning(
                VerifyIssueCode::ImageWithoutLabel,
                split,
                format!("image '{}' has no label file", stem),
            ));
        }

        for stem in label_stems.difference(&image_stems) {
            report.add_issue(VerifyIssue::warning(
                VerifyIssueCode::LabelWithoutImage,
                split,
                format!("label '{}' has no image", stem),
            ));
        }
    }

    report
}

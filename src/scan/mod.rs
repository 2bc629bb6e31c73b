//! Source dataset scanning.

mod report;

pub use report::{CategoryCount, ScanReport};

use std::path::Path;

use crate::categories::CategoryList;
use crate::layout::list_image_files;

/// Count the images available for each category under `source`.
///
/// A category whose directory is absent is reported with a count of zero
/// rather than failing; source trees are often partially populated while a
/// dataset is still being collected.
pub fn scan(categories: &CategoryList, source: &Path) -> ScanReport {
    let mut counts = Vec::with_capacity(categories.len());
    let mut total = 0;

    for (class_index, name) in categories.iter() {
        let dir = source.join(name);
        let present = dir.is_dir();
        let count = if present {
            list_image_files(&dir).len()
        } else {
            0
        };

        total += count;
        counts.push(CategoryCount {
            class_index,
            name: name.to_string(),
            count,
            directory_present: present,
        });
    }

    ScanReport {
        categories: counts,
        total_images: total,
    }
}

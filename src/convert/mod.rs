//! Conversion from a class-per-folder tree to a YOLO detection dataset.
//!
//! Every image receives a single synthetic annotation covering the whole
//! frame, since the source tree carries class information only at the
//! directory level. Planning (which image lands in which split) is pure and
//! lives in [`crate::plan`]; this module applies a plan to the filesystem.

mod report;

pub use report::{CategoryOutcome, ConvertReport, SplitCounts};

use std::fs;
use std::path::Path;

use log::warn;

use crate::categories::CategoryList;
use crate::error::YoloPrepError;
use crate::layout::{file_stem, list_image_files, OutputLayout, Split};
use crate::plan::{plan_category, SplitFractions};

/// Normalized full-frame bounding box: center (0.5, 0.5), size 1.0 x 1.0.
const FULL_IMAGE_BOX: &str = "0.5 0.5 1.0 1.0";

/// The label file content for one image of the given class.
fn label_line(class_index: usize) -> String {
    format!("{} {}\n", class_index, FULL_IMAGE_BOX)
}

/// Convert `source` into a YOLO dataset under `layout`.
///
/// Fatal errors are limited to a missing source root and output directory
/// creation. Per-image failures (unreadable image, copy or label write
/// error) are logged and counted as skipped without aborting the batch.
pub fn convert(
    categories: &CategoryList,
    source: &Path,
    layout: &OutputLayout,
    fractions: SplitFractions,
    seed: u64,
) -> Result<ConvertReport, YoloPrepError> {
    if !source.is_dir() {
        return Err(YoloPrepError::SourceMissing {
            path: source.to_path_buf(),
        });
    }

    layout.create()?;

    let mut report = ConvertReport::new();

    for (class_index, category) in categories.iter() {
        let category_dir = source.join(category);
        let files = list_image_files(&category_dir);

        if files.is_empty() {
            report.record_empty(category);
            continue;
        }

        let plan = plan_category(files, fractions, seed);
        let mut outcome = CategoryOutcome::new(class_index, category);

        for (split, split_files) in plan.iter() {
            for file_name in split_files {
                match write_image_and_label(
                    &category_dir,
                    file_name,
                    category,
                    class_index,
                    layout,
                    split,
                ) {
                    Ok(()) => outcome.record_written(split),
                    Err(err) => {
                        warn!(
                            "skipping {}/{}: {}",
                            category, file_name, err
                        );
                        outcome.skipped += 1;
                    }
                }
            }
        }

        report.record_category(outcome);
    }

    Ok(report)
}

/// Copy one image into its split and write the matching label file.
fn write_image_and_label(
    category_dir: &Path,
    file_name: &str,
    category: &str,
    class_index: usize,
    layout: &OutputLayout,
    split: Split,
) -> Result<(), std::io::Error> {
    let src = category_dir.join(file_name);

    // Probe the image header before copying anything so a corrupt file
    // leaves no partial output behind.
    imagesize::size(&src).map_err(|err| {
        std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!("unreadable image: {}", err),
        )
    })?;

    // Prefixing with the category name avoids collisions between categories
    // that contain identically named files.
    let image_dst = layout
        .images_dir(split)
        .join(format!("{}_{}", category, file_name));
    fs::copy(&src, &image_dst)?;

    let label_dst = layout
        .labels_dir(split)
        .join(format!("{}_{}.txt", category, file_stem(file_name)));

    if let Err(err) = fs::write(&label_dst, label_line(class_index)) {
        // Remove the copied image so the images/labels trees stay 1:1.
        let _ = fs::remove_file(&image_dst);
        return Err(err);
    }

    Ok(())
}

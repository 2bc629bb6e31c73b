//! Dataset archive extraction.
//!
//! Waste image collections are commonly distributed as a ZIP of category
//! folders; `extract` unpacks one into the source root so a `scan` or
//! `convert` can run against it directly.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::YoloPrepError;

/// Extract `archive` into `dest`.
///
/// Entry paths are required to stay inside `dest`; entries that would
/// escape it (absolute paths, `..` components) fail the whole extraction.
pub fn extract(archive_path: &Path, dest: &Path) -> Result<usize, YoloPrepError> {
    let file = fs::File::open(archive_path)?;
    let mut archive =
        zip::ZipArchive::new(file).map_err(|source| YoloPrepError::ArchiveRead {
            path: archive_path.to_path_buf(),
            source,
        })?;

    fs::create_dir_all(dest).map_err(|source| YoloPrepError::OutputSetup {
        path: dest.to_path_buf(),
        source,
    })?;

    let mut extracted = 0;

    for index in 0..archive.len() {
        let mut entry = archive
            .by_index(index)
            .map_err(|source| YoloPrepError::ArchiveRead {
                path: archive_path.to_path_buf(),
                source,
            })?;

        let Some(relative) = entry.enclosed_name() else {
            return Err(YoloPrepError::ArchiveEntry {
                path: archive_path.to_path_buf(),
                message: format!("entry '{}' escapes the destination", entry.name()),
            });
        };
        let target = dest.join(relative);

        if entry.is_dir() {
            fs::create_dir_all(&target)?;
            continue;
        }

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut out = fs::File::create(&target)?;
        io::copy(&mut entry, &mut out)?;
        extracted += 1;
    }

    Ok(extracted)
}

//! Source and output filesystem layout.
//!
//! The source tree is one flat directory per category
//! (`<source>/<category>/*.jpg`). The output tree is the Ultralytics-style
//! `<out>/{train,val,test}/{images,labels}` layout.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::YoloPrepError;

/// Image extensions accepted in the source tree, matched case-insensitively.
pub const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "tiff"];

/// Extension used for label files.
pub const LABEL_EXTENSION: &str = "txt";

/// The three dataset splits, in output order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Split {
    Train,
    Val,
    Test,
}

impl Split {
    pub const ALL: [Split; 3] = [Split::Train, Split::Val, Split::Test];

    /// Directory name for this split.
    pub fn dir_name(&self) -> &'static str {
        match self {
            Split::Train => "train",
            Split::Val => "val",
            Split::Test => "test",
        }
    }
}

impl std::fmt::Display for Split {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.dir_name())
    }
}

/// Resolved paths for the output dataset tree.
#[derive(Clone, Debug)]
pub struct OutputLayout {
    root: PathBuf,
}

impl OutputLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn images_dir(&self, split: Split) -> PathBuf {
        self.root.join(split.dir_name()).join("images")
    }

    pub fn labels_dir(&self, split: Split) -> PathBuf {
        self.root.join(split.dir_name()).join("labels")
    }

    /// Create the full `{train,val,test}/{images,labels}` tree.
    ///
    /// This is the only fatal filesystem operation in a conversion run: with
    /// no destination there is nothing to write to.
    pub fn create(&self) -> Result<(), YoloPrepError> {
        for split in Split::ALL {
            for dir in [self.images_dir(split), self.labels_dir(split)] {
                fs::create_dir_all(&dir).map_err(|source| YoloPrepError::OutputSetup {
                    path: dir.clone(),
                    source,
                })?;
            }
        }
        Ok(())
    }
}

/// Create the source category skeleton (`<source>/<category>/`).
pub fn create_source_skeleton(source: &Path, categories: &[String]) -> Result<(), YoloPrepError> {
    for category in categories {
        let dir = source.join(category);
        fs::create_dir_all(&dir).map_err(|source| YoloPrepError::OutputSetup {
            path: dir.clone(),
            source,
        })?;
    }
    Ok(())
}

/// List image filenames directly inside `dir`, sorted by name.
///
/// Returns an empty list when the directory does not exist; partially
/// populated source trees are expected during dataset collection. Nested
/// directories are not descended into, matching the flat source layout.
pub fn list_image_files(dir: &Path) -> Vec<String> {
    list_files_with_extensions(dir, &IMAGE_EXTENSIONS)
}

/// List label filenames directly inside `dir`, sorted by name.
pub fn list_label_files(dir: &Path) -> Vec<String> {
    list_files_with_extensions(dir, &[LABEL_EXTENSION])
}

fn list_files_with_extensions(dir: &Path, extensions: &[&str]) -> Vec<String> {
    if !dir.is_dir() {
        return Vec::new();
    }

    let mut files: Vec<String> = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file() && has_extension(entry.path(), extensions))
        .filter_map(|entry| entry.file_name().to_str().map(str::to_string))
        .collect();

    files.sort();
    files
}

fn has_extension(path: &Path, allowed: &[&str]) -> bool {
    let Some(ext) = path.extension().and_then(|ext| ext.to_str()) else {
        return false;
    };

    allowed
        .iter()
        .any(|allowed_ext| ext.eq_ignore_ascii_case(allowed_ext))
}

/// File stem (name without the final extension) for an image filename.
pub fn file_stem(file_name: &str) -> &str {
    match file_name.rsplit_once('.') {
        Some((stem, _)) => stem,
        None => file_name,
    }
}

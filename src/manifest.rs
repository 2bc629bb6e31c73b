//! YOLO training manifest (`waste_classification.yaml`).
//!
//! The manifest is built field-by-field through [`ManifestBuilder`], which
//! rejects assigning the same field twice. `nc` is derived from `names` at
//! build time, so the `nc == names.len()` invariant cannot be violated by
//! construction.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::categories::CategoryList;
use crate::error::YoloPrepError;

/// The YAML document consumed by YOLO training tools.
///
/// `names` is ordered: `names[i]` is the class written as index `i` in
/// label files.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetManifest {
    pub path: String,
    pub train: String,
    pub val: String,
    pub test: String,
    pub nc: usize,
    pub names: Vec<String>,
}

impl DatasetManifest {
    /// Standard manifest for an output tree rooted at `dataset_root`.
    pub fn for_dataset(
        dataset_root: &str,
        categories: &CategoryList,
    ) -> Result<Self, YoloPrepError> {
        ManifestBuilder::new()
            .path(dataset_root)?
            .train("train/images")?
            .val("val/images")?
            .test("test/images")?
            .names(categories.names().to_vec())?
            .build()
    }

    /// Serialize to YAML and write to `manifest_path`.
    pub fn write(&self, manifest_path: &Path) -> Result<(), YoloPrepError> {
        let yaml =
            serde_yaml::to_string(self).map_err(|source| YoloPrepError::ManifestWrite {
                path: manifest_path.to_path_buf(),
                source,
            })?;
        fs::write(manifest_path, yaml)?;
        Ok(())
    }
}

/// Field-by-field manifest builder.
///
/// Each setter may be called at most once; a second assignment is an error
/// rather than silent last-write-wins precedence.
#[derive(Clone, Debug, Default)]
pub struct ManifestBuilder {
    path: Option<String>,
    train: Option<String>,
    val: Option<String>,
    test: Option<String>,
    names: Option<Vec<String>>,
}

impl ManifestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn path(mut self, value: impl Into<String>) -> Result<Self, YoloPrepError> {
        Self::set(&mut self.path, value.into(), "path")?;
        Ok(self)
    }

    pub fn train(mut self, value: impl Into<String>) -> Result<Self, YoloPrepError> {
        Self::set(&mut self.train, value.into(), "train")?;
        Ok(self)
    }

    pub fn val(mut self, value: impl Into<String>) -> Result<Self, YoloPrepError> {
        Self::set(&mut self.val, value.into(), "val")?;
        Ok(self)
    }

    pub fn test(mut self, value: impl Into<String>) -> Result<Self, YoloPrepError> {
        Self::set(&mut self.test, value.into(), "test")?;
        Ok(self)
    }

    pub fn names(mut self, value: Vec<String>) -> Result<Self, YoloPrepError> {
        Self::set(&mut self.names, value, "names")?;
        Ok(self)
    }

    fn set<T>(slot: &mut Option<T>, value: T, field: &'static str) -> Result<(), YoloPrepError> {
        if slot.is_some() {
            return Err(YoloPrepError::DuplicateManifestField { field });
        }
        *slot = Some(value);
        Ok(())
    }

    pub fn build(self) -> Result<DatasetManifest, YoloPrepError> {
        let names = Self::require(self.names, "names")?;
        Ok(DatasetManifest {
            path: Self::require(self.path, "path")?,
            train: Self::require(self.train, "train")?,
            val: Self::require(self.val, "val")?,
            test: Self::require(self.test, "test")?,
            nc: names.len(),
            names,
        })
    }

    fn require<T>(slot: Option<T>, field: &'static str) -> Result<T, YoloPrepError> {
        slot.ok_or(YoloPrepError::MissingManifestField { field })
    }
}

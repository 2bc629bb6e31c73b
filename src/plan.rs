//! Deterministic split planning.
//!
//! Planning is a pure function from (sorted file listing, fractions, seed)
//! to a three-way partition, kept separate from the copy/annotate side
//! effects so the partition logic can be unit-tested without touching the
//! filesystem.

use rand::seq::SliceRandom;
use rand::{rngs::StdRng, SeedableRng};

use crate::error::YoloPrepError;
use crate::layout::Split;

/// Train/val fractions; the test fraction is the remainder.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SplitFractions {
    pub train: f64,
    pub val: f64,
}

impl Default for SplitFractions {
    fn default() -> Self {
        Self {
            train: 0.7,
            val: 0.2,
        }
    }
}

impl SplitFractions {
    /// Validates that each fraction is in [0, 1] and they sum to at most 1.
    pub fn new(train: f64, val: f64) -> Result<Self, YoloPrepError> {
        for (name, value) in [("train", train), ("val", val)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(YoloPrepError::InvalidFractions {
                    message: format!("{} fraction {} must be between 0.0 and 1.0", name, value),
                });
            }
        }

        if train + val > 1.0 {
            return Err(YoloPrepError::InvalidFractions {
                message: format!(
                    "train ({}) + val ({}) must not exceed 1.0; test takes the remainder",
                    train, val
                ),
            });
        }

        Ok(Self { train, val })
    }
}

/// The planned partition of one category's images.
///
/// The three subsets are pairwise disjoint and jointly exhaustive over the
/// input listing. Any subset may be empty for small categories; that is not
/// an error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SplitPlan {
    pub train: Vec<String>,
    pub val: Vec<String>,
    pub test: Vec<String>,
}

impl SplitPlan {
    pub fn total(&self) -> usize {
        self.train.len() + self.val.len() + self.test.len()
    }

    /// Iterate `(split, files)` pairs in output order.
    pub fn iter(&self) -> impl Iterator<Item = (Split, &[String])> {
        [
            (Split::Train, self.train.as_slice()),
            (Split::Val, self.val.as_slice()),
            (Split::Test, self.test.as_slice()),
        ]
        .into_iter()
    }
}

/// Plan one category's split.
///
/// The listing is sorted before shuffling so the plan depends only on the
/// set of filenames and the seed, not on directory iteration order. Each
/// category is planned with a fresh seeded RNG, making plans independent of
/// how many categories came before.
pub fn plan_category(mut files: Vec<String>, fractions: SplitFractions, seed: u64) -> SplitPlan {
    files.sort();

    let mut rng = StdRng::seed_from_u64(seed);
    files.shuffle(&mut rng);

    let n = files.len();
    let n_train = ((fractions.train * n as f64).floor() as usize).min(n);
    let n_val = ((fractions.val * n as f64).floor() as usize).min(n - n_train);

    let test = files.split_off(n_train + n_val);
    let val = files.split_off(n_train);
    let train = files;

    SplitPlan { train, val, test }
}

//! Hot take generation.
//!
//! This module provides:
//!
//! - **Engine**: [`resolve_template`] substitutes bracket groups in one template
//! - **Generation**: [`generate`] picks a random template from `takes` and resolves it
//! - **Handle**: [`HotTakes`] owns a shared dataset and exposes a zero-argument `generate`
//!
//! # Template Syntax
//!
//! ```text
//! {person} should rewrite {thing} in {language|technology}
//! ```
//!
//! Names that are not registered placeholders are skipped, so
//! `{person|nobody}` behaves like `{person}`. A group with no registered
//! names at all is an error.

mod engine;


pub use engine::resolve_template;

use crate::dataset::{Category, Dataset};
use crate::error::{HotTakeError, Result};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// Maximum number of images returned with a take.
pub const MAX_IMAGES: usize = 4;

/// A generated take and the images collected while building it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotTake {
    /// Fully resolved text.
    pub take: String,
    /// Replacement images in match order, then template images; at most [`MAX_IMAGES`].
    pub images: Vec<String>,
}

/// Pick a random template from `takes` and resolve it.
///
/// # Errors
///
/// * [`HotTakeError::NoTakes`] if the `takes` category is empty
/// * [`HotTakeError::UnresolvedPlaceholder`] if the chosen template has a
///   bracket group that resolves to nothing
pub fn generate<R>(dataset: &Dataset, rng: &mut R) -> Result<HotTake>
where
    R: Rng + ?Sized,
{
    let template = dataset
        .category(Category::Takes)
        .choose(&mut *rng)
        .ok_or(HotTakeError::NoTakes)?;

    debug!(template = template.value(), "picked template");
    resolve_template(template, dataset, rng)
}

/// A loaded dataset ready to generate takes.
///
/// Cloning the handle shares the dataset; it is never copied per call.
#[derive(Debug, Clone)]
pub struct HotTakes {
    dataset: Arc<Dataset>,
}

impl HotTakes {
    /// Wrap a dataset.
    pub fn new(dataset: Dataset) -> Self {
        Self {
            dataset: Arc::new(dataset),
        }
    }

    /// The dataset behind this handle.
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Generate a take using the thread-local RNG.
    pub fn generate(&self) -> Result<HotTake> {
        generate(&self.dataset, &mut rand::thread_rng())
    }

    /// Generate a take using a caller-supplied RNG.
    pub fn generate_with<R>(&self, rng: &mut R) -> Result<HotTake>
    where
        R: Rng + ?Sized,
    {
        generate(&self.dataset, rng)
    }
}

impl From<Arc<Dataset>> for HotTakes {
    fn from(dataset: Arc<Dataset>) -> Self {
        Self { dataset }
    }
}

//! The hot take dataset: seven named categories of entries.
//!
//! The dataset is loaded once (see [`Dataset::load`]) and is read-only
//! afterwards. Anything derived from it, such as the combined pools built by
//! placeholders, is a fresh allocation.

mod entry;
mod io;

#[cfg(test)]
mod tests;

pub use entry::Entry;

use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed set of category names in a dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    People,
    Companies,
    Languages,
    Technologies,
    Problems,
    Tlds,
    Takes,
}

impl Category {
    /// Every category, in document order.
    pub const ALL: [Category; 7] = [
        Category::People,
        Category::Companies,
        Category::Languages,
        Category::Technologies,
        Category::Problems,
        Category::Tlds,
        Category::Takes,
    ];

    /// The key used for this category in the dataset document.
    pub fn name(self) -> &'static str {
        match self {
            Category::People => "people",
            Category::Companies => "companies",
            Category::Languages => "languages",
            Category::Technologies => "technologies",
            Category::Problems => "problems",
            Category::Tlds => "tlds",
            Category::Takes => "takes",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// All categories of the dataset.
///
/// Every key is required and unknown keys are rejected, so a `Dataset` value
/// always has all seven categories (possibly empty).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Dataset {
    people: Vec<Entry>,
    companies: Vec<Entry>,
    languages: Vec<Entry>,
    technologies: Vec<Entry>,
    problems: Vec<Entry>,
    tlds: Vec<Entry>,
    takes: Vec<Entry>,
}

impl Dataset {
    /// Build a dataset from category lists. Categories not given are empty.
    ///
    /// If a category appears more than once the last list wins.
    pub fn from_categories<I>(categories: I) -> Self
    where
        I: IntoIterator<Item = (Category, Vec<Entry>)>,
    {
        let mut dataset = Dataset::default();
        for (category, entries) in categories {
            *dataset.slot(category) = entries;
        }
        dataset
    }

    /// The entries of one category, in document order.
    pub fn category(&self, category: Category) -> &[Entry] {
        match category {
            Category::People => &self.people,
            Category::Companies => &self.companies,
            Category::Languages => &self.languages,
            Category::Technologies => &self.technologies,
            Category::Problems => &self.problems,
            Category::Tlds => &self.tlds,
            Category::Takes => &self.takes,
        }
    }

    /// Entry counts for every category, in document order.
    pub fn summary(&self) -> Vec<(Category, usize)> {
        Category::ALL
            .iter()
            .map(|&category| (category, self.category(category).len()))
            .collect()
    }

    // Only reachable during construction.
    fn slot(&mut self, category: Category) -> &mut Vec<Entry> {
        match category {
            Category::People => &mut self.people,
            Category::Companies => &mut self.companies,
            Category::Languages => &mut self.languages,
            Category::Technologies => &mut self.technologies,
            Category::Problems => &mut self.problems,
            Category::Tlds => &mut self.tlds,
            Category::Takes => &mut self.takes,
        }
    }
}

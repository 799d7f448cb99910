//! Placeholder definitions and pool resolution.

use crate::dataset::{Category, Dataset, Entry};
use rand::Rng;
use std::fmt;
use std::ops::Range;
use std::str::FromStr;
use thiserror::Error;

/// A named resolver that templates can reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    Language,
    Technology,
    Tld,
    Thing,
    Anything,
    OneWordAnything,
    Person,
    Company,
    Group,
    Problem,
    Year,
    Age,
    BigNumber,
    Percentage,
    OneWordThing,
}

/// Returned when parsing a name that is not in the registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown placeholder '{0}'")]
pub struct UnknownPlaceholder(pub String);

impl Placeholder {
    /// Every registered placeholder.
    pub const ALL: [Placeholder; 15] = [
        Placeholder::Language,
        Placeholder::Technology,
        Placeholder::Tld,
        Placeholder::Thing,
        Placeholder::Anything,
        Placeholder::OneWordAnything,
        Placeholder::Person,
        Placeholder::Company,
        Placeholder::Group,
        Placeholder::Problem,
        Placeholder::Year,
        Placeholder::Age,
        Placeholder::BigNumber,
        Placeholder::Percentage,
        Placeholder::OneWordThing,
    ];

    /// The name used inside template bracket groups.
    pub fn name(self) -> &'static str {
        match self {
            Placeholder::Language => "language",
            Placeholder::Technology => "technology",
            Placeholder::Tld => "tld",
            Placeholder::Thing => "thing",
            Placeholder::Anything => "anything",
            Placeholder::OneWordAnything => "oneWordAnything",
            Placeholder::Person => "person",
            Placeholder::Company => "company",
            Placeholder::Group => "group",
            Placeholder::Problem => "problem",
            Placeholder::Year => "year",
            Placeholder::Age => "age",
            Placeholder::BigNumber => "bigNumber",
            Placeholder::Percentage => "percentage",
            Placeholder::OneWordThing => "oneWordThing",
        }
    }

    /// Look up a placeholder by its template name. Names are case-sensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.name() == name)
    }

    /// Produce the candidate pool for this placeholder.
    ///
    /// `extra` is appended by the aggregate placeholders (`thing`,
    /// `anything`, `group`) and ignored by the rest. The dataset is never
    /// modified; the returned pool is always a new vector.
    pub fn resolve<R>(self, dataset: &Dataset, rng: &mut R, extra: &[Entry]) -> Vec<Entry>
    where
        R: Rng + ?Sized,
    {
        use Category::*;

        match self {
            Placeholder::Language => dataset.category(Languages).to_vec(),
            Placeholder::Technology => dataset.category(Technologies).to_vec(),
            Placeholder::Tld => dataset.category(Tlds).to_vec(),
            Placeholder::Thing => combine(dataset, &[Languages, Technologies], extra),
            Placeholder::Anything => {
                combine(dataset, &[Languages, Technologies, People, Companies], extra)
            }
            Placeholder::Person => dataset.category(People).to_vec(),
            Placeholder::Company => dataset.category(Companies).to_vec(),
            Placeholder::Group => combine(dataset, &[People, Companies], extra),
            Placeholder::Problem => dataset.category(Problems).to_vec(),
            Placeholder::Year => random_number(rng, 1500..2022),
            Placeholder::Age => random_number(rng, 1..50),
            Placeholder::BigNumber => random_number(rng, 2..100_000),
            Placeholder::Percentage => random_number(rng, 1..100),
            Placeholder::OneWordAnything => {
                one_word(Placeholder::Anything.resolve(dataset, rng, &[]))
            }
            Placeholder::OneWordThing => one_word(Placeholder::Thing.resolve(dataset, rng, &[])),
        }
    }
}

impl FromStr for Placeholder {
    type Err = UnknownPlaceholder;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| UnknownPlaceholder(s.to_string()))
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Concatenate categories, then `extra`.
///
/// Order is preserved exactly: all entries of the first category, then each
/// following category in the order listed, then `extra`.
pub fn combine(dataset: &Dataset, categories: &[Category], extra: &[Entry]) -> Vec<Entry> {
    let len = categories
        .iter()
        .map(|&c| dataset.category(c).len())
        .sum::<usize>()
        + extra.len();

    let mut combined = Vec::with_capacity(len);
    for &category in categories {
        combined.extend_from_slice(dataset.category(category));
    }
    combined.extend_from_slice(extra);
    combined
}

fn random_number<R>(rng: &mut R, range: Range<u32>) -> Vec<Entry>
where
    R: Rng + ?Sized,
{
    vec![Entry::Plain(rng.gen_range(range).to_string())]
}

// Only the first space goes; "Ruby on Rails" becomes "Rubyon Rails".
fn one_word(entries: Vec<Entry>) -> Vec<Entry> {
    entries
        .iter()
        .map(|entry| entry.map_text(|text| text.replacen(' ', "", 1)))
        .collect()
}

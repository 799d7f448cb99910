//! Hottakes: randomized hot takes from templated word lists.
//!
//! A dataset holds seven categories of entries. One category, `takes`,
//! contains template sentences with bracket groups like `{person}` or
//! `{language|technology}`; generation picks a template and fills every
//! group with a random entry, collecting any images along the way.
//!
//! ```no_run
//! use hottakes::dataset::Dataset;
//! use hottakes::take::HotTakes;
//!
//! let hot_takes = HotTakes::new(Dataset::load("hotTakeData.json")?);
//! let take = hot_takes.generate()?;
//! println!("{}", take.take);
//! # Ok::<(), hottakes::error::HotTakeError>(())
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod dataset;
pub mod error;
pub mod exit_codes;
pub mod placeholder;
pub mod take;

#[cfg(test)]
pub(crate) mod test_support;

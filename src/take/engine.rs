//! Template resolution.
//!
//! A template is scanned once, left to right, for bracket groups matching
//! `{name}` or `{name1|name2|...}` where names are ASCII word characters.
//! Each group is replaced by the text of an entry picked uniformly from the
//! union of its valid placeholders' pools. Replacement text is never scanned
//! again, so a value containing `{person}` comes out verbatim.

use super::{HotTake, MAX_IMAGES};
use crate::dataset::{Dataset, Entry};
use crate::error::{HotTakeError, Result};
use crate::placeholder::Placeholder;
use rand::Rng;
use rand::seq::SliceRandom;
use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, warn};

static BRACKET_GROUP_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{[[:word:]|]+\}").expect("Invalid bracket group regex"));

/// Resolve every bracket group in `template` and collect images.
///
/// Images from replacements come first, in match order, followed by the
/// template's own images; the list is then cut to [`MAX_IMAGES`].
///
/// # Errors
///
/// Returns [`HotTakeError::UnresolvedPlaceholder`] for the first bracket
/// group whose candidate pool is empty, either because none of its names are
/// registered or because every named pool is empty.
pub fn resolve_template<R>(template: &Entry, dataset: &Dataset, rng: &mut R) -> Result<HotTake>
where
    R: Rng + ?Sized,
{
    let text = template.value();
    let mut take = String::with_capacity(text.len());
    let mut images = Vec::new();
    let mut last_end = 0;

    for group in BRACKET_GROUP_REGEX.find_iter(text) {
        take.push_str(&text[last_end..group.start()]);

        let expression = group.as_str();
        let replacement = pick_replacement(expression, dataset, rng).ok_or_else(|| {
            warn!(expression, template = text, "bracket group has no candidates");
            HotTakeError::UnresolvedPlaceholder {
                expression: expression.to_string(),
                template: text.to_string(),
            }
        })?;

        debug!(expression, value = replacement.value(), "resolved bracket group");
        take.push_str(replacement.value());
        images.extend_from_slice(replacement.images());
        last_end = group.end();
    }
    take.push_str(&text[last_end..]);

    images.extend_from_slice(template.images());
    images.truncate(MAX_IMAGES);

    Ok(HotTake { take, images })
}

/// Pick one entry for a bracket expression, or `None` if its pool is empty.
fn pick_replacement<R>(expression: &str, dataset: &Dataset, rng: &mut R) -> Option<Entry>
where
    R: Rng + ?Sized,
{
    let names = &expression[1..expression.len() - 1];

    let pool: Vec<Entry> = names
        .split('|')
        .filter_map(Placeholder::from_name)
        .flat_map(|placeholder| placeholder.resolve(dataset, &mut *rng, &[]))
        .collect();

    pool.choose(rng).cloned()
}

//! Implementation of the `hottakes stats` command.

use crate::dataset::Dataset;
use crate::error::Result;

/// Print the number of entries in each category.
pub fn cmd_stats(dataset: &Dataset) -> Result<()> {
    println!("{}", render_stats(dataset));
    Ok(())
}

fn render_stats(dataset: &Dataset) -> String {
    dataset
        .summary()
        .into_iter()
        .map(|(category, count)| format!("{:<14}{}", format!("{}:", category), count))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_dataset;

    #[test]
    fn test_render_stats_lists_every_category() {
        let output = render_stats(&sample_dataset());
        let lines: Vec<_> = output.lines().collect();

        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "people:       2");
        assert_eq!(lines[4], "problems:     1");
        assert_eq!(lines[6], "takes:        2");
    }
}

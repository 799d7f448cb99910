//! Implementation of the `hottakes generate` command.

use crate::cli::GenerateArgs;
use crate::config::Config;
use crate::dataset::Dataset;
use crate::error::{HotTakeError, Result};
use crate::take::{HotTake, HotTakes};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use tracing::info;

/// Generate `--count` takes (or the configured count) and print them.
pub fn cmd_generate(args: GenerateArgs, config: &Config, dataset: Dataset) -> Result<()> {
    let count = args.count.unwrap_or(config.count);
    if count == 0 {
        return Err(HotTakeError::UserError(
            "--count must be greater than 0".to_string(),
        ));
    }

    let hot_takes = HotTakes::new(dataset);
    let mut rng: Box<dyn RngCore> = match args.seed {
        Some(seed) => {
            info!(seed, "using seeded generator");
            Box::new(StdRng::seed_from_u64(seed))
        }
        None => Box::new(rand::thread_rng()),
    };

    for _ in 0..count {
        let take = hot_takes.generate_with(&mut *rng)?;
        println!("{}", render_take(&take, args.json)?);
    }

    Ok(())
}

/// Format a take for output.
///
/// Plain output is the take on the first line and one `image: <path>` line
/// per image. JSON output is a single line.
fn render_take(take: &HotTake, json: bool) -> Result<String> {
    if json {
        return serde_json::to_string(take)
            .map_err(|e| HotTakeError::UserError(format!("failed to serialize take: {}", e)));
    }

    let mut out = take.take.clone();
    for image in &take.images {
        out.push_str("\nimage: ");
        out.push_str(image);
    }
    Ok(out)
}

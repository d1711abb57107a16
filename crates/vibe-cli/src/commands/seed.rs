//! Seed command implementation.

use crate::cli::SeedArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use vibe_catalog::Catalog;
use vibe_domain::now_millis;
use vibe_domain::seed::seed_entries;
use vibe_domain::traits::LlmProvider;
use vibe_llm::LlmError;
use vibe_store::KeyValueSlot;

/// Execute the seed command.
///
/// Refuses to replace a saved catalog unless `--force` is given.
pub fn execute_seed<S, L>(
    args: SeedArgs,
    catalog: &mut Catalog<S, L>,
    already_saved: bool,
    formatter: &Formatter,
) -> Result<()>
where
    S: KeyValueSlot,
    L: LlmProvider<Error = LlmError>,
{
    if already_saved && !args.force {
        return Err(CliError::InvalidInput(
            "A catalog is already saved; use --force to replace it with the seed data".to_string(),
        ));
    }

    let count = catalog.reset(seed_entries(now_millis()))?.len();
    println!("{}", formatter.success(&format!("Catalog seeded with {} entries", count)));
    Ok(())
}

//! List command implementation.

use crate::cli::ListArgs;
use crate::error::Result;
use crate::output::Formatter;
use vibe_catalog::Catalog;
use vibe_domain::traits::LlmProvider;
use vibe_domain::CatalogEntry;
use vibe_llm::LlmError;
use vibe_store::KeyValueSlot;

/// Execute the list command.
pub fn execute_list<S, L>(
    args: ListArgs,
    catalog: &Catalog<S, L>,
    formatter: &Formatter,
) -> Result<()>
where
    S: KeyValueSlot,
    L: LlmProvider<Error = LlmError>,
{
    let entries = limited(catalog.list_entries().iter(), args.limit);
    println!("{}", formatter.format_entries(&entries)?);
    Ok(())
}

/// Collect at most `limit` entries.
pub(crate) fn limited<'a>(
    entries: impl Iterator<Item = &'a CatalogEntry>,
    limit: Option<usize>,
) -> Vec<&'a CatalogEntry> {
    entries.take(limit.unwrap_or(usize::MAX)).collect()
}

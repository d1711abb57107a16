//! Show command implementation.

use crate::cli::ShowArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use vibe_catalog::Catalog;
use vibe_domain::traits::LlmProvider;
use vibe_domain::{CatalogEntry, EntryId};
use vibe_llm::LlmError;
use vibe_store::KeyValueSlot;

/// Execute the show command.
///
/// Accepts a full id or any unique prefix, such as the short ids in `list`.
pub fn execute_show<S, L>(
    args: ShowArgs,
    catalog: &Catalog<S, L>,
    formatter: &Formatter,
) -> Result<()>
where
    S: KeyValueSlot,
    L: LlmProvider<Error = LlmError>,
{
    let query = args.id.trim();
    let entry = match catalog.get_entry(&EntryId::new(query)) {
        Some(entry) => entry,
        None => resolve_prefix(catalog.list_entries(), query)?,
    };

    println!("{}", formatter.format_entry(entry)?);
    Ok(())
}

fn resolve_prefix<'a>(entries: &'a [CatalogEntry], prefix: &str) -> Result<&'a CatalogEntry> {
    if prefix.is_empty() {
        return Err(CliError::InvalidInput("Entry id is empty".to_string()));
    }

    let mut matches = entries.iter().filter(|e| e.id.as_str().starts_with(prefix));
    match (matches.next(), matches.next()) {
        (Some(entry), None) => Ok(entry),
        (Some(_), Some(_)) => Err(CliError::InvalidInput(format!(
            "Id prefix '{}' matches more than one entry",
            prefix
        ))),
        (None, _) => Err(CliError::NotFound(prefix.to_string())),
    }
}

//! Search command implementation.

use crate::cli::SearchArgs;
use crate::commands::list::limited;
use crate::error::Result;
use crate::output::Formatter;
use vibe_catalog::Catalog;
use vibe_domain::traits::LlmProvider;
use vibe_llm::LlmError;
use vibe_store::KeyValueSlot;

/// Execute the search command.
pub fn execute_search<S, L>(
    args: SearchArgs,
    catalog: &Catalog<S, L>,
    formatter: &Formatter,
) -> Result<()>
where
    S: KeyValueSlot,
    L: LlmProvider<Error = LlmError>,
{
    let hits = limited(catalog.search(&args.query).into_iter(), args.limit);
    println!("{}", formatter.format_entries(&hits)?);
    Ok(())
}

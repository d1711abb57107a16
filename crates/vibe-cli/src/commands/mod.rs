//! Command implementations.

pub mod create;
pub mod enrich;
pub mod list;
pub mod search;
pub mod seed;
pub mod show;

pub use self::create::execute_create;
pub use self::enrich::execute_enrich;
pub use self::list::execute_list;
pub use self::search::execute_search;
pub use self::seed::execute_seed;
pub use self::show::execute_show;

use crate::cli::{Command, ListArgs};
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use std::fs;
use std::path::Path;
use vibe_catalog::Catalog;
use vibe_domain::now_millis;
use vibe_domain::seed::seed_entries;
use vibe_domain::traits::LlmProvider;
use vibe_enrich::Enricher;
use vibe_llm::LlmError;
use vibe_store::{KeyValueSlot, ENTRIES_KEY};

/// Open the catalog over `slot` and run `command` against it.
pub async fn execute<S, L>(
    command: Option<Command>,
    slot: S,
    enricher: Enricher<L>,
    config: &Config,
    formatter: &Formatter,
) -> Result<()>
where
    S: KeyValueSlot,
    L: LlmProvider<Error = LlmError>,
{
    let already_saved = slot.read(ENTRIES_KEY)?.is_some();
    let mut catalog = Catalog::open(slot, enricher, seed_entries(now_millis()))?;

    if let Some(warning) = catalog.load_warning() {
        eprintln!(
            "{}",
            formatter.warning(&format!(
                "Saved catalog is unreadable, showing seed data ({}). \
                 Run 'vibe seed --force' to reset it.",
                warning
            ))
        );
    }

    match command.unwrap_or(Command::List(ListArgs::default())) {
        Command::List(args) => execute_list(args, &catalog, formatter),
        Command::Show(args) => execute_show(args, &catalog, formatter),
        Command::Create(args) => {
            execute_create(args, &mut catalog, &config.author, formatter).await
        }
        Command::Search(args) => execute_search(args, &catalog, formatter),
        Command::Enrich(args) => execute_enrich(args, &catalog, formatter).await,
        Command::Seed(args) => execute_seed(args, &mut catalog, already_saved, formatter),
    }
}

/// Prompt text from an inline argument or a file.
pub(crate) fn read_prompt(inline: Option<String>, file: Option<&Path>) -> Result<String> {
    match (inline, file) {
        (Some(text), _) => Ok(text),
        (None, Some(path)) => Ok(fs::read_to_string(path)?),
        (None, None) => Ok(String::new()),
    }
}

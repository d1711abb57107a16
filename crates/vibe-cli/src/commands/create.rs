//! Create command implementation.

use crate::cli::CreateArgs;
use crate::commands::read_prompt;
use crate::error::Result;
use crate::output::Formatter;
use vibe_catalog::{Catalog, Draft};
use vibe_domain::traits::LlmProvider;
use vibe_domain::{CatalogEntry, EntryInput, User};
use vibe_llm::LlmError;
use vibe_store::KeyValueSlot;

/// Execute the create command.
///
/// With `--enrich` the AI suggestions pre-fill the form first; any field given
/// explicitly on the command line wins over the suggestion. A failed analysis
/// only produces a warning, creation continues with the manual fields.
pub async fn execute_create<S, L>(
    args: CreateArgs,
    catalog: &mut Catalog<S, L>,
    author: &User,
    formatter: &Formatter,
) -> Result<()>
where
    S: KeyValueSlot,
    L: LlmProvider<Error = LlmError>,
{
    let entry = create_entry(args, catalog, author, formatter).await?;
    println!("{}", formatter.entry_created(&entry));
    Ok(())
}

async fn create_entry<S, L>(
    args: CreateArgs,
    catalog: &mut Catalog<S, L>,
    author: &User,
    formatter: &Formatter,
) -> Result<CatalogEntry>
where
    S: KeyValueSlot,
    L: LlmProvider<Error = LlmError>,
{
    let prompt = read_prompt(args.prompt, args.file.as_deref())?;
    let mut draft = Draft::new(EntryInput {
        prompt,
        tags: args.tags,
        builder_url: args.builder_url,
        deployed_url: args.deployed_url,
        ..Default::default()
    });

    if args.enrich {
        if let Some(ticket) = draft.begin_enrichment() {
            let prompt = draft.input().prompt.clone();
            match catalog.enrich(&prompt).await {
                Ok(analysis) => {
                    draft.complete_enrichment(ticket, &analysis);
                }
                Err(e) => {
                    draft.fail_enrichment(ticket);
                    let message = format!("AI analysis unavailable, using manual fields: {}", e);
                    eprintln!("{}", formatter.warning(&message));
                }
            }
        }
    }

    draft.edit(|input| {
        if let Some(title) = args.title {
            input.title = title;
        }
        if let Some(description) = args.description {
            input.description = description;
        }
    });

    Ok(catalog.create_entry(draft.into_input(), author)?)
}

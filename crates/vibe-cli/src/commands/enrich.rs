//! Enrich command implementation.

use crate::cli::EnrichArgs;
use crate::commands::read_prompt;
use crate::error::Result;
use crate::output::Formatter;
use vibe_catalog::Catalog;
use vibe_domain::traits::LlmProvider;
use vibe_llm::LlmError;
use vibe_store::KeyValueSlot;

/// Execute the enrich command.
pub async fn execute_enrich<S, L>(
    args: EnrichArgs,
    catalog: &Catalog<S, L>,
    formatter: &Formatter,
) -> Result<()>
where
    S: KeyValueSlot,
    L: LlmProvider<Error = LlmError>,
{
    let prompt = read_prompt(args.prompt, args.file.as_deref())?;
    let analysis = catalog.enrich(&prompt).await?;
    println!("{}", formatter.format_analysis(&analysis)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{catalog, ANALYSIS};
    use crate::config::OutputFormat;
    use crate::error::CliError;
    use vibe_catalog::CatalogError;
    use vibe_enrich::EnrichError;

    #[tokio::test]
    async fn test_enrich_prints_analysis() {
        let catalog = catalog(ANALYSIS);
        let formatter = Formatter::new(OutputFormat::Json, false);
        let args = EnrichArgs {
            prompt: Some("Build a kanban board".to_string()),
            file: None,
        };
        execute_enrich(args, &catalog, &formatter).await.unwrap();
    }

    #[tokio::test]
    async fn test_enrich_empty_prompt() {
        let catalog = catalog(ANALYSIS);
        let formatter = Formatter::new(OutputFormat::Table, false);
        let args = EnrichArgs {
            prompt: None,
            file: None,
        };
        let err = execute_enrich(args, &catalog, &formatter).await.unwrap_err();
        assert!(matches!(
            err,
            CliError::Catalog(CatalogError::Enrichment(EnrichError::Precondition))
        ));
    }
}

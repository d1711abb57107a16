//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};
use vibe_domain::{AnalysisResult, CatalogEntry};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a list of entries.
    pub fn format_entries(&self, entries: &[&CatalogEntry]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(entries)?),
            OutputFormat::Table => Ok(self.format_entries_table(entries)),
            OutputFormat::Quiet => Ok(format_ids(entries)),
        }
    }

    /// Format a single entry in full.
    pub fn format_entry(&self, entry: &CatalogEntry) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(entry)?),
            OutputFormat::Table => Ok(self.format_entry_detail(entry)),
            OutputFormat::Quiet => Ok(entry.id.to_string()),
        }
    }

    /// Format an analysis result.
    pub fn format_analysis(&self, analysis: &AnalysisResult) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(analysis)?),
            OutputFormat::Quiet => Ok(analysis.title.clone()),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Title".to_string(), analysis.title.clone()]);
                builder.push_record(["Summary".to_string(), analysis.summary.clone()]);
                builder.push_record(["Tags".to_string(), analysis.tags.join(", ")]);
                builder.push_record([
                    "Complexity".to_string(),
                    format!("{}/10", analysis.complexity_score),
                ]);

                let mut table = builder.build();
                table.with(Style::rounded());
                Ok(table.to_string())
            }
        }
    }

    fn format_entries_table(&self, entries: &[&CatalogEntry]) -> String {
        if entries.is_empty() {
            return self.colorize("No entries found.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["ID", "Title", "Author", "Tags", "AI", "Likes"]);

        for entry in entries {
            builder.push_record([
                short_id(entry.id.as_str()),
                entry.title.clone(),
                entry.author.name.clone(),
                entry.tags.join(", "),
                format_rating(entry.ai_rating),
                entry.likes.to_string(),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    fn format_entry_detail(&self, entry: &CatalogEntry) -> String {
        let mut builder = Builder::default();
        let mut row = |label: &str, value: &str| builder.push_record([label, value]);
        row("ID", entry.id.as_str());
        row("Title", &entry.title);
        row("Author", &format!("{} ({})", entry.author.name, entry.author.role));
        row("Tags", &entry.tags.join(", "));
        row("Version", &entry.version.to_string());
        row("Likes", &entry.likes.to_string());
        row("AI rating", &format_rating(entry.ai_rating));
        if let Some(summary) = &entry.ai_summary {
            row("AI summary", summary);
        }
        if let Some(url) = &entry.builder_url {
            row("Builder", url);
        }
        if let Some(url) = &entry.deployed_url {
            row("Deployed", url);
        }

        let mut table = builder.build();
        table.with(Style::rounded());

        let mut out = self.colorize(&entry.title, "cyan");
        if !entry.description.is_empty() {
            out.push('\n');
            out.push_str(&entry.description);
        }
        out.push('\n');
        out.push_str(&table.to_string());
        out.push_str("\n\n");
        out.push_str(&self.colorize("Prompt", "magenta"));
        out.push('\n');
        out.push_str(&entry.prompt);
        out
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Format entry creation result.
    pub fn entry_created(&self, entry: &CatalogEntry) -> String {
        match self.format {
            OutputFormat::Quiet => entry.id.to_string(),
            _ => self.success(&format!("Entry created: {} ({})", entry.title, entry.id)),
        }
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "green" => text.green().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            "magenta" => text.magenta().to_string(),
            _ => text.to_string(),
        }
    }
}

fn format_ids(entries: &[&CatalogEntry]) -> String {
    let ids: Vec<&str> = entries.iter().map(|e| e.id.as_str()).collect();
    ids.join("\n")
}

/// Truncate long ids for table display.
fn short_id(id: &str) -> String {
    id.chars().take(8).collect()
}

fn format_rating(rating: Option<u8>) -> String {
    match rating {
        Some(r) => format!("{}/10", r),
        None => "-".to_string(),
    }
}

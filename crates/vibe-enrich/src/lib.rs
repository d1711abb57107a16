//! Vibe Catalog Enrichment
//!
//! Turns raw prompt text into suggested catalog metadata (title, summary,
//! tags, complexity score) using an LLM with a strict structured-output
//! contract.
//!
//! # Architecture
//!
//! ```text
//! Prompt text → Enricher → LLM (schema-constrained) → strict parse → AnalysisResult
//! ```
//!
//! # Guarantees
//!
//! - Empty prompts are rejected locally, before any network call
//! - A missing credential fails fast with `MissingCredential`
//! - A reply that does not match the schema is an `AnalysisParse` error;
//!   partial or guessed results are never returned
//! - One attempt per call; retries are the caller's business
//!
//! # Example Usage
//!
//! ```no_run
//! use vibe_enrich::{Enricher, EnricherConfig};
//! use vibe_llm::MockProvider;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let llm = MockProvider::new(
//!     r#"{"title":"Login Page","summary":"A login form.","tags":["auth"],"complexityScore":3}"#,
//! );
//! let enricher = Enricher::new(llm, EnricherConfig::default());
//!
//! let analysis = enricher.analyze("Build a login page with React").await?;
//! println!("{} ({}/10)", analysis.title, analysis.complexity_score);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod config;
mod enricher;
mod error;
mod parser;
mod prompt;


pub use config::EnricherConfig;
pub use enricher::Enricher;
pub use error::EnrichError;
pub use parser::parse_analysis;
pub use prompt::{analysis_schema, build_analysis_prompt};

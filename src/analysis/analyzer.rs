//! Analyzers combine a tokenizer with a chain of token filters.
//!
//! ```text
//! Raw Text → Analyzer → Token Stream
//!             ↓
//!         Tokenizer
//!             ↓
//!         Filter 1 … Filter N
//! ```
//!
//! # Available Implementations
//!
//! - [`PipelineAnalyzer`] - Custom tokenizer + filter chains
//! - [`EnglishAnalyzer`] - The normalization pipeline used for startup ideas
//!
//! # Examples
//!
//! ```
//! use idea_validator::analysis::analyzer::{Analyzer, EnglishAnalyzer};
//!
//! let analyzer = EnglishAnalyzer::new();
//! let terms: Vec<_> = analyzer.analyze("The AI-based Chatbot!").map(|t| t.text).collect();
//!
//! assert_eq!(terms, vec!["aibased", "chatbot"]);
//! ```

mod english;
mod pipeline;

pub use english::EnglishAnalyzer;
pub use pipeline::PipelineAnalyzer;

use crate::analysis::token::TokenStream;

/// Trait for analyzers that convert text into processed tokens.
///
/// The trait requires `Send + Sync` so one analyzer can serve every request
/// of the process. Analysis is infallible because every tokenizer and filter
/// is, so `analyze` returns the stream directly.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    fn analyze(&self, text: &str) -> TokenStream;

    /// Get the name of this analyzer (for debugging and logging).
    fn name(&self) -> &str;
}

//! Text normalization for startup ideas.
//!
//! Normalization lowercases the text, deletes punctuation, drops English stop
//! words and rejoins the surviving terms with single spaces. The result is a
//! fixed point: normalizing normalized text returns it unchanged.
//!
//! # Examples
//!
//! ```
//! use idea_validator::analysis::normalizer::normalize;
//!
//! assert_eq!(
//!     normalize("AI-based chatbot for customer service"),
//!     "aibased chatbot customer service"
//! );
//! assert_eq!(normalize("the a of and"), "");
//! ```

use std::sync::{Arc, LazyLock};

use crate::analysis::analyzer::{Analyzer, EnglishAnalyzer};

static DEFAULT_NORMALIZER: LazyLock<Normalizer> = LazyLock::new(Normalizer::new);

/// Normalize `text` with the default English pipeline.
pub fn normalize(text: &str) -> String {
    DEFAULT_NORMALIZER.normalize(text)
}

/// Joins the output of an analyzer into a single space-separated string.
#[derive(Clone)]
pub struct Normalizer {
    analyzer: Arc<dyn Analyzer>,
}

impl std::fmt::Debug for Normalizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Normalizer")
            .field("analyzer", &self.analyzer.name())
            .finish()
    }
}

impl Normalizer {
    /// Create a normalizer backed by the [`EnglishAnalyzer`].
    pub fn new() -> Self {
        Self::with_analyzer(Arc::new(EnglishAnalyzer::new()))
    }

    /// Create a normalizer backed by a custom analyzer.
    pub fn with_analyzer(analyzer: Arc<dyn Analyzer>) -> Self {
        Self { analyzer }
    }

    /// Normalize `text` into space-separated terms.
    pub fn normalize(&self, text: &str) -> String {
        let terms: Vec<String> = self.analyzer.analyze(text).map(|token| token.text).collect();
        terms.join(" ")
    }

    /// Get the analyzer behind this normalizer.
    pub fn analyzer(&self) -> &Arc<dyn Analyzer> {
        &self.analyzer
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

//! English analyzer used to normalize startup ideas.

use std::sync::Arc;

use crate::analysis::analyzer::{Analyzer, PipelineAnalyzer};
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::lowercase::LowercaseFilter;
use crate::analysis::token_filter::punctuation::PunctuationFilter;
use crate::analysis::token_filter::remove_empty::RemoveEmptyFilter;
use crate::analysis::token_filter::stop::StopFilter;
use crate::analysis::tokenizer::whitespace::WhitespaceTokenizer;

/// Whitespace tokenization followed by lowercasing, punctuation removal,
/// English stop word removal and empty token cleanup.
///
/// Stop words are matched after punctuation removal, so `"The,"` is dropped
/// just like `"the"`.
#[derive(Clone, Debug)]
pub struct EnglishAnalyzer {
    inner: PipelineAnalyzer,
}

impl EnglishAnalyzer {
    /// Create a new English analyzer with the default stop word list.
    pub fn new() -> Self {
        Self::with_stop_filter(StopFilter::new())
    }

    /// Create an English analyzer with a custom stop filter.
    pub fn with_stop_filter(stop_filter: StopFilter) -> Self {
        let inner = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()))
            .add_filter(Arc::new(LowercaseFilter::new()))
            .add_filter(Arc::new(PunctuationFilter::new()))
            .add_filter(Arc::new(stop_filter))
            .add_filter(Arc::new(RemoveEmptyFilter::new()))
            .with_name("english");

        Self { inner }
    }
}

impl Default for EnglishAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for EnglishAnalyzer {
    fn analyze(&self, text: &str) -> TokenStream {
        self.inner.analyze(text)
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terms(analyzer: &EnglishAnalyzer, text: &str) -> Vec<String> {
        analyzer.analyze(text).map(|t| t.text).collect()
    }

    #[test]
    fn test_english_analyzer() {
        let analyzer = EnglishAnalyzer::new();

        assert_eq!(
            terms(&analyzer, "Mobile wallet for seamless transactions"),
            vec!["mobile", "wallet", "seamless", "transactions"]
        );
        assert_eq!(
            terms(&analyzer, "Health monitoring app with real-time alerts"),
            vec!["health", "monitoring", "app", "realtime", "alerts"]
        );
    }

    #[test]
    fn test_stop_words_match_after_punctuation() {
        let analyzer = EnglishAnalyzer::new();
        assert_eq!(terms(&analyzer, "The, AND... (of)"), Vec::<String>::new());
        assert_eq!(terms(&analyzer, "Don't stop"), vec!["dont", "stop"]);
    }

    #[test]
    fn test_custom_stop_filter() {
        let analyzer = EnglishAnalyzer::with_stop_filter(StopFilter::from_words(vec!["app"]));
        assert_eq!(terms(&analyzer, "The app"), vec!["the"]);
    }

    #[test]
    fn test_analyzer_name() {
        assert_eq!(EnglishAnalyzer::new().name(), "english");
    }
}

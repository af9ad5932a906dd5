//! Punctuation filter implementation.
//!
//! Deletes every ASCII punctuation character from token text. Characters are
//! removed, not replaced, so `AI-based` becomes `aibased` rather than two
//! tokens.
//!
//! Any other character that is neither alphanumeric nor whitespace (curly
//! quotes, typographic apostrophes, dashes, symbols) separates words instead:
//! `wallet’s` becomes `wallet` and `s`. A token that consists only of
//! punctuation is marked as stopped.
//!
//! # Examples
//!
//! ```
//! use idea_validator::analysis::token_filter::Filter;
//! use idea_validator::analysis::token_filter::punctuation::PunctuationFilter;
//! use idea_validator::analysis::token::Token;
//!
//! let filter = PunctuationFilter::new();
//! let tokens = vec![Token::new("real-time"), Token::new("--"), Token::new("“mobile”")];
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter())).collect();
//!
//! assert_eq!(result[0].text, "realtime");
//! assert!(result[1].is_stopped());
//! assert_eq!(result[2].text, "mobile");
//! ```

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;

/// A filter that strips punctuation characters from tokens.
#[derive(Clone, Debug, Default)]
pub struct PunctuationFilter;

impl PunctuationFilter {
    /// Create a new punctuation filter.
    pub fn new() -> Self {
        PunctuationFilter
    }

    /// Check whether a character is deleted from token text.
    pub fn is_punctuation(ch: char) -> bool {
        ch.is_ascii_punctuation()
    }

    /// Check whether a character splits a token into separate words.
    pub fn is_separator(ch: char) -> bool {
        !ch.is_ascii() && !ch.is_alphanumeric() && !ch.is_whitespace()
    }

    /// Remove all punctuation characters from `text`.
    pub fn strip(text: &str) -> String {
        text.chars().filter(|&c| !Self::is_punctuation(c)).collect()
    }

    /// Split `text` on separators and strip punctuation from each piece.
    ///
    /// Pieces left empty are skipped.
    pub fn words(text: &str) -> Vec<String> {
        text.split(Self::is_separator)
            .map(Self::strip)
            .filter(|word| !word.is_empty())
            .collect()
    }

    fn needs_rewrite(text: &str) -> bool {
        text.chars().any(|c| Self::is_punctuation(c) || Self::is_separator(c))
    }
}

impl Filter for PunctuationFilter {
    fn filter(&self, tokens: TokenStream) -> TokenStream {
        Box::new(tokens.flat_map(|token| {
            if token.is_stopped() || !Self::needs_rewrite(&token.text) {
                return vec![token];
            }

            let words = Self::words(&token.text);
            if words.is_empty() {
                return vec![token.with_text(String::new()).stop()];
            }
            words
                .into_iter()
                .map(|word| token.clone().with_text(word))
                .collect()
        }))
    }

    fn name(&self) -> &'static str {
        "punctuation"
    }
}

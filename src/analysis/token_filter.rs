//! Token filter implementations for token transformation.
//!
//! Filters receive the token stream produced by a tokenizer and return a new
//! stream. They are chained inside an analyzer:
//!
//! ```text
//! Tokenizer → Lowercase → Punctuation → Stop Words → Remove Empty
//! ```
//!
//! # Available Filters
//!
//! - [`lowercase::LowercaseFilter`] - Converts tokens to lowercase
//! - [`punctuation::PunctuationFilter`] - Deletes punctuation characters
//! - [`stop::StopFilter`] - Removes stop words
//! - [`remove_empty::RemoveEmptyFilter`] - Drops empty and stopped tokens
//!
//! # Examples
//!
//! ```
//! use idea_validator::analysis::token_filter::Filter;
//! use idea_validator::analysis::token_filter::lowercase::LowercaseFilter;
//! use idea_validator::analysis::token::Token;
//!
//! let filter = LowercaseFilter::new();
//! let tokens = vec![Token::new("Hello"), Token::new("WORLD")];
//! let filtered: Vec<_> = filter.filter(Box::new(tokens.into_iter())).collect();
//!
//! assert_eq!(filtered[0].text, "hello");
//! assert_eq!(filtered[1].text, "world");
//! ```

use crate::analysis::token::TokenStream;

/// Trait for filters that transform token streams.
///
/// Filters are pure: the same input stream always yields the same output.
/// None of them can fail, so `filter` returns the stream without a `Result`.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> TokenStream;

    /// Get the name of this filter (for debugging and logging).
    fn name(&self) -> &'static str;
}

pub mod lowercase;
pub mod punctuation;
pub mod remove_empty;
pub mod stop;

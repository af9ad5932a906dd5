//! Tokenizer implementations for text analysis.
//!
//! Tokenizers are the first step of an analyzer: they split raw text into
//! [`Token`](crate::analysis::token::Token)s that the filter chain then
//! rewrites or drops.
//!
//! # Examples
//!
//! ```
//! use idea_validator::analysis::tokenizer::Tokenizer;
//! use idea_validator::analysis::tokenizer::whitespace::WhitespaceTokenizer;
//!
//! let tokenizer = WhitespaceTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("Mobile  wallet").collect();
//! assert_eq!(tokens.len(), 2);
//! ```

use crate::analysis::token::TokenStream;

/// Trait for tokenizers that convert text into tokens.
///
/// The trait requires `Send + Sync` so a single tokenizer can be shared by
/// concurrent request handlers. Splitting text cannot fail, so `tokenize`
/// returns the stream directly instead of a `Result`.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> TokenStream;

    /// Get the name of this tokenizer (for debugging and logging).
    fn name(&self) -> &'static str;
}

pub mod whitespace;

//! Token types for text analysis.
//!
//! A [`Token`] is the unit that flows from a tokenizer through the filter
//! chain of an analyzer. Filters either rewrite a token's text or mark it as
//! stopped so that a later filter can drop it.
//!
//! # Examples
//!
//! ```
//! use idea_validator::analysis::token::Token;
//!
//! let token = Token::new("Wallet").with_text("wallet");
//! assert_eq!(token.text, "wallet");
//! assert!(!token.is_stopped());
//! ```

/// A single unit of text produced by tokenization.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    /// The text content of the token
    pub text: String,

    /// Whether this token has been marked as stopped (removed) by a filter
    pub stopped: bool,
}

/// A boxed iterator of tokens.
pub type TokenStream = Box<dyn Iterator<Item = Token> + Send>;

impl Token {
    /// Create a new token with the given text.
    pub fn new<S: Into<String>>(text: S) -> Self {
        Token {
            text: text.into(),
            stopped: false,
        }
    }

    /// Replace the text, keeping the stopped flag.
    pub fn with_text<S: Into<String>>(mut self, text: S) -> Self {
        self.text = text.into();
        self
    }

    /// Mark this token as stopped.
    pub fn stop(mut self) -> Self {
        self.stopped = true;
        self
    }

    /// Check if this token is stopped.
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Check if the token text is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

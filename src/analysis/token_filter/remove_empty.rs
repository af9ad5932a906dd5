//! Remove empty filter implementation.

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;

/// A filter that drops tokens with empty text and tokens marked as stopped.
///
/// Typically the last filter of a pipeline, cleaning up after filters that
/// only mark tokens.
#[derive(Clone, Debug, Default)]
pub struct RemoveEmptyFilter;

impl RemoveEmptyFilter {
    /// Create a new remove empty filter.
    pub fn new() -> Self {
        RemoveEmptyFilter
    }
}

impl Filter for RemoveEmptyFilter {
    fn filter(&self, tokens: TokenStream) -> TokenStream {
        Box::new(tokens.filter(|token| !token.is_stopped() && !token.is_empty()))
    }

    fn name(&self) -> &'static str {
        "remove_empty"
    }
}

//! Text analysis for startup ideas.
//!
//! This module provides tokenization, token filtering and the analysis
//! pipelines that turn raw idea text into normalized terms.

pub mod analyzer;
pub mod normalizer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

pub use normalizer::normalize;

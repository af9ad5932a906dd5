//! # Idea Validator
//!
//! Classifies a short startup idea into a market sector and builds an
//! advisory report from static per-sector knowledge.
//!
//! ## Pipeline
//!
//! - Normalization: lowercasing, punctuation removal, English stop words
//! - Count vectorization over a vocabulary learned from the training corpus
//! - Multinomial Naive Bayes with Laplace smoothing
//! - Knowledge lookup and report assembly

pub mod analysis;
pub mod cli;
pub mod error;
pub mod knowledge;
pub mod ml;
pub mod report;
pub mod validator;

pub mod prelude {
    pub use crate::error::{ConfigurationError, Result, ValidationError, ValidatorError};
    pub use crate::knowledge::{KnowledgeBase, KnowledgeEntry};
    pub use crate::ml::sector_classifier::{SectorClassifier, SectorLabel};
    pub use crate::report::Report;
    pub use crate::validator::{IdeaSubmission, IdeaValidator, classify_and_report, initialize};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

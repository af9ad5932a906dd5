//! Sector classification for startup ideas.
//!
//! # Architecture
//!
//! - `SectorLabel`: closed set of output sectors
//! - `TrainingExample`: labeled idea text; the reference corpus is compiled in
//! - `Vocabulary` / `DocumentVector`: term index space and count vectors
//! - `NaiveBayesModel`: multinomial Naive Bayes with Laplace smoothing
//! - `SectorClassifier` trait with `NaiveBayesSectorClassifier`
//!
//! # Example
//!
//! ```rust
//! use idea_validator::ml::sector_classifier::{
//!     NaiveBayesSectorClassifier, SectorClassifier, SectorLabel,
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let classifier = NaiveBayesSectorClassifier::from_reference_corpus()?;
//! assert_eq!(classifier.predict("mobile wallet for freelancers"), SectorLabel::Fintech);
//! # Ok(())
//! # }
//! ```

mod classifier;
mod corpus;
mod naive_bayes;
mod types;
mod vocabulary;

pub use classifier::{NaiveBayesSectorClassifier, SectorClassifier};
pub use corpus::reference_corpus;
pub use naive_bayes::NaiveBayesModel;
pub use types::{SectorLabel, TrainingExample, UnknownSector};
pub use vocabulary::{DocumentVector, Vocabulary};

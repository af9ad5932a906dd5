//! Machine learning components.

pub mod sector_classifier;

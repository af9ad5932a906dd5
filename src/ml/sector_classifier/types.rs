//! Common types for sector classification.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Market sector a startup idea is classified into.
///
/// Variants are declared in lexicographic order of their display names.
/// [`SectorLabel::ALL`] follows the same order, and so does every
/// per-label table in the classifier, which makes the first label win
/// exact score ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SectorLabel {
    /// Artificial intelligence.
    #[serde(rename = "AI")]
    Ai,
    /// Blockchain and distributed ledgers.
    Blockchain,
    /// Online retail.
    #[serde(rename = "E-commerce")]
    ECommerce,
    /// Education technology.
    EdTech,
    /// Financial technology.
    Fintech,
    /// Health and medical services.
    Healthcare,
}

impl SectorLabel {
    /// Number of sectors.
    pub const COUNT: usize = 6;

    /// Every sector in enumeration order.
    pub const ALL: [SectorLabel; Self::COUNT] = [
        SectorLabel::Ai,
        SectorLabel::Blockchain,
        SectorLabel::ECommerce,
        SectorLabel::EdTech,
        SectorLabel::Fintech,
        SectorLabel::Healthcare,
    ];

    /// Position of this label in [`SectorLabel::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Display name of the sector.
    pub fn as_str(self) -> &'static str {
        match self {
            SectorLabel::Ai => "AI",
            SectorLabel::Blockchain => "Blockchain",
            SectorLabel::ECommerce => "E-commerce",
            SectorLabel::EdTech => "EdTech",
            SectorLabel::Fintech => "Fintech",
            SectorLabel::Healthcare => "Healthcare",
        }
    }
}

impl fmt::Display for SectorLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown sector name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sector: {0}")]
pub struct UnknownSector(pub String);

impl FromStr for SectorLabel {
    type Err = UnknownSector;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectorLabel::ALL
            .into_iter()
            .find(|label| label.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownSector(s.to_string()))
    }
}

/// Labeled training sample for sector classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingExample {
    /// Raw idea text.
    pub text: String,
    /// Sector label.
    pub label: SectorLabel,
}

impl TrainingExample {
    /// Create a new training example.
    pub fn new<S: Into<String>>(text: S, label: SectorLabel) -> Self {
        Self {
            text: text.into(),
            label,
        }
    }
}

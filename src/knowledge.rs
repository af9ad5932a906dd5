//! Static per-sector market knowledge.
//!
//! Every [`SectorLabel`] has exactly one [`KnowledgeEntry`]. The content table
//! is an exhaustive `match`, so adding a sector without knowledge text fails
//! to compile.

use serde::Serialize;

use crate::error::ConfigurationError;
use crate::ml::sector_classifier::SectorLabel;

/// Market trend and challenge text for one sector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KnowledgeEntry {
    /// Sector the entry describes.
    pub label: SectorLabel,
    /// Market trend summary.
    pub trend: &'static str,
    /// Main challenges of the sector.
    pub challenge: &'static str,
}

fn entry_for(label: SectorLabel) -> KnowledgeEntry {
    let (trend, challenge) = match label {
        SectorLabel::Ai => (
            "AI is a booming field with applications in healthcare, finance, and customer service. Market growth is expected at 35% CAGR by 2030.",
            "Data privacy and model bias are the biggest challenges in AI adoption.",
        ),
        SectorLabel::Blockchain => (
            "Blockchain is transforming supply chain management and secure transactions, but adoption challenges persist.",
            "Scalability and lack of widespread adoption remain concerns.",
        ),
        SectorLabel::ECommerce => (
            "E-commerce is rapidly expanding, with increasing trends in personalization and seamless delivery services.",
            "Logistics management and customer retention pose challenges.",
        ),
        SectorLabel::EdTech => (
            "The EdTech market is booming, with increased focus on personalized learning and gamified content.",
            "Ensuring consistent engagement and keeping pace with technology is crucial.",
        ),
        SectorLabel::Fintech => (
            "Fintech is revolutionizing financial services, but strict regulations and security concerns remain a challenge.",
            "Compliance with regulations and security risks need to be addressed.",
        ),
        SectorLabel::Healthcare => (
            "Healthcare innovations are solving real-world problems, but privacy concerns and regulatory approvals are key challenges.",
            "Data privacy and clinical trial validations are key challenges.",
        ),
    };

    KnowledgeEntry {
        label,
        trend,
        challenge,
    }
}

/// Lookup table from sector to knowledge entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnowledgeBase {
    entries: [KnowledgeEntry; SectorLabel::COUNT],
}

impl KnowledgeBase {
    /// Load the compiled-in knowledge.
    pub fn new() -> Self {
        Self {
            entries: SectorLabel::ALL.map(entry_for),
        }
    }

    /// Check that every sector has non-empty trend and challenge text.
    pub fn verify(&self) -> Result<(), ConfigurationError> {
        for (label, entry) in SectorLabel::ALL.iter().zip(&self.entries) {
            if entry.label != *label
                || entry.trend.trim().is_empty()
                || entry.challenge.trim().is_empty()
            {
                return Err(ConfigurationError::LabelWithoutKnowledge(*label));
            }
        }
        Ok(())
    }

    /// Knowledge for `label`.
    pub fn lookup(&self, label: SectorLabel) -> &KnowledgeEntry {
        &self.entries[label.index()]
    }

    /// All entries in sector enumeration order.
    pub fn entries(&self) -> &[KnowledgeEntry] {
        &self.entries
    }
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::new()
    }
}

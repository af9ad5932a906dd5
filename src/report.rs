//! Advisory report assembly.
//!
//! A [`Report`] is built fresh for every request from the idea text, the
//! predicted sector and that sector's [`KnowledgeEntry`]. The recommendation
//! is the same for every sector.
//!
//! # Examples
//!
//! ```
//! use idea_validator::knowledge::KnowledgeBase;
//! use idea_validator::ml::sector_classifier::SectorLabel;
//! use idea_validator::report::ReportGenerator;
//!
//! let kb = KnowledgeBase::new();
//! let entry = kb.lookup(SectorLabel::Fintech);
//! let report = ReportGenerator::new().generate("Mobile wallet", SectorLabel::Fintech, entry);
//!
//! assert!(report.render().contains(entry.trend));
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::knowledge::KnowledgeEntry;
use crate::ml::sector_classifier::SectorLabel;

/// Recommendation attached to every report.
pub const RECOMMENDATION: &str =
    "Focus on innovation, ensure compliance, and leverage user feedback for improvements.";

/// Advisory report for one idea.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// The idea as submitted.
    pub idea_text: String,
    /// Predicted sector.
    pub sector: SectorLabel,
    /// Market trend of the sector.
    pub trend: String,
    /// Challenges of the sector.
    pub challenge: String,
    /// Recommendation text.
    pub recommendation: String,
}

impl Report {
    /// Render the report as text.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "✅ **Idea:** {}", self.idea_text)?;
        writeln!(f)?;
        writeln!(f, "📈 **Sector:** {}", self.sector)?;
        writeln!(f)?;
        writeln!(f, "📊 **Market Trend:** {}", self.trend)?;
        writeln!(f)?;
        writeln!(f, "⚠️ **Potential Challenges:** {}", self.challenge)?;
        writeln!(f)?;
        write!(f, "💡 **Recommendations:** {}", self.recommendation)
    }
}

/// Composes reports by field substitution.
#[derive(Debug, Clone, Default)]
pub struct ReportGenerator;

impl ReportGenerator {
    /// Create a new report generator.
    pub fn new() -> Self {
        ReportGenerator
    }

    /// Build the report for `idea_text` classified as `label`.
    pub fn generate(&self, idea_text: &str, label: SectorLabel, entry: &KnowledgeEntry) -> Report {
        Report {
            idea_text: idea_text.to_string(),
            sector: label,
            trend: entry.trend.to_string(),
            challenge: entry.challenge.to_string(),
            recommendation: RECOMMENDATION.to_string(),
        }
    }
}

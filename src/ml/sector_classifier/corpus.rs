//! Embedded reference training corpus.

use super::types::{SectorLabel, TrainingExample};

const REFERENCE_CORPUS: &[(&str, SectorLabel)] = &[
    ("AI-based chatbot for customer service", SectorLabel::Ai),
    (
        "E-commerce platform with personalized recommendations",
        SectorLabel::ECommerce,
    ),
    ("Mobile wallet for seamless transactions", SectorLabel::Fintech),
    (
        "Online learning platform with interactive features",
        SectorLabel::EdTech,
    ),
    (
        "Blockchain-based supply chain management",
        SectorLabel::Blockchain,
    ),
    (
        "Health monitoring app with real-time alerts",
        SectorLabel::Healthcare,
    ),
];

/// The compiled-in training examples, one per sector.
pub fn reference_corpus() -> Vec<TrainingExample> {
    REFERENCE_CORPUS
        .iter()
        .map(|&(text, label)| TrainingExample::new(text, label))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_sector_has_an_example() {
        let corpus = reference_corpus();
        assert_eq!(corpus.len(), 6);
        for label in SectorLabel::ALL {
            assert!(
                corpus.iter().any(|example| example.label == label),
                "no example for {label}"
            );
        }
    }
}

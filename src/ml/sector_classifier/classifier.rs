//! Sector classifier trait and its Naive Bayes implementation.

use std::sync::Arc;

use super::corpus::reference_corpus;
use super::naive_bayes::NaiveBayesModel;
use super::types::{SectorLabel, TrainingExample};
use super::vocabulary::Vocabulary;
use crate::analysis::normalizer::Normalizer;
use crate::error::ConfigurationError;

/// Sector classifier trait.
///
/// Implementations map raw idea text to exactly one [`SectorLabel`]. They hold
/// only immutable state, so one instance can serve concurrent requests.
pub trait SectorClassifier: Send + Sync {
    /// Predict the sector for a given idea.
    fn predict(&self, text: &str) -> SectorLabel;

    /// Get the name of this classifier for debugging and logging.
    fn name(&self) -> &str;
}

/// Normalizer, vocabulary and trained model bundled behind [`SectorClassifier`].
#[derive(Debug, Clone)]
pub struct NaiveBayesSectorClassifier {
    normalizer: Normalizer,
    vocabulary: Arc<Vocabulary>,
    model: Arc<NaiveBayesModel>,
}

impl NaiveBayesSectorClassifier {
    /// Train on the embedded reference corpus.
    pub fn from_reference_corpus() -> Result<Self, ConfigurationError> {
        Self::train(&reference_corpus(), Normalizer::new())
    }

    /// Build the vocabulary and train the model from `examples`.
    pub fn train(
        examples: &[TrainingExample],
        normalizer: Normalizer,
    ) -> Result<Self, ConfigurationError> {
        if examples.is_empty() {
            return Err(ConfigurationError::EmptyTrainingSet);
        }

        let vocabulary = Vocabulary::build(examples.iter().map(|e| normalizer.normalize(&e.text)));
        let samples: Vec<_> = examples
            .iter()
            .map(|e| (vocabulary.vectorize(&normalizer.normalize(&e.text)), e.label))
            .collect();
        let model = NaiveBayesModel::train_vectors(&samples, vocabulary.len())?;

        Ok(Self::from_parts(
            normalizer,
            Arc::new(vocabulary),
            Arc::new(model),
        ))
    }

    /// Wrap an already built vocabulary and model.
    pub fn from_parts(
        normalizer: Normalizer,
        vocabulary: Arc<Vocabulary>,
        model: Arc<NaiveBayesModel>,
    ) -> Self {
        Self {
            normalizer,
            vocabulary,
            model,
        }
    }

    /// Get the vocabulary.
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Get the trained model.
    pub fn model(&self) -> &NaiveBayesModel {
        &self.model
    }
}

impl SectorClassifier for NaiveBayesSectorClassifier {
    fn predict(&self, text: &str) -> SectorLabel {
        let vector = self.vocabulary.vectorize(&self.normalizer.normalize(text));
        self.model.predict(&vector)
    }

    fn name(&self) -> &str {
        "naive_bayes"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyzer::EnglishAnalyzer;
    use crate::analysis::token_filter::stop::StopFilter;

    #[test]
    fn test_naive_bayes_sector_classifier() {
        let classifier = NaiveBayesSectorClassifier::from_reference_corpus().unwrap();

        assert_eq!(
            classifier.predict("AI-based chatbot for customer service"),
            SectorLabel::Ai
        );
        assert_eq!(
            classifier.predict("Seamless mobile payments"),
            SectorLabel::Fintech
        );
        assert_eq!(classifier.name(), "naive_bayes");
        assert_eq!(classifier.vocabulary().len(), 25);
        assert_eq!(classifier.model().vocabulary_size(), 25);
    }

    #[test]
    fn test_usable_as_trait_object() {
        let classifier: Arc<dyn SectorClassifier> =
            Arc::new(NaiveBayesSectorClassifier::from_reference_corpus().unwrap());
        assert_eq!(classifier.predict("the a of and"), SectorLabel::Ai);
    }

    #[test]
    fn test_custom_normalizer() {
        // Without stop word removal "for" becomes a shared term of AI and Fintech.
        let analyzer =
            EnglishAnalyzer::with_stop_filter(StopFilter::from_words(Vec::<String>::new()));
        let normalizer = Normalizer::with_analyzer(Arc::new(analyzer));
        let classifier =
            NaiveBayesSectorClassifier::train(&reference_corpus(), normalizer).unwrap();

        assert!(classifier.vocabulary().index_of("for").is_some());
        assert_eq!(
            classifier.predict("Mobile wallet for seamless transactions"),
            SectorLabel::Fintech
        );
    }

    #[test]
    fn test_empty_examples() {
        let err = NaiveBayesSectorClassifier::train(&[], Normalizer::new()).unwrap_err();
        assert_eq!(err, ConfigurationError::EmptyTrainingSet);
    }
}

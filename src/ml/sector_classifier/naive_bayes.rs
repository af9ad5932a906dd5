//! Multinomial Naive Bayes over term count vectors.
//!
//! Priors are the fraction of training examples carrying each label.
//! Term likelihoods use additive (Laplace) smoothing with alpha = 1:
//!
//! ```text
//! P(term | label) = (count(term, label) + 1) / (total(label) + |V|)
//! ```
//!
//! Both are stored as natural logarithms so a document is scored by summing
//! `log P(label) + Σ count(term) · log P(term | label)`.

use log::{debug, info};

use super::types::{SectorLabel, TrainingExample};
use super::vocabulary::{DocumentVector, Vocabulary};
use crate::analysis::normalizer::normalize;
use crate::error::ConfigurationError;

/// Trained Naive Bayes parameters, one row per [`SectorLabel`] in enumeration order.
#[derive(Debug, Clone, PartialEq)]
pub struct NaiveBayesModel {
    /// Number of training examples per label.
    class_counts: [usize; SectorLabel::COUNT],
    /// Term occurrences per label.
    feature_counts: Vec<Vec<u64>>,
    /// log P(label)
    log_priors: [f64; SectorLabel::COUNT],
    /// log P(term | label)
    log_likelihoods: Vec<Vec<f64>>,
    /// Width of the vectors this model scores.
    vocabulary_size: usize,
}

impl NaiveBayesModel {
    /// Additive smoothing constant.
    pub const ALPHA: f64 = 1.0;

    /// Train on raw examples, normalizing and vectorizing them with `vocabulary`.
    pub fn train(
        examples: &[TrainingExample],
        vocabulary: &Vocabulary,
    ) -> Result<Self, ConfigurationError> {
        let samples: Vec<(DocumentVector, SectorLabel)> = examples
            .iter()
            .map(|example| (vocabulary.vectorize(&normalize(&example.text)), example.label))
            .collect();

        Self::train_vectors(&samples, vocabulary.len())
    }

    /// Train on already vectorized samples of width `vocabulary_size`.
    ///
    /// Fails when there are no samples or when a label has none.
    pub fn train_vectors(
        samples: &[(DocumentVector, SectorLabel)],
        vocabulary_size: usize,
    ) -> Result<Self, ConfigurationError> {
        if samples.is_empty() {
            return Err(ConfigurationError::EmptyTrainingSet);
        }

        let mut class_counts = [0usize; SectorLabel::COUNT];
        let mut feature_counts = vec![vec![0u64; vocabulary_size]; SectorLabel::COUNT];

        for (vector, label) in samples {
            let row = label.index();
            class_counts[row] += 1;
            for (term, count) in vector.nonzero().filter(|&(term, _)| term < vocabulary_size) {
                feature_counts[row][term] += u64::from(count);
            }
        }

        if let Some(label) = SectorLabel::ALL
            .into_iter()
            .find(|label| class_counts[label.index()] == 0)
        {
            return Err(ConfigurationError::LabelWithoutExamples(label));
        }

        let total = samples.len() as f64;
        let mut log_priors = [0.0; SectorLabel::COUNT];
        for (prior, &count) in log_priors.iter_mut().zip(class_counts.iter()) {
            *prior = (count as f64 / total).ln();
        }

        let log_likelihoods: Vec<Vec<f64>> = feature_counts
            .iter()
            .map(|counts| {
                let label_total: u64 = counts.iter().sum();
                let denominator = label_total as f64 + Self::ALPHA * vocabulary_size as f64;
                counts
                    .iter()
                    .map(|&count| ((count as f64 + Self::ALPHA) / denominator).ln())
                    .collect::<Vec<f64>>()
            })
            .collect();

        info!(
            "trained naive bayes model: {} examples, {} labels, {} terms",
            samples.len(),
            SectorLabel::COUNT,
            vocabulary_size
        );

        Ok(Self {
            class_counts,
            feature_counts,
            log_priors,
            log_likelihoods,
            vocabulary_size,
        })
    }

    /// Joint log score of `vector` for every label, in enumeration order.
    pub fn scores(&self, vector: &DocumentVector) -> [f64; SectorLabel::COUNT] {
        debug_assert_eq!(vector.len(), self.vocabulary_size);

        let mut scores = self.log_priors;
        for (score, likelihoods) in scores.iter_mut().zip(&self.log_likelihoods) {
            for (term, count) in vector.nonzero() {
                if let Some(log_p) = likelihoods.get(term) {
                    *score += f64::from(count) * log_p;
                }
            }
        }
        scores
    }

    /// Most probable label for `vector`.
    ///
    /// Exact ties resolve to the label that comes first in [`SectorLabel::ALL`].
    /// An all-zero vector is ranked on priors alone.
    pub fn predict(&self, vector: &DocumentVector) -> SectorLabel {
        let scores = self.scores(vector);

        let mut best = 0;
        for (idx, &score) in scores.iter().enumerate().skip(1) {
            if score > scores[best] {
                best = idx;
            }
        }

        let label = SectorLabel::ALL[best];
        if vector.is_zero() {
            debug!("no known terms in document, ranked by priors: {label}");
        } else {
            debug!("predicted {label} with log score {:.4}", scores[best]);
        }
        label
    }

    /// log P(label)
    pub fn log_prior(&self, label: SectorLabel) -> f64 {
        self.log_priors[label.index()]
    }

    /// log P(term | label), or `None` for a term index outside the vocabulary.
    pub fn log_likelihood(&self, label: SectorLabel, term: usize) -> Option<f64> {
        self.log_likelihoods[label.index()].get(term).copied()
    }

    /// Number of training examples carrying `label`.
    pub fn class_count(&self, label: SectorLabel) -> usize {
        self.class_counts[label.index()]
    }

    /// Occurrences of `term` across training documents of `label`.
    pub fn term_count(&self, label: SectorLabel, term: usize) -> Option<u64> {
        self.feature_counts[label.index()].get(term).copied()
    }

    /// Width of the vectors this model scores.
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ml::sector_classifier::corpus::reference_corpus;

    fn reference_model() -> (Vocabulary, NaiveBayesModel) {
        let corpus = reference_corpus();
        let vocabulary = Vocabulary::build(corpus.iter().map(|e| normalize(&e.text)));
        let model = NaiveBayesModel::train(&corpus, &vocabulary).unwrap();
        (vocabulary, model)
    }

    fn predict(text: &str) -> SectorLabel {
        let (vocabulary, model) = reference_model();
        model.predict(&vocabulary.vectorize(&normalize(text)))
    }

    #[test]
    fn test_training_examples_are_recovered() {
        for example in reference_corpus() {
            assert_eq!(predict(&example.text), example.label, "{}", example.text);
        }
    }

    #[test]
    fn test_unseen_ideas() {
        assert_eq!(predict("a secure digital wallet for payments"), SectorLabel::Fintech);
        assert_eq!(predict("platform for online courses"), SectorLabel::EdTech);
        assert_eq!(predict("real-time health monitoring wearable"), SectorLabel::Healthcare);
        assert_eq!(predict("supply chain tracking on blockchain"), SectorLabel::Blockchain);
    }

    #[test]
    fn test_zero_vector_uses_priors_and_tie_break() {
        let (vocabulary, model) = reference_model();
        let zero = vocabulary.vectorize("");
        assert!(zero.is_zero());
        assert_eq!(model.predict(&zero), SectorLabel::Ai);

        let scores = model.scores(&zero);
        for label in SectorLabel::ALL {
            assert_eq!(scores[label.index()], (1.0f64 / 6.0).ln());
        }
    }

    #[test]
    fn test_priors_follow_class_frequencies() {
        let samples = vec![
            (DocumentVector::from_counts(vec![1, 0]), SectorLabel::Fintech),
            (DocumentVector::from_counts(vec![1, 0]), SectorLabel::Fintech),
            (DocumentVector::from_counts(vec![0, 1]), SectorLabel::Ai),
            (DocumentVector::from_counts(vec![0, 1]), SectorLabel::Blockchain),
            (DocumentVector::from_counts(vec![0, 1]), SectorLabel::ECommerce),
            (DocumentVector::from_counts(vec![0, 1]), SectorLabel::EdTech),
            (DocumentVector::from_counts(vec![0, 1]), SectorLabel::Healthcare),
        ];
        let model = NaiveBayesModel::train_vectors(&samples, 2).unwrap();

        assert_eq!(model.class_count(SectorLabel::Fintech), 2);
        assert!((model.log_prior(SectorLabel::Fintech) - (2.0f64 / 7.0).ln()).abs() < 1e-12);
        assert!((model.log_prior(SectorLabel::Ai) - (1.0f64 / 7.0).ln()).abs() < 1e-12);

        // Fintech saw term 0 twice: (2 + 1) / (2 + 2)
        assert_eq!(model.term_count(SectorLabel::Fintech, 0), Some(2));
        let p = model.log_likelihood(SectorLabel::Fintech, 0).unwrap().exp();
        assert!((p - 0.75).abs() < 1e-12);

        // Highest prior wins on an empty document
        let zero = DocumentVector::from_counts(vec![0, 0]);
        assert_eq!(model.predict(&zero), SectorLabel::Fintech);
    }

    #[test]
    fn test_no_likelihood_is_zero() {
        let (vocabulary, model) = reference_model();
        for label in SectorLabel::ALL {
            for term in 0..vocabulary.len() {
                let log_p = model.log_likelihood(label, term).unwrap();
                assert!(log_p.is_finite());
                assert!(log_p.exp() > 0.0);
            }
        }
        assert_eq!(model.log_likelihood(SectorLabel::Ai, vocabulary.len()), None);
    }

    #[test]
    fn test_prediction_is_deterministic() {
        let (vocabulary, model) = reference_model();
        let vector = vocabulary.vectorize(&normalize("interactive app for customer learning"));
        let first = model.predict(&vector);
        for _ in 0..10 {
            assert_eq!(model.predict(&vector), first);
        }
    }

    #[test]
    fn test_empty_training_set() {
        let err = NaiveBayesModel::train(&[], &Vocabulary::build(Vec::<String>::new()));
        assert_eq!(err, Err(ConfigurationError::EmptyTrainingSet));
    }

    #[test]
    fn test_label_without_examples() {
        let examples = vec![
            TrainingExample::new("chatbot", SectorLabel::Ai),
            TrainingExample::new("wallet", SectorLabel::Fintech),
        ];
        let vocabulary = Vocabulary::build(["chatbot", "wallet"]);
        let err = NaiveBayesModel::train(&examples, &vocabulary);
        assert_eq!(
            err,
            Err(ConfigurationError::LabelWithoutExamples(SectorLabel::Blockchain))
        );
    }
}

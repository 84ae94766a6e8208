//! Similarity engine configuration
//!
//! All weights and vectorizer parameters of the engine. Defaults reproduce
//! the standard blend: 0.6 content + 0.4 metadata, with metadata split
//! 0.4 categories / 0.3 authors / 0.2 rating / 0.1 length.

use bookmatch_core::VectorizerConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level engine configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SimilarityConfig {
    /// Weight of content (TF-IDF) similarity in the combined score
    pub content_weight: f32,
    /// Weight of metadata similarity in the combined score
    pub metadata_weight: f32,
    pub metadata: MetadataWeights,
    pub vectorizer: VectorizerConfig,
    /// Score candidates on the rayon pool
    pub parallel: bool,
}

impl Default for SimilarityConfig {
    fn default() -> Self {
        Self {
            content_weight: 0.6,
            metadata_weight: 0.4,
            metadata: MetadataWeights::default(),
            vectorizer: VectorizerConfig::default(),
            parallel: true,
        }
    }
}

impl SimilarityConfig {
    /// Load a configuration from a JSON file; absent keys take defaults
    pub fn from_json_file(path: impl AsRef<Path>) -> bookmatch_core::Result<Self> {
        let data = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }

    /// Validate the configuration
    /// - Checks that weights are finite and non-negative
    /// - Normalizes the blend weights and the metadata weights to sum to 1.0
    /// - Checks vectorizer parameters
    pub fn validate_and_normalize(&mut self) -> Result<(), ConfigError> {
        normalize_group(
            "blend",
            &mut [
                ("content_weight", &mut self.content_weight),
                ("metadata_weight", &mut self.metadata_weight),
            ],
        )?;
        self.metadata.validate_and_normalize()?;
        self.vectorizer
            .validate()
            .map_err(|e| ConfigError::InvalidVectorizer(e.to_string()))?;
        Ok(())
    }
}

/// Weights of the four metadata sub-scores
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MetadataWeights {
    pub categories: f32,
    pub authors: f32,
    pub rating: f32,
    pub length: f32,
}

impl Default for MetadataWeights {
    fn default() -> Self {
        Self {
            categories: 0.4,
            authors: 0.3,
            rating: 0.2,
            length: 0.1,
        }
    }
}

impl MetadataWeights {
    pub fn validate_and_normalize(&mut self) -> Result<(), ConfigError> {
        normalize_group(
            "metadata",
            &mut [
                ("categories", &mut self.categories),
                ("authors", &mut self.authors),
                ("rating", &mut self.rating),
                ("length", &mut self.length),
            ],
        )
    }
}

fn normalize_group(group: &'static str, weights: &mut [(&str, &mut f32)]) -> Result<(), ConfigError> {
    for (name, weight) in weights.iter() {
        if !weight.is_finite() {
            return Err(ConfigError::NonFiniteWeight(name.to_string()));
        }
        if **weight < 0.0 {
            return Err(ConfigError::NegativeWeight(name.to_string()));
        }
    }

    let weight_sum: f32 = weights.iter().map(|(_, w)| **w).sum();
    if weight_sum <= 0.0 {
        return Err(ConfigError::ZeroTotalWeight(group));
    }

    if (weight_sum - 1.0).abs() > 0.001 {
        for (_, weight) in weights.iter_mut() {
            **weight /= weight_sum;
        }
    }

    Ok(())
}

/// Errors that can occur during configuration validation
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("Weight '{0}' is negative")]
    NegativeWeight(String),

    #[error("Weight '{0}' is not a finite number")]
    NonFiniteWeight(String),

    #[error("Total {0} weight cannot be zero")]
    ZeroTotalWeight(&'static str),

    #[error("Invalid vectorizer settings: {0}")]
    InvalidVectorizer(String),
}

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::edit::EditKind;

#[derive(Error, Debug)]
pub enum WeightError {
    #[error("Invalid {operation} weight: {value} (weights must be finite and non-negative)")]
    InvalidWeight { operation: EditKind, value: f64 },

    #[error("Failed to read weights: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse weights: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Per-operation costs for the distance engine
///
/// A `None` transposition weight disables transpositions, which turns the
/// engine into plain Levenshtein. Zero weights are valid and make the
/// operation free.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightConfig {
    #[serde(default = "unit_weight")]
    pub substitution: f64,

    #[serde(default = "unit_weight")]
    pub deletion: f64,

    #[serde(default = "unit_weight")]
    pub insertion: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transposition: Option<f64>,
}

fn unit_weight() -> f64 {
    1.0
}

impl Default for WeightConfig {
    fn default() -> Self {
        Self {
            substitution: 1.0,
            deletion: 1.0,
            insertion: 1.0,
            transposition: None,
        }
    }
}

impl WeightConfig {
    /// Levenshtein weights with transpositions disabled
    #[must_use]
    pub fn new(substitution: f64, deletion: f64, insertion: f64) -> Self {
        Self {
            substitution,
            deletion,
            insertion,
            transposition: None,
        }
    }

    #[must_use]
    pub fn with_transposition(mut self, weight: f64) -> Self {
        self.transposition = Some(weight);
        self
    }

    /// True when adjacent transpositions are scored as a single edit
    #[must_use]
    pub fn allows_transposition(&self) -> bool {
        self.transposition.is_some()
    }

    /// Check that every configured weight is finite and non-negative.
    ///
    /// # Errors
    ///
    /// Returns [`WeightError::InvalidWeight`] naming the first offending operation.
    pub fn validate(&self) -> Result<(), WeightError> {
        let configured = [
            (EditKind::Substitute, Some(self.substitution)),
            (EditKind::Delete, Some(self.deletion)),
            (EditKind::Insert, Some(self.insertion)),
            (EditKind::Transpose, self.transposition),
        ];

        for (operation, weight) in configured {
            if let Some(value) = weight {
                if !value.is_finite() || value < 0.0 {
                    return Err(WeightError::InvalidWeight { operation, value });
                }
            }
        }

        Ok(())
    }

    /// Load and validate weights from a JSON file.
    ///
    /// Missing substitution/deletion/insertion fields default to 1; a missing
    /// transposition field leaves transpositions disabled.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid JSON, or
    /// contains an invalid weight.
    pub fn load_from_file(path: &Path) -> Result<Self, WeightError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse and validate weights from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or a weight is invalid.
    pub fn from_json(json: &str) -> Result<Self, WeightError> {
        let weights: Self = serde_json::from_str(json)?;
        weights.validate()?;
        Ok(weights)
    }
}

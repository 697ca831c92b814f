//! Scoring weights for the six-factor event score

use crate::error::{MedLinkError, Result};

/// Weights for the six independently normalized scoring factors
///
/// Overrides do not need to total 100%; weights are renormalized to sum to
/// one before use. All weights must be non-negative and at least one must
/// be positive.
#[derive(Debug, Clone)]
pub struct ScorerWeights {
    /// Admission/surgery/imaging tag severity
    pub severity: f64,
    /// Temporal proximity to the policy contract date
    pub proximity_to_contract: f64,
    /// Evidence volume, pathology and surgical-treatment presence
    pub documentation_strength: f64,
    /// Claim keyword coverage in diagnosis and examination text
    pub claim_relevance: f64,
    /// Same-date event repetition
    pub repetition_pattern: f64,
    /// Disclosure-trigger phrases in the doctor opinion
    pub disclosure_trigger: f64,
}

impl Default for ScorerWeights {
    fn default() -> Self {
        Self {
            severity: 0.35,
            proximity_to_contract: 0.20,
            documentation_strength: 0.20,
            claim_relevance: 0.15,
            repetition_pattern: 0.05,
            disclosure_trigger: 0.05,
        }
    }
}

impl ScorerWeights {
    /// Create weights with the default split
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check that the weights form a usable mix
    pub fn validate(&self) -> Result<()> {
        let all = self.as_array();
        if all.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(MedLinkError::config(
                "scorer weights must be finite and non-negative",
            ));
        }
        if all.iter().sum::<f64>() <= 0.0 {
            return Err(MedLinkError::config("at least one scorer weight must be positive"));
        }
        Ok(())
    }

    /// Weights renormalized to sum to one
    #[must_use]
    pub fn normalized(&self) -> Self {
        let sum: f64 = self.as_array().iter().sum();
        Self {
            severity: self.severity / sum,
            proximity_to_contract: self.proximity_to_contract / sum,
            documentation_strength: self.documentation_strength / sum,
            claim_relevance: self.claim_relevance / sum,
            repetition_pattern: self.repetition_pattern / sum,
            disclosure_trigger: self.disclosure_trigger / sum,
        }
    }

    fn as_array(&self) -> [f64; 6] {
        [
            self.severity,
            self.proximity_to_contract,
            self.documentation_strength,
            self.claim_relevance,
            self.repetition_pattern,
            self.disclosure_trigger,
        ]
    }
}

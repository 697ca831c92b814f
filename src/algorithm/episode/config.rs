//! Configuration for outpatient episode grouping

use crate::error::{MedLinkError, Result};

/// Weights for the five pairwise correlation factors
#[derive(Debug, Clone)]
pub struct CorrelationWeights {
    /// Temporal proximity inside the attachment window
    pub temporal: f64,
    /// Shared diagnostic group
    pub diagnostic_group: f64,
    /// Treatment-continuity vocabulary match
    pub treatment_continuity: f64,
    /// Same hospital name
    pub hospital: f64,
    /// Both records match the outpatient-sequence vocabulary
    pub sequence_bonus: f64,
}

impl Default for CorrelationWeights {
    fn default() -> Self {
        Self {
            temporal: 0.3,
            diagnostic_group: 0.4,
            treatment_continuity: 0.3,
            hospital: 0.2,
            sequence_bonus: 0.3,
        }
    }
}

impl CorrelationWeights {
    fn as_array(&self) -> [f64; 5] {
        [
            self.temporal,
            self.diagnostic_group,
            self.treatment_continuity,
            self.hospital,
            self.sequence_bonus,
        ]
    }
}

/// User-adjustable additive boosts applied on top of the base correlation
///
/// Boosts default to zero; they nudge attachment decisions without ever
/// acting as hard filters.
#[derive(Debug, Clone, Default)]
pub struct CorrelationBoosts {
    /// Applied when the incoming record is a primary-symptom visit
    pub primary_symptom: f64,
    /// Applied when the incoming record is a secondary-symptom visit
    pub secondary_symptom: f64,
    /// Applied on a treatment-continuity match
    pub treatment_continuity: f64,
    /// Applied when both records name the same hospital
    pub same_hospital: f64,
    /// Applied on a diagnostic-group match
    pub diagnostic_group: f64,
}

impl CorrelationBoosts {
    fn as_array(&self) -> [f64; 5] {
        [
            self.primary_symptom,
            self.secondary_symptom,
            self.treatment_continuity,
            self.same_hospital,
            self.diagnostic_group,
        ]
    }
}

/// Configuration for one `group_outpatient_episodes` call
///
/// Validated once at call time, immutable afterwards.
#[derive(Debug, Clone)]
pub struct EpisodeConfig {
    /// Maximum day gap for attaching a record to an episode
    pub window_days: i64,
    /// Maximum day gap for merging adjacent episodes in the post-pass
    pub max_merge_gap_days: i64,
    /// Minimum boosted correlation for attachment or merge
    pub min_correlation_score: f64,
    /// Correlation factor weights
    pub weights: CorrelationWeights,
    /// User-adjustable additive boosts
    pub boosts: CorrelationBoosts,
}

impl Default for EpisodeConfig {
    fn default() -> Self {
        Self {
            window_days: 28,
            max_merge_gap_days: 45,
            min_correlation_score: 0.5,
            weights: CorrelationWeights::default(),
            boosts: CorrelationBoosts::default(),
        }
    }
}

impl EpisodeConfig {
    /// Create a configuration with default values
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new builder for constructing an episode configuration
    #[must_use]
    pub fn builder() -> EpisodeConfigBuilder {
        EpisodeConfigBuilder::new()
    }

    /// Check all knobs before any grouping work starts
    pub fn validate(&self) -> Result<()> {
        if self.window_days < 1 {
            return Err(MedLinkError::config(format!(
                "window_days must be at least 1, got {}",
                self.window_days
            )));
        }
        if self.max_merge_gap_days < 0 {
            return Err(MedLinkError::config(format!(
                "max_merge_gap_days must be non-negative, got {}",
                self.max_merge_gap_days
            )));
        }
        if !(0.0..=1.0).contains(&self.min_correlation_score) {
            return Err(MedLinkError::config(format!(
                "min_correlation_score must be in [0,1], got {}",
                self.min_correlation_score
            )));
        }
        for w in self.weights.as_array() {
            if !w.is_finite() || !(0.0..=1.0).contains(&w) {
                return Err(MedLinkError::config(format!(
                    "correlation weights must be in [0,1], got {w}"
                )));
            }
        }
        for b in self.boosts.as_array() {
            if !b.is_finite() || !(0.0..=1.0).contains(&b) {
                return Err(MedLinkError::config(format!(
                    "correlation boosts must be in [0,1], got {b}"
                )));
            }
        }
        Ok(())
    }
}

/// Builder for constructing an episode configuration
#[derive(Debug, Clone)]
pub struct EpisodeConfigBuilder {
    config: EpisodeConfig,
}

impl Default for EpisodeConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl EpisodeConfigBuilder {
    /// Create a new builder with default configuration
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: EpisodeConfig::default(),
        }
    }

    /// Set the attachment window in days
    #[must_use]
    pub const fn window_days(mut self, days: i64) -> Self {
        self.config.window_days = days;
        self
    }

    /// Set the merge gap in days
    #[must_use]
    pub const fn max_merge_gap_days(mut self, days: i64) -> Self {
        self.config.max_merge_gap_days = days;
        self
    }

    /// Set the minimum correlation score
    #[must_use]
    pub const fn min_correlation_score(mut self, score: f64) -> Self {
        self.config.min_correlation_score = score;
        self
    }

    /// Set the correlation weights
    #[must_use]
    pub const fn weights(mut self, weights: CorrelationWeights) -> Self {
        self.config.weights = weights;
        self
    }

    /// Set the additive boosts
    #[must_use]
    pub const fn boosts(mut self, boosts: CorrelationBoosts) -> Self {
        self.config.boosts = boosts;
        self
    }

    /// Set the same-hospital boost
    #[must_use]
    pub const fn same_hospital_boost(mut self, boost: f64) -> Self {
        self.config.boosts.same_hospital = boost;
        self
    }

    /// Build the episode configuration
    #[must_use]
    pub const fn build(self) -> EpisodeConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(EpisodeConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_window() {
        let config = EpisodeConfig::builder().window_days(0).build();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_out_of_range_score() {
        let config = EpisodeConfig::builder().min_correlation_score(1.5).build();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_builder_sets_boost() {
        let config = EpisodeConfig::builder().same_hospital_boost(0.1).build();
        assert!((config.boosts.same_hospital - 0.1).abs() < f64::EPSILON);
        assert!(config.validate().is_ok());
    }
}

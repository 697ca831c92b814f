//! Configuration for the date-anchor binder.

use crate::error::{MedLinkError, Result};

/// Configuration for evidence binding around date anchors
///
/// All values are validated once at call time and are immutable afterwards.
#[derive(Debug, Clone)]
pub struct BinderConfig {
    /// Maximum center distance between anchor and candidate block
    pub radius: f64,
    /// Maximum evidence entries per event
    pub max_evidence: usize,
    /// Vertical tolerance for treating consecutive blocks as one table row
    pub row_tolerance: f64,
    /// Blocks with center y below this are header noise
    pub header_band: f64,
    /// Blocks with center y above this are footer noise
    pub footer_band: f64,
}

impl Default for BinderConfig {
    fn default() -> Self {
        Self {
            radius: 0.3,          // Roughly a quarter page around the anchor
            max_evidence: 8,      // Enough context without table spill-over
            row_tolerance: 0.012, // Slightly above common OCR line jitter
            header_band: 0.08,
            footer_band: 0.92,
        }
    }
}

impl BinderConfig {
    /// Create a new configuration with default values
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new builder for constructing a binder configuration
    #[must_use]
    pub fn builder() -> BinderConfigBuilder {
        BinderConfigBuilder::new()
    }

    /// Check all knobs before any binding work starts
    pub fn validate(&self) -> Result<()> {
        if !self.radius.is_finite() || self.radius <= 0.0 || self.radius > 2.0 {
            return Err(MedLinkError::config(format!(
                "binding radius must be in (0, 2], got {}",
                self.radius
            )));
        }
        if self.max_evidence == 0 {
            return Err(MedLinkError::config("max_evidence must be at least 1"));
        }
        if !self.row_tolerance.is_finite() || self.row_tolerance <= 0.0 || self.row_tolerance > 0.1
        {
            return Err(MedLinkError::config(format!(
                "row_tolerance must be in (0, 0.1], got {}",
                self.row_tolerance
            )));
        }
        if !(0.0..0.5).contains(&self.header_band) {
            return Err(MedLinkError::config(format!(
                "header_band must be in [0, 0.5), got {}",
                self.header_band
            )));
        }
        if !(0.5..=1.0).contains(&self.footer_band) {
            return Err(MedLinkError::config(format!(
                "footer_band must be in (0.5, 1], got {}",
                self.footer_band
            )));
        }
        Ok(())
    }
}

/// Builder for constructing a binder configuration
#[derive(Debug, Clone)]
pub struct BinderConfigBuilder {
    config: BinderConfig,
}

impl Default for BinderConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BinderConfigBuilder {
    /// Create a new builder with default configuration
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: BinderConfig::default(),
        }
    }

    /// Set the binding radius
    #[must_use]
    pub const fn radius(mut self, radius: f64) -> Self {
        self.config.radius = radius;
        self
    }

    /// Set the evidence cap per event
    #[must_use]
    pub const fn max_evidence(mut self, max_evidence: usize) -> Self {
        self.config.max_evidence = max_evidence;
        self
    }

    /// Set the table-row tolerance
    #[must_use]
    pub const fn row_tolerance(mut self, row_tolerance: f64) -> Self {
        self.config.row_tolerance = row_tolerance;
        self
    }

    /// Set the header band threshold
    #[must_use]
    pub const fn header_band(mut self, header_band: f64) -> Self {
        self.config.header_band = header_band;
        self
    }

    /// Set the footer band threshold
    #[must_use]
    pub const fn footer_band(mut self, footer_band: f64) -> Self {
        self.config.footer_band = footer_band;
        self
    }

    /// Build the binder configuration
    #[must_use]
    pub const fn build(self) -> BinderConfig {
        self.config
    }
}

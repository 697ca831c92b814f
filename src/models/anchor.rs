//! OCR-derived inputs: date anchors and text blocks
//!
//! Both shapes are produced upstream by OCR/segmentation and are immutable
//! once they reach this crate.

use serde::{Deserialize, Serialize};

use crate::error::{MedLinkError, Result};
use crate::models::geometry::BoundingBox;

/// What kind of clinical moment a date anchor marks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateAnchorKind {
    /// Outpatient visit date
    Visit,
    /// Surgery date
    Surgery,
    /// Examination date
    Exam,
    /// Report issue date
    Report,
    /// Imaging read date
    Read,
    /// Admission date
    Admission,
    /// Discharge date
    Discharge,
}

/// A dated text fragment that events are anchored to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateAnchor {
    /// Raw anchor text as recognized by OCR
    pub text: String,
    /// Page the anchor was found on
    pub page: u32,
    /// Position of the anchor on its page
    pub bbox: BoundingBox,
    /// OCR confidence in `[0, 1]`
    pub confidence: f64,
    /// Kind of clinical moment, when the upstream segmenter knows it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<DateAnchorKind>,
}

impl DateAnchor {
    /// Check anchor shape before any processing
    pub fn validate(&self) -> Result<()> {
        self.bbox.validate()?;
        if !(0.0..=1.0).contains(&self.confidence) {
            return Err(MedLinkError::validation(format!(
                "anchor confidence out of [0,1]: {}",
                self.confidence
            )));
        }
        if self.text.trim().is_empty() {
            return Err(MedLinkError::validation("anchor text is empty"));
        }
        Ok(())
    }
}

/// A positioned OCR text block, candidate evidence for nearby anchors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextBlock {
    /// Recognized text content
    pub text: String,
    /// Position of the block on its page
    pub bbox: BoundingBox,
    /// Page the block was found on
    pub page: u32,
    /// OCR confidence in `[0, 1]`, when reported
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}

impl TextBlock {
    /// Check block shape before any processing
    pub fn validate(&self) -> Result<()> {
        self.bbox.validate()?;
        if let Some(c) = self.confidence {
            if !(0.0..=1.0).contains(&c) {
                return Err(MedLinkError::validation(format!(
                    "block confidence out of [0,1]: {c}"
                )));
            }
        }
        Ok(())
    }
}

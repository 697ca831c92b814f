//! Date-anchored medical events and their supporting evidence
//!
//! A `MedicalEvent` is created by the binder (one per input anchor), gets
//! its slots filled by the packer and its score and relation edges by the
//! scorer, then flows to the downstream report renderer as plain data.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::geometry::BoundingBox;
use crate::utils::dates;
use crate::vocabulary::EventTag;

/// Maximum snippet length carried by a piece of evidence
pub const MAX_SNIPPET_CHARS: usize = 200;

/// A bounded text snippet justifying an event's binding to a date
///
/// Derived once by the binder and never edited afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evidence {
    /// Page the source block was found on
    pub page: u32,
    /// Position of the source block
    pub bbox: BoundingBox,
    /// Text snippet, at most [`MAX_SNIPPET_CHARS`] characters
    pub snippet: String,
    /// Binding confidence in `[0, 1]`
    pub confidence: f64,
}

/// Structured fields extracted from an event's evidence
///
/// Every field has a default; extraction never fails on absence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventSlots {
    /// Normalized visit date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visit_date: Option<String>,
    /// First matched visit-reason term
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visit_reason: Option<String>,
    /// Disease codes and diagnosis keywords, without deduplication
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub diagnosis: Vec<String>,
    /// Matched examination variants
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examination: Vec<String>,
    /// Evidence snippets carrying pathology markers, at most three
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pathology: Vec<String>,
    /// Matched treatment variants
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub treatment: Vec<String>,
    /// First matched outpatient treatment period
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outpatient_period: Option<String>,
    /// First matched admission period
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admission_period: Option<String>,
    /// Past-history statements, or the tag fallback marker
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub past_history: Vec<String>,
    /// Clinician opinion snippet, fallback marker, or "not recorded"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doctor_opinion: Option<String>,
}

/// A scored relation between two events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationEdge {
    /// Date of the related event
    pub to_date: String,
    /// Relation strength in `[0.3, 1]`
    pub rel: f64,
}

/// Evidence, tags and scoring attached to an event
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventMeta {
    /// Supporting evidence, capped by the binder configuration
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub evidence: Vec<Evidence>,
    /// Tags aggregated from the surrounding evidence
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub tags: BTreeSet<String>,
    /// Reviewer flags raised during extraction
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub needs_review: Vec<String>,
    /// Relevance/severity score in `[0, 1]`, set by the scorer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    /// Relation edges to other events, set by the scorer
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rel_edges: Vec<RelationEdge>,
}

/// A date-anchored clinical event reconstructed from OCR fragments
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MedicalEvent {
    /// Normalized event date (ISO where the anchor parsed, raw text otherwise)
    pub date: String,
    /// Structured fields extracted from the evidence
    pub slots: EventSlots,
    /// Evidence, tags and scoring metadata
    pub meta: EventMeta,
}

impl MedicalEvent {
    /// Event date as a calendar date, when the anchor normalized
    #[must_use]
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        dates::parse_flexible_date(&self.date)
    }

    /// Whether the given tag was aggregated onto this event
    #[must_use]
    pub fn has_tag(&self, tag: EventTag) -> bool {
        self.meta.tags.contains(tag.as_str())
    }

    /// Concatenated evidence snippets, the packer's working text
    #[must_use]
    pub fn evidence_text(&self) -> String {
        self.meta
            .evidence
            .iter()
            .map(|e| e.snippet.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

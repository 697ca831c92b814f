//! Pairwise correlation between outpatient visit records

use chrono::NaiveDate;
use log::warn;

use crate::algorithm::episode::config::{CorrelationWeights, EpisodeConfig};
use crate::algorithm::episode::symptoms::{self, SymptomPriority};
use crate::models::OutpatientRecord;
use crate::utils::text;
use crate::vocabulary::{terms, DiagnosticGroup};

/// Precomputed correlation signals for one parseable record
///
/// Facts are derived once per record so the O(n²) pairwise scoring never
/// re-scans text.
#[derive(Debug, Clone)]
pub struct RecordFacts {
    /// Index into the original input slice
    pub index: usize,
    /// Parsed visit date
    pub date: NaiveDate,
    /// Resolved diagnostic group, when the text resolved
    pub group: Option<DiagnosticGroup>,
    /// Normalized hospital name
    pub hospital: Option<String>,
    /// Whether the text matches the treatment-continuity vocabulary
    pub has_continuity: bool,
    /// Whether the text matches the outpatient-sequence vocabulary
    pub in_sequence: bool,
    /// Symptom-priority class of the visit reason
    pub symptom: SymptomPriority,
}

impl RecordFacts {
    /// Derive facts from a record; `None` when the date does not parse
    #[must_use]
    pub fn from_record(record: &OutpatientRecord, index: usize) -> Option<Self> {
        let Some(date) = record.parsed_date() else {
            warn!("dropping record {index} with unparseable date {:?}", record.date);
            return None;
        };
        let combined = record.combined_text();
        Some(Self {
            index,
            date,
            group: DiagnosticGroup::resolve(&combined),
            hospital: record.normalized_hospital(),
            has_continuity: text::count_keyword_hits(&combined, terms::CONTINUITY) > 0,
            in_sequence: text::count_keyword_hits(&combined, terms::OUTPATIENT_SEQUENCE) > 0,
            symptom: symptoms::classify(record.reason.as_deref()),
        })
    }

    /// Whether both records name the same hospital
    #[must_use]
    pub fn same_hospital(&self, other: &Self) -> bool {
        matches!((&self.hospital, &other.hospital), (Some(a), Some(b)) if a == b)
    }

    /// Whether both records resolved to the same diagnostic group
    #[must_use]
    pub fn same_group(&self, other: &Self) -> bool {
        matches!((self.group, other.group), (Some(a), Some(b)) if a == b)
    }
}

/// Base five-factor correlation between two records, capped at one
#[must_use]
pub fn pairwise_correlation(
    a: &RecordFacts,
    b: &RecordFacts,
    weights: &CorrelationWeights,
    window_days: i64,
) -> f64 {
    let mut score = 0.0;

    let gap = (b.date - a.date).num_days().abs();
    let closeness = (1.0 - gap as f64 / window_days as f64).clamp(0.0, 1.0);
    score += closeness * weights.temporal;

    if a.same_group(b) {
        score += weights.diagnostic_group;
    }
    if a.has_continuity || b.has_continuity {
        score += weights.treatment_continuity;
    }
    if a.same_hospital(b) {
        score += weights.hospital;
    }
    if a.in_sequence && b.in_sequence {
        score += weights.sequence_bonus;
    }

    score.min(1.0)
}

/// Base correlation plus the configured additive boosts, capped at one
///
/// Symptom boosts apply by the class of the incoming (later) record.
#[must_use]
pub fn boosted_correlation(a: &RecordFacts, b: &RecordFacts, config: &EpisodeConfig) -> f64 {
    let mut score = pairwise_correlation(a, b, &config.weights, config.window_days);
    let boosts = &config.boosts;

    if a.same_hospital(b) {
        score += boosts.same_hospital;
    }
    if a.same_group(b) {
        score += boosts.diagnostic_group;
    }
    if a.has_continuity || b.has_continuity {
        score += boosts.treatment_continuity;
    }
    score += match b.symptom {
        SymptomPriority::Primary => boosts.primary_symptom,
        SymptomPriority::Secondary => boosts.secondary_symptom,
        SymptomPriority::Unknown => 0.0,
    };

    score.min(1.0)
}

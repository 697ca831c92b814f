//! Multi-factor event scoring
//!
//! Computes a relevance/severity score per event from six independently
//! normalized heuristic factors, combined by a weighted sum and squashed
//! through a logistic function. Every factor has an explicit fallback for
//! missing data, so scoring is total over well-formed input.

pub mod relations;
pub mod weights;

pub use relations::compute_relations;
pub use weights::ScorerWeights;

use chrono::NaiveDate;
use log::debug;

use crate::error::Result;
use crate::models::MedicalEvent;
use crate::utils::{dates, text};
use crate::vocabulary::{terms, EventTag};

/// Call-time context for event scoring
#[derive(Debug, Clone, Default)]
pub struct ScoreContext {
    /// Policy effective date used as the temporal reference point
    pub contract_date: Option<NaiveDate>,
    /// Claim keywords to check diagnosis/examination text against
    pub claim_keywords: Vec<String>,
}

/// Score one event against its peers
///
/// Returns a value in `[0, 1]`, rounded to three decimals. Weights are
/// validated at call time and renormalized to sum to one.
pub fn score_event(
    event: &MedicalEvent,
    all_events: &[MedicalEvent],
    context: &ScoreContext,
    weights: &ScorerWeights,
) -> Result<f64> {
    weights.validate()?;
    let w = weights.normalized();

    let factors = [
        (severity_factor(event), w.severity),
        (proximity_factor(event, context), w.proximity_to_contract),
        (documentation_factor(event), w.documentation_strength),
        (claim_relevance_factor(event, context), w.claim_relevance),
        (repetition_factor(event, all_events), w.repetition_pattern),
        (disclosure_factor(event), w.disclosure_trigger),
    ];

    let combined: f64 = factors.iter().map(|(value, weight)| value * weight).sum();
    let squashed = 1.0 / (1.0 + (-combined).exp());
    let score = round3(squashed);

    debug!("event {} scored {score}", event.date);
    Ok(score)
}

/// Score every event in place, returning a new annotated sequence
pub fn score_events(
    events: &[MedicalEvent],
    context: &ScoreContext,
    weights: &ScorerWeights,
) -> Result<Vec<MedicalEvent>> {
    let mut scored = events.to_vec();
    for event in &mut scored {
        event.meta.score = Some(score_event(event, events, context, weights)?);
    }
    Ok(scored)
}

/// Admission and surgery weigh heaviest; imaging adds moderate severity
fn severity_factor(event: &MedicalEvent) -> f64 {
    let mut severity: f64 = 0.0;
    if event.has_tag(EventTag::Admission) {
        severity += 0.9;
    }
    if event.has_tag(EventTag::Surgery) {
        severity += 0.9;
    }
    if event.has_tag(EventTag::Imaging) {
        severity += 0.4;
    }
    severity.min(1.0)
}

/// Tiered closeness to the contract date; neutral 0.5 without one
fn proximity_factor(event: &MedicalEvent, context: &ScoreContext) -> f64 {
    let (Some(contract), Some(date)) = (context.contract_date, event.parsed_date()) else {
        return 0.5;
    };
    match dates::days_between(date, contract) {
        gap if gap < 90 => 1.0,
        gap if gap < 365 => 0.7,
        gap if gap < 365 * 5 => 0.4,
        _ => 0.2,
    }
}

fn documentation_factor(event: &MedicalEvent) -> f64 {
    let mut strength = (event.meta.evidence.len() as f64 * 0.1).min(1.0);
    if !event.slots.pathology.is_empty() {
        strength += 0.4;
    }
    let surgical_treatment = event
        .slots
        .treatment
        .iter()
        .any(|t| text::count_keyword_hits(t, terms::SURGICAL_TREATMENT) > 0);
    if surgical_treatment {
        strength += 0.3;
    }
    strength.min(1.0)
}

/// Fraction of claim keywords present in diagnosis/examination text
fn claim_relevance_factor(event: &MedicalEvent, context: &ScoreContext) -> f64 {
    if context.claim_keywords.is_empty() {
        return 0.5;
    }
    let haystack = event
        .slots
        .diagnosis
        .iter()
        .chain(event.slots.examination.iter())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ");
    let found = context
        .claim_keywords
        .iter()
        .filter(|kw| text::contains_ignore_case(&haystack, kw))
        .count();
    found as f64 / context.claim_keywords.len() as f64
}

/// Multiple events on one date hint at an intensive care day
fn repetition_factor(event: &MedicalEvent, all_events: &[MedicalEvent]) -> f64 {
    let same_date = all_events.iter().filter(|e| e.date == event.date).count();
    ((same_date.saturating_sub(1)) as f64 * 0.2).min(1.0)
}

fn disclosure_factor(event: &MedicalEvent) -> f64 {
    let triggered = event
        .slots
        .doctor_opinion
        .as_deref()
        .is_some_and(|opinion| text::count_keyword_hits(opinion, terms::DISCLOSURE_TRIGGER) > 0);
    if triggered { 0.8 } else { 0.2 }
}

pub(crate) fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

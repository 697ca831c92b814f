//! Event slot packing
//!
//! Fills the structured slots of a bound event from its concatenated
//! evidence. Packing is total: every slot has a default and no input can
//! make it fail. The packer is a pure function, the input event is left
//! untouched and a new event is returned.

use crate::models::{EventSlots, MedicalEvent};
use crate::utils::{dates, text};
use crate::vocabulary::{patterns, terms, EventTag};

/// Cap on pathology snippets carried in the pathology slot
const MAX_PATHOLOGY_SNIPPETS: usize = 3;

/// Extract structured slots from an event's evidence
///
/// Returns a new event with filled slots; the input is not mutated.
#[must_use]
pub fn pack(event: &MedicalEvent) -> MedicalEvent {
    let combined = event.evidence_text();
    let mut packed = event.clone();

    packed.slots = EventSlots {
        visit_date: event.slots.visit_date.clone(),
        visit_reason: text::first_term_match(&combined, terms::VISIT_REASON),
        diagnosis: extract_diagnosis(&combined),
        examination: extract_examination(&combined),
        pathology: extract_pathology(event),
        treatment: text::collect_term_occurrences(&combined, terms::TREATMENT),
        outpatient_period: None,
        admission_period: None,
        past_history: extract_past_history(event, &combined),
        doctor_opinion: Some(extract_doctor_opinion(event)),
    };

    let (outpatient, admission) = extract_periods(event, &combined);
    packed.slots.outpatient_period = outpatient;
    packed.slots.admission_period = admission;

    packed
}

/// Disease-code matches plus diagnosis keywords, collected without dedup
fn extract_diagnosis(combined: &str) -> Vec<String> {
    let mut found: Vec<String> = patterns::DISEASE_CODE
        .find_iter(combined)
        .map(|m| m.as_str().to_uppercase())
        .collect();
    found.extend(text::collect_term_occurrences(combined, terms::DIAGNOSIS));
    found
}

fn extract_examination(combined: &str) -> Vec<String> {
    let mut found: Vec<String> = patterns::IMAGING_ABBREV
        .find_iter(combined)
        .map(|m| m.as_str().to_uppercase())
        .collect();
    found.extend(text::collect_term_occurrences(combined, terms::EXAMINATION));
    found
}

/// Up to three evidence snippets carrying pathology markers
fn extract_pathology(event: &MedicalEvent) -> Vec<String> {
    event
        .meta
        .evidence
        .iter()
        .filter(|e| text::count_keyword_hits(&e.snippet, terms::PATHOLOGY) > 0)
        .take(MAX_PATHOLOGY_SNIPPETS)
        .map(|e| e.snippet.clone())
        .collect()
}

/// Assign the first matched date range to the period slot its context names
///
/// A range in admission context (admission tag or admission synonyms in the
/// text) fills `admission_period`; outpatient context fills
/// `outpatient_period`; when both contexts are present the same range fills
/// both fields.
fn extract_periods(event: &MedicalEvent, combined: &str) -> (Option<String>, Option<String>) {
    let Some(caps) = patterns::DATE_RANGE.captures(combined) else {
        return (None, None);
    };
    let range = format!(
        "{} ~ {}",
        dates::normalize_date_text(&caps[1]),
        dates::normalize_date_text(&caps[2])
    );

    let admission_context = event.has_tag(EventTag::Admission)
        || text::count_keyword_hits(combined, EventTag::Admission.synonyms()) > 0;
    let outpatient_context = text::count_keyword_hits(combined, terms::OUTPATIENT_CONTEXT) > 0;

    match (admission_context, outpatient_context) {
        (true, true) => (Some(range.clone()), Some(range)),
        (true, false) => (None, Some(range)),
        _ => (Some(range), None),
    }
}

fn extract_past_history(event: &MedicalEvent, combined: &str) -> Vec<String> {
    let matched = text::collect_term_occurrences(combined, terms::PAST_HISTORY);
    if matched.is_empty() && event.has_tag(EventTag::PastHistory) {
        return vec![terms::PAST_HISTORY_FALLBACK.to_string()];
    }
    matched
}

/// First evidence snippet carrying an opinion term, or the tag fallback,
/// or the "not recorded" default
fn extract_doctor_opinion(event: &MedicalEvent) -> String {
    for evidence in &event.meta.evidence {
        if text::count_keyword_hits(&evidence.snippet, terms::OPINION) > 0 {
            return evidence.snippet.clone();
        }
    }
    if event.has_tag(EventTag::DoctorOpinion) {
        return terms::OPINION_FALLBACK.to_string();
    }
    terms::NOT_RECORDED.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BoundingBox, Evidence};

    fn event_with_snippets(snippets: &[&str]) -> MedicalEvent {
        let mut event = MedicalEvent {
            date: "2024-01-03".to_string(),
            ..MedicalEvent::default()
        };
        event.slots.visit_date = Some("2024-01-03".to_string());
        event.meta.evidence = snippets
            .iter()
            .map(|s| Evidence {
                page: 0,
                bbox: BoundingBox::new(0.1, 0.1, 0.2, 0.02),
                snippet: (*s).to_string(),
                confidence: 0.7,
            })
            .collect();
        event
    }

    #[test]
    fn test_diagnosis_codes_and_keywords() {
        let event = event_with_snippets(&["진단명 J45.0 천식", "tumor marker 검사"]);
        let packed = pack(&event);
        assert!(packed.slots.diagnosis.contains(&"J45.0".to_string()));
        assert!(packed.slots.diagnosis.contains(&"tumor".to_string()));
    }

    #[test]
    fn test_packing_is_pure() {
        let event = event_with_snippets(&["수술 후 경과관찰"]);
        let before = event.clone();
        let packed = pack(&event);
        assert_eq!(event, before);
        assert!(!packed.slots.treatment.is_empty());
    }

    #[test]
    fn test_empty_event_gets_defaults() {
        let packed = pack(&MedicalEvent::default());
        assert!(packed.slots.diagnosis.is_empty());
        assert_eq!(packed.slots.doctor_opinion.as_deref(), Some("not recorded"));
    }

    #[test]
    fn test_period_goes_to_admission_in_admission_context() {
        let event = event_with_snippets(&["입원기간: 2024.01.03 ~ 2024.01.15"]);
        let packed = pack(&event);
        assert_eq!(
            packed.slots.admission_period.as_deref(),
            Some("2024-01-03 ~ 2024-01-15")
        );
        assert!(packed.slots.outpatient_period.is_none());
    }

    #[test]
    fn test_period_defaults_to_outpatient() {
        let event = event_with_snippets(&["치료기간 2024.02.01 ~ 2024.03.01"]);
        let packed = pack(&event);
        assert_eq!(
            packed.slots.outpatient_period.as_deref(),
            Some("2024-02-01 ~ 2024-03-01")
        );
        assert!(packed.slots.admission_period.is_none());
    }

    #[test]
    fn test_past_history_fallback_marker() {
        let mut event = event_with_snippets(&["특이사항 없음"]);
        event.meta.tags.insert("past-history".to_string());
        let packed = pack(&event);
        assert_eq!(packed.slots.past_history, vec![terms::PAST_HISTORY_FALLBACK]);
    }

    #[test]
    fn test_doctor_opinion_carries_snippet() {
        let event = event_with_snippets(&["CBC 정상", "소견: 추가 검사 요망"]);
        let packed = pack(&event);
        assert_eq!(
            packed.slots.doctor_opinion.as_deref(),
            Some("소견: 추가 검사 요망")
        );
    }
}

#[cfg(test)]
mod tests {
    use medlink::models::{BoundingBox, Evidence, MedicalEvent};
    use medlink::pack;

    fn event_from(snippets: &[&str], tags: &[&str]) -> MedicalEvent {
        let mut event = MedicalEvent {
            date: "2024-01-03".to_string(),
            ..MedicalEvent::default()
        };
        event.slots.visit_date = Some("2024-01-03".to_string());
        for snippet in snippets {
            event.meta.evidence.push(Evidence {
                page: 0,
                bbox: BoundingBox::new(0.1, 0.2, 0.3, 0.02),
                snippet: (*snippet).to_string(),
                confidence: 0.8,
            });
        }
        for tag in tags {
            event.meta.tags.insert((*tag).to_string());
        }
        event
    }

    #[test]
    fn test_full_clinical_note_fills_slots() {
        let event = event_from(
            &[
                "응급 내원, severe abdominal pain",
                "진단명 K29.1 급성 위염",
                "복부 초음파 및 혈액검사 시행",
                "약물 처방 후 경과관찰",
            ],
            &[],
        );

        let packed = pack(&event);

        assert_eq!(packed.slots.visit_date.as_deref(), Some("2024-01-03"));
        assert!(packed.slots.visit_reason.is_some());
        assert!(packed.slots.diagnosis.contains(&"K29.1".to_string()));
        assert!(packed.slots.examination.contains(&"초음파".to_string()));
        assert!(packed.slots.treatment.contains(&"처방".to_string()));
    }

    #[test]
    fn test_diagnosis_keeps_duplicates() {
        let event = event_from(&["J45.0 천식", "재확인 J45.0"], &[]);
        let packed = pack(&event);
        let code_count = packed
            .slots
            .diagnosis
            .iter()
            .filter(|d| *d == "J45.0")
            .count();
        assert_eq!(code_count, 2);
    }

    #[test]
    fn test_pathology_capped_at_three_snippets() {
        let event = event_from(
            &[
                "조직검사 결과 malignant",
                "biopsy grade 2",
                "병리 판독 TNM T2N0M0",
                "추가 pathology 소견",
            ],
            &[],
        );
        let packed = pack(&event);
        assert_eq!(packed.slots.pathology.len(), 3);
    }

    #[test]
    fn test_admission_tag_routes_period() {
        let event = event_from(&["치료기간 2024.01.03 ~ 2024.01.20"], &["admission"]);
        let packed = pack(&event);
        assert_eq!(
            packed.slots.admission_period.as_deref(),
            Some("2024-01-03 ~ 2024-01-20")
        );
        assert!(packed.slots.outpatient_period.is_none());
    }

    #[test]
    fn test_mixed_context_fills_both_periods() {
        let event = event_from(&["입원 후 외래 통원: 2024.01.03 ~ 2024.02.01"], &[]);
        let packed = pack(&event);
        assert_eq!(
            packed.slots.outpatient_period.as_deref(),
            Some("2024-01-03 ~ 2024-02-01")
        );
        assert_eq!(
            packed.slots.admission_period.as_deref(),
            Some("2024-01-03 ~ 2024-02-01")
        );
    }

    #[test]
    fn test_opinion_fallback_from_tag() {
        let event = event_from(&["특이사항 없음"], &["doctor-opinion"]);
        let packed = pack(&event);
        assert_eq!(
            packed.slots.doctor_opinion.as_deref(),
            Some("doctor opinion indicated")
        );
    }

    #[test]
    fn test_no_evidence_still_packs() {
        let packed = pack(&MedicalEvent::default());
        assert!(packed.slots.visit_reason.is_none());
        assert!(packed.slots.treatment.is_empty());
        assert_eq!(packed.slots.doctor_opinion.as_deref(), Some("not recorded"));
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use medlink::models::{BoundingBox, Evidence, MedicalEvent};
    use medlink::{
        compute_relations, reconstruct_events, score_event, BinderConfig, DateAnchor,
        DateAnchorKind, ScoreContext, ScorerWeights, TextBlock,
    };

    fn event_on(date: &str) -> MedicalEvent {
        MedicalEvent {
            date: date.to_string(),
            ..MedicalEvent::default()
        }
    }

    #[test]
    fn test_scores_stay_in_unit_interval() {
        let mut heavy = event_on("2024-01-03");
        heavy.meta.tags.insert("admission".to_string());
        heavy.meta.tags.insert("surgery".to_string());
        heavy.meta.tags.insert("imaging".to_string());
        heavy.slots.pathology = vec!["조직검사 악성".to_string()];
        heavy.slots.treatment = vec!["수술".to_string()];
        heavy.slots.doctor_opinion = Some("수술 필요, 추가 검사 요망".to_string());
        for _ in 0..15 {
            heavy.meta.evidence.push(Evidence {
                page: 0,
                bbox: BoundingBox::new(0.1, 0.2, 0.3, 0.02),
                snippet: "evidence".to_string(),
                confidence: 0.9,
            });
        }

        let empty = event_on("not a date");
        let all = vec![heavy.clone(), heavy.clone(), empty.clone()];
        let ctx = ScoreContext {
            contract_date: NaiveDate::from_ymd_opt(2024, 2, 1),
            claim_keywords: vec!["암".to_string()],
        };

        for event in [&heavy, &empty] {
            let score = score_event(event, &all, &ctx, &ScorerWeights::default()).unwrap();
            assert!((0.0..=1.0).contains(&score), "score {score} out of range");
        }
    }

    #[test]
    fn test_weight_overrides_renormalize() {
        let mut event = event_on("2024-01-03");
        event.meta.tags.insert("admission".to_string());
        let all = vec![event.clone()];
        let ctx = ScoreContext::default();

        // Same mix at a different scale must give the same score
        let base = ScorerWeights::default();
        let scaled = ScorerWeights {
            severity: 35.0,
            proximity_to_contract: 20.0,
            documentation_strength: 20.0,
            claim_relevance: 15.0,
            repetition_pattern: 5.0,
            disclosure_trigger: 5.0,
        };
        let a = score_event(&event, &all, &ctx, &base).unwrap();
        let b = score_event(&event, &all, &ctx, &scaled).unwrap();
        assert!((a - b).abs() < 1e-9);
    }

    #[test]
    fn test_relations_respect_threshold() {
        let mut a = event_on("2024-01-03");
        a.slots.diagnosis = vec!["I10".to_string()];
        let mut b = event_on("2024-01-12");
        b.slots.diagnosis = vec!["I10".to_string()];
        let c = event_on("2024-12-25");

        let related = compute_relations(&[a, b, c]);

        for event in &related {
            for edge in &event.meta.rel_edges {
                assert!(edge.rel >= 0.3, "edge {} below threshold", edge.rel);
            }
        }
        // a and b share a code two weeks apart; c relates to neither
        assert_eq!(related[0].meta.rel_edges.len(), 1);
        assert_eq!(related[1].meta.rel_edges.len(), 1);
        assert!(related[2].meta.rel_edges.is_empty());
    }

    #[test]
    fn test_pipeline_binds_packs_scores_and_relates() {
        let anchors = vec![
            DateAnchor {
                text: "2024.01.03".to_string(),
                page: 0,
                bbox: BoundingBox::new(0.1, 0.2, 0.12, 0.02),
                confidence: 0.95,
                kind: Some(DateAnchorKind::Visit),
            },
            DateAnchor {
                text: "2024.01.10".to_string(),
                page: 1,
                bbox: BoundingBox::new(0.1, 0.2, 0.12, 0.02),
                confidence: 0.95,
                kind: Some(DateAnchorKind::Exam),
            },
        ];
        let blocks = vec![
            TextBlock {
                text: "진단명 J45.0 천식, 약물 처방".to_string(),
                bbox: BoundingBox::new(0.12, 0.24, 0.3, 0.02),
                page: 0,
                confidence: Some(0.9),
            },
            TextBlock {
                text: "J45.0 경과관찰, 혈액검사 시행".to_string(),
                bbox: BoundingBox::new(0.12, 0.24, 0.3, 0.02),
                page: 1,
                confidence: Some(0.9),
            },
        ];

        let events = reconstruct_events(
            &anchors,
            &blocks,
            NaiveDate::from_ymd_opt(2024, 3, 1),
            &BinderConfig::default(),
            &ScoreContext {
                contract_date: NaiveDate::from_ymd_opt(2024, 3, 1),
                claim_keywords: vec!["천식".to_string()],
            },
            &ScorerWeights::default(),
        )
        .unwrap();

        assert_eq!(events.len(), 2);
        for event in &events {
            let score = event.meta.score.unwrap();
            assert!((0.0..=1.0).contains(&score));
            assert!(!event.slots.diagnosis.is_empty());
        }
        // Shared J45.0 a week apart forms a symmetric relation edge
        assert_eq!(events[0].meta.rel_edges.len(), 1);
        assert_eq!(events[1].meta.rel_edges.len(), 1);
        assert_eq!(events[0].meta.rel_edges[0].to_date, "2024-01-10");
        assert_eq!(events[1].meta.rel_edges[0].to_date, "2024-01-03");
    }
}

#[cfg(test)]
mod tests {
    use medlink::{bind, BinderConfig, BoundingBox, DateAnchor, DateAnchorKind, TextBlock};

    fn anchor(text: &str, page: u32, x: f64, y: f64) -> DateAnchor {
        DateAnchor {
            text: text.to_string(),
            page,
            bbox: BoundingBox::new(x, y, 0.12, 0.02),
            confidence: 0.95,
            kind: Some(DateAnchorKind::Visit),
        }
    }

    fn block(text: &str, page: u32, x: f64, y: f64) -> TextBlock {
        TextBlock {
            text: text.to_string(),
            bbox: BoundingBox::new(x, y, 0.25, 0.02),
            page,
            confidence: Some(0.85),
        }
    }

    #[test]
    fn test_output_is_one_to_one_with_anchors() {
        let anchors = vec![
            anchor("2024.01.03", 0, 0.1, 0.2),
            anchor("2024년 2월 1일", 0, 0.1, 0.5),
            anchor("illegible", 1, 0.1, 0.3),
        ];
        let blocks = vec![block("외래 진료", 0, 0.12, 0.22)];

        let events = bind(&anchors, &blocks, None, &BinderConfig::default()).unwrap();

        assert_eq!(events.len(), 3);
        assert_eq!(events[0].date, "2024-01-03");
        assert_eq!(events[1].date, "2024-02-01");
        // Unrecognized anchor text passes through unchanged
        assert_eq!(events[2].date, "illegible");
    }

    #[test]
    fn test_no_evidence_from_header_or_footer() {
        let anchors = vec![anchor("2024-01-03", 0, 0.1, 0.1)];
        let blocks = vec![
            block("서울중앙병원 의무기록", 0, 0.1, 0.02),
            block("입원 경과 기록", 0, 0.12, 0.13),
            block("- 3/12 -", 0, 0.45, 0.96),
        ];

        let events = bind(&anchors, &blocks, None, &BinderConfig::default()).unwrap();

        for evidence in &events[0].meta.evidence {
            let y = evidence.bbox.y + evidence.bbox.height / 2.0;
            assert!(y >= 0.08 && y <= 0.92);
        }
        assert_eq!(events[0].meta.evidence.len(), 1);
    }

    #[test]
    fn test_evidence_cap_holds_under_dense_pages() {
        let anchors = vec![anchor("2024-01-03", 0, 0.4, 0.5)];
        let blocks: Vec<TextBlock> = (0..20)
            .map(|i| block("혈액검사 결과 정상", 0, 0.35, 0.2 + 0.03 * f64::from(i)))
            .collect();
        let config = BinderConfig::builder().max_evidence(5).build();

        let events = bind(&anchors, &blocks, None, &config).unwrap();
        assert!(events[0].meta.evidence.len() <= 5);
    }

    #[test]
    fn test_table_page_keeps_nearest_half() {
        let anchors = vec![anchor("2024-01-03", 0, 0.1, 0.4)];
        // Two tight rows of four cells: tabular layout
        let blocks: Vec<TextBlock> = (0..4)
            .map(|i| block("항목", 0, 0.1 + 0.2 * f64::from(i), 0.4))
            .chain((0..4).map(|i| block("수치", 0, 0.1 + 0.2 * f64::from(i), 0.42)))
            .collect();

        let events = bind(&anchors, &blocks, None, &BinderConfig::default()).unwrap();
        let scattered = bind(
            &anchors,
            &blocks
                .iter()
                .enumerate()
                .map(|(i, b)| TextBlock {
                    bbox: BoundingBox::new(b.bbox.x, 0.2 + 0.06 * i as f64, 0.25, 0.02),
                    ..b.clone()
                })
                .collect::<Vec<_>>(),
            None,
            &BinderConfig::default(),
        )
        .unwrap();

        // The tabular page binds fewer, closer cells than the scattered one
        assert!(events[0].meta.evidence.len() < scattered[0].meta.evidence.len());
    }

    #[test]
    fn test_far_tagged_blocks_arrive_as_extra_evidence() {
        let anchors = vec![anchor("2024-01-03", 0, 0.1, 0.2)];
        let blocks = vec![
            block("외래 내원", 0, 0.12, 0.22),
            // Too far for the radius set, but carries past-history context
            block("과거력: 당뇨 진단", 0, 0.8, 0.85),
        ];

        let events = bind(&anchors, &blocks, None, &BinderConfig::default()).unwrap();
        assert!(events[0]
            .meta
            .evidence
            .iter()
            .any(|e| e.snippet.contains("과거력")));
        // Tags still come from the surrounding evidence only
        assert!(!events[0].meta.tags.contains("past-history"));
    }

    #[test]
    fn test_snippets_are_bounded() {
        let long_text = "통증 호소 ".repeat(100);
        let anchors = vec![anchor("2024-01-03", 0, 0.1, 0.2)];
        let blocks = vec![block(&long_text, 0, 0.12, 0.22)];

        let events = bind(&anchors, &blocks, None, &BinderConfig::default()).unwrap();
        assert!(events[0].meta.evidence[0].snippet.chars().count() <= 200);
    }

    #[test]
    fn test_out_of_range_confidence_rejected() {
        let mut bad = anchor("2024-01-03", 0, 0.1, 0.2);
        bad.confidence = 1.4;
        assert!(bind(&[bad], &[], None, &BinderConfig::default()).is_err());
    }
}

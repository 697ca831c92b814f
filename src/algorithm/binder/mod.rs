//! Date-anchor evidence binding
//!
//! Binds each OCR date anchor to the text blocks around it, producing one
//! unscored [`MedicalEvent`] per anchor with bounded supporting evidence
//! and aggregated tags.

pub mod layout;

use chrono::NaiveDate;
use log::{debug, info};
use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use crate::config::BinderConfig;
use crate::error::Result;
use crate::models::{
    DateAnchor, EventMeta, EventSlots, Evidence, MedicalEvent, TextBlock, MAX_SNIPPET_CHARS,
};
use crate::utils::{dates, text};
use crate::vocabulary::EventTag;

/// Cap on tagged "extra" evidence pulled from outside the radius set
const MAX_EXTRA_EVIDENCE: usize = 3;

/// Bind date anchors to nearby text-block evidence
///
/// Produces exactly one event per input anchor; empty input produces empty
/// output. Input shape and configuration are validated before any anchor is
/// processed, so a failure never leaves partial work behind.
pub fn bind(
    anchors: &[DateAnchor],
    blocks: &[TextBlock],
    contract_date: Option<NaiveDate>,
    config: &BinderConfig,
) -> Result<Vec<MedicalEvent>> {
    config.validate()?;
    for anchor in anchors {
        anchor.validate()?;
    }
    for block in blocks {
        block.validate()?;
    }

    let mut events = Vec::with_capacity(anchors.len());
    for anchor in anchors {
        events.push(bind_anchor(anchor, blocks, config));
    }

    if let Some(contract) = contract_date {
        let preceding = events
            .iter()
            .filter_map(MedicalEvent::parsed_date)
            .filter(|d| *d < contract)
            .count();
        debug!("{preceding} of {} events precede the contract date", events.len());
    }

    info!("Bound {} events from {} anchors", events.len(), anchors.len());
    Ok(events)
}

fn bind_anchor(anchor: &DateAnchor, blocks: &[TextBlock], config: &BinderConfig) -> MedicalEvent {
    // Candidates live on the anchor's page, outside header/footer bands
    let page_blocks: Vec<&TextBlock> = blocks
        .iter()
        .filter(|b| b.page == anchor.page)
        .filter(|b| {
            let y = b.bbox.center_y();
            y >= config.header_band && y <= config.footer_band
        })
        .collect();

    let table_like = layout::is_table_like(&page_blocks, config.row_tolerance);

    // Radius-filtered candidates, nearest first
    let mut around: SmallVec<[(f64, usize); 16]> = page_blocks
        .iter()
        .enumerate()
        .filter_map(|(idx, b)| {
            let distance = anchor.bbox.center_distance(&b.bbox);
            (distance <= config.radius).then_some((distance, idx))
        })
        .collect();
    around.sort_by(|a, b| a.0.total_cmp(&b.0));

    // Tabular pages spill unrelated cells into the radius; keep only the
    // nearest half of the candidates there
    if table_like {
        around.truncate(around.len().div_ceil(2));
    }

    let selected: FxHashSet<usize> = around.iter().map(|(_, idx)| *idx).collect();

    // Tagged context (past history, doctor opinion) can sit far from the
    // anchor; pull a few such blocks in by keyword density
    let mut extra: Vec<(usize, usize)> = page_blocks
        .iter()
        .enumerate()
        .filter(|(idx, _)| !selected.contains(idx))
        .filter(|(_, b)| {
            let tags = EventTag::detect_all(&b.text);
            tags.contains(&EventTag::PastHistory) || tags.contains(&EventTag::DoctorOpinion)
        })
        .map(|(idx, b)| (keyword_score(&b.text), idx))
        .collect();
    extra.sort_by(|a, b| b.0.cmp(&a.0));
    extra.truncate(MAX_EXTRA_EVIDENCE.min(config.max_evidence));

    let mut evidence = Vec::new();
    for (_, idx) in &around {
        evidence.push(build_evidence(page_blocks[*idx]));
    }
    for (_, idx) in &extra {
        evidence.push(build_evidence(page_blocks[*idx]));
    }
    evidence.truncate(config.max_evidence);

    // Tags come from the surrounding evidence only, never from the extra set
    let mut tags = std::collections::BTreeSet::new();
    for (_, idx) in &around {
        for tag in EventTag::detect_all(&page_blocks[*idx].text) {
            tags.insert(tag.as_str().to_string());
        }
    }

    let normalized = dates::normalize_date_text(&anchor.text);

    MedicalEvent {
        date: normalized.clone(),
        slots: EventSlots {
            visit_date: Some(normalized),
            ..EventSlots::default()
        },
        meta: EventMeta {
            evidence,
            tags,
            needs_review: Vec::new(),
            score: None,
            rel_edges: Vec::new(),
        },
    }
}

fn build_evidence(block: &TextBlock) -> Evidence {
    let score = keyword_score(&block.text);
    Evidence {
        page: block.page,
        bbox: block.bbox,
        snippet: text::truncate_snippet(&block.text, MAX_SNIPPET_CHARS),
        confidence: 0.5 + (score as f64 * 0.05).min(0.5),
    }
}

/// Keyword hits across all tag vocabularies, the evidence ranking signal
fn keyword_score(block_text: &str) -> usize {
    EventTag::all_tags()
        .iter()
        .map(|tag| text::count_keyword_hits(block_text, tag.synonyms()))
        .sum()
}

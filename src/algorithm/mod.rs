//! Algorithm implementations for event and episode reconstruction
//!
//! This module contains the four core transformations: evidence binding,
//! slot packing, event scoring, and outpatient episode correlation.

pub mod binder;
pub mod episode;
pub mod packer;
pub mod scorer;

use chrono::NaiveDate;

use crate::config::BinderConfig;
use crate::error::Result;
use crate::models::{DateAnchor, MedicalEvent, TextBlock};
use crate::algorithm::scorer::{ScoreContext, ScorerWeights};

/// Run the fixed per-case pipeline: bind, pack, score, relate
///
/// Execution order matters: packing fills the slots the scorer's
/// documentation and claim-relevance factors read.
pub fn reconstruct_events(
    anchors: &[DateAnchor],
    blocks: &[TextBlock],
    contract_date: Option<NaiveDate>,
    binder_config: &BinderConfig,
    context: &ScoreContext,
    weights: &ScorerWeights,
) -> Result<Vec<MedicalEvent>> {
    let bound = binder::bind(anchors, blocks, contract_date, binder_config)?;
    let packed: Vec<MedicalEvent> = bound.iter().map(packer::pack).collect();
    let scored = scorer::score_events(&packed, context, weights)?;
    Ok(scorer::compute_relations(&scored))
}

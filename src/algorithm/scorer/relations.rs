//! Pairwise relation edges between events
//!
//! Relations capture shared diagnosis codes, shared examination types and
//! temporal proximity. All three signals are symmetric, so each unordered
//! pair is evaluated once and a qualifying edge is stored on both
//! endpoints.

use crate::models::{MedicalEvent, RelationEdge};
use crate::utils::dates;

use super::round3;

/// Minimum relation strength worth keeping as an edge
const MIN_RELATION: f64 = 0.3;

/// Annotate events with pairwise relation edges
///
/// Returns a new sequence; edges with strength below 0.3 are dropped, kept
/// edges are rounded to three decimals and stored on both endpoints.
#[must_use]
pub fn compute_relations(events: &[MedicalEvent]) -> Vec<MedicalEvent> {
    let mut related = events.to_vec();

    for i in 0..related.len() {
        for j in (i + 1)..related.len() {
            let rel = round3(relation_strength(&related[i], &related[j]));
            if rel < MIN_RELATION {
                continue;
            }
            let date_i = related[i].date.clone();
            let date_j = related[j].date.clone();
            related[i].meta.rel_edges.push(RelationEdge { to_date: date_j, rel });
            related[j].meta.rel_edges.push(RelationEdge { to_date: date_i, rel });
        }
    }

    related
}

fn relation_strength(a: &MedicalEvent, b: &MedicalEvent) -> f64 {
    let mut rel = 0.0;
    if shares_entry(&a.slots.diagnosis, &b.slots.diagnosis) {
        rel += 0.4;
    }
    if shares_entry(&a.slots.examination, &b.slots.examination) {
        rel += 0.3;
    }
    rel += time_proximity(a, b);
    rel.min(1.0)
}

fn shares_entry(a: &[String], b: &[String]) -> bool {
    a.iter()
        .any(|entry| b.iter().any(|other| entry.eq_ignore_ascii_case(other)))
}

/// Tiered closeness in days; unknown gaps fall to the far tier
fn time_proximity(a: &MedicalEvent, b: &MedicalEvent) -> f64 {
    let (Some(date_a), Some(date_b)) = (a.parsed_date(), b.parsed_date()) else {
        return 0.05;
    };
    match dates::days_between(date_a, date_b) {
        gap if gap <= 14 => 0.3,
        gap if gap <= 60 => 0.2,
        gap if gap <= 180 => 0.1,
        _ => 0.05,
    }
}

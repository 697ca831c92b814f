//! Outpatient episode correlation
//!
//! Groups discrete visit records into chronological care episodes via
//! temporal and semantic correlation: a greedy streaming attachment pass
//! over an explicit correlation graph, followed by a merge pass over
//! adjacent episodes.

pub mod config;
pub mod correlation;
pub mod graph;
pub mod symptoms;

pub use config::{CorrelationBoosts, CorrelationWeights, EpisodeConfig};
pub use symptoms::SymptomPriority;

use itertools::Itertools;
use log::info;

use crate::algorithm::scorer::round3;
use crate::error::Result;
use crate::models::{
    Episode, EpisodeGrouping, EpisodeLink, EpisodeStats, OutpatientRecord,
};
use crate::utils::dates;

use correlation::{boosted_correlation, RecordFacts};
use graph::{CorrelationEdge, CorrelationGraph, EpisodeNode};

/// Group outpatient records into care episodes
///
/// Options are validated before any work; records whose dates do not parse
/// are dropped with a warning. Every parseable record lands in exactly one
/// episode of the output.
pub fn group_outpatient_episodes(
    records: &[OutpatientRecord],
    config: &EpisodeConfig,
) -> Result<EpisodeGrouping> {
    config.validate()?;

    let facts: Vec<RecordFacts> = records
        .iter()
        .enumerate()
        .filter_map(|(idx, record)| RecordFacts::from_record(record, idx))
        .sorted_by(|a, b| a.date.cmp(&b.date).then(a.index.cmp(&b.index)))
        .collect();

    let mut graph = CorrelationGraph::new();
    for position in 0..facts.len() {
        attach_record(&mut graph, &facts, position, config);
    }

    let merged_count = merge_adjacent_episodes(&mut graph, &facts, config);
    let grouping = finalize(&graph, &facts, records, merged_count);

    info!(
        "Grouped {} of {} records into {} episodes ({merged_count} merges)",
        facts.len(),
        records.len(),
        grouping.episodes.len()
    );
    Ok(grouping)
}

/// Attach one record to the first qualifying episode, newest first
///
/// Episodes are scanned most-recently-updated backward. A candidate whose
/// resolved diagnostic group conflicts with the incoming record's is never
/// attached to, regardless of score. Attachment requires both the boosted
/// correlation to clear the minimum score and the date gap to stay inside
/// the window; otherwise a new episode starts.
fn attach_record(
    graph: &mut CorrelationGraph,
    facts: &[RecordFacts],
    position: usize,
    config: &EpisodeConfig,
) {
    let fact = &facts[position];

    for episode_idx in graph.scan_order() {
        let latest_pos = graph.episode(episode_idx).latest_member();
        let latest = &facts[latest_pos];

        // Hard block on conflicting diagnostic groups. The latest record's
        // group decides; an unresolved latest falls back to the episode's
        // most recent hint so a group never sneaks in behind an unresolved
        // record.
        let episode_group = latest.group.or(graph.episode(episode_idx).latest_hint());
        if let (Some(incoming), Some(current)) = (fact.group, episode_group) {
            if incoming != current {
                continue;
            }
        }

        let gap = (fact.date - latest.date).num_days();
        if gap > config.window_days {
            continue;
        }

        let score = boosted_correlation(latest, fact, config);
        if score >= config.min_correlation_score {
            graph.attach(
                episode_idx,
                position,
                fact.group,
                CorrelationEdge { from: latest_pos, to: position, score, days_gap: gap },
            );
            return;
        }
    }

    graph.start_episode(position, fact.group);
}

/// Merge adjacent episodes whose boundary records still correlate
///
/// Walks the finalized episodes in chronological order and unions an
/// episode into its predecessor when the boundary gap stays within the
/// merge window and either their group hints overlap or the boosted
/// boundary correlation clears the minimum score. Episodes with conflicting
/// majority groups never merge.
fn merge_adjacent_episodes(
    graph: &mut CorrelationGraph,
    facts: &[RecordFacts],
    config: &EpisodeConfig,
) -> usize {
    let mut merged = 0;
    let mut idx = 0;

    while idx + 1 < graph.episode_count() {
        let left_last = graph.episode(idx).latest_member();
        let right_first = graph.episode(idx + 1).first_member();
        let gap = dates::days_between(facts[left_last].date, facts[right_first].date);

        if gap <= config.max_merge_gap_days && can_merge(graph, facts, idx, config) {
            let score = boosted_correlation(&facts[left_last], &facts[right_first], config);
            graph.merge_into_left(
                idx,
                CorrelationEdge { from: left_last, to: right_first, score, days_gap: gap },
            );
            merged += 1;
            // Stay in place: the grown episode may absorb the next one too
            continue;
        }
        idx += 1;
    }

    merged
}

fn can_merge(
    graph: &CorrelationGraph,
    facts: &[RecordFacts],
    left_idx: usize,
    config: &EpisodeConfig,
) -> bool {
    let left = graph.episode(left_idx);
    let right = graph.episode(left_idx + 1);

    // Conflicting resolved groups keep episodes apart, same as attachment
    if let (Some(a), Some(b)) = (left.majority_group(), right.majority_group()) {
        if a != b {
            return false;
        }
    }

    let hints_overlap = left
        .group_hints
        .iter()
        .any(|hint| right.group_hints.contains(hint));
    if hints_overlap {
        return true;
    }

    let boundary = boosted_correlation(
        &facts[left.latest_member()],
        &facts[right.first_member()],
        config,
    );
    boundary >= config.min_correlation_score
}

/// Turn graph episodes into output episodes plus aggregate stats
fn finalize(
    graph: &CorrelationGraph,
    facts: &[RecordFacts],
    records: &[OutpatientRecord],
    merged_count: usize,
) -> EpisodeGrouping {
    let episodes: Vec<Episode> = graph
        .episodes()
        .iter()
        .enumerate()
        .map(|(idx, node)| build_episode(idx, node, facts, records))
        .collect();

    let grouped: usize = episodes.iter().map(Episode::record_count).sum();
    let primary: usize = episodes.iter().map(|e| e.primary_symptom_count).sum();

    let stats = EpisodeStats {
        total_records: records.len(),
        episode_count: episodes.len(),
        avg_records_per_episode: if episodes.is_empty() {
            0.0
        } else {
            grouped as f64 / episodes.len() as f64
        },
        merged_count,
        primary_ratio: if grouped == 0 { 0.0 } else { primary as f64 / grouped as f64 },
    };

    EpisodeGrouping { episodes, stats }
}

fn build_episode(
    idx: usize,
    node: &EpisodeNode,
    facts: &[RecordFacts],
    records: &[OutpatientRecord],
) -> Episode {
    let member_facts: Vec<&RecordFacts> = node.members.iter().map(|pos| &facts[*pos]).collect();

    let hospitals = member_facts
        .iter()
        .filter_map(|f| records[f.index].hospital.as_deref())
        .map(|h| h.trim().to_string())
        .filter(|h| !h.is_empty())
        .collect();

    let average_correlation = if node.edges.is_empty() {
        0.0
    } else {
        round3(node.edges.iter().map(|e| e.score).sum::<f64>() / node.edges.len() as f64)
    };

    let primary_symptom_count = member_facts
        .iter()
        .filter(|f| f.symptom == SymptomPriority::Primary)
        .count();
    let secondary_symptom_count = member_facts
        .iter()
        .filter(|f| f.symptom == SymptomPriority::Secondary)
        .count();

    Episode {
        id: format!("episode-{:03}", idx + 1),
        start_date: member_facts[0].date,
        end_date: member_facts[member_facts.len() - 1].date,
        hospitals,
        records: member_facts.iter().map(|f| records[f.index].clone()).collect(),
        diagnostic_group: node.majority_group(),
        primary_symptom_count,
        secondary_symptom_count,
        average_correlation,
        links: node
            .edges
            .iter()
            .map(|e| EpisodeLink {
                from: facts[e.from].date,
                to: facts[e.to].date,
                score: round3(e.score),
                days_gap: e.days_gap,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(date: &str, hospital: &str, reason: &str, diagnosis: &str) -> OutpatientRecord {
        OutpatientRecord {
            date: date.to_string(),
            hospital: Some(hospital.to_string()),
            reason: Some(reason.to_string()),
            diagnosis: Some(diagnosis.to_string()),
            content: None,
        }
    }

    #[test]
    fn test_unparseable_dates_dropped_not_fatal() {
        let records = vec![
            record("2024-01-03", "A", "기침", "천식"),
            record("no date here", "A", "기침", "천식"),
        ];
        let grouping = group_outpatient_episodes(&records, &EpisodeConfig::default()).unwrap();
        assert_eq!(grouping.stats.total_records, 2);
        assert_eq!(grouping.episodes.len(), 1);
        assert_eq!(grouping.episodes[0].record_count(), 1);
    }

    #[test]
    fn test_records_partitioned_exactly_once() {
        let records = vec![
            record("2024-01-03", "A", "기침", "천식"),
            record("2024-01-10", "A", "재진", "천식"),
            record("2024-06-01", "B", "골절", "fracture"),
        ];
        let grouping = group_outpatient_episodes(&records, &EpisodeConfig::default()).unwrap();
        let total: usize = grouping.episodes.iter().map(Episode::record_count).sum();
        assert_eq!(total, 3);
    }

    #[test]
    fn test_episode_records_chronological() {
        let records = vec![
            record("2024-01-20", "A", "재진", "위염"),
            record("2024-01-03", "A", "복통", "위염"),
            record("2024-01-10", "A", "경과관찰", "위염"),
        ];
        let grouping = group_outpatient_episodes(&records, &EpisodeConfig::default()).unwrap();
        for episode in &grouping.episodes {
            let dates: Vec<_> = episode.records.iter().map(|r| r.parsed_date().unwrap()).collect();
            let mut sorted = dates.clone();
            sorted.sort();
            assert_eq!(dates, sorted);
        }
    }

    #[test]
    fn test_bad_config_rejected_before_work() {
        let records = vec![record("2024-01-03", "A", "기침", "천식")];
        let config = EpisodeConfig::builder().window_days(0).build();
        assert!(group_outpatient_episodes(&records, &config).is_err());
    }

    #[test]
    fn test_empty_input() {
        let grouping = group_outpatient_episodes(&[], &EpisodeConfig::default()).unwrap();
        assert!(grouping.episodes.is_empty());
        assert_eq!(grouping.stats.episode_count, 0);
        assert!((grouping.stats.avg_records_per_episode - 0.0).abs() < 1e-9);
    }
}

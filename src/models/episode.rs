//! Care episodes: chronological clusters of correlated outpatient visits

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::record::OutpatientRecord;
use crate::vocabulary::DiagnosticGroup;

/// A scored link between two records inside an episode
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpisodeLink {
    /// Date of the earlier record
    pub from: NaiveDate,
    /// Date of the later record
    pub to: NaiveDate,
    /// Correlation score that justified the attachment
    pub score: f64,
    /// Day gap between the two records
    pub days_gap: i64,
}

/// A chronological cluster of visits judged to be one continuing care arc
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Episode {
    /// Deterministic identifier, `episode-NNN` in chronological order
    pub id: String,
    /// Date of the first record
    pub start_date: NaiveDate,
    /// Date of the last record
    pub end_date: NaiveDate,
    /// Hospitals seen across the episode
    pub hospitals: BTreeSet<String>,
    /// Member records in chronological order
    pub records: Vec<OutpatientRecord>,
    /// Majority-vote diagnostic group, when any record resolved
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diagnostic_group: Option<DiagnosticGroup>,
    /// Member records classified as primary-symptom visits
    pub primary_symptom_count: usize,
    /// Member records classified as secondary-symptom visits
    pub secondary_symptom_count: usize,
    /// Mean correlation score over the episode's links
    pub average_correlation: f64,
    /// Attachment and merge links accumulated while building the episode
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<EpisodeLink>,
}

impl Episode {
    /// Number of member records
    #[must_use]
    pub fn record_count(&self) -> usize {
        self.records.len()
    }
}

/// Aggregate statistics over one grouping run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpisodeStats {
    /// All input records, including ones dropped for unparseable dates
    pub total_records: usize,
    /// Number of finalized episodes
    pub episode_count: usize,
    /// Grouped records per episode
    pub avg_records_per_episode: f64,
    /// Episode pairs merged by the post-pass
    pub merged_count: usize,
    /// Fraction of grouped records classified as primary-symptom visits
    pub primary_ratio: f64,
}

/// Result of one `group_outpatient_episodes` call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpisodeGrouping {
    /// Finalized episodes in chronological order
    pub episodes: Vec<Episode>,
    /// Aggregate statistics for the run
    pub stats: EpisodeStats,
}

//! Incremental correlation graph for episode grouping
//!
//! Nodes are (chronologically sorted) record positions; an episode is a
//! growing node set. Attachment inserts a scored edge, the merge pass
//! unions two adjacent node sets. Keeping the graph explicit makes the
//! backward scan and the merge pass independently testable.

use rustc_hash::FxHashMap;

use crate::vocabulary::DiagnosticGroup;

/// A scored edge between two record positions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CorrelationEdge {
    /// Earlier record position
    pub from: usize,
    /// Later record position
    pub to: usize,
    /// Boosted correlation score that justified the edge
    pub score: f64,
    /// Day gap between the two records
    pub days_gap: i64,
}

/// A growing episode: a set of record positions plus its link metrics
#[derive(Debug, Clone, Default)]
pub struct EpisodeNode {
    /// Member record positions, kept chronologically sorted
    pub members: Vec<usize>,
    /// Edges inserted by attachment and merging
    pub edges: Vec<CorrelationEdge>,
    /// One observation per member whose diagnostic group resolved
    pub group_hints: Vec<DiagnosticGroup>,
    /// Monotonic clock value of the last update
    last_touch: usize,
}

impl EpisodeNode {
    /// Position of the episode's latest record
    #[must_use]
    pub fn latest_member(&self) -> usize {
        *self.members.last().expect("episodes are never empty")
    }

    /// Position of the episode's first record
    #[must_use]
    pub fn first_member(&self) -> usize {
        self.members[0]
    }

    /// Most recently observed group hint
    #[must_use]
    pub fn latest_hint(&self) -> Option<DiagnosticGroup> {
        self.group_hints.last().copied()
    }

    /// Majority vote over all accumulated group-hint observations
    ///
    /// Ties break toward the earliest-observed group.
    #[must_use]
    pub fn majority_group(&self) -> Option<DiagnosticGroup> {
        let mut counts: FxHashMap<DiagnosticGroup, usize> = FxHashMap::default();
        for hint in &self.group_hints {
            *counts.entry(*hint).or_insert(0) += 1;
        }
        let mut best: Option<(DiagnosticGroup, usize)> = None;
        for hint in &self.group_hints {
            let count = counts[hint];
            match best {
                Some((_, best_count)) if count <= best_count => {}
                _ => best = Some((*hint, count)),
            }
        }
        best.map(|(group, _)| group)
    }
}

/// Explicit graph built while streaming records into episodes
#[derive(Debug, Default)]
pub struct CorrelationGraph {
    episodes: Vec<EpisodeNode>,
    clock: usize,
}

impl CorrelationGraph {
    /// Create an empty graph
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of episodes currently in the graph
    #[must_use]
    pub fn episode_count(&self) -> usize {
        self.episodes.len()
    }

    /// Episode by index, in creation (chronological) order
    #[must_use]
    pub fn episode(&self, idx: usize) -> &EpisodeNode {
        &self.episodes[idx]
    }

    /// All episodes, in creation order
    #[must_use]
    pub fn episodes(&self) -> &[EpisodeNode] {
        &self.episodes
    }

    /// Episode indices ordered most-recently-updated first
    #[must_use]
    pub fn scan_order(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.episodes.len()).collect();
        order.sort_by(|a, b| self.episodes[*b].last_touch.cmp(&self.episodes[*a].last_touch));
        order
    }

    /// Start a new single-record episode
    pub fn start_episode(&mut self, position: usize, hint: Option<DiagnosticGroup>) {
        self.clock += 1;
        let mut node = EpisodeNode {
            members: vec![position],
            edges: Vec::new(),
            group_hints: Vec::new(),
            last_touch: self.clock,
        };
        if let Some(group) = hint {
            node.group_hints.push(group);
        }
        self.episodes.push(node);
    }

    /// Attach a record to an episode by inserting a scored edge
    pub fn attach(
        &mut self,
        episode_idx: usize,
        position: usize,
        hint: Option<DiagnosticGroup>,
        edge: CorrelationEdge,
    ) {
        self.clock += 1;
        let node = &mut self.episodes[episode_idx];
        node.members.push(position);
        node.edges.push(edge);
        if let Some(group) = hint {
            node.group_hints.push(group);
        }
        node.last_touch = self.clock;
    }

    /// Union the episode at `left_idx + 1` into the one at `left_idx`
    ///
    /// Members, edges and group hints are concatenated; the boundary edge
    /// records the correlation between the two episodes' facing records.
    pub fn merge_into_left(&mut self, left_idx: usize, boundary: CorrelationEdge) {
        self.clock += 1;
        let right = self.episodes.remove(left_idx + 1);
        let left = &mut self.episodes[left_idx];
        left.members.extend(right.members);
        left.members.sort_unstable();
        left.edges.push(boundary);
        left.edges.extend(right.edges);
        left.group_hints.extend(right.group_hints);
        left.last_touch = self.clock;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge(from: usize, to: usize, score: f64) -> CorrelationEdge {
        CorrelationEdge { from, to, score, days_gap: 1 }
    }

    #[test]
    fn test_scan_order_is_recency() {
        let mut graph = CorrelationGraph::new();
        graph.start_episode(0, None);
        graph.start_episode(1, None);
        graph.attach(0, 2, None, edge(0, 2, 0.8));
        assert_eq!(graph.scan_order(), vec![0, 1]);
    }

    #[test]
    fn test_merge_unions_members_chronologically() {
        let mut graph = CorrelationGraph::new();
        graph.start_episode(0, Some(DiagnosticGroup::Respiratory));
        graph.attach(0, 3, None, edge(0, 3, 0.7));
        graph.start_episode(2, Some(DiagnosticGroup::Respiratory));
        graph.merge_into_left(0, edge(3, 2, 0.6));

        assert_eq!(graph.episode_count(), 1);
        assert_eq!(graph.episode(0).members, vec![0, 2, 3]);
        assert_eq!(graph.episode(0).edges.len(), 2);
        assert_eq!(graph.episode(0).group_hints.len(), 2);
    }

    #[test]
    fn test_majority_group_vote() {
        let mut graph = CorrelationGraph::new();
        graph.start_episode(0, Some(DiagnosticGroup::Respiratory));
        graph.attach(0, 1, Some(DiagnosticGroup::Cardiovascular), edge(0, 1, 0.7));
        graph.attach(0, 2, Some(DiagnosticGroup::Respiratory), edge(1, 2, 0.7));
        assert_eq!(graph.episode(0).majority_group(), Some(DiagnosticGroup::Respiratory));
    }

    #[test]
    fn test_majority_tie_prefers_first_observed() {
        let mut graph = CorrelationGraph::new();
        graph.start_episode(0, Some(DiagnosticGroup::Digestive));
        graph.attach(0, 1, Some(DiagnosticGroup::Endocrine), edge(0, 1, 0.7));
        assert_eq!(graph.episode(0).majority_group(), Some(DiagnosticGroup::Digestive));
    }
}

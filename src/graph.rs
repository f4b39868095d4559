//! Endorsement graph construction and shortest-path search.
//!
//! The graph is rebuilt from the current snapshot on every query; there is
//! no incremental maintenance. Correctness depends only on the rebuild
//! being deterministic for a given snapshot: edges keep snapshot order, so
//! adjacency lists (and therefore tie-breaks among equally short paths) are
//! stable.

use std::collections::{HashMap, HashSet, VecDeque};

use crate::account::Account;
use crate::score::Score;
use crate::topic::TopicId;

/// Directed graph over the deduplicated edges of one topic that clear a
/// score/confidence threshold.
///
/// Nodes are the distinct accounts appearing on admitted edges. Edge
/// direction follows endorsement direction: an edge from A to B means "A
/// endorsed B", and reachability follows chains of endorsers vouching for
/// the next account.
#[derive(Debug)]
pub struct EndorsementGraph<'a> {
    edges: Vec<&'a Score>,
    adjacency: HashMap<&'a Account, Vec<usize>>,
}

impl<'a> EndorsementGraph<'a> {
    /// Builds the filtered graph for `topic_id` with inclusive thresholds.
    ///
    /// `scores` must already be deduplicated; post-dedup there is at most
    /// one edge per ordered (from, to) pair within a topic.
    #[must_use]
    pub fn build(
        scores: &'a [Score],
        topic_id: &TopicId,
        minimum_score: i8,
        minimum_confidence: u8,
    ) -> Self {
        let mut edges: Vec<&'a Score> = Vec::new();
        let mut adjacency: HashMap<&'a Account, Vec<usize>> = HashMap::new();

        for score in scores {
            if score.topic_id != *topic_id || !score.meets(minimum_score, minimum_confidence) {
                continue;
            }
            adjacency.entry(&score.from).or_default().push(edges.len());
            edges.push(score);
        }

        Self { edges, adjacency }
    }

    /// Number of admitted edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Fewest-hop directed path from `source` to `destination`, as the edge
    /// records along it in hop order. Returns `None` when the destination
    /// is unreachable; the zero-hop `source == destination` case yields an
    /// empty path.
    ///
    /// Breadth-first search with first-discovery early exit. Parent
    /// pointers carry the discovering edge, so reconstruction attaches the
    /// records directly instead of re-resolving node pairs to edges.
    #[must_use]
    pub fn shortest_path(&self, source: &Account, destination: &Account) -> Option<Vec<Score>> {
        if source == destination {
            return Some(Vec::new());
        }

        let mut visited: HashSet<&Account> = HashSet::new();
        let mut parent_edge: HashMap<&Account, usize> = HashMap::new();
        let mut queue: VecDeque<&Account> = VecDeque::new();

        visited.insert(source);
        queue.push_back(source);

        while let Some(node) = queue.pop_front() {
            let Some(neighbors) = self.adjacency.get(node) else {
                continue;
            };
            for &edge_index in neighbors {
                let next = &self.edges[edge_index].to;
                if visited.insert(next) {
                    parent_edge.insert(next, edge_index);
                    if next == destination {
                        return Some(self.reconstruct(source, destination, &parent_edge));
                    }
                    queue.push_back(next);
                }
            }
        }

        None
    }

    fn reconstruct(
        &self,
        source: &Account,
        destination: &Account,
        parent_edge: &HashMap<&Account, usize>,
    ) -> Vec<Score> {
        let mut path: Vec<Score> = Vec::new();
        let mut current = destination;
        while current != source {
            // Every discovered node except the source has a parent pointer.
            let edge_index = parent_edge
                .get(current)
                .copied()
                .expect("parent pointer missing for discovered node");
            let edge = self.edges[edge_index];
            path.push(edge.clone());
            current = &edge.from;
        }
        path.reverse();
        path
    }
}

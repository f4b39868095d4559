//! Trust engine - the public query surface of the crate.
//!
//! `TrustEngine` binds one score store to one topic directory and answers
//! the reachability questions the surrounding application asks: "how is A
//! connected to B on this topic", "has A evaluated B at all", and "may this
//! account join the group".

use std::sync::Arc;

use crate::account::Account;
use crate::error::{TrustError, TrustResult};
use crate::graph::EndorsementGraph;
use crate::metadata::TopicDirectory;
use crate::score::Score;
use crate::store::ScoreStore;
use crate::topic::TopicId;

/// Deployment policy for group access gating.
///
/// Access chains start at the root account (the deployment's trusted
/// anchor) and are measured on the metadata-designated main topic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessPolicy {
    /// The trusted anchor every access chain must start from.
    pub root_account: Account,
    /// The topic access is measured on.
    pub main_topic_id: TopicId,
}

impl AccessPolicy {
    /// Creates an access policy.
    #[must_use]
    pub fn new(root_account: impl Into<Account>, main_topic_id: impl Into<TopicId>) -> Self {
        Self {
            root_account: root_account.into(),
            main_topic_id: main_topic_id.into(),
        }
    }
}

/// Query facade over one score store and one topic directory.
#[derive(Clone)]
pub struct TrustEngine {
    scores: Arc<ScoreStore>,
    topics: Arc<dyn TopicDirectory>,
}

impl TrustEngine {
    /// Creates an engine over the given store and directory.
    #[must_use]
    pub fn new(scores: Arc<ScoreStore>, topics: Arc<dyn TopicDirectory>) -> Self {
        Self { scores, topics }
    }

    /// The underlying score store (for wiring up ingestion).
    #[must_use]
    pub fn scores(&self) -> &Arc<ScoreStore> {
        &self.scores
    }

    /// Shortest chain of endorsements from `from_account` to `to_account`
    /// on `topic_id` in which every hop clears both inclusive thresholds.
    ///
    /// Returns `Ok(Some(path))` with one edge record per hop
    /// (`path[0].from == from_account`, `path[last].to == to_account`,
    /// consecutive hops chained), `Ok(Some([]))` when the endpoints are the
    /// same account, and `Ok(None)` when no such chain exists -
    /// unreachability is an expected outcome, not an error.
    ///
    /// # Errors
    ///
    /// Returns `TrustError::ScoresNotLoaded` before the first snapshot.
    pub fn find_endorsement_path(
        &self,
        from_account: &Account,
        to_account: &Account,
        topic_id: &TopicId,
        minimum_score: i8,
        minimum_confidence: u8,
    ) -> TrustResult<Option<Vec<Score>>> {
        if from_account == to_account {
            return Ok(Some(Vec::new()));
        }

        let snapshot = self.scores.snapshot()?;
        let graph = EndorsementGraph::build(
            snapshot.scores(),
            topic_id,
            minimum_score,
            minimum_confidence,
        );
        Ok(graph.shortest_path(from_account, to_account))
    }

    /// Shortest chain in which every hop carries the topic's maximum
    /// (most trusting) score and confidence.
    ///
    /// # Errors
    ///
    /// Returns `TrustError::TopicNotFound` when the topic is absent from
    /// the directory, and `TrustError::ScoresNotLoaded` before the first
    /// snapshot.
    pub fn find_perfect_endorsement_path(
        &self,
        from_account: &Account,
        to_account: &Account,
        topic_id: &TopicId,
    ) -> TrustResult<Option<Vec<Score>>> {
        let score_type = self
            .topics
            .score_type(topic_id)?
            .ok_or_else(|| TrustError::TopicNotFound {
                topic_id: topic_id.clone(),
            })?;

        self.find_endorsement_path(
            from_account,
            to_account,
            topic_id,
            score_type.maximum_score(),
            score_type.maximum_confidence(),
        )
    }

    /// Returns true if `from_account` has endorsed `to_account` on any
    /// topic, regardless of score or confidence.
    ///
    /// # Errors
    ///
    /// Returns `TrustError::ScoresNotLoaded` before the first snapshot.
    pub fn is_evaluated_by(
        &self,
        from_account: &Account,
        to_account: &Account,
    ) -> TrustResult<bool> {
        Ok(self
            .scores
            .snapshot()?
            .is_evaluated_by(from_account, to_account))
    }

    /// Perfect endorsement path on the policy's main topic.
    ///
    /// # Errors
    ///
    /// As `find_perfect_endorsement_path`.
    pub fn find_main_topic_endorsement_path(
        &self,
        policy: &AccessPolicy,
        from_account: &Account,
        to_account: &Account,
    ) -> TrustResult<Option<Vec<Score>>> {
        self.find_perfect_endorsement_path(from_account, to_account, &policy.main_topic_id)
    }

    /// Group access gate: true when a perfect endorsement path exists from
    /// the policy's root account to `account` on the main topic.
    ///
    /// # Errors
    ///
    /// As `find_perfect_endorsement_path`.
    pub fn can_access_group(&self, policy: &AccessPolicy, account: &Account) -> TrustResult<bool> {
        Ok(self
            .find_main_topic_endorsement_path(policy, &policy.root_account, account)?
            .is_some())
    }
}

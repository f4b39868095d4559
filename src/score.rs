//! Endorsement records ("scores") and snapshot normalization.
//!
//! A score is the atomic edge of the web of trust: a directed, timestamped
//! assertion by one account about another on a specific topic. The ledger
//! keeps every record ever submitted; only the most recent record per
//! (from, to, topic) triple is authoritative.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::account::Account;
use crate::topic::TopicId;

/// A directed, timestamped endorsement of one account by another on a topic.
///
/// `score` uses `None` as the "no opinion" sentinel; such records never meet
/// an admission threshold. `confidence` is meaningful only when the score is
/// non-null. The `i8`/`u8` domains follow the ledger's wire types.
///
/// # Examples
///
/// ```
/// use trustgraph::Score;
///
/// let score = Score::new(1_700_000_000, "0xAbc", "0xDef", "1", Some(120), 120);
/// assert_eq!(score.from.as_str(), "0xabc");
/// assert!(score.meets(120, 120));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    /// Ledger timestamp in seconds. Later records supersede earlier ones
    /// for the same (from, to, topic) triple.
    pub timestamp: u64,

    /// The endorsing account.
    pub from: Account,

    /// The endorsed account.
    pub to: Account,

    /// The topic this endorsement answers.
    pub topic_id: TopicId,

    /// Signed score value; `None` means "no opinion".
    #[serde(default)]
    pub score: Option<i8>,

    /// Confidence in the score value.
    pub confidence: u8,
}

impl Score {
    /// Creates a score record. Account identifiers are normalized to
    /// lowercase by the `Account` constructor.
    #[must_use]
    pub fn new(
        timestamp: u64,
        from: impl Into<Account>,
        to: impl Into<Account>,
        topic_id: impl Into<TopicId>,
        score: Option<i8>,
        confidence: u8,
    ) -> Self {
        Self {
            timestamp,
            from: from.into(),
            to: to.into(),
            topic_id: topic_id.into(),
            score,
            confidence,
        }
    }

    /// Returns true if the endorser and the endorsed are the same account.
    #[must_use]
    pub fn is_self_endorsement(&self) -> bool {
        self.from == self.to
    }

    /// Returns true if this record clears both inclusive thresholds.
    /// A `None` score meets no threshold.
    #[must_use]
    pub fn meets(&self, minimum_score: i8, minimum_confidence: u8) -> bool {
        self.score.is_some_and(|value| value >= minimum_score)
            && self.confidence >= minimum_confidence
    }
}

/// Deduplicates raw ledger records to the authoritative set.
///
/// The output contains exactly one record per distinct (from, to, topic)
/// triple: the one with the greatest `timestamp`. When two records share the
/// maximal timestamp, the one appearing earliest in the input wins. The
/// output preserves the input's first-appearance order per triple; adjacency
/// construction and path tie-breaking depend on that order being stable.
///
/// Pure function of its input; empty input yields empty output.
#[must_use]
pub fn dedupe_latest(scores: Vec<Score>) -> Vec<Score> {
    let mut ordered: Vec<Score> = Vec::with_capacity(scores.len());
    let mut slots: HashMap<(Account, Account, TopicId), usize> = HashMap::new();

    for score in scores {
        let key = (
            score.from.clone(),
            score.to.clone(),
            score.topic_id.clone(),
        );
        match slots.entry(key) {
            Entry::Occupied(slot) => {
                let current = &mut ordered[*slot.get()];
                if score.timestamp > current.timestamp {
                    *current = score;
                }
            }
            Entry::Vacant(slot) => {
                slot.insert(ordered.len());
                ordered.push(score);
            }
        }
    }

    ordered
}

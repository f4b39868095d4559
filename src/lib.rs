//! # trustgraph - Endorsement Web-of-Trust Engine
//!
//! trustgraph models a reputation "web of trust": accounts endorse one
//! another on scored topics, and the engine answers whether one account can
//! reach another through a chain of endorsements that all clear
//! topic-specific score/confidence thresholds - and reconstructs that chain
//! deterministically.
//!
//! ## Core Concepts
//!
//! - **Score**: a directed, timestamped endorsement with a score and a confidence
//! - **Topic**: a question category; its score type fixes the legal value domain
//! - **Snapshot**: the deduplicated score set installed by one ledger refresh
//! - **Perfect path**: a chain where every hop carries the topic's maximum values
//!
//! ## Usage
//!
//! ```
//! use std::sync::Arc;
//! use trustgraph::{
//!     InMemoryTopicDirectory, Score, ScoreStore, ScoreType, TopicId, TrustEngine,
//! };
//!
//! let scores = Arc::new(ScoreStore::new());
//! scores.replace(vec![
//!     Score::new(1_700_000_000, "0xAbc", "0xDef", "1", Some(120), 120),
//! ])?;
//!
//! let topics = Arc::new(InMemoryTopicDirectory::new());
//! topics.insert(TopicId::from("1"), ScoreType::Binary)?;
//!
//! let engine = TrustEngine::new(scores, topics);
//! let path = engine.find_perfect_endorsement_path(
//!     &"0xABC".into(),
//!     &"0xdef".into(),
//!     &"1".into(),
//! )?;
//! assert_eq!(path.map(|hops| hops.len()), Some(1));
//! # Ok::<(), trustgraph::TrustError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod account;
pub mod engine;
pub mod error;
pub mod graph;
pub mod metadata;
pub mod refresh;
pub mod score;
pub mod store;
pub mod topic;

// Re-export primary types at crate root for convenience
pub use account::Account;
pub use engine::{AccessPolicy, TrustEngine};
pub use error::{TrustError, TrustResult};
pub use graph::EndorsementGraph;
pub use metadata::{
    ContractRef, GraphMetadata, InMemoryTopicDirectory, TopicDirectory, TopicMetadata,
};
pub use refresh::{refresh_now, ScoreRefresher, ScoreSource};
pub use score::{dedupe_latest, Score};
pub use store::{ScoreStore, Snapshot};
pub use topic::{ConfidenceLabel, ScoreLabel, ScoreType, TopicId};

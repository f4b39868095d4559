//! Ledger metadata documents and the topic directory.
//!
//! The reputation ledger publishes one graph-level metadata document and
//! one document per topic, each addressed by URI. Fetching them is the
//! application's concern; this module defines the document shapes and an
//! injectable directory that answers per-topic score-type lookups.

use std::collections::HashMap;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use crate::error::{TrustError, TrustResult};
use crate::topic::{ScoreType, TopicId};

/// Reference to the contract publishing per-topic metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractRef {
    /// Contract address.
    pub address: String,
    /// Chain the contract lives on.
    pub chain_id: u64,
}

/// The graph-level metadata document.
///
/// `main_topic_id` designates the topic used for access gating;
/// `question_topic_ids` lists every topic an endorsement may answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphMetadata {
    /// Contract publishing the per-topic documents.
    pub topic_nft_contract: ContractRef,

    /// URI of the endorsement manifest.
    #[serde(rename = "endorsementManifestURI")]
    pub endorsement_manifest_uri: String,

    /// Topic used for access gating.
    pub main_topic_id: TopicId,

    /// Every topic an endorsement may answer.
    pub question_topic_ids: Vec<TopicId>,
}

/// A per-topic metadata document. Localized display strings in the document
/// are ignored; only the score type matters here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicMetadata {
    /// The topic's value domain.
    pub score_type: ScoreType,
}

/// Provider of per-topic score types.
///
/// Implementations must be safe to share across threads; queries consult
/// the directory on every perfect-path lookup.
pub trait TopicDirectory: Send + Sync {
    /// The score type for a topic, or `None` when the topic is unknown.
    ///
    /// # Errors
    ///
    /// Returns `TrustError::Internal` on backend faults.
    fn score_type(&self, topic_id: &TopicId) -> TrustResult<Option<ScoreType>>;
}

/// Thread-safe in-memory topic directory.
#[derive(Debug, Default)]
pub struct InMemoryTopicDirectory {
    topics: RwLock<HashMap<TopicId, ScoreType>>,
}

impl InMemoryTopicDirectory {
    /// Creates an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers (or overwrites) a topic's score type.
    ///
    /// # Errors
    ///
    /// Returns `TrustError::Internal` if the directory lock is poisoned.
    pub fn insert(&self, topic_id: TopicId, score_type: ScoreType) -> TrustResult<()> {
        let mut guard = self
            .topics
            .write()
            .map_err(|_| TrustError::internal("poisoned lock: topics.insert"))?;
        guard.insert(topic_id, score_type);
        Ok(())
    }

    /// Registers every topic from deserialized metadata documents.
    ///
    /// # Errors
    ///
    /// Returns `TrustError::Internal` if the directory lock is poisoned.
    pub fn load(
        &self,
        entries: impl IntoIterator<Item = (TopicId, TopicMetadata)>,
    ) -> TrustResult<()> {
        let mut guard = self
            .topics
            .write()
            .map_err(|_| TrustError::internal("poisoned lock: topics.load"))?;
        for (topic_id, metadata) in entries {
            guard.insert(topic_id, metadata.score_type);
        }
        Ok(())
    }
}

impl TopicDirectory for InMemoryTopicDirectory {
    fn score_type(&self, topic_id: &TopicId) -> TrustResult<Option<ScoreType>> {
        let guard = self
            .topics
            .read()
            .map_err(|_| TrustError::internal("poisoned lock: topics.score_type"))?;
        Ok(guard.get(topic_id).copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Compile-time test: the directory trait stays object-safe.
    fn _assert_directory_object_safe(_: &dyn TopicDirectory) {}

    #[test]
    fn graph_metadata_document_deserializes() {
        let doc = r#"{
            "topicNftContract": { "address": "0x5091", "chainId": 100 },
            "endorsementManifestURI": "ipfs://manifest",
            "mainTopicId": "0",
            "questionTopicIds": ["0", "1", "2"]
        }"#;

        let metadata: GraphMetadata = serde_json::from_str(doc).unwrap();
        assert_eq!(metadata.main_topic_id, TopicId::from("0"));
        assert_eq!(metadata.question_topic_ids.len(), 3);
        assert_eq!(metadata.topic_nft_contract.chain_id, 100);
        assert_eq!(metadata.endorsement_manifest_uri, "ipfs://manifest");
    }

    #[test]
    fn topic_document_ignores_localized_strings() {
        let doc = r#"{
            "scoreType": "binary",
            "translations": { "en": { "topicTitle": "Do you trust them?" } }
        }"#;

        let metadata: TopicMetadata = serde_json::from_str(doc).unwrap();
        assert_eq!(metadata.score_type, ScoreType::Binary);
    }

    #[test]
    fn unknown_score_type_is_rejected() {
        let doc = r#"{ "scoreType": "quinary" }"#;
        assert!(serde_json::from_str::<TopicMetadata>(doc).is_err());
    }

    #[test]
    fn directory_lookup_hits_and_misses() {
        let directory = InMemoryTopicDirectory::new();
        directory
            .insert(TopicId::from("1"), ScoreType::Binary)
            .unwrap();

        assert_eq!(
            directory.score_type(&TopicId::from("1")).unwrap(),
            Some(ScoreType::Binary)
        );
        assert_eq!(directory.score_type(&TopicId::from("9")).unwrap(), None);
    }

    #[test]
    fn load_registers_every_document() {
        let directory = InMemoryTopicDirectory::new();
        directory
            .load(vec![
                (TopicId::from("0"), TopicMetadata { score_type: ScoreType::Binary }),
                (
                    TopicId::from("1"),
                    TopicMetadata { score_type: ScoreType::OnlyScoreSpectrum },
                ),
            ])
            .unwrap();

        assert_eq!(
            directory.score_type(&TopicId::from("1")).unwrap(),
            Some(ScoreType::OnlyScoreSpectrum)
        );
    }
}

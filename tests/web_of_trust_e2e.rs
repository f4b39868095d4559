use std::sync::Arc;

use trustgraph::{
    refresh_now, AccessPolicy, GraphMetadata, InMemoryTopicDirectory, Score, ScoreSource,
    ScoreStore, TopicId, TopicMetadata, TrustEngine, TrustResult,
};

const GRAPH_METADATA_DOC: &str = r#"{
    "topicNftContract": { "address": "0x5091e0a11d25cc4be9091b5f8d86e8b3f71c8b21", "chainId": 100 },
    "endorsementManifestURI": "ipfs://QmManifest",
    "mainTopicId": "0",
    "questionTopicIds": ["0", "1"]
}"#;

const MAIN_TOPIC_DOC: &str = r#"{
    "scoreType": "binary",
    "translations": { "en": { "topicTitle": "Do you trust them with group access?" } }
}"#;

const SIDE_TOPIC_DOC: &str = r#"{
    "scoreType": "only_score_spectrum",
    "translations": { "en": { "topicTitle": "How skilled are they?" } }
}"#;

/// Ledger stand-in returning whatever snapshot the test installed.
struct FixedLedger {
    scores: Vec<Score>,
}

impl ScoreSource for FixedLedger {
    fn fetch_scores(&self) -> TrustResult<Vec<Score>> {
        Ok(self.scores.clone())
    }
}

fn wired_engine(ledger: &FixedLedger) -> (TrustEngine, AccessPolicy) {
    let metadata: GraphMetadata = serde_json::from_str(GRAPH_METADATA_DOC).unwrap();
    let main_doc: TopicMetadata = serde_json::from_str(MAIN_TOPIC_DOC).unwrap();
    let side_doc: TopicMetadata = serde_json::from_str(SIDE_TOPIC_DOC).unwrap();

    let topics = Arc::new(InMemoryTopicDirectory::new());
    topics
        .load(vec![
            (metadata.main_topic_id.clone(), main_doc),
            (TopicId::from("1"), side_doc),
        ])
        .unwrap();

    let store = Arc::new(ScoreStore::new());
    refresh_now(ledger, &store).unwrap();

    let engine = TrustEngine::new(store, topics);
    let policy = AccessPolicy::new("0xRoot", metadata.main_topic_id);
    (engine, policy)
}

#[test]
fn endorsement_chain_grants_access_in_one_direction_only() {
    let ledger = FixedLedger {
        scores: vec![
            Score::new(1, "a", "b", "0", Some(120), 120),
            Score::new(1, "b", "c", "0", Some(120), 120),
        ],
    };
    let metadata: GraphMetadata = serde_json::from_str(GRAPH_METADATA_DOC).unwrap();
    assert_eq!(metadata.main_topic_id, TopicId::from("0"));

    let (engine, _) = wired_engine(&ledger);

    let forward = engine
        .find_perfect_endorsement_path(&"a".into(), &"c".into(), &"0".into())
        .unwrap()
        .expect("a reaches c through b");
    assert_eq!(forward.len(), 2);
    assert_eq!(forward[0].from.as_str(), "a");
    assert_eq!(forward[0].to.as_str(), "b");
    assert_eq!(forward[1].from.as_str(), "b");
    assert_eq!(forward[1].to.as_str(), "c");

    let backward = engine
        .find_perfect_endorsement_path(&"c".into(), &"a".into(), &"0".into())
        .unwrap();
    assert!(backward.is_none(), "endorsements do not flow backwards");
}

#[test]
fn group_access_gating_follows_the_root_web() {
    let ledger = FixedLedger {
        scores: vec![
            Score::new(10, "0xRoot", "0xAlice", "0", Some(120), 120),
            Score::new(11, "0xALICE", "0xBob", "0", Some(120), 120),
            // An old distrusting record, superseded below.
            Score::new(12, "0xBob", "0xCarol", "0", Some(-120), 120),
            Score::new(20, "0xBob", "0xCarol", "0", Some(120), 120),
            // Mallory is endorsed only on the side topic.
            Score::new(13, "0xRoot", "0xMallory", "1", Some(120), 120),
        ],
    };
    let (engine, policy) = wired_engine(&ledger);

    for member in ["0xalice", "0xbob", "0xcarol"] {
        assert!(
            engine.can_access_group(&policy, &member.into()).unwrap(),
            "{member} should be admitted"
        );
    }
    assert!(
        !engine.can_access_group(&policy, &"0xmallory".into()).unwrap(),
        "side-topic endorsements do not grant group access"
    );

    assert!(engine
        .is_evaluated_by(&"0xroot".into(), &"0xMallory".into())
        .unwrap());
    assert!(!engine
        .is_evaluated_by(&"0xmallory".into(), &"0xroot".into())
        .unwrap());
}

#[test]
fn refresh_is_wholesale_and_can_revoke_access() {
    let store = Arc::new(ScoreStore::new());
    let topics = Arc::new(InMemoryTopicDirectory::new());
    topics
        .load(vec![(
            TopicId::from("0"),
            serde_json::from_str::<TopicMetadata>(MAIN_TOPIC_DOC).unwrap(),
        )])
        .unwrap();
    let engine = TrustEngine::new(Arc::clone(&store), topics);
    let policy = AccessPolicy::new("root", "0");

    let err = engine
        .can_access_group(&policy, &"alice".into())
        .unwrap_err();
    assert!(err.is_not_loaded(), "queries before the first snapshot fail");

    store
        .replace(vec![Score::new(1, "root", "alice", "0", Some(120), 120)])
        .unwrap();
    assert!(engine.can_access_group(&policy, &"alice".into()).unwrap());

    // The next ledger snapshot no longer carries the edge.
    store.replace(Vec::new()).unwrap();
    assert!(!engine.can_access_group(&policy, &"alice".into()).unwrap());
}

#[test]
fn side_topic_uses_its_own_maxima() {
    let ledger = FixedLedger {
        scores: vec![
            // Top spectrum score but fixed confidence is mandatory on topic 1.
            Score::new(1, "a", "b", "1", Some(120), 120),
            Score::new(1, "b", "c", "1", Some(120), 30),
        ],
    };
    let (engine, _) = wired_engine(&ledger);

    let one_hop = engine
        .find_perfect_endorsement_path(&"a".into(), &"b".into(), &"1".into())
        .unwrap();
    assert_eq!(one_hop.map(|path| path.len()), Some(1));

    let blocked = engine
        .find_perfect_endorsement_path(&"a".into(), &"c".into(), &"1".into())
        .unwrap();
    assert!(blocked.is_none());
}

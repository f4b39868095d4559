//! Error types for trustgraph.
//!
//! All errors are strongly typed using thiserror. Unreachability is NOT an
//! error: path queries return `Ok(None)` for "no chain exists" and reserve
//! `Err` for configuration and data faults.

use thiserror::Error;

use crate::topic::TopicId;

/// Top-level error type for trustgraph operations.
#[derive(Debug, Error)]
pub enum TrustError {
    /// A query arrived before the first score snapshot was installed.
    #[error("Scores not loaded: no snapshot has been installed yet")]
    ScoresNotLoaded,

    /// The topic is absent from the topic directory.
    #[error("Topic not found: {topic_id}")]
    TopicNotFound {
        /// The unknown topic.
        topic_id: TopicId,
    },

    /// The score source failed to produce a snapshot.
    #[error("Score source error: {message}")]
    Source {
        /// Description of the fetch failure.
        message: String,
    },

    /// Internal error (invariant breach, poisoned lock).
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the breach.
        message: String,
    },
}

impl TrustError {
    /// Creates a source error.
    #[must_use]
    pub fn source(message: impl Into<String>) -> Self {
        Self::Source {
            message: message.into(),
        }
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Returns true if this error means the snapshot is not loaded yet.
    #[must_use]
    pub const fn is_not_loaded(&self) -> bool {
        matches!(self, Self::ScoresNotLoaded)
    }

    /// Returns true if this is a topic-directory miss.
    #[must_use]
    pub const fn is_topic_not_found(&self) -> bool {
        matches!(self, Self::TopicNotFound { .. })
    }
}

/// Result type alias for trustgraph operations.
pub type TrustResult<T> = Result<T, TrustError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topic_not_found_names_the_topic() {
        let err = TrustError::TopicNotFound {
            topic_id: TopicId::from("42"),
        };
        assert!(err.is_topic_not_found());
        assert!(err.to_string().contains("42"));
    }

    #[test]
    fn not_loaded_is_recognizable() {
        let err = TrustError::ScoresNotLoaded;
        assert!(err.is_not_loaded());
        assert!(err.to_string().contains("no snapshot"));
    }

    #[test]
    fn source_error_carries_message() {
        let err = TrustError::source("ledger unreachable");
        assert!(err.to_string().contains("ledger unreachable"));
    }
}

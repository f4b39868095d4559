//! Topics and their score/confidence value domains.
//!
//! Every topic carries a score type that fixes which labeled numeric levels
//! an endorsement on that topic may use. The most-trusting ("maximum")
//! levels define the admission thresholds for perfect endorsement paths.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque topic identifier, as published by the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TopicId(String);

impl TopicId {
    /// Creates a topic identifier.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for TopicId {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl From<&str> for TopicId {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

impl fmt::Display for TopicId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Answer labels for the score dimension of an endorsement question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreLabel {
    /// "No opinion" - maps to a null score and never joins a path.
    NoIdea,
    /// Distrusting binary answer.
    No,
    /// Trusting binary answer.
    Yes,
    Low,
    Medium,
    High,
    VeryHigh,
}

impl fmt::Display for ScoreLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoIdea => write!(f, "no idea"),
            Self::No => write!(f, "no"),
            Self::Yes => write!(f, "yes"),
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
            Self::VeryHigh => write!(f, "very high"),
        }
    }
}

/// Labels for the confidence dimension of an endorsement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceLabel {
    Low,
    Medium,
    High,
    VeryHigh,
}

impl fmt::Display for ConfidenceLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
            Self::VeryHigh => write!(f, "very high"),
        }
    }
}

const BINARY_SCORE_VALUES: &[(ScoreLabel, Option<i8>)] = &[
    (ScoreLabel::NoIdea, None),
    (ScoreLabel::No, Some(-120)),
    (ScoreLabel::Yes, Some(120)),
];

const SPECTRUM_SCORE_VALUES: &[(ScoreLabel, Option<i8>)] = &[
    (ScoreLabel::NoIdea, None),
    (ScoreLabel::Low, Some(30)),
    (ScoreLabel::Medium, Some(60)),
    (ScoreLabel::High, Some(90)),
    (ScoreLabel::VeryHigh, Some(120)),
];

const ONLY_YES_SCORE_VALUES: &[(ScoreLabel, Option<i8>)] = &[
    (ScoreLabel::NoIdea, None),
    (ScoreLabel::Yes, Some(120)),
];

const SPECTRUM_CONFIDENCE_VALUES: &[(ConfidenceLabel, u8)] = &[
    (ConfidenceLabel::Low, 30),
    (ConfidenceLabel::Medium, 60),
    (ConfidenceLabel::High, 90),
    (ConfidenceLabel::VeryHigh, 120),
];

const FIXED_CONFIDENCE_VALUES: &[(ConfidenceLabel, u8)] = &[(ConfidenceLabel::VeryHigh, 120)];

/// The value domain of a topic's endorsement question.
///
/// Each variant carries fixed label-to-value tables; the maxima derived from
/// them are the thresholds for perfect endorsement paths. Wire names match
/// the ledger's topic metadata documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreType {
    /// Yes/no question with a free confidence level.
    Binary,
    /// Graded question with a free confidence level.
    Spectrum,
    /// Yes-only question; the answer is carried by the confidence level.
    OnlyConfidence,
    /// Graded question with a fixed confidence level.
    OnlyScoreSpectrum,
}

impl ScoreType {
    /// The legal score levels for this score type. A `None` value is the
    /// "no opinion" sentinel.
    #[must_use]
    pub const fn score_values(self) -> &'static [(ScoreLabel, Option<i8>)] {
        match self {
            Self::Binary => BINARY_SCORE_VALUES,
            Self::Spectrum | Self::OnlyScoreSpectrum => SPECTRUM_SCORE_VALUES,
            Self::OnlyConfidence => ONLY_YES_SCORE_VALUES,
        }
    }

    /// The legal confidence levels for this score type.
    #[must_use]
    pub const fn confidence_values(self) -> &'static [(ConfidenceLabel, u8)] {
        match self {
            Self::Binary | Self::Spectrum | Self::OnlyConfidence => SPECTRUM_CONFIDENCE_VALUES,
            Self::OnlyScoreSpectrum => FIXED_CONFIDENCE_VALUES,
        }
    }

    /// The most-trusting score value, ignoring the "no opinion" sentinel.
    #[must_use]
    pub fn maximum_score(self) -> i8 {
        self.score_values()
            .iter()
            .filter_map(|&(_, value)| value)
            .fold(i8::MIN, i8::max)
    }

    /// The most-trusting confidence value.
    #[must_use]
    pub fn maximum_confidence(self) -> u8 {
        self.confidence_values()
            .iter()
            .fold(u8::MIN, |acc, &(_, value)| acc.max(value))
    }

    /// Label for a stored score value, if it is a legal level.
    #[must_use]
    pub fn score_label(self, value: Option<i8>) -> Option<ScoreLabel> {
        self.score_values()
            .iter()
            .find(|&&(_, level)| level == value)
            .map(|&(label, _)| label)
    }

    /// Label for a stored confidence value, if it is a legal level.
    #[must_use]
    pub fn confidence_label(self, value: u8) -> Option<ConfidenceLabel> {
        self.confidence_values()
            .iter()
            .find(|&&(_, level)| level == value)
            .map(|&(label, _)| label)
    }
}

impl fmt::Display for ScoreType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Binary => write!(f, "binary"),
            Self::Spectrum => write!(f, "spectrum"),
            Self::OnlyConfidence => write!(f, "only_confidence"),
            Self::OnlyScoreSpectrum => write!(f, "only_score_spectrum"),
        }
    }
}

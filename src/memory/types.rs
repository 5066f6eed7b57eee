// src/memory/types.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;

use crate::annotate::{Difficulty, QuestionType, Subject};

/// One recorded turn with its derived labels. Immutable once stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interaction {
    pub timestamp: DateTime<Utc>,
    pub user_query: String,
    pub ai_response: String,
    pub topics: Vec<String>,
    pub difficulty: Difficulty,
    pub subject: Subject,
}

/// Direction of the difficulty signal over the most recent samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyTrend {
    Increasing,
    Decreasing,
    Stable,
}

impl DifficultyTrend {
    pub fn as_str(&self) -> &'static str {
        match self {
            DifficultyTrend::Increasing => "increasing",
            DifficultyTrend::Decreasing => "decreasing",
            DifficultyTrend::Stable => "stable",
        }
    }
}

impl fmt::Display for DifficultyTrend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Rolling pattern windows derived from recorded turns.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LearningPatterns {
    pub question_types: VecDeque<QuestionType>,
    pub difficulty_history: VecDeque<Difficulty>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty_trend: Option<DifficultyTrend>,
}

// src/profile.rs

use serde::{Deserialize, Serialize};
use std::fmt;

/// Self-reported proficiency tier used to pitch generated material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LearningLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl LearningLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LearningLevel::Beginner => "beginner",
            LearningLevel::Intermediate => "intermediate",
            LearningLevel::Advanced => "advanced",
        }
    }
}

impl Default for LearningLevel {
    fn default() -> Self {
        LearningLevel::Intermediate
    }
}

impl fmt::Display for LearningLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Learner-declared preferences consumed by routing and prompt
/// construction. All fields are optional on the wire.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LearnerProfile {
    #[serde(default)]
    pub preferred_subjects: Vec<String>,
    #[serde(default)]
    pub learning_level: LearningLevel,
    #[serde(default)]
    pub study_goals: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile() {
        let profile = LearnerProfile::default();
        assert!(profile.preferred_subjects.is_empty());
        assert_eq!(profile.learning_level, LearningLevel::Intermediate);
        assert!(profile.study_goals.is_empty());
    }

    #[test]
    fn test_partial_deserialization() {
        let profile: LearnerProfile =
            serde_json::from_str(r#"{"preferred_subjects": ["Physics"]}"#).expect("deserialize");
        assert_eq!(profile.preferred_subjects, vec!["Physics"]);
        assert_eq!(profile.learning_level, LearningLevel::Intermediate);
    }

    #[test]
    fn test_level_round_trip() {
        let level: LearningLevel = serde_json::from_str("\"advanced\"").expect("deserialize");
        assert_eq!(level, LearningLevel::Advanced);
        assert_eq!(level.to_string(), "advanced");
    }
}

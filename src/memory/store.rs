// src/memory/store.rs
// Bounded per-session interaction log with incrementally derived
// learning patterns and human-readable context rendering.

use std::collections::{HashMap, VecDeque};

use chrono::Utc;
use tracing::debug;

use super::types::{DifficultyTrend, Interaction, LearningPatterns};
use crate::annotate::{self, Subject};

/// Hard cap on retained interactions; the oldest are evicted first.
pub const MAX_INTERACTIONS: usize = 50;
/// Rolling window for question-type and difficulty patterns.
pub const PATTERN_WINDOW: usize = 10;
/// Number of recent interactions feeding the learning context.
const CONTEXT_WINDOW: usize = 5;
/// Number of recent difficulty samples compared for the trend.
const TREND_WINDOW: usize = 3;

#[derive(Debug, Clone, Default)]
pub struct SessionMemory {
    interactions: VecDeque<Interaction>,
    patterns: LearningPatterns,
}

impl SessionMemory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a completed turn. Annotation is total, so recording cannot
    /// fail; derived labels are traced for observability.
    pub fn record(&mut self, user_query: &str, ai_response: &str) {
        let topics = annotate::extract_topics(user_query);
        let difficulty = annotate::estimate_difficulty(user_query);
        let subject = annotate::identify_subject(user_query);
        let question_type = annotate::classify_question_type(user_query);

        debug!(%subject, %difficulty, %question_type, ?topics, "recording interaction");

        self.interactions.push_back(Interaction {
            timestamp: Utc::now(),
            user_query: user_query.to_string(),
            ai_response: ai_response.to_string(),
            topics,
            difficulty,
            subject,
        });
        if self.interactions.len() > MAX_INTERACTIONS {
            self.interactions.pop_front();
        }

        self.patterns.question_types.push_back(question_type);
        if self.patterns.question_types.len() > PATTERN_WINDOW {
            self.patterns.question_types.pop_front();
        }

        self.patterns.difficulty_history.push_back(difficulty);
        if self.patterns.difficulty_history.len() > PATTERN_WINDOW {
            self.patterns.difficulty_history.pop_front();
        }

        let history = &self.patterns.difficulty_history;
        if history.len() >= TREND_WINDOW {
            let newest = history[history.len() - 1].rank();
            let oldest = history[history.len() - TREND_WINDOW].rank();
            self.patterns.difficulty_trend = Some(if newest > oldest {
                DifficultyTrend::Increasing
            } else if newest < oldest {
                DifficultyTrend::Decreasing
            } else {
                DifficultyTrend::Stable
            });
        }
    }

    pub fn len(&self) -> usize {
        self.interactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.interactions.is_empty()
    }

    pub fn interactions(&self) -> impl Iterator<Item = &Interaction> {
        self.interactions.iter()
    }

    pub fn patterns(&self) -> &LearningPatterns {
        &self.patterns
    }

    /// Drops all interactions and derived patterns.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Subject frequencies over the full retained history.
    pub fn subject_statistics(&self) -> HashMap<Subject, usize> {
        let mut counts = HashMap::new();
        for interaction in &self.interactions {
            *counts.entry(interaction.subject).or_insert(0) += 1;
        }
        counts
    }

    /// Compact context string fed into the general prompt: recent topics,
    /// dominant subject, preferred question types, and difficulty trend,
    /// joined by "; ".
    pub fn learning_context(&self) -> String {
        if self.interactions.is_empty() {
            return "No previous learning interactions in this session.".to_string();
        }

        let start = self.interactions.len().saturating_sub(CONTEXT_WINDOW);
        let mut recent_topics: Vec<&str> = Vec::new();
        let mut recent_subjects: Vec<Subject> = Vec::new();
        for interaction in self.interactions.iter().skip(start) {
            for topic in &interaction.topics {
                if !recent_topics.contains(&topic.as_str()) {
                    recent_topics.push(topic);
                }
            }
            recent_subjects.push(interaction.subject);
        }

        let mut context_parts: Vec<String> = Vec::new();

        if !recent_topics.is_empty() {
            context_parts.push(format!("Recent topics: {}", recent_topics.join(", ")));
        }

        if let Some(primary) = most_frequent_subject(&recent_subjects) {
            context_parts.push(format!("Primary subject focus: {primary}"));
        }

        if !self.patterns.question_types.is_empty() {
            let preferred: Vec<&str> =
                self.patterns.question_types.iter().map(|q| q.as_str()).collect();
            context_parts.push(format!("Student prefers: {}", preferred.join(", ")));
        }

        if let Some(trend) = self.patterns.difficulty_trend {
            context_parts.push(format!("Difficulty progression: {trend}"));
        }

        if context_parts.is_empty() {
            "Beginning of learning session.".to_string()
        } else {
            context_parts.join("; ")
        }
    }

    /// Whole-session statistics as a single "; "-joined line.
    pub fn interaction_summary(&self) -> String {
        if self.interactions.is_empty() {
            return "No learning interactions recorded yet.".to_string();
        }

        let total = self.interactions.len();

        let mut unique_topics: Vec<&str> = Vec::new();
        let mut subjects: Vec<Subject> = Vec::new();
        for interaction in &self.interactions {
            for topic in &interaction.topics {
                if !unique_topics.contains(&topic.as_str()) {
                    unique_topics.push(topic);
                }
            }
            subjects.push(interaction.subject);
        }

        let duration = match (self.interactions.front(), self.interactions.back()) {
            (Some(first), Some(last)) if total > 1 => last.timestamp - first.timestamp,
            _ => chrono::Duration::zero(),
        };

        let most_discussed = most_frequent_subject(&subjects)
            .map(|subject| subject.to_string())
            .unwrap_or_else(|| "Various".to_string());

        let recent_difficulty = self
            .interactions
            .back()
            .map(|interaction| interaction.difficulty.as_str())
            .unwrap_or("Not assessed");

        [
            format!("Total interactions: {total}"),
            format!("Session duration: {}", format_duration(duration)),
            format!("Topics explored: {} unique topics", unique_topics.len()),
            format!("Most discussed subject: {most_discussed}"),
            format!("Recent difficulty level: {recent_difficulty}"),
        ]
        .join("; ")
    }
}

/// First-seen subject holding the highest count; ties keep the earlier
/// subject.
fn most_frequent_subject(subjects: &[Subject]) -> Option<Subject> {
    let mut counts: Vec<(Subject, usize)> = Vec::new();
    for &subject in subjects {
        match counts.iter_mut().find(|(seen, _)| *seen == subject) {
            Some((_, count)) => *count += 1,
            None => counts.push((subject, 1)),
        }
    }

    let mut best: Option<(Subject, usize)> = None;
    for (subject, count) in counts {
        let replace = match best {
            Some((_, top)) => count > top,
            None => true,
        };
        if replace {
            best = Some((subject, count));
        }
    }
    best.map(|(subject, _)| subject)
}

fn format_duration(duration: chrono::Duration) -> String {
    let total_seconds = duration.num_seconds();
    if total_seconds < 60 {
        format!("{total_seconds} seconds")
    } else if total_seconds < 3600 {
        format!("{} minutes", total_seconds / 60)
    } else {
        let hours = total_seconds / 3600;
        let minutes = (total_seconds % 3600) / 60;
        format!("{hours}h {minutes}m")
    }
}

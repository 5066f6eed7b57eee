// src/coach/mod.rs
// Orchestrates tutoring turns: specialist routing first, then the
// context-enriched general conversation path. LLM failures surface as
// explanatory reply text; a turn always completes.

use std::sync::Arc;

use rand::seq::IndexedRandom;
use thiserror::Error;
use tracing::{info, warn};

use crate::config::CONFIG;
use crate::llm::{ChatMessage, ChatRequest, LlmError, LlmProvider};
use crate::profile::LearnerProfile;
use crate::session::Session;
use crate::tools::ToolRouter;

const STUDY_PLAN_MAX_TOKENS: u32 = 800;
const QUIZ_MAX_TOKENS: u32 = 600;
const PROGRESS_REPORT_MAX_TOKENS: u32 = 600;
const STUDY_TECHNIQUES_MAX_TOKENS: u32 = 700;

const QUOTA_EXCEEDED_REPLY: &str = r#"🚨 **OpenAI API Quota Exceeded**

Your OpenAI API key has exceeded its usage quota. To continue using Sage:

1. **Check your OpenAI account**: Visit https://platform.openai.com/usage
2. **Add billing**: Go to https://platform.openai.com/settings/billing
3. **Add credits**: Purchase credits or upgrade your plan
4. **Free tier**: If using free tier, you may need to wait or upgrade

The application will work normally once your quota is restored."#;

const RATE_LIMITED_REPLY: &str = r#"⏱️ **Rate Limit Reached**

Too many requests were made recently. Please wait a moment and try again.
Your OpenAI API has temporary rate limiting active."#;

/// Study plan and quiz generation need at least one preferred subject.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("no preferred subjects selected")]
pub struct NoPreferredSubjects;

pub struct CoachService {
    provider: Arc<dyn LlmProvider>,
    router: ToolRouter,
}

impl CoachService {
    pub fn new(provider: Arc<dyn LlmProvider>) -> Self {
        let router = ToolRouter::new(provider.clone());
        Self { provider, router }
    }

    /// Answers one student query. Specialist routing runs first; on a
    /// miss the reply comes from the general prompt enriched with the
    /// session's learning context.
    pub async fn process_query(&self, session: &Session, query: &str) -> String {
        let context = session.learning_context();
        let profile = session.profile();

        if let Some(reply) = self.router.route(query, &profile, &context).await {
            return reply;
        }

        let request = ChatRequest::new(
            CONFIG.model.clone(),
            vec![
                ChatMessage::system(build_general_prompt(&profile, &context)),
                ChatMessage::user(query),
            ],
            CONFIG.chat_max_tokens,
        )
        .with_temperature(CONFIG.chat_temperature);

        match self.provider.complete(request).await {
            Ok(reply) => reply,
            Err(e) => {
                warn!("general response failed: {e}");
                user_facing_error(&e)
            }
        }
    }

    /// Records a completed turn into session memory, error replies
    /// included. Failures inside recording never break the chat flow.
    pub fn record_turn(&self, session: &Session, query: &str, response: &str) {
        session.record(query, response);
    }

    /// Weekly study plan over the learner's preferred subjects.
    pub async fn study_plan(&self, session: &Session) -> Result<String, NoPreferredSubjects> {
        let profile = session.profile();
        if profile.preferred_subjects.is_empty() {
            return Err(NoPreferredSubjects);
        }
        let subjects = profile.preferred_subjects.join(", ");

        let prompt = format!(
            r#"Create a comprehensive weekly study plan for a {level} level student focusing on: {subjects}.

Include:
1. Daily study schedule with time allocations
2. Subject rotation strategy
3. Break times and study techniques
4. Review sessions and practice recommendations
5. Goal-setting frameworks

Format as a clear, actionable weekly schedule."#,
            level = profile.learning_level,
        );

        info!("📝 generating study plan for {} subject(s)", profile.preferred_subjects.len());
        Ok(self
            .generate("📝 **Your Personalized Study Plan:**", prompt, STUDY_PLAN_MAX_TOKENS)
            .await)
    }

    /// Five-question multiple choice quiz on a randomly chosen preferred
    /// subject.
    pub async fn quiz(&self, session: &Session) -> Result<String, NoPreferredSubjects> {
        let profile = session.profile();
        let Some(subject) = profile.preferred_subjects.choose(&mut rand::rng()).cloned() else {
            return Err(NoPreferredSubjects);
        };

        let prompt = format!(
            r#"Create a {level} level quiz on {subject} with 5 multiple choice questions.

Format:
Question 1: [Question text]
A) Option A
B) Option B
C) Option C
D) Option D

Include the correct answers at the end.
Make questions educational and thought-provoking for {level} level students."#,
            level = profile.learning_level,
        );

        info!("🎯 generating quiz on {subject}");
        let header = format!("🎯 **Quiz Time: {subject}**");
        Ok(self.generate(&header, prompt, QUIZ_MAX_TOKENS).await)
    }

    /// Progress report grounded in the session's interaction summary.
    pub async fn progress_report(&self, session: &Session) -> String {
        let profile = session.profile();
        let summary = session.interaction_summary();

        let prompt = format!(
            r#"Based on this student's learning interaction history, create a progress report:

Student Profile: {level} level; preferred subjects: {subjects}; study goals: {goals}
Recent Interactions Summary: {summary}

Include:
1. Learning strengths observed
2. Areas for improvement
3. Study pattern analysis
4. Recommendations for continued growth
5. Motivational insights

Keep it encouraging and constructive."#,
            level = profile.learning_level,
            subjects = join_or(&profile.preferred_subjects, "Not specified"),
            goals = join_or(&profile.study_goals, "Not specified"),
        );

        info!("📈 generating progress report");
        self.generate("📈 **Your Learning Progress Report:**", prompt, PROGRESS_REPORT_MAX_TOKENS)
            .await
    }

    /// Personalized study technique recommendations.
    pub async fn study_techniques(&self, session: &Session) -> String {
        let profile = session.profile();
        let subjects = if profile.preferred_subjects.is_empty() {
            "various subjects".to_string()
        } else {
            profile.preferred_subjects.join(", ")
        };

        let prompt = format!(
            r#"Provide personalized study techniques and learning strategies for a {level} level student studying: {subjects}.

Include:
1. Active learning techniques
2. Memory improvement strategies
3. Note-taking methods
4. Test preparation strategies
5. Time management tips
6. Subject-specific study approaches

Make recommendations practical and actionable."#,
            level = profile.learning_level,
        );

        info!("🧠 generating study techniques");
        self.generate("🧠 **Personalized Study Techniques:**", prompt, STUDY_TECHNIQUES_MAX_TOKENS)
            .await
    }

    async fn generate(&self, header: &str, prompt: String, max_tokens: u32) -> String {
        let request =
            ChatRequest::new(CONFIG.model.clone(), vec![ChatMessage::user(prompt)], max_tokens);

        match self.provider.complete(request).await {
            Ok(body) => format!("{header}\n\n{body}"),
            Err(e) => {
                warn!("generation failed: {e}");
                user_facing_error(&e)
            }
        }
    }
}

/// Converts an LLM failure into the reply text shown to the student.
fn user_facing_error(error: &LlmError) -> String {
    match error {
        LlmError::QuotaExceeded(_) => QUOTA_EXCEEDED_REPLY.to_string(),
        LlmError::RateLimited(_) => RATE_LIMITED_REPLY.to_string(),
        other => format!(
            "I encountered an error while processing your question: {other}. Please check your OpenAI API configuration."
        ),
    }
}

fn build_general_prompt(profile: &LearnerProfile, learning_context: &str) -> String {
    format!(
        r#"You are an expert AI Learning Coach providing personalized educational guidance across all academic subjects.

Student Profile:
- Preferred subjects: {subjects}
- Learning level: {level}
- Study goals: {goals}

Learning Context from Previous Interactions:
{learning_context}

Guidelines:
1. Provide clear, educational explanations appropriate for the student's level
2. Use examples and analogies to make complex concepts understandable
3. Encourage active learning and critical thinking
4. Offer study strategies and techniques when relevant
5. Be supportive and motivating
6. If the question is about a specific subject, provide comprehensive coverage
7. For test prep questions, include practice strategies and tips
8. Always maintain an encouraging, educational tone

Respond to the student's question with personalized guidance."#,
        subjects = join_or(&profile.preferred_subjects, "Not specified"),
        level = profile.learning_level,
        goals = join_or(&profile.study_goals, "Not specified"),
    )
}

fn join_or(items: &[String], fallback: &str) -> String {
    if items.is_empty() {
        fallback.to_string()
    } else {
        items.join(", ")
    }
}

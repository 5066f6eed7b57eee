// src/tools/router.rs
// LLM-driven routing to specialist strategies. Every failure mode falls
// through to the general conversational path.

use std::sync::Arc;

use anyhow::Context;
use serde::Deserialize;
use tracing::{debug, warn};

use super::registry::Specialist;
use crate::config::CONFIG;
use crate::llm::{ChatMessage, ChatRequest, LlmError, LlmProvider};
use crate::profile::LearnerProfile;

/// Output budget for the classification exchange.
const CLASSIFIER_MAX_TOKENS: u32 = 200;

/// Classifier verdict parsed from the JSON response.
#[derive(Debug, Deserialize)]
struct ToolChoice {
    tool: Option<String>,
    #[serde(default)]
    reasoning: String,
}

pub struct ToolRouter {
    provider: Arc<dyn LlmProvider>,
}

impl ToolRouter {
    pub fn new(provider: Arc<dyn LlmProvider>) -> Self {
        Self { provider }
    }

    /// Asks the classifier which specialist applies and dispatches it.
    /// Returns None when no tool applies or when classification or the
    /// specialist itself fails; routing never fails the turn.
    pub async fn route(
        &self,
        query: &str,
        profile: &LearnerProfile,
        _context: &str,
    ) -> Option<String> {
        let specialist = match self.classify(query, profile).await {
            Ok(Some(specialist)) => specialist,
            Ok(None) => {
                debug!("no specialized tool applies");
                return None;
            }
            Err(e) => {
                warn!("tool classification failed, using general response: {e:#}");
                return None;
            }
        };

        debug!(tool = %specialist, "dispatching specialist");
        match self.dispatch(specialist, query, profile).await {
            Ok(reply) => Some(reply),
            Err(e) => {
                warn!("specialist {specialist} failed, using general response: {e}");
                None
            }
        }
    }

    async fn classify(
        &self,
        query: &str,
        profile: &LearnerProfile,
    ) -> anyhow::Result<Option<Specialist>> {
        let prompt = build_classification_prompt(query, profile);
        let request = ChatRequest::new(
            CONFIG.model.clone(),
            vec![ChatMessage::user(prompt)],
            CLASSIFIER_MAX_TOKENS,
        )
        .json_object();

        let content = self.provider.complete(request).await?;
        let choice: ToolChoice = serde_json::from_str(&content)
            .with_context(|| format!("unparseable tool choice: {content}"))?;

        let Some(name) = choice.tool else {
            return Ok(None);
        };

        match Specialist::from_str(&name) {
            Some(specialist) => {
                debug!(tool = %specialist, reasoning = %choice.reasoning, "classifier picked a tool");
                Ok(Some(specialist))
            }
            None => {
                warn!("classifier returned unknown tool {name:?}");
                Ok(None)
            }
        }
    }

    async fn dispatch(
        &self,
        specialist: Specialist,
        query: &str,
        profile: &LearnerProfile,
    ) -> Result<String, LlmError> {
        let prompt = specialist.build_prompt(query, profile);
        let request = ChatRequest::new(
            CONFIG.model.clone(),
            vec![ChatMessage::user(prompt)],
            specialist.max_tokens(),
        );

        let body = self.provider.complete(request).await?;
        Ok(format!("{}\n\n{}", specialist.header(), body))
    }
}

fn build_classification_prompt(query: &str, profile: &LearnerProfile) -> String {
    let tool_lines: Vec<String> = Specialist::ALL
        .iter()
        .map(|tool| format!("- {}: {}", tool.as_str(), tool.description()))
        .collect();

    format!(
        r#"Analyze this student query and determine if it requires a specialized learning tool.

Query: "{query}"
Student Level: {level}
Preferred Subjects: {subjects}

Available tools:
{tools}

Respond with JSON in this format:
{{"tool": "tool_name or null", "reasoning": "explanation"}}

Only suggest a tool if the query clearly requires specialized functionality.
Return null for general conversation or broad educational questions."#,
        level = profile.learning_level,
        subjects = profile.preferred_subjects.join(", "),
        tools = tool_lines.join("\n"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_prompt_advertises_every_tool() {
        let prompt = build_classification_prompt("solve 2x = 4", &LearnerProfile::default());

        for tool in Specialist::ALL {
            assert!(prompt.contains(tool.as_str()), "{} missing from prompt", tool);
        }
        assert!(prompt.contains("Query: \"solve 2x = 4\""));
        assert!(prompt.contains("Student Level: intermediate"));
        assert!(prompt.contains("{\"tool\": \"tool_name or null\""));
    }

    #[test]
    fn test_tool_choice_parsing() {
        let choice: ToolChoice =
            serde_json::from_str(r#"{"tool": "math_solver", "reasoning": "equation"}"#)
                .expect("parse");
        assert_eq!(choice.tool.as_deref(), Some("math_solver"));
        assert_eq!(choice.reasoning, "equation");

        let choice: ToolChoice = serde_json::from_str(r#"{"tool": null}"#).expect("parse");
        assert!(choice.tool.is_none());
    }
}

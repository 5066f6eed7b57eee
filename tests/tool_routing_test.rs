// tests/tool_routing_test.rs
// Specialist routing: silent fallbacks on every failure mode, header
// formatting and budgets on a hit.

mod support;

use std::sync::Arc;

use sage::llm::LlmError;
use sage::profile::LearnerProfile;
use sage::tools::ToolRouter;
use support::StubProvider;

#[tokio::test]
async fn classification_failure_falls_back_silently() {
    // ARRANGE
    let provider = Arc::new(StubProvider::new(vec![Err(LlmError::Api {
        status: 500,
        message: "boom".to_string(),
    })]));
    let router = ToolRouter::new(provider);

    // ACT
    let routed = router
        .route("solve 2x + 3 = 7", &LearnerProfile::default(), "")
        .await;

    // ASSERT
    assert!(routed.is_none());
}

#[tokio::test]
async fn null_tool_means_general_conversation() {
    let provider = Arc::new(StubProvider::replying(&[
        r#"{"tool": null, "reasoning": "broad question"}"#,
    ]));
    let router = ToolRouter::new(provider);

    let routed = router
        .route("how are you today", &LearnerProfile::default(), "")
        .await;
    assert!(routed.is_none());
}

#[tokio::test]
async fn unknown_tool_name_is_ignored() {
    let provider = Arc::new(StubProvider::replying(&[
        r#"{"tool": "essay_grader", "reasoning": "sounds useful"}"#,
    ]));
    let router = ToolRouter::new(provider);

    let routed = router
        .route("grade my essay", &LearnerProfile::default(), "")
        .await;
    assert!(routed.is_none());
}

#[tokio::test]
async fn unparseable_classification_is_ignored() {
    let provider = Arc::new(StubProvider::replying(&["not json at all"]));
    let router = ToolRouter::new(provider);

    let routed = router
        .route("solve 2x = 4", &LearnerProfile::default(), "")
        .await;
    assert!(routed.is_none());
}

#[tokio::test]
async fn specialist_reply_carries_header() {
    let provider = Arc::new(StubProvider::new(vec![
        Ok(r#"{"tool": "math_solver", "reasoning": "an equation"}"#.to_string()),
        Ok("Step 1: subtract 3 from both sides.".to_string()),
    ]));
    let router = ToolRouter::new(provider.clone());

    let routed = router
        .route("solve 2x + 3 = 7", &LearnerProfile::default(), "")
        .await
        .expect("specialist reply");

    assert!(routed.starts_with("🔢 **Math Problem Solver**\n\n"));
    assert!(routed.ends_with("Step 1: subtract 3 from both sides."));

    // classification runs in JSON mode with its own budget, the
    // specialist call with the tool's budget
    let requests = provider.requests();
    assert_eq!(requests.len(), 2);
    assert!(requests[0].json_mode);
    assert_eq!(requests[0].max_tokens, 200);
    assert!(!requests[1].json_mode);
    assert_eq!(requests[1].max_tokens, 800);
    assert!(requests[1].messages[0].content.contains("solve 2x + 3 = 7"));
}

#[tokio::test]
async fn failed_specialist_falls_back() {
    let provider = Arc::new(StubProvider::new(vec![
        Ok(r#"{"tool": "science_explainer", "reasoning": "a concept"}"#.to_string()),
        Err(LlmError::RateLimited("slow down".to_string())),
    ]));
    let router = ToolRouter::new(provider);

    let routed = router
        .route("how does photosynthesis work", &LearnerProfile::default(), "")
        .await;
    assert!(routed.is_none());
}

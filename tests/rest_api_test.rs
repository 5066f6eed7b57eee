// tests/rest_api_test.rs
// End-to-end HTTP coverage: chat, actions, memory, profile, sessions.

mod support;

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use sage::api::http::http_router;
use sage::llm::LlmError;
use sage::state::AppState;
use serde_json::{Value, json};
use support::StubProvider;
use tower::ServiceExt;

const NO_TOOL: &str = r#"{"tool": null, "reasoning": "general"}"#;

/// Builds the full router backed by a scripted provider.
fn test_app(provider: StubProvider) -> Router {
    http_router(Arc::new(AppState::new(Arc::new(provider))))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(value) => Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(value.to_string()))
            .unwrap(),
        None => Request::builder().method(method).uri(uri).body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value: Value = serde_json::from_slice(&bytes).unwrap();
    (status, value)
}

#[tokio::test]
async fn chat_flow_records_session_memory() {
    let app = test_app(StubProvider::new(vec![
        Ok(NO_TOOL.to_string()),
        Ok("Cells release energy through respiration.".to_string()),
    ]));

    let (status, body) = send(
        &app,
        "POST",
        "/api/chat",
        Some(json!({"session_id": "s-1", "message": "Explain cell biology"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["reply"], "Cells release energy through respiration.");
    println!("✅ Chat reply delivered");

    let (status, body) = send(&app, "GET", "/api/sessions/s-1/memory/summary", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["summary"].as_str().unwrap().contains("Total interactions: 1"));

    let (_, body) = send(&app, "GET", "/api/sessions/s-1/memory/context", None).await;
    assert!(body["context"].as_str().unwrap().contains("Primary subject focus: Biology"));

    let (_, body) = send(&app, "GET", "/api/sessions/s-1/memory/subjects", None).await;
    assert_eq!(body, json!({"Biology": 1}));
    println!("✅ Memory endpoints reflect the turn");
}

#[tokio::test]
async fn empty_chat_message_is_rejected() {
    let app = test_app(StubProvider::replying(&[]));

    let (status, body) = send(
        &app,
        "POST",
        "/api/chat",
        Some(json!({"session_id": "s-2", "message": "   "})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!(true));
}

#[tokio::test]
async fn profile_round_trip() {
    let app = test_app(StubProvider::replying(&[]));

    let profile = json!({
        "preferred_subjects": ["Mathematics", "Physics"],
        "learning_level": "advanced",
        "study_goals": ["ace the final"]
    });
    let (status, body) =
        send(&app, "PUT", "/api/sessions/s-7/profile", Some(profile.clone())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, profile);

    let (status, body) = send(&app, "GET", "/api/sessions/s-7/profile", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["learning_level"], "advanced");
    assert_eq!(body["preferred_subjects"], json!(["Mathematics", "Physics"]));
}

#[tokio::test]
async fn quiz_without_preferred_subjects_is_bad_request() {
    let app = test_app(StubProvider::replying(&[]));

    let (status, body) =
        send(&app, "POST", "/api/actions/quiz", Some(json!({"session_id": "s-3"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "no preferred subjects selected");
}

#[tokio::test]
async fn study_plan_uses_the_stored_profile() {
    let app = test_app(StubProvider::replying(&["Monday: two hours of calculus."]));

    let (status, _) = send(
        &app,
        "PUT",
        "/api/sessions/s-4/profile",
        Some(json!({"preferred_subjects": ["Mathematics"]})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) =
        send(&app, "POST", "/api/actions/study-plan", Some(json!({"session_id": "s-4"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert!(
        body["reply"]
            .as_str()
            .unwrap()
            .starts_with("📝 **Your Personalized Study Plan:**")
    );
}

#[tokio::test]
async fn clearing_memory_resets_the_learning_context() {
    let app = test_app(StubProvider::new(vec![
        Ok(NO_TOOL.to_string()),
        Ok("Gravity pulls masses together.".to_string()),
    ]));

    let (status, _) = send(
        &app,
        "POST",
        "/api/chat",
        Some(json!({"session_id": "s-5", "message": "What is gravity?"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, "DELETE", "/api/sessions/s-5/memory", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"cleared": true}));

    let (_, body) = send(&app, "GET", "/api/sessions/s-5/memory/context", None).await;
    assert_eq!(body["context"], "No previous learning interactions in this session.");
}

#[tokio::test]
async fn quota_errors_surface_in_the_reply_body() {
    let app = test_app(StubProvider::new(vec![
        Ok(NO_TOOL.to_string()),
        Err(LlmError::QuotaExceeded("insufficient_quota".to_string())),
    ]));

    let (status, body) = send(
        &app,
        "POST",
        "/api/chat",
        Some(json!({"session_id": "s-6", "message": "Why is the sky blue?"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["reply"].as_str().unwrap().contains("OpenAI API Quota Exceeded"));
}

#[tokio::test]
async fn health_reports_provider_and_session_count() {
    let app = test_app(StubProvider::replying(&[]));

    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["provider"], "stub");
    assert_eq!(body["sessions"], 0);

    let (status, body) = send(&app, "POST", "/api/sessions", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["session_id"].as_str().unwrap().len(), 36);
    println!("✅ Session created: {}", body["session_id"]);

    let (_, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(body["sessions"], 1);
}

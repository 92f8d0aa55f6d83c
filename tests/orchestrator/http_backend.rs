use std::sync::Arc;

use cvchat::backend::{HttpChatBackend, build_backend_client};
use cvchat::chat::{MessageRole, RejectReason, SendOutcome};
use cvchat::config::HttpConfig;
use cvchat::platform::ManualClock;
use cvchat::storage::{FileStore, KeyValueStore};
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::harness::{orchestrator, policy};

fn backend(server: &MockServer) -> Arc<HttpChatBackend> {
    Arc::new(HttpChatBackend::new(
        &server.uri(),
        build_backend_client(&HttpConfig::default()),
    ))
}

#[tokio::test]
async fn quota_stops_requests_before_they_reach_the_server() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "response": "Answer.",
            "sources": [{"type": "experience", "id": 1, "title": "Engineer", "score": 0.5}]
        })))
        .expect(3)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let store: Arc<dyn KeyValueStore> = Arc::new(FileStore::new(dir.path()));
    let mut chat = orchestrator(
        store,
        Arc::new(ManualClock::starting_now()),
        policy(3, 180),
        backend(&server),
    );

    for question in ["one", "two", "three"] {
        assert!(matches!(
            chat.send(question).await,
            SendOutcome::Answered { .. }
        ));
    }
    assert!(matches!(
        chat.send("four").await,
        SendOutcome::Rejected(RejectReason::LimitReached)
    ));
    assert!(dir.path().join("cv_rag_session.json").exists());
    assert!(dir.path().join("chat_messages.json").exists());
}

#[tokio::test]
async fn server_error_is_not_counted() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat/"))
        .respond_with(
            ResponseTemplate::new(503).set_body_json(serde_json::json!({"detail": "LLM down"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let mut chat = orchestrator(
        Arc::new(cvchat::storage::MemoryStore::new()),
        Arc::new(ManualClock::starting_now()),
        policy(3, 180),
        backend(&server),
    );

    let outcome = chat.send("Anyone there?").await;

    match outcome {
        SendOutcome::Failed(error) => {
            assert_eq!(error.status(), Some(503));
            assert_eq!(error.to_string(), "LLM down");
        }
        other => panic!("expected failure, got {other:?}"),
    }
    assert_eq!(chat.session().questions_count, 0);
    let last = chat.messages().last().unwrap();
    assert_eq!(last.role, MessageRole::Assistant);
    assert_ne!(last.content, "LLM down");
}

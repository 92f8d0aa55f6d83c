use std::sync::Arc;

use cvchat::backend::ChatResponse;
use cvchat::chat::{MessageLog, MessageRole, RejectReason, SendOutcome, Source, SourceKind};
use cvchat::error::TransportError;
use cvchat::platform::ManualClock;
use cvchat::storage::{KeyValueStore, MemoryStore};

use crate::harness::{FakeBackend, orchestrator, policy};

#[tokio::test]
async fn failed_call_keeps_question_and_adds_one_apology() {
    let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
    let backend = FakeBackend::scripted(vec![Err(TransportError::Status {
        status: 500,
        message: "HTTP 500".into(),
    })]);
    let mut chat = orchestrator(
        store.clone(),
        Arc::new(ManualClock::starting_now()),
        policy(3, 30),
        backend.clone(),
    );
    let before = chat.messages().len();

    let outcome = chat.send("What did he build?").await;

    assert!(matches!(outcome, SendOutcome::Failed(_)));
    assert_eq!(chat.session().questions_count, 0);
    assert_eq!(chat.questions_remaining(), 3);

    let messages = chat.messages();
    assert_eq!(messages.len(), before + 2);
    assert_eq!(messages[before].role, MessageRole::User);
    assert_eq!(messages[before].content, "What did he build?");
    assert_eq!(messages[before + 1].role, MessageRole::Assistant);
    assert!(messages[before + 1].sources.is_none());

    let stored = MessageLog::new(store).load_messages();
    assert_eq!(stored.len(), messages.len());
    assert_eq!(backend.calls(), 1);
}

#[tokio::test]
async fn every_failure_kind_gets_the_same_apology() {
    let backend = FakeBackend::scripted(vec![
        Err(TransportError::Network("refused".into())),
        Err(TransportError::Status {
            status: 429,
            message: "Session limit reached".into(),
        }),
        Err(TransportError::Decode("expected value".into())),
    ]);
    let mut chat = orchestrator(
        Arc::new(MemoryStore::new()),
        Arc::new(ManualClock::starting_now()),
        policy(3, 30),
        backend,
    );

    let mut apologies = Vec::new();
    for question in ["a", "b", "c"] {
        chat.send(question).await;
        apologies.push(chat.messages().last().unwrap().content.clone());
    }

    assert!(apologies.iter().all(|text| text == &apologies[0]));
    assert_eq!(chat.session().questions_count, 0);
}

#[tokio::test]
async fn answers_carry_sources_and_session_id() {
    let source = Source {
        kind: SourceKind::Project,
        id: 3,
        title: "CV chatbot".into(),
        score: 0.91,
    };
    let backend = FakeBackend::scripted(vec![
        Ok(ChatResponse::text("He built a RAG chatbot.").with_sources(vec![source.clone()])),
        Ok(ChatResponse::text("Nothing to cite.")),
    ]);
    let mut chat = orchestrator(
        Arc::new(MemoryStore::new()),
        Arc::new(ManualClock::starting_now()),
        policy(3, 30),
        backend.clone(),
    );

    chat.send("Projects?").await;
    chat.send("Hobbies?").await;

    let messages = chat.messages();
    let cited = &messages[messages.len() - 3];
    assert_eq!(cited.sources.as_deref(), Some(&[source][..]));
    assert!(messages.last().unwrap().sources.is_none());

    let requests = backend.requests();
    assert_eq!(requests.len(), 2);
    assert!(requests.iter().all(|r| r.session_id == chat.session().session_id));
    assert_eq!(chat.questions_remaining(), 1);
}

#[tokio::test]
async fn sending_at_the_limit_is_a_no_op() {
    let backend = FakeBackend::answering();
    let mut chat = orchestrator(
        Arc::new(MemoryStore::new()),
        Arc::new(ManualClock::starting_now()),
        policy(2, 30),
        backend.clone(),
    );
    chat.send("one").await;
    chat.send("two").await;
    let before = chat.messages().to_vec();

    let outcome = chat.send("three").await;

    assert!(matches!(
        outcome,
        SendOutcome::Rejected(RejectReason::LimitReached)
    ));
    assert_eq!(chat.messages(), before.as_slice());
    assert_eq!(backend.calls(), 2);
    assert!(chat.is_limit_reached());
}

#[tokio::test]
async fn conversation_is_restored_by_a_new_orchestrator() {
    let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
    let clock = Arc::new(ManualClock::starting_now());
    let mut first = orchestrator(
        store.clone(),
        clock.clone(),
        policy(3, 30),
        FakeBackend::answering(),
    );
    first.send("Hello").await;
    let expected = first.messages().to_vec();

    let second = orchestrator(store, clock, policy(3, 30), FakeBackend::answering());
    assert_eq!(second.messages(), expected.as_slice());
    assert_eq!(second.session(), first.session());
}

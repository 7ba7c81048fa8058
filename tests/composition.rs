// Composition tests — the full classifier and relay with stub providers.
//
// Exercises blocklist short-circuiting, provider priority, failure
// degradation and the chat/REST contracts without any network access.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use chatwarden::models::{ChatContent, ChatMessage, ModerationRequest};
use chatwarden::moderation::{
    Blocklist, ClassificationRequest, Classifier, DecisionPath, Provider, ProviderError,
};
use chatwarden::pipeline::batch;
use chatwarden::relay::{Relay, EMPTY_CHAT_REPLY};

// ============================================================
// Stub provider
// ============================================================

enum Behavior {
    Answer(&'static str),
    Fail,
    Hang,
}

struct StubProvider {
    name: &'static str,
    behavior: Behavior,
    calls: AtomicUsize,
}

impl StubProvider {
    fn new(name: &'static str, behavior: Behavior) -> Arc<Self> {
        Arc::new(Self {
            name,
            behavior,
            calls: AtomicUsize::new(0),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Provider for StubProvider {
    fn name(&self) -> &str {
        self.name
    }

    async fn complete(&self, _instruction: &str, _text: &str) -> Result<String, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.behavior {
            Behavior::Answer(text) => Ok(text.to_string()),
            Behavior::Fail => Err(ProviderError::Status {
                status: 503,
                body: "upstream unavailable".to_string(),
            }),
            Behavior::Hang => {
                tokio::time::sleep(Duration::from_secs(30)).await;
                Ok("YES".to_string())
            }
        }
    }
}

fn classifier_with(providers: Vec<Arc<StubProvider>>) -> Classifier {
    let providers: Vec<Arc<dyn Provider>> = providers
        .into_iter()
        .map(|p| p as Arc<dyn Provider>)
        .collect();
    Classifier::new(Blocklist::default(), providers, Duration::from_millis(100))
}

fn chat_message(content: Vec<ChatContent>) -> ChatMessage {
    ChatMessage {
        msg_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        content,
    }
}

// ============================================================
// Classifier
// ============================================================

#[tokio::test]
async fn blocklist_match_skips_provider() {
    let provider = StubProvider::new("primary", Behavior::Answer("NO"));
    let classifier = classifier_with(vec![provider.clone()]);

    for text in ["I HATE this streamer", "kill yourself", "what a BiGoT"] {
        assert!(classifier.classify(text).await.is_harmful, "{text}");
    }
    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn blocklist_path_names_the_term() {
    let classifier = classifier_with(Vec::new());
    let decision = classifier.decide("such violence").await;
    assert_eq!(
        decision.path,
        DecisionPath::Blocklist {
            term: "violence".to_string()
        }
    );
}

#[tokio::test]
async fn no_provider_defaults_to_not_harmful() {
    let classifier = classifier_with(Vec::new());
    let decision = classifier.decide("you absolute walnut").await;
    assert!(!decision.verdict.is_harmful);
    assert_eq!(decision.path, DecisionPath::Unconfigured);
}

#[tokio::test]
async fn provider_yes_and_no() {
    let yes = classifier_with(vec![StubProvider::new("p", Behavior::Answer("YES"))]);
    let no = classifier_with(vec![StubProvider::new("p", Behavior::Answer("NO"))]);
    assert!(yes.classify("message").await.is_harmful);
    assert!(!no.classify("message").await.is_harmful);
}

#[tokio::test]
async fn verbose_yes_is_harmful() {
    let classifier = classifier_with(vec![StubProvider::new(
        "p",
        Behavior::Answer("Yes, this message is harmful because it targets the streamer."),
    )]);
    assert!(classifier.classify("message").await.is_harmful);
}

#[tokio::test]
async fn only_primary_is_called() {
    let primary = StubProvider::new("primary", Behavior::Answer("NO"));
    let fallback = StubProvider::new("fallback", Behavior::Answer("YES"));
    let classifier = classifier_with(vec![primary.clone(), fallback.clone()]);

    let decision = classifier.decide("gg no re").await;
    assert!(!decision.verdict.is_harmful);
    assert_eq!(primary.calls(), 1);
    assert_eq!(fallback.calls(), 0);
}

#[tokio::test]
async fn failed_primary_does_not_fall_back() {
    let primary = StubProvider::new("primary", Behavior::Fail);
    let fallback = StubProvider::new("fallback", Behavior::Answer("YES"));
    let classifier = classifier_with(vec![primary.clone(), fallback.clone()]);

    let decision = classifier.decide("borderline message").await;
    assert!(!decision.verdict.is_harmful);
    assert!(matches!(
        decision.path,
        DecisionPath::Degraded { ref provider, .. } if provider == "primary"
    ));
    assert_eq!(fallback.calls(), 0);
}

#[tokio::test]
async fn timeout_degrades_to_not_harmful() {
    let provider = StubProvider::new("slow", Behavior::Hang);
    let classifier = classifier_with(vec![provider.clone()]);

    let decision = classifier.decide("anything").await;
    assert!(!decision.verdict.is_harmful);
    match decision.path {
        DecisionPath::Degraded { error, .. } => assert!(error.contains("did not answer")),
        other => panic!("expected degraded path, got {other:?}"),
    }
    assert_eq!(provider.calls(), 1);
}

#[tokio::test]
async fn repeated_calls_give_same_verdict() {
    let provider = StubProvider::new("p", Behavior::Answer("maybe yes"));
    let classifier = classifier_with(vec![provider.clone()]);

    let first = classifier.classify("same text").await;
    let second = classifier.classify("same text").await;
    assert_eq!(first, second);
    assert!(first.is_harmful);
    assert_eq!(provider.calls(), 2);
}

#[tokio::test]
async fn classify_request_matches_classify() {
    let classifier = classifier_with(vec![StubProvider::new("p", Behavior::Answer("NO"))]);
    let request = ClassificationRequest {
        text: "nice clutch".to_string(),
    };
    assert_eq!(
        classifier.classify_request(&request).await,
        classifier.classify("nice clutch").await
    );
}

// ============================================================
// Relay contracts
// ============================================================

#[tokio::test]
async fn relay_moderate_reports_verdict() {
    let classifier = classifier_with(vec![StubProvider::new("p", Behavior::Answer("YES"))]);
    let relay = Relay::new(Arc::new(classifier), None);

    let response = relay
        .moderate(&ModerationRequest {
            text: "you should quit forever".to_string(),
        })
        .await;
    assert!(response.is_inappropriate);
}

#[tokio::test]
async fn relay_chat_replies_and_ends_session() {
    let classifier = classifier_with(vec![StubProvider::new("p", Behavior::Answer("NO"))]);
    let relay = Relay::new(Arc::new(classifier), None);

    let inbound = chat_message(vec![
        ChatContent::StartSession,
        ChatContent::Text {
            text: "get rekt noob".to_string(),
        },
    ]);
    let reply = relay.chat(&inbound).await;

    assert_eq!(reply.acknowledged_msg_id, inbound.msg_id);
    assert_eq!(
        reply.message.content,
        vec![
            ChatContent::Text {
                text: "Inappropriate: NO".to_string()
            },
            ChatContent::EndSession,
        ]
    );
}

#[tokio::test]
async fn relay_chat_without_text_asks_for_text() {
    let provider = StubProvider::new("p", Behavior::Answer("YES"));
    let classifier = classifier_with(vec![provider.clone()]);
    let relay = Relay::new(Arc::new(classifier), None);

    let reply = relay.chat(&chat_message(vec![ChatContent::StartSession])).await;
    assert_eq!(reply.message.first_text(), Some(EMPTY_CHAT_REPLY));
    assert_eq!(provider.calls(), 0);
}

// ============================================================
// Batch pipeline
// ============================================================

#[tokio::test]
async fn batch_preserves_input_order() {
    let classifier = classifier_with(vec![StubProvider::new("p", Behavior::Answer("NO"))]);
    let relay = Relay::new(Arc::new(classifier), None);

    let messages = batch::parse_messages("gg\nracist garbage\nwell played\n");
    let items = batch::run(&relay, messages, 2, false).await;

    let verdicts: Vec<(&str, bool)> = items
        .iter()
        .map(|i| (i.text.as_str(), i.decision.verdict.is_harmful))
        .collect();
    assert_eq!(
        verdicts,
        vec![
            ("gg", false),
            ("racist garbage", true),
            ("well played", false)
        ]
    );
}

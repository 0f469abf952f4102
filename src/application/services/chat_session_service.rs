//! Chat Session Service - Ghost chat transcripts
//!
//! A session lives as long as the chat overlay stays open. Each submitted
//! message is tagged with the next sequence number; only the reply to the
//! latest submission is appended, so replies that resolve out of order never
//! land after a newer answer. Sessions left idle expire on their own.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tokio::sync::RwLock;
use tracing::{debug, info, instrument};

use crate::application::ports::outbound::LlmPort;
use crate::application::services::delayed_hide::DelayedHide;
use crate::application::services::ghost_service::{GhostService, GHOST_GREETING};
use crate::domain::value_objects::{GhostMessage, GhostSessionId};

/// Errors that can occur when using a chat session
#[derive(Debug, thiserror::Error)]
pub enum ChatSessionError {
    #[error("Ghost session {0} not found")]
    NotFound(GhostSessionId),
    #[error("Ghost session {0} was closed before the reply arrived")]
    Closed(GhostSessionId),
    #[error("Message cannot be empty")]
    EmptyMessage,
}

/// Snapshot of a session
#[derive(Debug, Clone, Serialize)]
pub struct ChatTranscript {
    pub id: GhostSessionId,
    pub messages: Vec<GhostMessage>,
    /// True while the latest submission has no reply yet
    pub loading: bool,
}

/// Result of submitting one message
#[derive(Debug, Clone, Serialize)]
pub struct SubmitOutcome {
    pub sequence: u64,
    pub reply: String,
    /// A newer message was submitted before this reply arrived, so the
    /// reply was not added to the transcript
    pub superseded: bool,
    pub transcript: ChatTranscript,
}

struct GhostSession {
    messages: Vec<GhostMessage>,
    /// Sequence number of the latest submission
    issued: u64,
    /// Sequence number of the latest reply appended
    resolved: u64,
    /// Visible while the session is in use; hiding expires the session
    idle: DelayedHide,
}

impl GhostSession {
    fn transcript(&self, id: GhostSessionId) -> ChatTranscript {
        ChatTranscript {
            id,
            messages: self.messages.clone(),
            loading: self.resolved < self.issued,
        }
    }
}

type SessionMap = Arc<RwLock<HashMap<GhostSessionId, GhostSession>>>;

/// A submission waiting on the Ghost
///
/// If the caller goes away before the reply lands (the HTTP client
/// disconnects and the handler future is dropped), dropping the guard settles
/// the sequence and restarts the idle timer. The session then neither stays
/// loading nor outlives its idle timeout.
struct InFlight {
    sessions: SessionMap,
    id: GhostSessionId,
    sequence: u64,
    armed: bool,
}

impl InFlight {
    fn new(sessions: &SessionMap, id: GhostSessionId, sequence: u64) -> Self {
        Self {
            sessions: Arc::clone(sessions),
            id,
            sequence,
            armed: true,
        }
    }

    fn disarm(mut self) {
        self.armed = false;
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            return;
        };
        let sessions = Arc::clone(&self.sessions);
        let (id, sequence) = (self.id, self.sequence);

        runtime.spawn(async move {
            let mut sessions = sessions.write().await;
            let Some(session) = sessions.get_mut(&id) else {
                return;
            };
            if session.issued == sequence {
                debug!(sequence, "Ghost request abandoned, settling session {}", id);
                session.resolved = sequence;
                session.idle.hide_later();
            }
        });
    }
}

pub struct ChatSessionService<L: LlmPort> {
    ghost: Arc<GhostService<L>>,
    sessions: SessionMap,
    idle_timeout: Duration,
}

impl<L: LlmPort> ChatSessionService<L> {
    pub fn new(ghost: Arc<GhostService<L>>, idle_timeout: Duration) -> Self {
        Self {
            ghost,
            sessions: Arc::new(RwLock::new(HashMap::new())),
            idle_timeout,
        }
    }

    /// Open a session seeded with the Ghost's greeting
    #[instrument(skip(self))]
    pub async fn open(&self) -> ChatTranscript {
        let id = GhostSessionId::new();
        let session = GhostSession {
            messages: vec![GhostMessage::ghost(GHOST_GREETING)],
            issued: 0,
            resolved: 0,
            idle: DelayedHide::new(self.idle_timeout, true),
        };
        session.idle.hide_later();
        self.watch_expiry(id, &session.idle);

        let transcript = session.transcript(id);
        self.sessions.write().await.insert(id, session);
        info!("Opened Ghost session {}", id);
        transcript
    }

    pub async fn get(&self, id: GhostSessionId) -> Result<ChatTranscript, ChatSessionError> {
        self.sessions
            .read()
            .await
            .get(&id)
            .map(|session| session.transcript(id))
            .ok_or(ChatSessionError::NotFound(id))
    }

    /// Close a session, discarding its transcript
    pub async fn close(&self, id: GhostSessionId) -> Result<(), ChatSessionError> {
        self.sessions
            .write()
            .await
            .remove(&id)
            .map(|_| info!("Closed Ghost session {}", id))
            .ok_or(ChatSessionError::NotFound(id))
    }

    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Submit a user message and wait for the Ghost's reply
    ///
    /// Submissions are not serialized. The session lock is released while
    /// the model is working, so several messages may be in flight at once.
    #[instrument(skip(self, text))]
    pub async fn submit(
        &self,
        id: GhostSessionId,
        text: &str,
    ) -> Result<SubmitOutcome, ChatSessionError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ChatSessionError::EmptyMessage);
        }

        let sequence = {
            let mut sessions = self.sessions.write().await;
            let session = sessions.get_mut(&id).ok_or(ChatSessionError::NotFound(id))?;
            session.messages.push(GhostMessage::user(text));
            session.issued += 1;
            session.idle.show();
            session.issued
        };
        let in_flight = InFlight::new(&self.sessions, id, sequence);

        let reply = self.ghost.respond(text).await;

        let mut sessions = self.sessions.write().await;
        in_flight.disarm();
        let Some(session) = sessions.get_mut(&id) else {
            debug!(sequence, "Dropping Ghost reply for closed session {}", id);
            return Err(ChatSessionError::Closed(id));
        };

        let superseded = sequence != session.issued;
        if superseded {
            debug!(
                sequence,
                latest = session.issued,
                "Discarding superseded Ghost reply"
            );
        } else {
            session.messages.push(GhostMessage::ghost(reply.clone()));
            session.resolved = sequence;
            session.idle.hide_later();
        }

        Ok(SubmitOutcome {
            sequence,
            reply,
            superseded,
            transcript: session.transcript(id),
        })
    }

    /// Remove the session once its idle timer hides it
    fn watch_expiry(&self, id: GhostSessionId, idle: &DelayedHide) {
        let mut visible = idle.subscribe();
        let sessions = Arc::clone(&self.sessions);

        tokio::spawn(async move {
            while visible.changed().await.is_ok() {
                if *visible.borrow_and_update() {
                    continue;
                }
                let mut map = sessions.write().await;
                // A submit may have shown the session while we waited for the lock
                if *visible.borrow() {
                    continue;
                }
                if map.remove(&id).is_some() {
                    info!("Ghost session {} expired", id);
                }
                break;
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use tokio::sync::oneshot;

    use super::*;
    use crate::application::ports::outbound::{LlmRequest, LlmResponse};
    use crate::application::services::ghost_service::test_support::{Script, ScriptedLlm};
    use crate::domain::value_objects::Speaker;

    /// Mock LLM whose replies are released by the test, one gate per call
    struct GatedLlm {
        gates: Mutex<VecDeque<oneshot::Receiver<String>>>,
    }

    impl GatedLlm {
        fn new(gates: Vec<oneshot::Receiver<String>>) -> Self {
            Self {
                gates: Mutex::new(gates.into()),
            }
        }
    }

    #[async_trait]
    impl LlmPort for GatedLlm {
        type Error = String;

        async fn generate(&self, _request: LlmRequest) -> Result<LlmResponse, Self::Error> {
            let gate = self
                .gates
                .lock()
                .unwrap()
                .pop_front()
                .ok_or_else(|| "no gate left".to_string())?;
            let text = gate.await.map_err(|e| e.to_string())?;
            Ok(LlmResponse {
                content: Some(text),
                finish_reason: None,
            })
        }
    }

    /// Mock LLM that never answers
    struct SilentLlm;

    #[async_trait]
    impl LlmPort for SilentLlm {
        type Error = String;

        async fn generate(&self, _request: LlmRequest) -> Result<LlmResponse, Self::Error> {
            std::future::pending().await
        }
    }

    fn service_with<L: LlmPort>(llm: L, idle: Duration) -> Arc<ChatSessionService<L>> {
        Arc::new(ChatSessionService::new(
            Arc::new(GhostService::new(Arc::new(llm))),
            idle,
        ))
    }

    async fn wait_for_messages<L: LlmPort>(
        service: &ChatSessionService<L>,
        id: GhostSessionId,
        count: usize,
    ) {
        while service.get(id).await.unwrap().messages.len() < count {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test]
    async fn test_open_seeds_greeting() {
        let service = service_with(ScriptedLlm::unconfigured(), Duration::from_secs(600));
        let transcript = service.open().await;

        assert_eq!(transcript.messages.len(), 1);
        assert_eq!(transcript.messages[0].role, Speaker::Ghost);
        assert_eq!(transcript.messages[0].text, GHOST_GREETING);
        assert!(!transcript.loading);
        assert_eq!(service.session_count().await, 1);
    }

    #[tokio::test]
    async fn test_submit_appends_exchange() {
        let service = service_with(
            ScriptedLlm::new(Script::Reply("pog!".to_string())),
            Duration::from_secs(600),
        );
        let id = service.open().await.id;

        let outcome = service.submit(id, "  hello  ").await.unwrap();
        assert_eq!(outcome.sequence, 1);
        assert_eq!(outcome.reply, "pog!");
        assert!(!outcome.superseded);

        let texts: Vec<&str> = outcome
            .transcript
            .messages
            .iter()
            .map(|m| m.text.as_str())
            .collect();
        assert_eq!(texts, vec![GHOST_GREETING, "hello", "pog!"]);
        assert!(!outcome.transcript.loading);
    }

    #[tokio::test]
    async fn test_empty_message_is_rejected() {
        let service = service_with(ScriptedLlm::unconfigured(), Duration::from_secs(600));
        let id = service.open().await.id;

        let result = service.submit(id, "   ").await;
        assert!(matches!(result, Err(ChatSessionError::EmptyMessage)));
        assert_eq!(service.get(id).await.unwrap().messages.len(), 1);
    }

    #[tokio::test]
    async fn test_unknown_session_is_not_found() {
        let service = service_with(ScriptedLlm::unconfigured(), Duration::from_secs(600));
        let id = GhostSessionId::new();

        assert!(matches!(service.get(id).await, Err(ChatSessionError::NotFound(_))));
        assert!(matches!(
            service.submit(id, "hi").await,
            Err(ChatSessionError::NotFound(_))
        ));
        assert!(matches!(service.close(id).await, Err(ChatSessionError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_out_of_order_reply_is_discarded() {
        let (first_tx, first_rx) = oneshot::channel();
        let (second_tx, second_rx) = oneshot::channel();
        let service = service_with(
            GatedLlm::new(vec![first_rx, second_rx]),
            Duration::from_secs(600),
        );
        let id = service.open().await.id;

        let first = tokio::spawn({
            let service = Arc::clone(&service);
            async move { service.submit(id, "first").await }
        });
        wait_for_messages(&service, id, 2).await;

        let second = tokio::spawn({
            let service = Arc::clone(&service);
            async move { service.submit(id, "second").await }
        });
        wait_for_messages(&service, id, 3).await;
        assert!(service.get(id).await.unwrap().loading);

        second_tx.send("second reply".to_string()).unwrap();
        let second = second.await.unwrap().unwrap();
        assert_eq!(second.sequence, 2);
        assert!(!second.superseded);
        assert!(!second.transcript.loading);

        first_tx.send("first reply".to_string()).unwrap();
        let first = first.await.unwrap().unwrap();
        assert_eq!(first.sequence, 1);
        assert!(first.superseded);
        assert_eq!(first.reply, "first reply");

        let texts: Vec<String> = service
            .get(id)
            .await
            .unwrap()
            .messages
            .into_iter()
            .map(|m| m.text)
            .collect();
        assert_eq!(texts, vec![GHOST_GREETING, "first", "second", "second reply"]);
    }

    #[tokio::test]
    async fn test_reply_for_closed_session_is_dropped() {
        let (tx, rx) = oneshot::channel();
        let service = service_with(GatedLlm::new(vec![rx]), Duration::from_secs(600));
        let id = service.open().await.id;

        let pending = tokio::spawn({
            let service = Arc::clone(&service);
            async move { service.submit(id, "anyone there?").await }
        });
        wait_for_messages(&service, id, 2).await;

        service.close(id).await.unwrap();
        tx.send("boo".to_string()).unwrap();

        assert!(matches!(
            pending.await.unwrap(),
            Err(ChatSessionError::Closed(_))
        ));
        assert_eq!(service.session_count().await, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_idle_session_expires() {
        let service = service_with(ScriptedLlm::unconfigured(), Duration::from_secs(60));
        let id = service.open().await.id;

        tokio::time::sleep(Duration::from_secs(59)).await;
        assert!(service.get(id).await.is_ok());

        tokio::time::sleep(Duration::from_secs(2)).await;
        assert!(matches!(service.get(id).await, Err(ChatSessionError::NotFound(_))));
    }

    #[tokio::test(start_paused = true)]
    async fn test_activity_postpones_expiry() {
        let service = service_with(
            ScriptedLlm::new(Script::Reply("glitch-free".to_string())),
            Duration::from_secs(60),
        );
        let id = service.open().await.id;

        tokio::time::sleep(Duration::from_secs(40)).await;
        service.submit(id, "still here").await.unwrap();

        tokio::time::sleep(Duration::from_secs(40)).await;
        assert!(service.get(id).await.is_ok());

        tokio::time::sleep(Duration::from_secs(30)).await;
        assert!(service.get(id).await.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_abandoned_submit_settles_and_expires() {
        let service = service_with(SilentLlm, Duration::from_secs(60));
        let id = service.open().await.id;

        let task = tokio::spawn({
            let service = Arc::clone(&service);
            async move { service.submit(id, "hi").await }
        });
        wait_for_messages(&service, id, 2).await;
        assert!(service.get(id).await.unwrap().loading);

        task.abort();
        assert!(task.await.unwrap_err().is_cancelled());

        tokio::time::sleep(Duration::from_secs(1)).await;
        let transcript = service.get(id).await.unwrap();
        assert!(!transcript.loading);
        assert_eq!(transcript.messages.len(), 2);

        tokio::time::sleep(Duration::from_secs(3600)).await;
        assert!(matches!(service.get(id).await, Err(ChatSessionError::NotFound(_))));
        assert_eq!(service.session_count().await, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_expiry_backs_off_when_shown_under_lock() {
        let service = service_with(ScriptedLlm::unconfigured(), Duration::from_secs(60));
        let id = service.open().await.id;

        // Hold the map while the idle timer fires, then show before releasing
        let sessions = service.sessions.write().await;
        tokio::time::sleep(Duration::from_secs(61)).await;
        sessions.get(&id).unwrap().idle.show();
        drop(sessions);

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert!(service.get(id).await.is_ok());
    }
}

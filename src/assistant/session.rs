//! Chat session state
//!
//! A transcript seeded with the greeting, plus at most one pending reply.
//! The reply becomes visible once its deadline passes and the owner calls
//! [`ChatSession::advance`].

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use super::error::AssistantError;
use super::replies::{prompt_for_action, reply_for, Reply, SuggestedAction, Topic, GREETING};
use crate::config::SimulationConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One turn of the transcript
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatMessage {
    pub id: u64,
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    /// Only assistant messages carry actions
    pub actions: Vec<SuggestedAction>,
    pub topic: Option<Topic>,
}

#[derive(Debug, Clone, Copy)]
struct PendingReply {
    reply: Reply,
    due_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    next_id: u64,
    pending: Option<PendingReply>,
    reply_delay: Duration,
    open: bool,
    minimized: bool,
}

impl ChatSession {
    pub fn new(config: &SimulationConfig, now: DateTime<Utc>) -> Self {
        let mut session = Self {
            messages: Vec::new(),
            next_id: 1,
            pending: None,
            reply_delay: config.reply_delay(),
            open: false,
            minimized: false,
        };
        session.push_reply(GREETING, now);
        session
    }

    /// Append a user turn and schedule the reply
    pub fn send(&mut self, text: &str, now: DateTime<Utc>) -> Result<u64, AssistantError> {
        if text.trim().is_empty() {
            return Err(AssistantError::EmptyMessage);
        }
        if self.pending.is_some() {
            return Err(AssistantError::Busy);
        }

        let reply = reply_for(text);
        let id = self.push(ChatMessage {
            id: 0,
            role: Role::User,
            content: text.to_string(),
            timestamp: now,
            actions: Vec::new(),
            topic: None,
        });
        self.pending = Some(PendingReply {
            reply,
            due_at: now + self.reply_delay,
        });

        tracing::info!(message = id, topic = ?reply.topic, "User message sent");
        Ok(id)
    }

    /// Send the prompt mapped to a suggested action
    pub fn trigger_action(
        &mut self,
        action: &str,
        now: DateTime<Utc>,
    ) -> Result<u64, AssistantError> {
        self.send(&prompt_for_action(action), now)
    }

    /// Deliver the pending reply if it is due
    pub fn advance(&mut self, now: DateTime<Utc>) -> Option<&ChatMessage> {
        let pending = self.pending.filter(|p| p.due_at <= now)?;
        self.pending = None;
        tracing::debug!(topic = ?pending.reply.topic, "Assistant replied");
        self.push_reply(pending.reply, pending.due_at);
        self.messages.last()
    }

    pub fn next_due(&self) -> Option<DateTime<Utc>> {
        self.pending.map(|p| p.due_at)
    }

    fn push_reply(&mut self, reply: Reply, at: DateTime<Utc>) -> u64 {
        self.push(ChatMessage {
            id: 0,
            role: Role::Assistant,
            content: reply.content.to_string(),
            timestamp: at,
            actions: reply.actions.to_vec(),
            topic: Some(reply.topic),
        })
    }

    fn push(&mut self, mut message: ChatMessage) -> u64 {
        message.id = self.next_id;
        self.next_id += 1;
        self.messages.push(message);
        self.next_id - 1
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_typing(&self) -> bool {
        self.pending.is_some()
    }

    /// Whether the send button is enabled for `draft`
    pub fn can_send(&self, draft: &str) -> bool {
        !draft.trim().is_empty() && !self.is_typing()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_minimized(&self) -> bool {
        self.minimized
    }

    pub fn toggle_open(&mut self) {
        self.open = !self.open;
    }

    pub fn toggle_minimized(&mut self) {
        self.minimized = !self.minimized;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::{Clock, ManualClock};

    fn session(clock: &ManualClock) -> ChatSession {
        ChatSession::new(&SimulationConfig::default(), clock.now())
    }

    #[test]
    fn test_seeded_with_greeting() {
        let clock = ManualClock::at_epoch();
        let chat = session(&clock);
        assert_eq!(chat.messages().len(), 1);
        assert_eq!(chat.messages()[0].role, Role::Assistant);
        assert!(chat.messages()[0].content.starts_with("👋 Hello!"));
        assert!(!chat.is_typing());
    }

    #[test]
    fn test_reply_after_delay() {
        let clock = ManualClock::at_epoch();
        let mut chat = session(&clock);

        chat.send("how is my portfolio?", clock.now()).unwrap();
        assert!(chat.is_typing());
        assert_eq!(chat.messages().len(), 2);

        clock.advance(Duration::milliseconds(1499));
        assert!(chat.advance(clock.now()).is_none());

        clock.advance(Duration::milliseconds(1));
        let reply = chat.advance(clock.now()).unwrap();
        assert_eq!(reply.topic, Some(Topic::Portfolio));
        assert_eq!(reply.actions.len(), 2);
        assert!(!chat.is_typing());
        assert_eq!(chat.messages().len(), 3);
    }

    #[test]
    fn test_blank_input_ignored() {
        let clock = ManualClock::at_epoch();
        let mut chat = session(&clock);
        assert_eq!(chat.send("   ", clock.now()), Err(AssistantError::EmptyMessage));
        assert_eq!(chat.messages().len(), 1);
        assert!(!chat.can_send(""));
    }

    #[test]
    fn test_busy_while_typing() {
        let clock = ManualClock::at_epoch();
        let mut chat = session(&clock);
        chat.send("carbon", clock.now()).unwrap();
        assert_eq!(chat.send("market", clock.now()), Err(AssistantError::Busy));
        assert!(!chat.can_send("market"));
    }

    #[test]
    fn test_action_sends_mapped_prompt() {
        let clock = ManualClock::at_epoch();
        let mut chat = session(&clock);
        chat.trigger_action("carbon", clock.now()).unwrap();
        assert_eq!(chat.messages()[1].content, "Tell me about my carbon credits");

        clock.advance(Duration::seconds(2));
        let reply = chat.advance(clock.now()).unwrap();
        assert_eq!(reply.topic, Some(Topic::Carbon));
    }

    #[test]
    fn test_message_ids_increase() {
        let clock = ManualClock::at_epoch();
        let mut chat = session(&clock);
        chat.send("hi", clock.now()).unwrap();
        clock.advance(Duration::seconds(2));
        chat.advance(clock.now());
        let ids: Vec<_> = chat.messages().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(chat.messages()[2].topic, Some(Topic::Menu));
    }

    #[test]
    fn test_widget_toggles() {
        let clock = ManualClock::at_epoch();
        let mut chat = session(&clock);
        assert!(!chat.is_open());
        chat.toggle_open();
        chat.toggle_minimized();
        assert!(chat.is_open() && chat.is_minimized());
    }

    #[test]
    fn test_long_reply_delay_is_capped() {
        let config = SimulationConfig {
            reply_delay_ms: u64::MAX,
            ..SimulationConfig::default()
        };
        let now = DateTime::<Utc>::MAX_UTC - Duration::days(2);
        let mut chat = ChatSession::new(&config, now);

        chat.send("hi", now).unwrap();
        assert_eq!(chat.next_due(), Some(now + Duration::days(1)));
    }

    #[test]
    fn test_greeting_has_its_own_topic() {
        let clock = ManualClock::at_epoch();
        let mut chat = session(&clock);
        assert_eq!(chat.messages()[0].topic, Some(Topic::Greeting));

        chat.send("hello", clock.now()).unwrap();
        clock.advance(Duration::seconds(2));
        chat.advance(clock.now());
        assert_eq!(chat.messages()[2].topic, Some(Topic::Menu));
    }
}

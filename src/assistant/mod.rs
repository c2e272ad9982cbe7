//! Mock chat assistant

mod error;
mod replies;
mod session;

pub use error::AssistantError;
pub use replies::{
    prompt_for_action, reply_for, ActionKind, Reply, SuggestedAction, Topic, GREETING, RULES,
};
pub use session::{ChatMessage, ChatSession, Role};

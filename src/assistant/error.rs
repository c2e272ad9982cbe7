use thiserror::Error;

/// Reasons a chat message is not sent
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssistantError {
    #[error("message is empty")]
    EmptyMessage,

    #[error("assistant is still typing")]
    Busy,
}

use serde::Serialize;

/// Role of a message in the two-message conversation sent to the chat model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    User,
}

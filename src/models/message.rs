//! Message model

use serde::{Deserialize, Serialize};

/// A stored text message.
///
/// The id is chosen by the client; it may be absent until the message is saved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    #[serde(default)]
    pub id: Option<String>,
    pub text: String,
}

impl Message {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            text: text.into(),
        }
    }

    /// A message without an id
    pub fn unsaved(text: impl Into<String>) -> Self {
        Self {
            id: None,
            text: text.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_without_id() {
        let message: Message = serde_json::from_str(r#"{"text": "Hello!"}"#).unwrap();
        assert_eq!(message, Message::unsaved("Hello!"));
    }

    #[test]
    fn test_deserialize_with_id() {
        let message: Message = serde_json::from_str(r#"{"id": "7", "text": "Privet!"}"#).unwrap();
        assert_eq!(message, Message::new("7", "Privet!"));
    }

    #[test]
    fn test_deserialize_requires_text() {
        assert!(serde_json::from_str::<Message>(r#"{"id": "7"}"#).is_err());
    }
}

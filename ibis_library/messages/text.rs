use ibis_core::core::LogSummary;
use serde::{Deserialize, Serialize};

/// Plain text message.
///
/// The payload is a single string field; the smoke fixtures carry this
/// type on their test topics.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TextMsg {
    pub data: String,
}

impl TextMsg {
    pub fn new(data: impl Into<String>) -> Self {
        Self { data: data.into() }
    }
}

impl LogSummary for TextMsg {
    fn log_summary(&self) -> String {
        format!("TextMsg({})", self.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_summary_includes_payload() {
        let msg = TextMsg::new("hello");
        assert_eq!(msg.log_summary(), "TextMsg(hello)");
    }

    #[test]
    fn default_is_empty() {
        assert!(TextMsg::default().data.is_empty());
    }
}

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const FALLBACK_REPLY: &str = "I'm here to help.";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlattenedReply {
    pub output_text: String,
}

impl FlattenedReply {
    /// Pulls the reply text out of an upstream response, trying
    /// `output_text`, then `output[0].content[0].text`, then the fixed
    /// fallback. Empty strings count as missing.
    pub fn from_upstream(response: &Value) -> Self {
        let text = non_empty_str(response.get("output_text"))
            .or_else(|| non_empty_str(response.pointer("/output/0/content/0/text")))
            .unwrap_or(FALLBACK_REPLY);

        Self {
            output_text: text.to_string(),
        }
    }
}

fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|s| !s.is_empty())
}

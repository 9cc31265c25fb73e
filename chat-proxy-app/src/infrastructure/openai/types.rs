use serde::Serialize;
use serde_json::Value;

pub const CHAT_COMPLETIONS_PATH: &str = "v1/chat/completions";
pub const RESPONSES_PATH: &str = "v1/responses";

/// Model used by the flattened route. Callers cannot override it.
pub const RESPONSES_MODEL: &str = "gpt-4.1-mini";

#[derive(Debug, Serialize)]
pub struct ResponsesRequest<'a> {
    pub model: &'static str,
    pub input: &'a [Value],
}

impl<'a> ResponsesRequest<'a> {
    pub fn new(input: &'a [Value]) -> Self {
        Self {
            model: RESPONSES_MODEL,
            input,
        }
    }
}

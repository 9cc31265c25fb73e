use chat_proxy_errors::ProxyError;
use serde::Serialize;
use serde_json::Value;

pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_TEMPERATURE: f64 = 0.7;
pub const DEFAULT_MAX_TOKENS: u32 = 500;

/// Body of the pass-through route. Messages and option values are opaque to
/// the proxy; defaults only fill options the caller left out entirely.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatRequest {
    pub model: Value,
    pub messages: Vec<Value>,
    pub temperature: Value,
    pub max_tokens: Value,
}

impl ChatRequest {
    pub fn from_slice(body: &[u8]) -> Result<Self, ProxyError> {
        let value = parse_json(body)?;
        let messages = parse_messages(&value)?;

        Ok(Self {
            model: option_or(&value, "model", || Value::from(DEFAULT_MODEL)),
            messages,
            temperature: option_or(&value, "temperature", || Value::from(DEFAULT_TEMPERATURE)),
            max_tokens: option_or(&value, "max_tokens", || Value::from(DEFAULT_MAX_TOKENS)),
        })
    }
}

/// Body of the flattened route. Only the messages are read.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatInput {
    pub messages: Vec<Value>,
}

impl ChatInput {
    pub fn from_slice(body: &[u8]) -> Result<Self, ProxyError> {
        let value = parse_json(body)?;
        Ok(Self {
            messages: parse_messages(&value)?,
        })
    }
}

fn parse_json(body: &[u8]) -> Result<Value, ProxyError> {
    serde_json::from_slice(body).map_err(|e| ProxyError::InvalidJson(e.to_string()))
}

fn parse_messages(body: &Value) -> Result<Vec<Value>, ProxyError> {
    body.get("messages")
        .and_then(Value::as_array)
        .cloned()
        .ok_or(ProxyError::MissingMessages)
}

fn option_or(body: &Value, key: &str, default: impl FnOnce() -> Value) -> Value {
    body.get(key).cloned().unwrap_or_else(default)
}

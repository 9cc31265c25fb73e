mod chat_request;
mod flattened_reply;

pub use chat_request::{
    ChatInput, ChatRequest, DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_TEMPERATURE,
};
pub use flattened_reply::{FlattenedReply, FALLBACK_REPLY};

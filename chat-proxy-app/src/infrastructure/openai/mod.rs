mod client;
mod types;

pub use client::{OpenAiClient, UpstreamError, UpstreamReply};
pub use types::{ResponsesRequest, RESPONSES_MODEL};

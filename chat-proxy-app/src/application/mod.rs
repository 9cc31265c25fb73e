mod flatten_chat;
mod relay_chat;

pub use flatten_chat::FlattenChat;
pub use relay_chat::RelayChat;

use crate::application::{FlattenChat, RelayChat};
use crate::config::Config;
use crate::infrastructure::openai::OpenAiClient;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppContext {
    pub relay_chat: Arc<RelayChat>,
    pub flatten_chat: Arc<FlattenChat>,
}

impl AppContext {
    pub fn new(config: &Config) -> Self {
        let client = Arc::new(OpenAiClient::new(config.base_url.clone()));
        Self {
            relay_chat: Arc::new(RelayChat::new(client.clone(), config.credentials.clone())),
            flatten_chat: Arc::new(FlattenChat::new(client, config.credentials.clone())),
        }
    }
}

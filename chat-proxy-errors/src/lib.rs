mod config_error;
mod proxy_error;

pub use config_error::ConfigError;
pub use proxy_error::ProxyError;

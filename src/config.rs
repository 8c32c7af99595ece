//! Server configuration
//!
//! Read from environment variables with forgiving defaults: an unparsable
//! value logs a warning and falls back rather than refusing to start.

use std::env;

/// Default bind address for the HTTP server
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// Default inbound queue capacity. 1 is the closest bounded-channel
/// equivalent of an unbuffered hand-off to the broadcast loop.
const DEFAULT_QUEUE_CAPACITY: usize = 1;

/// Default directory for the chat page and assets
const DEFAULT_STATIC_DIR: &str = "static";

/// Runtime configuration for the relay server
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Address the HTTP server binds to (`RELAY_BIND_ADDR`)
    pub bind_addr: String,

    /// Capacity of the hub's inbound queue (`RELAY_QUEUE_CAPACITY`)
    pub queue_capacity: usize,

    /// Directory the chat page is served from (`RELAY_STATIC_DIR`)
    pub static_dir: String,
}

impl ServerConfig {
    /// Read configuration from the environment
    pub fn from_env() -> Self {
        Self {
            bind_addr: env::var("RELAY_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
            queue_capacity: parse_capacity(env::var("RELAY_QUEUE_CAPACITY").ok()),
            static_dir: env::var("RELAY_STATIC_DIR").unwrap_or_else(|_| DEFAULT_STATIC_DIR.to_string()),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
            static_dir: DEFAULT_STATIC_DIR.to_string(),
        }
    }
}

fn parse_capacity(raw: Option<String>) -> usize {
    let Some(value) = raw else {
        return DEFAULT_QUEUE_CAPACITY;
    };

    match value.parse::<usize>() {
        Ok(capacity) if capacity >= 1 => capacity,
        _ => {
            eprintln!(
                "[Config] WARNING: invalid RELAY_QUEUE_CAPACITY {:?}, using {}",
                value, DEFAULT_QUEUE_CAPACITY
            );
            DEFAULT_QUEUE_CAPACITY
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_addr, "0.0.0.0:3000");
        assert_eq!(config.queue_capacity, 1);
        assert_eq!(config.static_dir, "static");
    }

    #[test]
    fn test_parse_capacity_accepts_positive() {
        assert_eq!(parse_capacity(Some("64".to_string())), 64);
    }

    #[test]
    fn test_parse_capacity_falls_back_on_garbage() {
        assert_eq!(parse_capacity(Some("lots".to_string())), DEFAULT_QUEUE_CAPACITY);
        assert_eq!(parse_capacity(Some("0".to_string())), DEFAULT_QUEUE_CAPACITY);
        assert_eq!(parse_capacity(None), DEFAULT_QUEUE_CAPACITY);
    }
}

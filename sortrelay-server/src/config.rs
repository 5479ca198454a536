//! Server configuration
//!
//! Small builder with environment overrides. The deployed device firmware is
//! hard-coded to push to port 3001, so that stays the default bind port.

use std::net::SocketAddr;

use crate::ServerError;

/// Environment variable overriding the bind address
pub const ADDR_ENV: &str = "SORTRELAY_ADDR";

const DEFAULT_ADDR: &str = "127.0.0.1:3001";

/// HTTP server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address and port to bind
    pub addr: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            // Infallible: literal is a valid socket address
            addr: DEFAULT_ADDR.parse().expect("default address is valid"),
        }
    }
}

impl ServerConfig {
    /// Configuration with all defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the bind address
    pub fn bind(mut self, addr: impl Into<String>) -> Result<Self, ServerError> {
        let raw = addr.into();
        self.addr = raw
            .parse()
            .map_err(|_| ServerError::Config(format!("invalid bind address {raw:?}")))?;
        Ok(self)
    }

    /// Defaults overridden by `SORTRELAY_ADDR` when set
    pub fn from_env() -> Result<Self, ServerError> {
        match std::env::var(ADDR_ENV) {
            Ok(addr) => Self::new().bind(addr),
            Err(_) => Ok(Self::new()),
        }
    }
}

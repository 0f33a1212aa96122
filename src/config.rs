//! Server settings.
//!
//! The service has no configuration surface: these values are fixed, and only
//! `RUST_LOG` (read by [`setup_tracing`](crate::lifecycle::setup_tracing)) affects a
//! running process.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Port the service listens on.
pub const DEFAULT_PORT: u16 = 8000;

/// Capacity of the user actor's request channel.
pub const DEFAULT_CHANNEL_BUFFER: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub channel_buffer: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            channel_buffer: DEFAULT_CHANNEL_BUFFER,
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_listens_on_all_interfaces_port_8000() {
        let config = ServerConfig::default();
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8000");
        assert_eq!(config.channel_buffer, 32);
    }
}

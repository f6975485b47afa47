//! Server configuration resolved from the command line.

use std::net::SocketAddr;

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Resolved server configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    pub bind_addr: String,
    /// Serve the rendered docs at `/scalar` and redirect `/` there.
    #[serde(default = "default_enable_docs")]
    pub enable_docs: bool,
}

fn default_enable_docs() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new("0.0.0.0", 3000, true)
    }
}

impl ServerConfig {
    pub fn new(host: &str, port: u16, enable_docs: bool) -> Self {
        // Bare IPv6 hosts need brackets to form a socket address.
        let bind_addr = if host.contains(':') && !host.starts_with('[') {
            format!("[{host}]:{port}")
        } else {
            format!("{host}:{port}")
        };
        Self {
            bind_addr,
            enable_docs,
        }
    }

    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        self.bind_addr
            .parse()
            .with_context(|| format!("Invalid bind address '{}'", self.bind_addr))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_listens_on_all_interfaces() {
        let cfg = ServerConfig::default();
        assert_eq!(cfg.bind_addr, "0.0.0.0:3000");
        assert!(cfg.enable_docs);
        assert_eq!(cfg.socket_addr().unwrap().port(), 3000);
    }

    #[test]
    fn test_ipv6_host_is_bracketed() {
        let cfg = ServerConfig::new("::1", 8080, false);
        assert_eq!(cfg.bind_addr, "[::1]:8080");
        assert!(cfg.socket_addr().unwrap().is_ipv6());
    }

    #[test]
    fn test_hostname_is_not_a_socket_addr() {
        let cfg = ServerConfig::new("localhost", 8080, true);
        let err = cfg.socket_addr().unwrap_err().to_string();
        assert!(err.contains("Invalid bind address"), "got: {err}");
    }

    #[test]
    fn test_docs_default_on_when_omitted() {
        let cfg: ServerConfig = serde_json::from_str(r#"{"bind_addr":"127.0.0.1:1"}"#).unwrap();
        assert!(cfg.enable_docs);
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let res = serde_json::from_str::<ServerConfig>(r#"{"bind_addr":"x","timezone":"UTC"}"#);
        assert!(res.is_err());
    }
}

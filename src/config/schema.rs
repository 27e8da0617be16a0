//! Configuration schema definitions.

/// Host bound when `bind_host` is empty: every IPv4 interface.
pub const ALL_INTERFACES: &str = "0.0.0.0";

/// Listener settings for the stub API server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Host or IP to bind (e.g., "127.0.0.1"). Empty means all interfaces.
    pub bind_host: String,

    /// TCP port to bind.
    pub port: u16,
}

impl ServerConfig {
    /// Address string accepted by `TcpListener::bind`.
    pub fn bind_address(&self) -> String {
        let host = if self.bind_host.is_empty() {
            ALL_INTERFACES
        } else {
            self.bind_host.as_str()
        };
        format!("{host}:{}", self.port)
    }

    /// URL announced at startup, built from the configured host as given.
    pub fn listen_url(&self) -> String {
        format!("http://{}:{}", self.bind_host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.bind_address(), "127.0.0.1:8080");
        assert_eq!(config.listen_url(), "http://127.0.0.1:8080");
    }

    #[test]
    fn test_empty_host_binds_all_interfaces() {
        let config = ServerConfig {
            bind_host: String::new(),
            port: 8080,
        };
        assert_eq!(config.bind_address(), "0.0.0.0:8080");
        assert_eq!(config.listen_url(), "http://:8080");
    }
}

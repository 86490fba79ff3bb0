//! Server configuration and shared TLS certificate material

use serde::{Deserialize, Serialize};

use crate::error::ConfigResult;
use crate::validation::Validatable;

/// TLS certificate material, carried opaquely for the components that
/// terminate or originate TLS
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TlsCerts {
    /// Path to the private key file
    pub key_file: String,

    /// Path to the certificate file
    pub cert_file: String,

    /// Path to the CA certificate file
    pub ca_file: String,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Listen port
    #[serde(default = "default_port")]
    pub port: u16,

    /// TLS material for the server listener
    #[serde(default)]
    pub tls: TlsCerts,

    /// Addresses of every node in this deployment
    #[serde(default)]
    pub node_addrs: Vec<String>,

    /// Index of this node within `node_addrs`
    #[serde(default)]
    pub node_index: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            tls: TlsCerts::default(),
            node_addrs: Vec::new(),
            node_index: 0,
        }
    }
}

impl Validatable for ServerConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.node_index >= self.node_addrs.len() {
            return Err(self.validation_error("node_index out of range"));
        }

        // Ports 1-1023 are typically reserved for system services
        if (1..=1023).contains(&self.port) {
            log::warn!("server port {} is in the reserved range (1-1023)", self.port);
        }

        Ok(())
    }

    fn domain_name(&self) -> &'static str {
        "server"
    }
}

// Default value functions
fn default_port() -> u16 {
    8080
}

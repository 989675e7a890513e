//! HTTP listener settings and the admin identity.

use crate::config::parse_var;
use crate::errors::Result;
use std::net::{Ipv4Addr, SocketAddr};

/// Port used when `PORT` is unset
pub const DEFAULT_PORT: u16 = 3000;

/// Admin id used when `ADMIN_ID` is unset
pub const DEFAULT_ADMIN_ID: i64 = 123_456_789;

/// Listener and admin settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// TCP port, bound on all interfaces
    pub port: u16,
    /// The only account id allowed to call admin routes
    pub admin_id: i64,
}

impl ServerConfig {
    /// Reads `PORT` and `ADMIN_ID`.
    pub fn from_lookup<F>(lookup: &F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            port: parse_var(lookup, "PORT", DEFAULT_PORT)?,
            admin_id: parse_var(lookup, "ADMIN_ID", DEFAULT_ADMIN_ID)?,
        })
    }

    /// Address the listener binds to
    #[must_use]
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::config::tests::lookup_from;

    #[test]
    fn test_reads_port_and_admin() {
        let lookup = lookup_from(&[("PORT", "8080"), ("ADMIN_ID", "42")]);
        let config = ServerConfig::from_lookup(&lookup).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.admin_id, 42);
        assert_eq!(config.listen_addr().to_string(), "0.0.0.0:8080");
    }

    #[test]
    fn test_rejects_non_numeric_admin() {
        let lookup = lookup_from(&[("ADMIN_ID", "root")]);
        assert!(ServerConfig::from_lookup(&lookup).is_err());
    }
}

//! `[serve]` section configuration.
//!
//! Where `folio serve` listens. The interface is parsed when the config is
//! loaded, so a typo fails before the server starts.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};

/// `[serve]` section in folio.toml.
///
/// # Example
/// ```toml
/// [serve]
/// interface = "0.0.0.0"   # reachable from the LAN, e.g. to review on a phone
/// port = 5277             # next free port is tried when taken
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct ServeConfig {
    /// Address to listen on; loopback unless set.
    #[serde(default = "defaults::serve::interface")]
    #[educe(Default = defaults::serve::interface())]
    pub interface: IpAddr,

    /// First port tried.
    #[serde(default = "defaults::serve::port")]
    #[educe(Default = defaults::serve::port())]
    pub port: u16,
}

impl ServeConfig {
    pub const fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.interface, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;
    use std::net::{Ipv4Addr, Ipv6Addr};

    #[test]
    fn test_serve_listens_on_loopback_by_default() {
        let config: SiteConfig = toml::from_str("").unwrap();

        assert_eq!(config.serve.interface, Ipv4Addr::LOCALHOST);
        assert_eq!(config.serve.addr().to_string(), "127.0.0.1:5277");
    }

    #[test]
    fn test_serve_accepts_ipv6() {
        let config: SiteConfig = toml::from_str("[serve]\ninterface = \"::\"\nport = 8080").unwrap();

        assert_eq!(config.serve.interface, Ipv6Addr::UNSPECIFIED);
        assert_eq!(config.serve.addr().port(), 8080);
    }

    #[test]
    fn test_serve_rejects_hostname_interface() {
        let result: Result<SiteConfig, _> = toml::from_str("[serve]\ninterface = \"localhost\"");
        assert!(result.is_err());
    }
}

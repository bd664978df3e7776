//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

pub fn r#false() -> bool {
    false
}

// ============================================================================
// [base] Section Defaults
// ============================================================================

pub mod base {
    pub fn title() -> String {
        "Portfolio".into()
    }

    pub fn url() -> Option<String> {
        None
    }
}

// ============================================================================
// [content] Section Defaults
// ============================================================================

pub mod content {
    use std::path::PathBuf;

    pub fn dir() -> PathBuf {
        "content".into()
    }

    pub fn extension() -> String {
        "mdx".into()
    }

    pub fn ignore_prefix() -> String {
        "_".into()
    }
}

// ============================================================================
// [auth] Section Defaults
// ============================================================================

pub mod auth {
    pub fn cookie_prefix() -> String {
        "work_auth_".into()
    }

    pub fn cookie_max_age_days() -> u32 {
        7
    }

    pub fn secure() -> Option<bool> {
        None
    }
}

// ============================================================================
// [serve] Section Defaults
// ============================================================================

pub mod serve {
    use std::net::{IpAddr, Ipv4Addr};

    pub fn interface() -> IpAddr {
        IpAddr::V4(Ipv4Addr::LOCALHOST)
    }

    pub fn port() -> u16 {
        5277
    }
}

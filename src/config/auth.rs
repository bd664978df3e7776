//! `[auth]` section configuration.
//!
//! Cookie settings for password-protected work items. Password hashes are
//! never configured here; they come from `WORK_*_PASSWORD` environment
//! variables or from the item's own frontmatter.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[auth]` section in folio.toml.
///
/// # Example
/// ```toml
/// [auth]
/// cookie_prefix = "work_auth_"   # cookie name is prefix + slug
/// cookie_max_age_days = 7
/// secure = true                  # default: follows [base].production
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct AuthConfig {
    /// Prefix shared by every auth cookie.
    #[serde(default = "defaults::auth::cookie_prefix")]
    #[educe(Default = defaults::auth::cookie_prefix())]
    pub cookie_prefix: String,

    /// Lifetime of an unlock, in days.
    #[serde(default = "defaults::auth::cookie_max_age_days")]
    #[educe(Default = defaults::auth::cookie_max_age_days())]
    pub cookie_max_age_days: u32,

    /// Explicit `Secure` flag; `None` follows `[base].production`.
    #[serde(default = "defaults::auth::secure")]
    #[educe(Default = defaults::auth::secure())]
    pub secure: Option<bool>,
}

impl AuthConfig {
    /// Cookie `Max-Age` in seconds.
    pub const fn max_age_secs(&self) -> u64 {
        self.cookie_max_age_days as u64 * 24 * 60 * 60
    }
}

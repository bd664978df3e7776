//! `[base]` section configuration.
//!
//! Contains basic site information.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[base]` section in folio.toml - basic site metadata.
///
/// # Example
/// ```toml
/// [base]
/// title = "Jane Doe - Product Designer"
/// url = "https://janedoe.design"
/// production = true
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct BaseConfig {
    /// Site title, reported by `GET /api`.
    #[serde(default = "defaults::base::title")]
    #[educe(Default = defaults::base::title())]
    pub title: String,

    /// Canonical base URL of the deployed site, reported by `GET /api`.
    #[serde(default = "defaults::base::url")]
    #[educe(Default = defaults::base::url())]
    pub url: Option<String>,

    /// Production-like deployment. Auth cookies get the `Secure` flag
    /// unless `[auth].secure` says otherwise.
    #[serde(default = "defaults::r#false")]
    #[educe(Default = false)]
    pub production: bool,
}

//! Password protection for work items.
//!
//! # Flow
//!
//! ```text
//! GET  /api/work/products/ocean     ──► access_state ──► Locked ──► 401 + prompt
//! POST /api/work/products/ocean/unlock
//!        password ──► validate_password ──► set_auth_cookie ──► 200
//! GET  /api/work/products/ocean     ──► access_state ──► Unlocked ──► 200 + body
//! ```
//!
//! Only `locked: true` items are gated. The unlock is remembered in a cookie
//! per item; see [`cookie`].

pub mod cookie;
mod gate;
pub mod password;
mod secrets;

pub use cookie::{
    AUTH_SENTINEL, CookieJar, CookieOptions, RequestCookies, SetCookie, clear_all_auth_cookies,
    clear_auth_cookie, is_authenticated, set_auth_cookie,
};
pub use gate::{
    AccessState, AuthResult, Gate, INCORRECT_PASSWORD_MESSAGE, INTERNAL_ERROR_MESSAGE,
    NOT_FOUND_MESSAGE,
};
pub use password::{
    CredentialSource, GLOBAL_PASSWORD_KEY, expected_hash, hash_password, password_env_key,
    requires_password, validate_password,
};
pub use secrets::{EnvSecrets, SecretSource, StaticSecrets};

use crate::{
    config::cfg,
    content::{ContentItem, Lockable, Site},
};

/// [`Gate::authenticate`] with the global config and environment secrets.
pub fn authenticate(
    site: &Site,
    jar: &mut impl CookieJar,
    sub_type: &str,
    slug: &str,
    password: &str,
) -> AuthResult {
    Gate::from_config(&cfg()).authenticate(site, jar, sub_type, slug, password)
}

/// [`Gate::access_state`] with the global config.
pub fn access_state<F: Lockable>(item: &ContentItem<F>, jar: &impl CookieJar) -> AccessState {
    Gate::from_config(&cfg()).access_state(item, jar)
}

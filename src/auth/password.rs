//! Password checks for locked work items.
//!
//! The expected credential is resolved when a password is checked, from the
//! first tier that yields a non-empty value:
//!
//! | Tier | Source                               | Stored as       |
//! |------|--------------------------------------|-----------------|
//! | 1    | `password` in the item's frontmatter | plain text      |
//! | 2    | `WORK_{SLUG}_PASSWORD`               | SHA-256 hex     |
//! | 3    | `WORK_GLOBAL_PASSWORD`               | SHA-256 hex     |
//!
//! A locked item with no credential in any tier is open to everyone.

use sha2::{Digest, Sha256};

use super::secrets::SecretSource;
use crate::content::{ContentItem, Lockable, taxonomy::slug_constant_key};

/// Variable holding the hash shared by every locked item without its own.
pub const GLOBAL_PASSWORD_KEY: &str = "WORK_GLOBAL_PASSWORD";

/// Where the expected hash of a locked item came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialSource {
    Frontmatter,
    ItemEnv,
    GlobalEnv,
}

/// Environment variable holding the hash for one item.
///
/// `"ocean"` → `WORK_OCEAN_PASSWORD`, `"side-project"` → `WORK_SIDE_PROJECT_PASSWORD`.
pub fn password_env_key(slug: &str) -> String {
    format!("WORK_{}_PASSWORD", slug_constant_key(slug))
}

/// Lowercase hex SHA-256 of a password.
pub fn hash_password(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}

pub fn requires_password<F: Lockable>(item: &ContentItem<F>) -> bool {
    item.frontmatter.locked()
}

/// The hash a supplied password must match, with the tier that provided it.
pub fn expected_hash<F, S>(
    item: &ContentItem<F>,
    secrets: &S,
) -> Option<(String, CredentialSource)>
where
    F: Lockable,
    S: SecretSource + ?Sized,
{
    if let Some(password) = item.frontmatter.password().filter(|p| !p.is_empty()) {
        return Some((hash_password(password), CredentialSource::Frontmatter));
    }

    let from_env = |key: &str| {
        secrets
            .get(key)
            .map(|value| value.trim().to_owned())
            .filter(|value| !value.is_empty())
    };

    if let Some(hash) = from_env(&password_env_key(&item.slug)) {
        return Some((hash, CredentialSource::ItemEnv));
    }
    from_env(GLOBAL_PASSWORD_KEY).map(|hash| (hash, CredentialSource::GlobalEnv))
}

/// Whether `supplied` unlocks `item`.
///
/// Unlocked items, and locked items with no configured credential, accept
/// any password.
pub fn validate_password<F, S>(item: &ContentItem<F>, supplied: &str, secrets: &S) -> bool
where
    F: Lockable,
    S: SecretSource + ?Sized,
{
    if !requires_password(item) {
        return true;
    }
    let Some((expected, _)) = expected_hash(item, secrets) else {
        return true;
    };
    constant_time_compare(&hash_password(supplied), &expected)
}

fn constant_time_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut result = 0u8;
    for (x, y) in a.bytes().zip(b.bytes()) {
        result |= x ^ y;
    }
    result == 0
}

//! The unlock flow tying passwords, cookies and content together.

use serde::Serialize;

use super::{
    cookie::{CookieJar, CookieOptions, is_authenticated, set_auth_cookie},
    password::{requires_password, validate_password},
    secrets::{EnvSecrets, SecretSource},
};
use crate::{
    config::SiteConfig,
    content::{ContentItem, Lockable, Site},
    log,
    logger::log_error,
};

pub const NOT_FOUND_MESSAGE: &str = "Work item not found";
pub const INCORRECT_PASSWORD_MESSAGE: &str = "Incorrect password. Please try again.";
pub const INTERNAL_ERROR_MESSAGE: &str = "An error occurred. Please try again.";

/// Outcome of an unlock attempt, as shown to the visitor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AuthResult {
    pub const fn ok() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    pub fn failed(message: &str) -> Self {
        Self {
            success: false,
            error: Some(message.to_owned()),
        }
    }
}

/// Whether an item may be rendered for the current visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessState {
    /// Not locked; always rendered
    Unprotected,
    /// Locked and not unlocked by this visitor
    Locked,
    /// Locked, with a valid unlock cookie
    Unlocked,
}

impl AccessState {
    pub const fn can_view(self) -> bool {
        !matches!(self, Self::Locked)
    }
}

/// Password gate for locked work items.
#[derive(Debug, Clone)]
pub struct Gate<S = EnvSecrets> {
    pub options: CookieOptions,
    pub secrets: S,
}

impl Gate<EnvSecrets> {
    /// Gate reading hashes from the process environment.
    pub fn from_config(config: &SiteConfig) -> Self {
        Self::new(CookieOptions::from_config(config), EnvSecrets)
    }
}

impl<S: SecretSource> Gate<S> {
    pub const fn new(options: CookieOptions, secrets: S) -> Self {
        Self { options, secrets }
    }

    pub fn access_state<F: Lockable>(
        &self,
        item: &ContentItem<F>,
        jar: &impl CookieJar,
    ) -> AccessState {
        if !requires_password(item) {
            AccessState::Unprotected
        } else if is_authenticated(jar, &self.options, &item.slug) {
            AccessState::Unlocked
        } else {
            AccessState::Locked
        }
    }

    /// Check `password` for a work item and, when it matches, set its cookie.
    ///
    /// The error message never says which credential tier was consulted.
    pub fn authenticate(
        &self,
        site: &Site,
        jar: &mut impl CookieJar,
        sub_type: &str,
        slug: &str,
        password: &str,
    ) -> AuthResult {
        let item = match site.work_item(sub_type, slug) {
            Ok(Some(item)) => item,
            Ok(None) => return AuthResult::failed(NOT_FOUND_MESSAGE),
            Err(err) => {
                log_error(&format!("unlocking {sub_type}/{slug}"), &err);
                return AuthResult::failed(INTERNAL_ERROR_MESSAGE);
            }
        };

        if !validate_password(&item.item, password, &self.secrets) {
            log!("auth"; "rejected password for {sub_type}/{slug}");
            return AuthResult::failed(INCORRECT_PASSWORD_MESSAGE);
        }

        set_auth_cookie(jar, &self.options, slug);
        log!("auth"; "unlocked {sub_type}/{slug}");
        AuthResult::ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        auth::{RequestCookies, StaticSecrets, hash_password},
        content::Repository,
    };
    use std::{fs, path::Path};
    use tempfile::TempDir;

    fn write(dir: &Path, rel: &str, text: &str) {
        let file = dir.join(rel);
        fs::create_dir_all(file.parent().unwrap()).unwrap();
        fs::write(file, text).unwrap();
    }

    fn fixture() -> (TempDir, Site) {
        let dir = TempDir::new().unwrap();
        write(
            dir.path(),
            "work/products/ocean.mdx",
            "---\ntitle: Ocean\nlocked: true\n---\nSecret body",
        );
        write(dir.path(), "work/products/aqua.mdx", "---\ntitle: Aqua\n---\nPublic");
        write(dir.path(), "work/products/broken.mdx", "---\ntitle: [oops\n---\n");
        let site = Site::new(Repository::new(dir.path()));
        (dir, site)
    }

    fn gate() -> Gate<StaticSecrets> {
        Gate::new(
            CookieOptions::default(),
            StaticSecrets::new().with("WORK_OCEAN_PASSWORD", hash_password("tide")),
        )
    }

    #[test]
    fn test_authenticate_success_sets_cookie() {
        let (_dir, site) = fixture();
        let gate = gate();
        let mut jar = RequestCookies::new();

        let result = gate.authenticate(&site, &mut jar, "products", "ocean", "tide");

        assert_eq!(result, AuthResult::ok());
        assert!(is_authenticated(&jar, &gate.options, "ocean"));
        assert_eq!(jar.outgoing().len(), 1);
    }

    #[test]
    fn test_authenticate_wrong_password() {
        let (_dir, site) = fixture();
        let mut jar = RequestCookies::new();

        let result = gate().authenticate(&site, &mut jar, "products", "ocean", "wave");

        assert_eq!(result, AuthResult::failed(INCORRECT_PASSWORD_MESSAGE));
        assert!(jar.outgoing().is_empty());
    }

    #[test]
    fn test_authenticate_unknown_item() {
        let (_dir, site) = fixture();
        let mut jar = RequestCookies::new();

        for (sub, slug) in [("products", "river"), ("zines", "ocean")] {
            let result = gate().authenticate(&site, &mut jar, sub, slug, "tide");
            assert_eq!(result.error.as_deref(), Some(NOT_FOUND_MESSAGE));
        }
    }

    #[test]
    fn test_authenticate_repository_failure() {
        let (_dir, site) = fixture();
        let mut jar = RequestCookies::new();

        let result = gate().authenticate(&site, &mut jar, "products", "broken", "tide");
        assert_eq!(result, AuthResult::failed(INTERNAL_ERROR_MESSAGE));
    }

    #[test]
    fn test_access_state_transitions() {
        let (_dir, site) = fixture();
        let gate = gate();
        let mut jar = RequestCookies::new();

        let aqua = site.work_item("products", "aqua").unwrap().unwrap();
        assert_eq!(gate.access_state(&aqua.item, &jar), AccessState::Unprotected);

        let ocean = site.work_item("products", "ocean").unwrap().unwrap();
        assert_eq!(gate.access_state(&ocean.item, &jar), AccessState::Locked);
        assert!(!AccessState::Locked.can_view());

        gate.authenticate(&site, &mut jar, "products", "ocean", "tide");
        assert_eq!(gate.access_state(&ocean.item, &jar), AccessState::Unlocked);
    }

    #[test]
    fn test_auth_result_json() {
        let ok = serde_json::to_string(&AuthResult::ok()).unwrap();
        assert_eq!(ok, r#"{"success":true}"#);

        let failed = serde_json::to_value(AuthResult::failed(NOT_FOUND_MESSAGE)).unwrap();
        assert_eq!(failed["error"], NOT_FOUND_MESSAGE);
    }
}

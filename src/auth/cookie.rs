//! Unlock cookies.
//!
//! An unlocked work item is remembered by one cookie per item, named
//! `{prefix}{slug}` and holding the [`AUTH_SENTINEL`] value. The cookie is the
//! whole session: there is no server-side store, and presence of the sentinel
//! is all [`is_authenticated`] checks.
//!
//! ```text
//! Set-Cookie: work_auth_ocean=authenticated; Path=/; Max-Age=604800; HttpOnly; SameSite=Strict; Secure
//! ```

use std::fmt;

use crate::config::SiteConfig;

/// Value of an auth cookie that grants access.
pub const AUTH_SENTINEL: &str = "authenticated";

/// Naming and lifetime of auth cookies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookieOptions {
    pub prefix: String,
    pub max_age_secs: u64,
    pub secure: bool,
}

impl CookieOptions {
    pub fn from_config(config: &SiteConfig) -> Self {
        Self {
            prefix: config.auth.cookie_prefix.clone(),
            max_age_secs: config.auth.max_age_secs(),
            secure: config.secure_cookies(),
        }
    }

    pub fn cookie_name(&self, slug: &str) -> String {
        format!("{}{slug}", self.prefix)
    }
}

impl Default for CookieOptions {
    fn default() -> Self {
        Self::from_config(&SiteConfig::default())
    }
}

/// A cookie to send back in a `Set-Cookie` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetCookie {
    pub name: String,
    pub value: String,
    /// `0` removes the cookie
    pub max_age: u64,
    pub secure: bool,
}

impl SetCookie {
    pub fn removal(name: impl Into<String>, secure: bool) -> Self {
        Self {
            name: name.into(),
            value: String::new(),
            max_age: 0,
            secure,
        }
    }

    pub const fn is_removal(&self) -> bool {
        self.max_age == 0
    }
}

impl fmt::Display for SetCookie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}={}; Path=/; Max-Age={}; HttpOnly; SameSite=Strict",
            self.name, self.value, self.max_age
        )?;
        if self.is_removal() {
            f.write_str("; Expires=Thu, 01 Jan 1970 00:00:00 GMT")?;
        }
        if self.secure {
            f.write_str("; Secure")?;
        }
        Ok(())
    }
}

/// Cookies visible to a request, plus the ones it sets.
pub trait CookieJar {
    fn get(&self, name: &str) -> Option<&str>;
    /// Names of every cookie currently in the jar.
    fn names(&self) -> Vec<String>;
    fn set(&mut self, cookie: SetCookie);
}

/// Cookies of one HTTP request.
///
/// Starts from the request's `Cookie` header. Every [`CookieJar::set`] updates
/// what later reads see and is recorded for the response.
#[derive(Debug, Clone, Default)]
pub struct RequestCookies {
    current: Vec<(String, String)>,
    outgoing: Vec<SetCookie>,
}

impl RequestCookies {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a `Cookie` request header (`a=1; b=2`).
    ///
    /// Pairs without `=` are ignored; the first occurrence of a name wins.
    pub fn parse(header: &str) -> Self {
        let mut jar = Self::new();
        for pair in header.split(';') {
            let Some((name, value)) = pair.split_once('=') else {
                continue;
            };
            let name = name.trim();
            if name.is_empty() || jar.get(name).is_some() {
                continue;
            }
            let value = value.trim();
            let value = value
                .strip_prefix('"')
                .and_then(|v| v.strip_suffix('"'))
                .unwrap_or(value);
            jar.current.push((name.to_owned(), value.to_owned()));
        }
        jar
    }

    /// Cookies set during the request, in order.
    pub fn outgoing(&self) -> &[SetCookie] {
        &self.outgoing
    }

    /// `Set-Cookie` header values for the response.
    pub fn set_cookie_headers(&self) -> impl Iterator<Item = String> + '_ {
        self.outgoing.iter().map(ToString::to_string)
    }
}

impl CookieJar for RequestCookies {
    fn get(&self, name: &str) -> Option<&str> {
        self.current
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    fn names(&self) -> Vec<String> {
        self.current.iter().map(|(n, _)| n.clone()).collect()
    }

    fn set(&mut self, cookie: SetCookie) {
        self.current.retain(|(n, _)| *n != cookie.name);
        if !cookie.is_removal() {
            self.current.push((cookie.name.clone(), cookie.value.clone()));
        }
        self.outgoing.retain(|c| c.name != cookie.name);
        self.outgoing.push(cookie);
    }
}

/// Remember that `slug` was unlocked.
pub fn set_auth_cookie(jar: &mut impl CookieJar, options: &CookieOptions, slug: &str) {
    jar.set(SetCookie {
        name: options.cookie_name(slug),
        value: AUTH_SENTINEL.to_owned(),
        max_age: options.max_age_secs,
        secure: options.secure,
    });
}

/// Whether the jar carries a valid unlock for `slug`.
pub fn is_authenticated(jar: &impl CookieJar, options: &CookieOptions, slug: &str) -> bool {
    jar.get(&options.cookie_name(slug)) == Some(AUTH_SENTINEL)
}

pub fn clear_auth_cookie(jar: &mut impl CookieJar, options: &CookieOptions, slug: &str) {
    jar.set(SetCookie::removal(options.cookie_name(slug), options.secure));
}

/// Remove every auth cookie in the jar. Returns how many were removed.
pub fn clear_all_auth_cookies(jar: &mut impl CookieJar, options: &CookieOptions) -> usize {
    let names: Vec<_> = jar
        .names()
        .into_iter()
        .filter(|name| name.starts_with(&options.prefix))
        .collect();
    for name in &names {
        jar.set(SetCookie::removal(name.clone(), options.secure));
    }
    names.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(secure: bool) -> CookieOptions {
        CookieOptions {
            prefix: "work_auth_".into(),
            max_age_secs: 7 * 24 * 60 * 60,
            secure,
        }
    }

    #[test]
    fn test_default_options() {
        let options = CookieOptions::default();
        assert_eq!(options.cookie_name("ocean"), "work_auth_ocean");
        assert_eq!(options.max_age_secs, 604_800);
        assert!(!options.secure);
    }

    #[test]
    fn test_set_cookie_header() {
        let mut jar = RequestCookies::new();
        set_auth_cookie(&mut jar, &options(false), "ocean");

        let headers: Vec<_> = jar.set_cookie_headers().collect();
        assert_eq!(
            headers,
            ["work_auth_ocean=authenticated; Path=/; Max-Age=604800; HttpOnly; SameSite=Strict"]
        );
    }

    #[test]
    fn test_secure_flag() {
        let mut jar = RequestCookies::new();
        set_auth_cookie(&mut jar, &options(true), "ocean");
        assert!(jar.outgoing()[0].to_string().ends_with("; Secure"));
    }

    #[test]
    fn test_parse_cookie_header() {
        let jar = RequestCookies::parse("theme=dark; work_auth_ocean=authenticated;broken; q=\"x\"");
        assert_eq!(jar.get("theme"), Some("dark"));
        assert_eq!(jar.get("work_auth_ocean"), Some("authenticated"));
        assert_eq!(jar.get("q"), Some("x"));
        assert_eq!(jar.get("broken"), None);
        assert_eq!(jar.names(), ["theme", "work_auth_ocean", "q"]);
    }

    #[test]
    fn test_first_duplicate_wins() {
        let jar = RequestCookies::parse("a=1; a=2");
        assert_eq!(jar.get("a"), Some("1"));
    }

    #[test]
    fn test_is_authenticated_needs_sentinel() {
        let options = options(false);
        let jar = RequestCookies::parse("work_auth_ocean=authenticated; work_auth_aqua=yes");

        assert!(is_authenticated(&jar, &options, "ocean"));
        assert!(!is_authenticated(&jar, &options, "aqua"));
        assert!(!is_authenticated(&jar, &options, "river"));
    }

    #[test]
    fn test_set_then_read_within_request() {
        let options = options(false);
        let mut jar = RequestCookies::new();

        assert!(!is_authenticated(&jar, &options, "ocean"));
        set_auth_cookie(&mut jar, &options, "ocean");
        assert!(is_authenticated(&jar, &options, "ocean"));
    }

    #[test]
    fn test_clear_auth_cookie() {
        let options = options(false);
        let mut jar = RequestCookies::parse("work_auth_ocean=authenticated");

        clear_auth_cookie(&mut jar, &options, "ocean");

        assert!(!is_authenticated(&jar, &options, "ocean"));
        let header = jar.outgoing()[0].to_string();
        assert!(header.starts_with("work_auth_ocean=; Path=/; Max-Age=0;"));
    }

    #[test]
    fn test_clear_all_auth_cookies_only_touches_prefix() {
        let options = options(false);
        let mut jar =
            RequestCookies::parse("work_auth_ocean=authenticated; theme=dark; work_auth_aqua=authenticated");

        assert_eq!(clear_all_auth_cookies(&mut jar, &options), 2);
        assert_eq!(jar.names(), ["theme"]);

        let removed: Vec<_> = jar.outgoing().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(removed, ["work_auth_ocean", "work_auth_aqua"]);
        assert!(jar.outgoing().iter().all(SetCookie::is_removal));
    }

    #[test]
    fn test_later_set_replaces_earlier_header() {
        let options = options(false);
        let mut jar = RequestCookies::new();

        set_auth_cookie(&mut jar, &options, "ocean");
        clear_auth_cookie(&mut jar, &options, "ocean");

        assert_eq!(jar.outgoing().len(), 1);
        assert!(jar.outgoing()[0].is_removal());
    }
}

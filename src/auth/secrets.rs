//! Where pre-hashed passwords come from.

use rustc_hash::FxHashMap;

/// A source of deployment secrets, looked up by variable name.
pub trait SecretSource {
    fn get(&self, key: &str) -> Option<String>;
}

/// Secrets from the process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvSecrets;

impl SecretSource for EnvSecrets {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// Fixed secrets, for tests and tooling.
#[derive(Debug, Clone, Default)]
pub struct StaticSecrets(FxHashMap<String, String>);

impl StaticSecrets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }
}

impl SecretSource for StaticSecrets {
    fn get(&self, key: &str) -> Option<String> {
        self.0.get(key).cloned()
    }
}

impl<S: SecretSource + ?Sized> SecretSource for &S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
}

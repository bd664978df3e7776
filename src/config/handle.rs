//! Global config handle.
//!
//! Uses `arc-swap` for lock-free reads. The config is loaded once in `main`
//! and read from every request handler through [`cfg`].
//!
//! Only the configuration is global. Content is never cached here; see
//! `content::cache` for the per-request cache.

use super::SiteConfig;
use arc_swap::ArcSwap;
use std::sync::{Arc, LazyLock};

/// Global config storage.
///
/// Initialized with default config, then replaced with loaded config in main.
pub static CONFIG: LazyLock<ArcSwap<SiteConfig>> =
    LazyLock::new(|| ArcSwap::from_pointee(SiteConfig::default()));

/// Get current config as `Arc<SiteConfig>`.
///
/// Lock-free; the `Arc` auto-derefs to `&SiteConfig`.
#[inline]
pub fn cfg() -> Arc<SiteConfig> {
    CONFIG.load_full()
}

/// Initialize global config (called once at startup).
#[inline]
pub fn init_config(config: SiteConfig) {
    CONFIG.store(Arc::new(config));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_config_replaces_default() {
        let mut config = SiteConfig::default();
        config.base.title = "Replaced".into();
        init_config(config);

        assert_eq!(cfg().base.title, "Replaced");
    }
}

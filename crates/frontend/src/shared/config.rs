//! Application configuration for the catalog view.
//!
//! Values are compiled in; the catalog endpoint can be overridden at build time:
//!
//! ```sh
//! CATALOG_URL=http://localhost:3000/api/products trunk serve
//! ```

use leptos::prelude::*;

/// Default catalog endpoint.
pub const DEFAULT_CATALOG_URL: &str = "https://api.storerestapi.com/products";

/// Bounds for the filter debounce window (ms).
pub const MIN_DEBOUNCE_MS: u32 = 500;
pub const MAX_DEBOUNCE_MS: u32 = 1000;

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    /// Catalog endpoint returning `{ "data": Product[] }`
    pub catalog_url: String,
    /// Quiet period before a filter edit is committed
    pub filter_debounce_ms: u32,
    pub page_size_options: Vec<usize>,
    pub default_page_size: usize,
    /// Cap on autocomplete entries per text filter
    pub max_suggestions: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog_url: option_env!("CATALOG_URL")
                .unwrap_or(DEFAULT_CATALOG_URL)
                .to_string(),
            filter_debounce_ms: MIN_DEBOUNCE_MS,
            page_size_options: vec![10, 20, 30, 40, 50],
            default_page_size: 10,
            max_suggestions: 5000,
        }
    }
}

impl AppConfig {
    /// Debounce window clamped into the supported range
    pub fn debounce_ms(&self) -> u32 {
        clamp_debounce_ms(self.filter_debounce_ms)
    }
}

/// Keeps a debounce window within `MIN_DEBOUNCE_MS..=MAX_DEBOUNCE_MS`.
pub fn clamp_debounce_ms(ms: u32) -> u32 {
    ms.clamp(MIN_DEBOUNCE_MS, MAX_DEBOUNCE_MS)
}

/// Config from context, or the defaults when no provider is mounted.
pub fn use_app_config() -> AppConfig {
    use_context::<AppConfig>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.page_size_options, vec![10, 20, 30, 40, 50]);
        assert_eq!(cfg.default_page_size, 10);
        assert_eq!(cfg.max_suggestions, 5000);
        assert_eq!(cfg.debounce_ms(), 500);
    }

    #[test]
    fn test_debounce_is_clamped() {
        let mut cfg = AppConfig::default();
        cfg.filter_debounce_ms = 50;
        assert_eq!(cfg.debounce_ms(), 500);
        cfg.filter_debounce_ms = 750;
        assert_eq!(cfg.debounce_ms(), 750);
        cfg.filter_debounce_ms = 5000;
        assert_eq!(cfg.debounce_ms(), 1000);
    }

    #[test]
    fn test_clamp_debounce_ms() {
        assert_eq!(clamp_debounce_ms(0), MIN_DEBOUNCE_MS);
        assert_eq!(clamp_debounce_ms(800), 800);
        assert_eq!(clamp_debounce_ms(u32::MAX), MAX_DEBOUNCE_MS);
        assert!(clamp_debounce_ms(u32::MAX) as i32 > 0);
    }
}

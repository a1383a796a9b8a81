//! Backend base URL discovery.
//!
//! The host process renders the configured base URL into a `<meta>` tag. In
//! the browser we read it back at hydration time; when the tag is missing or
//! blank we fall back to the build-time `TRIAGE_API_BASE_URL`, then to the
//! library default. SSR paths never read the DOM.

#[cfg(test)]
#[path = "api_base_test.rs"]
mod api_base_test;

use triage::{ApiConfig, DEFAULT_API_BASE_URL};

/// `name` of the `<meta>` tag carrying the backend base URL.
pub const API_BASE_META: &str = "triage-api-base";

/// Pick the base URL from the meta tag value, the build-time override, or the default.
pub fn resolve_api_config(meta_value: Option<&str>) -> ApiConfig {
    match meta_value.map(str::trim) {
        Some(value) if !value.is_empty() => ApiConfig::new(value),
        _ => ApiConfig::new(option_env!("TRIAGE_API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL)),
    }
}

/// API config for the running page.
pub fn current_api_config() -> ApiConfig {
    #[cfg(feature = "hydrate")]
    {
        resolve_api_config(read_meta_tag().as_deref())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        resolve_api_config(None)
    }
}

#[cfg(feature = "hydrate")]
fn read_meta_tag() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let selector = format!("meta[name=\"{API_BASE_META}\"]");
    let element = document.query_selector(&selector).ok()??;
    element.get_attribute("content")
}

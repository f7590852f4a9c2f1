//! Client configuration

const DEFAULT_API_BASE: &str = "http://localhost:3000";
const DEFAULT_EXPORT_FILENAME: &str = "inventory.csv";

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Origin the `/api/...` paths are resolved against
    pub api_base: String,
    /// File name offered for the CSV download
    pub export_filename: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::with_api_base(DEFAULT_API_BASE)
    }
}

impl ClientConfig {
    pub fn with_api_base(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
            export_filename: DEFAULT_EXPORT_FILENAME.to_string(),
        }
    }

    /// Build-time `INVENTORY_API_BASE` wins, then the page origin.
    pub fn from_window() -> Self {
        if let Some(base) = option_env!("INVENTORY_API_BASE") {
            return Self::with_api_base(base);
        }
        Self::with_api_base(page_origin())
    }

    /// Join an absolute API path onto the base
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_base.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[cfg(target_arch = "wasm32")]
fn page_origin() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
}

#[cfg(not(target_arch = "wasm32"))]
fn page_origin() -> String {
    DEFAULT_API_BASE.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_join_has_single_slash() {
        let config = ClientConfig::with_api_base("http://host:8080/");
        assert_eq!(config.url("/api/items"), "http://host:8080/api/items");
        let config = ClientConfig::with_api_base("http://host:8080");
        assert_eq!(config.url("api/export"), "http://host:8080/api/export");
    }

    #[test]
    fn test_default_export_filename() {
        assert_eq!(ClientConfig::default().export_filename, "inventory.csv");
    }
}

use std::net::{IpAddr, Ipv4Addr};
use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "MediScan";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default port for the HTTP API.
pub const DEFAULT_PORT: u16 = 5000;

/// Default ceiling for an uploaded prescription image (8 MB).
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 8 * 1024 * 1024;

/// Default base URL of the upstream nutrition database.
pub const DEFAULT_NUTRITION_API_URL: &str = "https://api.calorieninjas.com/v1";

/// Fallback tracing filter when `RUST_LOG` is unset.
pub fn default_log_filter() -> String {
    format!("{}=info,tower_http=info", env!("CARGO_PKG_NAME"))
}

/// Runtime configuration, read once from the environment at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address the HTTP server binds to (`MEDISCAN_BIND`, default 127.0.0.1).
    pub bind_addr: IpAddr,
    /// Port the HTTP server listens on (`MEDISCAN_PORT`, default 5000).
    pub port: u16,
    /// Base URL of the nutrition API (`NUTRITION_API_URL`).
    pub nutrition_api_url: String,
    /// API key for the nutrition API (`NUTRITION_API_KEY`). Empty means the
    /// nutrition endpoint answers 502 on every lookup.
    pub nutrition_api_key: String,
    /// Tesseract traineddata directory (`TESSDATA_DIR`), used when the `ocr`
    /// feature is enabled.
    pub tessdata_dir: PathBuf,
    /// Upload size ceiling in bytes (`MEDISCAN_MAX_UPLOAD_BYTES`).
    pub max_upload_bytes: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
            nutrition_api_url: DEFAULT_NUTRITION_API_URL.to_string(),
            nutrition_api_key: String::new(),
            tessdata_dir: PathBuf::from("/usr/share/tesseract-ocr/5/tessdata"),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

impl AppConfig {
    /// Build configuration from environment variables, falling back to
    /// defaults for anything unset or unparseable.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let bind_addr = std::env::var("MEDISCAN_BIND")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.bind_addr);

        let port = std::env::var("MEDISCAN_PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.port);

        let nutrition_api_url = std::env::var("NUTRITION_API_URL")
            .ok()
            .map(|v| v.trim_end_matches('/').to_string())
            .unwrap_or(defaults.nutrition_api_url);

        let nutrition_api_key =
            std::env::var("NUTRITION_API_KEY").unwrap_or(defaults.nutrition_api_key);

        let tessdata_dir = std::env::var("TESSDATA_DIR")
            .ok()
            .map(PathBuf::from)
            .unwrap_or(defaults.tessdata_dir);

        let max_upload_bytes = std::env::var("MEDISCAN_MAX_UPLOAD_BYTES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.max_upload_bytes);

        Self {
            bind_addr,
            port,
            nutrition_api_url,
            nutrition_api_key,
            tessdata_dir,
            max_upload_bytes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_binds_localhost() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.bind_addr, IpAddr::V4(Ipv4Addr::LOCALHOST));
        assert_eq!(cfg.port, DEFAULT_PORT);
    }

    #[test]
    fn default_nutrition_url_has_no_trailing_slash() {
        assert!(!AppConfig::default().nutrition_api_url.ends_with('/'));
    }

    #[test]
    fn app_name_is_mediscan() {
        assert_eq!(APP_NAME, "MediScan");
    }

    #[test]
    fn log_filter_mentions_crate() {
        assert!(default_log_filter().contains("mediscan"));
    }
}

//! Checkout configuration loaded from environment variables.

/// Configuration for the invoice screen.
///
/// Reads from environment variables:
/// - `POS_API_BASE_URL` — base URL of the remote POS API, also used to
///   resolve product image paths (default:
///   `"https://api.trendybox-dz.com"`)
#[derive(Debug, Clone)]
pub struct CheckoutConfig {
    pub api_base_url: String,
}

impl CheckoutConfig {
    /// Loads configuration from environment variables, falling back to
    /// defaults.
    pub fn from_env() -> Self {
        Self {
            api_base_url: std::env::var("POS_API_BASE_URL")
                .unwrap_or_else(|_| "https://api.trendybox-dz.com".to_string()),
        }
    }

    /// Resolves a catalog image path against the API base URL.
    ///
    /// Paths from the catalog are absolute ("/uploads/...").
    pub fn image_url(&self, path: &str) -> String {
        format!("{}{}", self.api_base_url.trim_end_matches('/'), path)
    }
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            api_base_url: "https://api.trendybox-dz.com".to_string(),
        }
    }
}

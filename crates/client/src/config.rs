use crate::session::KeyLayout;

/// Used when `COURSEHUB_API_BASE_URL` isn't set at build time
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    base_url: String,
    key_layout: KeyLayout,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(option_env!("COURSEHUB_API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL))
    }
}

impl ClientConfig {
    pub fn new<S: AsRef<str>>(base_url: S) -> Self {
        Self {
            base_url: normalize_base_url(base_url.as_ref()),
            key_layout: KeyLayout::default(),
        }
    }

    pub fn with_base_url<S: AsRef<str>>(mut self, base_url: S) -> Self {
        self.base_url = normalize_base_url(base_url.as_ref());
        self
    }

    pub fn with_key_layout(mut self, key_layout: KeyLayout) -> Self {
        self.key_layout = key_layout;
        self
    }

    /// Base url without a trailing `/`, endpoint paths start with one
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn key_layout(&self) -> KeyLayout {
        self.key_layout
    }

    pub fn url(&self, endpoint: &str) -> String {
        format!("{}{endpoint}", self.base_url)
    }
}

fn normalize_base_url(base_url: &str) -> String {
    base_url.trim_end_matches('/').to_string()
}

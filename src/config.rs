use once_cell::sync::Lazy;
use serde::Deserialize;
use wasm_bindgen::JsValue;

pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_PER_PAGE: u32 = 12;

/// Name of the global the hosting page may set to override the defaults:
///
/// ```html
/// <script>
///   window.__PORTAL_CONFIG__ = { api_base_url: "https://clips.example.com", per_page: 24 };
/// </script>
/// ```
const CONFIG_GLOBAL: &str = "__PORTAL_CONFIG__";

static CONFIG: Lazy<Config> = Lazy::new(Config::load);

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub api_base_url: String,
    /// Page size for every video listing request.
    pub per_page: u32,
    pub debug_logs: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            per_page: DEFAULT_PER_PAGE,
            debug_logs: false,
        }
    }
}

/// Shape of the injected global. Every field is optional.
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ConfigOverrides {
    #[serde(default)]
    pub api_base_url: Option<String>,
    #[serde(default)]
    pub per_page: Option<u32>,
    #[serde(default)]
    pub debug_logs: Option<bool>,
}

impl Config {
    fn load() -> Self {
        let overrides = read_injected().unwrap_or_default();
        Self::default().merged(overrides)
    }

    pub fn merged(self, overrides: ConfigOverrides) -> Self {
        let api_base_url = overrides
            .api_base_url
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or(self.api_base_url);
        let per_page = overrides
            .per_page
            .filter(|n| *n > 0)
            .unwrap_or(self.per_page);

        Self {
            api_base_url,
            per_page,
            debug_logs: overrides.debug_logs.unwrap_or(self.debug_logs),
        }
    }
}

fn read_injected() -> Option<ConfigOverrides> {
    let window = web_sys::window()?;
    let raw = js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL)).ok()?;
    if raw.is_undefined() || raw.is_null() {
        return None;
    }
    match serde_wasm_bindgen::from_value::<ConfigOverrides>(raw) {
        Ok(overrides) => Some(overrides),
        Err(e) => {
            gloo::console::warn!(format!("Ignoring malformed {CONFIG_GLOBAL}: {e}"));
            None
        }
    }
}

/// Configuration for this page load.
pub fn config() -> &'static Config {
    &CONFIG
}

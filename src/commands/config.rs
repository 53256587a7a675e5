//! Startup configuration, read once from the environment.

use log::debug;

use crate::api::DEFAULT_API_PREFIX;
use crate::dev_proxy::ProxyConfig;
use crate::http::ClientConfig;
use crate::runtime::Runtime;

/// Backend base URL override.
pub const ENV_API_URL: &str = "AGROEYE_API_URL";
/// Backend route prefix.
pub const ENV_API_PREFIX: &str = "AGROEYE_API_PREFIX";
/// Model service base URL override.
pub const ENV_MODEL_URL: &str = "AGROEYE_MODEL_URL";
/// Dev proxy upstream.
pub const ENV_PROXY_TARGET: &str = "AGROEYE_PROXY_TARGET";
/// Debug logging toggle.
pub const ENV_DEBUG: &str = "AGROEYE_DEBUG";

/// Values given on the command line. They win over the environment.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub api_url: Option<String>,
    pub model_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub backend: ClientConfig,
    pub api_prefix: String,
    pub model: ClientConfig,
    pub proxy: ProxyConfig,
    pub debug: bool,
}

impl Config {
    pub fn load<R: Runtime>(runtime: &R, overrides: Overrides) -> Self {
        let env = |key: &str| {
            runtime
                .env_var(key)
                .ok()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let debug = debug_enabled(runtime);
        let api_url = overrides.api_url.or_else(|| env(ENV_API_URL));
        let model_url = overrides.model_url.or_else(|| env(ENV_MODEL_URL));
        let api_prefix = env(ENV_API_PREFIX).unwrap_or_else(|| DEFAULT_API_PREFIX.to_string());

        let config = Self {
            backend: ClientConfig::backend(api_url),
            api_prefix,
            model: ClientConfig::model(model_url),
            proxy: ProxyConfig::new(env(ENV_PROXY_TARGET), debug),
            debug,
        };

        debug!(
            "Configured backend {} (prefix {}), model service {}",
            config.backend.base_url, config.api_prefix, config.model.base_url
        );
        config
    }
}

/// Whether `AGROEYE_DEBUG` asks for debug output (`true` or `1`).
pub fn debug_enabled<R: Runtime>(runtime: &R) -> bool {
    runtime
        .env_var(ENV_DEBUG)
        .map(|v| matches!(v.trim().to_lowercase().as_str(), "true" | "1"))
        .unwrap_or(false)
}

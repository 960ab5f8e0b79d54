use secrecy::Secret;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;
use std::path::PathBuf;

pub const DEFAULT_OPENROUTER_BASE_URL: &str = "https://openrouter.ai/api/v1";
pub const DEFAULT_MODEL: &str = "openai/gpt-4o-mini";
pub const DEFAULT_SITE_URL: &str = "http://localhost:5173";
pub const DEFAULT_APP_TITLE: &str = "AI Landing Page Generator";
pub const DEFAULT_STATIC_DIR: &str = "landing-service/static";

/// Local dev-server origins that are always allowed to call the API.
pub const DEV_ORIGINS: [&str; 2] = ["http://localhost:5173", "http://127.0.0.1:5173"];

#[derive(Debug, Clone)]
pub struct LandingConfig {
    pub common: core_config::Config,
    pub openrouter: OpenRouterConfig,
    pub cors: CorsConfig,
    pub client: ClientConfig,
}

#[derive(Debug, Clone)]
pub struct OpenRouterConfig {
    pub api_key: Secret<String>,
    /// API root, `/chat/completions` is appended.
    pub base_url: String,
    pub model: String,
    /// Sent as `HTTP-Referer`.
    pub site_url: String,
    /// Sent as `X-Title`.
    pub app_title: String,
}

#[derive(Debug, Clone, Default)]
pub struct CorsConfig {
    /// Extra origin from `CLIENT_ORIGIN`.
    pub client_origin: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Directory holding the static form page.
    pub static_dir: PathBuf,
}

impl LandingConfig {
    /// Load once at startup. Fails when `OPENROUTER_API_KEY` is missing.
    pub fn load() -> Result<Self, AppError> {
        let common = core_config::Config::load()?;
        Self::from_lookup(common, |key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; blank values count as unset.
    pub fn from_lookup<F>(common: core_config::Config, lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let get_or = |key: &str, default: &str| get(key).unwrap_or_else(|| default.to_string());

        let api_key = get("OPENROUTER_API_KEY").ok_or_else(|| {
            AppError::ConfigError(anyhow::anyhow!("OPENROUTER_API_KEY is required but not set"))
        })?;

        Ok(LandingConfig {
            common,
            openrouter: OpenRouterConfig {
                api_key: Secret::new(api_key),
                base_url: get_or("OPENROUTER_BASE_URL", DEFAULT_OPENROUTER_BASE_URL),
                model: get_or("OPENROUTER_MODEL", DEFAULT_MODEL),
                site_url: get_or("OPENROUTER_SITE_URL", DEFAULT_SITE_URL),
                app_title: get_or("OPENROUTER_APP_TITLE", DEFAULT_APP_TITLE),
            },
            cors: CorsConfig {
                client_origin: get("CLIENT_ORIGIN"),
            },
            client: ClientConfig {
                static_dir: PathBuf::from(get_or("CLIENT_STATIC_DIR", DEFAULT_STATIC_DIR)),
            },
        })
    }
}

impl CorsConfig {
    /// The two dev origins plus `CLIENT_ORIGIN`, if it names a concrete origin.
    ///
    /// A `*` value is dropped: it cannot be combined with credentials.
    pub fn allowed_origins(&self) -> Vec<String> {
        let mut origins: Vec<String> = DEV_ORIGINS.iter().map(|o| o.to_string()).collect();

        match self.client_origin.as_deref().map(str::trim) {
            Some("*") => {
                tracing::warn!("CLIENT_ORIGIN='*' ignored; credentialed CORS needs explicit origins")
            }
            Some(origin) if !origins.iter().any(|o| o == origin) => {
                origins.push(origin.to_string())
            }
            _ => {}
        }

        origins
    }
}

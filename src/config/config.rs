use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    /// API keys accepted by the HTTP surface. Empty list disables auth.
    #[serde(default)]
    pub api_keys: Vec<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GeminiConfig {
    pub api_base: String,
    pub api_key: String,
    /// Model used for plain advice and translation requests.
    pub default_model: String,
    /// Model used when the request carries a geolocation for maps grounding.
    pub location_model: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AdviceConfig {
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_translate_timeout")]
    pub translate_timeout_secs: u64,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default = "default_debounce_ms")]
    pub auto_translate_debounce_ms: u64,
}

fn default_request_timeout() -> u64 {
    12
}

fn default_translate_timeout() -> u64 {
    8
}

fn default_temperature() -> f32 {
    0.1
}

fn default_debounce_ms() -> u64 {
    2500
}

impl Default for AdviceConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: default_request_timeout(),
            translate_timeout_secs: default_translate_timeout(),
            temperature: default_temperature(),
            auto_translate_debounce_ms: default_debounce_ms(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    #[serde(default = "default_auth")]
    pub auth: AuthConfig,
    pub gemini: GeminiConfig,
    #[serde(default)]
    pub advice: AdviceConfig,
}

fn default_auth() -> AuthConfig {
    AuthConfig { api_keys: vec![] }
}

impl AppConfig {
    pub fn load(path: &str) -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();

        let settings = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(config::Environment::with_prefix("JEEVANSATHI").separator("__"))
            .build()?;

        let mut app_config: AppConfig = settings.try_deserialize()?;

        // Expand environment variables if present like ${GEMINI_API_KEY}
        app_config.server.host = expand_env(&app_config.server.host);
        app_config.gemini.api_key = expand_env(&app_config.gemini.api_key);

        Ok(app_config)
    }
}

fn expand_env(val: &str) -> String {
    if val.starts_with("${") && val.ends_with('}') {
        let var_name = &val[2..val.len() - 1];
        std::env::var(var_name).unwrap_or_else(|_| "".to_string())
    } else {
        val.to_string()
    }
}

use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub app: AppConfig,
    #[serde(default)]
    pub stripe: StripeConfig,
    #[serde(default)]
    pub supabase: SupabaseConfig,
    #[serde(default)]
    pub video: VideoConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Public origin used to build Stripe success/cancel URLs.
    pub base_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StripeConfig {
    #[serde(default)]
    pub publishable_key: String,
    #[serde(default)]
    pub secret_key: String,
    #[serde(default)]
    pub webhook_secret: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SupabaseConfig {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub anon_key: String,
    #[serde(default)]
    pub service_role_key: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoConfig {
    /// Session rows fall back to this video id when no catalog row matches.
    pub default_video_id: String,
    /// Where `/api/video/stream` redirects to.
    pub stream_url: String,
}

impl Default for VideoConfig {
    fn default() -> Self {
        Self {
            default_video_id: "default".to_string(),
            stream_url: "/static/call-loop.mp4".to_string(),
        }
    }
}

impl Config {
    /// Loads `config.toml` (or `CONFIG_PATH`) if present, then applies
    /// environment overrides. Every key is optional: missing Stripe keys only
    /// disable checkout, missing Supabase keys only disable persistence.
    pub fn from_toml() -> Result<Self, Box<dyn std::error::Error>> {
        let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
        use std::io::ErrorKind;

        let mut config: Config = match std::fs::read_to_string(&config_path) {
            Ok(config_str) => {
                toml::from_str(&config_str).map_err(|e| format!("Failed to parse {config_path}: {e}"))?
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Config::default(),
            Err(e) => {
                return Err(format!("Failed to read {config_path}: {e}").into());
            }
        };

        if let Ok(v) = env::var("SERVER_HOST") {
            config.server.host = v;
        }
        if let Ok(v) = env::var("SERVER_PORT")
            && let Ok(p) = v.parse()
        {
            config.server.port = p;
        }
        if let Ok(v) = env::var("APP_BASE_URL") {
            config.app.base_url = v;
        }
        if let Ok(v) = env::var("STRIPE_PUBLISHABLE_KEY") {
            config.stripe.publishable_key = v;
        }
        if let Ok(v) = env::var("STRIPE_SECRET_KEY") {
            config.stripe.secret_key = v;
        }
        if let Ok(v) = env::var("STRIPE_WEBHOOK_SECRET") {
            config.stripe.webhook_secret = v;
        }
        if let Ok(v) = env::var("SUPABASE_URL") {
            config.supabase.url = v;
        }
        if let Ok(v) = env::var("SUPABASE_ANON_KEY") {
            config.supabase.anon_key = v;
        }
        if let Ok(v) = env::var("SUPABASE_SERVICE_ROLE_KEY") {
            config.supabase.service_role_key = v;
        }
        if let Ok(v) = env::var("DEFAULT_VIDEO_ID") {
            config.video.default_video_id = v;
        }
        if let Ok(v) = env::var("VIDEO_STREAM_URL") {
            config.video.stream_url = v;
        }

        Ok(config)
    }

    /// Checkout and verification need both Stripe keys.
    pub fn has_stripe(&self) -> bool {
        !self.stripe.publishable_key.is_empty() && !self.stripe.secret_key.is_empty()
    }

    /// Persistence needs the project URL and at least the anon key.
    pub fn has_supabase(&self) -> bool {
        !self.supabase.url.is_empty() && !self.supabase.anon_key.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_disable_integrations() {
        let config = Config::default();
        assert!(!config.has_stripe());
        assert!(!config.has_supabase());
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.video.default_video_id, "default");
    }

    #[test]
    fn test_has_stripe_requires_both_keys() {
        let mut config = Config::default();
        config.stripe.publishable_key = "pk_test_123".to_string();
        assert!(!config.has_stripe());
        config.stripe.secret_key = "sk_test_123".to_string();
        assert!(config.has_stripe());
    }

    #[test]
    fn test_has_supabase_requires_url_and_anon_key() {
        let mut config = Config::default();
        config.supabase.url = "https://project.supabase.co".to_string();
        assert!(!config.has_supabase());
        config.supabase.anon_key = "anon".to_string();
        assert!(config.has_supabase());
    }
}

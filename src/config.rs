use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use url::Url;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub contact: ContactConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    #[serde(default = "default_site_name")]
    pub name: String,
    /// Public origin used for canonical links
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: default_site_name(),
            base_url: default_base_url(),
        }
    }
}

fn default_site_name() -> String {
    "NAKAIMA BANSOSHAR".to_string()
}

fn default_base_url() -> String {
    "https://bansoshar.com".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct ContactConfig {
    /// Third-party endpoint receiving contact submissions
    #[serde(default = "default_contact_endpoint")]
    pub endpoint: String,
    /// Absolute URL visitors are sent to once a submission is accepted
    #[serde(default = "default_thanks_url")]
    pub thanks_url: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            endpoint: default_contact_endpoint(),
            thanks_url: default_thanks_url(),
        }
    }
}

impl ContactConfig {
    pub fn endpoint_url(&self) -> Result<Url, url::ParseError> {
        Url::parse(&self.endpoint)
    }
}

fn default_contact_endpoint() -> String {
    "https://formspree.io/f/mwpjpyrj".to_string()
}

fn default_thanks_url() -> String {
    "https://bansoshar.com/thanks".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Emit JSON lines instead of pretty console output
    #[serde(default)]
    pub json: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (NAKAIMA__CONTACT__ENDPOINT, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("NAKAIMA")
                .separator("__")
                .try_parsing(true),
        );

        // PORT is what most hosting platforms hand out
        if let Ok(port) = env::var("PORT") {
            builder = builder.set_override("server.port", port)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }

        check_http_url("contact.endpoint", &self.contact.endpoint)?;
        check_http_url("contact.thanks_url", &self.contact.thanks_url)?;
        check_http_url("site.base_url", &self.site.base_url)?;

        Ok(())
    }
}

fn check_http_url(key: &str, value: &str) -> Result<(), String> {
    let url = Url::parse(value).map_err(|e| format!("{key} is not an absolute URL: {e}"))?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(format!("{key} must use http or https, got {scheme}")),
    }
}

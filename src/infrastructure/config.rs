use serde::Deserialize;
use uuid::Uuid;

use crate::domain::entity::subscription::AmfEventType;

/// Application configuration for the event-subscriber service. Defaults
/// reproduce the demo constants, so the service runs without a config file.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub app: AppConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub amf: AmfConfig,
    #[serde(default)]
    pub subscription: SubscriptionConfig,
}

impl Config {
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        Ok(cfg)
    }

    /// A missing file is not an error; an unreadable or invalid one is.
    pub fn load_or_default(path: &str) -> anyhow::Result<Self> {
        if std::path::Path::new(path).exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Callback URI advertised to the AMF. The server host doubles as the
    /// callback host, as in the original deployment.
    pub fn notify_uri(&self) -> String {
        format!(
            "http://{}:{}{}",
            self.server.host, self.server.port, self.subscription.notify_path
        )
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app: AppConfig::default(),
            server: ServerConfig::default(),
            amf: AmfConfig::default(),
            subscription: SubscriptionConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default = "default_environment")]
    pub environment: String,
    /// "text" or "json".
    #[serde(default = "default_log_format")]
    pub log_format: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            version: default_version(),
            environment: default_environment(),
            log_format: default_log_format(),
        }
    }
}

fn default_app_name() -> String {
    "amf-event-subscriber".to_string()
}

fn default_version() -> String {
    "0.1.0".to_string()
}

fn default_environment() -> String {
    "dev".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    4040
}

/// AmfConfig locates the AMF's event-exposure service.
#[derive(Debug, Clone, Deserialize)]
pub struct AmfConfig {
    #[serde(default = "default_amf_base_url")]
    pub base_url: String,
    #[serde(default = "default_subscription_path")]
    pub subscription_path: String,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl AmfConfig {
    /// Full URL of the subscription collection.
    pub fn subscription_url(&self) -> String {
        format!("{}{}", self.base_url, self.subscription_path)
    }
}

impl Default for AmfConfig {
    fn default() -> Self {
        Self {
            base_url: default_amf_base_url(),
            subscription_path: default_subscription_path(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

fn default_amf_base_url() -> String {
    "http://192.168.70.132:8080".to_string()
}

fn default_subscription_path() -> String {
    "/namf-evts/v1/subscriptions".to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

/// SubscriptionConfig fixes the payload of the one outbound request.
#[derive(Debug, Clone, Deserialize)]
pub struct SubscriptionConfig {
    #[serde(default = "default_notify_path")]
    pub notify_path: String,
    #[serde(default = "default_notify_correlation_id")]
    pub notify_correlation_id: String,
    #[serde(default = "default_nf_id")]
    pub nf_id: Uuid,
    #[serde(default = "default_events")]
    pub events: Vec<AmfEventType>,
}

impl Default for SubscriptionConfig {
    fn default() -> Self {
        Self {
            notify_path: default_notify_path(),
            notify_correlation_id: default_notify_correlation_id(),
            nf_id: default_nf_id(),
            events: default_events(),
        }
    }
}

fn default_notify_path() -> String {
    "/notify".to_string()
}

fn default_notify_correlation_id() -> String {
    "notif-001".to_string()
}

fn default_nf_id() -> Uuid {
    Uuid::parse_str("123e4567-e89b-12d3-a456-426614174000").expect("default nfId is a valid UUID")
}

fn default_events() -> Vec<AmfEventType> {
    AmfEventType::all()
}

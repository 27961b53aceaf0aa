use std::env;
use std::path::PathBuf;

use chrono::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub storage: StorageConfig,
    pub admin: AdminConfig,
    pub swagger: SwaggerConfig,
}

/// Deployment mode. Only decides the default for admin key enforcement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Production,
    Development,
}

impl AppEnv {
    fn parse(value: &str) -> Result<Self, String> {
        match value.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" => Ok(AppEnv::Production),
            "development" | "dev" | "test" => Ok(AppEnv::Development),
            other => Err(format!(
                "Invalid APP_ENV '{}': expected 'production' or 'development'",
                other
            )),
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, AppEnv::Production)
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
    pub max_request_body_size: usize,
    pub env: AppEnv,
}

/// Backing store for leads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadStoreKind {
    /// JSON document on disk
    File,
    /// Process memory, lost on restart
    Memory,
}

impl LeadStoreKind {
    fn parse(value: &str) -> Result<Self, String> {
        match value.trim().to_ascii_lowercase().as_str() {
            "file" => Ok(LeadStoreKind::File),
            "memory" => Ok(LeadStoreKind::Memory),
            other => Err(format!(
                "Invalid LEAD_STORE '{}': expected 'file' or 'memory'",
                other
            )),
        }
    }
}

/// Where and how leads are persisted
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub store: LeadStoreKind,
    /// Directory holding the leads document, created on first write
    pub data_dir: PathBuf,
    pub leads_file_name: String,
    /// Window in which a repeated phone number is treated as a duplicate
    pub dedup_window: Duration,
}

#[derive(Clone)]
pub struct AdminConfig {
    pub api_key: Option<String>,
    pub enforced: bool,
}

// Keep the key out of logs
impl std::fmt::Debug for AdminConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("enforced", &self.enforced)
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct SwaggerConfig {
    pub username: Option<String>,
    pub password: Option<String>,
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let app = AppConfig::from_env()?;
        let admin = AdminConfig::from_env(app.env)?;

        Ok(Config {
            app,
            storage: StorageConfig::from_env()?,
            admin,
            swagger: SwaggerConfig::from_env()?,
        })
    }
}

impl AppConfig {
    const DEFAULT_MAX_REQUEST_BODY_SIZE: usize = 64 * 1024; // 64KB

    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|e| format!("Invalid PORT: {}", e))?;

        // Parse CORS allowed origins from comma-separated string
        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let max_request_body_size = env::var("MAX_REQUEST_BODY_SIZE")
            .unwrap_or_else(|_| Self::DEFAULT_MAX_REQUEST_BODY_SIZE.to_string())
            .parse::<usize>()
            .map_err(|_| "MAX_REQUEST_BODY_SIZE must be a valid number".to_string())?;

        let env = match env::var("APP_ENV") {
            Ok(value) => AppEnv::parse(&value)?,
            Err(_) => AppEnv::Development,
        };

        Ok(Self {
            host,
            port,
            cors_allowed_origins,
            max_request_body_size,
            env,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl StorageConfig {
    const DEFAULT_DATA_DIR: &'static str = "data";
    const DEFAULT_LEADS_FILE_NAME: &'static str = "farmer-leads.json";
    const DEFAULT_DEDUP_WINDOW_HOURS: i64 = 24;
    const MAX_DEDUP_WINDOW_HOURS: i64 = 24 * 365;

    pub fn from_env() -> Result<Self, String> {
        let store = match env::var("LEAD_STORE") {
            Ok(value) => LeadStoreKind::parse(&value)?,
            Err(_) => LeadStoreKind::File,
        };

        let data_dir = env::var("DATA_DIR")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| Self::DEFAULT_DATA_DIR.to_string());

        let leads_file_name = env::var("LEADS_FILE_NAME")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| Self::DEFAULT_LEADS_FILE_NAME.to_string());

        let dedup_window = match env::var("LEAD_DEDUP_WINDOW_HOURS") {
            Ok(value) => Self::parse_dedup_window(&value)?,
            Err(_) => Duration::hours(Self::DEFAULT_DEDUP_WINDOW_HOURS),
        };

        Ok(Self {
            store,
            data_dir: PathBuf::from(data_dir),
            leads_file_name,
            dedup_window,
        })
    }

    fn parse_dedup_window(value: &str) -> Result<Duration, String> {
        let hours = value
            .trim()
            .parse::<i64>()
            .map_err(|_| "LEAD_DEDUP_WINDOW_HOURS must be a valid number".to_string())?;

        if !(1..=Self::MAX_DEDUP_WINDOW_HOURS).contains(&hours) {
            return Err(format!(
                "LEAD_DEDUP_WINDOW_HOURS must be between 1 and {}",
                Self::MAX_DEDUP_WINDOW_HOURS
            ));
        }

        Duration::try_hours(hours)
            .ok_or_else(|| "LEAD_DEDUP_WINDOW_HOURS is out of range".to_string())
    }

    /// Full path of the leads document
    pub fn leads_file(&self) -> PathBuf {
        self.data_dir.join(&self.leads_file_name)
    }
}

impl AdminConfig {
    pub fn from_env(app_env: AppEnv) -> Result<Self, String> {
        // Only use the key if it is non-empty
        let api_key = env::var("ADMIN_API_KEY").ok().filter(|s| !s.is_empty());

        let enforced = match env::var("ADMIN_AUTH_ENFORCED") {
            Ok(value) => parse_bool(&value)
                .ok_or_else(|| "ADMIN_AUTH_ENFORCED must be 'true' or 'false'".to_string())?,
            Err(_) => app_env.is_production(),
        };

        Ok(Self { api_key, enforced })
    }
}

impl SwaggerConfig {
    pub fn from_env() -> Result<Self, String> {
        // Only use credentials if they are non-empty
        let username = env::var("SWAGGER_USERNAME").ok().filter(|s| !s.is_empty());
        let password = env::var("SWAGGER_PASSWORD").ok().filter(|s| !s.is_empty());
        let title =
            env::var("SWAGGER_TITLE").unwrap_or_else(|_| "CropFresh Leads API".to_string());
        let version = env::var("SWAGGER_VERSION").unwrap_or_else(|_| "0.1.0".to_string());
        let description = env::var("SWAGGER_DESCRIPTION")
            .unwrap_or_else(|_| "Farmer lead intake API for the CropFresh website".to_string());

        Ok(Self {
            username,
            password,
            title,
            version,
            description,
        })
    }

    /// Returns credentials in "username:password" format if auth is enabled
    pub fn credentials(&self) -> Option<String> {
        match (&self.username, &self.password) {
            (Some(user), Some(pass)) => Some(format!("{}:{}", user, pass)),
            _ => None,
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_env_parse() {
        assert_eq!(AppEnv::parse("production"), Ok(AppEnv::Production));
        assert_eq!(AppEnv::parse(" PROD "), Ok(AppEnv::Production));
        assert_eq!(AppEnv::parse("development"), Ok(AppEnv::Development));
        assert!(AppEnv::parse("staging").is_err());
    }

    #[test]
    fn test_lead_store_kind_parse() {
        assert_eq!(LeadStoreKind::parse("file"), Ok(LeadStoreKind::File));
        assert_eq!(LeadStoreKind::parse("Memory"), Ok(LeadStoreKind::Memory));
        assert!(LeadStoreKind::parse("postgres").is_err());
    }

    #[test]
    fn test_parse_dedup_window() {
        assert_eq!(
            StorageConfig::parse_dedup_window("24"),
            Ok(Duration::hours(24))
        );
        assert_eq!(
            StorageConfig::parse_dedup_window(" 8760 "),
            Ok(Duration::hours(8760))
        );
        assert!(StorageConfig::parse_dedup_window("0").is_err());
        assert!(StorageConfig::parse_dedup_window("-3").is_err());
        assert!(StorageConfig::parse_dedup_window("8761").is_err());
        assert!(StorageConfig::parse_dedup_window("1000000000000").is_err());
        assert!(StorageConfig::parse_dedup_window("9999999999999").is_err());
        assert!(StorageConfig::parse_dedup_window("a day").is_err());
    }

    #[test]
    fn test_parse_bool() {
        assert_eq!(parse_bool("true"), Some(true));
        assert_eq!(parse_bool("OFF"), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }

    #[test]
    fn test_leads_file_joins_data_dir() {
        let config = StorageConfig {
            store: LeadStoreKind::File,
            data_dir: PathBuf::from("/var/lib/cropfresh"),
            leads_file_name: "farmer-leads.json".to_string(),
            dedup_window: Duration::hours(24),
        };
        assert_eq!(
            config.leads_file(),
            PathBuf::from("/var/lib/cropfresh/farmer-leads.json")
        );
    }

    #[test]
    fn test_admin_config_debug_masks_key() {
        let config = AdminConfig {
            api_key: Some("super-secret".to_string()),
            enforced: true,
        };
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("***"));
    }
}

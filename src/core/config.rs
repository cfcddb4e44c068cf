use std::env;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

/// Fatal configuration problems, reported once at startup
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} environment variable is required")]
    Missing(&'static str),

    #[error("{key} is invalid: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Reads a configuration value by key
type Lookup<'a> = &'a dyn Fn(&str) -> Option<String>;

fn env_lookup(key: &str) -> Option<String> {
    env::var(key).ok()
}

/// Parse `key` as `T`, using `default` when unset
fn parse_or<T>(lookup: Lookup, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse::<T>().map_err(|e| ConfigError::Invalid {
            key,
            reason: e.to_string(),
        }),
        None => Ok(default),
    }
}

fn non_zero(key: &'static str, value: u64) -> Result<u64, ConfigError> {
    if value == 0 {
        return Err(ConfigError::Invalid {
            key,
            reason: "must be greater than zero".to_string(),
        });
    }
    Ok(value)
}

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub jakim: JakimConfig,
    pub cache: CacheConfig,
    pub nominatim: NominatimConfig,
    pub auth: AuthConfig,
    pub swagger: SwaggerConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
    pub environment: String,
    pub user_agent: String,
}

/// Upstream JAKIM e-solat settings
#[derive(Debug, Clone)]
pub struct JakimConfig {
    pub base_url: String,
    /// Timeout for a single attempt
    pub timeout: Duration,
    /// Additional attempts after the first failure
    pub retries: u32,
    /// Delay before retry `n` is `retry_base_delay * n`
    pub retry_base_delay: Duration,
}

#[derive(Debug, Clone)]
pub struct CacheConfig {
    pub prayer_times_ttl: Duration,
}

#[derive(Debug, Clone)]
pub struct NominatimConfig {
    pub base_url: String,
    pub timeout: Duration,
}

#[derive(Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub jwt_leeway: Duration,
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &"***")
            .field("jwt_leeway", &self.jwt_leeway)
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
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if exists, ignore if not found (optional for production)
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        Self::from_lookup(&env_lookup)
    }

    fn from_lookup(lookup: Lookup) -> Result<Self, ConfigError> {
        Ok(Config {
            app: AppConfig::from_lookup(lookup)?,
            jakim: JakimConfig::from_lookup(lookup)?,
            cache: CacheConfig::from_lookup(lookup)?,
            nominatim: NominatimConfig::from_lookup(lookup)?,
            auth: AuthConfig::from_lookup(lookup)?,
            swagger: SwaggerConfig::from_lookup(lookup),
        })
    }
}

impl AppConfig {
    const DEFAULT_PORT: u16 = 5000;
    const DEFAULT_USER_AGENT: &'static str = concat!("WaktuSolatCore/", env!("CARGO_PKG_VERSION"));

    fn from_lookup(lookup: Lookup) -> Result<Self, ConfigError> {
        let host = lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let port = parse_or(lookup, "PORT", Self::DEFAULT_PORT)?;

        // Parse CORS allowed origins from comma-separated string
        let cors_allowed_origins = lookup("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let environment = lookup("APP_ENV").unwrap_or_else(|| "development".to_string());
        let user_agent =
            lookup("HTTP_USER_AGENT").unwrap_or_else(|| Self::DEFAULT_USER_AGENT.to_string());

        Ok(Self {
            host,
            port,
            cors_allowed_origins,
            environment,
            user_agent,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl JakimConfig {
    const DEFAULT_BASE_URL: &'static str = "https://www.e-solat.gov.my/index.php";
    const DEFAULT_TIMEOUT_SECS: u64 = 8;
    const DEFAULT_RETRIES: u32 = 2;
    const MAX_RETRIES: u32 = 10;
    const DEFAULT_RETRY_DELAY_MS: u64 = 1000;

    fn from_lookup(lookup: Lookup) -> Result<Self, ConfigError> {
        let base_url =
            lookup("JAKIM_BASE_URL").unwrap_or_else(|| Self::DEFAULT_BASE_URL.to_string());

        let timeout_secs = non_zero(
            "JAKIM_TIMEOUT_SECS",
            parse_or(lookup, "JAKIM_TIMEOUT_SECS", Self::DEFAULT_TIMEOUT_SECS)?,
        )?;
        let retries = parse_or(lookup, "JAKIM_RETRIES", Self::DEFAULT_RETRIES)?;
        if retries > Self::MAX_RETRIES {
            return Err(ConfigError::Invalid {
                key: "JAKIM_RETRIES",
                reason: format!("must be at most {}", Self::MAX_RETRIES),
            });
        }
        let retry_delay_ms =
            parse_or(lookup, "JAKIM_RETRY_DELAY_MS", Self::DEFAULT_RETRY_DELAY_MS)?;

        Ok(Self {
            base_url,
            timeout: Duration::from_secs(timeout_secs),
            retries,
            retry_base_delay: Duration::from_millis(retry_delay_ms),
        })
    }
}

impl CacheConfig {
    const DEFAULT_PRAYER_TIMES_TTL_SECS: u64 = 3600; // 1 hour

    fn from_lookup(lookup: Lookup) -> Result<Self, ConfigError> {
        let ttl_secs = non_zero(
            "PRAYER_CACHE_TTL_SECS",
            parse_or(
                lookup,
                "PRAYER_CACHE_TTL_SECS",
                Self::DEFAULT_PRAYER_TIMES_TTL_SECS,
            )?,
        )?;

        Ok(Self {
            prayer_times_ttl: Duration::from_secs(ttl_secs),
        })
    }
}

impl NominatimConfig {
    const DEFAULT_BASE_URL: &'static str = "https://nominatim.openstreetmap.org";
    const DEFAULT_TIMEOUT_SECS: u64 = 10;

    fn from_lookup(lookup: Lookup) -> Result<Self, ConfigError> {
        let base_url =
            lookup("NOMINATIM_BASE_URL").unwrap_or_else(|| Self::DEFAULT_BASE_URL.to_string());
        let timeout_secs = non_zero(
            "NOMINATIM_TIMEOUT_SECS",
            parse_or(lookup, "NOMINATIM_TIMEOUT_SECS", Self::DEFAULT_TIMEOUT_SECS)?,
        )?;

        Ok(Self {
            base_url,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

impl AuthConfig {
    const DEFAULT_JWT_LEEWAY_SECS: u64 = 60; // 1 minute

    fn from_lookup(lookup: Lookup) -> Result<Self, ConfigError> {
        // No default secret: a missing or blank value must stop startup
        let jwt_secret = lookup("JWT_SECRET")
            .filter(|s| !s.trim().is_empty())
            .ok_or(ConfigError::Missing("JWT_SECRET"))?;

        let jwt_leeway_secs = parse_or(lookup, "JWT_LEEWAY", Self::DEFAULT_JWT_LEEWAY_SECS)?;

        Ok(Self {
            jwt_secret,
            jwt_leeway: Duration::from_secs(jwt_leeway_secs),
        })
    }
}

impl SwaggerConfig {
    fn from_lookup(lookup: Lookup) -> Self {
        // Only use credentials if they are non-empty
        let username = lookup("SWAGGER_USERNAME").filter(|s| !s.is_empty());
        let password = lookup("SWAGGER_PASSWORD").filter(|s| !s.is_empty());
        let title = lookup("SWAGGER_TITLE").unwrap_or_else(|| "Waktu Solat API".to_string());
        let version =
            lookup("SWAGGER_VERSION").unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_string());
        let description = lookup("SWAGGER_DESCRIPTION")
            .unwrap_or_else(|| "JAKIM zone resolution and prayer times".to_string());

        Self {
            username,
            password,
            title,
            version,
            description,
        }
    }

    /// Returns credentials in "username:password" format if auth is enabled
    pub fn credentials(&self) -> Option<String> {
        match (&self.username, &self.password) {
            (Some(user), Some(pass)) => Some(format!("{}:{}", user, pass)),
            _ => None,
        }
    }
}

//! Service-level settings: logging and contact validation.

use customer_core_api::validation::ContactRules;
use phonenumber::country;
use tracing::Level;

/// Output format of the tracing subscriber
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub log_level: Level,
    pub log_format: LogFormat,
    /// Region for phone numbers written without a country code
    pub phone_default_region: country::Id,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            log_level: Level::INFO,
            log_format: LogFormat::Text,
            phone_default_region: country::Id::IN,
        }
    }
}

impl ServiceConfig {
    /// Load from the process environment, reading a `.env` file first if one exists
    pub fn from_env() -> (Self, Vec<String>) {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup. Invalid values fall back to the
    /// default and are reported in the returned warnings.
    pub fn from_lookup<F>(lookup: F) -> (Self, Vec<String>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let mut warnings = Vec::new();
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        if let Some(raw) = get("LOG_LEVEL") {
            match raw.to_ascii_uppercase().parse::<Level>() {
                Ok(level) => config.log_level = level,
                Err(_) => warnings.push(format!("invalid LOG_LEVEL={raw:?}; using INFO")),
            }
        }
        if let Some(raw) = get("LOG_FORMAT") {
            match raw.parse::<LogFormat>() {
                Ok(format) => config.log_format = format,
                Err(()) => warnings.push(format!("invalid LOG_FORMAT={raw:?}; using text")),
            }
        }
        if let Some(raw) = get("PHONE_DEFAULT_REGION") {
            match raw.to_ascii_uppercase().parse::<country::Id>() {
                Ok(region) => config.phone_default_region = region,
                Err(_) => {
                    warnings.push(format!("invalid PHONE_DEFAULT_REGION={raw:?}; using IN"))
                }
            }
        }

        (config, warnings)
    }

    pub fn contact_rules(&self) -> ContactRules {
        ContactRules::new(self.phone_default_region)
    }
}

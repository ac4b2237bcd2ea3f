use serde::{Deserialize, Serialize};

const DEFAULT_BACKEND_URL_DEVELOPMENT: &str = "http://localhost:8000";
const DEFAULT_BACKEND_URL_PRODUCTION: &str = "https://carhive.onrender.com";
const DEFAULT_CAR_PHOTO: &str = "images/default-car.png";
const DEFAULT_GUEST_CAR_LIMIT: usize = 4;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend_url_development: String,
    pub backend_url_production: String,
    pub environment: String,
    pub enable_logging: bool,
    pub listing: ListingConfig,
}

/// Settings of the discovery listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingConfig {
    /// Cards shown to a visitor before the "Login for more" prompt
    pub guest_car_limit: usize,
    pub default_car_photo: String,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            guest_car_limit: DEFAULT_GUEST_CAR_LIMIT,
            default_car_photo: DEFAULT_CAR_PHOTO.to_string(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url_development: DEFAULT_BACKEND_URL_DEVELOPMENT.to_string(),
            backend_url_production: DEFAULT_BACKEND_URL_PRODUCTION.to_string(),
            environment: "production".to_string(),
            enable_logging: true,
            listing: ListingConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load the configuration from variables captured at compile time
    pub fn from_env() -> Self {
        Self::from_lookup(|key| match key {
            "BACKEND_URL_DEVELOPMENT" => option_env!("BACKEND_URL_DEVELOPMENT"),
            "BACKEND_URL" => option_env!("BACKEND_URL"),
            "ENVIRONMENT" => option_env!("ENVIRONMENT"),
            "ENABLE_LOGGING" => option_env!("ENABLE_LOGGING"),
            "GUEST_CAR_LIMIT" => option_env!("GUEST_CAR_LIMIT"),
            "DEFAULT_CAR_PHOTO" => option_env!("DEFAULT_CAR_PHOTO"),
            _ => None,
        })
    }

    /// Build a configuration from an arbitrary key lookup, falling back to
    /// defaults for missing or unparsable values.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<&'static str>,
    {
        let defaults = Self::default();
        Self {
            backend_url_development: lookup("BACKEND_URL_DEVELOPMENT")
                .map(trim_url)
                .unwrap_or(defaults.backend_url_development),
            backend_url_production: lookup("BACKEND_URL")
                .map(trim_url)
                .unwrap_or(defaults.backend_url_production),
            environment: lookup("ENVIRONMENT")
                .map(|s| s.trim().to_lowercase())
                .unwrap_or(defaults.environment),
            enable_logging: lookup("ENABLE_LOGGING")
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(defaults.enable_logging),
            listing: ListingConfig {
                guest_car_limit: lookup("GUEST_CAR_LIMIT")
                    .and_then(|s| s.trim().parse().ok())
                    .unwrap_or(defaults.listing.guest_car_limit),
                default_car_photo: lookup("DEFAULT_CAR_PHOTO")
                    .filter(|s| !s.trim().is_empty())
                    .map(|s| s.trim().to_string())
                    .unwrap_or(defaults.listing.default_car_photo),
            },
        }
    }

    /// Backend origin for the current environment
    pub fn backend_url(&self) -> &str {
        match self.environment.as_str() {
            "development" => &self.backend_url_development,
            _ => &self.backend_url_production,
        }
    }

    /// Versioned API root, e.g. `https://carhive.onrender.com/api/v1`
    pub fn api_base(&self) -> String {
        format!("{}/api/v1", self.backend_url())
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

fn trim_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

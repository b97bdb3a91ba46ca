use dotenv;
use std::collections::HashMap;
use std::sync::OnceLock;
use tracing::{error, info, warn};

static CONFIG: OnceLock<HashMap<String, String>> = OnceLock::new();

/// Default configuration values
const DEFAULTS: &[(&str, &str)] = &[
    ("SERVER_ADDRESS", "127.0.0.1"),
    ("SERVER_PORT", "8080"),
    ("JWT_ACCESS_TTL_MINUTES", "15"),
    ("REFRESH_TOKEN_TTL_DAYS", "30"),
    ("BCRYPT_COST", "12"),
    ("CORS_ORIGIN", "http://localhost:5173"),
    ("LOG_LEVEL", "info"),
];

/// Parameters read from the environment only, with no default
const ENV_ONLY: &[&str] = &[
    "DATABASE_URL",
    "JWT_ACCESS_SECRET",
    "ADMIN_EMAIL",
    "ADMIN_PASSWORD",
    "ENV",
];

pub fn init() {
    match dotenv::dotenv() {
        Ok(path) => info!("Loaded environment file: {:?}", path),
        Err(_) => warn!("No .env file found, using system environment variables"),
    }

    let mut config = HashMap::new();

    for (key, value) in DEFAULTS {
        config.insert((*key).to_string(), (*value).to_string());
    }

    for (key, _) in DEFAULTS {
        if let Ok(value) = std::env::var(key) {
            config.insert((*key).to_string(), value);
        }
    }

    for key in ENV_ONLY {
        if let Ok(value) = std::env::var(key) {
            config.insert((*key).to_string(), value);
        }
    }

    if CONFIG.set(config).is_err() {
        warn!("Configuration already initialized");
    } else {
        info!("Configuration initialized successfully");
    }
}

pub fn get(parameter: &str) -> String {
    CONFIG
        .get()
        .and_then(|config| config.get(parameter))
        .cloned()
        .unwrap_or_else(|| {
            error!("Configuration parameter '{}' not found", parameter);
            panic!("Required configuration parameter '{}' is missing", parameter);
        })
}

pub fn get_optional(parameter: &str) -> Option<String> {
    CONFIG
        .get()
        .and_then(|config| config.get(parameter))
        .cloned()
}

pub fn get_i64(parameter: &str) -> i64 {
    let value = get(parameter);
    value.parse::<i64>().unwrap_or_else(|_| {
        error!("Configuration parameter '{}' is not a valid i64: {}", parameter, value);
        panic!("Configuration parameter '{}' is not a valid i64", parameter);
    })
}

pub fn get_u32(parameter: &str) -> u32 {
    let value = get(parameter);
    value.parse::<u32>().unwrap_or_else(|_| {
        error!("Configuration parameter '{}' is not a valid u32: {}", parameter, value);
        panic!("Configuration parameter '{}' is not a valid u32", parameter);
    })
}

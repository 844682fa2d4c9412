//! Application configuration loaded from environment variables.

use std::env;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Mongo,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "mongo" | "mongodb" => Ok(StoreBackend::Mongo),
            "memory" => Ok(StoreBackend::Memory),
            other => Err(format!(
                "STORE_BACKEND must be 'mongo' or 'memory', got '{}'",
                other
            )),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MongoConfig {
    pub uri: String,
    pub database: String,
    pub app_name: String,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub backend: StoreBackend,
    pub mongo: MongoConfig,
}

impl AppConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: lookup("PORT")
                .unwrap_or_else(|| "8001".to_string())
                .parse()
                .map_err(|_| "PORT must be a valid number")?,
            backend: lookup("STORE_BACKEND")
                .unwrap_or_else(|| "mongo".to_string())
                .parse()?,
            mongo: MongoConfig {
                uri: lookup("MONGODB_URI")
                    .unwrap_or_else(|| "mongodb://localhost:27017".to_string()),
                database: lookup("DB_NAME").unwrap_or_else(|| "blog_db".to_string()),
                app_name: lookup("SERVICE_NAME").unwrap_or_else(|| "blog-backend".to_string()),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<AppConfig, String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = load(&[]).unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8001);
        assert_eq!(config.backend, StoreBackend::Mongo);
        assert_eq!(config.mongo.uri, "mongodb://localhost:27017");
        assert_eq!(config.mongo.database, "blog_db");
    }

    #[test]
    fn reads_overrides() {
        let config = load(&[
            ("PORT", "9000"),
            ("STORE_BACKEND", "Memory"),
            ("DB_NAME", "flamengo"),
        ])
        .unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.backend, StoreBackend::Memory);
        assert_eq!(config.mongo.database, "flamengo");
    }

    #[test]
    fn rejects_bad_values() {
        assert!(load(&[("PORT", "eighty")]).is_err());
        assert!(load(&[("STORE_BACKEND", "postgres")]).is_err());
    }
}

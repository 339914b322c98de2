//! Runtime settings read from the environment (after `dotenvy`).

use crate::error::ConfigError;

pub const DEFAULT_DATABASE_URL: &str = "postgres://localhost/restaurant";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
/// The API always listens on this port.
pub const PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub database_url: String,
    pub max_connections: u32,
    /// Insert the demo customers at startup when they are missing.
    pub seed_customers: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            database_url: DEFAULT_DATABASE_URL.into(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            seed_customers: true,
        }
    }
}

impl Settings {
    /// Load from process env: `DATABASE_URL`, `DB_MAX_CONNECTIONS`, `SEED_CUSTOMERS`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|k| std::env::var(k).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Settings::default();
        if let Some(url) = lookup("DATABASE_URL") {
            settings.database_url = url;
        }
        if let Some(v) = lookup("DB_MAX_CONNECTIONS") {
            settings.max_connections = match v.trim().parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::InvalidVar {
                        var: "DB_MAX_CONNECTIONS",
                        value: v,
                    })
                }
            };
        }
        if let Some(v) = lookup("SEED_CUSTOMERS") {
            settings.seed_customers = parse_bool(&v).ok_or(ConfigError::InvalidVar {
                var: "SEED_CUSTOMERS",
                value: v.clone(),
            })?;
        }
        Ok(settings)
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k: &str| map.get(k).cloned()
    }

    #[test]
    fn defaults_when_env_is_empty() {
        let s = Settings::from_lookup(lookup(&[])).unwrap();
        assert_eq!(s, Settings::default());
        assert_eq!(s.database_url, "postgres://localhost/restaurant");
    }

    #[test]
    fn reads_all_vars() {
        let s = Settings::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://db:5432/food"),
            ("DB_MAX_CONNECTIONS", "12"),
            ("SEED_CUSTOMERS", "off"),
        ]))
        .unwrap();
        assert_eq!(s.database_url, "postgres://db:5432/food");
        assert_eq!(s.max_connections, 12);
        assert!(!s.seed_customers);
    }

    #[test]
    fn rejects_zero_connections() {
        let err = Settings::from_lookup(lookup(&[("DB_MAX_CONNECTIONS", "0")])).unwrap_err();
        assert!(err.to_string().contains("DB_MAX_CONNECTIONS"));
    }

    #[test]
    fn rejects_garbage_bool() {
        assert!(Settings::from_lookup(lookup(&[("SEED_CUSTOMERS", "maybe")])).is_err());
    }
}

use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    // Content
    pub catalog_file: String,

    // Server
    pub port: u16,

    // Admin endpoints are disabled when no key is configured
    pub admin_api_key: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // Content snapshot exported by the content store
            catalog_file: std::env::var("CATALOG_FILE").context("CATALOG_FILE not set")?,

            // Server
            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),

            // Admin
            admin_api_key: std::env::var("ADMIN_API_KEY").ok().filter(|k| !k.is_empty()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        std::env::remove_var("CATALOG_FILE");
        std::env::remove_var("PORT");
        std::env::remove_var("ADMIN_API_KEY");
    }

    #[test]
    #[serial]
    fn test_from_env_requires_catalog_file() {
        clear_env();
        let result = Config::from_env();
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("CATALOG_FILE not set"));
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();
        std::env::set_var("CATALOG_FILE", "catalog.json");

        let config = Config::from_env().expect("Should load config");
        assert_eq!(config.catalog_file, "catalog.json");
        assert_eq!(config.port, 8080);
        assert!(config.admin_api_key.is_none());

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_explicit_values() {
        clear_env();
        std::env::set_var("CATALOG_FILE", "/srv/catalog.json");
        std::env::set_var("PORT", "9000");
        std::env::set_var("ADMIN_API_KEY", "secret");

        let config = Config::from_env().expect("Should load config");
        assert_eq!(config.catalog_file, "/srv/catalog.json");
        assert_eq!(config.port, 9000);
        assert_eq!(config.admin_api_key.as_deref(), Some("secret"));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_invalid_port_falls_back_to_default() {
        clear_env();
        std::env::set_var("CATALOG_FILE", "catalog.json");
        std::env::set_var("PORT", "not-a-port");

        let config = Config::from_env().expect("Should load config");
        assert_eq!(config.port, 8080);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_empty_admin_key_disables_admin() {
        clear_env();
        std::env::set_var("CATALOG_FILE", "catalog.json");
        std::env::set_var("ADMIN_API_KEY", "");

        let config = Config::from_env().expect("Should load config");
        assert!(config.admin_api_key.is_none());

        clear_env();
    }
}

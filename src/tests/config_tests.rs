#[cfg(test)]
mod tests {
    use crate::config::{self, AppConfig};

    #[test]
    fn test_valid_config_does_not_error() {
        let result = config::load();
        assert!(result.is_ok());
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.database.url, "sqlite://data/kinothek.db");
        assert_eq!(config.database.max_connections, 16);
    }

    #[test]
    fn test_validate_rejects_zero_port() {
        let mut cfg = AppConfig::default();
        cfg.server.port = 0;
        let result = config::validate(&cfg);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("invalid server.port"));
    }

    #[test]
    fn test_validate_bounds_pool_size() {
        let mut cfg = AppConfig::default();
        cfg.database.max_connections = 0;
        assert!(config::validate(&cfg).is_err());

        cfg.database.max_connections = 65;
        assert!(config::validate(&cfg).is_err());

        cfg.database.max_connections = 1;
        assert!(config::validate(&cfg).is_ok());
    }

    #[test]
    fn test_ensure_sqlite_parent_dir() {
        let temp_dir = tempfile::tempdir().unwrap();
        let db_path = temp_dir.path().join("subdir/test.db");
        let db_url = format!("sqlite://{}", db_path.display());

        assert!(!db_path.parent().unwrap().exists());

        config::ensure_sqlite_parent_dir(&db_url).unwrap();

        assert!(db_path.parent().unwrap().exists());
    }

    #[test]
    fn test_ensure_sqlite_parent_dir_non_sqlite() {
        // Non-SQLite URL should not create directories
        let result = config::ensure_sqlite_parent_dir("postgres://localhost/db");
        assert!(result.is_ok());
    }
}

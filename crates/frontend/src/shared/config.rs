//! Dashboard configuration.
//!
//! The browser has no file system, so the configuration is an embedded TOML
//! document parsed once on first access.

use once_cell::sync::Lazy;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct DashboardConfig {
    pub table: TableConfig,
    pub search: SearchConfig,
    pub data: DataConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct TableConfig {
    pub page_size: usize,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SearchConfig {
    pub debounce_ms: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct DataConfig {
    pub schools_url: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct UiConfig {
    pub toast_timeout_ms: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LoggingConfig {
    pub level: String,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[table]
page_size = 10

[search]
debounce_ms = 300

[data]
schools_url = "/data/schools.json"

[ui]
toast_timeout_ms = 4000

[logging]
level = "debug"
"#;

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            table: TableConfig { page_size: 10 },
            search: SearchConfig { debounce_ms: 300 },
            data: DataConfig {
                schools_url: "/data/schools.json".to_string(),
            },
            ui: UiConfig {
                toast_timeout_ms: 4000,
            },
            logging: LoggingConfig {
                level: "debug".to_string(),
            },
        }
    }
}

impl DashboardConfig {
    /// `log` level parsed from `logging.level`, `Info` when unrecognized
    pub fn log_level(&self) -> log::Level {
        self.logging.level.parse().unwrap_or(log::Level::Info)
    }
}

/// Parse a TOML document, falling back to defaults on any error.
pub fn parse_config(source: &str) -> DashboardConfig {
    match toml::from_str::<DashboardConfig>(source) {
        Ok(mut config) => {
            if config.table.page_size == 0 {
                log::warn!("table.page_size must be positive, using default");
                config.table.page_size = DashboardConfig::default().table.page_size;
            }
            config
        }
        Err(e) => {
            log::warn!("invalid dashboard configuration, using defaults: {}", e);
            DashboardConfig::default()
        }
    }
}

static CONFIG: Lazy<DashboardConfig> = Lazy::new(|| parse_config(DEFAULT_CONFIG));

/// Global configuration
pub fn config() -> &'static DashboardConfig {
    &CONFIG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Result<DashboardConfig, _> = toml::from_str(DEFAULT_CONFIG);
        assert!(config.is_ok());
        assert_eq!(config.unwrap(), DashboardConfig::default());
    }

    #[test]
    fn test_invalid_document_falls_back() {
        let config = parse_config("[table]\npage_size = \"ten\"");
        assert_eq!(config, DashboardConfig::default());
    }

    #[test]
    fn test_zero_page_size_is_rejected() {
        let source = DEFAULT_CONFIG.replace("page_size = 10", "page_size = 0");
        assert_eq!(parse_config(&source).table.page_size, 10);
    }

    #[test]
    fn test_log_level() {
        assert_eq!(config().log_level(), log::Level::Debug);
        let mut custom = DashboardConfig::default();
        custom.logging.level = "verbose".into();
        assert_eq!(custom.log_level(), log::Level::Info);
    }
}

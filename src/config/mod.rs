use serde::{Deserialize, Serialize};
use std::{
    fs, io,
    path::{Path, PathBuf},
};

use crate::{
    errors::ConfigError,
    expense::{default_rules, RecurringRule, DEFAULT_MONTHLY_BUDGET},
    utils::{fs::write_atomic, paths},
};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    #[serde(default = "default_budget")]
    pub monthly_budget: u64,
    #[serde(default = "default_rules")]
    pub recurring: Vec<RecurringRule>,
}

fn default_currency_symbol() -> String {
    crate::currency::WON_SYMBOL.into()
}

fn default_budget() -> u64 {
    DEFAULT_MONTHLY_BUDGET
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
            monthly_budget: default_budget(),
            recurring: default_rules(),
        }
    }
}

impl Config {
    /// Rejects recurring rules whose day can never occur.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.recurring.iter().find(|rule| !rule.has_valid_day()) {
            Some(rule) => Err(ConfigError::InvalidRule {
                memo: rule.memo.clone(),
                day: rule.day_of_month,
            }),
            None => Ok(()),
        }
    }
}

/// Loads and saves `config.json` in the data directory.
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn with_base_dir(base: impl AsRef<Path>) -> Self {
        Self {
            path: paths::config_file_in(base.as_ref()),
        }
    }

    /// Returns defaults when no configuration file exists yet.
    pub fn load(&self) -> Result<Config, ConfigError> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Config::default()),
            Err(err) => return Err(err.into()),
        };
        let config: Config = serde_json::from_str(&data)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        config.validate()?;
        let json = serde_json::to_string_pretty(config)?;
        write_atomic(&self.path, &json)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let temp = TempDir::new().unwrap();
        let config = ConfigManager::with_base_dir(temp.path()).load().unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.monthly_budget, 4_000_000);
        assert_eq!(config.recurring.len(), 2);
    }

    #[test]
    fn save_and_reload() {
        let temp = TempDir::new().unwrap();
        let manager = ConfigManager::with_base_dir(temp.path());
        let mut config = Config::default();
        config.monthly_budget = 2_500_000;
        config.recurring.push(RecurringRule::new("고정지출", "통신비", 55_000, 20));
        manager.save(&config).unwrap();
        assert!(manager.path().exists());
        assert_eq!(manager.load().unwrap(), config);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let temp = TempDir::new().unwrap();
        let manager = ConfigManager::with_base_dir(temp.path());
        fs::write(manager.path(), r#"{"monthly_budget": 100}"#).unwrap();
        let config = manager.load().unwrap();
        assert_eq!(config.monthly_budget, 100);
        assert_eq!(config.recurring, default_rules());
        assert_eq!(config.currency_symbol, "₩");
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let temp = TempDir::new().unwrap();
        let manager = ConfigManager::with_base_dir(temp.path());
        fs::write(manager.path(), r#"{"locale": "ko-KR", "currency_symbol": "KRW "}"#).unwrap();
        let config = manager.load().unwrap();
        assert_eq!(config.currency_symbol, "KRW ");
        assert_eq!(config.monthly_budget, 4_000_000);
    }

    #[test]
    fn invalid_rule_day_is_rejected() {
        let temp = TempDir::new().unwrap();
        let manager = ConfigManager::with_base_dir(temp.path());
        let mut config = Config::default();
        config.recurring.push(RecurringRule::new("고정지출", "never", 1, 0));
        assert!(matches!(
            manager.save(&config),
            Err(ConfigError::InvalidRule { day: 0, .. })
        ));
    }
}

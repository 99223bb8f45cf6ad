use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use bac_core::CandidateId;
use bac_engine::{
    url_for, BatchSettings, FetchSettings, DEFAULT_BATCH_DELAY, DEFAULT_REPORT_FILE,
    DEFAULT_URL_TEMPLATE,
};
use bac_logging::bac_info;
use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_FILE: &str = "bac.ron";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Result page address; `{id}` is replaced by the candidate number.
    pub url_template: String,
    pub request_timeout_secs: u64,
    pub connect_timeout_secs: u64,
    pub batch_delay_secs: u64,
    pub interactive_pause_secs: u64,
    pub report_path: PathBuf,
    pub write_json_summary: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            url_template: DEFAULT_URL_TEMPLATE.to_string(),
            request_timeout_secs: 10,
            connect_timeout_secs: 10,
            batch_delay_secs: DEFAULT_BATCH_DELAY.as_secs(),
            interactive_pause_secs: 2,
            report_path: PathBuf::from(DEFAULT_REPORT_FILE),
            write_json_summary: true,
        }
    }
}

impl AppConfig {
    /// Loads `explicit` if given (it must exist), otherwise `./bac.ron` when
    /// present, otherwise the defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let config = match explicit {
            Some(path) => Self::read(path)?,
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::read(default_path)?
                } else {
                    Self::default()
                }
            }
        };
        config.validate()?;
        Ok(config)
    }

    fn read(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("cannot read config file {}", path.display()))?;
        let config = Self::from_ron(&text)
            .with_context(|| format!("invalid config file {}", path.display()))?;
        bac_info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn from_ron(text: &str) -> Result<Self, ron::error::SpannedError> {
        ron::from_str(text)
    }

    pub fn validate(&self) -> Result<()> {
        let sample_id = CandidateId::parse("0")?;
        url_for(&self.url_template, &sample_id).context("invalid url_template")?;
        Ok(())
    }

    pub fn fetch_settings(&self) -> FetchSettings {
        FetchSettings {
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
            ..FetchSettings::default()
        }
    }

    pub fn batch_settings(&self) -> BatchSettings {
        BatchSettings {
            delay: Duration::from_secs(self.batch_delay_secs),
        }
    }

    pub fn interactive_pause(&self) -> Duration {
        Duration::from_secs(self.interactive_pause_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::AppConfig;
    use std::path::PathBuf;
    use std::time::Duration;

    #[test]
    fn missing_fields_take_defaults() {
        let config = AppConfig::from_ron("(batch_delay_secs: 5)").unwrap();
        assert_eq!(config.batch_delay_secs, 5);
        assert_eq!(config.request_timeout_secs, 10);
        assert_eq!(config.report_path, PathBuf::from("resultats_batch.txt"));
        assert_eq!(config.batch_settings().delay, Duration::from_secs(5));
    }

    #[test]
    fn defaults_are_valid() {
        AppConfig::default().validate().unwrap();
    }

    #[test]
    fn template_without_placeholder_fails_validation() {
        let config = AppConfig {
            url_template: "https://example.com/".to_string(),
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn explicit_file_is_read_and_validated() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("bac.ron");
        std::fs::write(
            &path,
            r#"(url_template: "http://localhost:8080/r/{id}", write_json_summary: false)"#,
        )
        .unwrap();

        let config = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(config.url_template, "http://localhost:8080/r/{id}");
        assert!(!config.write_json_summary);
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::TempDir::new().unwrap();
        assert!(AppConfig::load(Some(&dir.path().join("absent.ron"))).is_err());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("bad.ron");
        std::fs::write(&path, "(batch_delay_secs: \"soon\")").unwrap();
        assert!(AppConfig::load(Some(&path)).is_err());
    }
}

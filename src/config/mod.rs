use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::{
    currency::{CurrencyCode, LocaleConfig},
    errors::LedgerError,
    ledger::DEFAULT_RECENT_LIMIT,
    utils::{
        paths::{app_data_dir, config_file_in, ensure_dir, exports_dir_in},
        persistence::{load_json, save_json_atomic},
    },
};

pub const RECENT_LIMIT_RANGE: (usize, usize) = (1, 100);
pub const PAGE_LINES_RANGE: (usize, usize) = (10, 500);
pub const DEFAULT_PAGE_LINES: usize = 50;

/// Keys accepted by [`Config::set`], in display order.
pub const CONFIG_KEYS: [&str; 5] = [
    "locale",
    "currency",
    "recent_limit",
    "report_page_lines",
    "export_dir",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub locale: String,
    pub currency: String,
    pub recent_limit: usize,
    pub report_page_lines: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: "en-US".into(),
            currency: "USD".into(),
            recent_limit: DEFAULT_RECENT_LIMIT,
            report_page_lines: DEFAULT_PAGE_LINES,
            export_dir: None,
        }
    }
}

impl Config {
    pub fn currency_code(&self) -> CurrencyCode {
        CurrencyCode::new(&self.currency)
    }

    pub fn locale_config(&self) -> LocaleConfig {
        LocaleConfig::for_tag(&self.locale)
    }

    /// Updates one setting from its textual form.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), LedgerError> {
        let value = value.trim();
        match key {
            "locale" => {
                if value.is_empty() {
                    return Err(LedgerError::Config("locale cannot be empty".into()));
                }
                self.locale = value.to_string();
            }
            "currency" => {
                let code = CurrencyCode::new(value);
                if !code.is_well_formed() {
                    return Err(LedgerError::Config(format!(
                        "currency `{value}` is not a three-letter ISO code"
                    )));
                }
                self.currency = code.0;
            }
            "recent_limit" => self.recent_limit = parse_in_range(key, value, RECENT_LIMIT_RANGE)?,
            "report_page_lines" => {
                self.report_page_lines = parse_in_range(key, value, PAGE_LINES_RANGE)?
            }
            "export_dir" => {
                self.export_dir = match value {
                    "" | "none" => None,
                    path => Some(PathBuf::from(path)),
                };
            }
            other => {
                return Err(LedgerError::Config(format!(
                    "unknown setting `{other}` (expected one of: {})",
                    CONFIG_KEYS.join(", ")
                )))
            }
        }
        debug!(key, value, "config updated");
        Ok(())
    }

    /// Key/value pairs for display.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("locale", self.locale.clone()),
            ("currency", self.currency.clone()),
            ("recent_limit", self.recent_limit.to_string()),
            ("report_page_lines", self.report_page_lines.to_string()),
            (
                "export_dir",
                self.export_dir
                    .as_ref()
                    .map(|path| path.display().to_string())
                    .unwrap_or_else(|| "none".into()),
            ),
        ]
    }
}

fn parse_in_range(key: &str, value: &str, (min, max): (usize, usize)) -> Result<usize, LedgerError> {
    match value.parse::<usize>() {
        Ok(parsed) if (min..=max).contains(&parsed) => Ok(parsed),
        _ => Err(LedgerError::Config(format!(
            "{key} must be a whole number between {min} and {max}"
        ))),
    }
}

pub struct ConfigManager {
    base: PathBuf,
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self, LedgerError> {
        Self::with_base_dir(app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, LedgerError> {
        ensure_dir(&base)?;
        Ok(Self {
            path: config_file_in(&base),
            base,
        })
    }

    /// Loads the stored config, or defaults when none has been saved.
    pub fn load(&self) -> Result<Config, LedgerError> {
        Ok(load_json::<Config>(&self.path)?.unwrap_or_default())
    }

    pub fn save(&self, config: &Config) -> Result<(), LedgerError> {
        save_json_atomic(config, &self.path)?;
        debug!(path = %self.path.display(), "config saved");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory exports land in when no explicit path is given.
    pub fn export_dir(&self, config: &Config) -> PathBuf {
        config
            .export_dir
            .clone()
            .unwrap_or_else(|| exports_dir_in(&self.base))
    }
}

use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::currency::CurrencyCode;
use crate::errors::ConfigError;
use crate::forecast::{ForecastRequest, ForecastScope, Granularity, SeasonalModel, ValueMode};
use crate::utils::{app_data_dir, DEFAULT_LOG_DIRECTIVE};

const CONFIG_FILE: &str = "config.json";
const TMP_SUFFIX: &str = "tmp";

/// Forecast settings used when a caller does not pick its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ForecastDefaults {
    pub granularity: Granularity,
    pub value_mode: ValueMode,
    pub model: SeasonalModel,
}

impl ForecastDefaults {
    pub fn request(&self, scope: ForecastScope) -> ForecastRequest {
        ForecastRequest {
            scope,
            value_mode: self.value_mode,
            granularity: self.granularity,
            model: self.model,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub currency: CurrencyCode,
    pub forecast: ForecastDefaults,
    /// Months of forecast demand examined by supply coverage.
    pub supply_horizon_months: usize,
    pub log_directive: String,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            currency: CurrencyCode::default(),
            forecast: ForecastDefaults::default(),
            supply_horizon_months: 6,
            log_directive: DEFAULT_LOG_DIRECTIVE.into(),
        }
    }
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self, ConfigError> {
        Self::with_base_dir(app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, ConfigError> {
        fs::create_dir_all(&base)?;
        Ok(Self {
            path: base.join(CONFIG_FILE),
        })
    }

    /// Reads the stored configuration, or the defaults when none was saved yet.
    pub fn load(&self) -> Result<AnalysisConfig, ConfigError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            tracing::debug!(path = %self.path.display(), "no configuration file, using defaults");
            Ok(AnalysisConfig::default())
        }
    }

    pub fn save(&self, config: &AnalysisConfig) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        tracing::debug!(path = %self.path.display(), "configuration saved");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

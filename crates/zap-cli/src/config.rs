use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use zap_core::constants::{DEFAULT_AXIS_TICK_COUNT, DEFAULT_EDGE_THRESHOLD, SLIDER_MAX};

use crate::error::{CliError, CliResult};

/// Config file read when `--config` is not given
pub const DEFAULT_CONFIG_PATH: &str = "zap.toml";

/// Largest token decimals accepted for display conversions
const MAX_TOKEN_DECIMALS: u8 = 36;

/// Largest gridline count the axis command will ask for
const MAX_AXIS_TICK_COUNT: usize = 50;

/// CLI configuration loaded from TOML file
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ZapConfig {
    /// Output and token display settings
    pub display: DisplayConfig,

    /// Price axis settings
    pub axis: AxisConfig,

    /// Range slider settings
    pub slider: SliderConfig,
}

/// How results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    Text,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub output: OutputFormat,

    /// Decimals of token0 when a command does not pass them
    pub token0_decimals: u8,

    /// Decimals of token1 when a command does not pass them
    pub token1_decimals: u8,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AxisConfig {
    /// Number of gridlines requested from the tick generator
    pub tick_count: usize,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SliderConfig {
    /// Width in slider percent of the zoom-acceleration band at each end
    pub edge_threshold: f64,
}

impl ZapConfig {
    /// Load configuration from TOML file
    pub fn load(path: &str) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::Io(format!("Failed to read config file {}: {}", path, e)))?;

        let config: ZapConfig = toml::from_str(&content)
            .map_err(|e| CliError::Parse(format!("Failed to parse config file {}: {}", path, e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Load `path` if given, else the default file if present, else defaults
    pub fn resolve(path: Option<&str>) -> CliResult<Self> {
        match path {
            Some(path) => {
                if !Path::new(path).exists() {
                    return Err(CliError::ConfigNotFound(path.to_string()));
                }
                Self::load(path)
            }
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => Self::load(DEFAULT_CONFIG_PATH),
            None => {
                log::debug!("No {} found, using default configuration", DEFAULT_CONFIG_PATH);
                Ok(Self::default())
            }
        }
    }

    /// Save configuration to TOML file
    pub fn save(&self, path: &str) -> CliResult<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)
            .map_err(|e| CliError::Io(format!("Failed to write config file {}: {}", path, e)))?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> CliResult<()> {
        self.display.validate()?;
        self.axis.validate()?;
        self.slider.validate()?;
        Ok(())
    }
}

impl DisplayConfig {
    fn validate(&self) -> CliResult<()> {
        for (field, decimals) in [
            ("display.token0_decimals", self.token0_decimals),
            ("display.token1_decimals", self.token1_decimals),
        ] {
            if decimals > MAX_TOKEN_DECIMALS {
                return Err(CliError::invalid_parameter(
                    field,
                    &decimals.to_string(),
                    &format!("at most {}", MAX_TOKEN_DECIMALS),
                ));
            }
        }
        Ok(())
    }
}

impl AxisConfig {
    fn validate(&self) -> CliResult<()> {
        if self.tick_count == 0 || self.tick_count > MAX_AXIS_TICK_COUNT {
            return Err(CliError::invalid_parameter(
                "axis.tick_count",
                &self.tick_count.to_string(),
                &format!("between 1 and {}", MAX_AXIS_TICK_COUNT),
            ));
        }
        Ok(())
    }
}

impl SliderConfig {
    fn validate(&self) -> CliResult<()> {
        let half = SLIDER_MAX / 2.0;
        if !self.edge_threshold.is_finite()
            || self.edge_threshold <= 0.0
            || self.edge_threshold > half
        {
            return Err(CliError::invalid_parameter(
                "slider.edge_threshold",
                &self.edge_threshold.to_string(),
                &format!("greater than 0 and at most {}", half),
            ));
        }
        Ok(())
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            output: OutputFormat::Text,
            token0_decimals: 18,
            token1_decimals: 18,
        }
    }
}

impl Default for AxisConfig {
    fn default() -> Self {
        Self {
            tick_count: DEFAULT_AXIS_TICK_COUNT,
        }
    }
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            edge_threshold: DEFAULT_EDGE_THRESHOLD,
        }
    }
}

use crate::common::error::{Result, StorageSizeError};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub range: RangeConfig,
    #[serde(default)]
    pub chart: ChartConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RangeConfig {
    /// Smallest block dimension to evaluate.
    #[serde(default = "default_k_min")]
    pub k_min: u32,
    /// Largest block dimension to evaluate (inclusive).
    #[serde(default = "default_k_max")]
    pub k_max: u32,
}

fn default_k_min() -> u32 { 3 }
fn default_k_max() -> u32 { 10 }

impl Default for RangeConfig {
    fn default() -> Self {
        Self {
            k_min: default_k_min(),
            k_max: default_k_max(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ChartConfig {
    #[serde(default = "default_chart_width")]
    pub width: u32,
    #[serde(default = "default_chart_height")]
    pub height: u32,
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

fn default_chart_width() -> u32 { 1024 }
fn default_chart_height() -> u32 { 768 }
fn default_output_dir() -> PathBuf { PathBuf::from("./visualizations") }

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: default_chart_width(),
            height: default_chart_height(),
            output_dir: default_output_dir(),
        }
    }
}

impl Config {
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(StorageSizeError::Config(format!(
                "Config file not found: {}", path.display()
            )));
        }

        println!("Loading config from: {}", path.display());
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)
            .map_err(|e| StorageSizeError::Config(format!("Config parse error: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        // Validate the evaluation range
        if self.range.k_min < 1 {
            return Err(StorageSizeError::Config(format!(
                "Block dimension must be at least 1, got {}", self.range.k_min
            )));
        }
        if self.range.k_min > self.range.k_max {
            return Err(StorageSizeError::Config(format!(
                "Range is inverted: k_min {} > k_max {}",
                self.range.k_min, self.range.k_max
            )));
        }
        // Constraint words are at most 65536 bits wide, so size = k² caps at 256²
        if self.range.k_max > 256 {
            return Err(StorageSizeError::Config(format!(
                "Block dimension must be at most 256, got {}", self.range.k_max
            )));
        }

        // Validate chart dimensions
        if self.chart.width == 0 || self.chart.width > 4096 {
            return Err(StorageSizeError::Config(format!(
                "Chart width must be between 1 and 4096, got {}", self.chart.width
            )));
        }
        if self.chart.height == 0 || self.chart.height > 4096 {
            return Err(StorageSizeError::Config(format!(
                "Chart height must be between 1 and 4096, got {}", self.chart.height
            )));
        }

        Ok(())
    }

    /// The ordered sequence of block dimensions to evaluate.
    pub fn k_values(&self) -> RangeInclusive<u32> {
        self.range.k_min..=self.range.k_max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.range.k_min, 3);
        assert_eq!(config.range.k_max, 10);
        assert_eq!(config.k_values().collect::<Vec<_>>().len(), 8);
    }

    #[test]
    fn test_rejects_zero_k_min() {
        let mut config = Config::default();
        config.range.k_min = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_inverted_range() {
        let mut config = Config::default();
        config.range.k_min = 8;
        config.range.k_max = 3;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_oversized_board() {
        let mut config = Config::default();
        config.range.k_max = 300;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_bad_chart_dimensions() {
        let mut config = Config::default();
        config.chart.width = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.chart.height = 5000;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_parses_partial_toml() {
        let config: Config = toml::from_str("[range]\nk_max = 5\n").unwrap();
        assert_eq!(config.range.k_min, 3);
        assert_eq!(config.range.k_max, 5);
        assert_eq!(config.chart.width, 1024);
        assert_eq!(config.chart.output_dir, PathBuf::from("./visualizations"));
    }
}

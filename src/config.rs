use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level Isotherm configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IsothermConfig {
    /// Output settings.
    #[serde(default)]
    pub output: OutputToml,

    /// Gridded synthesis settings.
    #[serde(default)]
    pub grid: GridToml,

    /// Impact-indicator settings.
    #[serde(default)]
    pub impact: ImpactToml,
}

impl IsothermConfig {
    /// Reads and parses a TOML configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        toml::from_str(&toml_str)
            .with_context(|| format!("failed to parse TOML config: {}", path.display()))
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputToml {
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,
    #[serde(default = "default_compression")]
    pub compression: String,
    #[serde(default = "default_row_group_size")]
    pub row_group_size: usize,
    #[serde(default = "default_grid_batch_size")]
    pub grid_batch_size: usize,
    #[serde(default = "default_impact_batch_size")]
    pub impact_batch_size: usize,
}

impl Default for OutputToml {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
            compression: default_compression(),
            row_group_size: default_row_group_size(),
            grid_batch_size: default_grid_batch_size(),
            impact_batch_size: default_impact_batch_size(),
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("output")
}
fn default_compression() -> String {
    "snappy".to_string()
}
fn default_row_group_size() -> usize {
    1_000_000
}
fn default_grid_batch_size() -> usize {
    isotherm_pipeline::DEFAULT_GRID_BATCH_SIZE
}
fn default_impact_batch_size() -> usize {
    isotherm_pipeline::DEFAULT_IMPACT_BATCH_SIZE
}

/// Scenario, period and indicator selections; `None` means all.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GridToml {
    #[serde(default)]
    pub scenarios: Option<Vec<String>>,
    #[serde(default)]
    pub periods: Option<Vec<String>>,
    #[serde(default)]
    pub indicators: Option<Vec<String>>,
    #[serde(default)]
    pub extent: Option<ExtentToml>,
}

/// Inclusive latitude and exclusive longitude bounds with one step.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExtentToml {
    pub lat_min: f64,
    pub lat_max: f64,
    pub lon_min: f64,
    pub lon_max: f64,
    pub step: f64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ImpactToml {
    #[serde(default)]
    pub scenarios: Option<Vec<String>>,
    #[serde(default)]
    pub periods: Option<Vec<String>>,
    #[serde(default)]
    pub indicators: Option<Vec<String>>,
    /// Replaces the built-in city list when set.
    #[serde(default)]
    pub points: Option<Vec<PointToml>>,
    #[serde(default)]
    pub rasters: Vec<RasterToml>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PointToml {
    pub lat: f64,
    pub lon: f64,
    #[serde(default)]
    pub label: Option<String>,
}

/// A dataset bound to one impact indicator; exactly one of `path` or `url`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RasterToml {
    pub indicator: String,
    #[serde(default)]
    pub scenario: Option<String>,
    #[serde(default)]
    pub period: Option<String>,
    #[serde(default)]
    pub path: Option<PathBuf>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    isotherm_io::DEFAULT_FETCH_TIMEOUT.as_secs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let config: IsothermConfig = toml::from_str("").unwrap();
        assert_eq!(config.output.dir, PathBuf::from("output"));
        assert_eq!(config.output.compression, "snappy");
        assert_eq!(config.output.grid_batch_size, 2_000);
        assert_eq!(config.output.impact_batch_size, 1_000);
        assert!(config.grid.scenarios.is_none());
        assert!(config.grid.extent.is_none());
        assert!(config.impact.rasters.is_empty());
    }

    #[test]
    fn full_file_parses() {
        let text = r#"
            [output]
            dir = "/tmp/out"
            compression = "zstd"
            grid_batch_size = 500

            [grid]
            scenarios = ["ssp245", "ssp585"]
            periods = ["2050"]
            indicators = ["tas", "hd35"]
            extent = { lat_min = -10.0, lat_max = 10.0, lon_min = 0.0, lon_max = 20.0, step = 2.5 }

            [impact]
            indicators = ["flood_depth"]
            points = [{ lat = 40.7, lon = -74.0, label = "New York" }, { lat = 0.0, lon = 0.0 }]

            [[impact.rasters]]
            indicator = "flood_depth"
            period = "2090"
            path = "data/flddph_2090.nc"

            [[impact.rasters]]
            indicator = "flood_depth"
            url = "https://example.org/flddph.nc"
            timeout_secs = 30
        "#;
        let config: IsothermConfig = toml::from_str(text).unwrap();
        assert_eq!(config.output.compression, "zstd");
        assert_eq!(config.output.grid_batch_size, 500);
        assert_eq!(config.output.impact_batch_size, 1_000);
        assert_eq!(config.grid.periods.as_deref(), Some(&["2050".to_string()][..]));
        assert_eq!(config.grid.extent.as_ref().map(|e| e.step), Some(2.5));
        let points = config.impact.points.as_ref().unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].label.as_deref(), Some("New York"));
        assert_eq!(config.impact.rasters.len(), 2);
        assert_eq!(config.impact.rasters[0].timeout_secs, 60);
        assert_eq!(config.impact.rasters[1].timeout_secs, 30);
    }

    #[test]
    fn unknown_field_rejected() {
        let err = toml::from_str::<IsothermConfig>("[grid]\nresolution = 1.0\n");
        assert!(err.is_err());
    }

    #[test]
    fn load_reports_missing_file() {
        let err = IsothermConfig::load(Path::new("/nonexistent/isotherm.toml")).unwrap_err();
        assert!(format!("{err:#}").contains("failed to read config"));
    }
}

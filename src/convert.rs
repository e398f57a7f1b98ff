//! Pure conversion functions: TOML config structs -> crate API config types.
//!
//! Every id is parsed here, so a typo fails the command before any sink is
//! touched.

use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result, bail};

use crate::config::*;

use isotherm_impact::{ImpactIndicator, default_points};
use isotherm_io::{Compression, DatasetSource, WriterConfig};
use isotherm_pathway::{SamplePoint, Scenario, TimePeriod};
use isotherm_pipeline::{GridRunConfig, ImpactRunConfig, RasterBinding};
use isotherm_synth::{GridIndicator, GridSpec};

/// Parses a compression algorithm name string into the corresponding enum variant.
pub fn parse_compression(s: &str) -> Result<Compression> {
    match s.to_lowercase().as_str() {
        "none" => Ok(Compression::None),
        "snappy" => Ok(Compression::Snappy),
        "zstd" => Ok(Compression::Zstd),
        other => bail!("unknown compression: {other:?}"),
    }
}

/// Parses every id in `ids`, or returns `all` when no selection is given.
fn parse_selection<T>(ids: Option<&[String]>, all: &[T], what: &str) -> Result<Vec<T>>
where
    T: FromStr + Copy,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match ids {
        None => Ok(all.to_vec()),
        Some(ids) => ids
            .iter()
            .map(|id| {
                id.parse::<T>()
                    .with_context(|| format!("invalid {what} in config: {id:?}"))
            })
            .collect(),
    }
}

/// Builds a [`WriterConfig`] from the TOML output configuration.
pub fn build_writer_config(output: &OutputToml) -> Result<WriterConfig> {
    let compression = parse_compression(&output.compression)?;
    Ok(WriterConfig::default()
        .with_compression(compression)
        .with_row_group_size(output.row_group_size))
}

/// Builds a [`GridRunConfig`] from the TOML grid configuration.
pub fn build_grid_config(grid: &GridToml, output: &OutputToml) -> Result<GridRunConfig> {
    let spec = match &grid.extent {
        Some(e) => GridSpec::from_extent(e.lat_min, e.lat_max, e.lon_min, e.lon_max, e.step),
        None => GridSpec::default(),
    };
    let config = GridRunConfig::from_grid(&spec)
        .context("invalid grid extent")?
        .with_scenarios(parse_selection(
            grid.scenarios.as_deref(),
            &Scenario::ALL,
            "scenario",
        )?)
        .with_periods(parse_selection(
            grid.periods.as_deref(),
            &TimePeriod::FUTURE,
            "time period",
        )?)
        .with_indicators(parse_selection(
            grid.indicators.as_deref(),
            &GridIndicator::ALL,
            "grid indicator",
        )?)
        .with_batch_size(output.grid_batch_size);
    config.validate().context("invalid grid configuration")?;
    Ok(config)
}

/// Converts one TOML raster entry into a [`RasterBinding`].
///
/// Exactly one of `path` or `url` must be set.
pub fn parse_binding(raster: &RasterToml) -> Result<RasterBinding> {
    let indicator: ImpactIndicator = raster
        .indicator
        .parse()
        .with_context(|| format!("invalid raster indicator: {:?}", raster.indicator))?;
    let scenario = raster
        .scenario
        .as_deref()
        .map(Scenario::from_str)
        .transpose()
        .context("invalid raster scenario")?;
    let period = raster
        .period
        .as_deref()
        .map(TimePeriod::from_str)
        .transpose()
        .context("invalid raster period")?;
    let source = match (&raster.path, &raster.url) {
        (Some(path), None) => DatasetSource::Local(path.clone()),
        (None, Some(url)) => DatasetSource::Remote {
            url: url.clone(),
            timeout: Duration::from_secs(raster.timeout_secs),
        },
        (Some(_), Some(_)) => {
            bail!("raster for {indicator} must have exactly one of path or url, got both")
        }
        (None, None) => {
            bail!("raster for {indicator} must have exactly one of path or url, got neither")
        }
    };
    Ok(RasterBinding {
        indicator,
        scenario,
        period,
        source,
    })
}

fn build_points(points: Option<&[PointToml]>) -> Result<Vec<SamplePoint>> {
    match points {
        None => default_points().context("invalid built-in city table"),
        Some(points) => points
            .iter()
            .map(|p| -> Result<SamplePoint> {
                let point = SamplePoint::new(p.lat, p.lon)
                    .with_context(|| format!("invalid impact point ({}, {})", p.lat, p.lon))?;
                Ok(match &p.label {
                    Some(label) => point.with_label(label.as_str()),
                    None => point,
                })
            })
            .collect(),
    }
}

/// Builds an [`ImpactRunConfig`] from the TOML impact configuration.
pub fn build_impact_config(impact: &ImpactToml, output: &OutputToml) -> Result<ImpactRunConfig> {
    let mut config = ImpactRunConfig::from_points(build_points(impact.points.as_deref())?)
        .with_scenarios(parse_selection(
            impact.scenarios.as_deref(),
            &Scenario::ALL,
            "scenario",
        )?)
        .with_periods(parse_selection(
            impact.periods.as_deref(),
            &TimePeriod::ALL,
            "time period",
        )?)
        .with_indicators(parse_selection(
            impact.indicators.as_deref(),
            &ImpactIndicator::ALL,
            "impact indicator",
        )?)
        .with_batch_size(output.impact_batch_size);
    for raster in &impact.rasters {
        config = config.with_binding(parse_binding(raster)?);
    }
    config.validate().context("invalid impact configuration")?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> IsothermConfig {
        toml::from_str(text).unwrap()
    }

    #[test]
    fn defaults_cover_everything() {
        let config = parse("");
        let grid = build_grid_config(&config.grid, &config.output).unwrap();
        assert_eq!(grid.points().len(), 29 * 72);
        assert_eq!(grid.periods(), &TimePeriod::FUTURE);
        assert_eq!(grid.indicators().len(), 7);

        let impact = build_impact_config(&config.impact, &config.output).unwrap();
        assert_eq!(impact.points().len(), isotherm_impact::GLOBAL_CITIES.len());
        assert_eq!(impact.periods(), &TimePeriod::ALL);
        assert!(impact.bindings().is_empty());
    }

    #[test]
    fn selections_are_parsed() {
        let config = parse(
            r#"
            [grid]
            scenarios = ["SSP126"]
            indicators = ["cdd", "tas"]
            extent = { lat_min = 0.0, lat_max = 10.0, lon_min = 0.0, lon_max = 10.0, step = 5.0 }
            "#,
        );
        let grid = build_grid_config(&config.grid, &config.output).unwrap();
        assert_eq!(grid.scenarios(), &[Scenario::Ssp126]);
        assert_eq!(grid.indicators(), &[GridIndicator::Cdd, GridIndicator::Tas]);
        assert_eq!(grid.points().len(), 3 * 2);
    }

    #[test]
    fn unknown_ids_fail() {
        let config = parse("[grid]\nindicators = [\"tas\", \"windspeed\"]\n");
        let err = build_grid_config(&config.grid, &config.output).unwrap_err();
        assert!(format!("{err:#}").contains("windspeed"));

        let config = parse("[impact]\nperiods = [\"2100\"]\n");
        assert!(build_impact_config(&config.impact, &config.output).is_err());
    }

    #[test]
    fn bad_extent_fails() {
        let config = parse(
            "[grid]\nextent = { lat_min = 0.0, lat_max = 10.0, lon_min = 0.0, lon_max = 10.0, step = 0.0 }\n",
        );
        assert!(build_grid_config(&config.grid, &config.output).is_err());
    }

    #[test]
    fn custom_points_and_bindings() {
        let config = parse(
            r#"
            [impact]
            points = [{ lat = 51.5, lon = -0.13, label = "London" }]

            [[impact.rasters]]
            indicator = "water_stress"
            scenario = "ssp370"
            path = "pwtot.nc"

            [[impact.rasters]]
            indicator = "heat_mortality"
            url = "https://example.org/hm.nc"
            timeout_secs = 5
            "#,
        );
        let impact = build_impact_config(&config.impact, &config.output).unwrap();
        assert_eq!(impact.points()[0].label(), Some("London"));
        assert_eq!(impact.bindings().len(), 2);
        assert_eq!(impact.bindings()[0].scenario, Some(Scenario::Ssp370));
        assert_eq!(
            impact.bindings()[1].source,
            DatasetSource::Remote {
                url: "https://example.org/hm.nc".to_string(),
                timeout: Duration::from_secs(5),
            }
        );
    }

    #[test]
    fn binding_needs_exactly_one_location() {
        let config = parse("[[impact.rasters]]\nindicator = \"flood_depth\"\n");
        let err = build_impact_config(&config.impact, &config.output).unwrap_err();
        assert!(err.to_string().contains("neither"));
    }

    #[test]
    fn duplicate_points_fail_before_any_run() {
        let config = parse(
            "[impact]\npoints = [{ lat = 10.0, lon = 20.0 }, { lat = 10.0, lon = 380.0 }]\n",
        );
        let err = build_impact_config(&config.impact, &config.output).unwrap_err();
        assert!(format!("{err:#}").contains("duplicate point (10, 20)"));

        let config = parse(
            "[grid]\nextent = { lat_min = 0.0, lat_max = 0.0, lon_min = -180.0, lon_max = 185.0, step = 5.0 }\n",
        );
        let err = build_grid_config(&config.grid, &config.output).unwrap_err();
        assert!(format!("{err:#}").contains("invalid grid configuration"));
    }

    #[test]
    fn invalid_point_fails() {
        let config = parse("[impact]\npoints = [{ lat = 95.0, lon = 0.0 }]\n");
        assert!(build_impact_config(&config.impact, &config.output).is_err());
    }

    #[test]
    fn compression_names() {
        assert_eq!(parse_compression("ZSTD").unwrap(), Compression::Zstd);
        assert!(parse_compression("lz4").is_err());
        let config = parse("[output]\ncompression = \"none\"\n");
        let writer = build_writer_config(&config.output).unwrap();
        assert_eq!(writer.compression(), Compression::None);
    }
}

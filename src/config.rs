use std::path::{Path, PathBuf};

use isochronic_core::algo::isochrone::Isochrone;
use isochronic_core::loading::NetworkSource;
use isochronic_core::routing::{SolverOptions, SolverStrategy};
use isochronic_core::{MapConfig, TravelTime};
use serde::Deserialize;

use crate::error::AppError;
use crate::palette;

/// Contents of the TOML configuration file
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub input: NetworkSource,
    #[serde(default)]
    pub center: CenterConfig,
    #[serde(default)]
    pub isochrones: IsochroneConfig,
    #[serde(default)]
    pub solver: SolverConfig,
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default = "default_output")]
    pub output: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CenterConfig {
    pub lat: f64,
    pub lon: f64,
}

impl Default for CenterConfig {
    fn default() -> Self {
        // McGill University, Montreal
        Self {
            lat: 45.50390,
            lon: -73.57872,
        }
    }
}

/// Isochrone cutoffs are `step`, `2 * step`, ... `count * step` seconds
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct IsochroneConfig {
    pub count: usize,
    pub step: TravelTime,
    /// One label per isochrone, innermost first; plasma colors when absent
    pub labels: Option<Vec<String>>,
}

impl Default for IsochroneConfig {
    fn default() -> Self {
        Self {
            count: 6,
            step: 450.0,
            labels: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    pub strategy: SolverStrategy,
    pub max_travel_time: Option<TravelTime>,
    pub threads: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            strategy: SolverStrategy::default(),
            max_travel_time: None,
            threads: 2,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub outlier_fraction: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            outlier_fraction: 0.025,
        }
    }
}

fn default_output() -> PathBuf {
    PathBuf::from("isochronic_map.geojson")
}

impl AppConfig {
    pub fn from_file(path: &Path) -> Result<Self, AppError> {
        let content = std::fs::read_to_string(path).map_err(|source| AppError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(toml::from_str(&content)?)
    }

    pub fn map_config(&self) -> Result<MapConfig, AppError> {
        Ok(MapConfig {
            lat: self.center.lat,
            lon: self.center.lon,
            isochrones: self.isochrones.build()?,
            outlier_fraction: self.render.outlier_fraction,
            solver: SolverOptions {
                strategy: self.solver.strategy,
                max_travel_time: self.solver.max_travel_time,
            },
        })
    }
}

impl IsochroneConfig {
    /// Generated plasma colors run from the outermost band (dark) to the innermost (bright)
    pub fn build(&self) -> Result<Vec<Isochrone>, AppError> {
        let labels = match &self.labels {
            Some(labels) if labels.len() != self.count => {
                return Err(AppError::InvalidConfig(format!(
                    "{} isochrone labels given for {} isochrones",
                    labels.len(),
                    self.count
                )));
            }
            Some(labels) => labels.clone(),
            None => palette::plasma(self.count).into_iter().rev().collect(),
        };

        Ok((1..=self.count)
            .zip(labels)
            .map(|(step, label)| {
                #[allow(clippy::cast_precision_loss)]
                let cutoff = step as f64 * self.step;
                Isochrone::new(cutoff, label)
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [input]
            nodes_path = "nodes.csv"
            edges_path = "edges.csv"
            "#,
        )
        .unwrap();

        assert_eq!(config.output, PathBuf::from("isochronic_map.geojson"));
        assert_eq!(config.solver.threads, 2);

        let map_config = config.map_config().unwrap();
        assert_eq!(map_config.lat, 45.50390);
        assert_eq!(map_config.outlier_fraction, 0.025);
        assert_eq!(map_config.solver, SolverOptions::default());
        let cutoffs: Vec<f64> = map_config.isochrones.iter().map(|i| i.cutoff).collect();
        assert_eq!(cutoffs, vec![450.0, 900.0, 1350.0, 1800.0, 2250.0, 2700.0]);
        // Innermost band is the bright end of plasma
        assert_eq!(map_config.isochrones[0].label, "#f0f921");
        assert_eq!(map_config.isochrones[5].label, "#0d0887");
    }

    #[test]
    fn test_full_config() {
        let config: AppConfig = toml::from_str(
            r##"
            output = "out/map.geojson"

            [input]
            nodes_path = "data/nodes.csv"
            edges_path = "data/edges.csv"

            [center]
            lat = 48.8566
            lon = 2.3522

            [isochrones]
            count = 2
            step = 600.0
            labels = ["#ff0000", "#0000ff"]

            [solver]
            strategy = "per_target"
            max_travel_time = 3600.0
            threads = 8

            [render]
            outlier_fraction = 0.05
            "##,
        )
        .unwrap();

        let map_config = config.map_config().unwrap();
        assert_eq!(map_config.solver.strategy, SolverStrategy::PerTarget);
        assert_eq!(map_config.solver.max_travel_time, Some(3600.0));
        assert_eq!(
            map_config.isochrones,
            vec![
                Isochrone::new(600.0, "#ff0000"),
                Isochrone::new(1200.0, "#0000ff")
            ]
        );
        assert_eq!(config.solver.threads, 8);
        assert_eq!(config.input.edges_path, PathBuf::from("data/edges.csv"));
    }

    #[test]
    fn test_label_count_mismatch() {
        let config = IsochroneConfig {
            count: 3,
            step: 60.0,
            labels: Some(vec!["a".into()]),
        };
        assert!(matches!(config.build(), Err(AppError::InvalidConfig(_))));
    }
}

/// Viewer configuration loaded from a TOML file
use cyclogon_core::{Color, Coloring, CurveParams, OrthoView, SampleDomain, BLUE};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Everything needed to sample and show one curve.
///
/// Missing keys fall back to the square cyclogon over `[-20, 20)` drawn in
/// blue inside a `[-10, 10]` view.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub curve: CurveParams,
    pub domain: SampleDomain,
    pub view: OrthoView,
    /// Strip color, RGB in 0..1
    pub color: [f32; 3],
    /// When set, blend from `color` to this along the strip
    pub gradient_end: Option<[f32; 3]>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            curve: CurveParams::default(),
            domain: SampleDomain::default(),
            view: OrthoView::default(),
            color: [BLUE.x, BLUE.y, BLUE.z],
            gradient_end: None,
        }
    }
}

impl ViewerConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn coloring(&self) -> Coloring {
        let start = Color::from(self.color);
        match self.gradient_end {
            Some(end) => Coloring::Gradient {
                start,
                end: Color::from(end),
            },
            None => Coloring::Solid(start),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_reference_values() {
        let config = ViewerConfig::from_toml("").unwrap();
        assert_eq!(config, ViewerConfig::default());
        assert_eq!(config.curve.sides, 4);
        assert_eq!(config.domain.len(), 400);
        assert_eq!(config.coloring(), Coloring::Solid(BLUE));
    }

    #[test]
    fn test_partial_sections() {
        let config = ViewerConfig::from_toml(
            r#"
            color = [1.0, 0.0, 0.0]
            gradient_end = [0.0, 1.0, 0.0]

            [curve]
            sides = 6

            [domain]
            step = 0.5
            "#,
        )
        .unwrap();

        assert_eq!(config.curve.sides, 6);
        assert_eq!(config.curve.radius, 1.0);
        assert_eq!(config.domain.step, 0.5);
        assert_eq!(config.domain.xmin, -20.0);
        assert_eq!(config.view, OrthoView::default());
        assert_eq!(
            config.coloring(),
            Coloring::Gradient {
                start: Color::new(1.0, 0.0, 0.0),
                end: Color::new(0.0, 1.0, 0.0),
            }
        );
    }

    #[test]
    fn test_bad_values_are_rejected() {
        assert!(ViewerConfig::from_toml("[curve]\nsides = \"four\"").is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = ViewerConfig::load(Path::new("/nonexistent/cyclogon.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}

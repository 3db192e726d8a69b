//! Project configuration (decor.yaml) parsing.
//!
//! The config file sets defaults for the pipeline and the output directory.
//! Every field is optional; command-line flags override loaded values.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::colors::ClusterOptions;
use crate::error::{DecorError, Result};
use crate::pipeline::PipelineOptions;

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "decor.yaml";

/// Configuration loaded from decor.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Bounding box for size normalization.
    pub max_width: u32,
    pub max_height: u32,

    /// Number of palette colours.
    pub colors: usize,

    /// Palette strip size in pixels.
    pub strip_width: u32,
    pub strip_height: u32,

    /// Output directory for rendered images.
    pub output: PathBuf,

    /// Clustering seed, restarts and limits.
    pub seed: u64,
    pub runs: usize,
    pub max_iter: usize,
    pub converge: f32,

    /// Optional wall-clock budget for clustering restarts, in milliseconds.
    pub deadline_ms: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        let pipeline = PipelineOptions::default();
        Self {
            max_width: pipeline.max_width,
            max_height: pipeline.max_height,
            colors: pipeline.colors,
            strip_width: pipeline.strip_width,
            strip_height: pipeline.strip_height,
            output: PathBuf::from("dist"),
            seed: pipeline.cluster.seed,
            runs: pipeline.cluster.runs,
            max_iter: pipeline.cluster.max_iter,
            converge: pipeline.cluster.converge,
            deadline_ms: None,
        }
    }
}

impl Config {
    /// Load config from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| DecorError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Load an explicit config file, or `decor.yaml` from the working
    /// directory if present, or fall back to defaults.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let path = Path::new(CONFIG_FILE);
                if path.exists() {
                    Self::load(path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Parse config from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content).map_err(|e| DecorError::Parse {
            message: format!("Invalid config: {}", e),
            help: Some(format!("Check {} syntax", CONFIG_FILE)),
        })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.max_width == 0 || self.max_height == 0 {
            return Err(DecorError::Parse {
                message: format!(
                    "Invalid config: bounding box {}x{} has no pixels",
                    self.max_width, self.max_height
                ),
                help: Some("max_width and max_height must be at least 1".to_string()),
            });
        }
        if self.colors == 0 {
            return Err(DecorError::Parse {
                message: "Invalid config: colors must be at least 1".to_string(),
                help: None,
            });
        }
        Ok(())
    }

    /// Pipeline options described by this config.
    pub fn pipeline_options(&self) -> PipelineOptions {
        PipelineOptions {
            max_width: self.max_width,
            max_height: self.max_height,
            colors: self.colors,
            strip_width: self.strip_width,
            strip_height: self.strip_height,
            cluster: ClusterOptions {
                runs: self.runs,
                max_iter: self.max_iter,
                converge: self.converge,
                seed: self.seed,
                deadline: self.deadline_ms.map(Duration::from_millis),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_minimal_config() {
        let config = Config::parse("output: build").unwrap();

        assert_eq!(config.output, PathBuf::from("build"));
        assert_eq!(config.colors, 5);
        assert_eq!(config.max_width, 800);
        assert!(config.deadline_ms.is_none());
    }

    #[test]
    fn test_parse_full_config() {
        let yaml = r#"
max_width: 1024
max_height: 768
colors: 8
strip_width: 640
strip_height: 80
output: dist/renders
seed: 7
runs: 3
max_iter: 100
converge: 0.001
deadline_ms: 250
"#;
        let config = Config::parse(yaml).unwrap();
        let options = config.pipeline_options();

        assert_eq!(
            options,
            PipelineOptions {
                max_width: 1024,
                max_height: 768,
                colors: 8,
                strip_width: 640,
                strip_height: 80,
                cluster: ClusterOptions {
                    runs: 3,
                    max_iter: 100,
                    converge: 0.001,
                    seed: 7,
                    deadline: Some(Duration::from_millis(250)),
                },
            }
        );
        assert_eq!(config.output, PathBuf::from("dist/renders"));
    }

    #[test]
    fn test_default_config_matches_pipeline_defaults() {
        let config = Config::default();
        assert_eq!(config.pipeline_options(), PipelineOptions::default());
        assert_eq!(config.output, PathBuf::from("dist"));
    }

    #[test]
    fn test_invalid_yaml() {
        assert!(Config::parse("colors: [").is_err());
        assert!(Config::parse("colors: many").is_err());
    }

    #[test]
    fn test_rejects_zero_values() {
        assert!(Config::parse("colors: 0").is_err());
        assert!(Config::parse("max_width: 0").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "colors: 3\n").unwrap();

        let config = Config::discover(Some(&path)).unwrap();
        assert_eq!(config.colors, 3);

        let missing = dir.path().join("nope.yaml");
        assert!(matches!(Config::load(&missing), Err(DecorError::Io { .. })));
    }
}

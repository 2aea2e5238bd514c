//! Configuration file loading and discovery.
//!
//! Supports loading configuration from YAML files with automatic discovery.

use super::types::{AppConfig, ConfigOverrides};
use std::path::{Path, PathBuf};

// ============================================================================
// Configuration File Discovery
// ============================================================================

/// Standard config file names to search for.
pub const CONFIG_FILE_NAMES: &[&str] = &[
    ".ecotrack.yaml",
    ".ecotrack.yml",
    "ecotrack.yaml",
    "ecotrack.yml",
];

/// Directories searched for a config file, in order.
///
/// The explicit `--config` path is not included; it always wins.
#[must_use]
pub fn config_search_dirs() -> Vec<PathBuf> {
    let mut dirs = Vec::new();
    if let Ok(cwd) = std::env::current_dir() {
        dirs.push(cwd);
    }
    if let Some(config_dir) = dirs::config_dir() {
        dirs.push(config_dir.join("ecotrack"));
    }
    if let Some(home) = dirs::home_dir() {
        dirs.push(home);
    }
    dirs
}

/// Discover a config file by searching standard locations.
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Current directory
/// 3. User config directory (~/.config/ecotrack/)
/// 4. Home directory
#[must_use]
pub fn discover_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        if path.exists() {
            return Some(path.to_path_buf());
        }
    }

    config_search_dirs()
        .iter()
        .find_map(|dir| find_config_in_dir(dir))
}

/// Find a config file in a specific directory.
fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

// ============================================================================
// Configuration File Loading
// ============================================================================

/// Error type for config file operations.
#[derive(Debug)]
pub enum ConfigFileError {
    /// File not found
    NotFound(PathBuf),
    /// IO error reading file
    Io(std::io::Error),
    /// YAML parsing error
    Parse(serde_yaml::Error),
}

impl std::fmt::Display for ConfigFileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(path) => {
                write!(f, "Config file not found: {}", path.display())
            }
            Self::Io(e) => write!(f, "Failed to read config file: {e}"),
            Self::Parse(e) => write!(f, "Failed to parse config file: {e}"),
        }
    }
}

impl std::error::Error for ConfigFileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NotFound(_) => None,
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ConfigFileError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_yaml::Error> for ConfigFileError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Parse(err)
    }
}

/// Load an `AppConfig` from a YAML file.
pub fn load_config_file(path: &Path) -> Result<AppConfig, ConfigFileError> {
    if !path.exists() {
        return Err(ConfigFileError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let config: AppConfig = serde_yaml::from_str(&content)?;
    Ok(config)
}

/// Load config from discovered file, or return default.
#[must_use]
pub fn load_or_default(explicit_path: Option<&Path>) -> (AppConfig, Option<PathBuf>) {
    discover_config_file(explicit_path).map_or_else(
        || (AppConfig::default(), None),
        |path| match load_config_file(&path) {
            Ok(config) => (config, Some(path)),
            Err(e) => {
                tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                (AppConfig::default(), None)
            }
        },
    )
}

// ============================================================================
// Configuration Merging
// ============================================================================

impl AppConfig {
    /// Apply CLI overrides on top of this config.
    ///
    /// Every override that is set wins, including one that happens to equal
    /// the built-in default.
    pub fn merge(&mut self, overrides: &ConfigOverrides) {
        // Scoring config
        if let Some(value) = overrides.max_carbon_footprint {
            self.scoring.max_carbon_footprint = value;
        }
        if let Some(value) = overrides.max_packaging_waste {
            self.scoring.max_packaging_waste = value;
        }
        if let Some((carbon, packaging)) = overrides.weights {
            self.scoring.carbon_weight = carbon;
            self.scoring.packaging_weight = packaging;
        }

        // Recommendation config
        if let Some(limit) = overrides.candidate_limit {
            self.recommendation.candidate_limit = limit;
        }
        if let Some(points) = overrides.min_eco_points {
            self.recommendation.min_eco_points = points;
        }
        if let Some(parallel) = overrides.parallel_lookups {
            self.recommendation.parallel_lookups = parallel;
        }

        // Output config
        if let Some(format) = overrides.format {
            self.output.format = format;
        }
        if overrides.file.is_some() {
            self.output.file.clone_from(&overrides.file);
        }
        if let Some(no_color) = overrides.no_color {
            self.output.no_color = no_color;
        }
    }

    /// Load from file and merge with CLI overrides.
    #[must_use]
    pub fn from_file_with_overrides(
        config_path: Option<&Path>,
        cli_overrides: &ConfigOverrides,
    ) -> (Self, Option<PathBuf>) {
        let (mut config, loaded_from) = load_or_default(config_path);
        config.merge(cli_overrides);
        (config, loaded_from)
    }
}

// ============================================================================
// Example Config Generation
// ============================================================================

/// Generate an example config file content from the defaults.
#[must_use]
pub fn generate_example_config() -> String {
    let example = AppConfig::default();
    format!(
        r"# EcoTrack Configuration
# Place this file at .ecotrack.yaml in your project root or ~/.config/ecotrack/

{}
",
        serde_yaml::to_string(&example).unwrap_or_default()
    )
}

/// Generate a commented example config with all options.
#[must_use]
pub fn generate_full_example_config() -> String {
    r"# EcoTrack Configuration File
# ============================
#
# This file configures ecotrack behavior. Place it at:
#   - .ecotrack.yaml in your project root
#   - ~/.config/ecotrack/ecotrack.yaml for global config
#
# CLI arguments always override file settings.

# EcoScore formula
scoring:
  # Carbon footprint (kg CO2e) at or above which the carbon score is 0
  max_carbon_footprint: 100.0
  # Packaging waste (grams) at or above which the packaging score is 0
  max_packaging_waste: 500.0
  # Weights must sum to 1.0
  carbon_weight: 0.6
  packaging_weight: 0.4

# Alternative search and EcoPoints
recommendation:
  # Sustainable candidates requested per cart item
  candidate_limit: 3
  # Minimum EcoPoints for any suggested swap
  min_eco_points: 5
  # Look up alternatives for cart items concurrently
  parallel_lookups: true

# Output configuration
output:
  # Format: summary, json
  format: summary
  # Output file path (omit for stdout)
  # file: report.json
  # Disable colored output
  no_color: false
"
    .to_string()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_CANDIDATE_LIMIT, DEFAULT_MIN_ECO_POINTS};
    use crate::reports::ReportFormat;
    use tempfile::TempDir;

    #[test]
    fn test_find_config_in_dir() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join(".ecotrack.yaml");
        std::fs::write(&config_path, "recommendation:\n  candidate_limit: 5\n").unwrap();

        let found = find_config_in_dir(tmp.path());
        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_find_config_in_dir_not_found() {
        let tmp = TempDir::new().unwrap();
        assert_eq!(find_config_in_dir(tmp.path()), None);
    }

    #[test]
    fn test_load_config_file() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.yaml");

        let yaml = r"
scoring:
  max_carbon_footprint: 80.0
recommendation:
  min_eco_points: 10
  parallel_lookups: false
output:
  format: json
";
        std::fs::write(&config_path, yaml).unwrap();

        let config = load_config_file(&config_path).unwrap();
        assert!((config.scoring.max_carbon_footprint - 80.0).abs() < f64::EPSILON);
        assert!((config.scoring.max_packaging_waste - 500.0).abs() < f64::EPSILON);
        assert_eq!(config.recommendation.min_eco_points, 10);
        assert_eq!(config.recommendation.candidate_limit, 3);
        assert!(!config.recommendation.parallel_lookups);
        assert_eq!(config.output.format, ReportFormat::Json);
    }

    #[test]
    fn test_load_config_file_not_found() {
        let result = load_config_file(Path::new("/nonexistent/config.yaml"));
        assert!(matches!(result, Err(ConfigFileError::NotFound(_))));
    }

    #[test]
    fn test_load_config_file_invalid_yaml() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("broken.yaml");
        std::fs::write(&config_path, "scoring: [not, a, map").unwrap();

        assert!(matches!(
            load_config_file(&config_path),
            Err(ConfigFileError::Parse(_))
        ));
    }

    #[test]
    fn test_config_merge() {
        let mut base = AppConfig::builder().candidate_limit(5).build();
        let overrides = ConfigOverrides::new()
            .min_eco_points(8)
            .parallel_lookups(false)
            .output_format(ReportFormat::Json);

        base.merge(&overrides);

        assert_eq!(base.recommendation.candidate_limit, 5, "unset fields are kept");
        assert_eq!(base.recommendation.min_eco_points, 8);
        assert!(!base.recommendation.parallel_lookups);
        assert_eq!(base.output.format, ReportFormat::Json);
    }

    #[test]
    fn test_merge_override_equal_to_default_still_wins() {
        let mut base = AppConfig::builder()
            .candidate_limit(5)
            .min_eco_points(10)
            .output_format(ReportFormat::Json)
            .build();
        let overrides = ConfigOverrides::new()
            .candidate_limit(DEFAULT_CANDIDATE_LIMIT)
            .min_eco_points(DEFAULT_MIN_ECO_POINTS)
            .output_format(ReportFormat::Summary);

        base.merge(&overrides);

        assert_eq!(base.recommendation.candidate_limit, DEFAULT_CANDIDATE_LIMIT);
        assert_eq!(base.recommendation.min_eco_points, DEFAULT_MIN_ECO_POINTS);
        assert_eq!(base.output.format, ReportFormat::Summary);
    }

    #[test]
    fn test_merge_weights_as_a_pair() {
        let mut base = AppConfig::default();
        base.merge(&ConfigOverrides::new().weights(0.5, 0.5));
        assert!((base.scoring.carbon_weight - 0.5).abs() < f64::EPSILON);
        assert!((base.scoring.packaging_weight - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_generated_examples_parse() {
        let example: AppConfig = serde_yaml::from_str(&generate_example_config()).unwrap();
        assert_eq!(example, AppConfig::default());

        let full: AppConfig = serde_yaml::from_str(&generate_full_example_config()).unwrap();
        assert_eq!(full, AppConfig::default());
    }

    #[test]
    fn test_discover_explicit_path() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("custom-config.yaml");
        std::fs::write(&config_path, "output:\n  no_color: true\n").unwrap();

        assert_eq!(discover_config_file(Some(&config_path)), Some(config_path));
    }
}

//! Configuration module for ecotrack.
//!
//! This module provides a unified configuration system with:
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - YAML config file loading and discovery
//! - CLI argument merging
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use ecotrack::config::AppConfig;
//!
//! // Use defaults
//! let config = AppConfig::default();
//!
//! // Use builder
//! let config = AppConfig::builder()
//!     .candidate_limit(5)
//!     .min_eco_points(10)
//!     .build();
//!
//! // Load from file
//! use ecotrack::config::file::load_or_default;
//! let (config, loaded_from) = load_or_default(None);
//! ```
//!
//! # Configuration File
//!
//! Place a `.ecotrack.yaml` file in your project root or `~/.config/ecotrack/`:
//!
//! ```yaml
//! scoring:
//!   max_carbon_footprint: 100.0
//!   max_packaging_waste: 500.0
//! recommendation:
//!   candidate_limit: 3
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

pub use defaults::{
    DEFAULT_CANDIDATE_LIMIT, DEFAULT_CARBON_WEIGHT, DEFAULT_MAX_CARBON_FOOTPRINT,
    DEFAULT_MAX_PACKAGING_WASTE, DEFAULT_MIN_ECO_POINTS, DEFAULT_PACKAGING_WEIGHT,
};
pub use types::{
    AnalysisConfig, AppConfig, AppConfigBuilder, ConfigOverrides, OutputConfig,
    RecommendationConfig, ScoringConfig,
};
pub use validation::{ConfigError, Validatable};

pub use file::{
    config_search_dirs, discover_config_file, generate_example_config,
    generate_full_example_config, load_config_file, load_or_default, ConfigFileError,
    CONFIG_FILE_NAMES,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// The schema documents every option that can be set in `.ecotrack.yaml`
/// and can be used by editors for validation and autocompletion.
pub fn generate_json_schema() -> serde_json::Result<String> {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema)
}

//! CLI subcommand implementations.

pub mod batch;
pub mod config;
pub mod extract;
pub mod report;

use std::path::Path;

use finext_core::FinextConfig;

/// Load the pipeline configuration, falling back to defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<FinextConfig> {
    let config = if let Some(path) = config_path {
        FinextConfig::from_file(Path::new(path))?
    } else {
        FinextConfig::default()
    };
    Ok(config)
}

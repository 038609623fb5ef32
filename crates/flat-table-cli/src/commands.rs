//! Command implementations shared by the binary and its tests.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;

use flat_table_core::{ColumnBuilder, demo_metadata, demo_rows, duplicate_headers, normalize};
use flat_table_model::{GridConfig, GridOutput};

/// Result of one build, with the diagnostics shown in the summary.
#[derive(Debug, Clone)]
pub struct BuildReport {
    pub output: GridOutput,
    /// Metadata entries before visibility filtering.
    pub total_entries: usize,
    /// Entries dropped because `display` or `status` was false.
    pub hidden_entries: usize,
    pub duplicate_headers: Vec<String>,
}

/// Reads and parses a JSON file.
pub fn read_json(path: &Path) -> Result<Value> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    serde_json::from_str(&contents).with_context(|| format!("parse JSON {}", path.display()))
}

/// Loads the grid configuration, or the defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<GridConfig> {
    match path {
        Some(path) => {
            GridConfig::load(path).with_context(|| format!("load config {}", path.display()))
        }
        None => Ok(GridConfig::default()),
    }
}

/// Runs the pipeline over already loaded inputs.
pub fn run_build(metadata: &Value, data: &Value, config: &GridConfig) -> BuildReport {
    let total_entries = metadata.as_array().map_or(0, Vec::len);
    let metas = normalize(metadata);
    let duplicates = duplicate_headers(&metas);
    let output = ColumnBuilder::new(config.clone()).build(&metas, data);
    tracing::info!(
        columns = output.columns.len(),
        rows = output.dataset.len(),
        "Grid built"
    );
    BuildReport {
        hidden_entries: total_entries - metas.len(),
        total_entries,
        duplicate_headers: duplicates,
        output,
    }
}

/// Loads input files and runs the pipeline.
pub fn run_build_files(
    metadata: &Path,
    data: Option<&Path>,
    config: Option<&Path>,
) -> Result<BuildReport> {
    let config = load_config(config)?;
    let metadata = read_json(metadata)?;
    let data = match data {
        Some(path) => read_json(path)?,
        None => Value::Array(Vec::new()),
    };
    Ok(run_build(&metadata, &data, &config))
}

/// Runs the pipeline over the built-in sample dashboard.
pub fn run_demo(config: Option<&Path>) -> Result<BuildReport> {
    let config = load_config(config)?;
    Ok(run_build(&demo_metadata(), &demo_rows(), &config))
}

/// Default configuration rendered as TOML.
pub fn default_config_toml() -> Result<String> {
    GridConfig::default()
        .to_toml_string()
        .context("render default config")
}

/// Grid output as pretty JSON.
pub fn output_json(report: &BuildReport) -> Result<String> {
    serde_json::to_string_pretty(&report.output).context("serialize grid output")
}

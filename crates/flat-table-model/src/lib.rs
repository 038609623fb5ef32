//! Data model for flat table grids.
//!
//! This crate holds the shapes that flow through the grid pipeline:
//!
//! - **Inputs**: [`ColumnMeta`] and [`ColumnCategory`], the canonical column
//!   metadata after schema reconciliation
//! - **Outputs**: [`ColumnDefinition`], [`RenderOptions`] and [`GridOutput`],
//!   serialized with the field names the grid widget expects
//! - **Configuration**: [`GridConfig`] with label grouping rules and sizing,
//!   loadable from TOML

mod category;
mod column;
mod config;
mod error;
mod meta;
mod options;
mod output;

// === Error Types ===
pub use error::{ConfigError, Result};

// === Metadata ===
pub use category::ColumnCategory;
pub use meta::ColumnMeta;

// === Outputs ===
pub use column::{ColumnDefinition, EditorModel, EditorParams, EditorSpec, FieldType, Formatter};
pub use options::RenderOptions;
pub use output::{GridOutput, Row};

// === Configuration ===
pub use config::{GridConfig, LabelMode, LabelRules, LayoutConfig};

//! Flat table grid pipeline.
//!
//! Turns loosely typed column metadata and row records into the column
//! definitions, render options and dataset consumed by a grid widget.
//!
//! # Pipeline
//!
//! 1. **Normalize**: reconcile both metadata schema variants into
//!    [`ColumnMeta`](flat_table_model::ColumnMeta) and drop hidden entries
//! 2. **Build**: sort by level, split labels into group and name, apply the
//!    per-category policy and compute the frozen boundary
//! 3. **Host**: [`FlatTable`] rebuilds on input changes and runs the deferred
//!    column auto-size once the widget is ready
//!
//! No step fails. Malformed input degrades to defaults.
//!
//! # Example
//!
//! ```
//! use flat_table_core::{ColumnBuilder, demo_metadata, demo_rows, normalize};
//! use flat_table_model::GridConfig;
//!
//! let metadata = demo_metadata();
//! let rows = demo_rows();
//! let metas = normalize(&metadata);
//! let output = ColumnBuilder::new(GridConfig::default()).build(&metas, &rows);
//! assert_eq!(output.columns.len(), 8);
//! assert_eq!(output.options.frozen_column, Some(2));
//! ```

mod builder;
mod demo;
mod error;
mod labels;
mod normalize;
mod table;

// === Error Types ===
pub use error::WidgetError;

// === Normalization ===
pub use normalize::{FieldNames, MetaSchema, RawColumnMeta, duplicate_headers, normalize};

// === Column Building ===
pub use builder::{ColumnBuilder, build_grid, dataset};
pub use labels::{LabelParts, split_label};

// === Host Lifecycle ===
pub use table::{AutoSizeOutcome, FlatTable, GridWidget, InputChanges};

// === Sample Data ===
pub use demo::{demo_metadata, demo_rows};

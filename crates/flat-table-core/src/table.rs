//! Host lifecycle for one flat table instance.
//!
//! [`FlatTable`] owns the current inputs and outputs. Every input change
//! rebuilds all outputs synchronously. The grid widget hands itself over
//! through [`FlatTable::on_grid_ready`]; one auto-size pass is then deferred
//! until the host reports that layout is committed.

use serde_json::Value;

use flat_table_model::{ColumnDefinition, GridConfig, GridOutput, RenderOptions, Row};

use crate::builder::ColumnBuilder;
use crate::error::WidgetError;
use crate::normalize::normalize;

/// Capability of the external grid widget used by the host.
pub trait GridWidget {
    /// Returns false until the widget can accept calls.
    fn is_initialized(&self) -> bool;

    /// Resizes columns to fit their content.
    fn auto_size_columns(&mut self) -> Result<(), WidgetError>;
}

/// Result of a deferred auto-size pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AutoSizeOutcome {
    /// No readiness event was pending.
    NotScheduled,
    /// The widget was not initialized; nothing was done.
    Uninitialized,
    /// Columns were resized.
    Resized,
    /// The widget call failed. The error was logged and discarded.
    Failed(WidgetError),
}

/// Input change notification. `None` means unchanged.
#[derive(Debug, Clone, Default)]
pub struct InputChanges {
    pub metadata: Option<Value>,
    pub data: Option<Value>,
}

impl InputChanges {
    pub fn metadata(value: Value) -> Self {
        Self {
            metadata: Some(value),
            data: None,
        }
    }

    pub fn data(value: Value) -> Self {
        Self {
            metadata: None,
            data: Some(value),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.metadata.is_none() && self.data.is_none()
    }
}

/// One flat table: inputs, derived outputs and the widget handle.
pub struct FlatTable {
    builder: ColumnBuilder,
    metadata: Value,
    data: Value,
    output: GridOutput,
    widget: Option<Box<dyn GridWidget>>,
    auto_size_pending: bool,
}

impl FlatTable {
    pub fn new(config: GridConfig) -> Self {
        let builder = ColumnBuilder::new(config);
        let output = builder.build(&[], &Value::Null);
        Self {
            builder,
            metadata: Value::Null,
            data: Value::Null,
            output,
            widget: None,
            auto_size_pending: false,
        }
    }

    /// Applies input changes and rebuilds when anything changed.
    ///
    /// Returns true when a rebuild ran.
    pub fn apply_changes(&mut self, changes: InputChanges) -> bool {
        if changes.is_empty() {
            return false;
        }
        if let Some(metadata) = changes.metadata {
            self.metadata = metadata;
        }
        if let Some(data) = changes.data {
            self.data = data;
        }
        self.rebuild();
        true
    }

    pub fn set_metadata(&mut self, metadata: Value) {
        self.apply_changes(InputChanges::metadata(metadata));
    }

    pub fn set_data(&mut self, data: Value) {
        self.apply_changes(InputChanges::data(data));
    }

    fn rebuild(&mut self) {
        let metas = normalize(&self.metadata);
        self.output = self.builder.build(&metas, &self.data);
    }

    pub fn columns(&self) -> &[ColumnDefinition] {
        &self.output.columns
    }

    pub fn options(&self) -> &RenderOptions {
        &self.output.options
    }

    pub fn dataset(&self) -> &[Row] {
        &self.output.dataset
    }

    pub fn output(&self) -> &GridOutput {
        &self.output
    }

    /// Readiness callback: stores the widget handle, replacing any earlier
    /// one, and schedules one auto-size pass.
    pub fn on_grid_ready(&mut self, widget: Box<dyn GridWidget>) {
        if self.widget.is_some() {
            tracing::debug!("Replacing grid widget handle");
        }
        self.widget = Some(widget);
        self.auto_size_pending = true;
    }

    /// Returns true while an auto-size pass is waiting for layout.
    pub fn auto_size_pending(&self) -> bool {
        self.auto_size_pending
    }

    /// Runs the pending auto-size pass, at most once per readiness event.
    ///
    /// Call after the widget's layout is committed. Widget failures are
    /// logged and reported in the outcome, never returned as errors.
    pub fn on_layout_committed(&mut self) -> AutoSizeOutcome {
        if !std::mem::take(&mut self.auto_size_pending) {
            return AutoSizeOutcome::NotScheduled;
        }
        let Some(widget) = self.widget.as_mut() else {
            return AutoSizeOutcome::NotScheduled;
        };
        if !widget.is_initialized() {
            tracing::debug!("Grid widget not initialized, skipping auto-size");
            return AutoSizeOutcome::Uninitialized;
        }
        match widget.auto_size_columns() {
            Ok(()) => AutoSizeOutcome::Resized,
            Err(error) => {
                tracing::warn!(%error, "Column auto-size failed");
                AutoSizeOutcome::Failed(error)
            }
        }
    }
}

impl Default for FlatTable {
    fn default() -> Self {
        Self::new(GridConfig::default())
    }
}

impl std::fmt::Debug for FlatTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlatTable")
            .field("columns", &self.output.columns.len())
            .field("rows", &self.output.dataset.len())
            .field("has_widget", &self.widget.is_some())
            .field("auto_size_pending", &self.auto_size_pending)
            .finish()
    }
}

//! Tests for flat-table-model types.

use std::fs;

use flat_table_model::{
    ColumnDefinition, ConfigError, EditorSpec, FieldType, Formatter, GridConfig, GridOutput,
    LabelMode, RenderOptions,
};

fn column(id: &str, group: &str) -> ColumnDefinition {
    ColumnDefinition {
        id: id.to_string(),
        name: id.to_string(),
        field: id.to_string(),
        column_group: group.to_string(),
        field_type: FieldType::String,
        frozen: false,
        sortable: true,
        filterable: true,
        min_width: 90,
        width: 110,
        formatter: None,
        editor: None,
    }
}

#[test]
fn column_definition_serializes_for_widget() {
    let column = ColumnDefinition {
        name: "Forecast".to_string(),
        column_group: "Customer Forecast".to_string(),
        field_type: FieldType::Number,
        formatter: Some(Formatter::Decimal),
        editor: Some(EditorSpec::float(2)),
        ..column("custFcst", "")
    };
    insta::assert_json_snapshot!(column, @r#"
    {
      "id": "custFcst",
      "name": "Forecast",
      "field": "custFcst",
      "columnGroup": "Customer Forecast",
      "type": "number",
      "frozen": false,
      "sortable": true,
      "filterable": true,
      "minWidth": 90,
      "width": 110,
      "formatter": "decimal",
      "editor": {
        "model": "float",
        "params": {
          "decimalPlaces": 2
        }
      }
    }
    "#);
}

#[test]
fn output_helpers() {
    let output = GridOutput {
        columns: vec![
            ColumnDefinition {
                frozen: true,
                ..column("plant", "")
            },
            column("lifting", "Promo"),
            column("custFcst", "Customer Forecast"),
            column("planFcst", "Promo"),
        ],
        options: RenderOptions::new(&GridConfig::default().layout, Some(0)),
        dataset: vec![],
    };
    assert_eq!(output.frozen_columns().len(), 1);
    assert_eq!(output.column_groups(), vec!["Promo", "Customer Forecast"]);
    assert!(output.column("custFcst").is_some());
    assert!(output.column("missing").is_none());
}

#[test]
fn frozen_columns_clamped_to_column_count() {
    let output = GridOutput {
        columns: vec![column("plant", "")],
        options: RenderOptions::new(&GridConfig::default().layout, Some(4)),
        dataset: vec![],
    };
    assert_eq!(output.frozen_columns().len(), 1);
}

#[test]
fn load_config_from_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("grid.toml");
    fs::write(
        &path,
        "[labels]\nmode = \"delimited\"\npromo_prefixes = [\"Lift\"]\n",
    )
    .expect("write config");

    let config = GridConfig::load(&path).expect("load config");
    assert_eq!(config.labels.mode, LabelMode::Delimited);
    assert_eq!(config.labels.promo_prefixes, vec!["Lift".to_string()]);
    assert_eq!(config.layout, GridConfig::default().layout);
}

#[test]
fn load_config_reports_parse_errors() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("grid.toml");
    fs::write(&path, "[layout]\nrow_height = \"tall\"\n").expect("write config");

    let err = GridConfig::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Toml { .. }));
    assert_eq!(GridConfig::load_or_default(&path), GridConfig::default());
}

#[test]
fn missing_config_falls_back_to_default() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("absent.toml");
    assert!(matches!(
        GridConfig::load(&path),
        Err(ConfigError::Io { .. })
    ));
    assert_eq!(GridConfig::load_or_default(&path), GridConfig::default());
}

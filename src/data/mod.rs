//! NSL-KDD schema and data loading
//!
//! The dataset ships as a headerless CSV, so column names come from the
//! canonical list below rather than from the file itself.

use crate::error::{NetguardError, Result};
use ndarray::{Array1, Array2};
use polars::prelude::*;
use std::fs::File;
use std::path::Path;
use tracing::info;

/// Canonical NSL-KDD column names, in file order.
///
/// 41 connection features, then the raw label string, then the NSL-KDD
/// `difficulty` score. `difficulty` stays in the feature set.
pub const KDD_COLUMNS: [&str; 43] = [
    "duration",
    "protocol_type",
    "service",
    "flag",
    "src_bytes",
    "dst_bytes",
    "land",
    "wrong_fragment",
    "urgent",
    "hot",
    "num_failed_logins",
    "logged_in",
    "num_compromised",
    "root_shell",
    "su_attempted",
    "num_root",
    "num_file_creations",
    "num_shells",
    "num_access_files",
    "num_outbound_cmds",
    "is_host_login",
    "is_guest_login",
    "count",
    "srv_count",
    "serror_rate",
    "srv_serror_rate",
    "rerror_rate",
    "srv_rerror_rate",
    "same_srv_rate",
    "diff_srv_rate",
    "srv_diff_host_rate",
    "dst_host_count",
    "dst_host_srv_count",
    "dst_host_same_srv_rate",
    "dst_host_diff_srv_rate",
    "dst_host_same_src_port_rate",
    "dst_host_srv_diff_host_rate",
    "dst_host_serror_rate",
    "dst_host_srv_serror_rate",
    "dst_host_rerror_rate",
    "dst_host_srv_rerror_rate",
    "label",
    "difficulty",
];

/// The three string-valued feature columns that need one-hot encoding
pub const CATEGORICAL_COLUMNS: [&str; 3] = ["protocol_type", "service", "flag"];

/// Name of the raw label column
pub const LABEL_COLUMN: &str = "label";

/// Load a headerless NSL-KDD CSV into a DataFrame with canonical column names.
///
/// Rejects files whose column count differs from the canonical schema
/// instead of silently misaligning features with labels.
pub fn load_connections(path: impl AsRef<Path>) -> Result<DataFrame> {
    let path = path.as_ref();
    let file = File::open(path)?;

    let mut df = CsvReadOptions::default()
        .with_has_header(false)
        .with_infer_schema_length(Some(100))
        .into_reader_with_file_handle(file)
        .finish()
        .map_err(|e| NetguardError::DataError(e.to_string()))?;

    if df.width() != KDD_COLUMNS.len() {
        return Err(NetguardError::SchemaMismatch {
            expected: KDD_COLUMNS.len(),
            actual: df.width(),
        });
    }

    df.set_column_names(KDD_COLUMNS)
        .map_err(|e| NetguardError::DataError(e.to_string()))?;

    info!(rows = df.height(), path = %path.display(), "loaded connection records");
    Ok(df)
}

/// Extract named columns from a DataFrame into a row-major `Array2<f64>`.
pub fn to_feature_matrix(df: &DataFrame, col_names: &[String]) -> Result<Array2<f64>> {
    let n_rows = df.height();
    let n_cols = col_names.len();

    // Collect all columns as contiguous f64 Vecs
    let col_data: Vec<Vec<f64>> = col_names
        .iter()
        .map(|col_name| {
            let series = df
                .column(col_name)
                .map_err(|_| NetguardError::ColumnNotFound(col_name.clone()))?;
            let series_f64 = series
                .cast(&DataType::Float64)
                .map_err(|e| NetguardError::DataError(e.to_string()))?;
            if series_f64.null_count() > 0 {
                return Err(NetguardError::DataError(format!(
                    "column '{col_name}' contains {} non-numeric or missing values",
                    series_f64.null_count()
                )));
            }
            let values: Vec<f64> = series_f64
                .f64()
                .map_err(|e| NetguardError::DataError(e.to_string()))?
                .into_iter()
                .flatten()
                .collect();
            Ok(values)
        })
        .collect::<Result<Vec<Vec<f64>>>>()?;

    let col_refs: Vec<&[f64]> = col_data.iter().map(|c| c.as_slice()).collect();
    Ok(Array2::from_shape_fn((n_rows, n_cols), |(r, c)| {
        col_refs[c][r]
    }))
}

/// Split an encoded DataFrame into the feature matrix and the label vector.
///
/// Features are every column except `label_column`, in DataFrame order.
pub fn features_and_labels(df: &DataFrame, label_column: &str) -> Result<(Array2<f64>, Array1<f64>)> {
    let feature_cols: Vec<String> = df
        .get_column_names()
        .into_iter()
        .filter(|name| name.as_str() != label_column)
        .map(|s| s.to_string())
        .collect();

    let label_series = df
        .column(label_column)
        .map_err(|_| NetguardError::ColumnNotFound(label_column.to_string()))?;
    let label_f64 = label_series
        .cast(&DataType::Float64)
        .map_err(|e| NetguardError::DataError(e.to_string()))?;
    if label_f64.null_count() > 0 {
        return Err(NetguardError::DataError(format!(
            "column '{label_column}' contains {} non-numeric or missing values",
            label_f64.null_count()
        )));
    }
    let y: Array1<f64> = label_f64
        .f64()
        .map_err(|e| NetguardError::DataError(e.to_string()))?
        .into_iter()
        .flatten()
        .collect();

    let x = to_feature_matrix(df, &feature_cols)?;
    Ok((x, y))
}

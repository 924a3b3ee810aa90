//! Label binarization and one-hot encoding

use crate::error::{NetguardError, Result};
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Binarizes the raw label column: the benign value becomes 0, everything
/// else (neptune, smurf, ...) collapses to 1.
///
/// The match is case-sensitive and exact. The many-to-one collapse discards
/// attack-type information on purpose.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelBinarizer {
    normal_value: String,
}

impl LabelBinarizer {
    /// Create a binarizer treating `normal_value` as the benign class
    pub fn new(normal_value: impl Into<String>) -> Self {
        Self {
            normal_value: normal_value.into(),
        }
    }

    /// Replace `column` with a 0.0/1.0 numeric column
    pub fn transform(&self, df: &DataFrame, column: &str) -> Result<DataFrame> {
        let series = df
            .column(column)
            .map_err(|_| NetguardError::ColumnNotFound(column.to_string()))?
            .as_materialized_series();

        let ca = series
            .str()
            .map_err(|e| NetguardError::PreprocessingError(e.to_string()))?;

        let values: Vec<f64> = ca
            .into_iter()
            .map(|v| match v {
                Some(s) if s == self.normal_value => 0.0,
                _ => 1.0,
            })
            .collect();

        let mut result = df.clone();
        result
            .with_column(Series::new(column.into(), values))
            .map_err(|e| NetguardError::DataError(e.to_string()))?;

        info!(column, normal = %self.normal_value, "binarized label column");
        Ok(result)
    }
}

/// One-hot encoder with an explicit fitted vocabulary.
///
/// `fit` records the sorted distinct values of each column; `transform`
/// applies that vocabulary, emitting one `{column}_{value}` indicator
/// column per fitted category and dropping the original column. A value
/// unseen at fit time yields all-zero indicators for its column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OneHotEncoder {
    /// Fitted vocabulary: (column, sorted distinct values), in fit order
    categories: Vec<(String, Vec<String>)>,
    is_fitted: bool,
}

impl OneHotEncoder {
    /// Create an unfitted encoder
    pub fn new() -> Self {
        Self {
            categories: Vec::new(),
            is_fitted: false,
        }
    }

    /// Record the distinct values of each column
    pub fn fit(&mut self, df: &DataFrame, columns: &[&str]) -> Result<&mut Self> {
        self.categories.clear();

        for col_name in columns {
            let series = df
                .column(col_name)
                .map_err(|_| NetguardError::ColumnNotFound(col_name.to_string()))?
                .as_materialized_series();

            let ca = series
                .str()
                .map_err(|e| NetguardError::PreprocessingError(e.to_string()))?;

            let mut values: Vec<String> = ca
                .into_iter()
                .flatten()
                .map(|s| s.to_string())
                .collect();
            values.sort();
            values.dedup();

            if values.is_empty() {
                return Err(NetguardError::PreprocessingError(format!(
                    "column '{col_name}' has no category values"
                )));
            }

            self.categories.push((col_name.to_string(), values));
        }

        self.is_fitted = true;
        Ok(self)
    }

    /// Expand each fitted column into its indicator columns
    pub fn transform(&self, df: &DataFrame) -> Result<DataFrame> {
        if !self.is_fitted {
            return Err(NetguardError::ModelNotFitted);
        }

        let mut result = df.clone();
        let mut n_indicators = 0usize;

        for (col_name, categories) in &self.categories {
            let series = df
                .column(col_name)
                .map_err(|_| NetguardError::ColumnNotFound(col_name.clone()))?
                .as_materialized_series();

            let ca = series
                .str()
                .map_err(|e| NetguardError::PreprocessingError(e.to_string()))?;
            let raw: Vec<Option<&str>> = ca.into_iter().collect();

            for category in categories {
                let values: Vec<f64> = raw
                    .iter()
                    .map(|v| match v {
                        Some(s) if *s == category.as_str() => 1.0,
                        _ => 0.0,
                    })
                    .collect();

                let name = format!("{col_name}_{category}");
                result
                    .with_column(Series::new(name.into(), values))
                    .map_err(|e| NetguardError::DataError(e.to_string()))?;
                n_indicators += 1;
            }

            result = result
                .drop(col_name)
                .map_err(|e| NetguardError::DataError(e.to_string()))?;
        }

        info!(
            columns = self.categories.len(),
            indicators = n_indicators,
            "one-hot encoded categorical columns"
        );
        Ok(result)
    }

    /// Fit and transform in one step
    pub fn fit_transform(&mut self, df: &DataFrame, columns: &[&str]) -> Result<DataFrame> {
        self.fit(df, columns)?;
        self.transform(df)
    }

    /// Fitted vocabulary for a column
    pub fn categories(&self, column: &str) -> Option<&[String]> {
        self.categories
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, values)| values.as_slice())
    }
}

impl Default for OneHotEncoder {
    fn default() -> Self {
        Self::new()
    }
}

use super::FeatureColumn;
use crate::model::featurizer::FeaturizerError;

/// feature columns concatenated horizontally. every column holds exactly
/// `n_rows` values and column names are unique.
#[derive(Clone, Debug, PartialEq)]
pub struct FeatureBatch {
    n_rows: usize,
    columns: Vec<FeatureColumn>,
}

impl FeatureBatch {
    pub fn new(n_rows: usize) -> FeatureBatch {
        FeatureBatch {
            n_rows,
            columns: vec![],
        }
    }

    /// appends columns to the right of this batch.
    ///
    /// # Returns
    ///
    /// * an error if any column is not `n_rows` long or reuses an existing name.
    ///   on error, no columns from this call are appended.
    pub fn hstack(&mut self, columns: Vec<FeatureColumn>) -> Result<(), FeaturizerError> {
        for (idx, column) in columns.iter().enumerate() {
            if column.len() != self.n_rows {
                return Err(FeaturizerError::ColumnLengthError {
                    column: column.name.clone(),
                    expected: self.n_rows,
                    found: column.len(),
                });
            }
            let seen_before = self.column(&column.name).is_some()
                || columns[..idx].iter().any(|c| c.name == column.name);
            if seen_before {
                return Err(FeaturizerError::DuplicateColumnError(column.name.clone()));
            }
        }
        self.columns.extend(columns);
        Ok(())
    }

    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    pub fn columns(&self) -> &[FeatureColumn] {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Option<&FeatureColumn> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// iterates the batch row-wise, yielding values in column order.
    pub fn rows(&self) -> impl Iterator<Item = Vec<Option<f64>>> + '_ {
        (0..self.n_rows).map(move |row| self.columns.iter().map(|c| c.values[row]).collect())
    }
}

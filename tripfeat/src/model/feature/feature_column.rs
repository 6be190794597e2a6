use serde::{Deserialize, Serialize};

/// a named sequence of numeric feature values aligned by position with the
/// trip batch it was derived from. `None` marks a missing value, for example
/// a pickup region that was never observed while fitting.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct FeatureColumn {
    pub name: String,
    pub values: Vec<Option<f64>>,
}

impl FeatureColumn {
    pub fn new(name: &str, values: Vec<Option<f64>>) -> FeatureColumn {
        FeatureColumn {
            name: name.to_string(),
            values,
        }
    }

    /// builds a column where every row has a value.
    pub fn complete(name: &str, values: impl IntoIterator<Item = f64>) -> FeatureColumn {
        FeatureColumn::new(name, values.into_iter().map(Some).collect())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn missing_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_none()).count()
    }
}

// File: crates/minibar-core/src/dataset.rs
// Summary: Ordered key/value dataset fed to the line and bar renderers.
// Notes:
// - Insertion order is the x-axis order; duplicate keys are kept as separate entries.
// - Values are guaranteed finite, so min/max never see NaN.

use crate::error::{ChartError, ChartResult};

#[derive(Clone, Debug, PartialEq)]
pub struct DataPoint {
    pub key: String,
    pub value: f64,
}

/// Closed value interval `[min, max]` spanned by a dataset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// True when every value in the dataset is equal.
    pub fn is_degenerate(&self) -> bool {
        self.span() == 0.0
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    points: Vec<DataPoint>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(key, value)` pairs, rejecting non-finite values.
    pub fn from_pairs<K, I>(pairs: I) -> ChartResult<Self>
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, f64)>,
    {
        let mut ds = Self::new();
        for (k, v) in pairs {
            ds.push(k, v)?;
        }
        Ok(ds)
    }

    pub fn push(&mut self, key: impl Into<String>, value: f64) -> ChartResult<()> {
        let key = key.into();
        if !value.is_finite() {
            return Err(ChartError::InvalidData(format!("value for '{key}' is not finite: {value}")));
        }
        self.points.push(DataPoint { key, value });
        Ok(())
    }

    /// Parse a textual value (e.g. a CSV cell) and append it.
    pub fn push_str(&mut self, key: impl Into<String>, raw: &str) -> ChartResult<()> {
        let key = key.into();
        let value = raw
            .trim()
            .parse::<f64>()
            .map_err(|_| ChartError::InvalidData(format!("value for '{key}' is not numeric: '{raw}'")))?;
        self.push(key, value)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DataPoint> {
        self.points.iter()
    }

    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    pub fn range(&self) -> ChartResult<ValueRange> {
        let first = self.points.first().ok_or(ChartError::EmptyDataset)?.value;
        let range = self.points.iter().fold(ValueRange { min: first, max: first }, |r, p| ValueRange {
            min: r.min.min(p.value),
            max: r.max.max(p.value),
        });
        Ok(range)
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a DataPoint;
    type IntoIter = std::slice::Iter<'a, DataPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_insertion_order_and_duplicates() {
        let ds = Dataset::from_pairs([("b", 2.0), ("a", 1.0), ("b", 3.0)]).unwrap();
        let keys: Vec<_> = ds.iter().map(|p| p.key.as_str()).collect();
        assert_eq!(keys, ["b", "a", "b"]);
    }

    #[test]
    fn range_over_values() {
        let ds = Dataset::from_pairs([("Jan", 10.0), ("Feb", 20.0), ("Mar", -15.0)]).unwrap();
        assert_eq!(ds.range().unwrap(), ValueRange { min: -15.0, max: 20.0 });
    }

    #[test]
    fn empty_range_is_an_error() {
        assert!(matches!(Dataset::new().range(), Err(ChartError::EmptyDataset)));
    }

    #[test]
    fn non_finite_and_non_numeric_rejected() {
        let mut ds = Dataset::new();
        assert!(matches!(ds.push("x", f64::NAN), Err(ChartError::InvalidData(_))));
        assert!(matches!(ds.push("x", f64::INFINITY), Err(ChartError::InvalidData(_))));
        assert!(matches!(ds.push_str("x", "abc"), Err(ChartError::InvalidData(_))));
        ds.push_str("y", " 4.5 ").unwrap();
        assert_eq!(ds.points()[0].value, 4.5);
        assert_eq!(ds.len(), 1);
    }

    #[test]
    fn constant_dataset_is_degenerate() {
        let ds = Dataset::from_pairs([("a", 5.0), ("b", 5.0), ("c", 5.0)]).unwrap();
        assert!(ds.range().unwrap().is_degenerate());
    }
}

//! Row access for predicates

use std::collections::{BTreeMap, HashMap};

use crate::CellValue;

/// Opaque accessor the table hands to predicates for reading a row's cells
pub trait RowAccessor {
    /// Get the raw cell value for a column id, `None` when the row has no such column
    fn get_value(&self, column_id: &str) -> Option<&CellValue>;
}

impl RowAccessor for HashMap<String, CellValue> {
    fn get_value(&self, column_id: &str) -> Option<&CellValue> {
        self.get(column_id)
    }
}

impl RowAccessor for BTreeMap<String, CellValue> {
    fn get_value(&self, column_id: &str) -> Option<&CellValue> {
        self.get(column_id)
    }
}

impl<R: RowAccessor + ?Sized> RowAccessor for &R {
    fn get_value(&self, column_id: &str) -> Option<&CellValue> {
        (**self).get_value(column_id)
    }
}

/// A table row keyed by column id
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    cells: BTreeMap<String, CellValue>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style cell insertion
    pub fn with(mut self, column_id: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.cells.insert(column_id.into(), value.into());
        self
    }

    pub fn set(&mut self, column_id: impl Into<String>, value: impl Into<CellValue>) {
        self.cells.insert(column_id.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl RowAccessor for Row {
    fn get_value(&self, column_id: &str) -> Option<&CellValue> {
        self.cells.get(column_id)
    }
}

impl<K: Into<String>, V: Into<CellValue>> FromIterator<(K, V)> for Row {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            cells: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

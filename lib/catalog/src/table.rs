//! In-memory tabular representation of a raw catalog.
//!
//! Catalog retrieval (object storage, local files) belongs to collaborators;
//! whatever they fetch is handed to the normalizer as a [`RawTable`].

use citrusmatch_core::SchemaError;
use serde_json::Value;

/// A raw catalog table: named columns and rows of JSON cells.
///
/// Column names carry whatever casing and padding the source used; the
/// normalizer is responsible for cleaning them up.
#[derive(Debug, Clone)]
pub struct RawTable {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl RawTable {
    /// Build a table from explicit columns and rows.
    ///
    /// Every row must have exactly one cell per column.
    pub fn new(
        columns: Vec<String>,
        rows: Vec<Vec<Value>>,
    ) -> Result<Self, SchemaError> {
        for (i, row) in rows.iter().enumerate() {
            if row.len() != columns.len() {
                return Err(SchemaError::RowShape {
                    row: i,
                    expected: columns.len(),
                    got: row.len(),
                });
            }
        }
        Ok(Self { columns, rows })
    }

    /// Build a table from JSON records (an array of objects).
    ///
    /// Column order is the order keys are first seen across the records;
    /// keys absent from a record become null cells. Non-object entries are
    /// skipped.
    #[must_use]
    pub fn from_records(records: &[Value]) -> Self {
        let mut columns: Vec<String> = Vec::new();
        for record in records {
            if let Some(obj) = record.as_object() {
                for key in obj.keys() {
                    if !columns.iter().any(|c| c == key) {
                        columns.push(key.clone());
                    }
                }
            }
        }

        let rows = records
            .iter()
            .filter_map(Value::as_object)
            .map(|obj| {
                columns
                    .iter()
                    .map(|c| obj.get(c).cloned().unwrap_or(Value::Null))
                    .collect()
            })
            .collect();

        Self { columns, rows }
    }

    #[inline]
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    #[inline]
    #[must_use]
    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

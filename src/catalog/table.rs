//! Sparse table over a list of survey records.
//!
//! Survey records rarely share the same set of keys. [`SurveyTable`] uses
//! the sorted union of all keys as columns and leaves a cell empty (`None`)
//! wherever a record lacks the column.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::properties::HipsSurveyProperties;

/// Table with one row per survey record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SurveyTable {
    columns: Vec<String>,
    rows: Vec<Vec<Option<String>>>,
}

impl SurveyTable {
    /// Build a table from records; column order is lexicographic.
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a HipsSurveyProperties>,
        I::IntoIter: Clone,
    {
        let records = records.into_iter();

        let columns: Vec<String> = records
            .clone()
            .flat_map(|record| record.iter().map(|(key, _)| key))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect();

        let rows = records
            .map(|record| {
                columns
                    .iter()
                    .map(|column| record.get(column).map(str::to_string))
                    .collect()
            })
            .collect();

        Self { columns, rows }
    }

    /// Column names; sorted unless produced by [`SurveyTable::select`].
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Rows, each with one cell per column.
    pub fn rows(&self) -> &[Vec<Option<String>>] {
        &self.rows
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a column.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    /// Cell value, `None` when the row or column does not exist or the
    /// record had no value for the column.
    pub fn cell(&self, row: usize, column: &str) -> Option<&str> {
        let index = self.column_index(column)?;
        self.rows.get(row)?.get(index)?.as_deref()
    }

    /// All values of one column, in row order.
    pub fn column(&self, name: &str) -> Option<Vec<Option<&str>>> {
        let index = self.column_index(name)?;
        Some(self.rows.iter().map(|row| row[index].as_deref()).collect())
    }

    /// Project onto the given columns, in the given order.
    ///
    /// Names that are not columns of the table are skipped.
    pub fn select(&self, names: &[&str]) -> SurveyTable {
        let indices: Vec<(usize, &str)> = names
            .iter()
            .filter_map(|name| self.column_index(name).map(|i| (i, *name)))
            .collect();

        SurveyTable {
            columns: indices.iter().map(|(_, name)| name.to_string()).collect(),
            rows: self
                .rows
                .iter()
                .map(|row| indices.iter().map(|(i, _)| row[*i].clone()).collect())
                .collect(),
        }
    }

    /// Keep only rows whose `column` equals `value`.
    ///
    /// An unknown column matches nothing.
    pub fn filter_eq(&self, column: &str, value: &str) -> SurveyTable {
        let rows = match self.column_index(column) {
            Some(index) => self
                .rows
                .iter()
                .filter(|row| row[index].as_deref() == Some(value))
                .cloned()
                .collect(),
            None => Vec::new(),
        };

        SurveyTable {
            columns: self.columns.clone(),
            rows,
        }
    }

    /// Keep at most the first `n` rows.
    pub fn head(&self, n: usize) -> SurveyTable {
        SurveyTable {
            columns: self.columns.clone(),
            rows: self.rows.iter().take(n).cloned().collect(),
        }
    }
}

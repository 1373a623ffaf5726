use std::path::{Path, PathBuf};

use crate::error::DatasetError;

/// In-memory table with a header row; every cell is text and an empty cell
/// means "absent".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Dataset {
    /// Builds a table, padding short rows to the header width.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let width = headers.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                if row.len() < width {
                    row.resize(width, String::new());
                }
                row
            })
            .collect();

        Self { headers, rows }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header.trim() == name)
    }

    /// Index of the named column, appending an empty column when missing.
    pub fn ensure_column(&mut self, name: &str) -> usize {
        if let Some(index) = self.column_index(name) {
            return index;
        }

        self.headers.push(name.to_string());
        let width = self.headers.len();
        for row in &mut self.rows {
            if row.len() < width {
                row.resize(width, String::new());
            }
        }
        width - 1
    }

    /// Cell text, `None` when the row or column does not exist or the cell
    /// is blank.
    pub fn cell(&self, row_index: usize, column_index: usize) -> Option<&str> {
        self.rows
            .get(row_index)
            .and_then(|row| row.get(column_index))
            .map(String::as_str)
            .filter(|value| !value.trim().is_empty())
    }

    pub fn named_cell(&self, row_index: usize, column: &str) -> Option<&str> {
        self.column_index(column)
            .and_then(|column_index| self.cell(row_index, column_index))
    }

    /// # Errors
    ///
    /// Returns [`DatasetError::RowOutOfRange`] or
    /// [`DatasetError::UnknownColumn`] when the target cell does not exist.
    pub fn set_cell(
        &mut self,
        row_index: usize,
        column_index: usize,
        value: impl Into<String>,
    ) -> Result<(), DatasetError> {
        let row_count = self.rows.len();
        let row = self
            .rows
            .get_mut(row_index)
            .ok_or(DatasetError::RowOutOfRange {
                row_index,
                row_count,
            })?;

        let column_count = row.len();
        let cell = row
            .get_mut(column_index)
            .ok_or(DatasetError::UnknownColumn {
                column_index,
                column_count,
            })?;

        *cell = value.into();
        Ok(())
    }
}

/// Output path next to the input: `input.csv` becomes `input_processed.csv`.
pub fn processed_output_path(input: &Path, suffix: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();

    let file_name = match input.extension() {
        Some(extension) => format!("{stem}{suffix}.{}", extension.to_string_lossy()),
        None => format!("{stem}{suffix}"),
    };

    input.with_file_name(file_name)
}

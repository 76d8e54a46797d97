//! Read-only tabular view-model over a collection snapshot.

use catalog_model::Record;

/// Fixed four-column, read-only table built once from a record snapshot.
///
/// The model is type-erased: cells are rendered to text at construction, so
/// the window code needs no knowledge of the record family. It never
/// refreshes; rebuild it from a fresh snapshot to pick up changes.
#[derive(Debug, Clone)]
pub struct TableModel {
    columns: [&'static str; 4],
    rows: Vec<[String; 4]>,
}

impl TableModel {
    pub fn from_records<R: Record>(records: &[R]) -> Self {
        let rows = records
            .iter()
            .map(|record| std::array::from_fn(|column| record.column_value(column)))
            .collect();
        Self {
            columns: R::COLUMNS,
            rows,
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn column_name(&self, column: usize) -> Option<&'static str> {
        self.columns.get(column).copied()
    }

    pub fn value_at(&self, row: usize, column: usize) -> Option<&str> {
        self.rows
            .get(row)?
            .get(column)
            .map(|value| value.as_str())
    }
}

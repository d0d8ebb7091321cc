use crate::models::row::Row;

/// An ordered chunk of records read in one pull from the source.
#[derive(Debug, Clone)]
pub struct Batch {
    rows: Vec<Row>,
}

impl Batch {
    pub fn with_capacity(capacity: usize) -> Self {
        Batch {
            rows: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, row: Row) {
        self.rows.push(row);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Keep only the first `keep` rows, dropping the rest.
    pub fn truncate(&mut self, keep: usize) {
        self.rows.truncate(keep);
    }

    pub fn into_rows(self) -> Vec<Row> {
        self.rows
    }
}

use crate::models::{batch::Batch, command::Command, row::Row};

/// State of the sampling engine, owning the header and all accepted rows.
///
/// Invariant: `rows.len()` never exceeds `target`.
pub struct Collector {
    pub header: Option<Row>,
    pub rows: Vec<Row>,
    target: usize,
}

impl Collector {
    pub fn new(target: usize) -> Self {
        Collector {
            header: None,
            rows: Vec::new(),
            target,
        }
    }

    /// Process a single Command and update state. Returns true once the
    /// target is reached and no further input is needed.
    pub fn process_single_command(&mut self, cmd: Command) -> bool {
        match cmd {
            Command::Header(header) => {
                self.header = Some(header);
                false
            }
            Command::Batch(batch) => self.absorb_batch(batch),
        }
    }

    fn absorb_batch(&mut self, mut batch: Batch) -> bool {
        let remaining = self.target - self.rows.len();

        if remaining == 0 {
            // Target already met, reject the batch whole
            return true;
        }

        if batch.len() > remaining {
            batch.truncate(remaining);
        }

        self.rows.extend(batch.into_rows());

        self.rows.len() == self.target
    }

    /// Column count of the output, taken from the header or the first row.
    pub fn column_count(&self) -> usize {
        self.header
            .as_ref()
            .or(self.rows.first())
            .map_or(0, |row| row.0.len())
    }
}

use crate::models::{batch::Batch, row::Row};

/// Work items handed from the reader to the engine.
#[derive(Debug, Clone)]
pub enum Command {
    /// Column names from the source, forwarded once before any batch.
    Header(Row),
    /// One chunk of records, in source order.
    Batch(Batch),
}

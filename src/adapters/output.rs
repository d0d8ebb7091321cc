use crate::models::row::Row;

use std::io::Write;

/// Write the header row (if any) followed by all accepted rows as CSV.
pub fn write_rows<W: Write>(header: Option<&Row>, rows: &[Row], writer: W) {
    let mut builder = csv::WriterBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_writer(writer);

    if let Some(header) = header {
        let _ = builder.serialize(header);
    }

    for row in rows {
        let _ = builder.serialize(row);
    }

    let _ = builder.flush();
}

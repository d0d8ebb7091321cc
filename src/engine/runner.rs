use crate::{
    adapters::output::write_rows,
    engine::state::Collector,
    models::{batch::Batch, command::Command, row::Row},
};

use std::{fs::File, mem};
use tokio::sync::mpsc;

/// Run the engine event loop to receive and absorb batches, and then persist
/// the accepted rows.
pub async fn run(mut rx: mpsc::Receiver<Command>, target: usize, output_path: &str) {
    let mut collector = Collector::new(target);

    // Absorb commands until the target is met or the reader runs out of input
    while let Some(cmd) = rx.recv().await {
        let is_batch = matches!(cmd, Command::Batch(_));

        let done = collector.process_single_command(cmd);

        if is_batch {
            eprintln!("Collected {} rows", collector.rows.len());
        }

        if done {
            break;
        }
    }

    // Hang up so the reader stops pulling from the source
    drop(rx);

    let out_file = File::create(output_path).unwrap_or_else(|e| {
        eprintln!("Failed to create output file: {}", e);
        std::process::exit(1);
    });

    write_rows(collector.header.as_ref(), &collector.rows, out_file);

    eprintln!("Done");
    eprintln!(
        "Final shape: ({}, {})",
        collector.rows.len(),
        collector.column_count()
    );
    eprintln!("Saved as: {}", output_path);
}

/// Set up engine task and return its handle along with command sender
pub fn setup_engine(
    target: usize,
    output_path: &'static str,
) -> (mpsc::Sender<Command>, tokio::task::JoinHandle<()>) {
    // Batches are large, keep the channel shallow
    let (cmd_tx, cmd_rx) = mpsc::channel(4);

    let handle = tokio::spawn(async move {
        run(cmd_rx, target, output_path).await;
    });

    (cmd_tx, handle)
}

/// Read CSV, group records into fixed-size batches, and send to engine
pub async fn send_batches_to_engine(
    csv_reader: &mut csv::Reader<File>,
    batch_size: usize,
    cmd_tx: mpsc::Sender<Command>,
) {
    match csv_reader.headers() {
        Ok(headers) => {
            // An empty header means an empty source; nothing to forward
            if !headers.is_empty() {
                let header = Row(headers.iter().map(str::to_string).collect());

                if cmd_tx.send(Command::Header(header)).await.is_err() {
                    return;
                }
            }
        }
        Err(e) => {
            eprintln!("Failed to read CSV header: {}", e);
            std::process::exit(1);
        }
    }

    let deserialize_iter = csv_reader.deserialize::<Row>();
    let mut record_count: usize = 0;
    let mut batch = Batch::with_capacity(batch_size);

    for result in deserialize_iter {
        match result {
            Ok(row) => {
                batch.push(row);
                record_count += 1;

                if batch.len() == batch_size {
                    let full = mem::replace(&mut batch, Batch::with_capacity(batch_size));

                    if cmd_tx.send(Command::Batch(full)).await.is_err() {
                        // Collector reached its target and hung up
                        break;
                    }
                }
            }
            Err(e) => {
                eprintln!("Failed to read CSV record: {}", e);
                std::process::exit(1);
            }
        }
    }

    // Trailing partial batch at end of input
    if !batch.is_empty() {
        let _ = cmd_tx.send(Command::Batch(batch)).await;
    }

    eprintln!("Read {} records from source", record_count);

    // Close the channel to signal engine no more batches will arrive
    drop(cmd_tx);
}

/// Wait for engine task to finish processing and handle result
pub async fn finalize_engine(handle: tokio::task::JoinHandle<()>) {
    if let Err(e) = handle.await {
        eprintln!("Engine task error: {:?}", e);
        std::process::exit(1);
    }
}

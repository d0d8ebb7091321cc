mod adapters;
mod engine;

mod models;

use engine::runner;

/// Source dataset and the sampled copy written next to it.
const INPUT_FILE: &str = "flights_sample_3m.csv";
const OUTPUT_FILE: &str = "flights_2022_sample_1_5m.csv";

/// Records pulled from the source in one read.
const BATCH_SIZE: usize = 500_000;

/// Maximum records retained in the output.
const TARGET_ROWS: usize = 1_500_000;

#[tokio::main]
async fn main() {
    let mut csv_reader = adapters::csv_parser::build_csv_reader(INPUT_FILE);

    let (cmd_tx, engine_handle) = runner::setup_engine(TARGET_ROWS, OUTPUT_FILE);

    runner::send_batches_to_engine(&mut csv_reader, BATCH_SIZE, cmd_tx).await;

    runner::finalize_engine(engine_handle).await;
}

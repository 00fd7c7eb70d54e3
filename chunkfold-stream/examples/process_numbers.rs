// Copyright 2025 Chunkfold Contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Aggregates the sequence 1..50,000 in the default batch size and prints
//! the three running aggregates.
//!
//! Run with `cargo run --example process_numbers`.

use chunkfold_stream::{aggregate_numbers, DEFAULT_CHUNK_SIZE};
use std::time::Instant;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let size = 50_000;

    println!("Aggregating 1..{size} in batches of {DEFAULT_CHUNK_SIZE}");
    let start = Instant::now();
    let summary = aggregate_numbers(size, DEFAULT_CHUNK_SIZE).await?;
    let elapsed = start.elapsed();

    println!("Sum of even numbers: {}", summary.even_sum);
    println!("Average of odd numbers: {:.2}", summary.odd_mean);
    println!("Count divisible by 3: {}", summary.div3_count);
    println!("Processing time: {:.4} seconds", elapsed.as_secs_f64());

    Ok(())
}

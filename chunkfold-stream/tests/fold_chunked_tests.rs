// Copyright 2025 Chunkfold Contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use chunkfold_stream::{
    aggregate_numbers, BatchProgress, ChunkfoldError, FoldChunkedExt, NumberSequence,
    DEFAULT_CHUNK_SIZE,
};
use futures::StreamExt;

#[tokio::test]
async fn test_known_aggregates_for_fifty_thousand() -> anyhow::Result<()> {
    // Act
    let summary = aggregate_numbers(50_000, DEFAULT_CHUNK_SIZE).await?;

    // Assert
    assert_eq!(summary.even_sum, 624_975_000);
    assert_eq!(summary.odd_mean, 25_000.0);
    assert_eq!(summary.div3_count, 16_666);
    Ok(())
}

#[tokio::test]
async fn test_batch_size_does_not_affect_results() -> anyhow::Result<()> {
    // Arrange
    let baseline = aggregate_numbers(10_000, 1).await?;

    // Act & Assert: chunk sizes smaller, equal to, and larger than the
    // sequence all yield the same summary
    for chunk_size in [2, 7, 100, 9_999, 10_000, 60_000] {
        let summary = aggregate_numbers(10_000, chunk_size).await?;
        assert_eq!(summary, baseline, "chunk_size {chunk_size} diverged");
    }
    Ok(())
}

#[tokio::test]
async fn test_empty_sequence_yields_sentinel_mean() -> anyhow::Result<()> {
    // Act
    let summary = aggregate_numbers(0, DEFAULT_CHUNK_SIZE).await?;

    // Assert
    assert_eq!(summary.as_tuple(), (0, 0.0, 0));
    Ok(())
}

#[tokio::test]
async fn test_zero_chunk_size_is_rejected_before_consumption() -> anyhow::Result<()> {
    // Arrange
    let mut consumed = 0;
    let mut observations = 0;
    let sequence = NumberSequence::new(10)?.inspect(|_| consumed += 1);

    // Act
    let err = sequence
        .fold_chunked_with(0, |_| observations += 1)
        .await
        .unwrap_err();

    // Assert
    assert!(matches!(err, ChunkfoldError::InvalidArgument { .. }));
    assert_eq!(err.argument(), "chunk_size");
    assert_eq!(consumed, 0, "no value may be pulled before validation");
    assert_eq!(observations, 0, "observer must not run on invalid input");
    Ok(())
}

#[tokio::test]
async fn test_negative_size_is_rejected() {
    // Act
    let err = aggregate_numbers(-1, DEFAULT_CHUNK_SIZE).await.unwrap_err();

    // Assert
    assert_eq!(err.argument(), "size");
}

#[tokio::test]
async fn test_identical_arguments_produce_identical_summaries() -> anyhow::Result<()> {
    // Act
    let first = aggregate_numbers(12_345, 100).await?;
    let second = aggregate_numbers(12_345, 100).await?;

    // Assert: bit-identical, no hidden state between passes
    assert_eq!(first, second);
    assert_eq!(first.odd_mean.to_bits(), second.odd_mean.to_bits());
    Ok(())
}

#[tokio::test]
async fn test_progress_cadence_follows_completed_batches() -> anyhow::Result<()> {
    // Arrange
    let mut observations: Vec<BatchProgress> = Vec::new();

    // Act: 24 values in batches of 10 -> two completed batches, one
    // trailing partial batch that emits nothing
    let summary = NumberSequence::new(25)?
        .fold_chunked_with(10, |progress| observations.push(*progress))
        .await?;

    // Assert
    assert_eq!(observations.len(), 2);
    assert_eq!(observations[0].batches_completed, 1);
    assert_eq!(observations[0].values_seen, 10);
    assert_eq!(observations[1].batches_completed, 2);
    assert_eq!(observations[1].values_seen, 20);
    // partial counts after the first batch of 1..=10
    assert_eq!(observations[0].even_sum, 30);
    assert_eq!(observations[0].odd_sum, 25);
    assert_eq!(observations[0].odd_count, 5);
    assert_eq!(observations[0].div3_count, 3);
    // the trailing 4 values are still accumulated
    assert_eq!(summary.div3_count, 8);
    Ok(())
}

#[tokio::test]
async fn test_observation_does_not_alter_results() -> anyhow::Result<()> {
    // Arrange
    let silent = NumberSequence::new(1_000)?.fold_chunked(64).await?;

    // Act
    let observed = NumberSequence::new(1_000)?
        .fold_chunked_with(64, |_| {})
        .await?;

    // Assert
    assert_eq!(silent, observed);
    Ok(())
}

#[tokio::test]
async fn test_value_divisible_by_six_counts_in_both_branches() -> anyhow::Result<()> {
    // Act
    let summary = aggregate_numbers(7, 3).await?;

    // Assert
    assert_eq!(summary.even_sum, 12); // 2 + 4 + 6
    assert_eq!(summary.odd_mean, 3.0); // (1 + 3 + 5) / 3
    assert_eq!(summary.div3_count, 2); // 3 and 6
    Ok(())
}

#[tokio::test]
async fn test_operator_applies_to_arbitrary_integer_streams() -> anyhow::Result<()> {
    // Arrange
    let source = futures::stream::iter(vec![-3, 0, 2, 9]);

    // Act
    let summary = source.fold_chunked(2).await?;

    // Assert
    assert_eq!(summary.even_sum, 2); // 0 + 2
    assert_eq!(summary.odd_mean, 3.0); // (-3 + 9) / 2
    assert_eq!(summary.div3_count, 3); // -3, 0, 9
    Ok(())
}

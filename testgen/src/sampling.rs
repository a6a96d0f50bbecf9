use {
    crate::bounds::VALUE_BOUNDS,
    rand::Rng,
    std::ops::RangeInclusive,
    tracing::debug,
};

/// Values per batch. Bounds how much is sampled between progress reports.
pub const BATCH_SIZE: usize = 1_000_000;
/// Counts above this are worth reporting progress for.
pub const PROGRESS_THRESHOLD: usize = 100_000;

pub const VALUE_RANGE: RangeInclusive<u16> = VALUE_BOUNDS.min as u16..=VALUE_BOUNDS.max as u16;

/// Draws `count` values uniformly from `range`, calling `tick(done, count)`
/// after each batch.
pub fn sample_batched<R, F>(
    rng: &mut R,
    count: usize,
    range: RangeInclusive<u16>,
    mut tick: F,
) -> Vec<u16>
where
    R: Rng,
    F: FnMut(usize, usize),
{
    let batch = BATCH_SIZE.min(count).max(1);
    let mut values = Vec::with_capacity(count);

    let mut done = 0;
    while done < count {
        let end = (done + batch).min(count);
        values.extend((done..end).map(|_| rng.random_range(range.clone())));
        done = end;
        debug!(done, count, "batch sampled");
        tick(done, count);
    }

    values
}

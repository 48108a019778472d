// fixed-size slicing of the query list
use std::num::NonZeroUsize;
use std::ops::Range;

#[cfg(test)]
mod tests;

/// Splits an ordered list into contiguous batches of at most `batch_size` items.
///
/// Batches are never materialized up front; each one is a view computed from
/// its 0-based batch number.
#[derive(Debug, Clone, Copy)]
pub struct Batcher {
    pub batch_size: NonZeroUsize,
}

impl Batcher {
    pub fn new(batch_size: NonZeroUsize) -> Self {
        Self { batch_size }
    }

    /// `ceil(total / batch_size)`, zero for an empty list
    pub fn num_batches(&self, total: usize) -> usize {
        total.div_ceil(self.batch_size.get())
    }

    /// Slice boundaries of batch `batch_num` within a list of `total` items.
    ///
    /// Returns an empty range when `batch_num` lies past the last batch.
    pub fn bounds(&self, batch_num: usize, total: usize) -> Range<usize> {
        let size = self.batch_size.get();
        let start = batch_num.saturating_mul(size).min(total);
        let end = start.saturating_add(size).min(total);
        start..end
    }

    pub fn slice<'a, T>(&self, items: &'a [T], batch_num: usize) -> &'a [T] {
        &items[self.bounds(batch_num, items.len())]
    }
}

use std::ops::Range;

use crate::DomainError;

pub const DEFAULT_BATCH_SIZE: usize = 16;

/// Cursor arithmetic for incremental gallery loading, kept separate from
/// whatever detects scroll position. Each call to `next_batch` hands out
/// the next contiguous slice of asset indices and advances the cursor
/// before any of those assets are actually fetched, so overlapping
/// triggers can neither double-count nor skip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchPager {
    cursor: usize,
    batch_size: usize,
}

impl BatchPager {
    pub fn new(batch_size: usize) -> Result<Self, DomainError> {
        if batch_size == 0 {
            return Err(DomainError::InvalidBatchSize(batch_size));
        }
        Ok(Self {
            cursor: 0,
            batch_size,
        })
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Next index range `[cursor, min(cursor + batch_size, total))`.
    /// The start clamps to `total` as well, so a pager that outlived a
    /// shrinking asset list yields an empty range instead of an
    /// out-of-bounds one.
    pub fn next_batch(&mut self, total: usize) -> Range<usize> {
        let start = self.cursor.min(total);
        let end = (start + self.batch_size).min(total);
        self.cursor = end;
        start..end
    }

    pub fn is_exhausted(&self, total: usize) -> bool {
        self.cursor >= total
    }

    pub fn reset(&mut self) {
        self.cursor = 0;
    }
}

impl Default for BatchPager {
    fn default() -> Self {
        Self {
            cursor: 0,
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}

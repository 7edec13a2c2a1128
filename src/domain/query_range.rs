use std::ops::RangeInclusive;

pub type QueryIdentifier = u64;

/// Inclusive span of registry identifiers. `start > end` is an empty range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryRange {
    pub start: QueryIdentifier,
    pub end: QueryIdentifier,
}

impl QueryRange {
    pub fn new(start: QueryIdentifier, end: QueryIdentifier) -> Self {
        QueryRange { start, end }
    }

    /// Identifier count, saturating at `u64::MAX` for the full span.
    pub fn len(&self) -> u64 {
        match self.start <= self.end {
            true => (self.end - self.start).saturating_add(1),
            false => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    pub fn iter(&self) -> RangeInclusive<QueryIdentifier> {
        self.start..=self.end
    }
}

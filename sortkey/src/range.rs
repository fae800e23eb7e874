//! Half-open bit ranges within a key

use crate::{Error, SortKey};
use std::ops::Range;

/// Widest slice that fits the 64-bit extraction mask
pub const MAX_SLICE_BITS: u32 = u64::BITS;

/// A non-empty half-open range `[start, end)` of bit positions
///
/// The range is validated on its own when built. Whether it fits a
/// particular key type is checked when a comparator is built from it.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Range<u32>", into = "Range<u32>")
)]
pub struct BitRange {
    /// First bit included
    start: u32,
    /// First bit past the end
    end: u32,
}

impl BitRange {
    /// Build a range, rejecting empty and over-wide ranges.
    pub fn new(start: u32, end: u32) -> Result<Self, Error> {
        if end <= start {
            return Err(Error::EmptyRange { start, end });
        }
        if end - start > MAX_SLICE_BITS {
            return Err(Error::RangeTooWide { start, end });
        }
        Ok(Self { start, end })
    }

    /// The range covering every bit of `K`.
    pub fn full<K: SortKey>() -> Self {
        Self {
            start: 0,
            end: K::BITS,
        }
    }

    /// First bit included.
    pub fn start(&self) -> u32 {
        self.start
    }

    /// First bit past the end.
    pub fn end(&self) -> u32 {
        self.end
    }

    /// Number of bits in the range, always at least one.
    pub fn width(&self) -> u32 {
        self.end - self.start
    }

    /// True if the range is exactly every bit of `K`.
    pub fn covers<K: SortKey>(&self) -> bool {
        self.start == 0 && self.end == K::BITS
    }

    /// Mask selecting [`Self::width()`] low bits.
    pub fn mask(&self) -> u64 {
        u64::MAX >> (u64::BITS - self.width())
    }
}

impl TryFrom<Range<u32>> for BitRange {
    type Error = Error;

    fn try_from(range: Range<u32>) -> Result<Self, Error> {
        Self::new(range.start, range.end)
    }
}

impl From<BitRange> for Range<u32> {
    fn from(range: BitRange) -> Range<u32> {
        range.start..range.end
    }
}

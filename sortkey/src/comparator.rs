//! Bit-range key comparators
//!
//! A [`KeyComparator`] answers "does `lhs` sort before `rhs`" for a fixed
//! direction and bit range. When the range spans the whole key it uses the
//! key's natural order. Otherwise it extracts the range from both keys as
//! unsigned integers and compares those. The choice is made once, at
//! construction, and is visible through [`KeyComparator::strategy()`].
//!
//! Descending order swaps the operands instead of negating the result, so
//! keys that compare equal stay equivalent in both directions.

use crate::{BitKey, BitRange, Error, Extract, Predicate, SortKey};
use std::fmt;
use std::marker::PhantomData;
use strum::{Display, EnumIter};

/// Sort direction
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash, Display, EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(clippy::exhaustive_enums)] // There are only ever two directions
pub enum Direction {
    /// Smallest key first
    #[default]
    Ascending,
    /// Largest key first
    Descending,
}

impl Direction {
    /// Map a "descending" flag to a direction.
    pub fn from_descending(descending: bool) -> Self {
        if descending {
            Direction::Descending
        } else {
            Direction::Ascending
        }
    }

    /// True for [`Direction::Descending`].
    pub fn is_descending(self) -> bool {
        self == Direction::Descending
    }
}

/// How a [`KeyComparator`] compares its keys
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum Strategy {
    /// Natural order over the whole key
    FullWidth,
    /// Unsigned comparison of bits `start..end`
    BitSlice {
        /// First bit compared
        start: u32,
        /// First bit past the compared range
        end: u32,
    },
}

/// Resolved comparison, with what the chosen strategy needs at hand
enum Plan<K> {
    /// Compare with [`SortKey::natural_less()`]
    Natural,
    /// Compare `(extract(key, start) & mask)` values
    Slice {
        /// Shift applied before masking
        start: u32,
        /// Low-bit mask of the range width
        mask: u64,
        /// Bit extraction for `K`
        extract: Extract<K>,
    },
}

// Manual impls: derives would require `K: Clone`, but only fn pointers are held.
impl<K> Clone for Plan<K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K> Copy for Plan<K> {}

/// Strict "goes before" predicate over keys of type `K`
///
/// Built once per test configuration and then used as the ordering for the
/// reference sort. Construction rejects every invalid configuration, so the
/// comparison itself is a total function.
pub struct KeyComparator<K> {
    /// Requested order
    direction: Direction,
    /// Requested bits
    range: BitRange,
    /// Comparison resolved from the range and key type
    plan: Plan<K>,
}

impl<K: SortKey> KeyComparator<K> {
    /// Build a comparator for bits `start..end` of `K`.
    ///
    /// Fails if the range is empty, wider than 64 bits, runs past the end of
    /// the key, or is a partial range on a key type that can't be sliced.
    pub fn new(direction: Direction, start: u32, end: u32) -> Result<Self, Error> {
        Self::with_range(direction, BitRange::new(start, end)?)
    }

    /// Build a comparator from an already validated [`BitRange`].
    ///
    /// Same checks as [`Self::new()`], minus the ones [`BitRange`] did.
    pub fn with_range(direction: Direction, range: BitRange) -> Result<Self, Error> {
        if range.end() > K::BITS {
            return Err(Error::OutOfBounds {
                end: range.end(),
                bits: K::BITS,
            });
        }
        let plan = if range.covers::<K>() {
            Plan::Natural
        } else {
            match K::extractor() {
                Some(extract) => Plan::Slice {
                    start: range.start(),
                    mask: range.mask(),
                    extract,
                },
                None => {
                    return Err(Error::NotSliceable {
                        key: std::any::type_name::<K>(),
                        start: range.start(),
                        end: range.end(),
                    })
                }
            }
        };
        let comparator = Self {
            direction,
            range,
            plan,
        };
        log::trace!(
            "sortkey: {} comparator over {}: {:?}",
            direction,
            std::any::type_name::<K>(),
            comparator.strategy()
        );
        Ok(comparator)
    }

    /// Full-width comparator, which can't fail for any key type.
    pub fn full(direction: Direction) -> Self {
        Self {
            direction,
            range: BitRange::full::<K>(),
            plan: Plan::Natural,
        }
    }

    /// Does `lhs` go before `rhs`?
    #[inline]
    pub fn less(&self, lhs: &K, rhs: &K) -> bool {
        let (a, b) = match self.direction {
            Direction::Ascending => (lhs, rhs),
            Direction::Descending => (rhs, lhs),
        };
        match self.plan {
            Plan::Natural => a.natural_less(b),
            Plan::Slice {
                start,
                mask,
                extract,
            } => (extract(a, start) & mask) < (extract(b, start) & mask),
        }
    }
}

impl<K: BitKey> KeyComparator<K> {
    /// Build a comparator for a sliceable key.
    ///
    /// Like [`Self::with_range()`], but asking for a partial range on a key
    /// that can't be sliced is a compile error rather than
    /// [`Error::NotSliceable`].
    ///
    /// ```
    /// use sortkey::{BitRange, Direction, KeyComparator};
    ///
    /// let range = BitRange::new(2, 6).unwrap();
    /// let cmp = KeyComparator::<u8>::with_bits(Direction::Ascending, range).unwrap();
    /// assert!(cmp.less(&0b0001_0100, &0b0010_0100));
    /// ```
    ///
    /// Signed keys have no bit slicing, so this doesn't build:
    ///
    /// ```compile_fail
    /// use sortkey::{BitRange, Direction, KeyComparator};
    ///
    /// let range = BitRange::new(0, 16).unwrap();
    /// let _ = KeyComparator::<i32>::with_bits(Direction::Ascending, range);
    /// ```
    pub fn with_bits(direction: Direction, range: BitRange) -> Result<Self, Error> {
        Self::with_range(direction, range)
    }
}

impl<K> KeyComparator<K> {
    /// Requested order.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Requested bits.
    pub fn range(&self) -> BitRange {
        self.range
    }

    /// The comparison selected at construction.
    pub fn strategy(&self) -> Strategy {
        match self.plan {
            Plan::Natural => Strategy::FullWidth,
            Plan::Slice { .. } => Strategy::BitSlice {
                start: self.range.start(),
                end: self.range.end(),
            },
        }
    }
}

impl<K> Clone for KeyComparator<K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K> Copy for KeyComparator<K> {}

impl<K> fmt::Debug for KeyComparator<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyComparator")
            .field("direction", &self.direction)
            .field("strategy", &self.strategy())
            .finish()
    }
}

impl<K: SortKey> Predicate<K> for KeyComparator<K> {
    #[inline]
    fn test(&self, lhs: &K, rhs: &K) -> bool {
        self.less(lhs, rhs)
    }
}

/// Comparator over `(key, value)` pairs that only looks at the key
pub struct KeyValueComparator<K, V> {
    /// Comparison applied to the keys
    key: KeyComparator<K>,
    /// The value type never participates
    _value: PhantomData<fn(&V)>,
}

impl<K: SortKey, V> KeyValueComparator<K, V> {
    /// Build a comparator for bits `start..end` of the key.
    ///
    /// Fails exactly when [`KeyComparator::new()`] would.
    pub fn new(direction: Direction, start: u32, end: u32) -> Result<Self, Error> {
        KeyComparator::new(direction, start, end).map(Self::from)
    }

    /// Full-width key comparator.
    pub fn full(direction: Direction) -> Self {
        KeyComparator::full(direction).into()
    }

    /// Does the pair `lhs` go before `rhs`?
    #[inline]
    pub fn less(&self, lhs: &(K, V), rhs: &(K, V)) -> bool {
        self.key.less(&lhs.0, &rhs.0)
    }
}

impl<K, V> KeyValueComparator<K, V> {
    /// The comparator applied to keys.
    pub fn key_comparator(&self) -> &KeyComparator<K> {
        &self.key
    }
}

impl<K, V> From<KeyComparator<K>> for KeyValueComparator<K, V> {
    fn from(key: KeyComparator<K>) -> Self {
        Self {
            key,
            _value: PhantomData,
        }
    }
}

impl<K, V> Clone for KeyValueComparator<K, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, V> Copy for KeyValueComparator<K, V> {}

impl<K, V> fmt::Debug for KeyValueComparator<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("KeyValueComparator").field(&self.key).finish()
    }
}

impl<K: SortKey, V> Predicate<(K, V)> for KeyValueComparator<K, V> {
    #[inline]
    fn test(&self, lhs: &(K, V), rhs: &(K, V)) -> bool {
        self.less(lhs, rhs)
    }
}

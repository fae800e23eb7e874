//! Key representations accepted by the comparators
//!
//! Every key has a natural order and a fixed bit width. Only unsigned
//! integers can additionally be sliced into bit ranges, since they're the only
//! keys whose bit pattern orders the same way as their value.

use num_traits::{AsPrimitive, PrimInt, Unsigned};

/// Extraction function for a bit-sliceable key, see [`BitKey::extract()`]
pub type Extract<K> = fn(&K, u32) -> u64;

/// A fixed-width key with a natural order
pub trait SortKey {
    /// Width of the key's representation, in bits
    const BITS: u32;

    /// Natural strict ordering, `self < other`.
    fn natural_less(&self, other: &Self) -> bool;

    /// The key's bit extraction, if it can be sliced at all.
    ///
    /// Lets code that only knows a key is a [`SortKey`] find out whether a
    /// partial bit range is legal. Only [`BitKey`] types return `Some`.
    fn extractor() -> Option<Extract<Self>>
    where
        Self: Sized,
    {
        None
    }
}

/// A key that can be reinterpreted as an unsigned integer of the same width
pub trait BitKey: SortKey {
    /// Shift the key right by `start` bits and truncate to 64 bits.
    ///
    /// `start` is always less than [`SortKey::BITS`].
    fn extract(&self, start: u32) -> u64;
}

/// Shared [`BitKey::extract()`] body for the unsigned primitives
#[inline(always)]
fn shift_out<T>(value: T, start: u32) -> u64
where
    T: PrimInt + Unsigned + AsPrimitive<u64>,
{
    (value >> start as usize).as_()
}

/// Implement [`SortKey`] and [`BitKey`] for unsigned primitives.
macro_rules! unsigned_key {
    ($($t:ty),*) => {$(
        impl SortKey for $t {
            const BITS: u32 = <$t>::BITS;

            #[inline(always)]
            fn natural_less(&self, other: &Self) -> bool {
                self < other
            }

            fn extractor() -> Option<Extract<Self>> {
                Some(<$t as BitKey>::extract)
            }
        }

        impl BitKey for $t {
            #[inline(always)]
            fn extract(&self, start: u32) -> u64 {
                shift_out(*self, start)
            }
        }
    )*};
}

/// Implement [`SortKey`] for primitives that only support full-width order.
macro_rules! natural_key {
    ($($t:ty => $bits:expr),*) => {$(
        impl SortKey for $t {
            const BITS: u32 = $bits;

            #[inline(always)]
            fn natural_less(&self, other: &Self) -> bool {
                self < other
            }
        }
    )*};
}

unsigned_key!(u8, u16, u32, u64);

natural_key!(
    i8 => i8::BITS,
    i16 => i16::BITS,
    i32 => i32::BITS,
    i64 => i64::BITS,
    f32 => 32,
    f64 => 64
);

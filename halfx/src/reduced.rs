//! The 16-bit float types this crate operates on

use half::{bf16, f16};
use std::fmt;
use std::ops::{Add, Mul, Sub};

/// A 16-bit floating point type that needs promotion for portable arithmetic
///
/// Implemented for [`f16`] (IEEE 754 binary16) and [`bf16`] (bfloat16). The
/// operator bounds are the type's own native operators, which the native
/// path uses directly. The fallback path only uses [`Self::widen()`] and
/// [`Self::narrow()`].
pub trait Reduced:
    Copy
    + fmt::Debug
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Send
    + Sync
    + 'static
    + sealed::Sealed
{
    /// Short human-readable name of the format
    const NAME: &'static str;

    /// Convert to `f32`. Exact for every value.
    fn widen(self) -> f32;

    /// Convert from `f32`, rounding to nearest even.
    fn narrow(wide: f32) -> Self;

    /// Raw bit pattern.
    fn to_bits(self) -> u16;

    /// Reinterpret a raw bit pattern.
    fn from_bits(bits: u16) -> Self;
}

impl Reduced for f16 {
    const NAME: &'static str = "f16";

    #[inline(always)]
    fn widen(self) -> f32 {
        f16::to_f32(self)
    }

    #[inline(always)]
    fn narrow(wide: f32) -> Self {
        f16::from_f32(wide)
    }

    #[inline(always)]
    fn to_bits(self) -> u16 {
        f16::to_bits(self)
    }

    #[inline(always)]
    fn from_bits(bits: u16) -> Self {
        f16::from_bits(bits)
    }
}

impl Reduced for bf16 {
    const NAME: &'static str = "bf16";

    #[inline(always)]
    fn widen(self) -> f32 {
        bf16::to_f32(self)
    }

    #[inline(always)]
    fn narrow(wide: f32) -> Self {
        bf16::from_f32(wide)
    }

    #[inline(always)]
    fn to_bits(self) -> u16 {
        bf16::to_bits(self)
    }

    #[inline(always)]
    fn from_bits(bits: u16) -> Self {
        bf16::from_bits(bits)
    }
}

/// Keeps [`Reduced`] closed to the formats above
mod sealed {
    /// Marker supertrait
    pub trait Sealed {}
    impl Sealed for half::f16 {}
    impl Sealed for half::bf16 {}
}

#![cfg_attr(docsrs, feature(doc_auto_cfg, doc_cfg))]
#![doc = include_str!("../README.md")]
// @@ begin lint list @@
#![allow(renamed_and_removed_lints)]
#![allow(unknown_lints)]
#![warn(missing_docs)]
#![warn(noop_method_call)]
#![warn(unreachable_pub)]
#![warn(clippy::all)]
#![deny(clippy::cast_lossless)]
#![deny(clippy::checked_conversions)]
#![warn(clippy::cognitive_complexity)]
#![deny(clippy::debug_assert_with_mut_call)]
#![deny(clippy::exhaustive_enums)]
#![deny(clippy::exhaustive_structs)]
#![deny(clippy::expl_impl_clone_on_copy)]
#![deny(clippy::fallible_impl_from)]
#![deny(clippy::implicit_clone)]
#![deny(clippy::large_stack_arrays)]
#![warn(clippy::manual_ok_or)]
#![deny(clippy::missing_docs_in_private_items)]
#![warn(clippy::needless_borrow)]
#![warn(clippy::needless_pass_by_value)]
#![warn(clippy::option_option)]
#![deny(clippy::print_stderr)]
#![deny(clippy::print_stdout)]
#![deny(clippy::ref_option_ref)]
#![warn(clippy::semicolon_if_nothing_returned)]
#![warn(clippy::trait_duplication_in_bounds)]
#![deny(clippy::unnecessary_wraps)]
#![warn(clippy::unseparated_literal_suffix)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::mod_module_files)]
#![allow(clippy::let_unit_value)] // This can reasonably be done for explicitness
#![allow(clippy::uninlined_format_args)]
//! <!-- @@ end lint list @@ -->

mod err;
mod fallback;
mod native;
mod op;
mod reduced;

pub use crate::err::Error;
pub use crate::op::{Arith, Relation};
pub use crate::reduced::Reduced;

pub use half::{bf16, f16};

/// Option for selecting the execution path of a [`HalfOps`] handle
#[derive(Default, Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum PathOption {
    /// Always widen to `f32`, operate there, and narrow the result.
    FallbackOnly,
    /// Operate on the 16-bit type directly, and fail if that isn't available.
    NativeOnly,
    /// Use the native path when it's available, otherwise the fallback.
    /// (This is the default)
    #[default]
    TryNative,
}

/// Effective execution path for a constructed [`HalfOps`]
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum Path {
    /// The widen-operate-narrow fallback is active.
    Fallback,
    /// The native 16-bit operators are active.
    Native,
}

/// Handle for evaluating relations and arithmetic over [`Reduced`] values
///
/// The execution path is picked once, when the handle is built, and every
/// evaluation afterwards dispatches on that choice. Both paths produce the
/// same observable results; the fallback is the reference.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct HalfOps {
    /// Path resolved by [`HalfOpsBuilder::build()`]
    path: Path,
}

impl HalfOps {
    /// Build a handle with the default [`PathOption`].
    ///
    /// This can't fail with the default option, since [`PathOption::TryNative`]
    /// always has the fallback to land on.
    pub fn new() -> Self {
        Self {
            path: select(PathOption::TryNative),
        }
    }

    /// Build a handle that always uses the portable fallback.
    pub fn fallback() -> Self {
        Self {
            path: Path::Fallback,
        }
    }

    /// Check which execution path is in effect.
    pub fn path(&self) -> Path {
        self.path
    }

    /// Evaluate `relation` on `lhs` and `rhs`.
    #[inline]
    pub fn relation<T: Reduced>(&self, relation: Relation, lhs: T, rhs: T) -> bool {
        match self.path {
            Path::Fallback => fallback::relation(relation, lhs, rhs),
            Path::Native => native::relation(relation, lhs, rhs),
        }
    }

    /// Evaluate the arithmetic operation `op` on `lhs` and `rhs`.
    #[inline]
    pub fn arith<T: Reduced>(&self, op: Arith, lhs: T, rhs: T) -> T {
        match self.path {
            Path::Fallback => fallback::arith(op, lhs, rhs),
            Path::Native => native::arith(op, lhs, rhs),
        }
    }

    /// `lhs < rhs`
    pub fn less<T: Reduced>(&self, lhs: T, rhs: T) -> bool {
        self.relation(Relation::Less, lhs, rhs)
    }

    /// `lhs <= rhs`
    pub fn less_equal<T: Reduced>(&self, lhs: T, rhs: T) -> bool {
        self.relation(Relation::LessEqual, lhs, rhs)
    }

    /// `lhs > rhs`
    pub fn greater<T: Reduced>(&self, lhs: T, rhs: T) -> bool {
        self.relation(Relation::Greater, lhs, rhs)
    }

    /// `lhs >= rhs`
    pub fn greater_equal<T: Reduced>(&self, lhs: T, rhs: T) -> bool {
        self.relation(Relation::GreaterEqual, lhs, rhs)
    }

    /// `lhs == rhs`
    pub fn equal<T: Reduced>(&self, lhs: T, rhs: T) -> bool {
        self.relation(Relation::Equal, lhs, rhs)
    }

    /// `lhs != rhs`
    pub fn not_equal<T: Reduced>(&self, lhs: T, rhs: T) -> bool {
        self.relation(Relation::NotEqual, lhs, rhs)
    }

    /// `lhs + rhs`, rounded to the 16-bit type
    pub fn plus<T: Reduced>(&self, lhs: T, rhs: T) -> T {
        self.arith(Arith::Plus, lhs, rhs)
    }

    /// `lhs - rhs`, rounded to the 16-bit type
    pub fn minus<T: Reduced>(&self, lhs: T, rhs: T) -> T {
        self.arith(Arith::Minus, lhs, rhs)
    }

    /// `lhs * rhs`, rounded to the 16-bit type
    pub fn multiplies<T: Reduced>(&self, lhs: T, rhs: T) -> T {
        self.arith(Arith::Multiplies, lhs, rhs)
    }

    /// The larger operand; `lhs` wins unless `lhs < rhs`.
    pub fn maximum<T: Reduced>(&self, lhs: T, rhs: T) -> T {
        self.arith(Arith::Maximum, lhs, rhs)
    }

    /// The smaller operand; `rhs` wins unless `lhs < rhs`.
    pub fn minimum<T: Reduced>(&self, lhs: T, rhs: T) -> T {
        self.arith(Arith::Minimum, lhs, rhs)
    }
}

impl Default for HalfOps {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for creating [`HalfOps`] handles with custom settings
#[derive(Default, Debug, Clone, Eq, PartialEq)]
pub struct HalfOpsBuilder {
    /// Current path() setting for this builder
    path: PathOption,
}

impl HalfOpsBuilder {
    /// Create a new [`HalfOpsBuilder`] with default settings.
    ///
    /// Immediately calling [`Self::build()`] would be equivalent to using
    /// [`HalfOps::new()`].
    pub fn new() -> Self {
        Default::default()
    }

    /// Select a new [`PathOption`].
    pub fn path(&mut self, path: PathOption) -> &mut Self {
        self.path = path;
        self
    }

    /// Build a [`HalfOps`] handle with the selected options.
    ///
    /// Only [`PathOption::NativeOnly`] can fail, with
    /// [`Error::NativeUnavailable`], when this build has no native path.
    pub fn build(&self) -> Result<HalfOps, Error> {
        let path = match self.path {
            PathOption::NativeOnly => {
                native::check()?;
                Path::Native
            }
            option => select(option),
        };
        Ok(HalfOps { path })
    }
}

/// Resolve a [`PathOption`] that can't fail.
fn select(option: PathOption) -> Path {
    match option {
        PathOption::FallbackOnly => Path::Fallback,
        PathOption::NativeOnly | PathOption::TryNative => match native::check() {
            Ok(()) => Path::Native,
            Err(e) => {
                log::debug!("halfx: using fallback path: {}", e);
                Path::Fallback
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_only_is_always_available() {
        let ops = HalfOpsBuilder::new()
            .path(PathOption::FallbackOnly)
            .build()
            .unwrap();
        assert_eq!(ops.path(), Path::Fallback);
        assert_eq!(HalfOps::fallback(), ops);
    }

    #[cfg(feature = "native")]
    #[test]
    fn native_selected_when_enabled() {
        assert_eq!(HalfOps::new().path(), Path::Native);
        let ops = HalfOpsBuilder::new()
            .path(PathOption::NativeOnly)
            .build()
            .unwrap();
        assert_eq!(ops.path(), Path::Native);
    }

    #[cfg(not(feature = "native"))]
    #[test]
    fn native_only_fails_when_disabled() {
        assert_eq!(HalfOps::new().path(), Path::Fallback);
        let err = HalfOpsBuilder::new()
            .path(PathOption::NativeOnly)
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::NativeUnavailable));
    }

    #[test]
    fn min_max_tie_break() {
        let ops = HalfOps::fallback();
        let pos = f16::from_f32(0.0);
        let neg = f16::from_f32(-0.0);
        // Neither zero is less than the other, so the tie-break picks by position.
        assert_eq!(ops.maximum(pos, neg).to_bits(), pos.to_bits());
        assert_eq!(ops.maximum(neg, pos).to_bits(), neg.to_bits());
        assert_eq!(ops.minimum(pos, neg).to_bits(), neg.to_bits());
        assert_eq!(ops.minimum(neg, pos).to_bits(), pos.to_bits());
    }
}

//! Native path: operate on the 16-bit type through its own operators
//!
//! Relations use the format's own ordering on bit patterns without
//! promoting either operand. Arithmetic uses the format's operator
//! implementations, which may use hardware conversion instructions when the
//! target has them. Results must match [`crate::fallback`] exactly.
//!
//! Availability is decided by the `native` cargo feature. When the feature
//! is off, [`check()`] reports [`Error::NativeUnavailable`] and a handle can
//! never resolve to [`crate::Path::Native`].

use crate::{Arith, Error, Reduced, Relation};

/// Report whether the native path can be selected in this build.
#[cfg(feature = "native")]
#[allow(clippy::unnecessary_wraps)]
pub(crate) fn check() -> Result<(), Error> {
    Ok(())
}

/// Report whether the native path can be selected in this build.
#[cfg(not(feature = "native"))]
pub(crate) fn check() -> Result<(), Error> {
    Err(Error::NativeUnavailable)
}

/// Evaluate `relation` directly on the 16-bit operands.
#[inline]
pub(crate) fn relation<T: Reduced>(relation: Relation, lhs: T, rhs: T) -> bool {
    relation.eval(&lhs, &rhs)
}

/// Evaluate `op` with the 16-bit type's own operators.
#[inline]
pub(crate) fn arith<T: Reduced>(op: Arith, lhs: T, rhs: T) -> T {
    match op {
        Arith::Plus => lhs + rhs,
        Arith::Minus => lhs - rhs,
        Arith::Multiplies => lhs * rhs,
        Arith::Maximum => {
            if lhs < rhs {
                rhs
            } else {
                lhs
            }
        }
        Arith::Minimum => {
            if lhs < rhs {
                lhs
            } else {
                rhs
            }
        }
    }
}

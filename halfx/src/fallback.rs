//! Portable reference path: widen to `f32`, operate, narrow back
//!
//! Selection operations (maximum, minimum) return one of the original
//! operands rather than a narrowed copy, so the bit pattern of a NaN or a
//! signed zero survives.

use crate::{Arith, Reduced, Relation};

/// Evaluate `relation` on the widened operands.
#[inline]
pub(crate) fn relation<T: Reduced>(relation: Relation, lhs: T, rhs: T) -> bool {
    relation.eval(&lhs.widen(), &rhs.widen())
}

/// Evaluate `op` on the widened operands and round the result.
#[inline]
pub(crate) fn arith<T: Reduced>(op: Arith, lhs: T, rhs: T) -> T {
    let (a, b) = (lhs.widen(), rhs.widen());
    match op {
        Arith::Plus => T::narrow(a + b),
        Arith::Minus => T::narrow(a - b),
        Arith::Multiplies => T::narrow(a * b),
        Arith::Maximum => {
            if a < b {
                rhs
            } else {
                lhs
            }
        }
        Arith::Minimum => {
            if a < b {
                lhs
            } else {
                rhs
            }
        }
    }
}

//! Keys, predicates and operators over 16-bit floats
//!
//! 16-bit float keys only support full-width comparison. Their bit pattern
//! doesn't order like their value, so a partial range is a configuration
//! error rather than a reinterpretation.

use crate::{BinaryOp, Predicate, SortKey};
use half::{bf16, f16};
use halfx::{Arith, HalfOps, Reduced, Relation};

/// Implement [`SortKey`] by comparing the keys promoted to `f32`.
macro_rules! reduced_key {
    ($($t:ty),*) => {$(
        impl SortKey for $t {
            const BITS: u32 = 16;

            #[inline(always)]
            fn natural_less(&self, other: &Self) -> bool {
                self.widen() < other.widen()
            }
        }
    )*};
}

reduced_key!(f16, bf16);

/// One relation over 16-bit floats, bound to an execution path
///
/// The path-selecting counterpart of [`crate::Less`] and friends, plus
/// equality tests.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct HalfPredicate {
    /// Path used for evaluation
    ops: HalfOps,
    /// Relation evaluated
    relation: Relation,
}

impl HalfPredicate {
    /// Bind `relation` to the path chosen by `ops`.
    pub fn new(ops: HalfOps, relation: Relation) -> Self {
        Self { ops, relation }
    }

    /// Which relation this predicate evaluates.
    pub fn relation(&self) -> Relation {
        self.relation
    }
}

impl<T: Reduced> Predicate<T> for HalfPredicate {
    #[inline]
    fn test(&self, lhs: &T, rhs: &T) -> bool {
        self.ops.relation(self.relation, *lhs, *rhs)
    }
}

/// One arithmetic operation over 16-bit floats, bound to an execution path
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct HalfOperator {
    /// Path used for evaluation
    ops: HalfOps,
    /// Operation applied
    op: Arith,
}

impl HalfOperator {
    /// Bind `op` to the path chosen by `ops`.
    pub fn new(ops: HalfOps, op: Arith) -> Self {
        Self { ops, op }
    }

    /// Which operation this operator applies.
    pub fn op(&self) -> Arith {
        self.op
    }
}

impl<T: Reduced> BinaryOp<T> for HalfOperator {
    #[inline]
    fn apply(&self, lhs: &T, rhs: &T) -> T {
        self.ops.arith(self.op, *lhs, *rhs)
    }
}

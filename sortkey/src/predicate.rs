//! Predicate and operator objects, and sort checks built on them
//!
//! A [`Predicate`] is a strict "lhs goes before rhs" test, or any other
//! boolean relation, that a sort or reduction routine takes as a strategy
//! parameter. A [`BinaryOp`] is the matching shape for reduction operators.

use std::cmp::Ordering;

/// A binary predicate over two values of the same type
pub trait Predicate<T: ?Sized> {
    /// Evaluate the predicate.
    fn test(&self, lhs: &T, rhs: &T) -> bool;

    /// Three-way result, assuming the predicate is a strict weak ordering.
    ///
    /// Values that neither precede nor follow each other are `Equal`.
    fn ordering(&self, lhs: &T, rhs: &T) -> Ordering {
        if self.test(lhs, rhs) {
            Ordering::Less
        } else if self.test(rhs, lhs) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }

    /// Stable sort of `items` under this ordering.
    ///
    /// This is the expected output a tested sort routine is checked against.
    fn sort(&self, items: &mut [T])
    where
        T: Sized,
    {
        items.sort_by(|a, b| self.ordering(a, b));
    }

    /// True if no element of `items` precedes the element before it.
    fn is_sorted(&self, items: &[T]) -> bool
    where
        T: Sized,
    {
        items.windows(2).all(|w| !self.test(&w[1], &w[0]))
    }
}

impl<T: ?Sized, F> Predicate<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    fn test(&self, lhs: &T, rhs: &T) -> bool {
        self(lhs, rhs)
    }
}

/// A binary operator producing a value of the operand type
pub trait BinaryOp<T> {
    /// Apply the operator.
    fn apply(&self, lhs: &T, rhs: &T) -> T;

    /// Left fold of `items` with this operator, `None` when empty.
    ///
    /// The sequential reference a tested reduction is checked against.
    fn reduce(&self, items: &[T]) -> Option<T>
    where
        T: Clone,
    {
        let (first, rest) = items.split_first()?;
        Some(rest.iter().fold(first.clone(), |acc, x| self.apply(&acc, x)))
    }
}

/// Implement a [`Predicate`] for every [`PartialOrd`] type.
macro_rules! relation {
    ($(#[$doc:meta] $name:ident => $op:tt),*) => {$(
        #[$doc]
        #[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
        pub struct $name;

        impl<T: PartialOrd + ?Sized> Predicate<T> for $name {
            #[inline(always)]
            fn test(&self, lhs: &T, rhs: &T) -> bool {
                lhs $op rhs
            }
        }
    )*};
}

relation!(
    /// `lhs < rhs`
    Less => <,
    /// `lhs <= rhs`
    LessEqual => <=,
    /// `lhs > rhs`
    Greater => >,
    /// `lhs >= rhs`
    GreaterEqual => >=
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generic_relations() {
        assert!(Less.test(&1, &2));
        assert!(!Less.test(&2, &2));
        assert!(LessEqual.test(&2, &2));
        assert!(Greater.test("b", "a"));
        assert!(GreaterEqual.test(&1.5, &1.5));
    }

    #[test]
    fn closures_are_predicates() {
        let by_len = |a: &&str, b: &&str| a.len() < b.len();
        let mut words = ["ccc", "a", "bb", "d"];
        by_len.sort(&mut words[..]);
        // Stable: "a" stays ahead of "d".
        assert_eq!(words, ["a", "d", "bb", "ccc"]);
        assert!(by_len.is_sorted(&words[..]));
        assert_eq!(by_len.ordering(&"a", &"d"), Ordering::Equal);
    }

    #[test]
    fn reduce_folds_left() {
        struct Minus;
        impl BinaryOp<i32> for Minus {
            fn apply(&self, lhs: &i32, rhs: &i32) -> i32 {
                lhs - rhs
            }
        }
        assert_eq!(Minus.reduce(&[10, 1, 2]), Some(7));
        assert_eq!(Minus.reduce(&[]), None);
    }
}

//! Operation selectors shared by both execution paths

use strum::{Display, EnumIter};

/// A binary relation over two values
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Display, EnumIter)]
#[non_exhaustive]
pub enum Relation {
    /// `a < b`
    Less,
    /// `a <= b`
    LessEqual,
    /// `a > b`
    Greater,
    /// `a >= b`
    GreaterEqual,
    /// `a == b`
    Equal,
    /// `a != b`
    NotEqual,
}

impl Relation {
    /// Evaluate with any partially ordered operands.
    ///
    /// Both paths funnel through here, with either `f32` or the 16-bit type.
    #[inline(always)]
    pub(crate) fn eval<T: PartialOrd>(self, a: &T, b: &T) -> bool {
        match self {
            Relation::Less => a < b,
            Relation::LessEqual => a <= b,
            Relation::Greater => a > b,
            Relation::GreaterEqual => a >= b,
            Relation::Equal => a == b,
            Relation::NotEqual => a != b,
        }
    }
}

/// A binary arithmetic operation over two values
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Display, EnumIter)]
#[non_exhaustive]
pub enum Arith {
    /// `a + b`
    Plus,
    /// `a - b`
    Minus,
    /// `a * b`
    Multiplies,
    /// `if a < b { b } else { a }`
    Maximum,
    /// `if a < b { a } else { b }`
    Minimum,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn eval_borrows_operands() {
        let (a, b) = (String::from("a"), String::from("b"));
        let expected = [true, true, false, false, false, true];
        for (relation, want) in Relation::iter().zip(expected) {
            assert_eq!(relation.eval(&a, &b), want, "{}", relation);
        }
        // Both operands are still owned here.
        assert_eq!(a + &b, "ab");
    }
}

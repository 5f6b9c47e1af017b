//! # Matcher Engine
//!
//! Pure, stateless comparison predicates, one family per value kind:
//! integers (all widths), doubles, and nullable strings. This is the leaf
//! of the engine: nothing here touches tallies, sinks, or global state.
//!
//! Each kind computes its positive ("to") and negative ("not_to")
//! predicates independently rather than deriving one as the logical
//! negation of the other. For strings this allows the null handling to
//! stay asymmetric at the edges: the positive predicate asks "are both
//! null", the negative asks "is exactly one null".

/// Tolerance used by the `to_be_like` / `not_to_be_like` directions on
/// doubles. The single tunable constant of the engine.
pub const EPSILON: f64 = 1e-9;

/// The four directional intents an assertion can declare.
///
/// The direction is derived from the matcher tag written at the call
/// site (`to_be(..)`, `not_to_be(..)`, `to_be_like(..)`,
/// `not_to_be_like(..)`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    ToBe,
    NotToBe,
    ToBeLike,
    NotToBeLike,
}

impl Direction {
    /// True for the `not_to` family: the negative predicate must hold.
    pub fn is_negated(self) -> bool {
        matches!(self, Direction::NotToBe | Direction::NotToBeLike)
    }

    /// True for the `*_like` family: the tolerant variant of equality.
    pub fn is_like(self) -> bool {
        matches!(self, Direction::ToBeLike | Direction::NotToBeLike)
    }
}

// ============================================================================
// INTEGER KINDS: i32, u32, i64, u64, i128, u128
// ============================================================================

pub mod integer {
    use super::Direction;

    /// Comparison predicate shared by every integer width.
    ///
    /// Likeness for integers is defined identically to equality; there
    /// is no fuzzy comparison for integers.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use minispec::matcher::{integer, Direction};
    /// assert!(integer::holds(Direction::ToBe, 42, 42));
    /// assert!(integer::holds(Direction::ToBeLike, 42, 42));
    /// assert!(integer::holds(Direction::NotToBe, 42, 90));
    /// ```
    pub fn holds<T: PartialEq>(direction: Direction, actual: T, expected: T) -> bool {
        let positive = actual == expected;
        let negative = actual != expected;
        if direction.is_negated() {
            negative
        } else {
            positive
        }
    }
}

// ============================================================================
// DOUBLE KIND: f64
// ============================================================================

pub mod float {
    use super::{Direction, EPSILON};

    /// Comparison predicate for doubles.
    ///
    /// `to_be` / `not_to_be` use exact floating equality. The `*_like`
    /// directions instead test `|actual - expected| <= EPSILON` (and
    /// `> EPSILON` for the negated case), so a difference of exactly
    /// `EPSILON` satisfies `to_be_like`.
    #[allow(clippy::float_cmp)]
    pub fn holds(direction: Direction, actual: f64, expected: f64) -> bool {
        let positive = if direction.is_like() {
            (actual - expected).abs() <= EPSILON
        } else {
            actual == expected
        };
        let negative = if direction.is_like() {
            (actual - expected).abs() > EPSILON
        } else {
            actual != expected
        };
        if direction.is_negated() {
            negative
        } else {
            positive
        }
    }
}

// ============================================================================
// STRING KIND: Option<&str>
// ============================================================================

pub mod string {
    use super::Direction;

    /// Comparison predicate for nullable strings.
    ///
    /// If either operand is `None`, equality reduces to "both are
    /// `None`" regardless of direction family. Otherwise `to_be` /
    /// `not_to_be` compare byte-exact and the `*_like` directions
    /// compare ASCII-case-insensitively.
    pub fn holds(direction: Direction, actual: Option<&str>, expected: Option<&str>) -> bool {
        let positive = match (actual, expected) {
            (Some(a), Some(e)) => {
                if direction.is_like() {
                    a.eq_ignore_ascii_case(e)
                } else {
                    a == e
                }
            }
            _ => actual.is_none() && expected.is_none(),
        };
        let negative = match (actual, expected) {
            (Some(a), Some(e)) => {
                if direction.is_like() {
                    !a.eq_ignore_ascii_case(e)
                } else {
                    a != e
                }
            }
            _ => !(actual.is_none() && expected.is_none()),
        };
        if direction.is_negated() {
            negative
        } else {
            positive
        }
    }

    /// Formats a string operand for diagnostics; the null value prints
    /// as `nil`.
    pub fn display(value: Option<&str>) -> String {
        match value {
            Some(s) => s.to_string(),
            None => "nil".to_string(),
        }
    }
}

/// Accepts the operand spellings a call site may use for the string
/// kind: a bare `&str`, an `Option<&str>`, or a `&String`.
pub trait StrOperand<'a> {
    fn as_operand(self) -> Option<&'a str>;
}

impl<'a> StrOperand<'a> for &'a str {
    fn as_operand(self) -> Option<&'a str> {
        Some(self)
    }
}

impl<'a> StrOperand<'a> for Option<&'a str> {
    fn as_operand(self) -> Option<&'a str> {
        self
    }
}

impl<'a> StrOperand<'a> for &'a String {
    fn as_operand(self) -> Option<&'a str> {
        Some(self.as_str())
    }
}

/// Formats a numeric operand for diagnostics.
pub fn display<T: std::fmt::Display>(value: T) -> String {
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_likeness_is_equality() {
        assert!(integer::holds(Direction::ToBe, 42, 42));
        assert!(integer::holds(Direction::ToBeLike, 42, 42));
        assert!(!integer::holds(Direction::ToBeLike, 42, 43));
        assert!(integer::holds(Direction::NotToBeLike, 42, 43));
        assert!(!integer::holds(Direction::NotToBe, 42, 42));
    }

    #[test]
    fn float_exact_vs_likeness() {
        assert!(float::holds(Direction::ToBe, 38.121, 38.121));
        assert!(!float::holds(Direction::ToBe, 38.121, 38.1210001));
        // Boundary: a difference of exactly EPSILON still satisfies
        // the likeness direction; anything beyond does not. 0.0-based
        // operands keep the arithmetic exactly representable.
        assert!(float::holds(Direction::ToBeLike, 0.0, EPSILON));
        assert!(!float::holds(Direction::ToBeLike, 0.0, 2.0 * EPSILON));
        assert!(float::holds(Direction::NotToBeLike, 0.0, 2.0 * EPSILON));
        assert!(!float::holds(Direction::NotToBeLike, 0.0, EPSILON));
    }

    #[test]
    fn string_case_sensitivity_split() {
        assert!(string::holds(Direction::ToBe, Some("demo"), Some("demo")));
        assert!(!string::holds(Direction::ToBe, Some("demo"), Some("DeMo")));
        assert!(string::holds(Direction::ToBeLike, Some("demo"), Some("DeMo")));
        assert!(string::holds(
            Direction::NotToBeLike,
            Some("demo"),
            Some("other")
        ));
    }

    #[test]
    fn string_null_handling() {
        assert!(string::holds(Direction::ToBe, None, None));
        assert!(!string::holds(Direction::ToBe, Some("demo"), None));
        assert!(!string::holds(Direction::ToBe, None, Some("demo")));
        assert!(string::holds(Direction::NotToBe, Some("demo"), None));
        assert!(string::holds(Direction::NotToBe, None, Some("demo")));
        assert!(!string::holds(Direction::NotToBe, None, None));
        // The *_like family shares the null reduction.
        assert!(string::holds(Direction::ToBeLike, None, None));
        assert!(string::holds(Direction::NotToBeLike, None, Some("demo")));
    }

    #[test]
    fn str_operand_spellings() {
        let owned = String::from("demo");
        assert_eq!("demo".as_operand(), Some("demo"));
        assert_eq!((&owned).as_operand(), Some("demo"));
        assert_eq!(Some("demo").as_operand(), Some("demo"));
        assert_eq!(None::<&str>.as_operand(), None);
    }
}

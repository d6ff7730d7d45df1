//! Checked integer arithmetic.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error("attempted to divide by zero")]
    DivideByZero,

    #[error("arithmetic overflow")]
    Overflow,
}

pub fn add(a: i32, b: i32) -> Result<i32, CalcError> {
    a.checked_add(b).ok_or(CalcError::Overflow)
}

pub fn subtract(a: i32, b: i32) -> Result<i32, CalcError> {
    a.checked_sub(b).ok_or(CalcError::Overflow)
}

pub fn multiply(a: i32, b: i32) -> Result<i32, CalcError> {
    a.checked_mul(b).ok_or(CalcError::Overflow)
}

/// Integer division truncating toward zero.
pub fn divide(a: i32, b: i32) -> Result<i32, CalcError> {
    if b == 0 {
        return Err(CalcError::DivideByZero);
    }
    a.checked_div(b).ok_or(CalcError::Overflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_returns_correct_sum() {
        assert_eq!(add(2, 3), Ok(5));
    }

    #[test]
    fn divide_by_zero_is_an_error() {
        assert_eq!(divide(5, 0), Err(CalcError::DivideByZero));
    }

    #[test]
    fn divide_truncates_toward_zero() {
        assert_eq!(divide(7, 2), Ok(3));
        assert_eq!(divide(-7, 2), Ok(-3));
    }

    #[test]
    fn overflow_is_reported() {
        assert_eq!(add(i32::MAX, 1), Err(CalcError::Overflow));
        assert_eq!(subtract(i32::MIN, 1), Err(CalcError::Overflow));
        assert_eq!(multiply(i32::MAX, 2), Err(CalcError::Overflow));
        assert_eq!(divide(i32::MIN, -1), Err(CalcError::Overflow));
    }

    #[test]
    fn subtract_and_multiply() {
        assert_eq!(subtract(2, 5), Ok(-3));
        assert_eq!(multiply(-4, 6), Ok(-24));
    }
}

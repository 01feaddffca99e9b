use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// Integer arithmetic on 64 bits.
/// Results that don't fit are errors rather than wrapping.
pub struct Operation {}

impl Operation {
    pub fn add(lhs: i64, rhs: i64) -> Result<i64> {
        match lhs.checked_add(rhs) {
            Some(i) => Ok(i),
            None => Err(error!(RuntimeError; "integer overflow")),
        }
    }

    pub fn subtract(lhs: i64, rhs: i64) -> Result<i64> {
        match lhs.checked_sub(rhs) {
            Some(i) => Ok(i),
            None => Err(error!(RuntimeError; "integer overflow")),
        }
    }

    pub fn multiply(lhs: i64, rhs: i64) -> Result<i64> {
        match lhs.checked_mul(rhs) {
            Some(i) => Ok(i),
            None => Err(error!(RuntimeError; "integer overflow")),
        }
    }

    /// Truncates toward zero, so `-7 / 2` is `-3`.
    pub fn divide(lhs: i64, rhs: i64) -> Result<i64> {
        match lhs.checked_div(rhs) {
            Some(i) => Ok(i),
            None => {
                if rhs == 0 {
                    Err(error!(RuntimeError; "division by zero"))
                } else {
                    Err(error!(RuntimeError; "integer overflow"))
                }
            }
        }
    }

    /// The byte `val` modulo 256, never negative.
    pub fn to_byte(val: i64) -> u8 {
        val.rem_euclid(256) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorKind;

    #[test]
    fn test_divide_truncates_toward_zero() {
        assert_eq!(Operation::divide(7, 2), Ok(3));
        assert_eq!(Operation::divide(-7, 2), Ok(-3));
        assert_eq!(Operation::divide(7, -2), Ok(-3));
    }

    #[test]
    fn test_divide_by_zero() {
        let e = Operation::divide(4, 0).unwrap_err();
        assert_eq!(e.kind(), ErrorKind::RuntimeError);
        assert_eq!(e.text(), "division by zero");
    }

    #[test]
    fn test_overflow() {
        assert!(Operation::add(i64::MAX, 1).is_err());
        assert!(Operation::subtract(i64::MIN, 1).is_err());
        assert!(Operation::multiply(i64::MAX, 2).is_err());
        assert_eq!(
            Operation::divide(i64::MIN, -1).unwrap_err().text(),
            "integer overflow"
        );
    }

    #[test]
    fn test_to_byte() {
        assert_eq!(Operation::to_byte(65), b'A');
        assert_eq!(Operation::to_byte(256 + 10), b'\n');
        assert_eq!(Operation::to_byte(-191), b'A');
        assert_eq!(Operation::to_byte(200), 200);
    }
}

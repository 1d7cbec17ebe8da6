use std::fmt::{self, Display, Formatter};

use num::Float;

use crate::{format_exerr, ExResult};

/// A numeric literal that is guaranteed not to be NaN.
///
/// The only way to obtain a `Number` is [`Number::new`](Number::new), hence every literal that
/// ends up in an [`Expr`](crate::Expr) has been checked once.
#[derive(Clone, Copy, PartialEq, PartialOrd, Debug)]
pub struct Number<T: Float>(T);

impl<T: Float> Number<T> {
    /// Wraps `value` into a literal.
    ///
    /// # Errors
    ///
    /// If `value` is NaN we return an [`ExError`](crate::ExError).
    ///
    pub fn new(value: T) -> ExResult<Self> {
        if value.is_nan() {
            Err(format_exerr!("number literal must not be NaN"))
        } else {
            Ok(Number(value))
        }
    }

    pub fn value(&self) -> T {
        self.0
    }

    /// Integral means equal to its own floor. Infinities count as integral.
    pub fn is_integral(&self) -> bool {
        self.0 == self.0.floor()
    }
}

/// Integral values are printed without decimal point, e.g., `5` instead of `5.0`. Everything
/// else uses the shortest representation that parses back to the same value.
impl<T: Float + Display> Display for Number<T> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        if self.is_integral() {
            write!(f, "{:.0}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

#[test]
fn test_nan() {
    assert!(Number::new(f64::NAN).is_err());
    assert!(Number::new(f32::NAN).is_err());
    let err = Number::new(-f64::NAN).unwrap_err();
    assert!(err.msg.contains("NaN"));
    assert!(Number::new(f64::INFINITY).is_ok());
    assert!(Number::new(f64::MIN_POSITIVE).is_ok());
}

#[test]
fn test_display() {
    let show = |x: f64| format!("{}", Number::new(x).unwrap());
    assert_eq!(show(5.0), "5");
    assert_eq!(show(-5.0), "-5");
    assert_eq!(show(0.0), "0");
    assert_eq!(show(-0.0), "-0");
    assert_eq!(show(2.5), "2.5");
    assert_eq!(show(-2.5), "-2.5");
    assert_eq!(show(0.1), "0.1");
    assert_eq!(show(1e16), "10000000000000000");
    assert_eq!(show(f64::INFINITY), "inf");
    assert_eq!(show(f64::NEG_INFINITY), "-inf");
    assert_eq!(format!("{}", Number::new(0.5f32).unwrap()), "0.5");
    assert_eq!(format!("{}", Number::new(3f32).unwrap()), "3");
}

#[test]
fn test_non_integral_roundtrip() {
    for x in [0.1, 1.0 / 3.0, -7.125, 123456.789, 1e-7, std::f64::consts::PI] {
        let n = Number::new(x).unwrap();
        assert!(!n.is_integral());
        let shown = format!("{n}");
        assert!(!shown.contains('e'));
        assert_eq!(shown.parse::<f64>().unwrap(), x);
    }
}

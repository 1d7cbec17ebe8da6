use std::{
    fmt::{self, Display, Formatter},
    ops::{Add, Mul, Neg},
};

use num::Float;

use crate::{ExResult, Number};

#[cfg(feature = "serde")]
mod serde;

/// Arithmetic expression tree. Every composite node owns its children exclusively, so trees
/// are acyclic and immutable once built.
///
/// ```rust
/// # use std::error::Error;
/// # fn main() -> Result<(), Box<dyn Error>> {
/// #
/// use exptree::Expr;
/// let expr = (Expr::number(2.5)? + Expr::number(3.5)?) * -Expr::number(5.0)?;
/// assert_eq!(expr.eval(), -30.0);
/// assert_eq!(expr.render(), "((2.5 + 3.5) * (-5))");
/// #
/// #     Ok(())
/// # }
/// ```
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
pub enum Expr<T: Float = f64> {
    /// Numeric literal, never NaN.
    Num(Number<T>),
    /// `left + right`
    Add(Box<Expr<T>>, Box<Expr<T>>),
    /// `left * right`
    Mul(Box<Expr<T>>, Box<Expr<T>>),
    /// `-operand`
    Neg(Box<Expr<T>>),
}

impl<T: Float> Expr<T> {
    /// Creates a literal node.
    ///
    /// # Errors
    ///
    /// If `value` is NaN we return an [`ExError`](crate::ExError).
    ///
    pub fn number(value: T) -> ExResult<Self> {
        Ok(Expr::Num(Number::new(value)?))
    }

    pub fn addition(left: Expr<T>, right: Expr<T>) -> Self {
        Expr::Add(Box::new(left), Box::new(right))
    }

    pub fn multiplication(left: Expr<T>, right: Expr<T>) -> Self {
        Expr::Mul(Box::new(left), Box::new(right))
    }

    pub fn unary_minus(operand: Expr<T>) -> Self {
        Expr::Neg(Box::new(operand))
    }

    /// Evaluates the tree bottom up. Recursion depth equals the depth of the tree.
    pub fn eval(&self) -> T {
        match self {
            Expr::Num(n) => n.value(),
            Expr::Add(left, right) => left.eval() + right.eval(),
            Expr::Mul(left, right) => left.eval() * right.eval(),
            Expr::Neg(operand) => -operand.eval(),
        }
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Expr::Num(_))
    }
}

impl<T: Float + Display> Expr<T> {
    /// Creates the fully parenthesized string representation of the tree, i.e., every
    /// composite node is wrapped in exactly one pair of parentheses.
    /// ```rust
    /// # use std::error::Error;
    /// # fn main() -> Result<(), Box<dyn Error>> {
    /// #
    /// use exptree::Expr;
    /// let expr = Expr::addition(Expr::number(1.0)?, Expr::number(0.5)?);
    /// assert_eq!(expr.render(), "(1 + 0.5)");
    /// #
    /// #     Ok(())
    /// # }
    /// ```
    ///
    pub fn render(&self) -> String {
        format!("{self}")
    }
}

impl<T: Float + Display> Display for Expr<T> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Expr::Num(n) => write!(f, "{n}"),
            Expr::Add(left, right) => write!(f, "({left} + {right})"),
            Expr::Mul(left, right) => write!(f, "({left} * {right})"),
            Expr::Neg(operand) => write!(f, "(-{operand})"),
        }
    }
}

impl<T: Float> From<Number<T>> for Expr<T> {
    fn from(n: Number<T>) -> Self {
        Expr::Num(n)
    }
}

impl<T: Float> Add for Expr<T> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Expr::addition(self, rhs)
    }
}

impl<T: Float> Mul for Expr<T> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        Expr::multiplication(self, rhs)
    }
}

impl<T: Float> Neg for Expr<T> {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Expr::unary_minus(self)
    }
}

#[cfg(test)]
fn num(x: f64) -> Expr<f64> {
    Expr::number(x).unwrap()
}

#[test]
fn test_eval() {
    assert_eq!(num(4.0).eval(), 4.0);
    assert_eq!(Expr::addition(num(1.5), num(2.0)).eval(), 3.5);
    assert_eq!(Expr::multiplication(num(1.5), num(2.0)).eval(), 3.0);
    assert_eq!(Expr::unary_minus(num(1.5)).eval(), -1.5);
    assert_eq!(Expr::unary_minus(Expr::unary_minus(num(1.5))).eval(), 1.5);
    assert!((num(f64::INFINITY) * num(0.0)).eval().is_nan());
}

#[test]
fn test_render() {
    assert_eq!(num(5.0).render(), "5");
    assert_eq!(num(-5.0).render(), "-5");
    assert_eq!(num(2.5).render(), "2.5");
    assert_eq!(Expr::addition(num(1.0), num(2.0)).render(), "(1 + 2)");
    assert_eq!(Expr::multiplication(num(1.0), num(2.0)).render(), "(1 * 2)");
    assert_eq!(Expr::unary_minus(num(1.0)).render(), "(-1)");
    assert_eq!(Expr::unary_minus(num(-1.0)).render(), "(--1)");
    assert_eq!(
        Expr::addition(num(1.0), Expr::addition(num(2.0), num(3.0))).render(),
        "(1 + (2 + 3))"
    );
    assert_eq!(
        Expr::addition(Expr::addition(num(1.0), num(2.0)), num(3.0)).render(),
        "((1 + 2) + 3)"
    );
}

#[test]
fn test_ops() {
    let sugar = (num(2.5) + num(3.5)) * -num(5.0);
    let plain = Expr::multiplication(
        Expr::addition(num(2.5), num(3.5)),
        Expr::unary_minus(num(5.0)),
    );
    assert_eq!(sugar, plain);
    assert!(!sugar.is_literal());
    assert!(Expr::from(Number::new(1.0).unwrap()).is_literal());
}

#[test]
fn test_f32() {
    let expr = Expr::<f32>::number(0.5).unwrap() * Expr::number(4.0).unwrap();
    assert_eq!(expr.eval(), 2.0f32);
    assert_eq!(expr.render(), "(0.5 * 4)");
    assert!(Expr::<f32>::number(f32::NAN).is_err());
}

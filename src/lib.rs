#![doc(html_root_url = "https://docs.rs/exptree/0.1.0")]
//! Exptree represents arithmetic expressions as trees of literals, additions,
//! multiplications, and unary minus nodes. Trees are evaluated with
//! [`Expr::eval`](Expr::eval) and printed fully parenthesized with
//! [`Expr::render`](Expr::render) or via `Display`.
//! ```rust
//! # use std::error::Error;
//! # fn main() -> Result<(), Box<dyn Error>> {
//! #
//! use exptree::Expr;
//! let expr = Expr::multiplication(
//!     Expr::addition(Expr::number(2.5)?, Expr::number(3.5)?),
//!     Expr::unary_minus(Expr::number(5.0)?),
//! );
//! assert_eq!(expr.eval(), -30.0);
//! assert_eq!(format!("{}", expr), "((2.5 + 3.5) * (-5))");
//! #
//! #     Ok(())
//! # }
//! ```
//! Literals are checked when they are created. Hence, NaN never makes it into a tree
//! and evaluation as well as printing cannot fail.
//! ```rust
//! use exptree::Expr;
//! assert!(Expr::number(f64::NAN).is_err());
//! ```
//! Integral literals are printed without decimal point. Other literals use the shortest
//! representation that parses back to the same floating point number.
//!
//! Trees can also be built in postfix order with an [`ExprStack`](ExprStack). Operators
//! that lack operands are reported as errors. With the feature `serde` enabled, trees
//! can be serialized and deserialized. Deserialization checks literals the same way
//! [`Expr::number`](Expr::number) does.
//!
mod expression;
mod number;
mod result;
mod stack;

pub use {
    expression::Expr,
    number::Number,
    result::{ExError, ExResult},
    stack::{ExprStack, N_OPERANDS_ON_STACK},
};

#[cfg(test)]
mod tests {
    use crate::{Expr, ExprStack, ExResult};

    #[test]
    fn test_readme() -> ExResult<()> {
        let expr = Expr::multiplication(
            Expr::addition(Expr::number(2.5)?, Expr::number(3.5)?),
            Expr::unary_minus(Expr::number(5.0)?),
        );
        assert_eq!(expr.eval(), -30.0);
        assert_eq!(expr.render(), "((2.5 + 3.5) * (-5))");

        let mut stack = ExprStack::new();
        stack.push_number(2.5)?.push_number(3.5)?.addition()?;
        stack.push_number(5.0)?.unary_minus()?.multiplication()?;
        assert_eq!(stack.finish()?, expr);
        Ok(())
    }
}

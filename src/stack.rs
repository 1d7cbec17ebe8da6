use num::Float;
use smallvec::SmallVec;

use crate::{exerr, ExResult, Expr};

/// Number of operands that are kept on the stack before [`ExprStack`](ExprStack) allocates.
pub const N_OPERANDS_ON_STACK: usize = 16;

/// Builds trees in postfix order. Operators consume the topmost operands and push the
/// composite node they create, e.g., `2.5 3.5 + 5 neg *` is
/// ```rust
/// # use std::error::Error;
/// # fn main() -> Result<(), Box<dyn Error>> {
/// #
/// use exptree::ExprStack;
/// let mut stack = ExprStack::new();
/// stack.push_number(2.5)?.push_number(3.5)?.addition()?;
/// stack.push_number(5.0)?.unary_minus()?.multiplication()?;
/// let expr = stack.finish()?;
/// assert_eq!(expr.render(), "((2.5 + 3.5) * (-5))");
/// #
/// #     Ok(())
/// # }
/// ```
/// An operator that finds too few operands on the stack reports an error and leaves the
/// stack as it was.
#[derive(Clone, Debug)]
pub struct ExprStack<T: Float = f64> {
    operands: SmallVec<[Expr<T>; N_OPERANDS_ON_STACK]>,
}

impl<T: Float> ExprStack<T> {
    pub fn new() -> Self {
        ExprStack {
            operands: SmallVec::new(),
        }
    }

    pub fn push(&mut self, expr: Expr<T>) -> &mut Self {
        self.operands.push(expr);
        self
    }

    /// Pushes a literal.
    ///
    /// # Errors
    ///
    /// If `value` is NaN we return an [`ExError`](crate::ExError) and nothing is pushed.
    ///
    pub fn push_number(&mut self, value: T) -> ExResult<&mut Self> {
        let num = Expr::number(value)?;
        Ok(self.push(num))
    }

    fn pop_two(&mut self, op_name: &str) -> ExResult<(Expr<T>, Expr<T>)> {
        match self.operands.len() {
            0 => exerr!("{} is missing both operands", op_name),
            1 => exerr!("{} is missing its left operand", op_name),
            _ => match (self.operands.pop(), self.operands.pop()) {
                (Some(right), Some(left)) => Ok((left, right)),
                _ => exerr!("{} lost its operands", op_name),
            },
        }
    }

    pub fn addition(&mut self) -> ExResult<&mut Self> {
        let (left, right) = self.pop_two("addition")?;
        Ok(self.push(Expr::addition(left, right)))
    }

    pub fn multiplication(&mut self) -> ExResult<&mut Self> {
        let (left, right) = self.pop_two("multiplication")?;
        Ok(self.push(Expr::multiplication(left, right)))
    }

    pub fn unary_minus(&mut self) -> ExResult<&mut Self> {
        match self.operands.pop() {
            Some(operand) => Ok(self.push(Expr::unary_minus(operand))),
            None => exerr!("unary minus is missing its operand"),
        }
    }

    pub fn len(&self) -> usize {
        self.operands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operands.is_empty()
    }

    /// Returns the single tree that has been built.
    ///
    /// # Errors
    ///
    /// If the stack is empty or more than one tree is left, i.e., operators are missing, we
    /// return an [`ExError`](crate::ExError).
    ///
    pub fn finish(mut self) -> ExResult<Expr<T>> {
        if self.operands.len() > 1 {
            exerr!(
                "{} trees are left on the stack, operators are missing",
                self.operands.len()
            );
        }
        match self.operands.pop() {
            Some(expr) => {
                tracing::trace!("finished tree, literal {}", expr.is_literal());
                Ok(expr)
            }
            None => exerr!("cannot build a tree from an empty stack"),
        }
    }
}

impl<T: Float> Default for ExprStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[test]
fn test_stack() {
    let mut stack = ExprStack::<f64>::new();
    assert!(stack.is_empty());
    stack.push_number(1.0).unwrap().push_number(2.0).unwrap();
    stack.push_number(3.0).unwrap().multiplication().unwrap();
    assert_eq!(stack.len(), 2);
    stack.addition().unwrap().unary_minus().unwrap();
    let expr = stack.finish().unwrap();
    assert_eq!(expr.render(), "(-(1 + (2 * 3)))");
    assert_eq!(expr.eval(), -7.0);
}

#[test]
fn test_stack_missing_operands() {
    let mut stack = ExprStack::<f64>::default();
    let err = stack.addition().unwrap_err();
    assert_eq!(err.msg, "addition is missing both operands");
    assert!(stack.unary_minus().is_err());
    assert!(stack.push_number(f64::NAN).is_err());
    assert!(stack.is_empty());

    stack.push_number(4.0).unwrap();
    let err = stack.multiplication().unwrap_err();
    assert_eq!(err.msg, "multiplication is missing its left operand");
    // stack is untouched after the failure
    assert_eq!(stack.len(), 1);
    stack.unary_minus().unwrap();
    assert_eq!(stack.clone().finish().unwrap().eval(), -4.0);

    stack.push_number(1.0).unwrap();
    assert!(stack.finish().is_err());
    assert!(ExprStack::<f64>::new().finish().is_err());
}

use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

/// This will be thrown at you if a tree is about to be built illegally, e.g., from a NaN
/// literal or from an operator that lacks an operand. Ok, obviously it is not an exception,
/// so thrown needs to be understood figuratively.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Debug)]
pub struct ExError {
    pub msg: String,
}
impl ExError {
    pub fn new(msg: &str) -> ExError {
        tracing::debug!("invariant violation: {msg}");
        ExError {
            msg: msg.to_string(),
        }
    }
}
impl Display for ExError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.msg)
    }
}
impl Error for ExError {}

/// Exptree's result type with [`ExError`](ExError) as error type.
pub type ExResult<U> = Result<U, ExError>;

/// Creates an [`ExError`](ExError) from a format string and its arguments.
#[macro_export]
macro_rules! format_exerr {
    ($s:literal $(, $exps:expr )* $(,)?) => {
        $crate::ExError::new(format!($s $(, $exps)*).as_str())
    };
}

/// Returns early with an [`ExError`](ExError) built from a format string.
#[macro_export]
macro_rules! exerr {
    ($s:literal $(, $exps:expr )* $(,)?) => {
        return Err($crate::format_exerr!($s $(, $exps)*))
    };
}

#[test]
fn test_format_exerr() {
    let err = format_exerr!("{} is missing its {} operand", "addition", "right");
    assert_eq!(err.msg, "addition is missing its right operand");
    assert_eq!(format!("{err}"), err.msg);
    fn bail() -> ExResult<()> {
        exerr!("nope");
    }
    assert_eq!(bail(), Err(ExError::new("nope")));
}

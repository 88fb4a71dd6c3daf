use std::fmt;

use thiserror::Error;

/// Which of the two evaluation stacks ran out of room or values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StackKind {
    Operator,
    Operand,
}

impl fmt::Display for StackKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            StackKind::Operator => write!(f, "operator"),
            StackKind::Operand => write!(f, "operand"),
        }
    }
}

/// Every failure aborts the evaluation it happened in. Positions are
/// character offsets into the input expression.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("invalid character '{ch}' at position {pos}")]
    InvalidCharacter { ch: char, pos: usize },
    #[error("unexpected operator '{op}' at position {pos}")]
    UnexpectedOperator { op: char, pos: usize },
    #[error("division by zero")]
    DivisionByZero,
    #[error("mismatched parentheses")]
    MismatchedParentheses,
    #[error("{0} stack overflow")]
    StackOverflow(StackKind),
    #[error("{0} stack underflow")]
    StackUnderflow(StackKind),
    #[error("unknown operator '{0}'")]
    UnknownOperator(char),
    #[error("invalid expression, {0} values left on the operand stack")]
    InvalidExpression(usize),
    #[error("number {0} is out of range")]
    NumberOutOfRange(String),
}

impl EvalError {
    /// Process exit status the command line tool reports for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            EvalError::InvalidCharacter { .. } => 1,
            EvalError::UnexpectedOperator { .. } => 2,
            EvalError::DivisionByZero => 3,
            EvalError::MismatchedParentheses
            | EvalError::StackOverflow(_)
            | EvalError::StackUnderflow(_)
            | EvalError::UnknownOperator(_)
            | EvalError::InvalidExpression(_)
            | EvalError::NumberOutOfRange(_) => 4,
        }
    }
}

pub type Result<T> = std::result::Result<T, EvalError>;

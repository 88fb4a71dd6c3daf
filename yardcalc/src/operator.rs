use crate::error::{EvalError, Result};

pub type Operand = i64;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Assoc {
    Left,
    Right,
    None,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Arity {
    Unary,
    Binary,
}

/// The closed set of operators. `Sub` and `Neg` share the '-' character,
/// the infix driver decides which one a '-' stands for.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Operator {
    Neg,
    Pow,
    Mul,
    Div,
    Rem,
    Add,
    Sub,
    OParen,
    CParen,
}

impl Operator {
    pub fn precedence(self) -> u8 {
        match self {
            Operator::Neg => 10,
            Operator::Pow => 9,
            Operator::Mul | Operator::Div | Operator::Rem => 8,
            Operator::Add | Operator::Sub => 5,
            Operator::OParen | Operator::CParen => 0,
        }
    }

    pub fn assoc(self) -> Assoc {
        match self {
            Operator::Neg | Operator::Pow => Assoc::Right,
            Operator::Mul | Operator::Div | Operator::Rem => Assoc::Left,
            Operator::Add | Operator::Sub => Assoc::Left,
            Operator::OParen | Operator::CParen => Assoc::None,
        }
    }

    pub fn arity(self) -> Arity {
        match self {
            Operator::Neg => Arity::Unary,
            _ => Arity::Binary,
        }
    }

    /// Source character. Negation has none of its own and reports '-'.
    pub fn symbol(self) -> char {
        match self {
            Operator::Neg | Operator::Sub => '-',
            Operator::Pow => '^',
            Operator::Mul => '*',
            Operator::Div => '/',
            Operator::Rem => '%',
            Operator::Add => '+',
            Operator::OParen => '(',
            Operator::CParen => ')',
        }
    }

    /// Evaluate the operator. `lhs` is the operand that appeared first in the
    /// source, `rhs` is ignored for unary operators.
    pub fn apply(self, lhs: Operand, rhs: Operand) -> Result<Operand> {
        match self {
            Operator::Neg => Ok(lhs.wrapping_neg()),
            Operator::Pow => Ok(power(lhs, rhs)),
            Operator::Mul => Ok(lhs.wrapping_mul(rhs)),
            Operator::Div if rhs == 0 => Err(EvalError::DivisionByZero),
            Operator::Div => Ok(lhs.wrapping_div(rhs)),
            Operator::Rem if rhs == 0 => Err(EvalError::DivisionByZero),
            Operator::Rem => Ok(lhs.wrapping_rem(rhs)),
            Operator::Add => Ok(lhs.wrapping_add(rhs)),
            Operator::Sub => Ok(lhs.wrapping_sub(rhs)),
            // grouping is resolved by the reducer, never applied
            Operator::OParen | Operator::CParen => Err(EvalError::UnknownOperator(self.symbol())),
        }
    }
}

/// Binary reading of an operator character: '-' maps to `Sub`.
impl TryFrom<char> for Operator {
    type Error = EvalError;

    fn try_from(c: char) -> Result<Self> {
        match c {
            '^' => Ok(Operator::Pow),
            '*' => Ok(Operator::Mul),
            '/' => Ok(Operator::Div),
            '%' => Ok(Operator::Rem),
            '+' => Ok(Operator::Add),
            '-' => Ok(Operator::Sub),
            '(' => Ok(Operator::OParen),
            ')' => Ok(Operator::CParen),
            _ => Err(EvalError::UnknownOperator(c)),
        }
    }
}

/// Integer power by repeated squaring. Negative exponents truncate to 0.
pub fn power(base: Operand, exp: Operand) -> Operand {
    if exp < 0 {
        return 0;
    }
    let (mut base, mut exp, mut acc) = (base, exp as u64, 1 as Operand);
    while exp > 0 {
        if exp & 1 == 1 {
            acc = acc.wrapping_mul(base);
        }
        base = base.wrapping_mul(base);
        exp >>= 1;
    }
    acc
}

///////////////////////////////////////////////////////////////////////////////

use std::fmt;

use crate::operator::{Arity, Operand};
use crate::parser::{RPNExpr, RpnToken};

impl fmt::Display for RpnToken {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            // |MIN| has no literal
            RpnToken::Number(Operand::MIN) => write!(f, "0 {} - 1 -", Operand::MAX),
            RpnToken::Number(n) if n < 0 => write!(f, "0 {} -", n.unsigned_abs()),
            RpnToken::Number(n) => write!(f, "{}", n),
            // RPN text has no negation symbol, multiply by -1 instead
            RpnToken::Op(op) if op.arity() == Arity::Unary => write!(f, "0 1 - *"),
            RpnToken::Op(op) => write!(f, "{}", op.symbol()),
        }
    }
}

/// Space separated RPN text that RPN mode accepts back.
impl fmt::Display for RPNExpr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let text = self
            .iter()
            .map(|token| token.to_string())
            .collect::<Vec<String>>()
            .join(" ");
        write!(f, "{}", text)
    }
}

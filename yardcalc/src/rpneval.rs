use lexers::{CalcToken, CalcTokenizer};

use crate::error::{EvalError, Result};
use crate::machine::DualStack;
use crate::operator::Operator;
use crate::parser::{parse_number, RPNExpr, RpnToken};

/// Evaluate RPN text onto the operand stack. Every operator character is
/// binary here, '-' included. What is left on the stack is for the caller
/// to judge.
pub fn eval_str(machine: &mut DualStack, expr: &str) -> Result<()> {
    for (pos, token) in CalcTokenizer::from_str(expr) {
        match token {
            CalcToken::Digits(digits) => machine.push_operand(parse_number(&digits)?)?,
            CalcToken::Op(c) => machine.apply(Operator::try_from(c)?)?,
            // postfix input has nothing to group
            CalcToken::OParen => return Err(EvalError::UnexpectedOperator { op: '(', pos }),
            CalcToken::CParen => return Err(EvalError::UnexpectedOperator { op: ')', pos }),
            CalcToken::Invalid(ch) => return Err(EvalError::InvalidCharacter { ch, pos }),
        }
    }
    Ok(())
}

pub fn eval_expr(machine: &mut DualStack, rpn: &RPNExpr) -> Result<()> {
    for token in rpn.iter() {
        match *token {
            RpnToken::Number(num) => machine.push_operand(num)?,
            RpnToken::Op(op) => machine.apply(op)?,
        }
    }
    Ok(())
}

//! The shunting-yard reducer.
//!
//! Operators wait on a siding until every operator after them that binds
//! tighter has been reduced. What a reduction means is up to the [`Yard`]:
//! the evaluator applies the operator to its operand stack, the RPN
//! translator appends it to its output.

use log::trace;

use crate::error::{EvalError, Result};
use crate::operator::{Assoc, Operand, Operator};
use crate::stack::Stack;

pub trait Yard {
    /// Operators waiting to be reduced, open parens included.
    fn siding(&mut self) -> &mut Stack<Operator>;

    fn push_operand(&mut self, value: Operand) -> Result<()>;

    /// Consume the operands `op` needs and leave its result in their place.
    fn reduce(&mut self, op: Operator) -> Result<()>;
}

// Does the stacked `top` have to be reduced before `incoming` can be pushed.
// Right associative operators let an equal precedence `top` wait.
fn yields_to(incoming: Operator, top: Operator) -> bool {
    match incoming.assoc() {
        Assoc::Right => incoming.precedence() < top.precedence(),
        Assoc::Left | Assoc::None => incoming.precedence() <= top.precedence(),
    }
}

fn top<Y: Yard>(yard: &mut Y) -> Option<Operator> {
    yard.siding().top().copied()
}

fn reduce_top<Y: Yard>(yard: &mut Y) -> Result<()> {
    let op = yard.siding().pop()?;
    trace!("reduce '{}' ({:?})", op.symbol(), op);
    yard.reduce(op)
}

/// Route one operator through the yard.
pub fn shunt<Y: Yard>(yard: &mut Y, op: Operator) -> Result<()> {
    match op {
        Operator::OParen => yard.siding().push(op),
        Operator::CParen => close_group(yard),
        _ => {
            while let Some(stacked) = top(yard) {
                // an open paren shields everything below it
                if stacked == Operator::OParen || !yields_to(op, stacked) {
                    break;
                }
                reduce_top(yard)?;
            }
            trace!("defer '{}' ({:?})", op.symbol(), op);
            yard.siding().push(op)
        }
    }
}

fn close_group<Y: Yard>(yard: &mut Y) -> Result<()> {
    loop {
        match top(yard) {
            None => return Err(EvalError::MismatchedParentheses),
            Some(Operator::OParen) => {
                yard.siding().pop()?;
                return Ok(());
            }
            Some(_) => reduce_top(yard)?,
        }
    }
}

/// Reduce whatever is left on the siding once the input is exhausted.
pub fn drain<Y: Yard>(yard: &mut Y) -> Result<()> {
    while let Some(stacked) = top(yard) {
        if stacked == Operator::OParen {
            return Err(EvalError::MismatchedParentheses);
        }
        reduce_top(yard)?;
    }
    Ok(())
}

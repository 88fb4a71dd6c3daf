use log::trace;

use crate::error::{EvalError, Result, StackKind};
use crate::operator::{Arity, Operand, Operator};
use crate::shunting::Yard;
use crate::stack::Stack;

/// Pending operators and pending operands of one evaluation.
#[derive(Clone, Debug)]
pub struct DualStack {
    operators: Stack<Operator>,
    operands: Stack<Operand>,
}

impl DualStack {
    pub fn new(capacity: usize) -> Self {
        DualStack {
            operators: Stack::new(StackKind::Operator, capacity),
            operands: Stack::new(StackKind::Operand, capacity),
        }
    }

    pub fn push_operand(&mut self, value: Operand) -> Result<()> {
        self.operands.push(value)
    }

    pub fn pop_operand(&mut self) -> Result<Operand> {
        self.operands.pop()
    }

    /// Pop the operands `op` takes, apply it and push the result. The
    /// operand pushed last is the right hand side.
    pub fn apply(&mut self, op: Operator) -> Result<()> {
        let rhs = self.pop_operand()?;
        let result = match op.arity() {
            Arity::Unary => op.apply(rhs, 0)?,
            Arity::Binary => {
                let lhs = self.pop_operand()?;
                op.apply(lhs, rhs)?
            }
        };
        trace!("'{}' -> {}", op.symbol(), result);
        self.push_operand(result)
    }

    /// Pop the final value. Both stacks are empty afterwards.
    pub fn take_result(&mut self) -> Result<Operand> {
        if !self.operators.is_empty() {
            return Err(EvalError::InvalidExpression(self.operands.len()));
        }
        match self.operands.len() {
            1 => self.pop_operand(),
            n => Err(EvalError::InvalidExpression(n)),
        }
    }

    pub fn reset(&mut self) {
        self.operators.clear();
        self.operands.clear();
    }
}

impl Yard for DualStack {
    fn siding(&mut self) -> &mut Stack<Operator> {
        &mut self.operators
    }

    fn push_operand(&mut self, value: Operand) -> Result<()> {
        self.operands.push(value)
    }

    fn reduce(&mut self, op: Operator) -> Result<()> {
        self.apply(op)
    }
}

///////////////////////////////////////////////////////////////////////////////

use std::fmt;
use std::str::FromStr;

use log::debug;

use crate::config::{EvalConfig, RpnCheck};
use crate::error::Result;
use crate::machine::DualStack;
use crate::operator::Operand;
use crate::parser::{self, RPNExpr};
use crate::rpneval;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Notation {
    Infix,
    Rpn,
}

impl FromStr for Notation {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "infix" => Ok(Notation::Infix),
            "rpn" => Ok(Notation::Rpn),
            _ => Err(format!("unknown notation: {}", s)),
        }
    }
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Notation::Infix => write!(f, "infix"),
            Notation::Rpn => write!(f, "rpn"),
        }
    }
}

/// Owns the stacks for one evaluation at a time. Stacks are cleared at the
/// start of every call, so a failed evaluation never leaks into the next.
#[derive(Clone, Debug)]
pub struct Evaluator {
    config: EvalConfig,
    machine: DualStack,
}

impl Default for Evaluator {
    fn default() -> Self {
        Evaluator::new()
    }
}

impl Evaluator {
    pub fn new() -> Self {
        Evaluator::with_config(EvalConfig::default())
    }

    pub fn with_config(config: EvalConfig) -> Self {
        let machine = DualStack::new(config.capacity);
        Evaluator { config, machine }
    }

    pub fn config(&self) -> &EvalConfig {
        &self.config
    }

    pub fn eval(&mut self, expr: &str, notation: Notation) -> Result<Operand> {
        match notation {
            Notation::Infix => self.eval_infix(expr),
            Notation::Rpn => self.eval_rpn(expr),
        }
    }

    pub fn eval_infix(&mut self, expr: &str) -> Result<Operand> {
        debug!("infix: {:?}", expr);
        self.machine.reset();
        parser::feed_infix(&mut self.machine, expr)?;
        let result = self.machine.take_result()?;
        debug!("infix result: {}", result);
        Ok(result)
    }

    pub fn eval_rpn(&mut self, expr: &str) -> Result<Operand> {
        debug!("rpn: {:?}", expr);
        self.machine.reset();
        rpneval::eval_str(&mut self.machine, expr)?;
        self.finish_rpn()
    }

    pub fn eval_rpn_expr(&mut self, rpn: &RPNExpr) -> Result<Operand> {
        debug!("rpn tokens: {:?}", rpn);
        self.machine.reset();
        rpneval::eval_expr(&mut self.machine, rpn)?;
        self.finish_rpn()
    }

    fn finish_rpn(&mut self) -> Result<Operand> {
        let result = match self.config.rpn_check {
            RpnCheck::Strict => self.machine.take_result()?,
            RpnCheck::Lenient => {
                let top = self.machine.pop_operand()?;
                self.machine.reset();
                top
            }
        };
        debug!("rpn result: {}", result);
        Ok(result)
    }
}

/// Evaluate with a fresh default evaluator.
pub fn evaluate(expr: &str, notation: Notation) -> Result<Operand> {
    Evaluator::new().eval(expr, notation)
}

pub fn evaluate_infix(expr: &str) -> Result<Operand> {
    evaluate(expr, Notation::Infix)
}

pub fn evaluate_rpn(expr: &str) -> Result<Operand> {
    evaluate(expr, Notation::Rpn)
}

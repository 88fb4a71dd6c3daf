use std::ops::Deref;

use lexers::{CalcToken, CalcTokenizer};

use crate::error::{EvalError, Result, StackKind};
use crate::operator::{Operand, Operator};
use crate::shunting::{self, Yard};
use crate::stack::{Stack, DEFAULT_CAPACITY};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RpnToken {
    Number(Operand),
    Op(Operator),
}

/// An expression in evaluation order.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct RPNExpr(pub Vec<RpnToken>);

impl Deref for RPNExpr {
    type Target = [RpnToken];
    fn deref(&self) -> &[RpnToken] {
        &self.0
    }
}

pub(crate) fn parse_number(digits: &str) -> Result<Operand> {
    digits
        .parse::<Operand>()
        .map_err(|_| EvalError::NumberOutOfRange(digits.to_string()))
}

// What the previous token was, as far as '-' and operator placement care.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Last {
    Start,
    Operand,
    Operator(Operator),
}

impl Last {
    // only '(' or a negation may come next
    fn wants_operand(self) -> bool {
        match self {
            Last::Start => true,
            Last::Operand => false,
            Last::Operator(op) => op != Operator::CParen,
        }
    }
}

/// Scan an infix expression, feeding operands and operators through the yard,
/// then drain whatever is left on its siding.
pub fn feed_infix<Y: Yard>(yard: &mut Y, expr: &str) -> Result<()> {
    let mut last = Last::Start;
    for (pos, token) in CalcTokenizer::from_str(expr) {
        let op = match token {
            CalcToken::Digits(digits) => {
                yard.push_operand(parse_number(&digits)?)?;
                last = Last::Operand;
                continue;
            }
            CalcToken::Invalid(ch) => return Err(EvalError::InvalidCharacter { ch, pos }),
            CalcToken::OParen => Operator::OParen,
            CalcToken::CParen => Operator::CParen,
            CalcToken::Op(c) => Operator::try_from(c)?,
        };
        let op = match op {
            Operator::Sub if last.wants_operand() => Operator::Neg,
            Operator::OParen => op,
            _ if last.wants_operand() => {
                return Err(EvalError::UnexpectedOperator { op: op.symbol(), pos })
            }
            _ => op,
        };
        shunting::shunt(yard, op)?;
        last = Last::Operator(op);
    }
    shunting::drain(yard)
}

/// Translates infix expressions to RPN without evaluating them.
pub struct ShuntingParser;

impl ShuntingParser {
    pub fn parse_str(expr: &str) -> Result<RPNExpr> {
        Self::parse_with_capacity(expr, DEFAULT_CAPACITY)
    }

    pub fn parse_with_capacity(expr: &str, capacity: usize) -> Result<RPNExpr> {
        let mut builder = RpnBuilder::new(capacity);
        feed_infix(&mut builder, expr)?;
        builder.finish()
    }
}

// Yard that records reductions instead of applying them. It tracks where each
// pending operand starts in the output so a negation can be rewritten as
// `0 x -`, keeping the output free of unary operators.
struct RpnBuilder {
    siding: Stack<Operator>,
    starts: Stack<usize>,
    out: Vec<RpnToken>,
}

impl RpnBuilder {
    fn new(capacity: usize) -> Self {
        RpnBuilder {
            siding: Stack::new(StackKind::Operator, capacity),
            starts: Stack::new(StackKind::Operand, capacity),
            out: Vec::new(),
        }
    }

    fn finish(self) -> Result<RPNExpr> {
        match self.starts.len() {
            1 => (),
            n => return Err(EvalError::InvalidExpression(n)),
        }
        // every inserted `0` deepens the output, replay it against the operand limit
        let mut depth = 0usize;
        for token in self.out.iter() {
            match token {
                RpnToken::Number(_) => depth += 1,
                RpnToken::Op(_) => depth = depth.saturating_sub(1),
            }
            if depth > self.starts.capacity() {
                return Err(EvalError::StackOverflow(StackKind::Operand));
            }
        }
        Ok(RPNExpr(self.out))
    }
}

impl Yard for RpnBuilder {
    fn siding(&mut self) -> &mut Stack<Operator> {
        &mut self.siding
    }

    fn push_operand(&mut self, value: Operand) -> Result<()> {
        self.starts.push(self.out.len())?;
        self.out.push(RpnToken::Number(value));
        Ok(())
    }

    fn reduce(&mut self, op: Operator) -> Result<()> {
        match op {
            Operator::Neg => {
                let start = *self.starts.top().ok_or(EvalError::StackUnderflow(StackKind::Operand))?;
                self.out.insert(start, RpnToken::Number(0));
                self.out.push(RpnToken::Op(Operator::Sub));
            }
            Operator::OParen | Operator::CParen => {
                return Err(EvalError::UnknownOperator(op.symbol()))
            }
            _ => {
                self.starts.pop()?;
                let lhs = self.starts.pop()?;
                self.starts.push(lhs)?;
                self.out.push(RpnToken::Op(op));
            }
        }
        Ok(())
    }
}

//! Integer arithmetic in infix or reverse polish notation.
//!
//! Infix input is evaluated eagerly with the shunting-yard algorithm: two
//! bounded stacks, one for deferred operators and one for operands, and no
//! syntax tree in between.
//!
//! ```
//! assert_eq!(yardcalc::evaluate_infix("2 ^ 3 ^ 2"), Ok(512));
//! assert_eq!(yardcalc::evaluate_rpn("3 4 2 * +"), Ok(11));
//! ```

pub use config::{EvalConfig, RpnCheck};
pub use error::{EvalError, Result, StackKind};
pub use evaluator::{evaluate, evaluate_infix, evaluate_rpn, Evaluator, Notation};
pub use machine::DualStack;
pub use operator::{Arity, Assoc, Operand, Operator};
pub use parser::{RPNExpr, RpnToken, ShuntingParser};
pub use stack::{Stack, DEFAULT_CAPACITY};

mod config;
mod error;
mod evaluator;
mod machine;
pub mod operator;
pub mod parser;
mod rpneval;
mod rpnprint;
pub mod shunting;
mod stack;

#[cfg(test)]
mod evaluator_test;

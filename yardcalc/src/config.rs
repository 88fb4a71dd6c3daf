use crate::stack::DEFAULT_CAPACITY;

/// How RPN evaluation treats operands left over once the input ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RpnCheck {
    /// Exactly one value must remain, like infix evaluation.
    #[default]
    Strict,
    /// Return the top of the stack and drop the rest.
    Lenient,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalConfig {
    /// Depth limit applied to both the operator and the operand stack.
    pub capacity: usize,
    pub rpn_check: RpnCheck,
}

impl Default for EvalConfig {
    fn default() -> Self {
        EvalConfig {
            capacity: DEFAULT_CAPACITY,
            rpn_check: RpnCheck::default(),
        }
    }
}

impl EvalConfig {
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn with_rpn_check(mut self, rpn_check: RpnCheck) -> Self {
        self.rpn_check = rpn_check;
        self
    }
}

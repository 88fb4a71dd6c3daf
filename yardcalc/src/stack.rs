use crate::error::{EvalError, Result, StackKind};

pub const DEFAULT_CAPACITY: usize = 64;

/// LIFO stack that refuses to grow past a fixed capacity. The top is the
/// end of the backing vector.
#[derive(Clone, Debug)]
pub struct Stack<T> {
    elements: Vec<T>,
    capacity: usize,
    kind: StackKind,
}

impl<T> Stack<T> {
    pub fn new(kind: StackKind, capacity: usize) -> Self {
        Stack {
            elements: Vec::with_capacity(capacity.min(DEFAULT_CAPACITY)),
            capacity,
            kind,
        }
    }

    pub fn push(&mut self, element: T) -> Result<()> {
        if self.elements.len() >= self.capacity {
            return Err(EvalError::StackOverflow(self.kind));
        }
        self.elements.push(element);
        Ok(())
    }

    pub fn pop(&mut self) -> Result<T> {
        self.elements.pop().ok_or(EvalError::StackUnderflow(self.kind))
    }

    pub fn top(&self) -> Option<&T> {
        self.elements.last()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.elements.clear();
    }
}

///////////////////////////////////////////////////////////////////////////////

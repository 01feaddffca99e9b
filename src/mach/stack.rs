use super::StackId;
use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Underflow checked integer stack
///
/// Errors returned here carry no line number.
/// The runtime adds the line of the instruction that failed.

#[derive(Clone)]
pub struct Stack {
    id: StackId,
    vec: Vec<i64>,
}

impl std::fmt::Debug for Stack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.vec)
    }
}

impl Stack {
    pub fn new(id: StackId) -> Stack {
        Stack { id, vec: vec![] }
    }
    fn underflow_error(&self) -> Error {
        error!(RuntimeError; format!("stack underflow on {}", self.id.name()))
    }
    fn underflow_check(&self, needed: usize) -> Result<()> {
        if self.vec.len() < needed {
            Err(self.underflow_error())
        } else {
            Ok(())
        }
    }
    pub fn clear(&mut self) {
        self.vec.clear()
    }
    pub fn len(&self) -> usize {
        self.vec.len()
    }
    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }
    pub fn as_slice(&self) -> &[i64] {
        &self.vec
    }
    pub fn push(&mut self, val: i64) {
        self.vec.push(val);
    }
    pub fn extend(&mut self, vals: &[i64]) {
        self.vec.extend_from_slice(vals);
    }
    pub fn pop(&mut self) -> Result<i64> {
        match self.vec.pop() {
            Some(v) => Ok(v),
            None => Err(self.underflow_error()),
        }
    }
    /// Top of stack without removing it.
    pub fn peek(&self) -> Result<i64> {
        match self.vec.last() {
            Some(v) => Ok(*v),
            None => Err(self.underflow_error()),
        }
    }
    /// Second from top and top, in that order. Either both are taken or neither.
    pub fn pop_2(&mut self) -> Result<(i64, i64)> {
        self.underflow_check(2)?;
        let two = self.pop()?;
        let one = self.pop()?;
        Ok((one, two))
    }
    /// Both operands without removing them.
    pub fn peek_2(&self) -> Result<(i64, i64)> {
        self.underflow_check(2)?;
        let len = self.vec.len();
        Ok((self.vec[len - 2], self.vec[len - 1]))
    }
}

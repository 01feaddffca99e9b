use super::{Address, Opcode, Operation, Program, Stack, StackId};
use crate::error;
use crate::lang::Error;
use std::io::Write;

type Result<T> = std::result::Result<T, Error>;

/// ## Two stack virtual machine
///
/// A fresh `Runtime` has two empty stacks. Stack A may be loaded with
/// input before running. `run` executes a whole program, writing anything
/// it prints to `out` as it goes. The first error stops the run and
/// is returned with the line it happened on.

#[derive(Debug, Clone)]
pub struct Runtime {
    a: Stack,
    b: Stack,
    ip: Address,
}

impl Default for Runtime {
    fn default() -> Self {
        Runtime::new()
    }
}

impl Runtime {
    pub fn new() -> Runtime {
        Runtime {
            a: Stack::new(StackId::A),
            b: Stack::new(StackId::B),
            ip: 1,
        }
    }

    /// Push program input on to stack A, first value at the bottom.
    pub fn set_input(&mut self, data: &[i64]) {
        self.a.extend(data);
    }

    pub fn reset(&mut self) {
        self.a.clear();
        self.b.clear();
        self.ip = 1;
    }

    pub fn stack(&self, id: StackId) -> &Stack {
        match id {
            StackId::A => &self.a,
            StackId::B => &self.b,
        }
    }

    fn stack_mut(&mut self, id: StackId) -> &mut Stack {
        match id {
            StackId::A => &mut self.a,
            StackId::B => &mut self.b,
        }
    }

    pub fn ip(&self) -> Address {
        self.ip
    }

    pub fn run<W: Write>(&mut self, program: &Program, out: &mut W) -> Result<()> {
        self.ip = 1;
        while self.ip < program.len() {
            let op = match program.op(self.ip) {
                Some(op) => op,
                None => {
                    return Err(error!(InternalError, self.ip; "instruction pointer out of range"))
                }
            };
            if let Err(error) = self.execute(op, program.len(), out) {
                return Err(error.in_line_number(Some(self.ip)));
            }
        }
        Ok(())
    }

    fn execute<W: Write>(&mut self, op: &Opcode, len: usize, out: &mut W) -> Result<()> {
        use Opcode::*;
        match op {
            Nop => {}
            Push(s, val) => self.stack_mut(*s).push(*val),
            Pop(s) => {
                self.stack_mut(*s).pop()?;
            }
            Copy { from, to } => {
                let val = self.stack(*from).peek()?;
                self.stack_mut(*to).push(val);
            }
            Add(s) => self.arithmetic(*s, Operation::add)?,
            Sub(s) => self.arithmetic(*s, Operation::subtract)?,
            Mul(s) => self.arithmetic(*s, Operation::multiply)?,
            Div(s) => self.arithmetic(*s, Operation::divide)?,
            PrintInt(s) => {
                let val = self.stack_mut(*s).pop()?;
                write!(out, "{}", val).map_err(write_error)?;
            }
            PrintChar(s) => {
                let val = self.stack_mut(*s).pop()?;
                out.write_all(&[Operation::to_byte(val)]).map_err(write_error)?;
            }
            JumpEq(addr) => return self.branch(*addr, len, |a, b| a == b),
            JumpNe(addr) => return self.branch(*addr, len, |a, b| a != b),
        }
        self.ip += 1;
        Ok(())
    }

    // Operands stay on the stack unless the operation succeeds.
    fn arithmetic(&mut self, id: StackId, f: fn(i64, i64) -> Result<i64>) -> Result<()> {
        let stack = self.stack_mut(id);
        let (lhs, rhs) = stack.peek_2()?;
        let val = f(lhs, rhs)?;
        stack.pop_2()?;
        stack.push(val);
        Ok(())
    }

    // Compares the tops of both stacks. Neither is popped.
    fn branch(
        &mut self,
        addr: Option<Address>,
        len: usize,
        taken: fn(i64, i64) -> bool,
    ) -> Result<()> {
        let a = self.a.peek()?;
        let b = self.b.peek()?;
        let target = match addr {
            Some(target) => target,
            None => return Err(error!(InternalError; "jump address missing")),
        };
        if target < 1 || target >= len {
            return Err(error!(RuntimeError; format!("jump to illegal line {}", target)));
        }
        if target == self.ip {
            return Err(error!(RuntimeError; "infinite loop -- jump to self"));
        }
        if taken(a, b) {
            self.ip = target;
        } else {
            self.ip += 2;
        }
        Ok(())
    }
}

fn write_error(error: std::io::Error) -> Error {
    error!(InternalError; error.to_string())
}

/// Convert program input from text. Anything that isn't an integer is a load error.
pub fn parse_input<S: AsRef<str>>(values: &[S]) -> Result<Vec<i64>> {
    values
        .iter()
        .enumerate()
        .map(|(index, s)| {
            let s = s.as_ref();
            s.trim().parse::<i64>().map_err(|_| {
                error!(LoadError; format!("non integer data at index: {} ({})", index, s))
            })
        })
        .collect()
}

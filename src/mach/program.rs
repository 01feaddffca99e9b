use super::{Address, Assembler, Opcode};
use crate::error;
use crate::lang::{Error, Line, Warning};

type Result<T> = std::result::Result<T, Error>;

/// ## Assembled program
///
/// Index 0 is always a `Nop` so that the first real instruction
/// lives at address 1. Every source line takes exactly one slot,
/// which makes an address the same number as its source line.

#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    ops: Vec<Opcode>,
    warnings: Vec<Warning>,
}

impl Default for Program {
    fn default() -> Self {
        Program::new()
    }
}

impl Program {
    pub fn new() -> Program {
        Program {
            ops: vec![Opcode::Nop],
            warnings: vec![],
        }
    }

    /// Assemble a whole source text. Lines are numbered from 1.
    pub fn assemble(source: &str) -> Result<Program> {
        Program::assemble_lines(source.lines())
    }

    pub fn assemble_lines<'a, T: IntoIterator<Item = &'a str>>(lines: T) -> Result<Program> {
        let mut assembler = Assembler::new();
        for (index, s) in lines.into_iter().enumerate() {
            let line = Line::new(index + 1, s)?;
            assembler.line(&line)?;
        }
        assembler.finish()
    }

    pub(super) fn push(&mut self, op: Opcode) {
        self.ops.push(op)
    }

    pub(super) fn set_address(&mut self, addr: Address, target: Address) -> Result<()> {
        if let Some(op) = self.ops.get_mut(addr) {
            if op.is_jump() {
                *op = op.with_address(target);
                return Ok(());
            }
        }
        Err(error!(InternalError, addr; "address for non jump"))
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.len() <= 1
    }

    pub fn op(&self, addr: Address) -> Option<&Opcode> {
        self.ops.get(addr)
    }

    pub fn ops(&self) -> &[Opcode] {
        &self.ops
    }

    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    pub(super) fn set_warnings(&mut self, warnings: Vec<Warning>) {
        self.warnings = warnings;
    }
}

impl std::fmt::Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (addr, op) in self.ops.iter().enumerate().skip(1) {
            writeln!(f, "{:>4}: {}", addr, op)?;
        }
        Ok(())
    }
}

/*!
## Rust Machine Module

This Rust module is an assembler and virtual machine for Pikachu.

*/

/// Index of an instruction in a `Program`. Also its source line number.
pub type Address = usize;

mod assemble;
mod opcode;
mod operation;
mod program;
mod runtime;
mod sanitize;
mod stack;

pub use assemble::command;
pub use assemble::Assembler;
pub use opcode::Opcode;
pub use opcode::StackId;
pub use operation::Operation;
pub use program::Program;
pub use runtime::parse_input;
pub use runtime::Runtime;
pub use sanitize::sanitize;
pub use stack::Stack;

#[cfg(test)]
mod tests;

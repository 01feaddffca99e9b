//! # Pikachu
//!
//! An interpreter for the Pikachu programming language, a two stack
//! machine whose every instruction is spelled with three words.
//!
//! Source is assembled into a [`mach::Program`] and run on a
//! [`mach::Runtime`].
//!
//! ```
//! use pikachu::mach::{Program, Runtime};
//!
//! let program = Program::assemble("pika pikachu pi pikachu").unwrap();
//! let mut runtime = Runtime::new();
//! runtime.set_input(&[42]);
//! let mut out: Vec<u8> = vec![];
//! runtime.run(&program, &mut out).unwrap();
//! assert_eq!(out, b"42");
//! ```

#[path = "doc/language.rs"]
#[allow(non_snake_case)]
pub mod _Language;

pub mod lang;
pub mod mach;
pub mod term;

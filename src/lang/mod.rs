/*!
# Rust Language Module

This Rust module validates lines of Pikachu source and defines the
diagnostics shared by the whole crate.

*/

/// 1-based source line, or `None` when an error isn't tied to a line.
pub type LineNumber = Option<usize>;

#[macro_use]
mod error;
mod line;
mod token;

pub use error::Error;
pub use error::ErrorKind;
pub use error::Warning;
pub use line::Line;
pub use token::Word;

//! # Pikachu
//!
//! Command line interpreter for the Pikachu programming language.
//!

fn main() {
    pikachu::term::main()
}

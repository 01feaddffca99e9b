use super::*;
use crate::lang::{Error, ErrorKind, Line};

mod assemble_test;

fn line(s: &str) -> Line {
    Line::new(1, s).unwrap()
}

fn exec(source: &str, input: &[i64]) -> (Runtime, Result<(), Error>, String) {
    let program = Program::assemble(source).unwrap();
    let mut runtime = Runtime::default();
    runtime.set_input(input);
    let mut out: Vec<u8> = vec![];
    let result = runtime.run(&program, &mut out);
    (runtime, result, String::from_utf8(out).unwrap())
}

use pikachu::lang::Error;
use pikachu::mach::{Program, Runtime};

pub fn exec(source: &str) -> Result<String, Error> {
    exec_input(source, &[])
}

pub fn exec_input(source: &str, input: &[i64]) -> Result<String, Error> {
    let program = Program::assemble(source)?;
    let mut runtime = Runtime::default();
    runtime.set_input(input);
    let mut out: Vec<u8> = vec![];
    runtime.run(&program, &mut out)?;
    Ok(String::from_utf8_lossy(&out).into_owned())
}

/// Source for a line pushing `n` (at least 3) on to stack A.
pub fn push_a(n: usize) -> String {
    let mut words: Vec<&str> = ["pika", "pi"].iter().cycle().take(n).cloned().collect();
    words.push("pi");
    words.push("pikachu");
    words.join(" ")
}

extern crate ansi_term;
extern crate clap;
use crate::error;
use crate::lang::{Error, Warning};
use crate::mach::{parse_input, Program, Runtime};
use ansi_term::{Colour, Style};
use clap::Parser;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Pikachu programming language interpreter
#[derive(Parser, Debug)]
#[command(name = "pikachu", version)]
struct Args {
    /// Path to program file to run
    program: PathBuf,

    /// Integer values pushed on to pi pikachu before the program starts
    #[arg(allow_negative_numbers = true)]
    input: Vec<String>,

    /// Print the assembled program instead of running it
    #[arg(long)]
    list: bool,

    /// Don't print ***DONE*** after a successful run
    #[arg(short, long)]
    quiet: bool,
}

pub fn main() {
    let args = Args::parse();
    let code = match main_loop(&args) {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("\n{}", Style::new().bold().paint(error.to_string()));
            1
        }
    };
    std::process::exit(code);
}

fn main_loop(args: &Args) -> Result<(), Error> {
    let input = parse_input(args.input.as_slice())?;
    let program = load(&args.program)?;
    for warning in program.warnings() {
        warn(warning);
    }
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if args.list {
        write!(out, "{}", program).map_err(io_error)?;
        return Ok(());
    }
    let mut runtime = Runtime::new();
    runtime.set_input(&input);
    let result = runtime.run(&program, &mut out);
    out.flush().map_err(io_error)?;
    result?;
    if !args.quiet {
        writeln!(out, "\n***DONE***").map_err(io_error)?;
    }
    Ok(())
}

fn load(path: &Path) -> Result<Program, Error> {
    match std::fs::read_to_string(path) {
        Ok(source) => Program::assemble(&source),
        Err(error) => Err(error!(LoadError; format!(
            "{} loading program {}",
            error,
            path.display()
        ))),
    }
}

fn warn(warning: &Warning) {
    eprintln!("{}", Colour::Yellow.paint(warning.to_string()));
}

fn io_error(error: std::io::Error) -> Error {
    error!(InternalError; error.to_string())
}

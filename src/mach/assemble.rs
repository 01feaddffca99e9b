use super::{sanitize, Address, Opcode, Program, StackId};
use crate::error;
use crate::lang::{Error, Line, Word};

type Result<T> = std::result::Result<T, Error>;

/// ## Line by line assembler
///
/// A jump is encoded over two source lines. The first line is the jump
/// itself; the number of words on the second line is its target address.
/// The second line still occupies a slot in the program, as a `Nop`.

#[derive(Debug)]
pub struct Assembler {
    program: Program,
    state: State,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum State {
    Normal,
    /// Next line is the address for the jump at this index.
    AwaitingAddress(Address),
}

impl Default for Assembler {
    fn default() -> Self {
        Assembler::new()
    }
}

impl Assembler {
    pub fn new() -> Assembler {
        Assembler {
            program: Program::new(),
            state: State::Normal,
        }
    }

    pub fn is_awaiting_address(&self) -> bool {
        matches!(self.state, State::AwaitingAddress(_))
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    pub fn line(&mut self, line: &Line) -> Result<()> {
        match self.state {
            State::AwaitingAddress(jump) => {
                self.program.set_address(jump, line.len())?;
                self.program.push(Opcode::Nop);
                self.state = State::Normal;
            }
            State::Normal => {
                let op = command(line)?;
                if op.is_jump() {
                    self.state = State::AwaitingAddress(self.program.len());
                }
                self.program.push(op);
            }
        }
        Ok(())
    }

    /// Check every jump and hand back the program with any warnings attached.
    pub fn finish(self) -> Result<Program> {
        let mut program = self.program;
        let warnings = sanitize(&program)?;
        program.set_warnings(warnings);
        Ok(program)
    }
}

/// Decode one line into the instruction it spells.
pub fn command(line: &Line) -> Result<Opcode> {
    use Word::*;
    let words = line.words();
    let len = words.len();
    if len < 2 {
        return Err(bad_command(line));
    }
    if words[len - 1] != Pikachu {
        return dual_stack_command(line);
    }
    let stack = match words[len - 2] {
        Pi => StackId::A,
        Pika => StackId::B,
        Pikachu if len == 2 => return dual_stack_command(line),
        Pikachu => return Err(error!(SyntaxError, line.number(); "invalid stack")),
    };
    let op = match (len, words[0], words[1]) {
        (2, _, _) => Opcode::Pop(stack),
        (3, Pikachu, _) => Opcode::Div(stack),
        (3, _, _) => Opcode::Push(stack, 1),
        (4, Pi, Pika) => Opcode::Add(stack),
        (4, Pika, Pi) => Opcode::Sub(stack),
        (4, Pi, Pikachu) => Opcode::Mul(stack),
        (4, Pika, Pikachu) => Opcode::PrintInt(stack),
        (4, Pikachu, Pikachu) => Opcode::PrintChar(stack),
        (4, _, _) => Opcode::Push(stack, 2),
        (n, _, _) => Opcode::Push(stack, n as i64 - 2),
    };
    Ok(op)
}

// Commands without a stack selector are decided by their first two words.
fn dual_stack_command(line: &Line) -> Result<Opcode> {
    use Word::*;
    match line.words() {
        [Pi, Pika, ..] => Ok(Opcode::Copy {
            from: StackId::A,
            to: StackId::B,
        }),
        [Pika, Pi, ..] => Ok(Opcode::Copy {
            from: StackId::B,
            to: StackId::A,
        }),
        [Pikachu, Pikachu, ..] => Ok(Opcode::JumpEq(None)),
        [Pika, Pika, ..] => Ok(Opcode::JumpNe(None)),
        _ => Err(bad_command(line)),
    }
}

fn bad_command(line: &Line) -> Error {
    error!(SyntaxError, line.number(); format!("bad command: {}", line))
}

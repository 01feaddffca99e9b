use super::Address;

/// ## Stack selector
///
/// `pi` selects stack A, `pika` selects stack B.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StackId {
    A,
    B,
}

impl StackId {
    /// The name the language gives to this stack.
    pub fn name(&self) -> &'static str {
        match self {
            StackId::A => "pi pikachu",
            StackId::B => "pika pikachu",
        }
    }
}

impl std::fmt::Display for StackId {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            StackId::A => write!(f, "A"),
            StackId::B => write!(f, "B"),
        }
    }
}

/// ## Virtual machine instruction set
///
/// The machine has no registers, only two stacks.
/// Every operation names the stack it works on except `Copy`, which
/// moves between them, and the jumps, which compare the tops of both.
///
/// A jump's `Address` is filled in from the source line following it.
/// It is `None` only while the assembler is waiting for that line.

#[derive(Clone, PartialEq, Eq)]
pub enum Opcode {
    Nop,

    // *** Stack manipulation
    /// Push literal value on to the stack.
    Push(StackId, i64),
    Pop(StackId),
    /// Push the top of `from` on to `to`. The source is not popped.
    Copy { from: StackId, to: StackId },

    // *** Arithmetic
    // Pop b then a, push a op b.
    Add(StackId),
    Sub(StackId),
    Mul(StackId),
    Div(StackId),

    // *** Output
    PrintInt(StackId),
    PrintChar(StackId),

    // *** Branch control
    /// Branch to Address if the tops of both stacks are equal.
    JumpEq(Option<Address>),
    /// Branch to Address if the tops of both stacks differ.
    JumpNe(Option<Address>),
}

impl Opcode {
    pub fn is_jump(&self) -> bool {
        matches!(self, Opcode::JumpEq(_) | Opcode::JumpNe(_))
    }

    pub fn is_nop(&self) -> bool {
        matches!(self, Opcode::Nop)
    }

    /// Jump target, or `None` for anything that isn't a resolved jump.
    pub fn address(&self) -> Option<Address> {
        match self {
            Opcode::JumpEq(addr) | Opcode::JumpNe(addr) => *addr,
            _ => None,
        }
    }

    /// Returns a copy with the jump target set. Non-jumps come back unchanged.
    pub fn with_address(&self, addr: Address) -> Opcode {
        match self {
            Opcode::JumpEq(_) => Opcode::JumpEq(Some(addr)),
            Opcode::JumpNe(_) => Opcode::JumpNe(Some(addr)),
            op => op.clone(),
        }
    }
}

impl std::fmt::Debug for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_string())
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Opcode::*;
        match self {
            Nop => write!(f, "NOP"),

            Push(s, v) => write!(f, "PUSH{}({})", s, v),
            Pop(s) => write!(f, "POP{}", s),
            Copy { from, to } => write!(f, "COPY({}->{})", from, to),

            Add(s) => write!(f, "ADD{}", s),
            Sub(s) => write!(f, "SUB{}", s),
            Mul(s) => write!(f, "MUL{}", s),
            Div(s) => write!(f, "DIV{}", s),

            PrintInt(s) => write!(f, "PRINT{}", s),
            PrintChar(s) => write!(f, "PRINTCHR{}", s),

            JumpEq(Some(a)) => write!(f, "JE({})", a),
            JumpEq(None) => write!(f, "JE(?)"),
            JumpNe(Some(a)) => write!(f, "JNE({})", a),
            JumpNe(None) => write!(f, "JNE(?)"),
        }
    }
}

use super::*;
use crate::mach::StackId::{A, B};

fn op(s: &str) -> Opcode {
    command(&line(s)).unwrap()
}

#[test]
fn test_single_stack_commands() {
    assert_eq!(op("pi pikachu"), Opcode::Pop(A));
    assert_eq!(op("pika pikachu"), Opcode::Pop(B));
    assert_eq!(op("pi pi pikachu"), Opcode::Push(A, 1));
    assert_eq!(op("pikachu pika pikachu"), Opcode::Div(B));
    assert_eq!(op("pi pika pi pikachu"), Opcode::Add(A));
    assert_eq!(op("pika pi pika pikachu"), Opcode::Sub(B));
    assert_eq!(op("pi pikachu pi pikachu"), Opcode::Mul(A));
    assert_eq!(op("pika pikachu pika pikachu"), Opcode::PrintInt(B));
    assert_eq!(op("pikachu pikachu pi pikachu"), Opcode::PrintChar(A));
    assert_eq!(op("pika pika pi pikachu"), Opcode::Push(A, 2));
    assert_eq!(op("pikachu pi pika pikachu"), Opcode::Push(B, 2));
}

#[test]
fn test_push_counts_words() {
    assert_eq!(op("pika pi pika pi pikachu"), Opcode::Push(A, 3));
    assert_eq!(op("pi pika pi pika pi pika pikachu"), Opcode::Push(B, 5));
    // Words that would be arithmetic on a four word line mean nothing here.
    assert_eq!(op("pi pika pi pi pikachu"), Opcode::Push(A, 3));
}

#[test]
fn test_dual_stack_commands() {
    assert_eq!(op("pi pika"), Opcode::Copy { from: A, to: B });
    assert_eq!(op("pika pi"), Opcode::Copy { from: B, to: A });
    assert_eq!(op("pikachu pikachu"), Opcode::JumpEq(None));
    assert_eq!(op("pika pika"), Opcode::JumpNe(None));
    assert_eq!(op("pi pika pi"), Opcode::Copy { from: A, to: B });
}

#[test]
fn test_bad_commands() {
    for s in &["pi", "pikachu", "pi pi", "pikachu pi", "pi pikachu pika pi"] {
        let e = command(&line(s)).unwrap_err();
        assert_eq!(e.kind(), ErrorKind::SyntaxError);
        assert_eq!(e.text(), format!("bad command: {}", s));
        assert_eq!(e.line_number(), Some(1));
    }
}

#[test]
fn test_invalid_stack() {
    let e = command(&line("pi pikachu pikachu")).unwrap_err();
    assert_eq!(e.kind(), ErrorKind::SyntaxError);
    assert_eq!(e.text(), "invalid stack");
}

#[test]
fn test_address_line_fills_jump() {
    let mut asm = Assembler::new();
    asm.line(&Line::new(1, "pika pika").unwrap()).unwrap();
    assert!(asm.is_awaiting_address());
    assert_eq!(asm.program().op(1), Some(&Opcode::JumpNe(None)));
    // Not a command: only its length matters.
    asm.line(&Line::new(2, "pi pi pika").unwrap()).unwrap();
    assert!(!asm.is_awaiting_address());
    assert_eq!(asm.program().op(1), Some(&Opcode::JumpNe(Some(3))));
    assert_eq!(asm.program().op(2), Some(&Opcode::Nop));
    asm.line(&Line::new(3, "pi pi pikachu").unwrap()).unwrap();
    let program = asm.finish().unwrap();
    assert_eq!(program.len(), 4);
    assert!(program.warnings().is_empty());
}

#[test]
fn test_address_line_may_be_any_words() {
    let program = Program::assemble("pi pi pikachu\npikachu pikachu\npi\npi pikachu").unwrap();
    assert_eq!(program.op(2), Some(&Opcode::JumpEq(Some(1))));
    assert_eq!(program.op(3), Some(&Opcode::Nop));
    assert_eq!(program.op(4), Some(&Opcode::Pop(A)));
}

#[test]
fn test_address_line_is_still_validated() {
    let e = Program::assemble("pikachu pikachu\npi pi pi").unwrap_err();
    assert_eq!(e.kind(), ErrorKind::SyntaxError);
    assert_eq!(e.line_number(), Some(2));
}

#[test]
fn test_sentinel() {
    let program = Program::assemble("pi pi pikachu\npi pikachu").unwrap();
    assert_eq!(program.ops()[0], Opcode::Nop);
    assert_eq!(program.len(), 3);
    assert_eq!(Program::assemble("").unwrap().len(), 1);
}

#[test]
fn test_syntax_error_reports_line() {
    let e = Program::assemble("pi pi pikachu\n\npi pikachu").unwrap_err();
    assert_eq!(e.kind(), ErrorKind::SyntaxError);
    assert_eq!(e.line_number(), Some(2));
    let e = Program::assemble("pi pikachu\npi pi pi pikachu").unwrap_err();
    assert_eq!(e.line_number(), Some(2));
}

#[test]
fn test_listing() {
    let program = Program::assemble("pi pi pikachu\npikachu pikachu\npi\npi pika").unwrap();
    assert_eq!(
        program.to_string(),
        "   1: PUSHA(1)\n   2: JE(1)\n   3: NOP\n   4: COPY(A->B)\n"
    );
}

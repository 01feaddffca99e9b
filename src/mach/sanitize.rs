use super::{Opcode, Program};
use crate::error;
use crate::lang::{Error, Warning};

type Result<T> = std::result::Result<T, Error>;

/// Verify every jump in an assembled program.
///
/// A target must exist, lie inside the program past the sentinel,
/// and not be the jump itself. A jump landing on a `Nop` is legal
/// but usually means it hit an address line by mistake, so it
/// only produces a warning.
pub fn sanitize(program: &Program) -> Result<Vec<Warning>> {
    let mut warnings: Vec<Warning> = vec![];
    for (line, op) in program.ops().iter().enumerate() {
        let target = match op {
            Opcode::JumpEq(target) | Opcode::JumpNe(target) => *target,
            _ => continue,
        };
        let target = match target {
            Some(target) => target,
            None => return Err(error!(AddressError, line; "jump command missing address")),
        };
        if target >= program.len() {
            return Err(error!(AddressError, line; "jump past end of program"));
        }
        if target < 1 {
            return Err(error!(AddressError, line; format!("invalid jump address: {}", target)));
        }
        if target == line {
            return Err(error!(AddressError, line; "infinite loop -- jump to self"));
        }
        if program.op(target).map_or(false, Opcode::is_nop) {
            warnings.push(Warning::jump_to_nop(line, target));
        }
    }
    Ok(warnings)
}

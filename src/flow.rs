use crate::decoder::{Instruction, OperandKind};

/// Link register convention: `calli lr0, lr0` hands control back to the caller.
pub const RETURN_REG: u32 = 128;

/// Absolute target of a pc-relative branch or call at `address`.
///
/// Only `[disp]` and `[reg, disp]` carry a resolvable target; everything else
/// (including absolute-immediate forms) yields `None`.
pub fn resolve_target(address: u32, insn: &Instruction) -> Option<u32> {
    use OperandKind::{JumpDisplacement as J, Register as R, Unused as U};
    let [v0, v1, ..] = insn.operands.values();
    match insn.operands.kinds() {
        [J, U, U, U, U, U] => Some(address.wrapping_add(v0)),
        [R, J, U, U, U, U] => Some(address.wrapping_add(v1)),
        _ => None,
    }
}

pub fn is_return_equivalent(insn: &Instruction) -> bool {
    insn.mnemonic == "calli" && insn.operands[0].value == RETURN_REG && insn.operands[1].value == RETURN_REG
}

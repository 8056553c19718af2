use std::fmt;

use crate::decoder::{Instruction, OperandKind};

/// `gr0..gr127` for globals, `lr1..` for locals (the local index is offset by 127).
pub fn reg_name(v: u32) -> String {
    if v < 128 { format!("gr{v}") } else { format!("lr{}", v.wrapping_sub(127)) }
}

/// Signed hex, e.g. `0x10` or `-0x4`.
pub fn imm_hex(v: u32) -> String {
    let s = v as i32;
    if s >= 0 { format!("{s:#x}") } else { format!("-{:#x}", s.unsigned_abs()) }
}

/// Formats by operand-kind shape; the mnemonic never selects the layout.
pub fn write_insn<W: fmt::Write>(out: &mut W, address: u32, insn: &Instruction) -> fmt::Result {
    use OperandKind::{Immediate as I, JumpDisplacement as J, Register as R, Unused as U};
    let mn = insn.mnemonic;
    let [v0, v1, v2, v3, v4, v5] = insn.operands.values();
    match insn.operands.kinds() {
        [R, U, U, U, U, U] => write!(out, "{mn} {}", reg_name(v0)),
        [I, U, U, U, U, U] => write!(out, "{mn} {}", imm_hex(v0)),
        [J, U, U, U, U, U] => write!(out, "{mn} {:#x}", address.wrapping_add(v0)),
        [R, R, U, U, U, U] => write!(out, "{mn} {} {}", reg_name(v0), reg_name(v1)),
        [R, I, U, U, U, U] => write!(out, "{mn} {} {}", reg_name(v0), imm_hex(v1)),
        [R, J, U, U, U, U] => write!(out, "{mn} {} {:#x}", reg_name(v0), address.wrapping_add(v1)),
        [R, R, R, U, U, U] => write!(out, "{mn} {} {} {}", reg_name(v0), reg_name(v1), reg_name(v2)),
        [R, R, I, U, U, U] => write!(out, "{mn} {} {} {}", reg_name(v0), reg_name(v1), imm_hex(v2)),
        [I, I, R, R, U, U] => write!(out, "{mn} {} {} {} {}", v0 as i32, v1 as i32, reg_name(v2), reg_name(v3)),
        [R, R, I, I, I, I] => write!(
            out,
            "{mn} {} {} {} {} {} {}",
            reg_name(v0),
            reg_name(v1),
            v2 as i32,
            v3 as i32,
            v4 as i32,
            v5 as i32
        ),
        _ => out.write_str(mn),
    }
}

pub fn fmt_decoded(address: u32, insn: &Instruction) -> String {
    let mut s = String::new();
    // writing into a String cannot fail
    let _ = write_insn(&mut s, address, insn);
    s
}

/// Like [`fmt_decoded`] but never longer than `limit` bytes.
pub fn render(limit: usize, address: u32, insn: &Instruction) -> String {
    let mut s = fmt_decoded(address, insn);
    if s.len() > limit {
        let mut cut = limit;
        while !s.is_char_boundary(cut) {
            cut -= 1;
        }
        s.truncate(cut);
    }
    s
}

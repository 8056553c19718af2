use amd29k_rs::decoder::{Instruction, OpClass, Operand, Operands};
use amd29k_rs::disasm::{fmt_decoded, render};
use amd29k_rs::isa::am29k::{decode, NOP_WORD};
use pretty_assertions::assert_eq;

fn text(bytes: [u8; 4], address: u32) -> String {
    fmt_decoded(address, &decode(&bytes, None).expect("decodes"))
}

#[test]
fn register_shapes() {
    assert_eq!(text([0x14, 0x01, 0x02, 0x03], 0), "add gr1 gr2 gr3");
    assert_eq!(text([0x14, 0x05, 0x85, 0xFF], 0), "add gr5 lr6 lr128");
    assert_eq!(text([0xC0, 0x00, 0x00, 0x85], 0), "jmpi lr6");
    assert_eq!(text([0xC6, 0x05, 0x0A, 0x00], 0), "mfsr gr5 gr10");
    assert_eq!(text([0xCE, 0x00, 0x0A, 0x85], 0), "mtsr gr10 lr6");
}

#[test]
fn immediate_shapes() {
    assert_eq!(text([0x15, 0x01, 0x02, 0x83], 0), "add gr1 gr2 0x83");
    assert_eq!(text([0x03, 0x12, 0x05, 0x34], 0), "const gr5 0x1234");
    assert_eq!(text([0x09, 0x03, 0x00, 0x07], 0), "clz gr3 0x7");
    assert_eq!(text([0xA9, 0xFF, 0x03, 0xFF], 0), "call gr3 -0x4");
    assert_eq!(text([0xA0, 0x00, 0x00, 0x04], 0x1000), "jmp 0x10");
    assert_eq!(text([0xE6, 0x01, 0x02, 0xFF], 0), "class gr1 gr2 0x3");
}

#[test]
fn displacement_shapes_are_absolute() {
    assert_eq!(text([0xA1, 0x00, 0x00, 0x04], 0x1000), "jmp 0x1010");
    assert_eq!(text([0xA1, 0xFF, 0x00, 0xFF], 0x1000), "jmp 0xffc");
    assert_eq!(text([0xA4, 0x00, 0x81, 0x01], 0x2000), "jmpf lr2 0x2004");
    assert_eq!(text([0xA8, 0x80, 0x01, 0x00], 0x40000), "call gr1 0x20000");
}

#[test]
fn wide_shapes_print_decimal_fields() {
    assert_eq!(text([0x16, 0x85, 0x07, 0x09], 0), "load 1 5 gr7 gr9");
    assert_eq!(text([0xD9, 0x2E, 0x05, 0x00], 0), "dmac 11 2 gr46 gr5");
    assert_eq!(text([0xE4, 0x80, 0x81, 0xB9], 0), "convert lr1 lr2 1 3 2 1");
}

#[test]
fn unrecognised_shapes_fall_back_to_mnemonic() {
    assert_eq!(text(NOP_WORD, 0), "nop");
    assert_eq!(text([0x89, 0x00, 0x00, 0x00], 0), "halt");
    // load with immediate rb: imm, imm, reg, imm
    assert_eq!(text([0x17, 0x05, 0x07, 0x09], 0), "load");
    let reg_imm_imm = Instruction {
        mnemonic: "mfacc",
        class: OpClass::Unclassified,
        operands: Operands::from_slice(&[Operand::reg(4), Operand::imm(3), Operand::imm(2)]),
    };
    assert_eq!(fmt_decoded(0, &reg_imm_imm), "mfacc");
}

#[test]
fn render_truncates_to_limit() {
    let d = decode(&[0x14, 0x01, 0x02, 0x03], None).unwrap();
    assert_eq!(render(64, 0, &d), "add gr1 gr2 gr3");
    assert_eq!(render(5, 0, &d), "add g");
    assert_eq!(render(0, 0, &d), "");
}

#[test]
fn rendering_ignores_mnemonic() {
    let insn = Instruction {
        mnemonic: "xyz",
        class: OpClass::Unclassified,
        operands: Operands::from_slice(&[Operand::reg(5), Operand::jump(8)]),
    };
    assert_eq!(fmt_decoded(0x10, &insn), "xyz gr5 0x18");
}

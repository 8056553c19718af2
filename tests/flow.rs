use amd29k_rs::decoder::{Instruction, OpClass, Operand, Operands};
use amd29k_rs::flow::{is_return_equivalent, resolve_target};
use amd29k_rs::isa::am29k::decode;

#[test]
fn relative_jump_and_call_targets() {
    let jmp = decode(&[0xA1, 0x00, 0x00, 0x04], None).unwrap();
    assert_eq!(resolve_target(0x1000, &jmp), Some(0x1010));
    let back = decode(&[0xA1, 0xFF, 0x00, 0xFF], None).unwrap();
    assert_eq!(resolve_target(0x1000, &back), Some(0x0FFC));

    let call = decode(&[0xA8, 0x00, 0x05, 0x02], None).unwrap();
    assert_eq!(call.class, OpClass::Call);
    assert_eq!(call.target(0x100), Some(0x108));

    let jmpt = decode(&[0xAC, 0x80, 0x02, 0x00], None).unwrap();
    assert_eq!(jmpt.class, OpClass::CondJump);
    assert_eq!(jmpt.target(0x40000), Some(0x20000));
}

#[test]
fn targets_wrap_around_the_address_space() {
    let back = decode(&[0xA1, 0xFF, 0x00, 0xFF], None).unwrap();
    assert_eq!(resolve_target(0, &back), Some(0xFFFF_FFFC));
    let fwd = decode(&[0xA1, 0x00, 0x00, 0x01], None).unwrap();
    assert_eq!(resolve_target(0xFFFF_FFFC, &fwd), Some(0));
}

#[test]
fn other_shapes_have_no_target() {
    for w in [
        [0xA0, 0x00, 0x00, 0x04], // absolute jmp
        [0xA9, 0x00, 0x05, 0x02], // absolute call
        [0xC0, 0x00, 0x00, 0x85], // jmpi
        [0x14, 0x01, 0x02, 0x03],
        [0x70, 0x40, 0x01, 0x01],
    ] {
        let d = decode(&w, None).unwrap();
        assert_eq!(resolve_target(0x1000, &d), None, "{w:02x?}");
    }
}

#[test]
fn calli_through_lr0_is_a_return() {
    let ret = decode(&[0xC8, 0x00, 0x80, 0x80], None).unwrap();
    assert!(is_return_equivalent(&ret));
    assert!(ret.is_return());

    let call = decode(&[0xC8, 0x00, 0x80, 0x81], None).unwrap();
    assert!(!is_return_equivalent(&call));
    let call = decode(&[0xC8, 0x00, 0x05, 0x80], None).unwrap();
    assert!(!is_return_equivalent(&call));

    // a different mnemonic with the same operands is not a return
    let jmpfi = decode(&[0xC4, 0x80, 0x00, 0x80], None).unwrap();
    assert_eq!(jmpfi.operands.values()[..2], [128, 128]);
    assert!(!is_return_equivalent(&jmpfi));
    let fake = Instruction {
        mnemonic: "jmpi",
        class: OpClass::IndirectJump,
        operands: Operands::from_slice(&[Operand::reg(128), Operand::reg(128)]),
    };
    assert!(!is_return_equivalent(&fake));
}

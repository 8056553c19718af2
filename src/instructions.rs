use crate::cpu::CpuSet;
use crate::decoder::OpClass;
use crate::isa::am29k::Format;

#[derive(Debug, Clone, Copy)]
pub struct InstrDesc {
    pub cpus: CpuSet,
    pub mnemonic: &'static str,
    pub class: OpClass,
    /// Bits 31..24 of the instruction word.
    pub opcode: u8,
    pub format: Format,
}

const fn op(cpus: CpuSet, mnemonic: &'static str, class: OpClass, opcode: u8, format: Format) -> InstrDesc {
    InstrDesc { cpus, mnemonic, class, opcode, format }
}

const ANY: CpuSet = CpuSet::ANY;
const AM29000: CpuSet = CpuSet::AM29000;
const AM29050: CpuSet = CpuSet::AM29050;

use Format::*;
use OpClass::*;

/// Priority list, scanned front to back. Several opcodes in the 0xE4..0xEF
/// range appear twice: once for the Am29000 and once for the Am29050, which
/// reassigned them. Earlier entries win.
pub static TABLE: &[InstrDesc] = &[
    op(ANY, "illegal", Unclassified, 0x00, NoOperands),
    op(ANY, "add", Add, 0x14, RaRbRci),
    op(ANY, "add", Add, 0x15, RaRbRci),
    op(ANY, "addc", Add, 0x1C, RaRbRci),
    op(ANY, "addc", Add, 0x1D, RaRbRci),
    op(ANY, "addcs", Add, 0x18, RaRbRci),
    op(ANY, "addcs", Add, 0x19, RaRbRci),
    op(ANY, "addcu", Add, 0x1A, RaRbRci),
    op(ANY, "addcu", Add, 0x1B, RaRbRci),
    op(ANY, "adds", Add, 0x10, RaRbRci),
    op(ANY, "adds", Add, 0x11, RaRbRci),
    op(ANY, "addu", Add, 0x12, RaRbRci),
    op(ANY, "addu", Add, 0x13, RaRbRci),
    op(ANY, "and", And, 0x90, RaRbRci),
    op(ANY, "and", And, 0x91, RaRbRci),
    op(ANY, "andn", And, 0x9C, RaRbRci),
    op(ANY, "andn", And, 0x9D, RaRbRci),
    op(ANY, "aseq", Cmp, 0x70, RaRbRci),
    op(ANY, "asge", Cmp, 0x5C, RaRbRci),
    op(ANY, "asge", Cmp, 0x5D, RaRbRci),
    op(ANY, "asgeu", Cmp, 0x5E, RaRbRci),
    op(ANY, "asgeu", Cmp, 0x5F, RaRbRci),
    op(ANY, "asgt", Cmp, 0x58, RaRbRci),
    op(ANY, "asgt", Cmp, 0x59, RaRbRci),
    op(ANY, "asgtu", Cmp, 0x5A, RaRbRci),
    op(ANY, "asgtu", Cmp, 0x5B, RaRbRci),
    op(ANY, "asle", Cmp, 0x54, RaRbRci),
    op(ANY, "asle", Cmp, 0x55, RaRbRci),
    op(ANY, "asleu", Cmp, 0x56, RaRbRci),
    op(ANY, "asleu", Cmp, 0x57, RaRbRci),
    op(ANY, "aslt", Cmp, 0x50, RaRbRci),
    op(ANY, "aslt", Cmp, 0x51, RaRbRci),
    op(ANY, "asltu", Cmp, 0x52, RaRbRci),
    op(ANY, "asltu", Cmp, 0x53, RaRbRci),
    op(ANY, "asneq", Cmp, 0x72, RaRbRci),
    op(ANY, "asneq", Cmp, 0x73, RaRbRci),
    op(ANY, "call", Call, 0xA8, RaDisp),
    op(ANY, "call", Call, 0xA9, RaDisp),
    op(ANY, "calli", IndirectCall, 0xC8, Calli),
    op(AM29050, "class", Unclassified, 0xE6, RcRaImm),
    op(ANY, "clz", Unclassified, 0x08, Clz),
    op(ANY, "clz", Unclassified, 0x09, Clz),
    op(ANY, "const", Mov, 0x03, RaImm16),
    op(ANY, "consth", Mov, 0x02, RaImm16),
    op(ANY, "consthz", Mov, 0x05, RaImm16),
    op(ANY, "constn", Mov, 0x01, RaImm16),
    op(AM29050, "convert", Unclassified, 0xE4, Convert),
    op(ANY, "cpbyte", Cmp, 0x2E, RaRbRci),
    op(ANY, "cpbyte", Cmp, 0x2F, RaRbRci),
    op(ANY, "cpeq", Cmp, 0x60, RaRbRci),
    op(ANY, "cpeq", Cmp, 0x61, RaRbRci),
    op(ANY, "cpge", Cmp, 0x4C, RaRbRci),
    op(ANY, "cpge", Cmp, 0x4D, RaRbRci),
    op(ANY, "cpgeu", Cmp, 0x4E, RaRbRci),
    op(ANY, "cpgeu", Cmp, 0x4F, RaRbRci),
    op(ANY, "cpgt", Cmp, 0x48, RaRbRci),
    op(ANY, "cpgt", Cmp, 0x49, RaRbRci),
    op(ANY, "cpgtu", Cmp, 0x4A, RaRbRci),
    op(ANY, "cpgtu", Cmp, 0x4B, RaRbRci),
    op(ANY, "cple", Cmp, 0x44, RaRbRci),
    op(ANY, "cple", Cmp, 0x45, RaRbRci),
    op(ANY, "cpleu", Cmp, 0x46, RaRbRci),
    op(ANY, "cpleu", Cmp, 0x47, RaRbRci),
    op(ANY, "cplt", Cmp, 0x40, RaRbRci),
    op(ANY, "cplt", Cmp, 0x41, RaRbRci),
    op(ANY, "cpltu", Cmp, 0x42, RaRbRci),
    op(ANY, "cpltu", Cmp, 0x43, RaRbRci),
    op(ANY, "cpneq", Cmp, 0x62, RaRbRci),
    op(ANY, "cpneq", Cmp, 0x63, RaRbRci),
    op(AM29000, "cvdf", Unclassified, 0xE9, RcRa),
    op(AM29000, "cvdint", Unclassified, 0xE7, RcRa),
    op(AM29000, "cvfd", Unclassified, 0xE8, RcRa),
    op(AM29000, "cvfint", Unclassified, 0xE6, RcRa),
    op(AM29000, "cvintd", Unclassified, 0xE5, RcRa),
    op(AM29000, "cvintf", Unclassified, 0xE4, RcRa),
    op(ANY, "dadd", Unclassified, 0xF1, RaRbRc),
    op(ANY, "ddiv", Div, 0xF7, RaRbRc),
    op(ANY, "deq", Cmp, 0xEB, RaRbRc),
    op(AM29050, "dge", Cmp, 0xEF, RaRbRc),
    op(ANY, "dgt", Cmp, 0xED, RaRbRc),
    op(ANY, "div", Div, 0x6A, RaRbRci),
    op(ANY, "div", Div, 0x6B, RaRbRci),
    op(ANY, "div0", Div, 0x68, RaRbRci),
    op(ANY, "div0", Div, 0x69, RaRbRci),
    op(ANY, "divide", Div, 0xE1, RaRbRc),
    op(AM29050, "dividu", Div, 0xE3, RaRbRc),
    op(ANY, "divl", Div, 0x6C, RaRbRci),
    op(ANY, "divl", Div, 0x6D, RaRbRci),
    op(ANY, "divrem", Div, 0x6E, RaRbRci),
    op(ANY, "divrem", Div, 0x6F, RaRbRci),
    op(AM29000, "dlt", Cmp, 0xEF, RaRbRc),
    op(AM29050, "dmac", Unclassified, 0xD9, Mac),
    op(AM29050, "dmsm", Unclassified, 0xDB, RaRbRc),
    op(ANY, "dmul", Mul, 0xF5, RaRbRc),
    op(ANY, "dsub", Sub, 0xF3, RaRbRc),
    op(ANY, "emulate", Unclassified, 0xF8, RaRbRci),
    op(ANY, "exbyte", Unclassified, 0x0A, RaRbRci),
    op(ANY, "exbyte", Unclassified, 0x0B, RaRbRci),
    op(ANY, "exhw", Unclassified, 0x7C, RaRbRci),
    op(ANY, "exhw", Unclassified, 0x7D, RaRbRci),
    op(ANY, "exhws", Unclassified, 0x7E, RcRa),
    op(ANY, "extract", Unclassified, 0x7A, RaRbRci),
    op(ANY, "extract", Unclassified, 0x7B, RaRbRci),
    op(ANY, "fadd", Add, 0xF0, RaRbRc),
    op(ANY, "fdiv", Div, 0xF6, RaRbRc),
    op(AM29050, "fdmul", Mul, 0xF9, RaRbRc),
    op(ANY, "feq", Cmp, 0xEA, RaRbRc),
    op(AM29050, "fge", Cmp, 0xEE, RaRbRc),
    op(ANY, "fgt", Cmp, 0xEC, RaRbRc),
    op(AM29000, "flt", Cmp, 0xEE, RaRbRc),
    op(AM29050, "fmac", Unclassified, 0xD8, Mac),
    op(AM29050, "fmsm", Unclassified, 0xDA, RaRbRc),
    op(ANY, "fmul", Mul, 0xF4, RaRbRc),
    op(ANY, "fsub", Sub, 0xF2, RaRbRc),
    op(ANY, "halt", Ret, 0x89, NoOperands),
    op(ANY, "inbyte", Unclassified, 0x0C, RaRbRci),
    op(ANY, "inbyte", Unclassified, 0x0D, RaRbRci),
    op(ANY, "inhw", Unclassified, 0x78, RaRbRci),
    op(ANY, "inhw", Unclassified, 0x79, RaRbRci),
    op(ANY, "inv", Unclassified, 0x9F, NoOperands),
    op(ANY, "iret", Ret, 0x88, NoOperands),
    op(ANY, "iretinv", Ret, 0x8C, NoOperands),
    op(ANY, "jmp", Jump, 0xA0, Disp),
    op(ANY, "jmp", Jump, 0xA1, Disp),
    op(ANY, "jmpf", CondJump, 0xA4, RaDisp),
    op(ANY, "jmpf", CondJump, 0xA5, RaDisp),
    op(ANY, "jmpfdec", CondJump, 0xB4, RaDisp),
    op(ANY, "jmpfdec", CondJump, 0xB5, RaDisp),
    op(ANY, "jmpfi", IndirectCondJump, 0xC4, RaRb),
    op(ANY, "jmpi", IndirectJump, 0xC0, Rb),
    op(ANY, "jmpt", CondJump, 0xAC, RaDisp),
    op(ANY, "jmpti", IndirectCondJump, 0xCC, RaRb),
    op(AM29050, "mfacc", Unclassified, 0xE9, RcImm),
    op(AM29050, "mtacc", Unclassified, 0xE8, RaImm),
    op(ANY, "mfsr", Unclassified, 0xC6, Mfsr),
    op(ANY, "mftlb", Unclassified, 0xB6, RcRa),
    op(ANY, "mtsr", Unclassified, 0xCE, Mtsr),
    op(ANY, "mtsrim", Unclassified, 0x04, RaImm16),
    op(ANY, "mttlb", Unclassified, 0xBE, RaRb),
    op(ANY, "mul", Mul, 0x64, RaRbRci),
    op(ANY, "mul", Mul, 0x65, RaRbRci),
    op(ANY, "mull", Mul, 0x66, RaRbRci),
    op(ANY, "mull", Mul, 0x67, RaRbRci),
    op(AM29050, "multiplu", Mul, 0xE2, RaRbRc),
    op(ANY, "multiply", Mul, 0xE0, RaRbRc),
    op(AM29050, "multm", Mul, 0xDE, RaRbRc),
    op(AM29050, "multmu", Mul, 0xDF, RaRbRc),
    op(ANY, "mulu", Mul, 0x74, RaRbRci),
    op(ANY, "mulu", Mul, 0x75, RaRbRci),
    op(ANY, "nand", And, 0x9A, RaRbRci),
    op(ANY, "nand", And, 0x9B, RaRbRci),
    op(ANY, "nor", Nor, 0x98, RaRbRci),
    op(ANY, "nor", Nor, 0x99, RaRbRci),
    op(ANY, "or", Or, 0x92, RaRbRci),
    op(ANY, "or", Or, 0x93, RaRbRci),
    op(AM29050, "orn", Or, 0xAA, RaRbRci),
    op(AM29050, "orn", Or, 0xAB, RaRbRci),
    op(ANY, "setip", Unclassified, 0x9E, RaRbRc),
    op(ANY, "sll", Shl, 0x80, RaRbRci),
    op(ANY, "sll", Shl, 0x81, RaRbRci),
    op(AM29050, "sqrt", Unclassified, 0xE5, RcRaImm),
    op(ANY, "sra", Shr, 0x86, RaRbRci),
    op(ANY, "sra", Shr, 0x87, RaRbRci),
    op(ANY, "srl", Sal, 0x82, RaRbRci),
    op(ANY, "srl", Sal, 0x83, RaRbRci),
    op(ANY, "load", Load, 0x16, LoadStore),
    op(ANY, "load", Load, 0x17, LoadStore),
    op(ANY, "loadl", Load, 0x06, LoadStore),
    op(ANY, "loadl", Load, 0x07, LoadStore),
    op(ANY, "loadm", Load, 0x36, LoadStore),
    op(ANY, "loadm", Load, 0x37, LoadStore),
    op(ANY, "loadset", Load, 0x26, LoadStore),
    op(ANY, "loadset", Load, 0x27, LoadStore),
    op(ANY, "store", Store, 0x1E, LoadStore),
    op(ANY, "store", Store, 0x1F, LoadStore),
    op(ANY, "storel", Store, 0x0E, LoadStore),
    op(ANY, "storel", Store, 0x0F, LoadStore),
    op(ANY, "storem", Store, 0x3E, LoadStore),
    op(ANY, "storem", Store, 0x3F, LoadStore),
    op(ANY, "sub", Sub, 0x24, RaRbRci),
    op(ANY, "sub", Sub, 0x25, RaRbRci),
    op(ANY, "subc", Sub, 0x2C, RaRbRci),
    op(ANY, "subc", Sub, 0x2D, RaRbRci),
    op(ANY, "subcs", Sub, 0x28, RaRbRci),
    op(ANY, "subcs", Sub, 0x29, RaRbRci),
    op(ANY, "subcu", Sub, 0x2A, RaRbRci),
    op(ANY, "subcu", Sub, 0x2B, RaRbRci),
    op(ANY, "subr", Sub, 0x34, RaRbRci),
    op(ANY, "subr", Sub, 0x35, RaRbRci),
    op(ANY, "subrc", Sub, 0x3C, RaRbRci),
    op(ANY, "subrc", Sub, 0x3D, RaRbRci),
    op(ANY, "subrcs", Sub, 0x38, RaRbRci),
    op(ANY, "subrcs", Sub, 0x39, RaRbRci),
    op(ANY, "subrcu", Sub, 0x3A, RaRbRci),
    op(ANY, "subrcu", Sub, 0x3B, RaRbRci),
    op(ANY, "subrs", Sub, 0x30, RaRbRci),
    op(ANY, "subrs", Sub, 0x31, RaRbRci),
    op(ANY, "subru", Sub, 0x32, RaRbRci),
    op(ANY, "subru", Sub, 0x33, RaRbRci),
    op(ANY, "subs", Sub, 0x20, RaRbRci),
    op(ANY, "subs", Sub, 0x21, RaRbRci),
    op(ANY, "subu", Sub, 0x22, RaRbRci),
    op(ANY, "subu", Sub, 0x23, RaRbRci),
    op(ANY, "xnor", Xor, 0x96, RaRbRci),
    op(ANY, "xnor", Xor, 0x97, RaRbRci),
    op(ANY, "xor", Xor, 0x94, RaRbRci),
    op(ANY, "xor", Xor, 0x95, RaRbRci),
];

/// All entries declared for `opcode`, in priority order.
pub fn entries_for(opcode: u8) -> impl Iterator<Item = &'static InstrDesc> {
    TABLE.iter().filter(move |d| d.opcode == opcode)
}

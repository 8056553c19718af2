pub mod cpu;
pub mod decoder;
pub mod disasm;
pub mod flow;
pub mod instructions;

pub mod isa {
    pub mod am29k; // Am29000 / Am29050
}

pub use cpu::{CpuConfig, CpuSet, CpuVariant};
pub use decoder::{DecodeError, Decoder, InputError, Instruction, OpClass, Operand, OperandKind, Operands};
pub use disasm::{fmt_decoded, render};
pub use flow::{is_return_equivalent, resolve_target};
pub use isa::am29k::{decode, Am29kDecoder};

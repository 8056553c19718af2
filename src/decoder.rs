use serde::{Deserialize, Serialize};

/// Every Am29000 instruction is one 32-bit big-endian word.
pub const INSN_SIZE: usize = 4;

/// Number of operand slots carried by every decoded instruction.
pub const OPERAND_SLOTS: usize = 6;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperandKind {
    Register,
    Immediate,
    JumpDisplacement,
    #[default]
    Unused,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operand {
    pub kind: OperandKind,
    pub value: u32,
}

impl Operand {
    pub const UNUSED: Operand = Operand { kind: OperandKind::Unused, value: 0 };

    pub const fn new(value: u32, kind: OperandKind) -> Self {
        Self { kind, value }
    }

    pub const fn reg(r: u8) -> Self {
        Self::new(r as u32, OperandKind::Register)
    }

    pub const fn imm(v: u32) -> Self {
        Self::new(v, OperandKind::Immediate)
    }

    pub const fn jump(disp: u32) -> Self {
        Self::new(disp, OperandKind::JumpDisplacement)
    }

    pub fn is_unused(&self) -> bool {
        self.kind == OperandKind::Unused
    }
}

/// Fixed six-slot operand array. Slots a rule does not populate stay
/// `Unused` with value 0; an out-of-range slot index panics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operands([Operand; OPERAND_SLOTS]);

impl Operands {
    pub const fn none() -> Self {
        Self([Operand::UNUSED; OPERAND_SLOTS])
    }

    /// Builds from the leading populated slots; the rest are `Unused`.
    pub fn from_slice(ops: &[Operand]) -> Self {
        let mut out = Self::none();
        for (slot, op) in out.0.iter_mut().zip(ops) {
            *slot = *op;
        }
        out
    }

    pub fn set(&mut self, i: usize, value: u32, kind: OperandKind) {
        self.0[i] = Operand::new(value, kind);
    }

    pub fn set_unused(&mut self, i: usize) {
        self.0[i] = Operand::UNUSED;
    }

    pub fn get(&self, i: usize) -> (OperandKind, u32) {
        let op = self.0[i];
        (op.kind, op.value)
    }

    pub fn kinds(&self) -> [OperandKind; OPERAND_SLOTS] {
        self.0.map(|op| op.kind)
    }

    pub fn values(&self) -> [u32; OPERAND_SLOTS] {
        self.0.map(|op| op.value)
    }

    /// Count of slots before the first `Unused` one.
    pub fn arity(&self) -> usize {
        self.0.iter().position(Operand::is_unused).unwrap_or(OPERAND_SLOTS)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Operand> {
        self.0.iter()
    }
}

impl std::ops::Index<usize> for Operands {
    type Output = Operand;

    fn index(&self, i: usize) -> &Operand {
        &self.0[i]
    }
}

/// Semantic class attached to each catalog entry, in the vocabulary
/// analysis layers use for control-flow and data-flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OpClass {
    Unclassified,
    Add,
    Sub,
    Mul,
    Div,
    And,
    Or,
    Xor,
    Nor,
    Shl,
    Shr,
    Sal,
    Cmp,
    Mov,
    Load,
    Store,
    Jump,
    CondJump,
    IndirectJump,
    IndirectCondJump,
    Call,
    IndirectCall,
    Ret,
    Nop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Instruction {
    pub mnemonic: &'static str,
    pub class: OpClass,
    pub operands: Operands,
}

impl Instruction {
    pub fn arity(&self) -> usize {
        self.operands.arity()
    }

    pub fn target(&self, address: u32) -> Option<u32> {
        crate::flow::resolve_target(address, self)
    }

    pub fn is_return(&self) -> bool {
        crate::flow::is_return_equivalent(self)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("buffer holds {len} bytes, an instruction needs 4")]
    ShortBuffer { len: usize },
    #[error("cpu variant {0:?} is shorter than 5 characters")]
    MalformedCpu(String),
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InputError),
    #[error("unknown opcode {opcode:#04x}")]
    UnknownOpcode { opcode: u8 },
}

pub trait Decoder {
    fn decode(&self, bytes: &[u8]) -> Result<Instruction, DecodeError>;
}

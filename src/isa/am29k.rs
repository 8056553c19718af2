use crate::cpu::CpuConfig;
use crate::decoder::{DecodeError, Decoder, InputError, Instruction, OpClass, Operand, OperandKind, Operands, INSN_SIZE};
use crate::instructions::{InstrDesc, TABLE};

/// `aseq 0x40, gr1, gr1`, the assembler's canonical no-op.
pub const NOP_WORD: [u8; 4] = [0x70, 0x40, 0x01, 0x01];

/// Encoding shapes. Byte 0 is always the opcode; the operand fields live in
/// bytes 1..=3. The low opcode bit is the register/immediate mode bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// RC, RA, RB or I8 (mode bit)
    RaRbRci,
    /// RC, RA, RB
    RaRbRc,
    /// RA, I16 (byte1:byte3)
    RaImm16,
    /// RA, 18-bit displacement; relative when the mode bit is clear
    RaDisp,
    /// 18-bit displacement; relative when the mode bit is set
    Disp,
    /// CE, CNTL, RA, RB or I8
    LoadStore,
    /// RA, RB
    Calli,
    /// RC, RA, 2-bit immediate
    RcRaImm,
    /// RC, RB or I8
    Clz,
    /// RC, RA, UI, RND, FD, FS
    Convert,
    /// RC, RA
    RcRa,
    /// dest accumulator, mode, RC, RA
    Mac,
    /// RA (byte1), RB (byte3)
    RaRb,
    /// RB
    Rb,
    /// RC, two 2-bit immediates
    RcImm,
    /// RA, two 2-bit immediates
    RaImm,
    /// RC, SA
    Mfsr,
    /// SA, RB
    Mtsr,
    NoOperands,
}

#[inline]
fn sign_ext(v: u32, bits: u32) -> u32 {
    let s = 32 - bits;
    ((v << s) as i32 >> s) as u32
}

#[inline]
fn mode_bit(w: &[u8; 4]) -> bool {
    w[0] & 1 != 0
}

fn reg_or_imm(v: u8, imm: bool) -> Operand {
    if imm { Operand::imm(v as u32) } else { Operand::reg(v) }
}

/// Word-aligned 18-bit displacement built from byte1 and byte3. `jump_when`
/// is the mode bit value that makes the field pc-relative; the other value
/// types it as an absolute immediate.
fn displacement(w: &[u8; 4], jump_when: bool) -> Operand {
    let raw = ((w[1] as u32) << 10) | ((w[3] as u32) << 2);
    let disp = sign_ext(raw, 18);
    if mode_bit(w) == jump_when { Operand::jump(disp) } else { Operand::imm(disp) }
}

impl Format {
    pub fn operands(self, w: &[u8; 4]) -> Operands {
        let imm = mode_bit(w);
        let [_, b1, b2, b3] = *w;
        match self {
            Format::RaRbRci => Operands::from_slice(&[Operand::reg(b1), Operand::reg(b2), reg_or_imm(b3, imm)]),
            Format::RaRbRc => Operands::from_slice(&[Operand::reg(b1), Operand::reg(b2), Operand::reg(b3)]),
            Format::RaImm16 => {
                let word = ((b1 as u32) << 8) | b3 as u32;
                Operands::from_slice(&[Operand::reg(b2), Operand::imm(word)])
            }
            Format::RaDisp => Operands::from_slice(&[Operand::reg(b2), displacement(w, false)]),
            Format::Disp => Operands::from_slice(&[displacement(w, true)]),
            Format::LoadStore => {
                let mut ops = Operands::none();
                ops.set(0, ((b1 & 0x80) >> 7) as u32, OperandKind::Immediate);
                ops.set(1, (b1 & 0x7F) as u32, OperandKind::Immediate);
                ops.set(2, b2 as u32, OperandKind::Register);
                let rb = if imm { OperandKind::Immediate } else { OperandKind::Register };
                ops.set(3, b3 as u32, rb);
                ops.set_unused(4);
                ops.set_unused(5);
                ops
            }
            Format::Calli => Operands::from_slice(&[Operand::reg(b2), Operand::reg(b3)]),
            Format::RcRaImm => Operands::from_slice(&[Operand::reg(b1), Operand::reg(b2), Operand::imm((b3 & 0x03) as u32)]),
            Format::Clz => Operands::from_slice(&[Operand::reg(b1), reg_or_imm(b3, imm)]),
            Format::Convert => Operands::from_slice(&[
                Operand::reg(b1),
                Operand::reg(b2),
                Operand::imm(((b3 & 0x80) >> 7) as u32),
                Operand::imm(((b3 & 0x70) >> 4) as u32),
                Operand::imm(((b3 & 0x0C) >> 2) as u32),
                Operand::imm((b3 & 0x03) as u32),
            ]),
            Format::RcRa | Format::Mfsr => Operands::from_slice(&[Operand::reg(b1), Operand::reg(b2)]),
            Format::Mac => Operands::from_slice(&[
                Operand::imm(((b1 & 0x3C) >> 2) as u32),
                Operand::imm((b1 & 0x03) as u32),
                Operand::reg(b1),
                Operand::reg(b2),
            ]),
            Format::RaRb => Operands::from_slice(&[Operand::reg(b1), Operand::reg(b3)]),
            Format::Rb => Operands::from_slice(&[Operand::reg(b3)]),
            Format::RcImm => Operands::from_slice(&[
                Operand::reg(b1),
                Operand::imm(((b3 & 0x0C) >> 2) as u32),
                Operand::imm((b3 & 0x03) as u32),
            ]),
            Format::RaImm => Operands::from_slice(&[
                Operand::reg(b2),
                Operand::imm(((b3 & 0x0C) >> 2) as u32),
                Operand::imm((b3 & 0x03) as u32),
            ]),
            Format::Mtsr => Operands::from_slice(&[Operand::reg(b2), Operand::reg(b3)]),
            Format::NoOperands => Operands::none(),
        }
    }
}

/// Am29000/Am29050 decoder over big-endian instruction words.
#[derive(Debug, Clone, Copy, Default)]
pub struct Am29kDecoder {
    pub cfg: CpuConfig,
}

impl Am29kDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(cfg: CpuConfig) -> Self {
        Self { cfg }
    }

    pub fn decode_word(&self, w: [u8; 4]) -> Result<Instruction, DecodeError> {
        if w == NOP_WORD {
            return Ok(Instruction { mnemonic: "nop", class: OpClass::Nop, operands: Operands::none() });
        }
        let desc = lookup(w[0], &self.cfg).ok_or_else(|| {
            tracing::debug!(opcode = w[0], "unknown opcode");
            DecodeError::UnknownOpcode { opcode: w[0] }
        })?;
        tracing::trace!(opcode = w[0], mnemonic = desc.mnemonic, "catalog hit");
        Ok(Instruction { mnemonic: desc.mnemonic, class: desc.class, operands: desc.format.operands(&w) })
    }
}

impl Decoder for Am29kDecoder {
    fn decode(&self, bytes: &[u8]) -> Result<Instruction, DecodeError> {
        let Some(&[b0, b1, b2, b3]) = bytes.get(..INSN_SIZE) else {
            tracing::debug!(len = bytes.len(), "short instruction buffer");
            return Err(InputError::ShortBuffer { len: bytes.len() }.into());
        };
        self.decode_word([b0, b1, b2, b3])
    }
}

/// First catalog entry for `opcode` that the configuration accepts.
///
/// Without `strict_family` an entry qualifies when it is common to the
/// family or carries either part's marker, so the requested variant does
/// not steer collisions: declaration order alone decides them.
pub fn lookup(opcode: u8, cfg: &CpuConfig) -> Option<&'static InstrDesc> {
    TABLE.iter().find(|d| {
        d.opcode == opcode
            && if cfg.strict_family {
                d.cpus.contains(cfg.variant.cpus())
            } else {
                matches!(d.cpus.marker(), '*' | '0' | '5')
            }
    })
}

/// Validates `cpu` and decodes the first four bytes of `bytes`.
pub fn decode(bytes: &[u8], cpu: Option<&str>) -> Result<Instruction, DecodeError> {
    let cfg = CpuConfig::from_label(cpu)?;
    Am29kDecoder::with_config(cfg).decode(bytes)
}

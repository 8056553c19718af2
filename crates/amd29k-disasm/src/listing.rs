use serde::Serialize;

use amd29k_rs::decoder::{Decoder, OpClass};
use amd29k_rs::disasm::fmt_decoded;
use amd29k_rs::isa::am29k::Am29kDecoder;

use crate::model::{read_word, Image};

/// Marker printed for words whose opcode byte is not in the catalog.
pub const ILLEGAL: &str = "illegal";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Line {
    pub addr: u32,
    pub bytes: [u8; 4],
    pub text: String,
    pub class: Option<OpClass>,
    pub target: Option<u32>,
    pub is_ret: bool,
}

/// Linear sweep over `[start, end)`, one line per whole word. A trailing
/// partial word is not read; the sweep also stops at the first unmapped word.
pub fn disassemble_range(img: &Image, dec: &Am29kDecoder, start: u32, end: u32) -> Vec<Line> {
    let mut out = Vec::new();
    let mut pc = start;
    while pc as u64 + 4 <= end as u64 {
        let Some(bytes) = read_word(img, pc) else {
            tracing::debug!(pc, "range leaves mapped memory");
            break;
        };
        let line = match dec.decode(&bytes) {
            Ok(insn) => Line {
                addr: pc,
                bytes,
                text: fmt_decoded(pc, &insn),
                class: Some(insn.class),
                target: insn.target(pc),
                is_ret: insn.is_return(),
            },
            Err(err) => {
                tracing::debug!(pc, %err, "undecodable word");
                Line { addr: pc, bytes, text: ILLEGAL.to_string(), class: None, target: None, is_ret: false }
            }
        };
        out.push(line);
        pc = match pc.checked_add(4) {
            Some(next) => next,
            None => break,
        };
    }
    out
}

impl Line {
    pub fn to_text(&self, show_bytes: bool) -> String {
        if show_bytes {
            let [b0, b1, b2, b3] = self.bytes;
            format!("{:#010x}: {b0:02x} {b1:02x} {b2:02x} {b3:02x}   {}", self.addr, self.text)
        } else {
            format!("{:#010x}: {}", self.addr, self.text)
        }
    }
}

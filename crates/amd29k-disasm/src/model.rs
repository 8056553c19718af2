use anyhow::Result;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct Segment {
    pub name: String,
    pub base: u32,
    pub bytes: Vec<u8>,
    pub perms: &'static str, // e.g., "r-x"
    pub kind: &'static str,  // e.g., "raw"
}

impl Segment {
    /// One past the last byte; a segment may end exactly at 2^32.
    pub fn end(&self) -> u64 {
        self.base as u64 + self.bytes.len() as u64
    }

    fn contains(&self, addr: u32) -> bool {
        addr >= self.base && (addr as u64) < self.end()
    }
}

#[derive(Debug, Clone)]
pub struct Image {
    pub segments: Vec<Segment>,
}

pub fn load_raw_bin(path: &Path, base: u32, skip: usize, len: Option<usize>) -> Result<Image> {
    let file = std::fs::read(path)?;
    anyhow::ensure!(skip <= file.len(), "--skip exceeds file size");
    let mut payload = &file[skip..];
    if let Some(lim) = len {
        anyhow::ensure!(lim <= payload.len(), "--len exceeds remaining file size after skip");
        payload = &payload[..lim];
    }
    tracing::info!(path = %path.display(), base, bytes = payload.len(), "loaded raw image");
    let seg = Segment { name: "segment0".into(), base, bytes: payload.to_vec(), perms: "r-x", kind: "raw" };
    Ok(Image { segments: vec![seg] })
}

pub fn read_u8(img: &Image, addr: u32) -> Option<u8> {
    img.segments
        .iter()
        .find(|s| s.contains(addr))
        .map(|s| s.bytes[(addr - s.base) as usize])
}

/// Instruction word in memory order (opcode byte first).
pub fn read_word(img: &Image, addr: u32) -> Option<[u8; 4]> {
    Some([
        read_u8(img, addr)?,
        read_u8(img, addr.wrapping_add(1))?,
        read_u8(img, addr.wrapping_add(2))?,
        read_u8(img, addr.wrapping_add(3))?,
    ])
}

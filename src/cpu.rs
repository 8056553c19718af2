use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::decoder::InputError;

/// Members of the family that reuse parts of the opcode space differently.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CpuVariant {
    #[default]
    Am29000,
    Am29050,
}

impl CpuVariant {
    pub fn label(self) -> &'static str {
        match self {
            CpuVariant::Am29000 => "29000",
            CpuVariant::Am29050 => "29050",
        }
    }

    pub fn cpus(self) -> CpuSet {
        match self {
            CpuVariant::Am29000 => CpuSet::AM29000,
            CpuVariant::Am29050 => CpuSet::AM29050,
        }
    }
}

bitflags! {
/// Which variants a catalog entry applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CpuSet: u8 {
const AM29000 = 1 << 0;
const AM29050 = 1 << 1;
const ANY = Self::AM29000.bits() | Self::AM29050.bits();
}
}

impl CpuSet {
    /// Family marker for entries tied to a single part; `*` for the common baseline.
    pub fn marker(self) -> char {
        if self == CpuSet::ANY {
            '*'
        } else if self.contains(CpuSet::AM29050) {
            '5'
        } else {
            '0'
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CpuConfig {
    pub variant: CpuVariant,
    /// Reject entries that do not apply to `variant`. Off by default: entries
    /// are then matched on their own family marker only.
    pub strict_family: bool,
}

impl CpuConfig {
    pub fn new(variant: CpuVariant) -> Self {
        Self { variant, strict_family: false }
    }

    pub fn strict(mut self) -> Self {
        self.strict_family = true;
        self
    }

    /// Validates a caller-supplied part label ("29000", "am29050", ...).
    /// Absent labels select the Am29000.
    pub fn from_label(label: Option<&str>) -> Result<Self, InputError> {
        let Some(label) = label else {
            return Ok(Self::default());
        };
        if label.chars().count() < 5 {
            return Err(InputError::MalformedCpu(label.to_string()));
        }
        let digits = label
            .strip_prefix("am")
            .or_else(|| label.strip_prefix("AM"))
            .or_else(|| label.strip_prefix("Am"))
            .unwrap_or(label);
        let variant = match digits.as_bytes().get(3) {
            Some(b'5') => CpuVariant::Am29050,
            _ => CpuVariant::Am29000,
        };
        Ok(Self::new(variant))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_select_variant() {
        assert_eq!(CpuConfig::from_label(None).unwrap().variant, CpuVariant::Am29000);
        assert_eq!(CpuConfig::from_label(Some("29050")).unwrap().variant, CpuVariant::Am29050);
        assert_eq!(CpuConfig::from_label(Some("am29050")).unwrap().variant, CpuVariant::Am29050);
        assert_eq!(CpuConfig::from_label(Some("29000")).unwrap().variant, CpuVariant::Am29000);
        assert_eq!(
            CpuConfig::from_label(Some("2905")),
            Err(InputError::MalformedCpu("2905".into()))
        );
    }

    #[test]
    fn markers() {
        assert_eq!(CpuSet::ANY.marker(), '*');
        assert_eq!(CpuSet::AM29000.marker(), '0');
        assert_eq!(CpuSet::AM29050.marker(), '5');
        assert_eq!(CpuVariant::Am29050.label(), "29050");
    }
}

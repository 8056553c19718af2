use amd29k_rs::cpu::{CpuConfig, CpuSet, CpuVariant};
use amd29k_rs::decoder::{DecodeError, Decoder, OpClass};
use amd29k_rs::instructions::{entries_for, TABLE};
use amd29k_rs::isa::am29k::{decode, lookup, Am29kDecoder, Format};

#[test]
fn table_shape() {
    assert_eq!(TABLE.len(), 207);
    assert_eq!(TABLE[0].mnemonic, "illegal");
    let calli = entries_for(0xC8).next().expect("calli");
    assert_eq!((calli.mnemonic, calli.class, calli.format), ("calli", OpClass::IndirectCall, Format::Calli));
}

#[test]
fn collisions_pair_one_entry_per_part() {
    for opcode in [0xE4u8, 0xE5, 0xE6, 0xE8, 0xE9, 0xEE, 0xEF] {
        let entries: Vec<_> = entries_for(opcode).collect();
        assert_eq!(entries.len(), 2, "opcode {opcode:#04x}");
        assert_ne!(entries[0].cpus, entries[1].cpus);
        assert!(entries.iter().all(|e| e.cpus != CpuSet::ANY));
    }
}

#[test]
fn strict_family_picks_the_matching_part() {
    let a = Am29kDecoder::with_config(CpuConfig::new(CpuVariant::Am29000).strict());
    let b = Am29kDecoder::with_config(CpuConfig::new(CpuVariant::Am29050).strict());
    let cases: [(u8, &str, &str); 7] = [
        (0xE4, "cvintf", "convert"),
        (0xE5, "cvintd", "sqrt"),
        (0xE6, "cvfint", "class"),
        (0xE8, "cvfd", "mtacc"),
        (0xE9, "cvdf", "mfacc"),
        (0xEE, "flt", "fge"),
        (0xEF, "dlt", "dge"),
    ];
    for (opcode, on_29000, on_29050) in cases {
        let w = [opcode, 1, 2, 3];
        assert_eq!(a.decode(&w).unwrap().mnemonic, on_29000);
        assert_eq!(b.decode(&w).unwrap().mnemonic, on_29050);
    }
    // Am29050-only opcodes do not exist on the Am29000 in strict mode
    assert_eq!(a.decode(&[0xD9, 0, 0, 0]), Err(DecodeError::UnknownOpcode { opcode: 0xD9 }));
    assert_eq!(b.decode(&[0xD9, 0, 0, 0]).unwrap().mnemonic, "dmac");
    // baseline entries apply to both
    assert_eq!(a.decode(&[0x14, 1, 2, 3]).unwrap().mnemonic, "add");
    assert_eq!(b.decode(&[0x14, 1, 2, 3]).unwrap().mnemonic, "add");
}

// Known ambiguity: without strict filtering the requested part is only
// validated, so the first declared entry wins whichever part was asked for.
#[test]
fn default_lookup_ignores_requested_part() {
    for cpu in [None, Some("29000"), Some("29050")] {
        assert_eq!(decode(&[0xE4, 1, 2, 3], cpu).unwrap().mnemonic, "convert");
        assert_eq!(decode(&[0xE9, 1, 2, 3], cpu).unwrap().mnemonic, "cvdf");
        assert_eq!(decode(&[0xEE, 1, 2, 3], cpu).unwrap().mnemonic, "fge");
        assert_eq!(decode(&[0xD9, 1, 2, 3], cpu).unwrap().mnemonic, "dmac");
    }
    let cfg = CpuConfig::new(CpuVariant::Am29000);
    assert_eq!(lookup(0xE6, &cfg).map(|d| d.mnemonic), Some("class"));
    assert!(lookup(0xFE, &cfg).is_none());
}

#[test]
fn paired_opcodes_share_mnemonic() {
    for pair in [(0x14u8, 0x15u8), (0x90, 0x91), (0x24, 0x25), (0x16, 0x17), (0xA0, 0xA1)] {
        let even = entries_for(pair.0).next().unwrap();
        let odd = entries_for(pair.1).next().unwrap();
        assert_eq!(even.mnemonic, odd.mnemonic);
        assert_eq!(even.format, odd.format);
    }
}

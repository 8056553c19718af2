use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use amd29k_rs::{fmt_decoded, CpuConfig, Am29kDecoder, Decoder};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Decode Am29000 instruction words given as hex"
)]
struct Opts {
    /// Address of the first word (hex or dec)
    #[arg(short, long, default_value = "0")]
    addr: String,
    /// Part label, e.g. 29000 or 29050
    #[arg(long)]
    cpu: Option<String>,
    /// Filter catalog entries by the requested part
    #[arg(long)]
    strict_family: bool,
    #[arg(value_name = "WORD", required = true)]
    words: Vec<String>,
}

fn parse_u32(s: &str) -> Result<u32> {
    let s = s.trim();
    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Ok(u32::from_str_radix(hex, 16)?)
    } else {
        Ok(s.parse::<u32>()?)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let opts = Opts::parse();
    let mut cfg = CpuConfig::from_label(opts.cpu.as_deref())?;
    cfg.strict_family = opts.strict_family;
    let dec = Am29kDecoder::with_config(cfg);

    let mut pc = parse_u32(&opts.addr)?;
    for w in &opts.words {
        let raw = u32::from_str_radix(w.trim_start_matches("0x"), 16)
            .with_context(|| format!("bad instruction word {w:?}"))?;
        match dec.decode(&raw.to_be_bytes()) {
            Ok(insn) => {
                let tgt = insn.target(pc).map(|t| format!("  ; -> {t:#010x}")).unwrap_or_default();
                println!("{pc:#010x}: {raw:08x}  {}{tgt}", fmt_decoded(pc, &insn));
            }
            Err(err) => {
                tracing::warn!(%err, "decode failed");
                println!("{pc:#010x}: {raw:08x}  illegal");
            }
        }
        pc = pc.wrapping_add(4);
    }

    Ok(())
}

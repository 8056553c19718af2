use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use std::path::Path;

use amd29k_disasm::{disassemble_range, load_raw_bin};
use amd29k_rs::cpu::CpuConfig;
use amd29k_rs::isa::am29k::Am29kDecoder;

#[derive(Parser, Debug)]
#[command(author, version, about = "Am29000 disassembler CLI", long_about=None)]
struct Cli {
    /// Load address for the binary in target address space
    #[arg(long, default_value_t = 0u32)]
    base: u32,
    /// Skip N bytes at start of file before loading
    #[arg(long, default_value_t = 0usize)]
    skip: usize,
    /// Input binary path
    #[arg(value_name = "BINFILE")]
    input: String,
    /// Limit bytes loaded (default: to EOF after --skip)
    #[arg(long)]
    len: Option<usize>,
    /// Part label (29000, 29050); defaults to the Am29000
    #[arg(long)]
    cpu: Option<String>,
    /// Only accept catalog entries that apply to --cpu
    #[arg(long)]
    strict_family: bool,
    /// Subcommand
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List loaded segments (simple single-segment for raw .bin)
    Sections,
    /// Disassemble a range [start, end) in bytes
    Range {
        /// Start address (hex or dec)
        start: String,
        /// End address (hex or dec, exclusive)
        end: String,
        /// Show instruction bytes
        #[arg(long)]
        show_bytes: bool,
        /// Output format: text or json
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Write output to file instead of stdout
        #[arg(long, value_name = "FILE")]
        out: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat { Text, Json }

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

    let cli = Cli::parse();
    let img = load_raw_bin(Path::new(&cli.input), cli.base, cli.skip, cli.len)?;
    let mut cfg = CpuConfig::from_label(cli.cpu.as_deref())?;
    cfg.strict_family = cli.strict_family;

    match cli.cmd {
        Command::Sections => {
            println!("{:<10} {:<12} {:<12} {:<6} {:<6}", "name", "start", "end", "perms", "kind");
            for s in &img.segments {
                println!(
                    "{:<10} {:#010x}   {:#010x}   {:<6} {:<6}",
                    s.name, s.base, s.end(), s.perms, s.kind
                );
            }
        }
        Command::Range { start, end, show_bytes, format, out } => {
            let start = parse_u32(&start)?;
            let end = parse_u32(&end)?;
            anyhow::ensure!(end >= start, "end must be >= start");
            if start % 4 != 0 {
                tracing::warn!(start, "range start is not word aligned");
            }
            if end % 4 != 0 {
                tracing::warn!(end, "range end is not word aligned; the partial word is skipped");
            }

            let lines = disassemble_range(&img, &Am29kDecoder::with_config(cfg), start, end);
            let buf = match format {
                OutputFormat::Json => serde_json::to_string_pretty(&lines)?,
                OutputFormat::Text => {
                    let mut buf = String::new();
                    for l in &lines {
                        buf.push_str(&l.to_text(show_bytes));
                        buf.push('\n');
                    }
                    buf
                }
            };
            if let Some(path) = out { std::fs::write(path, buf)?; } else { print!("{}", buf); }
        }
    }

    Ok(())
}

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;

use bgpwire_core::{
    LocalBlock, MsdPair, NoopTracer, OpenMessage, WireTracer, decode_local_block_traced,
    decode_msd_list_traced, decode_open_traced,
};

#[derive(Parser, Debug)]
#[command(name = "bgpwire")]
#[command(version)]
#[command(
    about = "Decoder for BGP monitoring-stream wire messages (OPEN / SR Local Block / MSD).",
    long_about = None,
    after_help = "Examples:\n  bgpwire decode open message.bin -o report.json\n  bgpwire decode open message.hex --hex-input --pretty\n  bgpwire decode msd msd.bin --dump-hex"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Decode one wire message and emit a JSON report.
    Decode {
        #[command(subcommand)]
        command: DecodeCommands,
    },
}

#[derive(Subcommand, Debug)]
enum DecodeCommands {
    /// BGP OPEN message (fixed header + optional parameters).
    Open(DecodeArgs),
    /// SR Local Block attribute (flags + sub-TLVs).
    LocalBlock(DecodeArgs),
    /// MSD type/value pair list.
    Msd(DecodeArgs),
}

#[derive(Args, Debug)]
struct DecodeArgs {
    /// Path to a file holding exactly one message
    input: PathBuf,

    /// Treat the input file as hex text instead of raw bytes
    #[arg(long)]
    hex_input: bool,

    /// Output report path (JSON); defaults to stdout
    #[arg(short = 'o', long)]
    report: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// Dump decoded wire regions as hex to stderr
    #[arg(long)]
    dump_hex: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Decode { command } => match command {
            DecodeCommands::Open(args) => cmd_decode(args, MessageKind::Open),
            DecodeCommands::LocalBlock(args) => cmd_decode(args, MessageKind::LocalBlock),
            DecodeCommands::Msd(args) => cmd_decode(args, MessageKind::Msd),
        },
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err.message);
            if let Some(hint) = err.hint {
                eprintln!("hint: {}", hint);
            }
            ExitCode::from(2)
        }
    }
}

#[derive(Debug)]
struct CliError {
    message: String,
    hint: Option<String>,
}

impl CliError {
    fn new(message: impl Into<String>, hint: Option<String>) -> Self {
        Self {
            message: message.into(),
            hint,
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::new(err.to_string(), None)
    }
}

#[derive(Debug, Clone, Copy)]
enum MessageKind {
    Open,
    LocalBlock,
    Msd,
}

/// Current report schema version.
const REPORT_VERSION: u32 = 1;

#[derive(Debug, Serialize)]
struct DecodeReport {
    report_version: u32,
    tool: ToolInfo,
    input: InputInfo,
    message: MessageReport,
}

#[derive(Debug, Serialize)]
struct ToolInfo {
    name: String,
    version: String,
}

#[derive(Debug, Serialize)]
struct InputInfo {
    path: String,
    bytes: u64,
}

#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum MessageReport {
    Open {
        #[serde(flatten)]
        message: OpenMessage,
        summary: OpenSummary,
    },
    LocalBlock(LocalBlock),
    Msd { pairs: Vec<MsdPair> },
}

/// Convenience projections a monitoring consumer usually wants first.
#[derive(Debug, Serialize)]
struct OpenSummary {
    bgp_id: String,
    four_byte_as: Option<u32>,
    multi_label: bool,
}

/// Hex-dumps every traced wire region to stderr.
struct HexDumpTracer;

impl WireTracer for HexDumpTracer {
    fn on_region(&mut self, label: &'static str, bytes: &[u8]) {
        eprintln!("{label}: {}", hex::encode(bytes));
    }
}

fn cmd_decode(args: DecodeArgs, kind: MessageKind) -> Result<(), CliError> {
    let buf = read_input(&args.input, args.hex_input)?;

    let mut noop = NoopTracer;
    let mut dump = HexDumpTracer;
    let tracer: &mut dyn WireTracer = if args.dump_hex { &mut dump } else { &mut noop };

    let message = decode_message(kind, &buf, tracer)?;
    let report = DecodeReport {
        report_version: REPORT_VERSION,
        tool: ToolInfo {
            name: "bgpwire".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        input: InputInfo {
            path: args.input.display().to_string(),
            bytes: buf.len() as u64,
        },
        message,
    };

    let mut json = if args.pretty {
        serde_json::to_string_pretty(&report)
    } else {
        serde_json::to_string(&report)
    }
    .context("JSON serialization failed")?;
    json.push('\n');

    match args.report {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent).with_context(|| {
                        format!("Failed to create output directory: {}", parent.display())
                    })?;
                }
            }
            fs::write(&path, json)
                .with_context(|| format!("Failed to write report: {}", path.display()))?;
            eprintln!("OK: report written -> {}", path.display());
        }
        None => print!("{json}"),
    }
    Ok(())
}

fn decode_message(
    kind: MessageKind,
    buf: &[u8],
    tracer: &mut dyn WireTracer,
) -> Result<MessageReport, CliError> {
    match kind {
        MessageKind::Open => {
            let message = decode_open_traced(buf, tracer).map_err(decode_error)?;
            let summary = OpenSummary {
                bgp_id: format_bgp_id(&message.bgp_id),
                four_byte_as: message.four_byte_as(),
                multi_label: message.is_multi_label_capable(),
            };
            Ok(MessageReport::Open { message, summary })
        }
        MessageKind::LocalBlock => decode_local_block_traced(buf, tracer)
            .map(MessageReport::LocalBlock)
            .map_err(decode_error),
        MessageKind::Msd => decode_msd_list_traced(buf, tracer)
            .map(|pairs| MessageReport::Msd { pairs })
            .map_err(decode_error),
    }
}

fn decode_error(err: impl std::error::Error) -> CliError {
    CliError::new(
        format!("decode failed: {err}"),
        Some("use --dump-hex to inspect the wire regions".to_string()),
    )
}

fn format_bgp_id(bgp_id: &[u8; 4]) -> String {
    format!("{}.{}.{}.{}", bgp_id[0], bgp_id[1], bgp_id[2], bgp_id[3])
}

fn read_input(input: &PathBuf, hex_input: bool) -> Result<Vec<u8>, CliError> {
    if !input.exists() {
        return Err(CliError::new(
            format!("input file not found: {}", input.display()),
            Some("pass a file holding exactly one wire message".to_string()),
        ));
    }
    let raw = fs::read(input)
        .with_context(|| format!("Failed to read input file: {}", input.display()))?;
    if !hex_input {
        return Ok(raw);
    }

    let text = String::from_utf8(raw).map_err(|_| {
        CliError::new(
            format!("input is not valid hex text: {}", input.display()),
            Some("drop --hex-input for raw binary files".to_string()),
        )
    })?;
    let compact: String = text.split_whitespace().collect();
    hex::decode(&compact).map_err(|err| {
        CliError::new(
            format!("input is not valid hex text: {err}"),
            Some("expected an even number of hex digits".to_string()),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::format_bgp_id;

    #[test]
    fn bgp_id_renders_dotted_quad() {
        assert_eq!(format_bgp_id(&[10, 0, 0, 1]), "10.0.0.1");
        assert_eq!(format_bgp_id(&[255, 255, 255, 255]), "255.255.255.255");
    }
}

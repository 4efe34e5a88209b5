//! Build automation and command-line front end for sevenseg-kit.
//!
//! Run with: `cargo xtask <command>`

use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use sevenseg_kit::{
    ActiveSet, BitOrder, Charset, EncodingConfig, NumberFormat, OrderPreset, OutputStyle,
    Polarity, ScanMode, Segment, Session,
};
use std::path::PathBuf;
use std::process::{Command, ExitCode};

/// The library is `no_std`; this target proves it stays that way.
const BARE_METAL_TARGET: &str = "thumbv8m.main-none-eabihf";

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build automation for sevenseg-kit", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run all checks: build lib, run tests, run clippy, generate docs
    CheckAll,
    /// Generate a seven-segment lookup table
    Generate {
        /// Characters to encode, in table order
        #[arg(long, default_value = "0123456789")]
        charset: String,
        /// Segment order preset
        #[arg(long, default_value = "forward")]
        order: Order,
        /// Custom segment order, e.g. "dp g f e d c b a" (implies --order custom)
        #[arg(long)]
        custom_order: Option<String>,
        #[arg(long, default_value = "msb")]
        bit_order: Bit,
        #[arg(long, default_value = "common-cathode")]
        polarity: Drive,
        #[arg(long, default_value = "bin")]
        format: Format,
        #[arg(long, default_value = "array")]
        style: Style,
        #[arg(long, default_value = "static")]
        scan: Scan,
        /// Number of digits of a dynamically scanned display
        #[arg(long, default_value_t = 4)]
        digits: usize,
        /// Text shown on the dynamic-scan preview
        #[arg(long, default_value = "0123")]
        sample: String,
        /// Replace a character's pattern, e.g. `--pattern "1=b,c,dp"` (repeatable)
        #[arg(long = "pattern", value_parser = parse_pattern)]
        patterns: Vec<(char, ActiveSet)>,
        /// Write the generated code here instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum Order {
    Forward,
    Reverse,
    Custom,
}

impl From<Order> for OrderPreset {
    fn from(order: Order) -> Self {
        match order {
            Order::Forward => Self::Forward,
            Order::Reverse => Self::Reverse,
            Order::Custom => Self::Custom,
        }
    }
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum Bit {
    Msb,
    Lsb,
}

impl From<Bit> for BitOrder {
    fn from(bit: Bit) -> Self {
        match bit {
            Bit::Msb => Self::Msb,
            Bit::Lsb => Self::Lsb,
        }
    }
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum Drive {
    CommonCathode,
    CommonAnode,
}

impl From<Drive> for Polarity {
    fn from(drive: Drive) -> Self {
        match drive {
            Drive::CommonCathode => Self::CommonCathode,
            Drive::CommonAnode => Self::CommonAnode,
        }
    }
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum Format {
    Bin,
    Dec,
    Hex,
}

impl From<Format> for NumberFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Bin => Self::Bin,
            Format::Dec => Self::Dec,
            Format::Hex => Self::Hex,
        }
    }
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum Style {
    Array,
    Macro,
    Enum,
}

impl From<Style> for OutputStyle {
    fn from(style: Style) -> Self {
        match style {
            Style::Array => Self::Array,
            Style::Macro => Self::Macro,
            Style::Enum => Self::Enum,
        }
    }
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum Scan {
    Static,
    Dynamic,
}

impl From<Scan> for ScanMode {
    fn from(scan: Scan) -> Self {
        match scan {
            Scan::Static => Self::Static,
            Scan::Dynamic => Self::Dynamic,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::CheckAll => check_all(),
        Commands::Generate {
            charset,
            order,
            custom_order,
            bit_order,
            polarity,
            format,
            style,
            scan,
            digits,
            sample,
            patterns,
            out,
        } => {
            let mut session = Session::new();
            session.update_config(|config: EncodingConfig| {
                config
                    .with_charset(Charset::from(charset.as_str()))
                    .with_bit_order(bit_order.into())
                    .with_polarity(polarity.into())
                    .with_number_format(format.into())
                    .with_output_style(style.into())
                    .with_scan_mode(scan.into())
                    .with_digit_count(digits)
            });
            if let Some(text) = custom_order {
                session.set_custom_order(&text);
                session.select_order_preset(OrderPreset::Custom);
            } else {
                session.select_order_preset(order.into());
            }
            session.set_sample_text(&sample);
            for (ch, pattern) in patterns {
                session.patterns_mut().set_override(ch, pattern);
            }
            generate(&mut session, out)
        }
    }
}

fn generate(session: &mut Session, out: Option<PathBuf>) -> ExitCode {
    let generated = session.generate();

    for message in generated.warning_messages() {
        eprintln!("{}", format!("warning: {message}").yellow());
    }

    let preview = generated
        .preview
        .iter()
        .map(|cell| cell.ch)
        .collect::<String>();
    eprintln!("{}", format!("preview: [{preview}]").bright_black());

    match out {
        Some(path) => match std::fs::write(&path, format!("{}\n", generated.code)) {
            Ok(()) => {
                println!(
                    "{}",
                    format!("Wrote {} entries to {}", generated.entries.len(), path.display())
                        .green()
                );
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!(
                    "{}",
                    format!("Failed to write {}: {e}", path.display()).red()
                );
                ExitCode::FAILURE
            }
        },
        None => {
            println!("{}", generated.code);
            ExitCode::SUCCESS
        }
    }
}

/// Parse `CHAR=SEGMENTS`, where SEGMENTS is a comma- or space-separated list (may be empty).
fn parse_pattern(text: &str) -> Result<(char, ActiveSet), String> {
    let (ch, segments) = text
        .split_once('=')
        .ok_or_else(|| format!("expected CHAR=SEGMENTS, got {text:?}"))?;

    let mut chars = ch.chars();
    let (Some(ch), None) = (chars.next(), chars.next()) else {
        return Err(format!("expected a single character before '=', got {ch:?}"));
    };

    let pattern = segments
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            Segment::from_token(&token.to_lowercase())
                .ok_or_else(|| format!("unknown segment {token:?}"))
        })
        .collect::<Result<ActiveSet, String>>()?;

    Ok((ch, pattern))
}

fn check_all() -> ExitCode {
    let workspace_root = workspace_root();

    println!("{}", "==> Building library...".cyan());
    if !run_command(
        Command::new("cargo")
            .current_dir(&workspace_root)
            .args(["build", "--lib", "--package", "sevenseg-kit"]),
    ) {
        return ExitCode::FAILURE;
    }

    println!(
        "\n{}",
        format!("==> Building library for {BARE_METAL_TARGET} with defmt logging...").cyan()
    );
    if !run_command(Command::new("cargo").current_dir(&workspace_root).args([
        "build",
        "--lib",
        "--package",
        "sevenseg-kit",
        "--target",
        BARE_METAL_TARGET,
        "--features",
        "defmt",
    ])) {
        return ExitCode::FAILURE;
    }

    println!("\n{}", "==> Running tests...".cyan());
    if !run_command(
        Command::new("cargo")
            .current_dir(&workspace_root)
            .args(["test", "--package", "sevenseg-kit"]),
    ) {
        return ExitCode::FAILURE;
    }

    println!("\n{}", "==> Running clippy...".cyan());
    if !run_command(Command::new("cargo").current_dir(&workspace_root).args([
        "clippy",
        "--package",
        "sevenseg-kit",
        "--all-targets",
    ])) {
        return ExitCode::FAILURE;
    }

    println!("\n{}", "==> Building documentation...".cyan());
    if !run_command(
        Command::new("cargo")
            .current_dir(&workspace_root)
            .args(["doc", "--no-deps", "--package", "sevenseg-kit"]),
    ) {
        return ExitCode::FAILURE;
    }

    println!("\n{}", "==> All checks passed!".green().bold());
    ExitCode::SUCCESS
}

fn workspace_root() -> std::path::PathBuf {
    std::env::current_dir().expect("Failed to get current directory")
}

fn run_command(cmd: &mut Command) -> bool {
    match cmd.status() {
        Ok(status) => status.success(),
        Err(e) => {
            eprintln!("{}", format!("Failed to execute command: {e}").red());
            false
        }
    }
}

use clap::{Parser, Subcommand};
use rust_qr_svg::render::text::to_text;
use rust_qr_svg::{
    BarcodeOptions, ECLevel, MaskSelection, PathRendering, QrOptions, barcode_svg, encode_qr,
    qr_svg,
};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "qrtool", version, about = "QR code and Code 128B SVG generator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Args)]
struct QrArgs {
    /// Text to encode (empty encodes "hello")
    #[arg(default_value = "")]
    message: String,
    /// Error correction level: L, M, Q or H
    #[arg(long, default_value = "M")]
    ecl: ECLevel,
    /// Keep the requested EC level instead of raising it when it fits
    #[arg(long)]
    no_boost: bool,
    /// Mask index 0-7, or -1 to pick automatically
    #[arg(long, default_value_t = -1, allow_negative_numbers = true)]
    mask: i32,
    /// Side length of the symbol
    #[arg(long, default_value_t = 160)]
    dim: i64,
    /// Margin around the symbol
    #[arg(long, default_value_t = 0)]
    pad: i64,
    /// Foreground color, then optional background color
    #[arg(long, num_args = 1..=2)]
    pal: Vec<String>,
    /// One path command per module instead of merged runs
    #[arg(long)]
    verbose: bool,
    /// JSON options object; replaces all other option flags
    #[arg(long)]
    options: Option<String>,
}

#[derive(Subcommand)]
enum Command {
    /// Encode a message as a QR code SVG
    Qr {
        #[command(flatten)]
        args: QrArgs,
        /// Write to a file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Encode a value as a Code 128B SVG
    Barcode {
        value: String,
        #[arg(long, default_value_t = 40)]
        height: u32,
        /// Print the value under the bars
        #[arg(long)]
        include_text: bool,
        #[arg(long, default_value_t = 10)]
        quiet_zone: u32,
        #[arg(long, default_value_t = 25)]
        text_offset: u32,
        #[arg(long, default_value_t = 11)]
        font_size: u32,
        #[arg(long, default_value_t = 1)]
        bar_width: u32,
        #[arg(long, default_value = "monospace")]
        font_family: String,
        #[arg(long, default_value = "#000000")]
        color: String,
        /// Write to a file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Print version, EC level, mask and a text preview of a QR code
    Inspect {
        #[command(flatten)]
        args: QrArgs,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Qr { args, output } => qr_cmd(&args, output.as_deref()),
        Command::Barcode {
            value,
            height,
            include_text,
            quiet_zone,
            text_offset,
            font_size,
            bar_width,
            font_family,
            color,
            output,
        } => {
            let options = BarcodeOptions {
                height,
                include_text,
                quiet_zone,
                text_offset,
                font_size,
                bar_width,
                font_family,
                color,
            };
            barcode_cmd(&value, &options, output.as_deref())
        }
        Command::Inspect { args } => inspect_cmd(&args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn qr_options(args: &QrArgs) -> Result<QrOptions, String> {
    if let Some(json) = &args.options {
        return serde_json::from_str(json).map_err(|e| format!("invalid --options: {e}"));
    }
    Ok(QrOptions {
        error_correction: args.ecl,
        boost_error_correction: !args.no_boost,
        mask: MaskSelection::from_index(args.mask).map_err(|e| e.to_string())?,
        dimension: args.dim,
        padding: args.pad,
        palette: args.pal.clone(),
        rendering: PathRendering::from(args.verbose),
    })
}

fn qr_cmd(args: &QrArgs, output: Option<&Path>) -> Result<(), String> {
    let options = qr_options(args)?;
    let svg = qr_svg(&args.message, &options).map_err(|e| e.to_string())?;
    write_output(&svg, output)
}

fn barcode_cmd(value: &str, options: &BarcodeOptions, output: Option<&Path>) -> Result<(), String> {
    let svg = barcode_svg(value, options).map_err(|e| e.to_string())?;
    write_output(&svg, output)
}

fn inspect_cmd(args: &QrArgs) -> Result<(), String> {
    let options = qr_options(args)?;
    let code = encode_qr(&args.message, &options).map_err(|e| e.to_string())?;
    println!(
        "version={} size={} error_correction={} mask={}",
        code.version.number(),
        code.size(),
        code.error_correction,
        code.mask_pattern.index()
    );
    print!("{}", to_text(&code));
    Ok(())
}

fn write_output(svg: &str, output: Option<&Path>) -> Result<(), String> {
    match output {
        Some(path) => std::fs::write(path, svg)
            .map_err(|e| format!("failed to write {}: {e}", path.display())),
        None => {
            println!("{svg}");
            Ok(())
        }
    }
}

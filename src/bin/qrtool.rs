use clap::{Args, Parser, Subcommand};
use rust_qr_encoder::config::{
    clamp_module_size, clamp_quiet_zone, default_module_size, default_quiet_zone,
    parse_mask_option, parse_mode_option, parse_version_option,
};
use rust_qr_encoder::placement::mask::{
    penalty_rule1, penalty_rule2, penalty_rule3, penalty_rule4,
};
use rust_qr_encoder::render::save_png;
use rust_qr_encoder::{ECLevel, EncodeOptions, EncodedQr, encode};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "qrtool", version, about = "RustQR encoder CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct EncodeArgs {
    /// Text to encode
    text: String,
    /// Error correction level: L, M, Q or H (default from QR_DEFAULT_ECC, else M)
    #[arg(long)]
    ecc: Option<String>,
    /// Version 1-40 or auto
    #[arg(long, default_value = "auto")]
    version: String,
    /// auto, numeric, alphanumeric or byte
    #[arg(long, default_value = "auto")]
    mode: String,
    /// Mask 0-7 or auto
    #[arg(long, default_value = "auto")]
    mask: String,
}

impl EncodeArgs {
    fn options(&self) -> rust_qr_encoder::Result<EncodeOptions> {
        let mut options = EncodeOptions::from_env();
        if let Some(ecc) = &self.ecc {
            options.ec_level = ecc.parse::<ECLevel>()?;
        }
        options.version = parse_version_option(&self.version)?;
        options.mode = parse_mode_option(&self.mode)?;
        options.mask_pattern = parse_mask_option(&self.mask)?;
        Ok(options)
    }
}

#[derive(Subcommand)]
enum Command {
    /// Encode text; prints text art unless --png or --svg is given
    Encode {
        #[command(flatten)]
        args: EncodeArgs,
        #[arg(long)]
        png: Option<PathBuf>,
        #[arg(long)]
        svg: Option<PathBuf>,
        /// Pixels (PNG) or user units (SVG) per module, 1-100
        #[arg(long)]
        module_size: Option<u32>,
        /// Quiet zone width in modules, at most 64
        #[arg(long)]
        quiet_zone: Option<u32>,
    },
    /// Print the resolved parameters and penalty breakdown for a text
    Inspect {
        #[command(flatten)]
        args: EncodeArgs,
    },
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Encode {
            args,
            png,
            svg,
            module_size,
            quiet_zone,
        } => encode_cmd(
            &args,
            png,
            svg,
            module_size.map_or_else(default_module_size, clamp_module_size),
            quiet_zone.map_or_else(default_quiet_zone, clamp_quiet_zone),
        ),
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

fn encode_args(args: &EncodeArgs) -> Result<EncodedQr, String> {
    let options = args.options().map_err(|e| e.to_string())?;
    encode(&args.text, &options).map_err(|e| e.to_string())
}

fn encode_cmd(
    args: &EncodeArgs,
    png: Option<PathBuf>,
    svg: Option<PathBuf>,
    module_size: u32,
    quiet_zone: u32,
) -> Result<(), String> {
    let qr = encode_args(args)?;

    if let Some(path) = &png {
        save_png(qr.matrix(), path, module_size, quiet_zone)
            .map_err(|e| format!("failed to write {}: {e}", path.display()))?;
        println!("Wrote {}", path.display());
    }
    if let Some(path) = &svg {
        let document = qr.to_svg_string(module_size as usize, quiet_zone as usize);
        std::fs::write(path, document)
            .map_err(|e| format!("failed to write {}: {e}", path.display()))?;
        println!("Wrote {}", path.display());
    }
    if png.is_none() && svg.is_none() {
        print!("{}", qr.to_text());
    }
    Ok(())
}

fn inspect_cmd(args: &EncodeArgs) -> Result<(), String> {
    let qr = encode_args(args)?;
    let matrix = qr.matrix();
    let rules = [
        penalty_rule1(matrix),
        penalty_rule2(matrix),
        penalty_rule3(matrix),
        penalty_rule4(matrix),
    ];

    println!("Version: {} ({}x{})", qr.version(), qr.size(), qr.size());
    println!("Mode: {}", qr.mode());
    println!("Error correction: {}", qr.ec_level().as_str());
    println!("Mask: {}", qr.mask_pattern().index());
    println!(
        "Dark modules: {}/{}",
        matrix.dark_count(),
        qr.size() * qr.size()
    );
    for (i, score) in rules.iter().enumerate() {
        println!("  Rule {}: {}", i + 1, score);
    }
    println!("Penalty: {}", rules.iter().sum::<u32>());
    Ok(())
}

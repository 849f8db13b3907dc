use clap::{ArgAction, Parser};
use log::{error, LevelFilter};
use paprika_notes::{BatchConverter, ConvertError, ConverterConfig};
use std::path::PathBuf;
use std::process::ExitCode;

/// Convert Paprika recipe exports to Apple Notes format
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the Paprika recipe export directory
    #[arg(value_hint = clap::ValueHint::DirPath)]
    source_dir: PathBuf,

    /// Output directory for converted files [default: ./apple_notes_recipes]
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    output: Option<PathBuf>,

    /// Config file (default: paprika-notes.toml, if present)
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    config: Option<PathBuf>,

    /// Print progress (-v) or debug output (-vv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run(cli: Cli) -> Result<bool, ConvertError> {
    let config = match &cli.config {
        Some(path) => ConverterConfig::load_from(path)?,
        None => ConverterConfig::load()?,
    };

    let mut builder = BatchConverter::builder()
        .input_dir(&cli.source_dir)
        .config(config);
    if let Some(output) = cli.output {
        builder = builder.output_dir(output);
    }
    let converter = builder.build()?;

    let report = converter.run()?;

    println!();
    println!("Conversion complete!");
    println!(
        "Generated {} recipe files in {}",
        report.processed(),
        converter.output_dir().display()
    );
    if !report.skipped.is_empty() {
        println!("{} skipped:", report.skipped.len());
        for skipped in &report.skipped {
            println!("  {}: {}", skipped.path.display(), skipped.error);
        }
    }

    if report.is_success() {
        println!("To import into Apple Notes:");
        println!("1. Open Apple Notes");
        println!("2. Select a folder or create a new one");
        println!("3. Go to File > Import to Notes");
        println!("4. Select the folder: {}", converter.output_dir().display());
    }

    Ok(report.is_success())
}

/// Exit status for a finished run: failure on a fatal error or when no
/// recipe was converted
fn exit_code(outcome: Result<bool, ConvertError>) -> ExitCode {
    match outcome {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => {
            error!("No recipes were converted");
            ExitCode::FAILURE
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    exit_code(run(cli))
}

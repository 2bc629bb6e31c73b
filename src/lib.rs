//! Yoloprep: class-folder image datasets to YOLO detection datasets.
//!
//! Yoloprep takes a source tree with one directory per class label
//! (`dataset/<category>/*.jpg`) and produces an Ultralytics-style dataset:
//! seeded train/val/test splits, one synthetic full-frame bounding box per
//! image, and a YAML training manifest.
//!
//! # Modules
//!
//! - [`scan`]: per-category image counting
//! - [`plan`]: pure, deterministic split planning
//! - [`convert`]: applying a plan to the filesystem
//! - [`verify`]: image/label consistency checking
//! - [`manifest`]: training manifest construction and serialization
//! - [`error`]: error types for yoloprep operations

pub mod archive;
pub mod categories;
pub mod convert;
pub mod error;
pub mod layout;
pub mod manifest;
pub mod plan;
pub mod scan;
pub mod verify;

use std::path::PathBuf;
use std::str::FromStr;

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;

pub use error::YoloPrepError;

use categories::CategoryList;
use layout::OutputLayout;
use manifest::DatasetManifest;
use plan::SplitFractions;

/// The yoloprep CLI application.
#[derive(Parser)]
#[command(name = "yoloprep")]
#[command(version, author, about)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Create the source category skeleton and the output split tree.
    Init(InitArgs),
    /// Extract a dataset ZIP archive into the source directory.
    Extract(ExtractArgs),
    /// Count images per category in the source tree.
    Scan(ScanArgs),
    /// Convert the source tree into a YOLO dataset, verify it, and write
    /// the training manifest.
    Convert(ConvertArgs),
    /// Check an existing output tree for image/label consistency.
    Verify(VerifyArgs),
}

/// Category selection shared by most subcommands.
#[derive(clap::Args)]
struct CategoryArgs {
    /// Ordered class labels; position defines the class index.
    #[arg(long, value_delimiter = ',')]
    categories: Vec<String>,
}

impl CategoryArgs {
    fn resolve(&self) -> Result<CategoryList, YoloPrepError> {
        if self.categories.is_empty() {
            Ok(CategoryList::default_waste())
        } else {
            CategoryList::new(self.categories.clone())
        }
    }
}

/// Report rendering format.
#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(clap::Args)]
struct InitArgs {
    /// Source dataset root.
    #[arg(long, default_value = "dataset")]
    source: PathBuf,

    /// Output dataset root.
    #[arg(long, default_value = "yolo_dataset")]
    out: PathBuf,

    #[command(flatten)]
    categories: CategoryArgs,
}

#[derive(clap::Args)]
struct ExtractArgs {
    /// ZIP archive containing category folders.
    archive: PathBuf,

    /// Source dataset root to extract into.
    #[arg(long, default_value = "dataset")]
    source: PathBuf,
}

#[derive(clap::Args)]
struct ScanArgs {
    /// Source dataset root.
    #[arg(long, default_value = "dataset")]
    source: PathBuf,

    #[command(flatten)]
    categories: CategoryArgs,

    /// Output format for the report.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    output: OutputFormat,
}

#[derive(clap::Args)]
struct ConvertArgs {
    /// Source dataset root.
    #[arg(long, default_value = "dataset")]
    source: PathBuf,

    /// Output dataset root.
    #[arg(long, default_value = "yolo_dataset")]
    out: PathBuf,

    #[command(flatten)]
    categories: CategoryArgs,

    /// Seed for the per-category shuffle.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Fraction of each category assigned to training.
    #[arg(long = "train-size", default_value_t = 0.7, value_parser = validate_size)]
    train_size: f64,

    /// Fraction of each category assigned to validation.
    #[arg(long = "val-size", default_value_t = 0.2, value_parser = validate_size)]
    val_size: f64,

    /// Where to write the training manifest.
    #[arg(long, default_value = "waste_classification.yaml")]
    manifest: PathBuf,

    /// Output format for the reports.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    output: OutputFormat,
}

#[derive(clap::Args)]
struct VerifyArgs {
    /// Output dataset root to check.
    #[arg(long, default_value = "yolo_dataset")]
    out: PathBuf,

    /// Output format for the report.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    output: OutputFormat,
}

// Validate that a split fraction is between 0.0 and 1.0
fn validate_size(s: &str) -> Result<f64, String> {
    match f64::from_str(s) {
        Ok(val) if (0.0..=1.0).contains(&val) => Ok(val),
        _ => Err("SIZE must be between 0.0 and 1.0".to_string()),
    }
}

/// Run the yoloprep CLI.
///
/// This is the main entry point for the CLI, called from `main.rs`.
pub fn run() -> Result<(), YoloPrepError> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init(args)) => run_init(args),
        Some(Commands::Extract(args)) => run_extract(args),
        Some(Commands::Scan(args)) => run_scan(args),
        Some(Commands::Convert(args)) => run_convert(args),
        Some(Commands::Verify(args)) => run_verify(args),
        None => {
            println!("yoloprep {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Convert class-per-folder image datasets into YOLO datasets.");
            println!();
            println!("Run 'yoloprep --help' for usage information.");
            Ok(())
        }
    }
}

fn run_init(args: InitArgs) -> Result<(), YoloPrepError> {
    let categories = args.categories.resolve()?;

    layout::create_source_skeleton(&args.source, categories.names())?;
    OutputLayout::new(&args.out).create()?;

    println!(
        "Created {} category folder(s) under {} and the split tree under {}",
        categories.len(),
        args.source.display(),
        args.out.display()
    );
    Ok(())
}

fn run_extract(args: ExtractArgs) -> Result<(), YoloPrepError> {
    let count = archive::extract(&args.archive, &args.source)?;
    println!(
        "Extracted {} file(s) from {} into {}",
        count,
        args.archive.display(),
        args.source.display()
    );
    Ok(())
}

fn run_scan(args: ScanArgs) -> Result<(), YoloPrepError> {
    let categories = args.categories.resolve()?;
    let report = scan::scan(&categories, &args.source);
    print_report(&report, args.output)
}

fn run_convert(args: ConvertArgs) -> Result<(), YoloPrepError> {
    let categories = args.categories.resolve()?;
    let fractions = SplitFractions::new(args.train_size, args.val_size)?;
    let out = OutputLayout::new(&args.out);

    let convert_report = convert::convert(&categories, &args.source, &out, fractions, args.seed)?;
    let verify_report = verify::verify(&out);

    let manifest =
        DatasetManifest::for_dataset(&args.out.display().to_string(), &categories)?;
    manifest.write(&args.manifest)?;

    match args.output {
        OutputFormat::Text => {
            print!("{}", convert_report);
            println!();
            print!("{}", verify_report);
            println!("Manifest written to {}", args.manifest.display());
        }
        OutputFormat::Json => {
            let combined = ConvertOutput {
                convert: convert_report,
                verify: verify_report,
                manifest: args.manifest.display().to_string(),
            };
            println!(
                "{}",
                serde_json::to_string_pretty(&combined).expect("reports serialize to JSON")
            );
        }
    }

    Ok(())
}

fn run_verify(args: VerifyArgs) -> Result<(), YoloPrepError> {
    let report = verify::verify(&OutputLayout::new(&args.out));
    print_report(&report, args.output)
}

/// Combined JSON payload for the convert subcommand.
#[derive(Serialize)]
struct ConvertOutput {
    convert: convert::ConvertReport,
    verify: verify::VerifyReport,
    manifest: String,
}

fn print_report<R: Serialize + std::fmt::Display>(
    report: &R,
    format: OutputFormat,
) -> Result<(), YoloPrepError> {
    match format {
        OutputFormat::Text => print!("{}", report),
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(report).expect("reports serialize to JSON")
        ),
    }
    Ok(())
}

use anyhow::{bail, Context};
use clap::{Parser, ValueHint};
use std::{io, path::PathBuf};
use tabular_processor::processors::{detect_processor, Format, ReportFormat};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to a file that holds tabular records with a header line.
    ///
    /// Supported file formats: CSV (`;`, `,` or `|` delimited), TXT (whitespace delimited)
    #[arg(value_hint = ValueHint::FilePath)]
    path: PathBuf,

    /// Input format. `auto` picks the format based on the file extension.
    #[arg(long, value_enum, default_value_t = Format::Auto)]
    format: Format,

    /// How the result is printed.
    #[arg(long, value_enum, default_value_t = ReportFormat::Table)]
    report: ReportFormat,
}

fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::ERROR)
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let mut processor = detect_processor(&cli.path, cli.format, cli.report, io::stdout())
        .context("unable to pick a processor for the input file")?;

    if !processor.read() {
        bail!("unable to read input file {}", cli.path.display());
    }
    processor.run().context("processing input file failed")?;
    processor.print_result().context("printing result failed")
}

//! Command line driver: extract a payroll register to JSON.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use payroll_extract::config::{Layout, LayoutLoader};
use payroll_extract::error::ExtractResult;
use payroll_extract::extractor::DataExtractor;
use payroll_extract::report::render_table;
use payroll_extract::source;

#[derive(Parser)]
#[command(name = "payroll-extract")]
#[command(version, about = "Extract employee earnings from a payroll register PDF", long_about = None)]
struct Cli {
    /// Register to read (.pdf, or .txt with form feeds between pages)
    #[arg(default_value = "invoice.pdf")]
    input: PathBuf,

    /// Where to write the JSON output
    #[arg(long, short, default_value = "output.json")]
    output: PathBuf,

    /// YAML file overriding the register line patterns
    #[arg(long)]
    layout: Option<PathBuf>,

    /// Skip printing the earnings table
    #[arg(long)]
    no_table: bool,

    /// Detailed logging (repeat for debug output)
    #[arg(long, short, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_layout(path: Option<&Path>) -> ExtractResult<Layout> {
    match path {
        Some(path) => Layout::compile(LayoutLoader::load(path)?.config()),
        None => Ok(Layout::standard()),
    }
}

fn run(cli: &Cli) -> ExtractResult<()> {
    let layout = load_layout(cli.layout.as_deref())?;
    let document = source::open(&cli.input)?;

    let result = DataExtractor::new(layout).extract(&*document)?;

    if !cli.no_table {
        print!("{}", render_table(&result));
    }

    DataExtractor::write_json(&result, &cli.output)?;
    println!("\n✓ JSON exported to: {}", cli.output.display());

    Ok(())
}

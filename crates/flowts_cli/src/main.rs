//! flowts: print Flow type declarations as TypeScript.
//!
//! Usage:
//!   flowts [options] <file>...
//!
//! Each input is the JSON AST the Flow parser produces for one file.

use clap::Parser as ClapParser;
use flowts_core::StringInterner;
use flowts_emitter::{EmitResult, Emitter};
use flowts_options::FlowTsOptions;
use miette::{miette, IntoDiagnostic, Result, WrapErr};
use rayon::prelude::*;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_OPTIONS_FILE: &str = "flowts.json";

#[derive(ClapParser, Debug)]
#[command(name = "flowts", version, about = "flowts - print Flow type declarations as TypeScript")]
struct Cli {
    /// JSON AST files to print.
    #[arg(value_name = "FILE", required = true)]
    files: Vec<PathBuf>,

    /// Path to flowts.json.
    #[arg(short = 'p', long = "project")]
    project: Option<PathBuf>,

    /// Spell optional types as `ReactNull | T` instead of `undefined | T`.
    #[arg(long = "useReactNull")]
    use_react_null: bool,

    /// Export every type alias.
    #[arg(long = "forceExport")]
    force_export: bool,

    /// Redirect output files to the directory.
    #[arg(long = "outDir")]
    out_dir: Option<String>,

    /// Extension for output files.
    #[arg(long = "outExtension")]
    out_extension: Option<String>,

    /// Print to stdout instead of writing files.
    #[arg(long)]
    stdout: bool,

    /// Log pipeline progress to stderr.
    #[arg(short = 'v', long)]
    verbose: bool,
}

impl Cli {
    /// Options given on the command line. Flags only ever switch things on,
    /// so an absent flag leaves the project file's value in place.
    fn overrides(&self) -> FlowTsOptions {
        FlowTsOptions {
            use_react_null: self.use_react_null.then_some(true),
            force_export: self.force_export.then_some(true),
            out_dir: self.out_dir.clone(),
            out_extension: self.out_extension.clone(),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let options = load_options(&cli)?;
    tracing::debug!(?options, "resolved options");
    let emitter = Emitter::from_options(&options);

    run(&cli, &emitter, &mut std::io::stdout().lock())
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    if tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .is_err()
    {
        eprintln!("Warning: tracing subscriber already initialized");
    }
}

/// The project file (explicit, or `flowts.json` in the working directory)
/// with command-line flags layered on top.
fn load_options(cli: &Cli) -> Result<FlowTsOptions> {
    let file_options = match cli.project {
        Some(ref project) => flowts_options::parse_options_file(project).into_diagnostic()?,
        None if Path::new(DEFAULT_OPTIONS_FILE).exists() => {
            flowts_options::parse_options_file(DEFAULT_OPTIONS_FILE).into_diagnostic()?
        }
        None => FlowTsOptions::default(),
    };
    Ok(file_options.merge(cli.overrides()))
}

/// Emit every input in parallel, then report in input order. Printed text
/// goes to `out` under `--stdout`; otherwise each result is written to its
/// output file. One failed file does not stop the others.
fn run(cli: &Cli, emitter: &Emitter, out: &mut impl Write) -> Result<()> {
    let interner = StringInterner::new();
    let results: Vec<_> = cli
        .files
        .par_iter()
        .map(|file| emitter.emit_file(file, &interner))
        .collect();

    let mut failures = 0usize;
    for result in results {
        let outcome = match result {
            Ok(result) if cli.stdout => out.write_all(result.ts_content.as_bytes()).into_diagnostic(),
            Ok(result) => write_result(emitter, &result),
            Err(e) => Err(e).into_diagnostic(),
        };
        if let Err(report) = outcome {
            failures += 1;
            eprintln!("{:?}", report);
        }
    }

    if failures > 0 {
        return Err(miette!(
            "{} of {} file{} failed",
            failures,
            cli.files.len(),
            if cli.files.len() == 1 { "" } else { "s" }
        ));
    }
    Ok(())
}

fn write_result(emitter: &Emitter, result: &EmitResult) -> Result<()> {
    let path = &result.output_file.path;
    emitter
        .write_output_files(result)
        .into_diagnostic()
        .wrap_err_with(|| format!("cannot write '{}'", path.display()))?;
    tracing::info!(output = %path.display(), "wrote");
    Ok(())
}

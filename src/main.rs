//! CLI for pptx2md - PowerPoint to Markdown converter

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

/// Convert a PowerPoint presentation (.pptx) into Markdown.
#[derive(Parser, Debug)]
#[command(name = "convert")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input PowerPoint file (.pptx)
    input: PathBuf,

    /// Output Markdown file (default: input path with a .md extension)
    output: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            // --help and --version are reported through clap's error path too
            return if e.use_stderr() { ExitCode::FAILURE } else { ExitCode::SUCCESS };
        }
    };

    let default_filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let report = pptx2md::convert(&args.input, args.output.as_deref());
    if report.success {
        println!("{}", report.message);
        ExitCode::SUCCESS
    } else {
        eprintln!("{}", report.message);
        ExitCode::FAILURE
    }
}

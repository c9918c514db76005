/// Wordcount - count the letter frequency in a text
///
/// The main entry point for the wordcount application. It parses command-line
/// arguments, sets up logging and hands the run over to the library.

use anyhow::{Result, anyhow};
use clap::{Parser, ArgAction};
use log::LevelFilter;
use std::fs::File;
use std::io;
use std::path::PathBuf;

use wordcount::app::{self, RunOptions};
use wordcount::TerminalBarChart;

/// Command line argument structure
#[derive(Parser, Debug)]
#[command(
    name = "wordcount",
    version,
    about = "Count the letter frequency in a text"
)]
struct Args {
    /// The name of the file of your choice
    infile: PathBuf,

    /// Plot a bar chart of the character frequencies
    #[arg(short = 'p', long = "plot", action = ArgAction::SetTrue)]
    plot: bool,

    /// Print out basic book stats (number of characters, number of words, number of lines)
    #[arg(short = 's', long = "stats", action = ArgAction::SetTrue)]
    stats: bool,

    /// Skip the parts of the text that do not pertain to the book (preamble and
    /// license); the argument signals the end of the preamble and the start of
    /// the license section
    #[arg(short = 'k', long = "skip", value_name = "MARKER")]
    skip: Option<String>,

    /// Export the report to a JSON file
    #[arg(long = "json")]
    json: Option<PathBuf>,

    /// Set logging level (default: INFO)
    #[arg(long = "log-level", default_value = "info")]
    log_level: LevelFilter,

    /// Write log output to this file instead of stderr
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    setup_logging(&args)?;

    if matches!(args.skip.as_deref(), Some("")) {
        return Err(anyhow!("The --skip marker must not be empty"));
    }

    let options = RunOptions {
        input: args.infile,
        plot: args.plot,
        stats: args.stats,
        skip: args.skip,
        json: args.json,
    };

    let stdout = io::stdout();
    let mut chart = TerminalBarChart::new(io::stdout());
    app::run(&options, &mut stdout.lock(), &mut chart)?;

    Ok(())
}

/// Set up logging to stderr or to the requested log file
fn setup_logging(args: &Args) -> Result<()> {
    let mut builder = env_logger::Builder::new();

    builder.filter_level(args.log_level);

    builder.format(|buf, record| {
        use std::io::Write;
        use chrono::Local;
        writeln!(
            buf,
            "{} - {} - {} - {}",
            Local::now().format("%Y-%m-%d %H:%M:%S"),
            record.level(),
            record.target(),
            record.args()
        )
    });

    if let Some(log_file) = &args.log_file {
        let file = File::create(log_file)
            .map_err(|e| anyhow!("Cannot create log file {}: {}", log_file.display(), e))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.init();

    Ok(())
}

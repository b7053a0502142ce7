//! Bestiary CLI entry point.

use std::io::{IsTerminal, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use bestiary_foundation::Result;
use bestiary_runtime::{DEFAULT_PROMPT, LineEditor, Repl, StdinEditor};
use clap::Parser;
use log::{LevelFilter, debug};

#[derive(Parser)]
#[command(name = "bestiary")]
#[command(about = "Line command interpreter for Geralt's alchemy and bestiary")]
#[command(version)]
struct Cli {
    /// Command files to run before the interactive session
    files: Vec<PathBuf>,

    /// Exit after running the command files
    #[arg(short, long)]
    batch: bool,

    /// Prompt written before each line
    #[arg(long, default_value = DEFAULT_PROMPT)]
    prompt: String,

    /// Read plain lines from stdin even on a terminal
    #[arg(long)]
    plain: bool,

    /// Verbose logging (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbosity: u8) {
    let mut builder = env_logger::Builder::new();
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    builder.filter_level(level);
    if verbosity == 0 {
        if let Ok(filters) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filters);
        }
    }
    builder.target(env_logger::Target::Stderr);
    builder.format(|fmt, record| writeln!(fmt, "[{}] {}", record.level(), record.args()));
    let _ = builder.try_init();
}

fn run(cli: &Cli) -> Result<()> {
    if cli.plain || !std::io::stdin().is_terminal() {
        debug!("using plain stdin editor");
        drive(Repl::with_editor(StdinEditor::new()), cli)
    } else {
        drive(Repl::new()?.with_banner(), cli)
    }
}

fn drive<E: LineEditor>(repl: Repl<E>, cli: &Cli) -> Result<()> {
    let mut repl = repl.with_prompt(cli.prompt.clone());

    for file in &cli.files {
        if !repl.eval_file(file)? {
            return Ok(());
        }
    }

    if cli.batch {
        return Ok(());
    }

    repl.run()
}

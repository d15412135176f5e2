use std::io::{self, IsTerminal};

use clap::Parser;
use quizgen::terminal::Console;
use quizgen::{App, DEFAULT_OUTPUT_PATH, QuestionKind, Settings};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about = "Interactively build a quiz question JSON file", long_about = None)]
struct Args {
    /// File name offered as the default at the final prompt
    #[arg(short, long, env = "QUIZGEN_OUTPUT", default_value = DEFAULT_OUTPUT_PATH)]
    output: String,

    /// Question type offered as the default at each type prompt
    #[arg(short = 't', long, default_value = "same-letter-mc")]
    default_type: QuestionKind,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Log debug events to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn setup_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() {
    let args = Args::parse();
    setup_logging(args.verbose);

    let color = !args.no_color && io::stdout().is_terminal();
    let settings = Settings {
        default_kind: args.default_type,
        default_output: args.output,
    };

    let app = App::new(Console::stdio(color), settings);
    if let Err(e) = app.run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

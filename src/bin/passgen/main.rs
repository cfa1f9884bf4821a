use std::io;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use passgen::CharClass;

mod form;
mod pw;
mod table;

#[derive(Parser)]
#[command(about = "Generate random passwords from selected character classes")]
struct Args {
    /// Settings file with the default length and character classes.
    #[arg(long, global = true, env = "PASSGEN_CONFIG")]
    config: Option<PathBuf>,
    /// Log what the generator is doing to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Open the interactive password form (the default).
    Form,
    /// Generate passwords without prompting, printing one per line.
    Generate {
        /// Password length, 1 to 128.
        #[arg(short, long)]
        length: Option<String>,
        /// Character class to draw from; repeat to select several. Defaults to the configured
        /// classes.
        #[arg(short, long = "class")]
        classes: Vec<CharClass>,
        /// How many passwords to generate.
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,
        /// Copy to the clipboard instead of printing.
        #[arg(long)]
        copy: bool,
    },
}

fn run() -> Result<(), ProgError> {
    let args = Args::parse();
    init_logging(args.verbose);

    let settings = passgen::Settings::load_or_default(args.config.as_deref())?;

    match args.command.unwrap_or(Command::Form) {
        Command::Form => form::run_form(settings.form_state())?,
        Command::Generate {
            length,
            classes,
            count,
            copy,
        } => pw::generate(&settings, length.as_deref(), &classes, count, copy)?,
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    match run() {
        Ok(()) => (),
        Err(ProgError::Other(err)) => {
            eprintln!("{err:?}");
            process::exit(1);
        }
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    }
}

#[derive(Debug, thiserror::Error)]
enum ProgError {
    #[error("--count must be at least 1.")]
    NoPasswordsRequested,
    #[error("{0}")]
    Passgen(passgen::PassgenError),
    #[error(transparent)]
    Other(anyhow::Error),
}

impl From<anyhow::Error> for ProgError {
    fn from(err: anyhow::Error) -> ProgError {
        ProgError::Other(err)
    }
}

impl From<passgen::PassgenError> for ProgError {
    fn from(err: passgen::PassgenError) -> ProgError {
        ProgError::Passgen(err)
    }
}

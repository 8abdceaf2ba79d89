use clap::error::{ContextKind, ErrorKind};
use clap::Parser;
use pocket_enigma::cli::{run_cipher, show_wheels, usage, CipherOptions};
use pocket_enigma::EnigmaError;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Version info from build.rs
const VERSION: &str = env!("CARGO_PKG_VERSION");
const PROFILE: &str = env!("POCKET_ENIGMA_PROFILE");
const GIT_HASH: &str = env!("POCKET_ENIGMA_GIT_HASH");

#[derive(Parser)]
#[command(name = "pocket-enigma")]
#[command(author, about = "Single-wheel pocket Enigma cipher simulator", long_about = None)]
#[command(override_usage = "pocket-enigma [OPTIONS] <wheel_no> <start_letter> <step> <message>...")]
#[command(allow_negative_numbers = true)]
struct Cli {
    /// Print version
    #[arg(short = 'V', long)]
    version: bool,

    /// Log cipher settings and per-letter steps to stderr
    #[arg(short, long)]
    verbose: bool,

    /// List the available wheels
    #[arg(long)]
    wheels: bool,

    /// Output group size (0 prints the message ungrouped)
    #[arg(long, default_value_t = 5)]
    group: usize,

    /// <wheel_no> <start_letter> <step> <message>...
    /// Everything from the first of these on is taken literally
    #[arg(value_name = "ARGS", trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Turn a clap parse failure into an error line of our own
fn usage_error(err: &clap::Error) -> EnigmaError {
    let kind = err.kind().as_str().unwrap_or("invalid arguments");
    match err.get(ContextKind::InvalidArg) {
        Some(arg) => EnigmaError::Usage(format!("{}: {}", kind, arg)),
        None => EnigmaError::Usage(kind.to_string()),
    }
}

fn fail(err: &EnigmaError) -> ExitCode {
    eprint!("{}", usage());
    eprintln!("error: {}", err);
    eprintln!();
    ExitCode::FAILURE
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            if e.print().is_err() {
                return ExitCode::FAILURE;
            }
            return ExitCode::SUCCESS;
        }
        Err(e) => return fail(&usage_error(&e)),
    };

    if cli.version {
        println!("pocket-enigma {} {} ({})", PROFILE, VERSION, GIT_HASH);
        return ExitCode::SUCCESS;
    }

    init_logging(cli.verbose);

    if cli.wheels {
        print!("{}", show_wheels());
        return ExitCode::SUCCESS;
    }

    let options = CipherOptions { group: cli.group };
    match run_cipher(&cli.args, &options) {
        Ok(result) => {
            println!("{}", result);
            ExitCode::SUCCESS
        }
        Err(e) => fail(&e),
    }
}

mod analyze;
mod stats;

use analyze::{report, search, SearchOptions};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "codebreaker")]
#[command(about = "Recover pocket Enigma settings from a ciphertext by exhaustive search")]
struct Cli {
    /// Ciphertext words (group spaces are ignored)
    #[arg(required = true)]
    ciphertext: Vec<String>,

    /// Number of candidates to show
    #[arg(long, default_value_t = 5)]
    top: usize,

    /// Only try this wheel
    #[arg(long)]
    wheel: Option<usize>,

    /// Print candidates as JSON
    #[arg(long)]
    json: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default = if cli.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let ciphertext = cli.ciphertext.concat();
    let options = SearchOptions {
        top: cli.top,
        wheel: cli.wheel,
    };
    let candidates = search(&ciphertext, &options)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&candidates)?);
    } else {
        print!("{}", report(&ciphertext, &candidates)?);
    }

    Ok(())
}

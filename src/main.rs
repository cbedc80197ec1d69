use clap::Parser as ClapParser;
use jsq::cli::{self, RunOptions, RunResult};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(ClapParser, Debug)]
#[command(name = "jsq")]
#[command(about = "jsq - select, slice and restructure json documents")]
#[command(version)]
#[command(
    after_help = "All diagnostics and errors are written to stderr and the json output \
                  is written to stdout, so it is safe to pipe the output to a file or command."
)]
struct Cli {
    /// Query selectors to apply
    selectors: String,

    /// Json file to use (if not given stdin will be used)
    file: Option<String>,

    /// Only parse the json and the selectors, then quit
    #[arg(long)]
    only_parse: bool,

    /// Print debug information to stderr
    #[arg(long)]
    debug: bool,

    /// Pretty-print the output json
    #[arg(short, long)]
    pretty: bool,
}

fn init_tracing(debug: bool) {
    let default_level = if debug { "jsq=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.debug);
    debug!("arguments: {:?}", cli);

    let options = RunOptions {
        selectors: cli.selectors,
        file: cli.file,
        only_parse: cli.only_parse,
        pretty: cli.pretty,
    };

    match cli::run(&options) {
        Ok(RunResult::Parsed) => {
            eprintln!("quitting after parse because of --only-parse");
        }
        Ok(RunResult::Output(json)) => {
            println!("{}", json);
        }
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}

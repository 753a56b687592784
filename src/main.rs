use clap::Parser;
use hashwatch::checker::compare;
use hashwatch::{logging, report, Error, SnapshotStore};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "hashwatch")]
#[command(about = "File integrity checker using SHA-256")]
struct Cli {
    /// Directory to scan
    directory: PathBuf,
    /// Snapshot file holding the baseline hashes
    #[arg(long, env = "HASHWATCH_SNAPSHOT", default_value = hashwatch::snapshot::DEFAULT_SNAPSHOT)]
    snapshot: PathBuf,
    /// Log progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(Error::InvalidDirectory(_)) => {
            eprintln!("Error: The provided path is not a valid directory.");
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Error> {
    let store = SnapshotStore::new(&cli.snapshot);
    let comparison = compare(&cli.directory, &store)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let printed = report::write_report(&mut out, &cli.directory, &comparison.result)
        .and_then(|()| out.flush());

    // The baseline is replaced even if stdout went away
    comparison.commit(&store)?;
    printed?;
    Ok(())
}

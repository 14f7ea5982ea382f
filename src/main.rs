use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use log::{debug, error};

use euler_bst::console::Console;
use euler_bst::{logger, Error};

/// Interactive exercises: build a binary search tree and search/delete in it,
/// then build a graph and look for an Eulerian circuit or path in it.
///
/// Without a subcommand both sessions run, the tree first.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Which session to run
    #[command(subcommand)]
    session: Option<Session>,

    /// Whitespace-separated integers loaded when the tree is built from a file
    #[arg(short, long, value_name = "FILE", default_value = "keys.txt")]
    keys_file: PathBuf,

    /// Log spec, e.g. "debug" or "euler_bst::graph=trace" (overrides -v)
    #[arg(short, long, value_name = "LEVEL")]
    log_level: Option<String>,

    /// Also write logs to rotated files in this directory
    #[arg(long, value_name = "DIR")]
    log_dir: Option<PathBuf>,

    /// Verbosity, repeat for more
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Session {
    /// Only the binary search tree session
    Tree,
    /// Only the Eulerian graph session
    Graph,
    /// The tree session followed by the graph session
    All,
}

fn run(args: &Args) -> Result<(), Error> {
    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());

    let session = args.session.unwrap_or(Session::All);
    debug!("running {:?} session(s)", session);
    if matches!(session, Session::Tree | Session::All) {
        console.run_tree_session(&args.keys_file)?;
    }
    if matches!(session, Session::Graph | Session::All) {
        console.run_graph_session()?;
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    let level = args
        .log_level
        .clone()
        .unwrap_or_else(|| logger::level_for(args.verbose).to_string());

    let _logger = match logger::configure(&level, args.log_dir.as_deref()) {
        Ok(handle) => handle,
        Err(err) => {
            eprintln!("{}", Error::from(err));
            return ExitCode::FAILURE;
        }
    };

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}

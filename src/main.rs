use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use prefix_index::source::{load_usernames, read_usernames};
use prefix_index::PrefixIndex;
use tracing::{debug, info, Level};

/// Usernames indexed when no other input is given.
const DEMO_USERNAMES: [&str; 5] = ["alice", "albert", "bob", "carol", "caroline"];

/// Exact and prefix lookup over a list of usernames.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Usernames to index. Stdin is read only when none are given and no --file is set.
    #[arg(name = "USERNAMES")]
    usernames: Vec<String>,

    /// Read additional usernames from a file, one per line.
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Report whether KEY is a stored username.
    #[arg(short, long, value_name = "KEY")]
    contains: Vec<String>,

    /// List stored usernames starting with PREFIX.
    #[arg(short, long, value_name = "PREFIX")]
    prefix: Vec<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn log_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Gathers usernames from the arguments, `--file`, and (only when both are
/// absent) `stdin`, falling back to the demo list.
fn collect_usernames(cli: &Cli, stdin: Option<impl BufRead>) -> anyhow::Result<Vec<String>> {
    let mut usernames = cli.usernames.clone();
    if let Some(path) = &cli.file {
        let loaded = load_usernames(path)
            .with_context(|| format!("could not load usernames from {}", path.display()))?;
        usernames.extend(loaded);
    } else if usernames.is_empty() {
        if let Some(stdin) = stdin {
            let piped = read_usernames(stdin).context("could not read usernames from stdin")?;
            usernames.extend(piped);
        }
    }

    if usernames.is_empty() {
        info!("no usernames given, using the demo list");
        usernames.extend(DEMO_USERNAMES.iter().map(|s| s.to_string()));
    }
    Ok(usernames)
}

fn run(cli: &Cli, stdin: Option<impl BufRead>, out: &mut impl Write) -> anyhow::Result<()> {
    let usernames = collect_usernames(cli, stdin)?;
    let index: PrefixIndex = usernames.iter().collect();
    info!(inputs = usernames.len(), stored = index.len(), "index built");

    if cli.contains.is_empty() && cli.prefix.is_empty() {
        writeln!(out, "stored {} usernames", index.len())?;
        return Ok(());
    }

    for key in &cli.contains {
        writeln!(out, "contains {key}: {}", index.contains(key))?;
    }
    for prefix in &cli.prefix {
        let mut matches = index.search_by_prefix(prefix);
        debug!(prefix = %prefix, matches = matches.len(), "prefix search");
        matches.sort();
        writeln!(out, "prefix {prefix}: [{}]", matches.join(", "))?;
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(log_level(cli.verbose))
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    let piped = (!stdin.is_terminal()).then(|| stdin.lock());
    run(&cli, piped, &mut io::stdout().lock())
}

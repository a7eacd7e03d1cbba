//! Word Ladder CLI
//!
//! Solves a single query from the command line, or reads queries from
//! stdin when no words are given.

use anyhow::Context;
use clap::{Parser, ValueEnum};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::EnvFilter;
use word_ladder::{normalize_word, LadderSearch, Lexicon, NeighborStrategy, SearchReport};

const BANNER_TEXT: &str = "\
Word Ladder
===========
Enter two words of the same length to find the shortest ladder between them.
Type 'help' for commands.";

const HELP_TEXT: &str = "\
Commands:
  <first> <last>         Find the shortest ladder from <first> to <last>
  neighbors <word>       List dictionary words one letter away from <word>
  strategy <name>        Switch neighbor discovery (scan | substitution)
  help                   Show this help
  quit                   Exit";

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Dictionary file of whitespace-separated words
    #[arg(value_name = "DICTIONARY")]
    dictionary: PathBuf,

    /// First word of the ladder (omit both words for interactive mode)
    #[arg(requires = "last")]
    first: Option<String>,

    /// Final word of the ladder
    last: Option<String>,

    /// How one-letter neighbors are discovered
    #[arg(long, value_enum, default_value_t = NeighborStrategy::default().into())]
    strategy: Strategy,

    /// Give up after expanding this many words
    #[arg(long, value_name = "N")]
    max_expansions: Option<usize>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Strategy {
    Scan,
    Substitution,
}

impl From<Strategy> for NeighborStrategy {
    fn from(strategy: Strategy) -> Self {
        match strategy {
            Strategy::Scan => NeighborStrategy::Scan,
            Strategy::Substitution => NeighborStrategy::Substitution,
        }
    }
}

impl From<NeighborStrategy> for Strategy {
    fn from(strategy: NeighborStrategy) -> Self {
        match strategy {
            NeighborStrategy::Scan => Strategy::Scan,
            NeighborStrategy::Substitution => Strategy::Substitution,
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy(),
        )
        .with_writer(io::stderr)
        .init();
}

fn load_lexicon(cli: &Cli, strategy: NeighborStrategy, word_length: usize) -> anyhow::Result<Lexicon> {
    let lexicon = Lexicon::load(&cli.dictionary, word_length)
        .context("Unable to open dictionary file")?;
    Ok(lexicon.with_strategy(strategy))
}

fn cached_lexicon<'c>(
    cache: &'c mut HashMap<usize, Lexicon>,
    cli: &Cli,
    strategy: NeighborStrategy,
    word_length: usize,
) -> anyhow::Result<&'c Lexicon> {
    let lexicon = match cache.entry(word_length) {
        Entry::Occupied(slot) => slot.into_mut(),
        Entry::Vacant(slot) => slot.insert(load_lexicon(cli, strategy, word_length)?),
    };
    Ok(&*lexicon)
}

/// Print the outcome of a search. Returns false when the result was
/// rejected by the ladder validator.
fn present(lexicon: &Lexicon, first: &str, last: &str, report: &SearchReport) -> bool {
    let ladder = &report.ladder;

    if ladder.is_empty() {
        if first == last {
            println!("The first and final word are the same; no ladder is needed.");
        } else if !lexicon.contains(first) {
            println!("{} is not in the dictionary.", first);
        } else if !lexicon.contains(last) {
            println!("{} is not in the dictionary.", last);
        } else if report.budget_exhausted {
            println!(
                "Gave up after expanding {} words without reaching {}.",
                report.expanded, last
            );
        } else {
            println!("No ladder exists between {} and {}.", first, last);
        }
        return true;
    }

    if !ladder.is_valid() {
        eprintln!("Warning: search produced an invalid ladder: {}", ladder);
        return false;
    }

    println!("Shortest ladder ({} steps): {}", ladder.steps(), ladder);
    true
}

fn solve_once(cli: &Cli, first: &str, last: &str) -> anyhow::Result<ExitCode> {
    if first.chars().count() != last.chars().count() {
        eprintln!("The first and final word do not have the same length.");
        return Ok(ExitCode::FAILURE);
    }

    let first = normalize_word(first);
    let last = normalize_word(last);
    let lexicon = load_lexicon(cli, cli.strategy.into(), first.chars().count())?;

    let report = LadderSearch::new(&lexicon)
        .max_expansions(cli.max_expansions)
        .run(&first, &last);

    if present(&lexicon, &first, &last, &report) {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

fn run_interactive(cli: &Cli) -> anyhow::Result<ExitCode> {
    println!("{}", BANNER_TEXT);
    println!();

    let mut lexicons: HashMap<usize, Lexicon> = HashMap::new();
    let mut strategy: NeighborStrategy = cli.strategy.into();

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.is_empty() {
            continue;
        }

        match parts[0].to_lowercase().as_str() {
            "help" | "h" | "?" => {
                println!("{}", HELP_TEXT);
            }
            "quit" | "exit" | "q" => {
                println!("Goodbye!");
                break;
            }
            "neighbors" | "n" => {
                let Some(word) = parts.get(1) else {
                    println!("Usage: neighbors <word>");
                    continue;
                };
                let word = normalize_word(word);
                let lexicon = cached_lexicon(&mut lexicons, cli, strategy, word.chars().count())?;

                if !lexicon.contains(&word) {
                    println!("{} is not in the dictionary.", word);
                    continue;
                }
                let neighbors = lexicon.neighbors(&word);
                println!("{} neighbors of {}:", neighbors.len(), word);
                for (i, neighbor) in neighbors.iter().enumerate() {
                    if i > 0 && i % 10 == 0 {
                        println!();
                    }
                    print!("{:>8}", neighbor);
                }
                println!();
            }
            "strategy" => {
                let Some(name) = parts.get(1) else {
                    println!("Usage: strategy <scan|substitution>");
                    continue;
                };
                match Strategy::from_str(name, true) {
                    Ok(choice) => {
                        strategy = choice.into();
                        lexicons = lexicons
                            .into_iter()
                            .map(|(length, lexicon)| (length, lexicon.with_strategy(strategy)))
                            .collect();
                        println!("Neighbor strategy: {:?}", strategy);
                    }
                    Err(_) => {
                        println!("Unknown strategy: {}", name);
                        println!("Use 'scan' or 'substitution'.");
                    }
                }
            }
            _ if parts.len() == 2 => {
                if parts[0].chars().count() != parts[1].chars().count() {
                    println!("The first and final word do not have the same length.");
                    continue;
                }

                let first = normalize_word(parts[0]);
                let last = normalize_word(parts[1]);
                let lexicon = cached_lexicon(&mut lexicons, cli, strategy, first.chars().count())?;

                let started = std::time::Instant::now();
                let report = LadderSearch::new(lexicon)
                    .max_expansions(cli.max_expansions)
                    .run(&first, &last);
                let elapsed = started.elapsed();

                println!();
                present(lexicon, &first, &last, &report);
                println!(
                    "Expanded {} of {} words in {:.2?}.",
                    report.expanded,
                    lexicon.size(),
                    elapsed
                );
                println!();
            }
            _ => {
                println!("Unknown command: {}", parts[0]);
                println!("Type 'help' for available commands.");
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match (cli.first.as_deref(), cli.last.as_deref()) {
        (Some(first), Some(last)) => solve_once(&cli, first, last),
        _ => run_interactive(&cli),
    };

    match result {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}

//! Boggle Solver CLI
//!
//! Solve a single board, a file of boards, or boards typed at a prompt.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use boggle_solver::{load_sample_dictionary, score, Board, Results, Solver, SolverConfig, Trie};
use clap::{Args, Parser, Subcommand};
use log::warn;

#[derive(Parser)]
#[command(name = "boggle-solver")]
#[command(version, about = "Find and score every word on a Boggle board", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve one board
    Solve(SolveArgs),

    /// Solve every board in a file, one board per line
    Batch(BatchArgs),

    /// Print the score of each given word
    Score {
        /// Words to score
        words: Vec<String>,
    },
}

#[derive(Args)]
struct DictionaryArgs {
    /// Dictionary file with one word per line (defaults to the built-in sample)
    #[arg(short, long)]
    dict: Option<PathBuf>,

    /// Shortest word to report
    #[arg(long, default_value_t = boggle_solver::MIN_WORD_LENGTH)]
    min_length: usize,

    /// Treat a `q` cell as a plain `q` only
    #[arg(long)]
    no_qu: bool,
}

impl DictionaryArgs {
    fn solver(&self) -> Result<Solver> {
        let trie = match &self.dict {
            Some(path) => load_dictionary(path)?,
            None => load_sample_dictionary(),
        };
        let config = SolverConfig::default()
            .with_min_word_length(self.min_length)
            .with_expand_qu(!self.no_qu);
        Ok(Solver::with_config(trie, config))
    }
}

#[derive(Args)]
struct SolveArgs {
    #[command(flatten)]
    dictionary: DictionaryArgs,

    /// Board rows separated by `/`, e.g. `abcd/efgh/ijkl/mnop`
    board: String,

    /// Width of a flat board given without row separators
    #[arg(long, requires = "height")]
    width: Option<usize>,

    /// Height of a flat board given without row separators
    #[arg(long, requires = "width")]
    height: Option<usize>,

    /// List words by score instead of in discovery order
    #[arg(long)]
    sorted: bool,
}

#[derive(Args)]
struct BatchArgs {
    #[command(flatten)]
    dictionary: DictionaryArgs,

    /// File with one board per line, rows separated by `/`
    boards: PathBuf,
}

struct Spinner {
    running: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl Spinner {
    fn new(message: &'static str) -> Self {
        let running = Arc::new(AtomicBool::new(true));
        let running_clone = running.clone();
        let handle = thread::spawn(move || {
            let frames = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
            let mut i = 0;
            let mut stderr = io::stderr();
            while running_clone.load(Ordering::Relaxed) {
                let _ = write!(stderr, "\r{} {}", frames[i % frames.len()], message);
                let _ = stderr.flush();
                thread::sleep(Duration::from_millis(80));
                i += 1;
            }
            let _ = write!(stderr, "\r{}\r", " ".repeat(message.len() + 3));
            let _ = stderr.flush();
        });
        Self {
            running,
            handle: Some(handle),
        }
    }

    fn stop(mut self) {
        self.running.store(false, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.running.store(false, Ordering::Relaxed);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn load_dictionary(path: &Path) -> Result<Trie> {
    let trie = Trie::load(path)
        .with_context(|| format!("could not load dictionary {}", path.display()))?;
    if trie.is_empty() {
        warn!("dictionary {} contains no words", path.display());
    }
    Ok(trie)
}

fn print_results(results: &Results, sorted: bool) {
    let words: Vec<&str> = if sorted {
        results.sorted_words()
    } else {
        results.words().iter().map(String::as_str).collect()
    };
    for word in words {
        println!("{:>3}  {}", score(word), word);
    }
    println!();
    println!("{}", results);
}

fn run_solve(args: SolveArgs) -> Result<()> {
    let solver = args.dictionary.solver()?;
    let board = match (args.width, args.height) {
        (Some(width), Some(height)) => {
            Board::new(args.board.to_ascii_lowercase().into_bytes(), width, height)?
        }
        _ => Board::parse(&args.board)?,
    };

    println!("{}", board);
    println!();

    let start = Instant::now();
    let results = solver.solve(&board);
    let elapsed = start.elapsed();

    print_results(&results, args.sorted);
    println!("Time: {:.2?}", elapsed);
    Ok(())
}

fn run_batch(args: BatchArgs) -> Result<()> {
    let solver = args.dictionary.solver()?;
    let text = fs::read_to_string(&args.boards)
        .with_context(|| format!("could not read boards from {}", args.boards.display()))?;

    let boards = text
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            Board::parse(line).with_context(|| format!("invalid board on line {}", i + 1))
        })
        .collect::<Result<Vec<_>>>()?;

    let spinner = Spinner::new("Solving...");
    let start = Instant::now();
    let results = solver.solve_batch(&boards);
    let elapsed = start.elapsed();
    spinner.stop();

    let mut total_words = 0;
    let mut total_score = 0;
    for (i, result) in results.iter().enumerate() {
        println!("{:>5}  {}", i + 1, result);
        total_words += result.word_count();
        total_score += result.total_score();
    }
    println!("{}", "-".repeat(40));
    println!(
        "{} boards, {} words, {} points",
        results.len(),
        total_words,
        total_score
    );
    println!("Time: {:.2?}", elapsed);
    Ok(())
}

fn run_score(words: &[String]) {
    for word in words {
        let word = word.to_lowercase();
        println!("{:>3}  {}", score(&word), word);
    }
}

const HELP_TEXT: &str = "\
Enter a board as rows separated by '/' (e.g. catx/dogs/quad/rest).

Commands:
  dict <path>   load a dictionary file
  min <n>       set the shortest reported word length
  qu            toggle reading a q cell as qu
  help          show this message
  quit          exit";

fn run_interactive() -> Result<()> {
    println!("Boggle Solver");
    println!("Loading sample dictionary...");
    let mut solver = Solver::new(load_sample_dictionary());
    println!("Loaded {} words.", solver.trie().word_count());
    println!("Type 'help' for commands.");
    println!();

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
            "help" | "h" | "?" => println!("{}", HELP_TEXT),
            "quit" | "exit" => {
                println!("Goodbye!");
                break;
            }
            "dict" | "d" => {
                let Some(path) = parts.get(1) else {
                    println!("Usage: dict <path>");
                    continue;
                };
                match load_dictionary(Path::new(path)) {
                    Ok(trie) => {
                        println!("Loaded {} words.", trie.word_count());
                        solver = Solver::with_config(trie, solver.config());
                    }
                    Err(e) => println!("{:#}", e),
                }
            }
            "min" => match parts.get(1).and_then(|s| s.parse().ok()) {
                Some(length) => {
                    solver.set_config(solver.config().with_min_word_length(length));
                    println!("Shortest word: {}", length);
                }
                None => println!("Usage: min <n>"),
            },
            "qu" => {
                let enabled = !solver.config().expand_qu;
                solver.set_config(solver.config().with_expand_qu(enabled));
                println!("Q as QU: {}", if enabled { "ON" } else { "OFF" });
            }
            _ => match Board::parse(&parts.join("/")) {
                Ok(board) => {
                    println!();
                    println!("{}", board);
                    println!();
                    print_results(&solver.solve(&board), true);
                    println!();
                }
                Err(e) => println!("Invalid board: {}", e),
            },
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Some(Commands::Solve(args)) => run_solve(args),
        Some(Commands::Batch(args)) => run_batch(args),
        Some(Commands::Score { words }) => {
            if words.is_empty() {
                bail!("no words given");
            }
            run_score(&words);
            Ok(())
        }
        None => run_interactive(),
    }
}

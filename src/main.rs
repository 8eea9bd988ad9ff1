//! Absurdle - CLI
//!
//! Adversarial word game with a line-oriented mode, a TUI, and a few
//! non-interactive tools for inspecting the adversary.

use absurdle::{
    commands::{StressConfig, analyze_guess, prompt_line, replay, run_play, run_stress},
    config::{DEFAULT_WORD_LENGTH, GameConfig, parse_word_length},
    core::CandidateSet,
    game::Game,
    logging,
    output::{GlyphStyle, print_analysis_result, print_replay_result, print_stress_result},
};
use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "absurdle",
    about = "Adversarial word game: the answer is whatever you haven't ruled out yet",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary file of whitespace-separated words (asked for if omitted)
    #[arg(short, long, global = true)]
    dictionary: Option<PathBuf>,

    /// Word length to play with (asked for by `play` if omitted, otherwise 5)
    #[arg(short, long, global = true)]
    length: Option<usize>,

    /// How patterns are printed
    #[arg(short, long, global = true, value_enum, default_value_t = GlyphStyle::Emoji)]
    glyphs: GlyphStyle,

    /// Raise the log level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Line-oriented game (default)
    Play,

    /// Interactive TUI mode
    Tui,

    /// Play a fixed list of guesses and print the transcript
    Replay {
        /// Guesses, in order
        #[arg(required = true)]
        guesses: Vec<String>,
    },

    /// Show how a guess splits the candidate set
    Analyze {
        /// Guess to analyze
        guess: String,

        /// Number of patterns to list
        #[arg(long, default_value = "20")]
        limit: usize,
    },

    /// Play many random games to time the adversary
    Stress {
        /// Number of games
        #[arg(short = 'n', long, default_value = "100")]
        games: usize,

        /// Seed for the first game; game i uses seed + i
        #[arg(long, default_value = "0")]
        seed: u64,

        /// Give up on a game after this many guesses
        #[arg(long, default_value = "100")]
        max_turns: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let dictionary = match cli.dictionary {
        Some(path) => path,
        None => PathBuf::from(prompt_line("Enter dictionary file name: ")?),
    };

    // Default to the line-oriented game if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    let length = match (cli.length, &command) {
        (Some(length), _) => length,
        (None, Commands::Play) => {
            parse_word_length(&prompt_line("What length word would you like to guess? ")?)?
        }
        (None, _) => DEFAULT_WORD_LENGTH,
    };
    let config = GameConfig::new(dictionary, length).with_glyphs(cli.glyphs);
    let candidates = config.load_candidates()?;

    match command {
        Commands::Play => run_play_command(candidates, config.glyphs),
        Commands::Tui => run_tui_command(candidates, config.glyphs),
        Commands::Replay { guesses } => run_replay_command(candidates, &guesses, config.glyphs),
        Commands::Analyze { guess, limit } => {
            run_analyze_command(&guess, &candidates, config.glyphs, limit)
        }
        Commands::Stress {
            games,
            seed,
            max_turns,
        } => {
            run_stress_command(&candidates, games, seed, max_turns);
            Ok(())
        }
    }
}

fn run_play_command(candidates: CandidateSet, glyphs: GlyphStyle) -> Result<()> {
    let mut game = Game::new(candidates);
    let stdin = io::stdin();
    let stdout = io::stdout();
    let outcome = run_play(&mut game, stdin.lock(), stdout.lock(), glyphs)?;
    log::info!("Play ended: {outcome:?}");
    Ok(())
}

fn run_tui_command(candidates: CandidateSet, glyphs: GlyphStyle) -> Result<()> {
    use absurdle::interactive::{App, run_tui};

    let app = App::new(candidates, glyphs);
    run_tui(app)
}

fn run_replay_command(
    candidates: CandidateSet,
    guesses: &[String],
    glyphs: GlyphStyle,
) -> Result<()> {
    let mut game = Game::new(candidates);
    let result = replay(&mut game, guesses)?;
    print_replay_result(&result, glyphs);
    Ok(())
}

fn run_analyze_command(
    guess: &str,
    candidates: &CandidateSet,
    glyphs: GlyphStyle,
    limit: usize,
) -> Result<()> {
    let result = analyze_guess(guess, candidates)?;
    print_analysis_result(&result, glyphs, limit);
    Ok(())
}

fn run_stress_command(candidates: &CandidateSet, games: usize, seed: u64, max_turns: usize) {
    println!(
        "Running {games} random games against {} candidates (seed {seed})...",
        candidates.len()
    );

    let config = StressConfig {
        max_turns,
        ..StressConfig::new(games, seed)
    };
    let result = run_stress(candidates, config);
    print_stress_result(&result);
}

//! Stress harness
//!
//! Plays many games against the adversary with a random player that always
//! guesses one of the words still in play. Useful for timing the selector on
//! a real dictionary and for seeing how long the adversary holds out.

use crate::core::{CandidateSet, Word};
use crate::game::Game;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Settings for a stress run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StressConfig {
    pub games: usize,
    pub seed: u64,
    pub max_turns: usize,
    pub show_progress: bool,
}

impl StressConfig {
    #[must_use]
    pub const fn new(games: usize, seed: u64) -> Self {
        Self {
            games,
            seed,
            max_turns: 100,
            show_progress: true,
        }
    }
}

/// Outcome of one simulated game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRun {
    pub guesses: Vec<String>,
    pub finished: bool,
}

/// Statistics from a stress run
#[derive(Debug)]
pub struct StressResult {
    pub total_games: usize,
    pub finished: usize,
    pub average_turns: f64,
    pub min_turns: usize,
    pub max_turns: usize,
    pub distribution: BTreeMap<usize, usize>,
    pub longest: Option<GameRun>,
    pub duration: Duration,
    pub games_per_second: f64,
}

/// Play one game with a random player seeded by `seed`
#[must_use]
pub fn simulate_game(candidates: &CandidateSet, seed: u64, max_turns: usize) -> GameRun {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut game = Game::new(candidates.clone());
    let mut guesses = Vec::new();

    while !game.is_finished() && guesses.len() < max_turns {
        let pool: Vec<&Word> = game.candidates().iter().collect();
        let Some(&guess) = pool.choose(&mut rng) else {
            break;
        };
        let text = guess.text().to_string();
        if let Err(e) = game.guess(&text) {
            log::warn!("Simulated guess {text} rejected: {e}");
            break;
        }
        guesses.push(text);
    }

    GameRun {
        finished: game.is_finished(),
        guesses,
    }
}

/// Run `config.games` simulated games on the rayon pool
///
/// Game `i` uses seed `config.seed + i`, so a run is reproducible regardless
/// of thread scheduling.
///
/// # Panics
///
/// Panics if the progress bar template is invalid (it is a constant).
#[must_use]
pub fn run_stress(candidates: &CandidateSet, config: StressConfig) -> StressResult {
    let start = Instant::now();

    let pb = if config.show_progress {
        ProgressBar::new(config.games as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .expect("progress template is valid")
            .progress_chars("█▓▒░"),
    );
    pb.set_message(format!("{} candidates", candidates.len()));

    let runs: Vec<GameRun> = (0..config.games)
        .into_par_iter()
        .map(|i| {
            let run = simulate_game(candidates, config.seed.wrapping_add(i as u64), config.max_turns);
            pb.inc(1);
            run
        })
        .collect();

    pb.finish_with_message("Complete!");
    let duration = start.elapsed();

    let finished: Vec<&GameRun> = runs.iter().filter(|r| r.finished).collect();
    let mut distribution = BTreeMap::new();
    for run in &finished {
        *distribution.entry(run.guesses.len()).or_insert(0) += 1;
    }

    let turns = || finished.iter().map(|r| r.guesses.len());
    let average_turns = if finished.is_empty() {
        0.0
    } else {
        turns().sum::<usize>() as f64 / finished.len() as f64
    };

    // Earliest game wins ties so the reported run does not depend on scheduling
    let longest = finished
        .iter()
        .rev()
        .max_by_key(|r| r.guesses.len())
        .map(|&r| r.clone());

    let secs = duration.as_secs_f64();

    StressResult {
        total_games: runs.len(),
        finished: finished.len(),
        average_turns,
        min_turns: turns().min().unwrap_or(0),
        max_turns: turns().max().unwrap_or(0),
        distribution,
        longest,
        duration,
        games_per_second: if secs > 0.0 { runs.len() as f64 / secs } else { 0.0 },
    }
}

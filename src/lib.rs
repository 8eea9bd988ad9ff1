//! Absurdle
//!
//! An adversarial word game. There is no secret answer: after every guess the
//! adversary reveals whichever pattern keeps the most candidate words alive,
//! and the game ends only once a guess comes back all exact.
//!
//! # Quick Start
//!
//! ```rust
//! use absurdle::core::{Pattern, Word, prune_to_fixed_length};
//! use absurdle::game::Game;
//!
//! // Patterns between a guess and a possible answer
//! let pattern = Pattern::calculate(&Word::new("crane"), &Word::new("slate"));
//! assert_eq!(pattern.to_string(), "AAGAG");
//!
//! // Play against the adversary
//! let candidates = prune_to_fixed_length(["board", "beard", "bzard"], 5).unwrap();
//! let mut game = Game::new(candidates);
//! let turn = game.guess("beard").unwrap();
//! assert_eq!(turn.pattern.to_string(), "GAGGG");
//! assert_eq!(game.candidates().len(), 2);
//! ```

// Core domain types
pub mod core;

// Adversarial pattern selection
pub mod adversary;

// Game sessions
pub mod game;

// Dictionary files
pub mod dictionary;

// Startup settings and logging
pub mod config;
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

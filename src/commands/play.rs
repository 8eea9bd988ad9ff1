//! Line-oriented interactive game
//!
//! Prompts for guesses, answers each with the adversary's pattern, and prints
//! the transcript once a guess is all exact.

use crate::core::AbsurdleError;
use crate::game::Game;
use crate::output::{GlyphStyle, render_pattern, share_text};
use anyhow::Result;
use std::io::{BufRead, Write};

/// How an interactive game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    /// A guess was all exact
    Finished { guesses: usize },
    /// The player quit or input ran out first
    Abandoned { guesses: usize },
}

/// Commands start with this so they never collide with a guess
const COMMAND_PREFIX: char = ':';

/// Run the interactive game until it finishes, the player quits, or input ends
///
/// Input is split on whitespace, so several guesses may share a line. Besides
/// guesses, the player may type `:undo` or `:quit`.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_play<R: BufRead, W: Write>(
    game: &mut Game,
    mut input: R,
    mut output: W,
    glyphs: GlyphStyle,
) -> Result<PlayOutcome> {
    writeln!(output, "Welcome to the game of Absurdle.")?;
    writeln!(
        output,
        "{} words of length {} are in play.",
        game.candidates().len(),
        game.word_length()
    )?;
    writeln!(output, "Commands: ':undo' to take back a guess, ':quit' to exit\n")?;

    while !game.is_finished() {
        let Some(line) = read_prompted(&mut input, &mut output, "> ")? else {
            log::info!("Input ended after {} guesses", game.turns().len());
            return Ok(PlayOutcome::Abandoned {
                guesses: game.turns().len(),
            });
        };

        for token in line.split_whitespace() {
            if game.is_finished() {
                log::warn!("Game finished; ignoring {token}");
                continue;
            }

            match token.strip_prefix(COMMAND_PREFIX) {
                Some("quit" | "exit") => {
                    return Ok(PlayOutcome::Abandoned {
                        guesses: game.turns().len(),
                    });
                }
                Some("undo") => match game.undo() {
                    Ok(turn) => writeln!(output, "Took back {}\n", turn.guess)?,
                    Err(e) => writeln!(output, "{e}\n")?,
                },
                Some(other) => writeln!(output, "Unknown command '{other}'\n")?,
                None => match game.guess(token) {
                    Ok(turn) => {
                        writeln!(output, ": {}", render_pattern(&turn.pattern, glyphs))?;
                        writeln!(output)?;
                    }
                    Err(e @ AbsurdleError::GuessLengthMismatch { .. }) => {
                        writeln!(output, "{e}\n")?;
                    }
                    Err(e) => return Err(e.into()),
                },
            }
        }
    }

    let transcript = game.transcript();
    write!(output, "{}", share_text(&transcript, glyphs))?;
    output.flush()?;

    Ok(PlayOutcome::Finished {
        guesses: transcript.len(),
    })
}

/// Print a prompt and read one trimmed line
///
/// Returns `None` at end of input.
fn read_prompted<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<Option<String>> {
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Ask a question on the terminal and return the trimmed answer
///
/// # Errors
///
/// Returns an error on I/O failure or if stdin is closed.
pub fn prompt_line(question: &str) -> Result<String> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    read_prompted(&mut stdin.lock(), &mut stdout.lock(), question)?
        .ok_or_else(|| anyhow::anyhow!("No answer given for: {question}"))
}

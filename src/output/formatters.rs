//! Formatting utilities for terminal output

use crate::core::{Pattern, Tile, Word};
use clap::ValueEnum;
use colored::{ColoredString, Colorize};

/// How patterns are written out
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum GlyphStyle {
    /// 🟩🟨⬜
    #[default]
    Emoji,
    /// G P A
    Codes,
}

/// Format a pattern in the chosen style
#[must_use]
pub fn render_pattern(pattern: &Pattern, style: GlyphStyle) -> String {
    match style {
        GlyphStyle::Emoji => pattern.to_emoji(),
        GlyphStyle::Codes => pattern.to_codes(),
    }
}

/// Paint one letter with its tile color
#[must_use]
pub fn colored_tile(ch: char, tile: Tile) -> ColoredString {
    let cell = format!(" {ch} ");
    match tile {
        Tile::Exact => cell.black().on_green().bold(),
        Tile::Present => cell.black().on_yellow().bold(),
        Tile::Absent => cell.white().on_bright_black(),
    }
}

/// Format a guess with each letter on its tile color
#[must_use]
pub fn colored_guess(guess: &Word, pattern: &Pattern) -> String {
    guess
        .chars()
        .iter()
        .zip(pattern.tiles())
        .map(|(&ch, &tile)| colored_tile(ch, tile).to_string())
        .collect()
}

/// Text summarising a transcript, one pattern per line
///
/// # Examples
/// ```
/// use absurdle::core::Pattern;
/// use absurdle::output::{GlyphStyle, share_text};
///
/// let transcript = [Pattern::parse("AAPAG").unwrap(), Pattern::perfect(5)];
/// assert_eq!(
///     share_text(&transcript, GlyphStyle::Codes),
///     "Absurdle 2/∞\n\nAAPAG\nGGGGG\n"
/// );
/// ```
#[must_use]
pub fn share_text(transcript: &[Pattern], style: GlyphStyle) -> String {
    let mut text = format!("Absurdle {}/∞\n\n", transcript.len());
    for pattern in transcript {
        text.push_str(&render_pattern(pattern, style));
        text.push('\n');
    }
    text
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_styles() {
        let pattern = Pattern::parse("GPA").unwrap();
        assert_eq!(render_pattern(&pattern, GlyphStyle::Emoji), "🟩🟨⬜");
        assert_eq!(render_pattern(&pattern, GlyphStyle::Codes), "GPA");
    }

    #[test]
    fn share_text_empty() {
        assert_eq!(share_text(&[], GlyphStyle::Emoji), "Absurdle 0/∞\n\n");
    }

    #[test]
    fn share_text_emoji() {
        let transcript = [Pattern::parse("AGA").unwrap(), Pattern::perfect(3)];
        assert_eq!(
            share_text(&transcript, GlyphStyle::Emoji),
            "Absurdle 2/∞\n\n⬜🟩⬜\n🟩🟩🟩\n"
        );
    }

    #[test]
    fn colored_guess_keeps_letters() {
        colored::control::set_override(false);
        let guess = Word::new("abc");
        let pattern = Pattern::parse("GPA").unwrap();
        assert_eq!(colored_guess(&guess, &pattern), " a  b  c ");
        colored::control::unset_override();
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }
}

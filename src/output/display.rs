//! Display functions for command results

use super::formatters::{GlyphStyle, colored_guess, create_progress_bar, render_pattern, share_text};
use crate::commands::{AnalysisResult, ReplayResult, StressResult};
use crate::core::Word;
use colored::Colorize;

/// Sample words shown per group in an analysis
const SAMPLE_WORDS: usize = 6;

/// Print the turns of a replay and, if finished, the transcript
pub fn print_replay_result(result: &ReplayResult, glyphs: GlyphStyle) {
    println!("\n{}", "─".repeat(60).cyan());

    for (i, turn) in result.turns.iter().enumerate() {
        println!(
            "{:>3}. {}  {}  {} → {}",
            i + 1,
            colored_guess(&turn.guess, &turn.pattern),
            render_pattern(&turn.pattern, glyphs),
            turn.candidates_before,
            turn.candidates_after
        );
    }

    println!("{}", "─".repeat(60).cyan());

    if result.finished {
        let transcript: Vec<_> = result.turns.iter().map(|t| t.pattern.clone()).collect();
        println!("\n{}", share_text(&transcript, glyphs));
        if result.unused > 0 {
            println!(
                "{}",
                format!("{} guesses after the end were ignored", result.unused).bright_black()
            );
        }
    } else {
        println!(
            "\n{}",
            format!(
                "Game still in progress: {} candidates remain",
                result.remaining_candidates
            )
            .yellow()
            .bold()
        );
    }
}

/// Print how a guess splits the candidate set
pub fn print_analysis_result(result: &AnalysisResult, glyphs: GlyphStyle, limit: usize) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "PARTITION ANALYSIS:".bright_cyan().bold(),
        result.guess.text().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n📊 {} candidates, {} distinct patterns",
        result.total_candidates,
        result.groups.len()
    );

    if let Some(best) = result.groups.first() {
        println!(
            "   Adversary reveals: {} (keeps {})",
            render_pattern(&best.pattern, glyphs).bright_yellow(),
            best.len()
        );
    }
    println!();

    let max = result.largest_group() as f64;
    for group in result.groups.iter().take(limit) {
        let sample: Vec<&str> = group
            .words
            .iter()
            .take(SAMPLE_WORDS)
            .map(Word::text)
            .collect();
        let more = group.len().saturating_sub(SAMPLE_WORDS);
        println!(
            "   {}  [{}] {:5}  {}{}",
            render_pattern(&group.pattern, glyphs),
            create_progress_bar(group.len() as f64, max, 20).green(),
            group.len(),
            sample.join(" "),
            if more > 0 {
                format!(" (+{more})").bright_black().to_string()
            } else {
                String::new()
            }
        );
    }

    if result.groups.len() > limit {
        println!(
            "   {}",
            format!("... {} more patterns", result.groups.len() - limit).bright_black()
        );
    }
}

/// Print the statistics of a stress run
pub fn print_stress_result(result: &StressResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "STRESS RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Games:".bright_cyan().bold());
    println!("   Games played:     {}", result.total_games);
    println!(
        "   Finished:         {}",
        format!("{}", result.finished).green()
    );
    println!(
        "   Average turns:    {}",
        format!("{:.2}", result.average_turns).bright_yellow().bold()
    );
    println!("   Shortest game:    {}", result.min_turns);
    println!(
        "   Longest game:     {}",
        format!("{}", result.max_turns).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    if let Some(run) = &result.longest {
        println!("   Longest guesses:  {}", run.guesses.join(" ").bright_white());
    }

    if result.finished == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (&turns, &count) in &result.distribution {
        let pct = (count as f64 / result.finished as f64) * 100.0;
        let bar_width = (pct / 2.5) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░"
                .repeat(40_usize.saturating_sub(bar_width))
                .bright_black()
        );
        println!("   {turns:3}: {bar} {count:4} ({pct:5.1}%)");
    }
}

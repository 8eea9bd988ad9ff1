//! TUI rendering with ratatui

use super::app::{App, InputMode, MessageStyle, Statistics};
use crate::core::{Tile, Word};
use crate::game::Turn;
use crate::output::render_pattern;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Candidates listed by name when no more than this many remain
const LIST_CANDIDATES: usize = 12;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("ABSURDLE - the answer is whatever you haven't guessed")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

/// Background color of a tile
const fn tile_color(tile: Tile) -> Color {
    match tile {
        Tile::Exact => Color::Green,
        Tile::Present => Color::Yellow,
        Tile::Absent => Color::DarkGray,
    }
}

fn turn_line(index: usize, turn: &Turn, app: &App) -> Line<'static> {
    let mut spans = vec![Span::raw(format!("{index:>3}  "))];

    for (&ch, &tile) in turn.guess.chars().iter().zip(turn.pattern.tiles()) {
        spans.push(Span::styled(
            format!(" {ch} "),
            Style::default()
                .fg(Color::Black)
                .bg(tile_color(tile))
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(" "));
    }

    spans.push(Span::raw(format!(
        " {}  {} → {}",
        render_pattern(&turn.pattern, app.glyphs),
        turn.candidates_before,
        turn.candidates_after
    )));

    Line::from(spans)
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let turns = app.game.turns();
    // Keep the latest guesses visible
    let visible = area.height.saturating_sub(2) as usize;
    let skip = turns.len().saturating_sub(visible);

    let lines: Vec<Line> = if turns.is_empty() {
        vec![Line::from("No guesses yet.")]
    } else {
        turns
            .iter()
            .enumerate()
            .skip(skip)
            .map(|(i, turn)| turn_line(i + 1, turn, app))
            .collect()
    };

    let board = Paragraph::new(lines).block(
        Block::default()
            .title(" Guesses ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Candidates
            Constraint::Length(3), // Ambiguity gauge
            Constraint::Length(7), // Messages
        ])
        .split(area);

    render_candidates(f, app, chunks[0]);
    render_ambiguity(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_candidates(f: &mut Frame, app: &App, area: Rect) {
    let candidates = app.game.candidates();
    let count = candidates.len();

    let content: Vec<Line> = if app.input_mode == InputMode::Finished {
        vec![Line::from(Span::styled(
            "Game over - the adversary ran out of room.",
            Style::default().fg(Color::Green),
        ))]
    } else if app.game.turns().is_empty() {
        vec![Line::from(format!("{count} words in play"))]
    } else if count <= LIST_CANDIDATES {
        let mut lines = vec![Line::from(format!("{count} still possible:"))];
        lines.extend(
            candidates
                .iter()
                .map(Word::text)
                .map(|w| Line::from(format!("  • {w}"))),
        );
        lines
    } else {
        vec![
            Line::from(format!("{count} still possible")),
            Line::from(format!("Ambiguity left: {:.2} bits", (count as f64).log2())),
        ]
    };

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Candidates ")
                .borders(Borders::ALL)
                .style(Style::default().fg(Color::Green)),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

/// Share of the starting ambiguity still left, in percent
fn ambiguity_percent(remaining: usize, initial: usize) -> u16 {
    if initial <= 1 {
        return 0;
    }
    let ratio = (remaining.max(1) as f64).log2() / (initial as f64).log2();
    (ratio * 100.0).clamp(0.0, 100.0) as u16
}

fn render_ambiguity(f: &mut Frame, app: &App, area: Rect) {
    let remaining = app.game.candidates().len();
    let initial = app.game.initial_size();

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Ambiguity Left ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(ambiguity_percent(remaining, initial))
        .label(format!("{remaining}/{initial} words"));

    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, color) = match app.input_mode {
        InputMode::Guessing => (
            format!(" Enter a {}-letter guess ", app.game.word_length()),
            Color::Yellow,
        ),
        InputMode::Finished => (
            " 🎉 Finished! | 'n' new game, 'u' undo, 'q' quit ".to_string(),
            Color::Green,
        ),
    };

    let input = Paragraph::new(app.input_buffer.as_str())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn stats_text(stats: &Statistics) -> String {
    let average = stats
        .average_guesses()
        .map_or_else(|| "-".to_string(), |avg| format!("{avg:.1}"));
    let best = stats
        .fewest_guesses
        .map_or_else(|| "-".to_string(), |best| best.to_string());
    format!("Games: {} | Avg: {average} | Best: {best}", stats.games_finished)
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(15),
            Constraint::Percentage(35),
            Constraint::Percentage(20),
            Constraint::Percentage(30),
        ])
        .split(area);

    let guesses = Paragraph::new(format!("Guess: {}", app.game.turns().len() + 1))
        .alignment(Alignment::Center);
    f.render_widget(guesses, chunks[0]);

    let stats = Paragraph::new(stats_text(&app.stats)).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let candidates = Paragraph::new(format!("Candidates: {}", app.game.candidates().len()))
        .alignment(Alignment::Center);
    f.render_widget(candidates, chunks[2]);

    let help_text = match app.input_mode {
        InputMode::Guessing => "Enter: Guess | Ctrl-U: Undo | Esc: Quit",
        InputMode::Finished => "n: New | u: Undo | q: Quit",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::prune_to_fixed_length;
    use crate::output::GlyphStyle;
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn ambiguity_scale() {
        assert_eq!(ambiguity_percent(1024, 1024), 100);
        assert_eq!(ambiguity_percent(32, 1024), 50);
        assert_eq!(ambiguity_percent(1, 1024), 0);
        assert_eq!(ambiguity_percent(1, 1), 0);
    }

    #[test]
    fn status_shows_best_game() {
        assert_eq!(
            stats_text(&Statistics::default()),
            "Games: 0 | Avg: - | Best: -"
        );

        let stats = Statistics {
            games_finished: 2,
            total_guesses: 7,
            fewest_guesses: Some(3),
        };
        assert_eq!(stats_text(&stats), "Games: 2 | Avg: 3.5 | Best: 3");
    }

    #[test]
    fn draws_a_game_in_progress() {
        let candidates = prune_to_fixed_length(["board", "beard", "bzard"], 5).unwrap();
        let mut app = App::new(candidates, GlyphStyle::Codes);
        app.input_buffer = "beard".to_string();
        app.submit_guess();

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content.iter().map(|cell| cell.symbol()).collect();
        assert!(text.contains("GAGGG"));
        assert!(text.contains("bzard"));
    }
}

//! Terminal UI for the balance puzzle.

pub mod puzzle_scene;

use crate::balance::BalanceGame;
use crate::build_info;
use crate::input::PuzzleUiState;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Color cycle for ball display, keyed by id.
///
/// Twelve distinct colors so every ball reads the same wherever it shows
/// up: supply row, pans, history.
pub fn ball_color(id: u32) -> Color {
    const CYCLE: [Color; 12] = [
        Color::Red,
        Color::LightRed,
        Color::Yellow,
        Color::LightYellow,
        Color::Green,
        Color::LightGreen,
        Color::Cyan,
        Color::LightCyan,
        Color::Blue,
        Color::LightBlue,
        Color::Magenta,
        Color::LightMagenta,
    ];
    CYCLE[(id as usize).saturating_sub(1) % CYCLE.len()]
}

/// Main UI drawing function: title bar, puzzle scene, footer.
pub fn draw_ui(frame: &mut Frame, game: &BalanceGame, ui: &PuzzleUiState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title bar
            Constraint::Min(10),   // Scene
            Constraint::Length(1), // Footer
        ])
        .split(frame.size());

    render_title_bar(frame, chunks[0], game);
    puzzle_scene::render_puzzle(frame, chunks[1], game, ui);
    render_footer(frame, chunks[2], ui);
}

fn render_title_bar(frame: &mut Frame, area: Rect, game: &BalanceGame) {
    let line = Line::from(vec![
        Span::styled(
            " Oddball ",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "find the fake ball",
            Style::default().fg(Color::DarkGray),
        ),
        Span::raw("  "),
        Span::styled(
            format!("Weighings: {}", game.history.len()),
            Style::default().fg(Color::White),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_footer(frame: &mut Frame, area: Rect, ui: &PuzzleUiState) {
    let line = if let Some(hint) = ui.hint {
        Line::from(Span::styled(
            format!(" {}", hint),
            Style::default().fg(Color::LightRed),
        ))
    } else {
        Line::from(vec![
            Span::styled(
                " [1/2] pan  [\u{2190}\u{2192}] move  [Enter] place/remove  [Tab] scale  [w] weigh  [g] guess  [n] new  [q] quit",
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(
                format!("  {} ({})", build_info::BUILD_DATE, build_info::BUILD_COMMIT),
                Style::default().fg(Color::DarkGray),
            ),
        ])
    };
    frame.render_widget(Paragraph::new(line), area);
}

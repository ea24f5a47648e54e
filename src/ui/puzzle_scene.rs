//! Puzzle scene rendering: supply row, scale pans, weighing history,
//! guess form and verdict overlays.

use crate::balance::{Ball, BalanceGame, GuessDirection, PanSide, WeighingRecord};
use crate::input::{Focus, GuessForm, PuzzleUiState};
use crate::ui::ball_color;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the puzzle scene.
pub fn render_puzzle(frame: &mut Frame, area: Rect, game: &BalanceGame, ui: &PuzzleUiState) {
    frame.render_widget(Clear, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Supply row
            Constraint::Length(6), // The scale
            Constraint::Min(3),    // Past weighings
        ])
        .split(area);

    render_supply(frame, chunks[0], game, ui);
    render_scale(frame, chunks[1], game, ui);
    render_history(frame, chunks[2], game);

    if let Some(form) = &ui.guess_form {
        render_guess_form(frame, area, form);
    } else if game.guess_result.is_some() {
        render_verdict_overlay(frame, area, game);
    }
}

/// One colored cell per ball.
fn ball_span(ball: &Ball, highlighted: bool) -> Span<'static> {
    let mut style = Style::default().fg(ball_color(ball.id));
    if highlighted {
        style = style.bg(Color::DarkGray).add_modifier(Modifier::BOLD);
    }
    Span::styled(format!(" {:>2} ", ball.id), style)
}

/// Render the row of balls not currently on the scale.
fn render_supply(frame: &mut Frame, area: Rect, game: &BalanceGame, ui: &PuzzleUiState) {
    let block = Block::default()
        .title(" Balls ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let available = game.available_balls();
    if available.is_empty() {
        let empty = Paragraph::new(Span::styled(
            "All balls are on the scale",
            Style::default().fg(Color::DarkGray),
        ));
        frame.render_widget(empty, inner);
        return;
    }

    let mut spans = Vec::with_capacity(available.len());
    for (i, ball) in available.iter().enumerate() {
        let highlighted = ui.focus == Focus::Supply && i == ui.supply_cursor;
        spans.push(ball_span(ball, highlighted));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), inner);
}

/// Render the two pans side by side, active pan highlighted.
fn render_scale(frame: &mut Frame, area: Rect, game: &BalanceGame, ui: &PuzzleUiState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    for side in PanSide::ALL {
        render_pan(frame, chunks[side.index()], game, ui, side);
    }
}

fn render_pan(frame: &mut Frame, area: Rect, game: &BalanceGame, ui: &PuzzleUiState, side: PanSide) {
    let is_active = game.active_pan == Some(side);
    let border_color = if is_active {
        Color::Yellow
    } else {
        Color::DarkGray
    };

    let key = side.index() + 1;
    let block = Block::default()
        .title(format!(" {} Pan [{}] ", side.name(), key))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let balls = game.pan_balls(side);
    if balls.is_empty() {
        let empty = Paragraph::new(Span::styled(
            "empty",
            Style::default().fg(Color::DarkGray),
        ));
        frame.render_widget(empty, inner);
        return;
    }

    let mut spans = Vec::with_capacity(balls.len());
    for (i, ball) in balls.iter().enumerate() {
        let highlighted = is_active && ui.focus == Focus::Pan && i == ui.pan_cursor;
        spans.push(ball_span(ball, highlighted));
    }
    let paragraph = Paragraph::new(Line::from(spans)).wrap(Wrap { trim: true });
    frame.render_widget(paragraph, inner);
}

/// One display line per completed weighing.
fn history_line(index: usize, record: &WeighingRecord) -> Line<'static> {
    let mut spans = vec![Span::styled(
        format!(" {:>2}.  ", index + 1),
        Style::default().fg(Color::DarkGray),
    )];

    spans.push(Span::styled("[", Style::default().fg(Color::DarkGray)));
    for ball in &record.left {
        spans.push(ball_span(ball, false));
    }
    spans.push(Span::styled("]", Style::default().fg(Color::DarkGray)));

    spans.push(Span::styled(
        format!("  {}  ", record.symbol()),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    ));

    spans.push(Span::styled("[", Style::default().fg(Color::DarkGray)));
    for ball in &record.right {
        spans.push(ball_span(ball, false));
    }
    spans.push(Span::styled("]", Style::default().fg(Color::DarkGray)));

    Line::from(spans)
}

/// Render past weighings, most recent at the bottom.
fn render_history(frame: &mut Frame, area: Rect, game: &BalanceGame) {
    let block = Block::default()
        .title(" Weighings ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if game.history.is_empty() {
        let empty = Paragraph::new(Span::styled(
            "No weighings yet. Load the pans and press [w].",
            Style::default().fg(Color::DarkGray),
        ));
        frame.render_widget(empty, inner);
        return;
    }

    // Keep only as many lines as fit, dropping the oldest
    let capacity = inner.height as usize;
    let skip = game.history.len().saturating_sub(capacity);
    let lines: Vec<Line> = game
        .history
        .iter()
        .enumerate()
        .skip(skip)
        .map(|(i, record)| history_line(i, record))
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);
}

/// Centered overlay rect.
fn overlay_rect(area: Rect, width: u16, height: u16) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// Render the accusation form.
fn render_guess_form(frame: &mut Frame, area: Rect, form: &GuessForm) {
    let overlay = overlay_rect(area, 46, 8);
    frame.render_widget(Clear, overlay);

    let block = Block::default()
        .title(" Accuse a ball ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let inner = block.inner(overlay);
    frame.render_widget(block, overlay);

    let direction_span = |direction: GuessDirection, selected: bool| {
        let style = if selected {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        Span::styled(format!("[{}]", direction.name()), style)
    };

    let mut lines = vec![
        Line::from(vec![
            Span::raw("The fake ball is: "),
            Span::styled(
                format!("{}_", form.id_input),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::raw("and it is: "),
            direction_span(GuessDirection::Heavier, form.direction_index == 0),
            Span::raw(" "),
            direction_span(GuessDirection::Lighter, form.direction_index == 1),
        ]),
        Line::from(""),
    ];

    if let Some(error) = form.error {
        lines.push(Line::from(Span::styled(
            error,
            Style::default().fg(Color::LightRed),
        )));
    } else {
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        "[0-9] ball  [Tab] direction  [Enter] accuse  [Esc] back",
        Style::default().fg(Color::DarkGray),
    )));

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Render the verdict once a guess has been made.
fn render_verdict_overlay(frame: &mut Frame, area: Rect, game: &BalanceGame) {
    let correct = match game.guess_result {
        Some(correct) => correct,
        None => return,
    };

    let (title, color) = if correct {
        ("Correct!", Color::Green)
    } else {
        ("Incorrect!", Color::Red)
    };

    let reveal = match game.anomalous_ball() {
        Some(fake) => {
            let direction = if fake.is_heavy() { "heavier" } else { "lighter" };
            format!("Ball {} was the fake one. It was {}.", fake.id, direction)
        }
        None => "No ball was fake.".to_string(),
    };

    let overlay = overlay_rect(area, 44, 7);
    frame.render_widget(Clear, overlay);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    let inner = block.inner(overlay);
    frame.render_widget(block, overlay);

    let lines = vec![
        Line::from(Span::styled(
            title,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(reveal, Style::default().fg(Color::White))),
        Line::from(""),
        Line::from(Span::styled(
            "[n] New puzzle  [q] Quit",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

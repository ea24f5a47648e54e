//! Input handling for the puzzle screen.
//!
//! Translates key events into engine operations. UI-only state (cursors,
//! the open guess form, the hint line) lives here, never in the engine.

use crossterm::event::{KeyCode, KeyEvent};

use crate::balance::{BalanceGame, GuessDirection, PanSide};
use crate::balance_logic;

/// What the main loop should do after a key has been processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    Continue,
    NewGame,
    Quit,
}

/// Which part of the screen the selection cursor is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Picking from the available-ball row.
    Supply,
    /// Walking the active pan's contents to take balls back off.
    Pan,
}

/// The open guess form.
#[derive(Debug, Clone)]
pub struct GuessForm {
    /// Digits typed for the accused ball id.
    pub id_input: String,
    /// Index into `GuessDirection::ALL`.
    pub direction_index: usize,
    /// Validation message shown under the form.
    pub error: Option<&'static str>,
}

impl GuessForm {
    fn new() -> Self {
        Self {
            id_input: String::new(),
            direction_index: 0,
            error: None,
        }
    }

    pub fn direction(&self) -> GuessDirection {
        GuessDirection::from_index(self.direction_index)
    }
}

/// UI state for the puzzle screen.
pub struct PuzzleUiState {
    pub focus: Focus,
    /// Cursor into `available_balls()`.
    pub supply_cursor: usize,
    /// Cursor into the active pan's contents.
    pub pan_cursor: usize,
    /// Open guess form, if any.
    pub guess_form: Option<GuessForm>,
    /// One-line hint shown after a rejected action.
    pub hint: Option<&'static str>,
}

impl PuzzleUiState {
    pub fn new() -> Self {
        Self {
            focus: Focus::Supply,
            supply_cursor: 0,
            pan_cursor: 0,
            guess_form: None,
            hint: None,
        }
    }
}

impl Default for PuzzleUiState {
    fn default() -> Self {
        Self::new()
    }
}

/// Process a key during the puzzle screen.
pub fn process_key(game: &mut BalanceGame, ui: &mut PuzzleUiState, key: KeyEvent) -> InputOutcome {
    ui.hint = None;

    // An open guess form captures all input
    if ui.guess_form.is_some() {
        process_form_key(game, ui, key.code);
        return InputOutcome::Continue;
    }

    // Once the verdict is in, only restart and quit remain
    if game.guess_result.is_some() {
        return match key.code {
            KeyCode::Char('n') => InputOutcome::NewGame,
            KeyCode::Char('q') | KeyCode::Esc => InputOutcome::Quit,
            _ => InputOutcome::Continue,
        };
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return InputOutcome::Quit,
        KeyCode::Char('n') => return InputOutcome::NewGame,
        KeyCode::Char('1') => {
            game.select_pan(PanSide::Left);
            clamp_cursors(game, ui);
        }
        KeyCode::Char('2') => {
            game.select_pan(PanSide::Right);
            clamp_cursors(game, ui);
        }
        KeyCode::Tab => toggle_focus(game, ui),
        KeyCode::Left => move_cursor(game, ui, -1),
        KeyCode::Right => move_cursor(game, ui, 1),
        KeyCode::Enter | KeyCode::Char(' ') => match ui.focus {
            Focus::Supply => place_selected(game, ui),
            Focus::Pan => remove_selected(game, ui),
        },
        KeyCode::Backspace | KeyCode::Delete => {
            if ui.focus == Focus::Pan {
                remove_selected(game, ui);
            }
        }
        KeyCode::Char('w') => {
            balance_logic::weigh(game);
            // The scale is empty now; back to picking balls
            ui.focus = Focus::Supply;
            ui.pan_cursor = 0;
            clamp_cursors(game, ui);
        }
        KeyCode::Char('g') => {
            if game.can_guess() {
                ui.guess_form = Some(GuessForm::new());
            } else {
                ui.hint = Some("Record two weighings before accusing a ball");
            }
        }
        _ => {}
    }

    InputOutcome::Continue
}

/// Key handling while the guess form is open.
fn process_form_key(game: &mut BalanceGame, ui: &mut PuzzleUiState, code: KeyCode) {
    let form = match ui.guess_form.as_mut() {
        Some(form) => form,
        None => return,
    };

    match code {
        KeyCode::Char(c) if c.is_ascii_digit() => {
            if form.id_input.len() < 2 {
                form.id_input.push(c);
                form.error = None;
            }
        }
        KeyCode::Backspace => {
            form.id_input.pop();
            form.error = None;
        }
        KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down | KeyCode::Tab => {
            form.direction_index = 1 - form.direction_index;
        }
        KeyCode::Enter => {
            let id = match form.id_input.parse::<u32>() {
                Ok(id) => id,
                Err(_) => {
                    form.error = Some("Enter a ball number");
                    return;
                }
            };
            match balance_logic::submit_guess(game, id, form.direction()) {
                Some(_) => ui.guess_form = None,
                None => form.error = Some("No ball with that number"),
            }
        }
        KeyCode::Esc => ui.guess_form = None,
        _ => {}
    }
}

/// Switch the cursor between the supply row and the active pan.
fn toggle_focus(game: &mut BalanceGame, ui: &mut PuzzleUiState) {
    match ui.focus {
        Focus::Supply => {
            let side = match game.active_pan {
                Some(side) => side,
                None => {
                    ui.hint = Some("Select a pan first (1 or 2)");
                    return;
                }
            };
            if game.pans[side.index()].is_empty() {
                ui.hint = Some("That pan is empty");
                return;
            }
            ui.focus = Focus::Pan;
            ui.pan_cursor = 0;
        }
        Focus::Pan => ui.focus = Focus::Supply,
    }
}

fn move_cursor(game: &BalanceGame, ui: &mut PuzzleUiState, delta: i32) {
    let len = match ui.focus {
        Focus::Supply => game.available_balls().len(),
        Focus::Pan => match game.active_pan {
            Some(side) => game.pans[side.index()].len(),
            None => 0,
        },
    };
    if len == 0 {
        return;
    }

    let cursor = match ui.focus {
        Focus::Supply => &mut ui.supply_cursor,
        Focus::Pan => &mut ui.pan_cursor,
    };
    *cursor = (*cursor as i32 + delta).clamp(0, len as i32 - 1) as usize;
}

/// Place the supply ball under the cursor into the active pan.
fn place_selected(game: &mut BalanceGame, ui: &mut PuzzleUiState) {
    if game.active_pan.is_none() {
        ui.hint = Some("Select a pan first (1 or 2)");
        return;
    }

    let id = match game.available_balls().get(ui.supply_cursor) {
        Some(ball) => ball.id,
        None => return,
    };
    game.place_ball(id);
    clamp_cursors(game, ui);
}

/// Take the pan ball under the cursor back off the scale.
fn remove_selected(game: &mut BalanceGame, ui: &mut PuzzleUiState) {
    let side = match game.active_pan {
        Some(side) => side,
        None => return,
    };

    let id = match game.pans[side.index()].get(ui.pan_cursor) {
        Some(&id) => id,
        None => return,
    };
    game.remove_ball(id);

    if game.pans[side.index()].is_empty() {
        ui.focus = Focus::Supply;
    }
    clamp_cursors(game, ui);
}

/// Keep both cursors inside their lists after any mutation.
fn clamp_cursors(game: &BalanceGame, ui: &mut PuzzleUiState) {
    let supply_len = game.available_balls().len();
    if ui.supply_cursor >= supply_len {
        ui.supply_cursor = supply_len.saturating_sub(1);
    }

    let pan_len = match game.active_pan {
        Some(side) => game.pans[side.index()].len(),
        None => 0,
    };
    if ui.pan_cursor >= pan_len {
        ui.pan_cursor = pan_len.saturating_sub(1);
    }
}

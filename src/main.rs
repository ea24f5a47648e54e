mod balance;
mod balance_logic;
mod build_info;
mod constants;
mod input;
mod ui;

use balance::BalanceGame;
use constants::BALL_COUNT;
use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use input::{process_key, InputOutcome, PuzzleUiState};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

fn main() -> io::Result<()> {
    // Handle CLI arguments
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!(
                    "oddball {} ({})",
                    build_info::BUILD_DATE,
                    build_info::BUILD_COMMIT
                );
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Oddball - Terminal Balance Puzzle\n");
                println!("Twelve balls, one secretly heavier or lighter.");
                println!("Find it with the scale, then accuse it.\n");
                println!("Usage: oddball [command]\n");
                println!("Commands:");
                println!("  --version  Show version information");
                println!("  --help     Show this help message");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown command: {}", other);
                eprintln!("Run 'oddball --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let mut game = BalanceGame::new(BALL_COUNT, &mut rand::thread_rng());
    let mut ui_state = PuzzleUiState::new();

    loop {
        terminal.draw(|f| ui::draw_ui(f, &game, &ui_state))?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key_event) = event::read()? {
                match process_key(&mut game, &mut ui_state, key_event) {
                    InputOutcome::Quit => break,
                    InputOutcome::NewGame => {
                        game = BalanceGame::new(BALL_COUNT, &mut rand::thread_rng());
                        ui_state = PuzzleUiState::new();
                    }
                    InputOutcome::Continue => {}
                }
            }
        }
    }

    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

// Terminal Sokoban
// Controls: W/A/S/D or arrow keys, R to restart, Q to quit.
// Tiles: '#' wall, '@' player, '$' box, '.' goal, '*' box on goal, '+' player on goal, '-' floor.

use anyhow::{Context, Result};
use clap::Parser;
use sokoban::config::{Args, Mode};
use sokoban::console_interface::{
    ConsoleInput, ConsoleTerminal, cleanup_terminal, handle_input, render_game, setup_terminal,
};
use sokoban::core::{Board, snapshot_to_json};
use sokoban::level_file::read_level_rows;
use sokoban::logging::{self, LogTarget};
use sokoban::models::GameRenderState;
use sokoban::session::{GameSession, SessionEvent};
use tracing::{error, info};

fn main() -> Result<()> {
    let args = Args::parse();

    let log_target = match (args.mode, args.log_dir.as_deref()) {
        (_, Some(dir)) => LogTarget::Directory(dir),
        (Mode::Interactive, None) => LogTarget::Disabled,
        (_, None) => LogTarget::Stderr,
    };
    logging::init(log_target)?;

    let rows = read_level_rows(&args.level_file)
        .with_context(|| format!("failed to load level {}", args.level_file.display()))?;

    match args.mode {
        Mode::Text => {
            print!("{}", Board::build_from_rows(&rows));
        }
        Mode::Json => {
            let board = Board::build_from_rows(&rows);
            println!("{}", snapshot_to_json(&board)?);
        }
        Mode::Interactive => {
            let mut session = GameSession::new(rows);
            let mut terminal = setup_terminal().context("failed to set up terminal")?;
            let result = run_interactive(&mut session, &mut terminal);
            cleanup_terminal().context("failed to restore terminal")?;
            if let Err(err) = &result {
                error!("{:#}", err);
            }
            result?;
        }
    }

    Ok(())
}

fn run_interactive(session: &mut GameSession, terminal: &mut ConsoleTerminal) -> Result<()> {
    info!(
        width = session.board().width(),
        height = session.board().height(),
        boxes = session.board().boxes().len(),
        "starting level"
    );
    let mut message = None;
    render(terminal, session, &message)?;

    loop {
        match handle_input()? {
            ConsoleInput::Quit => break,
            ConsoleInput::UserAction(action) => {
                message = match session.apply(action)? {
                    SessionEvent::Moved(response) if !response.is_valid() => {
                        Some(response.message().to_string())
                    }
                    _ => None,
                };
                render(terminal, session, &message)?;

                if session.is_won() {
                    // Keep showing the win screen until the user presses a key
                    loop {
                        match handle_input()? {
                            ConsoleInput::Timeout => {}
                            _ => break,
                        }
                    }
                    break;
                }
            }
            ConsoleInput::Timeout | ConsoleInput::Unknown => {}
        }
    }

    Ok(())
}

fn render(
    terminal: &mut ConsoleTerminal,
    session: &GameSession,
    message: &Option<String>,
) -> Result<()> {
    let state = GameRenderState {
        board: session.board(),
        won: session.is_won(),
        message: message.clone(),
    };
    render_game(terminal, &state)?;
    Ok(())
}

use crate::core::{Board, Direction, Symbol, UserAction};
use crate::models::GameRenderState;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use std::io;
use std::time::Duration;

pub type ConsoleTerminal = Terminal<CrosstermBackend<io::Stdout>>;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

pub fn setup_terminal() -> io::Result<ConsoleTerminal> {
    crossterm::terminal::enable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    Terminal::new(backend)
}

pub fn cleanup_terminal() -> io::Result<()> {
    crossterm::terminal::disable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::LeaveAlternateScreen)?;
    Ok(())
}

pub fn render_game(terminal: &mut ConsoleTerminal, state: &GameRenderState) -> io::Result<()> {
    terminal.draw(|f| {
        let chunks = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(f.area());

        let game_paragraph = Paragraph::new(render_board_lines(state.board))
            .block(Block::default().borders(Borders::ALL).title("Sokoban"))
            .alignment(Alignment::Center);
        f.render_widget(game_paragraph, chunks[0]);

        let status = status_line(state);
        let status_style = if state.won {
            Style::default().fg(Color::Green)
        } else if state.message.is_some() {
            Style::default().fg(Color::LightRed)
        } else {
            Style::default().fg(Color::Cyan)
        };
        let status_paragraph = Paragraph::new(status)
            .block(Block::default().borders(Borders::ALL).title("Instructions"))
            .style(status_style)
            .alignment(Alignment::Center);
        f.render_widget(status_paragraph, chunks[1]);
    })?;
    Ok(())
}

pub fn status_line(state: &GameRenderState) -> String {
    if state.won {
        return "success! Press any key to quit.".to_string();
    }
    let controls = "Controls: WASD or Arrow keys to move, R to restart, Q to quit";
    match &state.message {
        Some(message) => format!("{} | {}", controls, message),
        None => controls.to_string(),
    }
}

fn render_board_lines(board: &Board) -> Vec<Line<'static>> {
    (0..board.height())
        .map(|y| {
            let spans: Vec<Span<'static>> = (0..board.width())
                .map(|x| {
                    let symbol = board.symbol_at(x, y);
                    Span::styled(symbol.to_char().to_string(), symbol_style(symbol))
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}

fn symbol_style(symbol: Symbol) -> Style {
    let color = match symbol {
        Symbol::Wall => Color::Rgb(255, 160, 60),
        Symbol::Box => Color::Rgb(220, 180, 80),
        Symbol::Goal => Color::Gray,
        Symbol::BoxOnGoal => Color::Rgb(150, 100, 50),
        Symbol::Player => Color::Rgb(255, 255, 0),
        Symbol::PlayerOnGoal => Color::Rgb(255, 200, 0),
        Symbol::Floor => Color::DarkGray,
    };
    Style::default().fg(color)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleInput {
    UserAction(UserAction),
    Quit,
    Timeout,
    Unknown,
}

pub fn handle_input() -> io::Result<ConsoleInput> {
    if event::poll(POLL_INTERVAL)? {
        if let Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) = event::read()?
        {
            return Ok(input_from_key(code));
        }
        return Ok(ConsoleInput::Unknown);
    }
    Ok(ConsoleInput::Timeout)
}

pub fn input_from_key(code: KeyCode) -> ConsoleInput {
    match code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => ConsoleInput::Quit,
        KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => {
            ConsoleInput::UserAction(UserAction::Move(Direction::Up))
        }
        KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => {
            ConsoleInput::UserAction(UserAction::Move(Direction::Down))
        }
        KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => {
            ConsoleInput::UserAction(UserAction::Move(Direction::Left))
        }
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => {
            ConsoleInput::UserAction(UserAction::Move(Direction::Right))
        }
        KeyCode::Char('r') | KeyCode::Char('R') => ConsoleInput::UserAction(UserAction::Restart),
        _ => ConsoleInput::Unknown,
    }
}

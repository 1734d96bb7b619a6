use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::grid::{Direction, GameMode};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Turn(Direction),
    /// Abandon the current game and start fresh in the given mode.
    SelectMode(GameMode),
    PlayAgain,
    /// Show or hide the how-to-play overlay.
    Help,
    Quit,
}

pub fn command_for(key: KeyEvent) -> Option<Command> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Command::Quit);
    }

    let command = match key.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Command::Turn(Direction::Up),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Command::Turn(Direction::Down),
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Command::Turn(Direction::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Command::Turn(Direction::Right),
        KeyCode::Char('1') | KeyCode::Char('c') => Command::SelectMode(GameMode::Classic),
        KeyCode::Char('2') | KeyCode::Char('g') => Command::SelectMode(GameMode::Ghost),
        KeyCode::Char('3') | KeyCode::Char('p') => Command::SelectMode(GameMode::Portal),
        KeyCode::Char(' ') | KeyCode::Char('r') | KeyCode::Enter => Command::PlayAgain,
        KeyCode::Char('h') | KeyCode::Char('?') => Command::Help,
        KeyCode::Char('q') | KeyCode::Esc => Command::Quit,
        _ => return None,
    };
    Some(command)
}

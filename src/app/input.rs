use crossterm::event::{KeyCode, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use crate::game::SimCommand;
use crate::ui::{cell_at, layout};
use crate::{BOARD_COLS, BOARD_ROWS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Sim(SimCommand),
    MoveCursor { d_row: isize, d_col: isize },
    ToggleAtCursor,
}

pub fn action_for_key(code: KeyCode) -> Option<Action> {
    let action = match code {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char(' ') | KeyCode::Char('s') => Action::Sim(SimCommand::ToggleRunning),
        KeyCode::Char('c') => Action::Sim(SimCommand::Clear),
        KeyCode::Char('r') => Action::Sim(SimCommand::Randomize),
        KeyCode::Enter | KeyCode::Char('t') => Action::ToggleAtCursor,
        KeyCode::Up => Action::MoveCursor { d_row: -1, d_col: 0 },
        KeyCode::Down => Action::MoveCursor { d_row: 1, d_col: 0 },
        KeyCode::Left => Action::MoveCursor { d_row: 0, d_col: -1 },
        KeyCode::Right => Action::MoveCursor { d_row: 0, d_col: 1 },
        _ => return None,
    };
    Some(action)
}

/// Left click on a board cell toggles it; anything else is ignored.
pub fn command_for_mouse(event: MouseEvent, area: Rect) -> Option<SimCommand> {
    if event.kind != MouseEventKind::Down(MouseButton::Left) {
        return None;
    }
    let areas = layout(area)?;
    let (row, col) = cell_at(areas.well, event.column, event.row)?;
    Some(SimCommand::ToggleCell { row, col })
}

/// Keyboard cursor, kept inside the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    pub row: usize,
    pub col: usize,
}

impl Cursor {
    pub fn moved(self, d_row: isize, d_col: isize) -> Self {
        let clamp = |v: usize, d: isize, len: usize| v.saturating_add_signed(d).min(len - 1);
        Self {
            row: clamp(self.row, d_row, BOARD_ROWS),
            col: clamp(self.col, d_col, BOARD_COLS),
        }
    }

    pub fn toggle_command(self) -> SimCommand {
        SimCommand::ToggleCell {
            row: self.row,
            col: self.col,
        }
    }
}

use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders};

use crate::{BOARD_COLS, BOARD_ROWS, CELL_W, CONTROLS_H, INFO_H, MIN_PANE_HEIGHT, MIN_PANE_WIDTH, PLAY_H, PLAY_W};

mod render;

pub use render::draw_game;

/// Screen regions for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Areas {
    pub cabinet: Rect,
    pub info: Rect,
    pub well: Rect,
    pub controls: Rect,
}

pub fn cabinet_block() -> Block<'static> {
    Block::default()
        .title("LIFE")
        .border_type(BorderType::Thick)
        .borders(Borders::ALL)
        .title_alignment(Alignment::Left)
}

/// Splits the terminal into cabinet, info, well and controls. `None` when the pane is too small.
pub fn layout(area: Rect) -> Option<Areas> {
    if area.width < MIN_PANE_WIDTH || area.height < MIN_PANE_HEIGHT {
        return None;
    }
    let cabinet_inner = cabinet_block().inner(area);

    let col_rect = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(PLAY_W as u16),
            Constraint::Min(0),
        ])
        .split(cabinet_inner)[1];

    let stack = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(INFO_H),
            Constraint::Length(PLAY_H as u16),
            Constraint::Length(CONTROLS_H),
            Constraint::Min(0),
        ])
        .split(col_rect);

    Some(Areas {
        cabinet: area,
        info: stack[1],
        well: stack[2],
        controls: stack[3],
    })
}

/// Maps a terminal position to the `(row, col)` of the board cell drawn there.
pub fn cell_at(well: Rect, x: u16, y: u16) -> Option<(usize, usize)> {
    let (left, top) = (well.x + 1, well.y + 1);
    if x < left || y < top {
        return None;
    }
    let col = usize::from(x - left) / CELL_W;
    let row = usize::from(y - top);
    (row < BOARD_ROWS && col < BOARD_COLS).then_some((row, col))
}

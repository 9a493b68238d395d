use ratatui::prelude::*;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use super::{Areas, cabinet_block, layout};
use crate::game::Snapshot;
use crate::{CELL_W, MIN_PANE_HEIGHT, MIN_PANE_WIDTH, PLAY_H, PLAY_W};

const ALIVE: [char; CELL_W] = ['█', '█'];
const DEAD: [char; CELL_W] = ['·', ' '];

pub fn draw_game(frame: &mut Frame, snapshot: &Snapshot, cursor: (usize, usize)) {
    let area = frame.size();

    let Some(areas) = layout(area) else {
        let msg = Paragraph::new(format!(
            "RESIZE PANE (min {}x{})",
            MIN_PANE_WIDTH, MIN_PANE_HEIGHT
        ))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("LIFE"));
        frame.render_widget(msg, area);
        return;
    };

    frame.render_widget(cabinet_block(), areas.cabinet);
    draw_info(frame, snapshot, areas);
    draw_playfield(frame, snapshot, cursor, areas.well);
    draw_controls(frame, areas.controls);
}

fn draw_playfield(frame: &mut Frame, snapshot: &Snapshot, cursor: (usize, usize), well: Rect) {
    let mut grid = vec![vec![' '; PLAY_W]; PLAY_H];

    grid[0][0] = '┌';
    grid[0][PLAY_W - 1] = '┐';
    grid[PLAY_H - 1][0] = '└';
    grid[PLAY_H - 1][PLAY_W - 1] = '┘';
    for x in 1..PLAY_W - 1 {
        grid[0][x] = '─';
        grid[PLAY_H - 1][x] = '─';
    }
    for y in 1..PLAY_H - 1 {
        grid[y][0] = '│';
        grid[y][PLAY_W - 1] = '│';
    }

    let board = &snapshot.board;
    for row in 0..board.rows {
        for col in 0..board.cols {
            let glyphs = if board.get(row, col).is_alive() { ALIVE } else { DEAD };
            let gx = 1 + col * CELL_W;
            let gy = 1 + row;
            if gy < PLAY_H - 1 && gx + CELL_W < PLAY_W {
                grid[gy][gx..gx + CELL_W].copy_from_slice(&glyphs);
            }
        }
    }

    let (cursor_row, cursor_col) = cursor;
    let lines: Vec<Line> = grid
        .iter()
        .enumerate()
        .map(|(gy, row)| {
            if gy != cursor_row + 1 {
                return Line::raw(row.iter().collect::<String>());
            }
            // Highlight the keyboard cursor cell.
            let gx = 1 + cursor_col * CELL_W;
            let split = |from: usize, to: usize| row[from..to].iter().collect::<String>();
            Line::from(vec![
                Span::raw(split(0, gx)),
                Span::styled(split(gx, gx + CELL_W), Style::default().add_modifier(Modifier::REVERSED)),
                Span::raw(split(gx + CELL_W, PLAY_W)),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(lines).alignment(Alignment::Left);
    frame.render_widget(paragraph, well);
}

fn draw_info(frame: &mut Frame, snapshot: &Snapshot, areas: Areas) {
    let (status, color) = if snapshot.running {
        ("RUNNING", Color::Green)
    } else {
        ("STOPPED", Color::Yellow)
    };

    let block = Block::default().title("INFO").borders(Borders::ALL);
    let inner = block.inner(areas.info);
    frame.render_widget(block, areas.info);

    let line = Line::from(vec![
        Span::raw(format!("{:<5}{:<8}", "GEN:", snapshot.generation)),
        Span::raw(format!("{:<5}{:<6}", "POP:", snapshot.population)),
        Span::styled(status, Style::default().fg(color).add_modifier(Modifier::BOLD)),
    ]);
    frame.render_widget(Paragraph::new(line), inner);
}

fn draw_controls(frame: &mut Frame, area: Rect) {
    let block = Block::default().title("CONTROLS").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);

    let left = Paragraph::new(vec![
        Line::raw("space start/stop"),
        Line::raw("c clear  r random"),
    ])
    .alignment(Alignment::Left);
    frame.render_widget(left, cols[0]);

    let right = Paragraph::new(vec![
        Line::raw("click/enter toggle"),
        Line::raw("arrows move  q quit"),
    ])
    .alignment(Alignment::Left);
    frame.render_widget(right, cols[1]);
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::game::Board;
    use crate::{BOARD_COLS, BOARD_ROWS};

    fn render(width: u16, height: u16, snapshot: &Snapshot) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| draw_game(frame, snapshot, (0, 0)))
            .unwrap();
        let buffer = terminal.backend().buffer().clone();
        (0..height)
            .map(|y| (0..width).map(|x| buffer.get(x, y).symbol().to_string()).collect())
            .collect()
    }

    fn snapshot_with(cells: &[(usize, usize)], running: bool) -> Snapshot {
        let mut board = Board::new(BOARD_ROWS, BOARD_COLS);
        for &(r, c) in cells {
            board = board.toggled(r, c);
        }
        Snapshot {
            population: board.population(),
            board,
            running,
            generation: 7,
        }
    }

    #[test]
    fn draws_live_cells_in_the_well() {
        let snapshot = snapshot_with(&[(3, 4)], false);
        let lines = render(80, 40, &snapshot);
        let areas = layout(Rect::new(0, 0, 80, 40)).unwrap();
        let row = &lines[(areas.well.y + 1 + 3) as usize];
        let start = (areas.well.x + 1) as usize + 4 * CELL_W;
        let cell: String = row.chars().skip(start).take(CELL_W).collect();
        assert_eq!(cell, "██");
        assert_eq!(row.matches('█').count(), 2);
    }

    #[test]
    fn info_shows_status_and_counts() {
        let running = render(80, 40, &snapshot_with(&[(0, 0), (1, 1)], true)).join("\n");
        assert!(running.contains("RUNNING"));
        assert!(running.contains("POP: 2"));
        assert!(running.contains("GEN: 7"));

        let stopped = render(80, 40, &snapshot_with(&[], false)).join("\n");
        assert!(stopped.contains("STOPPED"));
    }

    #[test]
    fn small_pane_asks_for_resize() {
        let text = render(30, 10, &snapshot_with(&[], false)).join("\n");
        assert!(text.contains("RESIZE"));
    }
}

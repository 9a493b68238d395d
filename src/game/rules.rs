use crate::game::{Board, Cell};

// All eight surrounding offsets as (d_row, d_col).
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Live neighbors of `(row, col)`. Offsets past the edge count as dead; the board does not wrap.
pub fn live_neighbors(board: &Board, row: usize, col: usize) -> u8 {
    let mut count = 0;
    for (dr, dc) in NEIGHBOR_OFFSETS {
        let (Some(r), Some(c)) = (row.checked_add_signed(dr), col.checked_add_signed(dc)) else {
            continue;
        };
        if board.in_bounds(r, c) && board.get(r, c).is_alive() {
            count += 1;
        }
    }
    count
}

/// Next generation under B3/S23. Reads only from `board` and writes into a fresh one.
pub fn step(board: &Board) -> Board {
    let mut next = Board::new(board.rows, board.cols);
    for row in 0..board.rows {
        for col in 0..board.cols {
            let current = board.get(row, col);
            let state = match (current, live_neighbors(board, row, col)) {
                (_, n) if n < 2 || n > 3 => Cell::Dead,
                (Cell::Dead, 3) => Cell::Alive,
                (cell, _) => cell,
            };
            next.set(row, col, state);
        }
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dead_board_stays_dead() {
        for (rows, cols) in [(1, 1), (5, 5), (25, 25), (3, 17)] {
            let board = Board::new(rows, cols);
            assert_eq!(step(&board), board);
        }
    }

    #[test]
    fn isolated_cell_dies() {
        let board = Board::new(5, 5).toggled(1, 1);
        assert!(step(&board).is_empty());
    }

    #[test]
    fn full_block_on_small_board() {
        let board = Board::from_rows(&[
            ".....",
            ".###.",
            ".###.",
            ".###.",
            ".....",
        ]);
        // Block corners have 3 neighbors and survive; edge midpoints have 5 and the
        // center 8, so they die. Outside cells next to an edge midpoint see 3 and are born.
        let expected = Board::from_rows(&[
            "..#..",
            ".#.#.",
            "#...#",
            ".#.#.",
            "..#..",
        ]);
        assert_eq!(step(&board), expected);
    }

    #[test]
    fn blinker_has_period_two() {
        let horizontal = Board::from_rows(&[
            ".....",
            ".....",
            ".###.",
            ".....",
            ".....",
        ]);
        let vertical = Board::from_rows(&[
            ".....",
            "..#..",
            "..#..",
            "..#..",
            ".....",
        ]);
        let once = step(&horizontal);
        assert_eq!(once, vertical);
        assert_eq!(step(&once), horizontal);
    }

    #[test]
    fn block_is_still_life() {
        let block = Board::from_rows(&["....", ".##.", ".##.", "...."]);
        assert_eq!(step(&block), block);
    }

    #[test]
    fn edges_do_not_wrap() {
        // On a torus these two cells would neighbor each other across the edge.
        let board = Board::from_rows(&["#...#", ".....", ".....", ".....", "....."]);
        assert_eq!(live_neighbors(&board, 0, 0), 0);
        assert!(step(&board).is_empty());
    }

    #[test]
    fn corner_cell_with_one_inside_neighbor_dies() {
        let board = Board::from_rows(&["##..", "....", "....", "...."]);
        assert_eq!(live_neighbors(&board, 0, 0), 1);
        assert!(step(&board).is_empty());
    }

    #[test]
    fn corner_birth_uses_only_in_bounds_neighbors() {
        let board = Board::from_rows(&[".#..", "##..", "....", "...."]);
        assert_eq!(live_neighbors(&board, 0, 0), 3);
        // Completes into a 2x2 block.
        let expected = Board::from_rows(&["##..", "##..", "....", "...."]);
        assert_eq!(step(&board), expected);
    }

    #[test]
    fn step_does_not_modify_input() {
        let board = Board::from_rows(&["...", "###", "..."]);
        let copy = board.clone();
        let _ = step(&board);
        assert_eq!(board, copy);
    }
}

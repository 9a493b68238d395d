use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    Dead,
    Alive,
}

impl Cell {
    pub fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    pub fn flipped(self) -> Self {
        match self {
            Cell::Dead => Cell::Alive,
            Cell::Alive => Cell::Dead,
        }
    }
}

/// Fixed-size grid of cells stored row-major. Dimensions never change after creation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub rows: usize,
    pub cols: usize,
    pub cells: Vec<Cell>,
}

impl Board {
    /// All-dead board.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Cell::Dead; rows * cols],
        }
    }

    /// Each cell is independently alive with probability `density`.
    pub fn random<R: Rng + ?Sized>(rows: usize, cols: usize, density: f64, rng: &mut R) -> Self {
        let cells = (0..rows * cols)
            .map(|_| if rng.gen_bool(density) { Cell::Alive } else { Cell::Dead })
            .collect();
        Self { rows, cols, cells }
    }

    fn idx(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[self.idx(row, col)]
    }

    pub fn set(&mut self, row: usize, col: usize, value: Cell) {
        let idx = self.idx(row, col);
        self.cells[idx] = value;
    }

    /// Copy of this board with `(row, col)` flipped. Coordinates must be in bounds.
    pub fn toggled(&self, row: usize, col: usize) -> Self {
        let mut next = self.clone();
        next.set(row, col, self.get(row, col).flipped());
        next
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.population() == 0
    }

    /// Builds a board from rows of `#` (alive) and `.` (dead).
    #[cfg(test)]
    pub fn from_rows(rows: &[&str]) -> Self {
        let cols = rows.first().map_or(0, |r| r.len());
        let mut board = Board::new(rows.len(), cols);
        for (r, line) in rows.iter().enumerate() {
            assert_eq!(line.len(), cols, "ragged fixture row {r}");
            for (c, ch) in line.chars().enumerate() {
                if ch == '#' {
                    board.set(r, c, Cell::Alive);
                }
            }
        }
        board
    }
}

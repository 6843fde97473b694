use crate::error::QrError;

/// The state of a single module during construction. `Reserved` marks a cell
/// set aside for format information that hasn't been written yet; reserved
/// cells count as light for penalty-scoring purposes.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
enum Cell {
    Unset,
    Light,
    Dark,
    Reserved,
}

/// The square grid of modules being built up into a finished QR Code symbol.
///
/// Addressed as `(row, col)`, both zero-based, with `(0, 0)` at the top-left
/// corner. `function_map` tracks which cells belong to finder/timing/alignment
/// patterns or reserved format-information cells, so the data placer and
/// masking step can skip over them.
pub struct Matrix {
    pub size: i32,
    cells: Vec<Cell>,
    function_map: Vec<bool>,
}

impl Matrix {
    pub fn new(size: i32) -> Self {
        let area = (size * size) as usize;
        Self {
            size,
            cells: vec![Cell::Unset; area],
            function_map: vec![false; area],
        }
    }

    fn index(&self, row: i32, col: i32) -> usize {
        debug_assert!((0..self.size).contains(&row) && (0..self.size).contains(&col));
        (row * self.size + col) as usize
    }

    pub fn is_function(&self, row: i32, col: i32) -> bool {
        self.function_map[self.index(row, col)]
    }

    pub fn is_dark(&self, row: i32, col: i32) -> bool {
        self.cells[self.index(row, col)] == Cell::Dark
    }

    /// Sets a function-pattern cell (finder, timing, alignment, or the fixed
    /// dark module) to a fixed color.
    pub fn set_function_dark(&mut self, row: i32, col: i32, dark: bool) {
        let i = self.index(row, col);
        self.cells[i] = if dark { Cell::Dark } else { Cell::Light };
        self.function_map[i] = true;
    }

    /// Marks a cell as reserved for format information, to be filled in later
    /// by `write_reserved`. Counts as a function cell for layout purposes.
    pub fn reserve(&mut self, row: i32, col: i32) {
        let i = self.index(row, col);
        self.cells[i] = Cell::Reserved;
        self.function_map[i] = true;
    }

    /// Writes the final value of a previously reserved format-information cell.
    pub fn write_reserved(&mut self, row: i32, col: i32, dark: bool) {
        let i = self.index(row, col);
        self.cells[i] = if dark { Cell::Dark } else { Cell::Light };
    }

    /// Writes a data-bit cell. No-op on function cells, since the data placer
    /// already skips them; kept defensive for callers outside the placer.
    pub fn set_data(&mut self, row: i32, col: i32, dark: bool) {
        let i = self.index(row, col);
        if !self.function_map[i] {
            self.cells[i] = if dark { Cell::Dark } else { Cell::Light };
        }
    }

    /// Flips a data-bit cell's color. Applying a mask twice with this is a
    /// no-op, which lets the best-mask search undo a trial mask cheaply.
    pub fn flip_data(&mut self, row: i32, col: i32) {
        let i = self.index(row, col);
        if self.function_map[i] {
            return;
        }
        self.cells[i] = match self.cells[i] {
            Cell::Dark => Cell::Light,
            Cell::Light => Cell::Dark,
            other => other,
        };
    }

    /// Snapshots the matrix as booleans, with any still-reserved cell read as
    /// light. Used for intermediate pipeline stages, before format information
    /// has been written.
    pub fn snapshot_with_reserved_as_light(&self) -> Vec<Vec<bool>> {
        (0..self.size)
            .map(|row| (0..self.size).map(|col| self.is_dark(row, col)).collect())
            .collect()
    }

    /// Consumes the matrix into its final boolean grid. Fails if any cell was
    /// never assigned a color, which would indicate a layout bug.
    pub fn into_bool_grid(self) -> Result<Vec<Vec<bool>>, QrError> {
        let size = self.size;
        let mut grid = Vec::with_capacity(size as usize);
        for row in 0..size {
            let mut line = Vec::with_capacity(size as usize);
            for col in 0..size {
                match self.cells[self.index(row, col)] {
                    Cell::Dark => line.push(true),
                    Cell::Light => line.push(false),
                    _ => {
                        return Err(QrError::InternalInvariant(
                            "matrix has an unfinished cell after construction",
                        ))
                    }
                }
            }
            grid.push(line);
        }
        Ok(grid)
    }
}

use std::fmt;
use std::fmt::Write as _;
use std::fs::File;
use std::io;
use std::io::BufRead;
use std::io::BufReader;
use std::path::Path;
use std::str::FromStr;

use thiserror::Error;
use tracing::debug;
use tracing::trace;

use crate::parse_util;
use crate::rule_set::B3S23;
use crate::rule_set::RuleSet;

const ALIVE: u8 = b'O';
const DEAD: u8 = b'.';

/// Offsets of the 8 cells surrounding a cell, as `(row, col)`.
const NEIGHBORHOOD: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// The board could not be built. Why is only logged, never reported.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("Invalid board file")]
pub struct InvalidBoard;

#[derive(Debug, Error)]
enum BoardDefect {
    #[error("Failed to read board: {0}")]
    Io(#[from] io::Error),

    #[error("Board has no rows")]
    Empty,

    #[error("Row {row} has length {len}, expected {cols}")]
    Ragged { row: usize, len: usize, cols: usize },

    #[error("Unrecognized byte 0x{got:02X} at row {row}, column {col}")]
    UnrecognizedByte { row: usize, col: usize, got: u8 },
}

impl From<BoardDefect> for InvalidBoard {
    fn from(defect: BoardDefect) -> Self {
        debug!(%defect, "Rejected board");

        InvalidBoard
    }
}

/// A bounded Game of Life grid. Cells past the edges are always dead; nothing wraps around.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,

    /// Row major, `true` is alive. Always `rows * cols` long.
    cells: Vec<bool>,
}

impl Board {
    /// Build a board from its rows, top to bottom. Every row must be as long as the first one, and
    /// made only of `O` (alive) and `.` (dead).
    ///
    /// Rows of length zero are accepted, as long as all of them are.
    pub fn from_lines<I, S>(lines: I) -> Result<Self, InvalidBoard>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<[u8]>,
    {
        Ok(Self::read_rows(lines)?)
    }

    fn read_rows<I, S>(lines: I) -> Result<Self, BoardDefect>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<[u8]>,
    {
        let mut lines = lines.into_iter().peekable();

        let cols = match lines.peek() {
            Some(first) => first.as_ref().len(),
            None => return Err(BoardDefect::Empty),
        };

        let mut rows = 0;
        let mut cells = Vec::new();

        for line in lines {
            let line = line.as_ref();

            if line.len() != cols {
                return Err(BoardDefect::Ragged {
                    row: rows,
                    len: line.len(),
                    cols,
                });
            }

            for (col, &b) in line.iter().enumerate() {
                let alive = match b {
                    ALIVE => true,
                    DEAD => false,
                    got => {
                        return Err(BoardDefect::UnrecognizedByte { row: rows, col, got });
                    }
                };

                cells.push(alive);
            }

            rows += 1;
        }

        debug!(rows, cols, "Parsed board");

        Ok(Self { rows, cols, cells })
    }

    /// Parse a whole board description. Lines end with `\n` or `\r\n`, and a trailing linebreak
    /// does not add a row.
    pub fn from_bytes(mut bytes: &[u8]) -> Result<Self, InvalidBoard> {
        let mut lines = Vec::new();

        while let (Some(line), rest) = parse_util::take_line(bytes) {
            lines.push(line);
            bytes = rest;
        }

        Self::from_lines(lines)
    }

    /// Read a board from `reader`. Any read failure, including invalid UTF-8, makes the board
    /// invalid.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, InvalidBoard> {
        let lines = reader
            .lines()
            .collect::<io::Result<Vec<_>>>()
            .map_err(BoardDefect::Io)?;

        Self::from_lines(lines)
    }

    /// Read a board from the file at `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, InvalidBoard> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Opening board");

        let file = File::open(path).map_err(BoardDefect::Io)?;

        Self::from_reader(BufReader::new(file))
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether the cell at `(row, col)` is alive. `None` if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<bool> {
        if row < self.rows && col < self.cols {
            Some(self.cells[self.index(row, col)])
        } else {
            None
        }
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Number of live cells among the 8 surrounding `(row, col)`. Positions outside the board
    /// don't count.
    pub fn live_neighbors(&self, row: usize, col: usize) -> u8 {
        let mut n = 0;

        for (dr, dc) in NEIGHBORHOOD {
            let r = row.checked_add_signed(dr);
            let c = col.checked_add_signed(dc);

            let (Some(r), Some(c)) = (r, c) else {
                continue;
            };

            if let Some(true) = self.get(r, c) {
                n += 1;
            }
        }

        n
    }

    /// Advance one generation under Conway's rules.
    pub fn advance(&mut self) {
        self.advance_with(&B3S23);
    }

    /// Advance one generation under `rule`.
    ///
    /// Every neighbor count is taken from the current generation. The next one is built on the
    /// side and swapped in at the end.
    pub fn advance_with(&mut self, rule: &RuleSet) {
        let mut next = vec![false; self.cells.len()];

        for row in 0..self.rows {
            for col in 0..self.cols {
                let i = self.index(row, col);
                let n = self.live_neighbors(row, col);

                next[i] = rule.next_state(self.cells[i], n);
            }
        }

        self.cells = next;

        trace!(population = self.population(), "Advanced generation");
    }

    /// Advance `n` generations under Conway's rules.
    pub fn advance_by(&mut self, n: usize) {
        for _ in 0..n {
            self.advance();
        }
    }

    fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    fn row(&self, row: usize) -> &[bool] {
        let start = self.index(row, 0);

        &self.cells[start..start + self.cols]
    }
}

impl FromStr for Board {
    type Err = InvalidBoard;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_bytes(s.as_bytes())
    }
}

/// One line per row, `O` for alive and `.` for dead. Every row ends with `\n`.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for &alive in self.row(row) {
                let c = if alive { ALIVE } else { DEAD };
                f.write_char(c as char)?;
            }

            f.write_char('\n')?;
        }

        Ok(())
    }
}

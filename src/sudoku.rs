//! Sudoku as an exact cover problem.
//!
//! A 9×9 Sudoku maps onto a 324-column matrix: one column per cell ("this
//! cell holds some digit"), then one per (grid row, digit), one per (grid
//! column, digit), and one per (box, digit), inserted in exactly that order.
//! Each candidate placement of a digit in a cell becomes a matrix row
//! touching one column from each of the four families. A blank cell
//! contributes nine candidate rows, a clue exactly one, so a full puzzle
//! yields between 81 and 729 rows. Row identity encodes the placement as
//! `cell * 9 + digit`, which the decoder reverses after the search.
//!
//! Column insertion order matters: the search's tie-breaking follows ring
//! order, so reordering the families would change which of several valid
//! solutions is found first.

use std::fmt;

use crate::error::{PuzzleError, Result};
use crate::solver::matrix::{Matrix, RowId};
use crate::solver::search::{SearchStats, Solver};

/// Cells in a grid, and also the size of each constraint family.
pub const GRID_CELLS: usize = 81;

/// Total constraint columns: cell + row + column + box families.
pub const MATRIX_COLUMNS: usize = 4 * GRID_CELLS;

/// The blank-cell marker accepted in puzzle strings.
pub const BLANK: char = '.';

/// A validated puzzle: 81 cells, each either a clue in `1..=9` or blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    cells: [Option<u8>; GRID_CELLS],
}

impl Puzzle {
    /// Parses an 81-character grid string over `{'1'..'9', '.'}`.
    ///
    /// Validation happens here and only here; the solver assumes a
    /// well-formed matrix and performs none of its own.
    pub fn parse(grid: &str) -> Result<Self> {
        let found = grid.chars().count();
        if found != GRID_CELLS {
            return Err(PuzzleError::BadLength {
                expected: GRID_CELLS,
                found,
            }
            .into());
        }
        let mut cells = [None; GRID_CELLS];
        for (position, found) in grid.chars().enumerate() {
            cells[position] = match found {
                BLANK => None,
                '1'..='9' => Some(found as u8 - b'0'),
                _ => return Err(PuzzleError::BadCharacter { position, found }.into()),
            };
        }
        Ok(Puzzle { cells })
    }

    /// Builds the exact cover matrix for this puzzle.
    pub fn build_matrix(&self) -> Matrix {
        let mut matrix = Matrix::new(MATRIX_COLUMNS);
        for (cell, clue) in self.cells.iter().enumerate() {
            match *clue {
                Some(digit) => matrix.add_row(row_id(cell, digit), &constraint_columns(cell, digit)),
                None => {
                    for digit in 1..=9 {
                        matrix.add_row(row_id(cell, digit), &constraint_columns(cell, digit));
                    }
                }
            }
        }
        matrix
    }

    /// Solves the puzzle, returning the completed grid if one exists.
    ///
    /// `None` means the clues admit no valid completion; it is an answer,
    /// not an error.
    pub fn solve(&self) -> (Option<SolvedGrid>, SearchStats) {
        let mut matrix = self.build_matrix();
        let (rows, stats) = Solver::new().solve(&mut matrix);
        (rows.map(|rows| SolvedGrid::from_rows(&rows)), stats)
    }

    /// The clue at `cell`, if any.
    pub fn clue(&self, cell: usize) -> Option<u8> {
        self.cells[cell]
    }
}

/// Row identity for placing `digit` in `cell`: `cell * 9 + digit`.
fn row_id(cell: usize, digit: u8) -> RowId {
    cell * 9 + digit as usize
}

/// The four constraint columns touched by placing `digit` in `cell`, one
/// per family, in family order.
fn constraint_columns(cell: usize, digit: u8) -> [usize; 4] {
    let d = digit as usize - 1;
    [
        cell,
        GRID_CELLS + cell / 9 * 9 + d,
        2 * GRID_CELLS + cell % 9 * 9 + d,
        3 * GRID_CELLS + cell / 27 * 27 + cell % 9 / 3 * 9 + d,
    ]
}

/// A completed grid decoded from the solver's chosen rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolvedGrid {
    digits: [u8; GRID_CELLS],
}

impl SolvedGrid {
    fn from_rows(rows: &[RowId]) -> Self {
        let mut digits = [0u8; GRID_CELLS];
        for &row in rows {
            // `row` is cell * 9 + digit with digit in 1..=9, so remainder 0
            // stands for digit 9.
            let digit = match (row % 9) as u8 {
                0 => 9,
                digit => digit,
            };
            digits[(row - 1) / 9] = digit;
        }
        SolvedGrid { digits }
    }

    /// Digits in row-major order.
    pub fn digits(&self) -> &[u8; GRID_CELLS] {
        &self.digits
    }

    /// The grid as an 81-character digit string.
    pub fn to_line(&self) -> String {
        self.digits.iter().map(|d| char::from(b'0' + d)).collect()
    }

    /// Checks the Sudoku rules: each row, column and box holds each digit
    /// exactly once.
    pub fn is_valid(&self) -> bool {
        let mut rows = [0u16; 9];
        let mut cols = [0u16; 9];
        let mut boxes = [0u16; 9];
        for (cell, &digit) in self.digits.iter().enumerate() {
            if !(1..=9).contains(&digit) {
                return false;
            }
            let bit = 1u16 << (digit - 1);
            let (r, c) = (cell / 9, cell % 9);
            let b = r / 3 * 3 + c / 3;
            if rows[r] & bit != 0 || cols[c] & bit != 0 || boxes[b] & bit != 0 {
                return false;
            }
            rows[r] |= bit;
            cols[c] |= bit;
            boxes[b] |= bit;
        }
        true
    }

    /// Checks that every clue of `puzzle` survives in this grid.
    pub fn respects(&self, puzzle: &Puzzle) -> bool {
        self.digits
            .iter()
            .enumerate()
            .all(|(cell, &digit)| puzzle.clue(cell).map_or(true, |clue| clue == digit))
    }
}

impl fmt::Display for SolvedGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const BORDER: &str = "+-------+-------+-------+";
        for band in 0..3 {
            writeln!(f, "{BORDER}")?;
            for r in 0..3 {
                let row = band * 3 + r;
                write!(f, "|")?;
                for c in 0..9 {
                    write!(f, " {}", self.digits[row * 9 + c])?;
                    if c % 3 == 2 {
                        write!(f, " |")?;
                    }
                }
                writeln!(f)?;
            }
        }
        write!(f, "{BORDER}")
    }
}


#[cfg(test)]
mod prop_tests {
    use proptest::prelude::*;

    use super::{Puzzle, BLANK};

    type Grid = [[u8; 9]; 9];

    // A known, valid, solved Sudoku grid to use as a seed.
    const SEED_GRID: Grid = [
        [5, 3, 4, 6, 7, 8, 9, 1, 2],
        [6, 7, 2, 1, 9, 5, 3, 4, 8],
        [1, 9, 8, 3, 4, 2, 5, 6, 7],
        [8, 5, 9, 7, 6, 1, 4, 2, 3],
        [4, 2, 6, 8, 5, 3, 7, 9, 1],
        [7, 1, 3, 9, 2, 4, 8, 5, 6],
        [9, 6, 1, 5, 3, 7, 2, 8, 4],
        [2, 8, 7, 4, 1, 9, 6, 3, 5],
        [3, 4, 5, 2, 8, 6, 1, 7, 9],
    ];

    // Swaps two digits everywhere in the grid.
    fn relabel(grid: &mut Grid, a: u8, b: u8) {
        for row in grid.iter_mut() {
            for cell in row.iter_mut() {
                if *cell == a {
                    *cell = b;
                } else if *cell == b {
                    *cell = a;
                }
            }
        }
    }

    // Swaps two columns (validity-preserving within a 3-column band).
    fn swap_cols(grid: &mut Grid, c1: usize, c2: usize) {
        for row in grid.iter_mut() {
            row.swap(c1, c2);
        }
    }

    // Swaps two 3-row bands.
    fn swap_row_bands(grid: &mut Grid, b1: usize, b2: usize) {
        for i in 0..3 {
            grid.swap(b1 * 3 + i, b2 * 3 + i);
        }
    }

    // Swaps two 3-column bands.
    fn swap_col_bands(grid: &mut Grid, b1: usize, b2: usize) {
        for i in 0..3 {
            for row in grid.iter_mut() {
                row.swap(b1 * 3 + i, b2 * 3 + i);
            }
        }
    }

    fn grid_to_string(grid: &Grid, holes: &std::collections::HashSet<(usize, usize)>) -> String {
        let mut out = String::with_capacity(81);
        for r in 0..9 {
            for c in 0..9 {
                if holes.contains(&(r, c)) {
                    out.push(BLANK);
                } else {
                    out.push(char::from(b'0' + grid[r][c]));
                }
            }
        }
        out
    }

    // Generates a solved grid by applying validity-preserving
    // transformations to the seed, plus a set of cells to blank out.
    fn sudoku_puzzle_strategy() -> impl Strategy<Value = (String, Grid)> {
        let transformations = proptest::collection::vec(
            prop_oneof![
                // 0: Relabel two digits
                (1..=9usize, 1..=9usize)
                    .prop_filter("digits must be distinct", |(a, b)| a != b)
                    .prop_map(|(a, b)| (0usize, a, b, 0usize)),
                // 1: Swap rows within a band
                (0..3usize, 0..3usize, 0..3usize)
                    .prop_filter("rows must be distinct", |(_, r1, r2)| r1 != r2)
                    .prop_map(|(band, r1, r2)| (1usize, band, r1, r2)),
                // 2: Swap cols within a band
                (0..3usize, 0..3usize, 0..3usize)
                    .prop_filter("cols must be distinct", |(_, c1, c2)| c1 != c2)
                    .prop_map(|(band, c1, c2)| (2usize, band, c1, c2)),
                // 3: Swap row bands
                (0..3usize, 0..3usize)
                    .prop_filter("bands must be distinct", |(b1, b2)| b1 != b2)
                    .prop_map(|(b1, b2)| (3usize, b1, b2, 0usize)),
                // 4: Swap col bands
                (0..3usize, 0..3usize)
                    .prop_filter("bands must be distinct", |(b1, b2)| b1 != b2)
                    .prop_map(|(b1, b2)| (4usize, b1, b2, 0usize)),
            ],
            20..=50,
        );

        transformations
            .prop_flat_map(|transformations| {
                let mut solved = SEED_GRID;
                for t in transformations {
                    match t {
                        (0, a, b, _) => relabel(&mut solved, a as u8, b as u8),
                        (1, band, r1, r2) => solved.swap(band * 3 + r1, band * 3 + r2),
                        (2, band, c1, c2) => swap_cols(&mut solved, band * 3 + c1, band * 3 + c2),
                        (3, b1, b2, _) => swap_row_bands(&mut solved, b1, b2),
                        (4, b1, b2, _) => swap_col_bands(&mut solved, b1, b2),
                        _ => unreachable!(),
                    }
                }
                let holes = proptest::collection::hash_set((0..9usize, 0..9usize), 20..=60);
                (Just(solved), holes)
            })
            .prop_map(|(solved, holes)| (grid_to_string(&solved, &holes), solved))
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn generated_puzzles_solve_to_valid_grids((grid, _solved) in sudoku_puzzle_strategy()) {
            let puzzle = Puzzle::parse(&grid).unwrap();
            let (solution, _stats) = puzzle.solve();
            let solved = solution.expect("puzzles derived from a solved grid are solvable");
            prop_assert!(solved.is_valid());
            prop_assert!(solved.respects(&puzzle));
        }
    }
}

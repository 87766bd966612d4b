//! Salto solves exact cover problems with Knuth's Dancing Links (DLX)
//! technique, and ships a Sudoku frontend built on top of it.
//!
//! The crate follows a two-layered architecture: a problem-agnostic solver
//! backend and a problem-specific frontend.
//!
//! # Core Concepts
//!
//! - **[`Matrix`]**: the sparse toroidal matrix. Columns are the constraints
//!   that must each be satisfied exactly once; rows are the candidate
//!   choices. Covering a column reversibly removes it, and every row that
//!   would satisfy it, from the live structure.
//! - **[`Solver`]**: the backtracking search engine. It repeatedly covers
//!   the most constrained column, tries each of its candidate rows, and
//!   undoes its edits on backtrack. It returns the first cover found, as a
//!   sequence of row identifiers, along with [`SearchStats`].
//! - **[`Puzzle`]**: the Sudoku frontend. It validates an 81-character grid
//!   string, translates it into a 324-column matrix, and decodes the chosen
//!   rows back into a completed grid.
//!
//! # Example: A Small Exact Cover Instance
//!
//! ```
//! use salto::solver::matrix::Matrix;
//! use salto::solver::search::Solver;
//!
//! let mut matrix = Matrix::new(3);
//! matrix.add_row(1, &[0, 2]);
//! matrix.add_row(2, &[1]);
//! matrix.add_row(3, &[0, 1, 2]);
//!
//! let (solution, _stats) = Solver::new().solve(&mut matrix);
//! let mut rows = solution.unwrap();
//! rows.sort_unstable();
//! assert_eq!(rows, vec![1, 2]);
//! ```
//!
//! # Example: Solving Sudoku
//!
//! ```
//! use salto::sudoku::Puzzle;
//!
//! let grid = "7......5..5.98472383..2...9.79.58.4...........6.14.97.5...3..94126495.8..4......1";
//! let puzzle = Puzzle::parse(grid).unwrap();
//! let (solution, _stats) = puzzle.solve();
//! assert!(solution.unwrap().is_valid());
//! ```
//!
//! [`Matrix`]: solver::matrix::Matrix
//! [`Solver`]: solver::search::Solver
//! [`SearchStats`]: solver::search::SearchStats
//! [`Puzzle`]: sudoku::Puzzle
pub mod error;
pub mod solver;
pub mod sudoku;

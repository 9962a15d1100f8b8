//! Rectangular grids of named cells and the 2×2 completion search.
//!
//! A [`Grid`] is shape only: rows of [`Cell`]s, each either `Occupied` with
//! a name or `Blank`. Colors live in the [`Palette`]; the grid tells the
//! completion search which names sit next to which.
//!
//! [`complete_table`] scans every 2×2 sub-square (any pair of distinct rows
//! crossed with any pair of distinct columns, adjacency not required) and,
//! where exactly three of four named corners are colored, derives the
//! fourth by analogy. One call is a single pass; completions made during a
//! pass can unlock further squares, so callers re-invoke until a pass
//! reports zero.

use log::warn;

use crate::analogy::analogy4;
use crate::registry::Palette;

/// One position in a grid: a named cell or an intentional gap.
///
/// Blank positions never participate in completion. The distinction is
/// made once when the grid is built, not re-derived per scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    /// A named cell, addressable in the palette.
    Occupied(String),
    /// An empty position, e.g. padding on a short row.
    Blank,
}

impl Cell {
    /// The cell's name, if occupied.
    pub fn name(&self) -> Option<&str> {
        match self {
            Cell::Occupied(name) => Some(name),
            Cell::Blank => None,
        }
    }
}

/// A rectangular arrangement of named cells.
///
/// # Example
///
/// ```rust
/// use tintgrid::{Cell, Grid};
///
/// // Short rows pad with blanks; empty strings are blanks too.
/// let grid = Grid::from_rows([
///     vec!["stone"],
///     vec!["sand", "gravel", "clay"],
/// ]);
/// assert_eq!(grid.rows(), 2);
/// assert_eq!(grid.cols(), 3);
/// assert_eq!(grid.cell(0, 1), &Cell::Blank);
/// assert_eq!(grid.name_at(1, 2), Some("clay"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Vec<Cell>>,
}

impl Grid {
    /// Builds a grid from rows of names.
    ///
    /// Rows may be ragged; every row is padded with [`Cell::Blank`] to the
    /// longest row's width. Names are trimmed, and empty (or
    /// whitespace-only) names become blanks.
    pub fn from_rows<R, S>(rows: R) -> Grid
    where
        R: IntoIterator,
        R::Item: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut cells: Vec<Vec<Cell>> = rows
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|name| {
                        let name = name.as_ref().trim();
                        if name.is_empty() {
                            Cell::Blank
                        } else {
                            Cell::Occupied(name.to_string())
                        }
                    })
                    .collect()
            })
            .collect();

        let width = cells.iter().map(Vec::len).max().unwrap_or(0);
        for row in &mut cells {
            row.resize(width, Cell::Blank);
        }
        Grid { cells }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    /// Number of columns (uniform across rows).
    pub fn cols(&self) -> usize {
        self.cells.first().map_or(0, Vec::len)
    }

    /// The cell at a row/column position.
    ///
    /// # Panics
    ///
    /// Panics if the position is out of bounds.
    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        &self.cells[row][col]
    }

    /// The name at a position, or `None` for blanks.
    pub fn name_at(&self, row: usize, col: usize) -> Option<&str> {
        self.cells[row][col].name()
    }

    /// Iterates over every occupied cell's name.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().flatten().filter_map(Cell::name)
    }

    /// Declares every occupied cell in the palette.
    ///
    /// Names already present in the palette are diagnosed as duplicates
    /// and keep their existing entry (first registration wins).
    pub fn register(&self, palette: &mut Palette) {
        for name in self.names() {
            if palette.contains(name) {
                warn!("duplicate cell name {name:?}; keeping the first registration");
            } else {
                palette.declare(name);
            }
        }
    }
}

/// Runs one completion pass over the grid, returning how many cells it
/// newly colored.
///
/// Every square with all four corners occupied, exactly three of them
/// colored and the fourth uncolored, is completed by [`analogy4`] with the
/// operands oriented so the uncolored corner is the target:
///
/// ```text
/// A B      missing D: A:B :: C:D      missing C: B:A :: D:C
/// C D      missing B: C:D :: A:B      missing A: D:C :: B:A
/// ```
///
/// The scan visits each square under every row/column permutation, so a
/// completion made early in the pass can feed later squares. Re-running
/// after no color changes completes nothing and returns 0.
pub fn complete_table(palette: &mut Palette, grid: &Grid) -> usize {
    let (rows, cols) = (grid.rows(), grid.cols());
    if rows < 2 || cols < 2 {
        warn!("grid is too small to complete ({rows}x{cols})");
        return 0;
    }

    let mut completions = 0;
    for r in 0..rows {
        for c in 0..cols {
            for r2 in 0..rows {
                for c2 in 0..cols {
                    if r == r2 || c == c2 {
                        continue;
                    }
                    // Corners in reading order: top-left, top-right,
                    // bottom-left, bottom-right relative to (r, c).
                    let corners = [
                        grid.name_at(r, c),
                        grid.name_at(r, c2),
                        grid.name_at(r2, c),
                        grid.name_at(r2, c2),
                    ];
                    let [Some(a), Some(b), Some(cc), Some(d)] = corners else {
                        continue;
                    };

                    let named = [a, b, cc, d];
                    let uncolored: Vec<usize> = named
                        .iter()
                        .enumerate()
                        .filter(|(_, name)| palette.color(name).is_none())
                        .map(|(i, _)| i)
                        .collect();
                    if uncolored.len() != 1 {
                        continue;
                    }

                    let result = match uncolored[0] {
                        0 => analogy4(palette, d, cc, b, a),
                        1 => analogy4(palette, cc, d, a, b),
                        2 => analogy4(palette, b, a, d, cc),
                        _ => analogy4(palette, a, b, cc, d),
                    };
                    if result.is_ok() {
                        completions += 1;
                    }
                }
            }
        }
    }
    completions
}

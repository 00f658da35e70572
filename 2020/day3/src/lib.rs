use std::{ops::AddAssign, path::Path};

use anyhow::{Context, Result};
use rayon::prelude::*;
use tracing::debug;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Inconsistent column number({found}) found, expect {expected} as earlier rows did.")]
    InconsistentRow { found: usize, expected: usize },
    #[error("Found invalid character({0}) for tile in grid.")]
    InvalidTile(char),
    #[error("Found empty row in grid.")]
    EmptyRow,
    #[error("Given grid doesn't have any row.")]
    EmptyGrid,
    #[error("Slope must go down at least one row each step.")]
    ZeroDownStep,
}

/// Slope checked in part 1, as (right, down).
pub const PART1_SLOPE: (usize, usize) = (3, 1);
/// Slopes whose tree counts are multiplied in part 2, as (right, down).
pub const PART2_SLOPES: [(usize, usize); 5] = [(1, 1), (3, 1), (5, 1), (7, 1), (1, 2)];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Open,
    Tree,
}

impl TryFrom<char> for Tile {
    type Error = Error;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            '.' => Ok(Tile::Open),
            '#' => Ok(Tile::Tree),
            other => Err(Error::InvalidTile(other)),
        }
    }
}

// Only goes right and down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slope {
    right: usize,
    down: usize,
}

impl Slope {
    pub fn new(right: usize, down: usize) -> Result<Self, Error> {
        if down == 0 {
            return Err(Error::ZeroDownStep);
        }

        Ok(Self { right, down })
    }
}

impl TryFrom<(usize, usize)> for Slope {
    type Error = Error;

    fn try_from((right, down): (usize, usize)) -> Result<Self, Self::Error> {
        Slope::new(right, down)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Position {
    r: usize,
    c: usize,
}

impl Position {
    pub fn new(r: usize, c: usize) -> Self {
        Self { r, c }
    }
}

impl AddAssign<&Slope> for Position {
    fn add_assign(&mut self, rhs: &Slope) {
        self.r += rhs.down;
        self.c += rhs.right;
    }
}

/// Map of the slope, repeating itself to the right without end.
#[derive(Debug)]
pub struct Grid {
    tiles: Vec<Tile>,
    row_n: usize,
    col_n: usize,
}

impl Grid {
    pub fn row_n(&self) -> usize {
        self.row_n
    }

    pub fn col_n(&self) -> usize {
        self.col_n
    }

    /// Tile at `pos`, wrapping the column. `None` once below the last row.
    pub fn tile(&self, pos: &Position) -> Option<Tile> {
        if pos.r >= self.row_n {
            return None;
        }

        self.tiles.get(pos.r * self.col_n + pos.c % self.col_n).copied()
    }

    /// Tiles visited going along `slope` from the top-left corner, the corner itself excluded.
    pub fn tiles_on_slope(&self, slope: Slope) -> TilesOnSlope<'_> {
        TilesOnSlope {
            grid: self,
            slope,
            pos: Position::default(),
        }
    }

    pub fn count_trees(&self, slope: Slope) -> usize {
        self.tiles_on_slope(slope)
            .filter(|t| *t == Tile::Tree)
            .count()
    }
}

pub struct TilesOnSlope<'a> {
    grid: &'a Grid,
    slope: Slope,
    pos: Position,
}

impl Iterator for TilesOnSlope<'_> {
    type Item = Tile;

    fn next(&mut self) -> Option<Self::Item> {
        self.pos += &self.slope;
        self.grid.tile(&self.pos)
    }
}

/// Product of the tree counts along every slope in `slopes`.
pub fn tree_product(grid: &Grid, slopes: &[Slope]) -> usize {
    slopes
        .par_iter()
        .map(|slope| {
            let tree_n = grid.count_trees(*slope);
            debug!(?slope, tree_n, "walked slope");
            tree_n
        })
        .product()
}

#[derive(Default)]
struct GridBuilder {
    tiles: Vec<Tile>,
    col_n: Option<usize>,
    row_n: usize,
}

impl GridBuilder {
    fn push_row(&mut self, row_str: &str) -> Result<(), Error> {
        let this_col_n = row_str.chars().count();
        if this_col_n == 0 {
            return Err(Error::EmptyRow);
        }

        let expected = *self.col_n.get_or_insert(this_col_n);
        if expected != this_col_n {
            return Err(Error::InconsistentRow {
                found: this_col_n,
                expected,
            });
        }

        for c in row_str.chars() {
            self.tiles.push(Tile::try_from(c)?);
        }
        self.row_n += 1;

        Ok(())
    }

    fn build(self) -> Result<Grid, Error> {
        let col_n = self.col_n.ok_or(Error::EmptyGrid)?;
        Ok(Grid {
            tiles: self.tiles,
            row_n: self.row_n,
            col_n,
        })
    }
}

pub fn parse_grid<I, S>(rows: I) -> Result<Grid, Error>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut builder = GridBuilder::default();
    for row in rows {
        builder.push_row(row.as_ref())?;
    }

    builder.build()
}

pub fn read_grid<P: AsRef<Path>>(path: P) -> Result<Grid> {
    let rows = aoc_utils::read_lines(&path)?;
    let grid = parse_grid(&rows).context("Failed to parse grid from given rows.")?;
    debug!(rows = grid.row_n(), cols = grid.col_n(), "read grid");

    Ok(grid)
}

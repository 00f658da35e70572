use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, trace};

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Boarding pass code({0}) has {1} symbols, expect 10.")]
    MalformedCode(String, usize),
    #[error("Invalid symbol({symbol}) at position {pos} of boarding pass code, expect '{lower}' or '{upper}'.")]
    InvalidSymbol {
        symbol: char,
        pos: usize,
        lower: char,
        upper: char,
    },
    #[error("There isn't any missing seat id among given {0} seat id(s).")]
    NoMissingSeat(usize),
    #[error("Found at least two missing seat ids({0}, {1}), expect only one.")]
    AmbiguousMissingSeat(usize, usize),
    #[error("Seat ids({0}, {1}) break the contiguous id sequence.")]
    NonContiguousSeats(usize, usize),
}

/// Number of symbols in a boarding pass code.
pub const CODE_LEN: usize = 10;

const ROW_AXIS: Axis = Axis {
    lower: 'F',
    upper: 'B',
    max: 127,
};
const COL_AXIS: Axis = Axis {
    lower: 'L',
    upper: 'R',
    max: 7,
};
const ROW_SYMBOL_N: usize = 7;

// One dimension of the seat map, encoded by halving [0, max].
struct Axis {
    lower: char,
    upper: char,
    max: usize,
}

impl Axis {
    fn narrow(&self, symbols: &[char], offset: usize) -> Result<usize, Error> {
        let (mut start, mut end) = (0, self.max);
        for (ind, &c) in symbols.iter().enumerate() {
            let mid = (start + end + 1) / 2;
            if c == self.upper {
                start = mid;
            } else if c == self.lower {
                end = mid - 1;
            } else {
                return Err(Error::InvalidSymbol {
                    symbol: c,
                    pos: offset + ind,
                    lower: self.lower,
                    upper: self.upper,
                });
            }
        }

        Ok(start)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Seat {
    row: usize,
    col: usize,
}

impl Seat {
    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    pub fn coord(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    pub fn id(&self) -> usize {
        self.row * 8 + self.col
    }
}

impl TryFrom<&str> for Seat {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        decode(value)
    }
}

/// Decode a boarding pass code like `FBFBBFFRLR` into its seat.
pub fn decode(code: &str) -> Result<Seat, Error> {
    let symbols = code.chars().collect::<Vec<_>>();
    if symbols.len() != CODE_LEN {
        return Err(Error::MalformedCode(code.to_string(), symbols.len()));
    }

    let (row_symbols, col_symbols) = symbols.split_at(ROW_SYMBOL_N);
    let row = ROW_AXIS.narrow(row_symbols, 0)?;
    let col = COL_AXIS.narrow(col_symbols, ROW_SYMBOL_N)?;
    trace!(code, row, col, "decoded boarding pass");

    Ok(Seat { row, col })
}

/// Find the only seat id absent from `ids`, whose neighbours on both sides are present.
pub fn find_missing_id(ids: &[usize]) -> Result<usize, Error> {
    let mut ids = ids.to_vec();
    ids.sort_unstable();

    let mut missing_id = None;
    for pair in ids.windows(2) {
        match pair[1] - pair[0] {
            1 => {}
            2 => {
                let this_id = pair[0] + 1;
                if let Some(first_id) = missing_id.replace(this_id) {
                    return Err(Error::AmbiguousMissingSeat(first_id, this_id));
                }
            }
            _ => return Err(Error::NonContiguousSeats(pair[0], pair[1])),
        }
    }

    missing_id.ok_or(Error::NoMissingSeat(ids.len()))
}

pub fn read_seats<P: AsRef<Path>>(path: P) -> Result<Vec<Seat>> {
    let seats = aoc_utils::read_lines(&path)?
        .iter()
        .map(|s| decode(s).with_context(|| format!("Failed to decode boarding pass({}).", s)))
        .collect::<Result<Vec<_>>>()?;
    debug!(count = seats.len(), "read boarding passes");

    Ok(seats)
}

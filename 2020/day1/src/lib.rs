use std::{collections::HashSet, path::Path};

use anyhow::{Context, Result};
use tracing::debug;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Invalid string({0}) found in input, expect unsigned integers.")]
    InvalidEntry(String),
    #[error("Can't find {count} entries whose sum is {target} in given inputs.")]
    NoCombination { count: usize, target: u64 },
}

/// Sum the expense report entries have to add up to.
pub const TARGET_SUM: u64 = 2020;

/// Find `count` entries (distinct by position) whose sum is `target`.
pub fn find_entries_of_sum(entries: &[u64], target: u64, count: usize) -> Option<Vec<u64>> {
    match count {
        0 => (target == 0).then(Vec::new),
        1 => entries.contains(&target).then(|| vec![target]),
        2 => find_pair_of_sum(entries, target).map(|(a, b)| vec![a, b]),
        _ => entries.iter().enumerate().find_map(|(ind, &n)| {
            let rest = target.checked_sub(n)?;
            let mut found = find_entries_of_sum(&entries[(ind + 1)..], rest, count - 1)?;
            found.insert(0, n);
            Some(found)
        }),
    }
}

fn find_pair_of_sum(entries: &[u64], target: u64) -> Option<(u64, u64)> {
    let mut seen = HashSet::with_capacity(entries.len());
    for &n in entries {
        if let Some(expect_n) = target.checked_sub(n) {
            if seen.contains(&expect_n) {
                return Some((expect_n, n));
            }
        }

        seen.insert(n);
    }

    None
}

/// Product of the `count` entries summing up to `target`.
pub fn product_of_sum(entries: &[u64], target: u64, count: usize) -> Result<u64, Error> {
    let found =
        find_entries_of_sum(entries, target, count).ok_or(Error::NoCombination { count, target })?;
    debug!(?found, target, "found entries");

    Ok(found.iter().product())
}

pub fn parse_entry(s: &str) -> Result<u64, Error> {
    s.trim()
        .parse::<u64>()
        .map_err(|_| Error::InvalidEntry(s.to_string()))
}

pub fn read_entries<P: AsRef<Path>>(path: P) -> Result<Vec<u64>> {
    aoc_utils::read_lines(&path)?
        .iter()
        .map(|s| parse_entry(s).context("Failed to parse expense report entry."))
        .collect()
}

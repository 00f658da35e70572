use std::path::Path;

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Invalid password record: {0}")]
    InvalidRecord(String),
    #[error("Found zero position while parsing password record({0}), positions start from 1.")]
    ZeroPosition(String),
}

/// The `a-b c` prefix of a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Policy {
    a: usize,
    b: usize,
    letter: char,
}

impl Policy {
    pub fn new(a: usize, b: usize, letter: char) -> Self {
        Self { a, b, letter }
    }
}

/// How a policy is interpreted.
pub trait Rule {
    fn check(policy: &Policy, password: &str) -> bool;
}

/// The letter occurs between `a` and `b` times, inclusive.
pub struct SledRentalRule;

impl Rule for SledRentalRule {
    fn check(policy: &Policy, password: &str) -> bool {
        let count = password.chars().filter(|c| *c == policy.letter).count();
        (policy.a..=policy.b).contains(&count)
    }
}

/// Exactly one of the 1-based positions `a` and `b` holds the letter.
pub struct TobogganRule;

impl Rule for TobogganRule {
    fn check(policy: &Policy, password: &str) -> bool {
        // Position 0 doesn't exist, so it never holds the letter.
        fn is_at(target_c: char, s: &str, pos: usize) -> bool {
            pos.checked_sub(1)
                .and_then(|ind| s.chars().nth(ind))
                .is_some_and(|c| c == target_c)
        }

        is_at(policy.letter, password, policy.a) ^ is_at(policy.letter, password, policy.b)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    policy: Policy,
    password: String,
}

impl TryFrom<&str> for Record {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        static PATTERN: Lazy<Regex> =
            Lazy::new(|| Regex::new(r"^(\d+)-(\d+) (\S): (\S*)$").unwrap());

        let invalid = || Error::InvalidRecord(value.to_string());
        let caps = PATTERN.captures(value.trim()).ok_or_else(invalid)?;
        let a = caps[1].parse::<usize>().map_err(|_| invalid())?;
        let b = caps[2].parse::<usize>().map_err(|_| invalid())?;
        if a == 0 || b == 0 {
            return Err(Error::ZeroPosition(value.to_string()));
        }

        let letter = caps[3].chars().next().ok_or_else(invalid)?;
        Ok(Record {
            policy: Policy::new(a, b, letter),
            password: caps[4].to_string(),
        })
    }
}

impl Record {
    pub fn policy(&self) -> &Policy {
        &self.policy
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn is_valid<R: Rule>(&self) -> bool {
        R::check(&self.policy, &self.password)
    }
}

pub fn count_valid<R: Rule>(records: &[Record]) -> usize {
    records.iter().filter(|r| r.is_valid::<R>()).count()
}

pub fn read_records<P: AsRef<Path>>(path: P) -> Result<Vec<Record>> {
    let records = aoc_utils::read_lines(&path)?
        .iter()
        .map(|s| Record::try_from(s.as_str()).context("Failed to parse password record."))
        .collect::<Result<Vec<_>>>()?;
    debug!(count = records.len(), "read password records");

    Ok(records)
}

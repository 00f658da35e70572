use std::{collections::HashMap, path::Path};

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Invalid field({0}) in passport text, expect key:value.")]
    InvalidField(String),
    #[error("Found repeated field({0}) in passport text.")]
    RepeatedField(String), // Name of repeated field.
}

/// Fields every passport needs, `cid` is optional.
pub const REQUIRED_FIELDS: [&str; 7] = ["byr", "iyr", "eyr", "hgt", "hcl", "ecl", "pid"];

pub trait FieldValidator {
    fn name(&self) -> &'static str;
    fn validate(&self, value: &str) -> bool;
}

/// Four digits within [min, max].
pub struct YearVad {
    name: &'static str,
    min: u32,
    max: u32,
}

impl YearVad {
    pub const fn new(name: &'static str, min: u32, max: u32) -> Self {
        Self { name, min, max }
    }
}

impl FieldValidator for YearVad {
    fn name(&self) -> &'static str {
        self.name
    }

    fn validate(&self, value: &str) -> bool {
        value.len() == 4
            && value.bytes().all(|b| b.is_ascii_digit())
            && value
                .parse::<u32>()
                .is_ok_and(|y| (self.min..=self.max).contains(&y))
    }
}

pub struct HeightVad;

impl FieldValidator for HeightVad {
    fn name(&self) -> &'static str {
        "hgt"
    }

    fn validate(&self, value: &str) -> bool {
        static PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+)(cm|in)$").unwrap());

        let Some(caps) = PATTERN.captures(value) else {
            return false;
        };
        let Ok(height) = caps[1].parse::<u32>() else {
            return false;
        };
        match &caps[2] {
            "cm" => (150..=193).contains(&height),
            _ => (59..=76).contains(&height),
        }
    }
}

pub struct HairColorVad;

impl FieldValidator for HairColorVad {
    fn name(&self) -> &'static str {
        "hcl"
    }

    fn validate(&self, value: &str) -> bool {
        static PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^#[0-9a-f]{6}$").unwrap());
        PATTERN.is_match(value)
    }
}

pub struct EyeColorVad;

impl FieldValidator for EyeColorVad {
    fn name(&self) -> &'static str {
        "ecl"
    }

    fn validate(&self, value: &str) -> bool {
        const COLORS: [&str; 7] = ["amb", "blu", "brn", "gry", "grn", "hzl", "oth"];
        COLORS.contains(&value)
    }
}

pub struct PassportIDVad;

impl FieldValidator for PassportIDVad {
    fn name(&self) -> &'static str {
        "pid"
    }

    fn validate(&self, value: &str) -> bool {
        static PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{9}$").unwrap());
        PATTERN.is_match(value)
    }
}

static BIRTH_YEAR_VAD: YearVad = YearVad::new("byr", 1920, 2002);
static ISSUE_YEAR_VAD: YearVad = YearVad::new("iyr", 2010, 2020);
static EXPIR_YEAR_VAD: YearVad = YearVad::new("eyr", 2020, 2030);

/// One validator per required field.
pub static VALIDATORS: [&(dyn FieldValidator + Sync); 7] = [
    &BIRTH_YEAR_VAD,
    &ISSUE_YEAR_VAD,
    &EXPIR_YEAR_VAD,
    &HeightVad,
    &HairColorVad,
    &EyeColorVad,
    &PassportIDVad,
];

#[derive(Debug, Default)]
pub struct Passport {
    fields: HashMap<String, String>,
}

impl Passport {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn contains_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn has_required_fields(&self) -> bool {
        REQUIRED_FIELDS.iter().all(|name| self.contains_field(name))
    }

    pub fn is_valid(&self) -> bool {
        VALIDATORS
            .iter()
            .all(|vad| self.field(vad.name()).is_some_and(|v| vad.validate(v)))
    }

    fn add_fields(&mut self, text: &str) -> Result<(), Error> {
        for token in text.split_whitespace() {
            let (key, value) = token
                .split_once(':')
                .filter(|(k, _)| !k.is_empty())
                .ok_or_else(|| Error::InvalidField(token.to_string()))?;
            if self.contains_field(key) {
                return Err(Error::RepeatedField(key.to_string()));
            }

            self.fields.insert(key.to_string(), value.to_string());
        }

        Ok(())
    }
}

/// Parse blank-line separated passport records.
pub fn parse_passports(text: &str) -> Result<Vec<Passport>, Error> {
    let mut passports = Vec::new();
    let mut cur_pp = None;

    for line in text.lines() {
        if line.trim().is_empty() {
            if let Some(pp) = cur_pp.take() {
                passports.push(pp);
            }
        } else {
            cur_pp
                .get_or_insert_with(Passport::default)
                .add_fields(line)?;
        }
    }

    // The last record may not be followed by a blank line.
    if let Some(pp) = cur_pp.take() {
        passports.push(pp);
    }

    Ok(passports)
}

pub fn read_passports<P: AsRef<Path>>(path: P) -> Result<Vec<Passport>> {
    let text = aoc_utils::read_text(&path)?;
    let passports = parse_passports(&text).context("Failed to parse passports.")?;
    debug!(count = passports.len(), "read passports");

    Ok(passports)
}

use anyhow::{Context, Result};
use aoc_utils::CliArgs;
use clap::Parser;
use day2::{SledRentalRule, TobogganRule};

fn main() -> Result<()> {
    aoc_utils::init_tracing();
    let args = CliArgs::parse();
    let input_path = args.input_path_or(env!("CARGO_MANIFEST_DIR"));
    let records = day2::read_records(&input_path).with_context(|| {
        format!(
            "Failed to read passwords from given input file({}).",
            input_path.display()
        )
    })?;

    println!("Part 1: {}", day2::count_valid::<SledRentalRule>(&records));
    println!("Part 2: {}", day2::count_valid::<TobogganRule>(&records));

    Ok(())
}

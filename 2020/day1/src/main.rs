use anyhow::{Context, Result};
use aoc_utils::CliArgs;
use clap::Parser;
use day1::TARGET_SUM;

fn main() -> Result<()> {
    aoc_utils::init_tracing();
    let args = CliArgs::parse();
    let input_path = args.input_path_or(env!("CARGO_MANIFEST_DIR"));
    let entries = day1::read_entries(&input_path).with_context(|| {
        format!(
            "Failed to read integers from given input file({}).",
            input_path.display()
        )
    })?;

    println!("Part 1: {}", day1::product_of_sum(&entries, TARGET_SUM, 2)?);
    println!("Part 2: {}", day1::product_of_sum(&entries, TARGET_SUM, 3)?);

    Ok(())
}

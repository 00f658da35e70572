use anyhow::{Context, Result};
use aoc_utils::CliArgs;
use clap::Parser;
use tracing::info;

fn main() -> Result<()> {
    aoc_utils::init_tracing();
    let args = CliArgs::parse();
    let input_path = args.input_path_or(env!("CARGO_MANIFEST_DIR"));
    let passports = day4::read_passports(&input_path).with_context(|| {
        format!(
            "Failed to read passports from given input file({}).",
            input_path.display()
        )
    })?;

    let complete_n = passports.iter().filter(|pp| pp.has_required_fields()).count();
    let valid_n = passports.iter().filter(|pp| pp.is_valid()).count();
    info!(total = passports.len(), complete_n, valid_n, "checked passports");

    println!("Part 1: {}", complete_n);
    println!("Part 2: {}", valid_n);

    Ok(())
}

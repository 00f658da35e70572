use anyhow::{Context, Result};
use aoc_utils::CliArgs;
use clap::Parser;
use day5::Seat;

fn main() -> Result<()> {
    aoc_utils::init_tracing();
    let args = CliArgs::parse();
    let input_path = args.input_path_or(env!("CARGO_MANIFEST_DIR"));
    let seats = day5::read_seats(&input_path).with_context(|| {
        format!(
            "Failed to read boarding passes from given input file({}).",
            input_path.display()
        )
    })?;

    let ids = seats.iter().map(Seat::id).collect::<Vec<_>>();
    let max_id = ids
        .iter()
        .max()
        .copied()
        .context("There isn't any boarding pass in given input.")?;
    println!("Part 1: {}", max_id);

    let missing_id = day5::find_missing_id(&ids)?;
    println!("Part 2: {}", missing_id);

    Ok(())
}

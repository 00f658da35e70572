use anyhow::{Context, Result};
use aoc_utils::CliArgs;
use clap::Parser;
use day3::Slope;

fn main() -> Result<()> {
    aoc_utils::init_tracing();
    let args = CliArgs::parse();
    let input_path = args.input_path_or(env!("CARGO_MANIFEST_DIR"));
    let grid = day3::read_grid(&input_path).with_context(|| {
        format!(
            "Failed to read grid from given input file({}).",
            input_path.display()
        )
    })?;

    let slope = Slope::try_from(day3::PART1_SLOPE)?;
    println!("Part 1: {}", grid.count_trees(slope));

    let slopes = day3::PART2_SLOPES
        .into_iter()
        .map(Slope::try_from)
        .collect::<Result<Vec<_>, _>>()?;
    println!("Part 2: {}", day3::tree_product(&grid, &slopes));

    Ok(())
}

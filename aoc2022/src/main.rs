use aoc_common::{run, Cli, Runner};
use clap::Parser;

mod day01;
mod day02;
mod day03;
mod day04;
mod day05;
mod day06;
mod day07;
mod day08;
mod day09;
mod day10;
mod day11;
mod day12;
mod day13;
mod day14;
mod day15;
mod day16;
mod day17;
mod day18;
mod day19;
mod day20;
mod day21;
mod day22;
mod day23;
mod day24;
mod day25;

fn main() -> anyhow::Result<()> {
    let days: [Runner; 25] = [
        run::<day01::Day1>, run::<day02::Day2>, run::<day03::Day3>, run::<day04::Day4>,
        run::<day05::Day5>, run::<day06::Day6>, run::<day07::Day7>, run::<day08::Day8>,
        run::<day09::Day9>, run::<day10::Day10>, run::<day11::Day11>, run::<day12::Day12>,
        run::<day13::Day13>, run::<day14::Day14>, run::<day15::Day15>, run::<day16::Day16>,
        run::<day17::Day17>, run::<day18::Day18>, run::<day19::Day19>, run::<day20::Day20>,
        run::<day21::Day21>, run::<day22::Day22>, run::<day23::Day23>, run::<day24::Day24>,
        run::<day25::Day25>,
    ];

    let time = std::time::Instant::now();
    aoc_common::dispatch(&days, &Cli::parse())?;
    eprintln!("{} seconds elapsed", time.elapsed().as_secs_f32());
    Ok(())
}

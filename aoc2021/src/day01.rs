use aoc_common::{Answer, Day};
use itertools::Itertools;

#[derive(Default)]
pub struct Day1;

fn count_increases(depths: impl Iterator<Item = u32>) -> usize {
    depths.tuple_windows().filter(|(a, b)| b > a).count()
}

impl Day for Day1 {
    const YEAR: u16 = 2021;
    const DAY: u8 = 1;
    const EXAMPLE: &'static str = "199\n200\n208\n210\n200\n207\n240\n269\n260\n263";
    const EXAMPLE_ANSWERS: [Option<&'static str>; 2] = [Some("7"), Some("5")];

    type Data = Vec<u32>;

    fn parse(&self, input: &str) -> anyhow::Result<Vec<u32>> {
        Ok(input.lines().map(|l| l.trim().parse::<u32>()).collect::<Result<Vec<_>, _>>()?)
    }

    fn part1(&self, depths: &Vec<u32>) -> anyhow::Result<Answer> {
        Ok(count_increases(depths.iter().copied()).into())
    }

    fn part2(&self, depths: &Vec<u32>) -> anyhow::Result<Answer> {
        // windows share two elements, so comparing sums is comparing the ends
        Ok(depths.iter().tuple_windows().filter(|(a, _, _, d)| d > a).count().into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example() {aoc_common::assert_example!(Day1)}
}

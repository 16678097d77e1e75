use std::ops::RangeInclusive;

use aoc_common::{AocError, Answer, Day};
use regex::Regex;

type Pair = (RangeInclusive<u32>, RangeInclusive<u32>);

#[derive(Default)]
pub struct Day4;

impl Day for Day4 {
    const YEAR: u16 = 2022;
    const DAY: u8 = 4;
    const EXAMPLE: &'static str = "\
2-4,6-8
2-3,4-5
5-7,7-9
2-8,3-7
6-6,4-6
2-6,4-8";
    const EXAMPLE_ANSWERS: [Option<&'static str>; 2] = [Some("2"), Some("4")];

    type Data = Vec<Pair>;

    fn parse(&self, input: &str) -> anyhow::Result<Vec<Pair>> {
        let re = Regex::new(r"^(\d+)-(\d+),(\d+)-(\d+)$")?;
        input.lines().map(|line| -> anyhow::Result<Pair> {
            let caps = re.captures(line.trim()).ok_or_else(|| AocError::parse(line, "expected `a-b,c-d`"))?;
            let n = |i: usize| caps[i].parse::<u32>();
            Ok((n(1)? ..= n(2)?, n(3)? ..= n(4)?))
        }).collect()
    }

    fn part1(&self, pairs: &Vec<Pair>) -> anyhow::Result<Answer> {
        let covers = |a: &RangeInclusive<u32>, b: &RangeInclusive<u32>| a.contains(b.start()) && a.contains(b.end());
        Ok(pairs.iter().filter(|(a, b)| covers(a, b) || covers(b, a)).count().into())
    }

    fn part2(&self, pairs: &Vec<Pair>) -> anyhow::Result<Answer> {
        Ok(pairs.iter().filter(|(a, b)| a.start() <= b.end() && b.start() <= a.end()).count().into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example() {aoc_common::assert_example!(Day4)}
}

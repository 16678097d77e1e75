use aoc_common::{Answer, Day};

#[derive(Default)]
pub struct Day7;

fn cheapest(crabs: &[i64], cost: impl Fn(i64) -> i64) -> i64 {
    let (lo, hi) = (crabs[0], crabs[crabs.len() - 1]);
    (lo ..= hi).map(|target| crabs.iter().map(|&c| cost((c - target).abs())).sum::<i64>()).min().unwrap_or(0)
}

impl Day for Day7 {
    const YEAR: u16 = 2021;
    const DAY: u8 = 7;
    const EXAMPLE: &'static str = "16,1,2,0,4,2,7,1,2,14";
    const EXAMPLE_ANSWERS: [Option<&'static str>; 2] = [Some("37"), Some("168")];

    /// Crab positions, sorted.
    type Data = Vec<i64>;

    fn parse(&self, input: &str) -> anyhow::Result<Vec<i64>> {
        let mut crabs = input.trim().split(',').map(|s| s.parse::<i64>()).collect::<Result<Vec<_>, _>>()?;
        if crabs.is_empty() {return Err(aoc_common::AocError::parse(input, "no crabs").into())}
        crabs.sort_unstable();
        Ok(crabs)
    }

    fn part1(&self, crabs: &Vec<i64>) -> anyhow::Result<Answer> {
        // linear cost is minimised at the median
        let median = crabs[crabs.len() / 2];
        Ok(crabs.iter().map(|c| (c - median).abs()).sum::<i64>().into())
    }

    fn part2(&self, crabs: &Vec<i64>) -> anyhow::Result<Answer> {
        Ok(cheapest(crabs, |d| d * (d + 1) / 2).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example() {aoc_common::assert_example!(Day7)}
}

use aoc_common::{AocError, Answer, Day};
use regex::Regex;
use tracing::debug;

const ORE: usize = 0;
const CLAY: usize = 1;
const OBSIDIAN: usize = 2;
const GEODE: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blueprint {
    id: u32,
    /// `costs[robot][material]`
    costs: [[u32; 4]; 4],
}

impl Blueprint {
    /// Never worth holding more robots of a kind than any one build can spend per minute.
    fn caps(&self) -> [u32; 4] {
        let mut caps = [u32::MAX; 4];
        for material in [ORE, CLAY, OBSIDIAN] {
            caps[material] = self.costs.iter().map(|c| c[material]).max().unwrap_or(0);
        }
        caps
    }

    fn max_geodes(&self, minutes: u32) -> u32 {
        let mut best = 0;
        self.search(minutes, [1, 0, 0, 0], [0; 4], &self.caps(), &mut best);
        debug!("blueprint {} opens {best} geodes in {minutes} minutes", self.id);
        best
    }

    /// Picks the next robot to build and waits just long enough to afford it.
    fn search(&self, time: u32, robots: [u32; 4], stock: [u32; 4], caps: &[u32; 4], best: &mut u32) {
        let idle = stock[GEODE] + robots[GEODE] * time;
        *best = (*best).max(idle);
        if idle + time * time.saturating_sub(1) / 2 <= *best {return}

        for robot in (0 .. 4).rev() {
            if robots[robot] >= caps[robot] {continue}
            let cost = self.costs[robot];
            let wait = (0 .. 4).map(|m| {
                if cost[m] <= stock[m] {Some(0)}
                else if robots[m] == 0 {None}
                else {Some((cost[m] - stock[m]).div_ceil(robots[m]))}
            }).try_fold(0, |acc, w| w.map(|w| acc.max(w)));
            let Some(wait) = wait else {continue};
            if wait + 1 >= time {continue}
            let mut next_stock = stock;
            for m in 0 .. 4 {next_stock[m] = stock[m] + robots[m] * (wait + 1) - cost[m]}
            let mut next_robots = robots;
            next_robots[robot] += 1;
            self.search(time - wait - 1, next_robots, next_stock, caps, best);
        }
    }
}

#[derive(Default)]
pub struct Day19;

impl Day for Day19 {
    const YEAR: u16 = 2022;
    const DAY: u8 = 19;
    const EXAMPLE: &'static str = "\
Blueprint 1: Each ore robot costs 4 ore. Each clay robot costs 2 ore. Each obsidian robot costs 3 ore and 14 clay. Each geode robot costs 2 ore and 7 obsidian.
Blueprint 2: Each ore robot costs 2 ore. Each clay robot costs 3 ore. Each obsidian robot costs 3 ore and 8 clay. Each geode robot costs 3 ore and 12 obsidian.";
    const EXAMPLE_ANSWERS: [Option<&'static str>; 2] = [Some("33"), Some("3472")];

    type Data = Vec<Blueprint>;

    fn parse(&self, input: &str) -> anyhow::Result<Vec<Blueprint>> {
        let re = Regex::new(concat!(
            r"Blueprint (\d+):\s+Each ore robot costs (\d+) ore.\s+Each clay robot costs (\d+) ore.\s+",
            r"Each obsidian robot costs (\d+) ore and (\d+) clay.\s+Each geode robot costs (\d+) ore and (\d+) obsidian.",
        ))?;
        let blueprints = re.captures_iter(input).map(|caps| -> anyhow::Result<Blueprint> {
            let n = |i: usize| caps[i].parse::<u32>();
            Ok(Blueprint {id: n(1)?, costs: [
                [n(2)?, 0, 0, 0],
                [n(3)?, 0, 0, 0],
                [n(4)?, n(5)?, 0, 0],
                [n(6)?, 0, n(7)?, 0],
            ]})
        }).collect::<anyhow::Result<Vec<_>>>()?;
        if blueprints.is_empty() {return Err(AocError::parse(input, "no blueprints").into())}
        Ok(blueprints)
    }

    fn part1(&self, blueprints: &Vec<Blueprint>) -> anyhow::Result<Answer> {
        Ok(blueprints.iter().map(|b| b.id * b.max_geodes(24)).sum::<u32>().into())
    }

    fn part2(&self, blueprints: &Vec<Blueprint>) -> anyhow::Result<Answer> {
        Ok(blueprints.iter().take(3).map(|b| b.max_geodes(32) as u64).product::<u64>().into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example() {aoc_common::assert_example!(Day19)}

    #[test]
    fn single_blueprint() {
        let blueprints = Day19.parse(Day19::EXAMPLE).unwrap();
        assert_eq!(blueprints[0].max_geodes(24), 9);
        assert_eq!(blueprints[1].max_geodes(24), 12);
        assert_eq!(blueprints[0].caps(), [4, 14, 7, u32::MAX]);
    }
}

use aoc_common::{AocError, Answer, Day};
use itertools::Itertools;
use regex::Regex;
use rustc_hash::FxHashMap;
use tracing::debug;

const START: &str = "AA";

/// The valves worth opening, with walking times between them.
/// The starting room is the last row of `dist`.
pub struct Network {
    flows: Vec<u32>,
    dist: Vec<Vec<u32>>,
}

impl Network {
    fn start(&self) -> usize {self.flows.len()}

    /// Best pressure released for every set of opened valves reachable in `time` minutes.
    fn best_per_set(&self, time: u32) -> FxHashMap<u64, u32> {
        let mut best = FxHashMap::default();
        self.explore(self.start(), time, 0, 0, &mut best);
        debug!("{} valve sets reachable in {time} minutes", best.len());
        best
    }

    fn explore(&self, at: usize, time: u32, opened: u64, released: u32, best: &mut FxHashMap<u64, u32>) {
        let entry = best.entry(opened).or_insert(0);
        *entry = (*entry).max(released);
        for (next, &flow) in self.flows.iter().enumerate() {
            if opened & 1 << next != 0 {continue}
            let Some(left) = time.checked_sub(self.dist[at][next] + 1) else {continue};
            if left == 0 {continue}
            self.explore(next, left, opened | 1 << next, released + flow * left, best);
        }
    }
}

#[derive(Default)]
pub struct Day16;

impl Day for Day16 {
    const YEAR: u16 = 2022;
    const DAY: u8 = 16;
    const EXAMPLE: &'static str = "\
Valve AA has flow rate=0; tunnels lead to valves DD, II, BB
Valve BB has flow rate=13; tunnels lead to valves CC, AA
Valve CC has flow rate=2; tunnels lead to valves DD, BB
Valve DD has flow rate=20; tunnels lead to valves CC, AA, EE
Valve EE has flow rate=3; tunnels lead to valves FF, DD
Valve FF has flow rate=0; tunnels lead to valves EE, GG
Valve GG has flow rate=0; tunnels lead to valves FF, HH
Valve HH has flow rate=22; tunnel leads to valve GG
Valve II has flow rate=0; tunnels lead to valves AA, JJ
Valve JJ has flow rate=21; tunnel leads to valve II";
    const EXAMPLE_ANSWERS: [Option<&'static str>; 2] = [Some("1651"), Some("1707")];

    type Data = Network;

    fn parse(&self, input: &str) -> anyhow::Result<Network> {
        let re = Regex::new(r"^Valve (\w+) has flow rate=(\d+); tunnels? leads? to valves? (.+)$")?;
        let valves = input.lines().filter(|l| !l.trim().is_empty()).map(|line| -> anyhow::Result<(&str, u32, Vec<&str>)> {
            let caps = re.captures(line.trim()).ok_or_else(|| AocError::parse(line, "expected a valve report"))?;
            let (name, flow, exits) = (caps.get(1), caps.get(2), caps.get(3));
            let (Some(name), Some(flow), Some(exits)) = (name, flow, exits) else {
                return Err(AocError::parse(line, "expected a valve report").into());
            };
            Ok((name.as_str(), flow.as_str().parse()?, exits.as_str().split(", ").collect()))
        }).collect::<anyhow::Result<Vec<_>>>()?;

        // useful valves first so their indices double as bit positions
        let order = valves.iter().enumerate()
            .sorted_by_key(|&(_, &(name, flow, _))| (flow == 0, name != START))
            .map(|(i, _)| i)
            .collect_vec();
        let ids: FxHashMap<&str, usize> = order.iter().enumerate().map(|(id, &i)| (valves[i].0, id)).collect();
        let useful = valves.iter().filter(|v| v.1 > 0).count();
        if useful > 64 {return Err(AocError::parse(input, "too many working valves").into())}
        let start = *ids.get(START).ok_or_else(|| AocError::parse(input, "no valve AA"))?;

        let n = valves.len();
        let mut dist = vec![vec![u32::MAX / 2; n]; n];
        for (id, &i) in order.iter().enumerate() {
            dist[id][id] = 0;
            for exit in &valves[i].2 {
                let &to = ids.get(exit).ok_or_else(|| AocError::parse(*exit, "tunnel to unknown valve"))?;
                dist[id][to] = 1;
            }
        }
        for k in 0 .. n {
            for i in 0 .. n {
                for j in 0 .. n {
                    dist[i][j] = dist[i][j].min(dist[i][k] + dist[k][j]);
                }
            }
        }

        let keep = (0 .. useful).chain([start]).collect_vec();
        let dist: Vec<Vec<u32>> = keep.iter().map(|&i| keep.iter().map(|&j| dist[i][j]).collect()).collect();
        let flows: Vec<u32> = order[.. useful].iter().map(|&i| valves[i].1).collect();
        Ok(Network {flows, dist})
    }

    fn part1(&self, network: &Network) -> anyhow::Result<Answer> {
        let best = network.best_per_set(30).into_values().max();
        Ok(best.ok_or(AocError::AnswerNotFound)?.into())
    }

    /// Two walkers open disjoint sets, so pair up the best of each set.
    fn part2(&self, network: &Network) -> anyhow::Result<Answer> {
        let sets = network.best_per_set(26).into_iter().sorted_by_key(|&(_, p)| std::cmp::Reverse(p)).collect_vec();
        let mut best = 0;
        for (i, &(mine, a)) in sets.iter().enumerate() {
            if a * 2 < best {break}
            for &(theirs, b) in &sets[i ..] {
                if a + b <= best {break}
                if mine & theirs == 0 {best = a + b}
            }
        }
        Ok(best.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example() {aoc_common::assert_example!(Day16)}

    #[test]
    fn walking_times() {
        let network = Day16.parse(Day16::EXAMPLE).unwrap();
        assert_eq!(network.flows.len(), 6);
        let start = network.start();
        assert_eq!(network.dist[start].iter().filter(|&&d| d == 1).count(), 2);
    }
}

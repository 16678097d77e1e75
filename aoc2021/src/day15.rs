use std::cmp::Reverse;
use std::collections::BinaryHeap;

use aoc_common::{AocError, Answer, Day};
use tracing::debug;

pub struct RiskMap {
    width: usize,
    height: usize,
    risk: Vec<u8>,
}

impl RiskMap {
    fn tiled(&self, times: usize) -> RiskMap {
        let (width, height) = (self.width * times, self.height * times);
        let risk = (0 .. height).flat_map(|y| (0 .. width).map(move |x| (x, y))).map(|(x, y)| {
            let base = self.risk[(y % self.height) * self.width + x % self.width] as usize;
            ((base - 1 + x / self.width + y / self.height) % 9 + 1) as u8
        }).collect();
        RiskMap {width, height, risk}
    }

    /// A* from the top left to the bottom right; every step costs at least 1,
    /// so the manhattan distance never overestimates.
    fn lowest_risk(&self) -> Option<u32> {
        let goal = self.width * self.height - 1;
        let heuristic = |ix: usize| ((self.width - 1 - ix % self.width) + (self.height - 1 - ix / self.width)) as u32;
        let mut best = vec![u32::MAX; self.risk.len()];
        let mut open = BinaryHeap::from([Reverse((heuristic(0), 0u32, 0usize))]);
        best[0] = 0;
        let mut expanded = 0;
        while let Some(Reverse((_, risk, ix))) = open.pop() {
            if ix == goal {
                debug!("reached goal after expanding {expanded} nodes");
                return Some(risk);
            }
            if risk > best[ix] {continue}
            expanded += 1;
            let (x, y) = (ix % self.width, ix / self.width);
            let neighbors = [
                (x > 0).then(|| ix - 1),
                (x + 1 < self.width).then(|| ix + 1),
                (y > 0).then(|| ix - self.width),
                (y + 1 < self.height).then(|| ix + self.width),
            ];
            for next in neighbors.into_iter().flatten() {
                let next_risk = risk + self.risk[next] as u32;
                if next_risk < best[next] {
                    best[next] = next_risk;
                    open.push(Reverse((next_risk + heuristic(next), next_risk, next)));
                }
            }
        }
        None
    }
}

#[derive(Default)]
pub struct Day15;

impl Day for Day15 {
    const YEAR: u16 = 2021;
    const DAY: u8 = 15;
    const EXAMPLE: &'static str = "\
1163751742
1381373672
2136511328
3694931569
7463417111
1319128137
1359912421
3125421639
1293138521
2311944581";
    const EXAMPLE_ANSWERS: [Option<&'static str>; 2] = [Some("40"), Some("315")];

    type Data = RiskMap;

    fn parse(&self, input: &str) -> anyhow::Result<RiskMap> {
        let lines: Vec<&str> = input.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
        let width = lines.first().map_or(0, |l| l.len());
        let mut risk = Vec::with_capacity(width * lines.len());
        for line in &lines {
            if line.len() != width {return Err(AocError::parse(*line, "ragged map").into())}
            for b in line.bytes() {
                match b {
                    b'1' ..= b'9' => risk.push(b - b'0'),
                    _ => return Err(AocError::parse(*line, "risk levels are 1-9").into()),
                }
            }
        }
        if risk.is_empty() {return Err(AocError::parse(input, "empty map").into())}
        Ok(RiskMap {width, height: lines.len(), risk})
    }

    fn part1(&self, map: &RiskMap) -> anyhow::Result<Answer> {
        Ok(map.lowest_risk().ok_or(AocError::AnswerNotFound)?.into())
    }

    fn part2(&self, map: &RiskMap) -> anyhow::Result<Answer> {
        Ok(map.tiled(5).lowest_risk().ok_or(AocError::AnswerNotFound)?.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example() {aoc_common::assert_example!(Day15)}

    #[test]
    fn tiles_wrap_past_nine() {
        let map = Day15.parse("8").unwrap().tiled(3);
        assert_eq!(map.risk, vec![8, 9, 1, 9, 1, 2, 1, 2, 3]);
    }
}

use aoc_common::grid::Point;
use aoc_common::{AocError, Answer, Day};
use itertools::Itertools;
use rustc_hash::FxHashSet;

pub struct HeightMap(Vec<Vec<u8>>);

impl HeightMap {
    fn height(&self, p: Point) -> Option<u8> {p.index(&self.0).copied()}

    fn low_points(&self) -> impl Iterator<Item = Point> + '_ {
        (0 .. self.0.len()).flat_map(move |y| (0 .. self.0[y].len()).map(move |x| Point::new(x as i64, y as i64)))
            .filter(move |&p| {
                let h = self.0[p.y as usize][p.x as usize];
                p.neighbors4().all(|n| self.height(n).map_or(true, |nh| nh > h))
            })
    }

    /// Flood fill upwards from a low point, stopping at height 9.
    fn basin_size(&self, low: Point) -> usize {
        let mut seen = FxHashSet::default();
        let mut stack = vec![low];
        while let Some(p) = stack.pop() {
            if !seen.insert(p) {continue}
            stack.extend(p.neighbors4().filter(|&n| matches!(self.height(n), Some(h) if h < 9)));
        }
        seen.len()
    }
}

#[derive(Default)]
pub struct Day9;

impl Day for Day9 {
    const YEAR: u16 = 2021;
    const DAY: u8 = 9;
    const EXAMPLE: &'static str = "\
2199943210
3987894921
9856789892
8767896789
9899965678";
    const EXAMPLE_ANSWERS: [Option<&'static str>; 2] = [Some("15"), Some("1134")];

    type Data = HeightMap;

    fn parse(&self, input: &str) -> anyhow::Result<HeightMap> {
        input.lines().map(|line| {
            line.trim().bytes().map(|b| match b {
                b'0' ..= b'9' => Ok(b - b'0'),
                _ => Err(AocError::parse(line, "heights are single digits")),
            }).collect::<Result<Vec<_>, _>>()
        }).collect::<Result<Vec<_>, _>>().map(HeightMap).map_err(Into::into)
    }

    fn part1(&self, map: &HeightMap) -> anyhow::Result<Answer> {
        Ok(map.low_points().map(|p| map.0[p.y as usize][p.x as usize] as u32 + 1).sum::<u32>().into())
    }

    fn part2(&self, map: &HeightMap) -> anyhow::Result<Answer> {
        Ok(map.low_points().map(|p| map.basin_size(p)).sorted_unstable().rev().take(3).product::<usize>().into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example() {aoc_common::assert_example!(Day9)}
}

use std::collections::VecDeque;

use aoc_common::grid::Point;
use aoc_common::{AocError, Answer, Day};
use tracing::debug;

pub struct HeightMap {
    heights: Vec<Vec<u8>>,
    start: Point,
    end: Point,
}

impl HeightMap {
    /// Walks downhill from the summit, so one search answers every starting square.
    fn distances_from_end(&self) -> Vec<Vec<Option<usize>>> {
        let mut dist = vec![vec![None; self.heights[0].len()]; self.heights.len()];
        dist[self.end.y as usize][self.end.x as usize] = Some(0);
        let mut queue = VecDeque::from([(self.end, 0)]);
        while let Some((p, d)) = queue.pop_front() {
            let Some(&here) = p.index(&self.heights) else {continue};
            for n in p.neighbors4() {
                let Some(&there) = n.index(&self.heights) else {continue};
                if there + 1 < here {continue}
                let seen = &mut dist[n.y as usize][n.x as usize];
                if seen.is_none() {
                    *seen = Some(d + 1);
                    queue.push_back((n, d + 1));
                }
            }
        }
        dist
    }
}

#[derive(Default)]
pub struct Day12;

impl Day for Day12 {
    const YEAR: u16 = 2022;
    const DAY: u8 = 12;
    const EXAMPLE: &'static str = "\
Sabqponm
abcryxxl
accszExk
acctuvwj
abdefghi";
    const EXAMPLE_ANSWERS: [Option<&'static str>; 2] = [Some("31"), Some("29")];

    type Data = HeightMap;

    fn parse(&self, input: &str) -> anyhow::Result<HeightMap> {
        let (mut start, mut end) = (None, None);
        let heights = input.lines().map(str::trim).filter(|l| !l.is_empty()).enumerate().map(|(y, line)| {
            line.bytes().enumerate().map(|(x, b)| -> anyhow::Result<u8> {
                let here = Point::new(x as i64, y as i64);
                match b {
                    b'S' => {start = Some(here); Ok(0)}
                    b'E' => {end = Some(here); Ok(25)}
                    b'a' ..= b'z' => Ok(b - b'a'),
                    _ => Err(AocError::parse(line, format!("bad square {:?}", b as char)).into()),
                }
            }).collect::<anyhow::Result<Vec<_>>>()
        }).collect::<anyhow::Result<Vec<_>>>()?;
        let (Some(start), Some(end)) = (start, end) else {
            return Err(AocError::parse(input, "map needs both S and E").into());
        };
        if heights.iter().any(|row| row.len() != heights[0].len()) {
            return Err(AocError::parse(input, "map is not rectangular").into());
        }
        Ok(HeightMap {heights, start, end})
    }

    fn part1(&self, map: &HeightMap) -> anyhow::Result<Answer> {
        let dist = map.distances_from_end();
        let steps = dist[map.start.y as usize][map.start.x as usize];
        Ok(steps.ok_or(AocError::AnswerNotFound)?.into())
    }

    fn part2(&self, map: &HeightMap) -> anyhow::Result<Answer> {
        let dist = map.distances_from_end();
        let reachable = dist.iter().flatten().zip(map.heights.iter().flatten()).filter(|&(_, &h)| h == 0);
        let best = reachable.filter_map(|(&d, _)| d).min();
        debug!("closest lowland is {best:?} steps from the summit");
        Ok(best.ok_or(AocError::AnswerNotFound)?.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example() {aoc_common::assert_example!(Day12)}

    #[test]
    fn needs_start_and_end() {
        assert!(Day12.parse("abc\nabc").is_err());
    }
}

use aoc_common::{AocError, Answer, Day};
use bitvec::prelude::*;
use itertools::Itertools;

const SOURCE: (usize, usize) = (500, 0);

/// Rock and resting sand, one bit per square, wide enough for the sand pile on the floor.
#[derive(Clone)]
pub struct Cave {
    filled: BitVec,
    width: usize,
    left: usize,
    lowest_rock: usize,
}

impl Cave {
    fn ix(&self, x: usize, y: usize) -> usize {y * self.width + x - self.left}

    fn is_filled(&self, x: usize, y: usize) -> bool {self.filled[self.ix(x, y)]}

    fn fill(&mut self, x: usize, y: usize) {
        let ix = self.ix(x, y);
        self.filled.set(ix, true);
    }

    /// Drops sand until it either spills past the rock or blocks the source.
    /// With a floor, the floor sits two below the lowest rock.
    fn pour(&mut self, floor: bool) -> usize {
        let bottom = self.lowest_rock + 1;
        let mut resting = 0;
        let mut path = vec![SOURCE];
        while let Some(&(x, y)) = path.last() {
            if y == bottom {
                if !floor {break}
                self.fill(x, y);
                resting += 1;
                path.pop();
                continue;
            }
            match [x, x - 1, x + 1].into_iter().find(|&nx| !self.is_filled(nx, y + 1)) {
                Some(nx) => path.push((nx, y + 1)),
                None => {
                    self.fill(x, y);
                    resting += 1;
                    path.pop();
                }
            }
        }
        resting
    }
}

#[derive(Default)]
pub struct Day14;

impl Day for Day14 {
    const YEAR: u16 = 2022;
    const DAY: u8 = 14;
    const EXAMPLE: &'static str = "\
498,4 -> 498,6 -> 496,6
503,4 -> 502,4 -> 502,9 -> 494,9";
    const EXAMPLE_ANSWERS: [Option<&'static str>; 2] = [Some("24"), Some("93")];

    type Data = Cave;

    fn parse(&self, input: &str) -> anyhow::Result<Cave> {
        let paths = input.lines().filter(|l| !l.trim().is_empty()).map(|line| -> anyhow::Result<Vec<(usize, usize)>> {
            line.split(" -> ").map(|point| -> anyhow::Result<(usize, usize)> {
                let (x, y) = point.trim().split_once(',').ok_or_else(|| AocError::parse(line, "expected `x,y` points"))?;
                Ok((x.parse()?, y.parse()?))
            }).collect()
        }).collect::<anyhow::Result<Vec<_>>>()?;

        let lowest_rock = paths.iter().flatten().map(|&(_, y)| y).max().ok_or_else(|| AocError::parse(input, "no rock"))?;
        let floor = lowest_rock + 2;
        let left = SOURCE.0.saturating_sub(floor + 1);
        let width = 2 * floor + 3;
        if paths.iter().flatten().any(|&(x, _)| x < left || x >= left + width) {
            return Err(AocError::parse(input, "rock lies outside the sand's reach").into());
        }
        let mut cave = Cave {filled: bitvec![0; width * floor], width, left, lowest_rock};
        for path in &paths {
            for (&(x0, y0), &(x1, y1)) in path.iter().tuple_windows() {
                for x in x0.min(x1) ..= x0.max(x1) {
                    for y in y0.min(y1) ..= y0.max(y1) {cave.fill(x, y)}
                }
            }
        }
        Ok(cave)
    }

    fn part1(&self, cave: &Cave) -> anyhow::Result<Answer> {Ok(cave.clone().pour(false).into())}

    fn part2(&self, cave: &Cave) -> anyhow::Result<Answer> {Ok(cave.clone().pour(true).into())}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example() {aoc_common::assert_example!(Day14)}
}

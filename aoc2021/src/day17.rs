use aoc_common::{AocError, Answer, Day};
use bitvec::prelude::*;
use regex::Regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Target {
    x: (i64, i64),
    y: (i64, i64),
}

impl Target {
    /// Launches that come back below the trench have passed it by this step.
    fn horizon(&self) -> usize {2 * self.y.0.unsigned_abs() as usize + 2}

    /// Steps at which a horizontal speed of `vx` leaves the probe over the trench.
    fn x_steps(&self, mut vx: i64) -> BitVec {
        let mut hits = bitvec![0; self.horizon()];
        let mut x = 0;
        for step in 0 .. hits.len() {
            hits.set(step, (self.x.0 ..= self.x.1).contains(&x));
            x += vx;
            vx -= vx.signum();
        }
        hits
    }

    fn y_steps(&self, mut vy: i64) -> BitVec {
        let mut hits = bitvec![0; self.horizon()];
        let mut y = 0;
        for step in 0 .. hits.len() {
            hits.set(step, (self.y.0 ..= self.y.1).contains(&y));
            y += vy;
            vy -= 1;
        }
        hits
    }
}

#[derive(Default)]
pub struct Day17;

impl Day for Day17 {
    const YEAR: u16 = 2021;
    const DAY: u8 = 17;
    const EXAMPLE: &'static str = "target area: x=20..30, y=-10..-5";
    const EXAMPLE_ANSWERS: [Option<&'static str>; 2] = [Some("45"), Some("112")];

    type Data = Target;

    fn parse(&self, input: &str) -> anyhow::Result<Target> {
        let re = Regex::new(r"target area: x=(-?\d+)\.\.(-?\d+), y=(-?\d+)\.\.(-?\d+)")?;
        let input = input.trim();
        let caps = re.captures(input).ok_or_else(|| AocError::parse(input, "expected a target area"))?;
        let n = |i: usize| -> anyhow::Result<i64> {Ok(caps[i].parse()?)};
        let target = Target {x: (n(1)?, n(2)?), y: (n(3)?, n(4)?)};
        if target.x.0 < 0 || target.y.1 >= 0 {
            return Err(AocError::parse(input, "trench must lie below and right of the launcher").into());
        }
        Ok(target)
    }

    fn part1(&self, target: &Target) -> anyhow::Result<Answer> {
        // the fastest drop that still lands goes from y=0 to the trench floor in one step
        let vy = target.y.0.abs() - 1;
        Ok((vy * (vy + 1) / 2).into())
    }

    fn part2(&self, target: &Target) -> anyhow::Result<Answer> {
        let xs: Vec<BitVec> = (0 ..= target.x.1).map(|vx| target.x_steps(vx)).collect();
        let ys: Vec<BitVec> = (target.y.0 ..= -target.y.0).map(|vy| target.y_steps(vy)).collect();
        let hits = xs.iter()
            .flat_map(|x| ys.iter().map(move |y| (x.clone() & y.as_bitslice()).any()))
            .filter(|&hit| hit)
            .count();
        Ok(hits.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example() {aoc_common::assert_example!(Day17)}

    #[test]
    fn trajectories() {
        let target = Day17.parse(Day17::EXAMPLE).unwrap();
        let lands = |vx, vy| (target.x_steps(vx) & target.y_steps(vy).as_bitslice()).any();
        assert!(lands(7, 2));
        assert!(lands(6, 3));
        assert!(lands(9, 0));
        assert!(lands(6, 9));
        assert!(!lands(17, -4));
    }
}

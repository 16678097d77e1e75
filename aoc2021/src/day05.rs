use aoc_common::grid::Point;
use aoc_common::{AocError, Answer, Day};
use regex::Regex;
use rustc_hash::FxHashMap;

#[derive(Debug, Clone, Copy)]
pub struct Vent {
    from: Point,
    to: Point,
}

impl Vent {
    fn is_straight(&self) -> bool {self.from.x == self.to.x || self.from.y == self.to.y}

    fn points(&self) -> impl Iterator<Item = Point> {
        let step = Point::new((self.to.x - self.from.x).signum(), (self.to.y - self.from.y).signum());
        let len = (self.to.x - self.from.x).abs().max((self.to.y - self.from.y).abs());
        let from = self.from;
        (0 ..= len).map(move |i| from + step * i)
    }
}

fn overlaps<'a>(vents: impl Iterator<Item = &'a Vent>) -> usize {
    let mut seen: FxHashMap<Point, u32> = FxHashMap::default();
    for vent in vents {
        for p in vent.points() {*seen.entry(p).or_default() += 1}
    }
    seen.values().filter(|&&n| n > 1).count()
}

#[derive(Default)]
pub struct Day5;

impl Day for Day5 {
    const YEAR: u16 = 2021;
    const DAY: u8 = 5;
    const EXAMPLE: &'static str = "\
0,9 -> 5,9
8,0 -> 0,8
9,4 -> 3,4
2,2 -> 2,1
7,0 -> 7,4
6,4 -> 2,0
0,9 -> 2,9
3,4 -> 1,4
0,0 -> 8,8
5,5 -> 8,2";
    const EXAMPLE_ANSWERS: [Option<&'static str>; 2] = [Some("5"), Some("12")];

    type Data = Vec<Vent>;

    fn parse(&self, input: &str) -> anyhow::Result<Vec<Vent>> {
        let re = Regex::new(r"^(\d+),(\d+) -> (\d+),(\d+)$")?;
        input.lines().map(|line| -> anyhow::Result<Vent> {
            let caps = re.captures(line.trim()).ok_or_else(|| AocError::parse(line, "expected `x1,y1 -> x2,y2`"))?;
            let n = |i: usize| caps[i].parse::<i64>();
            Ok(Vent {from: Point::new(n(1)?, n(2)?), to: Point::new(n(3)?, n(4)?)})
        }).collect()
    }

    fn part1(&self, vents: &Vec<Vent>) -> anyhow::Result<Answer> {
        Ok(overlaps(vents.iter().filter(|v| v.is_straight())).into())
    }

    fn part2(&self, vents: &Vec<Vent>) -> anyhow::Result<Answer> {
        Ok(overlaps(vents.iter()).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example() {aoc_common::assert_example!(Day5)}

    #[test]
    fn diagonal_points() {
        let vent = Vent {from: Point::new(9, 7), to: Point::new(7, 9)};
        assert_eq!(vent.points().collect::<Vec<_>>(), vec![Point::new(9, 7), Point::new(8, 8), Point::new(7, 9)]);
    }
}

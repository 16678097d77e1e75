use aoc_common::grid::Point;
use aoc_common::{AocError, Answer, Day};
use itertools::Itertools;
use regex::Regex;
use rustc_hash::FxHashSet;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sensor {
    at: Point,
    beacon: Point,
}

impl Sensor {
    fn range(&self) -> i64 {self.at.manhattan(self.beacon)}

    fn covers(&self, p: Point) -> bool {self.at.manhattan(p) <= self.range()}

    /// Columns this sensor rules out on row `y`, inclusive.
    fn span(&self, y: i64) -> Option<(i64, i64)> {
        let reach = self.range() - (self.at.y - y).abs();
        (reach >= 0).then(|| (self.at.x - reach, self.at.x + reach))
    }
}

pub struct Day15 {
    /// Row inspected by the first part.
    row: i64,
    /// The distress beacon sits in `0..=bound` on both axes.
    bound: i64,
}

impl Default for Day15 {
    fn default() -> Self {Day15 {row: 2_000_000, bound: 4_000_000}}
}

/// Merges overlapping or touching column ranges.
fn merge(mut spans: Vec<(i64, i64)>) -> Vec<(i64, i64)> {
    spans.sort_unstable();
    spans.into_iter().coalesce(|a, b| if b.0 <= a.1 + 1 {Ok((a.0, a.1.max(b.1)))} else {Err((a, b))}).collect()
}

impl Day for Day15 {
    const YEAR: u16 = 2022;
    const DAY: u8 = 15;
    const EXAMPLE: &'static str = "\
Sensor at x=2, y=18: closest beacon is at x=-2, y=15
Sensor at x=9, y=16: closest beacon is at x=10, y=16
Sensor at x=13, y=2: closest beacon is at x=15, y=3
Sensor at x=12, y=14: closest beacon is at x=10, y=16
Sensor at x=10, y=20: closest beacon is at x=10, y=16
Sensor at x=14, y=17: closest beacon is at x=10, y=16
Sensor at x=8, y=7: closest beacon is at x=2, y=10
Sensor at x=2, y=0: closest beacon is at x=2, y=10
Sensor at x=0, y=11: closest beacon is at x=2, y=10
Sensor at x=20, y=14: closest beacon is at x=25, y=17
Sensor at x=17, y=20: closest beacon is at x=21, y=22
Sensor at x=16, y=7: closest beacon is at x=15, y=3
Sensor at x=14, y=3: closest beacon is at x=15, y=3
Sensor at x=20, y=1: closest beacon is at x=15, y=3";
    const EXAMPLE_ANSWERS: [Option<&'static str>; 2] = [Some("26"), Some("56000011")];

    type Data = Vec<Sensor>;

    fn for_example() -> Self {Day15 {row: 10, bound: 20}}

    fn parse(&self, input: &str) -> anyhow::Result<Vec<Sensor>> {
        let re = Regex::new(r"^Sensor at x=(-?\d+), y=(-?\d+): closest beacon is at x=(-?\d+), y=(-?\d+)$")?;
        input.lines().filter(|l| !l.trim().is_empty()).map(|line| -> anyhow::Result<Sensor> {
            let caps = re.captures(line.trim()).ok_or_else(|| AocError::parse(line, "expected a sensor report"))?;
            let n = |i: usize| caps[i].parse::<i64>();
            Ok(Sensor {at: Point::new(n(1)?, n(2)?), beacon: Point::new(n(3)?, n(4)?)})
        }).collect()
    }

    fn part1(&self, sensors: &Vec<Sensor>) -> anyhow::Result<Answer> {
        let spans = merge(sensors.iter().filter_map(|s| s.span(self.row)).collect());
        let covered: i64 = spans.iter().map(|&(lo, hi)| hi - lo + 1).sum();
        let beacons = sensors.iter().map(|s| s.beacon).filter(|b| b.y == self.row).collect::<FxHashSet<_>>();
        debug!("row {} has {} spans and {} beacons", self.row, spans.len(), beacons.len());
        Ok((covered - beacons.len() as i64).into())
    }

    /// A lone uncovered square sits just outside some sensor's diamond. Inside the
    /// search area it is boxed in, so two diamond edges cross there; on the border
    /// one edge meets the border line.
    fn part2(&self, sensors: &Vec<Sensor>) -> anyhow::Result<Answer> {
        let mut rising = vec![];
        let mut falling = vec![];
        for s in sensors {
            let r = s.range() + 1;
            rising.extend([s.at.y - s.at.x - r, s.at.y - s.at.x + r]);
            falling.extend([s.at.y + s.at.x - r, s.at.y + s.at.x + r]);
        }
        let n = self.bound;
        let crossings = rising.iter().cartesian_product(&falling)
            .filter(|&(a, b)| (a + b) % 2 == 0)
            .map(|(a, b)| Point::new((b - a) / 2, (a + b) / 2));
        let on_border = rising.iter().flat_map(|&a| [(0, a), (n, n + a), (-a, 0), (n - a, n)])
            .chain(falling.iter().flat_map(|&b| [(0, b), (n, b - n), (b, 0), (b - n, n)]))
            .map(|(x, y)| Point::new(x, y));
        let beacon = crossings.chain(on_border)
            .filter(|p| (0 ..= self.bound).contains(&p.x) && (0 ..= self.bound).contains(&p.y))
            .find(|&p| !sensors.iter().any(|s| s.covers(p)))
            .ok_or(AocError::AnswerNotFound)?;
        debug!("distress beacon at {beacon:?}");
        Ok((beacon.x * 4_000_000 + beacon.y).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example() {aoc_common::assert_example!(Day15)}

    #[test]
    fn beacon_on_the_border() {
        let day = Day15 {row: 0, bound: 6};
        let sensors = day.parse("\
Sensor at x=6, y=6: closest beacon is at x=9, y=10
Sensor at x=3, y=1: closest beacon is at x=4, y=4
Sensor at x=8, y=0: closest beacon is at x=7, y=0
Sensor at x=-2, y=8: closest beacon is at x=-4, y=7
Sensor at x=-2, y=4: closest beacon is at x=-1, y=5").unwrap();
        assert_eq!(day.part2(&sensors).unwrap(), 3.into());
    }

    #[test]
    fn merging() {
        assert_eq!(merge(vec![(5, 8), (-2, 2), (3, 4), (10, 12)]), vec![(-2, 8), (10, 12)]);
    }
}

use aoc_common::grid::{Facing, Point};
use aoc_common::{AocError, Answer, Day};
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::debug;

const PROPOSALS: [Facing; 4] = [Facing::Up, Facing::Down, Facing::Left, Facing::Right];

/// The square ahead and its two diagonal neighbours.
fn looking(elf: Point, dir: Facing) -> [Point; 3] {
    let ahead = elf + dir;
    let side = dir.turn_right().delta();
    [ahead - side, ahead, ahead + side]
}

/// Plays one round; returns whether any elf moved.
fn round(elves: &mut FxHashSet<Point>, first: usize) -> bool {
    let mut proposed: FxHashMap<Point, Option<Point>> = FxHashMap::default();
    for &elf in elves.iter() {
        if elf.neighbors8().all(|n| !elves.contains(&n)) {continue}
        let choice = (0 .. 4).map(|i| PROPOSALS[(first + i) % 4])
            .find(|&dir| looking(elf, dir).iter().all(|p| !elves.contains(p)));
        if let Some(dir) = choice {
            proposed.entry(elf + dir).and_modify(|from| *from = None).or_insert(Some(elf));
        }
    }
    let mut moved = false;
    for (to, from) in proposed {
        let Some(from) = from else {continue};
        elves.remove(&from);
        elves.insert(to);
        moved = true;
    }
    moved
}

fn empty_ground(elves: &FxHashSet<Point>) -> i64 {
    let (mut lo, mut hi) = (Point::new(i64::MAX, i64::MAX), Point::new(i64::MIN, i64::MIN));
    for e in elves {
        lo = Point::new(lo.x.min(e.x), lo.y.min(e.y));
        hi = Point::new(hi.x.max(e.x), hi.y.max(e.y));
    }
    (hi.x - lo.x + 1) * (hi.y - lo.y + 1) - elves.len() as i64
}

#[derive(Default)]
pub struct Day23;

impl Day for Day23 {
    const YEAR: u16 = 2022;
    const DAY: u8 = 23;
    const EXAMPLE: &'static str = "\
....#..
..###.#
#...#.#
.#...##
#.###..
##.#.##
.#..#..";
    const EXAMPLE_ANSWERS: [Option<&'static str>; 2] = [Some("110"), Some("20")];

    type Data = FxHashSet<Point>;

    fn parse(&self, input: &str) -> anyhow::Result<FxHashSet<Point>> {
        let mut elves = FxHashSet::default();
        for (y, line) in input.lines().enumerate() {
            for (x, c) in line.trim().bytes().enumerate() {
                match c {
                    b'#' => {elves.insert(Point::new(x as i64, y as i64));}
                    b'.' => {}
                    _ => return Err(AocError::parse(line, format!("unexpected {:?}", c as char)).into()),
                }
            }
        }
        if elves.is_empty() {return Err(AocError::parse(input, "no elves").into())}
        Ok(elves)
    }

    fn part1(&self, elves: &FxHashSet<Point>) -> anyhow::Result<Answer> {
        let mut elves = elves.clone();
        for first in 0 .. 10 {round(&mut elves, first);}
        Ok(empty_ground(&elves).into())
    }

    fn part2(&self, elves: &FxHashSet<Point>) -> anyhow::Result<Answer> {
        let mut elves = elves.clone();
        let rounds = (0 ..).find(|&first| !round(&mut elves, first)).ok_or(AocError::AnswerNotFound)? + 1;
        debug!("elves settle after {rounds} rounds");
        Ok(rounds.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example() {aoc_common::assert_example!(Day23)}

    #[test]
    fn small_example() {
        let mut elves = Day23.parse(".....\n..##.\n..#..\n.....\n..##.\n.....").unwrap();
        for first in 0 .. 3 {round(&mut elves, first);}
        let expected = Day23.parse("..#..\n....#\n#....\n....#\n.....\n..#..").unwrap();
        assert_eq!(elves, expected);
        assert!(!round(&mut elves, 3));
    }
}

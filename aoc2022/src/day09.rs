use aoc_common::grid::{Facing, Point};
use aoc_common::{AocError, Answer, Day};
use rustc_hash::FxHashSet;

/// Moves the knots one step at a time and counts the places the tail visits.
fn tail_visits(motions: &[(Facing, u32)], knots: usize) -> usize {
    let mut rope = vec![Point::default(); knots];
    let mut visited = FxHashSet::default();
    visited.insert(Point::default());
    for &(dir, steps) in motions {
        for _ in 0 .. steps {
            rope[0] += dir.delta();
            for i in 1 .. knots {
                let gap = rope[i - 1] - rope[i];
                if gap.x.abs() <= 1 && gap.y.abs() <= 1 {break}
                rope[i] += Point::new(gap.x.signum(), gap.y.signum());
            }
            if let Some(&tail) = rope.last() {visited.insert(tail);}
        }
    }
    visited.len()
}

#[derive(Default)]
pub struct Day9;

impl Day for Day9 {
    const YEAR: u16 = 2022;
    const DAY: u8 = 9;
    const EXAMPLE: &'static str = "\
R 4
U 4
L 3
D 1
R 4
D 1
L 5
R 2";
    const EXAMPLE_ANSWERS: [Option<&'static str>; 2] = [Some("13"), Some("1")];

    type Data = Vec<(Facing, u32)>;

    fn parse(&self, input: &str) -> anyhow::Result<Vec<(Facing, u32)>> {
        input.lines().map(|line| -> anyhow::Result<(Facing, u32)> {
            let (dir, steps) = line.trim().split_once(' ').ok_or_else(|| AocError::parse(line, "expected `<dir> <steps>`"))?;
            let dir = match dir.as_bytes() {
                &[b] => Facing::from_byte(b),
                _ => None,
            }.ok_or_else(|| AocError::parse(line, "direction must be one of RDLU"))?;
            Ok((dir, steps.parse()?))
        }).collect()
    }

    fn part1(&self, motions: &Vec<(Facing, u32)>) -> anyhow::Result<Answer> {
        Ok(tail_visits(motions, 2).into())
    }

    fn part2(&self, motions: &Vec<(Facing, u32)>) -> anyhow::Result<Answer> {
        Ok(tail_visits(motions, 10).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example() {aoc_common::assert_example!(Day9)}

    #[test]
    fn larger_example() {
        let motions = Day9.parse("R 5\nU 8\nL 8\nD 3\nR 17\nD 10\nL 25\nU 20").unwrap();
        assert_eq!(tail_visits(&motions, 10), 36);
    }
}

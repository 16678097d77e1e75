use aoc_common::grid::Point;
use aoc_common::{AocError, Answer, Day};
use rustc_hash::FxHashSet;
use tracing::debug;

/// The valley floor without its walls; blizzards wrap around inside it.
pub struct Valley {
    cells: Vec<Vec<u8>>,
    width: i64,
    height: i64,
}

impl Valley {
    fn entrance(&self) -> Point {Point::new(0, -1)}

    fn exit(&self) -> Point {Point::new(self.width - 1, self.height)}

    fn blizzard_at(&self, x: i64, y: i64, b: u8) -> bool {
        self.cells[y.rem_euclid(self.height) as usize][x.rem_euclid(self.width) as usize] == b
    }

    /// Blizzards move in straight lines, so each is traced back to where it started.
    fn is_clear(&self, p: Point, minute: i64) -> bool {
        if p == self.entrance() || p == self.exit() {return true}
        if p.x < 0 || p.y < 0 || p.x >= self.width || p.y >= self.height {return false}
        !(self.blizzard_at(p.x - minute, p.y, b'>')
            || self.blizzard_at(p.x + minute, p.y, b'<')
            || self.blizzard_at(p.x, p.y - minute, b'v')
            || self.blizzard_at(p.x, p.y + minute, b'^'))
    }

    /// Minute of arrival at `to` when setting off from `from` at `start`.
    fn trip(&self, from: Point, to: Point, start: i64) -> Option<i64> {
        let mut frontier = FxHashSet::from_iter([from]);
        // every reachable state repeats within this many minutes
        let limit = start + (self.width * self.height + 2) * self.width.max(self.height) * 4;
        for minute in start + 1 ..= limit {
            frontier = frontier.iter()
                .flat_map(|&p| p.neighbors4().chain([p]))
                .filter(|&p| self.is_clear(p, minute))
                .collect();
            if frontier.contains(&to) {return Some(minute)}
            if frontier.is_empty() {return None}
        }
        None
    }
}

#[derive(Default)]
pub struct Day24;

impl Day for Day24 {
    const YEAR: u16 = 2022;
    const DAY: u8 = 24;
    const EXAMPLE: &'static str = "\
#.######
#>>.<^<#
#.<..<<#
#>v.><>#
#<^v^^>#
######.#";
    const EXAMPLE_ANSWERS: [Option<&'static str>; 2] = [Some("18"), Some("54")];

    type Data = Valley;

    fn parse(&self, input: &str) -> anyhow::Result<Valley> {
        let lines: Vec<&str> = input.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
        let inner = lines.get(1 .. lines.len().saturating_sub(1)).unwrap_or_default();
        let cells = inner.iter().map(|line| -> anyhow::Result<Vec<u8>> {
            let bytes = line.as_bytes();
            match bytes.get(1 .. bytes.len().saturating_sub(1)) {
                Some(row) if row.iter().all(|b| b".<>^v".contains(b)) => Ok(row.to_vec()),
                _ => Err(AocError::parse(*line, "expected `#` walls around the valley").into()),
            }
        }).collect::<anyhow::Result<Vec<_>>>()?;
        let (width, height) = (cells.first().map_or(0, Vec::len), cells.len());
        if width == 0 || cells.iter().any(|row| row.len() != width) {
            return Err(AocError::parse(input, "valley is not rectangular").into());
        }
        Ok(Valley {cells, width: width as i64, height: height as i64})
    }

    fn part1(&self, valley: &Valley) -> anyhow::Result<Answer> {
        let minute = valley.trip(valley.entrance(), valley.exit(), 0).ok_or(AocError::AnswerNotFound)?;
        Ok(minute.into())
    }

    /// Out, back for the forgotten snacks, and out again.
    fn part2(&self, valley: &Valley) -> anyhow::Result<Answer> {
        let (entrance, exit) = (valley.entrance(), valley.exit());
        let there = valley.trip(entrance, exit, 0).ok_or(AocError::AnswerNotFound)?;
        let back = valley.trip(exit, entrance, there).ok_or(AocError::AnswerNotFound)?;
        let again = valley.trip(entrance, exit, back).ok_or(AocError::AnswerNotFound)?;
        debug!("legs end at minutes {there}, {back} and {again}");
        Ok(again.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example() {aoc_common::assert_example!(Day24)}

    #[test]
    fn blizzards_wrap() {
        let valley = Day24.parse(Day24::EXAMPLE).unwrap();
        assert!(!valley.is_clear(Point::new(0, 0), 0));
        assert!(valley.is_clear(Point::new(0, 0), 1));
        assert!(!valley.is_clear(Point::new(-1, 0), 1));
    }
}

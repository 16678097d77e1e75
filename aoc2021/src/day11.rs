use aoc_common::grid::Point;
use aoc_common::{AocError, Answer, Day};

#[derive(Clone)]
pub struct Cavern(Vec<Vec<u8>>);

impl Cavern {
    /// Advances one step and returns how many octopuses flashed.
    fn step(&mut self) -> usize {
        let mut ready = vec![];
        for (y, row) in self.0.iter_mut().enumerate() {
            for (x, energy) in row.iter_mut().enumerate() {
                *energy += 1;
                if *energy == 10 {ready.push(Point::new(x as i64, y as i64))}
            }
        }
        let mut flashes = 0;
        while let Some(p) = ready.pop() {
            flashes += 1;
            for n in p.neighbors8() {
                if n.x < 0 || n.y < 0 {continue}
                let Some(energy) = self.0.get_mut(n.y as usize).and_then(|row| row.get_mut(n.x as usize)) else {continue};
                *energy += 1;
                if *energy == 10 {ready.push(n)}
            }
        }
        for energy in self.0.iter_mut().flatten() {
            if *energy > 9 {*energy = 0}
        }
        flashes
    }

    fn size(&self) -> usize {self.0.iter().map(Vec::len).sum()}
}

#[derive(Default)]
pub struct Day11;

impl Day for Day11 {
    const YEAR: u16 = 2021;
    const DAY: u8 = 11;
    const EXAMPLE: &'static str = "\
5483143223
2745854711
5264556173
6141336146
6357385478
4167524645
2176841721
6882881134
4846848554
5283751526";
    const EXAMPLE_ANSWERS: [Option<&'static str>; 2] = [Some("1656"), Some("195")];

    type Data = Cavern;

    fn parse(&self, input: &str) -> anyhow::Result<Cavern> {
        let rows = input.lines().map(|line| {
            line.trim().bytes().map(|b| match b {
                b'0' ..= b'9' => Ok(b - b'0'),
                _ => Err(AocError::parse(line, "energy levels are single digits")),
            }).collect::<Result<Vec<_>, _>>()
        }).collect::<Result<Vec<_>, _>>()?;
        Ok(Cavern(rows))
    }

    fn part1(&self, cavern: &Cavern) -> anyhow::Result<Answer> {
        let mut cavern = cavern.clone();
        Ok((0 .. 100).map(|_| cavern.step()).sum::<usize>().into())
    }

    fn part2(&self, cavern: &Cavern) -> anyhow::Result<Answer> {
        let mut cavern = cavern.clone();
        let size = cavern.size();
        let step = (1usize ..).find(|_| cavern.step() == size).ok_or(AocError::AnswerNotFound)?;
        Ok(step.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example() {aoc_common::assert_example!(Day11)}

    #[test]
    fn ten_steps() {
        let mut cavern = Day11.parse(Day11::EXAMPLE).unwrap();
        assert_eq!((0 .. 10).map(|_| cavern.step()).sum::<usize>(), 204);
    }
}

use aoc_common::grid::Facing;
use aoc_common::{AocError, Answer, Day};
use arrayvec::ArrayVec;
use rustc_hash::FxHashMap;
use tracing::debug;

/// Rock shapes bottom row first; bit 6 is the chamber's left wall side.
const ROCKS: [&[u8]; 5] = [
    &[0b0011110],
    &[0b0001000, 0b0011100, 0b0001000],
    &[0b0011100, 0b0000100, 0b0000100],
    &[0b0010000, 0b0010000, 0b0010000, 0b0010000],
    &[0b0011000, 0b0011000],
];
const LEFT_EDGE: u8 = 0b1000000;
const RIGHT_EDGE: u8 = 0b0000001;
const SURFACE_ROWS: usize = 8;

type Rock = ArrayVec<u8, 4>;

struct Chamber<'a> {
    jets: &'a [Facing],
    jet: usize,
    rows: Vec<u8>,
    dropped: u64,
}

impl<'a> Chamber<'a> {
    fn new(jets: &'a [Facing]) -> Self {Chamber {jets, jet: 0, rows: vec![], dropped: 0}}

    fn height(&self) -> u64 {self.rows.len() as u64}

    fn fits(&self, rock: &[u8], y: usize) -> bool {
        rock.iter().enumerate().all(|(i, &r)| self.rows.get(y + i).map_or(true, |&row| row & r == 0))
    }

    fn drop_rock(&mut self) {
        let mut rock: Rock = ROCKS[(self.dropped % ROCKS.len() as u64) as usize].iter().copied().collect();
        let mut y = self.rows.len() + 3;
        loop {
            let jet = self.jets[self.jet];
            self.jet = (self.jet + 1) % self.jets.len();
            let pushed: Option<Rock> = match jet {
                Facing::Left if rock.iter().all(|&r| r & LEFT_EDGE == 0) => Some(rock.iter().map(|&r| r << 1).collect()),
                Facing::Right if rock.iter().all(|&r| r & RIGHT_EDGE == 0) => Some(rock.iter().map(|&r| r >> 1).collect()),
                _ => None,
            };
            if let Some(pushed) = pushed.filter(|p| self.fits(p, y)) {rock = pushed}
            if y == 0 || !self.fits(&rock, y - 1) {break}
            y -= 1;
        }
        for (i, &r) in rock.iter().enumerate() {
            if y + i == self.rows.len() {self.rows.push(0)}
            self.rows[y + i] |= r;
        }
        self.dropped += 1;
    }

    /// The top rows packed together. A rock could slip below them, so equal surfaces
    /// are assumed, not proven, to lead to the same future.
    fn surface(&self) -> u64 {
        self.rows.iter().rev().take(SURFACE_ROWS).fold(0, |acc, &row| acc << 8 | row as u64)
    }
}

/// Tower height after `rocks` rocks, skipping ahead once the falling pattern repeats.
fn tower_height(jets: &[Facing], rocks: u64) -> u64 {
    let mut chamber = Chamber::new(jets);
    let mut seen: FxHashMap<(u64, usize, u64), (u64, u64)> = FxHashMap::default();
    let mut skipped = 0;
    while chamber.dropped < rocks {
        chamber.drop_rock();
        if skipped > 0 {continue}
        let key = (chamber.dropped % ROCKS.len() as u64, chamber.jet, chamber.surface());
        if let Some(&(then_dropped, then_height)) = seen.get(&key) {
            let period = chamber.dropped - then_dropped;
            let cycles = (rocks - chamber.dropped) / period;
            debug!("pattern repeats every {period} rocks, skipping {cycles} cycles");
            skipped = cycles * (chamber.height() - then_height);
            chamber.dropped += cycles * period;
            if skipped == 0 {seen.clear()}
        } else {
            seen.insert(key, (chamber.dropped, chamber.height()));
        }
    }
    chamber.height() + skipped
}

#[derive(Default)]
pub struct Day17;

impl Day for Day17 {
    const YEAR: u16 = 2022;
    const DAY: u8 = 17;
    const EXAMPLE: &'static str = ">>><<><>><<<>><>>><<<>>><<<><<<>><>><<>>";
    const EXAMPLE_ANSWERS: [Option<&'static str>; 2] = [Some("3068"), Some("1514285714288")];

    type Data = Vec<Facing>;

    fn parse(&self, input: &str) -> anyhow::Result<Vec<Facing>> {
        let jets = input.trim().bytes()
            .map(|b| Facing::from_byte(b).filter(|_| matches!(b, b'<' | b'>')))
            .collect::<Option<Vec<_>>>().ok_or_else(|| AocError::parse(input.trim(), "jets must be `<` or `>`"))?;
        if jets.is_empty() {return Err(AocError::parse(input, "no jets").into())}
        Ok(jets)
    }

    fn part1(&self, jets: &Vec<Facing>) -> anyhow::Result<Answer> {Ok(tower_height(jets, 2022).into())}

    fn part2(&self, jets: &Vec<Facing>) -> anyhow::Result<Answer> {
        Ok(tower_height(jets, 1_000_000_000_000).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example() {aoc_common::assert_example!(Day17)}

    #[test]
    fn first_rocks() {
        let jets = Day17.parse(Day17::EXAMPLE).unwrap();
        let mut chamber = Chamber::new(&jets);
        chamber.drop_rock();
        assert_eq!(chamber.rows, vec![0b0011110]);
        chamber.drop_rock();
        assert_eq!(chamber.height(), 4);
    }
}

use aoc_common::{Answer, Day};

#[derive(Default)]
pub struct Day6;

/// Fish are only distinguishable by timer, so count them per timer value.
fn simulate(timers: &[usize; 9], days: usize) -> u64 {
    let mut counts = timers.map(|n| n as u64);
    for _ in 0 .. days {
        counts.rotate_left(1);
        counts[6] += counts[8];
    }
    counts.iter().sum()
}

impl Day for Day6 {
    const YEAR: u16 = 2021;
    const DAY: u8 = 6;
    const EXAMPLE: &'static str = "3,4,3,1,2";
    const EXAMPLE_ANSWERS: [Option<&'static str>; 2] = [Some("5934"), Some("26984457539")];

    type Data = [usize; 9];

    fn parse(&self, input: &str) -> anyhow::Result<[usize; 9]> {
        let mut timers = [0; 9];
        for s in input.trim().split(',') {
            let t: usize = s.parse()?;
            *timers.get_mut(t).ok_or_else(|| aoc_common::AocError::parse(s, "timer out of range"))? += 1;
        }
        Ok(timers)
    }

    fn part1(&self, timers: &[usize; 9]) -> anyhow::Result<Answer> {Ok(simulate(timers, 80).into())}

    fn part2(&self, timers: &[usize; 9]) -> anyhow::Result<Answer> {Ok(simulate(timers, 256).into())}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example() {aoc_common::assert_example!(Day6)}

    #[test]
    fn eighteen_days() {
        let timers = Day6.parse(Day6::EXAMPLE).unwrap();
        assert_eq!(simulate(&timers, 18), 26);
    }
}

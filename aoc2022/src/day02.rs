use aoc_common::{AocError, Answer, Day};

/// Opponent's column and ours, both as 0, 1 or 2.
type Round = (u8, u8);

fn score(elf: u8, me: u8) -> u64 {
    let outcome = (me + 4 - elf) % 3;
    (me + 1 + 3 * outcome) as u64
}

#[derive(Default)]
pub struct Day2;

impl Day for Day2 {
    const YEAR: u16 = 2022;
    const DAY: u8 = 2;
    const EXAMPLE: &'static str = "A Y\nB X\nC Z";
    const EXAMPLE_ANSWERS: [Option<&'static str>; 2] = [Some("15"), Some("12")];

    type Data = Vec<Round>;

    fn parse(&self, input: &str) -> anyhow::Result<Vec<Round>> {
        input.lines().map(|line| -> anyhow::Result<Round> {
            match line.trim().as_bytes() {
                &[elf @ b'A' ..= b'C', b' ', me @ b'X' ..= b'Z'] => Ok((elf - b'A', me - b'X')),
                _ => Err(AocError::parse(line, "expected `<A-C> <X-Z>`").into()),
            }
        }).collect()
    }

    fn part1(&self, rounds: &Vec<Round>) -> anyhow::Result<Answer> {
        Ok(rounds.iter().map(|&(elf, me)| score(elf, me)).sum::<u64>().into())
    }

    /// The second column is the outcome to aim for: lose, draw or win.
    fn part2(&self, rounds: &Vec<Round>) -> anyhow::Result<Answer> {
        Ok(rounds.iter().map(|&(elf, outcome)| score(elf, (elf + outcome + 2) % 3)).sum::<u64>().into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example() {aoc_common::assert_example!(Day2)}

    #[test]
    fn scoring() {
        assert_eq!(score(0, 1), 8);
        assert_eq!(score(1, 0), 1);
        assert_eq!(score(2, 2), 6);
    }
}

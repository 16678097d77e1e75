use aoc_common::{AocError, Answer, Day};

#[derive(Default)]
pub struct Day1;

impl Day for Day1 {
    const YEAR: u16 = 2022;
    const DAY: u8 = 1;
    const EXAMPLE: &'static str = "\
1000
2000
3000

4000

5000
6000

7000
8000
9000

10000";
    const EXAMPLE_ANSWERS: [Option<&'static str>; 2] = [Some("24000"), Some("45000")];

    /// Calories per elf, largest first.
    type Data = Vec<u64>;

    fn parse(&self, input: &str) -> anyhow::Result<Vec<u64>> {
        let mut elves = input.trim().split("\n\n").map(|elf| -> anyhow::Result<u64> {
            elf.lines().map(|line| line.trim().parse::<u64>().map_err(|e| AocError::parse(line, e.to_string())))
                .sum::<Result<u64, _>>()
                .map_err(Into::into)
        }).collect::<anyhow::Result<Vec<_>>>()?;
        elves.sort_unstable_by(|a, b| b.cmp(a));
        Ok(elves)
    }

    fn part1(&self, elves: &Vec<u64>) -> anyhow::Result<Answer> {
        Ok(elves.first().copied().ok_or(AocError::AnswerNotFound)?.into())
    }

    fn part2(&self, elves: &Vec<u64>) -> anyhow::Result<Answer> {
        Ok(elves.iter().take(3).sum::<u64>().into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example() {aoc_common::assert_example!(Day1)}
}

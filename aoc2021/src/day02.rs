use anyhow::Context;
use aoc_common::{AocError, Answer, Day};

#[derive(Debug, Clone, Copy)]
pub enum Command {Forward(i64), Down(i64), Up(i64)}

#[derive(Default)]
pub struct Day2;

impl Day for Day2 {
    const YEAR: u16 = 2021;
    const DAY: u8 = 2;
    const EXAMPLE: &'static str = "forward 5\ndown 5\nforward 8\nup 3\ndown 8\nforward 2";
    const EXAMPLE_ANSWERS: [Option<&'static str>; 2] = [Some("150"), Some("900")];

    type Data = Vec<Command>;

    fn parse(&self, input: &str) -> anyhow::Result<Vec<Command>> {
        input.lines().map(|line| -> anyhow::Result<Command> {
            let (word, num) = line.split_once(' ').ok_or_else(|| AocError::parse(line, "expected `<command> <n>`"))?;
            let num = num.parse().with_context(|| format!("bad distance in {line:?}"))?;
            Ok(match word {
                "forward" => Command::Forward(num),
                "down" => Command::Down(num),
                "up" => Command::Up(num),
                _ => return Err(AocError::parse(line, "unknown command").into()),
            })
        }).collect()
    }

    fn part1(&self, commands: &Vec<Command>) -> anyhow::Result<Answer> {
        let (x, y) = commands.iter().fold((0, 0), |(x, y), c| match c {
            Command::Forward(n) => (x + n, y),
            Command::Down(n) => (x, y + n),
            Command::Up(n) => (x, y - n),
        });
        Ok((x * y).into())
    }

    fn part2(&self, commands: &Vec<Command>) -> anyhow::Result<Answer> {
        let (x, y, _) = commands.iter().fold((0, 0, 0), |(x, y, aim), c| match c {
            Command::Forward(n) => (x + n, y + n * aim, aim),
            Command::Down(n) => (x, y, aim + n),
            Command::Up(n) => (x, y, aim - n),
        });
        Ok((x * y).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example() {aoc_common::assert_example!(Day2)}

    #[test]
    fn rejects_unknown_command() {
        assert!(Day2.parse("backward 3").is_err());
    }
}

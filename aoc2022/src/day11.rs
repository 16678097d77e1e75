use aoc_common::{AocError, Answer, Day};
use itertools::Itertools;
use regex::Regex;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {Add(u64), Mul(u64), Square}

impl Op {
    fn apply(self, old: u64) -> u64 {
        match self {
            Op::Add(n) => old + n,
            Op::Mul(n) => old * n,
            Op::Square => old * old,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Monkey {
    items: Vec<u64>,
    op: Op,
    divisor: u64,
    /// Target when the test fails, then when it passes.
    throws: [usize; 2],
}

/// Plays `rounds` rounds and multiplies the two busiest monkeys' inspection counts.
fn monkey_business(monkeys: &[Monkey], rounds: usize, relief: bool) -> u64 {
    let mut monkeys = monkeys.to_vec();
    let modulus: u64 = monkeys.iter().map(|m| m.divisor).product();
    let mut inspections = vec![0u64; monkeys.len()];
    for _ in 0 .. rounds {
        for i in 0 .. monkeys.len() {
            let items = std::mem::take(&mut monkeys[i].items);
            inspections[i] += items.len() as u64;
            let Monkey {op, divisor, throws, ..} = monkeys[i];
            for item in items {
                let worry = if relief {op.apply(item) / 3} else {op.apply(item) % modulus};
                monkeys[throws[(worry % divisor == 0) as usize]].items.push(worry);
            }
        }
    }
    debug!("inspections after {rounds} rounds: {inspections:?}");
    inspections.iter().sorted_unstable_by(|a, b| b.cmp(a)).take(2).product()
}

#[derive(Default)]
pub struct Day11;

impl Day for Day11 {
    const YEAR: u16 = 2022;
    const DAY: u8 = 11;
    const EXAMPLE: &'static str = "\
Monkey 0:
    Starting items: 79, 98
    Operation: new = old * 19
    Test: divisible by 23
        If true: throw to monkey 2
        If false: throw to monkey 3

Monkey 1:
    Starting items: 54, 65, 75, 74
    Operation: new = old + 6
    Test: divisible by 19
        If true: throw to monkey 2
        If false: throw to monkey 0

Monkey 2:
    Starting items: 79, 60, 97
    Operation: new = old * old
    Test: divisible by 13
        If true: throw to monkey 1
        If false: throw to monkey 3

Monkey 3:
    Starting items: 74
    Operation: new = old + 3
    Test: divisible by 17
        If true: throw to monkey 0
        If false: throw to monkey 1";
    const EXAMPLE_ANSWERS: [Option<&'static str>; 2] = [Some("10605"), Some("2713310158")];

    type Data = Vec<Monkey>;

    fn parse(&self, input: &str) -> anyhow::Result<Vec<Monkey>> {
        let re = Regex::new(concat!(
            r"Monkey (\d+):\s+Starting items: ([\d, ]*)\s+",
            r"Operation: new = old ([*+]) (old|\d+)\s+",
            r"Test: divisible by (\d+)\s+",
            r"If true: throw to monkey (\d+)\s+",
            r"If false: throw to monkey (\d+)",
        ))?;
        let monkeys = re.captures_iter(input).enumerate().map(|(i, caps)| -> anyhow::Result<Monkey> {
            if caps[1].parse::<usize>()? != i {
                return Err(AocError::parse(&caps[0], format!("expected monkey {i}")).into());
            }
            let items = caps[2].split(',').map(|n| n.trim().parse::<u64>()).collect::<Result<Vec<_>, _>>()?;
            let op = match (&caps[3], &caps[4]) {
                ("*", "old") => Op::Square,
                ("*", n) => Op::Mul(n.parse()?),
                (_, "old") => Op::Mul(2),
                (_, n) => Op::Add(n.parse()?),
            };
            let divisor: u64 = caps[5].parse()?;
            if divisor == 0 {return Err(AocError::parse(&caps[0], "cannot test divisibility by zero").into())}
            Ok(Monkey {items, op, divisor, throws: [caps[7].parse()?, caps[6].parse()?]})
        }).collect::<anyhow::Result<Vec<_>>>()?;
        if monkeys.is_empty() {return Err(AocError::parse(input, "no monkeys").into())}
        if let Some(m) = monkeys.iter().find(|m| m.throws.iter().any(|&t| t >= monkeys.len())) {
            return Err(AocError::parse(format!("{m:?}"), "throws to a missing monkey").into());
        }
        Ok(monkeys)
    }

    fn part1(&self, monkeys: &Vec<Monkey>) -> anyhow::Result<Answer> {
        Ok(monkey_business(monkeys, 20, true).into())
    }

    fn part2(&self, monkeys: &Vec<Monkey>) -> anyhow::Result<Answer> {
        Ok(monkey_business(monkeys, 10_000, false).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example() {aoc_common::assert_example!(Day11)}

    #[test]
    fn parses_operations() {
        let monkeys = Day11.parse(Day11::EXAMPLE).unwrap();
        assert_eq!(monkeys.iter().map(|m| m.op).collect_vec(), [Op::Mul(19), Op::Add(6), Op::Square, Op::Add(3)]);
        assert_eq!(monkeys[0].throws, [3, 2]);
    }
}

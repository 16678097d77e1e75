use aoc_common::{AocError, Answer, Day};

#[derive(Default)]
pub struct Day3;

pub struct Report {
    width: usize,
    values: Vec<u32>,
}

fn ones_at(values: &[u32], bit: usize) -> usize {
    values.iter().filter(|&&v| v >> bit & 1 == 1).count()
}

/// Keeps narrowing by the bit criteria until one value remains.
fn rating(report: &Report, keep_common: bool) -> anyhow::Result<u32> {
    let mut values = report.values.clone();
    for bit in (0 .. report.width).rev() {
        if values.len() == 1 {break}
        let ones = ones_at(&values, bit);
        let common = (2 * ones >= values.len()) as u32;
        let want = if keep_common {common} else {1 - common};
        if values.iter().any(|v| v >> bit & 1 == want) {
            values.retain(|v| v >> bit & 1 == want);
        }
    }
    match values[..] {
        [v] => Ok(v),
        _ => Err(AocError::AnswerNotFound.into()),
    }
}

impl Day for Day3 {
    const YEAR: u16 = 2021;
    const DAY: u8 = 3;
    const EXAMPLE: &'static str = "00100\n11110\n10110\n10111\n10101\n01111\n00111\n11100\n10000\n11001\n00010\n01010";
    const EXAMPLE_ANSWERS: [Option<&'static str>; 2] = [Some("198"), Some("230")];

    type Data = Report;

    fn parse(&self, input: &str) -> anyhow::Result<Report> {
        let width = input.lines().next().map_or(0, |l| l.trim().len());
        let values = input.lines().map(|line| {
            u32::from_str_radix(line.trim(), 2).map_err(|e| AocError::parse(line, e.to_string()))
        }).collect::<Result<Vec<_>, _>>()?;
        Ok(Report {width, values})
    }

    fn part1(&self, report: &Report) -> anyhow::Result<Answer> {
        let gamma = (0 .. report.width).rev().fold(0u32, |acc, bit| {
            2 * acc + (2 * ones_at(&report.values, bit) >= report.values.len()) as u32
        });
        let epsilon = (1 << report.width) - 1 - gamma;
        Ok((gamma as u64 * epsilon as u64).into())
    }

    fn part2(&self, report: &Report) -> anyhow::Result<Answer> {
        let oxygen = rating(report, true)?;
        let co2 = rating(report, false)?;
        Ok((oxygen as u64 * co2 as u64).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example() {aoc_common::assert_example!(Day3)}
}

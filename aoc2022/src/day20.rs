use aoc_common::{AocError, Answer, Day};

const DECRYPTION_KEY: i64 = 811_589_153;

/// Mixes the file `rounds` times and sums the grove coordinates.
fn decrypt(numbers: &[i64], key: i64, rounds: usize) -> anyhow::Result<i64> {
    let values: Vec<i64> = numbers.iter().map(|n| n * key).collect();
    // order[k] is the original index of the number k places after the start
    let mut order: Vec<usize> = (0 .. values.len()).collect();
    let cycle = values.len() as i64 - 1;
    for _ in 0 .. rounds {
        for (i, &v) in values.iter().enumerate() {
            let from = order.iter().position(|&o| o == i).ok_or(AocError::AnswerNotFound)?;
            order.remove(from);
            let to = (from as i64 + v).rem_euclid(cycle.max(1)) as usize;
            order.insert(to, i);
        }
    }
    let zero = values.iter().position(|&v| v == 0).ok_or_else(|| AocError::parse("", "file has no zero"))?;
    let at = order.iter().position(|&o| o == zero).ok_or(AocError::AnswerNotFound)?;
    Ok([1000, 2000, 3000].iter().map(|k| values[order[(at + k) % order.len()]]).sum())
}

#[derive(Default)]
pub struct Day20;

impl Day for Day20 {
    const YEAR: u16 = 2022;
    const DAY: u8 = 20;
    const EXAMPLE: &'static str = "1\n2\n-3\n3\n-2\n0\n4";
    const EXAMPLE_ANSWERS: [Option<&'static str>; 2] = [Some("3"), Some("1623178306")];

    type Data = Vec<i64>;

    fn parse(&self, input: &str) -> anyhow::Result<Vec<i64>> {
        input.lines().filter(|l| !l.trim().is_empty()).map(|line| -> anyhow::Result<i64> {
            line.trim().parse().map_err(|_| AocError::parse(line, "expected a number").into())
        }).collect()
    }

    fn part1(&self, numbers: &Vec<i64>) -> anyhow::Result<Answer> {Ok(decrypt(numbers, 1, 1)?.into())}

    fn part2(&self, numbers: &Vec<i64>) -> anyhow::Result<Answer> {
        Ok(decrypt(numbers, DECRYPTION_KEY, 10)?.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example() {aoc_common::assert_example!(Day20)}

    #[test]
    fn needs_a_zero() {
        assert!(decrypt(&[1, 2, 3], 1, 1).is_err());
    }
}

use aoc_common::{AocError, Answer, Day};
use itertools::Itertools;

/// Items in a bag as a bitmask indexed by priority.
fn items(bag: &[u8]) -> anyhow::Result<u64> {
    let mask = bag.iter().try_fold(0, |mask, &b| {
        let priority = match b {
            b'a' ..= b'z' => b - b'a' + 1,
            b'A' ..= b'Z' => b - b'A' + 27,
            _ => return Err(AocError::parse(String::from_utf8_lossy(bag), format!("bad item {:?}", b as char))),
        };
        Ok(mask | 1u64 << priority)
    })?;
    Ok(mask)
}

fn priority(shared: u64) -> anyhow::Result<u64> {
    if shared.count_ones() != 1 {
        return Err(AocError::AnswerNotFound.into());
    }
    Ok(shared.trailing_zeros() as u64)
}

#[derive(Default)]
pub struct Day3;

impl Day for Day3 {
    const YEAR: u16 = 2022;
    const DAY: u8 = 3;
    const EXAMPLE: &'static str = "\
vJrwpWtwJgWrhcsFMMfFFhFp
jqHRNqRjqzjGDLGLrsFMfFZSrLrFZsSL
PmmdzqPrVvPwwTWBwg
wMqvLMZHhHMvwLHjbvcjnnSBnvTQFn
ttgJtRGJQctTZtZT
CrZsJsPPZsGzwwsLwLmpwMDw";
    const EXAMPLE_ANSWERS: [Option<&'static str>; 2] = [Some("157"), Some("70")];

    type Data = Vec<Vec<u8>>;

    fn parse(&self, input: &str) -> anyhow::Result<Vec<Vec<u8>>> {
        Ok(input.lines().map(|line| line.trim().as_bytes().to_vec()).collect())
    }

    fn part1(&self, bags: &Vec<Vec<u8>>) -> anyhow::Result<Answer> {
        let total = bags.iter().map(|bag| -> anyhow::Result<u64> {
            let (left, right) = bag.split_at(bag.len() / 2);
            priority(items(left)? & items(right)?)
        }).sum::<anyhow::Result<u64>>()?;
        Ok(total.into())
    }

    fn part2(&self, bags: &Vec<Vec<u8>>) -> anyhow::Result<Answer> {
        let total = bags.iter().chunks(3).into_iter().map(|group| -> anyhow::Result<u64> {
            let shared = group.map(|bag| items(bag)).fold_ok(!0, |acc, mask| acc & mask)?;
            priority(shared)
        }).sum::<anyhow::Result<u64>>()?;
        Ok(total.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example() {aoc_common::assert_example!(Day3)}

    #[test]
    fn priorities() {
        assert_eq!(priority(items(b"p").unwrap()).unwrap(), 16);
        assert_eq!(priority(items(b"L").unwrap()).unwrap(), 38);
        assert!(priority(items(b"ab").unwrap()).is_err());
    }
}

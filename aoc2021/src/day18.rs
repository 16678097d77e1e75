use std::ops::Add;

use aoc_common::{AocError, Answer, Day};
use arrayvec::ArrayVec;
use itertools::Itertools;
use tracing::debug;

const EXPLODE_DEPTH: u8 = 5;
const SPLIT_AT: u32 = 10;

/// A snailfish number flattened into its regular numbers, each with its bracket depth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snail(Vec<(u32, u8)>);

impl std::str::FromStr for Snail {
    type Err = AocError;

    fn from_str(line: &str) -> Result<Self, AocError> {
        let mut items = vec![];
        let mut depth = 0u8;
        let mut number = None;
        for c in line.trim().chars() {
            if let Some(d) = c.to_digit(10) {
                number = Some(number.unwrap_or(0) * 10 + d);
                continue;
            }
            if let Some(n) = number.take() {items.push((n, depth))}
            match c {
                '[' => depth += 1,
                ']' => depth = depth.checked_sub(1).ok_or_else(|| AocError::parse(line, "unbalanced brackets"))?,
                ',' => {}
                _ => return Err(AocError::parse(line, format!("unexpected {c:?}"))),
            }
            if depth >= EXPLODE_DEPTH {return Err(AocError::parse(line, "nested too deep"))}
        }
        if depth != 0 || number.is_some() || items.is_empty() {
            return Err(AocError::parse(line, "not a snailfish pair"));
        }
        Ok(Snail(items))
    }
}

impl Snail {
    fn explode(&mut self) -> bool {
        let Some(i) = self.0.iter().position(|&(_, depth)| depth >= EXPLODE_DEPTH) else {return false};
        let (left, depth) = self.0[i];
        let (right, _) = self.0.remove(i + 1);
        if let Some(prev) = i.checked_sub(1) {self.0[prev].0 += left}
        if let Some(next) = self.0.get_mut(i + 1) {next.0 += right}
        self.0[i] = (0, depth - 1);
        true
    }

    fn split(&mut self) -> bool {
        let Some(i) = self.0.iter().position(|&(n, _)| n >= SPLIT_AT) else {return false};
        let (n, depth) = self.0[i];
        self.0[i] = (n / 2, depth + 1);
        self.0.insert(i + 1, (n - n / 2, depth + 1));
        true
    }

    fn reduce(&mut self) {
        let mut steps = 0;
        while self.explode() || self.split() {steps += 1}
        debug!("reduced in {steps} steps");
    }

    /// Folds sibling pairs bottom-up; reduced numbers never nest past four pairs.
    fn magnitude(&self) -> anyhow::Result<u64> {
        let mut stack = ArrayVec::<(u64, u8), 8>::new();
        for &(n, depth) in &self.0 {
            stack.try_push((n as u64, depth))?;
            while let [.., (a, da), (b, db)] = stack[..] {
                if da != db {break}
                stack.truncate(stack.len() - 2);
                stack.push((3 * a + 2 * b, da.saturating_sub(1)));
            }
        }
        match stack[..] {
            [(m, 0)] => Ok(m),
            _ => Err(AocError::parse(format!("{self:?}"), "leftover numbers after folding").into()),
        }
    }
}

impl Add<&Snail> for &Snail {
    type Output = Snail;

    fn add(self, other: &Snail) -> Snail {
        let mut sum = Snail(self.0.iter().chain(&other.0).map(|&(n, depth)| (n, depth + 1)).collect());
        sum.reduce();
        sum
    }
}

#[derive(Default)]
pub struct Day18;

impl Day for Day18 {
    const YEAR: u16 = 2021;
    const DAY: u8 = 18;
    const EXAMPLE: &'static str = "\
[[[0,[5,8]],[[1,7],[9,6]]],[[4,[1,2]],[[1,4],2]]]
[[[5,[2,8]],4],[5,[[9,9],0]]]
[6,[[[6,2],[5,6]],[[7,6],[4,7]]]]
[[[6,[0,7]],[0,9]],[4,[9,[9,0]]]]
[[[7,[6,4]],[3,[1,3]]],[[[5,5],1],9]]
[[6,[[7,3],[3,2]]],[[[3,8],[5,7]],4]]
[[[[5,4],[7,7]],8],[[8,3],8]]
[[9,3],[[9,9],[6,[4,9]]]]
[[2,[[7,7],7]],[[5,8],[[9,3],[0,2]]]]
[[[[5,2],5],[8,[3,7]]],[[5,[7,5]],[4,4]]]";
    const EXAMPLE_ANSWERS: [Option<&'static str>; 2] = [Some("4140"), Some("3993")];

    type Data = Vec<Snail>;

    fn parse(&self, input: &str) -> anyhow::Result<Vec<Snail>> {
        Ok(input.lines().filter(|l| !l.trim().is_empty()).map(str::parse).collect::<Result<Vec<Snail>, _>>()?)
    }

    fn part1(&self, numbers: &Vec<Snail>) -> anyhow::Result<Answer> {
        let (first, rest) = numbers.split_first().ok_or(AocError::AnswerNotFound)?;
        let total = rest.iter().fold(first.clone(), |acc, n| &acc + n);
        Ok(total.magnitude()?.into())
    }

    fn part2(&self, numbers: &Vec<Snail>) -> anyhow::Result<Answer> {
        let best = numbers.iter().permutations(2)
            .map(|pair| (pair[0] + pair[1]).magnitude())
            .fold_ok(None, |best: Option<u64>, m| best.max(Some(m)))?;
        Ok(best.ok_or(AocError::AnswerNotFound)?.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snail(s: &str) -> Snail {s.parse().unwrap()}

    #[test]
    fn example() {aoc_common::assert_example!(Day18)}

    #[test]
    fn addition_reduces() {
        let sum = &snail("[[[[4,3],4],4],[7,[[8,4],9]]]") + &snail("[1,1]");
        assert_eq!(sum, snail("[[[[0,7],4],[[7,8],[6,0]]],[8,1]]"));
    }

    #[test]
    fn magnitudes() {
        assert_eq!(snail("[[1,2],[[3,4],5]]").magnitude().unwrap(), 143);
        assert_eq!(snail("[[[[8,7],[7,7]],[[8,6],[7,7]]],[[[0,7],[6,6]],[8,7]]]").magnitude().unwrap(), 3488);
    }

    #[test]
    fn rejects_garbage() {
        assert!("[1,2".parse::<Snail>().is_err());
        assert!("[1;2]".parse::<Snail>().is_err());
        assert!("[[[[[1,2],3],4],5],6]".parse::<Snail>().is_err());
    }
}

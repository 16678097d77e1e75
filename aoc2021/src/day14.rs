use aoc_common::{AocError, Answer, Day};
use itertools::{Itertools, MinMaxResult};
use rustc_hash::FxHashMap;

pub struct Polymer {
    template: Vec<u8>,
    rules: FxHashMap<(u8, u8), u8>,
}

impl Polymer {
    /// Tracks pair counts instead of the polymer itself, which doubles every step.
    fn spread_after(&self, steps: usize) -> anyhow::Result<u64> {
        let mut pairs: FxHashMap<(u8, u8), u64> = FxHashMap::default();
        for (&a, &b) in self.template.iter().tuple_windows() {
            *pairs.entry((a, b)).or_default() += 1;
        }
        for _ in 0 .. steps {
            let mut next: FxHashMap<(u8, u8), u64> = FxHashMap::default();
            for ((a, b), n) in pairs {
                match self.rules.get(&(a, b)) {
                    Some(&c) => {
                        *next.entry((a, c)).or_default() += n;
                        *next.entry((c, b)).or_default() += n;
                    }
                    None => *next.entry((a, b)).or_default() += n,
                }
            }
            pairs = next;
        }
        // every element is the first of exactly one pair, except the unchanging last one
        let mut counts: FxHashMap<u8, u64> = FxHashMap::default();
        for ((a, _), n) in pairs {*counts.entry(a).or_default() += n}
        if let Some(&last) = self.template.last() {*counts.entry(last).or_default() += 1}
        match counts.values().minmax() {
            MinMaxResult::MinMax(min, max) => Ok(max - min),
            MinMaxResult::OneElement(_) => Ok(0),
            MinMaxResult::NoElements => Err(AocError::AnswerNotFound.into()),
        }
    }
}

#[derive(Default)]
pub struct Day14;

impl Day for Day14 {
    const YEAR: u16 = 2021;
    const DAY: u8 = 14;
    const EXAMPLE: &'static str = "\
NNCB

CH -> B
HH -> N
CB -> H
NH -> C
HB -> C
HC -> B
HN -> C
NN -> C
BH -> H
NC -> B
NB -> B
BN -> B
BB -> N
BC -> B
CC -> N
CN -> C";
    const EXAMPLE_ANSWERS: [Option<&'static str>; 2] = [Some("1588"), Some("2188189693529")];

    type Data = Polymer;

    fn parse(&self, input: &str) -> anyhow::Result<Polymer> {
        let (template, rules) = input.trim().split_once("\n\n").ok_or_else(|| AocError::parse(input, "no blank line after template"))?;
        let rules = rules.lines().map(|line| match line.trim().as_bytes() {
            &[a, b, b' ', b'-', b'>', b' ', c] => Ok(((a, b), c)),
            _ => Err(AocError::parse(line, "expected `AB -> C`")),
        }).collect::<Result<FxHashMap<_, _>, _>>()?;
        Ok(Polymer {template: template.trim().as_bytes().to_vec(), rules})
    }

    fn part1(&self, polymer: &Polymer) -> anyhow::Result<Answer> {Ok(polymer.spread_after(10)?.into())}

    fn part2(&self, polymer: &Polymer) -> anyhow::Result<Answer> {Ok(polymer.spread_after(40)?.into())}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example() {aoc_common::assert_example!(Day14)}
}

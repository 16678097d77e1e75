use aoc_common::{AocError, Answer, Day};

/// A set of lit segments, one bit per wire `a` to `g`.
type Segments = u8;

fn segments(word: &str) -> Option<Segments> {
    word.bytes().try_fold(0, |acc, b| matches!(b, b'a' ..= b'g').then(|| acc | 1 << (b - b'a')))
}

pub struct Display {
    patterns: Vec<Segments>,
    output: Vec<Segments>,
}

impl Display {
    /// Works out which pattern is which digit from lengths and overlaps with 1 and 4.
    fn decode(&self) -> Option<u32> {
        let with_len = |n: u32| self.patterns.iter().copied().find(|p| p.count_ones() == n);
        let one = with_len(2)?;
        let four = with_len(4)?;
        self.output.iter().try_fold(0, |acc, &out| {
            let common = |p: Segments| (out & p).count_ones();
            let digit = match (out.count_ones(), common(one), common(four)) {
                (2, _, _) => 1,
                (3, _, _) => 7,
                (4, _, _) => 4,
                (7, _, _) => 8,
                (5, 2, _) => 3,
                (5, _, 3) => 5,
                (5, _, 2) => 2,
                (6, 1, _) => 6,
                (6, _, 4) => 9,
                (6, _, 3) => 0,
                _ => return None,
            };
            Some(acc * 10 + digit)
        })
    }
}

#[derive(Default)]
pub struct Day8;

impl Day for Day8 {
    const YEAR: u16 = 2021;
    const DAY: u8 = 8;
    const EXAMPLE: &'static str = "\
be cfbegad cbdgef fgaecd cgeb fdcge agebfd fecdb fabcd edb | fdgacbe cefdb cefbgd gcbe
edbfga begcd cbg gc gcadebf fbgde acbgfd abcde gfcbed gfec | fcgedb cgb dgebacf gc
fgaebd cg bdaec gdafb agbcfd gdcbef bgcad gfac gcb cdgabef | cg cg fdcagb cbg
fbegcd cbd adcefb dageb afcb bc aefdc ecdab fgdeca fcdbega | efabcd cedba gadfec cb
aecbfdg fbg gf bafeg dbefa fcge gcbea fcaegb dgceab fcbdga | gecf egdcabf bgf bfgea
fgeab ca afcebg bdacfeg cfaedg gcfdb baec bfadeg bafgc acf | gebdcfa ecba ca fadegcb
dbcfg fgd bdegcaf fgec aegbdf ecdfab fbedc dacgb gdcebf gf | cefg dcbef fcge gbcadfe
bdfegc cbegaf gecbf dfcage bdacg ed bedf ced adcbefg gebcd | ed bcgafe cdgba cbgef
egadfb cdbfeg cegd fecab cgb gbdefca cg fgcdab egfdb bfceg | gbdfcae bgc cg cgb
gcafb gcf dcaebfg ecagb gf abcdeg gaef cafbge fdbac fegbdc | fgae cfgab fg bagce";
    const EXAMPLE_ANSWERS: [Option<&'static str>; 2] = [Some("26"), Some("61229")];

    type Data = Vec<Display>;

    fn parse(&self, input: &str) -> anyhow::Result<Vec<Display>> {
        input.lines().map(|line| -> anyhow::Result<Display> {
            let (patterns, output) = line.split_once(" | ").ok_or_else(|| AocError::parse(line, "missing ` | `"))?;
            let wires = |words: &str| words.split_whitespace().map(segments).collect::<Option<Vec<_>>>()
                .ok_or_else(|| AocError::parse(line, "segments must be `a` to `g`"));
            Ok(Display {patterns: wires(patterns)?, output: wires(output)?})
        }).collect()
    }

    fn part1(&self, displays: &Vec<Display>) -> anyhow::Result<Answer> {
        Ok(displays.iter()
            .flat_map(|d| &d.output)
            .filter(|o| matches!(o.count_ones(), 2 | 3 | 4 | 7))
            .count().into())
    }

    fn part2(&self, displays: &Vec<Display>) -> anyhow::Result<Answer> {
        let mut total = 0;
        for d in displays {
            total += d.decode().ok_or(AocError::AnswerNotFound)?;
        }
        Ok(total.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example() {aoc_common::assert_example!(Day8)}

    #[test]
    fn single_display() {
        let displays = Day8.parse("acedgfb cdfbe gcdfa fbcad dab cefabd cdfgeb eafb cagedb ab | cdfeb fcadb cdfeb cdbaf").unwrap();
        assert_eq!(Day8.part1(&displays).unwrap(), 0.into());
        assert_eq!(Day8.part2(&displays).unwrap(), 5353.into());
    }

    #[test]
    fn rejects_unknown_wires() {
        assert!(Day8.parse("ab xyz | ab").is_err());
        assert!(Day8.parse("ab AB | ab").is_err());
    }

    #[test]
    fn easy_digits_counted() {
        let displays = Day8.parse("be cfbegad cbdgef fgaecd cgeb fdcge agebfd fecdb fabcd edb | fdgacbe cefdb cefbgd gcbe").unwrap();
        assert_eq!(Day8.part1(&displays).unwrap(), 2.into());
        assert_eq!(Day8.part2(&displays).unwrap(), 8394.into());
    }
}

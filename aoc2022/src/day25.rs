use aoc_common::{AocError, Answer, Day};

fn from_snafu(s: &str) -> Result<i64, AocError> {
    s.bytes().try_fold(0i64, |acc, b| {
        let digit = match b {
            b'=' => -2,
            b'-' => -1,
            b'0' ..= b'2' => (b - b'0') as i64,
            _ => return Err(AocError::parse(s, format!("{:?} is not a SNAFU digit", b as char))),
        };
        acc.checked_mul(5).and_then(|v| v.checked_add(digit)).ok_or_else(|| AocError::parse(s, "too large"))
    })
}

fn to_snafu(mut n: i64) -> String {
    if n == 0 {return "0".to_owned()}
    let mut digits = vec![];
    while n != 0 {
        let (digit, carry) = match n.rem_euclid(5) {
            3 => (b'=', 1),
            4 => (b'-', 1),
            d => (b'0' + d as u8, 0),
        };
        digits.push(digit);
        n = n.div_euclid(5) + carry;
    }
    digits.iter().rev().map(|&d| d as char).collect()
}

#[derive(Default)]
pub struct Day25;

impl Day for Day25 {
    const YEAR: u16 = 2022;
    const DAY: u8 = 25;
    const EXAMPLE: &'static str = "\
1=-0-2
12111
2=0=
21
2=01
111
20012
112
1=-1=
1-12
12
1=
122";
    const EXAMPLE_ANSWERS: [Option<&'static str>; 2] = [Some("2=-1=0"), None];

    type Data = Vec<i64>;

    fn parse(&self, input: &str) -> anyhow::Result<Vec<i64>> {
        Ok(input.lines().map(str::trim).filter(|l| !l.is_empty()).map(from_snafu).collect::<Result<Vec<_>, _>>()?)
    }

    fn part1(&self, numbers: &Vec<i64>) -> anyhow::Result<Answer> {
        Ok(to_snafu(numbers.iter().sum()).into())
    }

    /// The last day has no second puzzle.
    fn part2(&self, _numbers: &Vec<i64>) -> anyhow::Result<Answer> {
        Err(AocError::AnswerNotFound.into())
    }

    fn solve(&self, input: &str, parts: aoc_common::Parts) -> anyhow::Result<aoc_common::Answers> {
        let numbers = self.parse(input)?;
        let first = if parts.a {Some(self.part1(&numbers)?)} else {None};
        Ok(aoc_common::Answers(first, None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example() {aoc_common::assert_example!(Day25)}

    #[test]
    fn conversions() {
        for (n, s) in [(1, "1"), (3, "1="), (8, "2="), (20, "1-0"), (2022, "1=11-2"), (314159265, "1121-1110-1=0")] {
            assert_eq!(to_snafu(n), s);
            assert_eq!(from_snafu(s).unwrap(), n);
        }
        assert!(from_snafu("13").is_err());
    }
}

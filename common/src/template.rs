use std::fmt;
use std::str::FromStr;

use crate::error::AocError;

/// A puzzle answer, kept as the text that gets printed and submitted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Answer(String);

impl Answer {
    pub fn as_str(&self) -> &str {&self.0}

    /// Rendered pictures can't be typed into the answer box as-is.
    pub fn is_submittable(&self) -> bool {
        !self.0.is_empty() && !self.0.contains('\n')
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {f.write_str(&self.0)}
}

macro_rules! answer_from_int {
    ($($t:ty),*) => {$(
        impl From<$t> for Answer {
            fn from(n: $t) -> Self {Answer(n.to_string())}
        }
    )*};
}
answer_from_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl From<String> for Answer {
    fn from(s: String) -> Self {Answer(s)}
}

impl From<&str> for Answer {
    fn from(s: &str) -> Self {Answer(s.to_owned())}
}

/// Which halves of a puzzle to run, written as a subset of `ab`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parts {
    pub a: bool,
    pub b: bool,
}

impl Parts {
    pub const BOTH: Parts = Parts {a: true, b: true};

    pub fn contains(&self, part: u8) -> bool {
        match part {1 => self.a, 2 => self.b, _ => false}
    }
}

impl Default for Parts {
    fn default() -> Self {Parts::BOTH}
}

impl FromStr for Parts {
    type Err = AocError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(AocError::BadParts(s.to_owned()));
        }
        let mut parts = Parts {a: false, b: false};
        for c in s.chars() {
            match c {
                'a' => parts.a = true,
                'b' => parts.b = true,
                _ => return Err(AocError::BadParts(s.to_owned())),
            }
        }
        Ok(parts)
    }
}

impl fmt::Display for Parts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a {f.write_str("a")?}
        if self.b {f.write_str("b")?}
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Answers(pub Option<Answer>, pub Option<Answer>);

impl Answers {
    pub fn get(&self, part: u8) -> Option<&Answer> {
        match part {1 => self.0.as_ref(), 2 => self.1.as_ref(), _ => None}
    }

    /// Matches the answers against the expected text, skipping parts left unrun.
    pub fn mismatches(&self, expected: [Option<&str>; 2]) -> Vec<(u8, String, String)> {
        (1 ..= 2u8).zip(expected).filter_map(|(part, want)| {
            let got = self.get(part)?;
            let want = want?;
            (got.as_str() != want).then(|| (part, want.to_owned(), got.to_string()))
        }).collect()
    }
}

impl fmt::Display for Answers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let show = |a: &Option<Answer>| a.as_ref().map_or("None".to_owned(), |a| a.to_string());
        write!(f, "({}, {})", show(&self.0), show(&self.1))
    }
}

/// One day of the event: parse the input once, then answer both parts from it.
pub trait Day: Default {
    const YEAR: u16;
    const DAY: u8;
    /// Example input published alongside the puzzle text.
    const EXAMPLE: &'static str;
    /// What `EXAMPLE` is supposed to produce; `None` marks a part with nothing to check.
    const EXAMPLE_ANSWERS: [Option<&'static str>; 2];

    type Data;

    /// The example often runs with smaller parameters than the real input.
    fn for_example() -> Self {Self::default()}

    fn parse(&self, input: &str) -> anyhow::Result<Self::Data>;
    fn part1(&self, data: &Self::Data) -> anyhow::Result<Answer>;
    fn part2(&self, data: &Self::Data) -> anyhow::Result<Answer>;

    fn solve(&self, input: &str, parts: Parts) -> anyhow::Result<Answers> {
        let data = self.parse(input)?;
        let first = if parts.a {Some(self.part1(&data)?)} else {None};
        let second = if parts.b {Some(self.part2(&data)?)} else {None};
        Ok(Answers(first, second))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Default)]
    struct Counting {parses: Cell<u32>}

    impl Day for Counting {
        const YEAR: u16 = 2000;
        const DAY: u8 = 1;
        const EXAMPLE: &'static str = "1\n2\n3";
        const EXAMPLE_ANSWERS: [Option<&'static str>; 2] = [Some("6"), Some("3")];
        type Data = Vec<u32>;

        fn parse(&self, input: &str) -> anyhow::Result<Vec<u32>> {
            self.parses.set(self.parses.get() + 1);
            Ok(input.lines().map(|l| l.parse::<u32>()).collect::<Result<Vec<_>, _>>()?)
        }
        fn part1(&self, data: &Vec<u32>) -> anyhow::Result<Answer> {Ok(data.iter().sum::<u32>().into())}
        fn part2(&self, data: &Vec<u32>) -> anyhow::Result<Answer> {Ok(data.len().into())}
    }

    #[test]
    fn parts_parse() {
        assert_eq!("ab".parse::<Parts>().unwrap(), Parts::BOTH);
        assert_eq!("b".parse::<Parts>().unwrap(), Parts {a: false, b: true});
        assert!("".parse::<Parts>().is_err());
        assert!("ac".parse::<Parts>().is_err());
        assert_eq!(Parts {a: true, b: false}.to_string(), "a");
    }

    #[test]
    fn solve_runs_selected_parts_once() {
        let day = Counting::default();
        let answers = day.solve(Counting::EXAMPLE, "b".parse().unwrap()).unwrap();
        assert_eq!(answers, Answers(None, Some(3.into())));
        assert_eq!(day.parses.get(), 1);
        assert!(answers.mismatches(Counting::EXAMPLE_ANSWERS).is_empty());
        assert_eq!(answers.to_string(), "(None, 3)");
    }

    #[test]
    fn mismatch_reported() {
        let answers = Answers(Some("7".into()), Some("3".into()));
        let wrong = answers.mismatches(Counting::EXAMPLE_ANSWERS);
        assert_eq!(wrong, vec![(1, "6".to_owned(), "7".to_owned())]);
    }

    #[test]
    fn pictures_are_not_submittable() {
        assert!(Answer::from(12u64).is_submittable());
        assert!(!Answer::from("\n#.\n.#").is_submittable());
        assert!(!Answer::from("").is_submittable());
    }
}

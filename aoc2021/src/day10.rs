use aoc_common::{AocError, Answer, Day};

pub enum Line {
    Corrupted(u8),
    /// Closers still owed, innermost first.
    Incomplete(Vec<u8>),
}

fn closer(open: u8) -> Option<u8> {
    match open {b'(' => Some(b')'), b'[' => Some(b']'), b'{' => Some(b'}'), b'<' => Some(b'>'), _ => None}
}

fn check(line: &str) -> Result<Line, AocError> {
    let mut stack = vec![];
    for b in line.trim().bytes() {
        if let Some(c) = closer(b) {
            stack.push(c);
        } else if matches!(b, b')' | b']' | b'}' | b'>') {
            if stack.pop() != Some(b) {return Ok(Line::Corrupted(b))}
        } else {
            return Err(AocError::parse(line, format!("unexpected {:?}", b as char)));
        }
    }
    stack.reverse();
    Ok(Line::Incomplete(stack))
}

#[derive(Default)]
pub struct Day10;

impl Day for Day10 {
    const YEAR: u16 = 2021;
    const DAY: u8 = 10;
    const EXAMPLE: &'static str = "\
[({(<(())[]>[[{[]{<()<>>
[(()[<>])]({[<{<<[]>>(
{([(<{}[<>[]}>{[]{[(<()>
(((({<>}<{<{<>}{[]{[]{}
[[<[([]))<([[{}[[()]]]
[{[{({}]{}}([{[{{{}}([]
{<[[]]>}<{[{[{[]{()[[[]
[<(<(<(<{}))><([]([]()
<{([([[(<>()){}]>(<<{{
<{([{{}}[<[[[<>{}]]]>[]]";
    const EXAMPLE_ANSWERS: [Option<&'static str>; 2] = [Some("26397"), Some("288957")];

    type Data = Vec<Line>;

    fn parse(&self, input: &str) -> anyhow::Result<Vec<Line>> {
        Ok(input.lines().map(check).collect::<Result<Vec<_>, _>>()?)
    }

    fn part1(&self, lines: &Vec<Line>) -> anyhow::Result<Answer> {
        Ok(lines.iter().map(|line| match line {
            Line::Corrupted(b')') => 3,
            Line::Corrupted(b']') => 57,
            Line::Corrupted(b'}') => 1197,
            Line::Corrupted(_) => 25137,
            Line::Incomplete(_) => 0,
        }).sum::<u64>().into())
    }

    fn part2(&self, lines: &Vec<Line>) -> anyhow::Result<Answer> {
        let mut scores: Vec<u64> = lines.iter().filter_map(|line| match line {
            Line::Incomplete(rest) => Some(rest.iter().fold(0, |acc, b| {
                5 * acc + match b {b')' => 1, b']' => 2, b'}' => 3, _ => 4}
            })),
            Line::Corrupted(_) => None,
        }).collect();
        if scores.is_empty() {return Err(AocError::AnswerNotFound.into())}
        let mid = scores.len() / 2;
        Ok((*scores.select_nth_unstable(mid).1).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example() {aoc_common::assert_example!(Day10)}

    #[test]
    fn completion_order() {
        let Line::Incomplete(rest) = check("[({(<(())[]>[[{[]{<()<>>").unwrap() else {panic!()};
        assert_eq!(rest, b"}}]])})]");
    }
}

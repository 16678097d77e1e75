use aoc_common::{AocError, Answer, Day};
use regex::Regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    count: usize,
    from: usize,
    to: usize,
}

pub struct Dock {
    stacks: Vec<Vec<u8>>,
    moves: Vec<Move>,
}

impl Dock {
    fn rearrange(&self, keep_order: bool) -> anyhow::Result<String> {
        let mut stacks = self.stacks.clone();
        for &Move {count, from, to} in &self.moves {
            let source = &mut stacks[from];
            let at = source.len().checked_sub(count).ok_or(AocError::AnswerNotFound)?;
            let mut lifted = source.split_off(at);
            if !keep_order {lifted.reverse()}
            stacks[to].extend(lifted);
        }
        stacks.iter().map(|s| s.last().map(|&c| c as char)).collect::<Option<String>>()
            .ok_or_else(|| AocError::AnswerNotFound.into())
    }
}

#[derive(Default)]
pub struct Day5;

impl Day for Day5 {
    const YEAR: u16 = 2022;
    const DAY: u8 = 5;
    const EXAMPLE: &'static str = concat!(
        "    [D]    \n",
        "[N] [C]    \n",
        "[Z] [M] [P]\n",
        " 1   2   3 \n",
        "\n",
        "move 1 from 2 to 1\n",
        "move 3 from 1 to 3\n",
        "move 2 from 2 to 1\n",
        "move 1 from 1 to 2",
    );
    const EXAMPLE_ANSWERS: [Option<&'static str>; 2] = [Some("CMZ"), Some("MCD")];

    type Data = Dock;

    fn parse(&self, input: &str) -> anyhow::Result<Dock> {
        let (drawing, moves) = input.trim_end().split_once("\n\n")
            .ok_or_else(|| AocError::parse(input, "no blank line after the drawing"))?;
        let mut rows = drawing.lines().rev();
        let labels = rows.next().ok_or_else(|| AocError::parse(drawing, "empty drawing"))?;
        let mut stacks = vec![vec![]; labels.split_whitespace().count()];
        for row in rows {
            for (i, stack) in stacks.iter_mut().enumerate() {
                match row.as_bytes().get(1 + 4 * i) {
                    Some(&c) if c.is_ascii_alphabetic() => stack.push(c),
                    _ => {}
                }
            }
        }

        let re = Regex::new(r"^move (\d+) from (\d+) to (\d+)$")?;
        let moves = moves.lines().map(|line| -> anyhow::Result<Move> {
            let caps = re.captures(line.trim()).ok_or_else(|| AocError::parse(line, "expected `move n from a to b`"))?;
            let stack = |i: usize| -> anyhow::Result<usize> {
                let n: usize = caps[i].parse()?;
                n.checked_sub(1).filter(|&ix| ix < stacks.len())
                    .ok_or_else(|| AocError::parse(line, format!("no stack {n}")).into())
            };
            Ok(Move {count: caps[1].parse()?, from: stack(2)?, to: stack(3)?})
        }).collect::<anyhow::Result<Vec<_>>>()?;
        Ok(Dock {stacks, moves})
    }

    fn part1(&self, dock: &Dock) -> anyhow::Result<Answer> {Ok(dock.rearrange(false)?.into())}

    fn part2(&self, dock: &Dock) -> anyhow::Result<Answer> {Ok(dock.rearrange(true)?.into())}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example() {aoc_common::assert_example!(Day5)}

    #[test]
    fn drawing() {
        let dock = Day5.parse(Day5::EXAMPLE).unwrap();
        assert_eq!(dock.stacks, vec![b"ZN".to_vec(), b"MCD".to_vec(), b"P".to_vec()]);
        assert_eq!(dock.moves[1], Move {count: 3, from: 0, to: 2});
    }
}

use anyhow::Context;
use aoc_common::{AocError, Answer, Day};

const LINES: [u32; 10] = [
    0b_00000_00000_00000_00000_11111,
    0b_00000_00000_00000_11111_00000,
    0b_00000_00000_11111_00000_00000,
    0b_00000_11111_00000_00000_00000,
    0b_11111_00000_00000_00000_00000,
    0b_00001_00001_00001_00001_00001,
    0b_00010_00010_00010_00010_00010,
    0b_00100_00100_00100_00100_00100,
    0b_01000_01000_01000_01000_01000,
    0b_10000_10000_10000_10000_10000,
];

#[derive(Default)]
pub struct Day4;

pub struct Bingo {
    draws: Vec<u32>,
    boards: Vec<Vec<u32>>,
}

impl Bingo {
    /// For every board that ever wins: the turn it wins on and its score.
    fn wins(&self) -> Vec<(usize, u32)> {
        self.boards.iter().filter_map(|board| {
            let mut marked = 0u32;
            self.draws.iter().enumerate().find_map(|(turn, &draw)| {
                let ix = board.iter().position(|&b| b == draw)?;
                marked |= 1 << ix;
                LINES.iter().any(|&line| marked & line == line).then(|| {
                    let unmarked: u32 = (0 .. 25).filter(|ix| marked & 1 << ix == 0).map(|ix| board[ix]).sum();
                    (turn, unmarked * draw)
                })
            })
        }).collect()
    }
}

impl Day for Day4 {
    const YEAR: u16 = 2021;
    const DAY: u8 = 4;
    const EXAMPLE: &'static str = "\
7,4,9,5,11,17,23,2,0,14,21,24,10,16,13,6,15,25,12,22,18,20,8,19,3,26,1

22 13 17 11  0
 8  2 23  4 24
21  9 14 16  7
 6 10  3 18  5
 1 12 20 15 19

 3 15  0  2 22
 9 18 13 17  5
19  8  7 25 23
20 11 10 24  4
14 21 16 12  6

14 21 17 24  4
10 16 15  9 19
18  8 23 26 20
22 11 13  6  5
 2  0 12  3  7";
    const EXAMPLE_ANSWERS: [Option<&'static str>; 2] = [Some("4512"), Some("1924")];

    type Data = Bingo;

    fn parse(&self, input: &str) -> anyhow::Result<Bingo> {
        let mut blocks = input.trim().split("\n\n");
        let draws = blocks.next().unwrap_or_default().split(',')
            .map(|s| s.trim().parse::<u32>())
            .collect::<Result<Vec<_>, _>>()
            .context("bad draw list")?;
        let boards = blocks.map(|block| -> anyhow::Result<Vec<u32>> {
            let board = block.split_ascii_whitespace().map(|s| s.parse::<u32>()).collect::<Result<Vec<_>, _>>()?;
            if board.len() != 25 {
                return Err(AocError::parse(block, "a board needs 25 numbers").into());
            }
            Ok(board)
        }).collect::<anyhow::Result<Vec<_>>>()?;
        Ok(Bingo {draws, boards})
    }

    fn part1(&self, bingo: &Bingo) -> anyhow::Result<Answer> {
        let (_, score) = bingo.wins().into_iter().min_by_key(|&(turn, _)| turn).ok_or(AocError::AnswerNotFound)?;
        Ok(score.into())
    }

    fn part2(&self, bingo: &Bingo) -> anyhow::Result<Answer> {
        let (_, score) = bingo.wins().into_iter().max_by_key(|&(turn, _)| turn).ok_or(AocError::AnswerNotFound)?;
        Ok(score.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example() {aoc_common::assert_example!(Day4)}
}

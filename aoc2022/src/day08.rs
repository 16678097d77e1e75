use aoc_common::{AocError, Answer, Day};
use bitvec::prelude::*;

/// Trees seen from a house of height `tree` looking along `path`.
fn viewing_distance(heights: &[u8], tree: u8, path: Vec<usize>) -> usize {
    let mut seen = 0;
    for i in path {
        seen += 1;
        if heights[i] >= tree {break}
    }
    seen
}

pub struct Forest {
    width: usize,
    heights: Vec<u8>,
}

impl Forest {
    fn height(&self) -> usize {self.heights.len() / self.width}

    /// Every line of sight from the edge inwards, as runs of indices.
    fn sightlines(&self) -> Vec<Vec<usize>> {
        let (w, h) = (self.width, self.height());
        let mut lines: Vec<Vec<usize>> = vec![];
        for y in 0 .. h {
            let row: Vec<usize> = (0 .. w).map(|x| y * w + x).collect();
            lines.push(row.iter().rev().copied().collect());
            lines.push(row);
        }
        for x in 0 .. w {
            let col: Vec<usize> = (0 .. h).map(|y| y * w + x).collect();
            lines.push(col.iter().rev().copied().collect());
            lines.push(col);
        }
        lines
    }

    fn scenic_score(&self, ix: usize) -> usize {
        let (w, h) = (self.width, self.height());
        let (x, y) = (ix % w, ix / w);
        let tree = self.heights[ix];
        let view = |path: Vec<usize>| viewing_distance(&self.heights, tree, path);
        view((0 .. x).rev().map(|x| y * w + x).collect())
            * view((x + 1 .. w).map(|x| y * w + x).collect())
            * view((0 .. y).rev().map(|y| y * w + x).collect())
            * view((y + 1 .. h).map(|y| y * w + x).collect())
    }
}

#[derive(Default)]
pub struct Day8;

impl Day for Day8 {
    const YEAR: u16 = 2022;
    const DAY: u8 = 8;
    const EXAMPLE: &'static str = "\
30373
25512
65332
33549
35390";
    const EXAMPLE_ANSWERS: [Option<&'static str>; 2] = [Some("21"), Some("8")];

    type Data = Forest;

    fn parse(&self, input: &str) -> anyhow::Result<Forest> {
        let rows: Vec<&str> = input.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
        let width = rows.first().map_or(0, |r| r.len());
        let mut heights = Vec::with_capacity(width * rows.len());
        for row in &rows {
            if row.len() != width || !row.bytes().all(|b| b.is_ascii_digit()) {
                return Err(AocError::parse(*row, "rows must be equal runs of digits").into());
            }
            heights.extend(row.bytes().map(|b| b - b'0'));
        }
        if width == 0 {return Err(AocError::parse(input, "empty forest").into())}
        Ok(Forest {width, heights})
    }

    fn part1(&self, forest: &Forest) -> anyhow::Result<Answer> {
        let mut visible = bitvec![0; forest.heights.len()];
        for line in forest.sightlines() {
            let mut tallest = None;
            for ix in line {
                let tree = Some(forest.heights[ix]);
                if tree > tallest {
                    visible.set(ix, true);
                    tallest = tree;
                }
            }
        }
        Ok(visible.count_ones().into())
    }

    fn part2(&self, forest: &Forest) -> anyhow::Result<Answer> {
        let best = (0 .. forest.heights.len()).map(|ix| forest.scenic_score(ix)).max();
        Ok(best.ok_or(AocError::AnswerNotFound)?.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example() {aoc_common::assert_example!(Day8)}

    #[test]
    fn scenic_scores() {
        let forest = Day8.parse(Day8::EXAMPLE).unwrap();
        assert_eq!(forest.scenic_score(7), 4);
        assert_eq!(forest.scenic_score(17), 8);
    }
}

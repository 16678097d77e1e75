use aoc_common::{ocr, AocError, Answer, Day};
use itertools::Itertools;
use rustc_hash::FxHashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fold {X(i64), Y(i64)}

pub struct Manual {
    dots: FxHashSet<(i64, i64)>,
    folds: Vec<Fold>,
}

fn fold(dots: &FxHashSet<(i64, i64)>, fold: Fold) -> FxHashSet<(i64, i64)> {
    let reflect = |v: i64, line: i64| if v > line {2 * line - v} else {v};
    dots.iter().map(|&(x, y)| match fold {
        Fold::X(line) => (reflect(x, line), y),
        Fold::Y(line) => (x, reflect(y, line)),
    }).collect()
}

#[derive(Default)]
pub struct Day13;

impl Day for Day13 {
    const YEAR: u16 = 2021;
    const DAY: u8 = 13;
    const EXAMPLE: &'static str = "\
6,10
0,14
9,10
0,3
10,4
4,11
6,0
6,12
4,1
0,13
10,12
3,4
3,0
8,4
1,10
2,14
8,10
9,0

fold along y=7
fold along x=5";
    const EXAMPLE_ANSWERS: [Option<&'static str>; 2] = [Some("17"), Some("\n#####\n#...#\n#...#\n#...#\n#####")];

    type Data = Manual;

    fn parse(&self, input: &str) -> anyhow::Result<Manual> {
        let (dots, folds) = input.trim().split_once("\n\n").ok_or_else(|| AocError::parse(input, "no blank line before folds"))?;
        let dots = dots.lines().map(|line| -> anyhow::Result<(i64, i64)> {
            let (x, y) = line.trim().split_once(',').ok_or_else(|| AocError::parse(line, "expected `x,y`"))?;
            Ok((x.parse()?, y.parse()?))
        }).collect::<anyhow::Result<FxHashSet<_>>>()?;
        let folds = folds.lines().map(|line| -> anyhow::Result<Fold> {
            let axis = line.trim().strip_prefix("fold along ").ok_or_else(|| AocError::parse(line, "expected `fold along`"))?;
            match axis.split_once('=') {
                Some(("x", v)) => Ok(Fold::X(v.parse()?)),
                Some(("y", v)) => Ok(Fold::Y(v.parse()?)),
                _ => Err(AocError::parse(line, "fold axis must be x or y").into()),
            }
        }).collect::<anyhow::Result<Vec<_>>>()?;
        Ok(Manual {dots, folds})
    }

    fn part1(&self, manual: &Manual) -> anyhow::Result<Answer> {
        let first = *manual.folds.first().ok_or(AocError::AnswerNotFound)?;
        Ok(fold(&manual.dots, first).len().into())
    }

    fn part2(&self, manual: &Manual) -> anyhow::Result<Answer> {
        let dots = manual.folds.iter().fold(manual.dots.clone(), |dots, &f| fold(&dots, f));
        let (width, height) = dots.iter().fold((0, 0), |(w, h), &(x, y)| (w.max(x + 1), h.max(y + 1)));
        let pixels = (0 .. height).map(|y| (0 .. width).map(|x| dots.contains(&(x, y))).collect_vec()).collect_vec();
        Ok(ocr::read(&pixels).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example() {aoc_common::assert_example!(Day13)}
}

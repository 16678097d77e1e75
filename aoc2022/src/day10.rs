use aoc_common::{ocr, AocError, Answer, Day};
use itertools::Itertools;
use tracing::debug;

const SCREEN_WIDTH: usize = 40;
const SCREEN_HEIGHT: usize = 6;

#[derive(Default)]
pub struct Day10;

impl Day for Day10 {
    const YEAR: u16 = 2022;
    const DAY: u8 = 10;
    const EXAMPLE: &'static str = "\
addx 15
addx -11
addx 6
addx -3
addx 5
addx -1
addx -8
addx 13
addx 4
noop
addx -1
addx 5
addx -1
addx 5
addx -1
addx 5
addx -1
addx 5
addx -1
addx -35
addx 1
addx 24
addx -19
addx 1
addx 16
addx -11
noop
noop
addx 21
addx -15
noop
noop
addx -3
addx 9
addx 1
addx -3
addx 8
addx 1
addx 5
noop
noop
noop
noop
noop
addx -36
noop
addx 1
addx 7
noop
noop
noop
addx 2
addx 6
noop
noop
noop
noop
noop
addx 1
noop
noop
addx 7
addx 1
noop
addx -13
addx 13
addx 7
noop
addx 1
addx -33
noop
noop
noop
addx 2
noop
noop
noop
addx 8
noop
addx -1
addx 2
addx 1
noop
addx 17
addx -9
addx 1
addx 1
addx -3
addx 11
noop
noop
addx 1
noop
addx 1
noop
noop
addx -13
addx -19
addx 1
addx 3
addx 26
addx -30
addx 12
addx -1
addx 3
addx 1
noop
noop
noop
addx -9
addx 18
addx 1
addx 2
noop
noop
addx 9
noop
noop
noop
addx -1
addx 2
addx -37
addx 1
addx 3
noop
addx 15
addx -21
addx 22
addx -6
addx 1
noop
addx 2
addx 1
noop
addx -10
noop
noop
addx 20
addx 1
addx 2
addx 2
addx -6
addx -11
noop
noop
noop";
    const EXAMPLE_ANSWERS: [Option<&'static str>; 2] = [Some("13140"), Some(concat!(
        "\n##..##..##..##..##..##..##..##..##..##..",
        "\n###...###...###...###...###...###...###.",
        "\n####....####....####....####....####....",
        "\n#####.....#####.....#####.....#####.....",
        "\n######......######......######......####",
        "\n#######.......#######.......#######.....",
    ))];

    /// The X register during each cycle, starting with cycle 1.
    type Data = Vec<i64>;

    fn parse(&self, input: &str) -> anyhow::Result<Vec<i64>> {
        let mut x = 1;
        let mut cycles = vec![];
        for line in input.lines().map(str::trim) {
            match line.split_once(' ') {
                None if line == "noop" => cycles.push(x),
                Some(("addx", n)) => {
                    let n: i64 = n.parse().map_err(|_| AocError::parse(line, "bad addx operand"))?;
                    cycles.extend([x, x]);
                    x += n;
                }
                _ => return Err(AocError::parse(line, "expected `noop` or `addx <n>`").into()),
            }
        }
        debug!("program runs for {} cycles, X ends at {x}", cycles.len());
        Ok(cycles)
    }

    fn part1(&self, cycles: &Vec<i64>) -> anyhow::Result<Answer> {
        let strength: i64 = (20 ..= 220).step_by(SCREEN_WIDTH)
            .filter_map(|cycle| cycles.get(cycle - 1).map(|x| cycle as i64 * x))
            .sum();
        Ok(strength.into())
    }

    fn part2(&self, cycles: &Vec<i64>) -> anyhow::Result<Answer> {
        let pixels = cycles.iter().take(SCREEN_WIDTH * SCREEN_HEIGHT).enumerate()
            .map(|(cycle, &x)| (x - (cycle % SCREEN_WIDTH) as i64).abs() <= 1)
            .chunks(SCREEN_WIDTH).into_iter()
            .map(|row| row.collect_vec())
            .collect_vec();
        Ok(ocr::read(&pixels).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example() {aoc_common::assert_example!(Day10)}

    #[test]
    fn small_program() {
        assert_eq!(Day10.parse("noop\naddx 3\naddx -5").unwrap(), vec![1, 1, 1, 4, 4]);
    }
}

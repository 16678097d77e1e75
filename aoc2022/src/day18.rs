use aoc_common::{AocError, Answer, Day};
use rustc_hash::FxHashSet;
use tracing::debug;

type Cube = [i32; 3];

fn neighbors([x, y, z]: Cube) -> [Cube; 6] {
    [[x - 1, y, z], [x + 1, y, z], [x, y - 1, z], [x, y + 1, z], [x, y, z - 1], [x, y, z + 1]]
}

#[derive(Default)]
pub struct Day18;

impl Day for Day18 {
    const YEAR: u16 = 2022;
    const DAY: u8 = 18;
    const EXAMPLE: &'static str = "\
2,2,2
1,2,2
3,2,2
2,1,2
2,3,2
2,2,1
2,2,3
2,2,4
2,2,6
1,2,5
3,2,5
2,1,5
2,3,5";
    const EXAMPLE_ANSWERS: [Option<&'static str>; 2] = [Some("64"), Some("58")];

    type Data = FxHashSet<Cube>;

    fn parse(&self, input: &str) -> anyhow::Result<FxHashSet<Cube>> {
        input.lines().filter(|l| !l.trim().is_empty()).map(|line| -> anyhow::Result<Cube> {
            let coords = line.trim().split(',').map(str::parse).collect::<Result<Vec<i32>, _>>()?;
            <Cube>::try_from(coords).map_err(|_| AocError::parse(line, "expected `x,y,z`").into())
        }).collect()
    }

    fn part1(&self, cubes: &FxHashSet<Cube>) -> anyhow::Result<Answer> {
        let faces = cubes.iter().flat_map(|&c| neighbors(c)).filter(|n| !cubes.contains(n)).count();
        Ok(faces.into())
    }

    /// Floods the air around the droplet inside a box one larger than it.
    fn part2(&self, cubes: &FxHashSet<Cube>) -> anyhow::Result<Answer> {
        let lo = (0 .. 3).map(|i| cubes.iter().map(|c| c[i]).min().unwrap_or(0) - 1).collect::<Vec<_>>();
        let hi = (0 .. 3).map(|i| cubes.iter().map(|c| c[i]).max().unwrap_or(0) + 1).collect::<Vec<_>>();
        let inside = |c: &Cube| (0 .. 3).all(|i| (lo[i] ..= hi[i]).contains(&c[i]));

        let start = [lo[0], lo[1], lo[2]];
        let mut outside = FxHashSet::from_iter([start]);
        let mut stack = vec![start];
        let mut faces = 0;
        while let Some(air) = stack.pop() {
            for n in neighbors(air) {
                if !inside(&n) {continue}
                if cubes.contains(&n) {
                    faces += 1;
                } else if outside.insert(n) {
                    stack.push(n);
                }
            }
        }
        debug!("{} air cubes reachable from outside", outside.len());
        Ok(faces.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example() {aoc_common::assert_example!(Day18)}

    #[test]
    fn two_cubes() {
        let cubes = Day18.parse("1,1,1\n2,1,1").unwrap();
        assert_eq!(Day18.part1(&cubes).unwrap().as_str(), "10");
        assert_eq!(Day18.part2(&cubes).unwrap().as_str(), "10");
    }
}

use aoc_common::{AocError, Answer, Day};
use rustc_hash::FxHashMap;
use tracing::debug;

/// Caves numbered by first appearance, with adjacency as bitmasks.
pub struct CaveMap {
    small: u64,
    links: Vec<u64>,
    start: usize,
    end: usize,
}

impl CaveMap {
    fn count_paths(&self, at: usize, visited: u64, revisit_left: bool) -> u64 {
        if at == self.end {return 1}
        let mut paths = 0;
        let mut next = self.links[at];
        while next != 0 {
            let cave = next.trailing_zeros() as usize;
            next &= next - 1;
            if cave == self.start {continue}
            let bit = 1u64 << cave;
            if self.small & bit == 0 || visited & bit == 0 {
                paths += self.count_paths(cave, visited | (bit & self.small), revisit_left);
            } else if revisit_left {
                paths += self.count_paths(cave, visited, false);
            }
        }
        paths
    }

    fn cave_id<'a>(&mut self, ids: &mut FxHashMap<&'a str, usize>, name: &'a str) -> Option<usize> {
        if let Some(&id) = ids.get(name) {return Some(id)}
        let id = ids.len();
        if id >= 64 {return None}
        ids.insert(name, id);
        self.links.push(0);
        if name.bytes().all(|b| b.is_ascii_lowercase()) {self.small |= 1 << id}
        Some(id)
    }

    fn paths(&self, allow_revisit: bool) -> u64 {
        self.count_paths(self.start, 1 << self.start, allow_revisit)
    }
}

#[derive(Default)]
pub struct Day12;

impl Day for Day12 {
    const YEAR: u16 = 2021;
    const DAY: u8 = 12;
    const EXAMPLE: &'static str = "\
start-A
start-b
A-c
A-b
b-d
A-end
b-end";
    const EXAMPLE_ANSWERS: [Option<&'static str>; 2] = [Some("10"), Some("36")];

    type Data = CaveMap;

    fn parse(&self, input: &str) -> anyhow::Result<CaveMap> {
        let mut ids: FxHashMap<&str, usize> = FxHashMap::default();
        let mut map = CaveMap {small: 0, links: vec![], start: usize::MAX, end: usize::MAX};
        for line in input.lines() {
            let (a, b) = line.trim().split_once('-').ok_or_else(|| AocError::parse(line, "expected `a-b`"))?;
            let (a, b) = match (map.cave_id(&mut ids, a), map.cave_id(&mut ids, b)) {
                (Some(a), Some(b)) => (a, b),
                _ => return Err(AocError::parse(line, "more than 64 caves").into()),
            };
            map.links[a] |= 1 << b;
            map.links[b] |= 1 << a;
        }
        map.start = *ids.get("start").ok_or_else(|| AocError::parse(input, "no start cave"))?;
        map.end = *ids.get("end").ok_or_else(|| AocError::parse(input, "no end cave"))?;
        debug!("{} caves, small mask {:b}", ids.len(), map.small);
        Ok(map)
    }

    fn part1(&self, map: &CaveMap) -> anyhow::Result<Answer> {Ok(map.paths(false).into())}

    fn part2(&self, map: &CaveMap) -> anyhow::Result<Answer> {Ok(map.paths(true).into())}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example() {aoc_common::assert_example!(Day12)}

    #[test]
    fn larger_example() {
        let answers = Day12.solve("\
dc-end
HN-start
start-kj
dc-start
dc-HN
LN-dc
HN-end
kj-sy
kj-HN
kj-dc", aoc_common::Parts::BOTH).unwrap();
        assert_eq!(answers, aoc_common::Answers(Some(19.into()), Some(103.into())));
    }
}

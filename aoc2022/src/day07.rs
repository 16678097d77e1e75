use aoc_common::{AocError, Answer, Day};
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::debug;

const DISK: u64 = 70_000_000;
const UPDATE: u64 = 30_000_000;
const SMALL_DIR: u64 = 100_000;

/// Total size of every directory seen, with the root first.
pub type Sizes = Vec<u64>;

#[derive(Default)]
pub struct Day7;

impl Day for Day7 {
    const YEAR: u16 = 2022;
    const DAY: u8 = 7;
    const EXAMPLE: &'static str = "\
$ cd /
$ ls
dir a
14848514 b.txt
8504156 c.dat
dir d
$ cd a
$ ls
dir e
29116 f
2557 g
62596 h.lst
$ cd e
$ ls
584 i
$ cd ..
$ cd ..
$ cd d
$ ls
4060174 j
8033020 d.log
5626152 d.ext
7214296 k";
    const EXAMPLE_ANSWERS: [Option<&'static str>; 2] = [Some("95437"), Some("24933642")];

    type Data = Sizes;

    fn parse(&self, input: &str) -> anyhow::Result<Sizes> {
        let mut cwd: Vec<&str> = vec![];
        let mut sizes: FxHashMap<Vec<&str>, u64> = FxHashMap::default();
        let mut files = FxHashSet::default();
        sizes.insert(vec![], 0);
        for line in input.lines().map(str::trim) {
            match line.split(' ').collect::<Vec<_>>()[..] {
                ["$", "cd", "/"] => cwd.clear(),
                ["$", "cd", ".."] => {cwd.pop();}
                ["$", "cd", dir] => {
                    cwd.push(dir);
                    sizes.entry(cwd.clone()).or_default();
                }
                ["$", "ls"] | ["dir", _] => {}
                [size, name] => {
                    let size: u64 = size.parse().map_err(|_| AocError::parse(line, "expected `<size> <name>`"))?;
                    if !files.insert((cwd.clone(), name)) {
                        debug!("listed {name} in /{} twice", cwd.join("/"));
                        continue;
                    }
                    for depth in 0 ..= cwd.len() {
                        *sizes.entry(cwd[.. depth].to_vec()).or_default() += size;
                    }
                }
                _ => return Err(AocError::parse(line, "unrecognised terminal line").into()),
            }
        }
        let root = sizes.remove(&Vec::<&str>::new()).unwrap_or_default();
        Ok(std::iter::once(root).chain(sizes.into_values()).collect())
    }

    fn part1(&self, sizes: &Sizes) -> anyhow::Result<Answer> {
        Ok(sizes.iter().filter(|&&size| size <= SMALL_DIR).sum::<u64>().into())
    }

    fn part2(&self, sizes: &Sizes) -> anyhow::Result<Answer> {
        let used = *sizes.first().ok_or(AocError::AnswerNotFound)?;
        let needed = (used + UPDATE).saturating_sub(DISK);
        let smallest = sizes.iter().copied().filter(|&size| size >= needed).min();
        Ok(smallest.ok_or(AocError::AnswerNotFound)?.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example() {aoc_common::assert_example!(Day7)}

    #[test]
    fn relisting_does_not_double_count() {
        let sizes = Day7.parse("$ cd /\n$ ls\n10 a\n$ ls\n10 a").unwrap();
        assert_eq!(sizes, vec![10]);
    }
}

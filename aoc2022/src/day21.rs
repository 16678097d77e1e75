use aoc_common::{AocError, Answer, Day};
use rustc_hash::FxHashMap;

const ROOT: &str = "root";
const HUMAN: &str = "humn";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Job {
    Number(i64),
    Op(usize, u8, usize),
}

pub struct Troop {
    jobs: Vec<Job>,
    root: usize,
    human: usize,
}

impl Troop {
    fn eval(&self, id: usize) -> anyhow::Result<i64> {
        Ok(match self.jobs[id] {
            Job::Number(n) => n,
            Job::Op(l, op, r) => {
                let (l, r) = (self.eval(l)?, self.eval(r)?);
                match op {
                    b'+' => l + r,
                    b'-' => l - r,
                    b'*' => l * r,
                    _ => l.checked_div(r).ok_or(AocError::AnswerNotFound)?,
                }
            }
        })
    }

    fn depends_on_human(&self, id: usize) -> bool {
        id == self.human || match self.jobs[id] {
            Job::Number(_) => false,
            Job::Op(l, _, r) => self.depends_on_human(l) || self.depends_on_human(r),
        }
    }

    /// Works back from the value `id` must yell to the number the human has to.
    fn solve_for_human(&self, id: usize, target: i64) -> anyhow::Result<i64> {
        if id == self.human {return Ok(target)}
        let Job::Op(l, op, r) = self.jobs[id] else {return Err(AocError::AnswerNotFound.into())};
        if self.depends_on_human(l) {
            let r = self.eval(r)?;
            let target = match op {
                b'+' => target - r,
                b'-' => target + r,
                b'*' => target.checked_div(r).ok_or(AocError::AnswerNotFound)?,
                _ => target * r,
            };
            self.solve_for_human(l, target)
        } else {
            let l = self.eval(l)?;
            let target = match op {
                b'+' => target - l,
                b'-' => l - target,
                b'*' => target.checked_div(l).ok_or(AocError::AnswerNotFound)?,
                _ => l.checked_div(target).ok_or(AocError::AnswerNotFound)?,
            };
            self.solve_for_human(r, target)
        }
    }
}

#[derive(Default)]
pub struct Day21;

impl Day for Day21 {
    const YEAR: u16 = 2022;
    const DAY: u8 = 21;
    const EXAMPLE: &'static str = "\
root: pppw + sjmn
dbpl: 5
cczh: sllz + lgvd
zczc: 2
ptdq: humn - dvpt
dvpt: 3
lfqf: 4
humn: 5
ljgn: 2
sjmn: drzm * dbpl
sllz: 4
pppw: cczh / lfqf
lgvd: ljgn * ptdq
drzm: hmdt - zczc
hmdt: 32";
    const EXAMPLE_ANSWERS: [Option<&'static str>; 2] = [Some("152"), Some("301")];

    type Data = Troop;

    fn parse(&self, input: &str) -> anyhow::Result<Troop> {
        let lines = input.lines().filter(|l| !l.trim().is_empty())
            .map(|line| line.trim().split_once(": ").ok_or_else(|| AocError::parse(line, "expected `name: job`")))
            .collect::<Result<Vec<_>, _>>()?;
        let ids: FxHashMap<&str, usize> = lines.iter().enumerate().map(|(i, &(name, _))| (name, i)).collect();
        let id = |name: &str| ids.get(name).copied().ok_or_else(|| AocError::parse(name, "no such monkey"));
        let jobs = lines.iter().map(|&(name, job)| -> anyhow::Result<Job> {
            match job.split(' ').collect::<Vec<_>>()[..] {
                [n] => Ok(Job::Number(n.parse()?)),
                [l, op @ ("+" | "-" | "*" | "/"), r] => Ok(Job::Op(id(l)?, op.as_bytes()[0], id(r)?)),
                _ => Err(AocError::parse(format!("{name}: {job}"), "unknown job").into()),
            }
        }).collect::<anyhow::Result<Vec<_>>>()?;
        Ok(Troop {jobs, root: id(ROOT)?, human: id(HUMAN)?})
    }

    fn part1(&self, troop: &Troop) -> anyhow::Result<Answer> {Ok(troop.eval(troop.root)?.into())}

    /// The root monkey only checks that both halves match.
    fn part2(&self, troop: &Troop) -> anyhow::Result<Answer> {
        let Job::Op(l, _, r) = troop.jobs[troop.root] else {return Err(AocError::AnswerNotFound.into())};
        let (unknown, known) = if troop.depends_on_human(l) {(l, r)} else {(r, l)};
        Ok(troop.solve_for_human(unknown, troop.eval(known)?)?.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example() {aoc_common::assert_example!(Day21)}

    #[test]
    fn inverts_ops_with_human_on_the_right() {
        let troop = Day21.parse("root: aaaa + bbbb\naaaa: tenn - humn\ntenn: 10\nbbbb: 3\nhumn: 1").unwrap();
        assert_eq!(Day21.part2(&troop).unwrap().as_str(), "7");
        let troop = Day21.parse("root: aaaa + bbbb\naaaa: twen / humn\ntwen: 20\nbbbb: 4\nhumn: 1").unwrap();
        assert_eq!(Day21.part2(&troop).unwrap().as_str(), "5");
    }

    #[test]
    fn inverts_division_with_human_on_the_left() {
        let troop = Day21.parse("root: aaaa + bbbb\naaaa: humn / twoo\ntwoo: 2\nbbbb: 4\nhumn: 1").unwrap();
        assert_eq!(Day21.part2(&troop).unwrap().as_str(), "8");
    }
}

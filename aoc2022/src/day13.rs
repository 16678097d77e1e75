use std::cmp::Ordering;
use std::str::FromStr;

use aoc_common::{AocError, Answer, Day};
use itertools::Itertools;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Packet {
    Int(u32),
    List(Vec<Packet>),
}

impl Ord for Packet {
    fn cmp(&self, other: &Packet) -> Ordering {
        match (self, other) {
            (Packet::Int(a), Packet::Int(b)) => a.cmp(b),
            (Packet::List(a), Packet::List(b)) => a.cmp(b),
            (Packet::Int(a), Packet::List(b)) => [Packet::Int(*a)][..].cmp(b),
            (Packet::List(a), Packet::Int(b)) => a[..].cmp(&[Packet::Int(*b)]),
        }
    }
}

impl PartialOrd for Packet {
    fn partial_cmp(&self, other: &Packet) -> Option<Ordering> {Some(self.cmp(other))}
}

fn parse_packet(bytes: &[u8], pos: &mut usize) -> Option<Packet> {
    match *bytes.get(*pos)? {
        b'[' => {
            *pos += 1;
            let mut items = vec![];
            if bytes.get(*pos) == Some(&b']') {
                *pos += 1;
                return Some(Packet::List(items));
            }
            loop {
                items.push(parse_packet(bytes, pos)?);
                match bytes.get(*pos)? {
                    b',' => *pos += 1,
                    b']' => {*pos += 1; return Some(Packet::List(items))}
                    _ => return None,
                }
            }
        }
        b'0' ..= b'9' => {
            let len = bytes[*pos ..].iter().take_while(|b| b.is_ascii_digit()).count();
            let n = std::str::from_utf8(&bytes[*pos .. *pos + len]).ok()?.parse().ok()?;
            *pos += len;
            Some(Packet::Int(n))
        }
        _ => None,
    }
}

impl FromStr for Packet {
    type Err = AocError;

    fn from_str(line: &str) -> Result<Packet, AocError> {
        let bytes = line.trim().as_bytes();
        let mut pos = 0;
        match parse_packet(bytes, &mut pos) {
            Some(packet) if pos == bytes.len() => Ok(packet),
            _ => Err(AocError::parse(line, format!("malformed packet near byte {pos}"))),
        }
    }
}

fn divider(n: u32) -> Packet {Packet::List(vec![Packet::List(vec![Packet::Int(n)])])}

#[derive(Default)]
pub struct Day13;

impl Day for Day13 {
    const YEAR: u16 = 2022;
    const DAY: u8 = 13;
    const EXAMPLE: &'static str = "\
[1,1,3,1,1]
[1,1,5,1,1]

[[1],[2,3,4]]
[[1],4]

[9]
[[8,7,6]]

[[4,4],4,4]
[[4,4],4,4,4]

[7,7,7,7]
[7,7,7]

[]
[3]

[[[]]]
[[]]

[1,[2,[3,[4,[5,6,7]]]],8,9]
[1,[2,[3,[4,[5,6,0]]]],8,9]";
    const EXAMPLE_ANSWERS: [Option<&'static str>; 2] = [Some("13"), Some("140")];

    type Data = Vec<Packet>;

    fn parse(&self, input: &str) -> anyhow::Result<Vec<Packet>> {
        let packets = input.lines().filter(|l| !l.trim().is_empty()).map(str::parse).collect::<Result<Vec<Packet>, _>>()?;
        if packets.len() % 2 != 0 {return Err(AocError::parse(input, "packets come in pairs").into())}
        Ok(packets)
    }

    fn part1(&self, packets: &Vec<Packet>) -> anyhow::Result<Answer> {
        let ordered = packets.iter().tuples().positions(|(left, right)| left < right).map(|i| i + 1).sum::<usize>();
        Ok(ordered.into())
    }

    /// Only the dividers' positions matter, so count what sorts before each.
    fn part2(&self, packets: &Vec<Packet>) -> anyhow::Result<Answer> {
        let (two, six) = (divider(2), divider(6));
        let before_two = packets.iter().filter(|&p| *p < two).count() + 1;
        let before_six = packets.iter().filter(|&p| *p < six).count() + 2;
        Ok((before_two * before_six).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example() {aoc_common::assert_example!(Day13)}

    #[test]
    fn mixed_comparison() {
        let p = |s: &str| s.parse::<Packet>().unwrap();
        assert!(p("[[1],[2,3,4]]") < p("[[1],4]"));
        assert!(p("[9]") > p("[[8,7,6]]"));
        assert_eq!(p("[[10]]"), Packet::List(vec![Packet::List(vec![Packet::Int(10)])]));
        assert!("[1,2".parse::<Packet>().is_err());
        assert!("[1]]".parse::<Packet>().is_err());
    }
}

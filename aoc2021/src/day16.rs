use aoc_common::{AocError, Answer, Day};
use bitvec::prelude::*;
use tracing::debug;

const LITERAL: u8 = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Packet {
    Literal { version: u8, value: u64 },
    Operator { version: u8, kind: u8, children: Vec<Packet> },
}

impl Packet {
    fn version_sum(&self) -> u64 {
        match self {
            Packet::Literal {version, ..} => *version as u64,
            Packet::Operator {version, children, ..} => {
                *version as u64 + children.iter().map(Packet::version_sum).sum::<u64>()
            }
        }
    }

    fn eval(&self) -> anyhow::Result<u64> {
        let (kind, children) = match self {
            Packet::Literal {value, ..} => return Ok(*value),
            Packet::Operator {kind, children, ..} => (*kind, children),
        };
        let values = children.iter().map(Packet::eval).collect::<anyhow::Result<Vec<_>>>()?;
        let compare = |f: fn(&u64, &u64) -> bool| match values[..] {
            [a, b] => Ok(f(&a, &b) as u64),
            _ => Err(AocError::parse(format!("{self:?}"), "comparison needs exactly two operands")),
        };
        Ok(match kind {
            0 => values.iter().sum(),
            1 => values.iter().product(),
            2 => values.iter().copied().min().ok_or(AocError::AnswerNotFound)?,
            3 => values.iter().copied().max().ok_or(AocError::AnswerNotFound)?,
            5 => compare(u64::gt)?,
            6 => compare(u64::lt)?,
            7 => compare(u64::eq)?,
            _ => return Err(AocError::parse(format!("{self:?}"), format!("unknown operator {kind}")).into()),
        })
    }
}

/// Reads packets off a transmission, most significant bit first.
struct Decoder<'a> {
    bits: &'a BitSlice<u8, Msb0>,
    pos: usize,
}

impl Decoder<'_> {
    fn take(&mut self, n: usize) -> anyhow::Result<u64> {
        let field = self.bits.get(self.pos .. self.pos + n)
            .ok_or_else(|| AocError::parse(format!("bit {}", self.pos), "transmission ends mid-packet"))?;
        self.pos += n;
        Ok(if n == 0 {0} else {field.load_be::<u64>()})
    }

    fn packet(&mut self) -> anyhow::Result<Packet> {
        let version = self.take(3)? as u8;
        let kind = self.take(3)? as u8;
        if kind == LITERAL {
            let mut value = 0;
            loop {
                let group = self.take(5)?;
                value = value << 4 | group & 0xf;
                if group & 0x10 == 0 {break}
            }
            return Ok(Packet::Literal {version, value});
        }
        let mut children = vec![];
        if self.take(1)? == 0 {
            let len = self.take(15)? as usize;
            let end = self.pos + len;
            while self.pos < end {children.push(self.packet()?)}
        } else {
            let count = self.take(11)?;
            for _ in 0 .. count {children.push(self.packet()?)}
        }
        Ok(Packet::Operator {version, kind, children})
    }
}

fn decode(hex: &str) -> anyhow::Result<Packet> {
    let hex = hex.trim();
    let digits = hex.chars().map(|c| c.to_digit(16).map(|d| d as u8))
        .collect::<Option<Vec<_>>>()
        .ok_or_else(|| AocError::parse(hex, "not hexadecimal"))?;
    let bytes: Vec<u8> = digits.chunks(2).map(|pair| pair[0] << 4 | pair.get(1).copied().unwrap_or(0)).collect();
    let bits = BitVec::<u8, Msb0>::from_vec(bytes);
    let mut decoder = Decoder {bits: &bits, pos: 0};
    let packet = decoder.packet()?;
    debug!("decoded {} of {} bits", decoder.pos, bits.len());
    Ok(packet)
}

#[derive(Default)]
pub struct Day16;

impl Day for Day16 {
    const YEAR: u16 = 2021;
    const DAY: u8 = 16;
    const EXAMPLE: &'static str = "A0016C880162017C3686B18A3D4780";
    const EXAMPLE_ANSWERS: [Option<&'static str>; 2] = [Some("31"), Some("54")];

    type Data = Packet;

    fn parse(&self, input: &str) -> anyhow::Result<Packet> {decode(input)}

    fn part1(&self, packet: &Packet) -> anyhow::Result<Answer> {Ok(packet.version_sum().into())}

    fn part2(&self, packet: &Packet) -> anyhow::Result<Answer> {Ok(packet.eval()?.into())}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example() {aoc_common::assert_example!(Day16)}

    #[test]
    fn literal() {
        assert_eq!(decode("D2FE28").unwrap(), Packet::Literal {version: 6, value: 2021});
    }

    #[test]
    fn operators() {
        for (hex, value) in [
            ("C200B40A82", 3), ("04005AC33890", 54), ("880086C3E88112", 7), ("CE00C43D881120", 9),
            ("D8005AC2A8F0", 1), ("F600BC2D8F", 0), ("9C005AC2F8F0", 0), ("9C0141080250320F1802104A08", 1),
        ] {
            assert_eq!(decode(hex).unwrap().eval().unwrap(), value, "{hex}");
        }
    }

    #[test]
    fn version_sums() {
        assert_eq!(decode("8A004A801A8002F478").unwrap().version_sum(), 16);
        assert_eq!(decode("620080001611562C8802118E34").unwrap().version_sum(), 12);
        assert_eq!(decode("C0015000016115A2E0802F182340").unwrap().version_sum(), 23);
    }
}

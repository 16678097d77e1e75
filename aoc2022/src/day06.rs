use aoc_common::{AocError, Answer, Day};

/// Characters read once the last `len` have all been different.
fn marker(signal: &[u8], len: usize) -> Option<usize> {
    signal.windows(len)
        .position(|w| w.iter().fold(0u32, |seen, &b| seen | 1 << (b - b'a')).count_ones() as usize == len)
        .map(|start| start + len)
}

#[derive(Default)]
pub struct Day6;

impl Day for Day6 {
    const YEAR: u16 = 2022;
    const DAY: u8 = 6;
    const EXAMPLE: &'static str = "mjqjpqmgbljsphdztnvjfqwrcgsmlb";
    const EXAMPLE_ANSWERS: [Option<&'static str>; 2] = [Some("7"), Some("19")];

    type Data = Vec<u8>;

    fn parse(&self, input: &str) -> anyhow::Result<Vec<u8>> {
        let signal = input.trim();
        if !signal.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(AocError::parse(signal, "signal must be lowercase letters").into());
        }
        Ok(signal.as_bytes().to_vec())
    }

    fn part1(&self, signal: &Vec<u8>) -> anyhow::Result<Answer> {
        Ok(marker(signal, 4).ok_or(AocError::AnswerNotFound)?.into())
    }

    fn part2(&self, signal: &Vec<u8>) -> anyhow::Result<Answer> {
        Ok(marker(signal, 14).ok_or(AocError::AnswerNotFound)?.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example() {aoc_common::assert_example!(Day6)}

    #[test]
    fn other_signals() {
        assert_eq!(marker(b"bvwbjplbgvbhsrlpgdmjqwftvncz", 4), Some(5));
        assert_eq!(marker(b"nznrnfrfntjfmvfwmzdfjlvtqnbhcprsgwb", 14), Some(29));
        assert_eq!(marker(b"aaaa", 4), None);
    }
}

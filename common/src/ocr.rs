//! Reads the blocky capital letters some puzzles draw as their answer.

use itertools::Itertools;

const HEIGHT: usize = 6;
const WIDTH: usize = 4;

const FONT: [(char, [&str; HEIGHT]); 16] = [
    ('A', [".##.", "#..#", "#..#", "####", "#..#", "#..#"]),
    ('B', ["###.", "#..#", "###.", "#..#", "#..#", "###."]),
    ('C', [".##.", "#..#", "#...", "#...", "#..#", ".##."]),
    ('E', ["####", "#...", "###.", "#...", "#...", "####"]),
    ('F', ["####", "#...", "###.", "#...", "#...", "#..."]),
    ('G', [".##.", "#..#", "#...", "#.##", "#..#", ".###"]),
    ('H', ["#..#", "#..#", "####", "#..#", "#..#", "#..#"]),
    ('J', ["..##", "...#", "...#", "...#", "#..#", ".##."]),
    ('K', ["#..#", "#.#.", "##..", "#.#.", "#.#.", "#..#"]),
    ('L', ["#...", "#...", "#...", "#...", "#...", "####"]),
    ('O', [".##.", "#..#", "#..#", "#..#", "#..#", ".##."]),
    ('P', ["###.", "#..#", "#..#", "###.", "#...", "#..."]),
    ('R', ["###.", "#..#", "#..#", "###.", "#.#.", "#..#"]),
    ('S', [".###", "#...", "#...", ".##.", "...#", "###."]),
    ('U', ["#..#", "#..#", "#..#", "#..#", "#..#", ".##."]),
    ('Z', ["####", "...#", "..#.", ".#..", "#...", "####"]),
];

/// Draws lit pixels as `#` and dark ones as `.`, one line per row.
pub fn render(pixels: &[Vec<bool>]) -> String {
    pixels.iter()
        .map(|row| row.iter().map(|&lit| if lit {'#'} else {'.'}).collect::<String>())
        .join("\n")
}

fn glyph(pixels: &[Vec<bool>], left: usize) -> Option<char> {
    FONT.iter().find(|(_, rows)| {
        rows.iter().zip(pixels).all(|(font_row, row)| {
            font_row.bytes().enumerate().all(|(dx, b)| {
                row.get(left + dx).copied().unwrap_or(false) == (b == b'#')
            })
        })
    }).map(|&(c, _)| c)
}

/// Reads the letters off a 6-pixel-high picture; falls back to the
/// rendered picture (on its own lines) when any glyph is unknown.
pub fn read(pixels: &[Vec<bool>]) -> String {
    let fallback = || format!("\n{}", render(pixels));
    if pixels.len() != HEIGHT {return fallback()}
    let width = pixels.iter().map(Vec::len).max().unwrap_or(0);
    let blank = |x: usize| pixels.iter().all(|row| !row.get(x).copied().unwrap_or(false));

    let mut letters = String::new();
    let mut x = 0;
    while x < width {
        if blank(x) {
            x += 1;
            continue;
        }
        match glyph(pixels, x) {
            Some(c) => letters.push(c),
            None => return fallback(),
        }
        x += WIDTH;
    }
    if letters.is_empty() {fallback()} else {letters}
}

#[cfg(test)]
mod tests {
    use super::*;

    fn picture(word: &str) -> Vec<Vec<bool>> {
        (0 .. HEIGHT).map(|y| {
            word.chars().flat_map(|c| {
                let (_, rows) = FONT.iter().find(|(f, _)| *f == c).unwrap();
                rows[y].bytes().map(|b| b == b'#').chain([false])
            }).collect()
        }).collect()
    }

    #[test]
    fn reads_words() {
        assert_eq!(read(&picture("HELLO")), "HELLO");
        assert_eq!(read(&picture("ZJBK")), "ZJBK");
    }

    #[test]
    fn unknown_shapes_are_rendered() {
        let square = vec![
            vec![true, true, true],
            vec![true, false, true],
            vec![true, true, true],
        ];
        assert_eq!(read(&square), "\n###\n#.#\n###");
    }
}

//! The monkeys' map is a cube net. Part one wraps around the flat map; part two
//! folds the net into a cube and walks across its real edges.
//!
//! Folding works without knowing the net's shape in advance. Every face of a
//! cube is given a fixed set of edge labels (`CUBE_FACES`), listed clockwise.
//! The first face found in the map takes its labels as they are, right side
//! first. A breadth-first search then spreads over the tiles of the net: a face
//! reached by leaving through edge `e` in direction `d` must show `e` on its
//! side facing back the way we came, which fixes the rotation of all its other
//! labels. Once every face is placed, each side whose neighbour in the net is
//! blank is glued to the other face carrying the same label. Two faces run
//! along a shared edge in opposite directions, so positions pair up reversed.

use std::collections::VecDeque;

use aoc_common::grid::{Facing, Point};
use aoc_common::{AocError, Answer, Day};
use regex::Regex;
use rustc_hash::FxHashMap;
use tracing::{debug, trace};

const OPEN: u8 = b'.';
const WALL: u8 = b'#';
const VOID: u8 = b' ';

/// Edge labels of each face, clockwise, with the face on the other side.
const CUBE_FACES: [[(u8, usize); 4]; 6] = [
    [(b'a', 1), (b'b', 2), (b'c', 4), (b'd', 3)],
    [(b'e', 3), (b'f', 5), (b'g', 2), (b'a', 0)],
    [(b'g', 1), (b'h', 5), (b'j', 4), (b'b', 0)],
    [(b'm', 4), (b'n', 5), (b'e', 1), (b'd', 0)],
    [(b'j', 2), (b'k', 5), (b'm', 3), (b'c', 0)],
    [(b'k', 4), (b'h', 2), (b'f', 1), (b'n', 3)],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {Walk(u32), Left, Right}

pub struct Notes {
    rows: Vec<Vec<u8>>,
    path: Vec<Step>,
}

/// A face placed on the map: its tile in face-sized units, and which edge
/// label sits on each side, indexed by `Facing`.
#[derive(Debug, Clone, Copy)]
struct Face {
    tile: Point,
    sides: [u8; 4],
}

impl Face {
    fn side_of(&self, edge: u8) -> Option<Facing> {
        self.sides.iter().position(|&e| e == edge).map(Facing::from_index)
    }
}

fn across(face: usize, edge: u8) -> Option<usize> {
    CUBE_FACES[face].iter().find(|&&(e, _)| e == edge).map(|&(_, other)| other)
}

/// The squares along one side of a face, in clockwise order.
fn edge_squares(tile: Point, side: Facing, n: i64) -> impl Iterator<Item = Point> {
    let (corner, step) = match side {
        Facing::Right => (Point::new(n - 1, 0), Point::new(0, 1)),
        Facing::Down => (Point::new(n - 1, n - 1), Point::new(-1, 0)),
        Facing::Left => (Point::new(0, n - 1), Point::new(0, -1)),
        Facing::Up => (Point::new(0, 0), Point::new(1, 0)),
    };
    let origin = tile * n + corner;
    (0 .. n).map(move |i| origin + step * i)
}

type Seams = FxHashMap<(Point, Facing), (Point, Facing)>;

impl Notes {
    fn tile(&self, p: Point) -> u8 {p.index(&self.rows).copied().unwrap_or(VOID)}

    fn start(&self) -> Option<Point> {
        let x = self.rows.first()?.iter().position(|&c| c == OPEN)?;
        Some(Point::new(x as i64, 0))
    }

    /// Follows the path, stepping with `step` and stopping at walls; returns the password.
    fn walk(&self, step: impl Fn(Point, Facing) -> (Point, Facing)) -> anyhow::Result<i64> {
        let mut pos = self.start().ok_or(AocError::AnswerNotFound)?;
        let mut facing = Facing::Right;
        for &s in &self.path {
            match s {
                Step::Left => facing = facing.turn_left(),
                Step::Right => facing = facing.turn_right(),
                Step::Walk(n) => for _ in 0 .. n {
                    let (next, turned) = step(pos, facing);
                    match self.tile(next) {
                        OPEN => (pos, facing) = (next, turned),
                        WALL => break,
                        _ => return Err(AocError::parse(format!("{next:?}"), "walked off the map").into()),
                    }
                },
            }
        }
        Ok(1000 * (pos.y + 1) + 4 * (pos.x + 1) + facing.value() as i64)
    }

    /// Leaving the map comes back in from the far end of the same row or column.
    fn step_flat(&self, pos: Point, facing: Facing) -> (Point, Facing) {
        let next = pos + facing;
        if self.tile(next) != VOID {return (next, facing)}
        let mut back = pos;
        while self.tile(back - facing.delta()) != VOID {back = back - facing.delta()}
        (back, facing)
    }

    fn face_size(&self) -> anyhow::Result<i64> {
        let squares = self.rows.iter().flatten().filter(|&&c| c != VOID).count() as i64;
        let n = (1 ..).take_while(|k| k * k * 6 <= squares).last().unwrap_or(0);
        if n == 0 || n * n * 6 != squares {
            return Err(AocError::parse(format!("{squares} squares"), "map does not fold into a cube").into());
        }
        Ok(n)
    }

    /// Places all six faces on the net by walking across the edges the net already joins.
    fn place_faces(&self, n: i64) -> anyhow::Result<([Face; 6], Vec<(usize, Facing)>)> {
        let is_face = |t: Point| t.x >= 0 && t.y >= 0 && self.tile(t * n) != VOID;
        let height = self.rows.len() as i64 / n;
        let width = self.rows.iter().map(Vec::len).max().unwrap_or(0) as i64 / n;
        let first = (0 .. height).flat_map(|y| (0 .. width).map(move |x| Point::new(x, y)))
            .find(|&t| is_face(t))
            .ok_or(AocError::AnswerNotFound)?;

        let mut faces: [Option<Face>; 6] = [None; 6];
        faces[0] = Some(Face {tile: first, sides: CUBE_FACES[0].map(|(e, _)| e)});
        let mut loose = vec![];
        let mut queue = VecDeque::from([0]);
        while let Some(f) = queue.pop_front() {
            let Some(face) = faces[f] else {continue};
            for dir in Facing::ALL {
                let edge = face.sides[dir.value()];
                let tile = face.tile + dir;
                if !is_face(tile) {
                    loose.push((f, dir));
                    continue;
                }
                let other = across(f, edge).ok_or(AocError::AnswerNotFound)?;
                if faces[other].is_some() {continue}
                let mut sides = CUBE_FACES[other].map(|(e, _)| e);
                let at = sides.iter().position(|&e| e == edge).ok_or(AocError::AnswerNotFound)?;
                sides.rotate_left((at + 4 - dir.reverse().value()) % 4);
                debug!("face {other} sits at tile {tile:?} with sides {:?}", sides.map(char::from));
                faces[other] = Some(Face {tile, sides});
                queue.push_back(other);
            }
        }
        let faces = faces.iter().copied().collect::<Option<Vec<_>>>()
            .and_then(|faces| <[Face; 6]>::try_from(faces).ok())
            .ok_or_else(|| AocError::parse(format!("{n}-square faces"), "net does not cover all six faces"))?;
        Ok((faces, loose))
    }

    /// Where each step off a loose side of the net lands once folded.
    fn fold(&self) -> anyhow::Result<Seams> {
        let n = self.face_size()?;
        let (faces, loose) = self.place_faces(n)?;
        let mut seams = Seams::default();
        for (f, leave) in loose {
            let edge = faces[f].sides[leave.value()];
            let other = faces[across(f, edge).ok_or(AocError::AnswerNotFound)?];
            let enter = other.side_of(edge).ok_or(AocError::AnswerNotFound)?;
            let landing: Vec<Point> = edge_squares(other.tile, enter, n).collect();
            for (from, to) in edge_squares(faces[f].tile, leave, n).zip(landing.into_iter().rev()) {
                trace!("{from:?} {leave:?} -> {to:?} {:?}", enter.reverse());
                seams.insert((from, leave), (to, enter.reverse()));
            }
        }
        Ok(seams)
    }
}

#[derive(Default)]
pub struct Day22;

impl Day for Day22 {
    const YEAR: u16 = 2022;
    const DAY: u8 = 22;
    const EXAMPLE: &'static str = concat!(
        "        ...#\n",
        "        .#..\n",
        "        #...\n",
        "        ....\n",
        "...#.......#\n",
        "........#...\n",
        "..#....#....\n",
        "..........#.\n",
        "        ...#....\n",
        "        .....#..\n",
        "        .#......\n",
        "        ......#.\n",
        "\n",
        "10R5L5R10L4R5L5",
    );
    const EXAMPLE_ANSWERS: [Option<&'static str>; 2] = [Some("6032"), Some("5031")];

    type Data = Notes;

    fn parse(&self, input: &str) -> anyhow::Result<Notes> {
        let (map, path) = input.trim_end().split_once("\n\n")
            .ok_or_else(|| AocError::parse(input, "no blank line before the path"))?;
        let rows: Vec<Vec<u8>> = map.lines().map(|line| line.trim_end().as_bytes().to_vec()).collect();
        if let Some(bad) = rows.iter().flatten().find(|&&c| ![OPEN, WALL, VOID].contains(&c)) {
            return Err(AocError::parse(map, format!("unexpected map square {:?}", *bad as char)).into());
        }
        let re = Regex::new(r"\d+|[LR]")?;
        let path = path.trim();
        let steps = re.find_iter(path).map(|m| -> anyhow::Result<Step> {
            Ok(match m.as_str() {
                "L" => Step::Left,
                "R" => Step::Right,
                n => Step::Walk(n.parse()?),
            })
        }).collect::<anyhow::Result<Vec<_>>>()?;
        let covered: usize = re.find_iter(path).map(|m| m.len()).sum();
        if covered != path.len() {return Err(AocError::parse(path, "path holds more than numbers and turns").into())}
        Ok(Notes {rows, path: steps})
    }

    fn part1(&self, notes: &Notes) -> anyhow::Result<Answer> {
        Ok(notes.walk(|pos, facing| notes.step_flat(pos, facing))?.into())
    }

    fn part2(&self, notes: &Notes) -> anyhow::Result<Answer> {
        let seams = notes.fold()?;
        let password = notes.walk(|pos, facing| match seams.get(&(pos, facing)) {
            Some(&landing) => landing,
            None => (pos + facing, facing),
        })?;
        Ok(password.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example() {aoc_common::assert_example!(Day22)}

    #[test]
    fn places_example_faces() {
        let notes = Day22.parse(Day22::EXAMPLE).unwrap();
        let (faces, loose) = notes.place_faces(4).unwrap();
        let tiles = faces.map(|f| (f.tile.x, f.tile.y));
        assert_eq!(tiles, [(2, 0), (3, 2), (2, 1), (0, 1), (1, 1), (2, 2)]);
        // a net of six faces joins five edges, leaving fourteen sides loose
        assert_eq!(loose.len(), 14);
    }

    #[test]
    fn seam_turns_walker() {
        let notes = Day22.parse(Day22::EXAMPLE).unwrap();
        let seams = notes.fold().unwrap();
        assert_eq!(seams.len(), 14 * 4);
        // off the right of the middle band, onto the top of the lower right face heading down
        assert_eq!(seams[&(Point::new(11, 5), Facing::Right)], (Point::new(14, 8), Facing::Down));
        // and straight back again
        assert_eq!(seams[&(Point::new(14, 8), Facing::Up)], (Point::new(11, 5), Facing::Left));
    }

    #[test]
    fn flat_wrap() {
        let notes = Day22.parse(Day22::EXAMPLE).unwrap();
        assert_eq!(notes.step_flat(Point::new(11, 6), Facing::Right), (Point::new(0, 6), Facing::Right));
        assert_eq!(notes.step_flat(Point::new(5, 4), Facing::Up), (Point::new(5, 7), Facing::Up));
    }

    #[test]
    fn rejects_non_cube() {
        let notes = Day22.parse("....\n....\n\n3").unwrap();
        assert!(notes.fold().is_err());
    }
}

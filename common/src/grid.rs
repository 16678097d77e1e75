use std::ops::{Add, AddAssign, Mul, Sub};

/// A grid position; `y` grows downwards like the puzzle drawings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub const fn new(x: i64, y: i64) -> Self {Point {x, y}}

    pub fn manhattan(self, other: Point) -> i64 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    pub fn neighbors4(self) -> impl Iterator<Item = Point> {
        Facing::ALL.into_iter().map(move |f| self + f.delta())
    }

    pub fn neighbors8(self) -> impl Iterator<Item = Point> {
        (-1 ..= 1).flat_map(move |dy| (-1 ..= 1).map(move |dx| Point::new(self.x + dx, self.y + dy)))
            .filter(move |&p| p != self)
    }

    /// The cell this point addresses in a rectangular grid, if it lies inside.
    pub fn index<T>(self, grid: &[Vec<T>]) -> Option<&T> {
        if self.x < 0 || self.y < 0 {return None}
        grid.get(self.y as usize)?.get(self.x as usize)
    }
}

impl Add for Point {
    type Output = Point;
    fn add(self, o: Point) -> Point {Point::new(self.x + o.x, self.y + o.y)}
}

impl AddAssign for Point {
    fn add_assign(&mut self, o: Point) {*self = *self + o}
}

impl Sub for Point {
    type Output = Point;
    fn sub(self, o: Point) -> Point {Point::new(self.x - o.x, self.y - o.y)}
}

impl Mul<i64> for Point {
    type Output = Point;
    fn mul(self, k: i64) -> Point {Point::new(self.x * k, self.y * k)}
}

/// Screen directions, numbered clockwise from right the way the puzzles score them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Facing {Right = 0, Down = 1, Left = 2, Up = 3}

impl Facing {
    pub const ALL: [Facing; 4] = [Facing::Right, Facing::Down, Facing::Left, Facing::Up];

    pub fn from_index(i: usize) -> Facing {Facing::ALL[i % 4]}

    pub fn value(self) -> usize {self as usize}

    pub fn delta(self) -> Point {
        match self {
            Facing::Right => Point::new(1, 0),
            Facing::Down => Point::new(0, 1),
            Facing::Left => Point::new(-1, 0),
            Facing::Up => Point::new(0, -1),
        }
    }

    pub fn turn_right(self) -> Facing {Facing::from_index(self.value() + 1)}
    pub fn turn_left(self) -> Facing {Facing::from_index(self.value() + 3)}
    pub fn reverse(self) -> Facing {Facing::from_index(self.value() + 2)}

    /// Parses both the `^>v<` and the `UDLR` spellings.
    pub fn from_byte(b: u8) -> Option<Facing> {
        match b {
            b'>' | b'R' => Some(Facing::Right),
            b'v' | b'D' => Some(Facing::Down),
            b'<' | b'L' => Some(Facing::Left),
            b'^' | b'U' => Some(Facing::Up),
            _ => None,
        }
    }
}

impl Add<Facing> for Point {
    type Output = Point;
    fn add(self, f: Facing) -> Point {self + f.delta()}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turning() {
        assert_eq!(Facing::Up.turn_right(), Facing::Right);
        assert_eq!(Facing::Right.turn_left(), Facing::Up);
        assert_eq!(Facing::Left.reverse(), Facing::Right);
        assert_eq!(Point::new(3, 4) + Facing::Up, Point::new(3, 3));
        assert_eq!(Facing::from_byte(b'v'), Facing::from_byte(b'D'));
        assert_eq!(Facing::from_byte(b'N'), None);
    }

    #[test]
    fn neighbourhoods() {
        let p = Point::new(0, 0);
        assert_eq!(p.neighbors4().count(), 4);
        assert_eq!(p.neighbors8().count(), 8);
        assert!(p.neighbors8().all(|n| n != p));
        assert_eq!(Point::new(1, -2).manhattan(Point::new(-2, 2)), 7);
    }

    #[test]
    fn indexing() {
        let grid = vec![vec![1, 2], vec![3, 4]];
        assert_eq!(Point::new(1, 1).index(&grid), Some(&4));
        assert_eq!(Point::new(-1, 0).index(&grid), None);
        assert_eq!(Point::new(2, 0).index(&grid), None);
    }
}

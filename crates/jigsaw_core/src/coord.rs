use std::fmt::{self, Display, Formatter};
use std::ops::{Add, Sub};

/// A cell on the puzzle board, `0 <= col, row < N`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridCoord {
    pub col: u32,
    pub row: u32,
}

impl GridCoord {
    pub const fn new(col: u32, row: u32) -> Self {
        Self { col, row }
    }

    /// Row-major cell index on an `n`-wide board.
    pub const fn index(self, n: u32) -> usize {
        (self.row * n + self.col) as usize
    }

    pub const fn from_index(index: usize, n: u32) -> Self {
        let index = index as u32;
        Self {
            col: index % n,
            row: index / n,
        }
    }

    pub const fn is_within(self, n: u32) -> bool {
        self.col < n && self.row < n
    }
}

impl Display for GridCoord {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

/// A pixel position in window space, origin top-left, y growing downward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ScreenPos {
    pub x: i32,
    pub y: i32,
}

impl ScreenPos {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add for ScreenPos {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x.saturating_add(rhs.x), self.y.saturating_add(rhs.y))
    }
}

impl Sub for ScreenPos {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x.saturating_sub(rhs.x), self.y.saturating_sub(rhs.y))
    }
}

impl Display for ScreenPos {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.x, self.y)
    }
}

/// Axis-aligned screen rectangle. Contains its top-left edge, excludes the bottom-right one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenRect {
    pub origin: ScreenPos,
    pub width: u32,
    pub height: u32,
}

impl ScreenRect {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            origin: ScreenPos::new(x, y),
            width,
            height,
        }
    }

    pub const fn contains(&self, pos: ScreenPos) -> bool {
        pos.x >= self.origin.x
            && pos.y >= self.origin.y
            && pos.x < self.origin.x + self.width as i32
            && pos.y < self.origin.y + self.height as i32
    }

    pub const fn center(&self) -> ScreenPos {
        ScreenPos::new(
            self.origin.x + (self.width / 2) as i32,
            self.origin.y + (self.height / 2) as i32,
        )
    }

    pub const fn bottom(&self) -> i32 {
        self.origin.y + self.height as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_round_trips_row_major() {
        let coord = GridCoord::new(2, 1);
        assert_eq!(coord.index(4), 6, "row 1 starts at index 4");
        assert_eq!(GridCoord::from_index(6, 4), coord, "index 6 is (2, 1)");
        assert_eq!(GridCoord::from_index(15, 4), GridCoord::new(3, 3), "last cell");
    }

    #[test]
    fn rect_excludes_far_edges() {
        let rect = ScreenRect::new(10, 20, 5, 5);
        assert!(rect.contains(ScreenPos::new(10, 20)), "top-left is inside");
        assert!(rect.contains(ScreenPos::new(14, 24)), "last pixel is inside");
        assert!(!rect.contains(ScreenPos::new(15, 20)), "right edge is outside");
        assert!(!rect.contains(ScreenPos::new(10, 25)), "bottom edge is outside");
        assert!(!rect.contains(ScreenPos::new(9, 22)), "left of origin");
    }

    #[test]
    fn offsets_saturate_at_the_extremes() {
        let far = ScreenPos::new(i32::MIN, i32::MAX);
        assert_eq!(
            far - ScreenPos::new(1, -1),
            ScreenPos::new(i32::MIN, i32::MAX),
            "subtraction clamps"
        );
        assert_eq!(
            far + ScreenPos::new(-1, 1),
            ScreenPos::new(i32::MIN, i32::MAX),
            "addition clamps"
        );
    }
}

use std::{cmp::Ordering, ops::Add};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos2 {
    pub x: i32,
    pub y: i32,
}
impl Pos2 {
    /// Offsets of the 8 cells surrounding a position (the Moore neighborhood)
    pub const MOORE: [Pos2; 8] = [
        Pos2 { x: -1, y: -1 },
        Pos2 { x: 0, y: -1 },
        Pos2 { x: 1, y: -1 },
        Pos2 { x: -1, y: 0 },
        Pos2 { x: 1, y: 0 },
        Pos2 { x: -1, y: 1 },
        Pos2 { x: 0, y: 1 },
        Pos2 { x: 1, y: 1 },
    ];

    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
    #[inline]
    pub fn zero() -> Self {
        Self { x: 0, y: 0 }
    }

    /// Row-major index of this position in a `width` x `height` grid
    ///
    /// Returns [`None`] when the position lies outside the grid, so callers
    /// never have to wrap or clamp coordinates themselves.
    #[inline]
    pub fn to_index(self, width: usize, height: usize) -> Option<usize> {
        let x = usize::try_from(self.x).ok()?;
        let y = usize::try_from(self.y).ok()?;
        if x >= width || y >= height {
            return None;
        }
        Some(y * width + x)
    }

    /// The inverse of [`Pos2::to_index`]
    #[inline]
    pub fn from_index(index: usize, width: usize) -> Self {
        Self {
            x: (index % width) as i32,
            y: (index / width) as i32,
        }
    }

    /// Iterates the 8 surrounding positions, including ones outside any grid
    pub fn neighbors(self) -> impl Iterator<Item = Pos2> {
        Self::MOORE.into_iter().map(move |offset| self + offset)
    }
}
impl Default for Pos2 {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}
impl PartialOrd for Pos2 {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for Pos2 {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        // row-major: y first, then x
        Ord::cmp(&self.y, &other.y).then(Ord::cmp(&self.x, &other.x))
    }
}
impl Add for Pos2 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

use crate::Pos2;

/// A read-only view of a grid's current generation, in row-major order
#[derive(Debug, Clone, Copy)]
pub struct GridView<'a> {
    width: usize,
    height: usize,
    cells: &'a [bool],
}
impl<'a> GridView<'a> {
    pub(super) fn new(width: usize, height: usize, cells: &'a [bool]) -> Self {
        debug_assert_eq!(cells.len(), width * height, "view does not cover the grid");
        Self {
            width,
            height,
            cells,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Every cell of the generation, where cell (x, y) is at `y * width + x`
    #[inline]
    pub fn cells(&self) -> &'a [bool] {
        self.cells
    }

    /// The state of cell (x, y), or [`None`] if it is outside the grid
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<bool> {
        let index = Pos2::new(x, y).to_index(self.width, self.height)?;
        Some(self.cells[index])
    }

    pub fn rows(&self) -> impl Iterator<Item = &'a [bool]> {
        self.cells.chunks_exact(self.width)
    }

    pub fn alive(&self) -> impl Iterator<Item = Pos2> {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, alive)| **alive)
            .map(move |(i, _)| Pos2::from_index(i, width))
    }

    pub fn alive_count(&self) -> usize {
        self.cells.iter().filter(|alive| **alive).count()
    }
}

impl std::fmt::Display for GridView<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (y, row) in self.rows().enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for &alive in row {
                f.write_str(if alive { "█" } else { "." })?;
            }
        }
        Ok(())
    }
}

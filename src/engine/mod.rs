mod rule;
mod view;

pub use self::view::GridView;
use crate::Pos2;
use rand::Rng;

/// A bounded, non-wrapping Game of Life grid
///
/// Cell state lives in two same-sized buffers. One of them is the current
/// generation, the other is scratch space that [`Grid::advance`] writes the
/// next generation into before the two swap roles.
#[derive(Debug, Clone)]
pub struct Grid {
    width: usize,
    height: usize,
    buffers: [Vec<bool>; 2],
    current: usize,
    generation: u64,
}

impl Grid {
    /// Creates a grid with every cell dead
    ///
    /// ## Panics
    /// If either dimension is zero or does not fit in an [`i32`]
    pub fn new(width: usize, height: usize) -> Self {
        assert!(width > 0 && height > 0, "grid dimensions must be non-zero");
        assert!(
            i32::try_from(width).is_ok() && i32::try_from(height).is_ok(),
            "grid dimensions must fit in an i32"
        );

        let len = width * height;
        Self {
            width,
            height,
            buffers: [vec![false; len], vec![false; len]],
            current: 0,
            generation: 0,
        }
    }

    /// Creates a grid and performs `initial_live_count` random activation draws
    ///
    /// Each draw picks x and y independently and uniformly and sets that cell
    /// alive. The same cell may be drawn more than once, so the number of live
    /// cells can end up lower than `initial_live_count`.
    pub fn create<R: Rng>(
        width: usize,
        height: usize,
        initial_live_count: usize,
        rng: &mut R,
    ) -> Self {
        let mut grid = Self::new(width, height);
        let cells = &mut grid.buffers[grid.current];
        for _ in 0..initial_live_count {
            let x = rng.random_range(0..width);
            let y = rng.random_range(0..height);
            cells[y * width + x] = true;
        }
        grid
    }

    /// Creates a grid where exactly the given positions are alive
    ///
    /// Positions outside the grid are ignored.
    pub fn from_alive<I>(width: usize, height: usize, alive: I) -> Self
    where
        I: IntoIterator<Item = Pos2>,
    {
        let mut grid = Self::new(width, height);
        let cells = &mut grid.buffers[grid.current];
        for index in alive
            .into_iter()
            .filter_map(|pos| pos.to_index(width, height))
        {
            cells[index] = true;
        }
        grid
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of completed calls to [`Grid::advance`]
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Read-only view of the current generation
    #[inline]
    pub fn view(&self) -> GridView<'_> {
        GridView::new(self.width, self.height, &self.buffers[self.current])
    }

    #[inline]
    pub fn is_alive(&self, x: usize, y: usize) -> bool {
        assert!(x < self.width && y < self.height, "cell out of bounds");
        self.buffers[self.current][y * self.width + x]
    }

    pub fn alive_count(&self) -> usize {
        self.view().alive_count()
    }

    /// Counts the live cells among the up-to-8 in-bounds neighbors of (x, y)
    ///
    /// Positions past the grid border count as dead; nothing wraps around.
    pub fn neighbor_count(&self, x: usize, y: usize) -> u8 {
        assert!(x < self.width && y < self.height, "cell out of bounds");
        count_neighbors(
            &self.buffers[self.current],
            self.width,
            self.height,
            Pos2::new(x as i32, y as i32),
        )
    }

    /// Advances the grid by one generation
    ///
    /// Every neighbor lookup reads the current buffer only, so the result does
    /// not depend on the order cells are visited in. Afterwards the freshly
    /// written buffer becomes current and the old one becomes scratch.
    pub fn advance(&mut self) {
        let (width, height) = (self.width, self.height);
        let [first, second] = &mut self.buffers;
        let (current, next) = if self.current == 0 {
            (&*first, second)
        } else {
            (&*second, first)
        };

        for (index, (cell, out)) in current.iter().zip(next.iter_mut()).enumerate() {
            let neighbors = count_neighbors(current, width, height, Pos2::from_index(index, width));
            *out = rule::next_state(*cell, neighbors);
        }

        self.current ^= 1;
        self.generation += 1;
    }
}

fn count_neighbors(cells: &[bool], width: usize, height: usize, pos: Pos2) -> u8 {
    pos.neighbors()
        .filter_map(|neighbor| neighbor.to_index(width, height))
        .filter(|&index| cells[index])
        .count() as u8
}

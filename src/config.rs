/// Grid dimensions and seeding used when the simulation starts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Grid columns
    pub width: usize,
    /// Grid rows
    pub height: usize,
    /// Number of random activation draws made at construction
    pub initial_live_count: usize,
}

impl Config {
    pub const DEFAULT_WIDTH: usize = 320;
    pub const DEFAULT_HEIGHT: usize = 240;

    /// A config for the given size that seeds a tenth of its cells
    pub fn with_size(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            initial_live_count: width * height / 10,
        }
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::with_size(Self::DEFAULT_WIDTH, Self::DEFAULT_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_seeds_a_tenth() {
        let config = Config::default();

        assert_eq!((config.width, config.height), (320, 240));
        assert_eq!(config.initial_live_count, 7680);
    }
}

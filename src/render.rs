//! Converts a grid generation into an RGBA pixel buffer.
//!
//! One pixel per cell, row-major, channel order (R, G, B, A). Live cells are
//! opaque white and dead cells are fully transparent black.

use crate::engine::GridView;

pub const BYTES_PER_CELL: usize = 4;
pub type Pixel = [u8; BYTES_PER_CELL];

pub const ALIVE: Pixel = [0xFF, 0xFF, 0xFF, 0xFF];
pub const DEAD: Pixel = [0x00, 0x00, 0x00, 0x00];

/// Writes every cell of `view` into `out`
///
/// ## Panics
/// If `out` is not exactly `width * height * 4` bytes long. Buffer sizing is
/// fixed for the lifetime of a grid, so a mismatch is a caller bug.
pub fn draw(view: &GridView<'_>, out: &mut [u8]) {
    let cells = view.cells();
    assert_eq!(
        out.len(),
        cells.len() * BYTES_PER_CELL,
        "pixel buffer does not match a {}x{} grid",
        view.width(),
        view.height()
    );

    for (&alive, pixel) in cells.iter().zip(out.chunks_exact_mut(BYTES_PER_CELL)) {
        pixel.copy_from_slice(if alive { &ALIVE } else { &DEAD });
    }
}

/// An owned pixel buffer, sized once and redrawn every frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    bytes: Vec<u8>,
}

impl PixelBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            bytes: vec![0; width * height * BYTES_PER_CELL],
        }
    }

    pub fn for_view(view: &GridView<'_>) -> Self {
        Self::new(view.width(), view.height())
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Regenerates the whole buffer from `view`
    pub fn redraw(&mut self, view: &GridView<'_>) {
        draw(view, &mut self.bytes);
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn pixels(&self) -> impl Iterator<Item = Pixel> + '_ {
        self.bytes
            .chunks_exact(BYTES_PER_CELL)
            .map(|chunk| [chunk[0], chunk[1], chunk[2], chunk[3]])
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<Pixel> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let index = (y * self.width + x) * BYTES_PER_CELL;
        let chunk = &self.bytes[index..index + BYTES_PER_CELL];
        Some([chunk[0], chunk[1], chunk[2], chunk[3]])
    }
}

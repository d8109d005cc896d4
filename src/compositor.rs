//! Stamping accepted circles into the canvas.

use {
  crate::{
    geometry::Circle,
    solver::OccupancyGrid
  },
  num_traits::NumCast,
  std::fmt::{Debug, Formatter}
};

/// Single channel intensity raster, row-major, black on creation.
#[derive(Clone, PartialEq, Eq)]
pub struct Canvas {
  size: u32,
  pixels: Vec<u8>
}

impl Canvas {
  pub fn new(size: u32) -> Self {
    Self {
      size,
      pixels: vec![0; (size as usize).pow(2)]
    }
  }

  pub fn size(&self) -> u32 {
    self.size
  }

  pub fn pixels(&self) -> &[u8] {
    &self.pixels
  }

  pub fn get(&self, row: u32, col: u32) -> Option<u8> {
    (row < self.size && col < self.size)
      .then(|| self.pixels[row as usize * self.size as usize + col as usize])
  }

  /// Every `stride`-th row and column, starting with the first.
  pub fn downsample(&self, stride: u32) -> Canvas {
    assert!(stride > 0, "downsample stride must be positive");
    let size = (self.size + stride - 1) / stride;
    let (side, stride) = (self.size as usize, stride as usize);
    let pixels = itertools::iproduct!(0..size as usize, 0..size as usize)
      .map(|(row, col)| self.pixels[row * stride * side + col * stride])
      .collect();
    Canvas { size, pixels }
  }

  fn fill(&mut self, circle: &Circle, value: u8) {
    let size = self.size as i64;
    circle.spans().for_each(|(row, cols)| {
      let offset = (row * size) as usize;
      self.pixels[offset + *cols.start() as usize ..= offset + *cols.end() as usize]
        .fill(value);
    });
  }
}

impl Debug for Canvas {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    use humansize::{FileSize, file_size_opts as options};

    f.debug_struct("Canvas")
      .field("size", &self.size)
      .field("memory", &self.pixels.capacity().file_size(options::BINARY).unwrap_or_default())
      .finish()
  }
}

/// Radius to intensity mapping: `base + radius / max_radius * range`, saturating at 255.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Shade {
  pub base: u8,
  pub range: u8
}

impl Shade {
  pub fn intensity(&self, radius: u32, max_radius: u32) -> u8 {
    let t = radius as f64 / max_radius.max(1) as f64;
    NumCast::from(self.base as f64 + t * self.range as f64)
      .unwrap_or(u8::MAX)
  }
}

/// Paints `circle` with `intensity` and clears its cells in the grid. Returns the number of
/// cells cleared.
///
/// # Panics
/// When the disk leaves the canvas or covers an occupied cell. Either means the optimizer
/// produced an inadmissible circle, and continuing would corrupt the grid.
pub fn accept(circle: &Circle, intensity: u8, canvas: &mut Canvas, grid: &mut OccupancyGrid) -> u64 {
  assert_eq!(canvas.size(), grid.size(), "canvas and grid disagree on size");
  assert!(
    grid.disk_is_free(circle.center, circle.radius),
    "inadmissible circle {circle:?}: disk is out of bounds or overlaps an accepted one"
  );
  canvas.fill(circle, intensity);
  grid.clear_disk(circle)
}

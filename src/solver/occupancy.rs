use {
  crate::{
    error::{Error, Result},
    geometry::{Cell, Circle}
  },
  rand::{Rng, seq::SliceRandom},
  std::{
    fmt::{Debug, Formatter},
    ops::RangeInclusive
  }
};

/// Below this free fraction, the sampler enumerates free cells instead of guessing.
pub const ENUMERATION_FRACTION: f64 = 0.05;

/// Guesses made by rejection sampling before falling back to enumeration. At a free fraction of
/// 5% the chance of exhausting them is below 1e-90.
const REJECTION_ATTEMPTS: u32 = 4096;

/// How [`OccupancyGrid::sample_random_free`] picks a cell.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SamplingRegime {
  /// Collect all free indices and pick one.
  Enumerate,
  /// Draw uniform indices until one is free.
  Rejection
}

impl SamplingRegime {
  pub fn for_fraction(free: u64, total: u64) -> Self {
    if (free as f64) < ENUMERATION_FRACTION * total as f64 {
      SamplingRegime::Enumerate
    } else {
      SamplingRegime::Rejection
    }
  }
}

/// Free/occupied state of every canvas cell, `true` meaning free. Row-major.
/// Cells only ever go from free to occupied.
#[derive(Clone)]
pub struct OccupancyGrid {
  size: u32,
  cells: Vec<bool>
}

impl OccupancyGrid {
  pub fn new(size: u32) -> Self {
    Self {
      size,
      cells: vec![true; (size as usize).pow(2)]
    }
  }

  pub fn size(&self) -> u32 {
    self.size
  }

  pub fn total(&self) -> u64 {
    self.cells.len() as u64
  }

  #[inline]
  fn index(&self, cell: Cell) -> Option<usize> {
    let size = self.size as i64;
    ((0..size).contains(&cell.x) && (0..size).contains(&cell.y))
      .then(|| (cell.y * size + cell.x) as usize)
  }

  fn cell_at(&self, index: usize) -> Cell {
    let size = self.size as usize;
    Cell::new((index % size) as i64, (index / size) as i64)
  }

  /// `false` outside of the grid.
  pub fn is_free(&self, cell: Cell) -> bool {
    self.index(cell)
      .map_or(false, |i| self.cells[i])
  }

  /// Popcount of free cells, recomputed from scratch.
  pub fn count_free(&self) -> u64 {
    use rayon::prelude::*;

    self.cells.par_iter()
      .filter(|&&free| free)
      .count() as u64
  }

  /// Cells of one row. Panics when the span leaves the grid.
  #[inline]
  pub(crate) fn span(&self, row: i64, cols: RangeInclusive<i64>) -> &[bool] {
    let offset = (row * self.size as i64) as usize;
    &self.cells[offset + *cols.start() as usize ..= offset + *cols.end() as usize]
  }

  /// Marks every cell of the disk occupied and returns how many of them were free before.
  /// The disk must lie within the grid.
  pub fn clear_disk(&mut self, circle: &Circle) -> u64 {
    debug_assert!(circle.fits(self.size), "{circle:?} exceeds a {0}x{0} grid", self.size);
    let size = self.size as i64;
    circle.spans()
      .map(|(row, cols)| {
        let offset = (row * size) as usize;
        self.cells[offset + *cols.start() as usize ..= offset + *cols.end() as usize]
          .iter_mut()
          .map(|cell| std::mem::replace(cell, false) as u64)
          .sum::<u64>()
      })
      .sum()
  }

  /// Uniformly random free cell. `free` is the caller's running count of free cells, it picks
  /// the sampling regime.
  pub fn sample_random_free<R: Rng + ?Sized>(&self, free: u64, rng: &mut R) -> Result<Cell> {
    let exhausted = || Error::Exhausted { total: self.total(), counter: free };
    if free == 0 {
      return Err(exhausted().into());
    }

    if let SamplingRegime::Rejection = SamplingRegime::for_fraction(free, self.total()) {
      let hit = (0..REJECTION_ATTEMPTS)
        .map(|_| rng.gen_range(0..self.cells.len()))
        .find(|&i| self.cells[i]);
      if let Some(i) = hit {
        return Ok(self.cell_at(i));
      }
      tracing::warn!(free, "rejection sampling failed, free-cell counter may be stale");
    }

    let indices: Vec<usize> = self.cells.iter()
      .enumerate()
      .filter_map(|(i, &free)| free.then(|| i))
      .collect();
    indices.choose(rng)
      .map(|&i| self.cell_at(i))
      .ok_or_else(|| exhausted().into())
  }
}

impl Debug for OccupancyGrid {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    use humansize::{FileSize, file_size_opts as options};

    f.debug_struct("OccupancyGrid")
      .field("size", &self.size)
      .field("free", &self.count_free())
      .field("memory", &self.cells.capacity().file_size(options::BINARY).unwrap_or_default())
      .finish()
  }
}

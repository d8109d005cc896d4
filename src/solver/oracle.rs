use {
  super::OccupancyGrid,
  crate::geometry::{self, Cell, Circle}
};

impl OccupancyGrid {
  /// Whether the disk lies entirely on the grid and over free cells. Out of bounds disks are
  /// rejected before any cell is read.
  pub fn disk_is_free(&self, center: Cell, radius: u32) -> bool {
    let circle = Circle { center, radius };
    circle.fits(self.size())
      && circle.spans().all(|(row, cols)| self.span(row, cols)
        .iter()
        .all(|&free| free))
  }

  /// Largest radius up to `cap` whose disk at `center` is admissible.
  ///
  /// Binary search over [`disk_is_free`](Self::disk_is_free), which is monotonic in the radius:
  /// shrinking a disk only removes cells. The upper bound is the distance to the nearest edge,
  /// so every probe is in bounds. Returns 0 for a center off the grid or on an occupied cell,
  /// callers only ask about free cells.
  pub fn max_free_radius(&self, center: Cell, cap: u32) -> u32 {
    let (mut lo, mut hi) = match geometry::edge_distance(center, self.size()) {
      Some(edge) => (0, edge.min(cap)),
      None => return 0
    };
    while lo < hi {
      let mid = (lo + hi + 1) / 2;
      if self.disk_is_free(center, mid) {
        lo = mid;
      } else {
        hi = mid - 1;
      }
    }
    lo
  }
}

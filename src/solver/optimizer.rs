use {
  super::{CircleRegistry, OccupancyGrid},
  crate::geometry::{self, Cell, Circle}
};

/// When a growing circle counts as settled.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Tangency {
  /// Two circles touch when `|d - (r1 + r2)| < tolerance`, in cells.
  pub tolerance: f64,
  /// Touching circles needed to stop growth. Also the registry size below which the test is
  /// skipped.
  pub count: usize
}

impl Default for Tangency {
  fn default() -> Self {
    Self {
      tolerance: 2.0,
      count: 3
    }}}

/// Moves a seed toward a locally largest opening and decides the final radius.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Optimizer {
  /// Global radius cap
  pub max_radius: u32,
  pub tangency: Tangency
}

impl Optimizer {
  pub fn new(max_radius: u32) -> Self {
    Self {
      max_radius,
      tangency: Tangency::default()
    }
  }

  /// Hill-climb the center, then grow step by step. `seed` should be a free cell.
  pub fn optimize(&self, seed: Cell, grid: &OccupancyGrid, registry: &CircleRegistry) -> Circle {
    let climbed = self.climb(seed, grid);
    let settled = self.settle(climbed, grid, registry);
    tracing::trace!(?seed, ?settled, "optimized");
    settled
  }

  /// Moves the center to the first neighbour with a strictly larger admissible radius, until
  /// no neighbour improves or the cap is reached.
  pub fn climb(&self, seed: Cell, grid: &OccupancyGrid) -> Circle {
    let mut center = seed;
    let mut radius = grid.max_free_radius(seed, self.max_radius);
    while radius < self.max_radius {
      match self.improving_neighbour(center, radius, grid) {
        Some((next, next_radius)) => {
          center = next;
          radius = next_radius;
        }
        None => break
      }
    }
    Circle { center, radius }
  }

  /// Grows `start` one cell of radius at a time. After every step the center may shift to a
  /// neighbour offering a larger maximal radius, which keeps the current radius admissible.
  /// Stops when the next radius no longer fits, at the cap, or once the circle touches
  /// `tangency.count` registered circles.
  pub fn settle(&self, start: Circle, grid: &OccupancyGrid, registry: &CircleRegistry) -> Circle {
    let Circle { mut center, mut radius } = start;
    let Tangency { tolerance, count } = self.tangency;

    while radius < self.max_radius {
      if !grid.disk_is_free(center, radius + 1) { break; }
      radius += 1;

      let here = grid.max_free_radius(center, self.max_radius);
      if let Some((next, _)) = self.improving_neighbour(center, here, grid) {
        center = next;
      }

      if registry.len() >= count
        && registry.count_tangent(&Circle { center, radius }, tolerance, count) >= count {
        break;
      }
    }
    Circle { center, radius }
  }

  /// First free neighbour, in [`geometry::NEIGHBOURS`] order, whose maximal radius beats
  /// `radius`. Ties stay put.
  pub(crate) fn improving_neighbour(&self, center: Cell, radius: u32, grid: &OccupancyGrid) -> Option<(Cell, u32)> {
    geometry::neighbours(center)
      .filter(|&n| grid.is_free(n))
      .map(|n| (n, grid.max_free_radius(n, self.max_radius)))
      .find(|&(_, r)| r > radius)
  }
}

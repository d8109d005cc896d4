//! .
//!
//! The origin of coordinate system is in top-left corner, `x` grows along a row (column index)
//! and `y` grows down (row index). Disks are sets of lattice cells: a cell belongs to the disk of
//! radius `r` iff `dx² + dy² ≤ r²`.

use {
  euclid::{Box2D, Point2D, Size2D, Vector2D as V2}
};

pub mod disk;
pub use disk::*;

/// Pixel coordinate basis
#[derive(Debug, Copy, Clone)]
pub struct PixelSpace;

/// Lattice cell, `x` is the column and `y` the row. Signed, so that neighbour offsets may step
/// outside of the canvas and get rejected by a bounds check instead of wrapping.
pub type Cell = Point2D<i64, PixelSpace>;
pub type Offset = V2<i64, PixelSpace>;

pub fn cell(row: i64, col: i64) -> Cell {
  Cell::new(col, row)
}

/// The 8-neighbourhood as `(row, col)` offsets in scan order: rows top to bottom, columns left
/// to right. Order matters, the first strictly improving neighbour wins.
pub const NEIGHBOURS: [(i64, i64); 8] = [
  (-1, -1), (-1, 0), (-1, 1),
  ( 0, -1),          ( 0, 1),
  ( 1, -1), ( 1, 0), ( 1, 1),
];

pub fn neighbours(center: Cell) -> impl Iterator<Item = Cell> {
  NEIGHBOURS.iter()
    .map(move |&(drow, dcol)| center + Offset::new(dcol, drow))
}

/// An accepted (or candidate) disk.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Circle {
  pub center: Cell,
  pub radius: u32
}

impl Circle {
  pub fn new(row: i64, col: i64, radius: u32) -> Self {
    Self { center: cell(row, col), radius }
  }

  pub fn row(&self) -> i64 { self.center.y }
  pub fn col(&self) -> i64 { self.center.x }

  pub fn distance_to(&self, other: &Circle) -> f64 {
    self.center.to_f64().distance_to(other.center.to_f64())
  }

  /// Touching within `tolerance` cells, from either side.
  pub fn is_tangent(&self, other: &Circle, tolerance: f64) -> bool {
    let gap = self.distance_to(other) - (self.radius as f64 + other.radius as f64);
    gap.abs() < tolerance
  }

  /// Half-open box covering every cell of the disk.
  pub fn bounding_box(&self) -> Box2D<i64, PixelSpace> {
    let r = self.radius as i64;
    Box2D::new(
      self.center - V2::splat(r),
      self.center + V2::splat(r + 1)
    )
  }

  /// Whether every cell of the disk lies on a square canvas of side `size`.
  pub fn fits(&self, size: u32) -> bool {
    Box2D::from_size(Size2D::splat(size as i64))
      .contains_box(&self.bounding_box())
  }

  /// Rows of the disk, each with its inclusive column span.
  pub fn spans(&self) -> DiskSpans {
    DiskSpans::new(self.center, self.radius)
  }

  pub fn cells(&self) -> impl Iterator<Item = Cell> {
    self.spans()
      .flat_map(|(row, cols)| cols.map(move |col| cell(row, col)))
  }
}

/// Distance from `point` to the nearest canvas edge, i.e. the largest radius whose disk stays
/// in bounds. `None` when the point itself is off the canvas.
pub fn edge_distance(point: Cell, size: u32) -> Option<u32> {
  let size = size as i64;
  let d = point.x
    .min(point.y)
    .min(size - 1 - point.x)
    .min(size - 1 - point.y);
  (d >= 0).then(|| d as u32)
}

use {
  super::Cell,
  std::ops::RangeInclusive
};

/// Integer square root, `floor(sqrt(n))`.
pub fn isqrt(n: u64) -> u64 {
  // correct the float estimate in both directions
  let mut x = (n as f64).sqrt() as u64;
  while x.checked_mul(x).map_or(true, |sq| sq > n) { x -= 1; }
  while (x + 1).checked_mul(x + 1).map_or(false, |sq| sq <= n) { x += 1; }
  x
}

/// Row-by-row decomposition of a lattice disk. For every row offset `dy` in `-r..=r` yields the
/// row and the inclusive column span `cx - w ..= cx + w` with `w = isqrt(r² - dy²)`, which is
/// exactly the set of cells satisfying `dx² + dy² ≤ r²`.
#[derive(Debug, Clone)]
pub struct DiskSpans {
  center: Cell,
  r2: u64,
  dy: i64,
  end: i64
}

impl DiskSpans {
  pub fn new(center: Cell, radius: u32) -> Self {
    let r = radius as i64;
    Self {
      center,
      r2: (radius as u64).pow(2),
      dy: -r,
      end: r
    }
  }
}

impl Iterator for DiskSpans {
  type Item = (i64, RangeInclusive<i64>);

  fn next(&mut self) -> Option<Self::Item> {
    if self.dy > self.end { return None; }
    let dy = self.dy;
    self.dy += 1;
    let w = isqrt(self.r2 - (dy * dy) as u64) as i64;
    Some((self.center.y + dy, self.center.x - w ..= self.center.x + w))
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    let n = (self.end - self.dy + 1).max(0) as usize;
    (n, Some(n))
  }
}

impl ExactSizeIterator for DiskSpans {}

/// Number of lattice cells in a disk of the given radius.
pub fn disk_area(radius: u32) -> u64 {
  DiskSpans::new(Cell::origin(), radius)
    .map(|(_, cols)| (cols.end() - cols.start() + 1) as u64)
    .sum()
}

#[cfg(test)]
mod tests {
  use {
    super::*,
    crate::geometry::{cell, Circle},
    itertools::iproduct
  };

  #[test] fn isqrt_exact() {
    for n in 0..10_000u64 {
      let x = isqrt(n);
      assert!(x * x <= n && (x + 1) * (x + 1) > n, "isqrt({n}) = {x}");
    }
    assert_eq!(isqrt(u32::MAX as u64 * u32::MAX as u64), u32::MAX as u64);
  }

  #[test] fn spans_match_definition() {
    for radius in 0..25u32 {
      let center = cell(40, 30);
      let r = radius as i64;
      let expected = iproduct!(-r..=r, -r..=r)
        .filter(|(dy, dx)| dx * dx + dy * dy <= r * r)
        .count();
      let circle = Circle { center, radius };
      assert_eq!(circle.cells().count(), expected, "radius {radius}");
      assert_eq!(disk_area(radius), expected as u64);
      assert!(circle.cells().all(|c| {
        let d = c - center;
        d.x * d.x + d.y * d.y <= r * r
      }));
    }
  }

  #[test] fn small_disks() {
    assert_eq!(disk_area(0), 1);
    assert_eq!(disk_area(1), 5);
    assert_eq!(disk_area(2), 13);
    let spans: Vec<_> = DiskSpans::new(cell(5, 5), 1).collect();
    assert_eq!(spans, vec![(4, 5..=5), (5, 4..=6), (6, 5..=5)]);
  }
}

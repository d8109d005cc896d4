use {
  crate::{error::Result, geometry::Circle},
  anyhow::Context,
  std::{io::Write, path::Path}
};

/// Accepted circles in acceptance order. Append only.
#[derive(Debug, Clone, Default)]
pub struct CircleRegistry {
  circles: Vec<Circle>
}

impl CircleRegistry {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn push(&mut self, circle: Circle) {
    self.circles.push(circle);
  }

  pub fn len(&self) -> usize {
    self.circles.len()
  }

  pub fn is_empty(&self) -> bool {
    self.circles.is_empty()
  }

  pub fn iter(&self) -> impl Iterator<Item = &Circle> + '_ {
    self.circles.iter()
  }

  pub fn as_slice(&self) -> &[Circle] {
    &self.circles
  }

  /// Number of registered circles touching `candidate`, counting stops at `limit`.
  pub fn count_tangent(&self, candidate: &Circle, tolerance: f64, limit: usize) -> usize {
    self.circles.iter()
      .filter(|c| c.is_tangent(candidate, tolerance))
      .take(limit)
      .count()
  }
}

impl CircleRegistry {
  /// Dumps the circles as a JSON array of `{"row", "col", "radius"}` objects, in acceptance
  /// order.
  pub fn write_json(&self, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let circles: Vec<_> = self.iter()
      .map(|c| serde_json::json!({ "row": c.row(), "col": c.col(), "radius": c.radius }))
      .collect();
    let file = std::fs::File::create(path)
      .with_context(|| format!("failed to create {}", path.display()))?;
    let mut writer = std::io::BufWriter::new(file);
    serde_json::to_writer(&mut writer, &circles)
      .with_context(|| format!("failed to write {}", path.display()))?;
    // a failed final flush would otherwise be swallowed on drop
    writer.flush()
      .with_context(|| format!("failed to write {}", path.display()))
  }
}

impl FromIterator<Circle> for CircleRegistry {
  fn from_iter<I: IntoIterator<Item = Circle>>(iter: I) -> Self {
    Self { circles: iter.into_iter().collect() }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test] fn json_dump_lists_circles_in_order() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("circles.json");
    let registry: CircleRegistry = [Circle::new(5, 7, 3), Circle::new(20, 1, 0)]
      .into_iter()
      .collect();
    registry.write_json(&path)?;

    let dumped: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&path)?)?;
    assert_eq!(dumped, serde_json::json!([
      { "row": 5, "col": 7, "radius": 3 },
      { "row": 20, "col": 1, "radius": 0 }
    ]));
    Ok(())
  }

  #[test] fn json_dump_reports_unwritable_path() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let err = CircleRegistry::new()
      .write_json(dir.path().join("missing/circles.json"))
      .unwrap_err();
    assert!(format!("{err:#}").contains("failed to create"), "{err:#}");
    Ok(())
  }

  #[test] fn tangent_count_stops_at_limit() {
    let registry: CircleRegistry = [
      Circle::new(0, 10, 5), Circle::new(0, -10, 5), Circle::new(10, 0, 5)
    ].into_iter().collect();
    let candidate = Circle::new(0, 0, 5);
    assert_eq!(registry.count_tangent(&candidate, 2.0, usize::MAX), 3);
    assert_eq!(registry.count_tangent(&candidate, 2.0, 2), 2);
  }
}

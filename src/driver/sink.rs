//! Where the driver sends its output. All sinks are called between iterations, never while the
//! grid is being mutated.

use {
  super::Report,
  crate::{compositor::Canvas, error::Result}
};

/// Progress lines and the final summary.
pub trait LogSink {
  fn progress(&mut self, iteration: u64, free_cells: u64);
  fn summary(&mut self, report: &Report);
}

/// Low resolution snapshots taken while the run is in progress.
pub trait PreviewSink {
  fn preview(&mut self, iteration: u64, thumbnail: &Canvas) -> Result<()>;
}

/// Final full resolution canvas, written once.
pub trait RasterSink {
  fn write(&mut self, canvas: &Canvas) -> Result<()>;
}

/// Reports through `tracing` at info level.
#[derive(Debug, Default, Copy, Clone)]
pub struct TracingLog;

impl LogSink for TracingLog {
  fn progress(&mut self, iteration: u64, free_cells: u64) {
    tracing::info!("Iter {iteration}, free: {free_cells}");
  }

  fn summary(&mut self, report: &Report) {
    tracing::info!(
      circles = report.circles,
      free_cells = report.free_cells,
      "Done in {:.1}s, iter: {}", report.elapsed.as_secs_f64(), report.iterations
    );
  }
}

/// Drops everything.
#[derive(Debug, Default, Copy, Clone)]
pub struct Discard;

impl LogSink for Discard {
  fn progress(&mut self, _: u64, _: u64) {}
  fn summary(&mut self, _: &Report) {}
}

impl PreviewSink for Discard {
  fn preview(&mut self, _: u64, _: &Canvas) -> Result<()> { Ok(()) }
}

impl RasterSink for Discard {
  fn write(&mut self, _: &Canvas) -> Result<()> { Ok(()) }
}

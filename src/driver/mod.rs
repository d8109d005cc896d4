//! The placement loop.
//!
//! Each iteration samples a free seed, lets the [`Optimizer`] pick a circle, stamps it and
//! updates the running free-cell count, until the free area drops to the configured threshold.
//! ```no_run
//! # use circle_mosaic::{config::Config, driver::{Driver, Discard, TracingLog}, error::Result};
//! # fn main() -> Result<()> {
//! let config = Config { field_size: 1024, max_radius: 64, ..Config::default() };
//! let mut driver = Driver::new(config)?;
//! let report = driver.run(&mut TracingLog, &mut Discard, &mut Discard)?;
//! assert_eq!(report.iterations as usize, driver.registry().len());
//! # Ok(())
//! # }
//! ```

use {
  crate::{
    compositor::{self, Canvas, Shade},
    config::{CapOverride, Config},
    error::Result,
    geometry::Circle,
    solver::{CircleRegistry, OccupancyGrid, Optimizer}
  },
  rand::prelude::*,
  rand_pcg::Pcg64,
  std::time::{Duration, Instant}
};

pub mod sink;
pub use sink::{Discard, LogSink, PreviewSink, RasterSink, TracingLog};


#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum State {
  Running,
  Done
}

#[derive(Debug, Copy, Clone)]
pub struct Report {
  pub iterations: u64,
  pub circles: usize,
  pub free_cells: u64,
  pub elapsed: Duration
}

pub struct Driver<R = Pcg64> {
  config: Config,
  optimizer: Optimizer,
  shade: Shade,
  grid: OccupancyGrid,
  canvas: Canvas,
  registry: CircleRegistry,
  rng: R,
  /// Mirrors the popcount of `grid`, maintained from the counts `accept` reports.
  free: u64,
  iteration: u64,
  state: State
}

impl Driver<Pcg64> {
  /// Driver with a PCG stream seeded from `config.seed`.
  pub fn new(config: Config) -> Result<Self> {
    let rng = Pcg64::seed_from_u64(config.seed);
    Self::with_rng(config, rng)
  }
}

impl<R: Rng> Driver<R> {
  pub fn with_rng(config: Config, rng: R) -> Result<Self> {
    config.validate()?;
    let grid = OccupancyGrid::new(config.field_size);
    let canvas = Canvas::new(config.field_size);
    tracing::debug!(?grid, ?canvas, "allocated");
    Ok(Self {
      optimizer: config.optimizer(),
      shade: config.shade(),
      free: grid.total(),
      grid,
      canvas,
      registry: CircleRegistry::new(),
      rng,
      iteration: 0,
      state: State::Running,
      config
    })
  }

  pub fn config(&self) -> &Config { &self.config }
  pub fn grid(&self) -> &OccupancyGrid { &self.grid }
  pub fn canvas(&self) -> &Canvas { &self.canvas }
  pub fn registry(&self) -> &CircleRegistry { &self.registry }
  pub fn free_cells(&self) -> u64 { self.free }
  pub fn iteration(&self) -> u64 { self.iteration }

  /// Places at most one circle.
  pub fn step<L, P>(&mut self, log: &mut L, preview: &mut P) -> Result<State>
    where L: LogSink + ?Sized,
          P: PreviewSink + ?Sized {
    if self.state == State::Done {
      return Ok(State::Done);
    }
    if self.free as f64 <= self.config.stop_threshold() {
      tracing::debug!(free = self.free, iteration = self.iteration, "free area below threshold");
      self.state = State::Done;
      return Ok(State::Done);
    }

    let seed = self.grid.sample_random_free(self.free, &mut self.rng)?;
    let mut circle = self.optimizer.optimize(seed, &self.grid, &self.registry);
    if self.replaces_radius(&circle) {
      let radius = self.rng.gen_range(self.config.first_radius_min..=self.config.max_radius);
      tracing::trace!(from = circle.radius, to = radius, "cap-saturated radius replaced");
      circle.radius = radius;
    }
    self.place(circle);

    if hits(self.iteration, self.config.log_interval) {
      log.progress(self.iteration, self.free);
    }
    if hits(self.iteration, self.config.preview_interval) {
      preview.preview(self.iteration, &self.canvas.downsample(self.config.preview_stride))?;
    }
    Ok(State::Running)
  }

  /// Steps until done, then hands the canvas to `raster`.
  pub fn run<L, P, S>(&mut self, log: &mut L, preview: &mut P, raster: &mut S) -> Result<Report>
    where L: LogSink + ?Sized,
          P: PreviewSink + ?Sized,
          S: RasterSink + ?Sized {
    let t0 = Instant::now();
    while self.step(log, preview)? == State::Running {}
    raster.write(&self.canvas)?;

    let report = Report {
      iterations: self.iteration,
      circles: self.registry.len(),
      free_cells: self.free,
      elapsed: t0.elapsed()
    };
    log.summary(&report);
    Ok(report)
  }

  fn replaces_radius(&self, circle: &Circle) -> bool {
    circle.radius == self.config.max_radius && match self.config.cap_override {
      CapOverride::FirstCircle => self.registry.is_empty(),
      CapOverride::Always => true
    }
  }

  fn place(&mut self, circle: Circle) {
    let intensity = self.shade.intensity(circle.radius, self.config.max_radius);
    let cleared = compositor::accept(&circle, intensity, &mut self.canvas, &mut self.grid);
    self.free -= cleared;
    self.registry.push(circle);
    self.iteration += 1;
  }
}

fn hits(iteration: u64, interval: u64) -> bool {
  interval != 0 && iteration % interval == 0
}

//! Run configuration.
//!
//! Every value is fixed at process start. The defaults reproduce the reference run: a 7500²
//! field packed with disks of radius up to 200, stopping once less than 5% of the cells are free.

use {
  crate::{
    compositor::Shade,
    error::{Error, Result},
    solver::{Optimizer, Tangency}
  },
  anyhow::{bail, Context},
  serde::{Deserialize, Serialize},
  std::path::{Path, PathBuf}
};

/// Output colour channel carrying the circle intensity. The remaining channels stay black.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
  Gray,
  Red,
  Green,
  Blue
}

/// Which cap-saturated circles get their radius replaced by a random one.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CapOverride {
  /// Only the very first circle of a run.
  FirstCircle,
  /// Every circle whose optimized radius equals the cap.
  Always
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
  /// Canvas side length, in cells.
  pub field_size: u32,
  /// Global radius cap.
  pub max_radius: u32,
  /// Stop once the free cells drop to this percentage of the canvas.
  pub stop_percent: f64,
  /// Iterations between progress lines, 0 disables them.
  pub log_interval: u64,
  /// Iterations between preview snapshots, 0 disables them.
  pub preview_interval: u64,
  /// Every n-th row and column ends up in a preview.
  pub preview_stride: u32,
  pub base_intensity: u8,
  pub intensity_range: u8,
  /// Lower bound of the random radius substituted for a cap-saturated circle.
  pub first_radius_min: u32,
  pub cap_override: CapOverride,
  /// Circles count as touching when `|d - (r1 + r2)|` is below this many cells.
  pub tangency_tolerance: f64,
  /// Number of touching circles that settles a growing one.
  pub tangent_count: usize,
  pub seed: u64,
  pub output: PathBuf,
  pub preview_dir: PathBuf,
  /// Image extension of the previews.
  pub preview_format: String,
  pub channel: Channel
}

impl Default for Config {
  fn default() -> Self {
    Self {
      field_size: 7500,
      max_radius: 200,
      stop_percent: 5.0,
      log_interval: 100,
      preview_interval: 1000,
      preview_stride: 20,
      base_intensity: 55,
      intensity_range: 200,
      first_radius_min: 20,
      cap_override: CapOverride::FirstCircle,
      tangency_tolerance: 2.0,
      tangent_count: 3,
      seed: 0,
      output: "circle_field_blue_random.tiff".into(),
      preview_dir: ".".into(),
      preview_format: "tiff".into(),
      channel: Channel::Blue
    }}}

impl Config {
  pub fn from_toml_str(source: &str) -> Result<Self> {
    let config: Self = toml::from_str(source)
      .context("failed to parse configuration")?;
    config.validate()?;
    Ok(config)
  }

  pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    let source = std::fs::read_to_string(path)
      .with_context(|| format!("failed to read configuration {}", path.display()))?;
    Self::from_toml_str(&source)
      .with_context(|| format!("in {}", path.display()))
  }

  pub fn validate(&self) -> Result<()> {
    let invalid = |msg: String| -> Result<()> { bail!(Error::InvalidConfig(msg)) };

    if self.field_size == 0 {
      return invalid("field_size must be positive".into());
    }
    if self.max_radius == 0 {
      return invalid("max_radius must be positive".into());
    }
    if !(0.0..=100.0).contains(&self.stop_percent) {
      return invalid(format!("stop_percent {} is outside [0, 100]", self.stop_percent));
    }
    if self.preview_stride == 0 {
      return invalid("preview_stride must be positive".into());
    }
    if self.first_radius_min > self.max_radius {
      return invalid(format!(
        "first_radius_min {} exceeds max_radius {}",
        self.first_radius_min, self.max_radius
      ));
    }
    if !self.tangency_tolerance.is_finite() || self.tangency_tolerance < 0.0 {
      return invalid(format!("tangency_tolerance {} must be a finite, non-negative distance", self.tangency_tolerance));
    }
    if self.tangent_count == 0 {
      return invalid("tangent_count must be positive".into());
    }
    if self.preview_format.is_empty() {
      return invalid("preview_format must name an image extension".into());
    }
    Ok(())
  }

  pub fn total_cells(&self) -> u64 {
    (self.field_size as u64).pow(2)
  }

  /// Free-cell count at or below which the canvas is considered full.
  pub fn stop_threshold(&self) -> f64 {
    self.total_cells() as f64 * self.stop_percent / 100.0
  }

  pub fn shade(&self) -> Shade {
    Shade {
      base: self.base_intensity,
      range: self.intensity_range
    }
  }

  pub fn optimizer(&self) -> Optimizer {
    Optimizer {
      max_radius: self.max_radius,
      tangency: Tangency {
        tolerance: self.tangency_tolerance,
        count: self.tangent_count
      }
    }
  }
}

//! .
//!
//! Failures that callers may want to match on. Everything else travels as an
//! [`anyhow::Error`] with context attached, see [`Result`].

/// Typed failures of the placement engine and its sinks.
#[derive(thiserror::Error, Debug)]
pub enum Error {
  /// A free cell was requested from a grid that has none left. The driver checks its stop
  /// threshold before sampling, so seeing this means the threshold was evaluated too late.
  #[error("no free cell left to sample ({total} cells, counter reports {counter} free)")]
  Exhausted { total: u64, counter: u64 },

  #[error("invalid configuration: {0}")]
  InvalidConfig(String),

  /// Raw pixel buffer does not match the requested image dimensions.
  #[error("pixel buffer of {len} bytes does not fit a {side}x{side} image")]
  ImageBuffer { len: usize, side: u32 },
}

/// Convenient wrapper around `std::Result`.
pub type Result<T, E = anyhow::Error> = std::result::Result<T, E>;

//! Greedy packing of non-overlapping disks into a square raster.
//!
//! A run repeatedly picks a random free cell, moves it uphill toward the largest opening around
//! it ([`solver::Optimizer`]), and stamps the resulting disk into a one-channel canvas with an
//! intensity that grows with the radius ([`compositor`]). It stops once the free area drops
//! below a percentage of the canvas ([`driver`]).
//!
//! The crate is split into the placement engine ([`solver`]), the loop around it ([`driver`])
//! and the image output ([`drawing`], requires the `drawing` feature, on by default).
//!
//! # Basic usage
//! ```no_run
//! # use circle_mosaic::{
//! #   config::{Channel, Config},
//! #   driver::{Driver, TracingLog, Discard},
//! #   drawing::ImageFile,
//! #   error::Result
//! # };
//! # fn main() -> Result<()> {
//! let config = Config {
//!   field_size: 2048,
//!   max_radius: 64,
//!   seed: 42,
//!   ..Config::default()
//! };
//! let mut raster = ImageFile { path: "out.png".into(), channel: Channel::Blue };
//! let mut driver = Driver::new(config)?;
//! // progress goes through `tracing`, previews are dropped
//! let report = driver.run(&mut TracingLog, &mut Discard, &mut raster)?;
//! println!("{} circles", report.circles);
//! # Ok(())
//! # }
//! ```
//!
//! The engine can also be driven by hand:
//! ```
//! # use circle_mosaic::{
//! #   compositor::{self, Canvas},
//! #   geometry::cell,
//! #   solver::{CircleRegistry, OccupancyGrid, Optimizer},
//! # };
//! let mut grid = OccupancyGrid::new(101);
//! let mut canvas = Canvas::new(101);
//! let registry = CircleRegistry::new();
//!
//! let circle = Optimizer::new(50).optimize(cell(10, 20), &grid, &registry);
//! assert_eq!((circle.row(), circle.col(), circle.radius), (50, 50, 50));
//!
//! let cleared = compositor::accept(&circle, 255, &mut canvas, &mut grid);
//! assert_eq!(grid.count_free(), 101 * 101 - cleared);
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod error;
pub mod config;
pub mod geometry;
pub mod solver;
pub mod compositor;
pub mod driver;
#[cfg(feature = "drawing")]
#[cfg_attr(docsrs, doc(cfg(feature = "drawing")))]
pub mod drawing;

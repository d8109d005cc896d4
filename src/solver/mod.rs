//! Placement engine: which cells are free, how large a disk fits at a point, and where a seed
//! should end up.

pub mod occupancy;
pub use occupancy::{OccupancyGrid, SamplingRegime, ENUMERATION_FRACTION};

mod oracle;

pub mod registry;
pub use registry::CircleRegistry;

pub mod optimizer;
pub use optimizer::{Optimizer, Tangency};

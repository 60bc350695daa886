mod bounds;
mod enemy;
mod spinner;
mod starfield;

// Re-export all public types
pub use bounds::Bounds;
pub use enemy::Enemy;
pub use spinner::{FirePhase, FireProfile, Spinner};
pub use starfield::{Star, StarTile, Starfield};

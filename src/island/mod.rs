//! Island terrain map that explorers walk across.
//!
//! The map is a fixed rectangle of terrain codes. Land and beach can be
//! walked on; everything else ends a walk in failure. Leaving the rectangle
//! is an escape.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;

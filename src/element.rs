//! Element wrappers and the animation-engine-facing contract.

pub mod filter;
pub mod target;

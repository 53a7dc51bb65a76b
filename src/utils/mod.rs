//! Numeric utilities shared by the correlation stages.

pub mod linalg;
pub mod stats;

pub use linalg::{solve_linear_system, toeplitz};
pub use stats::{mean, z_critical};

//! Disk head scheduling.
//!
//! This module handles:
//! - Policy selection and name parsing
//! - Request ordering for all six policies
//! - Result assembly and performance metrics

pub mod engine;
pub mod policy;
pub mod result;

pub use engine::{DiskScheduler, best, simulate};
pub use policy::{Algorithm, Direction, Strategy, Sweep};
pub use result::{PerformanceMetrics, SimulationResponse, SimulationResult};

//! disk-sched: a disk head scheduling simulator in Rust.
//!
//! This crate computes the order in which a disk head services a set of
//! track requests, and what that order costs in seek distance, under the
//! classical policies:
//! - FCFS and SSTF
//! - SCAN and C-SCAN (sweep to the disk edge)
//! - LOOK and C-LOOK (sweep to the last request)
//!
//! Every run is deterministic and side-effect free.

pub mod config;
pub mod error;

pub mod core;
pub mod educational;
pub mod scheduler;
pub mod workload;

pub use config::SimulationConfig;
pub use crate::core::{DEFAULT_DISK_SIZE, DiskGeometry, SeekOperation, Track};
pub use error::{Error, Result};
pub use scheduler::{
    Algorithm, Direction, DiskScheduler, PerformanceMetrics, SimulationResponse, SimulationResult,
    simulate,
};

//! Core infrastructure for disk-sched.
//!
//! This module contains the pieces every policy shares:
//! - DiskGeometry for track bounds and input validation
//! - SeekAccount for seek-distance accounting

pub mod geometry;
pub mod seek;

pub use geometry::{DEFAULT_DISK_SIZE, DiskGeometry, Track};
pub use seek::{SeekAccount, SeekOperation};

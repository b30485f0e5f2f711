//! Educational output for disk-sched.
//!
//! Terminal-friendly views of a simulation: the head's path across the
//! disk and how the policies compare on the same requests.
//!
//! ## Usage
//!
//! ```
//! use disk_sched::educational::head_movement_chart;
//! use disk_sched::scheduler::{Direction, DiskScheduler};
//!
//! let scheduler = DiskScheduler::new(vec![98, 183, 37], 53, 200)?;
//! let chart = head_movement_chart(&scheduler.look(Direction::Right), 200, 40);
//! println!("{chart}");
//! # Ok::<(), disk_sched::Error>(())
//! ```

pub mod visualizers;

pub use visualizers::{head_movement_chart, result_summary, seek_bar, seek_comparison_bars};

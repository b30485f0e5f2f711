//! The disk scheduling engine.
//!
//! A [`DiskScheduler`] holds one validated snapshot of input (requests,
//! initial head position, disk geometry) and can run any policy over it.
//! Every run works on its own copy of the requests, so a scheduler can be
//! shared freely and each call is independent of the others.
//!
//! ## Flow
//!
//! ```text
//!   validate ──► order (per policy) ──► walk & charge seeks ──► result
//! ```
//!
//! ## Example
//!
//! ```
//! use disk_sched::scheduler::{Direction, DiskScheduler};
//!
//! let scheduler = DiskScheduler::new(vec![98, 183, 37, 122, 14, 124, 65, 67], 53, 200)?;
//!
//! let result = scheduler.simulate("sstf", Direction::Right)?;
//! assert_eq!(result.sequence, vec![65, 67, 37, 14, 98, 122, 124, 183]);
//! assert_eq!(result.total_seek_time, 236);
//! # Ok::<(), disk_sched::Error>(())
//! ```

use tracing::{debug, trace};

use crate::core::geometry::{DiskGeometry, Track};
use crate::error::Result;
use crate::scheduler::policy::{Algorithm, Direction, Strategy, Sweep};
use crate::scheduler::result::SimulationResult;

/// A service order plus the positions of inserted edge waypoints.
type Ordering = (Vec<Track>, Vec<usize>);

/// Disk head scheduler over one fixed set of requests.
#[derive(Debug, Clone)]
pub struct DiskScheduler {
    /// Requests in arrival order.
    requests: Vec<Track>,
    /// Head position before servicing anything.
    initial_position: Track,
    /// Track bounds.
    geometry: DiskGeometry,
}

impl DiskScheduler {
    /// Create a scheduler, validating every request and the head position.
    ///
    /// # Errors
    ///
    /// Returns `Error::OutOfBounds` for the first request (or the initial
    /// position) outside `[0, disk_size)`.
    pub fn new(
        requests: impl Into<Vec<Track>>,
        initial_position: Track,
        disk_size: Track,
    ) -> Result<Self> {
        let requests = requests.into();
        let geometry = DiskGeometry::new(disk_size);
        geometry.validate(&requests, initial_position)?;

        Ok(Self {
            requests,
            initial_position,
            geometry,
        })
    }

    /// Requests in arrival order.
    pub fn requests(&self) -> &[Track] {
        &self.requests
    }

    /// Head position before the first movement.
    pub fn initial_position(&self) -> Track {
        self.initial_position
    }

    /// Disk geometry.
    pub fn geometry(&self) -> DiskGeometry {
        self.geometry
    }

    /// First-Come-First-Served: arrival order, untouched.
    pub fn fcfs(&self) -> SimulationResult {
        self.run(Algorithm::Fcfs, Direction::default())
    }

    /// Shortest-Seek-Time-First.
    pub fn sstf(&self) -> SimulationResult {
        self.run(Algorithm::Sstf, Direction::default())
    }

    /// SCAN (elevator).
    pub fn scan(&self, direction: Direction) -> SimulationResult {
        self.run(Algorithm::Scan, direction)
    }

    /// Circular SCAN.
    pub fn c_scan(&self, direction: Direction) -> SimulationResult {
        self.run(Algorithm::CScan, direction)
    }

    /// LOOK.
    pub fn look(&self, direction: Direction) -> SimulationResult {
        self.run(Algorithm::Look, direction)
    }

    /// Circular LOOK.
    pub fn c_look(&self, direction: Direction) -> SimulationResult {
        self.run(Algorithm::CLook, direction)
    }

    /// Run a policy. `direction` is ignored by FCFS and SSTF.
    pub fn run(&self, algorithm: Algorithm, direction: Direction) -> SimulationResult {
        let (sequence, waypoints) = match algorithm.strategy() {
            Strategy::Arrival => (self.requests.clone(), Vec::new()),
            Strategy::NearestFirst => (self.nearest_first(), Vec::new()),
            Strategy::Sweep(sweep) => self.sweep(sweep, direction),
        };
        trace!(%algorithm, ?sequence, ?waypoints, "service order");

        let result = SimulationResult::new(
            algorithm,
            sequence,
            waypoints,
            self.requests.len(),
            self.initial_position,
        );
        debug!(
            %algorithm,
            %direction,
            requests = self.requests.len(),
            total_seek_time = result.total_seek_time,
            "simulation complete"
        );
        result
    }

    /// Run a policy selected by name.
    ///
    /// Names are case-insensitive; `CSCAN` and `CLOOK` are accepted as well
    /// as the hyphenated spellings.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnknownAlgorithm` if the name matches no policy.
    pub fn simulate(&self, algorithm: &str, direction: Direction) -> Result<SimulationResult> {
        let algorithm: Algorithm = algorithm.parse()?;
        Ok(self.run(algorithm, direction))
    }

    /// Run every policy, in canonical order.
    pub fn compare(&self, direction: Direction) -> Vec<SimulationResult> {
        Algorithm::ALL
            .iter()
            .map(|&algorithm| self.run(algorithm, direction))
            .collect()
    }

    /// Greedy nearest-neighbor order.
    ///
    /// Ties on distance go to the lower track, not to the request that
    /// arrived first: from head 50, `[60, 40]` is serviced as `[40, 60]`.
    /// Visited requests are masked out rather than removed, so the request
    /// list is never reshuffled.
    fn nearest_first(&self) -> Vec<Track> {
        let mut visited = vec![false; self.requests.len()];
        let mut sequence = Vec::with_capacity(self.requests.len());
        let mut head = self.initial_position;

        while let Some((idx, track)) = self
            .requests
            .iter()
            .enumerate()
            .filter(|(i, _)| !visited[*i])
            .map(|(i, &t)| (i, t))
            .min_by_key(|&(_, t)| (t.abs_diff(head), t))
        {
            visited[idx] = true;
            sequence.push(track);
            head = track;
        }

        sequence
    }

    /// Directional sweep shared by SCAN, C-SCAN, LOOK and C-LOOK.
    ///
    /// Moving right, requests at or past the head are serviced first;
    /// moving left, requests at or before the head are. The remaining side
    /// is then reached either by reversing or by wrapping around, with edge
    /// waypoints inserted when the sweep runs to the disk boundary.
    fn sweep(&self, sweep: Sweep, direction: Direction) -> Ordering {
        let mut sorted = self.requests.clone();
        sorted.sort_unstable();

        let head = self.initial_position;
        let (mut first, mut rest) = match direction {
            Direction::Right => {
                let split = sorted.partition_point(|&t| t < head);
                let ahead = sorted.split_off(split);
                (ahead, sorted)
            }
            Direction::Left => {
                let split = sorted.partition_point(|&t| t <= head);
                let ahead = sorted.split_off(split);
                (sorted, ahead)
            }
        };
        arrange(&mut first, direction);

        let mut sequence = first;
        let mut waypoints = Vec::new();
        if rest.is_empty() {
            return (sequence, waypoints);
        }

        if sweep.to_edge {
            waypoints.push(sequence.len());
            sequence.push(self.edge(direction));
        }

        let onward = if sweep.wrap {
            if sweep.to_edge {
                waypoints.push(sequence.len());
                sequence.push(self.edge(direction.reversed()));
            }
            direction
        } else {
            direction.reversed()
        };
        arrange(&mut rest, onward);
        sequence.extend(rest);

        (sequence, waypoints)
    }

    /// Boundary track reached when travelling in `direction`.
    fn edge(&self, direction: Direction) -> Track {
        match direction {
            Direction::Right => self.geometry.last_track(),
            Direction::Left => self.geometry.first_track(),
        }
    }
}

/// Put ascending tracks into travel order for `direction`.
fn arrange(tracks: &mut [Track], direction: Direction) {
    if direction == Direction::Left {
        tracks.reverse();
    }
}

/// Pick the result with the lowest total seek time; the first one wins ties.
pub fn best(results: &[SimulationResult]) -> Option<&SimulationResult> {
    results.iter().reduce(|best, candidate| {
        if candidate.total_seek_time < best.total_seek_time {
            candidate
        } else {
            best
        }
    })
}

/// Validate input and run one policy selected by name.
///
/// The name is resolved before the requests are checked, so an unknown
/// policy is always reported as `UnknownAlgorithm`.
///
/// # Example
///
/// ```
/// use disk_sched::scheduler::{simulate, Direction};
///
/// let result = simulate(&[98, 183, 37, 122, 14, 124, 65, 67], 53, 200, "FCFS", Direction::Right)?;
/// assert_eq!(result.total_seek_time, 640);
/// # Ok::<(), disk_sched::Error>(())
/// ```
pub fn simulate(
    requests: &[Track],
    initial_position: Track,
    disk_size: Track,
    algorithm: &str,
    direction: Direction,
) -> Result<SimulationResult> {
    let algorithm: Algorithm = algorithm.parse()?;
    let scheduler = DiskScheduler::new(requests, initial_position, disk_size)?;
    Ok(scheduler.run(algorithm, direction))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn textbook() -> DiskScheduler {
        DiskScheduler::new(vec![98, 183, 37, 122, 14, 124, 65, 67], 53, 200).unwrap()
    }

    #[test]
    fn test_sstf_prefers_lower_track_on_tie() {
        let scheduler = DiskScheduler::new(vec![60, 40], 50, 100).unwrap();
        assert_eq!(scheduler.sstf().sequence, vec![40, 60]);
    }

    #[test]
    fn test_sstf_handles_duplicates() {
        let scheduler = DiskScheduler::new(vec![10, 10, 12], 11, 100).unwrap();
        assert_eq!(scheduler.sstf().sequence, vec![10, 10, 12]);
    }

    #[test]
    fn test_sweep_waypoint_indices() {
        let scheduler = textbook();
        assert_eq!(scheduler.scan(Direction::Right).waypoints, vec![6]);
        assert_eq!(scheduler.c_scan(Direction::Right).waypoints, vec![6, 7]);
        assert!(scheduler.look(Direction::Right).waypoints.is_empty());
        assert!(scheduler.c_look(Direction::Right).waypoints.is_empty());
    }

    #[test]
    fn test_request_at_head_goes_first_either_way() {
        let scheduler = DiskScheduler::new(vec![30, 50, 70], 50, 100).unwrap();
        assert_eq!(scheduler.look(Direction::Right).sequence, vec![50, 70, 30]);
        assert_eq!(scheduler.look(Direction::Left).sequence, vec![50, 30, 70]);
    }

    #[test]
    fn test_best_picks_first_minimum() {
        let results = textbook().compare(Direction::Right);
        let winner = best(&results).unwrap();
        assert_eq!(winner.algorithm, Algorithm::Sstf);
        assert!(best(&[]).is_none());
    }
}

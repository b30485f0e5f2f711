//! Simulation results and derived performance metrics.

use serde::{Deserialize, Serialize};

use crate::config::SimulationConfig;
use crate::core::geometry::Track;
use crate::core::seek::{SeekAccount, SeekOperation};
use crate::scheduler::policy::Algorithm;

/// Round to two decimal places.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Outcome of one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Policy that produced this result.
    pub algorithm: Algorithm,
    /// Tracks in the order the head visits them, edge waypoints included.
    pub sequence: Vec<Track>,
    /// Sum of all seek distances.
    pub total_seek_time: u128,
    /// `total_seek_time / sequence.len()`, two decimals; 0 when empty.
    pub average_seek_time: f64,
    /// Every head movement, in order.
    pub seek_operations: Vec<SeekOperation>,
    /// Number of requests submitted.
    pub total_requests: usize,
    /// Head position before the first movement.
    pub initial_position: Track,
    /// Indices into `sequence` that are edge waypoints rather than requests.
    #[serde(default)]
    pub waypoints: Vec<usize>,
}

impl SimulationResult {
    pub(crate) fn new(
        algorithm: Algorithm,
        sequence: Vec<Track>,
        waypoints: Vec<usize>,
        total_requests: usize,
        initial_position: Track,
    ) -> Self {
        let account = SeekAccount::walk(initial_position, &sequence);
        Self {
            algorithm,
            average_seek_time: round2(account.average()),
            total_seek_time: account.total,
            seek_operations: account.operations,
            sequence,
            total_requests,
            initial_position,
            waypoints,
        }
    }

    /// The service order with edge waypoints removed.
    pub fn serviced(&self) -> Vec<Track> {
        self.sequence
            .iter()
            .enumerate()
            .filter(|(i, _)| !self.waypoints.contains(i))
            .map(|(_, &track)| track)
            .collect()
    }

    /// Track the head rests on after the run.
    pub fn final_position(&self) -> Track {
        self.sequence
            .last()
            .copied()
            .unwrap_or(self.initial_position)
    }

    /// Compute summary statistics for this run.
    pub fn metrics(&self) -> PerformanceMetrics {
        PerformanceMetrics::from_result(self)
    }
}

/// Summary statistics over a result's head movements.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceMetrics {
    /// Longest single movement.
    pub longest_seek: u64,
    /// Shortest single movement.
    pub shortest_seek: u64,
    /// Times the head changed travel direction, wrap-around returns included.
    pub direction_changes: usize,
    /// Edge waypoints visited that were not requests.
    pub edge_visits: usize,
    /// Requests actually serviced.
    pub requests_serviced: usize,
}

impl PerformanceMetrics {
    pub fn from_result(result: &SimulationResult) -> Self {
        let distances = result.seek_operations.iter().map(SeekOperation::distance);

        // Sign of each non-zero movement; zero-length seeks keep the heading.
        let mut direction_changes = 0;
        let mut heading: Option<bool> = None;
        for op in &result.seek_operations {
            if op.to == op.from {
                continue;
            }
            let upward = op.to > op.from;
            if heading.is_some_and(|h| h != upward) {
                direction_changes += 1;
            }
            heading = Some(upward);
        }

        Self {
            longest_seek: distances.clone().max().unwrap_or(0),
            shortest_seek: distances.min().unwrap_or(0),
            direction_changes,
            edge_visits: result.waypoints.len(),
            requests_serviced: result
                .sequence
                .len()
                .saturating_sub(result.waypoints.len()),
        }
    }
}

/// A configured request together with its result and metrics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationResponse {
    pub request: SimulationConfig,
    pub result: SimulationResult,
    pub performance_metrics: PerformanceMetrics,
}

impl SimulationResponse {
    pub fn new(request: SimulationConfig, result: SimulationResult) -> Self {
        let performance_metrics = result.metrics();
        Self {
            request,
            result,
            performance_metrics,
        }
    }
}

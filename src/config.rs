//! Configuration types for disk-sched.
//!
//! A [`SimulationConfig`] is the request record accepted at the boundary
//! (CLI flags or a JSON file). It carries names as plain strings; they are
//! only resolved to typed values when the simulation runs.

use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::geometry::{DEFAULT_DISK_SIZE, Track};
use crate::error::{Error, Result};
use crate::scheduler::{Algorithm, Direction, DiskScheduler, SimulationResponse};

fn default_disk_size() -> Track {
    DEFAULT_DISK_SIZE
}

fn default_direction() -> String {
    Direction::default().as_str().to_string()
}

/// Simulation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Track requests in arrival order.
    pub requests: Vec<Track>,
    /// Initial head position.
    pub initial_position: Track,
    /// Policy name: FCFS, SSTF, SCAN, C-SCAN, LOOK or C-LOOK.
    pub algorithm: String,
    /// Total number of tracks.
    #[serde(default = "default_disk_size")]
    pub disk_size: Track,
    /// Initial direction for SCAN/C-SCAN/LOOK/C-LOOK.
    #[serde(default = "default_direction")]
    pub direction: String,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            requests: Vec::new(),
            initial_position: 0,
            algorithm: Algorithm::Fcfs.as_str().to_string(),
            disk_size: DEFAULT_DISK_SIZE,
            direction: default_direction(),
        }
    }
}

impl SimulationConfig {
    /// Create a config for the given requests and head position.
    pub fn new(requests: impl Into<Vec<Track>>, initial_position: Track) -> Self {
        Self {
            requests: requests.into(),
            initial_position,
            ..Default::default()
        }
    }

    /// Set the policy name.
    pub fn algorithm(mut self, algorithm: impl Into<String>) -> Self {
        self.algorithm = algorithm.into();
        self
    }

    /// Set the number of tracks.
    pub fn disk_size(mut self, disk_size: Track) -> Self {
        self.disk_size = disk_size;
        self
    }

    /// Set the initial direction.
    pub fn direction(mut self, direction: impl Into<String>) -> Self {
        self.direction = direction.into();
        self
    }

    /// Parse a config from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a config from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Resolve the direction string.
    pub fn parsed_direction(&self) -> Result<Direction> {
        Direction::from_str(&self.direction)
    }

    /// Build a scheduler over this config's requests.
    ///
    /// Rejects a disk with no tracks before looking at any request.
    pub fn scheduler(&self) -> Result<DiskScheduler> {
        if self.disk_size < 1 {
            return Err(Error::Config(format!(
                "disk_size must be at least 1, got {}",
                self.disk_size
            )));
        }
        DiskScheduler::new(self.requests.clone(), self.initial_position, self.disk_size)
    }

    /// Run the configured simulation.
    ///
    /// The policy name is resolved first, then the direction, then the
    /// requests are validated.
    pub fn run(&self) -> Result<SimulationResponse> {
        let algorithm: Algorithm = self.algorithm.parse()?;
        let direction = self.parsed_direction()?;
        let result = self.scheduler()?.run(algorithm, direction);
        Ok(SimulationResponse::new(self.clone(), result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_json() {
        let config = SimulationConfig::from_json_str(
            r#"{"requests": [1, 2, 3], "initial_position": 0, "algorithm": "LOOK"}"#,
        )
        .unwrap();
        assert_eq!(config.disk_size, 200);
        assert_eq!(config.direction, "right");
        assert_eq!(config.algorithm, "LOOK");
    }

    #[test]
    fn test_missing_field_is_json_error() {
        let err = SimulationConfig::from_json_str(r#"{"requests": []}"#).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_builder() {
        let config = SimulationConfig::new(vec![5, 6], 3)
            .algorithm("c-scan")
            .disk_size(10)
            .direction("left");
        assert_eq!(config.requests, vec![5, 6]);
        assert_eq!(config.initial_position, 3);
        assert_eq!(config.algorithm, "c-scan");
        assert_eq!(config.disk_size, 10);
        assert_eq!(config.parsed_direction().unwrap(), Direction::Left);
    }

    #[test]
    fn test_zero_disk_size_is_config_error() {
        let config = SimulationConfig::new(vec![], 0).disk_size(0);
        assert!(matches!(config.run(), Err(Error::Config(_))));
    }

    #[test]
    fn test_bad_direction_is_rejected() {
        let config = SimulationConfig::new(vec![10], 5)
            .algorithm("SCAN")
            .direction("sideways");
        assert!(matches!(config.run(), Err(Error::InvalidDirection(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = SimulationConfig::from_json_file("/nonexistent/disk-sched.json").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}

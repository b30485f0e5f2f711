//! Disk geometry and request validation.
//!
//! A disk is modelled as a single linear range of tracks `[0, disk_size)`.
//! Every request and every head position must fall inside that range; the
//! check runs once, before any policy looks at the requests.

use crate::error::{Error, Result};

/// A track index on the disk surface.
///
/// Signed so that negative inputs can be reported as out of bounds rather
/// than rejected by the type system at the boundary.
pub type Track = i64;

/// Default number of tracks when none is given.
pub const DEFAULT_DISK_SIZE: Track = 200;

/// Linear disk geometry: tracks `0..disk_size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiskGeometry {
    disk_size: Track,
}

impl DiskGeometry {
    /// Create a geometry with the given number of tracks.
    pub fn new(disk_size: Track) -> Self {
        Self { disk_size }
    }

    /// Total number of tracks.
    pub fn disk_size(&self) -> Track {
        self.disk_size
    }

    /// Lowest addressable track (the inner edge).
    pub fn first_track(&self) -> Track {
        0
    }

    /// Highest addressable track (the outer edge).
    pub fn last_track(&self) -> Track {
        self.disk_size - 1
    }

    /// Check whether a track lies in `[0, disk_size)`.
    pub fn contains(&self, track: Track) -> bool {
        (0..self.disk_size).contains(&track)
    }

    /// Fail with `OutOfBounds` if `track` is not addressable.
    pub fn check(&self, track: Track) -> Result<()> {
        if self.contains(track) {
            Ok(())
        } else {
            Err(Error::OutOfBounds {
                value: track,
                disk_size: self.disk_size,
            })
        }
    }

    /// Validate a full simulation input.
    ///
    /// Requests are checked in order, then the initial head position, so the
    /// first offending request is the one reported.
    pub fn validate(&self, requests: &[Track], initial_position: Track) -> Result<()> {
        for &track in requests {
            self.check(track)?;
        }
        self.check(initial_position)
    }
}

impl Default for DiskGeometry {
    fn default() -> Self {
        Self::new(DEFAULT_DISK_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges_are_valid() {
        let geometry = DiskGeometry::new(200);
        assert!(geometry.check(0).is_ok());
        assert!(geometry.check(199).is_ok());
        assert_eq!(geometry.first_track(), 0);
        assert_eq!(geometry.last_track(), 199);
    }

    #[test]
    fn test_just_outside_is_rejected() {
        let geometry = DiskGeometry::new(200);
        assert!(matches!(
            geometry.check(-1),
            Err(Error::OutOfBounds { value: -1, disk_size: 200 })
        ));
        assert!(matches!(
            geometry.check(200),
            Err(Error::OutOfBounds { value: 200, .. })
        ));
    }

    #[test]
    fn test_validate_reports_first_bad_request() {
        let geometry = DiskGeometry::new(100);
        let err = geometry.validate(&[10, 150, 300], 5).unwrap_err();
        assert!(matches!(err, Error::OutOfBounds { value: 150, .. }));
        assert_eq!(err.to_string(), "track 150 is out of bounds (0-99)");
    }

    #[test]
    fn test_validate_checks_initial_position() {
        let geometry = DiskGeometry::new(100);
        assert!(matches!(
            geometry.validate(&[10, 20], 100),
            Err(Error::OutOfBounds { value: 100, .. })
        ));
    }

    #[test]
    fn test_zero_sized_disk_rejects_everything() {
        let geometry = DiskGeometry::new(0);
        assert!(geometry.validate(&[], 0).is_err());
    }
}

//! Random request workloads.
//!
//! Generation is seeded, so the same `(count, disk_size, seed)` always
//! yields the same requests.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::core::geometry::{DiskGeometry, Track};

/// Generate `count` requests uniformly over the disk's tracks.
///
/// Returns an empty list for a disk with no tracks.
pub fn random_requests(count: usize, disk_size: Track, seed: u64) -> Vec<Track> {
    if disk_size < 1 {
        return Vec::new();
    }
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count).map(|_| rng.gen_range(0..disk_size)).collect()
}

/// Pick a random head position on the disk.
pub fn random_position(geometry: DiskGeometry, seed: u64) -> Track {
    if geometry.disk_size() < 1 {
        return 0;
    }
    let mut rng = StdRng::seed_from_u64(seed.wrapping_add(1));
    rng.gen_range(geometry.first_track()..=geometry.last_track())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic_per_seed() {
        assert_eq!(random_requests(20, 200, 7), random_requests(20, 200, 7));
        assert_ne!(random_requests(20, 200, 7), random_requests(20, 200, 8));
    }

    #[test]
    fn test_requests_in_bounds() {
        let geometry = DiskGeometry::new(50);
        let requests = random_requests(500, 50, 1);
        assert_eq!(requests.len(), 500);
        assert!(geometry.validate(&requests, random_position(geometry, 1)).is_ok());
    }

    #[test]
    fn test_random_position_deterministic_and_on_disk() {
        let geometry = DiskGeometry::new(200);
        for seed in 0..100 {
            let position = random_position(geometry, seed);
            assert_eq!(position, random_position(geometry, seed));
            assert!(geometry.contains(position));
        }
        assert_eq!(random_position(DiskGeometry::new(1), 9), 0);
        assert_eq!(random_position(DiskGeometry::new(0), 9), 0);
    }

    #[test]
    fn test_empty_disk() {
        assert!(random_requests(10, 0, 1).is_empty());
    }
}

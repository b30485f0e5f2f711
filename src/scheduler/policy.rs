//! Scheduling policies and how each one orders requests.
//!
//! The six classical policies collapse into three orderings. SCAN, C-SCAN,
//! LOOK and C-LOOK are all the same directional sweep, differing only in
//! whether the head runs out to the disk edge and whether it reverses or
//! wraps around once the first side is exhausted.
//!
//! ```text
//!              extend to edge     wrap around
//!   SCAN            yes               no
//!   C-SCAN          yes               yes
//!   LOOK            no                no
//!   C-LOOK          no                yes
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A disk scheduling policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    /// First-Come-First-Served.
    #[serde(rename = "FCFS")]
    Fcfs,
    /// Shortest-Seek-Time-First.
    #[serde(rename = "SSTF")]
    Sstf,
    /// Elevator.
    #[serde(rename = "SCAN")]
    Scan,
    /// Circular SCAN.
    #[serde(rename = "C-SCAN")]
    CScan,
    /// SCAN without the edge visit.
    #[serde(rename = "LOOK")]
    Look,
    /// C-SCAN without the edge visits.
    #[serde(rename = "C-LOOK")]
    CLook,
}

impl Algorithm {
    /// All policies in canonical order.
    pub const ALL: [Algorithm; 6] = [
        Self::Fcfs,
        Self::Sstf,
        Self::Scan,
        Self::CScan,
        Self::Look,
        Self::CLook,
    ];

    /// Normalized policy name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fcfs => "FCFS",
            Self::Sstf => "SSTF",
            Self::Scan => "SCAN",
            Self::CScan => "C-SCAN",
            Self::Look => "LOOK",
            Self::CLook => "C-LOOK",
        }
    }

    /// How this policy orders its requests.
    pub fn strategy(&self) -> Strategy {
        match self {
            Self::Fcfs => Strategy::Arrival,
            Self::Sstf => Strategy::NearestFirst,
            Self::Scan => Strategy::Sweep(Sweep {
                to_edge: true,
                wrap: false,
            }),
            Self::CScan => Strategy::Sweep(Sweep {
                to_edge: true,
                wrap: true,
            }),
            Self::Look => Strategy::Sweep(Sweep {
                to_edge: false,
                wrap: false,
            }),
            Self::CLook => Strategy::Sweep(Sweep {
                to_edge: false,
                wrap: true,
            }),
        }
    }

    /// Whether the direction argument affects this policy.
    pub fn is_directional(&self) -> bool {
        matches!(self.strategy(), Strategy::Sweep(_))
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    /// Case-insensitive; C-SCAN and C-LOOK also accept `CSCAN` / `CLOOK`.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "FCFS" => Ok(Self::Fcfs),
            "SSTF" => Ok(Self::Sstf),
            "SCAN" => Ok(Self::Scan),
            "C-SCAN" | "CSCAN" => Ok(Self::CScan),
            "LOOK" => Ok(Self::Look),
            "C-LOOK" | "CLOOK" => Ok(Self::CLook),
            _ => Err(Error::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// Initial sweep direction for directional policies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Toward higher track numbers.
    #[default]
    Right,
    /// Toward track 0.
    Left,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Right => "right",
            Self::Left => "left",
        }
    }

    /// The other direction.
    pub fn reversed(&self) -> Self {
        match self {
            Self::Right => Self::Left,
            Self::Left => Self::Right,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "right" => Ok(Self::Right),
            "left" => Ok(Self::Left),
            _ => Err(Error::InvalidDirection(s.to_string())),
        }
    }
}

/// Parameters of a directional sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sweep {
    /// Travel to the disk edge before turning around or wrapping.
    pub to_edge: bool,
    /// Jump back to the far side and keep the same direction,
    /// instead of reversing.
    pub wrap: bool,
}

/// Ordering strategy behind a policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Service requests exactly as they arrived.
    Arrival,
    /// Greedy nearest-neighbor selection.
    NearestFirst,
    /// Directional sweep over the sorted requests.
    Sweep(Sweep),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_algorithm_parsing_is_case_insensitive() {
        assert_eq!("fcfs".parse::<Algorithm>().unwrap(), Algorithm::Fcfs);
        assert_eq!("Sstf".parse::<Algorithm>().unwrap(), Algorithm::Sstf);
        assert_eq!("c-scan".parse::<Algorithm>().unwrap(), Algorithm::CScan);
        assert_eq!("CSCAN".parse::<Algorithm>().unwrap(), Algorithm::CScan);
        assert_eq!("clook".parse::<Algorithm>().unwrap(), Algorithm::CLook);
        assert_eq!("C-Look".parse::<Algorithm>().unwrap(), Algorithm::CLook);
    }

    #[test]
    fn test_unknown_algorithm() {
        let err = "BOGUS".parse::<Algorithm>().unwrap_err();
        assert!(matches!(err, Error::UnknownAlgorithm(ref name) if name == "BOGUS"));
    }

    #[test]
    fn test_names_round_trip() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.as_str().parse::<Algorithm>().unwrap(), algorithm);
        }
    }

    #[test]
    fn test_sweep_flags() {
        assert_eq!(
            Algorithm::CLook.strategy(),
            Strategy::Sweep(Sweep {
                to_edge: false,
                wrap: true
            })
        );
        assert!(!Algorithm::Fcfs.is_directional());
        assert!(!Algorithm::Sstf.is_directional());
        assert!(Algorithm::Scan.is_directional());
    }

    #[test]
    fn test_direction_parsing() {
        assert_eq!("RIGHT".parse::<Direction>().unwrap(), Direction::Right);
        assert_eq!("Left".parse::<Direction>().unwrap(), Direction::Left);
        assert!(matches!(
            "up".parse::<Direction>(),
            Err(Error::InvalidDirection(_))
        ));
        assert_eq!(Direction::Right.reversed(), Direction::Left);
    }
}

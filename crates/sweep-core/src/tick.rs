//! Simulation time model.
//!
//! Time is a monotonically increasing `Tick` counter; one tick is one
//! synchronized grid step applied to every agent.  There is no wall-clock
//! mapping — coverage runs are measured in steps, not seconds.

use std::fmt;

/// An absolute simulation tick counter.
///
/// Stored as `u64`; routes are at most a few thousand cells, so overflow is
/// not a practical concern, but the wider type keeps arithmetic with the
/// safety cap trivially safe.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

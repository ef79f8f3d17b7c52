use core::fmt;

use hal::{RawSample, Vector3d};

/// Per-axis bias correction in raw sensor counts
///
/// The correction is added to the raw reading before any unit conversion,
/// so it stays valid whatever sensitivity the readings are later scaled by.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalibrationOffset {
    counts: Vector3d,
}

impl CalibrationOffset {
    /// Offset cancelling the given per-axis centre values
    pub fn from_centre(centre: Vector3d) -> Self {
        // Subtract from zero so a centre of 0 does not turn into -0
        Self { counts: centre.map(|c| 0.0 - c) }
    }

    pub fn zero() -> Self {
        Self { counts: Vector3d::zeros() }
    }

    pub fn counts(&self) -> Vector3d {
        self.counts
    }

    pub fn is_finite(&self) -> bool {
        self.counts.iter().all(|v| v.is_finite())
    }

    /// Corrected reading in raw counts
    pub fn apply(&self, raw: RawSample) -> Vector3d {
        raw.to_vector() + self.counts
    }
}

impl Default for CalibrationOffset {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for CalibrationOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3}, {:.3})", self.counts.x, self.counts.y, self.counts.z)
    }
}

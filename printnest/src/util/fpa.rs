use std::cmp::Ordering;

/// Absolute tolerance (in mm) under which two coordinates are considered equal.
pub const TOLERANCE: f32 = 1e-3;

/// Coordinate compared with [`TOLERANCE`], see [`float_cmp::approx_eq!()`].
/// Values closer than the tolerance are equal, all others are ordered as plain floats.
#[derive(Debug, Clone, Copy)]
pub struct FPA(pub f32);

impl PartialEq for FPA {
    fn eq(&self, other: &FPA) -> bool {
        float_cmp::approx_eq!(f32, self.0, other.0, epsilon = TOLERANCE, ulps = 4)
    }
}

impl PartialOrd for FPA {
    fn partial_cmp(&self, other: &FPA) -> Option<Ordering> {
        if self == other {
            Some(Ordering::Equal)
        } else {
            self.0.partial_cmp(&other.0)
        }
    }
}

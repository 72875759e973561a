use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Debug, PartialEq)]
/// Possible relations between two geometric entities A and B.
/// A is `GeoRelation` to B
pub enum GeoRelation {
    /// A ∩ B ≠ ∅ and neither A ⊆ B nor B ⊆ A
    Intersecting,
    /// A ⊆ B
    Enclosed,
    /// B ⊆ A
    Surrounding,
    /// A ∩ B = ∅
    Disjoint,
}

/// Orientation of a placed item. Only quarter turns are allowed on a print sheet.
/// Serialized as the rotation angle in degrees (`0` or `90`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
pub enum Rotation {
    #[default]
    None,
    Quarter,
}

impl Rotation {
    pub fn degrees(self) -> u16 {
        match self {
            Rotation::None => 0,
            Rotation::Quarter => 90,
        }
    }

    /// Combines two consecutive rotations. Two quarter turns bring a rectangle back to its original footprint.
    pub fn compose(self, other: Rotation) -> Rotation {
        match self == other {
            true => Rotation::None,
            false => Rotation::Quarter,
        }
    }

    /// Applies the rotation to a `(width, height)` footprint
    pub fn apply(self, (width, height): (f32, f32)) -> (f32, f32) {
        match self {
            Rotation::None => (width, height),
            Rotation::Quarter => (height, width),
        }
    }
}

impl From<Rotation> for u16 {
    fn from(r: Rotation) -> Self {
        r.degrees()
    }
}

impl TryFrom<u16> for Rotation {
    type Error = String;

    fn try_from(degrees: u16) -> Result<Self, Self::Error> {
        match degrees {
            0 => Ok(Rotation::None),
            90 => Ok(Rotation::Quarter),
            d => Err(format!("unsupported rotation: {d}°, only 0° and 90° are allowed")),
        }
    }
}

impl Display for Rotation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}°", self.degrees())
    }
}

use std::fmt::{Display, Formatter};

use crate::geometry::{CollidesWith, GeoRelation};
use crate::util::FPA;
use anyhow::Result;
use anyhow::ensure;
use serde::{Deserialize, Serialize};

///Axis-aligned rectangle in sheet coordinates (mm).
///The origin is the top-left corner of the sheet, `y` grows downwards.
#[derive(Clone, Debug, PartialEq, Copy, Serialize, Deserialize)]
pub struct Rect {
    pub x_min: f32,
    pub y_min: f32,
    pub x_max: f32,
    pub y_max: f32,
}

impl Rect {
    pub fn try_new(x_min: f32, y_min: f32, x_max: f32, y_max: f32) -> Result<Self> {
        ensure!(
            x_min < x_max && y_min < y_max,
            "degenerate rectangle: ({x_min}, {y_min}) -> ({x_max}, {y_max})"
        );
        Ok(Rect {
            x_min,
            y_min,
            x_max,
            y_max,
        })
    }

    /// Creates a rectangle from its top-left corner and its dimensions.
    pub fn from_corner(x: f32, y: f32, width: f32, height: f32) -> Result<Self> {
        Rect::try_new(x, y, x + width, y + height)
    }

    /// How `self` relates to `other`, with a tolerance for floating point noise.
    /// Rectangles that touch are `Disjoint`, near-equal edges count as containment.
    pub fn relation_to(&self, other: Rect) -> GeoRelation {
        match (
            self.collides_with(&other),
            self.contains(&other),
            other.contains(self),
        ) {
            (false, _, _) => GeoRelation::Disjoint,
            (true, true, _) => GeoRelation::Surrounding,
            (true, false, true) => GeoRelation::Enclosed,
            (true, false, false) => GeoRelation::Intersecting,
        }
    }

    /// True if `other` lies entirely within `self` (within tolerance).
    pub fn encloses(&self, other: &Rect) -> bool {
        matches!(self.relation_to(*other), GeoRelation::Surrounding)
    }

    fn contains(&self, other: &Rect) -> bool {
        [
            (other.x_min, self.x_min),
            (other.y_min, self.y_min),
            (self.x_max, other.x_max),
            (self.y_max, other.y_max),
        ]
        .into_iter()
        .all(|(hi, lo)| FPA(hi) >= FPA(lo))
    }

    /// The rectangle grown by `d` on every side (shrunk for negative `d`).
    /// None if nothing would be left of it.
    pub fn inflated(&self, d: f32) -> Option<Rect> {
        Rect::try_new(self.x_min - d, self.y_min - d, self.x_max + d, self.y_max + d).ok()
    }

    pub fn width(&self) -> f32 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f32 {
        self.y_max - self.y_min
    }

    pub fn area(&self) -> f32 {
        self.width() * self.height()
    }
}

impl CollidesWith<Rect> for Rect {
    /// Interiors overlap. Rectangles sharing an edge do not collide.
    #[inline(always)]
    fn collides_with(&self, other: &Rect) -> bool {
        let overlap_x = f32::min(self.x_max, other.x_max) - f32::max(self.x_min, other.x_min);
        let overlap_y = f32::min(self.y_max, other.y_max) - f32::max(self.y_min, other.y_min);
        FPA(overlap_x) > FPA(0.0) && FPA(overlap_y) > FPA(0.0)
    }
}

impl Display for Rect {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[({:.1}, {:.1}) -> ({:.1}, {:.1})]",
            self.x_min, self.y_min, self.x_max, self.y_max
        )
    }
}

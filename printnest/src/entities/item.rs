use crate::geometry::Rotation;
use serde::{Deserialize, Serialize};

/// A single piece to be printed, as supplied by the caller.
/// Dimensions are in millimeters, in the orientation the design was delivered in.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DesignItem {
    /// Unique identifier, a generated one is assigned during import if left empty
    #[serde(default)]
    pub id: String,
    /// Display label, not used for placement
    #[serde(default)]
    pub name: String,
    pub width: f32,
    pub height: f32,
    /// Items with a higher priority are placed first
    #[serde(default)]
    pub priority: f32,
}

impl DesignItem {
    /// Height to width ratio above which a tall, narrow piece is flagged as a rotation candidate
    pub const ROTATION_HINT_RATIO: f32 = 1.5;

    pub fn new(id: impl Into<String>, name: impl Into<String>, width: f32, height: f32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            width,
            height,
            priority: 0.0,
        }
    }

    pub fn with_priority(mut self, priority: f32) -> Self {
        self.priority = priority;
        self
    }

    /// Tall, narrow pieces are hinted as rotation candidates.
    /// The packer decides independently whether to rotate.
    pub fn should_rotate(&self) -> bool {
        self.height > self.width * Self::ROTATION_HINT_RATIO
    }
}

/// Internal, validated representation of a [`DesignItem`].
#[derive(Clone, Debug)]
pub struct Item {
    /// Consecutive index of the item within its [`Instance`](crate::entities::Instance)
    pub id: usize,
    /// Identifier of the [`DesignItem`] this item was imported from
    pub ext_id: String,
    pub name: String,
    /// Width of the item as presented to the packer (after `pre_rotation`)
    pub width: f32,
    /// Height of the item as presented to the packer (after `pre_rotation`)
    pub height: f32,
    pub priority: f32,
    /// Rotation applied to the original design before packing
    pub pre_rotation: Rotation,
}

impl Item {
    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    /// Footprint of the item when placed with `rotation` on top of its `pre_rotation`
    pub fn footprint(&self, rotation: Rotation) -> (f32, f32) {
        rotation.apply((self.width, self.height))
    }

    /// Returns a copy of the item turned a quarter, keeping track of the applied rotation.
    pub fn rotated(&self) -> Item {
        let (width, height) = self.footprint(Rotation::Quarter);
        Item {
            width,
            height,
            pre_rotation: self.pre_rotation.compose(Rotation::Quarter),
            ..self.clone()
        }
    }
}

use std::path::PathBuf;

use crate::entities::{DesignItem, SheetParams};
use crate::geometry::Rotation;
use serde::{Deserialize, Serialize};

/// External representation of a packing request.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ExtInstance {
    /// Sheet parameters, A4 with 10mm margin and 5mm spacing if not specified
    #[serde(default)]
    pub sheet: SheetParams,
    pub items: Vec<ExtItem>,
}

/// An item is either given with explicit dimensions or as a reference to its design file,
/// whose dimensions have to be resolved before packing.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(untagged)]
pub enum ExtItem {
    Sized(DesignItem),
    File(ExtFileItem),
}

/// A design item whose dimensions are derived from its file.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ExtFileItem {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub priority: f32,
    /// Path to the design file (PDF, SVG or raster image)
    pub file: PathBuf,
    /// Declared MIME type of the file, detected from its name and content if absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
}

/// External representation of a [`PlacedItem`](crate::entities::PlacedItem).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Placement {
    /// Id of the [`DesignItem`] that was placed
    pub id: String,
    /// Top-left corner of the item on the sheet (mm)
    pub x: f32,
    pub y: f32,
    /// Footprint of the item as placed, swapped if rotated
    pub width: f32,
    pub height: f32,
    /// Rotation relative to the original design, in degrees
    pub rotation: Rotation,
    /// 1-based index of the sheet the item landed on
    pub sheet: usize,
}

/// Statistics of a single sheet
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SheetReport {
    pub sheet: usize,
    pub item_count: usize,
    pub efficiency: f32,
}

/// How many of the requested items made it onto a sheet
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PlacementStatus {
    /// Every requested item was placed (also the case for an empty request)
    Complete,
    /// Some, but not all, requested items were placed
    Partial,
    /// Items were requested but none was placed
    NothingPlaced,
}

/// Outcome of one full packing run.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LayoutResult {
    /// True if any item was placed, or if nothing was requested
    pub success: bool,
    pub status: PlacementStatus,
    pub placements: Vec<Placement>,
    pub sheets_used: usize,
    /// Placed item area as a percentage of the area of all used sheets
    pub efficiency: f32,
    /// Placed item area as a percentage of the usable (margin-free) area of all used sheets
    pub usable_efficiency: f32,
    pub sheets: Vec<SheetReport>,
    /// Ids of requested items which were not placed
    pub unplaced: Vec<String>,
    pub message: String,
    pub processing_notes: Vec<String>,
}

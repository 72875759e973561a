use std::fmt::{Display, Formatter};

use crate::geometry::Rect;
use anyhow::{Result, ensure};
use serde::{Deserialize, Serialize};

/// Packing constraints for one packing pass. All values are in millimeters.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct SheetParams {
    pub sheet_width: f32,
    pub sheet_height: f32,
    /// Uniform inset from all four sheet edges
    pub margin: f32,
    /// Minimum gap between any two placed items
    pub spacing: f32,
}

impl SheetParams {
    pub const DEFAULT_MARGIN: f32 = 10.0;
    pub const DEFAULT_SPACING: f32 = 5.0;

    pub fn new(sheet_width: f32, sheet_height: f32, margin: f32, spacing: f32) -> Self {
        Self {
            sheet_width,
            sheet_height,
            margin,
            spacing,
        }
    }

    /// Same margin and spacing, different sheet dimensions
    pub fn with_size(self, size: SheetSize) -> Self {
        let (sheet_width, sheet_height) = size.dimensions();
        Self {
            sheet_width,
            sheet_height,
            ..self
        }
    }

    /// Same sheet dimensions, different margin and spacing
    pub fn with_margins(self, margin: f32, spacing: f32) -> Self {
        Self {
            margin,
            spacing,
            ..self
        }
    }

    pub fn usable_width(&self) -> f32 {
        self.sheet_width - 2.0 * self.margin
    }

    pub fn usable_height(&self) -> f32 {
        self.sheet_height - 2.0 * self.margin
    }

    /// The preset matching the sheet dimensions, if any
    pub fn size(&self) -> Option<SheetSize> {
        SheetSize::ALL
            .into_iter()
            .find(|s| s.dimensions() == (self.sheet_width, self.sheet_height))
    }
}

impl Default for SheetParams {
    fn default() -> Self {
        SheetParams::new(0.0, 0.0, Self::DEFAULT_MARGIN, Self::DEFAULT_SPACING)
            .with_size(SheetSize::A4)
    }
}

/// Common print sheet formats (portrait orientation).
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SheetSize {
    A5,
    A4,
    A3,
    SRA3,
    B2,
}

impl SheetSize {
    pub const ALL: [SheetSize; 5] = [
        SheetSize::A5,
        SheetSize::A4,
        SheetSize::A3,
        SheetSize::SRA3,
        SheetSize::B2,
    ];

    /// Width and height in millimeters
    pub fn dimensions(&self) -> (f32, f32) {
        match self {
            SheetSize::A5 => (148.0, 210.0),
            SheetSize::A4 => (210.0, 297.0),
            SheetSize::A3 => (297.0, 420.0),
            SheetSize::SRA3 => (320.0, 450.0),
            SheetSize::B2 => (500.0, 707.0),
        }
    }
}

impl Display for SheetSize {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}

/// A sheet whose [`SheetParams`] have been validated.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sheet {
    pub params: SheetParams,
    /// The region in which items may be placed: the sheet minus its margins
    pub usable: Rect,
}

impl Sheet {
    /// Validates the parameters. Packing on a sheet without a positive usable area is refused.
    pub fn new(params: SheetParams) -> Result<Self> {
        let SheetParams {
            sheet_width,
            sheet_height,
            margin,
            spacing,
        } = params;
        ensure!(
            sheet_width.is_finite() && sheet_height.is_finite(),
            "sheet dimensions must be finite, got {sheet_width} x {sheet_height}"
        );
        ensure!(
            sheet_width > 0.0 && sheet_height > 0.0,
            "sheet dimensions must be positive, got {sheet_width} x {sheet_height}"
        );
        ensure!(
            margin.is_finite() && margin >= 0.0,
            "margin must be a non-negative number, got {margin}"
        );
        ensure!(
            spacing.is_finite() && spacing >= 0.0,
            "spacing must be a non-negative number, got {spacing}"
        );
        ensure!(
            params.usable_width() > 0.0 && params.usable_height() > 0.0,
            "margin of {margin} leaves no usable area on a {sheet_width} x {sheet_height} sheet"
        );
        let usable = Rect::try_new(
            margin,
            margin,
            sheet_width - margin,
            sheet_height - margin,
        )?;
        Ok(Self { params, usable })
    }

    pub fn area(&self) -> f32 {
        self.params.sheet_width * self.params.sheet_height
    }

    pub fn usable_area(&self) -> f32 {
        self.usable.area()
    }

    pub fn spacing(&self) -> f32 {
        self.params.spacing
    }

    /// True if an item of the given dimensions fits on an empty sheet
    pub fn can_hold(&self, width: f32, height: f32) -> bool {
        width > 0.0
            && height > 0.0
            && self.usable.x_min + width <= self.usable.x_max
            && self.usable.y_min + height <= self.usable.y_max
    }
}

use crate::entities::Layout;

/// Immutable snapshot of a [`Problem`](crate::entities::Problem).
#[derive(Clone, Debug)]
pub struct Solution {
    /// The non-empty sheets, ordered by their index
    pub layouts: Vec<Layout>,
    /// Ids of the valid items that could not be placed
    pub unplaced: Vec<usize>,
    pub notes: Vec<String>,
}

impl Solution {
    pub fn n_placed(&self) -> usize {
        self.layouts.iter().map(|l| l.placed_items.len()).sum()
    }

    pub fn sheets_used(&self) -> usize {
        self.layouts.iter().filter(|l| !l.is_empty()).count()
    }

    pub fn placed_item_area(&self) -> f32 {
        self.layouts.iter().map(|l| l.placed_item_area()).sum()
    }

    /// Placed item area as a percentage of the area of all used sheets
    pub fn efficiency(&self) -> f32 {
        let sheet_area = self
            .layouts
            .iter()
            .filter(|l| !l.is_empty())
            .map(|l| l.sheet.area())
            .sum::<f32>();
        match sheet_area > 0.0 {
            true => self.placed_item_area() / sheet_area * 100.0,
            false => 0.0,
        }
    }

    /// Placed item area as a percentage of the usable area of all used sheets
    pub fn usable_efficiency(&self) -> f32 {
        let usable_area = self
            .layouts
            .iter()
            .filter(|l| !l.is_empty())
            .map(|l| l.sheet.usable_area())
            .sum::<f32>();
        match usable_area > 0.0 {
            true => self.placed_item_area() / usable_area * 100.0,
            false => 0.0,
        }
    }
}

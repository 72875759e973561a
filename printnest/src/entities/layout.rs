use crate::entities::{Item, Sheet};
use crate::geometry::{CollidesWith, Rect, Rotation};
use crate::util::{FPA, assertions};

/// An [`Item`] that has been placed on a [`Layout`].
#[derive(Clone, Debug)]
pub struct PlacedItem {
    pub item_id: usize,
    /// The true footprint of the item on the sheet
    pub rect: Rect,
    /// Rotation applied by the packer, on top of the item's pre-rotation
    pub rotation: Rotation,
    /// The footprint grown by the sheet spacing, other items may not enter it
    pub hazard: Rect,
}

/// One physical sheet with the items placed on it.
///
/// Every placed item registers a hazard: its footprint inflated by the sheet's spacing.
/// Candidates are checked against these hazards before being placed.
#[derive(Clone, Debug)]
pub struct Layout {
    /// 1-based index of the sheet, in the order sheets were opened
    pub index: usize,
    pub sheet: Sheet,
    pub placed_items: Vec<PlacedItem>,
}

impl Layout {
    pub fn new(index: usize, sheet: Sheet) -> Self {
        Layout {
            index,
            sheet,
            placed_items: vec![],
        }
    }

    /// True if `rect` lies within the usable region and does not enter the hazard of any placed item.
    pub fn fits(&self, rect: &Rect) -> bool {
        self.sheet.usable.encloses(rect)
            && !self
                .placed_items
                .iter()
                .any(|pi| pi.hazard.collides_with(rect))
    }

    /// Places an item on the layout at `rect`. Returns the index of the placed item.
    pub fn place_item(&mut self, item: &Item, rect: Rect, rotation: Rotation) -> usize {
        debug_assert!(self.fits(&rect), "item {} does not fit at {rect}", item.id);
        debug_assert!(
            {
                let (w, h) = item.footprint(rotation);
                FPA(rect.width()) == FPA(w) && FPA(rect.height()) == FPA(h)
            },
            "placement does not match the footprint of item {}",
            item.id
        );
        let spacing = self.sheet.spacing();
        let hazard = rect.inflated(spacing).unwrap_or(rect);
        self.placed_items.push(PlacedItem {
            item_id: item.id,
            rect,
            rotation,
            hazard,
        });

        debug_assert!(assertions::layout_is_feasible(self));

        self.placed_items.len() - 1
    }

    /// True if no items are placed
    pub fn is_empty(&self) -> bool {
        self.placed_items.is_empty()
    }

    /// The sum of the footprints of the items placed on the layout
    pub fn placed_item_area(&self) -> f32 {
        self.placed_items.iter().map(|pi| pi.rect.area()).sum()
    }

    /// Placed item area as a percentage of the full sheet area
    pub fn efficiency(&self) -> f32 {
        self.placed_item_area() / self.sheet.area() * 100.0
    }
}

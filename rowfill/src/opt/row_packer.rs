use std::cmp::Reverse;

use itertools::Itertools;
use log::{debug, warn};
use ordered_float::OrderedFloat;
use printnest::entities::{Item, Layout, Problem, Sheet, SheetKey};
use printnest::geometry::{Rect, Rotation};

/// Position of the row-based packer on a sheet.
///
/// Items are laid out left to right in rows. A row is as tall as its tallest item,
/// consecutive items and rows are separated by the sheet spacing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RowCursor {
    pub x: f32,
    pub y: f32,
    /// Height of the tallest item in the current row, zero while the row is empty
    pub row_height: f32,
}

impl RowCursor {
    /// Cursor at the top-left corner of the usable region
    pub fn new(sheet: &Sheet) -> Self {
        Self {
            x: sheet.usable.x_min,
            y: sheet.usable.y_min,
            row_height: 0.0,
        }
    }

    fn row_is_empty(&self) -> bool {
        self.row_height == 0.0
    }
}

/// A valid position for an item, and the cursor after placing it there.
#[derive(Clone, Copy, Debug)]
pub struct RowPlacement {
    pub rect: Rect,
    pub rotation: Rotation,
    pub next: RowCursor,
}

/// Places as many of the unplaced items as possible on the sheet identified by `key`.
/// Items that do not fit are skipped and remain unplaced. Returns the number of items placed.
pub fn pack_sheet(problem: &mut Problem, key: SheetKey, allow_rotation: bool) -> usize {
    let order = item_placement_order(problem.unplaced_items());
    let mut cursor = RowCursor::new(&problem.instance.sheet);
    let mut n_placed = 0;

    for item_id in order {
        let item = problem.instance.item(item_id);
        match search(&problem.layouts[key], item, cursor, allow_rotation) {
            Some(RowPlacement {
                rect,
                rotation,
                next,
            }) => {
                debug!(
                    "[ROWFILL] placing item {} at {rect} ({rotation}) on sheet {}",
                    item.ext_id, problem.layouts[key].index
                );
                problem.place_item(key, item_id, rect, rotation);
                cursor = next;
                n_placed += 1;
            }
            None => debug!(
                "[ROWFILL] item {} ({} x {}) does not fit on sheet {}",
                item.ext_id, item.width, item.height, problem.layouts[key].index
            ),
        }
    }
    n_placed
}

/// Searches a position for `item` at the cursor, first in the item's own orientation,
/// then (if allowed) turned a quarter.
pub fn search(
    layout: &Layout,
    item: &Item,
    cursor: RowCursor,
    allow_rotation: bool,
) -> Option<RowPlacement> {
    let rotations = match allow_rotation && item.width != item.height {
        true => vec![Rotation::None, Rotation::Quarter],
        false => vec![Rotation::None],
    };

    rotations.into_iter().find_map(|rotation| {
        let (width, height) = item.footprint(rotation);
        let (rect, next) = row_candidate(&layout.sheet, cursor, width, height)?;
        match layout.fits(&rect) {
            true => Some(RowPlacement {
                rect,
                rotation,
                next,
            }),
            false => {
                warn!(
                    "[ROWFILL] candidate {rect} for item {} collides on sheet {}",
                    item.ext_id, layout.index
                );
                None
            }
        }
    })
}

/// Position for a `width` x `height` footprint at the cursor, wrapping to a new row if the current one is full.
/// The cursor itself is not modified, the cursor after placement is returned alongside the position.
/// The usable edges are hard limits, no tolerance is applied against them.
pub fn row_candidate(
    sheet: &Sheet,
    cursor: RowCursor,
    width: f32,
    height: f32,
) -> Option<(Rect, RowCursor)> {
    let usable = sheet.usable;
    let spacing = sheet.spacing();

    let mut at = cursor;
    if at.x + width > usable.x_max && !at.row_is_empty() {
        //start a new row below the current one
        at = RowCursor {
            x: usable.x_min,
            y: at.y + at.row_height + spacing,
            row_height: 0.0,
        };
    }
    if at.x + width > usable.x_max || at.y + height > usable.y_max {
        return None;
    }

    let rect = Rect::from_corner(at.x, at.y, width, height).ok()?;
    let next = RowCursor {
        x: at.x + width + spacing,
        y: at.y,
        row_height: f32::max(at.row_height, height),
    };
    Some((rect, next))
}

/// Order in which items are offered to the packer:
/// descending priority, then descending area, then the order of the instance.
pub fn item_placement_order<'a>(items: impl Iterator<Item = &'a Item>) -> Vec<usize> {
    items
        .sorted_by_cached_key(|item| {
            (
                Reverse(OrderedFloat(item.priority)),
                Reverse(OrderedFloat(item.area())),
                item.id,
            )
        })
        .map(|item| item.id)
        .collect()
}

use crate::entities::{Instance, Item, Layout, Solution};
use crate::geometry::{Rect, Rotation};
use crate::util::assertions::problem_matches_solution;
use itertools::Itertools;
use slotmap::{SlotMap, new_key_type};

new_key_type! {
    /// Unique key for each [`Layout`] in a [`Problem`]
    pub struct SheetKey;
}

/// Dynamic counterpart of [`Instance`]: the sheets opened so far and the items placed on them.
#[derive(Clone)]
pub struct Problem {
    pub instance: Instance,
    pub layouts: SlotMap<SheetKey, Layout>,
    /// `placed[i]` is true once item `i` has been placed on some sheet
    placed: Vec<bool>,
    /// Remarks gathered while solving, carried into the [`Solution`]
    notes: Vec<String>,
}

impl Problem {
    pub fn new(instance: Instance) -> Self {
        let placed = vec![false; instance.items.len()];
        Self {
            instance,
            layouts: SlotMap::with_key(),
            placed,
            notes: vec![],
        }
    }

    /// Opens a new, empty sheet. Sheets are numbered from 1 in the order they are opened.
    pub fn open_sheet(&mut self) -> SheetKey {
        let index = self.layouts.len() + 1;
        self.layouts
            .insert(Layout::new(index, self.instance.sheet))
    }

    /// Removes a sheet which did not receive any items.
    pub fn close_sheet(&mut self, key: SheetKey) {
        let layout = self.layouts.remove(key).expect("sheet key not present");
        assert!(layout.is_empty(), "only empty sheets can be closed");
        assert_eq!(
            layout.index,
            self.layouts.len() + 1,
            "only the most recently opened sheet can be closed"
        );
    }

    /// Places an item on the sheet identified by `key`.
    pub fn place_item(&mut self, key: SheetKey, item_id: usize, rect: Rect, rotation: Rotation) {
        assert!(!self.placed[item_id], "item {item_id} is already placed");
        let item = &self.instance.items[item_id];
        self.layouts[key].place_item(item, rect, rotation);
        self.placed[item_id] = true;
    }

    pub fn is_placed(&self, item_id: usize) -> bool {
        self.placed[item_id]
    }

    /// Items which have not been placed on any sheet yet, in instance order
    pub fn unplaced_items(&self) -> impl Iterator<Item = &Item> {
        self.instance
            .items
            .iter()
            .filter(|item| !self.placed[item.id])
    }

    pub fn n_placed(&self) -> usize {
        self.placed.iter().filter(|p| **p).count()
    }

    pub fn add_note(&mut self, note: impl Into<String>) {
        self.notes.push(note.into());
    }

    /// Creates a snapshot of the current state of the problem as a [`Solution`].
    pub fn save(&self) -> Solution {
        let layouts = self
            .layouts
            .values()
            .sorted_by_key(|l| l.index)
            .cloned()
            .collect_vec();

        let solution = Solution {
            layouts,
            unplaced: self.unplaced_items().map(|item| item.id).collect(),
            notes: self.notes.clone(),
        };

        debug_assert!(problem_matches_solution(self, &solution));

        solution
    }
}

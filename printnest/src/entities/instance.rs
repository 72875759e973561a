use crate::entities::{Item, Sheet, SheetParams};
use anyhow::Result;
use itertools::Itertools;

/// A design item that was refused during import, together with the reason.
#[derive(Clone, Debug, PartialEq)]
pub struct RejectedItem {
    pub ext_id: String,
    pub reason: String,
}

/// Static description of a packing request: a validated set of items and the sheet to pack them on.
#[derive(Clone, Debug)]
pub struct Instance {
    /// Items to be packed, `items[i].id == i`
    pub items: Vec<Item>,
    pub sheet: Sheet,
    /// Requested items that did not pass validation
    pub rejected: Vec<RejectedItem>,
}

impl Instance {
    pub fn new(items: Vec<Item>, sheet: Sheet, rejected: Vec<RejectedItem>) -> Self {
        assert!(
            items.iter().enumerate().all(|(i, item)| item.id == i),
            "item ids should be consecutive, starting from 0: {:?}",
            items.iter().map(|item| item.id).collect_vec()
        );
        Self {
            items,
            sheet,
            rejected,
        }
    }

    pub fn item(&self, id: usize) -> &Item {
        &self.items[id]
    }

    /// Number of items that were requested, including the rejected ones
    pub fn n_requested(&self) -> usize {
        self.items.len() + self.rejected.len()
    }

    /// The same items on a sheet with different parameters
    pub fn with_sheet(&self, params: SheetParams) -> Result<Instance> {
        Ok(Instance {
            sheet: Sheet::new(params)?,
            ..self.clone()
        })
    }

    /// The same request with every item turned a quarter before packing
    pub fn rotated(&self) -> Instance {
        Instance {
            items: self.items.iter().map(|item| item.rotated()).collect(),
            ..self.clone()
        }
    }
}

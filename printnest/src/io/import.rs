use std::collections::HashSet;

use crate::entities::{DesignItem, Instance, Item, RejectedItem, Sheet, SheetParams};
use crate::geometry::Rotation;
use anyhow::{Result, ensure};
use log::{debug, warn};

/// Imports a packing request into the library.
///
/// Invalid sheet parameters and duplicate item ids are refused with an error.
/// Items without a positive, finite width and height are not packed: they are recorded as rejected.
pub fn import(design_items: &[DesignItem], params: SheetParams) -> Result<Instance> {
    let sheet = Sheet::new(params)?;

    let ext_ids = design_items
        .iter()
        .enumerate()
        .map(|(i, di)| match di.id.is_empty() {
            true => format!("item_{i}"),
            false => di.id.clone(),
        })
        .collect::<Vec<String>>();

    {
        let mut seen = HashSet::new();
        let duplicate = ext_ids.iter().find(|id| !seen.insert(id.as_str()));
        ensure!(
            duplicate.is_none(),
            "item ids should be unique, {:?} occurs more than once",
            duplicate
        );
    }

    let mut items = vec![];
    let mut rejected = vec![];
    for (di, ext_id) in design_items.iter().zip(ext_ids) {
        match dimension_violation(di) {
            Some(reason) => {
                warn!("[IMPORT] rejecting item {ext_id}: {reason}");
                rejected.push(RejectedItem { ext_id, reason });
            }
            None => items.push(Item {
                id: items.len(),
                ext_id,
                name: di.name.clone(),
                width: di.width,
                height: di.height,
                priority: di.priority,
                pre_rotation: Rotation::None,
            }),
        }
    }

    debug!(
        "[IMPORT] imported {} items ({} rejected) on a {} x {} sheet",
        items.len(),
        rejected.len(),
        params.sheet_width,
        params.sheet_height
    );

    Ok(Instance::new(items, sheet, rejected))
}

fn dimension_violation(di: &DesignItem) -> Option<String> {
    let valid = |v: f32| v.is_finite() && v > 0.0;
    match valid(di.width) && valid(di.height) {
        true => None,
        false => Some(format!(
            "dimensions must be positive, got {} x {} mm",
            di.width, di.height
        )),
    }
}

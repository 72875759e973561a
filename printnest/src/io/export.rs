use crate::entities::{Instance, Layout, Solution};
use crate::io::ext_repr::{LayoutResult, Placement, PlacementStatus, SheetReport};
use itertools::Itertools;

/// Exports a [`Solution`] of `instance` as a [`LayoutResult`]. `label` names the run in the message.
pub fn export(instance: &Instance, solution: &Solution, label: &str) -> LayoutResult {
    let used_layouts = solution
        .layouts
        .iter()
        .filter(|l| !l.is_empty())
        .collect_vec();

    let placements = used_layouts
        .iter()
        .flat_map(|l| export_placements(l, instance))
        .collect_vec();

    let sheets = used_layouts
        .iter()
        .map(|l| SheetReport {
            sheet: l.index,
            item_count: l.placed_items.len(),
            efficiency: l.efficiency(),
        })
        .collect_vec();

    let n_requested = instance.n_requested();
    let n_placed = placements.len();
    let status = match (n_placed, n_requested) {
        (p, r) if p == r => PlacementStatus::Complete,
        (0, _) => PlacementStatus::NothingPlaced,
        _ => PlacementStatus::Partial,
    };

    let unplaced = instance
        .rejected
        .iter()
        .map(|r| r.ext_id.clone())
        .chain(
            solution
                .unplaced
                .iter()
                .map(|id| instance.item(*id).ext_id.clone()),
        )
        .collect_vec();

    let processing_notes = instance
        .rejected
        .iter()
        .map(|r| format!("item {} rejected: {}", r.ext_id, r.reason))
        .chain(solution.notes.iter().cloned())
        .collect_vec();

    let efficiency = solution.efficiency();
    let message = format!(
        "{label}: placed {n_placed}/{n_requested} items on {} sheet(s) with {efficiency:.1}% efficiency",
        sheets.len()
    );

    LayoutResult {
        success: n_placed > 0 || n_requested == 0,
        status,
        placements,
        sheets_used: sheets.len(),
        efficiency,
        usable_efficiency: solution.usable_efficiency(),
        sheets,
        unplaced,
        message,
        processing_notes,
    }
}

/// Exports the items placed on a layout, in the order they were placed.
pub fn export_placements(layout: &Layout, instance: &Instance) -> Vec<Placement> {
    layout
        .placed_items
        .iter()
        .map(|pi| {
            let item = instance.item(pi.item_id);
            let (width, height) = item.footprint(pi.rotation);
            Placement {
                id: item.ext_id.clone(),
                x: pi.rect.x_min,
                y: pi.rect.y_min,
                width,
                height,
                rotation: item.pre_rotation.compose(pi.rotation),
                sheet: layout.index,
            }
        })
        .collect()
}

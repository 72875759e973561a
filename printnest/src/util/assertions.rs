use crate::entities::{Layout, Problem, SheetParams, Solution};
use crate::geometry::{CollidesWith, Rect};
use crate::io::ext_repr::{LayoutResult, Placement};
use itertools::Itertools;
use log::error;
use std::collections::HashSet;

//Various checks to verify correctness of the state of the system
//Used in debug_assertion!() blocks and in tests

/// No placed item enters the spacing-inflated footprint of another, and all items lie in the usable region.
pub fn layout_is_feasible(layout: &Layout) -> bool {
    for pi in layout.placed_items.iter() {
        if !layout.sheet.usable.encloses(&pi.rect) {
            error!(
                "item {} at {} exceeds the usable region {} of sheet {}",
                pi.item_id, pi.rect, layout.sheet.usable, layout.index
            );
            return false;
        }
    }
    for (a, b) in layout.placed_items.iter().tuple_combinations() {
        if a.hazard.collides_with(&b.rect) || b.hazard.collides_with(&a.rect) {
            error!(
                "items {} at {} and {} at {} are closer than the spacing on sheet {}",
                a.item_id, a.rect, b.item_id, b.rect, layout.index
            );
            return false;
        }
    }
    true
}

pub fn problem_matches_solution(problem: &Problem, solution: &Solution) -> bool {
    assert_eq!(problem.layouts.len(), solution.layouts.len());
    assert_eq!(problem.n_placed(), solution.n_placed());
    assert!(
        solution
            .layouts
            .iter()
            .enumerate()
            .all(|(i, l)| l.index == i + 1),
        "sheet indices should be consecutive, starting from 1"
    );
    assert!(
        solution
            .unplaced
            .iter()
            .all(|id| !problem.is_placed(*id))
    );
    true
}

fn placement_rect(p: &Placement) -> Option<Rect> {
    Rect::from_corner(p.x, p.y, p.width, p.height).ok()
}

/// For every pair of placements on the same sheet, the spacing-inflated footprint of one does not
/// intersect the footprint of the other.
pub fn placements_disjoint(placements: &[Placement], spacing: f32) -> bool {
    let sheets = placements.iter().into_group_map_by(|p| p.sheet);
    sheets.values().all(|on_sheet| {
        on_sheet.iter().tuple_combinations().all(|(a, b)| {
            match (placement_rect(a), placement_rect(b)) {
                (Some(ra), Some(rb)) => {
                    let inflated = ra.inflated(spacing).unwrap_or(ra);
                    let disjoint = !inflated.collides_with(&rb);
                    if !disjoint {
                        error!("placements {} and {} overlap on sheet {}", a.id, b.id, a.sheet);
                    }
                    disjoint
                }
                _ => false,
            }
        })
    })
}

/// Every placement lies within `[margin, sheet_width - margin] x [margin, sheet_height - margin]`, exactly.
pub fn placements_contained(placements: &[Placement], params: &SheetParams) -> bool {
    let m = params.margin;
    placements.iter().all(|p| {
        let contained = p.x >= m
            && p.y >= m
            && p.x + p.width <= params.sheet_width - m
            && p.y + p.height <= params.sheet_height - m;
        if !contained {
            error!("placement {} exceeds the usable region of sheet {}", p.id, p.sheet);
        }
        contained
    })
}

/// Every id appears at most once across all sheets.
pub fn placements_conserved(placements: &[Placement]) -> bool {
    let mut seen = HashSet::new();
    placements.iter().all(|p| seen.insert(p.id.as_str()))
}

/// `0 <= efficiency <= 100` for the aggregate result and for every sheet.
pub fn efficiency_in_bounds(result: &LayoutResult) -> bool {
    let in_bounds = |e: f32| (0.0..=100.0).contains(&e);
    in_bounds(result.efficiency)
        && in_bounds(result.usable_efficiency)
        && result.sheets.iter().all(|s| in_bounds(s.efficiency))
}

/// All invariants of a [`LayoutResult`] produced on a sheet with `params`.
pub fn layout_result_is_valid(result: &LayoutResult, params: &SheetParams) -> bool {
    placements_disjoint(&result.placements, params.spacing)
        && placements_contained(&result.placements, params)
        && placements_conserved(&result.placements)
        && efficiency_in_bounds(result)
        && result.sheets_used
            == result
                .placements
                .iter()
                .map(|p| p.sheet)
                .unique()
                .count()
}

use std::time::Instant;

use crate::config::RowFillConfig;
use crate::opt::row_packer::pack_sheet;
use log::{debug, info, warn};
use printnest::entities::{Instance, Problem, Solution};
use printnest::io::export::export;
use printnest::io::ext_repr::LayoutResult;
use thousands::Separable;

/// Fills sheet after sheet with the row packer until every item is placed
/// or a pass fails to place anything.
pub struct RowFillOptimizer {
    pub problem: Problem,
    pub config: RowFillConfig,
}

impl RowFillOptimizer {
    pub fn new(instance: Instance, config: RowFillConfig) -> Self {
        Self {
            problem: Problem::new(instance),
            config,
        }
    }

    pub fn solve(&mut self) -> Solution {
        let start = Instant::now();

        self.note_oversized_items();

        while self.problem.unplaced_items().next().is_some() {
            if let Some(max_sheets) = self.config.max_sheets {
                if self.problem.layouts.len() >= max_sheets {
                    let note = format!(
                        "stopped after reaching the limit of {max_sheets} sheet(s), {} item(s) left unplaced",
                        self.problem.unplaced_items().count()
                    );
                    warn!("[SCHED] {note}");
                    self.problem.add_note(note);
                    break;
                }
            }

            let key = self.problem.open_sheet();
            let n_placed = pack_sheet(&mut self.problem, key, self.config.allow_rotation);

            if n_placed == 0 {
                //no progress possible: none of the remaining items fits an empty sheet
                self.problem.close_sheet(key);
                let note = format!(
                    "no progress on a new sheet, {} item(s) left unplaced",
                    self.problem.unplaced_items().count()
                );
                debug!("[SCHED] {note}");
                self.problem.add_note(note);
                break;
            }

            let layout = &self.problem.layouts[key];
            info!(
                "[SCHED] sheet {} holds {} items ({:.1}% efficiency), {} items remaining",
                layout.index,
                n_placed,
                layout.efficiency(),
                self.problem.unplaced_items().count()
            );
        }

        let solution = self.problem.save();

        info!(
            "[SCHED] finished in {:.3}ms: {}/{} items on {} sheet(s), {:.1}% efficiency",
            start.elapsed().as_secs_f64() * 1000.0,
            solution.n_placed().separate_with_commas(),
            self.problem.instance.items.len().separate_with_commas(),
            solution.sheets_used(),
            solution.efficiency()
        );

        solution
    }

    /// Records the items which do not fit an empty sheet in any allowed orientation.
    fn note_oversized_items(&mut self) {
        let sheet = self.problem.instance.sheet;
        let allow_rotation = self.config.allow_rotation;
        let oversized = self
            .problem
            .unplaced_items()
            .filter(|item| {
                !sheet.can_hold(item.width, item.height)
                    && !(allow_rotation && sheet.can_hold(item.height, item.width))
            })
            .map(|item| {
                format!(
                    "item {} ({} x {} mm) does not fit the usable area of {} x {} mm in any orientation",
                    item.ext_id,
                    item.width,
                    item.height,
                    sheet.usable.width(),
                    sheet.usable.height()
                )
            })
            .collect::<Vec<String>>();

        for note in oversized {
            warn!("[SCHED] {note}");
            self.problem.add_note(note);
        }
    }
}

/// Packs `instance` with a single parameter set and exports the result, `label` names the run.
pub fn pack(instance: Instance, config: &RowFillConfig, label: &str) -> LayoutResult {
    let mut optimizer = RowFillOptimizer::new(instance, config.clone());
    let solution = optimizer.solve();
    export(&optimizer.problem.instance, &solution, label)
}

use std::fmt::{Display, Formatter};

use crate::config::{RowFillConfig, StrategyConfig};
use crate::opt::scheduler::pack;
use anyhow::Result;
use itertools::Itertools;
use log::{info, warn};
use printnest::entities::{DesignItem, Instance, SheetParams, SheetSize};
use printnest::io::ext_repr::LayoutResult;
use printnest::io::import::import;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// A parameterization of the multi-sheet packing run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Strategy {
    /// The requested sheet, margin and spacing
    Standard,
    /// Narrower margin and spacing on the requested sheet
    Compact { margin: f32, spacing: f32 },
    /// Every item turned a quarter before packing
    ForcedRotation,
    /// The requested margin and spacing on another sheet format
    AlternateSheet { size: SheetSize },
}

impl Strategy {
    /// Derives the instance this strategy packs from the requested one.
    pub fn derive_instance(&self, requested: &Instance) -> Result<Instance> {
        let params = requested.sheet.params;
        match self {
            Strategy::Standard => Ok(requested.clone()),
            Strategy::Compact { margin, spacing } => {
                requested.with_sheet(params.with_margins(*margin, *spacing))
            }
            Strategy::ForcedRotation => Ok(requested.rotated()),
            Strategy::AlternateSheet { size } => requested.with_sheet(params.with_size(*size)),
        }
    }
}

impl Display for Strategy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Strategy::Standard => write!(f, "standard"),
            Strategy::Compact { .. } => write!(f, "compact"),
            Strategy::ForcedRotation => write!(f, "forced-rotation"),
            Strategy::AlternateSheet { size } => write!(f, "alternate-sheet:{size}"),
        }
    }
}

/// The strategies to evaluate for a request on `params`, in evaluation order.
pub fn strategies(params: &SheetParams, config: &StrategyConfig) -> Vec<Strategy> {
    let mut strategies = vec![
        Strategy::Standard,
        Strategy::Compact {
            margin: f32::min(config.compact_margin, params.margin),
            spacing: f32::min(config.compact_spacing, params.spacing),
        },
    ];
    if config.forced_rotation {
        strategies.push(Strategy::ForcedRotation);
    }
    strategies.extend(
        config
            .alternate_sheets
            .iter()
            .unique()
            .filter(|size| params.size() != Some(**size))
            .map(|size| Strategy::AlternateSheet { size: *size }),
    );
    strategies
}

/// Outcome of a single strategy
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyResult {
    pub name: String,
    pub strategy: Strategy,
    /// The sheet parameters the strategy packed on
    pub sheet: SheetParams,
    pub result: LayoutResult,
}

/// All evaluated strategies and the index of the most efficient one.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Selection {
    pub best: usize,
    pub results: Vec<StrategyResult>,
    /// Strategies that could not be evaluated, and why
    pub notes: Vec<String>,
}

impl Selection {
    pub fn best(&self) -> &StrategyResult {
        &self.results[self.best]
    }
}

/// Packs the design items under every strategy and selects the one with the highest efficiency.
/// On equal efficiency, the strategy evaluated first wins.
///
/// Fails if the requested sheet parameters or the items themselves are invalid.
/// Alternative strategies whose parameters turn out invalid are skipped and noted.
pub fn select(
    design_items: &[DesignItem],
    params: SheetParams,
    config: &RowFillConfig,
) -> Result<Selection> {
    let requested = import(design_items, params)?;

    let evaluated = strategies(&params, &config.strategies)
        .into_par_iter()
        .map(|strategy| {
            let outcome = strategy.derive_instance(&requested).map(|instance| {
                let sheet = instance.sheet.params;
                let result = pack(instance, config, &strategy.to_string());
                (sheet, result)
            });
            (strategy, outcome)
        })
        .collect::<Vec<_>>();

    let mut results = vec![];
    let mut notes = vec![];
    for (strategy, outcome) in evaluated {
        match outcome {
            Ok((sheet, result)) => {
                info!("[STRAT] {}", result.message);
                results.push(StrategyResult {
                    name: strategy.to_string(),
                    strategy,
                    sheet,
                    result,
                });
            }
            Err(e) => {
                let note = format!("strategy {strategy} skipped: {e}");
                warn!("[STRAT] {note}");
                notes.push(note);
            }
        }
    }

    //the standard strategy cannot fail, `results` is never empty
    let best = results
        .iter()
        .enumerate()
        .fold(0, |best, (i, sr)| {
            match sr.result.efficiency > results[best].result.efficiency {
                true => i,
                false => best,
            }
        });

    info!(
        "[STRAT] selected {} out of {} strategies",
        results[best].name,
        results.len()
    );

    Ok(Selection {
        best,
        results,
        notes,
    })
}

use serde::{Deserialize, Serialize};

use printnest::entities::SheetSize;
use printnest::io::svg::SvgDrawOptions;

/// Configuration of the row-fill engine and the strategy selection
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct RowFillConfig {
    /// Allow the packer to turn an item a quarter when it does not fit in its original orientation
    pub allow_rotation: bool,
    /// Maximum number of sheets per run. Unlimited if undefined
    pub max_sheets: Option<usize>,
    /// Parameters of the alternative strategies the selector compares against the standard one
    pub strategies: StrategyConfig,
    /// SVG drawing options for the sheets of the best strategy
    pub svg_draw_options: SvgDrawOptions,
}

impl Default for RowFillConfig {
    fn default() -> Self {
        Self {
            allow_rotation: true,
            max_sheets: None,
            strategies: StrategyConfig::default(),
            svg_draw_options: SvgDrawOptions::default(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct StrategyConfig {
    /// Margin of the compact strategy
    pub compact_margin: f32,
    /// Spacing of the compact strategy, never wider than the requested spacing
    pub compact_spacing: f32,
    /// Evaluate a variant where every item is turned a quarter before packing
    pub forced_rotation: bool,
    /// Sheet formats to evaluate next to the requested one
    pub alternate_sheets: Vec<SheetSize>,
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self {
            compact_margin: 5.0,
            compact_spacing: 2.0,
            forced_rotation: true,
            alternate_sheets: vec![SheetSize::A3],
        }
    }
}

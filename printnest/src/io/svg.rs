use std::fmt::{Display, Formatter};

use crate::entities::SheetParams;
use crate::geometry::{Rect, Rotation};
use crate::io::ext_repr::{LayoutResult, Placement};
use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Serialize};
use svg::Document;
use svg::node::element::path::Data;
use svg::node::element::{Group, Path, Text, Title};

/// What to draw in a sheet SVG, and in which colors
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
#[serde(default)]
pub struct SvgDrawOptions {
    pub palette: SheetPalette,
    /// Print the id of every item in its center
    pub label_items: bool,
    /// Dashed outline of the region inside the margins
    pub show_margins: bool,
}

impl Default for SvgDrawOptions {
    fn default() -> Self {
        Self {
            palette: SheetPalette::PAPER,
            label_items: true,
            show_margins: true,
        }
    }
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SheetPalette {
    /// Line width as a fraction of a thousandth of the shortest sheet side
    pub line_weight: f32,
    pub paper: Color,
    pub design: Color,
    pub turned_design: Color,
    pub margin_line: Color,
}

impl Default for SheetPalette {
    fn default() -> Self {
        SheetPalette::PAPER
    }
}

impl SheetPalette {
    pub const PAPER: SheetPalette = SheetPalette {
        line_weight: 2.0,
        paper: Color(0xF5EBDC),
        design: Color(0xFFC879),
        turned_design: Color(0xCC824A),
        margin_line: Color(0xD00000),
    };

    pub const MONOCHROME: SheetPalette = SheetPalette {
        line_weight: 2.5,
        paper: Color(0xFFFFFF),
        design: Color(0xD3D3D3),
        turned_design: Color(0x7A7A7A),
        margin_line: Color(0x636363),
    };
}

/// 24-bit RGB color, (de)serialized as `#RRGGBB`
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(pub u32);

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:06X}", self.0 & 0xFF_FFFF)
    }
}

impl TryFrom<String> for Color {
    type Error = anyhow::Error;

    fn try_from(s: String) -> Result<Self> {
        let digits = s.trim_start_matches('#');
        ensure!(digits.len() == 6, "color {s} is not of the form #RRGGBB");
        u32::from_str_radix(digits, 16)
            .map(Color)
            .with_context(|| format!("color {s} is not hexadecimal"))
    }
}

impl From<Color> for String {
    fn from(c: Color) -> String {
        c.to_string()
    }
}

/// Stroke and fill of a drawn rectangle
struct Style<'a> {
    fill: String,
    stroke: &'a str,
    width: f32,
    dashed: bool,
}

impl Style<'_> {
    fn draw(&self, rect: &Rect) -> Path {
        let outline = Data::new()
            .move_to((rect.x_min, rect.y_min))
            .horizontal_line_to(rect.x_max)
            .vertical_line_to(rect.y_max)
            .horizontal_line_to(rect.x_min)
            .close();
        let path = Path::new()
            .set("d", outline)
            .set("fill", self.fill.as_str())
            .set("stroke", self.stroke)
            .set("stroke-width", self.width);
        match self.dashed {
            true => path.set("stroke-dasharray", format!("{} {}", 4.0 * self.width, 2.0 * self.width)),
            false => path,
        }
    }
}

/// Draws one sheet of a [`LayoutResult`]: the sheet, its usable region and every item placed on it.
pub fn sheet_to_svg(
    result: &LayoutResult,
    params: &SheetParams,
    sheet: usize,
    options: SvgDrawOptions,
    title: &str,
) -> Document {
    let palette = options.palette;
    let (w, h) = (params.sheet_width, params.sheet_height);
    let short_side = f32::min(w, h);
    let line = short_side * 0.001 * palette.line_weight;
    let font_size = short_side * 0.025;
    let pad = 0.05 * f32::max(w, h);

    let on_sheet: Vec<&Placement> = result.placements.iter().filter(|p| p.sheet == sheet).collect();
    let efficiency = result
        .sheets
        .iter()
        .find(|s| s.sheet == sheet)
        .map_or(0.0, |s| s.efficiency);

    let caption = Text::new(format!(
        "sheet {sheet}/{} | {w} x {h} mm | {} items | efficiency: {efficiency:.1}% | {title}",
        result.sheets_used,
        on_sheet.len(),
    ))
    .set("x", 0.0)
    .set("y", -0.5 * font_size)
    .set("font-size", font_size)
    .set("font-family", "monospace");

    let paper = Style {
        fill: palette.paper.to_string(),
        stroke: "black",
        width: 2.0 * line,
        dashed: false,
    };
    let mut sheet_group = Group::new()
        .set("id", format!("sheet_{sheet}"))
        .add(paper.draw(&Rect {
            x_min: 0.0,
            y_min: 0.0,
            x_max: w,
            y_max: h,
        }))
        .add(Title::new(format!(
            "sheet {sheet}, {w} x {h} mm, margin: {}, spacing: {}",
            params.margin, params.spacing
        )));

    if options.show_margins {
        let margin_line = palette.margin_line.to_string();
        let usable = Rect {
            x_min: params.margin,
            y_min: params.margin,
            x_max: w - params.margin,
            y_max: h - params.margin,
        };
        let style = Style {
            fill: "none".to_string(),
            stroke: &margin_line,
            width: line,
            dashed: true,
        };
        sheet_group = sheet_group.add(style.draw(&usable));
    }

    let mut items_group = Group::new().set("id", "items");
    for p in on_sheet {
        let style = Style {
            fill: match p.rotation {
                Rotation::None => palette.design,
                Rotation::Quarter => palette.turned_design,
            }
            .to_string(),
            stroke: "black",
            width: line,
            dashed: false,
        };
        let footprint = Rect {
            x_min: p.x,
            y_min: p.y,
            x_max: p.x + p.width,
            y_max: p.y + p.height,
        };
        let mut item = Group::new()
            .set("id", format!("item_{}", p.id))
            .add(style.draw(&footprint).set("opacity", "0.9"))
            .add(Title::new(format!(
                "item {}, {} x {} mm at ({}, {}), rotation: {}",
                p.id, p.width, p.height, p.x, p.y, p.rotation
            )));
        if options.label_items {
            item = item.add(
                Text::new(p.id.clone())
                    .set("x", p.x + 0.5 * p.width)
                    .set("y", p.y + 0.5 * p.height)
                    .set("font-size", f32::min(font_size, 0.5 * f32::min(p.width, p.height)))
                    .set("font-family", "monospace")
                    .set("text-anchor", "middle")
                    .set("dominant-baseline", "middle"),
            );
        }
        items_group = items_group.add(item);
    }

    Document::new()
        .set("viewBox", (-pad, -pad - font_size, w + 2.0 * pad, h + 2.0 * pad + font_size))
        .add(sheet_group)
        .add(items_group)
        .add(caption)
}

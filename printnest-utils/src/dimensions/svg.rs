use std::sync::LazyLock;

use crate::dimensions::units::{PX_TO_MM, parse_length};
use anyhow::{Context, Result, anyhow, bail};
use log::debug;
use regex::Regex;

static ROOT_ELEMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<svg\b([^>]*)>").expect("valid root element pattern"));

static ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([\w:.-]+)\s*=\s*(?:"([^"]*)"|'([^']*)')"#).expect("valid attribute pattern")
});

/// Where the size of an SVG document was read from
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SvgSizeSource {
    /// The `width` and `height` attributes of the root element
    Attributes,
    /// The extent of the `viewBox`, interpreted as pixels
    ViewBox,
}

/// Physical size of an SVG document in millimeters, read from its root `<svg>` element.
/// Absolute `width` and `height` attributes are preferred, relative ones (such as `100%`)
/// defer to the `viewBox`.
pub fn document_size(bytes: &[u8]) -> Result<(SvgSizeSource, f32, f32)> {
    let text = std::str::from_utf8(bytes).context("document is not valid UTF-8")?;
    let attributes = ROOT_ELEMENT
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
        .context("no <svg> element found")?;

    let unusable = match (attribute(attributes, "width"), attribute(attributes, "height")) {
        (Some(w), Some(h)) => match (parse_length(w), parse_length(h)) {
            (Ok(w), Ok(h)) if w > 0.0 && h > 0.0 => {
                return Ok((SvgSizeSource::Attributes, w, h));
            }
            (Ok(w), Ok(h)) => Some(anyhow!(
                "width and height should be positive, got {w} x {h} mm"
            )),
            (Err(e), _) | (_, Err(e)) => Some(e),
        },
        _ => None,
    };

    if let Some(view_box) = attribute(attributes, "viewBox") {
        if let Some(reason) = &unusable {
            debug!("[DIM] width/height not usable ({reason:#}), sizing by the viewBox");
        }
        let (w, h) = view_box_extent(view_box)?;
        return Ok((SvgSizeSource::ViewBox, w * PX_TO_MM, h * PX_TO_MM));
    }
    match unusable {
        Some(reason) => Err(reason),
        None => bail!("root element has neither width/height nor a viewBox"),
    }
}

/// Value of an attribute within the attribute list of an element
fn attribute<'a>(attributes: &'a str, name: &str) -> Option<&'a str> {
    ATTRIBUTE
        .captures_iter(attributes)
        .find(|c| &c[1] == name)
        .and_then(|c| c.get(2).or_else(|| c.get(3)))
        .map(|m| m.as_str())
}

fn view_box_extent(view_box: &str) -> Result<(f32, f32)> {
    let values = view_box
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<f32>())
        .collect::<Result<Vec<f32>, _>>()
        .with_context(|| format!("malformed viewBox: {view_box:?}"))?;
    match values.as_slice() {
        [_, _, w, h] if *w > 0.0 && *h > 0.0 => Ok((*w, *h)),
        _ => bail!("malformed viewBox: {view_box:?}"),
    }
}

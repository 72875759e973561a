use crate::dimensions::units::PT_TO_MM;
use anyhow::{Context, Result, bail};
use log::debug;
use lopdf::{Document, Object, ObjectId};

/// Nesting depth of the page tree beyond which a document is considered malformed
const MAX_PAGE_TREE_DEPTH: usize = 64;

/// The page boxes a PDF may declare, from most to least specific for print
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageBox {
    /// The intended dimensions of the finished page after trimming
    TrimBox,
    /// The full extent of the page medium
    MediaBox,
}

impl PageBox {
    fn key(&self) -> &'static [u8] {
        match self {
            PageBox::TrimBox => b"TrimBox",
            PageBox::MediaBox => b"MediaBox",
        }
    }
}

/// Finds the page size of the first page in a PDF, in millimeters.
/// A `TrimBox` is preferred over the `MediaBox`. Both may be indirect objects or
/// inherited from an ancestor in the page tree. A quarter `/Rotate` swaps the dimensions.
pub fn page_size(bytes: &[u8]) -> Result<(PageBox, f32, f32)> {
    let doc = Document::load_mem(bytes).context("not a readable PDF document")?;
    let first_page = doc
        .get_pages()
        .into_values()
        .next()
        .context("document has no pages")?;

    let rotated = inherited(&doc, first_page, b"Rotate")?
        .and_then(|deg| deg.as_i64().ok())
        .is_some_and(|deg| deg.rem_euclid(180) == 90);

    for page_box in [PageBox::TrimBox, PageBox::MediaBox] {
        let Some(value) = inherited(&doc, first_page, page_box.key())? else {
            continue;
        };
        match box_extent(&doc, value) {
            Some((w, h)) => {
                let (w, h) = match rotated {
                    true => (h, w),
                    false => (w, h),
                };
                return Ok((page_box, w * PT_TO_MM, h * PT_TO_MM));
            }
            None => debug!("[DIM] ignoring malformed {page_box:?} {value:?}"),
        }
    }
    bail!("first page declares no valid /TrimBox or /MediaBox")
}

/// Value of `key` on the page, or on the nearest ancestor in the page tree that defines it.
/// References are resolved.
fn inherited<'a>(doc: &'a Document, page: ObjectId, key: &[u8]) -> Result<Option<&'a Object>> {
    let mut node = doc.get_dictionary(page)?;
    for _ in 0..MAX_PAGE_TREE_DEPTH {
        if let Ok(value) = node.get(key) {
            let (_, value) = doc.dereference(value)?;
            return Ok(Some(value));
        }
        match node.get(b"Parent").and_then(Object::as_reference) {
            Ok(parent) => node = doc.get_dictionary(parent)?,
            Err(_) => return Ok(None),
        }
    }
    bail!("page tree is nested deeper than {MAX_PAGE_TREE_DEPTH} levels")
}

/// Width and height in points of a `[x0 y0 x1 y1]` rectangle, if it has a positive area
fn box_extent(doc: &Document, rect: &Object) -> Option<(f32, f32)> {
    let coords = rect
        .as_array()
        .ok()?
        .iter()
        .map(|c| doc.dereference(c).ok()?.1.as_float().ok())
        .collect::<Option<Vec<f32>>>()?;
    match coords.as_slice() {
        [x0, y0, x1, y1] => {
            let (w, h) = ((x1 - x0).abs(), (y1 - y0).abs());
            (w > 0.0 && h > 0.0).then_some((w, h))
        }
        _ => None,
    }
}

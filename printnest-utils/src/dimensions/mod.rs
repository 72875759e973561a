//! Detection of the physical dimensions of design files.
//!
//! PDF and SVG files declare their size, raster images do not: their dimensions are guessed from
//! keywords in the file name. Every failure degrades to a guess with a lower confidence,
//! the resolver itself never fails.

mod filename;
mod pdf;
mod raster;
mod svg;
pub mod units;

use std::fmt::{Display, Formatter};
use std::path::Path;

use anyhow::{Result, bail};
use log::{debug, warn};
use printnest::entities::DesignItem;
use serde::{Deserialize, Serialize};

pub use filename::{DEFAULT_SIZE, FormatGuess, guess_format};
pub use pdf::PageBox;
pub use raster::RasterFormat;
pub use svg::SvgSizeSource;

/// Coarse product category of a design
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    BusinessCard,
    Logo,
    Label,
    Brochure,
    Poster,
    SmallLabel,
    MediumPrint,
    LargeFormat,
    General,
}

impl Category {
    /// Bucket for a design of which only the size is known
    pub fn from_area(width_mm: f32, height_mm: f32) -> Category {
        match width_mm * height_mm {
            a if a < 3_000.0 => Category::SmallLabel,
            a if a < 10_000.0 => Category::MediumPrint,
            _ => Category::LargeFormat,
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Category::BusinessCard => "business_card",
            Category::Logo => "logo",
            Category::Label => "label",
            Category::Brochure => "brochure",
            Category::Poster => "poster",
            Category::SmallLabel => "small_label",
            Category::MediumPrint => "medium_print",
            Category::LargeFormat => "large_format",
            Category::General => "general",
        };
        write!(f, "{name}")
    }
}

/// How the dimensions in a [`DimensionReport`] were obtained
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionMethod {
    PdfTrimBox,
    PdfMediaBox,
    SvgAttributes,
    SvgViewBox,
    /// A valid raster image, sized by its file name
    RasterFilename,
    /// The file could not be interpreted, sized by its file name
    Fallback,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DimensionReport {
    pub width_mm: f32,
    pub height_mm: f32,
    /// Between 0 and 1
    pub confidence: f32,
    pub category: Category,
    pub method: ResolutionMethod,
    /// Tall, narrow designs are hinted as rotation candidates
    pub should_rotate: bool,
    pub processing_notes: Vec<String>,
}

impl DimensionReport {
    fn new(
        (width_mm, height_mm): (f32, f32),
        confidence: f32,
        category: Category,
        method: ResolutionMethod,
    ) -> Self {
        Self {
            width_mm,
            height_mm,
            confidence,
            category,
            method,
            should_rotate: height_mm > width_mm * DesignItem::ROTATION_HINT_RATIO,
            processing_notes: vec![],
        }
    }

    /// Packer input for the design described by this report
    pub fn into_design_item(self, id: impl Into<String>, name: impl Into<String>) -> DesignItem {
        DesignItem::new(id, name, self.width_mm, self.height_mm)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum FileKind {
    Pdf,
    Svg,
    Raster,
}

impl FileKind {
    fn from_mime(mime: &str) -> Option<FileKind> {
        let mime = mime.trim().to_ascii_lowercase();
        match mime.as_str() {
            "application/pdf" => Some(FileKind::Pdf),
            "image/svg+xml" => Some(FileKind::Svg),
            m if m.starts_with("image/") => Some(FileKind::Raster),
            _ => None,
        }
    }

    fn from_filename(filename: &str) -> Option<FileKind> {
        let ext = Path::new(filename).extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "pdf" => Some(FileKind::Pdf),
            "svg" => Some(FileKind::Svg),
            e => RasterFormat::from_extension(e).map(|_| FileKind::Raster),
        }
    }

    fn sniff(bytes: &[u8]) -> Option<FileKind> {
        let head = &bytes[..bytes.len().min(1024)];
        if bytes.starts_with(b"%PDF") {
            Some(FileKind::Pdf)
        } else if head.windows(4).any(|w| w == b"<svg") {
            Some(FileKind::Svg)
        } else {
            RasterFormat::sniff(bytes).map(|_| FileKind::Raster)
        }
    }
}

/// Resolves the physical dimensions of a design file held in memory.
///
/// The kind of file is taken from the declared MIME type, else from the extension of `filename`,
/// else from the content itself. Never fails: when the content cannot be interpreted, the
/// dimensions are guessed from `filename` and the reason is recorded in the processing notes.
pub fn resolve_bytes(bytes: &[u8], mime: Option<&str>, filename: &str) -> DimensionReport {
    let kind = mime
        .and_then(FileKind::from_mime)
        .or_else(|| FileKind::from_filename(filename))
        .or_else(|| FileKind::sniff(bytes));

    let resolved = match kind {
        Some(FileKind::Pdf) => resolve_pdf(bytes, filename),
        Some(FileKind::Svg) => resolve_svg(bytes, filename),
        Some(FileKind::Raster) => resolve_raster(bytes, filename),
        None => Err(anyhow::anyhow!("unrecognized file type")),
    };

    match resolved {
        Ok(report) => {
            debug!(
                "[DIM] {filename}: {:.1} x {:.1} mm via {:?} (confidence {:.2})",
                report.width_mm, report.height_mm, report.method, report.confidence
            );
            report
        }
        Err(e) => {
            warn!("[DIM] {filename}: {e:#}, falling back to the file name");
            fallback(filename, format!("could not analyze {filename}: {e:#}"))
        }
    }
}

/// Resolves the physical dimensions of a design file on disk, see [`resolve_bytes`].
/// A file that cannot be read is sized by its name.
pub fn resolve_file(path: &Path, mime: Option<&str>, filename: &str) -> DimensionReport {
    match std::fs::read(path) {
        Ok(bytes) => resolve_bytes(&bytes, mime, filename),
        Err(e) => {
            warn!("[DIM] could not read {}: {e}", path.display());
            fallback(
                filename,
                format!("could not read {}: {e}", path.display()),
            )
        }
    }
}

fn resolve_pdf(bytes: &[u8], filename: &str) -> Result<DimensionReport> {
    let (page_box, w, h) = pdf::page_size(bytes)?;
    let (confidence, method) = match page_box {
        PageBox::TrimBox => (0.95, ResolutionMethod::PdfTrimBox),
        PageBox::MediaBox => (0.9, ResolutionMethod::PdfMediaBox),
    };
    Ok(DimensionReport::new(
        (w, h),
        confidence,
        category_of(filename, w, h),
        method,
    ))
}

fn resolve_svg(bytes: &[u8], filename: &str) -> Result<DimensionReport> {
    let (source, w, h) = svg::document_size(bytes)?;
    let (confidence, method) = match source {
        SvgSizeSource::Attributes => (0.85, ResolutionMethod::SvgAttributes),
        SvgSizeSource::ViewBox => (0.8, ResolutionMethod::SvgViewBox),
    };
    Ok(DimensionReport::new(
        (w, h),
        confidence,
        category_of(filename, w, h),
        method,
    ))
}

fn resolve_raster(bytes: &[u8], filename: &str) -> Result<DimensionReport> {
    let Some(format) = RasterFormat::sniff(bytes) else {
        bail!("content is not a recognized raster image");
    };
    let mut report = match guess_format(filename) {
        Some(guess) => DimensionReport::new(
            (guess.width, guess.height),
            0.7,
            guess.category,
            ResolutionMethod::RasterFilename,
        ),
        None => DimensionReport::new(
            DEFAULT_SIZE,
            0.5,
            Category::General,
            ResolutionMethod::RasterFilename,
        ),
    };
    report.processing_notes.push(format!(
        "{format:?} image carries no physical size, dimensions estimated from the file name"
    ));
    Ok(report)
}

/// Guess from the file name alone, `reason` explains why the content was not used.
fn fallback(filename: &str, reason: String) -> DimensionReport {
    let mut report = match guess_format(filename) {
        Some(guess) => DimensionReport::new(
            (guess.width, guess.height),
            0.3,
            guess.category,
            ResolutionMethod::Fallback,
        ),
        None => DimensionReport::new(DEFAULT_SIZE, 0.2, Category::General, ResolutionMethod::Fallback),
    };
    report.processing_notes.push(reason);
    report.processing_notes.push(format!(
        "using estimated dimensions of {} x {} mm",
        report.width_mm, report.height_mm
    ));
    report
}

/// Keyword in the file name first, size bucket otherwise
fn category_of(filename: &str, width_mm: f32, height_mm: f32) -> Category {
    guess_format(filename).map_or_else(
        || Category::from_area(width_mm, height_mm),
        |guess| guess.category,
    )
}

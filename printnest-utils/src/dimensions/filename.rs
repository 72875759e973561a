use crate::dimensions::Category;

/// Size assumed for a design of which nothing is known
pub const DEFAULT_SIZE: (f32, f32) = (100.0, 100.0);

/// Product formats recognized in file names, with their usual size in millimeters.
/// The first format with a matching keyword applies.
const FORMATS: [(&[&str], Category, f32, f32); 5] = [
    (&["kartvizit", "business", "card"], Category::BusinessCard, 85.0, 55.0),
    (&["logo"], Category::Logo, 120.0, 80.0),
    (&["etiket", "label", "sticker"], Category::Label, 60.0, 40.0),
    (&["brosur", "brochure", "flyer"], Category::Brochure, 210.0, 297.0),
    (&["poster", "afis"], Category::Poster, 420.0, 594.0),
];

/// A product format guessed from a file name
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FormatGuess {
    pub category: Category,
    pub width: f32,
    pub height: f32,
}

/// Guesses the product format from keywords in the file name (case-insensitive).
pub fn guess_format(filename: &str) -> Option<FormatGuess> {
    let filename = filename.to_lowercase();
    FORMATS
        .iter()
        .find(|(keywords, ..)| keywords.iter().any(|k| filename.contains(k)))
        .map(|&(_, category, width, height)| FormatGuess {
            category,
            width,
            height,
        })
}

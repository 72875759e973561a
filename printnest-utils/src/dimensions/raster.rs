/// Raster image formats recognized by their leading bytes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RasterFormat {
    Png,
    Jpeg,
    Gif,
    Webp,
    Tiff,
    Bmp,
}

impl RasterFormat {
    pub fn sniff(bytes: &[u8]) -> Option<RasterFormat> {
        match bytes {
            [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, ..] => Some(RasterFormat::Png),
            [0xFF, 0xD8, 0xFF, ..] => Some(RasterFormat::Jpeg),
            [b'G', b'I', b'F', b'8', b'7' | b'9', b'a', ..] => Some(RasterFormat::Gif),
            [b'R', b'I', b'F', b'F', _, _, _, _, b'W', b'E', b'B', b'P', ..] => {
                Some(RasterFormat::Webp)
            }
            [b'I', b'I', 0x2A, 0x00, ..] | [b'M', b'M', 0x00, 0x2A, ..] => Some(RasterFormat::Tiff),
            [b'B', b'M', ..] => Some(RasterFormat::Bmp),
            _ => None,
        }
    }

    pub fn from_extension(ext: &str) -> Option<RasterFormat> {
        match ext.to_ascii_lowercase().as_str() {
            "png" => Some(RasterFormat::Png),
            "jpg" | "jpeg" => Some(RasterFormat::Jpeg),
            "gif" => Some(RasterFormat::Gif),
            "webp" => Some(RasterFormat::Webp),
            "tif" | "tiff" => Some(RasterFormat::Tiff),
            "bmp" => Some(RasterFormat::Bmp),
            _ => None,
        }
    }
}

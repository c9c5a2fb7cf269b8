use regex::Regex;

use super::errors::ScanError;
use super::value_objects::{Dpi, Orientation, PaperSize};

/// Resolved scan settings sent to the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanParameters {
    pub dpi: Dpi,
    pub width: u32,
    pub height: u32,
    pub orientation: Orientation,
}

impl ScanParameters {
    /// Resolves the paper size, turning it sideways for landscape scans of portrait-shaped areas.
    pub fn new(dpi: Dpi, size: PaperSize, orientation: Orientation) -> Self {
        let (mut width, mut height) = size.dimensions();
        if orientation == Orientation::Landscape && height > width {
            std::mem::swap(&mut width, &mut height);
        }

        Self {
            dpi,
            width,
            height,
            orientation,
        }
    }
}

/// Fields of the job metadata document needed to download the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobMetadata {
    pub binary_url: String,
    pub image_width: u32,
    pub image_height: u32,
}

const BINARY_URL_TAG: &str = "BinaryURL";
const IMAGE_WIDTH_TAG: &str = "ImageWidth";
const IMAGE_HEIGHT_TAG: &str = "ImageHeight";

/// First occurrence of `<tag>value</tag>`, trimmed. Empty values count as missing.
fn extract(body: &str, tag: &'static str) -> Result<String, ScanError> {
    Regex::new(&format!(r"(?s)<{tag}>(.*?)</{tag}>"))
        .ok()
        .and_then(|re| {
            re.captures(body)
                .and_then(|captures| captures.get(1))
                .map(|m| m.as_str().trim().to_string())
        })
        .filter(|value| !value.is_empty())
        .ok_or(ScanError::MissingField(tag))
}

fn extract_dimension(body: &str, tag: &'static str) -> Result<u32, ScanError> {
    let raw = extract(body, tag)?;
    match raw.parse::<u32>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(ScanError::InvalidField {
            field: tag,
            value: raw,
        }),
    }
}

impl JobMetadata {
    pub fn parse(body: &str) -> Result<Self, ScanError> {
        Ok(Self {
            binary_url: extract(body, BINARY_URL_TAG)?,
            image_width: extract_dimension(body, IMAGE_WIDTH_TAG)?,
            image_height: extract_dimension(body, IMAGE_HEIGHT_TAG)?,
        })
    }

    /// Byte count of the page payload announced by this metadata.
    pub fn expected_payload_len(&self) -> Result<usize, ScanError> {
        rgb_payload_len(self.image_width, self.image_height)
    }
}

/// `width * height * 3`, or a decode error when the raster cannot be addressed.
fn rgb_payload_len(width: u32, height: u32) -> Result<usize, ScanError> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|pixels| pixels.checked_mul(RawImage::CHANNELS))
        .ok_or_else(|| {
            ScanError::Decode(format!(
                "{}x{} RGB raster exceeds addressable memory",
                width, height
            ))
        })
}

/// Interleaved 8-bit RGB pixels, row-major, no row padding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl RawImage {
    pub const CHANNELS: usize = 3;

    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, ScanError> {
        let expected = rgb_payload_len(width, height)?;
        if pixels.len() != expected {
            return Err(ScanError::SizeMismatch {
                expected,
                actual: pixels.len(),
            });
        }

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }
}

use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use image::{ImageError, ImageFormat, RgbImage};

use business::domain::scan::errors::ScanError;
use business::domain::scan::model::RawImage;
use business::domain::scan::output_path::next_available_path;
use business::domain::scan::services::ImageWriterService;

/// Writes scans to the local filesystem, never replacing an existing file.
pub struct ImageFileWriter;

impl ImageFileWriter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ImageFileWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Interprets the payload as an interleaved 8-bit RGB raster.
pub fn to_rgb_image(image: RawImage) -> Result<RgbImage, ScanError> {
    let (width, height) = (image.width(), image.height());
    RgbImage::from_raw(width, height, image.into_pixels()).ok_or_else(|| {
        ScanError::Decode(format!(
            "buffer does not hold a {}x{} RGB raster",
            width, height
        ))
    })
}

fn map_image_error(path: &Path, error: ImageError) -> ScanError {
    match error {
        ImageError::IoError(e) => ScanError::Io(format!("{}: {}", path.display(), e)),
        other => ScanError::Decode(format!("{}: {}", path.display(), other)),
    }
}

/// Encodes `image` into a newly created file at `path`.
pub fn write_image(image: &RgbImage, path: &Path) -> Result<(), ScanError> {
    let format = ImageFormat::from_path(path).map_err(|e| map_image_error(path, e))?;

    let file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|e| ScanError::Io(format!("{}: {}", path.display(), e)))?;
    let mut writer = BufWriter::new(file);

    image
        .write_to(&mut writer, format)
        .map_err(|e| map_image_error(path, e))?;
    writer
        .flush()
        .map_err(|e| ScanError::Io(format!("{}: {}", path.display(), e)))?;

    tracing::debug!(
        "Encoded {}x{} image as {:?} to {}",
        image.width(),
        image.height(),
        format,
        path.display()
    );
    Ok(())
}

#[async_trait]
impl ImageWriterService for ImageFileWriter {
    fn resolve_output_path(&self, requested: &Path) -> PathBuf {
        next_available_path(requested, Path::exists)
    }

    async fn save(&self, image: RawImage, path: &Path) -> Result<(), ScanError> {
        let path = path.to_path_buf();
        tokio::task::spawn_blocking(move || {
            let raster = to_rgb_image(image)?;
            write_image(&raster, &path)
        })
        .await
        .map_err(|e| ScanError::Io(e.to_string()))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn gradient(width: u32, height: u32) -> Vec<u8> {
        (0..width * height * 3).map(|i| (i * 7 % 256) as u8).collect()
    }

    #[test]
    fn should_build_raster_with_exact_pixels() {
        let pixels = vec![255, 0, 0, 0, 255, 0, 0, 0, 255, 1, 2, 3];
        let raster = to_rgb_image(RawImage::new(2, 2, pixels).unwrap()).unwrap();

        assert_eq!(raster.dimensions(), (2, 2));
        assert_eq!(raster.get_pixel(1, 0).0, [0, 255, 0]);
        assert_eq!(raster.get_pixel(1, 1).0, [1, 2, 3]);
    }

    #[tokio::test]
    async fn should_round_trip_pixels_through_png() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("scan.png");
        let pixels = gradient(5, 3);

        ImageFileWriter::new()
            .save(RawImage::new(5, 3, pixels.clone()).unwrap(), &path)
            .await
            .unwrap();

        let decoded = image::open(&path).unwrap().to_rgb8();
        assert_eq!(decoded.dimensions(), (5, 3));
        assert_eq!(decoded.into_raw(), pixels);
    }

    #[test]
    fn should_pick_first_free_name() {
        let dir = tempdir().unwrap();
        let requested = dir.path().join("scan.png");
        let writer = ImageFileWriter::new();

        assert_eq!(writer.resolve_output_path(&requested), requested);

        fs::write(&requested, b"taken").unwrap();
        assert_eq!(
            writer.resolve_output_path(&requested),
            dir.path().join("scan1.png")
        );

        fs::write(dir.path().join("scan1.png"), b"taken").unwrap();
        assert_eq!(
            writer.resolve_output_path(&requested),
            dir.path().join("scan2.png")
        );
    }

    #[tokio::test]
    async fn should_not_overwrite_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("scan.png");
        fs::write(&path, b"keep me").unwrap();

        let result = ImageFileWriter::new()
            .save(RawImage::new(1, 1, vec![0, 0, 0]).unwrap(), &path)
            .await;

        assert!(matches!(result, Err(ScanError::Io(_))));
        assert_eq!(fs::read(&path).unwrap(), b"keep me");
    }

    #[tokio::test]
    async fn should_reject_unknown_extension_without_writing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("scan.unknown");

        let result = ImageFileWriter::new()
            .save(RawImage::new(1, 1, vec![0, 0, 0]).unwrap(), &path)
            .await;

        assert!(result.is_err());
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn should_fail_when_directory_missing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("scan.png");

        let result = ImageFileWriter::new()
            .save(RawImage::new(1, 1, vec![0, 0, 0]).unwrap(), &path)
            .await;

        assert!(matches!(result, Err(ScanError::Io(_))));
    }
}

use crate::constants::{INFO_PREFIX, SIZE_PREFIX, SUCCESS_PREFIX};
use crate::convert::{convert_file, ConversionStats};
use crate::error::Result;
use crate::scan::{collect_image_files, webp_output_path};
use crate::utils::{calculate_compression_ratio, format_file_size};
use crate::{error, info, verbose};
use std::path::Path;
use std::time::{Duration, Instant};

/// Totals for one run over a directory tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub converted: usize,
    pub failed: usize,
    pub bytes_before: u64,
    pub bytes_after: u64,
    pub elapsed: Duration,
}

impl BatchSummary {
    pub fn processed(&self) -> usize {
        self.converted + self.failed
    }

    fn record_success(&mut self, stats: ConversionStats) {
        self.converted += 1;
        self.bytes_before += stats.original_size;
        self.bytes_after += stats.converted_size;
    }
}

/// Converts every PNG and JPEG under `root` into a sibling `.webp` file.
///
/// Files are handled one at a time. A file that fails to convert is reported
/// on its own line and the run moves on; only a failure to enumerate `root`
/// itself is returned as an error.
pub fn convert_directory(root: &Path) -> Result<BatchSummary> {
    let start_time = Instant::now();

    let image_files = collect_image_files(root)?;
    let mut summary = BatchSummary::default();

    for input_path in &image_files {
        match convert_single_image(input_path) {
            Ok(stats) => summary.record_success(stats),
            Err(e) => {
                error!("Error converting {}: {}", input_path.display(), e);
                summary.failed += 1;
            }
        }
    }

    summary.elapsed = start_time.elapsed();
    print_summary(root, &summary);

    Ok(summary)
}

fn convert_single_image(input_path: &Path) -> Result<ConversionStats> {
    let output_path = webp_output_path(input_path)?;
    let stats = convert_file(input_path, &output_path)?;

    info!(
        "{} Converted: {} -> {}",
        SUCCESS_PREFIX,
        input_path.display(),
        output_path.display()
    );
    verbose!(
        "{} -> {} ({:.1}% reduction)",
        format_file_size(stats.original_size),
        format_file_size(stats.converted_size),
        calculate_compression_ratio(stats.original_size, stats.converted_size)
    );

    Ok(stats)
}

fn print_summary(root: &Path, summary: &BatchSummary) {
    verbose!("{} Conversion Summary:", INFO_PREFIX);
    verbose!("  Found: {} image files under {}", summary.processed(), root.display());
    verbose!("  Converted: {}", summary.converted);
    verbose!("  Failed: {}", summary.failed);
    verbose!(
        "  {} Total size: {} -> {} ({:.1}%)",
        SIZE_PREFIX,
        format_file_size(summary.bytes_before),
        format_file_size(summary.bytes_after),
        calculate_compression_ratio(summary.bytes_before, summary.bytes_after)
    );
    verbose!("  Total time: {:?}", summary.elapsed);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConvertError;
    use image::{ImageFormat, RgbImage};
    use std::fs::{self, File};
    use tempfile::TempDir;

    fn write_png(path: &Path) {
        RgbImage::new(10, 10)
            .save_with_format(path, ImageFormat::Png)
            .unwrap();
    }

    fn write_jpeg(path: &Path) {
        RgbImage::new(10, 10)
            .save_with_format(path, ImageFormat::Jpeg)
            .unwrap();
    }

    #[test]
    fn test_convert_directory_mixed_files() {
        let temp_dir = TempDir::new().unwrap();
        write_png(&temp_dir.path().join("a.png"));
        write_jpeg(&temp_dir.path().join("b.JPG"));
        fs::write(temp_dir.path().join("c.txt"), b"not an image").unwrap();

        let summary = convert_directory(temp_dir.path()).unwrap();

        assert_eq!(summary.converted, 2);
        assert_eq!(summary.failed, 0);
        assert!(temp_dir.path().join("a.webp").exists());
        assert!(temp_dir.path().join("b.webp").exists());
        assert!(!temp_dir.path().join("c.webp").exists());
    }

    #[test]
    fn test_convert_directory_continues_after_failure() {
        let temp_dir = TempDir::new().unwrap();
        File::create(temp_dir.path().join("d.jpg")).unwrap();
        write_png(&temp_dir.path().join("e.png"));
        write_jpeg(&temp_dir.path().join("f.jpeg"));

        let summary = convert_directory(temp_dir.path()).unwrap();

        assert_eq!(summary.converted, 2);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.processed(), 3);
        assert!(!temp_dir.path().join("d.webp").exists());
        assert!(temp_dir.path().join("e.webp").exists());
        assert!(temp_dir.path().join("f.webp").exists());
    }

    #[test]
    fn test_convert_directory_nested() {
        let temp_dir = TempDir::new().unwrap();
        let subdir = temp_dir.path().join("sub");
        fs::create_dir(&subdir).unwrap();
        write_jpeg(&subdir.join("e.jpeg"));

        let summary = convert_directory(temp_dir.path()).unwrap();

        assert_eq!(summary.converted, 1);
        assert!(subdir.join("e.webp").exists());
        assert!(!temp_dir.path().join("e.webp").exists());
    }

    #[test]
    fn test_convert_directory_twice() {
        let temp_dir = TempDir::new().unwrap();
        write_png(&temp_dir.path().join("a.png"));

        let first = convert_directory(temp_dir.path()).unwrap();
        let second = convert_directory(temp_dir.path()).unwrap();

        assert_eq!(first.converted, 1);
        assert_eq!(second.converted, 1);
        assert_eq!(second.failed, 0);
    }

    #[test]
    fn test_convert_directory_tracks_sizes() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("a.png");
        write_png(&input);

        let summary = convert_directory(temp_dir.path()).unwrap();

        assert_eq!(summary.bytes_before, fs::metadata(&input).unwrap().len());
        assert_eq!(
            summary.bytes_after,
            fs::metadata(temp_dir.path().join("a.webp")).unwrap().len()
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_convert_directory_reports_dangling_symlink() {
        let temp_dir = TempDir::new().unwrap();
        std::os::unix::fs::symlink(
            temp_dir.path().join("nowhere.png"),
            temp_dir.path().join("x.png"),
        )
        .unwrap();
        write_png(&temp_dir.path().join("y.png"));

        let summary = convert_directory(temp_dir.path()).unwrap();

        assert_eq!(summary.failed, 1);
        assert_eq!(summary.converted, 1);
        assert!(!temp_dir.path().join("x.webp").exists());
        assert!(temp_dir.path().join("y.webp").exists());
    }

    #[test]
    fn test_convert_directory_missing_root() {
        let temp_dir = TempDir::new().unwrap();

        let result = convert_directory(&temp_dir.path().join("missing"));
        assert!(matches!(result, Err(ConvertError::RootNotFound(_))));
    }

    #[test]
    fn test_convert_directory_empty() {
        let temp_dir = TempDir::new().unwrap();

        let summary = convert_directory(temp_dir.path()).unwrap();
        assert_eq!(summary.processed(), 0);
    }
}

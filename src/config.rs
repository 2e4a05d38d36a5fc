//! Configuration types for a batch conversion run.
//!
//! All behaviour is controlled through [`BatchConfig`], built via its
//! [`BatchConfigBuilder`]. Keeping every knob in one immutable struct avoids
//! hidden module-level state and makes a run reproducible: serialise the
//! config, and two runs with equal configs produce equal output trees.
//!
//! # Design choice: builder over constructor
//! An eight-field constructor breaks on every new field. The builder lets
//! callers set only what they care about and rely on documented defaults for
//! the rest.

use crate::error::BatchError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for a batch PDF-to-image run.
///
/// Built via [`BatchConfig::builder()`] or [`BatchConfig::default()`].
///
/// # Example
/// ```rust
/// use pdf2img::{BatchConfig, OutputFormat};
///
/// let config = BatchConfig::builder()
///     .input_dir("./pdfs")
///     .output_dir("./images")
///     .dpi(300)
///     .format(OutputFormat::Jpeg)
///     .extension("jpg")
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Directory scanned for `.pdf` files (case-insensitive extension match).
    /// Default: `./pdfs`.
    pub input_dir: PathBuf,

    /// Directory receiving one image file per rendered page. Created if
    /// absent. Default: `./images`.
    pub output_dir: PathBuf,

    /// Rendering resolution in dots per inch. Range: 72–600. Default: 400.
    ///
    /// 300–400 DPI gives sharp text for archival scans; PDF page geometry is
    /// expressed in 72-dpi points, so the renderer scales by `dpi / 72`.
    pub dpi: u32,

    /// File extension for output names, without the dot. Default: `"png"`.
    ///
    /// Independent of [`format`](Self::format): a mismatched pair (e.g.
    /// `"jpg"` with [`OutputFormat::Png`]) still writes valid files, just
    /// with a misleading extension, since the encoder is told the format
    /// explicitly.
    pub extension: String,

    /// Encoding format passed to the image encoder. Default: [`OutputFormat::Png`].
    pub format: OutputFormat,

    /// Trim uniform-colour borders from each page before writing. Default: true.
    pub trim_borders: bool,

    /// Reference background colour for border trimming, as an RGB triple.
    /// Default: black `[0, 0, 0]`.
    pub border_color: [u8; 3],

    /// Maximum luminance-weighted distance from [`border_color`](Self::border_color)
    /// still classified as background, 0–255. Default: 10.
    ///
    /// Higher values trim more aggressively: near-black edges go away but a
    /// dark page body may start being eaten into.
    pub trim_tolerance: u8,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("./pdfs"),
            output_dir: PathBuf::from("./images"),
            dpi: 400,
            extension: "png".to_string(),
            format: OutputFormat::Png,
            trim_borders: true,
            border_color: [0, 0, 0],
            trim_tolerance: 10,
        }
    }
}

impl BatchConfig {
    /// Create a new builder for `BatchConfig`.
    pub fn builder() -> BatchConfigBuilder {
        BatchConfigBuilder {
            config: Self::default(),
        }
    }
}

/// Builder for [`BatchConfig`].
#[derive(Debug)]
pub struct BatchConfigBuilder {
    config: BatchConfig,
}

impl BatchConfigBuilder {
    pub fn input_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.input_dir = dir.into();
        self
    }

    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.output_dir = dir.into();
        self
    }

    pub fn dpi(mut self, dpi: u32) -> Self {
        self.config.dpi = dpi.clamp(72, 600);
        self
    }

    pub fn extension(mut self, ext: impl Into<String>) -> Self {
        self.config.extension = ext.into();
        self
    }

    pub fn format(mut self, format: OutputFormat) -> Self {
        self.config.format = format;
        self
    }

    pub fn trim_borders(mut self, v: bool) -> Self {
        self.config.trim_borders = v;
        self
    }

    pub fn border_color(mut self, rgb: [u8; 3]) -> Self {
        self.config.border_color = rgb;
        self
    }

    pub fn trim_tolerance(mut self, tolerance: u8) -> Self {
        self.config.trim_tolerance = tolerance;
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<BatchConfig, BatchError> {
        let c = &self.config;
        if c.dpi < 72 || c.dpi > 600 {
            return Err(BatchError::InvalidConfig(format!(
                "DPI must be 72–600, got {}",
                c.dpi
            )));
        }
        if c.extension.is_empty() || c.extension.starts_with('.') {
            return Err(BatchError::InvalidConfig(format!(
                "Extension must be non-empty and given without a dot, got '{}'",
                c.extension
            )));
        }
        Ok(self.config)
    }
}

/// Encoding format for output files.
///
/// PNG is lossless and the right default for archival page images; JPEG
/// trades text crispness for smaller files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Lossless PNG (default).
    #[default]
    Png,
    /// Lossy JPEG.
    Jpeg,
}

impl OutputFormat {
    /// The `image` crate format tag passed to the encoder.
    pub fn image_format(self) -> image::ImageFormat {
        match self {
            OutputFormat::Png => image::ImageFormat::Png,
            OutputFormat::Jpeg => image::ImageFormat::Jpeg,
        }
    }

    /// The conventional file extension for this format.
    pub fn default_extension(self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Jpeg => "jpg",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let c = BatchConfig::default();
        assert_eq!(c.input_dir, PathBuf::from("./pdfs"));
        assert_eq!(c.output_dir, PathBuf::from("./images"));
        assert_eq!(c.dpi, 400);
        assert_eq!(c.extension, "png");
        assert_eq!(c.format, OutputFormat::Png);
        assert!(c.trim_borders);
        assert_eq!(c.border_color, [0, 0, 0]);
        assert_eq!(c.trim_tolerance, 10);
    }

    #[test]
    fn builder_clamps_dpi() {
        let c = BatchConfig::builder().dpi(10_000).build().unwrap();
        assert_eq!(c.dpi, 600);
        let c = BatchConfig::builder().dpi(1).build().unwrap();
        assert_eq!(c.dpi, 72);
    }

    #[test]
    fn dotted_extension_rejected() {
        let err = BatchConfig::builder().extension(".png").build();
        assert!(matches!(err, Err(BatchError::InvalidConfig(_))));
    }

    #[test]
    fn format_extension_pairs() {
        assert_eq!(OutputFormat::Png.default_extension(), "png");
        assert_eq!(OutputFormat::Jpeg.default_extension(), "jpg");
        assert_eq!(OutputFormat::Png.image_format(), image::ImageFormat::Png);
        assert_eq!(OutputFormat::Jpeg.image_format(), image::ImageFormat::Jpeg);
    }
}

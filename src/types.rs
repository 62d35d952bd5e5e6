//! Shared input and output types.
//!
//! A layout is plain data: the engine is handed [`ImageSource`] values and
//! returns a [`Layout`] of rows, with every image addressed by its index in
//! the input sequence. All types serialize with serde so a host pipeline can
//! persist computed layouts between stages.

use serde::{Deserialize, Serialize};

/// A single image to lay out, described by its intrinsic geometry only.
///
/// The engine never touches pixels or files — an `ImageSource` carries the
/// two numbers the algorithm needs and nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImageSource {
    /// Intrinsic width divided by intrinsic height.
    pub aspect_ratio: f64,
    /// Per-image height cap in pixels. `None` falls back to the global
    /// [`default_max_height`](crate::config::LayoutConfig::default_max_height).
    /// A looser value than the global cap has no effect — the tightest cap
    /// in a row wins.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_height: Option<f64>,
}

impl ImageSource {
    /// An image with the given aspect ratio and no per-image cap.
    pub fn new(aspect_ratio: f64) -> Self {
        Self {
            aspect_ratio,
            max_height: None,
        }
    }

    /// Build from intrinsic pixel dimensions.
    ///
    /// # Examples
    /// ```
    /// # use rowfit::ImageSource;
    /// // A 3:2 landscape frame
    /// let img = ImageSource::from_dimensions(6000, 4000);
    /// assert!((img.aspect_ratio - 1.5).abs() < 1e-9);
    /// ```
    ///
    /// A zero intrinsic height yields a non-finite ratio, which
    /// [`layout`](crate::layout::layout) rejects rather than dividing by.
    pub fn from_dimensions(width: u32, height: u32) -> Self {
        Self::new(f64::from(width) / f64::from(height))
    }

    /// Cap this image's display height below the global default.
    pub fn with_max_height(mut self, max_height: f64) -> Self {
        self.max_height = Some(max_height);
        self
    }
}

/// One image's computed display size within a row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizedImage {
    /// Position in the original input sequence.
    pub index: usize,
    /// Display width in pixels (`height * aspect_ratio`).
    pub width: f64,
    /// Display height in pixels; shared by every image in the row.
    pub height: f64,
}

/// A horizontal group of images sharing one display height.
///
/// Every row except possibly the last spans the container exactly. The
/// terminal row may fall short when its images cannot be spread wide enough
/// without exceeding the height cap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    /// Display height shared by every image in this row.
    pub height: f64,
    /// Sized images in input order.
    pub images: Vec<SizedImage>,
}

impl Row {
    /// Total horizontal space this row occupies: image widths plus
    /// `image_padding` once per image.
    pub fn total_width(&self, image_padding: f64) -> f64 {
        let content: f64 = self.images.iter().map(|img| img.width).sum();
        content + image_padding * self.images.len() as f64
    }
}

/// The result of one layout pass: rows in display order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub rows: Vec<Row>,
}

impl Layout {
    /// The height chosen for each row, in order — including the terminal
    /// orphan row's capped height. Diagnostic output; everything here is
    /// also available on the rows themselves.
    pub fn row_heights(&self) -> Vec<f64> {
        self.rows.iter().map(|row| row.height).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_dimensions_landscape() {
        let img = ImageSource::from_dimensions(1920, 1080);
        assert!((img.aspect_ratio - 16.0 / 9.0).abs() < 1e-9);
        assert_eq!(img.max_height, None);
    }

    #[test]
    fn from_dimensions_portrait() {
        let img = ImageSource::from_dimensions(1080, 1920);
        assert!((img.aspect_ratio - 0.5625).abs() < 1e-9);
    }

    #[test]
    fn from_dimensions_zero_height_is_not_finite() {
        let img = ImageSource::from_dimensions(1920, 0);
        assert!(!img.aspect_ratio.is_finite());
    }

    #[test]
    fn with_max_height_sets_override() {
        let img = ImageSource::new(1.5).with_max_height(250.0);
        assert_eq!(img.max_height, Some(250.0));
    }

    #[test]
    fn row_total_width_includes_padding_per_image() {
        let row = Row {
            height: 100.0,
            images: vec![
                SizedImage {
                    index: 0,
                    width: 150.0,
                    height: 100.0,
                },
                SizedImage {
                    index: 1,
                    width: 100.0,
                    height: 100.0,
                },
            ],
        };
        assert!((row.total_width(6.0) - 262.0).abs() < 1e-9);
        assert!((row.total_width(0.0) - 250.0).abs() < 1e-9);
    }

    #[test]
    fn row_heights_lists_rows_in_order() {
        let layout = Layout {
            rows: vec![
                Row {
                    height: 180.0,
                    images: vec![],
                },
                Row {
                    height: 400.0,
                    images: vec![],
                },
            ],
        };
        assert_eq!(layout.row_heights(), vec![180.0, 400.0]);
    }

    #[test]
    fn image_source_skips_absent_cap_when_serialized() {
        let json = serde_json::to_string(&ImageSource::new(1.5)).unwrap();
        assert_eq!(json, r#"{"aspect_ratio":1.5}"#);
    }
}

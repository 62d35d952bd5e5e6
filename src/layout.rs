//! Justified row partitioning.
//!
//! The core of the crate: split an ordered image list into rows and pick one
//! display height per row so that each row's images, scaled by their aspect
//! ratios, exactly fill the container width.
//!
//! ## Algorithm
//!
//! Rows are built greedily over a shrinking suffix of the input:
//!
//! 1. Starting at the cursor, grow a candidate row one image at a time.
//! 2. For each candidate of `n` images, solve for the height at which the
//!    row spans the container exactly:
//!    `(container_width - n * image_padding) / Σ aspect_ratio`.
//!    Fewer images per row means a taller row.
//! 3. The first candidate whose justified height drops strictly under the
//!    row's height cap is emitted, and the cursor advances past it.
//! 4. If even the full remaining suffix cannot get under the cap, those
//!    images become the terminal orphan row: sized at the cap, not
//!    stretched to the container.
//!
//! The recursive formulation — fit one row, recurse on the rest — is
//! expressed as a loop. Each accepted row strictly shrinks the suffix and
//! the orphan case ends the pass, so termination is structural.
//!
//! ## Cost
//!
//! Worst case O(k²) per row of `k` images from re-evaluating growing
//! candidates. Galleries are tens to low hundreds of images; a full pass is
//! well under a millisecond, so there is no incremental mode. For many
//! independent containers, [`layout_batch`] fans out over rayon's pool.

use crate::config::{ConfigError, LayoutConfig};
use crate::types::{ImageSource, Layout, Row, SizedImage};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    #[error("Image {index} has invalid aspect ratio {value}; expected a finite positive number")]
    InvalidAspectRatio { index: usize, value: f64 },
    #[error("Image {index} has invalid max height {value}; expected a finite positive number")]
    InvalidMaxHeight { index: usize, value: f64 },
    #[error(
        "Padding for {count} images leaves no horizontal room in a {container_width}px container"
    )]
    PaddingExceedsWidth { count: usize, container_width: f64 },
}

/// Partition `images` into justified rows.
///
/// Every row except possibly the last spans `config.container_width`
/// exactly; the last row may instead be an orphan row sized at its height
/// cap. Images keep their input order and are addressed by index in the
/// result. An empty input yields an empty layout.
///
/// # Errors
///
/// Fails before producing any row when the config is malformed, an aspect
/// ratio or per-image cap is non-finite or non-positive, or per-image
/// padding alone meets the container width for some attempted row. There is
/// no partial result: the caller decides whether to drop the offending
/// image or abort the pass.
///
/// # Examples
/// ```
/// # use rowfit::{layout, ImageSource, LayoutConfig};
/// let images = [ImageSource::new(1.5), ImageSource::new(1.5)];
/// let config = LayoutConfig {
///     image_padding: 0.0,
///     ..LayoutConfig::new(600.0)
/// };
/// let result = layout(&images, &config).unwrap();
/// assert_eq!(result.rows.len(), 1);
/// assert_eq!(result.rows[0].height, 200.0);
/// assert_eq!(result.rows[0].images[0].width, 300.0);
/// ```
pub fn layout(images: &[ImageSource], config: &LayoutConfig) -> Result<Layout, LayoutError> {
    config.validate()?;
    validate_images(images)?;

    let mut rows = Vec::new();
    let mut cursor = 0;
    while cursor < images.len() {
        let suffix = &images[cursor..];
        match fit_row(suffix, config)? {
            Fit::Justified { len, height } => {
                rows.push(build_row(cursor, &suffix[..len], height));
                cursor += len;
            }
            Fit::Orphan { height } => {
                rows.push(build_row(cursor, suffix, height));
                break;
            }
        }
    }

    Ok(Layout { rows })
}

/// One gallery to lay out: its images plus its container geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutJob {
    pub images: Vec<ImageSource>,
    pub config: LayoutConfig,
}

/// Lay out several independent galleries in parallel.
///
/// Each job is a self-contained [`layout`] call on rayon's pool; results
/// come back in job order, and one failing job does not affect the others.
pub fn layout_batch(jobs: &[LayoutJob]) -> Vec<Result<Layout, LayoutError>> {
    jobs.par_iter()
        .map(|job| layout(&job.images, &job.config))
        .collect()
}

/// Outcome of fitting one row at the head of a suffix.
enum Fit {
    /// The first `len` images justify to the container at `height`.
    Justified { len: usize, height: f64 },
    /// No prefix of the suffix fits under its cap; the whole suffix is the
    /// terminal row at the cap.
    Orphan { height: f64 },
}

fn fit_row(suffix: &[ImageSource], config: &LayoutConfig) -> Result<Fit, LayoutError> {
    for len in 1..=suffix.len() {
        let candidate = &suffix[..len];
        let cap = row_max_height(candidate, config.default_max_height);
        let height = justified_height(candidate, config)?;
        // Strict: a row landing exactly on the cap keeps growing.
        if height < cap {
            return Ok(Fit::Justified { len, height });
        }
    }
    Ok(Fit::Orphan {
        height: row_max_height(suffix, config.default_max_height),
    })
}

/// Height at which `candidate`, scaled by aspect ratio and separated by
/// per-image padding, spans the container exactly.
fn justified_height(candidate: &[ImageSource], config: &LayoutConfig) -> Result<f64, LayoutError> {
    let padding = candidate.len() as f64 * config.image_padding;
    let available = config.container_width - padding;
    if available <= 0.0 {
        return Err(LayoutError::PaddingExceedsWidth {
            count: candidate.len(),
            container_width: config.container_width,
        });
    }
    let total_aspect: f64 = candidate.iter().map(|img| img.aspect_ratio).sum();
    Ok(available / total_aspect)
}

/// Binding height cap for a candidate row: the tightest per-image override
/// among its members, or the global default when none is tighter.
fn row_max_height(candidate: &[ImageSource], default_max_height: f64) -> f64 {
    candidate
        .iter()
        .filter_map(|img| img.max_height)
        .fold(default_max_height, f64::min)
}

fn build_row(start: usize, images: &[ImageSource], height: f64) -> Row {
    let images = images
        .iter()
        .enumerate()
        .map(|(offset, img)| SizedImage {
            index: start + offset,
            width: height * img.aspect_ratio,
            height,
        })
        .collect();
    Row { height, images }
}

fn validate_images(images: &[ImageSource]) -> Result<(), LayoutError> {
    for (index, img) in images.iter().enumerate() {
        if !img.aspect_ratio.is_finite() || img.aspect_ratio <= 0.0 {
            return Err(LayoutError::InvalidAspectRatio {
                index,
                value: img.aspect_ratio,
            });
        }
        if let Some(max_height) = img.max_height {
            if !max_height.is_finite() || max_height <= 0.0 {
                return Err(LayoutError::InvalidMaxHeight {
                    index,
                    value: max_height,
                });
            }
        }
    }
    Ok(())
}

//! Layout configuration.
//!
//! All geometry the engine needs beyond the images themselves: container
//! width, per-image padding, and the global height cap. The caller measures
//! these once — however its rendering stack exposes them — and passes the
//! numbers in; the engine never measures anything itself.
//!
//! ## Units
//!
//! Everything is in pixels, the same unit as the computed widths and
//! heights. `container_width` is the *usable* width: subtract your
//! container's own padding before passing it.
//!
//! ## Stock Defaults
//!
//! `image_padding` and `default_max_height` default to the values of the
//! gallery this engine was extracted from — 6px of horizontal padding per
//! image and a 400px height cap. `container_width` has no stock default;
//! it is whatever the host measured for the target container.
//!
//! ## Embedding in Host Config
//!
//! The struct deserializes with the same conventions as a site config file:
//! omitted fields take their stock defaults, unknown keys are rejected to
//! catch typos early.
//!
//! ```json
//! { "container_width": 940.0, "default_max_height": 320.0 }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Container geometry and sizing limits for one layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayoutConfig {
    /// Usable container width in pixels, container-level padding already
    /// excluded.
    pub container_width: f64,
    /// Horizontal pixels consumed by each image's own margin and border,
    /// subtracted once per image when solving a row.
    #[serde(default = "default_image_padding")]
    pub image_padding: f64,
    /// Height cap applied to rows whose images carry no per-image override.
    #[serde(default = "default_max_height")]
    pub default_max_height: f64,
}

fn default_image_padding() -> f64 {
    6.0
}

fn default_max_height() -> f64 {
    400.0
}

impl LayoutConfig {
    /// A config for the given container width with stock padding and cap.
    pub fn new(container_width: f64) -> Self {
        Self {
            container_width,
            image_padding: default_image_padding(),
            default_max_height: default_max_height(),
        }
    }

    /// Validate config values are usable geometry.
    ///
    /// `container_width` and `default_max_height` must be finite and
    /// positive. `image_padding` must be finite and non-negative — zero
    /// padding is a legitimate flush layout.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.container_width.is_finite() || self.container_width <= 0.0 {
            return Err(ConfigError::Validation(format!(
                "container_width must be finite and positive, got {}",
                self.container_width
            )));
        }
        if !self.image_padding.is_finite() || self.image_padding < 0.0 {
            return Err(ConfigError::Validation(format!(
                "image_padding must be finite and non-negative, got {}",
                self.image_padding
            )));
        }
        if !self.default_max_height.is_finite() || self.default_max_height <= 0.0 {
            return Err(ConfigError::Validation(format!(
                "default_max_height must be finite and positive, got {}",
                self.default_max_height
            )));
        }
        Ok(())
    }
}

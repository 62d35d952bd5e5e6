//! # Rowfit
//!
//! A justified row layout engine for photo galleries. Given an ordered list
//! of images with known intrinsic aspect ratios and a container width, rowfit
//! partitions the list into rows and assigns every image a display height and
//! width such that each row's images collectively span the container exactly,
//! without cropping or distorting anything.
//!
//! # How a Layout Is Built
//!
//! Rows are packed greedily over a shrinking suffix of the input:
//!
//! ```text
//! 1. Grow a candidate row one image at a time.
//! 2. Solve for the height that makes the candidate span the container:
//!    fewer images per row means a taller row.
//! 3. Emit the first candidate whose justified height drops under the
//!    row's height cap, then repeat on the remaining images.
//! 4. Images that can never get under the cap — typically a short trailing
//!    remainder — become the final "orphan" row, sized at the cap instead
//!    of stretched to the container.
//! ```
//!
//! The height cap is what shapes the result: a tight cap packs many small
//! images per row, a loose cap lets single images claim whole rows. The
//! global cap can be tightened per image for frames that should never be
//! shown large.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`layout`][mod@layout] | The greedy partition algorithm and the parallel batch entry point |
//! | [`config`] | [`LayoutConfig`] — container geometry, padding, height cap |
//! | [`types`]  | Input and output data: [`ImageSource`], [`Row`], [`SizedImage`], [`Layout`] |
//!
//! # Design Decisions
//!
//! ## Measurement-Free
//!
//! The engine consumes plain numbers — aspect ratios, a container width, a
//! per-image padding — and produces plain numbers. It never measures a DOM
//! or widget tree and never decodes an image. Hosts own measurement:
//! subtract your container's padding before passing its width, and derive
//! aspect ratios from whatever metadata source you already have. This keeps
//! the algorithm testable without a rendering stack and equally usable from
//! a static site generator or a GUI gallery.
//!
//! ## Layouts Are Data
//!
//! Every public type serializes with serde. A build pipeline can compute
//! layouts once and persist them as JSON for a later rendering stage, the
//! same way a scan manifest feeds a generate step. Nothing in a [`Layout`]
//! refers back to live objects — images are addressed by their index in the
//! input sequence.
//!
//! ## No Incremental Re-Layout
//!
//! A layout is a pure function of its inputs. When the container resizes or
//! a new image arrives, callers re-run the whole computation; for realistic
//! gallery sizes (tens to low hundreds of images) a full pass is cheaper
//! than any bookkeeping that would make partial updates correct. Because no
//! state is shared between calls, independent containers can be laid out in
//! parallel — [`layout_batch`] does exactly that on rayon's pool.
//!
//! ## Strict Acceptance
//!
//! A candidate row is emitted only when its justified height is *strictly*
//! under the cap. A row that lands exactly on the cap is treated as not
//! fitting and keeps growing. This matches the gallery this engine was
//! extracted from; with floating point geometry the boundary is hit rarely
//! enough that the distinction is mostly academic, but it is load-bearing
//! for the orphan rule, so it is pinned down by tests.

pub mod config;
pub mod layout;
pub mod types;

pub use config::{ConfigError, LayoutConfig};
pub use layout::{LayoutError, LayoutJob, layout, layout_batch};
pub use types::{ImageSource, Layout, Row, SizedImage};

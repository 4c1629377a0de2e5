//! Merge two images into a rounded icon with a circular badge.
//!
//! The source image keeps its full size. A circle in its top-right corner is
//! cleared, a small corner notch is cut so no square edge shows, and the second
//! image is shrunk to a third of the source and drawn into that circle.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::path::Path;
//! use slack_icon_merger::{merge_files, DEFAULT_OUTPUT_PATH};
//!
//! let report = merge_files(
//!     Path::new("avatar.png"),
//!     Path::new("dog.jpg"),
//!     Path::new(DEFAULT_OUTPUT_PATH),
//! )
//! .expect("merge failed");
//! println!("wrote {} bytes", report.bytes_written);
//! ```
//!
//! # Masks
//!
//! Every pass is driven by an [`AlphaMask`]: a hard-edged circle or rectangle
//! evaluated per pixel on demand, never stored as a buffer.
//!
//! ```
//! use slack_icon_merger::{AlphaMask, Rect, Shape};
//!
//! let area = Rect::from_size(10, 10);
//! let mask = AlphaMask::new(area, area, false, Shape::Circle);
//! assert_eq!(mask.opacity(5, 5), 255);
//! assert_eq!(mask.opacity(0, 0), 0);
//! ```

#![deny(missing_docs)]

pub mod compositor;
mod engine;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod mask;

pub use compositor::compose;
pub use engine::{
    decode_image, encode_png, load_image, merge_files, save_png, MergeReport, DEFAULT_OUTPUT_PATH,
};
pub use error::{Error, Result};
pub use geometry::{Point, Rect};
pub use layout::Layout;
pub use mask::{AlphaMask, Shape};

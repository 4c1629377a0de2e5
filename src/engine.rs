//! File-level glue: decode the inputs, compose, encode and write the PNG.

use std::fs::File;
use std::io::{BufRead, BufReader, Cursor, Seek};
use std::path::{Path, PathBuf};

use image::codecs::png::PngEncoder;
use image::{DynamicImage, ExtendedColorType, ImageEncoder, ImageReader, RgbaImage};

use crate::compositor;
use crate::error::{Error, Result};
use crate::layout::Layout;

/// Where the command-line tool writes its result.
pub const DEFAULT_OUTPUT_PATH: &str = "./merged.png";

/// Summary of a completed merge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeReport {
    /// Path the PNG was written to.
    pub output: PathBuf,
    /// Dimensions of the source (and output) image.
    pub source_size: (u32, u32),
    /// Dimensions of the overlay before resizing.
    pub overlay_size: (u32, u32),
    /// Geometry used for compositing.
    pub layout: Layout,
    /// Size of the encoded PNG in bytes.
    pub bytes_written: usize,
}

/// Decode an image from a reader, detecting the format from its contents.
///
/// # Errors
///
/// Returns [`Error::Decode`] (tagged with `path` for reporting) when the format
/// is unrecognized or the data is corrupt.
pub fn decode_image<R: BufRead + Seek>(reader: R, path: &Path) -> Result<DynamicImage> {
    let decode_err = |source: image::ImageError| Error::Decode {
        path: path.to_path_buf(),
        source,
    };

    ImageReader::new(reader)
        .with_guessed_format()
        .map_err(|e| decode_err(image::ImageError::IoError(e)))?
        .decode()
        .map_err(decode_err)
}

/// Open and decode an image file. The file extension is ignored.
///
/// # Errors
///
/// Returns [`Error::Open`] if the file cannot be opened and [`Error::Decode`]
/// if its contents are not a supported image.
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    let file = File::open(path).map_err(|source| Error::Open {
        path: path.to_path_buf(),
        source,
    })?;
    decode_image(BufReader::new(file), path)
}

/// Encode an RGBA raster as PNG into memory.
///
/// # Errors
///
/// Returns [`Error::Encode`] if the encoder rejects the image.
pub fn encode_png(img: &RgbaImage) -> Result<Vec<u8>> {
    let mut buf = Cursor::new(Vec::new());
    PngEncoder::new(&mut buf)
        .write_image(
            img.as_raw(),
            img.width(),
            img.height(),
            ExtendedColorType::Rgba8,
        )
        .map_err(Error::Encode)?;
    Ok(buf.into_inner())
}

/// Encode `img` and write it to `path`.
///
/// The PNG is fully encoded before the file is created, so an encoding failure
/// leaves no partial output behind.
///
/// # Errors
///
/// Returns [`Error::Encode`] or [`Error::Io`].
pub fn save_png(img: &RgbaImage, path: &Path) -> Result<usize> {
    let bytes = encode_png(img)?;
    std::fs::write(path, &bytes)?;
    Ok(bytes.len())
}

/// Load both inputs, compose them, and write the PNG to `output`.
///
/// Both inputs are decoded before anything is written; any failure aborts
/// the merge without creating `output`.
///
/// # Errors
///
/// Propagates the first open, decode, encode, or write error.
pub fn merge_files(source: &Path, overlay: &Path, output: &Path) -> Result<MergeReport> {
    let src = load_image(source)?;
    let over = load_image(overlay)?;

    let layout = Layout::plan(src.width(), src.height());
    let merged = compositor::compose(&src, &over);
    let bytes_written = save_png(&merged, output)?;

    Ok(MergeReport {
        output: output.to_path_buf(),
        source_size: (src.width(), src.height()),
        overlay_size: (over.width(), over.height()),
        layout,
        bytes_written,
    })
}

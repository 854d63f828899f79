//! This crate contains the image metadata model of dcmview.
//!
//! An [`Image`] aggregates the elements of a parsed DICOM file,
//! indexed both hierarchically and in a flat lookup table,
//! and exposes them through semantically named accessors:
//! dimensions, sample layout, transfer syntax, scaling, windowing,
//! geometry, and the compression category of the pixel data.
//!
//! Loading a DICOM file can be done with ease via the function [`open_file`].
//! For additional reading options, use [`OpenImageOptions`].
//!
//! # Examples
//!
//! ```no_run
//! use dcmview_dictionary_std::tags;
//! use dcmview_object::open_file;
//! # fn foo() -> Result<(), Box<dyn std::error::Error>> {
//! let image = open_file("0001.dcm")?;
//!
//! println!("{} x {}", image.columns(), image.rows());
//! let modality = image.modality();
//! let patient_name = image.string(tags::PATIENT_NAME);
//! if image.is_compressed_jpeg() {
//!     println!("JPEG compressed");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! **Note:** if you need to decode the pixel data,
//! see the `dcmview-pixeldata` crate.
pub mod attributes;
pub mod file;
pub mod geometry;
pub mod image;

pub use crate::attributes::{LutDescriptor, PaletteChannel, SeriesId};
pub use crate::file::{from_bytes, open_file, OpenImageOptions};
pub use crate::geometry::SliceDirection;
pub use crate::image::{Image, ImageBuilder, PixelRepresentation};
pub use dcmview_core::{Compression, Tag};
pub use dcmview_dictionary_std::StandardDataDictionary;

use snafu::Snafu;

/// An error which may occur when loading a DICOM image
#[derive(Debug, Snafu)]
#[non_exhaustive]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("Could not open file '{}'", filename.display()))]
    OpenFile {
        filename: std::path::PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("Could not parse DICOM stream"))]
    ParseStream { source: dcmview_parser::Error },
    /// The image has no pixel data
    MissingPixelData,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

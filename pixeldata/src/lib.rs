#![deny(trivial_numeric_casts, unsafe_code, unstable_features)]
#![warn(
    missing_debug_implementations,
    unused_qualifications,
    unused_import_braces
)]

//! This crate turns the pixel data of a parsed DICOM image
//! into raw per-frame sample buffers.
//!
//! A [`FrameDecoder`] is built once per image.
//! It selects a single decoding strategy ([`DecoderKind`])
//! from the transfer syntax,
//! memoizes the compressed span of each frame,
//! and decodes frames on request into a [`FrameDescriptor`]
//! carrying the samples and the display parameters
//! a presentation layer needs.
//!
//! RLE Lossless is decoded in this crate.
//! The JPEG family is delegated to external codecs
//! behind Cargo features:
//!
//! - `jpeg` (default): baseline, extended and lossless JPEG via `jpeg-decoder`
//! - `charls`: JPEG-LS via CharLS
//! - `openjp2` or `openjpeg-sys`: JPEG 2000 via OpenJPEG
//!
//! # Example
//!
//! ```no_run
//! # use std::error::Error;
//! use dcmview_object::open_file;
//! use dcmview_pixeldata::FrameDecoder;
//! use std::sync::Arc;
//!
//! # fn main() -> Result<(), Box<dyn Error>> {
//! let image = Arc::new(open_file("image.dcm")?);
//! let decoder = FrameDecoder::new(image)?;
//! let frame = decoder.get_frame(0)?;
//! println!("{} x {}, {} bytes", frame.width, frame.height, frame.data.len());
//! # Ok(())
//! # }
//! ```

use snafu::Snafu;

pub mod adapters;
mod dispatch;
mod fragments;
mod frame;
pub mod mosaic;
pub mod queue;

pub use crate::adapters::{FrameCodec, FrameInfo};
pub use crate::dispatch::{select_decoder, DecodeOptions, DecoderKind, FrameDecoder};
pub use crate::fragments::assemble_frame;
pub use crate::frame::FrameDescriptor;
pub use crate::mosaic::mosaic_tiles;

/// The possible error conditions when decoding pixel data.
///
/// All errors are local to the frame which was requested:
/// a failure on one frame does not prevent decoding the others.
#[derive(Debug, Snafu)]
#[non_exhaustive]
#[snafu(visibility(pub(crate)))]
pub enum DecodeError {
    /// A custom error occurred when decoding,
    /// reported as a dynamic error value with a message.
    ///
    /// The [`whatever!`](snafu::whatever) macro can be used
    /// to easily create an error of this kind.
    #[snafu(whatever, display("{}", message))]
    Custom {
        /// The error message.
        message: String,
        /// The underlying error cause, if any.
        #[snafu(source(from(Box<dyn std::error::Error + Send + Sync + 'static>, Some)))]
        source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
    },

    /// No decoding strategy handles the image's transfer syntax.
    #[snafu(display("Unsupported pixel data compression in transfer syntax `{}`", uid))]
    UnsupportedCompression { uid: String },

    /// The image has no pixel data element.
    #[snafu(display("Image has no pixel data"))]
    MissingPixelData,

    /// A required attribute is missing from the image.
    #[snafu(display("Missing required attribute `{}`", name))]
    MissingAttribute { name: &'static str },

    /// An RLE frame is inconsistent with its own header.
    #[snafu(display("Invalid RLE segment: {}", reason))]
    InvalidRleSegment { reason: String },

    /// The requested frame is not in the image.
    #[snafu(display("Frame #{} is out of bounds, image has {} frames", frame, frames))]
    FrameRangeOutOfBounds { frame: u32, frames: u32 },

    /// No codec is registered for the selected decoding strategy.
    #[snafu(display("No codec available for {} pixel data", kind))]
    CodecUnavailable { kind: DecoderKind },

    /// The fragments of encapsulated pixel data could not be read.
    #[snafu(display("Could not read the pixel data fragments"))]
    ReadFragments { source: dcmview_object::Error },

    /// A decoded frame is smaller than the image attributes require.
    #[snafu(display("Frame has {} bytes, {} were expected", actual, expected))]
    FrameTooShort { expected: usize, actual: usize },
}

pub type DecodeResult<T, E = DecodeError> = std::result::Result<T, E>;

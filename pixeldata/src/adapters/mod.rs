//! Frame codecs, one per compressed pixel data family.
//!
//! RLE Lossless is always available.
//! The others are provided by external codec libraries
//! and require Cargo features:
//!
//! - [`jpeg`](jpeg) decodes baseline, extended and lossless JPEG
//!   through `jpeg-decoder`.
//!   Requires the `jpeg` feature, enabled by default.
//! - [`jpegls`](jpegls) decodes JPEG-LS through [CharLS].
//!   Requires the `charls` feature.
//! - [`jpeg2k`](jpeg2k) decodes JPEG 2000 through [OpenJPEG].
//!   The `openjp2` feature uses the Rust port of OpenJPEG,
//!   `openjpeg-sys` statically links the reference implementation.
//!
//! Any other decoder, such as one offered by the host environment,
//! can be plugged in by implementing [`FrameCodec`]
//! and registering it in [`DecodeOptions`](crate::DecodeOptions).
//!
//! [CharLS]: https://github.com/team-charls/charls
//! [OpenJPEG]: https://github.com/uclouvain/openjpeg

use crate::DecodeResult;
use dcmview_object::Image;
use std::fmt;

#[cfg(feature = "jpeg")]
pub mod jpeg;
#[cfg(any(feature = "openjp2", feature = "openjpeg-sys"))]
pub mod jpeg2k;
#[cfg(feature = "charls")]
pub mod jpegls;
pub mod rle_lossless;

/// The image attributes a frame codec needs to decode a frame.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct FrameInfo {
    pub rows: u32,
    pub columns: u32,
    pub bits_allocated: u16,
    pub bits_stored: u16,
    pub samples_per_pixel: u16,
    pub signed: bool,
    /// Whether the samples of each pixel are stored in separate planes.
    pub planar: bool,
}

impl FrameInfo {
    /// Collect the frame attributes of an image.
    pub fn of(image: &Image) -> Self {
        FrameInfo {
            rows: image.rows(),
            columns: image.columns(),
            bits_allocated: image.bits_allocated(),
            bits_stored: image.bits_stored(),
            samples_per_pixel: image.samples_per_pixel(),
            signed: image.is_signed(),
            planar: image.is_planar(),
        }
    }

    /// The number of pixels in a frame.
    pub fn pixels(&self) -> usize {
        self.rows as usize * self.columns as usize
    }

    /// The number of bytes of each sample.
    pub fn bytes_per_sample(&self) -> usize {
        (usize::from(self.bits_allocated) + 7) / 8
    }

    /// The size in bytes of a decoded frame.
    pub fn frame_size(&self) -> usize {
        self.pixels() * usize::from(self.samples_per_pixel) * self.bytes_per_sample()
    }
}

/// A decoder of one frame of compressed pixel data.
///
/// Implementations append the decoded samples to `dst`,
/// with multi-byte samples in little endian.
/// Unless stated otherwise by the codec,
/// color samples are interleaved pixel by pixel.
pub trait FrameCodec: fmt::Debug + Send + Sync {
    /// Decode the compressed span of a single frame.
    fn decode_frame(&self, info: &FrameInfo, data: &[u8], dst: &mut Vec<u8>) -> DecodeResult<()>;

    /// Whether the output keeps the planar configuration of the image.
    /// Codecs which always interleave the samples return `false`.
    fn keeps_planar_configuration(&self) -> bool {
        false
    }
}

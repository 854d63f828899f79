//! Selection of the decoding strategy of an image
//! and the per-image frame decoder.

use crate::adapters::rle_lossless::RleLosslessAdapter;
use crate::adapters::{FrameCodec, FrameInfo};
use crate::fragments::{concat, frame_ranges};
use crate::frame::FrameDescriptor;
use crate::{
    CodecUnavailableSnafu, DecodeResult, FrameRangeOutOfBoundsSnafu, MissingAttributeSnafu,
    MissingPixelDataSnafu, ReadFragmentsSnafu, UnsupportedCompressionSnafu,
};
use bytes::Bytes;
use dcmview_core::Compression;
use dcmview_object::Image;
use dcmview_parser::EncapsulatedPixelData;
use once_cell::sync::OnceCell;
use snafu::{ensure, OptionExt, ResultExt};
use std::collections::HashMap;
use std::fmt;
use std::ops::Range;
use std::sync::Arc;
use tracing::debug;

/// The decoding strategy of an image's pixel data.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum DecoderKind {
    /// Native pixel data, used verbatim.
    Uncompressed,
    /// RLE Lossless, decoded by this crate.
    Rle,
    /// Lossless JPEG (process 14).
    JpegLossless,
    /// Baseline and extended JPEG.
    JpegBaseline,
    /// JPEG-LS.
    JpegLs,
    /// JPEG 2000.
    Jpeg2000,
    /// A decoder provided by the host environment,
    /// for baseline JPEG or JPEG 2000.
    Native,
}

impl fmt::Display for DecoderKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            DecoderKind::Uncompressed => "uncompressed",
            DecoderKind::Rle => "RLE Lossless",
            DecoderKind::JpegLossless => "JPEG lossless",
            DecoderKind::JpegBaseline => "JPEG baseline",
            DecoderKind::JpegLs => "JPEG-LS",
            DecoderKind::Jpeg2000 => "JPEG 2000",
            DecoderKind::Native => "native",
        };
        f.write_str(name)
    }
}

impl DecoderKind {
    /// Whether the pixel data is encapsulated in fragments.
    pub fn is_encapsulated(self) -> bool {
        self != DecoderKind::Uncompressed
    }
}

/// Photometric interpretations which a native decoder renders as is.
const NATIVE_PHOTOMETRIC_INTERPRETATIONS: &[&str] =
    &["MONOCHROME2", "RGB", "YBR_FULL", "YBR_FULL_422"];

/// Options for decoding pixel data:
/// the codec serving each compressed family
/// and whether a native decoder may be used.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct DecodeOptions {
    codecs: HashMap<DecoderKind, Arc<dyn FrameCodec>>,
    /// Whether baseline JPEG and JPEG 2000 may go to a native codec,
    /// when one is registered.
    pub allow_native: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        let mut codecs: HashMap<DecoderKind, Arc<dyn FrameCodec>> = HashMap::new();
        codecs.insert(DecoderKind::Rle, Arc::new(RleLosslessAdapter));
        #[cfg(feature = "jpeg")]
        {
            use crate::adapters::jpeg::JpegAdapter;
            codecs.insert(DecoderKind::JpegBaseline, Arc::new(JpegAdapter));
            codecs.insert(DecoderKind::JpegLossless, Arc::new(JpegAdapter));
        }
        #[cfg(feature = "charls")]
        codecs.insert(
            DecoderKind::JpegLs,
            Arc::new(crate::adapters::jpegls::JpegLsAdapter),
        );
        #[cfg(any(feature = "openjp2", feature = "openjpeg-sys"))]
        codecs.insert(
            DecoderKind::Jpeg2000,
            Arc::new(crate::adapters::jpeg2k::Jpeg2000Adapter),
        );
        DecodeOptions {
            codecs,
            allow_native: true,
        }
    }
}

impl DecodeOptions {
    /// Options with the codecs enabled by crate features.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the codec serving a decoding strategy,
    /// replacing any previous one.
    pub fn codec(mut self, kind: DecoderKind, codec: impl FrameCodec + 'static) -> Self {
        self.codecs.insert(kind, Arc::new(codec));
        self
    }

    /// Register a decoder provided by the host environment.
    pub fn native_codec(self, codec: impl FrameCodec + 'static) -> Self {
        self.codec(DecoderKind::Native, codec)
    }

    /// Remove the codec of a decoding strategy.
    pub fn without_codec(mut self, kind: DecoderKind) -> Self {
        self.codecs.remove(&kind);
        self
    }

    /// Allow or forbid the native codec.
    pub fn allow_native(mut self, allow_native: bool) -> Self {
        self.allow_native = allow_native;
        self
    }

    /// The codec registered for a decoding strategy.
    pub fn codec_for(&self, kind: DecoderKind) -> Option<&Arc<dyn FrameCodec>> {
        self.codecs.get(&kind)
    }

    fn native_available(&self) -> bool {
        self.allow_native && self.codecs.contains_key(&DecoderKind::Native)
    }
}

/// Select the decoding strategy of an image from its transfer syntax.
///
/// Baseline JPEG and JPEG 2000 go to the native codec
/// if one is registered and allowed,
/// the image has 8 bits per sample,
/// and its photometric interpretation can be rendered as decoded.
pub fn select_decoder(image: &Image, options: &DecodeOptions) -> DecodeResult<DecoderKind> {
    ensure!(image.has_pixel_data(), MissingPixelDataSnafu);

    let kind = match image.compression() {
        Compression::None | Compression::Deflate => DecoderKind::Uncompressed,
        Compression::Rle => DecoderKind::Rle,
        Compression::JpegLossless => DecoderKind::JpegLossless,
        Compression::JpegBaseline | Compression::JpegOther => DecoderKind::JpegBaseline,
        Compression::JpegLs => DecoderKind::JpegLs,
        Compression::Jpeg2000 => DecoderKind::Jpeg2000,
        Compression::Video | Compression::Unknown => {
            return UnsupportedCompressionSnafu {
                uid: image.transfer_syntax().unwrap_or_default(),
            }
            .fail()
        }
    };

    if matches!(kind, DecoderKind::JpegBaseline | DecoderKind::Jpeg2000)
        && options.native_available()
        && image.bits_allocated() == 8
        && NATIVE_PHOTOMETRIC_INTERPRETATIONS.contains(&image.photometric_interpretation())
    {
        return Ok(DecoderKind::Native);
    }
    Ok(kind)
}

/// A frame cannot be decoded without its dimensions and sample depth.
fn check_geometry(image: &Image) -> DecodeResult<()> {
    ensure!(image.rows() > 0, MissingAttributeSnafu { name: "Rows" });
    ensure!(image.columns() > 0, MissingAttributeSnafu { name: "Columns" });
    ensure!(
        image.bits_allocated() > 0,
        MissingAttributeSnafu {
            name: "BitsAllocated"
        }
    );
    Ok(())
}

/// The frame decoder of one image.
///
/// The decoding strategy is selected once,
/// and the compressed span of each frame is memoized on first use,
/// so that repeated requests for a frame skip fragment assembly.
/// Decoded samples are never cached.
///
/// Frames can be decoded concurrently from multiple threads.
#[derive(Debug)]
pub struct FrameDecoder {
    image: Arc<Image>,
    kind: DecoderKind,
    options: DecodeOptions,
    frames: u32,
    encapsulated: OnceCell<(EncapsulatedPixelData, Vec<Range<usize>>)>,
    spans: Vec<OnceCell<Bytes>>,
}

impl FrameDecoder {
    /// Create a frame decoder with the default options.
    pub fn new(image: Arc<Image>) -> DecodeResult<Self> {
        Self::with_options(image, DecodeOptions::default())
    }

    /// Create a frame decoder.
    ///
    /// Fails if the image has no pixel data
    /// or its compression is not supported.
    pub fn with_options(image: Arc<Image>, options: DecodeOptions) -> DecodeResult<Self> {
        let kind = select_decoder(&image, &options)?;
        let frames = if kind.is_encapsulated() {
            image.number_of_frames()
        } else {
            image.frame_count()
        };
        debug!("Selected {} decoder for {} frames", kind, frames);
        Ok(FrameDecoder {
            spans: (0..frames).map(|_| OnceCell::new()).collect(),
            image,
            kind,
            options,
            frames,
            encapsulated: OnceCell::new(),
        })
    }

    /// The decoding strategy of the image.
    pub fn kind(&self) -> DecoderKind {
        self.kind
    }

    /// The image being decoded.
    pub fn image(&self) -> &Image {
        &self.image
    }

    /// The number of frames which can be requested.
    pub fn number_of_frames(&self) -> u32 {
        self.frames
    }

    /// The encoded span of a frame:
    /// the native samples,
    /// or the compressed data assembled from its fragments.
    pub fn frame_data(&self, frame: u32) -> DecodeResult<Bytes> {
        let frames = self.frames;
        let cell = self
            .spans
            .get(frame as usize)
            .context(FrameRangeOutOfBoundsSnafu { frame, frames })?;
        cell.get_or_try_init(|| {
            if self.kind.is_encapsulated() {
                self.assemble(frame)
            } else {
                self.native_frame(frame)
            }
        })
        .map(Bytes::clone)
    }

    fn assemble(&self, frame: u32) -> DecodeResult<Bytes> {
        let (pixel_data, ranges) = self.encapsulated.get_or_try_init(|| {
            let pixel_data = self
                .image
                .encapsulated_pixel_data()
                .context(ReadFragmentsSnafu)?;
            let ranges = frame_ranges(&pixel_data, self.frames);
            Ok::<_, crate::DecodeError>((pixel_data, ranges))
        })?;
        let range = ranges
            .get(frame as usize)
            .context(FrameRangeOutOfBoundsSnafu {
                frame,
                frames: ranges.len() as u32,
            })?;
        Ok(concat(&pixel_data.fragments[range.clone()]))
    }

    fn native_frame(&self, frame: u32) -> DecodeResult<Bytes> {
        let data = self
            .image
            .pixel_bytes()
            .map_err(|_| MissingPixelDataSnafu.build())?;
        let frame_length = data.len() / self.frames.max(1) as usize;
        let start = frame as usize * frame_length;
        Ok(data.slice(start..start + frame_length))
    }

    /// Decode a frame into raw samples.
    pub fn decode_frame(&self, frame: u32) -> DecodeResult<Vec<u8>> {
        let frames = self.frames;
        ensure!(frame < frames, FrameRangeOutOfBoundsSnafu { frame, frames });
        check_geometry(&self.image)?;
        let data = self.frame_data(frame)?;
        if self.kind == DecoderKind::Uncompressed {
            return Ok(data.to_vec());
        }

        let codec = self
            .options
            .codec_for(self.kind)
            .context(CodecUnavailableSnafu { kind: self.kind })?;
        let info = FrameInfo::of(&self.image);
        let mut dst = Vec::with_capacity(info.frame_size());
        codec.decode_frame(&info, &data, &mut dst)?;
        Ok(dst)
    }

    /// Decode a frame and describe it for display.
    pub fn get_frame(&self, frame: u32) -> DecodeResult<FrameDescriptor> {
        let data = self.decode_frame(frame)?;
        let (little_endian, planar) = match self.kind {
            DecoderKind::Uncompressed => (self.image.is_little_endian(), self.image.is_planar()),
            kind => {
                let keeps_planar = self
                    .options
                    .codec_for(kind)
                    .map_or(false, |codec| codec.keeps_planar_configuration());
                (true, keeps_planar && self.image.is_planar())
            }
        };
        Ok(FrameDescriptor::new(
            &self.image,
            frame,
            data,
            little_endian,
            planar,
        ))
    }

    /// Decode all frames of the image, in parallel.
    #[cfg(feature = "rayon")]
    pub fn decode_all_frames(&self) -> DecodeResult<Vec<Vec<u8>>> {
        use rayon::iter::{IntoParallelIterator, ParallelIterator};
        (0..self.frames)
            .into_par_iter()
            .map(|frame| self.decode_frame(frame))
            .collect()
    }

    /// Decode all frames of the image.
    #[cfg(not(feature = "rayon"))]
    pub fn decode_all_frames(&self) -> DecodeResult<Vec<Vec<u8>>> {
        (0..self.frames)
            .map(|frame| self.decode_frame(frame))
            .collect()
    }
}

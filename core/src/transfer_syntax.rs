//! The table of known transfer syntaxes.
//!
//! A transfer syntax fixes the byte order and VR explicitness
//! of the data set after the file meta group,
//! as well as the encoding of the pixel data.

use byteordered::Endianness;
use std::fmt;

/// The encoding category of the pixel data.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Compression {
    /// Native pixel data, stored verbatim.
    None,
    /// Native pixel data in a data set compressed with deflate.
    Deflate,
    /// RLE Lossless.
    Rle,
    /// JPEG baseline and extended (processes 1, 2 and 4).
    JpegBaseline,
    /// JPEG lossless (processes 14 and 14 SV1).
    JpegLossless,
    /// JPEG-LS lossless and near-lossless.
    JpegLs,
    /// JPEG 2000 and High-Throughput JPEG 2000.
    Jpeg2000,
    /// Other (retired) JPEG processes.
    JpegOther,
    /// MPEG and HEVC video.
    Video,
    /// A transfer syntax not known by this library.
    Unknown,
}

impl Compression {
    /// Whether pixel data of this category is encapsulated in fragments.
    pub fn is_encapsulated(self) -> bool {
        !matches!(self, Compression::None | Compression::Deflate)
    }

    /// Whether this is one of the JPEG family categories.
    pub fn is_jpeg(self) -> bool {
        matches!(
            self,
            Compression::JpegBaseline
                | Compression::JpegLossless
                | Compression::JpegLs
                | Compression::Jpeg2000
                | Compression::JpegOther
        )
    }
}

impl fmt::Display for Compression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Compression::None => "none",
            Compression::Deflate => "deflate",
            Compression::Rle => "RLE",
            Compression::JpegBaseline => "JPEG baseline",
            Compression::JpegLossless => "JPEG lossless",
            Compression::JpegLs => "JPEG-LS",
            Compression::Jpeg2000 => "JPEG 2000",
            Compression::JpegOther => "JPEG",
            Compression::Video => "video",
            Compression::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// A DICOM transfer syntax specifier.
#[derive(Debug, Clone)]
pub struct TransferSyntax {
    /// The unique identifier of the transfer syntax.
    pub uid: &'static str,
    /// The name of the transfer syntax.
    pub name: &'static str,
    /// The byte order of the data set.
    pub endianness: Endianness,
    /// Whether the data set has explicit value representations.
    pub explicit_vr: bool,
    /// The pixel data encoding category.
    pub compression: Compression,
}

impl TransferSyntax {
    const fn new(
        uid: &'static str,
        name: &'static str,
        endianness: Endianness,
        explicit_vr: bool,
        compression: Compression,
    ) -> Self {
        TransferSyntax {
            uid,
            name,
            endianness,
            explicit_vr,
            compression,
        }
    }

    /// Look up a transfer syntax by UID.
    ///
    /// Trailing padding (null or space) is ignored.
    pub fn from_uid(uid: &str) -> Option<&'static TransferSyntax> {
        let uid = uid.trim_end_matches(['\0', ' ']).trim();
        ENTRIES.iter().find(|ts| ts.uid == uid)
    }

    /// Determine the pixel data encoding category of a UID,
    /// including the JPEG processes missing from the table.
    pub fn compression_of(uid: &str) -> Compression {
        match TransferSyntax::from_uid(uid) {
            Some(ts) => ts.compression,
            None if uid.trim().starts_with(JPEG_UID_PREFIX) => Compression::JpegOther,
            None => Compression::Unknown,
        }
    }

    /// Whether the data set is encoded in little endian.
    pub fn is_little_endian(&self) -> bool {
        matches!(self.endianness, Endianness::Little)
    }

    /// Whether the data set after the file meta group is deflated.
    pub fn is_deflated(&self) -> bool {
        self.compression == Compression::Deflate
    }
}

const JPEG_UID_PREFIX: &str = "1.2.840.10008.1.2.4.";

/// Implicit VR Little Endian, the default transfer syntax.
pub const IMPLICIT_VR_LITTLE_ENDIAN: &str = "1.2.840.10008.1.2";
/// Explicit VR Little Endian.
pub const EXPLICIT_VR_LITTLE_ENDIAN: &str = "1.2.840.10008.1.2.1";
/// Deflated Explicit VR Little Endian.
pub const DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN: &str = "1.2.840.10008.1.2.1.99";
/// Explicit VR Big Endian (retired).
pub const EXPLICIT_VR_BIG_ENDIAN: &str = "1.2.840.10008.1.2.2";
/// JPEG Baseline (Process 1).
pub const JPEG_BASELINE: &str = "1.2.840.10008.1.2.4.50";
/// JPEG Extended (Process 2 & 4).
pub const JPEG_EXTENDED: &str = "1.2.840.10008.1.2.4.51";
/// JPEG Lossless, Non-Hierarchical (Process 14).
pub const JPEG_LOSSLESS_NON_HIERARCHICAL: &str = "1.2.840.10008.1.2.4.57";
/// JPEG Lossless, Non-Hierarchical, First-Order Prediction (Process 14, SV1).
pub const JPEG_LOSSLESS_SV1: &str = "1.2.840.10008.1.2.4.70";
/// JPEG-LS Lossless Image Compression.
pub const JPEG_LS_LOSSLESS: &str = "1.2.840.10008.1.2.4.80";
/// JPEG-LS Lossy (Near-Lossless) Image Compression.
pub const JPEG_LS_NEAR_LOSSLESS: &str = "1.2.840.10008.1.2.4.81";
/// JPEG 2000 Image Compression (Lossless Only).
pub const JPEG_2000_LOSSLESS: &str = "1.2.840.10008.1.2.4.90";
/// JPEG 2000 Image Compression.
pub const JPEG_2000: &str = "1.2.840.10008.1.2.4.91";
/// RLE Lossless.
pub const RLE_LOSSLESS: &str = "1.2.840.10008.1.2.5";

use self::Compression as C;
use byteordered::Endianness::{Big, Little};

/// All transfer syntaxes known by this library.
#[rustfmt::skip]
pub static ENTRIES: &[TransferSyntax] = &[
    TransferSyntax::new(IMPLICIT_VR_LITTLE_ENDIAN, "Implicit VR Little Endian", Little, false, C::None),
    TransferSyntax::new(EXPLICIT_VR_LITTLE_ENDIAN, "Explicit VR Little Endian", Little, true, C::None),
    TransferSyntax::new(DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN, "Deflated Explicit VR Little Endian", Little, true, C::Deflate),
    TransferSyntax::new(EXPLICIT_VR_BIG_ENDIAN, "Explicit VR Big Endian", Big, true, C::None),
    TransferSyntax::new(JPEG_BASELINE, "JPEG Baseline (Process 1)", Little, true, C::JpegBaseline),
    TransferSyntax::new(JPEG_EXTENDED, "JPEG Extended (Process 2 & 4)", Little, true, C::JpegBaseline),
    TransferSyntax::new(JPEG_LOSSLESS_NON_HIERARCHICAL, "JPEG Lossless, Non-Hierarchical (Process 14)", Little, true, C::JpegLossless),
    TransferSyntax::new(JPEG_LOSSLESS_SV1, "JPEG Lossless, Non-Hierarchical, First-Order Prediction", Little, true, C::JpegLossless),
    TransferSyntax::new(JPEG_LS_LOSSLESS, "JPEG-LS Lossless Image Compression", Little, true, C::JpegLs),
    TransferSyntax::new(JPEG_LS_NEAR_LOSSLESS, "JPEG-LS Lossy (Near-Lossless) Image Compression", Little, true, C::JpegLs),
    TransferSyntax::new(JPEG_2000_LOSSLESS, "JPEG 2000 Image Compression (Lossless Only)", Little, true, C::Jpeg2000),
    TransferSyntax::new(JPEG_2000, "JPEG 2000 Image Compression", Little, true, C::Jpeg2000),
    TransferSyntax::new("1.2.840.10008.1.2.4.201", "High-Throughput JPEG 2000 Image Compression (Lossless Only)", Little, true, C::Jpeg2000),
    TransferSyntax::new("1.2.840.10008.1.2.4.202", "High-Throughput JPEG 2000 with RPCL Options Image Compression (Lossless Only)", Little, true, C::Jpeg2000),
    TransferSyntax::new("1.2.840.10008.1.2.4.203", "High-Throughput JPEG 2000 Image Compression", Little, true, C::Jpeg2000),
    TransferSyntax::new(RLE_LOSSLESS, "RLE Lossless", Little, true, C::Rle),
    TransferSyntax::new("1.2.840.10008.1.2.4.100", "MPEG2 Main Profile / Main Level", Little, true, C::Video),
    TransferSyntax::new("1.2.840.10008.1.2.4.101", "MPEG2 Main Profile / High Level", Little, true, C::Video),
    TransferSyntax::new("1.2.840.10008.1.2.4.102", "MPEG-4 AVC/H.264 High Profile / Level 4.1", Little, true, C::Video),
    TransferSyntax::new("1.2.840.10008.1.2.4.103", "MPEG-4 AVC/H.264 BD-compatible High Profile / Level 4.1", Little, true, C::Video),
    TransferSyntax::new("1.2.840.10008.1.2.4.104", "MPEG-4 AVC/H.264 High Profile / Level 4.2 For 2D Video", Little, true, C::Video),
    TransferSyntax::new("1.2.840.10008.1.2.4.105", "MPEG-4 AVC/H.264 High Profile / Level 4.2 For 3D Video", Little, true, C::Video),
    TransferSyntax::new("1.2.840.10008.1.2.4.106", "MPEG-4 AVC/H.264 Stereo High Profile / Level 4.2", Little, true, C::Video),
    TransferSyntax::new("1.2.840.10008.1.2.4.107", "HEVC/H.265 Main Profile / Level 5.1", Little, true, C::Video),
    TransferSyntax::new("1.2.840.10008.1.2.4.108", "HEVC/H.265 Main 10 Profile / Level 5.1", Little, true, C::Video),
];

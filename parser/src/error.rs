//! Error types of the stream parser.

use dcmview_core::{Tag, VR};
use snafu::Snafu;

/// An error which occurred while walking a DICOM stream.
///
/// All of these conditions describe a malformed stream:
/// an offset or length inconsistent with the buffer,
/// or content which does not follow the record grammar.
#[derive(Debug, Snafu)]
#[non_exhaustive]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display(
        "Unexpected end of stream at offset {}, {} more bytes needed",
        offset,
        needed
    ))]
    UnexpectedEndOfStream { offset: usize, needed: usize },

    #[snafu(display(
        "Value of {} at offset {} with length {} goes past the end of the stream",
        tag,
        offset,
        length
    ))]
    ValueOutOfBounds { tag: Tag, offset: usize, length: u32 },

    #[snafu(display("Undefined length in {} element {} at offset {}", vr, tag, offset))]
    UndefinedLength { tag: Tag, vr: VR, offset: usize },

    #[snafu(display("Expected an item at offset {}, found {}", offset, tag))]
    UnexpectedItemTag { tag: Tag, offset: usize },

    #[snafu(display("Sequences nested deeper than {} levels", depth))]
    DepthLimitExceeded { depth: u32 },

    #[snafu(display("Could not inflate the deflated data set at offset {}", offset))]
    Inflate {
        offset: usize,
        source: std::io::Error,
    },
}

impl Error {
    /// The byte offset in the stream where the problem was found, if known.
    pub fn offset(&self) -> Option<usize> {
        match self {
            Error::UnexpectedEndOfStream { offset, .. }
            | Error::ValueOutOfBounds { offset, .. }
            | Error::UndefinedLength { offset, .. }
            | Error::UnexpectedItemTag { offset, .. }
            | Error::Inflate { offset, .. } => Some(*offset),
            Error::DepthLimitExceeded { .. } => None,
        }
    }

    /// Whether this error describes a malformed or truncated stream,
    /// as opposed to a failure of the environment.
    pub fn is_malformed_stream(&self) -> bool {
        match self {
            Error::UnexpectedEndOfStream { .. }
            | Error::ValueOutOfBounds { .. }
            | Error::UndefinedLength { .. }
            | Error::UnexpectedItemTag { .. }
            | Error::DepthLimitExceeded { .. } => true,
            // a corrupt deflate stream is malformed too,
            // anything else comes from the reader
            Error::Inflate { source, .. } => matches!(
                source.kind(),
                std::io::ErrorKind::InvalidData
                    | std::io::ErrorKind::InvalidInput
                    | std::io::ErrorKind::UnexpectedEof
            ),
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

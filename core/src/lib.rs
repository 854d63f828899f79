#![crate_type = "lib"]
#![deny(trivial_numeric_casts, unsafe_code, unstable_features)]
#![warn(
    missing_debug_implementations,
    missing_docs,
    unused_qualifications,
    unused_import_braces
)]

//! This is the core library of dcmview,
//! containing the data structures shared by the parser,
//! the image model and the pixel data decoders.
//!
//! The current structure of this crate is as follows:
//!
//! - [`header`] comprises the data types of a DICOM element header:
//!   attribute tags, value representations and value lengths.
//! - [`value`] holds the typed value union of a parsed element
//!   and the VR-driven conversion from raw bytes into it.
//! - [`element`] contains the parsed data element record.
//! - [`text`] implements the specific character sets
//!   used to decode textual values.
//! - [`transfer_syntax`] is the table of known transfer syntaxes,
//!   describing byte order, VR explicitness and pixel data compression.
//! - [`private`] holds readers of vendor-specific private blocks.
//!
//! [`header`]: ./header/index.html
//! [`value`]: ./value/index.html

pub mod element;
pub mod header;
pub mod private;
pub mod text;
pub mod transfer_syntax;
pub mod value;

pub use element::DataElement;
pub use header::{Length, Tag, VR};
pub use text::SpecificCharacterSet;
pub use transfer_syntax::{Compression, TransferSyntax};
pub use value::{convert, ConvertOptions, DicomDate, Value, C};

// re-export crates that are part of the public API
pub use bytes;
pub use chrono;
pub use smallvec;

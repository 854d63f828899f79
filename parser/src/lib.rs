#![deny(trivial_numeric_casts, unsafe_code, unstable_features)]
#![warn(
    missing_debug_implementations,
    unused_qualifications,
    unused_import_braces
)]

//! This crate provides the tag stream parser of dcmview.
//!
//! The parser walks a DICOM file buffer from its first element
//! in a single pass,
//! switching byte order and VR explicitness
//! as declared by the file meta group,
//! inflating deflated data sets in place,
//! and recursing into sequences and items.
//!
//! - [`stream`] holds the parser itself,
//!   the [`ElementSink`] receiving the parsed elements,
//!   and the search for the first element in a file.
//! - [`encapsulated`] walks the fragment list of encapsulated pixel data.
//! - [`state`] holds the running decode state and the parse options.
//!
//! # Example
//!
//! ```no_run
//! use dcmview_parser::{StreamParser, ParseOptions};
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let data = std::fs::read("image.dcm")?;
//! let mut parser = StreamParser::with_options(ParseOptions::default());
//! let mut elements = Vec::new();
//! let parsed = parser.parse(data.into(), &mut elements)?;
//! println!("{} elements, pixel data: {}", elements.len(), parsed.pixel_data_found);
//! # Ok(())
//! # }
//! ```

pub mod deflate;
pub mod encapsulated;
pub mod error;
pub mod state;
pub mod stream;

pub use encapsulated::{parse_encapsulated, EncapsulatedPixelData};
pub use error::{Error, Result};
pub use state::{ParseOptions, ParserState};
pub use stream::{find_first_tag_offset, ElementSink, Parsed, StreamParser};

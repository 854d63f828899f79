//! The running decode state of the stream parser
//! and the options that configure it.

use dcmview_core::{ConvertOptions, SpecificCharacterSet, Tag};

/// The decode state carried from one element to the next.
///
/// Every mid-stream format switch is recorded here:
/// byte order and VR explicitness (from the transfer syntax),
/// the file meta group boundary,
/// the pending inflate of a deflated data set,
/// and the character set of textual values.
#[derive(Debug, Clone, PartialEq)]
pub struct ParserState {
    /// Whether the data set is in little endian.
    pub little_endian: bool,
    /// Whether value representations are explicit.
    pub explicit_vr: bool,
    /// Whether a file meta group element was seen.
    pub meta_found: bool,
    /// Whether the parser has left the file meta group.
    pub meta_finished: bool,
    /// The offset where the file meta group ends,
    /// known once its group length was read.
    pub meta_finished_offset: Option<usize>,
    /// Whether the data set after the meta group is deflated
    /// and still needs to be inflated.
    pub needs_deflate: bool,
    /// Whether the data set was inflated.
    pub inflated: bool,
    /// The character set of subsequent textual values.
    pub charset: SpecificCharacterSet,
    /// The current sequence nesting level.
    pub level: u32,
    /// Whether fragments of encapsulated pixel data are being walked.
    pub encapsulation: bool,
    /// The transfer syntax UID declared in the meta group, if any.
    pub transfer_syntax: Option<String>,
}

impl Default for ParserState {
    fn default() -> Self {
        ParserState {
            little_endian: true,
            explicit_vr: true,
            meta_found: false,
            meta_finished: false,
            meta_finished_offset: None,
            needs_deflate: false,
            inflated: false,
            charset: SpecificCharacterSet::Default,
            level: 0,
            encapsulation: false,
            transfer_syntax: None,
        }
    }
}

/// Options for parsing a DICOM stream.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct ParseOptions {
    /// The maximum sequence nesting level accepted.
    pub max_depth: u32,
    /// Options for converting raw values.
    pub convert: ConvertOptions,
    /// Stop at the first element with a tag greater than or equal to this one,
    /// without committing it.
    pub read_until: Option<Tag>,
    /// Stop once the pixel data element is produced.
    pub stop_at_pixel_data: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            max_depth: 64,
            convert: ConvertOptions::default(),
            read_until: None,
            stop_at_pixel_data: true,
        }
    }
}

impl ParseOptions {
    /// Create the default set of parse options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum sequence nesting level.
    pub fn max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Set the value conversion options.
    pub fn convert(mut self, convert: ConvertOptions) -> Self {
        self.convert = convert;
        self
    }

    /// Stop reading at the first element
    /// with a tag greater than or equal to the given one.
    pub fn read_until(mut self, tag: Tag) -> Self {
        self.read_until = Some(tag);
        self
    }

    /// Set whether to stop once the pixel data element is produced.
    pub fn stop_at_pixel_data(mut self, stop: bool) -> Self {
        self.stop_at_pixel_data = stop;
        self
    }
}

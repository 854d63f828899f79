use crate::image::{Image, ImageBuilder};
use crate::{OpenFileSnafu, ParseStreamSnafu, Result};
use bytes::Bytes;
use dcmview_core::{ConvertOptions, Tag};
use dcmview_parser::{ParseOptions, StreamParser};
use snafu::ResultExt;
use std::path::Path;
use tracing::debug;

/// Create an image by reading a DICOM file.
///
/// The whole file is read into memory and parsed
/// up to the pixel data element.
pub fn open_file<P>(path: P) -> Result<Image>
where
    P: AsRef<Path>,
{
    OpenImageOptions::new().open_file(path)
}

/// Create an image from the bytes of a DICOM file.
pub fn from_bytes(data: impl Into<Bytes>) -> Result<Image> {
    OpenImageOptions::new().from_bytes(data)
}

/// A builder type for opening a DICOM image with additional options.
///
/// # Example
///
/// ```no_run
/// # use dcmview_object::OpenImageOptions;
/// let image = OpenImageOptions::new()
///     .read_until(dcmview_dictionary_std::tags::PIXEL_DATA)
///     .open_file("path/to/file.dcm")?;
/// # Result::<(), Box<dyn std::error::Error>>::Ok(())
/// ```
#[derive(Debug, Default, Clone)]
#[non_exhaustive]
pub struct OpenImageOptions {
    parse: ParseOptions,
}

impl OpenImageOptions {
    pub fn new() -> Self {
        OpenImageOptions::default()
    }

    /// Set the operation to read only until the given tag is found.
    ///
    /// An element with the exact tag,
    /// or any other tag that is next in the standard DICOM tag ordering,
    /// will be excluded from the output.
    pub fn read_until(mut self, tag: Tag) -> Self {
        self.parse = self.parse.read_until(tag);
        self
    }

    /// Set whether to keep reading the elements after the pixel data.
    pub fn read_past_pixel_data(mut self, read_past: bool) -> Self {
        self.parse = self.parse.stop_at_pixel_data(!read_past);
        self
    }

    /// Set the maximum sequence nesting level.
    pub fn max_depth(mut self, max_depth: u32) -> Self {
        self.parse = self.parse.max_depth(max_depth);
        self
    }

    /// Set the options for converting element values.
    pub fn convert(mut self, convert: ConvertOptions) -> Self {
        self.parse = self.parse.convert(convert);
        self
    }

    /// Replace all parse options.
    pub fn parse_options(mut self, parse: ParseOptions) -> Self {
        self.parse = parse;
        self
    }

    /// Open the file at the given path.
    pub fn open_file<P>(self, path: P) -> Result<Image>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let data = std::fs::read(path).context(OpenFileSnafu { filename: path })?;
        debug!("Read {} bytes from {}", data.len(), path.display());
        self.from_bytes(data)
    }

    /// Parse an image from the bytes of a DICOM file.
    pub fn from_bytes(self, data: impl Into<Bytes>) -> Result<Image> {
        let mut parser = StreamParser::with_options(self.parse);
        let mut builder = ImageBuilder::new();
        parser
            .parse(data.into(), &mut builder)
            .context(ParseStreamSnafu)?;
        Ok(builder.build(parser.state().little_endian))
    }
}

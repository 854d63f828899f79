//! The image metadata model and its builder.
//!
//! An [`ImageBuilder`] receives the elements produced by the stream parser,
//! indexing them both as the root data set
//! and in a flat lookup table covering every nesting level.
//! Once parsing completes, the builder is frozen into an [`Image`],
//! computing the derived scalar fields.

use crate::{MissingPixelDataSnafu, ParseStreamSnafu, Result};
use bytes::Bytes;
use dcmview_core::{Compression, DataElement, Tag, TransferSyntax, Value};
use dcmview_dictionary_std::{tags, StandardDataDictionary};
use dcmview_parser::{ElementSink, EncapsulatedPixelData};
use num_traits::NumCast;
use snafu::{OptionExt, ResultExt};
use std::collections::{BTreeMap, HashMap};
use tracing::warn;

/// Whether pixel samples are signed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PixelRepresentation {
    /// Unsigned integer samples (0).
    Unsigned,
    /// Two's complement signed samples (1).
    Signed,
}

/// A builder of an [`Image`],
/// fed element by element while a stream is parsed.
#[derive(Debug, Default, Clone)]
pub struct ImageBuilder {
    elements: BTreeMap<Tag, DataElement>,
    flat: HashMap<Tag, DataElement>,
}

impl ElementSink for ImageBuilder {
    fn put(&mut self, element: DataElement) {
        self.index_nested(&element);
        self.elements.entry(element.tag()).or_insert(element);
    }
}

impl ImageBuilder {
    /// Create an empty image builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the elements nested in a sequence into the flat index.
    /// The first occurrence of a tag wins.
    fn index_nested(&mut self, element: &DataElement) {
        for item in items_of(element) {
            for nested in item {
                if nested.tag().is_item_or_delimiter() {
                    continue;
                }
                self.index_nested(nested);
                self.flat
                    .entry(nested.tag())
                    .or_insert_with(|| nested.clone());
            }
        }
    }

    /// Whether the pixel data element was received.
    pub fn has_pixel_data(&self) -> bool {
        self.elements.contains_key(&Tag::PIXEL_DATA)
    }

    /// Freeze the image,
    /// computing the derived fields.
    ///
    /// `little_endian` is the byte order of the data set
    /// as resolved by the parser.
    pub fn build(self, little_endian: bool) -> Image {
        let mut image = Image {
            elements: self.elements,
            flat: self.flat,
            rows: 0,
            columns: 0,
            bits_allocated: 0,
            bits_stored: 0,
            samples_per_pixel: 1,
            pixel_representation: PixelRepresentation::Unsigned,
            photometric_interpretation: String::new(),
            transfer_syntax: None,
            little_endian,
            private_data: String::new(),
        };

        image.rows = image.int(tags::ROWS).unwrap_or(0);
        image.columns = image.int(tags::COLUMNS).unwrap_or(0);
        image.bits_allocated = image.int(tags::BITS_ALLOCATED).unwrap_or(0);
        image.bits_stored = image
            .int(tags::BITS_STORED)
            .unwrap_or(image.bits_allocated);
        image.samples_per_pixel = image.int(tags::SAMPLES_PER_PIXEL).unwrap_or(1);
        image.pixel_representation = match image.int::<u16>(tags::PIXEL_REPRESENTATION) {
            Some(1) => PixelRepresentation::Signed,
            _ => PixelRepresentation::Unsigned,
        };
        image.photometric_interpretation = image
            .string(tags::PHOTOMETRIC_INTERPRETATION)
            .unwrap_or_default()
            .to_string();
        image.transfer_syntax = image
            .root_string(tags::TRANSFER_SYNTAX_UID)
            .map(|uid| uid.to_string());
        image.private_data = image
            .elements
            .values()
            .chain(image.flat.values())
            .filter_map(|e| e.private_data())
            .collect();
        image
    }
}

/// The contents of each item of a sequence element,
/// delimiters excluded.
pub fn items_of(element: &DataElement) -> impl Iterator<Item = &[DataElement]> {
    element
        .items()
        .unwrap_or_default()
        .iter()
        .filter(|item| item.is_item())
        .map(|item| item.items().unwrap_or_default())
}

/// Find an element by tag in a list of elements (such as an item).
pub fn find_in(elements: &[DataElement], tag: Tag) -> Option<&DataElement> {
    elements.iter().find(|e| e.tag() == tag)
}

/// The metadata of a parsed DICOM image.
///
/// Elements are indexed twice:
/// the root data set keyed by tag,
/// and a flat table of all elements nested in sequences,
/// so that any attribute is found in constant time
/// regardless of its nesting depth.
/// Elements of the root data set take precedence over nested ones.
///
/// The image is read-only once built.
/// The pixel data is only located, not decoded
/// (see the `dcmview-pixeldata` crate).
#[derive(Debug, Clone)]
pub struct Image {
    elements: BTreeMap<Tag, DataElement>,
    flat: HashMap<Tag, DataElement>,
    rows: u32,
    columns: u32,
    bits_allocated: u16,
    bits_stored: u16,
    samples_per_pixel: u16,
    pixel_representation: PixelRepresentation,
    photometric_interpretation: String,
    transfer_syntax: Option<String>,
    little_endian: bool,
    private_data: String,
}

impl PartialEq for Image {
    fn eq(&self, other: &Self) -> bool {
        self.elements == other.elements
            && self.rows == other.rows
            && self.columns == other.columns
            && self.bits_allocated == other.bits_allocated
            && self.bits_stored == other.bits_stored
            && self.samples_per_pixel == other.samples_per_pixel
            && self.pixel_representation == other.pixel_representation
            && self.photometric_interpretation == other.photometric_interpretation
            && self.transfer_syntax == other.transfer_syntax
            && self.little_endian == other.little_endian
    }
}

impl Image {
    /// Fetch an element by tag,
    /// from the root data set or any nested level.
    pub fn element(&self, tag: Tag) -> Option<&DataElement> {
        self.elements.get(&tag).or_else(|| self.flat.get(&tag))
    }

    /// Fetch an element of the root data set by tag.
    pub fn root_element(&self, tag: Tag) -> Option<&DataElement> {
        self.elements.get(&tag)
    }

    /// Fetch an element by its dictionary keyword.
    pub fn element_by_name(&self, name: &str) -> Option<&DataElement> {
        let entry = StandardDataDictionary.by_name(name)?;
        self.element(entry.tag.inner()?)
    }

    /// Iterate over the elements of the root data set, in tag order.
    pub fn elements(&self) -> impl Iterator<Item = &DataElement> {
        self.elements.values()
    }

    /// The number of elements in the root data set.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the root data set is empty.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The value of an element.
    pub fn value(&self, tag: Tag) -> Option<&Value> {
        self.element(tag).map(|e| e.value())
    }

    /// The first text value of an element.
    pub fn string(&self, tag: Tag) -> Option<&str> {
        self.value(tag).and_then(|v| v.string())
    }

    fn root_string(&self, tag: Tag) -> Option<&str> {
        self.root_element(tag).and_then(|e| e.value().string())
    }

    /// All text values of an element.
    pub fn strings(&self, tag: Tag) -> Option<&[String]> {
        self.value(tag).and_then(|v| v.strings())
    }

    /// The first numeric value of an element.
    pub fn float(&self, tag: Tag) -> Option<f64> {
        self.value(tag).and_then(|v| v.to_f64())
    }

    /// All numeric values of an element.
    pub fn floats(&self, tag: Tag) -> Option<Vec<f64>> {
        self.value(tag).and_then(|v| v.to_f64_vec())
    }

    /// The first numeric value of an element as an integer.
    pub fn int<T: NumCast>(&self, tag: Tag) -> Option<T> {
        self.value(tag).and_then(|v| v.to_int())
    }

    /// The number of rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// The number of columns.
    pub fn columns(&self) -> u32 {
        self.columns
    }

    /// The number of bits allocated per sample.
    pub fn bits_allocated(&self) -> u16 {
        self.bits_allocated
    }

    /// The number of bits stored per sample.
    pub fn bits_stored(&self) -> u16 {
        self.bits_stored
    }

    /// The number of samples per pixel.
    pub fn samples_per_pixel(&self) -> u16 {
        self.samples_per_pixel
    }

    /// Whether samples are signed or unsigned.
    pub fn pixel_representation(&self) -> PixelRepresentation {
        self.pixel_representation
    }

    /// Whether samples are signed.
    pub fn is_signed(&self) -> bool {
        self.pixel_representation == PixelRepresentation::Signed
    }

    /// The photometric interpretation, such as `MONOCHROME2` or `RGB`.
    pub fn photometric_interpretation(&self) -> &str {
        &self.photometric_interpretation
    }

    /// The transfer syntax UID declared in the file meta group.
    pub fn transfer_syntax(&self) -> Option<&str> {
        self.transfer_syntax.as_deref()
    }

    /// Whether the data set is in little endian.
    pub fn is_little_endian(&self) -> bool {
        self.little_endian
    }

    /// The text interpreted from all private blocks, concatenated.
    pub fn private_data(&self) -> &str {
        &self.private_data
    }

    /// The pixel data element.
    pub fn pixel_data(&self) -> Result<&DataElement> {
        self.root_element(Tag::PIXEL_DATA)
            .context(MissingPixelDataSnafu)
    }

    /// Whether the image holds a pixel data element.
    pub fn has_pixel_data(&self) -> bool {
        self.elements.contains_key(&Tag::PIXEL_DATA)
    }

    /// The raw bytes of the pixel data element:
    /// native samples, or the item list of encapsulated pixel data.
    pub fn pixel_bytes(&self) -> Result<Bytes> {
        let pixel_data = self.pixel_data()?;
        Ok(pixel_data.value().bytes().cloned().unwrap_or_default())
    }

    /// Walk the fragments of encapsulated pixel data.
    pub fn encapsulated_pixel_data(&self) -> Result<EncapsulatedPixelData> {
        let data = self.pixel_bytes()?;
        EncapsulatedPixelData::parse(&data).context(ParseStreamSnafu)
    }

    /// The category of pixel data encoding,
    /// from the transfer syntax.
    /// Images without a declared transfer syntax are native.
    pub fn compression(&self) -> Compression {
        match &self.transfer_syntax {
            Some(uid) => TransferSyntax::compression_of(uid),
            None => Compression::None,
        }
    }

    /// Whether the pixel data is encapsulated (compressed).
    pub fn is_compressed(&self) -> bool {
        self.compression().is_encapsulated()
    }

    /// Whether the pixel data is in one of the JPEG family encodings.
    pub fn is_compressed_jpeg(&self) -> bool {
        self.compression().is_jpeg()
    }

    /// Whether the pixel data is in lossless JPEG.
    pub fn is_compressed_jpeg_lossless(&self) -> bool {
        self.compression() == Compression::JpegLossless
    }

    /// Whether the pixel data is in baseline (or extended) JPEG.
    pub fn is_compressed_jpeg_baseline(&self) -> bool {
        self.compression() == Compression::JpegBaseline
    }

    /// Whether the pixel data is in JPEG-LS.
    pub fn is_compressed_jpeg_ls(&self) -> bool {
        self.compression() == Compression::JpegLs
    }

    /// Whether the pixel data is in JPEG 2000.
    pub fn is_compressed_jpeg2000(&self) -> bool {
        self.compression() == Compression::Jpeg2000
    }

    /// Whether the pixel data is in RLE Lossless.
    pub fn is_compressed_rle(&self) -> bool {
        self.compression() == Compression::Rle
    }

    /// Whether the data set was deflated.
    pub fn is_deflated(&self) -> bool {
        self.compression() == Compression::Deflate
    }

    /// The number of frames declared by the image,
    /// 1 if not declared.
    pub fn number_of_frames(&self) -> u32 {
        self.int(tags::NUMBER_OF_FRAMES).unwrap_or(1).max(1)
    }

    /// The number of frames which fit in the native pixel data.
    ///
    /// Compressed images always count as a single frame here.
    pub fn number_of_implicit_frames(&self) -> u32 {
        if self.is_compressed() {
            return 1;
        }
        let frame_size = self.frame_size();
        let length = self
            .root_element(Tag::PIXEL_DATA)
            .map_or(0, |e| e.offset_end() - e.offset_value());
        if frame_size == 0 {
            return 1;
        }
        u32::try_from(length / frame_size).unwrap_or(u32::MAX)
    }

    /// The number of frames which can be read:
    /// the declared number of frames,
    /// capped to the frames actually held by native pixel data.
    pub fn frame_count(&self) -> u32 {
        let declared = self.number_of_frames();
        if self.is_compressed() || !self.has_pixel_data() {
            return declared;
        }
        let implicit = self.number_of_implicit_frames();
        if implicit < declared {
            warn!(
                "Pixel data holds {} frames, but {} were declared",
                implicit, declared
            );
            return implicit.max(1);
        }
        declared
    }

    /// The size in bytes of one native frame.
    pub fn frame_size(&self) -> usize {
        self.rows as usize
            * self.columns as usize
            * <usize as From<u16>>::from(self.samples_per_pixel)
            * ((<usize as From<u16>>::from(self.bits_allocated) + 7) / 8)
    }
}


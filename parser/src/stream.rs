//! The DICOM tag stream parser.
//!
//! The parser walks a byte buffer from the first element onward
//! in a single pass,
//! recursing into sequences and items up to a bounded depth.
//! Values are captured as views over the buffer, without copying.

use crate::deflate::inflate_remainder;
use crate::error::*;
use crate::state::{ParseOptions, ParserState};
use byteordered::byteorder::{BigEndian, ByteOrder, LittleEndian};
use bytes::Bytes;
use dcmview_core::element::Extent;
use dcmview_core::{DataElement, Length, SpecificCharacterSet, Tag, TransferSyntax, Value, VR};
use dcmview_dictionary_std::tags;
use dcmview_dictionary_std::StandardDataDictionary;
use snafu::{ensure, OptionExt};
use tracing::{debug, warn};

/// The magic code of a DICOM file, after the preamble.
pub const MAGIC_CODE: &[u8; 4] = b"DICM";
/// The offset of the magic code in a DICOM file.
pub const MAGIC_CODE_OFFSET: usize = 128;

/// A receiver of the elements produced by the parser,
/// in stream order.
pub trait ElementSink {
    /// Commit a top-level element.
    fn put(&mut self, element: DataElement);
}

impl ElementSink for Vec<DataElement> {
    fn put(&mut self, element: DataElement) {
        self.push(element);
    }
}

/// The outcome of a successful parse.
#[derive(Debug, Clone)]
pub struct Parsed {
    /// The logical byte source which the element extents refer to.
    /// This differs from the input when the data set was inflated.
    pub source: Bytes,
    /// The offset where parsing stopped.
    pub end: usize,
    /// Whether the pixel data element was reached.
    pub pixel_data_found: bool,
}

/// Find the offset of the first element in a DICOM buffer.
///
/// This is right after the magic code at offset 128.
/// If the code is not there,
/// it is searched for in the first 640 bytes,
/// and failing that the data set is assumed to start at offset 0.
pub fn find_first_tag_offset(data: &[u8]) -> usize {
    if data.get(MAGIC_CODE_OFFSET..MAGIC_CODE_OFFSET + 4) == Some(&MAGIC_CODE[..]) {
        return MAGIC_CODE_OFFSET + 4;
    }
    let limit = data.len().min(MAGIC_CODE_OFFSET * 5 + MAGIC_CODE.len());
    data[..limit]
        .windows(MAGIC_CODE.len())
        .position(|w| w == MAGIC_CODE)
        .map_or(0, |pos| pos + MAGIC_CODE.len())
}

fn read_bytes(data: &[u8], offset: usize, len: usize) -> Result<&[u8]> {
    data.get(offset..offset + len)
        .context(UnexpectedEndOfStreamSnafu {
            offset,
            needed: len,
        })
}

fn read_u16(data: &[u8], offset: usize, little_endian: bool) -> Result<u16> {
    let bytes = read_bytes(data, offset, 2)?;
    Ok(if little_endian {
        LittleEndian::read_u16(bytes)
    } else {
        BigEndian::read_u16(bytes)
    })
}

fn read_u32(data: &[u8], offset: usize, little_endian: bool) -> Result<u32> {
    let bytes = read_bytes(data, offset, 4)?;
    Ok(if little_endian {
        LittleEndian::read_u32(bytes)
    } else {
        BigEndian::read_u32(bytes)
    })
}

/// A parser of DICOM tag streams.
///
/// A parser instance is meant to walk a single stream,
/// since it accumulates the decode state
/// (see [`ParserState`]) as elements are read.
#[derive(Debug, Clone, Default)]
pub struct StreamParser {
    state: ParserState,
    options: ParseOptions,
    dict: StandardDataDictionary,
}

impl StreamParser {
    /// Create a parser with the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with the given options.
    pub fn with_options(options: ParseOptions) -> Self {
        StreamParser {
            options,
            ..Default::default()
        }
    }

    /// The current decode state.
    pub fn state(&self) -> &ParserState {
        &self.state
    }

    /// The options of this parser.
    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Walk a DICOM buffer from its first element,
    /// committing each top-level element into the sink.
    ///
    /// Parsing stops successfully at the pixel data element
    /// (unless configured otherwise) or at the end of the buffer.
    /// When the transfer syntax declares a deflated data set,
    /// the remainder after the meta group is inflated
    /// and spliced into the same logical source,
    /// which is returned in [`Parsed::source`].
    ///
    /// On error, elements already committed remain in the sink.
    pub fn parse<S>(&mut self, data: Bytes, sink: &mut S) -> Result<Parsed>
    where
        S: ElementSink + ?Sized,
    {
        let mut data = data;
        let mut offset = find_first_tag_offset(&data);
        let mut pixel_data_found = false;

        while let Some(element) = self.next_element(&data, offset)? {
            let tag = element.tag();
            let end = element.offset_end();
            if matches!(self.options.read_until, Some(until) if tag >= until) {
                break;
            }
            sink.put(element);
            offset = end;

            if tag == Tag::PIXEL_DATA {
                pixel_data_found = true;
                if self.options.stop_at_pixel_data {
                    break;
                }
            }

            if self.state.needs_deflate && self.meta_boundary_reached(&data, end) {
                debug!("Inflating data set from offset {}", end);
                data = inflate_remainder(&data, end)?;
                self.state.needs_deflate = false;
                self.state.inflated = true;
            }
        }

        Ok(Parsed {
            source: data,
            end: offset,
            pixel_data_found,
        })
    }

    /// Walk the fragment list of encapsulated pixel data,
    /// as found in the value of an undefined length pixel data element.
    ///
    /// Returns the item elements, each holding the raw bytes of one fragment.
    /// The first item is the basic offset table.
    /// Walking ends at the sequence delimiter or at the end of the buffer.
    pub fn parse_encapsulated(&mut self, data: &Bytes) -> Result<Vec<DataElement>> {
        self.state.meta_finished = true;
        self.state.encapsulation = true;
        let mut offset = 0;
        let mut items = Vec::new();
        while offset + 8 <= data.len() {
            let item = self.parse_item(data, offset, true)?;
            offset = item.offset_end();
            if item.is_sequence_delimiter() {
                break;
            }
            if item.is_item() {
                items.push(item);
            }
        }
        self.state.encapsulation = false;
        Ok(items)
    }

    fn meta_boundary_reached(&self, data: &[u8], end: usize) -> bool {
        match self.state.meta_finished_offset {
            Some(meta_end) => end >= meta_end,
            None => data
                .get(end..end + 2)
                .map_or(true, |group| LittleEndian::read_u16(group) != 0x0002),
        }
    }

    /// Read the group number of the next element,
    /// leaving the meta group when it ends.
    /// Returns the group and whether the element is in little endian.
    fn read_group(&mut self, data: &[u8], offset: usize) -> Result<(u16, bool)> {
        if self.state.meta_finished {
            let little_endian = self.state.little_endian;
            return Ok((read_u16(data, offset, little_endian)?, little_endian));
        }

        // the meta group is always in little endian
        let group = read_u16(data, offset, true)?;
        let past_meta_end = self
            .state
            .meta_finished_offset
            .map_or(false, |meta_end| offset >= meta_end);
        if past_meta_end || group != 0x0002 {
            self.state.meta_finished = true;
            let little_endian = self.state.little_endian;
            return Ok((read_u16(data, offset, little_endian)?, little_endian));
        }
        self.state.meta_found = true;
        Ok((group, true))
    }

    /// Read the next element at the given offset,
    /// or `None` if the end of the buffer was reached.
    pub fn next_element(&mut self, data: &Bytes, offset: usize) -> Result<Option<DataElement>> {
        if offset >= data.len() {
            return Ok(None);
        }
        let start = offset;
        let (group, little_endian) = self.read_group(data, offset)?;
        if group == 0xFFFE {
            return self.parse_item(data, start, self.state.encapsulation).map(Some);
        }
        let element = read_u16(data, offset + 2, little_endian)?;
        let tag = Tag(group, element);
        let mut offset = offset + 4;

        let (vr, length) = if self.state.explicit_vr || !self.state.meta_finished {
            let vr_bytes = read_bytes(data, offset, 2)?;
            match VR::from_binary([vr_bytes[0], vr_bytes[1]]) {
                Some(vr) if vr.has_long_header() => {
                    let length = read_u32(data, offset + 4, little_endian)?;
                    offset += 8;
                    (vr, length)
                }
                Some(vr) => {
                    let length = read_u16(data, offset + 2, little_endian)?;
                    offset += 4;
                    (vr, u32::from(length))
                }
                None if !self.state.meta_found && self.state.meta_finished => {
                    debug!(
                        "No valid VR in {} without a meta group, reading as implicit VR",
                        tag
                    );
                    self.state.explicit_vr = false;
                    let length = read_u32(data, offset, little_endian)?;
                    offset += 4;
                    (self.implicit_vr(tag, length), length)
                }
                None => {
                    warn!(
                        "Unknown VR {:?} in {} at offset {}",
                        String::from_utf8_lossy(vr_bytes),
                        tag,
                        start
                    );
                    let length = read_u16(data, offset + 2, little_endian)?;
                    offset += 4;
                    (self.dict.vr_of(tag), u32::from(length))
                }
            }
        } else {
            let length = read_u32(data, offset, little_endian)?;
            offset += 4;
            (self.implicit_vr(tag, length), length)
        };

        let length = Length(length);
        let value_offset = offset;
        let element = if vr == VR::SQ || (vr == VR::UN && length.is_undefined()) {
            self.read_sequence(data, tag, vr, length, start, value_offset, little_endian)?
        } else if length.is_undefined() && self.state.level > 0 && vr.has_long_header() {
            // a container inside a sequence, such as encapsulated icon pixel data
            let items = self.parse_sublist(data, value_offset, length, true)?;
            let end = items.last().map_or(value_offset, |item| item.offset_end());
            DataElement::with_items(
                tag,
                vr,
                length,
                items,
                Extent {
                    start,
                    value: value_offset,
                    end,
                },
                little_endian,
            )
        } else {
            let end = match length.get() {
                None if tag == Tag::PIXEL_DATA => data.len(),
                None => {
                    return UndefinedLengthSnafu {
                        tag,
                        vr,
                        offset: start,
                    }
                    .fail()
                }
                Some(len) => {
                    let end = value_offset + len as usize;
                    ensure!(
                        end <= data.len(),
                        ValueOutOfBoundsSnafu {
                            tag,
                            offset: start,
                            length: len,
                        }
                    );
                    end
                }
            };
            DataElement::from_raw(
                tag,
                vr,
                length,
                data.slice(value_offset..end),
                Extent {
                    start,
                    value: value_offset,
                    end,
                },
                little_endian,
                self.state.charset,
                &self.options.convert,
            )
        };

        self.apply_side_effects(&element);
        Ok(Some(element))
    }

    /// Resolve the VR of an element in implicit VR.
    fn implicit_vr(&self, tag: Tag, length: u32) -> VR {
        if Length(length).is_undefined() && tag != Tag::PIXEL_DATA {
            VR::SQ
        } else {
            self.dict.vr_of(tag)
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn read_sequence(
        &mut self,
        data: &Bytes,
        tag: Tag,
        vr: VR,
        length: Length,
        start: usize,
        value_offset: usize,
        little_endian: bool,
    ) -> Result<DataElement> {
        // an unknown sequence of undefined length is in implicit VR little endian
        let implicit_un = vr == VR::UN;
        let saved = (self.state.explicit_vr, self.state.little_endian);
        if implicit_un {
            self.state.explicit_vr = false;
            self.state.little_endian = true;
        }
        let items = self.parse_sublist(data, value_offset, length, false);
        if implicit_un {
            (self.state.explicit_vr, self.state.little_endian) = saved;
        }
        let items = items?;

        let end = match length.get() {
            Some(len) => value_offset + len as usize,
            None => items.last().map_or(value_offset, |item| item.offset_end()),
        };
        Ok(DataElement::with_items(
            tag,
            VR::SQ,
            length,
            items,
            Extent {
                start,
                value: value_offset,
                end,
            },
            little_endian,
        ))
    }

    fn apply_side_effects(&mut self, element: &DataElement) {
        let tag = element.tag();
        if tag == tags::TRANSFER_SYNTAX_UID && !self.state.meta_finished {
            let uid = element.value().string().unwrap_or_default();
            match TransferSyntax::from_uid(uid) {
                Some(ts) => {
                    self.state.explicit_vr = ts.explicit_vr;
                    self.state.little_endian = ts.is_little_endian();
                    self.state.needs_deflate = ts.is_deflated();
                }
                None => {
                    debug!(
                        "Unknown transfer syntax {}, assuming explicit VR little endian",
                        uid
                    );
                    self.state.explicit_vr = true;
                    self.state.little_endian = true;
                }
            }
            self.state.transfer_syntax = Some(uid.to_string());
        } else if tag == tags::FILE_META_INFORMATION_GROUP_LENGTH && !self.state.meta_finished {
            if let Some(group_length) = element.value().to_int::<usize>() {
                self.state.meta_finished_offset = Some(element.offset_end() + group_length);
            }
        } else if tag == tags::SPECIFIC_CHARACTER_SET && self.state.level == 0 {
            let code = element
                .value()
                .strings()
                .map(|terms| terms.join("\\"))
                .unwrap_or_default();
            match SpecificCharacterSet::from_code(&code) {
                Some(charset) => self.state.charset = charset,
                None => warn!("Unsupported character set {:?}, using default", code),
            }
        }
    }

    fn enter(&mut self) -> Result<()> {
        ensure!(
            self.state.level < self.options.max_depth,
            DepthLimitExceededSnafu {
                depth: self.options.max_depth
            }
        );
        self.state.level += 1;
        Ok(())
    }

    /// Parse the items of a sequence,
    /// either up to the declared length
    /// or up to the sequence delimiter if the length is undefined.
    fn parse_sublist(
        &mut self,
        data: &Bytes,
        offset: usize,
        length: Length,
        raw: bool,
    ) -> Result<Vec<DataElement>> {
        self.enter()?;
        let items = self.parse_sublist_items(data, offset, length, raw);
        self.state.level -= 1;
        items
    }

    fn parse_sublist_items(
        &mut self,
        data: &Bytes,
        mut offset: usize,
        length: Length,
        raw: bool,
    ) -> Result<Vec<DataElement>> {
        let mut items = Vec::new();
        match length.get() {
            None => loop {
                let item = self.parse_item(data, offset, raw)?;
                offset = item.offset_end();
                let done = item.is_sequence_delimiter();
                items.push(item);
                if done {
                    break;
                }
            },
            Some(len) => {
                let end = offset + len as usize;
                ensure!(
                    end <= data.len(),
                    UnexpectedEndOfStreamSnafu {
                        offset,
                        needed: len as usize,
                    }
                );
                while offset < end {
                    let item = self.parse_item(data, offset, raw)?;
                    offset = item.offset_end();
                    items.push(item);
                }
            }
        }
        Ok(items)
    }

    /// Parse an item or delimiter record at the given offset.
    ///
    /// Item content is either parsed as nested elements,
    /// or kept as raw bytes (`raw`, for encapsulated fragments).
    /// Delimiters hold an empty list of elements.
    fn parse_item(&mut self, data: &Bytes, start: usize, raw: bool) -> Result<DataElement> {
        let little_endian = self.state.little_endian;
        let tag = Tag(
            read_u16(data, start, little_endian)?,
            read_u16(data, start + 2, little_endian)?,
        );
        ensure!(
            tag.is_item_or_delimiter(),
            UnexpectedItemTagSnafu { tag, offset: start }
        );
        let length = Length(read_u32(data, start + 4, little_endian)?);
        let value_offset = start + 8;

        if tag != Tag::ITEM {
            return Ok(DataElement::with_items(
                tag,
                VR::UN,
                length,
                Vec::new(),
                Extent {
                    start,
                    value: value_offset,
                    end: value_offset,
                },
                little_endian,
            ));
        }

        match length.get() {
            Some(len) if raw => {
                let end = value_offset + len as usize;
                ensure!(
                    end <= data.len(),
                    ValueOutOfBoundsSnafu {
                        tag,
                        offset: start,
                        length: len,
                    }
                );
                let value = if len == 0 {
                    Value::Empty
                } else {
                    Value::Bytes(data.slice(value_offset..end))
                };
                Ok(DataElement::new(
                    tag,
                    VR::OB,
                    length,
                    value,
                    Extent {
                        start,
                        value: value_offset,
                        end,
                    },
                )
                .with_little_endian(little_endian))
            }
            Some(len) => {
                let end = value_offset + len as usize;
                ensure!(
                    end <= data.len(),
                    ValueOutOfBoundsSnafu {
                        tag,
                        offset: start,
                        length: len,
                    }
                );
                let mut elements = Vec::new();
                let mut offset = value_offset;
                while offset < end {
                    let element = self
                        .next_element(data, offset)?
                        .context(UnexpectedEndOfStreamSnafu { offset, needed: 8_usize })?;
                    offset = element.offset_end();
                    elements.push(element);
                }
                Ok(DataElement::with_items(
                    tag,
                    VR::UN,
                    length,
                    elements,
                    Extent {
                        start,
                        value: value_offset,
                        end,
                    },
                    little_endian,
                ))
            }
            None => {
                let mut elements = Vec::new();
                let mut offset = value_offset;
                loop {
                    let element = self
                        .next_element(data, offset)?
                        .context(UnexpectedEndOfStreamSnafu { offset, needed: 8_usize })?;
                    offset = element.offset_end();
                    let done = element.is_item_delimiter();
                    elements.push(element);
                    if done {
                        break;
                    }
                }
                Ok(DataElement::with_items(
                    tag,
                    VR::UN,
                    length,
                    elements,
                    Extent {
                        start,
                        value: value_offset,
                        end: offset,
                    },
                    little_endian,
                ))
            }
        }
    }
}

//! Walking of encapsulated pixel data.
//!
//! The value of an encapsulated pixel data element
//! is a list of items:
//! the basic offset table followed by one or more fragments.

use crate::error::Result;
use crate::stream::StreamParser;
use byteordered::byteorder::{ByteOrder, LittleEndian};
use bytes::Bytes;
use dcmview_core::DataElement;

/// Walk the item list of encapsulated pixel data,
/// returning one item element per fragment,
/// the basic offset table included.
pub fn parse_encapsulated(data: &Bytes) -> Result<Vec<DataElement>> {
    StreamParser::new().parse_encapsulated(data)
}

/// The fragments of an encapsulated pixel data element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EncapsulatedPixelData {
    /// The basic offset table:
    /// the offset of each frame's first fragment,
    /// relative to the first fragment item.
    /// Empty if the table was left empty.
    pub offset_table: Vec<u32>,
    /// The fragment payloads, in stream order.
    pub fragments: Vec<Bytes>,
}

impl EncapsulatedPixelData {
    /// Walk the item list of encapsulated pixel data
    /// into its offset table and fragments.
    pub fn parse(data: &Bytes) -> Result<Self> {
        Ok(Self::from_items(&parse_encapsulated(data)?))
    }

    /// Collect the offset table and fragments from parsed items.
    pub fn from_items(items: &[DataElement]) -> Self {
        let mut payloads = items
            .iter()
            .map(|item| item.value().bytes().cloned().unwrap_or_default());
        let offset_table = payloads
            .next()
            .map(|table| {
                table
                    .chunks_exact(4)
                    .map(LittleEndian::read_u32)
                    .collect()
            })
            .unwrap_or_default();
        EncapsulatedPixelData {
            offset_table,
            fragments: payloads.collect(),
        }
    }

    /// The number of fragments, excluding the offset table.
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    /// Whether there are no fragments.
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }
}

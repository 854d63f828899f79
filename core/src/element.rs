//! The parsed data element record.

use crate::header::{Length, Tag, VR};
use crate::private;
use crate::text::SpecificCharacterSet;
use crate::value::{convert, ConvertOptions, Value};
use bytes::Bytes;

/// The byte extents of a data element in its source buffer.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Extent {
    /// Offset of the first byte of the element header.
    pub start: usize,
    /// Offset of the first byte of the value.
    pub value: usize,
    /// Offset one past the last byte of the element.
    pub end: usize,
}

/// A data element parsed from a DICOM stream:
/// a tag, its value representation and its typed value,
/// together with the element's position in the source.
///
/// Elements are immutable once constructed.
/// Sequence elements and items always hold
/// [`Value::Items`], except for items of encapsulated pixel data,
/// which hold the raw fragment bytes.
#[derive(Debug, Clone, PartialEq)]
pub struct DataElement {
    tag: Tag,
    vr: VR,
    length: Length,
    value: Value,
    extent: Extent,
    little_endian: bool,
    private_data: Option<String>,
}

impl DataElement {
    /// Create a data element with an already typed value.
    pub fn new(tag: Tag, vr: VR, length: Length, value: Value, extent: Extent) -> Self {
        DataElement {
            tag,
            vr,
            length,
            value,
            extent,
            little_endian: true,
            private_data: None,
        }
    }

    /// Create a data element from its raw value bytes,
    /// converting them according to the value representation.
    ///
    /// Raw values of private attributes are also given
    /// to the known private block readers,
    /// if enabled in the options.
    #[allow(clippy::too_many_arguments)]
    pub fn from_raw(
        tag: Tag,
        vr: VR,
        length: Length,
        raw: Bytes,
        extent: Extent,
        little_endian: bool,
        charset: SpecificCharacterSet,
        options: &ConvertOptions,
    ) -> Self {
        let value = convert(vr, &raw, little_endian, charset, options);
        let private_data = match &value {
            Value::Bytes(bytes) if options.read_private && tag.is_private() => {
                private::read_private(tag, bytes)
            }
            _ => None,
        };
        DataElement {
            tag,
            vr,
            length,
            value,
            extent,
            little_endian,
            private_data,
        }
    }

    /// Create a sequence or item element holding the given nested elements.
    pub fn with_items(
        tag: Tag,
        vr: VR,
        length: Length,
        items: Vec<DataElement>,
        extent: Extent,
        little_endian: bool,
    ) -> Self {
        DataElement {
            tag,
            vr,
            length,
            value: Value::Items(items),
            extent,
            little_endian,
            private_data: None,
        }
    }

    /// Set the byte order flag recorded in this element.
    pub fn with_little_endian(mut self, little_endian: bool) -> Self {
        self.little_endian = little_endian;
        self
    }

    /// The element's tag.
    #[inline]
    pub fn tag(&self) -> Tag {
        self.tag
    }

    /// The element's value representation.
    #[inline]
    pub fn vr(&self) -> VR {
        self.vr
    }

    /// The value length as declared in the element header.
    #[inline]
    pub fn length(&self) -> Length {
        self.length
    }

    /// The element's typed value.
    #[inline]
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Take the element's value.
    pub fn into_value(self) -> Value {
        self.value
    }

    /// The element's position in the source buffer.
    #[inline]
    pub fn extent(&self) -> Extent {
        self.extent
    }

    /// Offset of the element's header in the source buffer.
    #[inline]
    pub fn offset_start(&self) -> usize {
        self.extent.start
    }

    /// Offset of the element's value in the source buffer.
    #[inline]
    pub fn offset_value(&self) -> usize {
        self.extent.value
    }

    /// Offset one past the end of the element in the source buffer.
    #[inline]
    pub fn offset_end(&self) -> usize {
        self.extent.end
    }

    /// Whether the value was encoded in little endian.
    #[inline]
    pub fn is_little_endian(&self) -> bool {
        self.little_endian
    }

    /// Text interpreted from a raw private value
    /// by one of the private block readers, if any succeeded.
    pub fn private_data(&self) -> Option<&str> {
        self.private_data.as_deref()
    }

    /// Nested elements of a sequence or item.
    pub fn items(&self) -> Option<&[DataElement]> {
        self.value.items()
    }

    /// Whether this element holds nested elements.
    pub fn is_sequence(&self) -> bool {
        matches!(self.value, Value::Items(_))
    }

    /// Whether this is an item element, `(FFFE,E000)`.
    pub fn is_item(&self) -> bool {
        self.tag == Tag::ITEM
    }

    /// Whether this is an item delimiter, `(FFFE,E00D)`.
    pub fn is_item_delimiter(&self) -> bool {
        self.tag == Tag::ITEM_DELIMITER
    }

    /// Whether this is a sequence delimiter, `(FFFE,E0DD)`.
    pub fn is_sequence_delimiter(&self) -> bool {
        self.tag == Tag::SEQUENCE_DELIMITER
    }

    /// Whether this is the pixel data element.
    pub fn is_pixel_data(&self) -> bool {
        self.tag == Tag::PIXEL_DATA
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_private_values_are_kept() {
        let elem = DataElement::from_raw(
            Tag(0x0029, 0x1010),
            VR::OB,
            Length(4),
            Bytes::from_static(b"junk"),
            Extent {
                start: 0,
                value: 12,
                end: 16,
            },
            true,
            SpecificCharacterSet::Default,
            &ConvertOptions::default(),
        );
        assert_eq!(elem.value().bytes().map(|b| b.len()), Some(4));
        assert_eq!(elem.private_data(), None);
        assert_eq!(elem.offset_end(), 16);
    }

    #[test]
    fn items_are_sequences() {
        let elem = DataElement::with_items(
            Tag(0x0008, 0x1140),
            VR::SQ,
            Length::UNDEFINED,
            Vec::new(),
            Extent::default(),
            true,
        );
        assert!(elem.is_sequence());
        assert_eq!(elem.items().map(|i| i.len()), Some(0));
    }
}

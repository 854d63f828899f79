//! This module contains the data types of a DICOM element header:
//! the attribute tag, the value representation and the value length.

use std::fmt;
use std::str::FromStr;

/// Idiomatic alias for a tag's group number.
pub type GroupNumber = u16;
/// Idiomatic alias for a tag's element number.
pub type ElementNumber = u16;

/// The data type for DICOM data element tags.
///
/// A tag is a `(group, element)` pair,
/// which together make up the 32-bit key of an attribute.
/// Both `(u16, u16)` and `[u16; 2]` can be converted to this type.
#[derive(PartialEq, Eq, Hash, PartialOrd, Ord, Clone, Copy)]
pub struct Tag(pub GroupNumber, pub ElementNumber);

impl Tag {
    /// The item tag, `(FFFE,E000)`.
    pub const ITEM: Tag = Tag(0xFFFE, 0xE000);
    /// The item delimitation tag, `(FFFE,E00D)`.
    pub const ITEM_DELIMITER: Tag = Tag(0xFFFE, 0xE00D);
    /// The sequence delimitation tag, `(FFFE,E0DD)`.
    pub const SEQUENCE_DELIMITER: Tag = Tag(0xFFFE, 0xE0DD);
    /// The pixel data tag, `(7FE0,0010)`.
    pub const PIXEL_DATA: Tag = Tag(0x7FE0, 0x0010);

    /// Getter for the tag's group value.
    #[inline]
    pub fn group(self) -> GroupNumber {
        self.0
    }

    /// Getter for the tag's element value.
    #[inline]
    pub fn element(self) -> ElementNumber {
        self.1
    }

    /// The 32-bit key of this tag, group in the upper half.
    #[inline]
    pub fn key(self) -> u32 {
        (u32::from(self.0) << 16) | u32::from(self.1)
    }

    /// Whether this tag belongs to the file meta group (0002).
    #[inline]
    pub fn is_meta(self) -> bool {
        self.0 == 0x0002
    }

    /// Whether this is a private attribute (odd group number).
    #[inline]
    pub fn is_private(self) -> bool {
        self.0 % 2 == 1
    }

    /// Whether this is a private creator element,
    /// `(gggg,0010)` through `(gggg,00FF)` of an odd group.
    #[inline]
    pub fn is_private_creator(self) -> bool {
        self.is_private() && (0x0010..=0x00FF).contains(&self.1)
    }

    /// Whether this is a group length element, `(gggg,0000)`.
    #[inline]
    pub fn is_group_length(self) -> bool {
        self.1 == 0x0000
    }

    /// Whether this is one of the three item or delimiter tags of group FFFE.
    #[inline]
    pub fn is_item_or_delimiter(self) -> bool {
        self == Tag::ITEM || self == Tag::ITEM_DELIMITER || self == Tag::SEQUENCE_DELIMITER
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Tag({:#06X?}, {:#06X?})", self.0, self.1)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({:04X},{:04X})", self.0, self.1)
    }
}

impl PartialEq<(u16, u16)> for Tag {
    fn eq(&self, other: &(u16, u16)) -> bool {
        self.0 == other.0 && self.1 == other.1
    }
}

impl From<(u16, u16)> for Tag {
    #[inline]
    fn from(value: (u16, u16)) -> Tag {
        Tag(value.0, value.1)
    }
}

impl From<[u16; 2]> for Tag {
    #[inline]
    fn from(value: [u16; 2]) -> Tag {
        Tag(value[0], value[1])
    }
}

macro_rules! value_representations {
    ($($vr:ident => $name:literal,)+) => {
        /// A DICOM value representation,
        /// the data type of an attribute's value.
        #[derive(Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Clone, Copy)]
        pub enum VR {
            $(
                #[doc = $name]
                $vr,
            )+
        }

        impl VR {
            /// All value representations, in alphabetical order.
            pub const ALL: &'static [VR] = &[$(VR::$vr),+];

            /// The two letter code of this VR, such as `"US"`.
            pub fn code(self) -> &'static str {
                match self {
                    $(VR::$vr => stringify!($vr),)+
                }
            }

            /// The full name of this VR, such as `"Unsigned Short"`.
            pub fn name(self) -> &'static str {
                match self {
                    $(VR::$vr => $name,)+
                }
            }
        }
    };
}

value_representations! {
    AE => "Application Entity",
    AS => "Age String",
    AT => "Attribute Tag",
    CS => "Code String",
    DA => "Date",
    DS => "Decimal String",
    DT => "Date Time",
    FD => "Floating Point Double",
    FL => "Floating Point Single",
    IS => "Integer String",
    LO => "Long String",
    LT => "Long Text",
    OB => "Other Byte",
    OD => "Other Double",
    OF => "Other Float",
    OL => "Other Long",
    OV => "Other Very Long",
    OW => "Other Word",
    PN => "Person Name",
    SH => "Short String",
    SL => "Signed Long",
    SQ => "Sequence of Items",
    SS => "Signed Short",
    ST => "Short Text",
    SV => "Signed Very Long",
    TM => "Time",
    UC => "Unlimited Characters",
    UI => "Unique Identifier",
    UL => "Unsigned Long",
    UN => "Unknown",
    UR => "Universal Resource Identifier",
    US => "Unsigned Short",
    UT => "Unlimited Text",
    UV => "Unsigned Very Long",
}

impl VR {
    /// Read a VR from the two bytes of an explicit VR header.
    ///
    /// Returns `None` unless both bytes form a known upper case code.
    pub fn from_binary(chars: [u8; 2]) -> Option<Self> {
        VR::ALL
            .iter()
            .copied()
            .find(|vr| vr.code().as_bytes() == chars)
    }

    /// The two bytes of this VR in an explicit VR header.
    pub fn to_bytes(self) -> [u8; 2] {
        let code = self.code().as_bytes();
        [code[0], code[1]]
    }

    /// Whether an explicit VR header with this VR
    /// carries 2 reserved bytes and a 32-bit length,
    /// rather than a 16-bit length.
    pub fn has_long_header(self) -> bool {
        use VR::*;
        matches!(
            self,
            OB | OD | OF | OL | OV | OW | SQ | UC | UN | UR | UT | SV | UV
        )
    }

    /// Whether values of this VR are kept as raw bytes by value conversion:
    /// binary data, unknown content, sequences and unlimited text.
    pub fn is_raw(self) -> bool {
        use VR::*;
        matches!(self, OB | OD | OF | OL | OV | OW | SQ | UN | UT)
    }
}

impl FromStr for VR {
    type Err = &'static str;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        <[u8; 2]>::try_from(code.as_bytes())
            .ok()
            .and_then(VR::from_binary)
            .ok_or("no such value representation")
    }
}

impl fmt::Display for VR {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.code())
    }
}

/// A type for representing data set content length, in bytes.
/// An internal value of `0xFFFF_FFFF` represents an undefined
/// (unspecified) length, which has to be determined
/// by walking the content up to its delimiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Length(pub u32);

impl Length {
    /// A length that is undefined.
    pub const UNDEFINED: Self = Length(0xFFFF_FFFF);

    /// Check whether this length is undefined (unknown).
    #[inline]
    pub fn is_undefined(self) -> bool {
        self == Length::UNDEFINED
    }

    /// Fetch the concrete length value, if available.
    #[inline]
    pub fn get(self) -> Option<u32> {
        if self.is_undefined() {
            None
        } else {
            Some(self.0)
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.get() {
            Some(len) => fmt::Display::fmt(&len, f),
            None => f.pad("U/L"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn tag_display_and_key() {
        let tag = Tag(0x0028, 0x0010);
        assert_eq!(tag.to_string(), "(0028,0010)");
        assert_eq!(tag.key(), 0x0028_0010);
        assert_eq!(Tag::from((0x7FE0, 0x0010)), Tag::PIXEL_DATA);
    }

    #[test]
    fn private_tags() {
        assert!(Tag(0x0029, 0x1010).is_private());
        assert!(!Tag(0x0029, 0x1010).is_private_creator());
        assert!(Tag(0x0029, 0x0010).is_private_creator());
        assert!(!Tag(0x0028, 0x0010).is_private());
    }

    #[rstest]
    #[case(*b"OB", Some(VR::OB))]
    #[case(*b"US", Some(VR::US))]
    #[case(*b"UV", Some(VR::UV))]
    #[case(*b"ob", None)]
    #[case([0x00, 0x08], None)]
    fn vr_from_binary(#[case] bytes: [u8; 2], #[case] expected: Option<VR>) {
        assert_eq!(VR::from_binary(bytes), expected);
    }

    #[test]
    fn codes_and_names() {
        assert_eq!(VR::ALL.len(), 34);
        assert_eq!("SQ".parse::<VR>(), Ok(VR::SQ));
        assert!("SQX".parse::<VR>().is_err());
        assert_eq!(VR::US.name(), "Unsigned Short");
        assert_eq!(format!("{:4}|", VR::DS), "DS  |");
        assert_eq!(VR::OW.to_bytes(), *b"OW");
    }

    #[test]
    fn long_header_vrs() {
        for vr in [VR::OB, VR::OW, VR::SQ, VR::UN, VR::UT, VR::UC, VR::UR] {
            assert!(vr.has_long_header(), "{} should have a long header", vr);
        }
        for vr in [VR::US, VR::DS, VR::PN, VR::UI, VR::AT] {
            assert!(!vr.has_long_header(), "{} should have a short header", vr);
        }
    }

    #[test]
    fn undefined_length() {
        assert!(Length::UNDEFINED.is_undefined());
        assert_eq!(Length(16).get(), Some(16));
        assert_eq!(Length::UNDEFINED.to_string(), "U/L");
    }
}

//! This module contains reusable components for decoding text in DICOM
//! data structures, including support for character repertoires.
//!
//! The Specific Character Set `(0008,0005)` attribute may change
//! the character set of all subsequent textual values in the data set.
//! Only single-byte repertoires, UTF-8 and GB18030 are supported.
//! Unsupported codes fall back to the default repertoire.

use encoding::all::{GB18030, GBK, ISO_8859_1, ISO_8859_2, ISO_8859_3, ISO_8859_4, ISO_8859_5};
use encoding::all::{ISO_8859_6, ISO_8859_7, ISO_8859_8, UTF_8, WINDOWS_874};
use encoding::{DecoderTrap, Encoding, RawDecoder, StringWriter};

/// An enum type for all currently supported character sets.
#[derive(Debug, Default, Copy, Clone, Eq, Hash, PartialEq, PartialOrd, Ord)]
#[non_exhaustive]
pub enum SpecificCharacterSet {
    /// **ISO-IR 6**: the default character set.
    #[default]
    Default,
    /// **ISO-IR 100** (ISO-8859-1): Latin alphabet No. 1
    IsoIr100,
    /// **ISO-IR 101** (ISO-8859-2): Latin alphabet No. 2
    IsoIr101,
    /// **ISO-IR 109** (ISO-8859-3): Latin alphabet No. 3
    IsoIr109,
    /// **ISO-IR 110** (ISO-8859-4): Latin alphabet No. 4
    IsoIr110,
    /// **ISO-IR 144** (ISO-8859-5): Cyrillic
    IsoIr144,
    /// **ISO-IR 127** (ISO-8859-6): Arabic
    IsoIr127,
    /// **ISO-IR 126** (ISO-8859-7): Greek
    IsoIr126,
    /// **ISO-IR 138** (ISO-8859-8): Hebrew
    IsoIr138,
    /// **ISO-IR 166** (TIS 620): Thai
    IsoIr166,
    /// **ISO-IR 192**: The Unicode character set based on the UTF-8 encoding.
    IsoIr192,
    /// **GB18030**: The Simplified Chinese character set.
    Gb18030,
    /// **GBK**: Simplified Chinese, a subset of GB18030.
    Gbk,
}

impl SpecificCharacterSet {
    /// Obtain the character set identified by the given defined term,
    /// as found in the Specific Character Set attribute.
    ///
    /// When the attribute is multi-valued
    /// (code extensions), the first recognized term is used.
    pub fn from_code(code: &str) -> Option<Self> {
        use self::SpecificCharacterSet::*;
        code.split('\\').find_map(|term| match term.trim() {
            "" | "Default" | "ISO_IR_6" | "ISO_IR 6" | "ISO 2022 IR 6" => None,
            "ISO_IR_100" | "ISO_IR 100" | "ISO 2022 IR 100" => Some(IsoIr100),
            "ISO_IR_101" | "ISO_IR 101" | "ISO 2022 IR 101" => Some(IsoIr101),
            "ISO_IR_109" | "ISO_IR 109" | "ISO 2022 IR 109" => Some(IsoIr109),
            "ISO_IR_110" | "ISO_IR 110" | "ISO 2022 IR 110" => Some(IsoIr110),
            "ISO_IR_144" | "ISO_IR 144" | "ISO 2022 IR 144" => Some(IsoIr144),
            "ISO_IR_127" | "ISO_IR 127" | "ISO 2022 IR 127" => Some(IsoIr127),
            "ISO_IR_126" | "ISO_IR 126" | "ISO 2022 IR 126" => Some(IsoIr126),
            "ISO_IR_138" | "ISO_IR 138" | "ISO 2022 IR 138" => Some(IsoIr138),
            "ISO_IR_166" | "ISO_IR 166" | "ISO 2022 IR 166" => Some(IsoIr166),
            "ISO_IR_192" | "ISO_IR 192" => Some(IsoIr192),
            "GB18030" => Some(Gb18030),
            "GBK" => Some(Gbk),
            _ => None,
        })
        .or_else(|| {
            let only_default = code.split('\\').all(|t| {
                matches!(
                    t.trim(),
                    "" | "Default" | "ISO_IR_6" | "ISO_IR 6" | "ISO 2022 IR 6"
                )
            });
            if only_default {
                Some(Default)
            } else {
                None
            }
        })
    }

    /// The defined term of this character set.
    pub fn name(self) -> &'static str {
        use self::SpecificCharacterSet::*;
        match self {
            Default => "ISO_IR 6",
            IsoIr100 => "ISO_IR 100",
            IsoIr101 => "ISO_IR 101",
            IsoIr109 => "ISO_IR 109",
            IsoIr110 => "ISO_IR 110",
            IsoIr144 => "ISO_IR 144",
            IsoIr127 => "ISO_IR 127",
            IsoIr126 => "ISO_IR 126",
            IsoIr138 => "ISO_IR 138",
            IsoIr166 => "ISO_IR 166",
            IsoIr192 => "ISO_IR 192",
            Gb18030 => "GB18030",
            Gbk => "GBK",
        }
    }

    fn encoding(self) -> &'static dyn Encoding {
        use self::SpecificCharacterSet::*;
        match self {
            // 8859-1 is a superset of the default repertoire
            Default | IsoIr100 => ISO_8859_1,
            IsoIr101 => ISO_8859_2,
            IsoIr109 => ISO_8859_3,
            IsoIr110 => ISO_8859_4,
            IsoIr144 => ISO_8859_5,
            IsoIr127 => ISO_8859_6,
            IsoIr126 => ISO_8859_7,
            IsoIr138 => ISO_8859_8,
            IsoIr166 => WINDOWS_874,
            IsoIr192 => UTF_8,
            Gb18030 => GB18030,
            Gbk => GBK,
        }
    }

    /// Decode the given byte buffer as a single string.
    ///
    /// Decoding never fails:
    /// byte sequences which cannot be decoded
    /// are replaced with an octal escape (`\ooo`).
    pub fn decode(self, text: &[u8]) -> String {
        self.encoding()
            .decode(text, DecoderTrap::Call(decode_text_trap))
            .unwrap_or_else(|_| String::from_utf8_lossy(text).into_owned())
    }
}

fn decode_text_trap(
    _decoder: &mut dyn RawDecoder,
    input: &[u8],
    output: &mut dyn StringWriter,
) -> bool {
    let Some(&c) = input.first() else {
        return true;
    };
    let o0 = c & 7;
    let o1 = (c & 56) >> 3;
    let o2 = (c & 192) >> 6;
    output.write_char('\\');
    output.write_char((o2 + b'0') as char);
    output.write_char((o1 + b'0') as char);
    output.write_char((o0 + b'0') as char);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("ISO_IR 100", Some(SpecificCharacterSet::IsoIr100))]
    #[case("ISO_IR 192 ", Some(SpecificCharacterSet::IsoIr192))]
    #[case("", Some(SpecificCharacterSet::Default))]
    #[case("\\ISO 2022 IR 100", Some(SpecificCharacterSet::IsoIr100))]
    #[case("ISO 2022 IR 87", None)]
    fn parse_charset_codes(#[case] code: &str, #[case] expected: Option<SpecificCharacterSet>) {
        assert_eq!(SpecificCharacterSet::from_code(code), expected);
    }

    #[test]
    fn decode_latin1() {
        let text = SpecificCharacterSet::IsoIr100.decode(b"Buc^J\xe9r\xf4me");
        assert_eq!(text, "Buc^Jérôme");
    }

    #[test]
    fn decode_utf8() {
        let text = SpecificCharacterSet::IsoIr192.decode("Wang^XiaoDong=王^小東".as_bytes());
        assert_eq!(text, "Wang^XiaoDong=王^小東");
    }

    #[test]
    fn decode_gb18030() {
        let bytes = [0xCD, 0xF5, 0x5E, 0xD0, 0xA1, 0xB6, 0xAB];
        assert_eq!(SpecificCharacterSet::Gb18030.decode(&bytes), "王^小东");
    }
}

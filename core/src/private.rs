//! Readers of vendor-specific private data blocks.
//!
//! Some vendors store nested headers of their own in private attributes,
//! which would otherwise be left as opaque bytes.
//! A [`PrivateBlockReader`] turns such a block into descriptive text.
//! Reading is best effort: a reader which does not recognize
//! the block returns `None`, and the raw value is kept as is.

use crate::header::Tag;
use byteordered::byteorder::{ByteOrder, LittleEndian};
use tracing::debug;

/// Interpreter of a vendor-specific private value.
pub trait PrivateBlockReader: Send + Sync {
    /// The name of the format read.
    fn name(&self) -> &'static str;

    /// Whether this reader applies to a raw value of the given tag.
    fn accepts(&self, tag: Tag, data: &[u8]) -> bool;

    /// Interpret the raw block as descriptive text.
    fn read(&self, data: &[u8]) -> Option<String>;
}

/// The private block readers tried by [`read_private`], in order.
pub static PRIVATE_READERS: &[&dyn PrivateBlockReader] = &[&SiemensCsaReader];

/// Interpret a raw private value with the first known reader
/// which accepts it and succeeds.
pub fn read_private(tag: Tag, data: &[u8]) -> Option<String> {
    PRIVATE_READERS
        .iter()
        .filter(|reader| reader.accepts(tag, data))
        .find_map(|reader| {
            let text = reader.read(data);
            if text.is_none() {
                debug!("Could not read {} block in {}", reader.name(), tag);
            }
            text
        })
}

/// Reader of Siemens CSA headers
/// (the image and series shadow headers in group 0029).
///
/// The output holds one line per CSA element,
/// `    name=item item \n`, with the non-empty items of the element.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct SiemensCsaReader;

impl SiemensCsaReader {
    const MAGIC: &'static [u8] = b"SV10";
    const NAME_LENGTH: usize = 64;
    const MAX_ELEMENTS: u32 = 128;

    /// Look up the first value of a named element
    /// in text produced by this reader.
    pub fn find<'a>(text: &'a str, name: &str) -> Option<&'a str> {
        text.lines().find_map(|line| {
            let (key, items) = line.trim_start().split_once('=')?;
            if key != name {
                return None;
            }
            items.split_whitespace().next()
        })
    }

    fn read_u32(data: &[u8], offset: usize) -> Option<u32> {
        data.get(offset..offset + 4).map(LittleEndian::read_u32)
    }

    fn read_string(data: &[u8], offset: usize, len: usize) -> Option<String> {
        let bytes = data.get(offset..offset + len)?;
        let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
        Some(String::from_utf8_lossy(&bytes[..end]).trim().to_string())
    }

    fn read_element(data: &[u8], mut offset: usize, out: &mut String) -> Option<usize> {
        let name = Self::read_string(data, offset, Self::NAME_LENGTH)?;
        // skip VM, VR and SyngoDT
        offset += Self::NAME_LENGTH + 12;
        let num_items = Self::read_u32(data, offset)?;
        offset += 8;

        out.push_str("    ");
        out.push_str(&name);
        out.push('=');
        for _ in 0..num_items {
            let item_len = Self::read_u32(data, offset)? as usize;
            offset += 16;
            if item_len > 0 {
                let item = Self::read_string(data, offset, item_len)?;
                out.push_str(&item);
                out.push(' ');
            }
            offset += (item_len + 3) & !3;
        }
        out.push('\n');
        Some(offset)
    }
}

impl PrivateBlockReader for SiemensCsaReader {
    fn name(&self) -> &'static str {
        "Siemens CSA"
    }

    fn accepts(&self, tag: Tag, _data: &[u8]) -> bool {
        tag.group() == 0x0029 && matches!(tag.element() & 0x00FF, 0x10 | 0x20)
    }

    fn read(&self, data: &[u8]) -> Option<String> {
        let mut offset = 0;
        if data.starts_with(Self::MAGIC) {
            // magic and 4 unused bytes
            offset = 8;
        }
        let num_elements = Self::read_u32(data, offset)?;
        if !(1..=Self::MAX_ELEMENTS).contains(&num_elements) {
            return None;
        }
        // element count and 1 unused integer
        offset += 8;

        let mut out = String::from("\n");
        for _ in 0..num_elements {
            offset = Self::read_element(data, offset, &mut out)?;
        }
        Some(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn csa_element(out: &mut Vec<u8>, name: &str, items: &[&str]) {
        let mut name_field = [0_u8; 64];
        name_field[..name.len()].copy_from_slice(name.as_bytes());
        out.extend_from_slice(&name_field);
        out.extend_from_slice(&1_u32.to_le_bytes()); // VM
        out.extend_from_slice(b"IS\0\0"); // VR
        out.extend_from_slice(&6_u32.to_le_bytes()); // SyngoDT
        out.extend_from_slice(&(items.len() as u32).to_le_bytes());
        out.extend_from_slice(&77_u32.to_le_bytes());
        for item in items {
            let len = item.len() as u32 + 1;
            for _ in 0..4 {
                out.extend_from_slice(&len.to_le_bytes());
            }
            out.extend_from_slice(item.as_bytes());
            out.push(0);
            while out.len() % 4 != 0 {
                out.push(0);
            }
        }
    }

    fn csa_header(elements: &[(&str, Vec<&str>)]) -> Vec<u8> {
        let mut out = b"SV10\x04\x03\x02\x01".to_vec();
        out.extend_from_slice(&(elements.len() as u32).to_le_bytes());
        out.extend_from_slice(&77_u32.to_le_bytes());
        for (name, items) in elements {
            csa_element(&mut out, name, items);
        }
        out
    }

    #[test]
    fn read_csa_header() {
        let data = csa_header(&[
            ("NumberOfImagesInMosaic", vec!["36"]),
            ("AcquisitionMatrixText", vec!["64p*64"]),
            ("Empty", vec![]),
        ]);
        let text = read_private(Tag(0x0029, 0x1010), &data).unwrap();
        assert_eq!(
            text,
            "\n    NumberOfImagesInMosaic=36 \n    AcquisitionMatrixText=64p*64 \n    Empty=\n"
        );
        assert_eq!(
            SiemensCsaReader::find(&text, "NumberOfImagesInMosaic"),
            Some("36")
        );
        assert_eq!(SiemensCsaReader::find(&text, "Empty"), None);
    }

    #[test]
    fn reject_other_blocks() {
        assert_eq!(read_private(Tag(0x0029, 0x1010), b"not a CSA header"), None);
        assert_eq!(read_private(Tag(0x0019, 0x1010), &csa_header(&[("A", vec!["1"])])), None);
        // truncated element list
        let mut data = csa_header(&[("A", vec!["1"])]);
        data.truncate(40);
        assert_eq!(read_private(Tag(0x0029, 0x1020), &data), None);
    }
}

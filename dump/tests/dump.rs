//! Dumping images assembled in memory.

use dcmview_core::Tag;
use dcmview_dictionary_std::tags;
use dcmview_dump::{ColorMode, DumpOptions};
use dcmview_object::{from_bytes, Image};
use dcmview_pixeldata::FrameDecoder;
use dcmview_series::Series;
use pretty_assertions::assert_eq;
use std::collections::BTreeMap;
use std::sync::Arc;

const EXPLICIT_VR_LE: &str = "1.2.840.10008.1.2.1";

#[derive(Default)]
struct DataSet(BTreeMap<Tag, Vec<u8>>);

impl DataSet {
    fn put(mut self, tag: Tag, vr: &[u8; 2], value: &[u8]) -> Self {
        let mut value = value.to_vec();
        if value.len() % 2 == 1 {
            value.push(if vr == b"UI" || vr == b"OB" { 0 } else { b' ' });
        }
        let mut out = Vec::new();
        out.extend_from_slice(&tag.0.to_le_bytes());
        out.extend_from_slice(&tag.1.to_le_bytes());
        out.extend_from_slice(vr);
        if matches!(vr, b"OB" | b"OW" | b"SQ" | b"UN" | b"UT") {
            out.extend_from_slice(&[0, 0]);
            out.extend_from_slice(&(value.len() as u32).to_le_bytes());
        } else {
            out.extend_from_slice(&(value.len() as u16).to_le_bytes());
        }
        out.extend(value);
        self.0.insert(tag, out);
        self
    }

    fn text(self, tag: Tag, vr: &[u8; 2], value: &str) -> Self {
        self.put(tag, vr, value.as_bytes())
    }

    fn us(self, tag: Tag, value: u16) -> Self {
        self.put(tag, b"US", &value.to_le_bytes())
    }

    fn encode(&self) -> Vec<u8> {
        self.0.values().flatten().copied().collect()
    }

    fn into_image(self) -> Image {
        let meta = DataSet::default()
            .put(tags::FILE_META_INFORMATION_VERSION, b"OB", &[0, 1])
            .text(tags::TRANSFER_SYNTAX_UID, b"UI", EXPLICIT_VR_LE)
            .encode();
        let mut out = vec![0; 128];
        out.extend_from_slice(b"DICM");
        out.extend(
            DataSet::default()
                .put(
                    tags::FILE_META_INFORMATION_GROUP_LENGTH,
                    b"UL",
                    &(meta.len() as u32).to_le_bytes(),
                )
                .encode(),
        );
        out.extend(meta);
        out.extend(self.encode());
        from_bytes(out).expect("image should be parsed")
    }
}

fn slice(z: f64) -> Image {
    DataSet::default()
        .text(tags::MODALITY, b"CS", "MR")
        .text(tags::SERIES_INSTANCE_UID, b"UI", "1.2.3")
        .text(tags::IMAGE_POSITION_PATIENT, b"DS", &format!("0\\0\\{}", z))
        .text(tags::IMAGE_ORIENTATION_PATIENT, b"DS", "1\\0\\0\\0\\1\\0")
        .us(tags::SAMPLES_PER_PIXEL, 1)
        .text(tags::PHOTOMETRIC_INTERPRETATION, b"CS", "MONOCHROME2")
        .us(tags::ROWS, 2)
        .us(tags::COLUMNS, 2)
        .us(tags::BITS_ALLOCATED, 8)
        .us(tags::BITS_STORED, 8)
        .us(tags::HIGH_BIT, 7)
        .us(tags::PIXEL_REPRESENTATION, 0)
        .put(Tag::PIXEL_DATA, b"OB", &[1, 2, 3, 4])
        .into_image()
}

fn options() -> DumpOptions {
    let mut options = DumpOptions::new();
    options.width(120).color_mode(ColorMode::Never);
    options
}

fn lines(out: &[u8]) -> Vec<String> {
    std::str::from_utf8(out)
        .expect("output is not valid UTF-8")
        .lines()
        .map(String::from)
        .collect()
}

#[test]
fn dump_image_lists_elements() {
    let mut out = Vec::new();
    options().dump_image_to(&mut out, &slice(4.)).unwrap();
    let lines = lines(&out);

    assert!(lines[0].starts_with("Transfer Syntax: 1.2.840.10008.1.2.1 ("));
    assert_eq!(lines[1], "-".repeat(58));

    let line_of = |tag: &str| {
        lines
            .iter()
            .find(|line| line.starts_with(tag))
            .unwrap_or_else(|| panic!("no line for {}", tag))
            .clone()
    };
    let check = |line: String, expected: [&str; 3], value: &str| {
        let parts: Vec<&str> = line.split(' ').filter(|p| !p.is_empty()).collect();
        assert_eq!(&parts[..3], &expected);
        assert_eq!(line.split("): ").nth(1).map(str::trim), Some(value));
    };
    check(line_of("(0008,0060)"), ["(0008,0060)", "Modality", "CS"], "\"MR\"");
    check(line_of("(0028,0010)"), ["(0028,0010)", "Rows", "US"], "2");

    let pixel_data = line_of("(7FE0,0010)");
    assert!(pixel_data.contains("Pixel Data"));
    assert!(pixel_data.ends_with("[01, 02, 03, 04]"));
}

#[test]
fn describe_a_frame() {
    let decoder = FrameDecoder::new(Arc::new(slice(0.))).unwrap();
    let frame = decoder.get_frame(0).unwrap();

    let mut out = Vec::new();
    options().describe_frame_to(&mut out, &frame).unwrap();
    let lines = lines(&out);
    assert_eq!(lines[0], "Frame: 0");
    assert_eq!(lines[1], "Dimensions: 2 x 2, 1 sample(s) per pixel");
    assert_eq!(lines[3], "Photometric Interpretation: MONOCHROME2");
    assert_eq!(lines.last().unwrap(), "Data (4 bytes): [01, 02, 03, 04]");
}

#[test]
fn describe_a_series() {
    let mut series = Series::new();
    for z in [2., 0., 1.] {
        series.add_image(Arc::new(slice(z))).unwrap();
    }
    series.build_series().unwrap();

    let mut out = Vec::new();
    options().describe_series_to(&mut out, &series).unwrap();
    let lines = lines(&out);
    assert_eq!(lines[1], "Images: 3");
    assert_eq!(lines[2], "Kind: volume");
    assert_eq!(lines[4], "Slices: axial, reversed");
    assert_eq!(lines[5], "Order: [1, 2, 0]");
}

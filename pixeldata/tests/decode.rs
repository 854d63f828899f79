//! Decoding frames of DICOM files assembled in memory.

use dcmview_core::Tag;
use dcmview_dictionary_std::tags;
use dcmview_object::{from_bytes, Image};
use dcmview_pixeldata::adapters::FrameCodec;
use dcmview_pixeldata::{
    mosaic_tiles, select_decoder, DecodeError, DecodeOptions, DecodeResult, DecoderKind,
    FrameDecoder, FrameInfo,
};
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::collections::BTreeMap;
use std::sync::Arc;

const EXPLICIT_VR_LE: &str = "1.2.840.10008.1.2.1";
const RLE_LOSSLESS: &str = "1.2.840.10008.1.2.5";
const JPEG_BASELINE: &str = "1.2.840.10008.1.2.4.50";
const JPEG_2000: &str = "1.2.840.10008.1.2.4.91";
const MPEG2: &str = "1.2.840.10008.1.2.4.100";

/// A writer of explicit VR little endian data sets, sorted by tag.
#[derive(Default)]
struct DataSet(BTreeMap<Tag, Vec<u8>>);

impl DataSet {
    fn put(mut self, tag: Tag, vr: &[u8; 2], value: &[u8]) -> Self {
        let mut value = value.to_vec();
        if value.len() % 2 == 1 {
            value.push(if vr == b"UI" || vr == b"OB" { 0 } else { b' ' });
        }
        let mut out = header(tag, vr, value.len() as u32);
        out.extend(value);
        self.0.insert(tag, out);
        self
    }

    fn text(self, tag: Tag, vr: &[u8; 2], value: &str) -> Self {
        self.put(tag, vr, value.as_bytes())
    }

    fn us(self, tag: Tag, values: &[u16]) -> Self {
        let bytes: Vec<u8> = values.iter().flat_map(|v| v.to_le_bytes()).collect();
        self.put(tag, b"US", &bytes)
    }

    /// Encapsulated pixel data with an offset table and one item per fragment.
    fn encapsulated(mut self, offset_table: &[u32], fragments: &[Vec<u8>]) -> Self {
        let mut out = header(Tag::PIXEL_DATA, b"OB", u32::MAX);
        let table: Vec<u8> = offset_table.iter().flat_map(|o| o.to_le_bytes()).collect();
        for payload in std::iter::once(&table).chain(fragments) {
            out.extend_from_slice(&[0xFE, 0xFF, 0x00, 0xE0]);
            out.extend_from_slice(&(payload.len() as u32).to_le_bytes());
            out.extend_from_slice(payload);
        }
        out.extend_from_slice(&[0xFE, 0xFF, 0xDD, 0xE0, 0, 0, 0, 0]);
        self.0.insert(Tag::PIXEL_DATA, out);
        self
    }

    fn encode(&self) -> Vec<u8> {
        self.0.values().flatten().copied().collect()
    }

    fn into_file(self, transfer_syntax: &str) -> Vec<u8> {
        let meta = DataSet::default()
            .put(tags::FILE_META_INFORMATION_VERSION, b"OB", &[0, 1])
            .text(tags::TRANSFER_SYNTAX_UID, b"UI", transfer_syntax)
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
        out
    }
}

fn header(tag: Tag, vr: &[u8; 2], length: u32) -> Vec<u8> {
    let mut out = Vec::new();
    out.extend_from_slice(&tag.0.to_le_bytes());
    out.extend_from_slice(&tag.1.to_le_bytes());
    out.extend_from_slice(vr);
    if matches!(vr, b"OB" | b"OW" | b"SQ" | b"UN" | b"UT") {
        out.extend_from_slice(&[0, 0]);
        out.extend_from_slice(&length.to_le_bytes());
    } else {
        out.extend_from_slice(&(length as u16).to_le_bytes());
    }
    out
}

fn image(rows: u16, columns: u16, bits: u16, photometric: &str) -> DataSet {
    DataSet::default()
        .us(tags::SAMPLES_PER_PIXEL, &[1])
        .text(tags::PHOTOMETRIC_INTERPRETATION, b"CS", photometric)
        .us(tags::ROWS, &[rows])
        .us(tags::COLUMNS, &[columns])
        .us(tags::BITS_ALLOCATED, &[bits])
        .us(tags::BITS_STORED, &[bits])
        .us(tags::HIGH_BIT, &[bits - 1])
        .us(tags::PIXEL_REPRESENTATION, &[0])
}

/// Build an RLE frame out of already encoded segments.
fn rle_frame(segments: &[&[u8]]) -> Vec<u8> {
    let mut frame = vec![0_u8; 64];
    frame[0..4].copy_from_slice(&(segments.len() as u32).to_le_bytes());
    let mut offset = 64_u32;
    for (i, segment) in segments.iter().enumerate() {
        frame[4 + 4 * i..8 + 4 * i].copy_from_slice(&offset.to_le_bytes());
        offset += segment.len() as u32;
    }
    for segment in segments {
        frame.extend_from_slice(segment);
    }
    // fragments have even length
    if frame.len() % 2 == 1 {
        frame.push(0);
    }
    frame
}

fn decoder(data: Vec<u8>) -> FrameDecoder {
    let image = from_bytes(data).expect("image should be parsed");
    FrameDecoder::new(Arc::new(image)).expect("decoder should be selected")
}

#[test]
fn rle_literal_and_replicate_runs() {
    let frame = rle_frame(&[&[0x02, 0xAA, 0xBB, 0xCC, 0xFE, 0x05]]);
    let decoder = decoder(
        image(2, 3, 8, "MONOCHROME2")
            .encapsulated(&[], &[frame])
            .into_file(RLE_LOSSLESS),
    );
    assert_eq!(decoder.kind(), DecoderKind::Rle);
    assert_eq!(
        decoder.decode_frame(0).unwrap(),
        vec![0xAA, 0xBB, 0xCC, 0x05, 0x05, 0x05]
    );
}

#[test]
fn rle_multi_frame() {
    let frames = vec![
        rle_frame(&[&[0x01, 0x00, 0x10], &[0xFF, 0x20]]),
        rle_frame(&[&[0xFF, 0x01], &[0x01, 0x30, 0x40]]),
    ];
    let decoder = decoder(
        image(1, 2, 16, "MONOCHROME2")
            .text(tags::NUMBER_OF_FRAMES, b"IS", "2")
            .encapsulated(&[], &frames)
            .into_file(RLE_LOSSLESS),
    );
    assert_eq!(decoder.number_of_frames(), 2);

    let second = decoder.get_frame(1).unwrap();
    assert_eq!(second.data, vec![0x30, 0x01, 0x40, 0x01]);
    assert!(second.little_endian);
    assert_eq!(second.frame, 1);

    let all = decoder.decode_all_frames().unwrap();
    assert_eq!(all, vec![vec![0x20, 0x00, 0x20, 0x10], second.data.clone()]);

    // memoized frame spans are reused
    assert_eq!(decoder.frame_data(0).unwrap(), decoder.frame_data(0).unwrap());

    assert!(matches!(
        decoder.decode_frame(2),
        Err(DecodeError::FrameRangeOutOfBounds { frame: 2, frames: 2 })
    ));
}

#[test]
fn bad_rle_frame_does_not_affect_others() {
    let mut broken = rle_frame(&[&[0x00, 0x01]]);
    // point the only segment past the end of the frame
    broken[4] = 0xF0;
    let frames = vec![broken, rle_frame(&[&[0x00, 0x07]])];
    let decoder = decoder(
        image(1, 1, 8, "MONOCHROME2")
            .text(tags::NUMBER_OF_FRAMES, b"IS", "2")
            .encapsulated(&[], &frames)
            .into_file(RLE_LOSSLESS),
    );
    assert!(matches!(
        decoder.decode_frame(0),
        Err(DecodeError::InvalidRleSegment { .. })
    ));
    assert_eq!(decoder.decode_frame(1).unwrap(), vec![0x07]);
}

#[rstest]
#[case(0, 3, "Rows")]
#[case(2, 0, "Columns")]
fn frames_without_dimensions_fail(
    #[case] rows: u16,
    #[case] columns: u16,
    #[case] missing: &str,
) {
    let frame = rle_frame(&[&[0x02, 0xAA, 0xBB, 0xCC]]);
    let decoder = decoder(
        image(rows, columns, 8, "MONOCHROME2")
            .encapsulated(&[], &[frame])
            .into_file(RLE_LOSSLESS),
    );
    match decoder.decode_frame(0) {
        Err(DecodeError::MissingAttribute { name }) => assert_eq!(name, missing),
        other => panic!("unexpected outcome {:?}", other),
    }
    assert!(decoder.get_frame(0).is_err());
}

#[test]
fn native_frame_without_rows_fails() {
    let decoder = decoder(
        image(0, 2, 8, "MONOCHROME2")
            .put(Tag::PIXEL_DATA, b"OB", &[1, 2, 3, 4])
            .into_file(EXPLICIT_VR_LE),
    );
    assert!(matches!(
        decoder.decode_frame(0),
        Err(DecodeError::MissingAttribute { name: "Rows" })
    ));
}

#[test]
fn native_frames_are_split_evenly() {
    let pixels: Vec<u8> = (0..12).collect();
    let decoder = decoder(
        image(2, 3, 8, "MONOCHROME2")
            .text(tags::NUMBER_OF_FRAMES, b"IS", "2")
            .text(tags::WINDOW_CENTER, b"DS", "40\\400")
            .text(tags::WINDOW_WIDTH, b"DS", "80\\2000")
            .text(tags::RESCALE_SLOPE, b"DS", "2")
            .text(tags::RESCALE_INTERCEPT, b"DS", "-1024")
            .put(Tag::PIXEL_DATA, b"OB", &pixels)
            .into_file(EXPLICIT_VR_LE),
    );
    assert_eq!(decoder.kind(), DecoderKind::Uncompressed);
    assert_eq!(decoder.number_of_frames(), 2);

    let frame = decoder.get_frame(1).unwrap();
    assert_eq!(frame.data, vec![6, 7, 8, 9, 10, 11]);
    assert_eq!((frame.width, frame.height), (3, 2));
    assert_eq!(frame.bits_allocated, 8);
    assert!(!frame.signed);
    assert!(!frame.invert);
    assert_eq!(frame.slope, 2.);
    assert_eq!(frame.intercept, -1024.);
    assert_eq!(frame.window_center, Some(40.));
    assert_eq!(frame.window_width, Some(80.));
    assert!(!frame.has_palette());
}

#[test]
fn monochrome1_is_inverted() {
    let decoder = decoder(
        image(1, 1, 16, "MONOCHROME1")
            .put(Tag::PIXEL_DATA, b"OW", &[0x01, 0x02])
            .into_file(EXPLICIT_VR_LE),
    );
    let frame = decoder.get_frame(0).unwrap();
    assert!(frame.little_endian);
    assert!(frame.invert);
    assert_eq!(frame.data, vec![0x01, 0x02]);
}

#[test]
fn palette_lookup_tables() {
    let lut = [0_u8, 0, 255, 255];
    let decoder = decoder(
        image(1, 2, 8, "PALETTE COLOR")
            .us(tags::RED_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR, &[2, 0, 16])
            .us(tags::GREEN_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR, &[2, 0, 16])
            .us(tags::BLUE_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR, &[2, 0, 16])
            .put(tags::RED_PALETTE_COLOR_LOOKUP_TABLE_DATA, b"OW", &lut)
            .put(tags::GREEN_PALETTE_COLOR_LOOKUP_TABLE_DATA, b"OW", &lut)
            .put(tags::BLUE_PALETTE_COLOR_LOOKUP_TABLE_DATA, b"OW", &lut)
            .put(Tag::PIXEL_DATA, b"OB", &[0, 1])
            .into_file(EXPLICIT_VR_LE),
    );
    let frame = decoder.get_frame(0).unwrap();
    assert!(frame.has_palette());
    let descriptor = frame.lut_descriptor.unwrap();
    assert_eq!((descriptor.entries, descriptor.first_mapped, descriptor.bits), (2, 0, 16));
    assert_eq!(&frame.lut_data.unwrap()[2][..], &lut);
}

#[test]
fn missing_pixel_data() {
    let image = from_bytes(image(1, 1, 8, "MONOCHROME2").into_file(EXPLICIT_VR_LE)).unwrap();
    assert!(matches!(
        select_decoder(&image, &DecodeOptions::default()),
        Err(DecodeError::MissingPixelData)
    ));
}

#[test]
fn unsupported_compression_is_an_error() {
    let image = from_bytes(
        image(1, 1, 8, "MONOCHROME2")
            .encapsulated(&[], &[vec![0; 4]])
            .into_file(MPEG2),
    )
    .unwrap();
    let err = FrameDecoder::new(Arc::new(image)).unwrap_err();
    match err {
        DecodeError::UnsupportedCompression { uid } => assert_eq!(uid, MPEG2),
        e => panic!("unexpected error {}", e),
    }
}

/// A stand-in for a host decoder, filling frames with a constant.
#[derive(Debug)]
struct FillCodec(u8);

impl FrameCodec for FillCodec {
    fn decode_frame(&self, info: &FrameInfo, _data: &[u8], dst: &mut Vec<u8>) -> DecodeResult<()> {
        dst.resize(dst.len() + info.frame_size(), self.0);
        Ok(())
    }
}

fn jpeg_image(transfer_syntax: &str, bits: u16, photometric: &str) -> Image {
    from_bytes(
        image(1, 2, bits, photometric)
            .encapsulated(&[], &[vec![0xFF, 0xD8, 0xFF, 0xD9]])
            .into_file(transfer_syntax),
    )
    .unwrap()
}

#[rstest]
#[case(JPEG_BASELINE, 8, "MONOCHROME2", true, DecoderKind::Native)]
#[case(JPEG_2000, 8, "RGB", true, DecoderKind::Native)]
#[case(JPEG_BASELINE, 8, "MONOCHROME1", true, DecoderKind::JpegBaseline)]
#[case(JPEG_BASELINE, 16, "MONOCHROME2", true, DecoderKind::JpegBaseline)]
#[case(JPEG_BASELINE, 8, "MONOCHROME2", false, DecoderKind::JpegBaseline)]
#[case(JPEG_2000, 8, "MONOCHROME2", false, DecoderKind::Jpeg2000)]
fn native_decoder_selection(
    #[case] transfer_syntax: &str,
    #[case] bits: u16,
    #[case] photometric: &str,
    #[case] allow_native: bool,
    #[case] expected: DecoderKind,
) {
    let image = jpeg_image(transfer_syntax, bits, photometric);
    let options = DecodeOptions::new()
        .native_codec(FillCodec(9))
        .allow_native(allow_native);
    assert_eq!(select_decoder(&image, &options).unwrap(), expected);
}

#[test]
fn native_codec_decodes_frames() {
    let image = Arc::new(jpeg_image(JPEG_BASELINE, 8, "MONOCHROME2"));
    let options = DecodeOptions::new().native_codec(FillCodec(9));
    let decoder = FrameDecoder::with_options(image, options).unwrap();
    assert_eq!(decoder.kind(), DecoderKind::Native);
    assert_eq!(decoder.decode_frame(0).unwrap(), vec![9, 9]);
}

#[test]
fn codec_unavailable() {
    let image = Arc::new(jpeg_image(JPEG_2000, 8, "MONOCHROME2"));
    let options = DecodeOptions::new()
        .allow_native(false)
        .without_codec(DecoderKind::Jpeg2000);
    let decoder = FrameDecoder::with_options(image, options).unwrap();
    assert!(matches!(
        decoder.decode_frame(0),
        Err(DecodeError::CodecUnavailable {
            kind: DecoderKind::Jpeg2000
        })
    ));
}

#[test]
fn mosaic_frame_tiles() {
    #[rustfmt::skip]
    let pixels = [
        1, 1, 2, 2,
        1, 1, 2, 2,
        3, 3, 4, 4,
        3, 3, 4, 4,
    ];
    let image = from_bytes(
        image(4, 4, 8, "MONOCHROME2")
            .text(tags::IMAGE_TYPE, b"CS", "ORIGINAL\\PRIMARY\\M\\MOSAIC")
            .us(tags::ACQUISITION_MATRIX, &[2, 0, 0, 2])
            .put(Tag::PIXEL_DATA, b"OB", &pixels)
            .into_file(EXPLICIT_VR_LE),
    )
    .unwrap();
    assert!(image.is_mosaic());
    let tiles = mosaic_tiles(&image, &pixels).unwrap();
    assert_eq!(tiles, vec![vec![1; 4], vec![2; 4], vec![3; 4], vec![4; 4]]);
}

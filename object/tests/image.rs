//! Building image metadata from DICOM files assembled in memory.

use dcmview_core::{Compression, Tag};
use dcmview_dictionary_std::tags;
use dcmview_object::{
    from_bytes, open_file, Error, Image, OpenImageOptions, PaletteChannel, SliceDirection,
};
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::collections::BTreeMap;

const EXPLICIT_VR_LE: &str = "1.2.840.10008.1.2.1";

/// A writer of explicit VR little endian data sets.
///
/// Elements are kept sorted by tag,
/// and putting a tag again replaces the element.
#[derive(Default)]
struct DataSet(BTreeMap<Tag, Vec<u8>>);

impl DataSet {
    fn new() -> Self {
        Self::default()
    }

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

    fn us(self, tag: Tag, values: &[u16]) -> Self {
        let bytes: Vec<u8> = values.iter().flat_map(|v| v.to_le_bytes()).collect();
        self.put(tag, b"US", &bytes)
    }

    /// A sequence of defined length with one item per data set.
    fn sequence(self, tag: Tag, items: &[DataSet]) -> Self {
        let mut value = Vec::new();
        for item in items {
            let item = item.encode();
            value.extend_from_slice(&[0xFE, 0xFF, 0x00, 0xE0]);
            value.extend_from_slice(&(item.len() as u32).to_le_bytes());
            value.extend(item);
        }
        self.put(tag, b"SQ", &value)
    }

    fn encode(&self) -> Vec<u8> {
        self.0.values().flatten().copied().collect()
    }

    /// Prepend a preamble and a file meta group.
    fn into_file(self, transfer_syntax: &str) -> Vec<u8> {
        let meta = DataSet::new()
            .put(tags::FILE_META_INFORMATION_VERSION, b"OB", &[0, 1])
            .text(tags::TRANSFER_SYNTAX_UID, b"UI", transfer_syntax)
            .encode();
        let mut out = vec![0; 128];
        out.extend_from_slice(b"DICM");
        let group_length = DataSet::new().put(
            tags::FILE_META_INFORMATION_GROUP_LENGTH,
            b"UL",
            &(meta.len() as u32).to_le_bytes(),
        );
        out.extend(group_length.encode());
        out.extend(meta);
        out.extend(self.encode());
        out
    }
}

/// An 8-bit monochrome frame description.
fn mono8(rows: u16, columns: u16) -> DataSet {
    DataSet::new()
        .text(tags::IMAGE_TYPE, b"CS", "ORIGINAL\\PRIMARY")
        .text(tags::MODALITY, b"CS", "MR")
        .text(tags::PATIENT_NAME, b"PN", "Doe^Jane")
        .text(tags::SERIES_DESCRIPTION, b"LO", "t1_axial")
        .text(tags::SERIES_INSTANCE_UID, b"UI", "1.2.3.4")
        .text(tags::SERIES_NUMBER, b"IS", "5")
        .text(tags::INSTANCE_NUMBER, b"IS", "12")
        .text(tags::IMAGE_POSITION_PATIENT, b"DS", "-10\\20.5\\-30")
        .text(tags::IMAGE_ORIENTATION_PATIENT, b"DS", "1\\0\\0\\0\\1\\0")
        .us(tags::SAMPLES_PER_PIXEL, &[1])
        .text(tags::PHOTOMETRIC_INTERPRETATION, b"CS", "MONOCHROME2")
        .us(tags::ROWS, &[rows])
        .us(tags::COLUMNS, &[columns])
        .text(tags::PIXEL_SPACING, b"DS", "0.5\\0.75")
        .us(tags::BITS_ALLOCATED, &[8])
        .us(tags::BITS_STORED, &[8])
        .us(tags::HIGH_BIT, &[7])
        .us(tags::PIXEL_REPRESENTATION, &[0])
        .text(tags::WINDOW_CENTER, b"DS", "40\\400")
        .text(tags::WINDOW_WIDTH, b"DS", "80\\2000")
}

fn open(data: Vec<u8>) -> Image {
    from_bytes(data).expect("image should be parsed")
}

#[test]
fn derived_fields_and_accessors() {
    let pixels = vec![7_u8; 16];
    let image = open(
        mono8(4, 4)
            .put(Tag::PIXEL_DATA, b"OB", &pixels)
            .into_file(EXPLICIT_VR_LE),
    );

    assert_eq!(image.rows(), 4);
    assert_eq!(image.columns(), 4);
    assert_eq!(image.bits_allocated(), 8);
    assert_eq!(image.bits_stored(), 8);
    assert_eq!(image.samples_per_pixel(), 1);
    assert!(!image.is_signed());
    assert_eq!(image.photometric_interpretation(), "MONOCHROME2");
    assert_eq!(image.transfer_syntax(), Some(EXPLICIT_VR_LE));
    assert!(image.is_little_endian());

    assert_eq!(image.modality(), Some("MR"));
    assert_eq!(image.patient_name(), Some("Doe Jane"));
    assert_eq!(image.series_number(), Some(5));
    assert_eq!(image.image_number(), Some(12));
    assert_eq!(image.pixel_spacing(), Some([0.5, 0.75]));
    assert_eq!(image.image_position(), Some([-10., 20.5, -30.]));
    assert_eq!(image.window_center(), Some(40.));
    assert_eq!(image.window_width(), Some(80.));
    assert_eq!(image.rescale_slope(), 1.);
    assert_eq!(image.rescale_intercept(), 0.);
    assert_eq!(image.acquired_slice_direction(), SliceDirection::Axial);
    assert_eq!(image.orientation().as_deref(), Some("XYZ--+"));
    assert_eq!(
        image.image_position_slice_dir(SliceDirection::Axial),
        Some(-30.)
    );

    assert_eq!(image.number_of_frames(), 1);
    assert_eq!(image.number_of_implicit_frames(), 1);
    assert_eq!(image.pixel_bytes().unwrap().to_vec(), pixels);
    assert_eq!(
        image.element_by_name("Modality").map(|e| e.tag()),
        Some(tags::MODALITY)
    );
}

#[test]
fn parsing_twice_gives_the_same_image() {
    let data = mono8(2, 2)
        .put(Tag::PIXEL_DATA, b"OB", &[1, 2, 3, 4])
        .into_file(EXPLICIT_VR_LE);
    assert_eq!(open(data.clone()), open(data));
}

#[rstest]
#[case(&[64, 0, 0, 64], true)]
#[case(&[256, 0, 0, 256], false)]
#[case(&[0, 64, 64, 0], true)]
fn mosaic_detection(#[case] matrix: &[u16], #[case] mosaic: bool) {
    let image = open(
        mono8(256, 256)
            .text(tags::IMAGE_TYPE, b"CS", "ORIGINAL\\PRIMARY\\M\\ND\\MOSAIC")
            .us(tags::ACQUISITION_MATRIX, matrix)
            .into_file(EXPLICIT_VR_LE),
    );
    assert_eq!(image.is_mosaic(), mosaic);
    if mosaic {
        assert_eq!(image.mosaic_cols(), 4);
        assert_eq!(image.mosaic_rows(), 4);
        assert_eq!(image.number_of_mosaic_images(), 16);
    }
}

#[test]
fn mosaic_needs_the_image_type() {
    let image = open(
        mono8(256, 256)
            .us(tags::ACQUISITION_MATRIX, &[64, 0, 0, 64])
            .into_file(EXPLICIT_VR_LE),
    );
    assert!(!image.is_mosaic());
}

fn csa_header(elements: &[(&str, &str)]) -> Vec<u8> {
    let mut out = b"SV10\x04\x03\x02\x01".to_vec();
    out.extend_from_slice(&(elements.len() as u32).to_le_bytes());
    out.extend_from_slice(&77_u32.to_le_bytes());
    for (name, item) in elements {
        let mut name_field = [0_u8; 64];
        name_field[..name.len()].copy_from_slice(name.as_bytes());
        out.extend_from_slice(&name_field);
        out.extend_from_slice(&1_u32.to_le_bytes());
        out.extend_from_slice(b"IS\0\0");
        out.extend_from_slice(&6_u32.to_le_bytes());
        out.extend_from_slice(&1_u32.to_le_bytes());
        out.extend_from_slice(&77_u32.to_le_bytes());
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
    out
}

#[test]
fn csa_header_overrides_the_acquisition_matrix() {
    let csa = csa_header(&[
        ("AcquisitionMatrixText", "128p*128"),
        ("NumberOfImagesInMosaic", "30"),
    ]);
    let image = open(
        mono8(768, 768)
            .text(tags::IMAGE_TYPE, b"CS", "ORIGINAL\\PRIMARY\\MOSAIC")
            .us(tags::ACQUISITION_MATRIX, &[0, 0, 0, 0])
            .text(Tag(0x0029, 0x0010), b"LO", "SIEMENS CSA HEADER")
            .put(Tag(0x0029, 0x1010), b"OB", &csa)
            .into_file(EXPLICIT_VR_LE),
    );
    assert_eq!(image.acquisition_matrix(), [128, 128]);
    assert!(image.is_mosaic());
    assert_eq!(image.mosaic_cols(), 6);
    assert_eq!(image.number_of_mosaic_images(), 30);
}

#[test]
fn nested_attributes_are_found() {
    let reference = DataSet::new()
        .text(tags::REFERENCED_SOP_INSTANCE_UID, b"UI", "1.2.3.4.5")
        .text(tags::MODALITY, b"CS", "CT");
    let image = open(
        mono8(2, 2)
            .sequence(tags::REFERENCED_IMAGE_SEQUENCE, &[reference])
            .into_file(EXPLICIT_VR_LE),
    );
    assert_eq!(
        image.string(tags::REFERENCED_SOP_INSTANCE_UID),
        Some("1.2.3.4.5")
    );
    // the root data set takes precedence
    assert_eq!(image.modality(), Some("MR"));
    assert!(image.root_element(tags::REFERENCED_SOP_INSTANCE_UID).is_none());
}

#[test]
fn per_frame_rescale() {
    let transform = |slope: &str, intercept: &str| {
        DataSet::new().sequence(
            tags::PIXEL_VALUE_TRANSFORMATION_SEQUENCE,
            &[DataSet::new()
                .text(tags::RESCALE_INTERCEPT, b"DS", intercept)
                .text(tags::RESCALE_SLOPE, b"DS", slope)],
        )
    };
    let image = open(
        mono8(2, 2)
            .text(tags::NUMBER_OF_FRAMES, b"IS", "2")
            .sequence(
                tags::PER_FRAME_FUNCTIONAL_GROUPS_SEQUENCE,
                &[transform("2", "-100"), transform("4", "-200")],
            )
            .into_file(EXPLICIT_VR_LE),
    );
    assert_eq!(image.data_scale_slope(0), 2.);
    assert_eq!(image.data_scale_slope(1), 4.);
    assert_eq!(image.data_scale_intercept(1), -200.);
    // beyond the functional groups
    assert_eq!(image.data_scale_slope(5), image.rescale_slope());
}

#[test]
fn implicit_frames_cap_the_declared_count() {
    let image = open(
        mono8(2, 2)
            .text(tags::NUMBER_OF_FRAMES, b"IS", "4")
            .put(Tag::PIXEL_DATA, b"OB", &[0; 12])
            .into_file(EXPLICIT_VR_LE),
    );
    assert_eq!(image.number_of_frames(), 4);
    assert_eq!(image.number_of_implicit_frames(), 3);
    assert_eq!(image.frame_count(), 3);
}

#[test]
fn signed_pixel_value_bounds() {
    let image = open(
        mono8(2, 2)
            .us(tags::PIXEL_REPRESENTATION, &[1])
            .us(tags::SMALLEST_IMAGE_PIXEL_VALUE, &[0xFC18])
            .us(tags::LARGEST_IMAGE_PIXEL_VALUE, &[1000])
            .into_file(EXPLICIT_VR_LE),
    );
    assert!(image.is_signed());
    assert_eq!(image.image_min(), Some(-1000.));
    assert_eq!(image.image_max(), Some(1000.));
}

#[test]
fn palette_lookup_tables() {
    let image = open(
        mono8(2, 2)
            .text(tags::PHOTOMETRIC_INTERPRETATION, b"CS", "PALETTE COLOR")
            .us(tags::RED_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR, &[0, 0, 16])
            .put(tags::RED_PALETTE_COLOR_LOOKUP_TABLE_DATA, b"OW", &[1, 2, 3, 4])
            .into_file(EXPLICIT_VR_LE),
    );
    let descriptor = image.palette_descriptor(PaletteChannel::Red).unwrap();
    assert_eq!(descriptor.entries, 65_536);
    assert_eq!(descriptor.bits, 16);
    assert_eq!(
        image.palette_data(PaletteChannel::Red).map(|d| d.len()),
        Some(4)
    );
    assert_eq!(image.palette_descriptor(PaletteChannel::Green), None);
}

#[rstest]
#[case("1.2.840.10008.1.2.1", Compression::None)]
#[case("1.2.840.10008.1.2.5", Compression::Rle)]
#[case("1.2.840.10008.1.2.4.50", Compression::JpegBaseline)]
#[case("1.2.840.10008.1.2.4.70", Compression::JpegLossless)]
#[case("1.2.840.10008.1.2.4.80", Compression::JpegLs)]
#[case("1.2.840.10008.1.2.4.90", Compression::Jpeg2000)]
fn compression_queries(#[case] uid: &str, #[case] compression: Compression) {
    let image = open(mono8(2, 2).into_file(uid));
    assert_eq!(image.compression(), compression);
    assert_eq!(image.is_compressed(), compression != Compression::None);
    assert_eq!(image.is_compressed_rle(), compression == Compression::Rle);
    assert_eq!(
        image.is_compressed_jpeg(),
        !matches!(compression, Compression::None | Compression::Rle)
    );
    assert_eq!(
        image.is_compressed_jpeg_lossless(),
        compression == Compression::JpegLossless
    );
    assert_eq!(
        image.is_compressed_jpeg_baseline(),
        compression == Compression::JpegBaseline
    );
    assert_eq!(
        image.is_compressed_jpeg_ls(),
        compression == Compression::JpegLs
    );
    assert_eq!(
        image.is_compressed_jpeg2000(),
        compression == Compression::Jpeg2000
    );
    assert!(!image.is_deflated());
}

#[test]
fn series_identity() {
    let a = open(mono8(4, 4).into_file(EXPLICIT_VR_LE));
    let b = open(
        mono8(4, 4)
            .text(tags::INSTANCE_NUMBER, b"IS", "13")
            .into_file(EXPLICIT_VR_LE),
    );
    let c = open(mono8(8, 4).into_file(EXPLICIT_VR_LE));
    assert_eq!(a.series_id(), b.series_id());
    assert_ne!(a.series_id(), c.series_id());
    assert_eq!(
        a.series_id().to_string(),
        "t1_axial 1.2.3.4 5 XYZ--+ (4 x 4)"
    );
}

#[test]
fn read_until_leaves_out_pixel_data() {
    let data = mono8(2, 2)
        .put(Tag::PIXEL_DATA, b"OB", &[1, 2, 3, 4])
        .into_file(EXPLICIT_VR_LE);
    let image = OpenImageOptions::new()
        .read_until(tags::PIXEL_DATA)
        .from_bytes(data)
        .unwrap();
    assert!(!image.has_pixel_data());
    assert!(matches!(image.pixel_data(), Err(Error::MissingPixelData)));
}

#[test]
fn malformed_streams_produce_no_image() {
    let mut data = mono8(2, 2)
        .put(Tag::PIXEL_DATA, b"OB", &[1, 2, 3, 4])
        .into_file(EXPLICIT_VR_LE);
    data.truncate(data.len() - 2);
    let err = from_bytes(data).unwrap_err();
    match err {
        Error::ParseStream { source } => assert!(source.is_malformed_stream()),
        other => panic!("unexpected error {}", other),
    }
}

#[test]
fn missing_file() {
    let err = open_file("/nonexistent/dcmview/image.dcm").unwrap_err();
    assert!(matches!(err, Error::OpenFile { .. }));
}

//! Classifying and ordering series of DICOM files assembled in memory.

use dcmview_core::Tag;
use dcmview_dictionary_std::tags;
use dcmview_object::{from_bytes, Image, SliceDirection};
use dcmview_series::{group_by_series, Error, Series, SeriesOptions};
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::collections::BTreeMap;
use std::sync::Arc;

const EXPLICIT_VR_LE: &str = "1.2.840.10008.1.2.1";
const AXIAL: &str = "1\\0\\0\\0\\1\\0";
const SAGITTAL: &str = "0\\1\\0\\0\\0\\-1";

/// A writer of explicit VR little endian data sets, sorted by tag.
#[derive(Default, Clone)]
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

    fn us(self, tag: Tag, values: &[u16]) -> Self {
        let bytes: Vec<u8> = values.iter().flat_map(|v| v.to_le_bytes()).collect();
        self.put(tag, b"US", &bytes)
    }

    fn encode(&self) -> Vec<u8> {
        self.0.values().flatten().copied().collect()
    }

    fn into_image(self) -> Arc<Image> {
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
        Arc::new(from_bytes(out).expect("image should be parsed"))
    }
}

/// An 8-bit monochrome slice of series `1.2.3`.
fn slice(orientation: &str) -> DataSet {
    DataSet::default()
        .text(tags::IMAGE_TYPE, b"CS", "ORIGINAL\\PRIMARY")
        .text(tags::SERIES_INSTANCE_UID, b"UI", "1.2.3")
        .text(tags::SERIES_NUMBER, b"IS", "1")
        .text(tags::IMAGE_ORIENTATION_PATIENT, b"DS", orientation)
        .us(tags::SAMPLES_PER_PIXEL, &[1])
        .text(tags::PHOTOMETRIC_INTERPRETATION, b"CS", "MONOCHROME2")
        .us(tags::ROWS, &[2])
        .us(tags::COLUMNS, &[2])
        .us(tags::BITS_ALLOCATED, &[8])
        .us(tags::BITS_STORED, &[8])
        .us(tags::HIGH_BIT, &[7])
        .us(tags::PIXEL_REPRESENTATION, &[0])
}

fn at(orientation: &str, position: [f64; 3]) -> Arc<Image> {
    let [x, y, z] = position;
    slice(orientation)
        .text(
            tags::IMAGE_POSITION_PATIENT,
            b"DS",
            &format!("{}\\{}\\{}", x, y, z),
        )
        .into_image()
}

fn built(images: &[Arc<Image>]) -> Series {
    let mut series = Series::new();
    for image in images {
        series.add_image(Arc::clone(image)).unwrap();
    }
    series.build_series().unwrap();
    series
}

#[test]
fn axial_slices_ordered_by_position() {
    let images: Vec<_> = [10., -5., 0., 5.]
        .into_iter()
        .map(|z| at(AXIAL, [0., 0., z]))
        .collect();
    let series = built(&images);

    assert_eq!(series.get_order().unwrap(), vec![1, 2, 3, 0]);
    assert_eq!(series.slice_dir().unwrap(), SliceDirection::Axial);
    assert!(series.slice_sense().unwrap());
    assert!(!series.is_multi_frame());
    assert!(!series.is_implicit_timeseries());
    assert_eq!(series.number_of_frames(), 1);
    assert_eq!(series.position_of(0), Some(3));

    let positions: Vec<_> = series
        .images()
        .iter()
        .map(|image| image.image_position().unwrap()[2])
        .collect();
    assert_eq!(positions, vec![-5., 0., 5., 10.]);
}

#[test]
fn ordering_does_not_depend_on_arrival() {
    let positions = [3., 1., 4., 1.5, 9., 2.6];
    let forward: Vec<_> = positions.iter().map(|&z| at(AXIAL, [0., 0., z])).collect();
    let backward: Vec<_> = forward.iter().rev().cloned().collect();

    let images = |series: &Series| -> Vec<f64> {
        series
            .images()
            .iter()
            .map(|image| image.image_position().unwrap()[2])
            .collect()
    };
    assert_eq!(images(&built(&forward)), images(&built(&backward)));
}

#[test]
fn sagittal_slices_sense() {
    let images: Vec<_> = [3., 1., 2.]
        .into_iter()
        .map(|x| at(SAGITTAL, [x, 0., 0.]))
        .collect();
    let series = built(&images);
    assert_eq!(series.slice_dir().unwrap(), SliceDirection::Sagittal);
    assert_eq!(series.get_order().unwrap(), vec![1, 2, 0]);
    assert!(!series.slice_sense().unwrap());
}

#[test]
fn slice_location_when_position_is_missing() {
    let images: Vec<_> = ["7", "-3", "2"]
        .into_iter()
        .map(|l| {
            slice(AXIAL)
                .text(tags::SLICE_LOCATION, b"DS", l)
                .into_image()
        })
        .collect();
    let series = built(&images);
    assert_eq!(series.get_order().unwrap(), vec![1, 2, 0]);
    assert!(series.slice_sense().unwrap());
}

#[rstest]
#[case(&[64, 0, 0, 64], true)]
#[case(&[256, 0, 0, 256], false)]
fn mosaic_series(#[case] matrix: &[u16], #[case] mosaic: bool) {
    let image = slice(AXIAL)
        .text(tags::IMAGE_TYPE, b"CS", "ORIGINAL\\PRIMARY\\M\\ND\\MOSAIC")
        .us(tags::ROWS, &[256])
        .us(tags::COLUMNS, &[256])
        .us(tags::ACQUISITION_MATRIX, matrix)
        .text(tags::IMAGE_POSITION_PATIENT, b"DS", "0\\0\\-20")
        .into_image();
    let series = built(&[image]);

    assert_eq!(series.is_mosaic(), mosaic);
    assert_eq!(series.is_multi_frame(), mosaic);
    assert_eq!(series.is_multi_frame_timeseries(), mosaic);
    assert_eq!(series.slice_sense().unwrap(), mosaic);
}

fn multi_frame(frames: u16) -> DataSet {
    slice(AXIAL)
        .text(tags::NUMBER_OF_FRAMES, b"IS", &frames.to_string())
        .put(Tag::PIXEL_DATA, b"OB", &vec![0; 4 * usize::from(frames)])
}

#[test]
fn multi_frame_volume() {
    let series = built(&[multi_frame(3)
        .text(tags::IMAGE_POSITION_PATIENT, b"DS", "0\\0\\12")
        .into_image()]);
    assert!(series.is_multi_frame());
    assert!(series.is_multi_frame_volume());
    assert!(!series.is_multi_frame_timeseries());
    assert_eq!(series.number_of_frames(), 1);
    assert!(series.slice_sense().unwrap());
}

#[test]
fn multi_frame_time_series() {
    let series = built(&[multi_frame(3)
        .text(tags::FRAME_TIME, b"DS", "40")
        .into_image()]);
    assert!(series.is_multi_frame());
    assert!(!series.is_multi_frame_volume());
    assert!(series.is_multi_frame_timeseries());
    assert_eq!(series.number_of_frames(), 3);
}

#[test]
fn multi_frame_files_make_a_time_series() {
    let images: Vec<_> = (0..2)
        .map(|i| {
            multi_frame(3)
                .text(tags::INSTANCE_NUMBER, b"IS", &(2 - i).to_string())
                .into_image()
        })
        .collect();
    let series = built(&images);
    assert!(series.is_multi_frame_timeseries());
    assert_eq!(series.number_of_frames(), 2);
}

#[rstest]
#[case(AXIAL, "1\\2\\3", true)]
#[case(AXIAL, "3\\2\\1", false)]
#[case(SAGITTAL, "1\\2\\3", false)]
#[case(SAGITTAL, "3\\2\\1", true)]
fn multi_frame_sense_from_slice_locations(
    #[case] orientation: &str,
    #[case] locations: &str,
    #[case] sense: bool,
) {
    let image = slice(orientation)
        .text(tags::NUMBER_OF_FRAMES, b"IS", "3")
        .text(tags::SLICE_LOCATION_VECTOR, b"DS", locations)
        .put(Tag::PIXEL_DATA, b"OB", &[0; 12])
        .into_image();
    assert_eq!(built(&[image]).slice_sense().unwrap(), sense);
}

#[test]
fn repeated_positions_make_an_implicit_time_series() {
    let images = vec![
        at(AXIAL, [0., 0., 5.]),
        at(AXIAL, [0., 0., 0.]),
        at(AXIAL, [0., 0., 0.]),
        at(AXIAL, [0., 0., 5.]),
    ];
    let series = built(&images);
    assert!(series.is_implicit_timeseries());
    assert_eq!(series.number_of_frames(), 2);
    // one volume per time point
    assert_eq!(series.get_order().unwrap(), vec![1, 0, 2, 3]);
}

#[test]
fn explicit_temporal_positions() {
    let timed = |z: f64, time: u32| {
        slice(AXIAL)
            .text(tags::NUMBER_OF_FRAMES, b"IS", "2")
            .text(tags::FRAME_TIME, b"DS", "100")
            .text(tags::IMAGE_POSITION_PATIENT, b"DS", &format!("0\\0\\{}", z))
            .text(tags::TEMPORAL_POSITION_IDENTIFIER, b"IS", &time.to_string())
            .text(tags::NUMBER_OF_TEMPORAL_POSITIONS, b"IS", "2")
            .into_image()
    };
    let images = vec![timed(2., 2), timed(1., 2), timed(2., 1), timed(1., 1)];
    let series = built(&images);
    assert_eq!(series.get_order().unwrap(), vec![3, 2, 1, 0]);
}

#[test]
fn explicit_ordering() {
    let images: Vec<_> = [1., 2., 3.]
        .into_iter()
        .map(|z| at(AXIAL, [0., 0., z]))
        .collect();

    let mut series =
        Series::with_options(SeriesOptions::new().explicit_ordering(vec![2, 0, 1]));
    for image in &images {
        series.add_image(Arc::clone(image)).unwrap();
    }
    series.build_series().unwrap();
    assert_eq!(series.get_order().unwrap(), vec![2, 0, 1]);
    assert!(!series.slice_sense().unwrap());

    let mut series =
        Series::with_options(SeriesOptions::new().explicit_ordering(vec![0, 0, 1]));
    for image in &images {
        series.add_image(Arc::clone(image)).unwrap();
    }
    assert!(matches!(
        series.build_series(),
        Err(Error::InvalidOrdering { len: 3 })
    ));
}

#[test]
fn series_lifecycle_errors() {
    let mut series = Series::new();
    assert!(matches!(series.get_order(), Err(Error::NotBuilt)));
    assert!(matches!(series.slice_sense(), Err(Error::NotBuilt)));
    assert!(matches!(series.build_series(), Err(Error::Empty)));

    series.add_image(at(AXIAL, [0., 0., 0.])).unwrap();
    let other = slice(AXIAL)
        .text(tags::SERIES_INSTANCE_UID, b"UI", "1.2.4")
        .into_image();
    assert!(matches!(
        series.add_image(other),
        Err(Error::SeriesMismatch { .. })
    ));

    series.build_series().unwrap();
    assert!(matches!(series.build_series(), Err(Error::AlreadyBuilt)));
    assert!(matches!(
        series.add_image(at(AXIAL, [0., 0., 1.])),
        Err(Error::AlreadyBuilt)
    ));
    assert_eq!(series.len(), 1);
}

#[test]
fn grouping_by_series() {
    let other = |z: f64| {
        slice(AXIAL)
            .text(tags::SERIES_INSTANCE_UID, b"UI", "1.2.4")
            .text(tags::IMAGE_POSITION_PATIENT, b"DS", &format!("0\\0\\{}", z))
            .into_image()
    };
    let images = vec![
        at(AXIAL, [0., 0., 0.]),
        other(0.),
        at(AXIAL, [0., 0., 1.]),
        other(1.),
        other(2.),
    ];
    let groups = group_by_series(images);
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].len(), 2);
    assert_eq!(groups[1].len(), 3);
    assert_eq!(
        groups[1].series_id().and_then(|id| id.instance_uid.as_deref()),
        Some("1.2.4")
    );
}

//! Semantic accessors of image attributes.
//!
//! These look up the attributes a viewer needs by meaning,
//! applying the usual defaults and vendor fallbacks
//! (such as the Siemens CSA header for mosaic images).

use crate::geometry::{orientation_string, slice_direction, slice_normal, SliceDirection};
use crate::image::{find_in, items_of, Image};
use bytes::Bytes;
use dcmview_core::private::SiemensCsaReader;
use dcmview_core::{Tag, Value};
use dcmview_dictionary_std::tags;
use std::fmt;

/// A channel of a palette color lookup table.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PaletteChannel {
    /// The red channel.
    Red,
    /// The green channel.
    Green,
    /// The blue channel.
    Blue,
}

impl PaletteChannel {
    fn descriptor_tag(self) -> Tag {
        match self {
            PaletteChannel::Red => tags::RED_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR,
            PaletteChannel::Green => tags::GREEN_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR,
            PaletteChannel::Blue => tags::BLUE_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR,
        }
    }

    fn data_tag(self) -> Tag {
        match self {
            PaletteChannel::Red => tags::RED_PALETTE_COLOR_LOOKUP_TABLE_DATA,
            PaletteChannel::Green => tags::GREEN_PALETTE_COLOR_LOOKUP_TABLE_DATA,
            PaletteChannel::Blue => tags::BLUE_PALETTE_COLOR_LOOKUP_TABLE_DATA,
        }
    }
}

/// The descriptor of a lookup table.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct LutDescriptor {
    /// The number of entries in the table.
    pub entries: u32,
    /// The first stored pixel value mapped by the table.
    pub first_mapped: i32,
    /// The number of bits of each entry.
    pub bits: u16,
}

/// The attributes identifying the series an image belongs to.
///
/// Two images are in the same series
/// when all of these attributes match.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SeriesId {
    /// The series description.
    pub description: Option<String>,
    /// The series instance UID.
    pub instance_uid: Option<String>,
    /// The series number.
    pub number: Option<i64>,
    /// The echo number.
    pub echo_number: Option<i64>,
    /// The orientation string of the images.
    pub orientation: Option<String>,
    /// The number of columns.
    pub columns: u32,
    /// The number of rows.
    pub rows: u32,
}

impl fmt::Display for SeriesId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(description) = &self.description {
            write!(f, "{} ", description)?;
        }
        if let Some(uid) = &self.instance_uid {
            write!(f, "{} ", uid)?;
        }
        if let Some(number) = self.number {
            write!(f, "{} ", number)?;
        }
        if let Some(echo) = self.echo_number {
            write!(f, "{} ", echo)?;
        }
        if let Some(orientation) = &self.orientation {
            write!(f, "{} ", orientation)?;
        }
        write!(f, "({} x {})", self.columns, self.rows)
    }
}

fn first_f64<const N: usize>(value: Option<Vec<f64>>) -> Option<[f64; N]> {
    let value = value?;
    value.get(..N)?.try_into().ok()
}

/// Read all the numbers in a text, such as `64p*64`.
fn numbers_in(text: &str) -> Vec<u32> {
    text.split(|c: char| !c.is_ascii_digit())
        .filter_map(|part| part.parse().ok())
        .collect()
}

impl Image {
    /// The modality, such as `MR` or `CT`.
    pub fn modality(&self) -> Option<&str> {
        self.string(tags::MODALITY)
    }

    /// The patient's name, with name components separated by spaces.
    pub fn patient_name(&self) -> Option<&str> {
        self.string(tags::PATIENT_NAME)
    }

    /// The patient ID.
    pub fn patient_id(&self) -> Option<&str> {
        self.string(tags::PATIENT_ID)
    }

    /// The study instance UID.
    pub fn study_instance_uid(&self) -> Option<&str> {
        self.string(tags::STUDY_INSTANCE_UID)
    }

    /// The study description.
    pub fn study_description(&self) -> Option<&str> {
        self.string(tags::STUDY_DESCRIPTION)
    }

    /// The series description.
    pub fn series_description(&self) -> Option<&str> {
        self.string(tags::SERIES_DESCRIPTION)
    }

    /// The series instance UID.
    pub fn series_instance_uid(&self) -> Option<&str> {
        self.string(tags::SERIES_INSTANCE_UID)
    }

    /// The series number.
    pub fn series_number(&self) -> Option<i64> {
        self.int(tags::SERIES_NUMBER)
    }

    /// The (first) echo number.
    pub fn echo_number(&self) -> Option<i64> {
        self.int(tags::ECHO_NUMBERS)
    }

    /// The image (instance) number.
    pub fn image_number(&self) -> Option<i64> {
        self.int(tags::INSTANCE_NUMBER)
    }

    /// The values of the image type.
    pub fn image_type(&self) -> Option<&[String]> {
        self.strings(tags::IMAGE_TYPE)
    }

    /// The acquisition matrix as `[rows, columns]`.
    ///
    /// The text of `AcquisitionMatrixText` in a Siemens CSA header
    /// takes precedence over the standard attribute.
    /// Missing dimensions are zero,
    /// and a missing column count is taken from the rows.
    pub fn acquisition_matrix(&self) -> [u32; 2] {
        let mut matrix = match self
            .value(tags::ACQUISITION_MATRIX)
            .and_then(|v| v.to_multi_int::<u32>())
            .as_deref()
        {
            // frequency rows, frequency columns, phase rows, phase columns
            Some(&[fr, fc, pr, pc, ..]) => [fr.max(pr), fc.max(pc)],
            Some(&[r, c]) => [r, c],
            Some(&[r]) => [r, 0],
            _ => [0, 0],
        };

        if let Some(text) = SiemensCsaReader::find(self.private_data(), "AcquisitionMatrixText") {
            let numbers = numbers_in(text);
            match numbers[..] {
                [r, c, ..] => matrix = [r, c],
                [n] => matrix = [n, n],
                [] => {}
            }
        }
        if matrix[1] == 0 {
            matrix[1] = matrix[0];
        }
        matrix
    }

    /// Whether this is a mosaic image:
    /// the image type says `MOSAIC`
    /// and the acquisition matrix is smaller than the frame.
    pub fn is_mosaic(&self) -> bool {
        let labeled = self.image_type().map_or(false, |values| {
            values
                .iter()
                .any(|v| v.to_ascii_uppercase().contains("MOSAIC"))
        });
        if !labeled {
            return false;
        }
        let [rows, cols] = self.acquisition_matrix();
        rows > 0 && (rows < self.rows() || cols < self.columns())
    }

    /// The number of tile columns of a mosaic.
    pub fn mosaic_cols(&self) -> u32 {
        let [_, cols] = self.acquisition_matrix();
        if cols == 0 {
            return 1;
        }
        (self.columns() / cols).max(1)
    }

    /// The number of tile rows of a mosaic.
    pub fn mosaic_rows(&self) -> u32 {
        let [rows, _] = self.acquisition_matrix();
        if rows == 0 {
            return 1;
        }
        (self.rows() / rows).max(1)
    }

    /// The number of slices packed in a mosaic.
    ///
    /// This is `NumberOfImagesInMosaic` from the Siemens CSA header if present,
    /// otherwise the full tile grid.
    pub fn number_of_mosaic_images(&self) -> u32 {
        SiemensCsaReader::find(self.private_data(), "NumberOfImagesInMosaic")
            .and_then(|text| text.parse().ok())
            .filter(|&n| n > 0)
            .unwrap_or_else(|| self.mosaic_cols() * self.mosaic_rows())
    }

    /// The physical distance between pixel centers,
    /// as `[row spacing, column spacing]`.
    pub fn pixel_spacing(&self) -> Option<[f64; 2]> {
        first_f64(self.floats(tags::PIXEL_SPACING))
    }

    /// The slice thickness.
    pub fn slice_thickness(&self) -> Option<f64> {
        self.float(tags::SLICE_THICKNESS)
    }

    /// The spacing between slices.
    pub fn slice_gap(&self) -> Option<f64> {
        self.float(tags::SPACING_BETWEEN_SLICES)
    }

    /// The position of the upper left voxel in patient coordinates.
    pub fn image_position(&self) -> Option<[f64; 3]> {
        first_f64(self.floats(tags::IMAGE_POSITION_PATIENT))
    }

    /// The row and column direction cosines in patient coordinates.
    pub fn image_directions(&self) -> Option<[f64; 6]> {
        first_f64(self.floats(tags::IMAGE_ORIENTATION_PATIENT))
    }

    /// The slice location.
    pub fn slice_location(&self) -> Option<f64> {
        self.float(tags::SLICE_LOCATION)
    }

    /// The slice location of each frame of a multi-frame image.
    pub fn slice_location_vector(&self) -> Option<Vec<f64>> {
        self.floats(tags::SLICE_LOCATION_VECTOR)
            .filter(|v| !v.is_empty())
    }

    /// The temporal position identifier.
    pub fn temporal_position(&self) -> Option<i64> {
        self.int(tags::TEMPORAL_POSITION_IDENTIFIER)
    }

    /// The number of temporal positions.
    pub fn number_of_temporal_positions(&self) -> Option<i64> {
        self.int(tags::NUMBER_OF_TEMPORAL_POSITIONS)
    }

    /// The nominal time per frame, in milliseconds.
    pub fn frame_time(&self) -> Option<f64> {
        self.float(tags::FRAME_TIME)
    }

    /// The repetition time, in milliseconds.
    pub fn repetition_time(&self) -> Option<f64> {
        self.float(tags::REPETITION_TIME)
    }

    /// The echo time, in milliseconds.
    pub fn echo_time(&self) -> Option<f64> {
        self.float(tags::ECHO_TIME)
    }

    /// The rescale slope, 1 if absent.
    pub fn rescale_slope(&self) -> f64 {
        self.float(tags::RESCALE_SLOPE)
            .filter(|&slope| slope != 0.)
            .unwrap_or(1.)
    }

    /// The rescale intercept, 0 if absent.
    pub fn rescale_intercept(&self) -> f64 {
        self.float(tags::RESCALE_INTERCEPT).unwrap_or(0.)
    }

    /// Look up an attribute of a functional group macro of a frame:
    /// the per-frame group first, then the shared group.
    fn functional_group_value(&self, frame: u32, macro_tag: Tag, tag: Tag) -> Option<&Value> {
        let per_frame = self
            .root_element(tags::PER_FRAME_FUNCTIONAL_GROUPS_SEQUENCE)
            .and_then(|seq| items_of(seq).nth(frame as usize));
        let shared = self
            .root_element(tags::SHARED_FUNCTIONAL_GROUPS_SEQUENCE)
            .and_then(|seq| items_of(seq).next());
        per_frame.into_iter().chain(shared).find_map(|group| {
            let item = find_in(group, macro_tag).and_then(|seq| items_of(seq).next())?;
            find_in(item, tag).map(|e| e.value())
        })
    }

    /// The rescale slope of a frame,
    /// from the functional groups of enhanced images if present.
    pub fn data_scale_slope(&self, frame: u32) -> f64 {
        self.functional_group_value(
            frame,
            tags::PIXEL_VALUE_TRANSFORMATION_SEQUENCE,
            tags::RESCALE_SLOPE,
        )
        .and_then(|v| v.to_f64())
        .filter(|&slope| slope != 0.)
        .unwrap_or_else(|| self.rescale_slope())
    }

    /// The rescale intercept of a frame,
    /// from the functional groups of enhanced images if present.
    pub fn data_scale_intercept(&self, frame: u32) -> f64 {
        self.functional_group_value(
            frame,
            tags::PIXEL_VALUE_TRANSFORMATION_SEQUENCE,
            tags::RESCALE_INTERCEPT,
        )
        .and_then(|v| v.to_f64())
        .unwrap_or_else(|| self.rescale_intercept())
    }

    /// The first window center.
    pub fn window_center(&self) -> Option<f64> {
        self.float(tags::WINDOW_CENTER)
    }

    /// The first window width.
    pub fn window_width(&self) -> Option<f64> {
        self.float(tags::WINDOW_WIDTH)
    }

    /// The descriptor of a palette color lookup table.
    pub fn palette_descriptor(&self, channel: PaletteChannel) -> Option<LutDescriptor> {
        let values = self
            .value(channel.descriptor_tag())?
            .to_multi_int::<i64>()?;
        match values[..] {
            [entries, first_mapped, bits, ..] => Some(LutDescriptor {
                // 0 stands for 2^16 entries
                entries: if entries == 0 { 65_536 } else { entries as u32 },
                first_mapped: first_mapped as i32,
                bits: bits as u16,
            }),
            _ => None,
        }
    }

    /// The raw data of a palette color lookup table.
    pub fn palette_data(&self, channel: PaletteChannel) -> Option<&Bytes> {
        self.value(channel.data_tag())?.bytes()
    }

    /// Read a stored pixel value attribute,
    /// which has the signedness of the pixel data.
    fn pixel_value(&self, tag: Tag) -> Option<f64> {
        match self.value(tag)? {
            Value::U16(values) if self.is_signed() => {
                values.first().map(|&v| f64::from(v as i16))
            }
            value => value.to_f64(),
        }
    }

    /// The smallest pixel value in the image.
    pub fn image_min(&self) -> Option<f64> {
        self.pixel_value(tags::SMALLEST_IMAGE_PIXEL_VALUE)
    }

    /// The largest pixel value in the image.
    pub fn image_max(&self) -> Option<f64> {
        self.pixel_value(tags::LARGEST_IMAGE_PIXEL_VALUE)
    }

    /// The planar configuration:
    /// 0 for interleaved samples, 1 for one plane per sample.
    pub fn planar_configuration(&self) -> u16 {
        self.int(tags::PLANAR_CONFIGURATION).unwrap_or(0)
    }

    /// Whether the samples of color images are stored in planes.
    pub fn is_planar(&self) -> bool {
        self.samples_per_pixel() > 1 && self.planar_configuration() == 1
    }

    /// The orientation string of the image (see [`orientation_string`]).
    pub fn orientation(&self) -> Option<String> {
        self.image_directions().map(|d| orientation_string(&d))
    }

    /// The direction along which slices were acquired.
    pub fn acquired_slice_direction(&self) -> SliceDirection {
        self.image_directions()
            .map_or(SliceDirection::Unknown, |d| slice_direction(&d))
    }

    /// The position of the image along a slice direction.
    ///
    /// For oblique slices,
    /// this is the projection of the image position on the slice normal.
    pub fn image_position_slice_dir(&self, direction: SliceDirection) -> Option<f64> {
        let position = self.image_position()?;
        match direction.axis() {
            Some(axis) => Some(position[axis]),
            None if direction == SliceDirection::Oblique => {
                let normal = slice_normal(&self.image_directions()?);
                Some(position.iter().zip(normal).map(|(p, n)| p * n).sum())
            }
            None => None,
        }
    }

    /// The attributes identifying the series of this image.
    pub fn series_id(&self) -> SeriesId {
        SeriesId {
            description: self.series_description().map(String::from),
            instance_uid: self.series_instance_uid().map(String::from),
            number: self.series_number(),
            echo_number: self.echo_number(),
            orientation: self.orientation(),
            columns: self.columns(),
            rows: self.rows(),
        }
    }
}

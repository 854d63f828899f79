use crate::order::{order_images, OrderingAttributes};
use crate::{
    AlreadyBuiltSnafu, EmptySnafu, InvalidOrderingSnafu, NotBuiltSnafu, Result,
    SeriesMismatchSnafu,
};
use dcmview_object::{Image, SeriesId, SliceDirection};
use snafu::{ensure, OptionExt};
use std::sync::Arc;
use tracing::{debug, warn};

/// Options for building a series.
#[derive(Debug, Clone, Default)]
#[non_exhaustive]
pub struct SeriesOptions {
    /// An order given by the caller,
    /// as the list of arrival indices in display order,
    /// replacing the computed one.
    pub explicit_ordering: Option<Vec<usize>>,
}

impl SeriesOptions {
    /// Options computing the order from the images.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the given order instead of computing one.
    pub fn explicit_ordering(mut self, order: Vec<usize>) -> Self {
        self.explicit_ordering = Some(order);
        self
    }
}

/// The structure of a series, derived from its first image.
#[derive(Debug, Clone, Default, PartialEq)]
struct Classification {
    is_mosaic: bool,
    is_compressed: bool,
    is_multi_frame: bool,
    is_multi_frame_volume: bool,
    is_multi_frame_timeseries: bool,
    is_implicit_timeseries: bool,
    number_of_frames: u32,
}

/// An image of a built series, with its place in the display order.
#[derive(Debug, Clone)]
pub struct OrderedImage {
    pub image: Arc<Image>,
    /// The index of the image in the order it was added.
    pub arrival: usize,
    /// The 0-based position of the image in the display order.
    pub position: usize,
}

/// A set of images sharing a series identity,
/// ordered for 3-D reconstruction and time scrubbing.
///
/// Images are added with [`add_image`](Series::add_image)
/// until [`build_series`](Series::build_series) is called.
/// After that the series is read-only.
#[derive(Debug, Default)]
pub struct Series {
    id: Option<SeriesId>,
    options: SeriesOptions,
    arrived: Vec<Arc<Image>>,
    ordered: Vec<OrderedImage>,
    built: bool,
    classification: Classification,
    slice_dir: Option<SliceDirection>,
    slice_sense: bool,
}

impl Series {
    /// Create an empty series.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty series with the given options.
    pub fn with_options(options: SeriesOptions) -> Self {
        Series {
            options,
            ..Default::default()
        }
    }

    /// Whether an image belongs to this series:
    /// any image does while the series is empty.
    pub fn matches(&self, image: &Image) -> bool {
        self.id.as_ref().map_or(true, |id| *id == image.series_id())
    }

    /// Add an image to the series.
    ///
    /// Fails if the series was already built
    /// or the image is from another series.
    pub fn add_image(&mut self, image: Arc<Image>) -> Result<()> {
        ensure!(!self.built, AlreadyBuiltSnafu);
        let id = image.series_id();
        if let Some(expected) = &self.id {
            ensure!(
                *expected == id,
                SeriesMismatchSnafu {
                    expected: expected.to_string(),
                    found: id.to_string(),
                }
            );
        } else {
            self.id = Some(id);
        }
        self.arrived.push(image);
        Ok(())
    }

    /// Classify, order and orient the images of the series.
    ///
    /// This can only be done once.
    pub fn build_series(&mut self) -> Result<()> {
        ensure!(!self.built, AlreadyBuiltSnafu);
        let first = self.arrived.first().context(EmptySnafu)?;

        self.classification = classify(&self.arrived);
        let slice_dir = first.acquired_slice_direction();

        let order = match &self.options.explicit_ordering {
            Some(order) => {
                ensure!(
                    is_permutation(order, self.arrived.len()),
                    InvalidOrderingSnafu {
                        len: self.arrived.len()
                    }
                );
                order.clone()
            }
            None => {
                let attributes: Vec<_> = self
                    .arrived
                    .iter()
                    .map(|image| OrderingAttributes::of(image, slice_dir))
                    .collect();
                order_images(&attributes, self.classification.number_of_frames)
            }
        };

        self.ordered = order
            .into_iter()
            .enumerate()
            .map(|(position, arrival)| OrderedImage {
                image: Arc::clone(&self.arrived[arrival]),
                arrival,
                position,
            })
            .collect();
        self.slice_dir = Some(slice_dir);
        self.slice_sense = self.compute_slice_sense(slice_dir);
        self.built = true;

        debug!(
            "Built series {} of {} images, {} slices, sense {}",
            self.name(),
            self.ordered.len(),
            slice_dir,
            self.slice_sense
        );
        Ok(())
    }

    fn compute_slice_sense(&self, slice_dir: SliceDirection) -> bool {
        if self.options.explicit_ordering.is_some() {
            return false;
        }
        let c = &self.classification;
        if c.is_mosaic {
            return true;
        }

        let position = |image: &Image| {
            image
                .image_position_slice_dir(slice_dir)
                .or_else(|| image.slice_location())
        };
        let (Some(first), Some(last)) = (self.ordered.first(), self.ordered.last()) else {
            return false;
        };

        if c.is_multi_frame {
            let first_image = &first.image;
            if let Some(locations) = first_image.slice_location_vector() {
                let diff = locations[0] - locations[locations.len() - 1];
                let z_slices = first_image
                    .orientation()
                    .map_or(false, |o| o.chars().nth(2) == Some('Z'));
                return if z_slices { diff < 0. } else { diff > 0. };
            }
            return position(first_image).unwrap_or(0.) >= 0.;
        }

        let diff = position(&last.image).unwrap_or(0.) - position(&first.image).unwrap_or(0.);
        match slice_dir {
            SliceDirection::Sagittal | SliceDirection::Coronal => diff <= 0.,
            _ => diff > 0.,
        }
    }

    /// Whether the series has been built.
    pub fn is_built(&self) -> bool {
        self.built
    }

    /// The identity shared by the images of the series.
    pub fn series_id(&self) -> Option<&SeriesId> {
        self.id.as_ref()
    }

    /// A readable name for the series.
    pub fn name(&self) -> String {
        self.id
            .as_ref()
            .map_or_else(|| "(empty)".to_string(), SeriesId::to_string)
    }

    /// The number of images in the series.
    pub fn len(&self) -> usize {
        self.arrived.len()
    }

    /// Whether the series has no images.
    pub fn is_empty(&self) -> bool {
        self.arrived.is_empty()
    }

    /// The images of the series:
    /// in display order once built,
    /// in the order they were added before that.
    pub fn images(&self) -> Vec<Arc<Image>> {
        if self.built {
            self.ordered.iter().map(|o| Arc::clone(&o.image)).collect()
        } else {
            self.arrived.clone()
        }
    }

    /// The images in display order, with their positions.
    pub fn ordered_images(&self) -> Result<&[OrderedImage]> {
        ensure!(self.built, NotBuiltSnafu);
        Ok(&self.ordered)
    }

    /// The images in the order they were added.
    pub fn arrived_images(&self) -> &[Arc<Image>] {
        &self.arrived
    }

    /// The arrival index of the image at each display position.
    pub fn get_order(&self) -> Result<Vec<usize>> {
        ensure!(self.built, NotBuiltSnafu);
        Ok(self.ordered.iter().map(|o| o.arrival).collect())
    }

    /// The display position of the image added at the given index.
    pub fn position_of(&self, arrival: usize) -> Option<usize> {
        self.ordered
            .iter()
            .find(|o| o.arrival == arrival)
            .map(|o| o.position)
    }

    /// The direction along which slices were acquired.
    pub fn slice_dir(&self) -> Result<SliceDirection> {
        self.slice_dir.context(NotBuiltSnafu)
    }

    /// Whether the display order goes against the slice axis.
    pub fn slice_sense(&self) -> Result<bool> {
        ensure!(self.built, NotBuiltSnafu);
        Ok(self.slice_sense)
    }

    /// Whether the images are mosaics of slices.
    pub fn is_mosaic(&self) -> bool {
        self.classification.is_mosaic
    }

    /// Whether the pixel data is compressed.
    pub fn is_compressed(&self) -> bool {
        self.classification.is_compressed
    }

    /// Whether the images hold more than one frame.
    pub fn is_multi_frame(&self) -> bool {
        self.classification.is_multi_frame
    }

    /// Whether the frames of an image are the slices of one volume.
    pub fn is_multi_frame_volume(&self) -> bool {
        self.classification.is_multi_frame_volume
    }

    /// Whether the frames of an image are time points.
    pub fn is_multi_frame_timeseries(&self) -> bool {
        self.classification.is_multi_frame_timeseries
    }

    /// Whether time points repeat the same image positions across images.
    pub fn is_implicit_timeseries(&self) -> bool {
        self.classification.is_implicit_timeseries
    }

    /// The number of frames (time points) of the series.
    pub fn number_of_frames(&self) -> u32 {
        self.classification.number_of_frames
    }
}

fn is_permutation(order: &[usize], len: usize) -> bool {
    let mut seen = vec![false; len];
    order.len() == len
        && order
            .iter()
            .all(|&i| i < len && !std::mem::replace(&mut seen[i], true))
}

/// Derive the structure of a series from its first image.
fn classify(images: &[Arc<Image>]) -> Classification {
    let Some(first) = images.first() else {
        return Classification::default();
    };
    let mut c = Classification {
        is_mosaic: first.is_mosaic(),
        is_compressed: first.is_compressed(),
        number_of_frames: first.number_of_frames(),
        ..Default::default()
    };
    let [matrix_rows, matrix_cols] = first.acquisition_matrix();
    c.is_multi_frame = c.number_of_frames > 1
        || (c.is_mosaic && u64::from(matrix_rows) * u64::from(matrix_cols) > 1);

    if c.is_multi_frame {
        let has_frame_time = first.frame_time().map_or(false, |t| t > 0.);
        if c.is_mosaic || has_frame_time {
            c.is_multi_frame_timeseries = true;
        } else if first.number_of_implicit_frames() > 1 {
            c.number_of_frames = images.len() as u32;
            if c.number_of_frames <= 1 {
                c.is_multi_frame_volume = true;
            } else {
                c.is_multi_frame_timeseries = true;
            }
        } else {
            c.is_multi_frame_timeseries = true;
        }
    } else if !c.is_mosaic && c.number_of_frames <= 1 {
        if let Some(position) = first.image_position() {
            let same_position = images
                .iter()
                .filter(|image| image.image_position() == Some(position))
                .count();
            if same_position > 1 {
                warn!(
                    "{} images at the same position, reading as a time series",
                    same_position
                );
                c.is_implicit_timeseries = true;
                c.number_of_frames = same_position as u32;
            }
        }
    }
    c
}

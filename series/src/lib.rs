#![deny(trivial_numeric_casts, unsafe_code, unstable_features)]
#![warn(
    missing_debug_implementations,
    unused_qualifications,
    unused_import_braces
)]

//! This crate groups parsed DICOM images into series
//! and puts them in display order.
//!
//! A [`Series`] collects images sharing a [`SeriesId`](dcmview_object::SeriesId).
//! Once all images are added,
//! [`build_series`](Series::build_series) classifies the series
//! (mosaic, multi-frame volume or time series, implicit time series),
//! computes the canonical order of its images
//! (by time point, then by location along the slice direction),
//! and decides whether the display order runs against the slice axis.
//!
//! # Example
//!
//! ```no_run
//! # use std::error::Error;
//! use dcmview_object::open_file;
//! use dcmview_series::Series;
//! use std::sync::Arc;
//!
//! # fn main() -> Result<(), Box<dyn Error>> {
//! let mut series = Series::new();
//! for path in ["1.dcm", "2.dcm", "3.dcm"] {
//!     series.add_image(Arc::new(open_file(path)?))?;
//! }
//! series.build_series()?;
//! println!("display order: {:?}", series.get_order()?);
//! # Ok(())
//! # }
//! ```

use dcmview_object::Image;
use snafu::Snafu;
use std::sync::Arc;

pub mod order;
mod series;

pub use crate::order::{
    order_by_location, order_by_time, order_images, OrderKey, OrderingAttributes,
};
pub use crate::series::{OrderedImage, Series, SeriesOptions};

#[derive(Debug, Snafu)]
#[non_exhaustive]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    /// The image belongs to another series.
    #[snafu(display("Image of series `{}` does not belong to series `{}`", found, expected))]
    SeriesMismatch { expected: String, found: String },

    /// Images cannot be added to a built series,
    /// and a series can only be built once.
    #[snafu(display("Series is already built"))]
    AlreadyBuilt,

    /// The series must be built first.
    #[snafu(display("Series is not built yet"))]
    NotBuilt,

    #[snafu(display("Cannot build a series without images"))]
    Empty,

    /// The explicit ordering is not a permutation of the images.
    #[snafu(display("Explicit ordering is not a permutation of {} images", len))]
    InvalidOrdering { len: usize },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Split images into series by their identity,
/// in order of first appearance.
///
/// The series are not built.
pub fn group_by_series<I>(images: I) -> Vec<Series>
where
    I: IntoIterator<Item = Arc<Image>>,
{
    let mut groups: Vec<Series> = Vec::new();
    for image in images {
        let series = match groups.iter().position(|s| s.matches(&image)) {
            Some(i) => &mut groups[i],
            None => {
                groups.push(Series::new());
                let last = groups.len() - 1;
                &mut groups[last]
            }
        };
        // the series is not built and it matches
        if let Err(e) = series.add_image(image) {
            tracing::warn!("Could not add image to series: {}", e);
        }
    }
    groups
}

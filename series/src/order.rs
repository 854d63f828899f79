//! Canonical ordering of the images of a series:
//! by time first, then by location within each time point.

use dcmview_object::{Image, SliceDirection};
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// A floating point sort key with a total order.
///
/// Negative zero and zero are the same key.
#[derive(Debug, Copy, Clone)]
pub struct OrderKey(pub f64);

impl PartialEq for OrderKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OrderKey {}

impl PartialOrd for OrderKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OrderKey {
    fn cmp(&self, other: &Self) -> Ordering {
        let normalized = |v: f64| if v == 0. { 0. } else { v };
        normalized(self.0).total_cmp(&normalized(other.0))
    }
}

/// The attributes of an image which determine its place in a series.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderingAttributes {
    /// The image position along the slice direction.
    pub position: Option<f64>,
    pub slice_location: Option<f64>,
    pub image_number: Option<i64>,
    pub temporal_position: Option<i64>,
    pub temporal_positions: Option<i64>,
}

impl OrderingAttributes {
    /// Collect the ordering attributes of an image.
    pub fn of(image: &Image, slice_dir: SliceDirection) -> Self {
        OrderingAttributes {
            position: image.image_position_slice_dir(slice_dir),
            slice_location: image.slice_location(),
            image_number: image.image_number(),
            temporal_position: image.temporal_position(),
            temporal_positions: image.number_of_temporal_positions(),
        }
    }
}

/// The attribute used to order images within a time point,
/// chosen from what the first image provides.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum SliceKey {
    Position,
    SliceLocation,
    ImageNumber,
    Arrival,
}

impl SliceKey {
    fn choose(first: &OrderingAttributes) -> Self {
        if first.position.is_some() {
            SliceKey::Position
        } else if first.slice_location.is_some() {
            SliceKey::SliceLocation
        } else if first.image_number.is_some() {
            SliceKey::ImageNumber
        } else {
            SliceKey::Arrival
        }
    }

    /// The sort key of an image,
    /// its arrival index if it lacks the chosen attribute.
    fn of(self, attributes: &OrderingAttributes, index: usize) -> OrderKey {
        let value = match self {
            SliceKey::Position => attributes.position,
            SliceKey::SliceLocation => attributes.slice_location,
            SliceKey::ImageNumber => attributes.image_number.map(|n| n as f64),
            SliceKey::Arrival => None,
        };
        OrderKey(value.unwrap_or(index as f64))
    }
}

/// Group images by time point.
///
/// With an explicit temporal position on every frame of the series,
/// the groups follow the temporal position.
/// Otherwise images are bucketed by spatial location,
/// and the n-th image to arrive at each location
/// goes to the n-th time point.
pub fn order_by_time(attributes: &[OrderingAttributes], number_of_frames: u32) -> Vec<Vec<usize>> {
    let Some(first) = attributes.first() else {
        return Vec::new();
    };

    let explicit = first.temporal_position.is_some()
        && first.temporal_positions == Some(i64::from(number_of_frames));
    if explicit {
        let mut times: BTreeMap<i64, Vec<usize>> = BTreeMap::new();
        for (i, a) in attributes.iter().enumerate() {
            times
                .entry(a.temporal_position.unwrap_or(0))
                .or_default()
                .push(i);
        }
        return times.into_values().collect();
    }

    let marker = match SliceKey::choose(first) {
        SliceKey::Position => SliceKey::Position,
        SliceKey::SliceLocation => SliceKey::SliceLocation,
        _ => SliceKey::Arrival,
    };
    let mut slices: BTreeMap<OrderKey, Vec<usize>> = BTreeMap::new();
    for (i, a) in attributes.iter().enumerate() {
        slices.entry(marker.of(a, i)).or_default().push(i);
    }

    let mut times: Vec<Vec<usize>> = Vec::new();
    for slice in slices.values() {
        for (time, &i) in slice.iter().enumerate() {
            if times.len() <= time {
                times.push(Vec::new());
            }
            times[time].push(i);
        }
    }
    times
}

/// Order images within a single time point.
pub fn order_by_location(attributes: &[OrderingAttributes], group: &mut [usize]) {
    let Some(first) = attributes.first() else {
        return;
    };
    let key = SliceKey::choose(first);
    group.sort_by_key(|&i| (key.of(&attributes[i], i), i));
}

/// Compute the canonical order of the images of a series,
/// as the list of arrival indices in display order.
pub fn order_images(attributes: &[OrderingAttributes], number_of_frames: u32) -> Vec<usize> {
    let mut order = Vec::with_capacity(attributes.len());
    for mut group in order_by_time(attributes, number_of_frames) {
        order_by_location(attributes, &mut group);
        order.extend(group);
    }
    order
}

//! Assembly of the compressed span of each frame
//! from the fragments of encapsulated pixel data.

use crate::{DecodeResult, FrameRangeOutOfBoundsSnafu};
use bytes::{Bytes, BytesMut};
use dcmview_parser::EncapsulatedPixelData;
use snafu::OptionExt;
use std::ops::Range;
use tracing::{debug, warn};

/// The size of the item header before each fragment.
const ITEM_HEADER_LENGTH: usize = 8;

/// Whether a fragment starts a new JPEG or JPEG 2000 codestream.
fn starts_codestream(fragment: &[u8]) -> bool {
    // JPEG and JPEG-LS start of image
    fragment.starts_with(&[0xFF, 0xD8])
    // JPEG 2000 start of codestream and image size marker
        || fragment.starts_with(&[0xFF, 0x4F, 0xFF, 0x51])
    // JP2 file format signature box
        || fragment.starts_with(&[0x00, 0x00, 0x00, 0x0C, 0x6A, 0x50])
}

/// Determine which fragments make up each frame.
///
/// In order of preference:
/// one fragment per frame,
/// all fragments when there is a single frame,
/// the basic offset table,
/// or a new frame at every fragment starting a codestream.
pub(crate) fn frame_ranges(pixel_data: &EncapsulatedPixelData, frames: u32) -> Vec<Range<usize>> {
    let fragments = &pixel_data.fragments;
    let frames = frames as usize;

    if fragments.len() == frames {
        return (0..frames).map(|i| i..i + 1).collect();
    }
    if frames <= 1 {
        return vec![0..fragments.len()];
    }
    if pixel_data.offset_table.len() == frames {
        return ranges_from_offset_table(pixel_data);
    }
    if !pixel_data.offset_table.is_empty() {
        warn!(
            "Basic offset table has {} entries for {} frames, ignored",
            pixel_data.offset_table.len(),
            frames
        );
    }

    let mut ranges: Vec<Range<usize>> = Vec::with_capacity(frames);
    for (i, fragment) in fragments.iter().enumerate() {
        match ranges.last_mut() {
            Some(range) if !starts_codestream(fragment) => range.end = i + 1,
            _ => ranges.push(i..i + 1),
        }
    }
    debug!(
        "Grouped {} fragments into {} frames by codestream markers",
        fragments.len(),
        ranges.len()
    );
    ranges
}

fn ranges_from_offset_table(pixel_data: &EncapsulatedPixelData) -> Vec<Range<usize>> {
    let table = &pixel_data.offset_table;
    let mut ranges = Vec::with_capacity(table.len());
    let mut position = 0;
    let mut fragments = pixel_data.fragments.iter().enumerate().peekable();

    for (frame, _) in table.iter().enumerate() {
        let next_offset = table.get(frame + 1).map(|&o| o as usize);
        let start = fragments.peek().map_or(pixel_data.fragments.len(), |(i, _)| *i);
        let mut end = start;
        while let Some((i, fragment)) = fragments.peek() {
            if next_offset.map_or(false, |next| position >= next) {
                break;
            }
            position += fragment.len() + ITEM_HEADER_LENGTH;
            end = i + 1;
            fragments.next();
        }
        ranges.push(start..end);
    }
    ranges
}

/// Assemble the compressed span of a frame,
/// concatenating its fragments if there is more than one.
pub fn assemble_frame(
    pixel_data: &EncapsulatedPixelData,
    frame: u32,
    frames: u32,
) -> DecodeResult<Bytes> {
    let ranges = frame_ranges(pixel_data, frames);
    let range = ranges.get(frame as usize).context(FrameRangeOutOfBoundsSnafu {
        frame,
        frames: ranges.len() as u32,
    })?;
    Ok(concat(&pixel_data.fragments[range.clone()]))
}

pub(crate) fn concat(fragments: &[Bytes]) -> Bytes {
    match fragments {
        [] => Bytes::new(),
        [fragment] => fragment.clone(),
        fragments => {
            let mut data = BytesMut::with_capacity(fragments.iter().map(Bytes::len).sum());
            for fragment in fragments {
                data.extend_from_slice(fragment);
            }
            data.freeze()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pixel_data(offset_table: Vec<u32>, fragments: &[&[u8]]) -> EncapsulatedPixelData {
        EncapsulatedPixelData {
            offset_table,
            fragments: fragments
                .iter()
                .map(|f| Bytes::copy_from_slice(f))
                .collect(),
        }
    }

    #[test]
    fn one_fragment_per_frame() {
        let data = pixel_data(vec![], &[&[1, 2], &[3, 4], &[5, 6]]);
        assert_eq!(frame_ranges(&data, 3), vec![0..1, 1..2, 2..3]);
        assert_eq!(&assemble_frame(&data, 1, 3).unwrap()[..], &[3, 4]);
    }

    #[test]
    fn single_frame_concatenates() {
        let data = pixel_data(vec![0], &[&[1, 2], &[3, 4]]);
        assert_eq!(&assemble_frame(&data, 0, 1).unwrap()[..], &[1, 2, 3, 4]);
    }

    #[test]
    fn grouped_by_offset_table() {
        // frame 0 spans two fragments of 4 bytes, each with an 8 byte item header
        let data = pixel_data(vec![0, 24], &[&[1; 4], &[2; 4], &[3; 6]]);
        assert_eq!(frame_ranges(&data, 2), vec![0..2, 2..3]);
        assert_eq!(&assemble_frame(&data, 0, 2).unwrap()[..], &[1, 1, 1, 1, 2, 2, 2, 2]);
        assert_eq!(&assemble_frame(&data, 1, 2).unwrap()[..], &[3; 6]);
    }

    #[test]
    fn grouped_by_markers() {
        let data = pixel_data(
            vec![],
            &[
                &[0xFF, 0xD8, 1],
                &[2, 3],
                &[0xFF, 0xD8, 4],
                &[0xFF, 0x4F, 0xFF, 0x51],
                &[5],
            ],
        );
        assert_eq!(frame_ranges(&data, 3), vec![0..2, 2..3, 3..5]);
        assert_eq!(&assemble_frame(&data, 0, 3).unwrap()[..], &[0xFF, 0xD8, 1, 2, 3]);
    }

    #[test]
    fn frame_out_of_range() {
        let data = pixel_data(vec![], &[&[0xFF, 0xD8], &[0xFF, 0xD8]]);
        assert!(assemble_frame(&data, 0, 3).is_ok());
        assert!(matches!(
            assemble_frame(&data, 2, 3),
            Err(crate::DecodeError::FrameRangeOutOfBounds { frame: 2, frames: 2 })
        ));
    }
}

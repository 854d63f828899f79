//! Support for RLE Lossless image decoding.
//!
//! See <https://dicom.nema.org/medical/dicom/2023e/output/chtml/part05/chapter_G.html>
use crate::adapters::{FrameCodec, FrameInfo};
use crate::{DecodeResult, InvalidRleSegmentSnafu};
use byteordered::byteorder::{ByteOrder, LittleEndian};
use snafu::ensure;
use tracing::trace;

/// The size of the RLE header:
/// the segment count followed by 15 segment offsets.
pub const RLE_HEADER_LENGTH: usize = 64;

/// The maximum number of segments in an RLE frame.
pub const MAX_SEGMENTS: usize = 15;

/// Frame codec for the RLE Lossless transfer syntax.
///
/// The output keeps the planar configuration of the image:
/// interleaved samples unless the image is planar,
/// in which case each sample plane is a contiguous block.
/// Multi-byte samples are written in little endian.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RleLosslessAdapter;

impl FrameCodec for RleLosslessAdapter {
    fn decode_frame(&self, info: &FrameInfo, data: &[u8], dst: &mut Vec<u8>) -> DecodeResult<()> {
        decode_rle_frame(info, data, dst)
    }

    fn keeps_planar_configuration(&self) -> bool {
        true
    }
}

/// Read the RLE header of a frame
/// and return the byte range of each segment.
pub fn read_rle_header(fragment: &[u8]) -> DecodeResult<Vec<(usize, usize)>> {
    ensure!(
        fragment.len() >= RLE_HEADER_LENGTH,
        InvalidRleSegmentSnafu {
            reason: format!("frame of {} bytes has no room for a header", fragment.len()),
        }
    );
    let nr_segments = LittleEndian::read_u32(&fragment[0..4]) as usize;
    ensure!(
        (1..=MAX_SEGMENTS).contains(&nr_segments),
        InvalidRleSegmentSnafu {
            reason: format!("{} segments declared", nr_segments),
        }
    );

    let mut offsets = vec![0; nr_segments];
    LittleEndian::read_u32_into(&fragment[4..4 * (nr_segments + 1)], &mut offsets);

    let mut segments = Vec::with_capacity(nr_segments);
    for (i, &start) in offsets.iter().enumerate() {
        let start = start as usize;
        let end = offsets
            .get(i + 1)
            .map_or(fragment.len(), |&next| next as usize);
        ensure!(
            start >= RLE_HEADER_LENGTH && start < fragment.len(),
            InvalidRleSegmentSnafu {
                reason: format!(
                    "segment #{} starts at {}, outside of the frame of {} bytes",
                    i,
                    start,
                    fragment.len()
                ),
            }
        );
        ensure!(
            end > start && end <= fragment.len(),
            InvalidRleSegmentSnafu {
                reason: format!("segment #{} offsets are not ascending", i),
            }
        );
        segments.push((start, end));
    }
    Ok(segments)
}

/// Decode a PackBits run-length encoded segment,
/// appending exactly `length` bytes to `dst`.
///
/// Decoding stops as soon as `length` bytes are produced,
/// so trailing padding in the segment is ignored.
pub fn decode_segment(segment: &[u8], length: usize, dst: &mut Vec<u8>) -> DecodeResult<()> {
    let target = dst.len() + length;
    let mut pos = 0;
    while dst.len() < target {
        let Some(&header) = segment.get(pos) else {
            return InvalidRleSegmentSnafu {
                reason: format!(
                    "segment ended after {} of {} bytes",
                    length - (target - dst.len()),
                    length
                ),
            }
            .fail();
        };
        pos += 1;

        let n = header as i8;
        if n >= 0 {
            let count = n as usize + 1;
            let Some(literal) = segment.get(pos..pos + count) else {
                return InvalidRleSegmentSnafu {
                    reason: format!("literal run of {} bytes goes past the segment", count),
                }
                .fail();
            };
            let count = count.min(target - dst.len());
            dst.extend_from_slice(&literal[..count]);
            pos += literal.len();
        } else if n != -128 {
            let Some(&value) = segment.get(pos) else {
                return InvalidRleSegmentSnafu {
                    reason: "replicate run without a value",
                }
                .fail();
            };
            pos += 1;
            let count = (1 - isize::from(n)) as usize;
            let new_len = (dst.len() + count).min(target);
            dst.resize(new_len, value);
        }
        // -128 is a no-op
    }
    Ok(())
}

/// Decode a single RLE Lossless frame.
///
/// Segments come in the order of the sample components,
/// and within each component from the most significant byte
/// to the least significant byte.
pub fn decode_rle_frame(info: &FrameInfo, fragment: &[u8], dst: &mut Vec<u8>) -> DecodeResult<()> {
    let samples = usize::from(info.samples_per_pixel);
    let bytes_per_sample = info.bytes_per_sample();
    let pixels = info.pixels();

    let segments = read_rle_header(fragment)?;
    ensure!(
        segments.len() == samples * bytes_per_sample,
        InvalidRleSegmentSnafu {
            reason: format!(
                "{} segments for {} samples of {} bytes",
                segments.len(),
                samples,
                bytes_per_sample
            ),
        }
    );
    trace!("Decoding RLE frame of {} segments", segments.len());

    let base_offset = dst.len();
    dst.resize(base_offset + pixels * samples * bytes_per_sample, 0);
    let mut decoded = Vec::with_capacity(pixels);

    for (i, &(start, end)) in segments.iter().enumerate() {
        let component = i / bytes_per_sample;
        // byte 0 of a sample is the least significant one
        let byte = bytes_per_sample - 1 - i % bytes_per_sample;

        decoded.clear();
        decode_segment(&fragment[start..end], pixels, &mut decoded)?;

        let out = &mut dst[base_offset..];
        if info.planar {
            let plane = &mut out[component * pixels * bytes_per_sample..];
            for (p, &value) in decoded.iter().enumerate() {
                plane[p * bytes_per_sample + byte] = value;
            }
        } else {
            let stride = samples * bytes_per_sample;
            let first = component * bytes_per_sample + byte;
            for (p, &value) in decoded.iter().enumerate() {
                out[p * stride + first] = value;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DecodeError;

    fn info(rows: u32, columns: u32, bits: u16, samples: u16, planar: bool) -> FrameInfo {
        FrameInfo {
            rows,
            columns,
            bits_allocated: bits,
            bits_stored: bits,
            samples_per_pixel: samples,
            signed: false,
            planar,
        }
    }

    /// Build an RLE frame out of already encoded segments.
    fn rle_frame(segments: &[&[u8]]) -> Vec<u8> {
        let mut header = vec![0_u8; RLE_HEADER_LENGTH];
        LittleEndian::write_u32(&mut header[0..4], segments.len() as u32);
        let mut offset = RLE_HEADER_LENGTH;
        let mut body = Vec::new();
        for (i, segment) in segments.iter().enumerate() {
            LittleEndian::write_u32(&mut header[4 + 4 * i..8 + 4 * i], offset as u32);
            body.extend_from_slice(segment);
            offset += segment.len();
        }
        header.extend(body);
        header
    }

    #[test]
    fn test_packbits() {
        let encoded = vec![
            0xFE, 0xAA, 0x02, 0x80, 0x00, 0x2A, 0xFD, 0xAA, 0x03, 0x80, 0x00, 0x2A, 0x22, 0xF7,
            0xAA,
        ];
        let mut decoded = Vec::new();
        decode_segment(&encoded, 24, &mut decoded).unwrap();

        let expected = vec![
            0xAA, 0xAA, 0xAA, 0x80, 0x00, 0x2A, 0xAA, 0xAA, 0xAA, 0xAA, 0x80, 0x00, 0x2A, 0x22,
            0xAA, 0xAA, 0xAA, 0xAA, 0xAA, 0xAA, 0xAA, 0xAA, 0xAA, 0xAA,
        ];
        assert_eq!(decoded, expected);
    }

    #[test]
    fn literal_then_run() {
        let frame = rle_frame(&[&[0x02, 0xAA, 0xBB, 0xCC, 0xFE, 0x05]]);
        let mut dst = Vec::new();
        decode_rle_frame(&info(2, 3, 8, 1, false), &frame, &mut dst).unwrap();
        assert_eq!(dst, vec![0xAA, 0xBB, 0xCC, 0x05, 0x05, 0x05]);
    }

    #[test]
    fn no_op_control_byte_and_padding() {
        let frame = rle_frame(&[&[0x80, 0xFD, 0x07, 0x00]]);
        let mut dst = Vec::new();
        decode_rle_frame(&info(1, 4, 8, 1, false), &frame, &mut dst).unwrap();
        assert_eq!(dst, vec![7, 7, 7, 7]);
    }

    #[test]
    fn sixteen_bit_samples_are_little_endian() {
        // high bytes first, then low bytes
        let frame = rle_frame(&[&[0x01, 0x12, 0x34], &[0x01, 0x56, 0x78]]);
        let mut dst = Vec::new();
        decode_rle_frame(&info(1, 2, 16, 1, false), &frame, &mut dst).unwrap();
        assert_eq!(dst, vec![0x56, 0x12, 0x78, 0x34]);
    }

    #[test]
    fn rgb_interleaved_and_planar() {
        let segments: [&[u8]; 3] = [&[0x01, 1, 2], &[0x01, 3, 4], &[0x01, 5, 6]];
        let frame = rle_frame(&segments);

        let mut interleaved = Vec::new();
        decode_rle_frame(&info(1, 2, 8, 3, false), &frame, &mut interleaved).unwrap();
        assert_eq!(interleaved, vec![1, 3, 5, 2, 4, 6]);

        let mut planar = Vec::new();
        decode_rle_frame(&info(1, 2, 8, 3, true), &frame, &mut planar).unwrap();
        assert_eq!(planar, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn appends_to_existing_output() {
        let frame = rle_frame(&[&[0xFF, 0x09]]);
        let mut dst = vec![0xEE];
        decode_rle_frame(&info(1, 2, 8, 1, false), &frame, &mut dst).unwrap();
        assert_eq!(dst, vec![0xEE, 9, 9]);
    }

    #[test]
    fn segment_count_must_match_samples() {
        let frame = rle_frame(&[&[0x00, 1], &[0x00, 2]]);
        let mut dst = Vec::new();
        let err = decode_rle_frame(&info(1, 1, 8, 1, false), &frame, &mut dst).unwrap_err();
        assert!(matches!(err, DecodeError::InvalidRleSegment { .. }));
    }

    #[test]
    fn bad_headers() {
        // too short for a header
        assert!(read_rle_header(&[1, 0, 0, 0]).is_err());

        // zero segments
        let mut frame = rle_frame(&[&[0x00, 1]]);
        frame[0] = 0;
        assert!(read_rle_header(&frame).is_err());

        // offset inside the header
        let mut frame = rle_frame(&[&[0x00, 1]]);
        frame[4] = 16;
        assert!(read_rle_header(&frame).is_err());

        // offset past the end
        let mut frame = rle_frame(&[&[0x00, 1]]);
        frame[4] = 200;
        assert!(read_rle_header(&frame).is_err());

        // descending offsets
        let mut frame = rle_frame(&[&[0x00, 1], &[0x00, 2]]);
        frame[8] = 64;
        assert!(read_rle_header(&frame).is_err());
    }

    #[test]
    fn truncated_segment() {
        // a 4 pixel frame with only 3 bytes of data
        let frame = rle_frame(&[&[0xFE, 0x01]]);
        let mut dst = Vec::new();
        let err = decode_rle_frame(&info(2, 2, 8, 1, false), &frame, &mut dst).unwrap_err();
        assert!(matches!(err, DecodeError::InvalidRleSegment { .. }));

        // a literal run past the end of the segment
        let mut decoded = Vec::new();
        assert!(decode_segment(&[0x05, 1, 2], 6, &mut decoded).is_err());
    }
}

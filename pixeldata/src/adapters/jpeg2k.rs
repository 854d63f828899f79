//! JPEG 2000 decoding through OpenJPEG.

use crate::adapters::{FrameCodec, FrameInfo};
use crate::DecodeResult;
use jpeg2k::Image;
use snafu::{ensure_whatever, ResultExt};
use tracing::warn;

#[cfg(all(feature = "openjp2", feature = "openjpeg-sys"))]
compile_error!(
    "feature \"openjp2\" and feature \"openjpeg-sys\" cannot be enabled at the same time"
);

/// Frame codec for JPEG 2000 lossless and lossy.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Jpeg2000Adapter;

impl FrameCodec for Jpeg2000Adapter {
    fn decode_frame(&self, info: &FrameInfo, data: &[u8], dst: &mut Vec<u8>) -> DecodeResult<()> {
        ensure_whatever!(
            info.bits_allocated == 8 || info.bits_allocated == 16,
            "BitsAllocated other than 8 or 16 is not supported"
        );

        let samples_per_pixel = usize::from(info.samples_per_pixel);
        let bytes_per_sample = info.bytes_per_sample();
        let base_offset = dst.len();
        dst.resize(base_offset + info.frame_size(), 0);

        let image = Image::from_bytes(data).whatever_context("jpeg2k decoder failure")?;

        for (component_i, component) in image.components().iter().enumerate() {
            if component_i >= samples_per_pixel {
                warn!(
                    "JPEG 2000 image has more components than expected ({} > {})",
                    component_i + 1,
                    samples_per_pixel
                );
                break;
            }

            for (i, sample) in component.data().iter().enumerate() {
                let offset = base_offset
                    + i * samples_per_pixel * bytes_per_sample
                    + component_i * bytes_per_sample;
                let Some(target) = dst.get_mut(offset..offset + bytes_per_sample) else {
                    break;
                };
                target.copy_from_slice(&sample.to_le_bytes()[..bytes_per_sample]);
            }
        }

        Ok(())
    }
}

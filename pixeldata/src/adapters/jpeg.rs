//! JPEG decoding (baseline, extended and lossless) through `jpeg-decoder`.

use crate::adapters::{FrameCodec, FrameInfo};
use crate::DecodeResult;
use jpeg_decoder::Decoder;
use snafu::{ensure_whatever, ResultExt};
use std::io::Cursor;
use tracing::warn;

/// Frame codec for the JPEG processes supported by `jpeg-decoder`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct JpegAdapter;

impl FrameCodec for JpegAdapter {
    fn decode_frame(&self, info: &FrameInfo, data: &[u8], dst: &mut Vec<u8>) -> DecodeResult<()> {
        ensure_whatever!(
            info.bits_allocated == 8 || info.bits_allocated == 16,
            "BitsAllocated other than 8 or 16 is not supported"
        );

        let mut decoder = Decoder::new(Cursor::new(data));
        let mut decoded = decoder
            .decode()
            .map_err(|e| Box::new(e) as Box<_>)
            .whatever_context("JPEG decoder failure")?;

        if info.bits_allocated == 16 {
            // jpeg-decoder yields 16-bit samples in big endian
            for sample in decoded.chunks_exact_mut(2) {
                sample.swap(0, 1);
            }
        }

        let expected = info.frame_size();
        if decoded.len() != expected {
            warn!(
                "JPEG frame decoded to {} bytes, {} expected",
                decoded.len(),
                expected
            );
        }
        dst.append(&mut decoded);
        Ok(())
    }
}

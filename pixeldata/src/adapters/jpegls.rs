//! JPEG-LS decoding through CharLS.

use crate::adapters::{FrameCodec, FrameInfo};
use crate::DecodeResult;
use charls::CharLS;
use snafu::{ensure_whatever, ResultExt};

/// Frame codec for JPEG-LS lossless and near-lossless.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct JpegLsAdapter;

impl FrameCodec for JpegLsAdapter {
    fn decode_frame(&self, info: &FrameInfo, data: &[u8], dst: &mut Vec<u8>) -> DecodeResult<()> {
        ensure_whatever!(
            info.bits_allocated == 8 || info.bits_allocated == 16,
            "BitsAllocated other than 8 or 16 is not supported"
        );

        let mut decoded = CharLS::default()
            .decode(data)
            .map_err(|error| error.to_string())
            .with_whatever_context(|error| error.to_string())?;

        dst.append(&mut decoded);
        Ok(())
    }
}

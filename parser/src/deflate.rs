//! Inflating of deflated data sets.

use crate::error::{InflateSnafu, Result};
use bytes::{Bytes, BytesMut};
use flate2::read::DeflateDecoder;
use snafu::ResultExt;
use std::io::Read;

/// Inflate the raw deflate stream found from `offset` to the end of `data`,
/// and splice it after the first `offset` bytes,
/// so that element offsets continue in one logical source.
pub fn inflate_remainder(data: &[u8], offset: usize) -> Result<Bytes> {
    let head = &data[..offset.min(data.len())];
    let tail = data.get(offset..).unwrap_or_default();

    let mut inflated = Vec::with_capacity(tail.len() * 4);
    DeflateDecoder::new(tail)
        .read_to_end(&mut inflated)
        .context(InflateSnafu { offset })?;

    let mut out = BytesMut::with_capacity(head.len() + inflated.len());
    out.extend_from_slice(head);
    out.extend_from_slice(&inflated);
    Ok(out.freeze())
}

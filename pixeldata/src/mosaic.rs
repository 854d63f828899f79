//! Unpacking of mosaic frames.
//!
//! A mosaic frame packs the slices of a volume
//! as tiles of a grid, row by row.
//! The size of each tile is the acquisition matrix,
//! and the number of slices comes from the vendor header
//! when the grid is not full.

use crate::{DecodeResult, FrameTooShortSnafu};
use dcmview_object::Image;
use snafu::ensure;

/// The layout of the tiles in a mosaic frame.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct MosaicLayout {
    /// The number of tile columns in the grid.
    pub grid_columns: u32,
    /// The number of tile rows in the grid.
    pub grid_rows: u32,
    /// The width of each tile in pixels.
    pub tile_width: u32,
    /// The height of each tile in pixels.
    pub tile_height: u32,
    /// The number of tiles holding a slice.
    pub tiles: u32,
    /// The size of a pixel in bytes.
    pub pixel_size: usize,
}

impl MosaicLayout {
    /// Determine the mosaic layout of an image.
    pub fn of(image: &Image) -> Self {
        let grid_columns = image.mosaic_cols();
        let grid_rows = image.mosaic_rows();
        let pixel_size = usize::from(image.samples_per_pixel())
            * ((usize::from(image.bits_allocated()) + 7) / 8);
        MosaicLayout {
            grid_columns,
            grid_rows,
            tile_width: image.columns() / grid_columns,
            tile_height: image.rows() / grid_rows,
            tiles: image
                .number_of_mosaic_images()
                .min(grid_columns * grid_rows),
            pixel_size,
        }
    }

    /// The size of a tile in bytes.
    pub fn tile_size(&self) -> usize {
        self.tile_width as usize * self.tile_height as usize * self.pixel_size
    }

    /// Split an interleaved mosaic frame into its tiles.
    pub fn split(&self, frame: &[u8]) -> DecodeResult<Vec<Vec<u8>>> {
        let row_size = self.tile_width as usize * self.pixel_size;
        let frame_row_size = row_size * self.grid_columns as usize;
        let expected = frame_row_size * self.tile_height as usize * self.grid_rows as usize;
        ensure!(
            frame.len() >= expected,
            FrameTooShortSnafu {
                expected,
                actual: frame.len(),
            }
        );

        let tiles = (0..self.tiles as usize)
            .map(|tile| {
                let grid_row = tile / self.grid_columns as usize;
                let grid_column = tile % self.grid_columns as usize;
                let mut out = Vec::with_capacity(self.tile_size());
                for y in 0..self.tile_height as usize {
                    let start = (grid_row * self.tile_height as usize + y) * frame_row_size
                        + grid_column * row_size;
                    out.extend_from_slice(&frame[start..start + row_size]);
                }
                out
            })
            .collect();
        Ok(tiles)
    }
}

/// Split a decoded mosaic frame of an image into its slices.
///
/// The frame must have interleaved samples.
pub fn mosaic_tiles(image: &Image, frame: &[u8]) -> DecodeResult<Vec<Vec<u8>>> {
    MosaicLayout::of(image).split(frame)
}

use bytes::Bytes;
use dcmview_object::{Image, LutDescriptor, PaletteChannel};

/// A decoded frame,
/// along with the parameters to display it.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameDescriptor {
    /// The index of the frame in the image.
    pub frame: u32,
    /// The raw samples of the frame.
    pub data: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub samples_per_pixel: u16,
    pub bits_allocated: u16,
    pub bits_stored: u16,
    pub signed: bool,
    /// Whether multi-byte samples in `data` are little endian.
    pub little_endian: bool,
    /// Whether the color samples in `data` are stored in planes.
    pub planar: bool,
    pub photometric_interpretation: String,
    pub slope: f64,
    pub intercept: f64,
    pub window_center: Option<f64>,
    pub window_width: Option<f64>,
    /// The descriptor of the palette color lookup tables.
    pub lut_descriptor: Option<LutDescriptor>,
    /// The red, green and blue palette color lookup tables.
    pub lut_data: Option<[Bytes; 3]>,
    /// Whether low sample values are to be displayed bright
    /// (`MONOCHROME1`).
    pub invert: bool,
}

impl FrameDescriptor {
    pub(crate) fn new(
        image: &Image,
        frame: u32,
        data: Vec<u8>,
        little_endian: bool,
        planar: bool,
    ) -> Self {
        let photometric_interpretation = image.photometric_interpretation().to_string();
        let palette = photometric_interpretation == "PALETTE COLOR";
        let lut_descriptor = palette
            .then(|| image.palette_descriptor(PaletteChannel::Red))
            .flatten();
        let lut_data = if palette {
            match (
                image.palette_data(PaletteChannel::Red),
                image.palette_data(PaletteChannel::Green),
                image.palette_data(PaletteChannel::Blue),
            ) {
                (Some(r), Some(g), Some(b)) => Some([r.clone(), g.clone(), b.clone()]),
                _ => None,
            }
        } else {
            None
        };

        FrameDescriptor {
            frame,
            data,
            width: image.columns(),
            height: image.rows(),
            samples_per_pixel: image.samples_per_pixel(),
            bits_allocated: image.bits_allocated(),
            bits_stored: image.bits_stored(),
            signed: image.is_signed(),
            little_endian,
            planar,
            invert: photometric_interpretation == "MONOCHROME1",
            photometric_interpretation,
            slope: image.data_scale_slope(frame),
            intercept: image.data_scale_intercept(frame),
            window_center: image.window_center(),
            window_width: image.window_width(),
            lut_descriptor,
            lut_data,
        }
    }

    /// Whether the frame is described by a palette color lookup table.
    pub fn has_palette(&self) -> bool {
        self.lut_descriptor.is_some() && self.lut_data.is_some()
    }
}

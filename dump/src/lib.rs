//! DICOM image dumping library
//!
//! This is a helper library
//! for printing the contents of parsed DICOM images,
//! their decoded frames and their series
//! in a human readable way.
//!
//! # Examples
//!
//! ```no_run
//! use dcmview_object::open_file;
//! use dcmview_dump::{ColorMode, DumpOptions};
//!
//! let image = open_file("path/to/file.dcm")?;
//! DumpOptions::new()
//!     .width(100)
//!     .color_mode(ColorMode::Never)
//!     .dump_image(&image)?;
//! # Result::<(), Box<dyn std::error::Error>>::Ok(())
//! ```
use dcmview_core::{DataElement, Tag, TransferSyntax, Value, VR};
use dcmview_dictionary_std::StandardDataDictionary;
use dcmview_object::Image;
use dcmview_pixeldata::FrameDescriptor;
use dcmview_series::Series;
use owo_colors::*;
use std::borrow::Cow;
use std::fmt::{self, Display, Formatter};
use std::io::{stdout, Result as IoResult, Write};
use std::str::FromStr;

/// Options and flags to configure how to dump a DICOM image.
///
/// # Example
///
/// ```no_run
/// use dcmview_object::open_file;
/// use dcmview_dump::{ColorMode, DumpOptions};
///
/// let image = open_file("/path_to_file")?;
/// DumpOptions::new()
///     // maximum 120 characters per line
///     .width(120)
///     // no limit for text values
///     .no_text_limit(true)
///     .color_mode(ColorMode::Never)
///     .dump_image(&image)?;
/// # Result::<(), Box<dyn std::error::Error>>::Ok(())
/// ```
#[derive(Debug, Default, Clone, PartialEq)]
#[non_exhaustive]
pub struct DumpOptions {
    /// whether to produce colored output
    pub color: ColorMode,
    /// the console width to assume when trimming long values
    pub width: Option<u32>,
    /// never trim out long text values
    pub no_text_limit: bool,
    /// never trim out any values (implies `no_text_limit`)
    pub no_limit: bool,
}

impl DumpOptions {
    pub fn new() -> Self {
        Default::default()
    }

    /// Set the maximum output width in number of characters.
    pub fn width(&mut self, width: u32) -> &mut Self {
        self.width = Some(width);
        self
    }

    /// Set the maximum output width to automatic,
    /// based on terminal size.
    ///
    /// If a terminal width could not be determined,
    /// the default width of 120 characters is used.
    pub fn width_auto(&mut self) -> &mut Self {
        self.width = None;
        self
    }

    /// Set whether to remove the maximum width restriction for text values.
    pub fn no_text_limit(&mut self, no_text_limit: bool) -> &mut Self {
        self.no_text_limit = no_text_limit;
        self
    }

    /// Set whether to remove the maximum width restriction
    /// for all values.
    pub fn no_limit(&mut self, no_limit: bool) -> &mut Self {
        self.no_limit = no_limit;
        self
    }

    /// Set the output color mode.
    pub fn color_mode(&mut self, color: ColorMode) -> &mut Self {
        self.color = color;
        self
    }

    /// Dump the elements of an image to standard output.
    pub fn dump_image(&self, image: &Image) -> IoResult<()> {
        self.dump_image_impl(stdout(), image, true)
    }

    /// Dump the elements of an image to the given writer.
    pub fn dump_image_to(&self, to: impl Write, image: &Image) -> IoResult<()> {
        self.dump_image_impl(to, image, false)
    }

    fn dump_image_impl(&self, mut to: impl Write, image: &Image, to_stdout: bool) -> IoResult<()> {
        self.set_color_override(to_stdout);
        let width = determine_width(self.width);
        let limits = Limits {
            width,
            no_text_limit: self.no_text_limit,
            no_limit: self.no_limit,
        };

        let ts = image.transfer_syntax().unwrap_or("");
        match TransferSyntax::from_uid(ts) {
            Some(ts) => writeln!(
                to,
                "{}: {} ({})",
                "Transfer Syntax".if_supports_color(Stream::Stdout, |v| v.bold()),
                ts.uid,
                ts.name
            )?,
            None => writeln!(
                to,
                "{}: {} («UNKNOWN»)",
                "Transfer Syntax".if_supports_color(Stream::Stdout, |v| v.bold()),
                ts
            )?,
        }
        writeln!(to, "{:-<58}", "")?;

        for element in image.elements() {
            dump_element(&mut to, element, 0, &limits)?;
        }
        Ok(())
    }

    /// Print the descriptor of a decoded frame to the given writer.
    pub fn describe_frame_to(&self, mut to: impl Write, frame: &FrameDescriptor) -> IoResult<()> {
        self.set_color_override(false);
        let field = |name: &'static str| {
            name.if_supports_color(Stream::Stdout, |v| v.bold())
                .to_string()
        };
        writeln!(to, "{}: {}", field("Frame"), frame.frame)?;
        writeln!(
            to,
            "{}: {} x {}, {} sample(s) per pixel",
            field("Dimensions"),
            frame.width,
            frame.height,
            frame.samples_per_pixel
        )?;
        writeln!(
            to,
            "{}: {} allocated, {} stored, {}",
            field("Bits"),
            frame.bits_allocated,
            frame.bits_stored,
            if frame.signed { "signed" } else { "unsigned" }
        )?;
        writeln!(
            to,
            "{}: {}{}",
            field("Photometric Interpretation"),
            frame.photometric_interpretation,
            if frame.invert { " (inverted)" } else { "" }
        )?;
        writeln!(
            to,
            "{}: {}, {}",
            field("Layout"),
            if frame.planar { "planar" } else { "interleaved" },
            if frame.little_endian {
                "little endian"
            } else {
                "big endian"
            }
        )?;
        writeln!(
            to,
            "{}: slope {}, intercept {}",
            field("Rescale"),
            frame.slope,
            frame.intercept
        )?;
        if let (Some(center), Some(width)) = (frame.window_center, frame.window_width) {
            writeln!(to, "{}: center {}, width {}", field("Window"), center, width)?;
        }
        if let Some(lut) = &frame.lut_descriptor {
            writeln!(
                to,
                "{}: {} entries from {}, {} bits",
                field("Palette"),
                lut.entries,
                lut.first_mapped,
                lut.bits
            )?;
        }
        let limit = Some(determine_width(self.width).saturating_sub(20)).filter(|_| !self.no_limit);
        writeln!(
            to,
            "{} ({} bytes): {}",
            field("Data"),
            frame.data.len(),
            bytes_summary(&frame.data, limit)
        )?;
        Ok(())
    }

    /// Print the order and orientation of a built series to the given writer.
    pub fn describe_series_to(&self, mut to: impl Write, series: &Series) -> IoResult<()> {
        self.set_color_override(false);
        let field = |name: &'static str| {
            name.if_supports_color(Stream::Stdout, |v| v.bold())
                .to_string()
        };
        writeln!(to, "{}: {}", field("Series"), series.name())?;
        writeln!(to, "{}: {}", field("Images"), series.len())?;

        let mut kind = Vec::new();
        if series.is_mosaic() {
            kind.push("mosaic");
        }
        if series.is_compressed() {
            kind.push("compressed");
        }
        if series.is_multi_frame_volume() {
            kind.push("multi-frame volume");
        }
        if series.is_multi_frame_timeseries() {
            kind.push("multi-frame time series");
        }
        if series.is_implicit_timeseries() {
            kind.push("implicit time series");
        }
        if kind.is_empty() {
            kind.push("volume");
        }
        writeln!(to, "{}: {}", field("Kind"), kind.join(", "))?;
        writeln!(to, "{}: {}", field("Frames"), series.number_of_frames())?;

        if let (Ok(dir), Ok(sense)) = (series.slice_dir(), series.slice_sense()) {
            writeln!(
                to,
                "{}: {}, {}",
                field("Slices"),
                dir,
                if sense { "reversed" } else { "forward" }
            )?;
        }
        if let Ok(order) = series.get_order() {
            writeln!(
                to,
                "{}: {}",
                field("Order"),
                format_value_list(order, None, false)
            )?;
        }
        Ok(())
    }

    fn set_color_override(&self, to_stdout: bool) {
        match (self.color, to_stdout) {
            (ColorMode::Never, _) | (ColorMode::Auto, false) => owo_colors::set_override(false),
            (ColorMode::Always, _) => owo_colors::set_override(true),
            (ColorMode::Auto, true) => owo_colors::unset_override(),
        }
    }
}

/// Enumeration of output coloring modes.
#[derive(Debug, Default, Copy, Clone, Eq, Hash, PartialEq)]
pub enum ColorMode {
    /// Produce colored output if the destination is a terminal.
    /// Output to other writers is never colored.
    #[default]
    Auto,
    /// Never produce colored output.
    Never,
    /// Always produce colored output.
    Always,
}

impl ColorMode {
    const ALL: [ColorMode; 3] = [ColorMode::Auto, ColorMode::Never, ColorMode::Always];

    /// The name of the mode, as accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            ColorMode::Auto => "auto",
            ColorMode::Never => "never",
            ColorMode::Always => "always",
        }
    }
}

impl Display for ColorMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for ColorMode {
    type Err = ColorModeError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        ColorMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == name)
            .ok_or(ColorModeError)
    }
}

/// The error raised when providing an invalid color mode.
#[derive(Debug, Default, Copy, Clone, Eq, Hash, PartialEq)]
pub struct ColorModeError;

impl Display for ColorModeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("invalid color mode")
    }
}

impl std::error::Error for ColorModeError {}

#[derive(Debug, Clone, Copy)]
struct Limits {
    width: u32,
    no_text_limit: bool,
    no_limit: bool,
}

impl Limits {
    fn for_value(&self, vr: VR, depth: u32) -> Option<u32> {
        let textual = matches!(
            vr,
            VR::AE
                | VR::AS
                | VR::CS
                | VR::DA
                | VR::DS
                | VR::DT
                | VR::IS
                | VR::LO
                | VR::LT
                | VR::PN
                | VR::SH
                | VR::ST
                | VR::TM
                | VR::UC
                | VR::UI
                | VR::UR
                | VR::UT
        );
        if self.no_limit || (self.no_text_limit && textual) {
            None
        } else {
            Some(self.width.saturating_sub(72 + depth * 2))
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Style {
    Tag,
    Name,
    Number,
    Text,
    Time,
}

/// A value painted in the style of its kind.
/// Padding applies before coloring.
#[derive(Clone, Debug, PartialEq)]
struct Painted<T>(Style, T);

impl<T: Display> Display for Painted<T> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let text = match f.width() {
            Some(width) => format!("{:width$}", self.1),
            None => self.1.to_string(),
        };
        let out = Stream::Stdout;
        match self.0 {
            Style::Tag => write!(f, "{}", text.if_supports_color(out, |v| v.dimmed())),
            Style::Name => write!(f, "{}", text.if_supports_color(out, |v| v.bold())),
            Style::Number => write!(f, "{}", text.if_supports_color(out, |v| v.cyan())),
            Style::Text => write!(f, "{}", text.if_supports_color(out, |v| v.yellow())),
            Style::Time => write!(f, "{}", text.if_supports_color(out, |v| v.green())),
        }
    }
}

fn no_value() -> Painted<String> {
    Painted(Style::Text, "(no value)".to_string())
}

/// Dump the elements of an image to stdout.
pub fn dump_image(image: &Image) -> IoResult<()> {
    DumpOptions::new().dump_image(image)
}

/// Dump the elements of an image to the given writer.
pub fn dump_image_to(to: impl Write, image: &Image) -> IoResult<()> {
    DumpOptions::new().dump_image_to(to, image)
}

#[inline]
fn whitespace_or_null(c: char) -> bool {
    c.is_whitespace() || c == '\0'
}

fn description_of(tag: Tag) -> Cow<'static, str> {
    match StandardDataDictionary.description_of(tag) {
        Some(description) => description.into(),
        None if tag.is_private() => "Private Attribute".into(),
        None => "«Unknown Attribute»".into(),
    }
}

fn dump_element<W>(to: &mut W, element: &DataElement, depth: u32, limits: &Limits) -> IoResult<()>
where
    W: ?Sized + Write,
{
    let indent = "  ".repeat(depth as usize);
    let tag = element.tag();

    if element.is_item() {
        writeln!(
            to,
            "{}{} {} ({})",
            indent,
            Painted(Style::Tag, tag),
            Painted(Style::Name, "Item"),
            element.length()
        )?;
        if let Value::Bytes(fragment) = element.value() {
            // a fragment of encapsulated pixel data
            writeln!(
                to,
                "{}  {}",
                indent,
                bytes_summary(fragment, limits.for_value(VR::OB, depth))
            )?;
            return Ok(());
        }
        for nested in element.items().unwrap_or_default() {
            dump_element(&mut *to, nested, depth + 1, limits)?;
        }
        return Ok(());
    }
    if element.is_item_delimiter() || element.is_sequence_delimiter() {
        let name = if element.is_item_delimiter() {
            "ItemDelimitationItem"
        } else {
            "SequenceDelimitationItem"
        };
        return writeln!(
            to,
            "{}{} {}",
            indent,
            Painted(Style::Tag, tag),
            Painted(Style::Name, name)
        );
    }

    let description = description_of(tag);
    if let Some(items) = element.items() {
        let count = items.iter().filter(|item| item.is_item()).count();
        writeln!(
            to,
            "{}{} {:32} {} ({} Item{})",
            indent,
            Painted(Style::Tag, tag),
            Painted(Style::Name, description.as_ref()),
            element.vr(),
            count,
            if count == 1 { "" } else { "s" },
        )?;
        for item in items {
            dump_element(&mut *to, item, depth + 1, limits)?;
        }
        return Ok(());
    }

    writeln!(
        to,
        "{}{} {:32} {} ({},{:>4} bytes): {}",
        indent,
        Painted(Style::Tag, tag),
        Painted(Style::Name, description.as_ref()),
        element.vr(),
        element.value().multiplicity(),
        element.length(),
        value_summary(element.value(), element.vr(), limits.for_value(element.vr(), depth)),
    )?;

    if let Some(private) = element.private_data() {
        for line in private.lines() {
            writeln!(to, "{}    {}", indent, line)?;
        }
    }
    Ok(())
}

fn value_summary(value: &Value, vr: VR, max_characters: Option<u32>) -> Painted<String> {
    macro_rules! list {
        ($values:expr) => {
            format_value_list($values, max_characters, false)
        };
    }

    match value {
        Value::Empty => no_value(),
        Value::Bytes(bytes) => Painted(Style::Number, bytes_summary(bytes, max_characters)),
        Value::Strs(values) => Painted(
            Style::Text,
            format_value_list(
                values
                    .iter()
                    .map(|s| s.trim_end_matches(whitespace_or_null)),
                max_characters,
                !matches!(vr, VR::DS | VR::IS),
            ),
        ),
        Value::Dates(values) => Painted(Style::Time, list!(values)),
        Value::Tags(values) => Painted(Style::Text, list!(values)),
        Value::I16(values) => Painted(Style::Number, list!(values)),
        Value::U16(values) => Painted(Style::Number, list!(values)),
        Value::I32(values) => Painted(Style::Number, list!(values)),
        Value::U32(values) => Painted(Style::Number, list!(values)),
        Value::I64(values) => Painted(Style::Number, list!(values)),
        Value::U64(values) => Painted(Style::Number, list!(values)),
        Value::F32(values) => Painted(Style::Number, list!(values)),
        Value::F64(values) if vr == VR::TM => Painted(Style::Time, list!(values)),
        Value::F64(values) => Painted(Style::Number, list!(values)),
        Value::Items(items) => Painted(Style::Text, format!("[{} items]", items.len())),
    }
}

fn bytes_summary(data: &[u8], max_characters: Option<u32>) -> String {
    if data.is_empty() {
        return "(empty)".to_string();
    }
    // no need to format more bytes than fit in the line
    let shown = max_characters.map_or(data.len(), |max| data.len().min(max as usize / 2 + 1));
    let mut summary = format_value_list(
        data[..shown].iter().map(|n| format!("{:02X}", n)),
        max_characters,
        false,
    );
    if shown < data.len() && !summary.ends_with("...") {
        summary.push_str("...");
    }
    summary
}

fn format_value_list<I>(values: I, max_characters: Option<u32>, quoted: bool) -> String
where
    I: IntoIterator,
    I::IntoIter: ExactSizeIterator,
    I::Item: Display,
{
    let values = values.into_iter();
    let bracketed = values.len() > 1;
    let budget = max_characters.map(|max| max as usize);
    let mut out = String::new();
    if bracketed {
        out.push('[');
    }
    for (i, value) in values.enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        let shown = escape_control(&value.to_string());
        if quoted {
            out.push('"');
            out.push_str(&shown.replace('"', "\\\""));
            out.push('"');
        } else {
            out.push_str(&shown);
        }
        if budget.map_or(false, |max| out.chars().count() > max) {
            break;
        }
    }
    if bracketed {
        out.push(']');
    }
    match max_characters {
        Some(max) => cut_str(&out, max).into_owned(),
        None => out,
    }
}

/// Replace control characters with visible symbols.
fn escape_control(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\n' => '␊',
            '\r' => '␍',
            '\0' => '␀',
            c if c.is_control() => '�',
            c => c,
        })
        .collect()
}

fn cut_str(s: &str, max_characters: u32) -> Cow<str> {
    let keep = max_characters.saturating_sub(3) as usize;
    match s.char_indices().nth(keep) {
        Some((end, _)) => format!("{}...", &s[..end]).into(),
        None => s.into(),
    }
}

fn determine_width(user_width: Option<u32>) -> u32 {
    user_width
        .or_else(|| terminal_size::terminal_size().map(|(width, _)| u32::from(width.0)))
        .unwrap_or(120)
}

#[cfg(test)]
mod tests {
    use super::{cut_str, format_value_list, whitespace_or_null};
    use pretty_assertions::assert_eq;

    #[test]
    fn trims_all_whitespace() {
        assert_eq!("   ".trim_end_matches(whitespace_or_null), "");
        assert_eq!("\0".trim_end_matches(whitespace_or_null), "");
        assert_eq!("1.4.5.6\0".trim_end_matches(whitespace_or_null), "1.4.5.6");
        assert_eq!("MR ".trim_end_matches(whitespace_or_null), "MR");
    }

    #[test]
    fn value_lists() {
        assert_eq!(format_value_list([1, 2, 3], None, false), "[1, 2, 3]");
        assert_eq!(format_value_list(["MR"], None, true), "\"MR\"");
        assert_eq!(format_value_list(["a\nb"], None, false), "a␊b");
        assert_eq!(format_value_list(0..100, Some(12), false), "[0, 1, 2,...");
    }

    #[test]
    fn cuts_long_text() {
        assert_eq!(cut_str("abcdefgh", 6), "abc...");
        assert_eq!(cut_str("abc", 6), "abc");
    }
}

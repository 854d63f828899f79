//! Conversion of raw value bytes into typed values,
//! driven by the value representation.

use super::{DicomDate, Value, C};
use crate::header::{Tag, VR};
use crate::text::SpecificCharacterSet;
use byteordered::byteorder::{BigEndian, ByteOrder, LittleEndian};
use bytes::Bytes;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use tracing::trace;

/// Options for converting raw values into typed values.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct ConvertOptions {
    /// Convert time values (TM) to milliseconds since midnight
    /// instead of keeping them as text.
    pub time_as_millis: bool,
    /// Try to interpret raw private values with the known
    /// private block readers.
    pub read_private: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        ConvertOptions {
            time_as_millis: false,
            read_private: true,
        }
    }
}

impl ConvertOptions {
    /// Create the default set of conversion options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether time values are converted to milliseconds since midnight.
    pub fn time_as_millis(mut self, time_as_millis: bool) -> Self {
        self.time_as_millis = time_as_millis;
        self
    }

    /// Set whether raw private values are interpreted.
    pub fn read_private(mut self, read_private: bool) -> Self {
        self.read_private = read_private;
        self
    }
}

/// Convert the raw bytes of a value into a typed value,
/// according to its value representation.
///
/// Conversion never fails.
/// Binary numbers are read at the given byte order,
/// ignoring any trailing bytes which do not make a full number.
/// Text is decoded with the given character set.
pub fn convert(
    vr: VR,
    raw: &Bytes,
    little_endian: bool,
    charset: SpecificCharacterSet,
    options: &ConvertOptions,
) -> Value {
    if raw.is_empty() {
        return Value::Empty;
    }
    if vr.is_raw() {
        return Value::Bytes(raw.clone());
    }

    match vr {
        VR::AE | VR::AS | VR::CS | VR::LO | VR::SH | VR::UC | VR::UI => {
            Value::Strs(multi_string(raw, charset))
        }
        VR::LT | VR::ST | VR::UR => Value::Strs(single_string(raw, charset)),
        VR::PN => Value::Strs(
            multi_string(raw, charset)
                .into_iter()
                .map(|name| name.replace('^', " ").trim().to_string())
                .collect(),
        ),
        VR::DA => Value::Dates(
            multi_string(raw, charset)
                .into_iter()
                .map(|text| parse_date(&text).map_or(DicomDate::Text(text), DicomDate::Date))
                .collect(),
        ),
        VR::DT => Value::Dates(
            multi_string(raw, charset)
                .into_iter()
                .map(|text| {
                    parse_datetime(&text).map_or(DicomDate::Text(text), DicomDate::DateTime)
                })
                .collect(),
        ),
        VR::TM => {
            let times = multi_string(raw, charset);
            if options.time_as_millis {
                let millis: Option<C<f64>> = times.iter().map(|t| time_to_millis(t)).collect();
                if let Some(millis) = millis {
                    return Value::F64(millis);
                }
                trace!("Time value {:?} kept as text", times);
            }
            Value::Strs(times)
        }
        VR::DS => {
            let parts = numeric_strings(raw, charset);
            let parsed: Option<C<f64>> = parts.iter().map(|s| s.parse::<f64>().ok()).collect();
            match parsed {
                Some(numbers) => Value::F64(numbers),
                None => Value::Strs(parts),
            }
        }
        VR::IS => {
            let parts = numeric_strings(raw, charset);
            let parsed: Option<C<i64>> = parts
                .iter()
                .map(|s| {
                    s.parse::<i64>()
                        .ok()
                        .or_else(|| s.parse::<f64>().ok().map(|f| f as i64))
                })
                .collect();
            match parsed {
                Some(numbers) => Value::I64(numbers),
                None => Value::Strs(parts),
            }
        }
        VR::SS => Value::I16(read_numbers(raw, 2, |b| read_i16(b, little_endian))),
        VR::US => Value::U16(read_numbers(raw, 2, |b| read_u16(b, little_endian))),
        VR::SL => Value::I32(read_numbers(raw, 4, |b| read_i32(b, little_endian))),
        VR::UL => Value::U32(read_numbers(raw, 4, |b| read_u32(b, little_endian))),
        VR::SV => Value::I64(read_numbers(raw, 8, |b| read_i64(b, little_endian))),
        VR::UV => Value::U64(read_numbers(raw, 8, |b| read_u64(b, little_endian))),
        VR::FL => Value::F32(read_numbers(raw, 4, |b| read_f32(b, little_endian))),
        VR::FD => Value::F64(read_numbers(raw, 8, |b| read_f64(b, little_endian))),
        VR::AT => Value::Tags(read_numbers(raw, 4, |b| {
            Tag(read_u16(&b[..2], little_endian), read_u16(&b[2..], little_endian))
        })),
        // raw VRs were handled above
        _ => Value::Bytes(raw.clone()),
    }
}

fn read_numbers<T>(raw: &[u8], size: usize, read: impl Fn(&[u8]) -> T) -> C<T> {
    if raw.len() % size != 0 {
        trace!(
            "Ignoring {} trailing bytes of a binary value",
            raw.len() % size
        );
    }
    raw.chunks_exact(size).map(read).collect()
}

macro_rules! endian_reader {
    ($name: ident, $ty: ty, $method: ident) => {
        fn $name(bytes: &[u8], little_endian: bool) -> $ty {
            if little_endian {
                LittleEndian::$method(bytes)
            } else {
                BigEndian::$method(bytes)
            }
        }
    };
}

endian_reader!(read_u16, u16, read_u16);
endian_reader!(read_i16, i16, read_i16);
endian_reader!(read_u32, u32, read_u32);
endian_reader!(read_i32, i32, read_i32);
endian_reader!(read_u64, u64, read_u64);
endian_reader!(read_i64, i64, read_i64);
endian_reader!(read_f32, f32, read_f32);
endian_reader!(read_f64, f64, read_f64);

/// Remove trailing padding (spaces and null characters)
/// and leading spaces from a decoded string.
fn trim_value(text: &str) -> &str {
    text.trim_end_matches(|c: char| c == '\0' || c == ' ')
        .trim_start_matches(' ')
}

fn multi_string(raw: &[u8], charset: SpecificCharacterSet) -> C<String> {
    let text = charset.decode(raw);
    text.split('\\')
        .map(|part| trim_value(part).to_string())
        .collect()
}

fn single_string(raw: &[u8], charset: SpecificCharacterSet) -> C<String> {
    let text = charset.decode(raw);
    let mut out = C::new();
    out.push(text.trim_end_matches(['\0', ' ']).to_string());
    out
}

fn numeric_strings(raw: &[u8], charset: SpecificCharacterSet) -> C<String> {
    multi_string(raw, charset)
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Parse a DICOM date, either in the standard `YYYYMMDD` form
/// or in the legacy dot-delimited `YYYY.MM.DD` form.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if text.len() == 8 && text.bytes().all(|b| b.is_ascii_digit()) {
        return NaiveDate::parse_from_str(text, "%Y%m%d").ok();
    }
    NaiveDate::parse_from_str(text, "%Y.%m.%d").ok()
}

/// Parse a DICOM date-time (`YYYYMMDDHHMMSS.FFFFFF&ZZXX`) down to seconds.
///
/// Hours, minutes and seconds may be omitted.
/// Fractional seconds and the UTC offset suffix are ignored.
pub fn parse_datetime(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    let digits: String = text
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .take(14)
        .collect();
    if digits.len() < 8 || digits.len() % 2 != 0 {
        return None;
    }
    let date = NaiveDate::parse_from_str(&digits[..8], "%Y%m%d").ok()?;
    let field = |range: std::ops::Range<usize>| -> Option<u32> {
        digits.get(range).map_or(Some(0), |s| s.parse().ok())
    };
    let time = NaiveTime::from_hms_opt(field(8..10)?, field(10..12)?, field(12..14)?)?;
    Some(date.and_time(time))
}

/// Convert a DICOM time (`HHMMSS.FFFFFF`, or the legacy `HH:MM:SS.FFFFFF`)
/// to milliseconds since midnight.
///
/// Minutes, seconds and the fraction may be omitted.
pub fn time_to_millis(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    let (clock, fraction) = match text.split_once('.') {
        Some((clock, fraction)) => (clock, Some(fraction)),
        None => (text, None),
    };
    let clock: String = clock.chars().filter(|&c| c != ':').collect();
    if clock.is_empty() || clock.len() % 2 != 0 || clock.len() > 6 {
        return None;
    }
    if !clock.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let field = |i: usize| -> f64 {
        clock
            .get(i..i + 2)
            .and_then(|s| s.parse::<f64>().ok())
            .unwrap_or(0.)
    };
    let (hours, minutes, seconds) = (field(0), field(2), field(4));
    if hours >= 24. || minutes >= 60. || seconds >= 61. {
        return None;
    }
    let fraction = match fraction {
        Some(f) if !f.is_empty() => format!("0.{}", f).parse::<f64>().ok()?,
        _ => 0.,
    };
    Some(((hours * 60. + minutes) * 60. + seconds + fraction) * 1000.)
}

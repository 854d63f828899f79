//! This module includes the typed value union of a parsed data element
//! and the conversion of raw value bytes into it.
//!
//! A value is either a raw byte span over the source buffer,
//! an ordered sequence of numbers, strings, dates or attribute tags,
//! or an ordered sequence of nested data elements
//! when the element is a sequence or an item.

use crate::element::DataElement;
use crate::header::Tag;
use bytes::Bytes;
use chrono::{NaiveDate, NaiveDateTime};
use num_traits::NumCast;
use smallvec::SmallVec;
use std::fmt;

mod convert;

pub use self::convert::{convert, parse_date, parse_datetime, time_to_millis, ConvertOptions};

/// An aggregation of one or more elements in a value.
pub type C<T> = SmallVec<[T; 2]>;

/// A date or date-time value.
///
/// Dates which could not be parsed are kept
/// as their original (trimmed) text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DicomDate {
    /// A calendar date (DA).
    Date(NaiveDate),
    /// A date and time of day, down to seconds (DT).
    DateTime(NaiveDateTime),
    /// The raw text of a date which could not be parsed.
    Text(String),
}

impl fmt::Display for DicomDate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DicomDate::Date(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            DicomDate::DateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S")),
            DicomDate::Text(text) => f.write_str(text),
        }
    }
}

/// The value of a parsed data element.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// No value (zero length).
    Empty,
    /// A raw byte span, sharing the source buffer.
    Bytes(Bytes),
    /// A sequence of text values.
    Strs(C<String>),
    /// A sequence of dates or date-times.
    Dates(C<DicomDate>),
    /// A sequence of attribute tags (AT).
    Tags(C<Tag>),
    /// A sequence of signed 16-bit integers (SS).
    I16(C<i16>),
    /// A sequence of unsigned 16-bit integers (US).
    U16(C<u16>),
    /// A sequence of signed 32-bit integers (SL).
    I32(C<i32>),
    /// A sequence of unsigned 32-bit integers (UL).
    U32(C<u32>),
    /// A sequence of signed 64-bit integers (SV, IS).
    I64(C<i64>),
    /// A sequence of unsigned 64-bit integers (UV).
    U64(C<u64>),
    /// A sequence of single precision floats (FL).
    F32(C<f32>),
    /// A sequence of double precision floats (FD, DS, TM in milliseconds).
    F64(C<f64>),
    /// A sequence of nested data elements,
    /// held by sequences and by items.
    Items(Vec<DataElement>),
}

impl Value {
    /// Obtain the number of individual values.
    /// For raw bytes, this is 1 unless the span is empty.
    pub fn multiplicity(&self) -> usize {
        match self {
            Value::Empty => 0,
            Value::Bytes(b) => <usize as From<bool>>::from(!b.is_empty()),
            Value::Strs(c) => c.len(),
            Value::Dates(c) => c.len(),
            Value::Tags(c) => c.len(),
            Value::I16(c) => c.len(),
            Value::U16(c) => c.len(),
            Value::I32(c) => c.len(),
            Value::U32(c) => c.len(),
            Value::I64(c) => c.len(),
            Value::U64(c) => c.len(),
            Value::F32(c) => c.len(),
            Value::F64(c) => c.len(),
            Value::Items(items) => items.len(),
        }
    }

    /// Check whether the value holds nothing.
    pub fn is_empty(&self) -> bool {
        self.multiplicity() == 0
    }

    /// Retrieve the raw byte span, if this is a raw value.
    pub fn bytes(&self) -> Option<&Bytes> {
        match self {
            Value::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// Retrieve the nested elements, if this is a sequence or item value.
    pub fn items(&self) -> Option<&[DataElement]> {
        match self {
            Value::Items(items) => Some(items),
            _ => None,
        }
    }

    /// Retrieve all text values.
    pub fn strings(&self) -> Option<&[String]> {
        match self {
            Value::Strs(c) => Some(c),
            _ => None,
        }
    }

    /// Retrieve the first text value.
    pub fn string(&self) -> Option<&str> {
        self.strings()
            .and_then(|c| c.first())
            .map(|s| s.as_str())
    }

    /// Retrieve all date values.
    pub fn dates(&self) -> Option<&[DicomDate]> {
        match self {
            Value::Dates(c) => Some(c),
            _ => None,
        }
    }

    /// Retrieve all attribute tag values.
    pub fn tags(&self) -> Option<&[Tag]> {
        match self {
            Value::Tags(c) => Some(c),
            _ => None,
        }
    }

    /// Convert all numeric values to `f64`.
    ///
    /// Text values are parsed as decimal numbers,
    /// which covers values left unconverted
    /// because one of their components was not numeric.
    pub fn to_f64_vec(&self) -> Option<Vec<f64>> {
        fn all<T: Copy + Into<f64>>(c: &[T]) -> Option<Vec<f64>> {
            Some(c.iter().map(|&v| v.into()).collect())
        }
        match self {
            Value::I16(c) => all(c),
            Value::U16(c) => all(c),
            Value::I32(c) => all(c),
            Value::U32(c) => all(c),
            Value::F32(c) => all(c),
            Value::F64(c) => all(c),
            Value::I64(c) => Some(c.iter().map(|&v| v as f64).collect()),
            Value::U64(c) => Some(c.iter().map(|&v| v as f64).collect()),
            Value::Strs(c) => c.iter().map(|s| s.trim().parse().ok()).collect(),
            _ => None,
        }
    }

    /// Convert the first numeric value to `f64`.
    pub fn to_f64(&self) -> Option<f64> {
        self.to_f64_vec().and_then(|v| v.first().copied())
    }

    /// Convert all numeric values to the integer type `T`.
    ///
    /// Returns `None` if any of the values does not fit in `T`.
    /// Floating point values are truncated.
    pub fn to_multi_int<T: NumCast>(&self) -> Option<Vec<T>> {
        fn all<S: Copy + NumCast, T: NumCast>(c: &[S]) -> Option<Vec<T>> {
            c.iter().map(|&v| T::from(v)).collect()
        }
        match self {
            Value::I16(c) => all(c),
            Value::U16(c) => all(c),
            Value::I32(c) => all(c),
            Value::U32(c) => all(c),
            Value::I64(c) => all(c),
            Value::U64(c) => all(c),
            Value::F32(c) => all(c),
            Value::F64(c) => all(c),
            Value::Strs(c) => c
                .iter()
                .map(|s| s.trim().parse::<i64>().ok().and_then(T::from))
                .collect(),
            _ => None,
        }
    }

    /// Convert the first numeric value to the integer type `T`.
    pub fn to_int<T: NumCast>(&self) -> Option<T> {
        self.to_multi_int::<T>()
            .and_then(|v| v.into_iter().next())
    }

    /// Produce a single line textual representation of the value,
    /// joining multiple values with a backslash.
    pub fn to_display_string(&self) -> String {
        fn join<T: fmt::Display>(c: &[T]) -> String {
            c.iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join("\\")
        }
        match self {
            Value::Empty => String::new(),
            Value::Bytes(b) => format!("[{} bytes]", b.len()),
            Value::Strs(c) => join(c),
            Value::Dates(c) => join(c),
            Value::Tags(c) => join(c),
            Value::I16(c) => join(c),
            Value::U16(c) => join(c),
            Value::I32(c) => join(c),
            Value::U32(c) => join(c),
            Value::I64(c) => join(c),
            Value::U64(c) => join(c),
            Value::F32(c) => join(c),
            Value::F64(c) => join(c),
            Value::Items(items) => format!("[{} items]", items.len()),
        }
    }
}

//! This crate implements the standard DICOM data dictionary
//! used by dcmview, along with tag constants.
//!
//! - [`data_element`]: the run-time dictionary,
//!   mapping attribute tags and keywords
//!   to their value representation and description.
//!   It resolves the VR of elements in implicit VR data sets.
//! - [`tags`]: constants mapping an attribute alias to a DICOM tag,
//!   without incurring a look-up cost.
//!
//! The dictionary covers the attributes
//! relevant to image display and series reconstruction,
//! as collected from [DICOM PS3.6].
//! Unknown attributes resolve to `UN`.
//!
//! [DICOM PS3.6]: https://dicom.nema.org/medical/dicom/current/output/chtml/part06/ps3.6.html
pub mod data_element;
mod entries;
pub mod tags;

pub use data_element::{DictionaryEntry, StandardDataDictionary, StandardDataDictionaryRegistry};
pub use entries::ENTRIES;

use crate::entries::ENTRIES;
use dcmview_core::header::Tag;
use dcmview_core::VR;
use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::fmt::{Display, Formatter};

static DICT: Lazy<StandardDataDictionaryRegistry> =
    Lazy::new(|| StandardDataDictionaryRegistry::build(ENTRIES));

/// The global registry behind [`StandardDataDictionary`].
#[inline]
pub fn registry() -> &'static StandardDataDictionaryRegistry {
    &DICT
}

/// The range of tags covered by a dictionary entry.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TagRange {
    /// Only a single tag.
    Single(Tag),
    /// A tag repeating in 256 groups, `(ggxx,eeee)`.
    /// The `xx` portion is zeroed.
    Group100(Tag),
    /// The group length of any group, `(gggg,0000)`.
    GroupLength,
    /// A private creator element of any private group.
    PrivateCreator,
}

impl TagRange {
    /// The representative tag of this range, if any.
    pub fn inner(self) -> Option<Tag> {
        match self {
            TagRange::Single(tag) | TagRange::Group100(tag) => Some(tag),
            TagRange::GroupLength | TagRange::PrivateCreator => None,
        }
    }
}

/// An entry of the data dictionary.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct DictionaryEntry {
    /// The attribute tag or tag range.
    pub tag: TagRange,
    /// The alias of the attribute, with no spaces, usually in UpperCamelCase.
    pub alias: &'static str,
    /// The value representation of the attribute.
    pub vr: VR,
}

impl DictionaryEntry {
    /// A human readable description of the attribute,
    /// derived from its keyword by separating the words.
    ///
    /// ```
    /// # use dcmview_dictionary_std::StandardDataDictionary;
    /// let entry = StandardDataDictionary.by_name("SOPClassUID").unwrap();
    /// assert_eq!(entry.description(), "SOP Class UID");
    /// ```
    pub fn description(&self) -> String {
        describe_keyword(self.alias)
    }
}

/// Split an UpperCamelCase keyword into space-separated words,
/// keeping runs of capitals (acronyms) together.
fn describe_keyword(keyword: &str) -> String {
    let chars: Vec<char> = keyword.chars().collect();
    let mut out = String::with_capacity(keyword.len() + 8);
    for (i, &c) in chars.iter().enumerate() {
        if i > 0 && c.is_ascii_uppercase() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).map_or(false, |n| n.is_ascii_lowercase());
            if prev.is_ascii_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_ascii_uppercase() && next_is_lower)
            {
                out.push(' ');
            }
        }
        out.push(c);
    }
    out
}

/// The indices over the dictionary table,
/// built once on first use.
#[derive(Debug)]
pub struct StandardDataDictionaryRegistry {
    by_name: HashMap<&'static str, &'static DictionaryEntry>,
    by_tag: HashMap<Tag, &'static DictionaryEntry>,
    /// Tags of `(ggxx,eeee)` entries, with `xx` zeroed.
    repeating_groups: HashSet<Tag>,
}

impl StandardDataDictionaryRegistry {
    fn build(entries: &'static [DictionaryEntry]) -> Self {
        let mut registry = StandardDataDictionaryRegistry {
            by_name: HashMap::with_capacity(entries.len() + 1),
            by_tag: HashMap::with_capacity(entries.len()),
            repeating_groups: HashSet::new(),
        };
        for entry in entries {
            registry.by_name.insert(entry.alias, entry);
            match entry.tag {
                TagRange::Single(tag) => {
                    registry.by_tag.insert(tag, entry);
                }
                TagRange::Group100(tag) => {
                    registry.by_tag.insert(tag, entry);
                    registry.repeating_groups.insert(tag);
                }
                TagRange::GroupLength | TagRange::PrivateCreator => {}
            }
        }
        registry
            .by_name
            .insert(GROUP_LENGTH_ENTRY.alias, &GROUP_LENGTH_ENTRY);
        registry
    }

    /// The number of attributes with a tag of their own.
    pub fn len(&self) -> usize {
        self.by_tag.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.by_tag.is_empty()
    }

    fn resolve(&self, tag: Tag) -> Option<&'static DictionaryEntry> {
        if let Some(entry) = self.by_tag.get(&tag).copied() {
            return Some(entry);
        }
        let masked = Tag(tag.group() & 0xFF00, tag.element());
        if self.repeating_groups.contains(&masked) {
            return self.by_tag.get(&masked).copied();
        }
        if tag.is_private_creator() {
            Some(&PRIVATE_CREATOR_ENTRY)
        } else if tag.is_group_length() {
            Some(&GROUP_LENGTH_ENTRY)
        } else {
            None
        }
    }
}

static GROUP_LENGTH_ENTRY: DictionaryEntry = DictionaryEntry {
    tag: TagRange::GroupLength,
    alias: "GenericGroupLength",
    vr: VR::UL,
};

static PRIVATE_CREATOR_ENTRY: DictionaryEntry = DictionaryEntry {
    tag: TagRange::PrivateCreator,
    alias: "PrivateCreator",
    vr: VR::LO,
};

/// The standard data dictionary,
/// a handle to the lazily built global registry.
///
/// It resolves the value representation
/// of elements in implicit VR data sets,
/// and describes attributes for display.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StandardDataDictionary;

impl StandardDataDictionary {
    /// Fetch the entry of an attribute by its keyword.
    pub fn by_name(&self, name: &str) -> Option<&'static DictionaryEntry> {
        registry().by_name.get(name).copied()
    }

    /// Fetch the entry of an attribute by its tag.
    ///
    /// Besides the attributes in the table,
    /// this resolves repeating groups,
    /// private creator elements and group lengths.
    pub fn by_tag(&self, tag: Tag) -> Option<&'static DictionaryEntry> {
        registry().resolve(tag)
    }

    /// Resolve the value representation of an attribute,
    /// falling back to `UN` for unknown attributes.
    pub fn vr_of(&self, tag: Tag) -> VR {
        self.by_tag(tag).map_or(VR::UN, |entry| entry.vr)
    }

    /// Obtain a human readable description of an attribute, if known.
    pub fn description_of(&self, tag: Tag) -> Option<String> {
        self.by_tag(tag).map(|entry| entry.description())
    }
}

impl Display for StandardDataDictionary {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str("Standard DICOM Data Dictionary")
    }
}

#[cfg(test)]
mod tests {
    use super::{DictionaryEntry, StandardDataDictionary, TagRange::*};
    use dcmview_core::header::{Tag, VR};
    use rstest::rstest;

    #[test]
    fn lookup_by_name_and_tag() {
        let dict = StandardDataDictionary;

        assert_eq!(
            dict.by_name("PatientName"),
            Some(&DictionaryEntry {
                tag: Single(Tag(0x0010, 0x0010)),
                alias: "PatientName",
                vr: VR::PN,
            })
        );

        assert_eq!(
            dict.by_name("Modality"),
            Some(&DictionaryEntry {
                tag: Single(Tag(0x0008, 0x0060)),
                alias: "Modality",
                vr: VR::CS,
            })
        );

        let pixel_data = dict
            .by_tag(Tag(0x7FE0, 0x0010))
            .expect("Pixel Data attribute should exist");
        assert_eq!(pixel_data.vr, VR::OW);
        assert_eq!(pixel_data.description(), "Pixel Data");
    }

    #[test]
    fn repeating_groups_and_generic_entries() {
        let dict = StandardDataDictionary;
        let overlay_data = dict.by_tag(Tag(0x6002, 0x3000)).unwrap();
        assert_eq!(overlay_data.alias, "OverlayData");
        assert_eq!(dict.vr_of(Tag(0x0028, 0x0000)), VR::UL);
        assert_eq!(dict.vr_of(Tag(0x0029, 0x0010)), VR::LO);
        assert_eq!(dict.vr_of(Tag(0x0029, 0x1010)), VR::UN);
        assert_eq!(dict.vr_of(Tag(0x0009, 0x0000)), VR::UL);
    }

    #[rstest]
    #[case(Tag(0x0008, 0x0005), "Specific Character Set")]
    #[case(Tag(0x0020, 0x000E), "Series Instance UID")]
    #[case(Tag(0x0028, 0x1101), "Red Palette Color Lookup Table Descriptor")]
    #[case(Tag(0x0028, 0x1056), "VOILUT Function")]
    #[case(Tag(0x0018, 0x0060), "KVP")]
    #[case(Tag(0x0018, 0x1310), "Acquisition Matrix")]
    fn descriptions(#[case] tag: Tag, #[case] expected: &str) {
        assert_eq!(
            StandardDataDictionary.description_of(tag).as_deref(),
            Some(expected)
        );
    }
}

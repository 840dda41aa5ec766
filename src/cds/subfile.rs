use std::collections::BTreeMap;

use log::trace;

use super::{
    directory::SubfileType,
    header::{DATA_ELEMENT_SEPARATOR, SEGMENT_TERMINATOR},
};

/// Three-letter data element identifier (`DAQ`, `DCS`, ...).
pub type ElementId = [u8; 3];

/// Data elements of a subfile, keyed by identifier.
///
/// Values are stored trimmed. An element that appears more than once keeps
/// the value of its last occurrence.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Elements(BTreeMap<ElementId, String>);

impl Elements {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes the raw bytes of a subfile, as sliced from the document.
    ///
    /// The leading two bytes repeat the subfile type and the last byte is the
    /// segment terminator; both are skipped without being checked.
    pub fn decode(bytes: &[u8]) -> Self {
        let body = if bytes.len() < 3 {
            &[][..]
        } else {
            &bytes[2..bytes.len() - 1]
        };

        let mut result = Self::new();
        for line in body.split(|b| *b == DATA_ELEMENT_SEPARATOR) {
            match line {
                [a, b, c, value @ ..] => {
                    let value = String::from_utf8_lossy(value);
                    result.insert([*a, *b, *c], value.trim());
                }
                _ => trace!("skipping {} byte element line", line.len()),
            }
        }

        result
    }

    pub fn insert(&mut self, id: ElementId, value: impl Into<String>) -> Option<String> {
        self.0.insert(id, value.into())
    }

    /// Returns the value of the given element.
    ///
    /// `Some("")` means the element is present with an empty value.
    pub fn get(&self, id: &ElementId) -> Option<&str> {
        self.0.get(id).map(String::as_str)
    }

    pub fn contains(&self, id: &ElementId) -> bool {
        self.0.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl '_ + Iterator<Item = (&ElementId, &str)> {
        self.0.iter().map(|(k, v)| (k, v.as_str()))
    }
}

impl<V: Into<String>> FromIterator<(ElementId, V)> for Elements {
    fn from_iter<T: IntoIterator<Item = (ElementId, V)>>(iter: T) -> Self {
        let mut result = Self::new();
        for (id, value) in iter {
            result.insert(id, value);
        }
        result
    }
}

/// Decoded subfile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subfile {
    pub subfile_type: SubfileType,
    pub elements: Elements,
}

impl Subfile {
    pub fn decode(subfile_type: SubfileType, bytes: &[u8]) -> Self {
        let elements = Elements::decode(bytes);
        trace!(
            "decoded subfile `{subfile_type}` with {} elements",
            elements.len()
        );

        Self {
            subfile_type,
            elements,
        }
    }

    pub fn get(&self, id: &ElementId) -> Option<&str> {
        self.elements.get(id)
    }
}

/// Encodes subfile elements, in insertion order.
#[derive(Debug, Clone)]
pub struct SubfileBuilder {
    subfile_type: SubfileType,
    entries: Vec<(ElementId, String)>,
}

impl SubfileBuilder {
    pub fn new(subfile_type: SubfileType) -> Self {
        Self {
            subfile_type,
            entries: Vec::new(),
        }
    }

    pub fn element(mut self, id: &ElementId, value: impl Into<String>) -> Self {
        self.entries.push((*id, value.into()));
        self
    }

    pub fn subfile_type(&self) -> SubfileType {
        self.subfile_type
    }

    /// Encodes the subfile, type repeat included.
    pub fn encode(&self, buffer: &mut Vec<u8>) {
        buffer.extend(self.subfile_type.0);
        let last = self.entries.len().saturating_sub(1);
        for (i, (id, value)) in self.entries.iter().enumerate() {
            buffer.extend(id);
            buffer.extend(value.as_bytes());
            buffer.push(if i == last {
                SEGMENT_TERMINATOR
            } else {
                DATA_ELEMENT_SEPARATOR
            });
        }

        if self.entries.is_empty() {
            buffer.push(SEGMENT_TERMINATOR);
        }
    }

    /// Length of the encoded subfile.
    pub fn encoded_len(&self) -> usize {
        let body: usize = self.entries.iter().map(|(_, v)| 3 + v.len() + 1).sum();
        2 + body.max(1)
    }
}

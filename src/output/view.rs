//! Fixed-accessor record views shared by template and JSON output

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Read-only projection of one record behind a fixed set of named accessors
///
/// Templates resolve field references against [`RecordView::FIELDS`] when
/// they are compiled, and JSON output is produced from the same accessors
/// (see [`serialize_view`]), so table cells and JSON values never disagree.
pub trait RecordView: Serialize {
    /// Accessor names, in canonical order
    const FIELDS: &'static [&'static str];

    /// Format used when the caller passes an empty format string
    const DEFAULT_FORMAT: &'static str;

    /// Value of the accessor at `index` in [`RecordView::FIELDS`]
    ///
    /// Out-of-range indexes yield an empty string.
    fn field(&self, index: usize) -> &str;
}

/// Position of an accessor name in `V::FIELDS`
pub fn field_index<V: RecordView>(name: &str) -> Option<usize> {
    V::FIELDS.iter().position(|field| *field == name)
}

/// Serialize a view as a JSON object keyed by accessor names
pub fn serialize_view<V, S>(view: &V, serializer: S) -> Result<S::Ok, S::Error>
where
    V: RecordView,
    S: Serializer,
{
    let mut map = serializer.serialize_map(Some(V::FIELDS.len()))?;
    for (index, name) in V::FIELDS.iter().enumerate() {
        map.serialize_entry(name, view.field(index))?;
    }
    map.end()
}

/// Ordered mapping from accessor name to header label
///
/// Keys are unique; insertion order is the declared column order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderMap {
    entries: Vec<(String, String)>,
}

impl HeaderMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the label for a field, keeping its original position
    pub fn with(mut self, field: impl Into<String>, label: impl Into<String>) -> Self {
        self.insert(field, label);
        self
    }

    pub fn insert(&mut self, field: impl Into<String>, label: impl Into<String>) {
        let field = field.into();
        let label = label.into();
        match self.entries.iter_mut().find(|(f, _)| *f == field) {
            Some(entry) => entry.1 = label,
            None => self.entries.push((field, label)),
        }
    }

    /// Header label for a field, if mapped
    pub fn label(&self, field: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(f, _)| f == field)
            .map(|(_, label)| label.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in declared order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(f, l)| (f.as_str(), l.as_str()))
    }
}

impl<F, L> FromIterator<(F, L)> for HeaderMap
where
    F: Into<String>,
    L: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (F, L)>>(iter: I) -> Self {
        let mut headers = HeaderMap::new();
        for (field, label) in iter {
            headers.insert(field, label);
        }
        headers
    }
}

impl Serialize for HeaderMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (field, label) in &self.entries {
            map.serialize_entry(field, label)?;
        }
        map.end()
    }
}

/// Header labels laid out by a view's field indexes
///
/// A compiled template executed against this row produces the header line:
/// each field reference renders as its mapped label, unmapped fields as `""`.
#[derive(Debug)]
pub struct HeaderRow<'a> {
    labels: Vec<&'a str>,
    headers: &'a HeaderMap,
}

impl<'a> HeaderRow<'a> {
    pub fn new<V: RecordView>(headers: &'a HeaderMap) -> Self {
        let labels = V::FIELDS
            .iter()
            .map(|field| headers.label(field).unwrap_or(""))
            .collect();
        Self { labels, headers }
    }

    /// Label rendered in place of the field at `index`
    pub fn label(&self, index: usize) -> &str {
        self.labels.get(index).copied().unwrap_or("")
    }

    /// The mapping this row was built from
    pub fn headers(&self) -> &HeaderMap {
        self.headers
    }
}

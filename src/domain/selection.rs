//! Response fields a user can pick for display.

use std::fmt;
use std::str::FromStr;

/// One of the fields the BFHL service is expected to return
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseField {
    Alphabets,
    Numbers,
    HighestLowercaseAlphabet,
    FileValid,
    FileMimeType,
    FileSizeKb,
}

impl ResponseField {
    /// Every selectable field, in menu order
    pub const ALL: [ResponseField; 6] = [
        ResponseField::Alphabets,
        ResponseField::Numbers,
        ResponseField::HighestLowercaseAlphabet,
        ResponseField::FileValid,
        ResponseField::FileMimeType,
        ResponseField::FileSizeKb,
    ];

    /// Key as it appears in the response object
    pub fn key(&self) -> &'static str {
        match self {
            ResponseField::Alphabets => "alphabets",
            ResponseField::Numbers => "numbers",
            ResponseField::HighestLowercaseAlphabet => "highest_lowercase_alphabet",
            ResponseField::FileValid => "file_valid",
            ResponseField::FileMimeType => "file_mime_type",
            ResponseField::FileSizeKb => "file_size_kb",
        }
    }

    /// Human readable label
    pub fn label(&self) -> &'static str {
        match self {
            ResponseField::Alphabets => "Alphabets",
            ResponseField::Numbers => "Numbers",
            ResponseField::HighestLowercaseAlphabet => "Highest lowercase alphabet",
            ResponseField::FileValid => "File Valid",
            ResponseField::FileMimeType => "File MIME Type",
            ResponseField::FileSizeKb => "File Size (KB)",
        }
    }
}

impl fmt::Display for ResponseField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown field '{0}' (expected one of: {})", known_keys())]
pub struct UnknownField(pub String);

fn known_keys() -> String {
    ResponseField::ALL
        .iter()
        .map(|field| field.key())
        .collect::<Vec<_>>()
        .join(", ")
}

impl FromStr for ResponseField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ResponseField::ALL
            .into_iter()
            .find(|field| field.key() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// Ordered set of chosen fields.
///
/// Order is the order in which fields were chosen; a field appears at most once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSelection {
    fields: Vec<ResponseField>,
}

impl FieldSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selection containing every field in menu order
    pub fn all() -> Self {
        Self::from_iter(ResponseField::ALL)
    }

    /// Append a field. Returns false if it was already selected.
    pub fn insert(&mut self, field: ResponseField) -> bool {
        if self.contains(field) {
            return false;
        }
        self.fields.push(field);
        true
    }

    /// Returns false if the field was not selected.
    pub fn remove(&mut self, field: ResponseField) -> bool {
        let before = self.fields.len();
        self.fields.retain(|f| *f != field);
        self.fields.len() != before
    }

    pub fn toggle(&mut self, field: ResponseField) {
        if !self.remove(field) {
            self.fields.push(field);
        }
    }

    /// Replace the whole selection, keeping the first occurrence of duplicates
    pub fn replace(&mut self, fields: impl IntoIterator<Item = ResponseField>) {
        self.fields.clear();
        for field in fields {
            self.insert(field);
        }
    }

    pub fn contains(&self, field: ResponseField) -> bool {
        self.fields.contains(&field)
    }

    pub fn iter(&self) -> impl Iterator<Item = ResponseField> + '_ {
        self.fields.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FromIterator<ResponseField> for FieldSelection {
    fn from_iter<I: IntoIterator<Item = ResponseField>>(iter: I) -> Self {
        let mut selection = FieldSelection::new();
        selection.replace(iter);
        selection
    }
}

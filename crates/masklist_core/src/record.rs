use std::fmt;

/// Opaque pharmacy identifier, unique within a loaded feed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Point coordinates as published by the feed. Not used for filtering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    pub longitude: f64,
    pub latitude: f64,
}

/// One inventory entry. Immutable once loaded; filtering only selects.
#[derive(Debug, Clone, PartialEq)]
pub struct PharmacyRecord {
    pub id: RecordId,
    pub name: String,
    pub phone: String,
    pub address: String,
    /// `0` means out of stock, not unknown.
    pub mask_adult: u32,
    pub mask_child: u32,
    pub location: Location,
    /// Display string straight from the feed.
    pub updated_at: String,
}

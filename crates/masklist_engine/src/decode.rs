use std::collections::HashSet;

use masklist_core::{Location, PharmacyRecord, RecordId};
use serde::Deserialize;
use serde_json::Value;

/// Where the feature list sits inside the top-level feed object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordLocator {
    /// Look the collection up by key, e.g. `"features"` in GeoJSON.
    Key(String),
    /// Take the n-th member of the top-level object in document order.
    Position(usize),
}

impl Default for RecordLocator {
    fn default() -> Self {
        RecordLocator::Key("features".to_string())
    }
}

impl RecordLocator {
    fn describe(&self) -> String {
        match self {
            RecordLocator::Key(key) => format!("key {key:?}"),
            RecordLocator::Position(idx) => format!("position {idx}"),
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("body is not valid JSON: {0}")]
    InvalidJson(String),
    #[error("top-level document is not an object")]
    NotAnObject,
    #[error("record collection not found at {0}")]
    MissingCollection(String),
    #[error("record collection is not an array")]
    NotAnArray,
    #[error("record {index} is malformed: {message}")]
    InvalidRecord { index: usize, message: String },
    #[error("duplicate record id {0}")]
    DuplicateId(String),
}

#[derive(Deserialize)]
struct RawFeature {
    properties: RawProperties,
    geometry: RawGeometry,
}

#[derive(Deserialize)]
struct RawProperties {
    id: RawId,
    name: String,
    phone: String,
    address: String,
    mask_adult: u32,
    mask_child: u32,
    updated: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(serde_json::Number),
}

#[derive(Deserialize)]
struct RawGeometry {
    coordinates: Vec<f64>,
}

/// Decode a GeoJSON-shaped feed body into records.
///
/// Fails closed: a missing collection, a non-array collection, any malformed
/// feature, or a repeated id rejects the whole feed. An empty array is fine.
pub fn decode_feed(
    bytes: &[u8],
    locator: &RecordLocator,
) -> Result<Vec<PharmacyRecord>, DecodeError> {
    let document: Value =
        serde_json::from_slice(bytes).map_err(|err| DecodeError::InvalidJson(err.to_string()))?;
    let Value::Object(members) = document else {
        return Err(DecodeError::NotAnObject);
    };

    // Relies on serde_json's `preserve_order` for document order.
    let collection = match locator {
        RecordLocator::Key(key) => members
            .into_iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value),
        RecordLocator::Position(idx) => members.into_iter().nth(*idx).map(|(_, value)| value),
    }
    .ok_or_else(|| DecodeError::MissingCollection(locator.describe()))?;

    let Value::Array(items) = collection else {
        return Err(DecodeError::NotAnArray);
    };

    let mut seen = HashSet::with_capacity(items.len());
    let mut records = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        let record = normalize(index, item)?;
        if !seen.insert(record.id.clone()) {
            return Err(DecodeError::DuplicateId(record.id.to_string()));
        }
        records.push(record);
    }
    Ok(records)
}

fn normalize(index: usize, item: Value) -> Result<PharmacyRecord, DecodeError> {
    let invalid = |message: String| DecodeError::InvalidRecord { index, message };

    let raw: RawFeature = serde_json::from_value(item).map_err(|err| invalid(err.to_string()))?;
    let &[longitude, latitude, ..] = raw.geometry.coordinates.as_slice() else {
        return Err(invalid("coordinates need longitude and latitude".to_string()));
    };
    let props = raw.properties;
    let id = match props.id {
        RawId::Text(text) => text,
        RawId::Number(number) => number.to_string(),
    };

    Ok(PharmacyRecord {
        id: RecordId::new(id),
        name: props.name,
        phone: props.phone,
        address: props.address,
        mask_adult: props.mask_adult,
        mask_child: props.mask_child,
        location: Location {
            longitude,
            latitude,
        },
        updated_at: props.updated,
    })
}

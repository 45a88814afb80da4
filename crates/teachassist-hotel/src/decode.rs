// SPDX-FileCopyrightText: 2026 TeachAssist Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Boundary decoding for loosely shaped lookup responses.
//!
//! The lookup API returns either a bare list or an object wrapping a list
//! under one of several keys, and item fields vary by provider. Everything
//! is read through fixed priority lists.

use serde::Serialize;
use serde_json::Value;

/// Container keys tried for availability responses, in order.
pub const AVAILABILITY_KEYS: &[&str] = &["data", "results", "items", "hotels", "accommodations"];

/// Container keys tried for property autocomplete responses, in order.
pub const AUTOCOMPLETE_KEYS: &[&str] = &["data", "results", "items", "properties"];

const NAME_KEYS: &[&str] = &["name", "hotel_name", "title"];
const ID_KEYS: &[&str] = &["hotel_id", "id", "hotelId"];
const LAT_KEYS: &[&str] = &["lat", "latitude"];
const LON_KEYS: &[&str] = &["lon", "lng", "longitude"];

/// Object elements of a response.
///
/// A list yields its object elements. An object yields the object elements
/// of the first key in `keys` whose value is a list. Anything else is empty.
pub fn flatten_candidates(container: &Value, keys: &[&str]) -> Vec<Value> {
    let list = match container {
        Value::Array(items) => Some(items),
        Value::Object(map) => keys
            .iter()
            .find_map(|k| map.get(*k).and_then(Value::as_array)),
        _ => None,
    };

    list.map(|items| items.iter().filter(|i| i.is_object()).cloned().collect())
        .unwrap_or_default()
}

/// Identity and position of a hotel item.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HotelCandidate {
    pub name: Option<String>,
    pub hotel_id: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl HotelCandidate {
    /// Read name, id, and coordinates from an item.
    ///
    /// Coordinates come from a nested `location` object when it has them,
    /// otherwise from top-level fields. Numeric strings are parsed; anything
    /// unparseable becomes `None`.
    pub fn from_value(item: &Value) -> Self {
        let name = first_present(item, NAME_KEYS).and_then(|v| v.as_str().map(str::to_string));
        let hotel_id = first_present(item, ID_KEYS).and_then(id_string);

        let location = item.get("location").filter(|l| l.is_object());
        let coordinate = |keys: &[&str]| {
            location
                .and_then(|l| first_present(l, keys))
                .or_else(|| first_present(item, keys))
                .and_then(as_float)
        };

        Self {
            name,
            hotel_id,
            latitude: coordinate(LAT_KEYS),
            longitude: coordinate(LON_KEYS),
        }
    }

    /// Both coordinates, when known.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        Some((self.latitude?, self.longitude?))
    }
}

/// First non-null, non-empty value among `keys`.
fn first_present<'a>(item: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().find_map(|k| match item.get(*k) {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) if s.is_empty() => None,
        Some(v) => Some(v),
    })
}

/// Hotel id as a string; numeric ids are stringified.
pub(crate) fn id_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn as_float(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn list_keeps_only_objects() {
        let value = json!([{"name": "A"}, 3, "x", {"name": "B"}]);
        let items = flatten_candidates(&value, AVAILABILITY_KEYS);
        assert_eq!(items.len(), 2);
        assert_eq!(items[1]["name"], "B");
    }

    #[test]
    fn object_uses_first_list_key() {
        let value = json!({"data": "not a list", "results": [{"id": 1}], "hotels": [{"id": 2}]});
        let items = flatten_candidates(&value, AVAILABILITY_KEYS);
        assert_eq!(items, vec![json!({"id": 1})]);
    }

    #[test]
    fn autocomplete_reads_properties_key() {
        let value = json!({"properties": [{"name": "Grand"}]});
        assert_eq!(flatten_candidates(&value, AUTOCOMPLETE_KEYS).len(), 1);
        assert!(flatten_candidates(&value, AVAILABILITY_KEYS).is_empty());
    }

    #[test]
    fn scalars_flatten_to_nothing() {
        assert!(flatten_candidates(&json!(null), AVAILABILITY_KEYS).is_empty());
        assert!(flatten_candidates(&json!("hotels"), AVAILABILITY_KEYS).is_empty());
        assert!(flatten_candidates(&json!({"other": []}), AVAILABILITY_KEYS).is_empty());
    }

    #[test]
    fn candidate_from_nested_location() {
        let item = json!({
            "hotel_name": "Hotel Danieli",
            "hotelId": 4521,
            "location": {"latitude": "45.4337", "lng": 12.3413}
        });
        let c = HotelCandidate::from_value(&item);
        assert_eq!(c.name.as_deref(), Some("Hotel Danieli"));
        assert_eq!(c.hotel_id.as_deref(), Some("4521"));
        assert_eq!(c.coordinates(), Some((45.4337, 12.3413)));
    }

    #[test]
    fn candidate_from_top_level_coordinates() {
        let item = json!({"title": "Ca' Sagredo", "id": "cs-1", "lat": 45.44, "longitude": "12.33"});
        let c = HotelCandidate::from_value(&item);
        assert_eq!(c.name.as_deref(), Some("Ca' Sagredo"));
        assert_eq!(c.hotel_id.as_deref(), Some("cs-1"));
        assert_eq!(c.coordinates(), Some((45.44, 12.33)));
    }

    #[test]
    fn name_priority_and_empty_skips() {
        let item = json!({"name": "", "hotel_name": null, "title": "Fallback"});
        assert_eq!(HotelCandidate::from_value(&item).name.as_deref(), Some("Fallback"));
    }

    #[test]
    fn bad_coordinates_become_none() {
        let item = json!({"name": "X", "location": {"lat": "north", "lon": [1]}});
        let c = HotelCandidate::from_value(&item);
        assert_eq!(c.latitude, None);
        assert_eq!(c.longitude, None);
        assert_eq!(c.coordinates(), None);
    }

    #[test]
    fn non_string_name_is_none() {
        let item = json!({"name": 42});
        assert_eq!(HotelCandidate::from_value(&item).name, None);
    }
}

// SPDX-FileCopyrightText: 2026 TeachAssist Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Narrowing availability results to one hotel, block, or currency.

use serde::Serialize;
use serde_json::Value;

use crate::decode::id_string;

const ID_KEYS: &[&str] = &["hotel_id", "id", "hotelId"];
const CURRENCY_KEYS: &[&str] = &["currency", "price_currency", "purchaseCurrency"];

/// Optional constraints on availability items. Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AvailabilityFilter {
    pub hotel_id: Option<String>,
    pub block_id: Option<String>,
    pub currency: Option<String>,
}

impl AvailabilityFilter {
    pub fn is_empty(&self) -> bool {
        self.hotel_id.is_none() && self.block_id.is_none() && self.currency.is_none()
    }

    /// Whether one item satisfies every set constraint.
    pub fn matches(&self, item: &Value) -> bool {
        self.matches_hotel(item) && self.matches_block(item) && self.matches_currency(item)
    }

    /// Items satisfying the filter, in input order.
    pub fn apply(&self, items: &[Value]) -> Vec<Value> {
        items.iter().filter(|i| self.matches(i)).cloned().collect()
    }

    fn matches_hotel(&self, item: &Value) -> bool {
        let Some(wanted) = non_empty(&self.hotel_id) else {
            return true;
        };
        ID_KEYS
            .iter()
            .find_map(|k| item.get(*k).filter(|v| !v.is_null()))
            .and_then(id_string)
            .is_some_and(|id| id == wanted)
    }

    fn matches_block(&self, item: &Value) -> bool {
        match non_empty(&self.block_id) {
            Some(block) => serialized_contains(item, block),
            None => true,
        }
    }

    fn matches_currency(&self, item: &Value) -> bool {
        let Some(currency) = non_empty(&self.currency) else {
            return true;
        };
        let field_match = CURRENCY_KEYS.iter().any(|k| {
            item.get(*k)
                .and_then(Value::as_str)
                .is_some_and(|v| v.eq_ignore_ascii_case(currency))
        });
        field_match || serialized_contains(item, currency)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Substring test against the item's compact JSON text.
fn serialized_contains(item: &Value, needle: &str) -> bool {
    serde_json::to_string(item).is_ok_and(|text| text.contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn items() -> Vec<Value> {
        vec![
            json!({"hotel_id": "101", "currency": "eur", "blocks": [{"block_id": "B-7"}]}),
            json!({"id": 102, "price_currency": "USD", "rate": {"code": "B-9"}}),
            json!({"hotelId": "103", "note": "priced in GBP"}),
        ]
    }

    #[test]
    fn empty_filter_keeps_everything() {
        let filter = AvailabilityFilter::default();
        assert!(filter.is_empty());
        assert_eq!(filter.apply(&items()).len(), 3);
    }

    #[test]
    fn hotel_id_matches_numeric_and_string_ids() {
        let filter = AvailabilityFilter {
            hotel_id: Some("102".into()),
            ..Default::default()
        };
        let kept = filter.apply(&items());
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0]["id"], 102);
    }

    #[test]
    fn block_id_is_substring_of_serialized_item() {
        let filter = AvailabilityFilter {
            block_id: Some("B-7".into()),
            ..Default::default()
        };
        let kept = filter.apply(&items());
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0]["hotel_id"], "101");
    }

    #[test]
    fn currency_field_is_case_insensitive() {
        let filter = AvailabilityFilter {
            currency: Some("EUR".into()),
            ..Default::default()
        };
        assert_eq!(filter.apply(&items()).len(), 1);
    }

    #[test]
    fn currency_falls_back_to_substring() {
        let filter = AvailabilityFilter {
            currency: Some("GBP".into()),
            ..Default::default()
        };
        let kept = filter.apply(&items());
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0]["hotelId"], "103");
    }

    #[test]
    fn constraints_combine() {
        let filter = AvailabilityFilter {
            hotel_id: Some("101".into()),
            currency: Some("USD".into()),
            block_id: None,
        };
        assert!(filter.apply(&items()).is_empty());
    }

    #[test]
    fn empty_strings_are_ignored() {
        let filter = AvailabilityFilter {
            hotel_id: Some(String::new()),
            block_id: Some(String::new()),
            currency: Some(String::new()),
        };
        assert_eq!(filter.apply(&items()).len(), 3);
    }
}

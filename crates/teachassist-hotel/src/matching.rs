// SPDX-FileCopyrightText: 2026 TeachAssist Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fuzzy hotel name matching.

use serde_json::Value;

use crate::decode::HotelCandidate;

/// Lower-case, trim, and collapse internal whitespace.
pub fn normalize_name(value: &str) -> String {
    value
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Similarity of two names in `0.0..=1.0` after normalization.
///
/// Either name normalizing to empty scores 0.0.
pub fn score_name_match(term: &str, candidate: &str) -> f64 {
    let term = normalize_name(term);
    let candidate = normalize_name(candidate);
    if term.is_empty() || candidate.is_empty() {
        return 0.0;
    }
    strsim::normalized_levenshtein(&term, &candidate)
}

/// The item whose name best matches `term`.
///
/// Ties keep the earliest item. Items without a name score 0.0 but can
/// still be chosen when nothing scores higher.
pub fn select_best_match<'a>(items: &'a [Value], term: &str) -> Option<&'a Value> {
    let mut best: Option<(&Value, f64)> = None;
    for item in items {
        let name = HotelCandidate::from_value(item).name.unwrap_or_default();
        let score = score_name_match(term, &name);
        if best.is_none_or(|(_, s)| score > s) {
            best = Some((item, score));
        }
    }
    best.map(|(item, _)| item)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn normalize_collapses_whitespace() {
        assert_eq!(normalize_name("  Hotel   DANIELI \t Venice "), "hotel danieli venice");
        assert_eq!(normalize_name("   "), "");
    }

    #[test]
    fn identical_names_score_one() {
        assert_eq!(score_name_match("Hotel Danieli", "  hotel  danieli"), 1.0);
    }

    #[test]
    fn empty_scores_zero() {
        assert_eq!(score_name_match("", "Hotel"), 0.0);
        assert_eq!(score_name_match("Hotel", " "), 0.0);
    }

    #[test]
    fn picks_closest_name() {
        let items = vec![
            json!({"name": "Hotel Bauer"}),
            json!({"name": "Hotel Danieli Venice"}),
            json!({"name": "Danieli"}),
        ];
        let best = select_best_match(&items, "hotel danieli").unwrap();
        assert_eq!(best["name"], "Hotel Danieli Venice");
    }

    #[test]
    fn ties_keep_first() {
        let items = vec![json!({"name": "abc"}), json!({"name": "abc"})];
        let best = select_best_match(&items, "abc").unwrap();
        assert!(std::ptr::eq(best, &items[0]));
    }

    #[test]
    fn empty_list_has_no_match() {
        assert!(select_best_match(&[], "anything").is_none());
    }

    #[test]
    fn nameless_item_is_still_a_candidate() {
        let items = vec![json!({"id": 7})];
        assert_eq!(select_best_match(&items, "x").unwrap()["id"], 7);
    }

    proptest! {
        #[test]
        fn score_is_bounded(a in "\\PC{0,30}", b in "\\PC{0,30}") {
            let s = score_name_match(&a, &b);
            prop_assert!((0.0..=1.0).contains(&s));
        }
    }
}

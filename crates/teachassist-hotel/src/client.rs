// SPDX-FileCopyrightText: 2026 TeachAssist Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the Airtrotter hotel API.
//!
//! Each call makes one request. Non-success statuses and undecodable bodies
//! surface as [`TeachAssistError::Lookup`].

use std::time::Duration;

use chrono::{Days, Local, NaiveDate};
use reqwest::header::{HeaderMap, HeaderValue};
use serde::Serialize;
use serde_json::Value;
use teachassist_config::model::HotelConfig;
use teachassist_core::TeachAssistError;
use tracing::{debug, info};

use crate::decode::{AUTOCOMPLETE_KEYS, AVAILABILITY_KEYS, HotelCandidate, flatten_candidates};
use crate::filter::AvailabilityFilter;
use crate::matching::select_best_match;

const SEARCH_PATH: &str = "/autocomplete/searchProperties";
const AVAILABILITY_PATH: &str = "/accommodations/hotelAvailabilityByCity";

/// Property provider the autocomplete endpoint is queried against.
const SEARCH_PROVIDER: &str = "3";

/// Autocomplete results considered when picking a best match.
const BEST_MATCH_LIMIT: usize = 25;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Stay parameters for an availability search.
///
/// Unset dates default to a one-night stay thirty days from today.
#[derive(Debug, Clone, PartialEq)]
pub struct StayParams {
    pub checkin: Option<NaiveDate>,
    pub checkout: Option<NaiveDate>,
    pub rooms: u32,
    pub guests: String,
    pub radius: String,
    pub language: Option<String>,
    pub filter: AvailabilityFilter,
}

impl Default for StayParams {
    fn default() -> Self {
        Self {
            checkin: None,
            checkout: None,
            rooms: 1,
            guests: "A,A".to_string(),
            radius: "1".to_string(),
            language: None,
            filter: AvailabilityFilter::default(),
        }
    }
}

impl StayParams {
    /// Check-in and check-out, filling defaults relative to `today`.
    pub fn resolve_dates(&self, today: NaiveDate) -> (NaiveDate, NaiveDate) {
        let checkin = self
            .checkin
            .unwrap_or_else(|| today.checked_add_days(Days::new(30)).unwrap_or(today));
        let checkout = self
            .checkout
            .unwrap_or_else(|| today.checked_add_days(Days::new(31)).unwrap_or(today));
        (checkin, checkout)
    }
}

/// Availability response with the filtered subset and the filter applied.
#[derive(Debug, Clone, Serialize)]
pub struct AvailabilityReport {
    pub raw: Value,
    pub filtered: Vec<Value>,
    pub filters: AvailabilityFilter,
}

/// Best-match lookup outcome.
///
/// `availability` is present only when the best match carried coordinates.
#[derive(Debug, Clone, Serialize)]
pub struct BestMatchReport {
    pub results: Vec<Value>,
    pub best_match: Option<Value>,
    pub candidate: Option<HotelCandidate>,
    pub availability: Option<AvailabilityReport>,
}

/// Client for property search and availability lookups.
#[derive(Debug, Clone)]
pub struct AirtrotterClient {
    client: reqwest::Client,
    base_url: String,
    language: String,
    rows: u32,
}

impl AirtrotterClient {
    /// Build from the `[hotel]` section, reading the key from config or
    /// `AIRTROTTER_API_KEY`.
    pub fn from_config(config: &HotelConfig) -> Result<Self, TeachAssistError> {
        let api_key = resolve_api_key(config.api_key.as_deref())?;
        Self::new(&api_key, config)
    }

    /// Build with an explicit access key.
    pub fn new(api_key: &str, config: &HotelConfig) -> Result<Self, TeachAssistError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            "client-access-key",
            HeaderValue::from_str(api_key).map_err(|e| {
                TeachAssistError::Config(format!("invalid hotel API key header value: {e}"))
            })?,
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| TeachAssistError::Lookup {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            language: config.language.clone(),
            rows: config.rows,
        })
    }

    /// Property autocomplete. A `limit` of zero keeps every result.
    pub async fn search_properties(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<Value>, TeachAssistError> {
        let params = [
            ("query", query.to_string()),
            ("provider", SEARCH_PROVIDER.to_string()),
        ];
        let body = self.get_json(SEARCH_PATH, &params).await?;

        let mut items = flatten_candidates(&body, AUTOCOMPLETE_KEYS);
        if limit > 0 {
            items.truncate(limit);
        }
        debug!(query, count = items.len(), "property search complete");
        Ok(items)
    }

    /// Availability around a coordinate, narrowed by `params.filter`.
    pub async fn availability_by_city(
        &self,
        latitude: f64,
        longitude: f64,
        params: &StayParams,
    ) -> Result<AvailabilityReport, TeachAssistError> {
        let (checkin, checkout) = params.resolve_dates(Local::now().date_naive());
        let language = params.language.as_deref().unwrap_or(&self.language);

        let query = [
            ("rooms", params.rooms.to_string()),
            ("guests", params.guests.clone()),
            ("checkin", checkin.format(DATE_FORMAT).to_string()),
            ("checkout", checkout.format(DATE_FORMAT).to_string()),
            ("language", language.to_string()),
            ("rows", self.rows.to_string()),
            ("force_radius", params.radius.clone()),
            ("latitude", latitude.to_string()),
            ("longitude", longitude.to_string()),
        ];
        let raw = self.get_json(AVAILABILITY_PATH, &query).await?;

        let items = flatten_candidates(&raw, AVAILABILITY_KEYS);
        let filtered = params.filter.apply(&items);
        info!(
            total = items.len(),
            kept = filtered.len(),
            "hotel availability fetched"
        );

        Ok(AvailabilityReport {
            raw,
            filtered,
            filters: params.filter.clone(),
        })
    }

    /// Search for `term`, pick the closest name, then fetch availability at
    /// its coordinates.
    pub async fn best_match_availability(
        &self,
        term: &str,
        params: &StayParams,
    ) -> Result<BestMatchReport, TeachAssistError> {
        let results = self.search_properties(term, BEST_MATCH_LIMIT).await?;
        let best_match = select_best_match(&results, term).cloned();
        let candidate = best_match.as_ref().map(HotelCandidate::from_value);

        let availability = match candidate.as_ref().and_then(HotelCandidate::coordinates) {
            Some((lat, lon)) => Some(self.availability_by_city(lat, lon, params).await?),
            None => {
                debug!(term, "best match has no coordinates; skipping availability");
                None
            }
        };

        Ok(BestMatchReport {
            results,
            best_match,
            candidate,
            availability,
        })
    }

    async fn get_json(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<Value, TeachAssistError> {
        let url = format!("{}{path}", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| TeachAssistError::Lookup {
                message: format!("HTTP request failed: {e}"),
                source: Some(Box::new(e)),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TeachAssistError::Lookup {
                message: format!("{path} returned {status}: {body}"),
                source: None,
            });
        }

        response.json().await.map_err(|e| TeachAssistError::Lookup {
            message: format!("failed to decode {path} response: {e}"),
            source: Some(Box::new(e)),
        })
    }
}

fn resolve_api_key(config_key: Option<&str>) -> Result<String, TeachAssistError> {
    if let Some(key) = config_key.filter(|k| !k.is_empty()) {
        return Ok(key.to_string());
    }
    std::env::var("AIRTROTTER_API_KEY")
        .ok()
        .filter(|k| !k.is_empty())
        .ok_or_else(|| {
            TeachAssistError::Config(
                "hotel API key not found. Set hotel.api_key in config or AIRTROTTER_API_KEY environment variable.".into(),
            )
        })
}

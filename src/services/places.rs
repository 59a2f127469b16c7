// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Google Places (New) text-search client.
//!
//! Results are normalized into `Venue` records: price enums become 0-4,
//! the first review becomes the description.

use crate::error::AppError;
use crate::models::venue::{price_level_from_places, NO_DESCRIPTION};
use crate::models::{GeoPoint, Venue};
use serde::Deserialize;

/// Fields requested from the API (billing is per field group).
const FIELD_MASK: &str = "places.id,places.displayName,places.location,places.formattedAddress,places.rating,places.priceLevel,places.reviews";

/// The API rejects page sizes outside 1..=20.
pub const MAX_PAGE_SIZE: u32 = 20;

/// Places API client.
#[derive(Clone)]
pub struct PlacesClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl PlacesClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    /// Run a text search, returning raw places.
    pub async fn search_text(&self, query: &str, page_size: u32) -> Result<Vec<Place>, AppError> {
        if query.trim().is_empty() {
            return Err(AppError::BadRequest("query must not be empty".to_string()));
        }
        let page_size = page_size.clamp(1, MAX_PAGE_SIZE);

        let url = format!("{}/places:searchText", self.base_url);
        let body = serde_json::json!({
            "textQuery": query,
            "pageSize": page_size,
        });

        let response = self
            .http
            .post(&url)
            .header("X-Goog-Api-Key", &self.api_key)
            .header("X-Goog-FieldMask", FIELD_MASK)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::ExternalApi(format!("Places request failed: {}", e)))?;

        let results: SearchTextResponse = super::check_response_json("Places API", response).await?;
        tracing::debug!(query, count = results.places.len(), "Places search complete");
        Ok(results.places)
    }

    /// Search and normalize results into venues of the given category.
    pub async fn search_venues(
        &self,
        query: &str,
        category: &str,
        page_size: u32,
    ) -> Result<Vec<Venue>, AppError> {
        Ok(self
            .search_text(query, page_size)
            .await?
            .into_iter()
            .map(|place| place.into_venue(category))
            .collect())
    }
}

#[derive(Debug, Deserialize)]
struct SearchTextResponse {
    // Omitted entirely when nothing matches
    #[serde(default)]
    places: Vec<Place>,
}

/// A place as returned by text search.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    pub id: Option<String>,
    pub display_name: Option<LocalizedText>,
    pub location: Option<GeoPoint>,
    pub formatted_address: Option<String>,
    pub rating: Option<f64>,
    pub price_level: Option<String>,
    #[serde(default)]
    pub reviews: Vec<Review>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LocalizedText {
    pub text: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Review {
    pub text: Option<LocalizedText>,
}

impl Place {
    /// Normalize into a venue record.
    pub fn into_venue(self, category: &str) -> Venue {
        let description = self
            .reviews
            .into_iter()
            .next()
            .and_then(|r| r.text)
            .map(|t| t.text)
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| NO_DESCRIPTION.to_string());

        Venue {
            doc_id: None,
            place_id: self.id.unwrap_or_default(),
            name: self
                .display_name
                .map(|n| n.text)
                .unwrap_or_else(|| "Unknown".to_string()),
            category: category.to_string(),
            location: self.location.unwrap_or_default(),
            address: self
                .formatted_address
                .unwrap_or_else(|| "Unknown".to_string()),
            rating: self.rating.unwrap_or(0.0),
            price_level: price_level_from_places(self.price_level.as_deref()),
            description,
        }
    }
}

//! Venue model (seeded out-of-band, read-only to the API).

use serde::{Deserialize, Deserializer, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Placeholder stored when a place has no review text.
pub const NO_DESCRIPTION: &str = "No description available.";

/// Latitude/longitude pair as returned by the Places API.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "frontend/lib/generated/")
)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

/// A venue document.
///
/// Venues are written by a seeding script, not by this API, so reads are
/// lenient: missing or null fields fall back to defaults and `description`
/// may be stored either as plain text or as a Places `{text, languageCode}`
/// object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "frontend/lib/generated/")
)]
pub struct Venue {
    /// Firestore document ID, filled in at read time
    #[serde(
        rename(deserialize = "_firestore_id"),
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub doc_id: Option<String>,
    /// Google Places ID, empty when the seed had none
    #[serde(default, deserialize_with = "null_as_default")]
    pub place_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// "restaurant", "cafe", "bar", ...
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub location: GeoPoint,
    #[serde(default, deserialize_with = "null_as_default")]
    pub address: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub rating: f64,
    /// 1-4, 0 when unknown
    #[serde(default, deserialize_with = "null_as_default")]
    pub price_level: u8,
    #[serde(default = "default_description", deserialize_with = "description_text")]
    pub description: String,
}

fn default_description() -> String {
    NO_DESCRIPTION.to_string()
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Stored shapes of a venue description.
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredDescription {
    Plain(String),
    Localized {
        #[serde(default)]
        text: Option<String>,
    },
}

fn description_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let text = match Option::<StoredDescription>::deserialize(deserializer)? {
        Some(StoredDescription::Plain(text)) => Some(text),
        Some(StoredDescription::Localized { text }) => text,
        None => None,
    };

    Ok(text
        .filter(|t| !t.trim().is_empty())
        .unwrap_or_else(default_description))
}

/// Map a Places API `priceLevel` enum to the 0-4 scale.
pub fn price_level_from_places(raw: Option<&str>) -> u8 {
    match raw {
        Some("PRICE_LEVEL_INEXPENSIVE") => 1,
        Some("PRICE_LEVEL_MODERATE") => 2,
        Some("PRICE_LEVEL_EXPENSIVE") => 3,
        Some("PRICE_LEVEL_VERY_EXPENSIVE") => 4,
        _ => 0,
    }
}

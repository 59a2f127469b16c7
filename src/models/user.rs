//! User model for storage and API.

use crate::error::AppError;
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::Validate;

/// Preferences submitted at onboarding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "frontend/lib/generated/")
)]
pub struct UserPreferences {
    /// Dietary restrictions (e.g. "vegetarian", "halal")
    #[validate(length(max = 32))]
    pub dietary: Vec<String>,
    /// Budget bracket
    #[validate(length(min = 1, max = 64))]
    pub budget: String,
    /// Vibe tags (e.g. "quiet", "lively")
    #[validate(length(max = 32))]
    pub vibes: Vec<String>,
    #[serde(alias = "travelStyle")]
    #[validate(length(min = 1, max = 64))]
    pub travel_style: String,
}

/// User document as read from Firestore.
///
/// Every preference is optional: merge-upserts can leave partial documents.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "frontend/lib/generated/")
)]
pub struct User {
    /// Document ID, taken from the store rather than the document body
    #[serde(rename(deserialize = "_firestore_id"), default)]
    pub user_id: String,
    #[serde(default)]
    pub dietary: Option<Vec<String>>,
    #[serde(default)]
    pub budget: Option<String>,
    #[serde(default)]
    pub vibes: Option<Vec<String>>,
    #[serde(default)]
    pub travel_style: Option<String>,
    /// Last write (RFC 3339)
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Fields to merge into a user document. Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct UserUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 32))]
    pub dietary: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 64))]
    pub budget: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 32))]
    pub vibes: Option<Vec<String>>,
    #[serde(
        default,
        alias = "travelStyle",
        skip_serializing_if = "Option::is_none"
    )]
    #[validate(length(min = 1, max = 64))]
    pub travel_style: Option<String>,
    /// Stamped by the data layer on every save
    #[serde(skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl UserUpdate {
    /// Build an update from an untyped JSON payload.
    ///
    /// Anything other than a JSON object is a caller error, as are unknown
    /// keys and values of the wrong type.
    pub fn from_json(value: serde_json::Value) -> Result<Self, AppError> {
        if !value.is_object() {
            return Err(AppError::BadRequest(
                "User fields must be a JSON object".to_string(),
            ));
        }

        let update: UserUpdate = serde_json::from_value(value)
            .map_err(|e| AppError::BadRequest(format!("Invalid user fields: {}", e)))?;
        update
            .validate()
            .map_err(|e| AppError::BadRequest(e.to_string()))?;
        Ok(update)
    }

    /// Firestore field paths present in this update (the update mask).
    pub fn field_names(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        if self.dietary.is_some() {
            fields.push("dietary");
        }
        if self.budget.is_some() {
            fields.push("budget");
        }
        if self.vibes.is_some() {
            fields.push("vibes");
        }
        if self.travel_style.is_some() {
            fields.push("travel_style");
        }
        if self.updated_at.is_some() {
            fields.push("updated_at");
        }
        fields
    }

    pub fn is_empty(&self) -> bool {
        self.field_names().is_empty()
    }
}

impl From<UserPreferences> for UserUpdate {
    fn from(prefs: UserPreferences) -> Self {
        Self {
            dietary: Some(prefs.dietary),
            budget: Some(prefs.budget),
            vibes: Some(prefs.vibes),
            travel_style: Some(prefs.travel_style),
            updated_at: None,
        }
    }
}

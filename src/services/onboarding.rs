//! User onboarding.
//!
//! Currently a stub: it hands out a temporary user ID and echoes the
//! preferences. Persistence and preference embeddings come later.

use crate::models::UserPreferences;
use serde::Serialize;

/// Prefix marking IDs issued before users are persisted.
pub const TEMP_USER_ID_PREFIX: &str = "temp_";

/// Outcome of onboarding a user.
#[derive(Debug, Clone, Serialize)]
pub struct Onboarding {
    pub user_id: String,
    pub preferences: UserPreferences,
}

/// Generate an opaque user ID: `temp_` plus 12 random hex characters.
///
/// Not checked against existing users.
pub fn generate_user_id() -> String {
    let hex = uuid::Uuid::new_v4().simple().to_string();
    format!("{}{}", TEMP_USER_ID_PREFIX, &hex[..12])
}

/// Register a user's preferences.
pub fn onboard_user(preferences: UserPreferences) -> Onboarding {
    let user_id = generate_user_id();
    tracing::info!(user_id = %user_id, "User onboarded (temporary ID)");
    Onboarding {
        user_id,
        preferences,
    }
}

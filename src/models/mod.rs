// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod user;
pub mod venue;

pub use user::{User, UserPreferences, UserUpdate};
pub use venue::{GeoPoint, Venue};

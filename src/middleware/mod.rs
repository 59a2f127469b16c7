// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Middleware modules (environment gating, security headers).

pub mod dev_only;
pub mod security;

pub use dev_only::require_development;

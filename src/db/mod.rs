//! Database layer (Firestore).

pub mod bootstrap;
pub mod credentials;
pub mod firestore;

pub use bootstrap::{BootstrapError, ClientBootstrap};
pub use credentials::{provider_chain, CredentialProvider};
pub use firestore::FirestoreDb;

/// Collection names as constants.
pub mod collections {
    pub const USERS: &str = "users";
    pub const VENUES: &str = "venues";
    /// Dev-only sentinel documents (never user or venue data)
    pub const DEV_SMOKE_TESTS: &str = "dev_smoke_tests";
}

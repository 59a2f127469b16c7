// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! One-time database client initialization.
//!
//! `ClientBootstrap` owns the ordered credential providers and a `OnceCell`
//! holding the connected client. The first successful connection is cached;
//! later (or concurrent) callers get a clone of the same handle.

use crate::db::credentials::{CredentialError, CredentialProvider, ResolvedCredentials};
use crate::db::FirestoreDb;
use std::fmt;
use std::future::Future;
use tokio::sync::OnceCell;

/// A provider that was tried and why it did not produce a client.
#[derive(Debug, Clone)]
pub struct ProviderFailure {
    pub provider: &'static str,
    pub reason: String,
}

impl fmt::Display for ProviderFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.provider, self.reason)
    }
}

/// Startup failure: no provider produced a connected client.
#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    #[error("Failed to initialize Firestore client; attempted: {}", join_attempts(.attempts))]
    NoCredentials { attempts: Vec<ProviderFailure> },
}

fn join_attempts(attempts: &[ProviderFailure]) -> String {
    if attempts.is_empty() {
        return "no credential providers configured".to_string();
    }
    attempts
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Resolves credentials and initializes a client exactly once.
pub struct ClientBootstrap<T> {
    providers: Vec<Box<dyn CredentialProvider>>,
    client: OnceCell<T>,
}

impl<T: Clone> ClientBootstrap<T> {
    pub fn new(providers: Vec<Box<dyn CredentialProvider>>) -> Self {
        Self {
            providers,
            client: OnceCell::new(),
        }
    }

    /// Provider names in the order they are tried.
    pub fn provider_names(&self) -> Vec<&'static str> {
        self.providers.iter().map(|p| p.name()).collect()
    }

    /// The cached client, if initialization already succeeded.
    pub fn get(&self) -> Option<T> {
        self.client.get().cloned()
    }

    /// Return the cached client, connecting on first use.
    ///
    /// `connect` turns resolved credentials into a client. It is only ever
    /// invoked until one call succeeds; a failed bootstrap leaves the cell
    /// empty so the error is reported again on the next call.
    pub async fn get_or_connect<F, Fut>(&self, connect: F) -> Result<T, BootstrapError>
    where
        F: Fn(ResolvedCredentials) -> Fut,
        Fut: Future<Output = Result<T, CredentialError>>,
    {
        self.client
            .get_or_try_init(|| self.connect_first(connect))
            .await
            .cloned()
    }

    async fn connect_first<F, Fut>(&self, connect: F) -> Result<T, BootstrapError>
    where
        F: Fn(ResolvedCredentials) -> Fut,
        Fut: Future<Output = Result<T, CredentialError>>,
    {
        let mut attempts = Vec::with_capacity(self.providers.len());

        for provider in &self.providers {
            let name = provider.name();

            let credentials = match provider.resolve() {
                Ok(credentials) => credentials,
                Err(e) => {
                    tracing::debug!(provider = name, reason = %e, "Credential provider skipped");
                    attempts.push(ProviderFailure {
                        provider: name,
                        reason: e.to_string(),
                    });
                    continue;
                }
            };

            let client_email = credentials.client_email.clone();
            match connect(credentials).await {
                Ok(client) => {
                    tracing::info!(
                        provider = name,
                        client_email = ?client_email,
                        "Database client initialized"
                    );
                    return Ok(client);
                }
                Err(e) => {
                    tracing::warn!(provider = name, error = %e, "Credential provider failed to connect");
                    attempts.push(ProviderFailure {
                        provider: name,
                        reason: e.to_string(),
                    });
                }
            }
        }

        Err(BootstrapError::NoCredentials { attempts })
    }
}

impl ClientBootstrap<FirestoreDb> {
    /// Connect (once) to Firestore.
    ///
    /// `project_id` overrides the project embedded in the credentials.
    pub async fn firestore(&self, project_id: Option<&str>) -> Result<FirestoreDb, BootstrapError> {
        self.get_or_connect(|credentials| FirestoreDb::connect(credentials, project_id))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::credentials::CredentialSource;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Provider with a fixed outcome that counts how often it is asked.
    struct FakeProvider {
        name: &'static str,
        available: bool,
        calls: Arc<AtomicUsize>,
    }

    impl CredentialProvider for FakeProvider {
        fn name(&self) -> &'static str {
            self.name
        }

        fn resolve(&self) -> Result<ResolvedCredentials, CredentialError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if !self.available {
                return Err(CredentialError::NotConfigured("FAKE"));
            }
            Ok(ResolvedCredentials {
                provider: self.name,
                source: CredentialSource::Ambient,
                project_id: None,
                client_email: None,
            })
        }
    }

    fn fake(name: &'static str, available: bool) -> (Box<dyn CredentialProvider>, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (
            Box::new(FakeProvider {
                name,
                available,
                calls: calls.clone(),
            }),
            calls,
        )
    }

    #[tokio::test]
    async fn test_connects_once() {
        let (provider, _) = fake("only", true);
        let bootstrap = ClientBootstrap::new(vec![provider]);
        let connects = AtomicUsize::new(0);

        for _ in 0..3 {
            let client = bootstrap
                .get_or_connect(|c| {
                    connects.fetch_add(1, Ordering::SeqCst);
                    async move { Ok::<_, CredentialError>(c.provider.to_string()) }
                })
                .await
                .unwrap();
            assert_eq!(client, "only");
        }

        assert_eq!(connects.load(Ordering::SeqCst), 1);
        assert_eq!(bootstrap.get().as_deref(), Some("only"));
    }

    #[tokio::test]
    async fn test_failed_bootstrap_is_not_cached() {
        let (provider, calls) = fake("flaky", true);
        let bootstrap: ClientBootstrap<String> = ClientBootstrap::new(vec![provider]);

        let err = bootstrap
            .get_or_connect(|_| async { Err(CredentialError::Connect("refused".to_string())) })
            .await
            .unwrap_err();
        assert!(err.to_string().contains("flaky (connection failed: refused)"));
        assert!(bootstrap.get().is_none());

        let client = bootstrap
            .get_or_connect(|_| async { Ok("up".to_string()) })
            .await
            .unwrap();
        assert_eq!(client, "up");
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_empty_chain_message() {
        let err = BootstrapError::NoCredentials { attempts: vec![] };
        assert!(err.to_string().contains("no credential providers configured"));
    }
}

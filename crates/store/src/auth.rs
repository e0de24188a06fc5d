//! Demo sign-in for the admin back office and the shopper account page.
//!
//! Neither gate is real authentication. The admin gate checks a single
//! configured username/password pair and persists a flag; the customer
//! session accepts any well-formed email.

use std::sync::Arc;

use saffron_core::{Email, EmailError};
use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;
use tracing::{info, instrument, warn};

use crate::models::Customer;
use crate::persistence::{self, PersistenceError, SnapshotKey, SnapshotStore};

/// Sign-in failures.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Username or password did not match.
    #[error("invalid username or password")]
    InvalidCredentials,

    /// Email failed validation.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    /// Snapshot adapter failed.
    #[error("persistence error: {0}")]
    Persistence(#[from] PersistenceError),
}

/// The back-office login pair.
#[derive(Debug, Clone)]
pub struct AdminCredentials {
    pub username: String,
    pub password: SecretString,
}

impl AdminCredentials {
    pub const DEFAULT_USERNAME: &'static str = "admin";
    pub const DEFAULT_PASSWORD: &'static str = "admin@123";

    fn verify(&self, username: &str, password: &str) -> bool {
        // Compare both fields even when the first fails.
        let user_ok = constant_time_compare(&self.username, username);
        let pass_ok = constant_time_compare(self.password.expose_secret(), password);
        user_ok & pass_ok
    }
}

impl Default for AdminCredentials {
    fn default() -> Self {
        Self {
            username: Self::DEFAULT_USERNAME.to_owned(),
            password: SecretString::from(Self::DEFAULT_PASSWORD.to_owned()),
        }
    }
}

/// Persisted admin sign-in flag.
pub struct AdminGate {
    credentials: AdminCredentials,
    authenticated: bool,
    storage: Arc<dyn SnapshotStore>,
}

impl AdminGate {
    /// Restore the sign-in flag.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError` if the adapter cannot be read.
    pub fn load(
        storage: Arc<dyn SnapshotStore>,
        credentials: AdminCredentials,
    ) -> Result<Self, PersistenceError> {
        let (authenticated, _) =
            persistence::load_or_else(storage.as_ref(), SnapshotKey::AdminAuth, || false)?;
        Ok(Self {
            credentials,
            authenticated,
            storage,
        })
    }

    /// Whether an admin is signed in.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Sign in with the configured pair.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` on mismatch; the flag is left unchanged.
    #[instrument(skip(self, password))]
    pub fn login(&mut self, username: &str, password: &str) -> Result<(), AuthError> {
        if !self.credentials.verify(username, password) {
            warn!("Admin login rejected");
            return Err(AuthError::InvalidCredentials);
        }
        persistence::persist(self.storage.as_ref(), SnapshotKey::AdminAuth, &true)?;
        self.authenticated = true;
        info!("Admin signed in");
        Ok(())
    }

    /// Sign out. Signing out twice is harmless.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Persistence` if the flag cannot be removed.
    pub fn logout(&mut self) -> Result<(), AuthError> {
        self.storage.remove(SnapshotKey::AdminAuth)?;
        self.authenticated = false;
        info!("Admin signed out");
        Ok(())
    }
}

/// Persisted demo customer sign-in.
pub struct CustomerSession {
    customer: Option<Customer>,
    storage: Arc<dyn SnapshotStore>,
}

impl CustomerSession {
    /// Restore the signed-in customer, if any.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError` if the adapter cannot be read.
    pub fn load(storage: Arc<dyn SnapshotStore>) -> Result<Self, PersistenceError> {
        let (customer, _) =
            persistence::load_or_else(storage.as_ref(), SnapshotKey::Customer, || None)?;
        Ok(Self { customer, storage })
    }

    /// The signed-in customer.
    #[must_use]
    pub const fn current(&self) -> Option<&Customer> {
        self.customer.as_ref()
    }

    /// Sign in as `email`. Any valid address is accepted.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidEmail` for a malformed address.
    #[instrument(skip(self))]
    pub fn sign_in(&mut self, email: &str) -> Result<&Customer, AuthError> {
        let customer = Customer::for_email(Email::parse(email)?);
        persistence::persist(self.storage.as_ref(), SnapshotKey::Customer, &customer)?;
        info!(name = %customer.name, "Customer signed in");
        Ok(self.customer.insert(customer))
    }

    /// Sign out.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Persistence` if the session cannot be removed.
    pub fn sign_out(&mut self) -> Result<(), AuthError> {
        self.storage.remove(SnapshotKey::Customer)?;
        self.customer = None;
        info!("Customer signed out");
        Ok(())
    }
}

/// Compare two strings without short-circuiting on the first differing byte.
fn constant_time_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut result: u8 = 0;
    for (x, y) in a.bytes().zip(b.bytes()) {
        result |= x ^ y;
    }

    result == 0
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;

    #[test]
    fn test_constant_time_compare() {
        assert!(constant_time_compare("hello", "hello"));
        assert!(constant_time_compare("", ""));
        assert!(!constant_time_compare("hello", "world"));
        assert!(!constant_time_compare("hello", "hell"));
    }

    #[test]
    fn test_admin_login_persists_flag() {
        let storage = Arc::new(MemoryStore::new());
        let mut gate = AdminGate::load(storage.clone(), AdminCredentials::default()).unwrap();
        assert!(!gate.is_authenticated());

        gate.login("admin", "admin@123").unwrap();
        assert!(gate.is_authenticated());
        assert_eq!(storage.raw(SnapshotKey::AdminAuth).as_deref(), Some("true"));

        let restored = AdminGate::load(storage.clone(), AdminCredentials::default()).unwrap();
        assert!(restored.is_authenticated());

        gate.logout().unwrap();
        assert!(storage.raw(SnapshotKey::AdminAuth).is_none());
        assert!(!AdminGate::load(storage, AdminCredentials::default())
            .unwrap()
            .is_authenticated());
    }

    #[test]
    fn test_admin_login_rejects_wrong_pair() {
        let storage = Arc::new(MemoryStore::new());
        let mut gate = AdminGate::load(storage.clone(), AdminCredentials::default()).unwrap();

        for (user, pass) in [("admin", "admin"), ("root", "admin@123"), ("", "")] {
            let err = gate.login(user, pass).unwrap_err();
            assert!(matches!(err, AuthError::InvalidCredentials));
        }
        assert!(!gate.is_authenticated());
        assert!(storage.raw(SnapshotKey::AdminAuth).is_none());
    }

    #[test]
    fn test_configured_credentials_replace_default() {
        let credentials = AdminCredentials {
            username: "owner".to_owned(),
            password: SecretString::from("crocus-sativus".to_owned()),
        };
        let mut gate = AdminGate::load(Arc::new(MemoryStore::new()), credentials).unwrap();

        assert!(gate.login("admin", "admin@123").is_err());
        gate.login("owner", "crocus-sativus").unwrap();
    }

    #[test]
    fn test_credentials_debug_is_redacted() {
        let debug = format!("{:?}", AdminCredentials::default());
        assert!(!debug.contains("admin@123"));
    }

    #[test]
    fn test_customer_sign_in_derives_name() {
        let storage = Arc::new(MemoryStore::new());
        let mut session = CustomerSession::load(storage.clone()).unwrap();
        assert!(session.current().is_none());

        let customer = session.sign_in("  Priya@Example.com ").unwrap();
        assert_eq!(customer.name, "priya");
        assert_eq!(customer.email.as_str(), "priya@example.com");

        let restored = CustomerSession::load(storage.clone()).unwrap();
        assert_eq!(restored.current().map(|c| c.name.as_str()), Some("priya"));

        session.sign_out().unwrap();
        assert!(CustomerSession::load(storage).unwrap().current().is_none());
    }

    #[test]
    fn test_customer_sign_in_rejects_bad_email() {
        let mut session = CustomerSession::load(Arc::new(MemoryStore::new())).unwrap();
        assert!(matches!(
            session.sign_in("nobody").unwrap_err(),
            AuthError::InvalidEmail(_)
        ));
        assert!(session.current().is_none());
    }
}

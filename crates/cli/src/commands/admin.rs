//! Back-office sign-in and dashboard.
//!
//! # Usage
//!
//! ```bash
//! saffron admin login -u admin -p admin@123
//! saffron admin stats
//! saffron admin logout
//! ```
//!
//! # Environment Variables
//!
//! - `SAFFRON_ADMIN_USERNAME` - Back-office username (default: admin)
//! - `SAFFRON_ADMIN_PASSWORD` - Back-office password (default: admin@123)

use saffron_store::Store;
use secrecy::{ExposeSecret, SecretString};
use tracing::info;

use super::{CommandError, require_admin};

/// Sign in to the back office.
pub fn login(store: &mut Store, username: &str, password: String) -> Result<(), CommandError> {
    let password = SecretString::from(password);
    store.admin_mut().login(username, password.expose_secret())?;
    info!("Signed in as {username}");
    Ok(())
}

pub fn logout(store: &mut Store) -> Result<(), CommandError> {
    store.admin_mut().logout()?;
    info!("Signed out of the back office");
    Ok(())
}

/// Dashboard numbers.
pub fn stats(store: &Store) -> Result<(), CommandError> {
    require_admin(store)?;
    let stats = store.orders().stats();
    info!("Total revenue:   {}", stats.total_revenue);
    info!("Total orders:    {}", stats.total_orders);
    info!("Pending orders:  {}", stats.pending_orders);
    info!("Products:        {}", store.catalog().list().len());
    info!("Unread messages: {}", store.messages().unread());
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_commands_require_login() {
        let mut store = Store::in_memory().unwrap();
        assert!(matches!(stats(&store), Err(CommandError::AdminRequired)));

        login(&mut store, "admin", "admin@123".to_owned()).unwrap();
        stats(&store).unwrap();

        logout(&mut store).unwrap();
        assert!(matches!(stats(&store), Err(CommandError::AdminRequired)));
    }

    #[test]
    fn test_wrong_password_is_reported() {
        let mut store = Store::in_memory().unwrap();
        let err = login(&mut store, "admin", "hunter2".to_owned()).unwrap_err();
        assert!(matches!(err, CommandError::Auth(_)));
        assert!(!store.admin().is_authenticated());
    }
}

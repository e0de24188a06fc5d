//! Demo customer account commands.

use saffron_store::Store;
use tracing::info;

use super::CommandError;

pub fn login(store: &mut Store, email: &str) -> Result<(), CommandError> {
    let customer = store.customer_mut().sign_in(email)?;
    info!("Welcome, {} ({})", customer.name, customer.email);
    Ok(())
}

pub fn logout(store: &mut Store) -> Result<(), CommandError> {
    store.customer_mut().sign_out()?;
    info!("Signed out");
    Ok(())
}

pub fn whoami(store: &Store) {
    match store.customer().current() {
        Some(customer) => info!("Signed in as {} ({})", customer.name, customer.email),
        None => info!("Not signed in"),
    }
}

//! Wishlist commands.

use saffron_core::ProductId;
use saffron_store::Store;
use tracing::info;

use super::{CommandError, log_product};

pub fn show(store: &Store) {
    let wishlist = store.wishlist();
    if wishlist.is_empty() {
        info!("Your wishlist is empty");
        return;
    }
    info!("Wishlist ({} items):", wishlist.len());
    for product in wishlist.items() {
        log_product(product);
    }
}

pub fn toggle(store: &mut Store, id: &ProductId) -> Result<(), CommandError> {
    if store.toggle_wishlist(id)? {
        info!("Saved {id} to your wishlist");
    } else {
        info!("Removed {id} from your wishlist");
    }
    Ok(())
}

pub fn remove(store: &mut Store, id: &ProductId) -> Result<(), CommandError> {
    store.wishlist_mut().remove(id)?;
    info!("Removed {id} from your wishlist");
    Ok(())
}

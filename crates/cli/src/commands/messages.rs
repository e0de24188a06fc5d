//! Contact form and inbox commands.

use saffron_core::{MessageId, MessageStatus};
use saffron_store::Store;
use saffron_store::models::{ContactForm, Message};
use tracing::info;

use super::{CommandError, require_admin};

fn log_message(message: &Message) {
    info!(
        "  [{:<7}] {}  {} <{}>: {}",
        message.status,
        message.date.format("%Y-%m-%d"),
        message.user,
        message.email,
        message.subject
    );
    info!("            {}", message.content);
    info!("            id: {}", message.id);
}

/// Show the inbox.
pub fn list(store: &Store) -> Result<(), CommandError> {
    require_admin(store)?;
    let messages = store.messages();
    info!(
        "{} messages ({} new):",
        messages.list().len(),
        messages.unread()
    );
    for message in messages.list() {
        log_message(message);
    }
    Ok(())
}

/// Submit the contact form.
pub fn send(
    store: &mut Store,
    user: String,
    email: String,
    subject: String,
    content: String,
) -> Result<(), CommandError> {
    let message = store.messages_mut().submit(ContactForm {
        user,
        email,
        subject,
        content,
    })?;
    info!(
        "Thanks {}, we received your message and will reply to {}",
        message.user, message.email
    );
    Ok(())
}

pub fn search(store: &Store, query: &str) -> Result<(), CommandError> {
    require_admin(store)?;
    let hits = store.messages().search(query);
    info!("{} messages matching \"{query}\":", hits.len());
    for message in hits {
        log_message(message);
    }
    Ok(())
}

pub fn set_status(
    store: &mut Store,
    id: &MessageId,
    status: MessageStatus,
) -> Result<(), CommandError> {
    require_admin(store)?;
    store.messages_mut().update_status(id, status)?;
    info!("Message {id} marked {status}");
    Ok(())
}

pub fn delete(store: &mut Store, id: &MessageId) -> Result<(), CommandError> {
    require_admin(store)?;
    let removed = store.messages_mut().delete(id)?;
    info!("Deleted message from {}: {}", removed.user, removed.subject);
    Ok(())
}

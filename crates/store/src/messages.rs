//! Message table: contact-form submissions for the back office.

use std::sync::Arc;

use chrono::Utc;
use saffron_core::{Email, MessageId, MessageStatus};
use tracing::{info, instrument};

use crate::error::{Entity, Result, StoreError};
use crate::models::{ContactForm, Message};
use crate::persistence::{self, LoadSource, SnapshotKey, SnapshotStore};
use crate::seed;

/// Message table, most recent first.
pub struct MessageBoard {
    messages: Vec<Message>,
    storage: Arc<dyn SnapshotStore>,
}

impl MessageBoard {
    /// Load the inbox, seeding example messages when no snapshot exists.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Persistence` if the adapter cannot be read.
    pub fn load(storage: Arc<dyn SnapshotStore>) -> Result<Self> {
        let (messages, source): (Vec<Message>, _) =
            persistence::load_or_else(storage.as_ref(), SnapshotKey::Messages, seed::messages)?;
        if source != LoadSource::Snapshot {
            info!(count = messages.len(), "Inbox seeded");
        }
        Ok(Self { messages, storage })
    }

    /// Messages, most recent first.
    #[must_use]
    pub fn list(&self) -> &[Message] {
        &self.messages
    }

    /// Look up a message.
    #[must_use]
    pub fn get(&self, id: &MessageId) -> Option<&Message> {
        self.messages.iter().find(|m| &m.id == id)
    }

    /// Number of messages still marked `New`.
    #[must_use]
    pub fn unread(&self) -> usize {
        self.messages
            .iter()
            .filter(|m| m.status == MessageStatus::New)
            .count()
    }

    /// Accept a contact form submission.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::MissingField` for a blank name, subject or body,
    /// and `StoreError::InvalidEmail` for a malformed address.
    #[instrument(skip(self, form), fields(subject = %form.subject))]
    pub fn submit(&mut self, form: ContactForm) -> Result<Message> {
        let fields = [
            ("name", &form.user),
            ("subject", &form.subject),
            ("message", &form.content),
        ];
        for (name, value) in fields {
            if value.trim().is_empty() {
                return Err(StoreError::MissingField(name));
            }
        }
        let email = Email::parse(&form.email)?;

        let message = Message {
            id: MessageId::generate(),
            user: form.user.trim().to_owned(),
            email,
            subject: form.subject.trim().to_owned(),
            content: form.content.trim().to_owned(),
            date: Utc::now(),
            status: MessageStatus::New,
        };
        self.messages.insert(0, message.clone());
        self.persist()?;
        info!(message_id = %message.id, "Message received");
        Ok(message)
    }

    /// Set the status of a message.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no message has this id.
    #[instrument(skip(self))]
    pub fn update_status(&mut self, id: &MessageId, status: MessageStatus) -> Result<()> {
        let message = self
            .messages
            .iter_mut()
            .find(|m| &m.id == id)
            .ok_or_else(|| StoreError::not_found(Entity::Message, id))?;
        message.status = status;
        self.persist()?;
        info!("Message status updated");
        Ok(())
    }

    /// Remove a message.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no message has this id.
    #[instrument(skip(self))]
    pub fn delete(&mut self, id: &MessageId) -> Result<Message> {
        let index = self
            .messages
            .iter()
            .position(|m| &m.id == id)
            .ok_or_else(|| StoreError::not_found(Entity::Message, id))?;
        let removed = self.messages.remove(index);
        self.persist()?;
        info!("Message deleted");
        Ok(removed)
    }

    /// Case-insensitive substring search over sender, subject and body.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&Message> {
        let needle = query.trim().to_lowercase();
        self.messages.iter().filter(|m| m.matches(&needle)).collect()
    }

    fn persist(&self) -> Result<()> {
        persistence::persist(self.storage.as_ref(), SnapshotKey::Messages, &self.messages)?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;

    fn board() -> (MessageBoard, Arc<MemoryStore>) {
        let storage = Arc::new(MemoryStore::new());
        (MessageBoard::load(storage.clone()).unwrap(), storage)
    }

    fn form() -> ContactForm {
        ContactForm {
            user: "  Dana Reyes ".to_owned(),
            email: "Dana@Example.com".to_owned(),
            subject: "Recipe help".to_owned(),
            content: "How many threads go into a paella for six?".to_owned(),
        }
    }

    #[test]
    fn test_first_run_shows_seed_inbox() {
        let (board, _) = board();
        assert_eq!(board.list().len(), 3);
        assert_eq!(board.unread(), 1);
    }

    #[test]
    fn test_submit_prepends_new_message() {
        let (mut board, storage) = board();
        let message = board.submit(form()).unwrap();

        assert_eq!(message.status, MessageStatus::New);
        assert_eq!(message.user, "Dana Reyes");
        assert_eq!(message.email.as_str(), "dana@example.com");
        assert_eq!(board.list().first(), Some(&message));

        let reloaded = MessageBoard::load(storage).unwrap();
        assert_eq!(reloaded.list().len(), 4);
        assert_eq!(reloaded.get(&message.id), Some(&message));
    }

    #[test]
    fn test_submit_rejects_blank_fields() {
        let (mut board, _) = board();
        let blank_subject = ContactForm {
            subject: "   ".to_owned(),
            ..form()
        };
        let err = board.submit(blank_subject).unwrap_err();
        assert!(matches!(err, StoreError::MissingField("subject")));

        let bad_email = ContactForm {
            email: "not-an-email".to_owned(),
            ..form()
        };
        assert!(matches!(
            board.submit(bad_email).unwrap_err(),
            StoreError::InvalidEmail(_)
        ));
        assert_eq!(board.list().len(), 3);
    }

    #[test]
    fn test_update_status_and_delete() {
        let (mut board, _) = board();
        let id = MessageId::from_static("1");

        board.update_status(&id, MessageStatus::Read).unwrap();
        assert_eq!(board.get(&id).unwrap().status, MessageStatus::Read);
        assert_eq!(board.unread(), 0);

        let removed = board.delete(&id).unwrap();
        assert_eq!(removed.user, "Alice Johnson");
        assert!(board.get(&id).is_none());
    }

    #[test]
    fn test_unknown_message_is_not_found() {
        let (mut board, _) = board();
        let ghost = MessageId::from_static("ghost");
        assert!(board
            .update_status(&ghost, MessageStatus::Replied)
            .unwrap_err()
            .is_not_found());
        assert!(board.delete(&ghost).unwrap_err().is_not_found());
    }

    #[test]
    fn test_deleting_everything_still_persists() {
        let (mut board, storage) = board();
        for id in ["1", "2", "3"] {
            board.delete(&MessageId::from_static(id)).unwrap();
        }
        let reloaded = MessageBoard::load(storage).unwrap();
        assert!(reloaded.list().is_empty());
    }

    #[test]
    fn test_search() {
        let (board, _) = board();
        assert_eq!(board.search("WHOLESALE").len(), 1);
        assert_eq!(board.search("emily").len(), 1);
        assert_eq!(board.search("").len(), 3);
    }
}

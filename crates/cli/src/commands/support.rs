//! Support chat command.
//!
//! # Usage
//!
//! ```bash
//! saffron support ask "Do you ship to Canada?"
//! ```

use std::time::Duration;

use saffron_store::support;
use tracing::info;

use super::CommandError;

/// Answer a shopper question after a short "typing" pause.
pub async fn ask(question: &str, delay: Duration) -> Result<(), CommandError> {
    let answer = support::reply(question)?;

    info!("{}", support::GREETING);
    info!("You: {}", question.trim());
    tokio::time::sleep(delay).await;
    info!("Saffron: {answer}");
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use saffron_store::StoreError;

    use super::*;

    #[tokio::test]
    async fn test_ask_replies() {
        ask("What does shipping cost?", Duration::ZERO).await.unwrap();
    }

    #[tokio::test]
    async fn test_blank_question_fails_before_waiting() {
        let err = ask("  ", Duration::from_secs(3600)).await.unwrap_err();
        assert!(matches!(
            err,
            CommandError::Store(StoreError::MissingField("question"))
        ));
    }
}

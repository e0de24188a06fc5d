//! Canned replies for the storefront support chat.
//!
//! Replies are picked by keyword: the first topic with a keyword contained in
//! the (lowercased) question wins, and anything unmatched gets a hand-off
//! reply.

use tracing::debug;

use crate::error::{Result, StoreError};

/// Opening line shown before the first question.
pub const GREETING: &str =
    "Hello! Welcome to Saffron. How can I assist you with our premium saffron products today?";

/// Reply when no topic matches.
pub const FALLBACK: &str = "Thank you for your message. Our team will get back to you shortly.";

const TOPICS: &[(&[&str], &str)] = &[
    (
        &["saffron", "quality"],
        "Our saffron is sourced directly from the finest fields in Kashmir. It is ISO 3632 \
         Category I certified, ensuring the highest potency of color, aroma, and flavor.",
    ),
    (
        &["price", "cost"],
        "Our Premium Saffron Threads start at $29.99 for 1g. We also offer value packs and gift \
         sets. You can view our full price list in the Shop.",
    ),
    (
        &["shipping", "delivery"],
        "We offer free worldwide shipping on all orders over $100. Standard shipping usually \
         takes 3-5 business days.",
    ),
    (
        &["return", "refund"],
        "We have a 30-day satisfaction guarantee. If you're not completely satisfied with your \
         purchase, you can return it for a full refund.",
    ),
    (
        &["recipe", "cook"],
        "Saffron is great for paella, risotto, and tea! Check out our Recipes page for some \
         delicious ideas.",
    ),
];

/// Pick the canned reply for `question`.
///
/// # Errors
///
/// Returns `StoreError::MissingField` if the question is blank.
pub fn reply(question: &str) -> Result<&'static str> {
    let question = question.trim();
    if question.is_empty() {
        return Err(StoreError::MissingField("question"));
    }
    let needle = question.to_lowercase();
    let answer = TOPICS
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| needle.contains(k)))
        .map_or(FALLBACK, |&(_, answer)| answer);
    debug!(matched = answer != FALLBACK, "Support reply chosen");
    Ok(answer)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_topics() {
        assert!(reply("Is your saffron real?").unwrap().contains("ISO 3632"));
        assert!(reply("How much does it COST").unwrap().contains("$29.99"));
        assert!(reply("delivery to Canada?").unwrap().contains("over $100"));
        assert!(reply("Can I get a refund").unwrap().contains("30-day"));
        assert!(reply("how do I cook with it").unwrap().contains("paella"));
    }

    #[test]
    fn test_first_matching_topic_wins() {
        // "saffron" is checked before "price".
        assert!(reply("saffron price").unwrap().contains("ISO 3632"));
    }

    #[test]
    fn test_unmatched_question_gets_fallback() {
        assert_eq!(reply("Do you have a store in Paris?").unwrap(), FALLBACK);
    }

    #[test]
    fn test_blank_question_is_rejected() {
        for question in ["", "   "] {
            let err = reply(question).unwrap_err();
            assert!(matches!(err, StoreError::MissingField("question")));
        }
    }
}

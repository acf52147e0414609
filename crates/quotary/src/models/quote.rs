use serde::Deserialize;

use quotary_core::quotes::{NewQuote, Quote};
use quotary_core::serde::deserialize_optional_string;

/// Request payload for creating a new quote.
///
/// The owning author comes from the URL path, not the body.
#[derive(Debug, Deserialize)]
pub struct CreateQuote {
    pub quote: String,
}

impl CreateQuote {
    /// Converts the create request into a NewQuote for the given author.
    pub fn into_new_quote(self, author_id: i64) -> NewQuote {
        NewQuote::new(author_id, self.quote)
    }
}

/// Request payload for updating a quote.
///
/// A blank or omitted text field keeps the stored value.
#[derive(Debug, Deserialize)]
pub struct UpdateQuote {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub quote: Option<String>,
}

impl UpdateQuote {
    /// Applies the update to an existing quote.
    pub fn apply_to(self, quote: &mut Quote) {
        if let Some(text) = self.quote {
            quote.quote = text;
        }
    }
}

use serde::{Deserialize, Serialize};

/// An author that owns zero or more quotes.
///
/// Both `name` and `surname` are unique at the column level, so two authors
/// can never share either field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    /// Auto-incrementing row id assigned by the database.
    pub id: i64,
    pub name: String,
    pub surname: String,
}

impl Author {
    /// Returns "name surname" for log lines and conflict messages.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.name, self.surname)
    }
}

/// An author that has not been persisted yet (no id assigned).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAuthor {
    pub name: String,
    pub surname: String,
}

impl NewAuthor {
    pub fn new(name: impl Into<String>, surname: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            surname: surname.into(),
        }
    }

    /// Returns "name surname" for log lines and conflict messages.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.name, self.surname)
    }
}

/// A quote attributed to exactly one author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// Auto-incrementing row id assigned by the database.
    pub id: i64,
    /// The author this quote belongs to.
    pub author_id: i64,
    pub quote: String,
}

/// A quote that has not been persisted yet (no id assigned).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewQuote {
    pub author_id: i64,
    pub quote: String,
}

impl NewQuote {
    pub fn new(author_id: i64, quote: impl Into<String>) -> Self {
        Self {
            author_id,
            quote: quote.into(),
        }
    }
}

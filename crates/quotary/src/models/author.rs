use serde::Deserialize;

use quotary_core::quotes::{Author, NewAuthor};
use quotary_core::serde::deserialize_optional_string;

/// Request payload for creating a new author.
///
/// Both fields are required; a form missing either is rejected by the
/// extractor before the handler runs.
#[derive(Debug, Deserialize)]
pub struct CreateAuthor {
    pub name: String,
    pub surname: String,
}

impl CreateAuthor {
    /// Converts the create request into a NewAuthor.
    pub fn into_new_author(self) -> NewAuthor {
        NewAuthor::new(self.name, self.surname)
    }
}

/// Request payload for updating an author.
///
/// Blank or omitted fields keep the stored value.
#[derive(Debug, Deserialize)]
pub struct UpdateAuthor {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub surname: Option<String>,
}

impl UpdateAuthor {
    /// Applies the update to an existing author.
    pub fn apply_to(self, author: &mut Author) {
        if let Some(name) = self.name {
            author.name = name;
        }
        if let Some(surname) = self.surname {
            author.surname = surname;
        }
    }
}

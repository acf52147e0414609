mod author;
mod quote;

pub use author::{CreateAuthor, UpdateAuthor};
pub use quote::{CreateQuote, UpdateQuote};

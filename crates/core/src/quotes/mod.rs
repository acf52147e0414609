mod types;

pub use types::{Author, NewAuthor, NewQuote, Quote};

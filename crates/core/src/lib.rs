pub mod quotes;
pub mod serde;
pub mod storage;

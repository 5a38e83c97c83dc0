pub mod error;
pub mod types;

pub use error::Error;
pub use types::{ListParams, ListResult, now_rfc3339};

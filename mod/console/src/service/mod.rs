//! Interfaces to the external API. The HTTP client, its retry policy,
//! and user-visible toasts live in the host; the core only supplies
//! scoped filters and consumes results.

pub mod auth;
pub mod reference;
pub mod resource;

pub use auth::AuthApi;
pub use reference::ReferenceApi;
pub use resource::{ResourceApi, ResourceKind};

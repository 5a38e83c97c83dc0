pub mod context;
pub mod session;

pub use context::{ContextState, ContextStore};
pub use session::{SessionState, SessionStore};

pub mod nav;
pub mod org;
pub mod permission;
pub mod session;

pub use nav::{NavItem, VisibleItem};
pub use org::{Process, ProcessId, Sector, SectorId, SectorProcess, SectorProcessId, UserId};
pub use permission::{Degree, Permission, PermissionScope, ScreenKey, SectorProcessRef};
pub use session::{LoginRequest, LoginResponse, Session, User};

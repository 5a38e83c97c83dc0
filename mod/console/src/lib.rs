//! Console core — permission-scoped, context-cascading view model for
//! the replast admin dashboard.
//!
//! # Components
//!
//! - **Session store** — the authenticated user and resolved grants
//! - **Context store** — linked Sector → Process → SectorProcess selection
//! - **Resolver** — pure degree lookup per screen and process
//! - **Composer** — permission-gated navigation with focus fallback
//! - **Scope** — query filters + staleness tickets for data fetches
//!
//! # Usage
//!
//! ```ignore
//! use replast_console::{Console, ConsoleConfig, screens};
//!
//! let console = Console::new(auth, reference, ConsoleConfig::default());
//! console.login("ana", "secret").await?;
//! let composer = console.composer(screens::default_nav());
//! let (filters, ticket) = console.scope();
//! ```

pub mod compose;
pub mod model;
pub mod resolve;
pub mod scope;
pub mod screens;
pub mod service;
pub mod store;

use std::sync::Arc;

use replast_core::Error;

use crate::compose::ViewComposer;
use crate::model::{LoginRequest, NavItem, SectorId, Session};
use crate::scope::{ScopeFilters, ScopeTicket};
use crate::service::{AuthApi, ReferenceApi};
use crate::store::{ContextStore, SessionStore};

/// Configuration for the console core.
#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    /// Module discriminator sent with login.
    pub type_module: i64,

    /// Fixed sector for sector-bound installations (sent with login).
    pub login_sector: Option<SectorId>,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            type_module: 1,
            login_sector: None,
        }
    }
}

/// The console core: owns the stores and the external service handles.
///
/// One instance per running application; created at startup and dropped
/// at shutdown, instead of ambient module-level globals.
pub struct Console {
    auth: Arc<dyn AuthApi>,
    reference: Arc<dyn ReferenceApi>,
    config: ConsoleConfig,
    session: Arc<SessionStore>,
    context: Arc<ContextStore>,
}

impl Console {
    /// Create a console with fresh, empty stores.
    pub fn new(
        auth: Arc<dyn AuthApi>,
        reference: Arc<dyn ReferenceApi>,
        config: ConsoleConfig,
    ) -> Self {
        Self {
            auth,
            reference,
            config,
            session: Arc::new(SessionStore::new()),
            context: Arc::new(ContextStore::new()),
        }
    }

    pub fn session(&self) -> &Arc<SessionStore> {
        &self.session
    }

    pub fn context(&self) -> &Arc<ContextStore> {
        &self.context
    }

    /// Authenticate and bootstrap the operational context.
    ///
    /// On success the session store holds the new session and the
    /// context store is seeded from the reference lists. A failed
    /// bootstrap fetch leaves the session live and the context empty;
    /// the host may call [`refresh_reference_data`] to retry.
    ///
    /// [`refresh_reference_data`]: Console::refresh_reference_data
    pub async fn login(&self, user: &str, pass: &str) -> Result<(), Error> {
        let req = LoginRequest {
            user: user.to_string(),
            pass: pass.to_string(),
            type_module: self.config.type_module,
            id_sector: self.config.login_sector,
        };
        let resp = self.auth.login(&req).await.map_err(|e| match e {
            // A 401 on the login path means bad credentials, not an
            // expired session.
            Error::SessionExpired => Error::InvalidCredentials("invalid credentials".into()),
            e => e,
        })?;

        tracing::info!(user_id = resp.user.id.0, "login succeeded");
        self.session.set(Session {
            user: resp.user,
            token: resp.token,
        });

        self.refresh_reference_data().await
    }

    /// Re-fetch the candidate lists and re-initialize the context.
    /// A still-valid selection is preserved.
    pub async fn refresh_reference_data(&self) -> Result<(), Error> {
        let sectors = self.reference.list_sectors().await?;
        let processes = self.reference.list_processes().await?;
        let sector_processes = self.reference.list_sector_processes(None).await?;
        self.context.initialize(sectors, processes, sector_processes);
        Ok(())
    }

    /// Validate the current token against the server.
    ///
    /// On success the session is replaced with the freshly resolved
    /// user (permission changes take effect). Any failure forcibly
    /// clears both stores and surfaces [`Error::SessionExpired`];
    /// the check is never retried automatically.
    pub async fn validate_session(&self) -> Result<(), Error> {
        let Some(token) = self.session.token() else {
            return Err(Error::SessionExpired);
        };

        match self.auth.check_token(&token).await {
            Ok(user) => {
                self.session.set(Session { user, token });
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "token check failed, clearing session");
                self.session.clear();
                self.context.clear();
                Err(Error::SessionExpired)
            }
        }
    }

    /// Tear down the session and context. Idempotent.
    pub fn logout(&self) {
        tracing::info!("logout");
        self.session.clear();
        self.context.clear();
    }

    /// Build a view composer over the given navigation items, wired to
    /// the live stores.
    pub fn composer(&self, items: Vec<NavItem>) -> ViewComposer {
        ViewComposer::new(self.session.clone(), self.context.clone(), items)
    }

    /// Capture the current scope filters plus a staleness ticket for
    /// the next data fetch.
    pub fn scope(&self) -> (ScopeFilters, ScopeTicket) {
        scope::capture(&self.context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        Degree, LoginResponse, Permission, Process, ProcessId, Sector, SectorProcess,
        SectorProcessId, User, UserId,
    };
    use crate::store::SessionState;

    struct MockAuth {
        /// Token accepted by `check_token`.
        valid_token: Option<String>,
    }

    #[async_trait::async_trait]
    impl AuthApi for MockAuth {
        async fn login(&self, req: &LoginRequest) -> Result<LoginResponse, Error> {
            if req.pass != "secret" {
                return Err(Error::from_status(401, "bad credentials"));
            }
            Ok(LoginResponse {
                user: test_user(),
                token: "tok-1".into(),
            })
        }

        async fn check_token(&self, token: &str) -> Result<User, Error> {
            match &self.valid_token {
                Some(valid) if valid == token => Ok(test_user()),
                _ => Err(Error::from_status(401, "expired")),
            }
        }
    }

    struct MockReference {
        fail: bool,
    }

    #[async_trait::async_trait]
    impl ReferenceApi for MockReference {
        async fn list_sectors(&self) -> Result<Vec<Sector>, Error> {
            if self.fail {
                return Err(Error::Fetch("connection refused".into()));
            }
            Ok(vec![Sector {
                id: SectorId(2),
                name: "Plant A".into(),
            }])
        }

        async fn list_processes(&self) -> Result<Vec<Process>, Error> {
            Ok(vec![
                Process {
                    id: ProcessId(3),
                    name: "Granulation".into(),
                },
                Process {
                    id: ProcessId(9),
                    name: "Washing".into(),
                },
            ])
        }

        async fn list_sector_processes(
            &self,
            _sector: Option<SectorId>,
        ) -> Result<Vec<SectorProcess>, Error> {
            let sector = Sector {
                id: SectorId(2),
                name: "Plant A".into(),
            };
            Ok(vec![SectorProcess {
                id: SectorProcessId(5),
                sector,
                process: Process {
                    id: ProcessId(3),
                    name: "Granulation".into(),
                },
            }])
        }
    }

    fn test_user() -> User {
        User {
            id: UserId(4),
            name: "Ana".into(),
            permissions: vec![Permission::global("colors", Degree::READ)],
        }
    }

    fn console(valid_token: Option<&str>, fail_reference: bool) -> Console {
        Console::new(
            Arc::new(MockAuth {
                valid_token: valid_token.map(String::from),
            }),
            Arc::new(MockReference {
                fail: fail_reference,
            }),
            ConsoleConfig::default(),
        )
    }

    #[tokio::test]
    async fn test_login_populates_session_and_context() {
        let console = console(Some("tok-1"), false);
        console.login("ana", "secret").await.unwrap();

        assert!(console.session().get().is_authenticated());
        let state = console.context().get();
        assert_eq!(state.sector.unwrap().id, SectorId(2));
        assert_eq!(state.process.unwrap().id, ProcessId(3));
        assert_eq!(state.sector_process.unwrap().id, SectorProcessId(5));
    }

    #[tokio::test]
    async fn test_rejected_login_creates_no_session() {
        let console = console(None, false);
        let err = console.login("ana", "wrong").await.unwrap_err();
        assert!(matches!(err, Error::InvalidCredentials(_)));
        assert_eq!(console.session().get(), SessionState::Unauthenticated);
    }

    #[tokio::test]
    async fn test_bootstrap_failure_keeps_session() {
        let console = console(Some("tok-1"), true);
        let err = console.login("ana", "secret").await.unwrap_err();
        assert!(matches!(err, Error::Fetch(_)));
        // Session survives a failed reference fetch; context is empty.
        assert!(console.session().get().is_authenticated());
        assert!(console.context().sector().is_none());
    }

    #[tokio::test]
    async fn test_failed_token_check_clears_everything() {
        let console = console(None, false);
        console.login("ana", "secret").await.unwrap();

        let err = console.validate_session().await.unwrap_err();
        assert!(matches!(err, Error::SessionExpired));
        assert_eq!(console.session().get(), SessionState::Unauthenticated);
        assert!(console.context().sector().is_none());
        assert!(console.composer(screens::default_nav()).visible().is_empty());
    }

    #[tokio::test]
    async fn test_successful_token_check_refreshes_permissions() {
        let console = console(Some("tok-1"), false);
        console.login("ana", "secret").await.unwrap();
        console.validate_session().await.unwrap();
        assert!(console.session().get().is_authenticated());
    }

    #[tokio::test]
    async fn test_validate_without_session_is_expired() {
        let console = console(Some("tok-1"), false);
        let err = console.validate_session().await.unwrap_err();
        assert!(matches!(err, Error::SessionExpired));
    }

    #[tokio::test]
    async fn test_logout_is_idempotent() {
        let console = console(Some("tok-1"), false);
        console.login("ana", "secret").await.unwrap();
        console.logout();
        console.logout();
        assert_eq!(console.session().get(), SessionState::Unauthenticated);
        assert!(console.context().get().sectors.is_empty());
    }

    #[tokio::test]
    async fn test_scope_follows_context_switch() {
        let console = console(Some("tok-1"), false);
        console.login("ana", "secret").await.unwrap();

        let (filters, ticket) = console.scope();
        assert_eq!(filters.id_process, Some(ProcessId(3)));
        assert!(ticket.is_current(console.context()));

        // User switches process before the fetch resolves: the ticket
        // goes stale and a new capture carries the new process.
        console.context().select_process(ProcessId(9)).unwrap();
        assert!(!ticket.is_current(console.context()));

        let (filters, _) = console.scope();
        assert_eq!(filters.id_process, Some(ProcessId(9)));
        assert_eq!(filters.id_sector_process, None);
    }
}

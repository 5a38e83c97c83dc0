use replast_core::{Error, ListParams, ListResult};
use serde::Serialize;
use serde_json::Value;

use crate::model::ScreenKey;
use crate::scope::ScopeFilters;
use crate::screens::screen;

/// Uniform CRUD surface, one implementation per resource kind.
///
/// The core's only obligation toward these endpoints is to supply the
/// scoped filters and to treat any error as "operation failed, assume
/// no state changed".
#[async_trait::async_trait]
pub trait ResourceApi: Send + Sync {
    type Item: Serialize + Send + Sync;

    /// List records under the given scope.
    async fn list(
        &self,
        scope: &ScopeFilters,
        params: &ListParams,
    ) -> Result<ListResult<Self::Item>, Error>;

    async fn get(&self, id: i64) -> Result<Self::Item, Error>;

    async fn create(&self, data: Value) -> Result<Self::Item, Error>;

    async fn update(&self, id: i64, data: Value) -> Result<Self::Item, Error>;

    /// Mark a record inactive; it disappears from default listings but
    /// remains recoverable.
    async fn soft_delete(&self, id: i64) -> Result<(), Error>;

    /// Permanently remove a record.
    async fn hard_delete(&self, id: i64) -> Result<(), Error>;

    /// Reactivate a soft-deleted record.
    async fn recover(&self, id: i64) -> Result<Self::Item, Error>;
}

/// The resource kinds the console manages, each with its API path
/// segment and the screen key it is gated by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Color,
    Lote,
    Group,
    Machine,
    Model,
    Process,
    Sector,
    SectorProcess,
    Formula,
    Product,
    Unity,
    Production,
    Permission,
    User,
}

impl ResourceKind {
    pub const ALL: &'static [ResourceKind] = &[
        ResourceKind::Color,
        ResourceKind::Lote,
        ResourceKind::Group,
        ResourceKind::Machine,
        ResourceKind::Model,
        ResourceKind::Process,
        ResourceKind::Sector,
        ResourceKind::SectorProcess,
        ResourceKind::Formula,
        ResourceKind::Product,
        ResourceKind::Unity,
        ResourceKind::Production,
        ResourceKind::Permission,
        ResourceKind::User,
    ];

    /// API path segment for this kind.
    pub fn path(self) -> &'static str {
        match self {
            ResourceKind::Color => "colors",
            ResourceKind::Lote => "lotes",
            ResourceKind::Group => "groups",
            ResourceKind::Machine => "machines",
            ResourceKind::Model => "models",
            ResourceKind::Process => "processes",
            ResourceKind::Sector => "sectors",
            ResourceKind::SectorProcess => "sector-processes",
            ResourceKind::Formula => "formulas",
            ResourceKind::Product => "products",
            ResourceKind::Unity => "unities",
            ResourceKind::Production => "productions",
            ResourceKind::Permission => "permissions",
            ResourceKind::User => "users",
        }
    }

    /// The screen key this kind's CRUD screen is gated by.
    pub fn screen(self) -> ScreenKey {
        match self {
            ResourceKind::Color => screen::COLORS.into(),
            ResourceKind::Lote => screen::LOTES.into(),
            ResourceKind::Group => screen::GROUPS.into(),
            ResourceKind::Machine => screen::MACHINES.into(),
            ResourceKind::Model => screen::MODELS.into(),
            ResourceKind::Process => screen::PROCESSES.into(),
            ResourceKind::Sector => screen::SECTORS.into(),
            ResourceKind::SectorProcess => screen::SECTOR_PROCESSES.into(),
            ResourceKind::Formula => screen::FORMULAS.into(),
            ResourceKind::Product => screen::PRODUCTS.into(),
            ResourceKind::Unity => screen::UNITIES.into(),
            ResourceKind::Production => screen::PRODUCTIONS.into(),
            ResourceKind::Permission => screen::PERMISSIONS.into(),
            ResourceKind::User => screen::USERS.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_are_unique() {
        let mut paths: Vec<&str> = ResourceKind::ALL.iter().map(|k| k.path()).collect();
        let count = paths.len();
        paths.sort_unstable();
        paths.dedup();
        assert_eq!(paths.len(), count);
    }

    #[test]
    fn test_every_kind_has_a_screen() {
        for kind in ResourceKind::ALL {
            assert!(!kind.screen().as_str().is_empty());
        }
    }
}

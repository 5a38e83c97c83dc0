use replast_core::Error;

use crate::model::{Process, Sector, SectorId, SectorProcess};

/// Read-mostly reference data consumed by the context store's
/// `initialize`.
#[async_trait::async_trait]
pub trait ReferenceApi: Send + Sync {
    async fn list_sectors(&self) -> Result<Vec<Sector>, Error>;

    async fn list_processes(&self) -> Result<Vec<Process>, Error>;

    /// Pairings, optionally restricted to one sector.
    async fn list_sector_processes(
        &self,
        sector: Option<SectorId>,
    ) -> Result<Vec<SectorProcess>, Error>;
}

//! Scoped queries — translating the current context selection into the
//! filter parameters attached to outgoing list/search requests.

use serde::Serialize;

use crate::model::{ProcessId, SectorId, SectorProcessId};
use crate::store::ContextStore;

/// Filter parameters derived from the current selection. Every
/// list/search request carries these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ScopeFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_sector: Option<SectorId>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_process: Option<ProcessId>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_sector_process: Option<SectorProcessId>,

    /// Ignore soft-delete filtering and return the complete set,
    /// inactive records included. Used only by administrative recovery
    /// screens.
    #[serde(skip_serializing_if = "is_false")]
    pub all: bool,
}

fn is_false(b: &bool) -> bool {
    !*b
}

impl ScopeFilters {
    /// Recovery-screen variant: include soft-deleted records.
    pub fn including_inactive(mut self) -> Self {
        self.all = true;
        self
    }

    /// Flatten into query-string pairs, in stable order.
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(id) = self.id_sector {
            pairs.push(("id_sector", id.to_string()));
        }
        if let Some(id) = self.id_process {
            pairs.push(("id_process", id.to_string()));
        }
        if let Some(id) = self.id_sector_process {
            pairs.push(("id_sector_process", id.to_string()));
        }
        if self.all {
            pairs.push(("all", "true".to_string()));
        }
        pairs
    }
}

/// Generation snapshot taken when a fetch is issued.
///
/// A fetch keyed to a selection is stale once the selection changes;
/// the consumer checks the ticket before applying the response and
/// discards superseded results — last-applicable-context-wins, not
/// last-response-wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScopeTicket {
    generation: u64,
}

impl ScopeTicket {
    /// Whether a response fetched under this ticket may still be
    /// applied.
    pub fn is_current(&self, context: &ContextStore) -> bool {
        let current = context.generation();
        if current != self.generation {
            tracing::debug!(
                issued = self.generation,
                current,
                "discarding fetch result from superseded context"
            );
            return false;
        }
        true
    }
}

/// Capture the current selection as filter parameters plus a staleness
/// ticket. Pure derivation — recomputed on every fetch trigger, never
/// cached across a context switch.
pub fn capture(context: &ContextStore) -> (ScopeFilters, ScopeTicket) {
    let state = context.get();
    let filters = ScopeFilters {
        id_sector: state.sector.as_ref().map(|s| s.id),
        id_process: state.process.as_ref().map(|p| p.id),
        id_sector_process: state.sector_process.as_ref().map(|sp| sp.id),
        all: false,
    };
    let ticket = ScopeTicket {
        generation: state.generation(),
    };
    (filters, ticket)
}

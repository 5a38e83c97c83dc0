use replast_core::Error;
use replast_state::{StateCell, SubscriptionId};

use crate::model::{Process, ProcessId, Sector, SectorId, SectorProcess, SectorProcessId};

/// Candidate lists plus the current selection.
///
/// Candidates are read-mostly reference data fetched once per session;
/// the selection is transient UI state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContextState {
    pub sectors: Vec<Sector>,
    pub processes: Vec<Process>,
    pub sector_processes: Vec<SectorProcess>,

    pub sector: Option<Sector>,
    pub process: Option<Process>,
    pub sector_process: Option<SectorProcess>,

    /// Bumped on every observable change; scope tickets compare against
    /// it to discard fetches issued under a superseded selection.
    generation: u64,
}

impl ContextState {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The composite selection invariant: an active pairing always
    /// agrees with the independently tracked sector and process.
    pub fn is_consistent(&self) -> bool {
        match &self.sector_process {
            None => true,
            Some(sp) => {
                self.sector.as_ref().map(|s| s.id) == Some(sp.sector.id)
                    && self.process.as_ref().map(|p| p.id) == Some(sp.process.id)
            }
        }
    }
}

/// Three linked selection slots: sector, process, and the pairing of
/// the two. Selecting a pairing derives its parents; selecting a parent
/// that conflicts with the active pairing clears the pairing
/// (clear-on-conflict, never a silent reassignment).
///
/// All transitions are synchronous in-memory mutations; no network
/// calls originate here.
pub struct ContextStore {
    state: StateCell<ContextState>,
}

impl ContextStore {
    pub fn new() -> Self {
        Self {
            state: StateCell::default(),
        }
    }

    /// Snapshot of candidates + selection.
    pub fn get(&self) -> ContextState {
        self.state.get()
    }

    pub fn sector(&self) -> Option<Sector> {
        self.state.get().sector
    }

    pub fn process(&self) -> Option<Process> {
        self.state.get().process
    }

    pub fn sector_process(&self) -> Option<SectorProcess> {
        self.state.get().sector_process
    }

    pub fn generation(&self) -> u64 {
        self.state.get().generation
    }

    /// Replace the candidate lists and re-validate the selection.
    ///
    /// A still-present selection is kept (refreshed from the new list,
    /// picking up renames); anything else defaults to the first
    /// candidate. The pairing is kept only while it agrees with the
    /// resulting sector and process; otherwise the first agreeing
    /// candidate pairing is chosen. A dangling selection is repaired,
    /// never propagated.
    pub fn initialize(
        &self,
        sectors: Vec<Sector>,
        processes: Vec<Process>,
        sector_processes: Vec<SectorProcess>,
    ) {
        self.state.update(|s| {
            s.sectors = sectors;
            s.processes = processes;
            s.sector_processes = sector_processes;

            s.sector = match s.sector.take() {
                Some(cur) => s
                    .sectors
                    .iter()
                    .find(|c| c.id == cur.id)
                    .cloned()
                    .or_else(|| s.sectors.first().cloned()),
                None => s.sectors.first().cloned(),
            };
            s.process = match s.process.take() {
                Some(cur) => s
                    .processes
                    .iter()
                    .find(|c| c.id == cur.id)
                    .cloned()
                    .or_else(|| s.processes.first().cloned()),
                None => s.processes.first().cloned(),
            };

            let sector_id = s.sector.as_ref().map(|c| c.id);
            let process_id = s.process.as_ref().map(|c| c.id);
            let agrees = |sp: &SectorProcess| {
                Some(sp.sector.id) == sector_id && Some(sp.process.id) == process_id
            };

            let previous = s.sector_process.take();
            s.sector_process = match &previous {
                Some(cur) => s
                    .sector_processes
                    .iter()
                    .find(|c| c.id == cur.id)
                    .filter(|c| agrees(c))
                    .cloned(),
                None => None,
            }
            .or_else(|| s.sector_processes.iter().find(|c| agrees(c)).cloned());

            if previous.is_some() && s.sector_process.as_ref().map(|sp| sp.id)
                != previous.as_ref().map(|sp| sp.id)
            {
                tracing::warn!(
                    previous = ?previous.as_ref().map(|sp| sp.id),
                    "selected sector-process no longer applicable after reload"
                );
            }

            debug_assert!(s.is_consistent());
            s.generation += 1;
        });
        tracing::info!("context candidates initialized");
    }

    /// Select a sector by id. Clears the active pairing when it belongs
    /// to a different sector; the independent process slot is left
    /// untouched.
    pub fn select_sector(&self, id: SectorId) -> Result<(), Error> {
        let mut result = Ok(());
        self.state.set_if(|s| {
            let Some(sector) = s.sectors.iter().find(|c| c.id == id).cloned() else {
                result = Err(Error::Validation(format!("unknown sector {}", id)));
                return false;
            };
            s.sector = Some(sector);
            if s.sector_process.as_ref().is_some_and(|sp| sp.sector.id != id) {
                s.sector_process = None;
            }
            debug_assert!(s.is_consistent());
            s.generation += 1;
            true
        });
        result
    }

    /// Select a process by id, with the same consistency rule against
    /// the active pairing.
    pub fn select_process(&self, id: ProcessId) -> Result<(), Error> {
        let mut result = Ok(());
        self.state.set_if(|s| {
            let Some(process) = s.processes.iter().find(|c| c.id == id).cloned() else {
                result = Err(Error::Validation(format!("unknown process {}", id)));
                return false;
            };
            s.process = Some(process);
            if s.sector_process.as_ref().is_some_and(|sp| sp.process.id != id) {
                s.sector_process = None;
            }
            debug_assert!(s.is_consistent());
            s.generation += 1;
            true
        });
        result
    }

    /// Select a sector-process pairing by id; its sector and process
    /// become the active ones, overwriting any independently selected
    /// values.
    pub fn select_sector_process(&self, id: SectorProcessId) -> Result<(), Error> {
        let mut result = Ok(());
        self.state.set_if(|s| {
            let Some(sp) = s.sector_processes.iter().find(|c| c.id == id).cloned() else {
                result = Err(Error::Validation(format!("unknown sector-process {}", id)));
                return false;
            };
            s.sector = Some(sp.sector.clone());
            s.process = Some(sp.process.clone());
            s.sector_process = Some(sp);
            debug_assert!(s.is_consistent());
            s.generation += 1;
            true
        });
        result
    }

    /// Drop candidates and selection (session teardown). Idempotent.
    pub fn clear(&self) {
        self.state.set_if(|s| {
            let empty = s.sectors.is_empty()
                && s.processes.is_empty()
                && s.sector_processes.is_empty()
                && s.sector.is_none()
                && s.process.is_none()
                && s.sector_process.is_none();
            if empty {
                return false;
            }
            *s = ContextState {
                generation: s.generation + 1,
                ..Default::default()
            };
            true
        });
    }

    /// Subscribe to selection or candidate changes.
    pub fn subscribe<F>(&self, handler: F) -> SubscriptionId
    where
        F: Fn(&ContextState) + Send + Sync + 'static,
    {
        self.state.subscribe(handler)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.state.unsubscribe(id);
    }
}

impl Default for ContextStore {
    fn default() -> Self {
        Self::new()
    }
}
